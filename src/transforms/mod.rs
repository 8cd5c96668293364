//! Rewrite rules that turn Databricks SQL text into SQL Server T-SQL text.
//!
//! These work on raw text, not on a parsed AST. Each rule recognizes one
//! narrow pattern using a regex and rewrites every match (or, for
//! [`UseDatabaseBeforeInsert`], only the first). Rules are applied in order
//! by [`crate::converter::Converter`], and later rules may depend on the
//! output of earlier ones.

use std::borrow::Cow;

pub use self::{
    current_date_minus_to_dateadd::CurrentDateMinusToDateadd,
    interval_days_to_dateadd::IntervalDaysToDateadd,
    qualified_table_to_dbo::QualifiedTableToDbo,
    use_database_before_insert::UseDatabaseBeforeInsert,
};

mod current_date_minus_to_dateadd;
mod interval_days_to_dateadd;
mod qualified_table_to_dbo;
mod use_database_before_insert;

/// A rewrite rule applied to the text of a macro body.
pub trait Transform {
    /// A short name for this transform, used in logs.
    fn name(&self) -> &'static str;

    /// Rewrite `sql`. `database` is the SQL Server database that the
    /// converted macro will run against.
    ///
    /// Returns [`Cow::Borrowed`] if nothing matched, so that callers can
    /// tell whether the rule fired.
    fn transform<'sql>(&self, sql: &'sql str, database: &str) -> Cow<'sql, str>;
}

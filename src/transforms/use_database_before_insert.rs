//! Select the target database before the first `INSERT`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::Transform;

/// Only matches after table references have been rewritten to `dbo.`.
static INSERT_INTO_DBO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"INSERT INTO dbo\.").unwrap());

/// Insert `USE database;` and a blank line before the first
/// `INSERT INTO dbo.`. Later inserts run in the same batch, so they are left
/// alone.
pub struct UseDatabaseBeforeInsert;

impl Transform for UseDatabaseBeforeInsert {
    fn name(&self) -> &'static str {
        "UseDatabaseBeforeInsert"
    }

    fn transform<'sql>(&self, sql: &'sql str, database: &str) -> Cow<'sql, str> {
        INSERT_INTO_DBO_RE.replacen(sql, 1, |caps: &Captures| {
            format!("USE {};\n\n{}", database, &caps[0])
        })
    }
}

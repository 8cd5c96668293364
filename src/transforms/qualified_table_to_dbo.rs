//! Transform `catalog.schema.table` references into `dbo.table`.

use std::borrow::Cow;

use regex::Regex;

use crate::errors::{Context, Result};

use super::Transform;

/// Transform three-part Unity Catalog table names in one schema into
/// `dbo.table`.
///
/// The converted macros run against a single SQL Server database per
/// source system, so the catalog and schema collapse into `dbo`.
pub struct QualifiedTableToDbo {
    pattern: Regex,
}

impl QualifiedTableToDbo {
    /// Rewrite tables in `catalog.schema`. Both names are matched literally.
    pub fn new(catalog: &str, schema: &str) -> Result<Self> {
        let pattern = format!(
            r"{}\.{}\.(\w+)",
            regex::escape(catalog),
            regex::escape(schema)
        );
        let pattern = Regex::new(&pattern)
            .with_context(|| format!("invalid table prefix `{}.{}`", catalog, schema))?;
        Ok(Self { pattern })
    }
}

impl Transform for QualifiedTableToDbo {
    fn name(&self) -> &'static str {
        "QualifiedTableToDbo"
    }

    fn transform<'sql>(&self, sql: &'sql str, _database: &str) -> Cow<'sql, str> {
        self.pattern.replace_all(sql, "dbo.${1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "origin_simulator_jaffle_corp";

    #[test]
    fn rewrites_tables_in_schema() {
        let erp = QualifiedTableToDbo::new(CATALOG, "erp").unwrap();
        for table in ["orders", "order_items", "customers2"] {
            assert_eq!(
                erp.transform(&format!("{}.erp.{}", CATALOG, table), "db"),
                format!("dbo.{}", table)
            );
        }
    }

    #[test]
    fn only_touches_its_own_schema() {
        let crm = QualifiedTableToDbo::new(CATALOG, "crm").unwrap();
        assert_eq!(
            crm.transform(
                "SELECT * FROM origin_simulator_jaffle_corp.crm.web_sessions \
                 JOIN origin_simulator_jaffle_corp.erp.orders USING (id)",
                "db"
            ),
            "SELECT * FROM dbo.web_sessions \
             JOIN origin_simulator_jaffle_corp.erp.orders USING (id)"
        );
    }

    #[test]
    fn dots_in_catalog_are_literal() {
        let rule = QualifiedTableToDbo::new("a.b", "erp").unwrap();
        assert!(matches!(rule.transform("aXb.erp.orders", "db"), Cow::Borrowed(_)));
        assert_eq!(rule.transform("a.b.erp.orders", "db"), "dbo.orders");
    }
}

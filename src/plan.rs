//! Which macros to convert, what to call them, and which database they use.

use std::path::Path;

use serde::Deserialize;

use crate::errors::{Context, Result};

/// A request to convert one Databricks macro.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ConversionRequest {
    /// The Databricks macro to read.
    pub source_name: String,
    /// The name of the generated SQL Server macro.
    pub target_name: String,
    /// The SQL Server database that the macro's `INSERT`s run against.
    pub database: String,
}

impl ConversionRequest {
    /// Create a new request.
    pub fn new(
        source_name: impl Into<String>,
        target_name: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            target_name: target_name.into(),
            database: database.into(),
        }
    }
}

/// The usual name for the SQL Server version of a Databricks macro.
pub fn sqlserver_name_for(source_name: &str) -> String {
    source_name.replacen("_databricks_", "_sqlserver_", 1)
}

/// Macros converted by default: the shop baseline, then three days of
/// deltas. `(macro suffix, database)`.
static DEFAULT_MACROS: &[(&str, &str)] = &[
    // Shop baseline data.
    ("baseline_shop_orders", "jaffle_shop"),
    ("baseline_shop_order_items", "jaffle_shop"),
    // Day 01 deltas.
    ("deltas_day_01_shop_customers", "jaffle_shop"),
    ("deltas_day_01_shop_orders", "jaffle_shop"),
    ("deltas_day_01_shop_orders_updates", "jaffle_shop"),
    ("deltas_day_01_shop_order_items", "jaffle_shop"),
    ("deltas_day_01_shop_payments", "jaffle_shop"),
    ("deltas_day_01_crm_email_activity", "jaffle_crm"),
    ("deltas_day_01_crm_web_sessions", "jaffle_crm"),
    // Day 02 deltas.
    ("deltas_day_02_shop_customers", "jaffle_shop"),
    ("deltas_day_02_shop_orders", "jaffle_shop"),
    ("deltas_day_02_shop_orders_updates", "jaffle_shop"),
    ("deltas_day_02_shop_order_items", "jaffle_shop"),
    ("deltas_day_02_shop_payments", "jaffle_shop"),
    ("deltas_day_02_shop_products_updates", "jaffle_shop"),
    ("deltas_day_02_crm_email_activity", "jaffle_crm"),
    ("deltas_day_02_crm_web_sessions", "jaffle_crm"),
    // Day 03 deltas.
    ("deltas_day_03_shop_customers", "jaffle_shop"),
    ("deltas_day_03_shop_orders", "jaffle_shop"),
    ("deltas_day_03_shop_orders_updates", "jaffle_shop"),
    ("deltas_day_03_shop_order_items", "jaffle_shop"),
    ("deltas_day_03_shop_payments", "jaffle_shop"),
    ("deltas_day_03_crm_email_activity", "jaffle_crm"),
    ("deltas_day_03_crm_web_sessions", "jaffle_crm"),
];

/// The built-in plan.
pub fn default_plan() -> Vec<ConversionRequest> {
    DEFAULT_MACROS
        .iter()
        .map(|(suffix, database)| {
            ConversionRequest::new(
                format!("_get_databricks_{}", suffix),
                format!("_get_sqlserver_{}", suffix),
                *database,
            )
        })
        .collect()
}

/// Load a plan from a CSV file with `source_name`, `target_name` and
/// `database` columns.
pub fn load_plan(csv_path: &Path) -> Result<Vec<ConversionRequest>> {
    let rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open plan file: {}", csv_path.display()))?;
    read_plan(rdr, csv_path)
}

fn read_plan<R: std::io::Read>(
    mut rdr: csv::Reader<R>,
    csv_path: &Path,
) -> Result<Vec<ConversionRequest>> {
    let mut plan = vec![];
    for result in rdr.deserialize() {
        let request: ConversionRequest = result
            .with_context(|| format!("Failed to parse plan file: {}", csv_path.display()))?;
        plan.push(request);
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_plan_matches_sqlserver_names() {
        let plan = default_plan();
        assert_eq!(plan.len(), 24);
        assert_eq!(
            plan[0],
            ConversionRequest::new(
                "_get_databricks_baseline_shop_orders",
                "_get_sqlserver_baseline_shop_orders",
                "jaffle_shop",
            )
        );
        for request in &plan {
            assert_eq!(request.target_name, sqlserver_name_for(&request.source_name));
            let expected_db = if request.source_name.contains("_crm_") {
                "jaffle_crm"
            } else {
                "jaffle_shop"
            };
            assert_eq!(request.database, expected_db);
        }
    }

    #[test]
    fn sqlserver_name_replaces_dialect() {
        assert_eq!(
            sqlserver_name_for("_get_databricks_deltas_day_01_crm_web_sessions"),
            "_get_sqlserver_deltas_day_01_crm_web_sessions"
        );
        assert_eq!(sqlserver_name_for("no_dialect_here"), "no_dialect_here");
    }

    #[test]
    fn reads_plan_csv() {
        let csv = "source_name,target_name,database\n\
                   _get_databricks_a,_get_sqlserver_a,jaffle_shop\n\
                   _get_databricks_b,custom_b,jaffle_crm\n";
        let rdr = csv::Reader::from_reader(csv.as_bytes());
        assert_eq!(
            read_plan(rdr, Path::new("plan.csv")).unwrap(),
            vec![
                ConversionRequest::new("_get_databricks_a", "_get_sqlserver_a", "jaffle_shop"),
                ConversionRequest::new("_get_databricks_b", "custom_b", "jaffle_crm"),
            ]
        );
    }

    #[test]
    fn rejects_rows_with_missing_columns() {
        let csv = "source_name,target_name,database\n_get_databricks_a,_get_sqlserver_a\n";
        let rdr = csv::Reader::from_reader(csv.as_bytes());
        let err = read_plan(rdr, Path::new("plan.csv")).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse plan file: plan.csv");
    }

    #[test]
    fn missing_plan_file_is_an_error() {
        let err = load_plan(Path::new("does/not/exist.csv")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to open plan file: does/not/exist.csv"
        );
    }
}

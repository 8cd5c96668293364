//! Convert Databricks macro bodies to SQL Server.

use std::{borrow::Cow, fmt};

use tracing::debug;

use crate::{
    errors::Result,
    transforms::{
        CurrentDateMinusToDateadd, IntervalDaysToDateadd, QualifiedTableToDbo, Transform,
        UseDatabaseBeforeInsert,
    },
};

/// The Unity Catalog catalog that our Databricks macros read from.
pub const DEFAULT_CATALOG: &str = "origin_simulator_jaffle_corp";

/// The schemas inside [`DEFAULT_CATALOG`] that map to `dbo`.
pub const DEFAULT_SCHEMAS: &[&str] = &["erp", "crm"];

/// An ordered list of [`Transform`]s.
pub struct Converter {
    transforms: Vec<Box<dyn Transform>>,
}

impl Converter {
    /// Create a converter that applies `transforms` in order.
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        Self { transforms }
    }

    /// The standard Databricks to SQL Server rules. Table references in each
    /// of `catalog.schemas` are rewritten to `dbo`. This must happen before
    /// we add `USE`, which looks for `INSERT INTO dbo.`.
    pub fn databricks_to_sqlserver<S: AsRef<str>>(catalog: &str, schemas: &[S]) -> Result<Self> {
        let mut transforms: Vec<Box<dyn Transform>> = vec![
            Box::new(IntervalDaysToDateadd),
            Box::new(CurrentDateMinusToDateadd),
        ];
        for schema in schemas {
            transforms.push(Box::new(QualifiedTableToDbo::new(catalog, schema.as_ref())?));
        }
        transforms.push(Box::new(UseDatabaseBeforeInsert));
        Ok(Self::new(transforms))
    }

    /// Convert a macro body for use against `database`.
    pub fn convert(&self, body: &str, database: &str) -> String {
        let mut sql = body.to_owned();
        for transform in &self.transforms {
            let rewritten = match transform.transform(&sql, database) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            debug!(transform = transform.name(), "applied transform");
            sql = rewritten;
        }
        sql
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.transforms.iter().map(|t| t.name()))
            .finish()
    }
}

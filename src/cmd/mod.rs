//! Our subcommands.

use std::{fs, path::Path};

use clap::Args;

use crate::{
    converter::{Converter, DEFAULT_CATALOG, DEFAULT_SCHEMAS},
    errors::{format_err, Context, Result},
};

pub mod convert;
pub mod generate;
pub mod list;

/// Options controlling which table references we rewrite.
#[derive(Debug, Args)]
pub struct RuleOpt {
    /// The Databricks catalog that source macros read from.
    #[clap(long, default_value = DEFAULT_CATALOG)]
    catalog: String,

    /// A schema in `--catalog` whose tables map to `dbo`. May be repeated.
    #[clap(long = "schema", default_values = DEFAULT_SCHEMAS.iter().copied())]
    schemas: Vec<String>,
}

impl RuleOpt {
    /// Build a converter using these options.
    pub fn converter(&self) -> Result<Converter> {
        if self.catalog.is_empty() {
            return Err(format_err!("--catalog must not be empty"));
        }
        Converter::databricks_to_sqlserver(&self.catalog, &self.schemas)
    }
}

/// Read a macro source file.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("could not read macro file `{}`", path.display()))
}

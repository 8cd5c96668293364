//! Convert a single macro and print it.

use std::path::PathBuf;

use clap::Parser;
use tracing::instrument;

use crate::{
    errors::{Error, Result},
    macro_block::Macro,
    plan::sqlserver_name_for,
};

use super::{read_source, RuleOpt};

/// Convert one Databricks macro and print the SQL Server version.
#[derive(Debug, Parser)]
pub struct ConvertOpt {
    /// The Databricks macro file to read.
    source: PathBuf,

    /// The macro to convert.
    macro_name: String,

    /// The name of the generated macro. Defaults to `macro_name` with
    /// `_databricks_` replaced by `_sqlserver_`.
    #[clap(long)]
    target_name: Option<String>,

    /// The SQL Server database to `USE` before the first insert.
    #[clap(long, visible_alias = "db", default_value = "jaffle_shop")]
    database: String,

    #[clap(flatten)]
    rules: RuleOpt,
}

/// Convert one macro.
#[instrument(skip(opt))]
pub fn cmd_convert(opt: &ConvertOpt) -> Result<()> {
    let converter = opt.rules.converter()?;
    let source = read_source(&opt.source)?;

    let found = Macro::extract(&source, &opt.macro_name)
        .ok_or_else(|| Error::macro_not_found(&opt.macro_name))?;
    let target_name = opt
        .target_name
        .clone()
        .unwrap_or_else(|| sqlserver_name_for(&opt.macro_name));
    let converted = Macro::new(target_name, converter.convert(&found.body, &opt.database));

    println!("{}", converted.render());
    Ok(())
}

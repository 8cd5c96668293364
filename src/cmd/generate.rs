//! Generate SQL Server macros from Databricks macros.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, instrument};

use crate::{
    batch::convert_batch,
    errors::Result,
    macro_block::join_macros,
    output::{write_generated, WriteMode},
    plan::{default_plan, load_plan},
};

use super::{read_source, RuleOpt};

/// Generate SQL Server macros and append them to the SQL Server macro file.
#[derive(Debug, Parser)]
pub struct GenerateOpt {
    /// The Databricks macro file to read.
    #[clap(long, default_value = "macros/_internal/_sql_databricks.sql")]
    source: PathBuf,

    /// The SQL Server macro file to add generated macros to. Must exist.
    #[clap(long, default_value = "macros/_internal/_sql_sqlserver.sql")]
    output: PathBuf,

    /// A CSV file with `source_name`, `target_name` and `database` columns.
    /// Defaults to the built-in list of baseline and delta macros.
    #[clap(long)]
    plan: Option<PathBuf>,

    /// Replace the section written by an earlier run, instead of adding a
    /// second copy.
    #[clap(long)]
    replace_generated: bool,

    #[clap(flatten)]
    rules: RuleOpt,
}

/// Convert every macro in the plan and write the results.
#[instrument(skip(opt))]
pub fn cmd_generate(opt: &GenerateOpt) -> Result<()> {
    let plan = match &opt.plan {
        Some(path) => load_plan(path)?,
        None => default_plan(),
    };
    let converter = opt.rules.converter()?;
    let source = read_source(&opt.source)?;

    let batch = convert_batch(&source, &plan, &converter);
    for outcome in &batch.outcomes {
        println!("{}", outcome);
    }
    info!(
        converted = batch.macros.len(),
        missing = batch.missing_count(),
        "converted plan"
    );

    let mode = if opt.replace_generated {
        WriteMode::ReplaceGenerated
    } else {
        WriteMode::Append
    };
    write_generated(&opt.output, &join_macros(&batch.macros), mode)?;

    println!(
        "\nAppended {} macros to {}",
        batch.macros.len(),
        opt.output.display()
    );
    Ok(())
}

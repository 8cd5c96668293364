use std::process::exit;

use clap::Parser;

mod batch;
mod cmd;
mod converter;
mod errors;
mod macro_block;
mod output;
mod plan;
mod transforms;

use cmd::{
    convert::{cmd_convert, ConvertOpt},
    generate::{cmd_generate, GenerateOpt},
    list::{cmd_list, ListOpt},
};
use tracing::info_span;
use tracing_subscriber::EnvFilter;

/// Generate SQL Server macros from Databricks macros.
#[derive(Debug, Parser)]
#[clap(version)]
enum Opt {
    /// Convert the standard set of macros and add them to the SQL Server
    /// macro file.
    Generate(GenerateOpt),
    /// Convert a single macro and print it.
    Convert(ConvertOpt),
    /// List the macros defined in a file.
    List(ListOpt),
}

fn main() {
    // Configure tracing. Logs go to stderr, so that `convert` output can be
    // redirected.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let _span = info_span!("macrogen").entered();

    let opt = Opt::parse();
    let result = match opt {
        Opt::Generate(generate_opt) => cmd_generate(&generate_opt),
        Opt::Convert(convert_opt) => cmd_convert(&convert_opt),
        Opt::List(list_opt) => cmd_list(&list_opt),
    };
    if let Err(e) = result {
        e.emit();
        exit(1);
    }
}

//! List the macros in a file.

use std::path::PathBuf;

use clap::Parser;

use crate::{errors::Result, macro_block::macro_names};

use super::read_source;

/// List the argument-free macros defined in a file.
#[derive(Debug, Parser)]
pub struct ListOpt {
    /// The macro file to read.
    source: PathBuf,
}

/// Print one macro name per line.
pub fn cmd_list(opt: &ListOpt) -> Result<()> {
    let source = read_source(&opt.source)?;
    for name in macro_names(&source) {
        println!("{}", name);
    }
    Ok(())
}

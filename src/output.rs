//! Writing generated macros to the SQL Server macro file.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

use tracing::{debug, instrument};

use crate::errors::{format_err, Context, Result};

/// Comment placed above the generated macros.
pub const BANNER: &str = "\
{# ============================================================================
   GENERATED BASELINE AND DELTA MACROS
   Auto-generated from Databricks macros
   ============================================================================ #}";

/// Comment placed below the generated macros, so that a later run can tell
/// where they stop.
pub const END_MARKER: &str = "{# END GENERATED BASELINE AND DELTA MACROS #}";

/// How to treat a section generated by an earlier run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Always append, even if the file already has a generated section.
    #[default]
    Append,
    /// Drop earlier generated sections before appending the new one.
    ReplaceGenerated,
}

/// Build the text appended to the output file for `fragment`.
pub fn generated_section(fragment: &str) -> String {
    format!("\n\n{}\n\n{}\n{}\n", BANNER, fragment, END_MARKER)
}

/// Remove every generated section from `existing`, keeping everything else.
///
/// A section runs from the blank lines in front of [`BANNER`] through the
/// line holding the next [`END_MARKER`]. Returns `None` if a banner has no
/// end marker after it, because then we can't tell where hand-written text
/// starts again.
pub fn strip_generated_sections(existing: &str) -> Option<String> {
    let mut kept = String::with_capacity(existing.len());
    let mut rest = existing;
    while let Some(start) = rest.find(BANNER) {
        let after_banner = start + BANNER.len();
        let end = after_banner + rest[after_banner..].find(END_MARKER)? + END_MARKER.len();
        let before = &rest[..start];
        kept.push_str(before.strip_suffix("\n\n").unwrap_or(before));
        rest = &rest[end..];
        rest = rest.strip_prefix('\n').unwrap_or(rest);
    }
    kept.push_str(rest);
    Some(kept)
}

/// Write `fragment` under our banner at the end of `path`, which must
/// already exist.
#[instrument(skip(fragment))]
pub fn write_generated(path: &Path, fragment: &str, mode: WriteMode) -> Result<()> {
    let existing = fs::read_to_string(path)
        .with_context(|| format!("could not read output file `{}`", path.display()))?;
    let section = generated_section(fragment);
    match mode {
        WriteMode::ReplaceGenerated if existing.contains(BANNER) => {
            debug!("replacing earlier generated sections");
            let mut contents = strip_generated_sections(&existing).ok_or_else(|| {
                format_err!(
                    "refusing to replace generated macros in `{}`: a generated section has no \
                     end marker, so hand-written macros after it could be lost",
                    path.display()
                )
            })?;
            contents.push_str(&section);
            fs::write(path, contents)
                .with_context(|| format!("could not write output file `{}`", path.display()))
        }
        _ => {
            let mut file = OpenOptions::new()
                .append(true)
                .open(path)
                .with_context(|| format!("could not open output file `{}`", path.display()))?;
            file.write_all(section.as_bytes())
                .with_context(|| format!("could not append to output file `{}`", path.display()))
        }
    }
}

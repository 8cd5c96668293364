//! Convert a whole plan's worth of macros from one source file.

use std::fmt;

use tracing::{debug, warn};

use crate::{converter::Converter, macro_block::Macro, plan::ConversionRequest};

/// What happened to one [`ConversionRequest`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MacroOutcome {
    Converted {
        source_name: String,
        target_name: String,
    },
    Missing {
        source_name: String,
    },
}

impl fmt::Display for MacroOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacroOutcome::Converted {
                source_name,
                target_name,
            } => write!(f, "Converted {} -> {}", source_name, target_name),
            MacroOutcome::Missing { source_name } => {
                write!(f, "Warning: Could not find macro {}", source_name)
            }
        }
    }
}

/// The result of converting a plan.
#[derive(Debug, Default)]
pub struct Batch {
    /// Converted macros, in plan order.
    pub macros: Vec<Macro>,
    /// One outcome per request, in plan order.
    pub outcomes: Vec<MacroOutcome>,
}

impl Batch {
    /// How many requests named a macro that we couldn't find.
    pub fn missing_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, MacroOutcome::Missing { .. }))
            .count()
    }
}

/// Convert each macro in `plan` found in `source`. Missing macros are
/// recorded and skipped.
pub fn convert_batch(source: &str, plan: &[ConversionRequest], converter: &Converter) -> Batch {
    let mut batch = Batch::default();
    for request in plan {
        match Macro::extract(source, &request.source_name) {
            Some(found) => {
                debug!(
                    source_name = %request.source_name,
                    database = %request.database,
                    "converting macro"
                );
                let body = converter.convert(&found.body, &request.database);
                batch.macros.push(Macro::new(&request.target_name, body));
                batch.outcomes.push(MacroOutcome::Converted {
                    source_name: request.source_name.clone(),
                    target_name: request.target_name.clone(),
                });
            }
            None => {
                warn!(source_name = %request.source_name, "macro not found");
                batch.outcomes.push(MacroOutcome::Missing {
                    source_name: request.source_name.clone(),
                });
            }
        }
    }
    batch
}

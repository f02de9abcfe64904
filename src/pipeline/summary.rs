//! Human-readable summary of a chosen pipeline, for the confirmation view.

use crate::catalog::Catalog;
use crate::error::{PrepError, Result};
use crate::pipeline::Pipeline;
use std::fmt;

/// One line of the confirmation summary: the step's 1-based position, its
/// display name, and its `Name=value` pairs in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary {
    position: usize,
    name: &'static str,
    inputs: Vec<(&'static str, String)>,
}

impl StepSummary {
    /// 1-based position of the step in the pipeline.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Display name of the catalog entry.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `(input name, value)` pairs, in input order.
    pub fn inputs(&self) -> &[(&'static str, String)] {
        &self.inputs
    }
}

impl fmt::Display for StepSummary {
    /// `1: Normalize  Min=0 Max=1` for parameterized steps,
    /// `2: Standardize` for zero-input ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.name)?;
        for (i, (name, value)) in self.inputs.iter().enumerate() {
            let sep = if i == 0 { "  " } else { " " };
            write!(f, "{sep}{name}={value}")?;
        }
        Ok(())
    }
}

/// Render the pipeline as an ordered list of [`StepSummary`].
///
/// Purely presentational: no validation happens here, that was done while
/// the inputs were entered. Every step id must resolve against the
/// catalog; a pipeline holding an unresolvable id is a contract violation
/// and yields an error rather than a partial summary.
pub fn summarize(pipeline: &Pipeline, catalog: &Catalog) -> Result<Vec<StepSummary>> {
    pipeline
        .iter()
        .enumerate()
        .map(|(i, chosen)| {
            let step = catalog
                .get(chosen.step_id())
                .ok_or_else(|| PrepError::UnknownStep(chosen.step_id().to_string()))?;
            let inputs = step
                .input_names()
                .iter()
                .zip(chosen.inputs())
                .map(|(&name, value)| (name, value.clone()))
                .collect();
            Ok(StepSummary {
                position: i + 1,
                name: step.name(),
                inputs,
            })
        })
        .collect()
}

//! Pipeline state: the ordered sequence of steps a user has chosen.
//!
//! A [`Pipeline`] is owned by one UI session. Steps are appended when the
//! user selects them, their inputs are edited in place, and deleting a
//! position really removes it, so the sequence handed to the execution
//! backend is exactly what the user sees.

mod summary;

pub use summary::{summarize, StepSummary};

use crate::catalog::{Catalog, TransformationStep, Validation};
use crate::error::{PrepError, Result};
use serde::{Deserialize, Serialize};

/// One chosen application of a catalog step, with raw input values.
///
/// Serializes to the wire shape `{"stepId": ..., "inputs": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStep {
    #[serde(rename = "stepId")]
    step_id: String,
    inputs: Vec<String>,
}

impl PipelineStep {
    /// A fresh step for the given catalog entry, inputs empty but sized to
    /// the step's arity.
    pub fn new(step: &TransformationStep) -> Self {
        Self {
            step_id: step.id().to_string(),
            inputs: vec![String::new(); step.input_count()],
        }
    }

    /// Identifier of the catalog entry this step applies.
    pub fn step_id(&self) -> &str {
        &self.step_id
    }

    /// Raw input values, in the step's input order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }
}

/// Ordered sequence of [`PipelineStep`], edited by one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pipeline {
    steps: Vec<PipelineStep>,
}

impl Pipeline {
    /// An empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step by catalog id, inputs initially empty.
    ///
    /// Returns the new step's position. The id must resolve; a pipeline
    /// never holds an identifier the catalog does not know.
    pub fn push(&mut self, catalog: &Catalog, step_id: &str) -> Result<usize> {
        let step = catalog
            .get(step_id)
            .ok_or_else(|| PrepError::UnknownStep(step_id.to_string()))?;
        self.steps.push(PipelineStep::new(step));
        Ok(self.steps.len() - 1)
    }

    /// Append a step with its input values supplied up front.
    ///
    /// The inputs must match the step's arity; rule validation is separate
    /// (see [`check`](Self::check)).
    pub fn push_with_inputs(
        &mut self,
        catalog: &Catalog,
        step_id: &str,
        inputs: Vec<String>,
    ) -> Result<usize> {
        let step = catalog
            .get(step_id)
            .ok_or_else(|| PrepError::UnknownStep(step_id.to_string()))?;
        if inputs.len() != step.input_count() {
            return Err(PrepError::InputCountMismatch {
                step: step_id.to_string(),
                expected: step.input_count(),
                got: inputs.len(),
            });
        }
        self.steps.push(PipelineStep {
            step_id: step.id().to_string(),
            inputs,
        });
        Ok(self.steps.len() - 1)
    }

    /// Overwrite one input value of the step at `position`.
    pub fn set_input(&mut self, position: usize, input: usize, value: impl Into<String>) -> Result<()> {
        let len = self.steps.len();
        let step = self
            .steps
            .get_mut(position)
            .ok_or(PrepError::PositionOutOfRange { position, len })?;
        let arity = step.inputs.len();
        let slot = step
            .inputs
            .get_mut(input)
            .ok_or(PrepError::PositionOutOfRange {
                position: input,
                len: arity,
            })?;
        *slot = value.into();
        Ok(())
    }

    /// Delete the step at `position` and return it.
    ///
    /// Later steps shift up; the removed step is gone from any subsequent
    /// submission.
    pub fn remove(&mut self, position: usize) -> Result<PipelineStep> {
        if position >= self.steps.len() {
            return Err(PrepError::PositionOutOfRange {
                position,
                len: self.steps.len(),
            });
        }
        Ok(self.steps.remove(position))
    }

    /// The steps, in execution order.
    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    pub fn iter(&self) -> impl Iterator<Item = &PipelineStep> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Validate every step's inputs against the catalog, in order.
    ///
    /// Errors if any step no longer resolves or has drifted from its
    /// step's arity; both would be contract violations, not user input
    /// mistakes.
    pub fn check(&self, catalog: &Catalog) -> Result<Vec<Validation>> {
        self.steps
            .iter()
            .map(|step| catalog.validate(&step.step_id, &step.inputs))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Pipeline {
    type Item = &'a PipelineStep;
    type IntoIter = std::slice::Iter<'a, PipelineStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

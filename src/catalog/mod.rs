//! The transformation catalog.
//!
//! A static registry of the preprocessing steps a user can put into a
//! pipeline: display metadata, input arity, and validation rules, keyed by
//! a stable string identifier. The catalog is built once, never mutated,
//! and read concurrently by any number of sessions.
//!
//! # Example
//!
//! ```
//! use tsprep::catalog::{Catalog, Validation};
//!
//! let catalog = Catalog::global();
//!
//! assert!(catalog.index_of("norm").is_some());
//! assert!(catalog.index_of("").is_none());
//!
//! let outcome = catalog
//!     .validate("norm", &["0".to_string(), "1".to_string()])
//!     .unwrap();
//! assert_eq!(outcome, Validation::Valid);
//! ```

mod rules;

pub use rules::Rule;

use crate::error::{PrepError, Result};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;

/// One entry of the transformation catalog.
///
/// Immutable display metadata plus the validation rules for the step's
/// scalar inputs. `input_count` is the length of [`input_names`]; a step
/// with zero inputs carries no rules.
///
/// [`input_names`]: TransformationStep::input_names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformationStep {
    name: &'static str,
    id: &'static str,
    description: &'static str,
    citation: &'static str,
    input_names: &'static [&'static str],
    rules: &'static [Rule],
}

impl TransformationStep {
    /// Displayed name of the step.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stable machine-readable identifier, unique within the catalog.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Displayed description of what the step does.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Displayed citation, empty when the step has none.
    pub fn citation(&self) -> &'static str {
        self.citation
    }

    /// Number of scalar inputs the step requires.
    pub fn input_count(&self) -> usize {
        self.input_names.len()
    }

    /// Labels of the inputs, in the order they must be supplied.
    pub fn input_names(&self) -> &'static [&'static str] {
        self.input_names
    }

    /// Validation rules, in evaluation order.
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Failure messages index-aligned with [`rules`](Self::rules).
    pub fn rule_descriptions(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.description()).collect()
    }

    /// Evaluate every rule against the full input tuple.
    ///
    /// All rules run regardless of earlier failures so the user sees every
    /// problem at once. Arity must already match; [`Catalog::validate`]
    /// enforces that.
    fn check_rules(&self, inputs: &[String]) -> Validation {
        let failures: Vec<&'static str> = self
            .rules
            .iter()
            .filter(|rule| !rule.check(inputs))
            .map(|rule| rule.description())
            .collect();

        if failures.is_empty() {
            Validation::Valid
        } else {
            Validation::Invalid(failures)
        }
    }
}

impl Serialize for TransformationStep {
    /// Serializes to the shape the presentation layer consumes:
    /// `{name, id, description, citation, inputCount, inputNames, rules,
    /// ruleDescriptions}`.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TransformationStep", 8)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("id", self.id)?;
        state.serialize_field("description", self.description)?;
        state.serialize_field("citation", self.citation)?;
        state.serialize_field("inputCount", &self.input_count())?;
        state.serialize_field("inputNames", self.input_names)?;
        state.serialize_field("rules", self.rules)?;
        state.serialize_field("ruleDescriptions", &self.rule_descriptions())?;
        state.end()
    }
}

/// Outcome of validating a step's inputs.
///
/// Rule failures are a normal outcome, not an error: every failed rule's
/// description is collected in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Validation {
    /// All rules passed.
    Valid,
    /// Descriptions of every failed rule, in rule order.
    Invalid(Vec<&'static str>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Failed-rule descriptions; empty when valid.
    pub fn failures(&self) -> &[&'static str] {
        match self {
            Validation::Valid => &[],
            Validation::Invalid(failures) => failures,
        }
    }
}

/// The step registry: an insertion-ordered list of [`TransformationStep`]
/// with lookup and validation operations.
#[derive(Debug, Clone)]
pub struct Catalog {
    steps: Vec<TransformationStep>,
}

impl Catalog {
    /// Build a catalog from the given entries.
    ///
    /// Rejects duplicate identifiers and zero-input steps that carry
    /// rules.
    pub fn new(steps: Vec<TransformationStep>) -> Result<Self> {
        for (i, step) in steps.iter().enumerate() {
            if steps[..i].iter().any(|other| other.id == step.id) {
                return Err(PrepError::InvalidEntry {
                    id: step.id.to_string(),
                    reason: "duplicate step id".to_string(),
                });
            }
            if step.input_count() == 0 && !step.rules.is_empty() {
                return Err(PrepError::InvalidEntry {
                    id: step.id.to_string(),
                    reason: "zero-input step must not carry rules".to_string(),
                });
            }
        }
        Ok(Self { steps })
    }

    /// The builtin catalog of preprocessing steps, in their fixed order.
    pub fn builtin() -> Self {
        Self {
            steps: BUILTIN_STEPS.to_vec(),
        }
    }

    /// Process-wide builtin catalog, initialized on first use.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::builtin)
    }

    /// All entries, in stable insertion order.
    pub fn steps(&self) -> &[TransformationStep] {
        &self.steps
    }

    /// Position of the entry with the given id, or `None` when the id is
    /// empty or unknown. Never fails for well-formed but unknown ids.
    pub fn index_of(&self, step_id: &str) -> Option<usize> {
        if step_id.is_empty() {
            return None;
        }
        self.steps.iter().position(|step| step.id == step_id)
    }

    /// The entry with the given id, if any.
    pub fn get(&self, step_id: &str) -> Option<&TransformationStep> {
        self.index_of(step_id).map(|i| &self.steps[i])
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Validate raw inputs for the step with the given id.
    ///
    /// An unknown `step_id` or an input tuple of the wrong length is a
    /// caller contract violation and returns an error, distinct from
    /// [`Validation::Invalid`] which reports ordinary rule failures.
    pub fn validate(&self, step_id: &str, inputs: &[String]) -> Result<Validation> {
        let step = self
            .get(step_id)
            .ok_or_else(|| PrepError::UnknownStep(step_id.to_string()))?;

        if inputs.len() != step.input_count() {
            return Err(PrepError::InputCountMismatch {
                step: step_id.to_string(),
                expected: step.input_count(),
                got: inputs.len(),
            });
        }

        Ok(step.check_rules(inputs))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The fixed step vocabulary. Order and identifiers are a compatibility
/// contract with stored pipelines and the execution backend; append new
/// steps at the end.
const BUILTIN_STEPS: &[TransformationStep] = &[
    TransformationStep {
        name: "Normalize",
        id: "norm",
        description: "Rescale the range of the data to be between a min and max.",
        citation: "",
        input_names: &["Min", "Max"],
        rules: &[Rule::NormBoundsOrdered],
    },
    TransformationStep {
        name: "Standardize",
        id: "stand",
        description: "Transform the data to have a mean of 0 and a standard deviation of 1.",
        citation: "",
        input_names: &[],
        rules: &[],
    },
    TransformationStep {
        name: "Box-Cox transformation",
        id: "box-cox",
        description: "Power transformation using the Box-Cox method. Data are scaled to \
                      positive values first and returned standardized; constant data cannot \
                      be transformed.",
        citation: "",
        input_names: &[],
        rules: &[],
    },
    TransformationStep {
        name: "Difference transformation",
        id: "dif_trans",
        description: "Subtract each row's predecessor from it; rows left without a value \
                      are dropped.",
        citation: "",
        input_names: &[],
        rules: &[],
    },
    TransformationStep {
        name: "Divide standard deviations",
        id: "div_stand_devs",
        description: "Divide each column by its standard deviation.",
        citation: "",
        input_names: &[],
        rules: &[],
    },
    TransformationStep {
        name: "Moving average smoother",
        id: "moving_avg_smoother",
        description: "Smooth the data by averaging over a window of the given number of \
                      data points; rows left without a value are dropped.",
        citation: "",
        input_names: &["Window size"],
        rules: &[Rule::WindowSizePositive, Rule::WindowSizeInteger],
    },
    TransformationStep {
        name: "Subtract means",
        id: "sub_means",
        description: "Subtract the mean from each column.",
        citation: "",
        input_names: &[],
        rules: &[],
    },
    TransformationStep {
        name: "Yeo-Johnson transformation",
        id: "y-j",
        description: "Power transformation using the Yeo-Johnson method. Non-positive \
                      values are allowed; data is returned standardized.",
        citation: "",
        input_names: &[],
        rules: &[],
    },
    TransformationStep {
        name: "Nothing",
        id: "nothing",
        description: "Does absolutely nothing. Mostly for debugging, but also for fun.",
        citation: "",
        input_names: &[],
        rules: &[],
    },
];

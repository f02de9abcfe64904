//! Validation rules for transformation step inputs.
//!
//! Rules are a fixed variant dispatch: each variant names one concrete
//! constraint, evaluates it against the full ordered tuple of raw input
//! strings, and carries the user-facing message shown when it fails.
//! Cross-field constraints (e.g. min < max) are expressible because a rule
//! always sees every input, not just one field.

use serde::Serialize;

/// A named validation predicate over a step's ordered raw inputs.
///
/// Inputs arrive as the raw strings the user typed; a rule that needs a
/// number parses it itself and fails on unparseable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rule {
    /// Normalization bounds: `inputs[0]` (Min) must be strictly less than
    /// `inputs[1]` (Max).
    NormBoundsOrdered,
    /// Smoother window size: `inputs[0]` must be a number greater than 0.
    WindowSizePositive,
    /// Smoother window size: `inputs[0]` must be a whole, non-negative
    /// count of data points.
    WindowSizeInteger,
}

impl Rule {
    /// Evaluate the rule against the full ordered input tuple.
    ///
    /// Returns `true` when the constraint is satisfied. Missing or
    /// unparseable inputs fail the rule rather than erroring; arity is the
    /// caller's contract, enforced before rules run.
    pub fn check(&self, inputs: &[String]) -> bool {
        match self {
            Rule::NormBoundsOrdered => match (parse_number(inputs, 0), parse_number(inputs, 1)) {
                (Some(min), Some(max)) => min < max,
                _ => false,
            },
            Rule::WindowSizePositive => {
                matches!(parse_number(inputs, 0), Some(size) if size > 0.0)
            }
            Rule::WindowSizeInteger => parse_count(inputs, 0).is_some(),
        }
    }

    /// Human-readable message displayed when this rule fails.
    pub fn description(&self) -> &'static str {
        match self {
            Rule::NormBoundsOrdered => "Normalization minimum must be less than the maximum.",
            Rule::WindowSizePositive => "Filter window size must be greater than 0.",
            Rule::WindowSizeInteger => "Filter window size must be an integer.",
        }
    }
}

/// Parse `inputs[index]` as a float, if present and well-formed.
fn parse_number(inputs: &[String], index: usize) -> Option<f64> {
    let value: f64 = inputs.get(index)?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse `inputs[index]` as an unsigned whole number.
fn parse_count(inputs: &[String], index: usize) -> Option<u64> {
    inputs.get(index)?.trim().parse().ok()
}

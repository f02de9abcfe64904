//! Selection state for one step form.
//!
//! Models the category → step → inputs cascade as explicit state
//! transitions: changing a selection resets everything that depended on
//! it, by direct assignment in the owning state. Categories are opaque
//! labels supplied by the presentation layer; only the step selection is
//! resolved against the catalog.

use crate::catalog::{Catalog, TransformationStep, Validation};
use crate::error::{PrepError, Result};
use crate::pipeline::Pipeline;

/// Editing state of a single step form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepForm {
    category: Option<String>,
    step_id: Option<String>,
    inputs: Vec<String>,
}

impl StepForm {
    /// A blank form: nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn step_id(&self) -> Option<&str> {
        self.step_id.as_deref()
    }

    /// Current raw input values, sized to the selected step's arity.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Select a category. The dependent step selection and its inputs are
    /// reset.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.category = Some(category.into());
        self.step_id = None;
        self.inputs.clear();
    }

    /// Select a step by catalog id. Inputs are reset and sized to the
    /// step's arity.
    pub fn select_step(&mut self, catalog: &Catalog, step_id: &str) -> Result<()> {
        let step = catalog
            .get(step_id)
            .ok_or_else(|| PrepError::UnknownStep(step_id.to_string()))?;
        self.step_id = Some(step.id().to_string());
        self.inputs = vec![String::new(); step.input_count()];
        Ok(())
    }

    /// Overwrite one input value.
    pub fn set_input(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let len = self.inputs.len();
        let slot = self
            .inputs
            .get_mut(index)
            .ok_or(PrepError::PositionOutOfRange {
                position: index,
                len,
            })?;
        *slot = value.into();
        Ok(())
    }

    /// Reset the whole form to blank.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The catalog entry currently selected, for showing its description
    /// and citation.
    pub fn selected<'c>(&self, catalog: &'c Catalog) -> Option<&'c TransformationStep> {
        self.step_id.as_deref().and_then(|id| catalog.get(id))
    }

    /// Validate the current inputs; `None` until a step is selected.
    pub fn validate(&self, catalog: &Catalog) -> Option<Result<Validation>> {
        self.step_id
            .as_deref()
            .map(|id| catalog.validate(id, &self.inputs))
    }

    /// Append the selected step and its inputs to the pipeline.
    ///
    /// Returns the new pipeline position. Erring when no step is selected
    /// keeps "nothing chosen yet" out of the pipeline.
    pub fn push_into(&self, catalog: &Catalog, pipeline: &mut Pipeline) -> Result<usize> {
        let step_id = self
            .step_id
            .as_deref()
            .ok_or_else(|| PrepError::UnknownStep(String::new()))?;
        pipeline.push_with_inputs(catalog, step_id, self.inputs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_has_no_selection() {
        let form = StepForm::new();
        assert_eq!(form.category(), None);
        assert_eq!(form.step_id(), None);
        assert!(form.inputs().is_empty());
        assert!(form.validate(Catalog::global()).is_none());
    }

    #[test]
    fn selecting_a_step_sizes_the_inputs() {
        let catalog = Catalog::builtin();
        let mut form = StepForm::new();

        form.select_step(&catalog, "norm").unwrap();
        assert_eq!(form.step_id(), Some("norm"));
        assert_eq!(form.inputs(), ["", ""]);

        form.select_step(&catalog, "stand").unwrap();
        assert!(form.inputs().is_empty());
    }

    #[test]
    fn selecting_a_category_resets_dependent_fields() {
        let catalog = Catalog::builtin();
        let mut form = StepForm::new();

        form.select_category("smoothing");
        form.select_step(&catalog, "moving_avg_smoother").unwrap();
        form.set_input(0, "5").unwrap();

        form.select_category("scaling");
        assert_eq!(form.category(), Some("scaling"));
        assert_eq!(form.step_id(), None);
        assert!(form.inputs().is_empty());
    }

    #[test]
    fn reselecting_a_step_resets_its_inputs() {
        let catalog = Catalog::builtin();
        let mut form = StepForm::new();

        form.select_step(&catalog, "norm").unwrap();
        form.set_input(0, "0").unwrap();
        form.set_input(1, "1").unwrap();

        form.select_step(&catalog, "norm").unwrap();
        assert_eq!(form.inputs(), ["", ""]);
    }

    #[test]
    fn unknown_step_leaves_state_untouched() {
        let catalog = Catalog::builtin();
        let mut form = StepForm::new();
        form.select_step(&catalog, "norm").unwrap();

        assert!(form.select_step(&catalog, "bogus").is_err());
        assert_eq!(form.step_id(), Some("norm"));
    }

    #[test]
    fn selected_exposes_description_and_citation() {
        let catalog = Catalog::builtin();
        let mut form = StepForm::new();
        form.select_step(&catalog, "box-cox").unwrap();

        let step = form.selected(&catalog).unwrap();
        assert!(step.description().contains("Box-Cox"));
        assert_eq!(step.citation(), "");
    }

    #[test]
    fn validate_reflects_current_inputs() {
        let catalog = Catalog::builtin();
        let mut form = StepForm::new();
        form.select_step(&catalog, "norm").unwrap();

        let outcome = form.validate(&catalog).unwrap().unwrap();
        assert!(!outcome.is_valid());

        form.set_input(0, "0").unwrap();
        form.set_input(1, "1").unwrap();
        let outcome = form.validate(&catalog).unwrap().unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn push_into_requires_a_selection() {
        let catalog = Catalog::builtin();
        let mut pipeline = Pipeline::new();

        let form = StepForm::new();
        assert!(form.push_into(&catalog, &mut pipeline).is_err());
        assert!(pipeline.is_empty());

        let mut form = StepForm::new();
        form.select_step(&catalog, "moving_avg_smoother").unwrap();
        form.set_input(0, "3").unwrap();
        let pos = form.push_into(&catalog, &mut pipeline).unwrap();
        assert_eq!(pos, 0);
        assert_eq!(pipeline.steps()[0].inputs(), ["3"]);
    }
}

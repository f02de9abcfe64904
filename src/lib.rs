//! # tsprep
//!
//! Catalog and validation core for time-series preprocessing pipelines.
//!
//! Provides the static catalog of preprocessing steps (normalization,
//! standardization, power transforms, smoothing, ...), rule-based input
//! validation, the user-edited pipeline model, confirmation summaries,
//! and the submission payload handed to an external execution backend.
//! The numeric transforms themselves are the backend's job; this crate
//! owns the vocabulary and the contracts around it.
//!
//! # Example
//!
//! ```
//! use tsprep::prelude::*;
//!
//! let catalog = Catalog::global();
//! let mut pipeline = Pipeline::new();
//!
//! let pos = pipeline.push(catalog, "norm").unwrap();
//! pipeline.set_input(pos, 0, "0").unwrap();
//! pipeline.set_input(pos, 1, "100").unwrap();
//! pipeline.push(catalog, "stand").unwrap();
//!
//! assert!(pipeline.check(catalog).unwrap().iter().all(Validation::is_valid));
//!
//! let summary = summarize(&pipeline, catalog).unwrap();
//! assert_eq!(summary[0].to_string(), "1: Normalize  Min=0 Max=100");
//! ```

pub mod catalog;
pub mod error;
pub mod form;
pub mod pipeline;
pub mod submit;

pub use error::{PrepError, Result};

pub mod prelude {
    pub use crate::catalog::{Catalog, Rule, TransformationStep, Validation};
    pub use crate::error::{PrepError, Result};
    pub use crate::form::StepForm;
    pub use crate::pipeline::{summarize, Pipeline, PipelineStep, StepSummary};
    pub use crate::submit::{SubmitOptions, Submission};
}

//! The payload handed to the execution backend.
//!
//! The backend contract is `{files, pipeline, options}` as JSON: the
//! selected input file names, the ordered step sequence, and two flags
//! encoded as `0|1` integers on the wire. What the backend does with it
//! (the numeric transforms, plots, downloads) is outside this crate.

use crate::catalog::Catalog;
use crate::error::{PrepError, Result};
use crate::pipeline::Pipeline;
use serde::{Deserialize, Serialize};

/// Run options chosen on the confirmation view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOptions {
    /// Offer the transformed datasets for download.
    #[serde(with = "int_flag")]
    pub download: bool,
    /// Render before/after visualizations.
    #[serde(with = "int_flag")]
    pub visualizations: bool,
}

/// `bool` carried as `0|1` on the wire.
mod int_flag {
    use serde::de::{Deserializer, Error, Unexpected};
    use serde::ser::Serializer;
    use serde::Deserialize;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(D::Error::invalid_value(
                Unexpected::Unsigned(other.into()),
                &"0 or 1",
            )),
        }
    }
}

/// A confirmed run: files, the validated pipeline, and run options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    files: Vec<String>,
    pipeline: Pipeline,
    options: SubmitOptions,
}

impl Submission {
    /// Assemble a submission, re-checking the pipeline against the
    /// catalog.
    ///
    /// Every step must resolve and pass all of its rules; a stale or
    /// invalid step is refused here so the backend only ever receives
    /// pipelines the user confirmed in a valid state.
    pub fn prepare(
        catalog: &Catalog,
        files: Vec<String>,
        pipeline: Pipeline,
        options: SubmitOptions,
    ) -> Result<Self> {
        for (position, outcome) in pipeline.check(catalog)?.into_iter().enumerate() {
            if !outcome.is_valid() {
                return Err(PrepError::InvalidPipeline {
                    position,
                    failures: outcome.failures().iter().map(|s| s.to_string()).collect(),
                });
            }
        }
        Ok(Self {
            files,
            pipeline,
            options,
        })
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn options(&self) -> SubmitOptions {
        self.options
    }

    /// Encode the payload for transport.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

//! Frame classification seam.
//!
//! The model is an injected dependency: construct one classifier at startup,
//! hand it to the pipeline by reference, reuse it across videos. The core
//! never initializes or caches a model itself.

use log::warn;
use thiserror::Error;

use crate::core::taxonomy;
use crate::core::video::frame::Frame;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("bad input frame: {0}")]
    BadInput(String),
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Maps one sampled frame to one taxonomy label.
///
/// A per-frame failure is recoverable: the pipeline logs it and leaves a gap
/// in the prediction map instead of aborting the run.
pub trait FrameClassifier: Send + Sync {
    fn classify(&self, frame: &Frame) -> Result<String, ClassifyError>;
}

/// Model class index → taxonomy label. Indices outside the taxonomy fall back
/// to the `Unknown` sentinel, which is grouped and counted like any label.
pub fn label_from_class_index(class_index: usize) -> String {
    match taxonomy::label_for_index(class_index) {
        Some(label) => label.to_string(),
        None => {
            warn!("class index {class_index} outside taxonomy, mapping to Unknown");
            taxonomy::UNKNOWN_LABEL.to_string()
        }
    }
}

type LabelFn = Box<dyn Fn(u64) -> Result<String, ClassifyError> + Send + Sync>;

/// Pattern-driven classifier for tests and wiring checks - labels frames by
/// extraction index without touching pixels.
pub struct MockClassifier {
    pattern: LabelFn,
}

impl MockClassifier {
    pub fn with_pattern(
        pattern: impl Fn(u64) -> Result<String, ClassifyError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            pattern: Box::new(pattern),
        }
    }

    /// Same label for every frame.
    pub fn constant(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::with_pattern(move |_| Ok(label.clone()))
    }

    /// Labels by index, failing at the listed indices.
    pub fn with_labels_failing_at(
        label_at: impl Fn(u64) -> String + Send + Sync + 'static,
        failing: Vec<u64>,
    ) -> Self {
        Self::with_pattern(move |index| {
            if failing.contains(&index) {
                Err(ClassifyError::Inference(format!(
                    "mock failure at frame {index}"
                )))
            } else {
                Ok(label_at(index))
            }
        })
    }
}

impl FrameClassifier for MockClassifier {
    fn classify(&self, frame: &Frame) -> Result<String, ClassifyError> {
        (self.pattern)(frame.index)
    }
}

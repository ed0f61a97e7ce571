//! Per-video analysis pipeline: classify sampled frames, then aggregate.
//!
//! Classification is parallel across frames (predictions are independent);
//! aggregation runs only after the full prediction map is materialized, since
//! a segment cannot be closed until the next differing label or end of data
//! is known.

use log::{info, warn};
use rayon::prelude::*;

use crate::core::aggregate::{
    aggregate_segments, count_occurrences, select_exemplars, ExemplarMap, OccurrenceHistogram,
    PredictionMap, Segment,
};
use crate::core::aggregate::segments::validate_fps;
use crate::core::classifier::FrameClassifier;
use crate::core::error::AnalysisError;
use crate::core::video::frame::Frame;

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Classifier input size; frames are resized before inference.
    pub input_width: u32,
    pub input_height: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_width: 224,
            input_height: 224,
        }
    }
}

/// Read-only outputs of one video run.
#[derive(Debug, Clone)]
pub struct VideoAnalysis {
    pub segments: Vec<Segment>,
    pub occurrences: OccurrenceHistogram,
    pub exemplars: ExemplarMap,
    pub frames_classified: usize,
}

pub struct AnalysisPipeline {
    config: AnalysisConfig,
}

impl AnalysisPipeline {
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Classify every frame, building the prediction map.
    ///
    /// A frame whose classification fails is logged and omitted (a gap in
    /// the map); it never aborts the run.
    pub fn classify_frames(
        &self,
        frames: &[Frame],
        classifier: &dyn FrameClassifier,
    ) -> Result<PredictionMap, AnalysisError> {
        let results: Vec<(u64, String)> = frames
            .par_iter()
            .filter_map(|frame| {
                let input = frame.resize_to(self.config.input_width, self.config.input_height);
                match classifier.classify(&input) {
                    Ok(label) => Some((frame.index, label)),
                    Err(err) => {
                        warn!("frame {} skipped: {err}", frame.index);
                        None
                    }
                }
            })
            .collect();

        let mut predictions = PredictionMap::new();
        for (index, label) in results {
            predictions.insert(index, label)?;
        }

        Ok(predictions)
    }

    /// Full run for one video: classify, then derive timeline, histogram and
    /// exemplars. `fps` is the sampling cadence, not the source video's.
    pub fn analyze(
        &self,
        frames: &[Frame],
        classifier: &dyn FrameClassifier,
        fps: f64,
    ) -> Result<VideoAnalysis, AnalysisError> {
        // configuration errors fail before any inference work
        validate_fps(fps)?;

        let predictions = self.classify_frames(frames, classifier)?;
        self.aggregate(&predictions, fps)
    }

    /// Aggregation only, for callers that already hold a prediction map.
    pub fn aggregate(
        &self,
        predictions: &PredictionMap,
        fps: f64,
    ) -> Result<VideoAnalysis, AnalysisError> {
        let segments = aggregate_segments(predictions, fps)?;
        let occurrences = count_occurrences(predictions);
        let exemplars = select_exemplars(predictions);

        info!(
            "aggregated {} frames into {} segments ({} labels)",
            predictions.len(),
            segments.len(),
            occurrences.len()
        );

        Ok(VideoAnalysis {
            segments,
            occurrences,
            exemplars,
            frames_classified: predictions.len(),
        })
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new()
    }
}

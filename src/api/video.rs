//! Video analysis facade.

use log::{info, warn};
use std::path::Path;

use crate::api::models::report::VideoReport;
use crate::core::classifier::FrameClassifier;
use crate::core::error::AnalysisError;
use crate::core::pipeline::{AnalysisConfig, AnalysisPipeline};
use crate::core::video::{Frame, FrameStore};

/// Analyzes one video's sampled frames into a timeline report.
///
/// The classifier is constructed once by the host and moved in; the analyzer
/// reuses it across videos and never re-initializes it mid-run. Scheduling
/// (inline, worker pool, job queue) is the host's concern - `analyze_dir` is
/// a plain synchronous call.
pub struct VideoAnalyzer {
    classifier: Box<dyn FrameClassifier>,
    pipeline: AnalysisPipeline,
}

impl VideoAnalyzer {
    pub fn new(classifier: Box<dyn FrameClassifier>) -> Self {
        Self::with_config(classifier, AnalysisConfig::default())
    }

    pub fn with_config(classifier: Box<dyn FrameClassifier>, config: AnalysisConfig) -> Self {
        info!("VideoAnalyzer: created");
        Self {
            classifier,
            pipeline: AnalysisPipeline::with_config(config),
        }
    }

    /// Analyze the sampled frames of one video.
    ///
    /// `frames_dir` is the sampler's output directory (`frame_0000.jpg`, ...);
    /// `fps` is the sampling cadence used to extract them. A frame that fails
    /// to decode is skipped like a failed classification, leaving a gap.
    pub fn analyze_dir(&self, frames_dir: &Path, fps: f64) -> Result<VideoReport, AnalysisError> {
        let store = FrameStore::new(frames_dir);
        let files = store.scan()?;
        info!("analyzing {} frames from {}", files.len(), frames_dir.display());

        let frames: Vec<Frame> = files
            .iter()
            .filter_map(|file| match store.load(file) {
                Ok(frame) => Some(frame),
                Err(err) => {
                    warn!("frame {} unreadable, skipping: {err}", file.index);
                    None
                }
            })
            .collect();

        let analysis = self.pipeline.analyze(&frames, self.classifier.as_ref(), fps)?;
        Ok(VideoReport::from_analysis(&analysis))
    }
}

use crate::core::aggregate::predictions::PredictionMap;
use crate::core::error::AnalysisError;

/// A maximal run of identical labels, as a time interval in seconds.
///
/// Boundaries keep full precision; only `display()` rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl Segment {
    fn from_frames(label: &str, start_frame: u64, end_frame: u64, fps: f64) -> Self {
        Self {
            label: label.to_string(),
            start_time: frame_to_seconds(start_frame, fps),
            end_time: frame_to_seconds(end_frame, fps),
        }
    }

    /// Timeline line, e.g. `"10.00-25.30s: polyps"`.
    pub fn display(&self) -> String {
        format!("{:.2}-{:.2}s: {}", self.start_time, self.end_time, self.label)
    }
}

/// Extraction index → seconds under the sampling cadence. Full precision,
/// used for all segment boundaries.
pub fn frame_to_seconds(frame_index: u64, fps: f64) -> f64 {
    frame_index as f64 / fps
}

/// Seconds rounded to 2 decimals. Logging and display only, never used in
/// comparison logic.
pub fn rounded_seconds(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

pub(crate) fn validate_fps(fps: f64) -> Result<(), AnalysisError> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(AnalysisError::InvalidFps(fps));
    }
    Ok(())
}

/// Compress the prediction map into maximal same-label runs.
///
/// A segment stays open across gaps in the key sequence as long as the label
/// is unchanged; its end frame is always the last index actually present with
/// that label, never an interpolated one. Every present key lands in exactly
/// one segment.
pub fn aggregate_segments(
    predictions: &PredictionMap,
    fps: f64,
) -> Result<Vec<Segment>, AnalysisError> {
    validate_fps(fps)?;

    let mut segments = Vec::new();
    let mut current_label: Option<&str> = None;
    let mut start_frame = 0u64;
    let mut last_frame = 0u64;

    for (&frame_index, label) in predictions.iter() {
        match current_label {
            Some(current) if current == label.as_str() => {
                last_frame = frame_index;
            }
            Some(current) => {
                segments.push(Segment::from_frames(current, start_frame, last_frame, fps));
                current_label = Some(label.as_str());
                start_frame = frame_index;
                last_frame = frame_index;
            }
            None => {
                current_label = Some(label.as_str());
                start_frame = frame_index;
                last_frame = frame_index;
            }
        }
    }

    if let Some(current) = current_label {
        segments.push(Segment::from_frames(current, start_frame, last_frame, fps));
    }

    Ok(segments)
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::pipeline::VideoAnalysis;
use crate::core::taxonomy;
use crate::core::video::sampler::frame_file_name;

/// One timeline row for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentEntry {
    pub label: String,
    #[serde(rename = "startTime")]
    pub start_time: f64,
    #[serde(rename = "endTime")]
    pub end_time: f64,
    /// Pre-rendered `"10.00-25.30s: polyps"` line, 2 decimals.
    pub display: String,
}

/// Presentation-ready result of one video run.
///
/// Exemplars are resolved to frame file names here; the aggregation core only
/// ever deals in frame indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoReport {
    pub timeline: Vec<SegmentEntry>,
    /// Label → frame count over the whole video.
    pub occurrences: BTreeMap<String, u64>,
    /// Label → file name of the first frame showing it.
    #[serde(rename = "exemplarFiles")]
    pub exemplar_files: BTreeMap<String, String>,
    /// Label → clinical description, where the taxonomy has one.
    pub descriptions: BTreeMap<String, String>,
    #[serde(rename = "framesClassified")]
    pub frames_classified: usize,
}

impl VideoReport {
    pub fn from_analysis(analysis: &VideoAnalysis) -> Self {
        let timeline = analysis
            .segments
            .iter()
            .map(|s| SegmentEntry {
                label: s.label.clone(),
                start_time: s.start_time,
                end_time: s.end_time,
                display: s.display(),
            })
            .collect();

        let exemplar_files = analysis
            .exemplars
            .iter()
            .map(|(label, &index)| (label.clone(), frame_file_name(index)))
            .collect();

        let descriptions = analysis
            .occurrences
            .keys()
            .filter_map(|label| {
                taxonomy::description_for(label).map(|d| (label.clone(), d.to_string()))
            })
            .collect();

        Self {
            timeline,
            occurrences: analysis.occurrences.clone(),
            exemplar_files,
            descriptions,
            frames_classified: analysis.frames_classified,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::Segment;

    fn sample_analysis() -> VideoAnalysis {
        let label = "lower-gi-tract/pathological-findings/polyps";
        VideoAnalysis {
            segments: vec![Segment {
                label: label.to_string(),
                start_time: 10.0,
                end_time: 25.3,
            }],
            occurrences: BTreeMap::from([(label.to_string(), 16)]),
            exemplars: BTreeMap::from([(label.to_string(), 10)]),
            frames_classified: 16,
        }
    }

    #[test]
    fn test_report_from_analysis() {
        let report = VideoReport::from_analysis(&sample_analysis());
        let label = "lower-gi-tract/pathological-findings/polyps";

        assert_eq!(report.timeline.len(), 1);
        assert_eq!(report.timeline[0].display, format!("10.00-25.30s: {label}"));
        assert_eq!(
            report.exemplar_files.get(label),
            Some(&"frame_0010.jpg".to_string())
        );
        assert!(report.descriptions.get(label).is_some());
        assert_eq!(report.frames_classified, 16);
    }

    #[test]
    fn test_unknown_label_has_no_description() {
        let mut analysis = sample_analysis();
        analysis.occurrences.insert("Unknown".to_string(), 2);

        let report = VideoReport::from_analysis(&analysis);
        assert!(report.descriptions.get("Unknown").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let report = VideoReport::from_analysis(&sample_analysis());
        let json = report.to_json().unwrap();
        let parsed: VideoReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.timeline.len(), report.timeline.len());
        assert_eq!(parsed.occurrences, report.occurrences);
        assert_eq!(parsed.exemplar_files, report.exemplar_files);
    }
}

use std::collections::BTreeMap;

use crate::core::aggregate::predictions::PredictionMap;

/// Label → number of frames bearing that label across the whole video.
pub type OccurrenceHistogram = BTreeMap<String, u64>;

/// Count frames per label. Counts are per raw frame, not per segment, so a
/// label split across non-contiguous runs accumulates all its frames.
pub fn count_occurrences(predictions: &PredictionMap) -> OccurrenceHistogram {
    let mut counts = OccurrenceHistogram::new();
    for (_, label) in predictions.iter() {
        *counts.entry(label.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(u64, &str)]) -> PredictionMap {
        let mut m = PredictionMap::new();
        for &(index, label) in entries {
            m.insert(index, label).unwrap();
        }
        m
    }

    #[test]
    fn test_counts_per_frame() {
        let predictions = map(&[(0, "A"), (1, "B"), (2, "A")]);
        let counts = count_occurrences(&predictions);

        assert_eq!(counts.get("A"), Some(&2));
        assert_eq!(counts.get("B"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_empty_map() {
        assert!(count_occurrences(&PredictionMap::new()).is_empty());
    }

    #[test]
    fn test_split_runs_accumulate() {
        // A appears in two separate runs; histogram merges them
        let predictions = map(&[(0, "A"), (1, "B"), (2, "A"), (5, "A")]);
        let counts = count_occurrences(&predictions);
        assert_eq!(counts.get("A"), Some(&3));
    }

    #[test]
    fn test_total_equals_map_len() {
        let predictions = map(&[(0, "A"), (1, "B"), (2, "A"), (9, "C"), (11, "C")]);
        let counts = count_occurrences(&predictions);
        let total: u64 = counts.values().sum();
        assert_eq!(total as usize, predictions.len());
    }
}

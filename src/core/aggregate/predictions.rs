use std::collections::BTreeMap;

use crate::core::error::AnalysisError;

/// Per-frame predictions for one video, keyed by extraction index.
///
/// Keys need not be contiguous: a frame whose classification failed is simply
/// absent. Iteration is always in numeric index order. The map is built once
/// per run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionMap {
    frames: BTreeMap<u64, String>,
}

impl PredictionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one prediction. Duplicate indices violate the sampler contract.
    pub fn insert(&mut self, index: u64, label: impl Into<String>) -> Result<(), AnalysisError> {
        if self.frames.insert(index, label.into()).is_some() {
            return Err(AnalysisError::DuplicateFrame(index));
        }
        Ok(())
    }

    pub fn get(&self, index: u64) -> Option<&str> {
        self.frames.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate `(index, label)` in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (&u64, &String)> {
        self.frames.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.frames.values().map(String::as_str)
    }

    pub fn distinct_label_count(&self) -> usize {
        let mut seen: Vec<&str> = self.labels().collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_order() {
        let mut map = PredictionMap::new();
        map.insert(5, "B").unwrap();
        map.insert(0, "A").unwrap();
        map.insert(3, "A").unwrap();

        let indices: Vec<u64> = map.iter().map(|(&i, _)| i).collect();
        assert_eq!(indices, vec![0, 3, 5]);
        assert_eq!(map.get(3), Some("A"));
        assert_eq!(map.get(4), None);
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let mut map = PredictionMap::new();
        map.insert(1, "A").unwrap();
        let err = map.insert(1, "B").unwrap_err();
        assert!(matches!(err, AnalysisError::DuplicateFrame(1)));
    }

    #[test]
    fn test_distinct_label_count() {
        let mut map = PredictionMap::new();
        map.insert(0, "A").unwrap();
        map.insert(1, "B").unwrap();
        map.insert(2, "A").unwrap();
        assert_eq!(map.distinct_label_count(), 2);
        assert!(PredictionMap::new().is_empty());
    }
}

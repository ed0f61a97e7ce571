use std::collections::BTreeMap;

use crate::core::aggregate::predictions::PredictionMap;

/// Label → first extraction index where it was observed. Used by the caller
/// to pick a representative thumbnail per label.
pub type ExemplarMap = BTreeMap<String, u64>;

/// Pick the first frame index per distinct label, in ascending index order.
///
/// Stops scanning once every distinct label in the map has an exemplar; the
/// result is identical to scanning the whole map.
pub fn select_exemplars(predictions: &PredictionMap) -> ExemplarMap {
    let distinct = predictions.distinct_label_count();
    let mut exemplars = ExemplarMap::new();

    for (&frame_index, label) in predictions.iter() {
        if !exemplars.contains_key(label.as_str()) {
            exemplars.insert(label.clone(), frame_index);
            if exemplars.len() == distinct {
                break;
            }
        }
    }

    exemplars
}

//! Run-length aggregation of per-frame predictions.
//!
//! Turns a sparse, possibly-gapped frame-index → label mapping into:
//! 1. a time-stamped timeline of maximal same-label runs
//! 2. per-label frame occurrence counts
//! 3. one exemplar frame index per label
//!
//! Pure and synchronous; runs once per video after the full prediction map
//! is materialized.

pub mod exemplars;
pub mod histogram;
pub mod predictions;
pub mod segments;

pub use exemplars::{select_exemplars, ExemplarMap};
pub use histogram::{count_occurrences, OccurrenceHistogram};
pub use predictions::PredictionMap;
pub use segments::{aggregate_segments, frame_to_seconds, rounded_seconds, Segment};

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod taxonomy;
pub mod video;

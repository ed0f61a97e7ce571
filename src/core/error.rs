use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid sampling fps: {0}")]
    InvalidFps(f64),
    #[error("duplicate frame index: {0}")]
    DuplicateFrame(u64),
}

pub mod models;
pub mod video;

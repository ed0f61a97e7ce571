pub mod frame;
pub mod sampler;

pub use frame::Frame;
pub use sampler::{frame_file_name, parse_frame_index, FrameFile, FrameStore};

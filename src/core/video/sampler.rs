//! Frame store - bridges the external frame sampler's output directory back
//! into indexed frames.
//!
//! The sampler writes zero-padded sequential files (`frame_0000.jpg`,
//! `frame_0001.jpg`, ...) in extraction order, so the frame index can always
//! be recovered from the file name alone, independent of video timestamps.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::AnalysisError;
use crate::core::video::frame::Frame;

static FRAME_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^frame_(\d+)\.(?:jpg|jpeg|png|bmp)$").unwrap());

/// Recover the extraction index from a sampled frame's file name.
pub fn parse_frame_index(file_name: &str) -> Option<u64> {
    let caps = FRAME_FILE.captures(file_name)?;
    caps.get(1)?.as_str().parse().ok()
}

/// File name the sampler uses for a given extraction index.
pub fn frame_file_name(index: u64) -> String {
    format!("frame_{index:04}.jpg")
}

#[derive(Debug, Clone)]
pub struct FrameFile {
    pub index: u64,
    pub path: PathBuf,
}

/// Read-only view over one video's sampled-frames directory.
pub struct FrameStore {
    dir: PathBuf,
}

impl FrameStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List frame files sorted by extraction index.
    ///
    /// Non-frame files are ignored. Two files resolving to the same index
    /// violate the sampler contract and are rejected.
    pub fn scan(&self) -> Result<Vec<FrameFile>, AnalysisError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(index) = parse_frame_index(name) {
                files.push(FrameFile {
                    index,
                    path: entry.path(),
                });
            }
        }

        files.sort_by_key(|f| f.index);
        for pair in files.windows(2) {
            if pair[0].index == pair[1].index {
                return Err(AnalysisError::DuplicateFrame(pair[0].index));
            }
        }

        Ok(files)
    }

    /// Decode one frame file to RGBA.
    pub fn load(&self, file: &FrameFile) -> Result<Frame, AnalysisError> {
        let img = image::open(&file.path)?.to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Frame::new(file.index, width, height, img.into_raw()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_index() {
        assert_eq!(parse_frame_index("frame_0000.jpg"), Some(0));
        assert_eq!(parse_frame_index("frame_0042.jpg"), Some(42));
        assert_eq!(parse_frame_index("frame_1234.png"), Some(1234));
        assert_eq!(parse_frame_index("frame_10000.jpg"), Some(10000));
    }

    #[test]
    fn test_parse_rejects_non_frame_files() {
        assert_eq!(parse_frame_index("thumb_0001.jpg"), None);
        assert_eq!(parse_frame_index("frame_0001.txt"), None);
        assert_eq!(parse_frame_index("frame_.jpg"), None);
        assert_eq!(parse_frame_index(".DS_Store"), None);
    }

    #[test]
    fn test_file_name_round_trip() {
        assert_eq!(frame_file_name(7), "frame_0007.jpg");
        assert_eq!(parse_frame_index(&frame_file_name(7)), Some(7));
        // indices past 4 digits are not truncated
        assert_eq!(frame_file_name(12345), "frame_12345.jpg");
        assert_eq!(parse_frame_index(&frame_file_name(12345)), Some(12345));
    }

    #[test]
    fn test_scan_sorts_and_filters() {
        let dir = std::env::temp_dir().join("endoscan_scan_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for name in ["frame_0003.jpg", "frame_0001.jpg", "frame_0010.jpg", "notes.txt"] {
            fs::write(dir.join(name), b"stub").unwrap();
        }

        let store = FrameStore::new(&dir);
        let files = store.scan().unwrap();
        let indices: Vec<u64> = files.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![1, 3, 10]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_scan_rejects_duplicate_index() {
        let dir = std::env::temp_dir().join("endoscan_dup_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("frame_0002.jpg"), b"stub").unwrap();
        fs::write(dir.join("frame_0002.png"), b"stub").unwrap();

        let store = FrameStore::new(&dir);
        let err = store.scan().unwrap_err();
        assert!(matches!(err, AnalysisError::DuplicateFrame(2)));

        fs::remove_dir_all(&dir).unwrap();
    }
}

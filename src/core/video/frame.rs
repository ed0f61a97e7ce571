/// One sampled frame: RGBA pixels plus its position in extraction order.
///
/// `index` is the sampler's 0-based extraction index, not the raw video
/// frame number.
#[derive(Debug, Clone)]
pub struct Frame {
    pub index: u64,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>, // RGBA
}

impl Frame {
    pub fn new(index: u64, width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            index,
            width,
            height,
            data,
        }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixel_count() * 3);
        for chunk in self.data.chunks_exact(4) {
            rgb.push(chunk[0]);
            rgb.push(chunk[1]);
            rgb.push(chunk[2]);
        }
        rgb
    }

    /// Resample to the classifier's input size.
    pub fn resize_to(&self, target_width: u32, target_height: u32) -> Frame {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .expect("Invalid frame data");
        let resized = image::imageops::resize(
            &img,
            target_width,
            target_height,
            image::imageops::FilterType::Triangle,
        );

        Frame {
            index: self.index,
            width: target_width,
            height: target_height,
            data: resized.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_creation() {
        let data = vec![255u8; 100 * 100 * 4];
        let frame = Frame::new(30, 100, 100, data);

        assert_eq!(frame.index, 30);
        assert_eq!(frame.width, 100);
        assert_eq!(frame.height, 100);
        assert_eq!(frame.pixel_count(), 10000);
    }

    #[test]
    fn test_frame_resize() {
        let data = vec![255u8; 100 * 100 * 4];
        let frame = Frame::new(0, 100, 100, data);
        let resized = frame.resize_to(224, 224);

        assert_eq!(resized.width, 224);
        assert_eq!(resized.height, 224);
        assert_eq!(resized.index, 0);
        assert_eq!(resized.data.len(), 224 * 224 * 4);
    }

    #[test]
    fn test_to_rgb_drops_alpha() {
        let frame = Frame::new(0, 2, 1, vec![1, 2, 3, 255, 4, 5, 6, 255]);
        assert_eq!(frame.to_rgb(), vec![1, 2, 3, 4, 5, 6]);
    }
}

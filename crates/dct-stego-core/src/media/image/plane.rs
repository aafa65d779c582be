use image::RgbImage;

use super::dct::Block;
use crate::media::codec_options::Channel;

/// One color channel of an image as floating point samples, row-major.
///
/// Always a private copy, changes only reach the image through [`CarrierPlane::reinsert`].
#[derive(Debug, Clone, PartialEq)]
pub struct CarrierPlane {
    height: usize,
    width: usize,
    samples: Vec<f64>,
}

impl CarrierPlane {
    /// copies `channel` out of `image`
    pub fn extract(image: &RgbImage, channel: Channel) -> Self {
        let (width, height) = image.dimensions();
        let c = channel.index();
        Self {
            height: height as usize,
            width: width as usize,
            samples: image.pixels().map(|p| f64::from(p.0[c])).collect(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.samples[row * self.width + col]
    }

    /// Grows the plane to `padded_height` x `padded_width`, new samples are zero.
    ///
    /// The original samples keep their position.
    pub fn pad(&self, padded_height: usize, padded_width: usize) -> Self {
        debug_assert!(padded_height >= self.height && padded_width >= self.width);
        let mut samples = vec![0.0; padded_height * padded_width];
        for (row, line) in self.samples.chunks_exact(self.width.max(1)).enumerate() {
            let start = row * padded_width;
            samples[start..start + self.width].copy_from_slice(line);
        }

        Self {
            height: padded_height,
            width: padded_width,
            samples,
        }
    }

    /// copy of the `size` x `size` block with its top left corner at `(row, col)`
    pub fn block(&self, row: usize, col: usize, size: usize) -> Block {
        Block::from_fn(size, |r, c| self.get(row + r, col + c))
    }

    pub fn put_block(&mut self, row: usize, col: usize, block: &Block) {
        let size = block.size();
        for r in 0..size {
            let start = (row + r) * self.width + col;
            for c in 0..size {
                self.samples[start + c] = block[(r, c)];
            }
        }
    }

    /// Writes the plane back into `channel` of `image`, other channels stay untouched.
    ///
    /// Only the part overlapping the image is written, padding is dropped.
    pub fn reinsert(&self, image: &mut RgbImage, channel: Channel) {
        let c = channel.index();
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            let (row, col) = (y as usize, x as usize);
            if row < self.height && col < self.width {
                pixel.0[c] = finalize_sample(self.get(row, col));
            }
        }
    }
}

/// clips to the 8 bit range and rounds to the nearest integer
pub fn finalize_sample(sample: f64) -> u8 {
    sample.clamp(0.0, 255.0).round() as u8
}

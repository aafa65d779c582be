//! The DCT codec: hides a text message in the frequency domain of one color channel.
//!
//! The carrier channel is cut into square blocks. Every block is transformed, the
//! `(block_size - 1)²` AC coefficients that are not in the first row or column carry one
//! bit each in their sign, and the block is transformed back. Blocks are visited block
//! row by block row, coefficients inside a block row-major, on both sides.

use image::RgbImage;
use log::{debug, info, trace, warn};

use crate::error::StegoError;
use crate::media::codec_options::DctCodecOptions;
use crate::media::image::capacity::{self, CapacityPlan};
use crate::media::image::coefficient::CoefficientEncoder;
use crate::media::image::dct::BlockTransformer;
use crate::media::image::plane::CarrierPlane;
use crate::message::{DecodeStatus, TextCodec};
use crate::result::Result;

/// number of coefficient rewrites/reads that are traced
const TRACED_BITS: usize = 20;

/// Outcome of an unveil, a missing message is not an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unveiled {
    Found(String),
    /// No delimiter within the scan limit. `best_effort` is the printable text that
    /// was read before giving up, `None` if there was nothing printable at all.
    NotFound { best_effort: Option<String> },
}

impl Unveiled {
    pub fn is_found(&self) -> bool {
        matches!(self, Unveiled::Found(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Unveiled::Found(m) => Some(m),
            Unveiled::NotFound { .. } => None,
        }
    }

    pub fn into_message(self) -> Option<String> {
        match self {
            Unveiled::Found(m) => Some(m),
            Unveiled::NotFound { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Codec {
    options: DctCodecOptions,
    text: TextCodec,
    transformer: BlockTransformer,
    coefficients: CoefficientEncoder,
}

impl Default for Codec {
    fn default() -> Self {
        Self::with_valid_options(DctCodecOptions::default())
    }
}

impl Codec {
    pub fn new(options: DctCodecOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::with_valid_options(options))
    }

    fn with_valid_options(options: DctCodecOptions) -> Self {
        Self {
            text: TextCodec::new(options.delimiter.as_str()),
            transformer: BlockTransformer::new(options.block_size),
            coefficients: CoefficientEncoder::new(options.magnitude_step),
            options,
        }
    }

    pub fn options(&self) -> &DctCodecOptions {
        &self.options
    }

    pub fn plan(&self, image: &RgbImage) -> CapacityPlan {
        let (width, height) = image.dimensions();
        capacity::plan(height as usize, width as usize, self.options.block_size)
    }

    /// Hides `message` in a copy of `image`.
    ///
    /// Nothing is transformed unless the whole message fits, the input is never modified.
    pub fn embed(&self, image: &RgbImage, message: &str) -> Result<RgbImage> {
        if message.trim().is_empty() {
            return Err(StegoError::EmptyMessage);
        }
        ensure_not_empty(image)?;

        let bits = self.text.encode(message)?;
        let plan = self.plan(image);
        debug!(
            "Image {}x{} padded to {}x{}, {} blocks, capacity {} bits ({} characters)",
            image.width(),
            image.height(),
            plan.padded_width,
            plan.padded_height,
            plan.total_blocks,
            plan.max_capacity_bits,
            plan.available_bytes()
        );
        debug!(
            "Message of {} characters needs {} bits",
            message.chars().count(),
            bits.len()
        );
        plan.validate(bits.len()).map_err(|e| {
            warn!("Message does not fit: {e}");
            StegoError::from(e)
        })?;

        let channel = self.options.carrier_channel;
        let size = self.options.block_size;
        let mut plane =
            CarrierPlane::extract(image, channel).pad(plan.padded_height, plan.padded_width);
        let mut bits = bits.iter().peekable();
        let mut written = 0;

        for (row, col) in plan.block_origins() {
            if bits.peek().is_none() {
                break;
            }

            let mut coefficients = self.transformer.forward(&plane.block(row, col, size));
            for (u, v) in self.ac_positions() {
                let Some(bit) = bits.next() else {
                    break;
                };
                let before = coefficients[(u, v)];
                coefficients[(u, v)] = self.coefficients.write_bit(before, bit);
                if written < TRACED_BITS {
                    trace!(
                        "Bit {written}: '{}' at [{u},{v}]: {before:.2} -> {:.2}",
                        u8::from(bit),
                        coefficients[(u, v)]
                    );
                }
                written += 1;
            }
            plane.put_block(row, col, &self.transformer.inverse(&coefficients));
        }

        let mut output = image.clone();
        plane.reinsert(&mut output, channel);
        info!("Successfully embedded {written} bits");

        Ok(output)
    }

    /// Reads bits until the delimiter shows up, a non-printable byte makes that
    /// impossible or `max_scan_bits` are read.
    pub fn extract(&self, image: &RgbImage) -> Result<Unveiled> {
        ensure_not_empty(image)?;

        let plan = self.plan(image);
        let size = self.options.block_size;
        let plane = CarrierPlane::extract(image, self.options.carrier_channel)
            .pad(plan.padded_height, plan.padded_width);
        let mut decoder = self.text.decoder();
        let mut scanned = 0;
        let mut byte = 0_u8;

        'blocks: for (row, col) in plan.block_origins() {
            let coefficients = self.transformer.forward(&plane.block(row, col, size));
            for (u, v) in self.ac_positions() {
                let bit = self.coefficients.read_bit(coefficients[(u, v)]);
                if scanned < TRACED_BITS {
                    trace!(
                        "Extracted bit {scanned}: '{}' from coeff [{u},{v}]: {:.2}",
                        u8::from(bit),
                        coefficients[(u, v)]
                    );
                }
                byte = (byte << 1) | u8::from(bit);
                scanned += 1;

                if scanned % 8 == 0 {
                    match decoder.push(byte) {
                        DecodeStatus::Found(message) => {
                            info!("Delimiter found after {scanned} bits");
                            return Ok(Unveiled::Found(message));
                        }
                        DecodeStatus::Stopped => {
                            debug!("Non-printable byte after {scanned} bits, no message");
                            break 'blocks;
                        }
                        DecodeStatus::Pending => {}
                    }
                    byte = 0;
                }

                if scanned >= self.options.max_scan_bits {
                    debug!("Scan limit of {} bits reached", self.options.max_scan_bits);
                    break 'blocks;
                }
            }
        }

        let text = decoder.into_text();
        info!(
            "No delimiter within {scanned} bits, {} printable characters read",
            text.len()
        );

        Ok(Unveiled::NotFound {
            best_effort: (!text.is_empty()).then_some(text),
        })
    }

    /// AC coefficients carrying bits, first row and column excluded
    fn ac_positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.options.block_size;
        (1..n).flat_map(move |u| (1..n).map(move |v| (u, v)))
    }
}

fn ensure_not_empty(image: &RgbImage) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        warn!("Image has no pixels");
        return Err(StegoError::InvalidImage);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{prepare_gradient_image, prepare_gray_image, prepare_noise_image};

    #[test]
    fn should_hide_and_unveil_hello_in_gray_image() {
        let codec = Codec::default();
        let img = prepare_gray_image(64, 64, 128);

        let secret = codec.embed(&img, "HELLO").unwrap();

        assert_eq!(
            codec.extract(&secret).unwrap(),
            Unveiled::Found("HELLO".to_string())
        );
    }

    #[test]
    fn should_hide_across_several_blocks() {
        let codec = Codec::default();
        let img = prepare_gradient_image(64, 48);
        let message = "The quick brown fox jumps over the lazy dog 0123456789!";

        let secret = codec.embed(&img, message).unwrap();

        assert_eq!(codec.extract(&secret).unwrap().message(), Some(message));
    }

    #[test]
    fn should_never_modify_input_or_other_channels() {
        let codec = Codec::default();
        let img = prepare_gradient_image(32, 32);
        let copy = img.clone();

        let secret = codec.embed(&img, "channel isolation").unwrap();

        assert_eq!(img, copy);
        assert_eq!(secret.dimensions(), img.dimensions());
        let mut blue_changed = false;
        for (s, o) in secret.pixels().zip(img.pixels()) {
            assert_eq!(s.0[0], o.0[0]);
            assert_eq!(s.0[1], o.0[1]);
            blue_changed |= s.0[2] != o.0[2];
        }
        assert!(blue_changed);
    }

    #[test]
    fn should_fill_exactly_one_block() {
        // 1 block = 49 bits, "#" delimiter leaves room for 5 characters (48 bits)
        let codec = Codec::new(DctCodecOptions::default().with_delimiter("#")).unwrap();
        let img = prepare_gray_image(8, 8, 120);

        let secret = codec.embed(&img, "ABCDE").unwrap();
        assert_eq!(
            codec.extract(&secret).unwrap(),
            Unveiled::Found("ABCDE".to_string())
        );

        match codec.embed(&img, "ABCDEF") {
            Err(StegoError::InsufficientCapacity {
                required_bytes,
                available_bytes,
            }) => {
                assert_eq!(required_bytes, 7);
                assert_eq!(available_bytes, 6);
            }
            other => panic!("expected InsufficientCapacity, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_default_delimiter_on_single_block() {
        let img = prepare_gray_image(8, 8, 128);

        assert!(matches!(
            Codec::default().embed(&img, "A"),
            Err(StegoError::InsufficientCapacity {
                required_bytes: 10,
                available_bytes: 6
            })
        ));
    }

    #[test]
    fn should_reject_empty_and_blank_messages() {
        let img = prepare_gray_image(16, 16, 128);

        for msg in ["", "   ", "\t\n"] {
            assert!(matches!(
                Codec::default().embed(&img, msg),
                Err(StegoError::EmptyMessage)
            ));
        }
    }

    #[test]
    fn should_reject_images_without_pixels() {
        let img = RgbImage::new(0, 16);

        assert!(matches!(
            Codec::default().embed(&img, "hi"),
            Err(StegoError::InvalidImage)
        ));
        assert!(matches!(
            Codec::default().extract(&img),
            Err(StegoError::InvalidImage)
        ));
    }

    #[test]
    fn should_stop_at_first_delimiter_inside_the_message() {
        let codec = Codec::default();
        let img = prepare_gray_image(64, 64, 128);

        let secret = codec.embed(&img, "abc###END###def").unwrap();

        assert_eq!(
            codec.extract(&secret).unwrap(),
            Unveiled::Found("abc".to_string())
        );
    }

    #[test]
    fn should_terminate_on_noise_without_message() {
        let codec = Codec::default();
        let img = prepare_noise_image(256, 256, 42);

        assert!(!codec.extract(&img).unwrap().is_found());
    }

    #[test]
    fn scan_limit_should_bound_the_search() {
        let hide = Codec::default();
        let img = prepare_gray_image(64, 64, 128);
        let secret = hide.embed(&img, "too far away").unwrap();

        // the delimiter ends at bit 168, stop well before
        let unveil = Codec::new(DctCodecOptions::default().with_max_scan_bits(64)).unwrap();

        assert_eq!(
            unveil.extract(&secret).unwrap(),
            Unveiled::NotFound {
                best_effort: Some("too far ".to_string())
            }
        );
    }

    #[test]
    fn unknown_delimiter_should_yield_best_effort_text() {
        let hide = Codec::default();
        let img = prepare_gray_image(64, 64, 128);
        let secret = hide.embed(&img, "partial").unwrap();

        let unveil = Codec::new(DctCodecOptions::default().with_delimiter("@@@")).unwrap();

        match unveil.extract(&secret).unwrap() {
            Unveiled::NotFound {
                best_effort: Some(text),
            } => assert!(text.starts_with("partial###END###"), "got {text:?}"),
            other => panic!("expected best effort text, got {other:?}"),
        }
    }

    #[test]
    fn should_respect_carrier_channel_option() {
        let codec = Codec::new(
            DctCodecOptions::default()
                .with_carrier_channel(crate::media::codec_options::Channel::Red),
        )
        .unwrap();
        let img = prepare_gray_image(32, 32, 128);

        let secret = codec.embed(&img, "red").unwrap();

        for (s, o) in secret.pixels().zip(img.pixels()) {
            assert_eq!(s.0[1], o.0[1]);
            assert_eq!(s.0[2], o.0[2]);
        }
        assert_eq!(codec.extract(&secret).unwrap().message(), Some("red"));
        assert!(!Codec::default().extract(&secret).unwrap().is_found());
    }

    #[test]
    fn invalid_options_should_be_refused() {
        assert!(matches!(
            Codec::new(DctCodecOptions::default().with_block_size(0)),
            Err(StegoError::InvalidOptions(_))
        ));
    }
}

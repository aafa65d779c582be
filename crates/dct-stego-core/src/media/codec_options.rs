use crate::error::StegoError;
use crate::result::Result;

/// Edge length of the square blocks the carrier plane is cut into
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// Minimum magnitude a coefficient has after a bit was written into it
pub const DEFAULT_MAGNITUDE_STEP: f64 = 10.0;

/// Appended to every message, marks the end of it
pub const DEFAULT_DELIMITER: &str = "###END###";

/// Upper bound of bits read while looking for the delimiter
pub const DEFAULT_MAX_SCAN_BITS: usize = 10_000;

/// One of the three color channels of an RGB image
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// index of the channel inside an `Rgb<u8>` pixel
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Options for the DCT codec
///
/// All values are fixed for the lifetime of a [`Codec`](crate::Codec), both sides of a
/// hide/unveil pair must agree on them or the message is not found.
#[derive(Debug, Clone, PartialEq)]
pub struct DctCodecOptions {
    /// Edge length of a block, each block carries `(block_size - 1)²` bits.
    pub block_size: usize,

    /// A written coefficient has at least this magnitude, its sign carries the bit.
    /// Larger values survive more pixel rounding but are more visible.
    pub magnitude_step: f64,

    /// Text appended to the message, the unveil side stops at its first occurrence.
    /// Must be printable ASCII.
    pub delimiter: String,

    /// The only channel that is ever modified.
    pub carrier_channel: Channel,

    /// Unveiling gives up after reading this many bits without seeing the delimiter.
    pub max_scan_bits: usize,
}

impl Default for DctCodecOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            magnitude_step: DEFAULT_MAGNITUDE_STEP,
            delimiter: DEFAULT_DELIMITER.to_string(),
            carrier_channel: Channel::Blue,
            max_scan_bits: DEFAULT_MAX_SCAN_BITS,
        }
    }
}

impl DctCodecOptions {
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_magnitude_step(mut self, magnitude_step: f64) -> Self {
        self.magnitude_step = magnitude_step;
        self
    }

    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_carrier_channel(mut self, channel: Channel) -> Self {
        self.carrier_channel = channel;
        self
    }

    pub fn with_max_scan_bits(mut self, max_scan_bits: usize) -> Self {
        self.max_scan_bits = max_scan_bits;
        self
    }

    /// usable bits of one block, the AC grid without the first row and column
    pub fn bits_per_block(&self) -> usize {
        let ac = self.block_size.saturating_sub(1);
        ac * ac
    }

    pub fn validate(&self) -> Result<()> {
        if self.block_size < 2 {
            return Err(StegoError::InvalidOptions(format!(
                "block size must be at least 2, got {}",
                self.block_size
            )));
        }
        if !self.magnitude_step.is_finite() || self.magnitude_step <= 0.0 {
            return Err(StegoError::InvalidOptions(format!(
                "magnitude step must be a positive number, got {}",
                self.magnitude_step
            )));
        }
        if self.delimiter.is_empty() {
            return Err(StegoError::InvalidOptions(
                "delimiter must not be empty".to_string(),
            ));
        }
        if !self.delimiter.bytes().all(|b| (32..=126).contains(&b)) {
            return Err(StegoError::InvalidOptions(format!(
                "delimiter {:?} must be printable ASCII",
                self.delimiter
            )));
        }
        if self.max_scan_bits < 8 {
            return Err(StegoError::InvalidOptions(format!(
                "max scan bits must cover at least one byte, got {}",
                self.max_scan_bits
            )));
        }

        Ok(())
    }
}

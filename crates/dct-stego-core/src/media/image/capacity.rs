use thiserror::Error;

use crate::error::StegoError;

/// How an image of a given size is cut into blocks and how many bits it can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPlan {
    pub block_size: usize,
    pub height: usize,
    pub width: usize,
    pub padded_height: usize,
    pub padded_width: usize,
    pub total_blocks: usize,
    pub max_capacity_bits: usize,
}

/// The bit stream is longer than the image can carry
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{required_bits} bits required but only {available_bits} bits available")]
pub struct CapacityError {
    pub required_bits: usize,
    pub available_bits: usize,
}

impl From<CapacityError> for StegoError {
    fn from(e: CapacityError) -> Self {
        StegoError::InsufficientCapacity {
            required_bytes: e.required_bits.div_ceil(8),
            available_bytes: e.available_bits / 8,
        }
    }
}

/// Rounds both axes up to the next multiple of `block_size`.
/// A `block_size` of 0 yields an empty plan without any blocks.
pub fn plan(height: usize, width: usize, block_size: usize) -> CapacityPlan {
    if block_size == 0 {
        return CapacityPlan {
            block_size,
            height,
            width,
            padded_height: 0,
            padded_width: 0,
            total_blocks: 0,
            max_capacity_bits: 0,
        };
    }
    let padded_height = height.div_ceil(block_size) * block_size;
    let padded_width = width.div_ceil(block_size) * block_size;
    let total_blocks = (padded_height / block_size) * (padded_width / block_size);
    let ac = block_size - 1;

    CapacityPlan {
        block_size,
        height,
        width,
        padded_height,
        padded_width,
        total_blocks,
        max_capacity_bits: total_blocks * ac * ac,
    }
}

pub fn validate(bit_len: usize, max_capacity_bits: usize) -> Result<(), CapacityError> {
    if bit_len > max_capacity_bits {
        return Err(CapacityError {
            required_bits: bit_len,
            available_bits: max_capacity_bits,
        });
    }
    Ok(())
}

impl CapacityPlan {
    pub fn validate(&self, bit_len: usize) -> Result<(), CapacityError> {
        validate(bit_len, self.max_capacity_bits)
    }

    pub fn available_bytes(&self) -> usize {
        self.max_capacity_bits / 8
    }

    /// characters left for the message once the delimiter is accounted for
    pub fn max_message_len(&self, delimiter_len: usize) -> usize {
        self.available_bytes().saturating_sub(delimiter_len)
    }

    /// false when the last block row or column reaches into zero padding,
    /// bits written there may not survive the way back into the image
    pub fn is_block_aligned(&self) -> bool {
        self.padded_height == self.height && self.padded_width == self.width
    }

    /// like [`Self::max_message_len`] but only up to the first block that reaches into
    /// the padding, blocks are filled row by row
    pub fn safe_message_len(&self, delimiter_len: usize) -> usize {
        if self.block_size == 0 {
            return 0;
        }
        let full_blocks = if self.width % self.block_size != 0 {
            self.width / self.block_size
        } else {
            (self.height / self.block_size) * (self.padded_width / self.block_size)
        };
        let ac = self.block_size - 1;
        (full_blocks * ac * ac / 8).saturating_sub(delimiter_len)
    }

    /// top left corner `(row, col)` of every block, block rows first
    pub fn block_origins(&self) -> impl Iterator<Item = (usize, usize)> {
        let step = self.block_size.max(1);
        let width = self.padded_width;
        (0..self.padded_height)
            .step_by(step)
            .flat_map(move |row| (0..width).step_by(step).map(move |col| (row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pad_to_block_multiples() {
        let p = plan(100, 61, 8);

        assert_eq!(p.padded_height, 104);
        assert_eq!(p.padded_width, 64);
        assert_eq!(p.total_blocks, 13 * 8);
        assert_eq!(p.max_capacity_bits, 13 * 8 * 49);
    }

    #[test]
    fn single_block_should_carry_49_bits() {
        let p = plan(8, 8, 8);

        assert_eq!(p.total_blocks, 1);
        assert_eq!(p.max_capacity_bits, 49);
        assert_eq!(p.available_bytes(), 6);
        assert_eq!(p.max_message_len(9), 0);
    }

    #[test]
    fn should_accept_exactly_full_capacity() {
        assert!(validate(49, 49).is_ok());
        assert!(plan(8, 8, 8).validate(49).is_ok());
    }

    #[test]
    fn one_bit_over_should_fail_with_byte_rounding() {
        let e = validate(50, 49).unwrap_err();
        assert_eq!(
            e,
            CapacityError {
                required_bits: 50,
                available_bits: 49
            }
        );

        match StegoError::from(e) {
            StegoError::InsufficientCapacity {
                required_bytes,
                available_bytes,
            } => {
                assert_eq!(required_bytes, 7);
                assert_eq!(available_bytes, 6);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn padded_plans_should_not_count_edge_blocks_as_safe() {
        let p = plan(61, 61, 8);

        assert!(!p.is_block_aligned());
        assert_eq!(p.max_message_len(9), 64 * 49 / 8 - 9);
        // the 8th block of the first row is already padded
        assert_eq!(p.safe_message_len(9), 7 * 49 / 8 - 9);

        // only the last block row is padded
        assert_eq!(plan(20, 64, 8).safe_message_len(9), 2 * 8 * 49 / 8 - 9);

        let aligned = plan(64, 64, 8);
        assert!(aligned.is_block_aligned());
        assert_eq!(aligned.safe_message_len(9), aligned.max_message_len(9));
    }

    #[test]
    fn zero_block_size_should_give_an_empty_plan() {
        let p = plan(16, 16, 0);

        assert_eq!(p.total_blocks, 0);
        assert_eq!(p.max_capacity_bits, 0);
        assert_eq!(p.block_origins().count(), 0);
        assert_eq!(p.safe_message_len(1), 0);
        assert!(p.validate(1).is_err());
    }

    #[test]
    fn should_visit_blocks_row_major() {
        let origins: Vec<_> = plan(9, 16, 8).block_origins().collect();

        assert_eq!(origins, vec![(0, 0), (0, 8), (8, 0), (8, 8)]);
    }
}

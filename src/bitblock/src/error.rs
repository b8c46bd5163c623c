use thiserror::Error;

fn range_detail(l: &usize, r: &usize, size: &usize) -> String {
    if l > r {
        format!(", start of range [{l}] is greater than end of range [{r}]")
    } else {
        format!(" with size {size}")
    }
}

/// Errors that may occur when working with [`BitBlock`]s and the
/// mask helpers in [`utils`].
///
/// Every variant describes a violated precondition on a value
/// passed by the caller. The operation that produced it did not
/// modify any state.
///
/// [`BitBlock`]: crate::BitBlock
/// [`utils`]: crate::utils
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit position outside of `0..size` was accessed.
    #[error("invalid index [{pos}] for BitBlock with size {size}")]
    IndexOutOfRange { pos: usize, size: usize },

    /// A range `l..r` that is not contained in `0..=size` or
    /// where `l > r`.
    #[error("invalid range [{l}:{r}] for BitBlock{}", range_detail(.l, .r, .size))]
    InvalidRange { l: usize, r: usize, size: usize },

    /// An attempt to discard more bits than a block holds.
    #[error(
        "invalid number of bits to discard ({count}) in a BitBlock, this one must be \
         non-negative and less than or equal to the size of the BitBlock ({size})"
    )]
    InvalidDiscardCount { count: usize, size: usize },

    /// A block was converted to an integer type of different width.
    #[error(
        "invalid BitBlock size, BitBlock with size {size} cannot be converted \
         to {type_name} (expected {expected} bits)"
    )]
    SizeMismatch {
        type_name: &'static str,
        expected: u32,
        size: usize,
    },

    /// A value outside of the inclusive range `min..=max`.
    #[error(
        "invalid value ({value}), only values between {min} and {max} \
         (both inclusive) are allowed"
    )]
    InvalidValueRange { value: u32, min: u32, max: u32 },

    /// A character other than `0` or `1` in a binary string.
    #[error("invalid binary digit {found:?} at position {pos}")]
    InvalidDigit { pos: usize, found: char },
}

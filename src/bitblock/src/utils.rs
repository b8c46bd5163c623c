//! Miscellaneous utilities for working with bits.
//!
//! The mask helpers are generic over the unsigned integer types
//! implementing [`Mask`]. Each helper validates `k` against the
//! width of the chosen type.

use crate::Error;

mod private {
    pub trait Sealed {}
}

/// Unsigned integer types that masks can be computed for.
///
/// This trait is sealed and implemented for [`u8`], [`u16`],
/// [`u32`] and [`u64`].
pub trait Mask: private::Sealed + Copy {
    /// The number of bits in the type.
    const BITS: u32;

    /// The value with every bit set to 1.
    const ALL_ONES: Self;

    #[doc(hidden)]
    fn low_ones(k: u32) -> Self;

    #[doc(hidden)]
    fn xor(self, other: Self) -> Self;
}

macro_rules! mask_impl {
    ($($ty:ty),* $(,)*) => {
        $(
            impl private::Sealed for $ty {}

            impl Mask for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ALL_ONES: Self = <$ty>::MAX;

                #[inline]
                fn low_ones(k: u32) -> Self {
                    // `1 << BITS` overflows, so the full mask is special-cased.
                    if k == Self::BITS {
                        Self::ALL_ONES
                    } else {
                        (1 << k) - 1
                    }
                }

                #[inline]
                fn xor(self, other: Self) -> Self {
                    self ^ other
                }
            }
        )*
    };
}

mask_impl!(u8, u16, u32, u64);

#[inline]
fn check_width<T: Mask>(k: u32) -> Result<(), Error> {
    if k <= T::BITS {
        Ok(())
    } else {
        Err(Error::InvalidValueRange {
            value: k,
            min: 0,
            max: T::BITS,
        })
    }
}

/// Gets a value of type `T` in which only the `k` least significant
/// bits are set to 1.
///
/// Fails when `k` exceeds the bit width of `T`.
///
/// ```
/// use bitblock::utils::first_bits_set1;
///
/// assert_eq!(first_bits_set1::<u8>(3), Ok(0b0000_0111));
/// assert_eq!(first_bits_set1::<u32>(32), Ok(u32::MAX));
/// assert!(first_bits_set1::<u8>(9).is_err());
/// ```
#[inline]
pub fn first_bits_set1<T: Mask>(k: u32) -> Result<T, Error> {
    check_width::<T>(k).map(|()| T::low_ones(k))
}

/// Gets a value of type `T` in which only the `k` most significant
/// bits are set to 1.
///
/// Fails when `k` exceeds the bit width of `T`.
///
/// ```
/// use bitblock::utils::last_bits_set1;
///
/// assert_eq!(last_bits_set1::<u8>(3), Ok(0b1110_0000));
/// assert_eq!(last_bits_set1::<u64>(0), Ok(0));
/// ```
#[inline]
pub fn last_bits_set1<T: Mask>(k: u32) -> Result<T, Error> {
    check_width::<T>(k)?;
    Ok(T::ALL_ONES.xor(T::low_ones(T::BITS - k)))
}

/// Computes the mask which keeps the `k` least significant bits of
/// a byte, where `k` is already known to be in range.
#[inline]
pub(crate) fn low_byte_mask(k: u32) -> u8 {
    debug_assert!(k <= u8::BITS);
    u8::low_ones(k)
}

/// Computes the mask which keeps the `k` most significant bits of
/// a byte, where `k` is already known to be in range.
#[inline]
pub(crate) fn high_byte_mask(k: u32) -> u8 {
    debug_assert!(k <= u8::BITS);
    u8::MAX ^ u8::low_ones(u8::BITS - k)
}

//! Conversions between integers and [`BitBlock`]s.
//!
//! Integers are laid out in little endian order: byte 0 of the
//! block holds the least significant 8 bits of the value. Signed
//! integers are reinterpreted as their two's complement bit
//! pattern.
//!
//! [`usize`] and [`isize`] use the fixed-width conversion matching
//! the target's pointer width, i.e. they produce and expect 32-bit
//! blocks on 32-bit targets and 64-bit blocks on 64-bit targets.

use byteorder::{ByteOrder, LittleEndian};

use crate::{BitBlock, Error};

// The widest supported integer type has 8 bytes.
const MAX_BYTES: usize = 8;

mod private {
    pub trait Sealed {}
}

/// Integer types that can be converted to and from [`BitBlock`]s.
///
/// This trait is sealed and implemented for all fixed-width
/// integers up to 64 bits, as well as [`usize`] and [`isize`].
pub trait Integer: private::Sealed + Copy {
    /// The name of the type, as used in error messages.
    const NAME: &'static str;

    /// The number of bits in the type.
    const BITS: u32;

    #[doc(hidden)]
    fn write_le(self, buf: &mut [u8]);

    #[doc(hidden)]
    fn read_le(buf: &[u8]) -> Self;
}

macro_rules! byte_impl {
    ($($ty:ty),* $(,)*) => {
        $(
            impl private::Sealed for $ty {}

            impl Integer for $ty {
                const NAME: &'static str = stringify!($ty);
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn write_le(self, buf: &mut [u8]) {
                    buf[0] = self as u8;
                }

                #[inline]
                fn read_le(buf: &[u8]) -> Self {
                    buf[0] as $ty
                }
            }
        )*
    };
}

macro_rules! int_impl {
    ($($ty:ty => $write:ident, $read:ident);* $(;)*) => {
        $(
            impl private::Sealed for $ty {}

            impl Integer for $ty {
                const NAME: &'static str = stringify!($ty);
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn write_le(self, buf: &mut [u8]) {
                    LittleEndian::$write(buf, self);
                }

                #[inline]
                fn read_le(buf: &[u8]) -> Self {
                    LittleEndian::$read(buf)
                }
            }
        )*
    };
}

macro_rules! platform_impl {
    ($($ty:ty => $fixed:ty),* $(,)*) => {
        $(
            impl private::Sealed for $ty {}

            impl Integer for $ty {
                const NAME: &'static str = stringify!($ty);
                const BITS: u32 = <$fixed>::BITS;

                #[inline]
                fn write_le(self, buf: &mut [u8]) {
                    (self as $fixed).write_le(buf);
                }

                #[inline]
                fn read_le(buf: &[u8]) -> Self {
                    <$fixed>::read_le(buf) as $ty
                }
            }
        )*
    };
}

macro_rules! conversion_impl {
    ($($ty:ty),* $(,)*) => {
        $(
            impl From<$ty> for BitBlock {
                #[inline]
                fn from(x: $ty) -> Self {
                    Self::from_int(x)
                }
            }

            impl TryFrom<&BitBlock> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(block: &BitBlock) -> Result<Self, Self::Error> {
                    block.to_int()
                }
            }
        )*
    };
}

byte_impl!(u8, i8);

int_impl! {
    u16 => write_u16, read_u16;
    i16 => write_i16, read_i16;
    u32 => write_u32, read_u32;
    i32 => write_i32, read_i32;
    u64 => write_u64, read_u64;
    i64 => write_i64, read_i64;
}

#[cfg(target_pointer_width = "32")]
platform_impl!(usize => u32, isize => i32);

#[cfg(target_pointer_width = "64")]
platform_impl!(usize => u64, isize => i64);

conversion_impl!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl BitBlock {
    /// Converts an integer to a [`BitBlock`] of [`Integer::BITS`]
    /// bits in little endian order.
    ///
    /// ```
    /// use bitblock::BitBlock;
    ///
    /// let block = BitBlock::from_int(0x0102_u16);
    /// assert_eq!(block.size(), 16);
    /// assert_eq!(block.view(), &[0x02, 0x01]);
    /// ```
    pub fn from_int<T: Integer>(x: T) -> Self {
        let mut buf = [0; MAX_BYTES];
        let buf = &mut buf[..T::BITS as usize >> 3];
        x.write_le(buf);

        Self::from_bytes(buf, T::BITS as usize)
    }

    /// Reinterprets the bits of the block as an integer in little
    /// endian order.
    ///
    /// Fails unless the block has exactly [`Integer::BITS`] bits.
    ///
    /// ```
    /// use bitblock::BitBlock;
    ///
    /// let block = BitBlock::from_int(-2_i8);
    /// assert_eq!(block.to_int::<u8>(), Ok(0xFE));
    /// assert!(block.to_int::<u16>().is_err());
    /// ```
    pub fn to_int<T: Integer>(&self) -> Result<T, Error> {
        if self.size() == T::BITS as usize {
            Ok(T::read_le(self.view()))
        } else {
            Err(Error::SizeMismatch {
                type_name: T::NAME,
                expected: T::BITS,
                size: self.size(),
            })
        }
    }
}

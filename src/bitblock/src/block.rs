use std::{fmt, iter::FusedIterator, ops::Range, str::FromStr};

use crate::{
    utils::{high_byte_mask, low_byte_mask},
    Error,
};

#[inline]
const fn byte_len(size: usize) -> usize {
    size.div_ceil(8)
}

/// A fixed-size sequence of bits, each of which can be read and
/// modified individually.
///
/// Bit `i` lives in byte `i >> 3` of the backing storage, starting
/// at the LSB of the byte and working towards the MSB. The storage
/// is never larger than needed to hold [`Self::size`] bits and any
/// padding bits past the end of the sequence are always 0.
///
/// The size of a block is fixed at construction. Operations which
/// produce a new block always allocate fresh storage for it, so
/// changes to either block are never observable through the other.
///
/// A [`BitBlock`] carries no synchronization of its own. Mutating
/// the same block from multiple threads must be serialized by the
/// caller, which the borrow rules already enforce for `&mut self`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitBlock {
    // Backing storage with exactly `byte_len(size)` bytes.
    bits: Vec<u8>,

    // The number of bits in the sequence.
    size: usize,
}

impl BitBlock {
    /// Creates a new [`BitBlock`] of `size` bits, all set to 0.
    pub fn zeroed(size: usize) -> Self {
        Self {
            bits: vec![0; byte_len(size)],
            size,
        }
    }

    /// Creates a new [`BitBlock`] holding a copy of the first `size`
    /// bits of `src`.
    ///
    /// When `src` is too short to supply every bit, the remaining
    /// bits are set to 0. Excess bits of `src` are ignored.
    pub fn from_bytes(src: &[u8], size: usize) -> Self {
        let mut block = Self::zeroed(size);

        let n = block.bits.len().min(src.len());
        block.bits[..n].copy_from_slice(&src[..n]);
        block.clear_padding();

        block
    }

    /// Concatenates `blocks` into a new [`BitBlock`], in iteration
    /// order.
    ///
    /// The bits of the first block come first, starting at
    /// position 0.
    pub fn concatenate<'a, I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = &'a BitBlock>,
    {
        let blocks: Vec<_> = blocks.into_iter().collect();
        let size = blocks.iter().map(|b| b.size).sum();

        log::trace!("Concatenating {} blocks into {size} bits", blocks.len());

        let mut out = Self::zeroed(size);
        let mut pos = 0;
        for block in blocks {
            for bit in block.iter() {
                out.put(pos, bit);
                pos += 1;
            }
        }

        out
    }

    /// Gets the number of bits in the block.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Indicates whether the block holds no bits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    fn check_index(&self, pos: usize) -> Result<(), Error> {
        if pos < self.size {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                pos,
                size: self.size,
            })
        }
    }

    #[inline(always)]
    fn bit(&self, pos: usize) -> bool {
        self.bits[pos >> 3] & (1 << (pos & 7)) != 0
    }

    #[inline(always)]
    fn put(&mut self, pos: usize, value: bool) {
        let mask = 1 << (pos & 7);
        if value {
            self.bits[pos >> 3] |= mask;
        } else {
            self.bits[pos >> 3] &= !mask;
        }
    }

    // Zeroes the bits past `size` in the last byte of storage.
    fn clear_padding(&mut self) {
        let rem = (self.size & 7) as u32;
        if rem != 0 {
            if let Some(last) = self.bits.last_mut() {
                *last &= low_byte_mask(rem);
            }
        }
    }

    /// Gets the value of the bit at position `pos`.
    ///
    /// Fails when `pos` is not less than [`Self::size`].
    #[inline]
    pub fn get(&self, pos: usize) -> Result<bool, Error> {
        self.check_index(pos).map(|()| self.bit(pos))
    }

    /// Sets the bit at position `pos` to 0.
    #[inline]
    pub fn set0(&mut self, pos: usize) -> Result<(), Error> {
        self.set(pos, false)
    }

    /// Sets the bit at position `pos` to 1.
    #[inline]
    pub fn set1(&mut self, pos: usize) -> Result<(), Error> {
        self.set(pos, true)
    }

    /// Sets the bit at position `pos` to 1 if `value` is `true`,
    /// or to 0 otherwise.
    ///
    /// Fails when `pos` is not less than [`Self::size`], leaving
    /// the block untouched.
    #[inline]
    pub fn set(&mut self, pos: usize, value: bool) -> Result<(), Error> {
        self.check_index(pos)?;
        self.put(pos, value);
        Ok(())
    }

    /// Gets an iterator over the bits of the block, from position 0
    /// up to the last bit.
    #[inline]
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            block: self,
            range: 0..self.size,
        }
    }

    // Copies `size` bits starting at `start` into a new block.
    //
    // Whole bytes are assembled from two adjacent source bytes at a
    // time rather than moving individual bits.
    fn extract(&self, start: usize, size: usize) -> Self {
        debug_assert!(start + size <= self.size);

        let mut bits = vec![0; byte_len(size)];
        let first = start >> 3;
        let shift = (start & 7) as u32;

        if shift == 0 {
            let len = bits.len();
            bits.copy_from_slice(&self.bits[first..first + len]);
        } else {
            log::trace!("Shifting {size} bits by {shift} from byte {first}");

            let low = high_byte_mask(u8::BITS - shift);
            let high = !low;

            for (i, out) in bits.iter_mut().enumerate() {
                let j = first + i;

                *out = (self.bits[j] & low) >> shift;
                if let Some(next) = self.bits.get(j + 1) {
                    *out |= (next & high) << (u8::BITS - shift);
                }
            }
        }

        let mut block = Self { bits, size };
        block.clear_padding();
        block
    }

    /// Gets a new [`BitBlock`] with a copy of the bits in `l..r`.
    ///
    /// Fails unless `l <= r <= self.size()`.
    pub fn sub_block(&self, l: usize, r: usize) -> Result<Self, Error> {
        if l <= r && r <= self.size {
            Ok(self.extract(l, r - l))
        } else {
            Err(Error::InvalidRange {
                l,
                r,
                size: self.size,
            })
        }
    }

    #[inline]
    fn check_discard(&self, count: usize) -> Result<usize, Error> {
        self.size
            .checked_sub(count)
            .ok_or(Error::InvalidDiscardCount {
                count,
                size: self.size,
            })
    }

    /// Gets a new [`BitBlock`] with a copy of all bits except for
    /// the first `k`.
    ///
    /// Fails when `k` exceeds [`Self::size`].
    pub fn remove_first_bits(&self, k: usize) -> Result<Self, Error> {
        let size = self.check_discard(k)?;
        Ok(self.extract(k, size))
    }

    /// Gets a new [`BitBlock`] with a copy of all bits except for
    /// the last `k`.
    ///
    /// Fails when `k` exceeds [`Self::size`].
    pub fn remove_last_bits(&self, k: usize) -> Result<Self, Error> {
        let size = self.check_discard(k)?;
        Ok(Self::from_bytes(&self.bits, size))
    }

    /// Gets a view of the block's storage as a byte slice.
    #[inline]
    pub fn view(&self) -> &[u8] {
        &self.bits
    }

    /// Gets a copy of the block's storage.
    ///
    /// The result holds exactly as many bytes as needed for
    /// [`Self::size`] bits, with padding bits set to 0.
    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits.clone()
    }

    /// Consumes the [`BitBlock`] and returns the byte buffer.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bits
    }

    /// Formats the block as a string of `0` and `1` characters, one
    /// per bit, starting at position 0.
    pub fn to_binary_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for BitBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_binary_string())
    }
}

impl FromStr for BitBlock {
    type Err = Error;

    /// Parses a string of `0` and `1` characters, where the first
    /// character becomes the bit at position 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut block = Self::zeroed(s.chars().count());
        for (pos, c) in s.chars().enumerate() {
            match c {
                '0' => (),
                '1' => block.put(pos, true),
                found => return Err(Error::InvalidDigit { pos, found }),
            }
        }

        Ok(block)
    }
}

impl<'a> FromIterator<&'a BitBlock> for BitBlock {
    fn from_iter<I: IntoIterator<Item = &'a BitBlock>>(iter: I) -> Self {
        Self::concatenate(iter)
    }
}

impl<'a> IntoIterator for &'a BitBlock {
    type Item = bool;
    type IntoIter = Bits<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the bits of a [`BitBlock`].
///
/// Created by [`BitBlock::iter`].
#[derive(Clone, Debug)]
pub struct Bits<'a> {
    block: &'a BitBlock,
    range: Range<usize>,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        self.range.next().map(|pos| self.block.bit(pos))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Bits<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        self.range.next_back().map(|pos| self.block.bit(pos))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl FusedIterator for Bits<'_> {}

#[cfg(feature = "serde")]
impl serde::Serialize for BitBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BitBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        log::debug!("Deserializing BitBlock from {} digits", s.chars().count());

        s.parse().map_err(serde::de::Error::custom)
    }
}

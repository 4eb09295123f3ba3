//! Fixed-width bit-strings.
//!
//! A [`Bits`] value is an ordered run of [`Bit`]s with the most significant
//! bit at index 0. It is the type of every bus in the machine.
//!
//! 1. **Construction:** zeros, ones, replication, parsing and conversion from `u32`.
//! 2. **Width Handling:** zero/sign extension, truncation (keeps the rightmost bits),
//!    resizing, slicing and concatenation.
//! 3. **Decoding:** conversion back to native integers at the edges of the model
//!    (address decode, console output, introspection).

use std::fmt;
use std::ops::{Not, Range};

use super::bit::Bit;
use crate::common::error::{LogicError, LogicResult};

/// An MSB-first bit-string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bits {
    bits: Vec<Bit>,
}

impl Bits {
    /// All-zero bit-string of the given width.
    pub fn zeros(width: usize) -> Self {
        Self::replicate(Bit::Zero, width)
    }

    /// All-one bit-string of the given width.
    pub fn ones(width: usize) -> Self {
        Self::replicate(Bit::One, width)
    }

    /// `width` copies of `bit`.
    pub fn replicate(bit: Bit, width: usize) -> Self {
        Self {
            bits: vec![bit; width],
        }
    }

    /// A one-bit string holding `bit`.
    pub fn from_bit(bit: Bit) -> Self {
        Self { bits: vec![bit] }
    }

    /// Builds a bit-string from MSB-first bits, rejecting an empty vector.
    pub fn from_vec(bits: Vec<Bit>) -> LogicResult<Self> {
        if bits.is_empty() {
            return Err(LogicError::Empty);
        }
        Ok(Self { bits })
    }

    /// The low `width` bits of `value`, zero-padded on the left past bit 31.
    pub fn from_u32(value: u32, width: usize) -> Self {
        let bits = (0..width)
            .map(|i| {
                let position = width - 1 - i;
                Bit::from_bool(position < 32 && (value >> position) & 1 == 1)
            })
            .collect();
        Self { bits }
    }

    /// Parses a string of `0`/`1` characters; `_` separators are ignored.
    ///
    /// # Errors
    ///
    /// [`LogicError::Empty`] for a string with no digits and
    /// [`LogicError::Parse`] for any other character.
    pub fn parse(text: &str) -> LogicResult<Self> {
        let mut bits = Vec::with_capacity(text.len());
        for c in text.chars().filter(|&c| c != '_') {
            let bit = Bit::from_char(c).ok_or_else(|| LogicError::Parse(text.to_string()))?;
            bits.push(bit);
        }
        Self::from_vec(bits)
    }

    /// Number of bits.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` when the string carries no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, most significant first.
    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    /// Iterates the bits, most significant first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Bit> + ExactSizeIterator + '_ {
        self.bits.iter().copied()
    }

    /// Bit at `index` (0 = most significant).
    ///
    /// # Errors
    ///
    /// [`LogicError::IndexOutOfRange`] past the end.
    pub fn bit(&self, index: usize) -> LogicResult<Bit> {
        self.bits
            .get(index)
            .copied()
            .ok_or(LogicError::IndexOutOfRange {
                index,
                width: self.width(),
            })
    }

    /// Bit `position` counted from the least significant end.
    ///
    /// # Errors
    ///
    /// [`LogicError::IndexOutOfRange`] past the end.
    pub fn bit_from_lsb(&self, position: usize) -> LogicResult<Bit> {
        if position >= self.width() {
            return Err(LogicError::IndexOutOfRange {
                index: position,
                width: self.width(),
            });
        }
        self.bit(self.width() - 1 - position)
    }

    /// Most significant bit (zero for an empty string).
    pub fn msb(&self) -> Bit {
        self.bits.first().copied().unwrap_or_default()
    }

    /// Least significant bit (zero for an empty string).
    pub fn lsb(&self) -> Bit {
        self.bits.last().copied().unwrap_or_default()
    }

    /// Bits in `range` (MSB-first indices).
    ///
    /// # Errors
    ///
    /// [`LogicError::IndexOutOfRange`] when the range leaves the string and
    /// [`LogicError::Empty`] for an empty range.
    pub fn slice(&self, range: Range<usize>) -> LogicResult<Self> {
        if range.end > self.width() || range.start > range.end {
            return Err(LogicError::IndexOutOfRange {
                index: range.end,
                width: self.width(),
            });
        }
        Self::from_vec(self.bits[range].to_vec())
    }

    /// `self` followed by `low` (self supplies the high bits).
    pub fn concat(&self, low: &Self) -> Self {
        let mut bits = Vec::with_capacity(self.width() + low.width());
        bits.extend_from_slice(&self.bits);
        bits.extend_from_slice(&low.bits);
        Self { bits }
    }

    /// Left-pads with zeros to `width`.
    ///
    /// # Errors
    ///
    /// [`LogicError::WidthMismatch`] if `width` is narrower than the string.
    pub fn zero_extend(&self, width: usize) -> LogicResult<Self> {
        self.extend_with(Bit::Zero, width)
    }

    /// Left-pads with copies of the most significant bit to `width`.
    ///
    /// # Errors
    ///
    /// [`LogicError::WidthMismatch`] if `width` is narrower than the string.
    pub fn sign_extend(&self, width: usize) -> LogicResult<Self> {
        self.extend_with(self.msb(), width)
    }

    fn extend_with(&self, fill: Bit, width: usize) -> LogicResult<Self> {
        if width < self.width() {
            return Err(LogicError::WidthMismatch {
                expected: self.width(),
                found: width,
            });
        }
        Ok(Self::replicate(fill, width - self.width()).concat(self))
    }

    /// Keeps the rightmost `width` bits.
    ///
    /// # Errors
    ///
    /// [`LogicError::WidthMismatch`] if `width` is wider than the string and
    /// [`LogicError::Empty`] for a zero width.
    pub fn truncate(&self, width: usize) -> LogicResult<Self> {
        if width > self.width() {
            return Err(LogicError::WidthMismatch {
                expected: self.width(),
                found: width,
            });
        }
        Self::from_vec(self.bits[self.width() - width..].to_vec())
    }

    /// Zero-extends or truncates (from the left) to exactly `width` bits.
    pub fn resize(&self, width: usize) -> Self {
        if width >= self.width() {
            Self::zeros(width - self.width()).concat(self)
        } else {
            Self {
                bits: self.bits[self.width() - width..].to_vec(),
            }
        }
    }

    /// Checks that the string has exactly `width` bits.
    ///
    /// # Errors
    ///
    /// [`LogicError::Empty`] or [`LogicError::WidthMismatch`].
    pub fn expect_width(&self, width: usize) -> LogicResult<&Self> {
        if self.is_empty() {
            return Err(LogicError::Empty);
        }
        if self.width() != width {
            return Err(LogicError::WidthMismatch {
                expected: width,
                found: self.width(),
            });
        }
        Ok(self)
    }

    /// Checks that two operands are non-empty and equally wide, returning the width.
    ///
    /// # Errors
    ///
    /// [`LogicError::Empty`] or [`LogicError::WidthMismatch`].
    pub fn same_width(a: &Self, b: &Self) -> LogicResult<usize> {
        if a.is_empty() || b.is_empty() {
            return Err(LogicError::Empty);
        }
        b.expect_width(a.width())?;
        Ok(a.width())
    }

    /// Unsigned value of a string of at most 32 bits.
    ///
    /// # Errors
    ///
    /// [`LogicError::Empty`] or [`LogicError::WidthMismatch`] past 32 bits.
    pub fn to_u32(&self) -> LogicResult<u32> {
        if self.is_empty() {
            return Err(LogicError::Empty);
        }
        if self.width() > 32 {
            return Err(LogicError::WidthMismatch {
                expected: 32,
                found: self.width(),
            });
        }
        Ok(self
            .bits
            .iter()
            .fold(0u32, |acc, bit| (acc << 1) | bit.as_u32()))
    }

    /// Unsigned value as an index.
    ///
    /// # Errors
    ///
    /// As [`Bits::to_u32`].
    pub fn to_usize(&self) -> LogicResult<usize> {
        self.to_u32().map(|v| v as usize)
    }

    /// Two's-complement value of a string of at most 32 bits.
    ///
    /// # Errors
    ///
    /// As [`Bits::to_u32`].
    pub fn to_i32(&self) -> LogicResult<i32> {
        self.sign_extend(32.max(self.width()))?.to_u32().map(|v| v as i32)
    }

    /// Returns `true` when every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|b| b.is_zero())
    }
}

impl FromIterator<Bit> for Bits {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Not for &Bits {
    type Output = Bits;

    fn not(self) -> Bits {
        self.iter().map(|b| !b).collect()
    }
}

impl Not for Bits {
    type Output = Self;

    fn not(self) -> Self {
        !&self
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bits[{}]({self})", self.width())
    }
}

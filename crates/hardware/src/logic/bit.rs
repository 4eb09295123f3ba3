//! Single-bit values.
//!
//! [`Bit`] is the only value a wire can carry. The operator impls on it are the
//! primitive gates; every wider circuit in the crate is built from them.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use serde::{Deserialize, Serialize};

/// A single binary signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bit {
    /// Logic low.
    #[default]
    Zero,
    /// Logic high.
    One,
}

impl Bit {
    /// Converts a boolean into a bit.
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }

    /// Returns `true` for [`Bit::One`].
    pub const fn is_one(self) -> bool {
        matches!(self, Self::One)
    }

    /// Returns `true` for [`Bit::Zero`].
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero)
    }

    /// Numeric value of the bit (0 or 1).
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Parses `'0'` or `'1'`.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_one()
    }
}

impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl BitAnd for Bit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::One, Self::One) => Self::One,
            _ => Self::Zero,
        }
    }
}

impl BitOr for Bit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Zero, Self::Zero) => Self::Zero,
            _ => Self::One,
        }
    }
}

impl BitXor for Bit {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        if self == rhs { Self::Zero } else { Self::One }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_one() { "1" } else { "0" })
    }
}

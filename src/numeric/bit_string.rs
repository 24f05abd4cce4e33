// ============================================================================
// Bit String
// Fixed-width sequence of binary digits, most-significant bit first
// ============================================================================

use super::errors::{CodecError, CodecResult};
use crate::utils::group_bits;
use num_bigint::BigUint;
use num_traits::Zero;
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Characters ignored when parsing binary input ("1010 1010", "1.0.1", "10-10").
const SEPARATORS: [char; 3] = [' ', '.', '-'];

/// Ordered sequence of binary digits, most-significant first.
///
/// Bit strings up to 64 digits live inline; longer ones (fixed-point layouts
/// built while decoding IEEE-754 doubles) spill to the heap.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitString(SmallVec<[bool; 64]>);

impl BitString {
    /// Widest pattern any encoder will build.
    pub const MAX_WIDTH: usize = 4096;

    /// Check a requested encode width.
    ///
    /// # Errors
    /// Returns `InvalidParameters` for zero or anything above [`Self::MAX_WIDTH`].
    #[inline]
    pub fn check_width(width: usize) -> CodecResult<()> {
        if width == 0 || width > Self::MAX_WIDTH {
            return Err(CodecError::InvalidParameters);
        }
        Ok(())
    }

    /// Empty bit string.
    #[inline]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// `width` zero bits.
    #[inline]
    pub fn zeros(width: usize) -> Self {
        Self(smallvec![false; width])
    }

    /// `width` one bits.
    #[inline]
    pub fn ones(width: usize) -> Self {
        Self(smallvec![true; width])
    }

    /// Parse binary text, dropping separator characters.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if anything other than `0`, `1` or a separator
    /// is present, or if no digit remains.
    pub fn parse(input: &str) -> CodecResult<Self> {
        let mut bits = SmallVec::new();
        for c in input.trim().chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                c if SEPARATORS.contains(&c) => {},
                _ => return Err(CodecError::InvalidFormat),
            }
        }

        if bits.is_empty() {
            return Err(CodecError::InvalidFormat);
        }
        Ok(Self(bits))
    }

    /// Standard binary expansion of `value`, zero-padded on the left to `width`.
    ///
    /// # Errors
    /// - `InvalidParameters` if `width` exceeds [`Self::MAX_WIDTH`]
    /// - `WidthOverflow` if the natural bit length exceeds `width`
    pub fn from_unsigned(value: &BigUint, width: usize) -> CodecResult<Self> {
        if width > Self::MAX_WIDTH {
            return Err(CodecError::InvalidParameters);
        }
        let required = value.bits() as usize;
        if required > width {
            return Err(CodecError::WidthOverflow { required, width });
        }
        Ok((0..width).rev().map(|i| value.bit(i as u64)).collect())
    }

    /// Minimal binary expansion of `value` (empty for zero).
    pub fn natural(value: &BigUint) -> Self {
        (0..value.bits()).rev().map(|i| value.bit(i)).collect()
    }

    /// Unsigned integer formed by all bits.
    #[inline]
    pub fn to_unsigned(&self) -> BigUint {
        bits_to_unsigned(&self.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Most-significant bit, if any.
    #[inline]
    pub fn leading_bit(&self) -> Option<bool> {
        self.0.first().copied()
    }

    /// True if every bit equals `bit` (vacuously true when empty).
    #[inline]
    pub fn is_all(&self, bit: bool) -> bool {
        self.0.iter().all(|&b| b == bit)
    }

    #[inline]
    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    /// Bitwise complement.
    pub fn inverted(&self) -> Self {
        self.iter().map(|b| !b).collect()
    }

    /// Binary increment with carry propagation from the least-significant bit.
    ///
    /// Returns the carry out of the most-significant bit; the width never grows.
    pub fn increment(&mut self) -> bool {
        for bit in self.0.iter_mut().rev() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return false;
            }
        }
        true
    }

    /// Four-digit clusters with a short leading cluster ("10 1010 0101").
    pub fn grouped(&self) -> String {
        group_bits(&self.to_string())
    }
}

/// Unsigned integer formed by `bits`, most-significant first.
pub(crate) fn bits_to_unsigned(bits: &[bool]) -> BigUint {
    bits.iter().fold(BigUint::zero(), |acc, &bit| {
        let shifted = acc << 1u32;
        if bit {
            shifted + 1u32
        } else {
            shifted
        }
    })
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<bool> for BitString {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromStr for BitString {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString({})", self)
    }
}

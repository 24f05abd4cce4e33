// ============================================================================
// Representation Layouts
// Field widths for fixed-point (Q-format) and IEEE-754 bit patterns
// ============================================================================

use crate::numeric::{BitString, CodecError, CodecResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Fixed-Point Specification
// ============================================================================

/// Q-format field widths.
///
/// The integer field is sign-magnitude: one sign bit plus `k` magnitude bits,
/// followed by `j` fraction bits, so a pattern is `k + j + 1` bits wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedPointSpec {
    int_bits: usize,
    frac_bits: usize,
}

impl FixedPointSpec {
    /// Layout with `k` integer and `j` fraction bits.
    ///
    /// # Errors
    /// Returns `InvalidParameters` unless both `k > 0` and `j > 0`, and the
    /// pattern width `k + j + 1` is at most `BitString::MAX_WIDTH`.
    pub fn new(k: i64, j: i64) -> CodecResult<Self> {
        if k <= 0 || j <= 0 {
            return Err(CodecError::InvalidParameters);
        }
        if k.saturating_add(j) >= BitString::MAX_WIDTH as i64 {
            return Err(CodecError::InvalidParameters);
        }
        let int_bits = usize::try_from(k).map_err(|_| CodecError::InvalidParameters)?;
        let frac_bits = usize::try_from(j).map_err(|_| CodecError::InvalidParameters)?;
        Ok(Self {
            int_bits,
            frac_bits,
        })
    }

    /// Layout without the positivity check; IEEE-754 decoding needs `j == 0`
    /// for exponents beyond the mantissa width.
    pub(crate) fn unchecked(int_bits: usize, frac_bits: usize) -> Self {
        Self {
            int_bits,
            frac_bits,
        }
    }

    /// `k`: magnitude bits of the integer part.
    #[inline]
    pub fn int_bits(&self) -> usize {
        self.int_bits
    }

    /// `j`: fraction bits.
    #[inline]
    pub fn frac_bits(&self) -> usize {
        self.frac_bits
    }

    /// Total pattern width, `k + j + 1`.
    #[inline]
    pub fn width(&self) -> usize {
        self.int_bits + self.frac_bits + 1
    }
}

// ============================================================================
// IEEE-754 Layout
// ============================================================================

/// Sign / exponent / mantissa layout of an IEEE-754 binary format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IeeeLayout {
    /// Display name ("binary32", "binary64")
    pub name: &'static str,
    /// Total width
    pub bits: usize,
    /// C: exponent field width
    pub exponent_bits: usize,
    /// M: stored mantissa width (implicit leading bit excluded)
    pub mantissa_bits: usize,
    /// Exponent bias
    pub bias: i64,
}

impl IeeeLayout {
    /// Single precision: C=8, M=23, Bias=127
    pub const SINGLE: IeeeLayout = IeeeLayout {
        name: "binary32",
        bits: 32,
        exponent_bits: 8,
        mantissa_bits: 23,
        bias: 127,
    };

    /// Double precision: C=11, M=52, Bias=1023
    pub const DOUBLE: IeeeLayout = IeeeLayout {
        name: "binary64",
        bits: 64,
        exponent_bits: 11,
        mantissa_bits: 52,
        bias: 1023,
    };

    /// Look up the layout for a total width.
    ///
    /// # Errors
    /// Returns `UnsupportedWidth` for anything but 32 and 64.
    pub fn for_width(bits: usize) -> CodecResult<&'static IeeeLayout> {
        LAYOUTS
            .iter()
            .find(|layout| layout.bits == bits)
            .ok_or(CodecError::UnsupportedWidth(bits))
    }

    /// Largest unbiased exponent of a normal number.
    #[inline]
    pub fn max_exponent(&self) -> i64 {
        self.bias
    }

    /// Smallest unbiased exponent of a normal number.
    #[inline]
    pub fn min_exponent(&self) -> i64 {
        1 - self.bias
    }
}

static LAYOUTS: [IeeeLayout; 2] = [IeeeLayout::SINGLE, IeeeLayout::DOUBLE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point_spec() {
        let spec = FixedPointSpec::new(4, 4).unwrap();
        assert_eq!(spec.int_bits(), 4);
        assert_eq!(spec.frac_bits(), 4);
        assert_eq!(spec.width(), 9);
    }

    #[test]
    fn test_fixed_point_spec_invalid() {
        assert_eq!(FixedPointSpec::new(0, 4), Err(CodecError::InvalidParameters));
        assert_eq!(FixedPointSpec::new(4, 0), Err(CodecError::InvalidParameters));
        assert_eq!(FixedPointSpec::new(-1, 4), Err(CodecError::InvalidParameters));
    }

    #[test]
    fn test_fixed_point_spec_width_limit() {
        let widest = FixedPointSpec::new(2047, 2048).unwrap();
        assert_eq!(widest.width(), BitString::MAX_WIDTH);

        assert_eq!(FixedPointSpec::new(2048, 2048), Err(CodecError::InvalidParameters));
        assert_eq!(FixedPointSpec::new(i64::MAX, 1), Err(CodecError::InvalidParameters));
        assert_eq!(FixedPointSpec::new(1, i64::MAX), Err(CodecError::InvalidParameters));
    }

    #[test]
    fn test_ieee_layout_lookup() {
        let single = IeeeLayout::for_width(32).unwrap();
        assert_eq!(single.exponent_bits, 8);
        assert_eq!(single.mantissa_bits, 23);
        assert_eq!(single.bias, 127);
        assert_eq!(1 + single.exponent_bits + single.mantissa_bits, single.bits);

        let double = IeeeLayout::for_width(64).unwrap();
        assert_eq!(double.max_exponent(), 1023);
        assert_eq!(double.min_exponent(), -1022);

        assert_eq!(
            IeeeLayout::for_width(16),
            Err(CodecError::UnsupportedWidth(16))
        );
    }
}

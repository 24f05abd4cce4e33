// ============================================================================
// Signed Integer
// Sign-tagged magnitude, distinguishing +0 from -0
// ============================================================================

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::fmt;

/// Integer as a sign tag plus magnitude.
///
/// Decoders for sign-magnitude and ones'-complement produce `-0` for the
/// negative zero pattern; the tag survives so it can be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SignedInteger {
    negative: bool,
    magnitude: BigUint,
}

impl SignedInteger {
    #[inline]
    pub fn new(negative: bool, magnitude: BigUint) -> Self {
        Self {
            negative,
            magnitude,
        }
    }

    #[inline]
    pub fn negative_zero() -> Self {
        Self::new(true, BigUint::zero())
    }

    /// Sign tag, set for negative values and for `-0`.
    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// Strictly below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative && !self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative_zero(&self) -> bool {
        self.negative && self.magnitude.is_zero()
    }

    #[inline]
    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    /// Numeric value, if it fits (`-0` maps to `0`).
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude.to_u128()?;
        if !self.negative {
            return i128::try_from(magnitude).ok();
        }
        if magnitude == 1u128 << 127 {
            Some(i128::MIN)
        } else {
            i128::try_from(magnitude).ok().map(|m| -m)
        }
    }

    #[inline]
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }
}

impl From<i64> for SignedInteger {
    fn from(value: i64) -> Self {
        Self::new(value < 0, BigUint::from(value.unsigned_abs()))
    }
}

impl From<i128> for SignedInteger {
    fn from(value: i128) -> Self {
        Self::new(value < 0, BigUint::from(value.unsigned_abs()))
    }
}

impl From<BigUint> for SignedInteger {
    fn from(magnitude: BigUint) -> Self {
        Self::new(false, magnitude)
    }
}

impl fmt::Display for SignedInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_tags() {
        let minus_five = SignedInteger::from(-5i64);
        assert!(minus_five.is_negative());
        assert_eq!(minus_five.to_i64(), Some(-5));
        assert_eq!(minus_five.to_string(), "-5");

        let negative_zero = SignedInteger::negative_zero();
        assert!(!negative_zero.is_negative());
        assert!(negative_zero.is_negative_zero());
        assert_eq!(negative_zero.to_i64(), Some(0));
        assert_eq!(negative_zero.to_string(), "-0");
    }

    #[test]
    fn test_i128_limits() {
        assert_eq!(SignedInteger::from(i128::MIN).to_i128(), Some(i128::MIN));
        assert_eq!(SignedInteger::from(i128::MAX).to_i128(), Some(i128::MAX));
        let too_big = SignedInteger::from(BigUint::from(u128::MAX));
        assert_eq!(too_big.to_i128(), None);
    }
}

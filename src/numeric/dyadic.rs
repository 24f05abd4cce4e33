// ============================================================================
// Dyadic Value
// Exact binary fraction produced by fixed-point and IEEE-754 decoding
// ============================================================================

use super::errors::{CodecError, CodecResult};
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;

/// Exact value `±significand / 2^scale`.
///
/// Every finite fixed-point or IEEE-754 bit pattern is such a number, so
/// decoding never rounds. Display renders the exact decimal expansion
/// (a binary fraction with `scale` digits has at most `scale` decimal digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Dyadic {
    negative: bool,
    significand: BigUint,
    scale: usize,
}

impl Dyadic {
    #[inline]
    pub fn new(negative: bool, significand: BigUint, scale: usize) -> Self {
        Self {
            negative,
            significand,
            scale,
        }
    }

    /// Sign tag, kept for zero as well.
    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.significand.is_zero()
    }

    /// Integer part of the magnitude.
    pub fn integer_part(&self) -> BigUint {
        &self.significand >> self.scale
    }

    /// Fractional part of the magnitude as `(numerator, scale)`.
    pub fn fraction_part(&self) -> (BigUint, usize) {
        let whole = self.integer_part() << self.scale;
        (&self.significand - whole, self.scale)
    }

    /// Nearest `f64` (correctly rounded through the exact decimal text).
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if the exact expansion does not fit into a
    /// `Decimal` (more than 28 fractional digits or 96 significant bits).
    pub fn to_decimal(&self) -> CodecResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str_exact(&self.to_string())
            .map_err(|_| CodecError::PrecisionLoss)
    }

    /// Exact decimal digits of the fraction, trailing zeros removed.
    fn fraction_digits(&self) -> String {
        let (numerator, scale) = self.fraction_part();
        if numerator.is_zero() {
            return "0".to_string();
        }
        // n / 2^s == n * 5^s / 10^s
        let scaled = numerator * BigUint::from(5u32).pow(scale as u32);
        let digits = format!("{:0>width$}", scaled.to_string(), width = scale);
        digits.trim_end_matches('0').to_string()
    }
}

impl fmt::Display for Dyadic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}.{}", self.integer_part(), self.fraction_digits())
    }
}

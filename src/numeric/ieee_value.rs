// ============================================================================
// IEEE-754 Value
// Classified result of decoding an IEEE-754 bit pattern
// ============================================================================

use super::dyadic::Dyadic;
use std::fmt;

/// Decoded IEEE-754 pattern, classified in priority order: infinity, NaN,
/// zero, then finite numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IeeeValue {
    /// Exponent all ones, mantissa zero
    Infinity { negative: bool },
    /// Exponent all ones, mantissa non-zero (sign ignored)
    NaN,
    /// Exponent and mantissa all zero
    Zero { negative: bool },
    /// Exponent field neither all zeros nor all ones; implicit leading 1
    Normal(Dyadic),
    /// Exponent field zero, mantissa non-zero; implicit leading 0
    Subnormal(Dyadic),
}

impl IeeeValue {
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, IeeeValue::NaN)
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, IeeeValue::Infinity { .. })
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Sign bit as decoded; NaN reports `false`.
    pub fn is_sign_negative(&self) -> bool {
        match self {
            IeeeValue::Infinity { negative } | IeeeValue::Zero { negative } => *negative,
            IeeeValue::NaN => false,
            IeeeValue::Normal(value) | IeeeValue::Subnormal(value) => value.is_sign_negative(),
        }
    }

    /// Exact value of a finite, non-zero pattern.
    pub fn as_dyadic(&self) -> Option<&Dyadic> {
        match self {
            IeeeValue::Normal(value) | IeeeValue::Subnormal(value) => Some(value),
            _ => None,
        }
    }

    /// Nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        if let Some(value) = self.as_dyadic() {
            return value.to_f64();
        }
        match self {
            IeeeValue::Infinity { negative: false } => f64::INFINITY,
            IeeeValue::Infinity { negative: true } => f64::NEG_INFINITY,
            IeeeValue::Zero { negative: false } => 0.0,
            IeeeValue::Zero { negative: true } => -0.0,
            _ => f64::NAN,
        }
    }
}

impl fmt::Display for IeeeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IeeeValue::Infinity { negative: false } => f.write_str("inf"),
            IeeeValue::Infinity { negative: true } => f.write_str("-inf"),
            IeeeValue::NaN => f.write_str("NaN"),
            IeeeValue::Zero { negative: false } => f.write_str("0.0"),
            IeeeValue::Zero { negative: true } => f.write_str("-0.0"),
            IeeeValue::Normal(value) | IeeeValue::Subnormal(value) => write!(f, "{}", value),
        }
    }
}

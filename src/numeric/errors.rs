// ============================================================================
// Codec Errors
// Error types for encoding and decoding fixed-width representations
// ============================================================================

use super::bit_string::BitString;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while encoding or decoding a representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CodecError {
    /// Input contains characters outside the expected alphabet
    InvalidFormat,
    /// Negative value for a representation without a sign
    NegativeValue,
    /// Bit-string length differs from the width implied by the format
    WidthMismatch { expected: usize, actual: usize },
    /// Natural encoding needs more bits than the requested width
    WidthOverflow { required: usize, width: usize },
    /// Width, fixed-point k or j is not positive, or too wide
    InvalidParameters,
    /// IEEE-754 width other than 32 or 64
    UnsupportedWidth(usize),
    /// Unbiased exponent above the largest finite IEEE-754 exponent
    ExponentOverflow { exponent: i64, max: i64 },
    /// Exact conversion to `rust_decimal::Decimal` is impossible
    PrecisionLoss,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidFormat => write!(f, "invalid format: could not parse input"),
            CodecError::NegativeValue => {
                write!(f, "negative value: unsigned binary has no sign")
            },
            CodecError::WidthMismatch { expected, actual } => write!(
                f,
                "width mismatch: expected {} bits, got {}",
                expected, actual
            ),
            CodecError::WidthOverflow { required, width } => write!(
                f,
                "width overflow: value needs {} bits, width is {}",
                required, width
            ),
            CodecError::InvalidParameters => {
                write!(
                    f,
                    "invalid parameters: widths must be between 1 and {} bits",
                    BitString::MAX_WIDTH
                )
            },
            CodecError::UnsupportedWidth(width) => write!(
                f,
                "unsupported width: IEEE-754 supports 32 or 64 bits, got {}",
                width
            ),
            CodecError::ExponentOverflow { exponent, max } => write!(
                f,
                "exponent overflow: exponent {} exceeds maximum {}",
                exponent, max
            ),
            CodecError::PrecisionLoss => write!(
                f,
                "precision loss: value not exactly representable as a decimal"
            ),
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CodecError::WidthMismatch {
                expected: 9,
                actual: 8
            }
            .to_string(),
            "width mismatch: expected 9 bits, got 8"
        );
        assert_eq!(
            CodecError::UnsupportedWidth(16).to_string(),
            "unsupported width: IEEE-754 supports 32 or 64 bits, got 16"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CodecError::InvalidFormat, CodecError::InvalidFormat);
        assert_ne!(CodecError::InvalidFormat, CodecError::NegativeValue);
        assert_ne!(
            CodecError::WidthOverflow {
                required: 9,
                width: 8
            },
            CodecError::WidthOverflow {
                required: 10,
                width: 8
            }
        );
    }
}

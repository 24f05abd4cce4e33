// ============================================================================
// Codec Interface
// Defines the contract for pluggable binary representations
// ============================================================================

use crate::domain::{Format, InputKind};
use crate::numeric::{BitString, CodecResult, Dyadic, IeeeValue, SignedInteger};
use crate::utils::group_thousands;
use std::fmt;

/// Strategy pattern interface for binary representations
/// Implementations: unsigned, sign-magnitude, ones'/two's complement,
/// fixed-point, IEEE-754
///
/// Both directions take raw text and validate it on entry, so a codec can be
/// driven straight from user input.
pub trait Codec: Send + Sync {
    /// The representation this codec implements
    fn format(&self) -> Format;

    /// Get the codec name for logging/reports
    fn name(&self) -> &str {
        self.format().name()
    }

    /// Encode decimal text as a bit string
    fn encode(&self, decimal: &str) -> CodecResult<BitString>;

    /// Decode binary text to a value
    fn decode(&self, binary: &str) -> CodecResult<DecodedValue>;

    /// Run the direction implied by `kind`
    fn convert(&self, input: &str, kind: InputKind) -> CodecResult<ConversionOutput> {
        match kind {
            InputKind::Decimal => self.encode(input).map(ConversionOutput::Encoded),
            InputKind::Binary => self.decode(input).map(ConversionOutput::Decoded),
        }
    }
}

/// Value recovered from a bit pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    /// Unsigned, sign-magnitude, ones' or two's complement
    Integer(SignedInteger),
    /// Fixed-point
    Fixed(Dyadic),
    /// IEEE-754
    Float(IeeeValue),
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Integer(value) => write!(f, "{}", value),
            DecodedValue::Fixed(value) => write!(f, "{}", value),
            DecodedValue::Float(value) => write!(f, "{}", value),
        }
    }
}

/// Successful result of one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutput {
    Encoded(BitString),
    Decoded(DecodedValue),
}

impl ConversionOutput {
    /// Text for display, optionally with digit grouping
    pub fn render(&self, beautify: bool) -> String {
        match (self, beautify) {
            (ConversionOutput::Encoded(bits), true) => bits.grouped(),
            (ConversionOutput::Encoded(bits), false) => bits.to_string(),
            (ConversionOutput::Decoded(value), true) => group_thousands(&value.to_string()),
            (ConversionOutput::Decoded(value), false) => value.to_string(),
        }
    }
}

impl fmt::Display for ConversionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let bits: BitString = "00001010".parse().unwrap();
        let encoded = ConversionOutput::Encoded(bits);
        assert_eq!(encoded.render(false), "00001010");
        assert_eq!(encoded.render(true), "0000 1010");

        let decoded =
            ConversionOutput::Decoded(DecodedValue::Integer(SignedInteger::from(-1234567i64)));
        assert_eq!(decoded.render(false), "-1234567");
        assert_eq!(decoded.render(true), "-1,234,567");
    }
}

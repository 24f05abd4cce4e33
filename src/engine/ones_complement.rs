// ============================================================================
// Ones' Complement
// Negative values are the bitwise complement of their magnitude
// ============================================================================

use super::{sign_magnitude, unsigned_binary};
use crate::domain::Format;
use crate::interfaces::{Codec, DecodedValue};
use crate::numeric::{BitString, CodecError, CodecResult, DecimalValue, SignedInteger};

/// Encode into `width` bits.
///
/// The magnitude goes into `width - 1` bits as in sign-magnitude; for a
/// negative sign tag those bits are inverted behind a `1` sign bit.
/// Representable range is `±(2^(width-1) - 1)`, with two zeros.
///
/// # Errors
/// - `InvalidParameters` if `width` is zero or above `BitString::MAX_WIDTH`
/// - `WidthOverflow` if the magnitude needs more than `width - 1` bits
pub fn encode(value: &SignedInteger, width: usize) -> CodecResult<BitString> {
    let magnitude = sign_magnitude::encode_magnitude(value.magnitude(), width)?;
    let negative = value.is_sign_negative();

    let mut bits = BitString::new();
    bits.push(negative);
    if negative {
        bits.extend(magnitude.inverted().iter());
    } else {
        bits.extend(magnitude.iter());
    }
    Ok(bits)
}

/// Decode: with the sign bit set, invert every bit and negate.
///
/// The all-ones pattern decodes to `-0`.
pub fn decode(bits: &BitString) -> CodecResult<SignedInteger> {
    match bits.leading_bit() {
        Some(true) => Ok(SignedInteger::new(
            true,
            unsigned_binary::decode(&bits.inverted()),
        )),
        Some(false) => Ok(SignedInteger::new(false, unsigned_binary::decode(bits))),
        None => Err(CodecError::InvalidFormat),
    }
}

/// `dec_to_ones_complement("-5", 8)` -> `11111010`
pub fn dec_to_ones_complement(dec: &str, bits: usize) -> CodecResult<BitString> {
    let value = DecimalValue::parse(dec)?.to_integer()?;
    encode(&value, bits)
}

/// `ones_complement_to_dec("11111010")` -> `-5`
pub fn ones_complement_to_dec(bin: &str) -> CodecResult<SignedInteger> {
    decode(&BitString::parse(bin)?)
}

/// Ones' complement codec with a fixed encode width
#[derive(Debug, Clone, Copy)]
pub struct OnesComplement {
    width: usize,
}

impl OnesComplement {
    /// # Errors
    /// Returns `InvalidParameters` unless `0 < width <= BitString::MAX_WIDTH`.
    pub fn new(width: usize) -> CodecResult<Self> {
        BitString::check_width(width)?;
        Ok(Self { width })
    }
}

impl Codec for OnesComplement {
    fn format(&self) -> Format {
        Format::OnesComplement
    }

    fn encode(&self, decimal: &str) -> CodecResult<BitString> {
        dec_to_ones_complement(decimal, self.width)
    }

    fn decode(&self, binary: &str) -> CodecResult<DecodedValue> {
        ones_complement_to_dec(binary).map(DecodedValue::Integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(
            dec_to_ones_complement("-5", 8).unwrap().to_string(),
            "11111010"
        );
        assert_eq!(dec_to_ones_complement("5", 8).unwrap().to_string(), "00000101");
        assert_eq!(dec_to_ones_complement("0", 8).unwrap().to_string(), "00000000");
        assert_eq!(
            dec_to_ones_complement("-127", 8).unwrap().to_string(),
            "10000000"
        );
    }

    #[test]
    fn test_encode_overflow() {
        assert_eq!(
            dec_to_ones_complement("-128", 8),
            Err(CodecError::WidthOverflow {
                required: 9,
                width: 8
            })
        );
    }

    #[test]
    fn test_decode() {
        assert_eq!(ones_complement_to_dec("11111010").unwrap().to_i64(), Some(-5));
        assert_eq!(ones_complement_to_dec("00000101").unwrap().to_i64(), Some(5));
        assert_eq!(ones_complement_to_dec("10000000").unwrap().to_i64(), Some(-127));
    }

    #[test]
    fn test_two_zeros() {
        let positive = ones_complement_to_dec("0000").unwrap();
        let negative = ones_complement_to_dec("1111").unwrap();
        assert!(positive.is_zero() && !positive.is_sign_negative());
        assert!(negative.is_negative_zero());

        let encoded = encode(&SignedInteger::negative_zero(), 4).unwrap();
        assert_eq!(encoded.to_string(), "1111");
    }
}

// ============================================================================
// Sign-Magnitude
// Sign bit followed by the unsigned magnitude
// ============================================================================

use super::unsigned_binary;
use crate::domain::Format;
use crate::interfaces::{Codec, DecodedValue};
use crate::numeric::{BitString, CodecError, CodecResult, DecimalValue, SignedInteger};
use num_bigint::BigUint;

/// Encode into `width` bits: sign bit, then the magnitude in `width - 1` bits.
///
/// The sign bit follows the sign tag, so `SignedInteger::negative_zero()`
/// produces the negative zero pattern. Decimal text `"-0"` parses to `+0`.
///
/// # Errors
/// - `InvalidParameters` if `width` is zero or above `BitString::MAX_WIDTH`
/// - `WidthOverflow` if the magnitude needs more than `width - 1` bits
pub fn encode(value: &SignedInteger, width: usize) -> CodecResult<BitString> {
    let magnitude = encode_magnitude(value.magnitude(), width)?;
    let mut bits = BitString::new();
    bits.push(value.is_sign_negative());
    bits.extend(magnitude.iter());
    Ok(bits)
}

/// Magnitude field of a `width`-bit signed pattern (`width - 1` bits).
///
/// Overflow is reported against the full width, sign bit included.
pub(crate) fn encode_magnitude(magnitude: &BigUint, width: usize) -> CodecResult<BitString> {
    BitString::check_width(width)?;
    BitString::from_unsigned(magnitude, width - 1).map_err(|error| match error {
        CodecError::WidthOverflow { required, .. } => CodecError::WidthOverflow {
            required: required + 1,
            width,
        },
        other => other,
    })
}

/// Decode: leading bit is the sign, the rest is the magnitude.
///
/// `1000` decodes to `-0`, distinct from `0000` by its sign tag.
pub fn decode(bits: &BitString) -> CodecResult<SignedInteger> {
    decode_bits(bits.as_slice())
}

pub(crate) fn decode_bits(bits: &[bool]) -> CodecResult<SignedInteger> {
    let (&sign, magnitude) = bits.split_first().ok_or(CodecError::InvalidFormat)?;
    Ok(SignedInteger::new(
        sign,
        unsigned_binary::decode_bits(magnitude),
    ))
}

/// `dec_to_sign_magnitude("-5", 8)` -> `10000101`
pub fn dec_to_sign_magnitude(dec: &str, bits: usize) -> CodecResult<BitString> {
    let value = DecimalValue::parse(dec)?.to_integer()?;
    encode(&value, bits)
}

/// `sign_magnitude_to_dec("10000101")` -> `-5`
pub fn sign_magnitude_to_dec(bin: &str) -> CodecResult<SignedInteger> {
    decode(&BitString::parse(bin)?)
}

/// Sign-magnitude codec with a fixed encode width
#[derive(Debug, Clone, Copy)]
pub struct SignMagnitude {
    width: usize,
}

impl SignMagnitude {
    /// # Errors
    /// Returns `InvalidParameters` unless `0 < width <= BitString::MAX_WIDTH`.
    pub fn new(width: usize) -> CodecResult<Self> {
        BitString::check_width(width)?;
        Ok(Self { width })
    }
}

impl Codec for SignMagnitude {
    fn format(&self) -> Format {
        Format::SignMagnitude
    }

    fn encode(&self, decimal: &str) -> CodecResult<BitString> {
        dec_to_sign_magnitude(decimal, self.width)
    }

    fn decode(&self, binary: &str) -> CodecResult<DecodedValue> {
        sign_magnitude_to_dec(binary).map(DecodedValue::Integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(
            dec_to_sign_magnitude("-5", 8).unwrap().to_string(),
            "10000101"
        );
        assert_eq!(dec_to_sign_magnitude("5", 8).unwrap().to_string(), "00000101");
        assert_eq!(dec_to_sign_magnitude("-0", 4).unwrap().to_string(), "0000");
        assert_eq!(
            dec_to_sign_magnitude("-127", 8).unwrap().to_string(),
            "11111111"
        );
    }

    #[test]
    fn test_encode_negative_zero_tag() {
        let bits = encode(&SignedInteger::negative_zero(), 4).unwrap();
        assert_eq!(bits.to_string(), "1000");
    }

    #[test]
    fn test_encode_overflow() {
        assert_eq!(
            dec_to_sign_magnitude("128", 8),
            Err(CodecError::WidthOverflow {
                required: 9,
                width: 8
            })
        );
        assert_eq!(
            dec_to_sign_magnitude("-1", 1),
            Err(CodecError::WidthOverflow {
                required: 2,
                width: 1
            })
        );
        assert_eq!(dec_to_sign_magnitude("1", 0), Err(CodecError::InvalidParameters));
    }

    #[test]
    fn test_decode() {
        assert_eq!(sign_magnitude_to_dec("10000101").unwrap().to_i64(), Some(-5));
        assert_eq!(sign_magnitude_to_dec("0111").unwrap().to_i64(), Some(7));

        let negative_zero = sign_magnitude_to_dec("1000").unwrap();
        assert!(negative_zero.is_negative_zero());
        assert_eq!(negative_zero.to_string(), "-0");

        let positive_zero = sign_magnitude_to_dec("0000").unwrap();
        assert!(positive_zero.is_zero());
        assert!(!positive_zero.is_sign_negative());
    }

    #[test]
    fn test_single_bit_width() {
        assert_eq!(dec_to_sign_magnitude("0", 1).unwrap().to_string(), "0");
        assert!(sign_magnitude_to_dec("1").unwrap().is_negative_zero());
    }
}

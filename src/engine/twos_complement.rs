// ============================================================================
// Two's Complement
// Ones' complement plus one; a single zero
// ============================================================================

use super::ones_complement;
use crate::domain::Format;
use crate::interfaces::{Codec, DecodedValue};
use crate::numeric::{BitString, CodecError, CodecResult, DecimalValue, SignedInteger};
use num_bigint::BigUint;
use num_traits::One;
use std::cmp::Ordering;

/// Encode into `width` bits, range `[-2^(width-1), 2^(width-1) - 1]`.
///
/// Negative values take the ones' complement pattern and add one, carrying
/// from the least-significant bit through the full width. `-2^(width-1)` has
/// no ones' complement pattern and is emitted directly as `1000...0`.
/// Zero, including `-0`, never sets the sign bit.
///
/// # Errors
/// - `InvalidParameters` if `width` is zero or above `BitString::MAX_WIDTH`
/// - `WidthOverflow` if the value is outside the range
pub fn encode(value: &SignedInteger, width: usize) -> CodecResult<BitString> {
    BitString::check_width(width)?;
    if !value.is_negative() {
        return ones_complement::encode(&SignedInteger::from(value.magnitude().clone()), width);
    }

    let most_negative = BigUint::one() << (width - 1);
    match value.magnitude().cmp(&most_negative) {
        Ordering::Greater => Err(CodecError::WidthOverflow {
            required: (value.magnitude().clone() - 1u32).bits() as usize + 1,
            width,
        }),
        Ordering::Equal => {
            let mut bits = BitString::new();
            bits.push(true);
            bits.extend(std::iter::repeat(false).take(width - 1));
            Ok(bits)
        },
        Ordering::Less => {
            let mut bits = ones_complement::encode(value, width)?;
            bits.increment();
            Ok(bits)
        },
    }
}

/// Decode: ones' complement decode, then for a negative sign add one to the
/// magnitude.
pub fn decode(bits: &BitString) -> CodecResult<SignedInteger> {
    let ones = ones_complement::decode(bits)?;
    if ones.is_sign_negative() {
        Ok(SignedInteger::new(true, ones.magnitude().clone() + 1u32))
    } else {
        Ok(ones)
    }
}

/// `dec_to_twos_complement("-5", 8)` -> `11111011`
pub fn dec_to_twos_complement(dec: &str, bits: usize) -> CodecResult<BitString> {
    let value = DecimalValue::parse(dec)?.to_integer()?;
    encode(&value, bits)
}

/// `twos_complement_to_dec("11111011")` -> `-5`
pub fn twos_complement_to_dec(bin: &str) -> CodecResult<SignedInteger> {
    decode(&BitString::parse(bin)?)
}

/// Two's complement codec with a fixed encode width
#[derive(Debug, Clone, Copy)]
pub struct TwosComplement {
    width: usize,
}

impl TwosComplement {
    /// # Errors
    /// Returns `InvalidParameters` unless `0 < width <= BitString::MAX_WIDTH`.
    pub fn new(width: usize) -> CodecResult<Self> {
        BitString::check_width(width)?;
        Ok(Self { width })
    }
}

impl Codec for TwosComplement {
    fn format(&self) -> Format {
        Format::TwosComplement
    }

    fn encode(&self, decimal: &str) -> CodecResult<BitString> {
        dec_to_twos_complement(decimal, self.width)
    }

    fn decode(&self, binary: &str) -> CodecResult<DecodedValue> {
        twos_complement_to_dec(binary).map(DecodedValue::Integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(
            dec_to_twos_complement("-5", 8).unwrap().to_string(),
            "11111011"
        );
        assert_eq!(dec_to_twos_complement("5", 8).unwrap().to_string(), "00000101");
        assert_eq!(
            dec_to_twos_complement("-1", 8).unwrap().to_string(),
            "11111111"
        );
        assert_eq!(
            dec_to_twos_complement("-128", 8).unwrap().to_string(),
            "10000000"
        );
        assert_eq!(
            dec_to_twos_complement("127", 8).unwrap().to_string(),
            "01111111"
        );
    }

    #[test]
    fn test_zero_has_no_sign() {
        assert_eq!(dec_to_twos_complement("0", 8).unwrap().to_string(), "00000000");
        assert_eq!(dec_to_twos_complement("-0", 8).unwrap().to_string(), "00000000");
        let from_tag = encode(&SignedInteger::negative_zero(), 4).unwrap();
        assert_eq!(from_tag.to_string(), "0000");
    }

    #[test]
    fn test_range() {
        assert_eq!(
            dec_to_twos_complement("128", 8),
            Err(CodecError::WidthOverflow {
                required: 9,
                width: 8
            })
        );
        assert_eq!(
            dec_to_twos_complement("-129", 8),
            Err(CodecError::WidthOverflow {
                required: 9,
                width: 8
            })
        );
        assert_eq!(dec_to_twos_complement("-1", 1).unwrap().to_string(), "1");
        assert!(dec_to_twos_complement("1", 1).is_err());
    }

    #[test]
    fn test_decode() {
        assert_eq!(twos_complement_to_dec("11111011").unwrap().to_i64(), Some(-5));
        assert_eq!(twos_complement_to_dec("11111111").unwrap().to_i64(), Some(-1));
        assert_eq!(twos_complement_to_dec("10000000").unwrap().to_i64(), Some(-128));
        assert_eq!(twos_complement_to_dec("01111111").unwrap().to_i64(), Some(127));

        let zero = twos_complement_to_dec("0000").unwrap();
        assert!(zero.is_zero() && !zero.is_sign_negative());
    }

    #[test]
    fn test_sixty_four_bit_limits() {
        let min = dec_to_twos_complement(&i64::MIN.to_string(), 64).unwrap();
        assert_eq!(min.to_string(), format!("1{}", "0".repeat(63)));
        assert_eq!(decode(&min).unwrap().to_i64(), Some(i64::MIN));

        let max = dec_to_twos_complement(&i64::MAX.to_string(), 64).unwrap();
        assert_eq!(decode(&max).unwrap().to_i64(), Some(i64::MAX));
    }

    #[test]
    fn test_width_above_limit_rejected() {
        for input in ["-1", "1"] {
            assert_eq!(
                dec_to_twos_complement(input, 1 << 40),
                Err(CodecError::InvalidParameters)
            );
        }
        assert!(TwosComplement::new(usize::MAX).is_err());
    }
}

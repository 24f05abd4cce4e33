// ============================================================================
// Unsigned Binary
// Plain base-2 expansion; the primitive every other codec builds on
// ============================================================================

use crate::domain::Format;
use crate::interfaces::{Codec, DecodedValue};
use crate::numeric::{
    bits_to_unsigned, BitString, CodecError, CodecResult, DecimalValue, SignedInteger,
};
use num_bigint::BigUint;

/// Encode a non-negative integer into exactly `width` bits.
///
/// # Errors
/// - `InvalidParameters` if `width` is zero or above `BitString::MAX_WIDTH`
/// - `NegativeValue` if `value < 0` (`-0` is accepted)
/// - `WidthOverflow` if the value needs more than `width` bits
pub fn encode(value: &SignedInteger, width: usize) -> CodecResult<BitString> {
    BitString::check_width(width)?;
    if value.is_negative() {
        return Err(CodecError::NegativeValue);
    }
    BitString::from_unsigned(value.magnitude(), width)
}

/// Sum of `2^i` over the set bits, `i` counted from the least-significant end.
#[inline]
pub fn decode(bits: &BitString) -> BigUint {
    decode_bits(bits.as_slice())
}

#[inline]
pub(crate) fn decode_bits(bits: &[bool]) -> BigUint {
    bits_to_unsigned(bits)
}

/// `dec_to_bin("10", 8)` -> `00001010`
pub fn dec_to_bin(dec: &str, bits: usize) -> CodecResult<BitString> {
    let value = DecimalValue::parse(dec)?.to_integer()?;
    encode(&value, bits)
}

/// `bin_to_dec("0000 1010")` -> `10`
pub fn bin_to_dec(bin: &str) -> CodecResult<BigUint> {
    BitString::parse(bin).map(|bits| decode(&bits))
}

/// Unsigned binary codec with a fixed encode width
#[derive(Debug, Clone, Copy)]
pub struct UnsignedBinary {
    width: usize,
}

impl UnsignedBinary {
    /// # Errors
    /// Returns `InvalidParameters` unless `0 < width <= BitString::MAX_WIDTH`.
    pub fn new(width: usize) -> CodecResult<Self> {
        BitString::check_width(width)?;
        Ok(Self { width })
    }
}

impl Codec for UnsignedBinary {
    fn format(&self) -> Format {
        Format::Unsigned
    }

    fn encode(&self, decimal: &str) -> CodecResult<BitString> {
        dec_to_bin(decimal, self.width)
    }

    fn decode(&self, binary: &str) -> CodecResult<DecodedValue> {
        bin_to_dec(binary).map(|value| DecodedValue::Integer(SignedInteger::from(value)))
    }
}

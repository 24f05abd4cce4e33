// ============================================================================
// Fixed-Point (Q-format)
// Sign-magnitude integer field followed by a binary fraction
// ============================================================================

use super::{sign_magnitude, unsigned_binary};
use crate::domain::{FixedPointSpec, Format};
use crate::interfaces::{Codec, DecodedValue};
use crate::numeric::{BitString, CodecError, CodecResult, DecimalValue, Dyadic, SignedInteger};
use std::iter;

/// Encode into `k + j + 1` bits.
///
/// The integer part goes through sign-magnitude into `k + 1` bits, the sign
/// taken from the whole value (so `-0.5` keeps its sign). The fraction is
/// produced by repeated doubling and truncated after `j` bits, zero-padded
/// on the right if it terminates earlier. Truncation makes the encoding
/// lossy for fractions that are not multiples of `2^-j`.
///
/// # Errors
/// Returns `WidthOverflow` if the integer part needs more than `k` bits.
pub fn encode(value: &DecimalValue, spec: &FixedPointSpec) -> CodecResult<BitString> {
    let integer = SignedInteger::new(value.is_negative(), value.integer_part().clone());
    let mut bits = sign_magnitude::encode(&integer, spec.int_bits() + 1)?;

    let mut fraction = value.fraction_bits();
    bits.extend(
        fraction
            .by_ref()
            .chain(iter::repeat(false))
            .take(spec.frac_bits()),
    );
    if !fraction.is_exhausted() {
        tracing::debug!(
            %value,
            frac_bits = spec.frac_bits(),
            "fixed-point fraction truncated"
        );
    }

    Ok(bits)
}

/// Decode a `k + j + 1` bit pattern.
///
/// # Errors
/// Returns `WidthMismatch` if the pattern is not exactly `k + j + 1` bits.
pub fn decode(bits: &BitString, spec: &FixedPointSpec) -> CodecResult<Dyadic> {
    if bits.len() != spec.width() {
        return Err(CodecError::WidthMismatch {
            expected: spec.width(),
            actual: bits.len(),
        });
    }
    decode_fields(bits.as_slice(), spec)
}

/// Decode without the width check; `bits` must be `spec.width()` long.
///
/// Integer field via sign-magnitude, fraction `Σ bit_i · 2^-(i+1)` with the
/// integer part's sign.
pub(crate) fn decode_fields(bits: &[bool], spec: &FixedPointSpec) -> CodecResult<Dyadic> {
    let split = (spec.int_bits() + 1).min(bits.len());
    let (int_field, frac_field) = bits.split_at(split);

    let integer = sign_magnitude::decode_bits(int_field)?;
    let fraction = unsigned_binary::decode_bits(frac_field);
    let significand = (integer.magnitude() << frac_field.len()) | fraction;

    Ok(Dyadic::new(
        integer.is_sign_negative(),
        significand,
        frac_field.len(),
    ))
}

/// `dec_to_fixed_point("2.5", 4, 4)` -> `000101000`
pub fn dec_to_fixed_point(dec: &str, k: i64, j: i64) -> CodecResult<BitString> {
    let spec = FixedPointSpec::new(k, j)?;
    encode(&DecimalValue::parse(dec)?, &spec)
}

/// `fixed_point_to_dec("000101000", 4, 4)` -> `2.5`
pub fn fixed_point_to_dec(bin: &str, k: i64, j: i64) -> CodecResult<Dyadic> {
    let spec = FixedPointSpec::new(k, j)?;
    decode(&BitString::parse(bin)?, &spec)
}

/// Fixed-point codec for one Q-format layout
#[derive(Debug, Clone, Copy)]
pub struct FixedPoint {
    spec: FixedPointSpec,
}

impl FixedPoint {
    pub fn new(spec: FixedPointSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &FixedPointSpec {
        &self.spec
    }
}

impl Codec for FixedPoint {
    fn format(&self) -> Format {
        Format::FixedPoint
    }

    fn encode(&self, decimal: &str) -> CodecResult<BitString> {
        encode(&DecimalValue::parse(decimal)?, &self.spec)
    }

    fn decode(&self, binary: &str) -> CodecResult<DecodedValue> {
        decode(&BitString::parse(binary)?, &self.spec).map(DecodedValue::Fixed)
    }
}

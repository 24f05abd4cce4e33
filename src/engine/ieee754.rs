// ============================================================================
// IEEE-754 Floating Point
// binary32 / binary64 built on the fixed-point decoder
// ============================================================================

use super::{fixed_point, unsigned_binary};
use crate::domain::{FixedPointSpec, Format, IeeeLayout, SignedZeroPolicy};
use crate::interfaces::{Codec, DecodedValue};
use crate::numeric::{
    BitString, CodecError, CodecResult, DecimalValue, Dyadic, IeeeInput, IeeeValue, SignedInteger,
};
use num_traits::ToPrimitive;
use std::iter;

// ============================================================================
// Encoding
// ============================================================================

/// Encode a decimal or special value into the given layout.
///
/// Finite values are split into integer and fraction bits (the fraction by
/// repeated doubling), normalized at the first set bit, and the mantissa is
/// truncated to `M` bits; there is no round-to-nearest. Magnitudes below the
/// normal range become subnormals, and below the smallest subnormal they
/// truncate to a signed zero. NaN encodes as the positive quiet NaN.
///
/// # Errors
/// Returns `ExponentOverflow` if the unbiased exponent exceeds `Bias`.
pub fn encode(
    input: &IeeeInput,
    layout: &IeeeLayout,
    signed_zero: SignedZeroPolicy,
) -> CodecResult<BitString> {
    match input {
        IeeeInput::Infinity { negative } => Ok(assemble(
            *negative,
            &BitString::ones(layout.exponent_bits),
            &BitString::zeros(layout.mantissa_bits),
        )),
        IeeeInput::NaN => {
            let quiet: BitString = iter::once(true)
                .chain(iter::repeat(false))
                .take(layout.mantissa_bits)
                .collect();
            Ok(assemble(
                false,
                &BitString::ones(layout.exponent_bits),
                &quiet,
            ))
        },
        IeeeInput::Finite(value) => encode_finite(value, layout, signed_zero),
    }
}

fn encode_finite(
    value: &DecimalValue,
    layout: &IeeeLayout,
    signed_zero: SignedZeroPolicy,
) -> CodecResult<BitString> {
    if value.is_zero() {
        let negative = signed_zero == SignedZeroPolicy::Preserve && value.is_sign_negative();
        return Ok(zero(negative, layout));
    }

    let negative = value.is_negative();
    let mantissa_bits = layout.mantissa_bits;
    let integer = BitString::natural(value.integer_part());
    let mut fraction = value.fraction_bits();

    // Exponent of the first set bit, and the bits that follow it in the
    // integer part
    let (exponent, leading) = if integer.is_empty() {
        let mut leading_zeros: i64 = 0;
        loop {
            if leading_zeros == layout.bias - 1 {
                // Below 2^(1 - Bias): subnormal, mantissa is the next M bits
                let mantissa: BitString = fraction
                    .by_ref()
                    .chain(iter::repeat(false))
                    .take(mantissa_bits)
                    .collect();
                if !fraction.is_exhausted() {
                    tracing::debug!(%value, layout = layout.name, "subnormal mantissa truncated");
                }
                return Ok(assemble(
                    negative,
                    &BitString::zeros(layout.exponent_bits),
                    &mantissa,
                ));
            }
            match fraction.next() {
                Some(true) => break,
                Some(false) => leading_zeros += 1,
                None => return Ok(zero(negative, layout)),
            }
        }
        (-(leading_zeros + 1), BitString::new())
    } else {
        (
            integer.len() as i64 - 1,
            integer.iter().skip(1).collect::<BitString>(),
        )
    };

    if exponent > layout.max_exponent() {
        return Err(CodecError::ExponentOverflow {
            exponent,
            max: layout.max_exponent(),
        });
    }

    let mantissa: BitString = leading
        .iter()
        .chain(fraction.by_ref())
        .chain(iter::repeat(false))
        .take(mantissa_bits)
        .collect();
    if leading.iter().skip(mantissa_bits).any(|bit| bit) || !fraction.is_exhausted() {
        tracing::debug!(%value, layout = layout.name, "mantissa truncated");
    }

    let biased = SignedInteger::from(exponent + layout.bias);
    let exponent_field = unsigned_binary::encode(&biased, layout.exponent_bits)?;

    Ok(assemble(negative, &exponent_field, &mantissa))
}

fn assemble(negative: bool, exponent: &BitString, mantissa: &BitString) -> BitString {
    iter::once(negative)
        .chain(exponent.iter())
        .chain(mantissa.iter())
        .collect()
}

fn zero(negative: bool, layout: &IeeeLayout) -> BitString {
    iter::once(negative)
        .chain(iter::repeat(false))
        .take(layout.bits)
        .collect()
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a pattern of exactly `layout.bits` bits.
///
/// Classification, in order: exponent all ones with zero mantissa is
/// infinity; exponent all ones otherwise is NaN; exponent and mantissa all
/// zero is a signed zero; exponent zero otherwise is subnormal; anything
/// else is normal.
///
/// # Errors
/// Returns `WidthMismatch` if the pattern length differs from the layout.
pub fn decode(bits: &BitString, layout: &IeeeLayout) -> CodecResult<IeeeValue> {
    if bits.len() != layout.bits {
        return Err(CodecError::WidthMismatch {
            expected: layout.bits,
            actual: bits.len(),
        });
    }

    let negative = bits.leading_bit().unwrap_or(false);
    let exponent: BitString = bits.iter().skip(1).take(layout.exponent_bits).collect();
    let mantissa: BitString = bits.iter().skip(1 + layout.exponent_bits).collect();
    let (exponent_field, mantissa_field) = (exponent.as_slice(), mantissa.as_slice());

    let exponent_ones = exponent.is_all(true);
    let exponent_zero = exponent.is_all(false);
    let mantissa_zero = mantissa.is_all(false);

    match (exponent_ones, exponent_zero, mantissa_zero) {
        (true, _, true) => Ok(IeeeValue::Infinity { negative }),
        (true, _, false) => Ok(IeeeValue::NaN),
        (_, true, true) => Ok(IeeeValue::Zero { negative }),
        (_, true, false) => {
            let value = decode_significand(negative, layout.min_exponent(), false, mantissa_field)?;
            Ok(IeeeValue::Subnormal(value))
        },
        _ => {
            let biased = unsigned_binary::decode_bits(exponent_field)
                .to_i64()
                .ok_or(CodecError::InvalidFormat)?;
            let value = decode_significand(negative, biased - layout.bias, true, mantissa_field)?;
            Ok(IeeeValue::Normal(value))
        },
    }
}

/// Lay `implicit.mantissa × 2^exponent` out as a fixed-point pattern and
/// decode it.
///
/// Negative exponents prepend `|E|` zeros ahead of the implicit bit
/// (k = 1, j = len − 2); otherwise k = E + 1 and j = M − E, padding zeros
/// on the right when E exceeds M.
fn decode_significand(
    negative: bool,
    exponent: i64,
    implicit: bool,
    mantissa: &[bool],
) -> CodecResult<Dyadic> {
    let mut pattern = BitString::new();
    pattern.push(negative);

    let spec = if exponent < 0 {
        pattern.extend(iter::repeat(false).take(exponent.unsigned_abs() as usize));
        pattern.push(implicit);
        pattern.extend(mantissa.iter().copied());
        FixedPointSpec::unchecked(1, pattern.len() - 2)
    } else {
        let shift = exponent as usize;
        pattern.push(implicit);
        pattern.extend(mantissa.iter().copied());
        pattern.extend(iter::repeat(false).take(shift.saturating_sub(mantissa.len())));
        FixedPointSpec::unchecked(shift + 1, mantissa.len().saturating_sub(shift))
    };

    fixed_point::decode_fields(pattern.as_slice(), &spec)
}

// ============================================================================
// Text Entry Points
// ============================================================================

/// `dec_to_ieee("-2.5", 32)` -> `11000000001000000000000000000000`
///
/// `-0` keeps its sign; see [`SignedZeroPolicy`].
pub fn dec_to_ieee(dec: &str, bits: usize) -> CodecResult<BitString> {
    let layout = IeeeLayout::for_width(bits)?;
    encode(&IeeeInput::parse(dec)?, layout, SignedZeroPolicy::default())
}

/// Decode a 32- or 64-bit pattern; `bits` must match its length.
pub fn ieee_to_dec(bin: &str, bits: usize) -> CodecResult<IeeeValue> {
    let layout = IeeeLayout::for_width(bits)?;
    decode(&BitString::parse(bin)?, layout)
}

/// IEEE-754 codec for one layout
#[derive(Debug, Clone, Copy)]
pub struct Ieee754 {
    layout: &'static IeeeLayout,
    signed_zero: SignedZeroPolicy,
}

impl Ieee754 {
    /// # Errors
    /// Returns `UnsupportedWidth` unless `bits` is 32 or 64.
    pub fn new(bits: usize, signed_zero: SignedZeroPolicy) -> CodecResult<Self> {
        Ok(Self {
            layout: IeeeLayout::for_width(bits)?,
            signed_zero,
        })
    }

    pub fn layout(&self) -> &'static IeeeLayout {
        self.layout
    }
}

impl Codec for Ieee754 {
    fn format(&self) -> Format {
        Format::Ieee754
    }

    fn encode(&self, decimal: &str) -> CodecResult<BitString> {
        encode(&IeeeInput::parse(decimal)?, self.layout, self.signed_zero)
    }

    fn decode(&self, binary: &str) -> CodecResult<DecodedValue> {
        decode(&BitString::parse(binary)?, self.layout).map(DecodedValue::Float)
    }
}

// ============================================================================
// Numeric Module
// Value types shared by every codec
// ============================================================================
//
// This module provides:
// - BitString: Fixed-width binary digits, most-significant first
// - DecimalValue / IeeeInput: Exact decimal text input
// - SignedInteger: Sign-tagged integer (keeps -0)
// - Dyadic: Exact binary fraction for fixed-point and IEEE-754 results
// - IeeeValue: Classified IEEE-754 decode result
// - CodecError: Error types for every conversion
//
// Design principles:
// - No binary floating point between text input and bit output
// - All conversions return Result (no panics)
// - Arbitrary widths through BigUint, inline storage for <= 64 bits

mod bit_string;
mod decimal_value;
mod dyadic;
mod errors;
mod ieee_value;
mod signed_integer;

pub(crate) use bit_string::bits_to_unsigned;
pub use bit_string::BitString;
pub use decimal_value::{BinaryFraction, DecimalValue, IeeeInput};
pub use dyadic::Dyadic;
pub use errors::{CodecError, CodecResult};
pub use ieee_value::IeeeValue;
pub use signed_integer::SignedInteger;

// ============================================================================
// Binary Converter Library
// Exact decimal <-> binary codecs for fixed-width number representations
// ============================================================================

//! # Binary Converter
//!
//! Converts decimal numbers to and from the common fixed-width binary
//! representations.
//!
//! ## Features
//!
//! - **Integer formats**: unsigned, sign-magnitude, ones' and two's complement
//! - **Fixed-point** Q-format with `k` integer and `j` fraction bits
//! - **IEEE-754** binary32 and binary64, including subnormals and specials
//! - **Exact arithmetic**: decimal input is parsed as text and never passes
//!   through binary floating point
//! - **Event handlers** for observing conversions
//!
//! ## Example
//!
//! ```rust
//! use binary_converter::prelude::*;
//! use std::sync::Arc;
//!
//! // Every format that needs no extra parameters, 8 bits wide
//! let converter = ConverterBuilder::new(InputKind::Decimal)
//!     .bits(8)
//!     .normal()
//!     .sign_magnitude()
//!     .ones_complement()
//!     .twos_complement()
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! for report in converter.convert("-5") {
//!     println!("{}", report);
//! }
//!
//! // Free functions cover one format at a time
//! use binary_converter::engine::ieee754::dec_to_ieee;
//! let bits = dec_to_ieee("-2.5", 32).unwrap();
//! assert_eq!(bits.to_string(), format!("{:032b}", (-2.5f32).to_bits()));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConverterConfig, FixedPointSpec, Format, IeeeLayout, InputKind, SignedZeroPolicy,
    };
    pub use crate::engine::{
        create_codec, create_from_config, ConversionReport, Converter, ConverterBuilder,
        FixedPoint, Ieee754, OnesComplement, SignMagnitude, TwosComplement, UnsignedBinary,
    };
    pub use crate::interfaces::{
        Codec, ConversionEvent, ConversionOutput, DecodedValue, EventHandler,
        LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
    };
    pub use crate::numeric::{
        BitString, CodecError, CodecResult, DecimalValue, Dyadic, IeeeInput, IeeeValue,
        SignedInteger,
    };
}

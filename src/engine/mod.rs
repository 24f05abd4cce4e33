// ============================================================================
// Engine Module
// Contains the codecs and the converter that drives them
// ============================================================================

pub mod fixed_point;
pub mod ieee754;
pub mod ones_complement;
pub mod sign_magnitude;
pub mod twos_complement;
pub mod unsigned_binary;

mod converter;

pub mod factory;

pub use converter::{ConversionReport, Converter};
pub use factory::{create_codec, create_from_config, ConverterBuilder};
pub use fixed_point::FixedPoint;
pub use ieee754::Ieee754;
pub use ones_complement::OnesComplement;
pub use sign_magnitude::SignMagnitude;
pub use twos_complement::TwosComplement;
pub use unsigned_binary::UnsignedBinary;

// ============================================================================
// Domain Models Module
// Configuration and layout value objects
// ============================================================================

pub mod config;
pub mod layout;

pub use config::{ConverterConfig, Format, InputKind, SignedZeroPolicy};
pub use layout::{FixedPointSpec, IeeeLayout};

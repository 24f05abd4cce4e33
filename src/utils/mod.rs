// ============================================================================
// Utilities Module
// Presentation helpers for CLI output
// ============================================================================

mod beautify;

pub use beautify::{group_bits, group_thousands};

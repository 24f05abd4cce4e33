// ============================================================================
// Converter Configuration
// Which representations to produce and how to render them
// ============================================================================

use super::layout::FixedPointSpec;
use crate::numeric::{BitString, CodecError, CodecResult};
use arrayvec::ArrayVec;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Input Kind
// ============================================================================

/// Direction of a conversion, named after the kind of text supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputKind {
    /// Decimal text, encoded to bit strings ("dec")
    Decimal,
    /// Binary text, decoded to decimal ("bin")
    Binary,
}

impl FromStr for InputKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dec" | "decimal" => Ok(InputKind::Decimal),
            "bin" | "binary" => Ok(InputKind::Binary),
            _ => Err(CodecError::InvalidFormat),
        }
    }
}

// ============================================================================
// Format
// ============================================================================

/// Fixed-width binary representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Format {
    /// Plain unsigned binary
    Unsigned,
    /// Sign bit followed by the magnitude
    SignMagnitude,
    /// Negative values are the bitwise complement of the magnitude
    OnesComplement,
    /// Ones' complement plus one; single zero
    TwosComplement,
    /// Q-format: sign-magnitude integer field plus fraction bits
    FixedPoint,
    /// IEEE-754 binary32 / binary64
    Ieee754,
}

impl Format {
    /// Every format, in display order
    pub const ALL: [Format; 6] = [
        Format::Unsigned,
        Format::SignMagnitude,
        Format::OnesComplement,
        Format::TwosComplement,
        Format::FixedPoint,
        Format::Ieee754,
    ];

    /// Human-readable name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Format::Unsigned => "Normal binary",
            Format::SignMagnitude => "Sign-magnitude",
            Format::OnesComplement => "Ones' complement",
            Format::TwosComplement => "Two's complement",
            Format::FixedPoint => "Fixed point",
            Format::Ieee754 => "IEEE 754",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Signed Zero Policy
// ============================================================================

/// Whether IEEE-754 encoding of a zero keeps the sign of `-0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignedZeroPolicy {
    /// `-0` encodes with the sign bit set, as IEEE-754 requires
    #[default]
    Preserve,
    /// Every zero encodes as the all-zero pattern
    Drop,
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for a [`Converter`](crate::engine::Converter) run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Whether the input is decimal or binary text
    pub input_kind: InputKind,

    /// Target width for integer formats and IEEE-754 (32 or 64)
    pub bits: usize,

    /// Requested formats, without duplicates, in request order
    pub formats: ArrayVec<Format, 6>,

    /// Q-format layout, required when `Format::FixedPoint` is requested
    pub fixed_point: Option<FixedPointSpec>,

    /// IEEE-754 handling of `-0`
    pub signed_zero: SignedZeroPolicy,

    /// Group bit output in fours and decimal output in thousands
    pub beautify: bool,
}

impl ConverterConfig {
    /// Default target width
    pub const DEFAULT_BITS: usize = 32;

    /// Create a configuration with no formats selected
    pub fn new(input_kind: InputKind) -> Self {
        Self {
            input_kind,
            bits: Self::DEFAULT_BITS,
            formats: ArrayVec::new(),
            fixed_point: None,
            signed_zero: SignedZeroPolicy::default(),
            beautify: false,
        }
    }

    /// Builder method: Set target width
    pub fn with_bits(mut self, bits: usize) -> Self {
        self.bits = bits;
        self
    }

    /// Builder method: Request a format (ignored if already requested)
    pub fn with_format(mut self, format: Format) -> Self {
        if !self.formats.contains(&format) {
            self.formats.push(format);
        }
        self
    }

    /// Builder method: Request several formats
    pub fn with_formats(self, formats: impl IntoIterator<Item = Format>) -> Self {
        formats
            .into_iter()
            .fold(self, |config, format| config.with_format(format))
    }

    /// Builder method: Set fixed-point layout
    pub fn with_fixed_point(mut self, spec: FixedPointSpec) -> Self {
        self.fixed_point = Some(spec);
        self
    }

    /// Builder method: Set signed zero policy
    pub fn with_signed_zero(mut self, policy: SignedZeroPolicy) -> Self {
        self.signed_zero = policy;
        self
    }

    /// Builder method: Enable output beautification
    pub fn with_beautify(mut self, beautify: bool) -> Self {
        self.beautify = beautify;
        self
    }

    /// Validate the configuration: a width in `1..=BitString::MAX_WIDTH`, at
    /// least one format, and a fixed-point layout if fixed point is requested.
    ///
    /// Per-format width problems (an IEEE-754 width other than 32/64, say)
    /// are not checked here; they fail only that format during conversion.
    pub fn validate(&self) -> CodecResult<()> {
        BitString::check_width(self.bits)?;
        if self.formats.is_empty() {
            return Err(CodecError::InvalidParameters);
        }
        if self.formats.contains(&Format::FixedPoint) && self.fixed_point.is_none() {
            return Err(CodecError::InvalidParameters);
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// The four integer representations
    pub fn integers(input_kind: InputKind) -> Self {
        Self::new(input_kind).with_formats([
            Format::Unsigned,
            Format::SignMagnitude,
            Format::OnesComplement,
            Format::TwosComplement,
        ])
    }

    /// Everything that needs no extra parameters: the integer formats and
    /// IEEE-754
    pub fn standard(input_kind: InputKind) -> Self {
        Self::integers(input_kind).with_format(Format::Ieee754)
    }

    /// Every format, with the given fixed-point layout
    pub fn all(input_kind: InputKind, fixed_point: FixedPointSpec) -> Self {
        Self::new(input_kind)
            .with_formats(Format::ALL)
            .with_fixed_point(fixed_point)
    }
}

// ============================================================================
// Codec Factory
// Creates codecs and converters with proper configuration
// ============================================================================

use crate::domain::{ConverterConfig, FixedPointSpec, Format, InputKind, SignedZeroPolicy};
use crate::engine::{
    Converter, FixedPoint, Ieee754, OnesComplement, SignMagnitude, TwosComplement, UnsignedBinary,
};
use crate::interfaces::{Codec, EventHandler};
use crate::numeric::{CodecError, CodecResult};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates the codec for one format from configuration
///
/// # Errors
/// - `InvalidParameters` for a zero width, or fixed-point without a layout
/// - `UnsupportedWidth` for IEEE-754 at a width other than 32 or 64
///
/// # Example
/// ```
/// use binary_converter::prelude::*;
/// use binary_converter::engine::factory::create_codec;
///
/// let config = ConverterConfig::standard(InputKind::Decimal).with_bits(8);
/// let codec = create_codec(Format::TwosComplement, &config).unwrap();
/// assert_eq!(codec.encode("-5").unwrap().to_string(), "11111011");
/// ```
pub fn create_codec(format: Format, config: &ConverterConfig) -> CodecResult<Box<dyn Codec>> {
    match format {
        Format::Unsigned => Ok(Box::new(UnsignedBinary::new(config.bits)?)),
        Format::SignMagnitude => Ok(Box::new(SignMagnitude::new(config.bits)?)),
        Format::OnesComplement => Ok(Box::new(OnesComplement::new(config.bits)?)),
        Format::TwosComplement => Ok(Box::new(TwosComplement::new(config.bits)?)),
        Format::FixedPoint => config
            .fixed_point
            .map(|spec| Box::new(FixedPoint::new(spec)) as Box<dyn Codec>)
            .ok_or(CodecError::InvalidParameters),
        Format::Ieee754 => Ok(Box::new(Ieee754::new(config.bits, config.signed_zero)?)),
    }
}

/// Creates a converter from configuration
///
/// # Example
/// ```
/// use binary_converter::prelude::*;
/// use binary_converter::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = ConverterConfig::integers(InputKind::Binary);
/// let converter = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(converter.convert("1010").len(), 4);
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> CodecResult<Converter> {
    Converter::new(config, event_handler)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use binary_converter::prelude::*;
/// use std::sync::Arc;
///
/// let converter = ConverterBuilder::new(InputKind::Decimal)
///     .bits(8)
///     .twos_complement()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(converter.convert("-5")[0].to_string(), "Two's complement: 11111011");
/// ```
pub struct ConverterBuilder {
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Create a new builder for the given input kind
    pub fn new(input_kind: InputKind) -> Self {
        Self {
            config: ConverterConfig::new(input_kind),
        }
    }

    /// Set target width
    pub fn bits(mut self, bits: usize) -> Self {
        self.config.bits = bits;
        self
    }

    // ========================================================================
    // Format Selection
    // ========================================================================

    /// Request plain unsigned binary
    pub fn normal(mut self) -> Self {
        self.config = self.config.with_format(Format::Unsigned);
        self
    }

    /// Request sign-magnitude
    pub fn sign_magnitude(mut self) -> Self {
        self.config = self.config.with_format(Format::SignMagnitude);
        self
    }

    /// Request ones' complement
    pub fn ones_complement(mut self) -> Self {
        self.config = self.config.with_format(Format::OnesComplement);
        self
    }

    /// Request two's complement
    pub fn twos_complement(mut self) -> Self {
        self.config = self.config.with_format(Format::TwosComplement);
        self
    }

    /// Request fixed-point with the given layout
    pub fn fixed_point(mut self, spec: FixedPointSpec) -> Self {
        self.config = self
            .config
            .with_format(Format::FixedPoint)
            .with_fixed_point(spec);
        self
    }

    /// Request IEEE-754
    pub fn ieee754(mut self) -> Self {
        self.config = self.config.with_format(Format::Ieee754);
        self
    }

    // ========================================================================
    // Output Configuration
    // ========================================================================

    /// Set IEEE-754 signed zero policy
    pub fn signed_zero(mut self, policy: SignedZeroPolicy) -> Self {
        self.config.signed_zero = policy;
        self
    }

    /// Enable output beautification
    pub fn beautify(mut self, beautify: bool) -> Self {
        self.config.beautify = beautify;
        self
    }

    /// Build the converter
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> CodecResult<Converter> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_each_codec() {
        let config = ConverterConfig::all(InputKind::Decimal, FixedPointSpec::new(4, 4).unwrap());
        for format in Format::ALL {
            let codec = create_codec(format, &config).unwrap();
            assert_eq!(codec.format(), format);
        }
    }

    #[test]
    fn test_create_codec_errors() {
        let config = ConverterConfig::new(InputKind::Decimal).with_bits(16);
        assert_eq!(
            create_codec(Format::Ieee754, &config).err(),
            Some(CodecError::UnsupportedWidth(16))
        );
        assert_eq!(
            create_codec(Format::FixedPoint, &config).err(),
            Some(CodecError::InvalidParameters)
        );

        let zero_width = ConverterConfig::new(InputKind::Decimal).with_bits(0);
        assert_eq!(
            create_codec(Format::Unsigned, &zero_width).err(),
            Some(CodecError::InvalidParameters)
        );
    }

    #[test]
    fn test_builder() {
        let builder = ConverterBuilder::new(InputKind::Decimal)
            .bits(64)
            .normal()
            .ieee754()
            .normal()
            .beautify(true)
            .signed_zero(SignedZeroPolicy::Drop);

        let config = builder.config();
        assert_eq!(config.bits, 64);
        assert_eq!(config.formats.as_slice(), &[Format::Unsigned, Format::Ieee754]);
        assert!(config.beautify);

        let converter = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        let reports = converter.convert("-0");
        assert_eq!(
            reports[1].outcome.as_ref().unwrap().to_string(),
            "0".repeat(64)
        );
    }

    #[test]
    fn test_builder_without_formats_fails() {
        let result = ConverterBuilder::new(InputKind::Binary).build(Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }
}

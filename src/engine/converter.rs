// ============================================================================
// Converter
// Runs every configured representation over one input
// ============================================================================

use super::factory::create_codec;
use crate::domain::{ConverterConfig, Format};
use crate::interfaces::{Codec, ConversionEvent, ConversionOutput, EventHandler};
use crate::numeric::CodecResult;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// Outcome of one format for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Representation that was attempted
    pub format: Format,
    /// Result, or the reason this format failed
    pub outcome: CodecResult<ConversionOutput>,
}

impl ConversionReport {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// One report line: `"<format>: <result>"` or `"<format>: error: <reason>"`
    pub fn render(&self, beautify: bool) -> String {
        match &self.outcome {
            Ok(output) => format!("{}: {}", self.format, output.render(beautify)),
            Err(error) => format!("{}: error: {}", self.format, error),
        }
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Converter over a fixed set of codecs
///
/// Codecs are built once from the configuration. A codec that cannot be
/// built (IEEE-754 at 16 bits, say) fails only its own format on every
/// conversion; the other formats still run.
pub struct Converter {
    /// Validated configuration
    config: ConverterConfig,

    /// One codec (or construction error) per requested format
    codecs: Vec<(Format, CodecResult<Box<dyn Codec>>)>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Converter {
    /// Create a converter from a configuration.
    ///
    /// # Errors
    /// Returns the configuration's validation error.
    pub fn new(config: ConverterConfig, event_handler: Arc<dyn EventHandler>) -> CodecResult<Self> {
        config.validate()?;

        let codecs = config
            .formats
            .iter()
            .map(|&format| (format, create_codec(format, &config)))
            .collect();

        Ok(Self {
            config,
            codecs,
            event_handler,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert `input` into every configured format, in request order.
    ///
    /// Never stops early: each format gets its own report.
    pub fn convert(&self, input: &str) -> Vec<ConversionReport> {
        let mut events = Vec::with_capacity(self.codecs.len() * 2);
        let mut reports = Vec::with_capacity(self.codecs.len());

        for (format, codec) in &self.codecs {
            let format = *format;
            events.push(ConversionEvent::ConversionStarted {
                format,
                input: input.to_string(),
                timestamp: Utc::now(),
            });

            let outcome = match codec {
                Ok(codec) => codec.convert(input, self.config.input_kind),
                Err(error) => Err(*error),
            };

            match &outcome {
                Ok(output) => events.push(ConversionEvent::ConversionSucceeded {
                    format,
                    output: output.render(self.config.beautify),
                    timestamp: Utc::now(),
                }),
                Err(error) => events.push(ConversionEvent::ConversionFailed {
                    format,
                    error: *error,
                    timestamp: Utc::now(),
                }),
            }

            reports.push(ConversionReport { format, outcome });
        }

        self.event_handler.on_events(events);
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FixedPointSpec, InputKind};
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler};
    use crate::numeric::CodecError;

    #[test]
    fn test_convert_decimal() {
        let config = ConverterConfig::integers(InputKind::Decimal).with_bits(8);
        let converter = Converter::new(config, Arc::new(NoOpEventHandler)).unwrap();

        let reports = converter.convert("-5");
        let rendered: Vec<String> = reports.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "Normal binary: error: negative value: unsigned binary has no sign",
                "Sign-magnitude: 10000101",
                "Ones' complement: 11111010",
                "Two's complement: 11111011",
            ]
        );
    }

    #[test]
    fn test_convert_binary() {
        let config = ConverterConfig::integers(InputKind::Binary);
        let converter = Converter::new(config, Arc::new(NoOpEventHandler)).unwrap();

        let reports = converter.convert("11111011");
        let values: Vec<String> = reports
            .iter()
            .map(|r| r.outcome.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(values, vec!["251", "-123", "-4", "-5"]);
    }

    #[test]
    fn test_failing_codec_does_not_abort() {
        let config = ConverterConfig::standard(InputKind::Decimal).with_bits(16);
        let converter = Converter::new(config, Arc::new(NoOpEventHandler)).unwrap();

        let reports = converter.convert("3");
        assert_eq!(reports.len(), 5);
        assert!(reports[..4].iter().all(ConversionReport::is_ok));
        assert_eq!(reports[4].outcome, Err(CodecError::UnsupportedWidth(16)));
    }

    #[test]
    fn test_beautified_report() {
        let config = ConverterConfig::new(InputKind::Decimal)
            .with_format(Format::Ieee754)
            .with_beautify(true);
        let converter = Converter::new(config, Arc::new(NoOpEventHandler)).unwrap();

        let reports = converter.convert("2.5");
        assert_eq!(
            reports[0].render(true),
            "IEEE 754: 0100 0000 0010 0000 0000 0000 0000 0000"
        );
    }

    #[test]
    fn test_events() {
        let handler = Arc::new(RecordingEventHandler::new());
        let config = ConverterConfig::new(InputKind::Decimal)
            .with_formats([Format::Unsigned, Format::FixedPoint])
            .with_fixed_point(FixedPointSpec::new(4, 4).unwrap());
        let converter = Converter::new(config, handler.clone()).unwrap();

        converter.convert("-2.5");

        let events = handler.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(
            events[1],
            ConversionEvent::ConversionFailed {
                format: Format::Unsigned,
                error: CodecError::InvalidFormat,
                ..
            }
        ));
        assert!(matches!(
            &events[3],
            ConversionEvent::ConversionSucceeded { format: Format::FixedPoint, output, .. }
                if output == "100101000"
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ConverterConfig::new(InputKind::Decimal);
        assert!(matches!(
            Converter::new(config, Arc::new(NoOpEventHandler)),
            Err(CodecError::InvalidParameters)
        ));
    }
}

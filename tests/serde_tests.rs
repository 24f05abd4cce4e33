#![cfg(feature = "serde")]

use binary_converter::prelude::*;

#[test]
fn config_round_trips_through_json() {
    let config = ConverterConfig::all(InputKind::Binary, FixedPointSpec::new(4, 4).unwrap())
        .with_bits(64)
        .with_signed_zero(SignedZeroPolicy::Drop)
        .with_beautify(true);

    let json = serde_json::to_string(&config).unwrap();
    let restored: ConverterConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn failure_event_serializes_error() {
    let event = ConversionEvent::ConversionFailed {
        format: Format::Ieee754,
        error: CodecError::UnsupportedWidth(16),
        timestamp: chrono::Utc::now(),
    };

    let json = serde_json::to_value(&event).unwrap();
    let restored: ConversionEvent = serde_json::from_value(json).unwrap();
    assert_eq!(restored, event);
}

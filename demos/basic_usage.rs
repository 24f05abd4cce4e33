// ============================================================================
// Basic Usage Example
// ============================================================================

use binary_converter::engine::{fixed_point, ieee754, twos_complement};
use binary_converter::prelude::*;
use binary_converter::utils::group_bits;
use std::sync::Arc;

fn main() {
    println!("=== Binary Converter Example ===\n");

    // Single-format free functions
    println!("Free functions:");
    match twos_complement::dec_to_twos_complement("-5", 8) {
        Ok(bits) => println!("  -5 as 8-bit two's complement: {}", bits),
        Err(e) => println!("  error: {}", e),
    }
    match fixed_point::dec_to_fixed_point("2.5", 4, 4) {
        Ok(bits) => println!("  2.5 as Q4.4 fixed point:      {}", bits),
        Err(e) => println!("  error: {}", e),
    }
    match ieee754::ieee_to_dec("0 10000000 01000000000000000000000", 32) {
        Ok(value) => println!("  IEEE-754 single 0x40200000:   {}", value),
        Err(e) => println!("  error: {}", e),
    }

    // Errors are values, not panics
    match twos_complement::dec_to_twos_complement("200", 8) {
        Ok(bits) => println!("  200 in 8 bits: {}", bits),
        Err(e) => println!("  200 in 8 bits: {}", e),
    }

    // Every format at once, logged through tracing
    println!("\nConverter, all formats, decimal input:");
    let spec = match FixedPointSpec::new(8, 8) {
        Ok(spec) => spec,
        Err(e) => {
            println!("  error: {}", e);
            return;
        }
    };
    let converter = match create_from_config(
        ConverterConfig::all(InputKind::Decimal, spec).with_beautify(true),
        Arc::new(LoggingEventHandler),
    ) {
        Ok(converter) => converter,
        Err(e) => {
            println!("  error: {}", e);
            return;
        }
    };

    for input in ["-42", "0.1", "-0"] {
        println!("  {}:", input);
        for report in converter.convert(input) {
            println!("    {}", report.render(true));
        }
    }

    // Binary input goes the other way
    println!("\nConverter, integer formats, binary input:");
    let decoder = ConverterBuilder::new(InputKind::Binary)
        .normal()
        .sign_magnitude()
        .ones_complement()
        .twos_complement()
        .build(Arc::new(NoOpEventHandler));

    if let Ok(decoder) = decoder {
        let pattern = "11111111111111111111111111010110";
        println!("  {}:", group_bits(pattern));
        for report in decoder.convert(pattern) {
            println!("    {}", report.render(true));
        }
    }

    // Events can be captured for inspection
    println!("\nRecorded events:");
    let recorder = Arc::new(RecordingEventHandler::new());
    if let Ok(converter) = ConverterBuilder::new(InputKind::Decimal)
        .bits(16)
        .ieee754()
        .twos_complement()
        .build(recorder.clone())
    {
        converter.convert("7");
        for event in recorder.take() {
            println!("  {:?}", event);
        }
    }

    println!("\n=== Example Complete ===");
}

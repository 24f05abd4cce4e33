// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod codec;
mod event_handler;

pub use codec::{Codec, ConversionOutput, DecodedValue};
pub use event_handler::{
    ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
};

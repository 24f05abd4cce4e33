// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversions
// ============================================================================

use crate::domain::Format;
use crate::numeric::CodecError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the converter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// Conversion into `format` started
    ConversionStarted {
        format: Format,
        input: String,
        timestamp: DateTime<Utc>,
    },

    /// Conversion produced a result
    ConversionSucceeded {
        format: Format,
        output: String,
        timestamp: DateTime<Utc>,
    },

    /// Conversion failed; the remaining formats still run
    ConversionFailed {
        format: Format,
        error: CodecError,
        timestamp: DateTime<Utc>,
    },
}

impl ConversionEvent {
    pub fn format(&self) -> Format {
        match self {
            ConversionEvent::ConversionStarted { format, .. }
            | ConversionEvent::ConversionSucceeded { format, .. }
            | ConversionEvent::ConversionFailed { format, .. } => *format,
        }
    }
}

/// Event handler trait for processing converter events
/// Implementations can handle logging, auditing, UI updates, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::ConversionFailed { format, error, .. } => {
                tracing::debug!(%format, %error, "conversion failed");
            },
            _ => tracing::debug!("Converter event: {:?}", event),
        }
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<ConversionEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<ConversionEvent> {
        self.events.lock().clone()
    }

    /// Drain the recorded events
    pub fn take(&self) -> Vec<ConversionEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<ConversionEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(ConversionEvent::ConversionStarted {
            format: Format::Unsigned,
            input: "10".to_string(),
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        handler.on_events(vec![
            ConversionEvent::ConversionStarted {
                format: Format::Unsigned,
                input: "-1".to_string(),
                timestamp: Utc::now(),
            },
            ConversionEvent::ConversionFailed {
                format: Format::Unsigned,
                error: CodecError::NegativeValue,
                timestamp: Utc::now(),
            },
        ]);

        let events = handler.events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.format() == Format::Unsigned));
        assert!(matches!(
            events[1],
            ConversionEvent::ConversionFailed {
                error: CodecError::NegativeValue,
                ..
            }
        ));

        assert_eq!(handler.take().len(), 2);
        assert!(handler.events().is_empty());
    }
}

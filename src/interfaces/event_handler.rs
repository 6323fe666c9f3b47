// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator outcomes
// ============================================================================

use crate::domain::Operation;
use crate::numeric::CalculatorError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator, one per call
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Operation computed successfully
    Computed {
        operation: Operation,
        /// Rendered as `a <symbol> b = value`
        expression: String,
        timestamp: DateTime<Utc>,
    },

    /// Call rejected during validation or evaluation
    Rejected {
        /// Operation tag as supplied by the caller
        operation: String,
        error: CalculatorError,
        timestamp: DateTime<Utc>,
    },
}

impl CalculationEvent {
    /// Returns the error if the call was rejected
    pub fn error(&self) -> Option<CalculatorError> {
        match self {
            CalculationEvent::Rejected { error, .. } => Some(*error),
            CalculationEvent::Computed { .. } => None,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            CalculationEvent::Computed { timestamp, .. }
            | CalculationEvent::Rejected { timestamp, .. } => *timestamp,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::Computed { expression, .. } => {
                tracing::debug!(%expression, "calculation computed");
            },
            CalculationEvent::Rejected {
                operation, error, ..
            } => {
                tracing::debug!(
                    operation = %operation,
                    kind = error.kind(),
                    "calculation rejected: {}",
                    error.message()
                );
            },
        }
    }
}

/// Keeps every event in memory, in arrival order.
///
/// Safe to share between threads; intended for auditing and tests.
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<CalculationEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drain and return the recorded events
    pub fn take(&self) -> Vec<CalculationEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected() -> CalculationEvent {
        CalculationEvent::Rejected {
            operation: "modulo".to_string(),
            error: CalculatorError::UnknownOperation,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(rejected());
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_event(rejected());
        handler.on_event(CalculationEvent::Computed {
            operation: Operation::Add,
            expression: "1 + 2 = 3".to_string(),
            timestamp: Utc::now(),
        });
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        assert!(handler.is_empty());

        handler.on_event(rejected());
        assert_eq!(handler.len(), 1);
        assert_eq!(
            handler.events()[0].error(),
            Some(CalculatorError::UnknownOperation)
        );

        let drained = handler.take();
        assert_eq!(drained.len(), 1);
        assert!(handler.is_empty());
    }
}

//! Null event sink implementation.
//!
//! Used when step tracing is not needed but a component requires a sink.

use crate::domain::models::ProxyEvent;
use super::EventSink;

/// A sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventSink;

impl NullEventSink {
    /// Create a sink that drops everything.
    pub const fn new() -> Self {
        Self
    }
}

impl EventSink for NullEventSink {
    fn record(&self, _event: ProxyEvent) {}
}

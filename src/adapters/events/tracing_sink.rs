//! Event sink that forwards every step to `tracing`.

use tracing::{debug, info, warn};

use crate::domain::models::ProxyEvent;
use crate::domain::ports::EventSink;

/// Emits each [`ProxyEvent`] as a structured tracing event.
///
/// Denials are logged at WARN, per-step cache bookkeeping at DEBUG and
/// everything else at INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl TracingEventSink {
    /// Create a tracing sink.
    pub const fn new() -> Self {
        Self
    }
}

impl EventSink for TracingEventSink {
    fn record(&self, event: ProxyEvent) {
        let name = event.name();
        let source = event.source();

        match &event {
            ProxyEvent::AccessDenied { key, op } => {
                warn!(target: "proxykit::events", event = name, source, %key, %op, "{event}");
            }
            ProxyEvent::Cached { key } | ProxyEvent::CacheMiss { key } => {
                debug!(target: "proxykit::events", event = name, source, %key, "{event}");
            }
            _ => {
                info!(target: "proxykit::events", event = name, source, "{event}");
            }
        }
    }
}

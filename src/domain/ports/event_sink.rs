//! Event sink port.
//!
//! Subjects and proxies report each step here instead of printing, so the
//! caching and access logic can be tested without capturing console output.

use std::sync::Arc;

use crate::domain::models::ProxyEvent;

/// Receives traced steps from subjects and proxies.
pub trait EventSink: Send + Sync {
    /// Take ownership of one event.
    fn record(&self, event: ProxyEvent);
}

/// Shared handle passed to every component of one scenario.
pub type SharedEventSink = Arc<dyn EventSink>;

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn record(&self, event: ProxyEvent) {
        (**self).record(event);
    }
}

//! Event sink that keeps every event in memory.
//!
//! Used by tests to assert on side effects and by the scenario runner to
//! attach a trace to its report.

use std::sync::{Mutex, PoisonError};

use crate::domain::models::ProxyEvent;
use crate::domain::ports::EventSink;

/// Records events in arrival order, optionally forwarding them onward.
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<ProxyEvent>>,
    forward: Option<Box<dyn EventSink>>,
}

impl RecordingEventSink {
    /// Empty recorder that forwards nowhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record events and also pass each one to `inner`.
    pub fn forwarding_to(inner: impl EventSink + 'static) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            forward: Some(Box::new(inner)),
        }
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<ProxyEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Names of the recorded events, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(ProxyEvent::name)
            .collect()
    }

    /// Number of recorded events called `name`.
    pub fn count(&self, name: &str) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.name() == name)
            .count()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<ProxyEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl EventSink for RecordingEventSink {
    fn record(&self, event: ProxyEvent) {
        if let Some(inner) = &self.forward {
            inner.record(event.clone());
        }
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

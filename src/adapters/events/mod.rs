//! Event sink adapters.

pub mod recording_sink;
pub mod tracing_sink;

pub use recording_sink::RecordingEventSink;
pub use tracing_sink::TracingEventSink;

//! Common test utilities for integration tests
//!
//! Provides shared fixtures used across multiple integration test files.

use std::sync::Arc;

use proxykit::{DatabaseProxy, ImageProxy, RealDatabaseConnector, RecordingEventSink};

/// Descriptor used by every test proxy
pub const TEST_DESCRIPTOR: &str = "server=localhost;db=test";

/// A database proxy with no simulated delays, plus the sink it reports to
pub fn instant_db_proxy() -> (Arc<RecordingEventSink>, DatabaseProxy<RealDatabaseConnector>) {
    let sink = Arc::new(RecordingEventSink::new());
    let proxy = DatabaseProxy::new(
        RealDatabaseConnector::instant(sink.clone()),
        TEST_DESCRIPTOR,
        sink.clone(),
    );
    (sink, proxy)
}

/// An image proxy with no simulated delay, plus the sink it reports to
#[allow(dead_code)]
pub fn instant_image_proxy(filename: &str) -> (Arc<RecordingEventSink>, ImageProxy) {
    let sink = Arc::new(RecordingEventSink::new());
    let proxy = ImageProxy::new(filename, std::time::Duration::ZERO, sink.clone());
    (sink, proxy)
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

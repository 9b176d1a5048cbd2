// Integration test for file logging
// Note: initializes the global subscriber, so it lives alone in this binary

use proxykit::infrastructure::logging::{
    info, instrument, LogConfig, LogFormat, LoggerImpl, RotationPolicy, LOG_FILE_NAME,
};
use proxykit::{EventSink, ProxyEvent, TracingEventSink};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_logging_captures_proxy_events() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "debug".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        enable_console: false,
        rotation: RotationPolicy::Never,
    };

    let logger = LoggerImpl::init(&config).unwrap();
    assert!(logger.has_file_output());

    info!("Test message 1");
    assert_eq!(instrumented_add(5, 7), 12);

    let sink = TracingEventSink::new();
    sink.record(ProxyEvent::CacheMiss {
        key: "users".to_string(),
    });
    sink.record(ProxyEvent::AccessDenied {
        key: "admin_password".to_string(),
        op: proxykit::domain::models::AccessOp::Read,
    });

    // Flush the non-blocking writer
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join(LOG_FILE_NAME)).unwrap();

    assert!(contents.contains("Test message 1"));
    assert!(contents.contains("entering instrumented function"));
    assert!(contents.contains("cache miss for 'users'"));
    assert!(contents.contains("\"event\":\"access_denied\""));
    assert!(contents.contains("\"level\":\"WARN\""));

    // A second global subscriber is refused
    assert!(LoggerImpl::init(&LogConfig::default()).is_err());
}

#[instrument]
fn instrumented_add(a: i32, b: i32) -> i32 {
    info!("entering instrumented function");
    a + b
}

//! proxykit - Proxy pattern over simulated backends
//!
//! Two proxy pairs share one shape: a subject contract, an expensive real
//! subject, and a proxy that adds behavior without callers noticing.
//!
//! - [`DatabaseProxy`] guards a simulated key/value store with a substring
//!   denylist, a write-through cache and a lazily opened connection.
//! - [`ImageProxy`] defers loading a simulated high-resolution image until
//!   it is first displayed.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): subject ports, outcomes, access policy
//! - **Adapter Layer** (`adapters`): real subjects, proxies, event sinks
//! - **Service Layer** (`services`): the demonstration scenarios
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use proxykit::{Database, DatabaseProxy, NullEventSink, ReadOutcome, RealDatabaseConnector};
//!
//! # tokio_test::block_on(async {
//! let events = Arc::new(NullEventSink::new());
//! let mut db = DatabaseProxy::new(RealDatabaseConnector::instant(events.clone()), "mem", events);
//!
//! db.write("users", "Ivan").await.unwrap();
//! assert_eq!(db.read("users").await.unwrap(), ReadOutcome::Found("Ivan".to_string()));
//! assert_eq!(db.read("admin_password").await.unwrap(), ReadOutcome::AccessDenied);
//! # });
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::DatabaseProxy;
pub use adapters::events::{RecordingEventSink, TracingEventSink};
pub use adapters::lazy::ImageProxy;
pub use adapters::memory::{HighResImage, RealDatabase, RealDatabaseConnector};
pub use domain::models::{
    AccessPolicy, CacheStats, Config, ImageInfo, LoadState, ProxyEvent, ReadOutcome,
    WriteOutcome,
};
pub use domain::ports::{
    CacheInspectable, Connector, Database, EventSink, Image, NullEventSink, SharedEventSink,
};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{Scenario, ScenarioReport, ScenarioRunner};

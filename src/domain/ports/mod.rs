//! Port trait definitions (Hexagonal Architecture)
//!
//! Interfaces that adapters implement:
//! - Database / Connector: the key/value subject and how to reach it
//! - Image: the displayable subject
//! - CacheInspectable: diagnostics offered only by caching proxies
//! - EventSink: where step-by-step events go

pub mod cache_inspectable;
pub mod database;
pub mod event_sink;
pub mod image;
pub mod null_event_sink;

pub use cache_inspectable::CacheInspectable;
pub use database::{Connector, Database};
pub use event_sink::{EventSink, SharedEventSink};
pub use image::Image;
pub use null_event_sink::NullEventSink;

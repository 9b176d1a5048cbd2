//! Step-by-step events emitted by subjects and proxies.
//!
//! Business logic never writes to the console; it hands these events to an
//! [`EventSink`](crate::domain::ports::EventSink) instead.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::access::AccessOp;

/// A single traced step of a subject or proxy operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProxyEvent {
    /// A proxy was created in front of `target`.
    ProxyCreated {
        /// Connection descriptor or filename being proxied
        target: String,
    },
    /// A read reached the proxy.
    ReadRequested {
        /// Requested key
        key: String,
    },
    /// A write reached the proxy.
    WriteRequested {
        /// Key being written
        key: String,
        /// Value being written
        value: String,
    },
    /// The access policy refused an operation.
    AccessDenied {
        /// Restricted key
        key: String,
        /// Refused operation
        op: AccessOp,
    },
    /// A read was answered from the cache.
    CacheHit {
        /// Cached key
        key: String,
        /// Value returned from the cache
        value: String,
    },
    /// A read had to go to the backing store.
    CacheMiss {
        /// Uncached key
        key: String,
    },
    /// A value was stored in the cache.
    Cached {
        /// Cached key
        key: String,
    },
    /// A stale cache entry was dropped before a write.
    CacheInvalidated {
        /// Invalidated key
        key: String,
    },
    /// The backing store started connecting.
    ConnectionStarted {
        /// Connection descriptor
        descriptor: String,
    },
    /// The backing store is connected.
    ConnectionEstablished {
        /// Connection descriptor
        descriptor: String,
    },
    /// The backing store ran `statement`.
    QueryExecuted {
        /// Simulated SQL text
        statement: String,
    },
    /// An image proxy is about to construct the real image.
    LoadTriggered {
        /// Image file
        filename: String,
    },
    /// The real image started loading.
    ImageLoading {
        /// Image file
        filename: String,
    },
    /// The real image finished loading.
    ImageLoaded {
        /// Image file
        filename: String,
    },
    /// An image was shown.
    ImageDisplayed {
        /// Image file
        filename: String,
    },
}

impl ProxyEvent {
    /// Stable snake_case name, matching the serialized tag.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ProxyCreated { .. } => "proxy_created",
            Self::ReadRequested { .. } => "read_requested",
            Self::WriteRequested { .. } => "write_requested",
            Self::AccessDenied { .. } => "access_denied",
            Self::CacheHit { .. } => "cache_hit",
            Self::CacheMiss { .. } => "cache_miss",
            Self::Cached { .. } => "cached",
            Self::CacheInvalidated { .. } => "cache_invalidated",
            Self::ConnectionStarted { .. } => "connection_started",
            Self::ConnectionEstablished { .. } => "connection_established",
            Self::QueryExecuted { .. } => "query_executed",
            Self::LoadTriggered { .. } => "load_triggered",
            Self::ImageLoading { .. } => "image_loading",
            Self::ImageLoaded { .. } => "image_loaded",
            Self::ImageDisplayed { .. } => "image_displayed",
        }
    }

    /// Component that produced the event.
    pub const fn source(&self) -> &'static str {
        match self {
            Self::ProxyCreated { .. }
            | Self::ReadRequested { .. }
            | Self::WriteRequested { .. }
            | Self::AccessDenied { .. }
            | Self::CacheHit { .. }
            | Self::CacheMiss { .. }
            | Self::Cached { .. }
            | Self::CacheInvalidated { .. }
            | Self::LoadTriggered { .. } => "proxy",
            Self::ConnectionStarted { .. }
            | Self::ConnectionEstablished { .. }
            | Self::QueryExecuted { .. } => "database",
            Self::ImageLoading { .. } | Self::ImageLoaded { .. } | Self::ImageDisplayed { .. } => {
                "image"
            }
        }
    }
}

impl fmt::Display for ProxyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProxyCreated { target } => write!(f, "proxy created for {target}"),
            Self::ReadRequested { key } => write!(f, "read requested for '{key}'"),
            Self::WriteRequested { key, value } => {
                write!(f, "write requested for '{key}'='{value}'")
            }
            Self::AccessDenied { key, op } => {
                write!(f, "ACCESS DENIED: no {op} rights for restricted key '{key}'")
            }
            Self::CacheHit { key, value } => write!(f, "cache hit for '{key}': {value}"),
            Self::CacheMiss { key } => write!(f, "cache miss for '{key}'"),
            Self::Cached { key } => write!(f, "cached '{key}'"),
            Self::CacheInvalidated { key } => write!(f, "cache invalidated for '{key}'"),
            Self::ConnectionStarted { descriptor } => write!(f, "connecting to {descriptor}"),
            Self::ConnectionEstablished { descriptor } => {
                write!(f, "connection established to {descriptor}")
            }
            Self::QueryExecuted { statement } => write!(f, "executing: {statement}"),
            Self::LoadTriggered { filename } => {
                write!(f, "first display of {filename}, initializing real image")
            }
            Self::ImageLoading { filename } => write!(f, "loading {filename} from disk"),
            Self::ImageLoaded { filename } => write!(f, "{filename} loaded"),
            Self::ImageDisplayed { filename } => write!(f, "displaying {filename}"),
        }
    }
}

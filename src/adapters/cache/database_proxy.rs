//! Caching, access-controlling proxy in front of a [`Database`].
//!
//! Precedence on every read: denylist, then cache, then backing store.
//! Writes are write-through: the cached entry is invalidated, the store is
//! written, then the cache is repopulated with the new value. The backing
//! store is only connected on the first request that actually needs it.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::adapters::memory::RealDatabaseConnector;
use crate::domain::errors::DomainResult;
use crate::domain::models::{
    AccessOp, AccessPolicy, CacheStats, Config, ProxyEvent, ReadOutcome, WriteOutcome,
};
use crate::domain::ports::{CacheInspectable, Connector, Database, EventSink, SharedEventSink};

/// Database proxy decorator.
///
/// Wraps whatever `C` connects to. The cache is unbounded and never expires.
pub struct DatabaseProxy<C: Connector> {
    connector: C,
    descriptor: String,
    policy: AccessPolicy,
    connection: Option<C::Connection>,
    /// Cache keyed by entry key -> last known value.
    cache: HashMap<String, String>,
    hits: u64,
    misses: u64,
    events: SharedEventSink,
}

impl<C: Connector> DatabaseProxy<C> {
    /// Create a proxy with the default denylist. Nothing is connected yet.
    pub fn new(connector: C, descriptor: impl Into<String>, events: SharedEventSink) -> Self {
        let descriptor = descriptor.into();
        events.record(ProxyEvent::ProxyCreated {
            target: descriptor.clone(),
        });

        Self {
            connector,
            descriptor,
            policy: AccessPolicy::default(),
            connection: None,
            cache: HashMap::new(),
            hits: 0,
            misses: 0,
            events,
        }
    }

    /// Replace the denylist.
    #[must_use]
    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Policy consulted before every operation.
    pub const fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// The backing store, if a request has connected it.
    pub const fn backing_store(&self) -> Option<&C::Connection> {
        self.connection.as_ref()
    }

    /// Connect on first use; later calls return the existing connection.
    async fn ensure_connected<'a>(
        connection: &'a mut Option<C::Connection>,
        connector: &C,
        descriptor: &str,
    ) -> DomainResult<&'a mut C::Connection> {
        let conn = match connection.take() {
            Some(conn) => conn,
            None => connector.connect(descriptor).await?,
        };
        Ok(connection.insert(conn))
    }
}

impl DatabaseProxy<RealDatabaseConnector> {
    /// Proxy over a simulated store built from `config`.
    pub fn from_config(config: &Config, events: SharedEventSink) -> Self {
        let connector =
            RealDatabaseConnector::new(config.database.timings(), Arc::clone(&events));
        Self::new(connector, config.database.connection_string.clone(), events)
            .with_policy(config.access.policy())
    }
}

#[async_trait]
impl<C: Connector> Database for DatabaseProxy<C> {
    async fn read(&mut self, key: &str) -> DomainResult<ReadOutcome> {
        self.events.record(ProxyEvent::ReadRequested {
            key: key.to_string(),
        });

        if self.policy.is_restricted(key) {
            self.events.record(ProxyEvent::AccessDenied {
                key: key.to_string(),
                op: AccessOp::Read,
            });
            return Ok(ReadOutcome::AccessDenied);
        }

        if let Some(cached) = self.cache.get(key) {
            self.hits += 1;
            self.events.record(ProxyEvent::CacheHit {
                key: key.to_string(),
                value: cached.clone(),
            });
            return Ok(ReadOutcome::Found(cached.clone()));
        }

        self.misses += 1;
        self.events.record(ProxyEvent::CacheMiss {
            key: key.to_string(),
        });

        let connection =
            Self::ensure_connected(&mut self.connection, &self.connector, &self.descriptor).await?;
        let outcome = connection.read(key).await?;

        if let ReadOutcome::Found(value) = &outcome {
            self.cache.insert(key.to_string(), value.clone());
            self.events.record(ProxyEvent::Cached {
                key: key.to_string(),
            });
        }

        Ok(outcome)
    }

    async fn write(&mut self, key: &str, value: &str) -> DomainResult<WriteOutcome> {
        self.events.record(ProxyEvent::WriteRequested {
            key: key.to_string(),
            value: value.to_string(),
        });

        if self.policy.is_restricted(key) {
            self.events.record(ProxyEvent::AccessDenied {
                key: key.to_string(),
                op: AccessOp::Write,
            });
            return Ok(WriteOutcome::Denied);
        }

        let connection =
            Self::ensure_connected(&mut self.connection, &self.connector, &self.descriptor).await?;

        if self.cache.remove(key).is_some() {
            self.events.record(ProxyEvent::CacheInvalidated {
                key: key.to_string(),
            });
        }

        let outcome = connection.write(key, value).await?;

        if outcome == WriteOutcome::Written {
            self.cache.insert(key.to_string(), value.to_string());
            self.events.record(ProxyEvent::Cached {
                key: key.to_string(),
            });
        }

        Ok(outcome)
    }
}

impl<C: Connector> CacheInspectable for DatabaseProxy<C> {
    fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    fn is_cached(&self, key: &str) -> bool {
        self.cache.contains_key(key)
    }

    fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    fn cache_stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.len(),
            hits: self.hits,
            misses: self.misses,
            connected: self.connection.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::RecordingEventSink;
    use crate::adapters::memory::RealDatabase;
    use crate::domain::errors::DomainError;

    fn proxy() -> (Arc<RecordingEventSink>, DatabaseProxy<RealDatabaseConnector>) {
        let sink = Arc::new(RecordingEventSink::new());
        let proxy = DatabaseProxy::new(
            RealDatabaseConnector::instant(sink.clone()),
            "server=localhost;db=test",
            sink.clone(),
        );
        (sink, proxy)
    }

    #[tokio::test]
    async fn test_construction_does_not_connect() {
        let (sink, proxy) = proxy();
        assert_eq!(sink.names(), vec!["proxy_created"]);
        assert!(!proxy.is_connected());
        assert!(proxy.backing_store().is_none());
    }

    #[tokio::test]
    async fn test_read_missing_key_connects_and_returns_not_found() {
        let (sink, mut proxy) = proxy();

        let outcome = proxy.read("users").await.unwrap();

        assert_eq!(outcome, ReadOutcome::NotFound);
        assert!(proxy.is_connected());
        assert_eq!(proxy.cached_entries(), 0);
        assert_eq!(sink.count("connection_established"), 1);
        assert_eq!(sink.count("cached"), 0);
    }

    #[tokio::test]
    async fn test_write_then_read_served_from_cache() {
        let (sink, mut proxy) = proxy();

        assert_eq!(proxy.read("users").await.unwrap(), ReadOutcome::NotFound);
        assert_eq!(
            proxy.write("users", "Ivan, Petr, Maria").await.unwrap(),
            WriteOutcome::Written
        );
        assert!(proxy.is_cached("users"));

        sink.drain();
        let outcome = proxy.read("users").await.unwrap();

        assert_eq!(outcome, ReadOutcome::Found("Ivan, Petr, Maria".to_string()));
        assert_eq!(sink.names(), vec!["read_requested", "cache_hit"]);
    }

    #[tokio::test]
    async fn test_denied_read_has_no_side_effects() {
        let (sink, mut proxy) = proxy();

        let outcome = proxy.read("admin_password").await.unwrap();

        assert_eq!(outcome, ReadOutcome::AccessDenied);
        assert!(!proxy.is_connected());
        assert_eq!(sink.count("connection_started"), 0);
        assert_eq!(sink.count("cache_miss"), 0);
    }

    #[tokio::test]
    async fn test_denied_read_ignores_cache() {
        let sink = Arc::new(RecordingEventSink::new());
        let mut proxy = DatabaseProxy::new(
            RealDatabaseConnector::instant(sink.clone()),
            "d",
            sink.clone(),
        )
        .with_policy(AccessPolicy::allow_all());
        proxy.write("secret_key", "v").await.unwrap();
        assert!(proxy.is_cached("secret_key"));

        let mut proxy = proxy.with_policy(AccessPolicy::default());
        assert_eq!(
            proxy.read("secret_key").await.unwrap(),
            ReadOutcome::AccessDenied
        );
        assert_eq!(sink.count("cache_hit"), 0);
    }

    #[tokio::test]
    async fn test_denied_write_is_reported_and_dropped() {
        let (sink, mut proxy) = proxy();

        let outcome = proxy.write("top_secret", "x").await.unwrap();

        assert_eq!(outcome, WriteOutcome::Denied);
        assert!(!proxy.is_connected());
        assert_eq!(proxy.cached_entries(), 0);
        assert_eq!(sink.count("access_denied"), 1);
    }

    #[tokio::test]
    async fn test_connect_happens_once() {
        let (sink, mut proxy) = proxy();

        proxy.read("a").await.unwrap();
        proxy.write("b", "1").await.unwrap();
        proxy.read("c").await.unwrap();

        assert_eq!(sink.count("connection_established"), 1);
    }

    #[tokio::test]
    async fn test_second_read_does_not_requery() {
        let (sink, mut proxy) = proxy();
        proxy.write("k", "v").await.unwrap();
        proxy.cache.clear();

        proxy.read("k").await.unwrap();
        let queries_after_first = sink.count("query_executed");
        proxy.read("k").await.unwrap();

        assert_eq!(sink.count("query_executed"), queries_after_first);
        assert_eq!(proxy.cache_stats().hits, 1);
        assert_eq!(proxy.cache_stats().misses, 1);
    }

    #[tokio::test]
    async fn test_first_write_event_order() {
        let (sink, mut proxy) = proxy();
        proxy.cache.insert("k".to_string(), "stale".to_string());
        sink.drain();

        proxy.write("k", "v").await.unwrap();

        assert_eq!(
            sink.names(),
            vec![
                "write_requested",
                "connection_started",
                "connection_established",
                "cache_invalidated",
                "query_executed",
                "cached",
            ]
        );
        assert_eq!(proxy.read("k").await.unwrap(), ReadOutcome::Found("v".to_string()));
    }

    #[tokio::test]
    async fn test_overwrite_invalidates_and_repopulates() {
        let (sink, mut proxy) = proxy();

        proxy.write("k", "v1").await.unwrap();
        proxy.write("k", "v2").await.unwrap();

        assert_eq!(sink.count("cache_invalidated"), 1);
        assert_eq!(proxy.read("k").await.unwrap(), ReadOutcome::Found("v2".to_string()));
        assert_eq!(
            proxy.backing_store().unwrap().get("k").await.as_deref(),
            Some("v2")
        );
        assert_eq!(proxy.cached_entries(), 1);
    }

    #[tokio::test]
    async fn test_stats_snapshot() {
        let (_sink, mut proxy) = proxy();
        proxy.read("missing").await.unwrap();
        proxy.write("users", "x").await.unwrap();
        proxy.read("users").await.unwrap();

        assert_eq!(
            proxy.cache_stats(),
            CacheStats {
                entries: 1,
                hits: 1,
                misses: 1,
                connected: true,
            }
        );
    }

    struct UnreachableConnector;

    #[async_trait]
    impl Connector for UnreachableConnector {
        type Connection = RealDatabase;

        async fn connect(&self, descriptor: &str) -> DomainResult<RealDatabase> {
            Err(DomainError::BackendUnavailable {
                descriptor: descriptor.to_string(),
                reason: "refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_connect_failure_propagates_and_retries() {
        let sink = Arc::new(RecordingEventSink::new());
        let mut proxy = DatabaseProxy::new(UnreachableConnector, "d", sink);

        let err = proxy.read("k").await.unwrap_err();
        assert!(matches!(err, DomainError::BackendUnavailable { .. }));
        assert!(!proxy.is_connected());

        assert!(proxy.write("k", "v").await.is_err());
        assert_eq!(proxy.cached_entries(), 0);
    }

    struct ProxyConnector {
        inner: RealDatabaseConnector,
        events: SharedEventSink,
    }

    #[async_trait]
    impl Connector for ProxyConnector {
        type Connection = DatabaseProxy<RealDatabaseConnector>;

        async fn connect(&self, descriptor: &str) -> DomainResult<Self::Connection> {
            Ok(DatabaseProxy::new(self.inner.clone(), descriptor, Arc::clone(&self.events))
                .with_policy(AccessPolicy::new(["internal"])))
        }
    }

    #[tokio::test]
    async fn test_inner_denials_are_not_cached() {
        let sink = Arc::new(RecordingEventSink::new());
        let connector = ProxyConnector {
            inner: RealDatabaseConnector::instant(sink.clone()),
            events: sink.clone(),
        };
        let mut outer = DatabaseProxy::new(connector, "d", sink.clone());

        assert_eq!(
            outer.write("internal_notes", "x").await.unwrap(),
            WriteOutcome::Denied
        );
        assert_eq!(
            outer.read("internal_notes").await.unwrap(),
            ReadOutcome::AccessDenied
        );
        assert_eq!(outer.cached_entries(), 0);
    }
}

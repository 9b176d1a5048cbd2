//! Simulated key/value backing store.
//!
//! Connecting, querying and writing all sleep for a configured time to stand
//! in for real I/O. Storage is an in-memory map that lives as long as the
//! value does.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{DatabaseTimings, ProxyEvent, ReadOutcome, WriteOutcome};
use crate::domain::ports::{Connector, Database, EventSink, SharedEventSink};

/// The real subject: slow to construct, slow to query.
pub struct RealDatabase {
    descriptor: String,
    storage: HashMap<String, String>,
    timings: DatabaseTimings,
    events: SharedEventSink,
}

impl RealDatabase {
    /// Connect to the store described by `descriptor`.
    ///
    /// Construction is the connection: the returned value is ready for use.
    pub async fn connect(
        descriptor: impl Into<String>,
        timings: DatabaseTimings,
        events: SharedEventSink,
    ) -> Self {
        let descriptor = descriptor.into();
        events.record(ProxyEvent::ConnectionStarted {
            descriptor: descriptor.clone(),
        });
        tokio::time::sleep(timings.connect).await;
        events.record(ProxyEvent::ConnectionEstablished {
            descriptor: descriptor.clone(),
        });

        Self {
            descriptor,
            storage: HashMap::new(),
            timings,
            events,
        }
    }

    /// Look up `key`, returning `None` if it was never written.
    pub async fn get(&self, key: &str) -> Option<String> {
        self.events.record(ProxyEvent::QueryExecuted {
            statement: format!("SELECT * FROM data WHERE key='{key}'"),
        });
        tokio::time::sleep(self.timings.query).await;
        self.storage.get(key).cloned()
    }

    /// Store `value` under `key` unconditionally.
    pub async fn put(&mut self, key: &str, value: &str) {
        self.events.record(ProxyEvent::QueryExecuted {
            statement: format!("INSERT INTO data (key, value) VALUES ('{key}', '{value}')"),
        });
        tokio::time::sleep(self.timings.write).await;
        self.storage.insert(key.to_string(), value.to_string());
    }

    /// Descriptor this store was connected with.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl Database for RealDatabase {
    async fn read(&mut self, key: &str) -> DomainResult<ReadOutcome> {
        Ok(ReadOutcome::from_option(self.get(key).await))
    }

    async fn write(&mut self, key: &str, value: &str) -> DomainResult<WriteOutcome> {
        self.put(key, value).await;
        Ok(WriteOutcome::Written)
    }
}

/// Opens [`RealDatabase`] connections with fixed timings.
#[derive(Clone)]
pub struct RealDatabaseConnector {
    timings: DatabaseTimings,
    events: SharedEventSink,
}

impl RealDatabaseConnector {
    /// Connector producing stores with the given latencies.
    pub fn new(timings: DatabaseTimings, events: SharedEventSink) -> Self {
        Self { timings, events }
    }

    /// Connector whose connections never sleep.
    pub fn instant(events: SharedEventSink) -> Self {
        Self::new(DatabaseTimings::zero(), events)
    }
}

#[async_trait]
impl Connector for RealDatabaseConnector {
    type Connection = RealDatabase;

    async fn connect(&self, descriptor: &str) -> DomainResult<RealDatabase> {
        Ok(RealDatabase::connect(descriptor, self.timings, Arc::clone(&self.events)).await)
    }
}

//! Database subject port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ReadOutcome, WriteOutcome};

/// Read/write contract shared by the backing store and every proxy in front
/// of it. Callers cannot tell which one they hold.
#[async_trait]
pub trait Database: Send {
    /// Read the value stored under `key`.
    async fn read(&mut self, key: &str) -> DomainResult<ReadOutcome>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn write(&mut self, key: &str, value: &str) -> DomainResult<WriteOutcome>;
}

#[async_trait]
impl<D: Database + ?Sized> Database for Box<D> {
    async fn read(&mut self, key: &str) -> DomainResult<ReadOutcome> {
        (**self).read(key).await
    }

    async fn write(&mut self, key: &str, value: &str) -> DomainResult<WriteOutcome> {
        (**self).write(key, value).await
    }
}

/// Establishes connections to a backing store.
///
/// Constructing the connection is the expensive step a lazy proxy defers.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Store produced by a successful connect.
    type Connection: Database;

    /// Build a connected store for `descriptor`.
    async fn connect(&self, descriptor: &str) -> DomainResult<Self::Connection>;
}

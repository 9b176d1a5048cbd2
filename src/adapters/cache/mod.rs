//! Caching layer in front of key/value subjects.
//!
//! Plain unbounded map, write-through on every accepted write. Wraps
//! `Database` implementations as decorators.

pub mod database_proxy;

pub use database_proxy::DatabaseProxy;

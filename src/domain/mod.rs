//! Domain layer for proxykit
//!
//! Subject contracts, outcomes and the access policy. Nothing here performs
//! I/O or logging.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};

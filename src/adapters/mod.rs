//! Adapters implementing the domain ports.

pub mod cache;
pub mod events;
pub mod lazy;
pub mod memory;

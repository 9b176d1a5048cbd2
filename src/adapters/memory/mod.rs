//! In-memory simulated subjects.
//!
//! These are the expensive "real" objects that proxies stand in for.
//! Latency is simulated with `tokio::time::sleep`.

pub mod high_res_image;
pub mod real_database;

pub use high_res_image::HighResImage;
pub use real_database::{RealDatabase, RealDatabaseConnector};

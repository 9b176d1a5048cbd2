//! Image metadata exposed by image subjects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a lazily loaded image. Transitions only forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    /// Only the proxy exists
    Uninitialized,
    /// The real image has been loaded
    Loaded,
}

/// Descriptive metadata that never forces a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Image file name
    pub filename: String,
    /// Load state at the time of the call
    pub state: LoadState,
}

impl ImageInfo {
    /// Info for an image not loaded yet.
    pub fn unloaded(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            state: LoadState::Uninitialized,
        }
    }

    /// Info for a loaded image.
    pub fn loaded(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            state: LoadState::Loaded,
        }
    }

    /// Whether the image is loaded.
    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            LoadState::Uninitialized => write!(f, "{} (Proxy, not loaded)", self.filename),
            LoadState::Loaded => write!(f, "{} (High Resolution)", self.filename),
        }
    }
}

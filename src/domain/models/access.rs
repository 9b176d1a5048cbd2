//! Substring denylist guarding restricted keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Substrings that mark a key as restricted by default.
pub const DEFAULT_DENIED_SUBSTRINGS: [&str; 2] = ["admin", "secret"];

/// Which kind of access was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessOp {
    /// Read through the proxy
    Read,
    /// Write through the proxy
    Write,
}

impl fmt::Display for AccessOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Case-sensitive substring denylist.
///
/// A key is restricted when any denied substring occurs anywhere in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    denied_substrings: Vec<String>,
}

impl AccessPolicy {
    /// Policy refusing keys that contain any of `denied_substrings`.
    pub fn new<I, S>(denied_substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            denied_substrings: denied_substrings.into_iter().map(Into::into).collect(),
        }
    }

    /// A policy that allows every key.
    pub fn allow_all() -> Self {
        Self {
            denied_substrings: Vec::new(),
        }
    }

    /// Whether `key` contains a denied substring.
    pub fn is_restricted(&self, key: &str) -> bool {
        self.denied_substrings
            .iter()
            .any(|needle| key.contains(needle.as_str()))
    }

    /// The configured substrings.
    pub fn denied_substrings(&self) -> &[String] {
        &self.denied_substrings
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DENIED_SUBSTRINGS)
    }
}

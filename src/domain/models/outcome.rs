//! Results of subject operations.
//!
//! Denials and misses are ordinary outcomes, not errors: a read can find a
//! value, find nothing, or be refused by the access policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a read through a [`Database`](crate::domain::ports::Database).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ReadOutcome {
    /// The key holds this value.
    Found(String),
    /// The key was never written.
    NotFound,
    /// The access policy rejected the key.
    AccessDenied,
}

impl ReadOutcome {
    /// Build an outcome from an optional stored value.
    pub fn from_option(value: Option<String>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }

    /// The found value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound | Self::AccessDenied => None,
        }
    }

    /// Whether the access policy refused the read.
    pub const fn is_denied(&self) -> bool {
        matches!(self, Self::AccessDenied)
    }
}

impl fmt::Display for ReadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(value) => write!(f, "{value}"),
            Self::NotFound => write!(f, "NULL"),
            Self::AccessDenied => write!(f, "ACCESS DENIED"),
        }
    }
}

/// Outcome of a write through a [`Database`](crate::domain::ports::Database).
///
/// Denied writes are otherwise silent no-ops; this variant lets callers
/// notice them if they care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    /// The value reached the backing store and the cache.
    Written,
    /// The access policy refused the write.
    Denied,
}

impl WriteOutcome {
    /// Whether the access policy refused the write.
    pub const fn is_denied(self) -> bool {
        matches!(self, Self::Denied)
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written => write!(f, "written"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option() {
        assert_eq!(
            ReadOutcome::from_option(Some("v".to_string())),
            ReadOutcome::Found("v".to_string())
        );
        assert_eq!(ReadOutcome::from_option(None), ReadOutcome::NotFound);
    }

    #[test]
    fn test_value_only_for_found() {
        assert_eq!(ReadOutcome::Found("x".to_string()).value(), Some("x"));
        assert_eq!(ReadOutcome::NotFound.value(), None);
        assert_eq!(ReadOutcome::AccessDenied.value(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ReadOutcome::NotFound.to_string(), "NULL");
        assert_eq!(ReadOutcome::AccessDenied.to_string(), "ACCESS DENIED");
        assert_eq!(WriteOutcome::Denied.to_string(), "denied");
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(ReadOutcome::Found("a".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"status": "found", "value": "a"}));

        let json = serde_json::to_value(ReadOutcome::AccessDenied).unwrap();
        assert_eq!(json, serde_json::json!({"status": "access_denied"}));
    }
}

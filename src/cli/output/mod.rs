//! CLI output formatting module
//!
//! Every command result renders either for humans or as JSON.

pub mod table;

use serde::Serialize;

pub use table::TableFormatter;

/// Result of a CLI command, renderable for humans or as JSON
pub trait CommandOutput: Serialize {
    /// Human-readable rendering
    fn to_human(&self) -> String;

    /// JSON rendering
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print a command result to stdout
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

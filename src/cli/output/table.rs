//! Table output formatting for CLI commands
//!
//! Renders scenario reports with comfy-table. Colors are dropped when the
//! terminal cannot show them.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use crate::domain::models::{ImageInfo, LoadState, ReadOutcome};
use crate::services::{DatabaseStep, DisplayStep, StepResult};

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
        }
    }

    /// Create a new table formatter with explicit color handling
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format the operations of the database scenario
    pub fn format_database_steps(&self, steps: &[DatabaseStep]) -> String {
        let mut table = Self::create_base_table();

        table.set_header(vec![
            Cell::new("Step").add_attribute(Attribute::Bold),
            Cell::new("Op").add_attribute(Attribute::Bold),
            Cell::new("Key").add_attribute(Attribute::Bold),
            Cell::new("Result").add_attribute(Attribute::Bold),
        ]);

        for step in steps {
            let result = match &step.result {
                StepResult::Read(outcome) => outcome.to_string(),
                StepResult::Write(outcome) => outcome.to_string(),
            };
            let result_cell = if self.use_colors {
                Cell::new(result).fg(result_color(&step.result))
            } else {
                Cell::new(format!("{} {result}", result_icon(&step.result)))
            };

            table.add_row(vec![
                Cell::new(&step.label),
                Cell::new(step.op.to_string()),
                Cell::new(&step.key),
                result_cell,
            ]);
        }

        table.to_string()
    }

    /// Format the display calls of the image scenario
    pub fn format_displays(&self, displays: &[DisplayStep]) -> String {
        let mut table = Self::create_base_table();

        table.set_header(vec![
            Cell::new("Step").add_attribute(Attribute::Bold),
            Cell::new("Image").add_attribute(Attribute::Bold),
            Cell::new("Loaded now").add_attribute(Attribute::Bold),
        ]);

        for display in displays {
            let loaded = if display.loaded_now { "yes" } else { "no" };
            let loaded_cell = if self.use_colors && display.loaded_now {
                Cell::new(loaded).fg(Color::Yellow)
            } else {
                Cell::new(loaded)
            };

            table.add_row(vec![
                Cell::new(&display.label),
                Cell::new(&display.filename),
                loaded_cell,
            ]);
        }

        table.to_string()
    }

    /// Format image metadata, one row per image
    pub fn format_image_info(&self, infos: &[ImageInfo]) -> String {
        let mut table = Self::create_base_table();

        table.set_header(vec![
            Cell::new("Image").add_attribute(Attribute::Bold),
            Cell::new("State").add_attribute(Attribute::Bold),
            Cell::new("Info").add_attribute(Attribute::Bold),
        ]);

        for info in infos {
            let state = match info.state {
                LoadState::Uninitialized => "not loaded",
                LoadState::Loaded => "loaded",
            };
            let state_cell = if self.use_colors && info.is_loaded() {
                Cell::new(state).fg(Color::Green)
            } else {
                Cell::new(state)
            };

            table.add_row(vec![
                Cell::new(&info.filename),
                state_cell,
                Cell::new(info.to_string()),
            ]);
        }

        table.to_string()
    }

    /// Create a base table with common settings
    fn create_base_table() -> Table {
        let mut table = Table::new();

        // Use UTF-8 preset for nice borders
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

/// Map step result to color
const fn result_color(result: &StepResult) -> Color {
    if result.is_denied() {
        return Color::Red;
    }
    match result {
        StepResult::Read(ReadOutcome::NotFound) => Color::DarkGrey,
        _ => Color::Green,
    }
}

/// Map step result to icon
const fn result_icon(result: &StepResult) -> &'static str {
    if result.is_denied() {
        return "✗";
    }
    match result {
        StepResult::Read(ReadOutcome::NotFound) => "○",
        _ => "✓",
    }
}

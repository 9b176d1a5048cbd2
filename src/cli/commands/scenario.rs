//! `proxykit run|database|images`: run a scenario and render its report.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::Config;
use crate::services::{Scenario, ScenarioReport, ScenarioRunner};

/// Report wrapper rendered by the CLI
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ScenarioOutput(pub ScenarioReport);

impl CommandOutput for ScenarioOutput {
    fn to_human(&self) -> String {
        let formatter = TableFormatter::new();
        let report = &self.0;
        let mut lines = Vec::new();

        if let Some(database) = &report.database {
            lines.push(style("Database proxy (caching + access control)").bold().to_string());
            lines.push(formatter.format_database_steps(&database.steps));
            lines.push(format!(
                "Cache: {} entr{}, {} hit(s), {} miss(es), backing store {}",
                database.stats.entries,
                if database.stats.entries == 1 { "y" } else { "ies" },
                database.stats.hits,
                database.stats.misses,
                if database.stats.connected { "connected" } else { "not connected" },
            ));
        }

        if let Some(images) = &report.images {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(style("Image proxy (lazy loading)").bold().to_string());
            lines.push("Before any display:".to_string());
            lines.push(formatter.format_image_info(&images.info_before));
            lines.push(formatter.format_displays(&images.displays));
            lines.push("After the scenario:".to_string());
            lines.push(formatter.format_image_info(&images.info_after));
        }

        lines.push(format!("\n{} events traced", report.events.len()));
        lines.join("\n")
    }
}

/// Handle the run/database/images commands
pub async fn execute(scenario: Scenario, config: Config, json: bool) -> Result<()> {
    let runner = ScenarioRunner::new(config);
    let report = runner
        .run(scenario)
        .await
        .with_context(|| format!("Failed to run {scenario:?} scenario"))?;

    output(&ScenarioOutput(report), json);
    Ok(())
}

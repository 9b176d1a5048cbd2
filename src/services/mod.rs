//! Application services.

pub mod scenario_runner;

pub use scenario_runner::{
    DatabaseReport, DatabaseStep, DisplayStep, ImageReport, Scenario, ScenarioReport,
    ScenarioRunner, StepResult,
};

//! Fixed demonstration scenarios for both proxy pairs.
//!
//! The database scenario drives the proxy purely through the [`Database`]
//! contract and only uses the concrete handle for cache diagnostics. The
//! image scenario does the same with [`Image`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::adapters::cache::DatabaseProxy;
use crate::adapters::events::{RecordingEventSink, TracingEventSink};
use crate::adapters::lazy::ImageProxy;
use crate::domain::errors::DomainResult;
use crate::domain::models::{
    AccessOp, CacheStats, Config, ImageInfo, ProxyEvent, ReadOutcome, WriteOutcome,
};
use crate::domain::ports::{CacheInspectable, Database, Image, SharedEventSink};

/// Key used by the database scenario.
pub const USERS_KEY: &str = "users";
/// Value written under [`USERS_KEY`].
pub const USERS_VALUE: &str = "Ivan, Petr, Maria";
/// Restricted key the scenario tries to read.
pub const RESTRICTED_KEY: &str = "admin_password";
/// Images created by the image scenario, in order.
pub const IMAGE_FILES: [&str; 3] = ["family_photo.jpg", "vacation.png", "avatar.jpg"];

/// Which scenarios to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Database then images
    All,
    /// Database proxy only
    Database,
    /// Image proxies only
    Images,
}

impl Scenario {
    const fn includes_database(self) -> bool {
        matches!(self, Self::All | Self::Database)
    }

    const fn includes_images(self) -> bool {
        matches!(self, Self::All | Self::Images)
    }
}

/// Result of one subject operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepResult {
    /// Outcome of a `read`
    Read(ReadOutcome),
    /// Outcome of a `write`
    Write(WriteOutcome),
}

impl StepResult {
    /// Whether the access policy refused the operation.
    pub const fn is_denied(&self) -> bool {
        match self {
            Self::Read(outcome) => outcome.is_denied(),
            Self::Write(outcome) => outcome.is_denied(),
        }
    }
}

/// One labelled operation of the database scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseStep {
    /// Human description of the step
    pub label: String,
    /// Operation kind
    pub op: AccessOp,
    /// Key operated on
    pub key: String,
    /// What the proxy returned
    pub result: StepResult,
}

/// Outcome of the database scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseReport {
    /// Operations in the order they ran
    pub steps: Vec<DatabaseStep>,
    /// Cache statistics after the last step
    pub stats: CacheStats,
}

/// One labelled `display` call of the image scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayStep {
    /// Human description of the call
    pub label: String,
    /// Image displayed
    pub filename: String,
    /// Whether this call had to load the real image.
    pub loaded_now: bool,
}

/// Outcome of the image scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReport {
    /// Info for every image, gathered before any display
    pub info_before: Vec<ImageInfo>,
    /// Display calls in order
    pub displays: Vec<DisplayStep>,
    /// Info for every image once the scenario is over
    pub info_after: Vec<ImageInfo>,
}

/// Full report of one `run`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario that ran
    pub scenario: Scenario,
    /// Database part, when selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseReport>,
    /// Image part, when selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<ImageReport>,
    /// Every traced step, in order
    pub events: Vec<ProxyEvent>,
}

/// Runs scenarios against freshly built proxies and reports what happened.
pub struct ScenarioRunner {
    config: Config,
    recorder: Arc<RecordingEventSink>,
}

impl ScenarioRunner {
    /// Runner whose events are traced through `tracing` and recorded.
    pub fn new(config: Config) -> Self {
        Self::with_recorder(
            config,
            Arc::new(RecordingEventSink::forwarding_to(TracingEventSink::new())),
        )
    }

    /// Runner recording into `recorder` only.
    pub fn with_recorder(config: Config, recorder: Arc<RecordingEventSink>) -> Self {
        Self { config, recorder }
    }

    /// Configuration the proxies are built from.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn sink(&self) -> SharedEventSink {
        self.recorder.clone()
    }

    /// Run `scenario` and return its report, including the event trace.
    pub async fn run(&self, scenario: Scenario) -> DomainResult<ScenarioReport> {
        self.recorder.drain();

        let database = if scenario.includes_database() {
            Some(self.run_database().await?)
        } else {
            None
        };

        let images = if scenario.includes_images() {
            Some(self.run_images().await)
        } else {
            None
        };

        Ok(ScenarioReport {
            scenario,
            database,
            images,
            events: self.recorder.drain(),
        })
    }

    /// Caching, write-through and denylist behavior of [`DatabaseProxy`].
    #[instrument(skip(self), fields(descriptor = %self.config.database.connection_string))]
    pub async fn run_database(&self) -> DomainResult<DatabaseReport> {
        info!("running database proxy scenario");
        let mut proxy = DatabaseProxy::from_config(&self.config, self.sink());

        let mut steps = Vec::new();
        {
            let db: &mut dyn Database = &mut proxy;
            steps.push(read_step(db, "first read (connects)", USERS_KEY).await?);
            steps.push(write_step(db, "save data", USERS_KEY, USERS_VALUE).await?);
            steps.push(read_step(db, "repeat read (cache)", USERS_KEY).await?);
            steps.push(read_step(db, "restricted read", RESTRICTED_KEY).await?);
        }

        let stats = proxy.cache_stats();
        info!(entries = stats.entries, hits = stats.hits, misses = stats.misses, "cache stats");

        Ok(DatabaseReport { steps, stats })
    }

    /// Deferred loading behavior of [`ImageProxy`].
    #[instrument(skip(self))]
    pub async fn run_images(&self) -> ImageReport {
        info!("running image proxy scenario");
        let mut images: Vec<ImageProxy> = IMAGE_FILES
            .iter()
            .map(|file| ImageProxy::from_config(*file, &self.config.images, self.sink()))
            .collect();

        let info_before = images.iter().map(Image::info).collect();

        let mut displays = Vec::new();
        let plan = [
            ("first display", 0),
            ("repeat display (already loaded)", 0),
            ("second image display", 1),
        ];
        for (label, index) in plan {
            displays.push(display_step(&mut images[index], label).await);
        }

        let info_after = images.iter().map(Image::info).collect();

        ImageReport {
            info_before,
            displays,
            info_after,
        }
    }
}

async fn read_step(db: &mut dyn Database, label: &str, key: &str) -> DomainResult<DatabaseStep> {
    let outcome = db.read(key).await?;
    info!(step = label, %key, result = %outcome, "read complete");
    Ok(DatabaseStep {
        label: label.to_string(),
        op: AccessOp::Read,
        key: key.to_string(),
        result: StepResult::Read(outcome),
    })
}

async fn write_step(
    db: &mut dyn Database,
    label: &str,
    key: &str,
    value: &str,
) -> DomainResult<DatabaseStep> {
    let outcome = db.write(key, value).await?;
    info!(step = label, %key, result = %outcome, "write complete");
    Ok(DatabaseStep {
        label: label.to_string(),
        op: AccessOp::Write,
        key: key.to_string(),
        result: StepResult::Write(outcome),
    })
}

async fn display_step(image: &mut dyn Image, label: &str) -> DisplayStep {
    let was_loaded = image.info().is_loaded();
    image.display().await;
    let info = image.info();
    DisplayStep {
        label: label.to_string(),
        loaded_now: !was_loaded && info.is_loaded(),
        filename: info.filename,
    }
}

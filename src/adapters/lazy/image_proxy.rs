//! Lazy-loading proxy in front of [`HighResImage`].

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::memory::HighResImage;
use crate::domain::models::{ImageConfig, ImageInfo, LoadState, ProxyEvent};
use crate::domain::ports::{EventSink, Image, SharedEventSink};

/// Stands in for a [`HighResImage`] until the first `display`.
///
/// `Uninitialized -> Loaded`, never back.
pub struct ImageProxy {
    filename: String,
    load_delay: Duration,
    real: Option<HighResImage>,
    events: SharedEventSink,
}

impl ImageProxy {
    /// Proxy for `filename`. Nothing is loaded until the first `display`.
    pub fn new(
        filename: impl Into<String>,
        load_delay: Duration,
        events: SharedEventSink,
    ) -> Self {
        let filename = filename.into();
        events.record(ProxyEvent::ProxyCreated {
            target: filename.clone(),
        });

        Self {
            filename,
            load_delay,
            real: None,
            events,
        }
    }

    /// Proxy with the configured load delay.
    pub fn from_config(
        filename: impl Into<String>,
        config: &ImageConfig,
        events: SharedEventSink,
    ) -> Self {
        Self::new(filename, config.load_delay(), events)
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> LoadState {
        if self.real.is_some() {
            LoadState::Loaded
        } else {
            LoadState::Uninitialized
        }
    }

    /// Whether the real image exists yet.
    pub const fn is_loaded(&self) -> bool {
        self.real.is_some()
    }

    /// Proxied file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

#[async_trait]
impl Image for ImageProxy {
    async fn display(&mut self) {
        let image = match self.real.take() {
            Some(image) => image,
            None => {
                self.events.record(ProxyEvent::LoadTriggered {
                    filename: self.filename.clone(),
                });
                HighResImage::load(&self.filename, self.load_delay, Arc::clone(&self.events)).await
            }
        };

        self.real.insert(image).display().await;
    }

    fn info(&self) -> ImageInfo {
        self.real
            .as_ref()
            .map_or_else(|| ImageInfo::unloaded(&self.filename), Image::info)
    }
}

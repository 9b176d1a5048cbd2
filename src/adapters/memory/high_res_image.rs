//! Simulated expensive image.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::models::{ImageInfo, ProxyEvent};
use crate::domain::ports::{EventSink, Image, SharedEventSink};

/// The real subject: loads its pixels from "disk" as soon as it is built.
pub struct HighResImage {
    filename: String,
    events: SharedEventSink,
}

impl HighResImage {
    /// Load `filename`, sleeping for `load_delay` to simulate disk I/O.
    pub async fn load(
        filename: impl Into<String>,
        load_delay: Duration,
        events: SharedEventSink,
    ) -> Self {
        let filename = filename.into();
        events.record(ProxyEvent::ImageLoading {
            filename: filename.clone(),
        });
        tokio::time::sleep(load_delay).await;
        events.record(ProxyEvent::ImageLoaded {
            filename: filename.clone(),
        });

        Self { filename, events }
    }

    /// Loaded file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

#[async_trait]
impl Image for HighResImage {
    async fn display(&mut self) {
        self.events.record(ProxyEvent::ImageDisplayed {
            filename: self.filename.clone(),
        });
    }

    fn info(&self) -> ImageInfo {
        ImageInfo::loaded(&self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::RecordingEventSink;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_load_then_display() {
        let sink = Arc::new(RecordingEventSink::new());
        let mut image = HighResImage::load("a.jpg", Duration::ZERO, sink.clone()).await;

        assert_eq!(sink.names(), vec!["image_loading", "image_loaded"]);

        image.display().await;
        image.display().await;

        assert_eq!(sink.count("image_displayed"), 2);
        assert_eq!(sink.count("image_loaded"), 1);
        assert_eq!(image.info().to_string(), "a.jpg (High Resolution)");
        assert_eq!(image.filename(), "a.jpg");
    }
}

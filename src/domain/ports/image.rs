//! Image subject port.

use async_trait::async_trait;

use crate::domain::models::ImageInfo;

/// Contract shared by real images and lazy image proxies.
#[async_trait]
pub trait Image: Send {
    /// Show the image, acquiring it first if necessary.
    async fn display(&mut self);

    /// Describe the image. Never triggers a load.
    fn info(&self) -> ImageInfo;
}

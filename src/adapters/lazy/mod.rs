//! Proxies that defer acquiring an expensive subject until first use.

pub mod image_proxy;

pub use image_proxy::ImageProxy;

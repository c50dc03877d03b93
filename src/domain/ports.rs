use super::render::{ErrorCorrection, Rendered};
use crate::error::Result;
use async_trait::async_trait;

/// Rasterizes or vectorizes text into a QR symbol.
#[async_trait]
pub trait QrRenderer: Send + Sync {
    /// Renders `text` as a `size` pixel wide symbol with a `margin` module
    /// quiet zone. `vector` selects SVG output over a PNG data URL.
    async fn render(
        &self,
        text: &str,
        size: u32,
        margin: u32,
        level: ErrorCorrection,
        vector: bool,
    ) -> Result<Rendered>;
}

pub type QrRendererBox = Box<dyn QrRenderer>;

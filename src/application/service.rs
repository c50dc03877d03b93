use crate::domain::epc::encode;
use crate::domain::payment::PaymentPayload;
use crate::domain::ports::QrRendererBox;
use crate::domain::render::{MARGIN, OutputFormat, RenderOptions, Rendered};
use crate::error::{GiroCodeError, Result};
use crate::infrastructure::qr::QrCodeRenderer;
use tracing::debug;

/// Produces scannable GiroCode symbols.
///
/// Holds no state besides the renderer, so a single instance can serve
/// concurrent callers.
pub struct GiroCodeService {
    renderer: QrRendererBox,
}

impl Default for GiroCodeService {
    fn default() -> Self {
        Self::new(Box::new(QrCodeRenderer::new()))
    }
}

impl GiroCodeService {
    /// Creates a new `GiroCodeService` instance.
    ///
    /// # Arguments
    ///
    /// * `renderer` - The QR symbol generator.
    pub fn new(renderer: QrRendererBox) -> Self {
        Self { renderer }
    }

    /// Encodes the payment and renders it in the requested format.
    ///
    /// Validation errors from encoding and errors from the renderer are
    /// returned unchanged.
    pub async fn render_image(
        &self,
        payload: &PaymentPayload,
        options: &RenderOptions,
    ) -> Result<String> {
        let text = encode(payload)?;

        let rendered = self
            .renderer
            .render(
                &text,
                options.size,
                MARGIN,
                options.error_correction_level,
                options.format.is_vector(),
            )
            .await?;

        debug!(
            format = ?options.format,
            size = options.size,
            level = %options.error_correction_level,
            "rendered GiroCode"
        );

        match (options.format, rendered) {
            (OutputFormat::DataUrl, Rendered::DataUrl(url)) => Ok(url),
            (OutputFormat::Base64, Rendered::DataUrl(url)) => Ok(strip_data_url(url)),
            (OutputFormat::Svg, Rendered::Svg(svg)) => Ok(svg),
            (format, _) => Err(GiroCodeError::render(format!(
                "renderer returned unexpected output for {format:?}"
            ))),
        }
    }
}

/// Drops the `data:<mime>;base64,` prefix.
fn strip_data_url(url: String) -> String {
    match url.split_once(',') {
        Some((_, data)) => data.to_string(),
        None => url,
    }
}

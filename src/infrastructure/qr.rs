use crate::domain::ports::QrRenderer;
use crate::domain::render::{ErrorCorrection, MAX_SIZE, Rendered};
use crate::error::{GiroCodeError, Result};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;

pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Renders QR symbols with the `qrcode` crate.
///
/// Symbol construction and rasterization are CPU bound and run on the
/// blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodeRenderer;

impl QrCodeRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QrRenderer for QrCodeRenderer {
    async fn render(
        &self,
        text: &str,
        size: u32,
        margin: u32,
        level: ErrorCorrection,
        vector: bool,
    ) -> Result<Rendered> {
        if size > MAX_SIZE {
            return Err(GiroCodeError::render(format!(
                "Size {size} exceeds maximum of {MAX_SIZE} pixels"
            )));
        }
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || {
            let code = build_code(&text, level)?;
            if vector {
                Ok(Rendered::Svg(to_svg(&code, size, margin)))
            } else {
                let png = to_png(&rasterize(&code, size, margin))?;
                Ok(Rendered::DataUrl(format!(
                    "{PNG_DATA_URL_PREFIX}{}",
                    STANDARD.encode(png)
                )))
            }
        })
        .await
        .map_err(|e| GiroCodeError::render(e.to_string()))?
    }
}

fn build_code(text: &str, level: ErrorCorrection) -> Result<QrCode> {
    let ec = match level {
        ErrorCorrection::Low => EcLevel::L,
        ErrorCorrection::Medium => EcLevel::M,
        ErrorCorrection::Quartile => EcLevel::Q,
        ErrorCorrection::High => EcLevel::H,
    };
    QrCode::with_error_correction_level(text.as_bytes(), ec)
        .map_err(|e| GiroCodeError::render(e.to_string()))
}

/// Draws the symbol into a `size` x `size` grayscale image, or one pixel per
/// module when `size` cannot fit the symbol.
fn rasterize(code: &QrCode, size: u32, margin: u32) -> GrayImage {
    let modules = code.width() as u32;
    let total = modules + 2 * margin;
    let width = size.max(total);
    let scale = f64::from(width) / f64::from(total);
    let colors = code.to_colors();

    GrayImage::from_fn(width, width, |x, y| {
        let mx = (f64::from(x) / scale) as u32;
        let my = (f64::from(y) / scale) as u32;
        let inside = (margin..margin + modules).contains(&mx) && (margin..margin + modules).contains(&my);
        let dark = inside
            && colors[((my - margin) * modules + (mx - margin)) as usize] == Color::Dark;
        Luma([if dark { 0 } else { 255 }])
    })
}

fn to_png(image: &GrayImage) -> Result<Vec<u8>> {
    let mut png_bytes = Vec::new();
    DynamicImage::ImageLuma8(image.clone())
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| GiroCodeError::render(e.to_string()))?;
    Ok(png_bytes)
}

fn to_svg(code: &QrCode, size: u32, margin: u32) -> String {
    let modules = code.width();
    let margin = margin as usize;
    let total = modules + 2 * margin;

    let mut path = String::new();
    for (i, color) in code.to_colors().iter().enumerate() {
        if *color == Color::Dark {
            let x = i % modules + margin;
            let y = i / modules + margin;
            path.push_str(&format!("M{x} {y}h1v1h-1z"));
        }
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {total} {total}" shape-rendering="crispEdges"><path fill="#ffffff" d="M0 0h{total}v{total}H0z"/><path fill="#000000" d="{path}"/></svg>"##
    )
}

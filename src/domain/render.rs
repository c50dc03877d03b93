use crate::error::GiroCodeError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SIZE: u32 = 200;
/// Largest accepted image width in pixels.
pub const MAX_SIZE: u32 = 4096;
/// Quiet zone around the symbol, in modules.
pub const MARGIN: u32 = 1;

/// QR error correction level.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

impl FromStr for ErrorCorrection {
    type Err = GiroCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "l" | "low" => Ok(Self::Low),
            "m" | "medium" => Ok(Self::Medium),
            "q" | "quartile" => Ok(Self::Quartile),
            "h" | "high" => Ok(Self::High),
            _ => Err(GiroCodeError::render(format!(
                "Unsupported error correction level: {s}"
            ))),
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Self::Low => "L",
            Self::Medium => "M",
            Self::Quartile => "Q",
            Self::High => "H",
        };
        f.write_str(level)
    }
}

/// How the rendered symbol is handed back to the caller.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Bare base64 PNG, without the `data:` prefix.
    Base64,
    /// PNG wrapped in a `data:image/png;base64,` URL.
    #[default]
    DataUrl,
    /// SVG markup.
    Svg,
}

impl FromStr for OutputFormat {
    type Err = GiroCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base64" => Ok(Self::Base64),
            "data-url" | "dataurl" => Ok(Self::DataUrl),
            "svg" => Ok(Self::Svg),
            _ => Err(GiroCodeError::render(format!("Unsupported output format: {s}"))),
        }
    }
}

impl OutputFormat {
    pub fn is_vector(self) -> bool {
        self == Self::Svg
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Image width in pixels.
    pub size: u32,
    pub error_correction_level: ErrorCorrection,
    pub format: OutputFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            error_correction_level: ErrorCorrection::default(),
            format: OutputFormat::default(),
        }
    }
}

/// Output of a [`QrRenderer`](super::ports::QrRenderer).
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Rendered {
    DataUrl(String),
    Svg(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.size, 200);
        assert_eq!(options.error_correction_level, ErrorCorrection::Medium);
        assert_eq!(options.format, OutputFormat::DataUrl);
    }

    #[test]
    fn test_error_correction_parsing() {
        assert_eq!("L".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::Low);
        assert_eq!("high".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::High);
        assert_eq!("q".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::Quartile);
        assert!(matches!(
            "X".parse::<ErrorCorrection>(),
            Err(GiroCodeError::Render(_))
        ));
    }

    #[test]
    fn test_error_correction_display_round_trips() {
        for level in [
            ErrorCorrection::Low,
            ErrorCorrection::Medium,
            ErrorCorrection::Quartile,
            ErrorCorrection::High,
        ] {
            assert_eq!(level.to_string().parse::<ErrorCorrection>().unwrap(), level);
        }
        assert_eq!(ErrorCorrection::Quartile.to_string(), "Q");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("data-url".parse::<OutputFormat>().unwrap(), OutputFormat::DataUrl);
        assert_eq!("BASE64".parse::<OutputFormat>().unwrap(), OutputFormat::Base64);
        assert!("gif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_options_deserialization() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"size": 300, "errorCorrectionLevel": "high", "format": "svg"}"#)
                .unwrap();
        assert_eq!(options.size, 300);
        assert_eq!(options.error_correction_level, ErrorCorrection::High);
        assert_eq!(options.format, OutputFormat::Svg);

        let partial: RenderOptions = serde_json::from_str(r#"{"format": "base64"}"#).unwrap();
        assert_eq!(partial.size, DEFAULT_SIZE);
        assert_eq!(partial.format, OutputFormat::Base64);
    }
}

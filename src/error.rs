use thiserror::Error;

#[derive(Error, Debug)]
pub enum GiroCodeError {
    #[error("{0}")]
    Validation(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GiroCodeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GiroCodeError>;

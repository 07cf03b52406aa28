use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    WalkError(#[from] ignore::Error),

    #[error("Invalid value for {field}: '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DemoError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV fetch failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Template error: {message}")]
    TemplateError { message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;

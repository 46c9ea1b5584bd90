use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request rejected by service: {0}")]
    Rejected(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response carried no data")]
    MissingData,

    #[error("Invalid category id: {0}")]
    InvalidId(String),

    #[error("Upload needs a file name with an extension: {0:?}")]
    InvalidFileName(String),
}

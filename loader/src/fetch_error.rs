use thiserror::Error;

#[derive(Debug, Error)]
/// A reason why an episode page could not be generated.
pub enum FetchError {
    #[error("Episode not found: {0}")]
    NotFound(String),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed episode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unparsable publish date: {0}")]
    InvalidDate(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

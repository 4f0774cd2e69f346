#[derive(Debug, thiserror::Error)]
pub enum GiantBombError {
    /// The service answered with a non-success `status_code`.
    #[error("Error code {code}: {message}")]
    Api { code: i64, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing field in response: {0}")]
    MissingField(String),

    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl GiantBombError {
    /// The service status code, if this is an API error.
    pub fn status_code(&self) -> Option<i64> {
        match self {
            GiantBombError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GiantBombError>;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiProviderError {
    #[error("AI API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    /// The reply could not be read as the analysis kind's output schema.
    #[error("Invalid Response: {0}")]
    InvalidResponse(String),
    #[error("{0}")]
    Unexpected(String),
}

impl AiProviderError {
    /// The underlying message without the category prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::ApiError(msg)
            | Self::NetworkError(msg)
            | Self::SerializationError(msg)
            | Self::AuthenticationError(msg)
            | Self::InvalidResponse(msg)
            | Self::Unexpected(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for AiProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::SerializationError(error.to_string())
        } else {
            Self::NetworkError(error.to_string())
        }
    }
}

impl From<serde_json::Error> for AiProviderError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidResponse(error.to_string())
    }
}

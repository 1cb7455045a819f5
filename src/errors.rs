use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Model provider rejected the API key: {0}. Check that the key is valid and has not expired")]
    AuthError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Model provider returned an error: {0}")]
    ProviderError(String),

    #[error("Failed to parse model provider response: {0}")]
    ParseError(String),

    #[error("Model provider returned an empty response")]
    EmptyResponse,

    #[error("All retry attempts failed")]
    RetriesExhausted,
}

/// Phrases in provider error bodies that mean the credential itself is the problem.
const AUTH_FAILURE_MARKERS: &[&str] = &[
    "invalid api key",
    "invalid_api_key",
    "api key not valid",
    "api key expired",
    "api_key_invalid",
    "incorrect api key",
    "invalid authentication",
    "unauthorized",
    "unauthenticated",
];

impl AssistError {
    /// Whether another attempt could plausibly succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::ProviderError(_) | Self::ParseError(_) | Self::EmptyResponse
        )
    }

    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthError(_))
    }

    /// Classify a failed provider call from its HTTP status (if any) and error text.
    #[must_use]
    pub fn from_provider_failure(status: Option<u16>, message: &str) -> Self {
        if matches!(status, Some(401 | 403)) || mentions_auth_failure(message) {
            return Self::AuthError(message.to_string());
        }

        match status {
            Some(code) => Self::ProviderError(format!("status {code}: {message}")),
            None => Self::HttpError(message.to_string()),
        }
    }
}

#[must_use]
pub fn mentions_auth_failure(message: &str) -> bool {
    let lowered = message.to_ascii_lowercase();
    AUTH_FAILURE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

impl From<reqwest::Error> for AssistError {
    fn from(error: reqwest::Error) -> Self {
        let status = error.status().map(|s| s.as_u16());
        Self::from_provider_failure(status, &error.to_string())
    }
}

impl From<serde_json::Error> for AssistError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError(error.to_string())
    }
}

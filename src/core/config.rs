use std::env;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::errors::AssistError;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Groq,
    Gemini,
}

impl Provider {
    #[must_use]
    pub const fn api_key_var(self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_KEY",
            Self::Gemini => "GEMINI_API_KEY",
        }
    }

    #[must_use]
    pub const fn model_var(self) -> &'static str {
        match self {
            Self::Groq => "GROQ_MODEL",
            Self::Gemini => "GEMINI_MODEL",
        }
    }

    #[must_use]
    pub const fn endpoint_var(self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_URL",
            Self::Gemini => "GEMINI_API_URL",
        }
    }

    #[must_use]
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Groq => "llama-3.1-8b-instant",
            Self::Gemini => "gemini-1.5-flash",
        }
    }

    #[must_use]
    pub const fn default_endpoint(self) -> &'static str {
        match self {
            Self::Groq => GROQ_API_URL,
            Self::Gemini => GEMINI_API_URL,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Groq => f.write_str("groq"),
            Self::Gemini => f.write_str("gemini"),
        }
    }
}

impl FromStr for Provider {
    type Err = AssistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "groq" => Ok(Self::Groq),
            "gemini" => Ok(Self::Gemini),
            other => Err(AssistError::ConfigError(format!(
                "unknown provider '{other}', expected 'groq' or 'gemini'"
            ))),
        }
    }
}

/// Where the provider API key comes from.
///
/// `Env` is looked up on every call, so rotating the variable takes effect
/// without rebuilding the client.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Static(String),
    Env(String),
}

impl Credential {
    /// # Errors
    ///
    /// Returns `ConfigError` when the key is missing or blank.
    pub fn resolve(&self) -> Result<String, AssistError> {
        let value = match self {
            Self::Static(key) => Some(key.clone()),
            Self::Env(var) => env::var(var).ok(),
        };

        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| match self {
                Self::Static(_) => AssistError::ConfigError("API key is not configured".to_string()),
                Self::Env(var) => {
                    AssistError::ConfigError(format!("API key is not configured; set {var}"))
                }
            })
    }
}

// Keys never reach the logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(_) => f.write_str("Static(***)"),
            Self::Env(var) => f.debug_tuple("Env").field(var).finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider: Provider,
    pub endpoint: String,
    pub model: String,
    pub credential: Credential,
}

impl ProviderConfig {
    /// Provider defaults with the given credential.
    #[must_use]
    pub fn new(provider: Provider, credential: Credential) -> Self {
        Self {
            provider,
            endpoint: provider.default_endpoint().to_string(),
            model: provider.default_model().to_string(),
            credential,
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if an endpoint override is not a valid URL.
    pub fn from_env(provider: Provider) -> Result<Self, AssistError> {
        let endpoint = match env::var(provider.endpoint_var()) {
            Ok(raw) if !raw.trim().is_empty() => parse_endpoint(provider, raw.trim())?,
            _ => provider.default_endpoint().to_string(),
        };

        let model = env::var(provider.model_var())
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| provider.default_model().to_string());

        Ok(Self {
            provider,
            endpoint,
            model,
            credential: Credential::Env(provider.api_key_var().to_string()),
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

fn parse_endpoint(provider: Provider, raw: &str) -> Result<String, AssistError> {
    let url = Url::parse(raw).map_err(|e| {
        AssistError::ConfigError(format!("{}: invalid URL '{raw}': {e}", provider.endpoint_var()))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AssistError::ConfigError(format!(
            "{}: unsupported scheme '{}'",
            provider.endpoint_var(),
            url.scheme()
        )));
    }

    Ok(url.into())
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub chat: ProviderConfig,
    pub resume: ProviderConfig,
}

impl AppConfig {
    /// Missing API keys are not an error here; they fail the first call instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown provider name or an invalid endpoint override.
    pub fn from_env() -> Result<Self, AssistError> {
        let chat_provider = provider_from_env("DEVSCOUT_CHAT_PROVIDER", Provider::Groq)?;
        let resume_provider = provider_from_env("DEVSCOUT_RESUME_PROVIDER", Provider::Gemini)?;

        Ok(Self {
            chat: ProviderConfig::from_env(chat_provider)?,
            resume: ProviderConfig::from_env(resume_provider)?,
        })
    }
}

fn provider_from_env(var: &str, default: Provider) -> Result<Provider, AssistError> {
    match env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => raw.parse::<Provider>().map_err(|e| match e {
            AssistError::ConfigError(msg) => AssistError::ConfigError(format!("{var}: {msg}")),
            other => other,
        }),
        _ => Ok(default),
    }
}

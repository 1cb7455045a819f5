//! Chat-completion client
//!
//! Encapsulates all model provider interactions: request construction,
//! transport, reply extraction and retries.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

use super::prompt_builder::{build_chat_messages, estimate_tokens};
use super::retry::RetryPolicy;
use crate::core::config::ProviderConfig;
use crate::core::models::{ChatMessage, ChatRequest};
use crate::errors::AssistError;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Sends one chat-completion request and returns the raw reply text.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn complete(
        &self,
        endpoint: &str,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<String, AssistError>;
}

/// OpenAI-compatible HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
        }
    }
}

impl HttpTransport {
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn complete(
        &self,
        endpoint: &str,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<String, AssistError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {api_key}")
            .parse::<reqwest::header::HeaderValue>()
            .map_err(|e| AssistError::ConfigError(format!("Invalid Authorization header: {e}")))?;
        headers.insert(reqwest::header::AUTHORIZATION, auth_value);

        let response = self
            .client
            .post(endpoint)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AssistError::HttpError(format!("Failed to read response body (status {status}): {e}"))
        })?;

        if !status.is_success() {
            let message = extract_error_message(&body).unwrap_or(body);
            return Err(AssistError::from_provider_failure(
                Some(status.as_u16()),
                &message,
            ));
        }

        let json: Value = serde_json::from_str(&body)?;
        extract_reply_text(&json)
    }
}

/// `choices[0].message.content` of a chat-completion reply.
///
/// # Errors
///
/// A reply without text is `EmptyResponse`; an in-band `error` object is
/// classified like a failed status.
pub fn extract_reply_text(json: &Value) -> Result<String, AssistError> {
    if let Some(message) = json
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        return Err(AssistError::from_provider_failure(None, message));
    }

    json.get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(AssistError::EmptyResponse)
}

/// Pull `error.message` out of a provider error body. Gemini wraps the
/// payload in a one-element array.
fn extract_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    let error = match &json {
        Value::Array(items) => items.first()?.get("error")?,
        other => other.get("error")?,
    };

    error
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Retrying chat sender bound to one provider and one system prompt.
pub struct ChatSender<T = HttpTransport> {
    provider: ProviderConfig,
    system_prompt: String,
    transport: T,
    retry: RetryPolicy,
    temperature: f32,
    max_tokens: u32,
}

impl ChatSender<HttpTransport> {
    #[must_use]
    pub fn new(provider: ProviderConfig, system_prompt: impl Into<String>) -> Self {
        Self::with_transport(provider, system_prompt, HttpTransport::default())
    }
}

impl<T: ChatTransport> ChatSender<T> {
    #[must_use]
    pub fn with_transport(
        provider: ProviderConfig,
        system_prompt: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            provider,
            system_prompt: system_prompt.into(),
            transport,
            retry: RetryPolicy::default(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub const fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn build_request(&self, message: &str, history: &[ChatMessage]) -> ChatRequest {
        ChatRequest {
            model: self.provider.model.clone(),
            messages: build_chat_messages(&self.system_prompt, history, message),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Send `message` with the recent part of `history` as context.
    ///
    /// # Errors
    ///
    /// `ConfigError` without any network call if the API key is missing,
    /// `AuthError` after a single attempt if the provider rejects the key,
    /// otherwise the last transient error once the retry policy is exhausted.
    pub async fn send(&self, message: &str, history: &[ChatMessage]) -> Result<String, AssistError> {
        let request_id = Uuid::new_v4();
        let span = info_span!(
            "chat_send",
            %request_id,
            provider = %self.provider.provider,
            model = %self.provider.model
        );

        async {
            let api_key = self.provider.credential.resolve()?;
            let request = self.build_request(message, history);

            #[cfg(feature = "debug-logs")]
            info!("Chat request:\n{:?}", request);

            let estimated_input_tokens = request
                .messages
                .iter()
                .map(|m| estimate_tokens(&m.content))
                .sum::<usize>();
            info!(
                messages = request.messages.len(),
                estimated_input_tokens, "Sending chat request"
            );

            let request = &request;
            let api_key = api_key.as_str();
            let reply = self
                .retry
                .run(|attempt| async move {
                    debug!(attempt, "Calling model provider");
                    let text = self
                        .transport
                        .complete(&self.provider.endpoint, api_key, request)
                        .await?;
                    if text.trim().is_empty() {
                        return Err(AssistError::EmptyResponse);
                    }
                    Ok(text)
                })
                .await?;

            info!(reply_chars = reply.chars().count(), "Chat request succeeded");
            Ok::<_, AssistError>(reply)
        }
        .instrument(span)
        .await
    }
}

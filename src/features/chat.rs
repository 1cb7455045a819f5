use crate::ai::client::{ChatSender, ChatTransport, HttpTransport};
use crate::ai::prompt_builder::{ASSISTANT_SYSTEM_PROMPT, sanitize_message};
use crate::core::config::ProviderConfig;
use crate::core::models::ChatMessage;
use crate::errors::AssistError;

/// General project-discovery assistant.
pub struct ChatAssistant<T = HttpTransport> {
    sender: ChatSender<T>,
}

impl ChatAssistant<HttpTransport> {
    #[must_use]
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            sender: ChatSender::new(provider, ASSISTANT_SYSTEM_PROMPT),
        }
    }
}

impl<T: ChatTransport> ChatAssistant<T> {
    /// Use a preconfigured sender. Its system prompt is used as-is.
    #[must_use]
    pub const fn with_sender(sender: ChatSender<T>) -> Self {
        Self { sender }
    }

    #[must_use]
    pub const fn sender(&self) -> &ChatSender<T> {
        &self.sender
    }

    /// # Errors
    ///
    /// Propagates the sender's error unchanged.
    pub async fn send(&self, message: &str, history: &[ChatMessage]) -> Result<String, AssistError> {
        let message = sanitize_message(message);
        self.sender.send(&message, history).await
    }
}

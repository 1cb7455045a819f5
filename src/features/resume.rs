use tracing::info;

use crate::ai::client::{ChatSender, ChatTransport, HttpTransport};
use crate::ai::prompt_builder::{RESUME_SYSTEM_PROMPT, build_resume_prompt};
use crate::core::config::ProviderConfig;
use crate::core::models::{ProjectRecord, ResumeContent};
use crate::errors::AssistError;
use crate::resume_parser::parse_resume_response;

/// Replies carry a full README, so allow more room than a chat turn.
pub const RESUME_MAX_TOKENS: u32 = 2048;
pub const RESUME_TEMPERATURE: f32 = 0.7;

/// Generates resume bullets, summaries and a README for a project.
pub struct ResumeGenerator<T = HttpTransport> {
    sender: ChatSender<T>,
}

impl ResumeGenerator<HttpTransport> {
    #[must_use]
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            sender: ChatSender::new(provider, RESUME_SYSTEM_PROMPT)
                .with_sampling(RESUME_TEMPERATURE, RESUME_MAX_TOKENS),
        }
    }
}

impl<T: ChatTransport> ResumeGenerator<T> {
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
    /// Fails only if the model call fails. An unusable reply is not an error:
    /// missing sections are filled from `project`.
    pub async fn generate(&self, project: &ProjectRecord) -> Result<ResumeContent, AssistError> {
        let prompt = build_resume_prompt(project);
        let reply = self.sender.send(&prompt, &[]).await?;
        let content = parse_resume_response(&reply, project);

        info!(
            title = %project.title,
            bullet_points = content.bullet_points.len(),
            "Generated resume content"
        );
        Ok(content)
    }
}

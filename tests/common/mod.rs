#![allow(dead_code)]

use async_trait::async_trait;
use devscout::ai::ChatTransport;
use devscout::core::config::{Credential, Provider, ProviderConfig};
use devscout::core::models::ChatRequest;
use devscout::errors::AssistError;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// One recorded transport call.
#[derive(Debug, Clone)]
pub struct Call {
    pub at: Instant,
    pub endpoint: String,
    pub api_key: String,
    pub request: ChatRequest,
}

/// Transport that replays scripted replies and records every call.
///
/// Clones share state, so a test can keep a handle after giving one to a sender.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Result<String, AssistError>>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Result<String, AssistError>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatTransport for ScriptedTransport {
    async fn complete(
        &self,
        endpoint: &str,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<String, AssistError> {
        self.calls.lock().unwrap().push(Call {
            at: Instant::now(),
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            request: request.clone(),
        });

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AssistError::HttpError("no scripted reply left".to_string())))
    }
}

pub fn groq_config() -> ProviderConfig {
    ProviderConfig::new(Provider::Groq, Credential::Static("test-key".to_string()))
}

//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;
pub mod retry;

// Re-export main types for convenience
pub use client::{ChatSender, ChatTransport, HttpTransport};
pub use prompt_builder::estimate_tokens;
pub use retry::RetryPolicy;

//! User-facing AI features built on the chat sender

pub mod chat;
pub mod resume;

pub use chat::ChatAssistant;
pub use resume::ResumeGenerator;

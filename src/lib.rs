//! devscout - AI helpers for a project-discovery dashboard.
//!
//! This crate implements the two model-backed features of the dashboard:
//! 1. A chat assistant that answers project questions with recent conversation context
//! 2. A resume generator that turns a project into resume bullets, summaries and a README
//!
//! # Architecture
//!
//! The system uses:
//! - An OpenAI-compatible chat-completion API (Groq or Gemini) over reqwest
//! - tokio-retry for linear-backoff retries of transient failures
//! - A single-pass section parser that degrades to project-derived defaults
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use devscout::core::config::AppConfig;
//! use devscout::core::models::ProjectRecord;
//! use devscout::features::ResumeGenerator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     devscout::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let generator = ResumeGenerator::new(config.resume);
//!
//!     let project = ProjectRecord {
//!         title: "Habit Tracker".to_string(),
//!         description: "Track daily habits with streaks and reminders".to_string(),
//!         tech_stack: vec!["React".to_string(), "Firebase".to_string()],
//!         domain: "productivity".to_string(),
//!         complexity: "intermediate".to_string(),
//!     };
//!
//!     let content = generator.generate(&project).await?;
//!     for point in &content.bullet_points {
//!         println!("- {point}");
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod features;
pub mod resume_parser;

pub use errors::AssistError;
pub use features::{ChatAssistant, ResumeGenerator};

/// Configure structured JSON logging.
///
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
/// Calling this more than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// devscout::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

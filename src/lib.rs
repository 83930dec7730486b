//! # replykit
//!
//! Small helpers shared by tools that ask a language model for text.
//!
//! ## Features
//!
//! - **Directory reset**: make sure an output directory exists and is empty, with every failure reported instead of raised
//! - **Completion request**: one-shot chat completion behind the [`LlmClient`] trait, with Ollama and OpenAI-compatible backends
//! - **Response sanitizer**: strip markdown emphasis, headings, and bracket/paren spans from a reply
//!
//! ## Example
//!
//! ```rust,no_run
//! use replykit::{call_model, clean_dir, clean_response, llm::OllamaClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! replykit::logging::init();
//!
//! let reset = clean_dir("./output");
//! if !reset.is_clean() {
//!     eprintln!("{} entries left in ./output", reset.failures().len());
//! }
//!
//! let llm = OllamaClient::new();
//! let raw = call_model(&llm, "Summarise the plot of Hamlet.", "llama3.2:latest").await?;
//! println!("{}", clean_response(&raw));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod llm;
pub mod logging;
pub mod sanitize;
pub mod workspace;

// Re-export main types for convenience
pub use config::{ProviderConfig, ProviderKind};
pub use llm::{call_model, ChatMessage, LlmClient, ProviderError, Role};
pub use sanitize::clean_response;
pub use workspace::{clean_dir, CleanError, DirReset, RemovalFailure};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

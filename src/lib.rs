//! # Personal Paraphrase
//!
//! Persona-driven editorial rewriter for AI agents.
//!
//! Given arbitrary input text and a named persona, the pipeline gathers the
//! persona's descriptor files, samples its recent conversational history,
//! composes a persona-conditioned prompt, and delegates the actual rewrite
//! to an external generation backend. Every degraded input — missing
//! descriptors, missing history, an unreachable backend — collapses to a
//! best-effort result or a safe passthrough of the original text; only a
//! configuration problem aborts, and it does so before any I/O.
//!
//! ```no_run
//! use personal_paraphrase::{Config, Paraphraser};
//!
//! # fn main() -> Result<(), personal_paraphrase::errors::ConfigurationError> {
//! let config = Config::from_file("config.json")?;
//! let paraphraser = Paraphraser::new(&config)?;
//! let rewritten = paraphraser.paraphrase("Hello world", "Aria", Some("wry"), None);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod errors;
pub mod history;
pub mod paraphraser;
pub mod persona;
pub mod prompt;

// Re-exports
pub use backend::{GenerationBackend, HttpGenerationBackend};
pub use config::Config;
pub use history::{HistorySampler, HistoryWindow};
pub use paraphraser::Paraphraser;
pub use persona::{PersonaFileResolver, PersonaProfile};
pub use prompt::{compose, PromptRequest, RenderedPrompt};

/// Library version.
pub const VERSION: &str = "1.0.0";

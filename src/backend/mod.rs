//! Generation backend abstraction.
//!
//! The pipeline composes prompts; an external service does the rewriting.
//! [`GenerationBackend`] is the seam between them: one async call plus a
//! blocking wrapper for synchronous callers. Implementations own their own
//! timeout; the orchestrator treats every failure the same way, so a
//! timeout is not distinguished from any other backend error.

pub mod http;

use async_trait::async_trait;

use crate::prompt::RenderedPrompt;

pub use http::HttpGenerationBackend;

/// A text-generation service that can rewrite a rendered prompt.
///
/// `Ok(None)` means the backend answered but produced nothing usable (an
/// empty or absent reply). Errors are reported through `anyhow::Error` so
/// implementations can surface their own typed failures; callers absorb
/// them and fall back to the original text.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Human-readable name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;

    /// Send the prompt to the backend and return its reply, if any.
    async fn agenerate(&self, prompt: &RenderedPrompt) -> Result<Option<String>, anyhow::Error>;

    /// Blocking variant of [`agenerate`](Self::agenerate).
    ///
    /// Spins up a tokio runtime for the call; not for use inside an async
    /// context.
    fn generate(&self, prompt: &RenderedPrompt) -> Result<Option<String>, anyhow::Error> {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.agenerate(prompt))
    }
}

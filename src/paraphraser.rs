//! Rewrite orchestration: the end-to-end pipeline and its fallback policy.
//!
//! One call sequences resolve → load → sample → compose → generate. The
//! central failure-handling contract lives here: the caller always gets
//! either a genuinely rewritten string or the original input back, never an
//! error. Only a configuration problem — detected at construction, before
//! any I/O — can abort.

use crate::backend::{GenerationBackend, HttpGenerationBackend};
use crate::config::Config;
use crate::errors::ConfigurationError;
use crate::history::HistorySampler;
use crate::persona::{load_profile, PersonaFileResolver};
use crate::prompt::{compose, PromptRequest, RenderedPrompt};

/// Persona-driven rewriter.
///
/// Owns the resolver, the history sampler, and the generation backend;
/// holds no mutable state, so one instance can serve concurrent calls.
pub struct Paraphraser {
    resolver: PersonaFileResolver,
    sampler: HistorySampler,
    backend: Box<dyn GenerationBackend>,
}

impl std::fmt::Debug for Paraphraser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paraphraser")
            .field("resolver", &self.resolver)
            .field("sampler", &self.sampler)
            .field("backend", &self.backend.backend_name())
            .finish()
    }
}

impl Paraphraser {
    /// Build a paraphraser with the HTTP backend from the `llm` config
    /// section.
    ///
    /// Validates the configuration up front; a missing section aborts here,
    /// before any file or network I/O.
    pub fn new(config: &Config) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let backend = Box::new(HttpGenerationBackend::new(config.llm()?));
        Self::with_backend(config, backend)
    }

    /// Build a paraphraser with an injected backend.
    pub fn with_backend(
        config: &Config,
        backend: Box<dyn GenerationBackend>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            resolver: PersonaFileResolver::new(config.persona_resolution()?.clone()),
            sampler: HistorySampler::new(config.chat_history()?.clone()),
            backend,
        })
    }

    /// Rewrite `text` in the voice of `persona_name`, blocking until done.
    ///
    /// Returns the backend's reply when it is non-empty and differs from
    /// `text`; otherwise returns `text` unchanged.
    pub fn paraphrase(
        &self,
        text: &str,
        persona_name: &str,
        tone: Option<&str>,
        style: Option<&str>,
    ) -> String {
        let prompt = self.build_prompt(text, persona_name, tone, style);
        let outcome = self.backend.generate(&prompt);
        self.resolve_outcome(text, outcome)
    }

    /// Async variant of [`paraphrase`](Self::paraphrase).
    pub async fn aparaphrase(
        &self,
        text: &str,
        persona_name: &str,
        tone: Option<&str>,
        style: Option<&str>,
    ) -> String {
        let prompt = self.build_prompt(text, persona_name, tone, style);
        let outcome = self.backend.agenerate(&prompt).await;
        self.resolve_outcome(text, outcome)
    }

    fn build_prompt(
        &self,
        text: &str,
        persona_name: &str,
        tone: Option<&str>,
        style: Option<&str>,
    ) -> RenderedPrompt {
        log::debug!("Paraphrasing {} byte(s) as '{persona_name}'", text.len());
        let files = self.resolver.resolve(persona_name);
        let persona = load_profile(persona_name, &files);
        let history = self.sampler.sample(persona_name);
        compose(&PromptRequest {
            persona,
            history,
            tone: tone.map(str::to_string),
            style: style.map(str::to_string),
            original_text: text.to_string(),
        })
    }

    fn resolve_outcome(
        &self,
        text: &str,
        outcome: Result<Option<String>, anyhow::Error>,
    ) -> String {
        match outcome {
            Ok(Some(reply)) if reply != text => reply,
            Ok(Some(_)) => {
                log::debug!(
                    "{} returned the input unchanged; keeping original",
                    self.backend.backend_name()
                );
                text.to_string()
            }
            Ok(None) => {
                log::debug!(
                    "{} returned an empty reply; keeping original",
                    self.backend.backend_name()
                );
                text.to_string()
            }
            Err(e) => {
                log::warn!(
                    "{} call failed, falling back to original text: {e}",
                    self.backend.backend_name()
                );
                text.to_string()
            }
        }
    }
}

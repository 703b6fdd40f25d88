//! Prompt composition: persona profile + history + tone/style + input text
//! rendered into one self-contained instruction string.
//!
//! Composition is pure and deterministic — identical inputs produce a
//! byte-identical [`RenderedPrompt`]. There is no branching on content
//! beyond substitution: empty description or history sections simply render
//! blank.

use serde::{Deserialize, Serialize};

use crate::history::HistoryWindow;
use crate::persona::PersonaProfile;

/// Tone used when the caller does not supply one.
pub const DEFAULT_TONE: &str = "neutral";

/// Style used when the caller does not supply one.
pub const DEFAULT_STYLE: &str = "default";

/// Persona label used when the profile name is blank.
pub const FALLBACK_PERSONA_LABEL: &str = "the persona";

/// Everything composition needs for one rewrite request. Immutable once
/// constructed.
#[derive(Debug, Clone, Serialize)]
pub struct PromptRequest {
    /// The merged persona profile.
    pub persona: PersonaProfile,
    /// Recent voice exemplars, most-recent-last.
    pub history: HistoryWindow,
    /// Requested tone; defaults to [`DEFAULT_TONE`] when unset.
    pub tone: Option<String>,
    /// Requested style; defaults to [`DEFAULT_STYLE`] when unset.
    pub style: Option<String>,
    /// The text to be rewritten, embedded verbatim.
    pub original_text: String,
}

/// The final instruction text sent to the generation backend.
///
/// Fully self-contained: no external references remain once rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPrompt {
    text: String,
}

impl RenderedPrompt {
    /// The rendered text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the prompt, yielding the rendered text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for RenderedPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render the fixed rewrite template for `request`.
///
/// The original text is embedded between literal quote characters; quote
/// characters inside it are not escaped.
pub fn compose(request: &PromptRequest) -> RenderedPrompt {
    let name = request.persona.name.trim();
    let label = if name.is_empty() {
        FALLBACK_PERSONA_LABEL
    } else {
        name
    };
    let description = request.persona.description.trim();
    let history = request.history.join("\n");
    let history = history.trim();
    let tone = request.tone.as_deref().unwrap_or(DEFAULT_TONE);
    let style = request.style.as_deref().unwrap_or(DEFAULT_STYLE);

    let text = format!(
        "Paraphrase the following phrase in the voice of {label}.\n\
         Persona description:\n\
         {description}\n\
         \n\
         Recent voice examples:\n\
         {history}\n\
         \n\
         Tone: {tone}, Style: {style}\n\
         \n\
         Original: \"{original}\"\n\
         Paraphrased:",
        original = request.original_text,
    );

    RenderedPrompt { text }
}

//! Typed configuration for the paraphrase pipeline.
//!
//! The configuration object is constructed once at startup — from a file,
//! a JSON string, or literally in code — and threaded into each component
//! constructor. Nothing in the pipeline re-reads configuration from disk
//! mid-request.
//!
//! Top-level sections are optional at the decode level so that presence is
//! checked explicitly: [`Config::validate`] and the section accessors report
//! a [`ConfigurationError`] for a missing section before any file I/O is
//! attempted. Keys *inside* a present section are required and fail at
//! decode time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

/// Persona descriptor resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaResolutionConfig {
    /// Directory holding persona descriptor files.
    pub base_path: PathBuf,
    /// Filename patterns tried in order; the extension of each pattern is
    /// applied to the persona name (e.g. `*.json` resolves `<name>.json`).
    pub file_patterns: Vec<String>,
}

/// Chat history sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryConfig {
    /// Directory holding per-persona history logs.
    pub path: PathBuf,
    /// Log filename pattern containing the `{persona}` placeholder.
    pub filename_pattern: String,
    /// Maximum number of trailing log lines injected into a prompt.
    pub scan_limit: usize,
}

/// Generation backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// HTTP endpoint of the generation service.
    pub endpoint: String,
    /// Model identifier passed through to the backend.
    pub model: String,
    /// Sampling temperature passed through to the backend.
    pub temperature: f64,
}

/// Full pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub persona_resolution: Option<PersonaResolutionConfig>,
    #[serde(default)]
    pub chat_history: Option<ChatHistoryConfig>,
    #[serde(default)]
    pub llm: Option<LlmConfig>,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigurationError::Unreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::from_json_str(&content)
    }

    /// Decode configuration from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(content).map_err(|e| ConfigurationError::Invalid {
            message: e.to_string(),
        })
    }

    /// Check that every required section is present.
    ///
    /// Called by the orchestrator constructor so that configuration problems
    /// abort before the pipeline touches the filesystem or the network.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.persona_resolution()?;
        self.chat_history()?;
        self.llm()?;
        Ok(())
    }

    /// The persona resolution section, or an error if absent.
    pub fn persona_resolution(&self) -> Result<&PersonaResolutionConfig, ConfigurationError> {
        self.persona_resolution
            .as_ref()
            .ok_or_else(|| missing("persona_resolution"))
    }

    /// The chat history section, or an error if absent.
    pub fn chat_history(&self) -> Result<&ChatHistoryConfig, ConfigurationError> {
        self.chat_history
            .as_ref()
            .ok_or_else(|| missing("chat_history"))
    }

    /// The generation backend section, or an error if absent.
    pub fn llm(&self) -> Result<&LlmConfig, ConfigurationError> {
        self.llm.as_ref().ok_or_else(|| missing("llm"))
    }
}

fn missing(section: &str) -> ConfigurationError {
    ConfigurationError::MissingSection {
        section: section.to_string(),
    }
}

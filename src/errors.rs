//! Error types for the paraphrase pipeline.
//!
//! Only [`ConfigurationError`] is allowed to abort a rewrite request, and it
//! is raised before any file I/O happens. Every other error here is absorbed
//! at the component boundary that detects it: a bad descriptor file is
//! skipped, a missing history log becomes an empty window, and a backend
//! failure falls back to the original text.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A required top-level section is absent.
    #[error("Missing required config section: {section}")]
    MissingSection { section: String },

    /// The config file could not be read.
    #[error("Failed to read config file {path}: {message}")]
    Unreadable { path: String, message: String },

    /// The config content could not be decoded (bad JSON, missing keys,
    /// wrong value types).
    #[error("Invalid config: {message}")]
    Invalid { message: String },
}

/// Per-file failure while loading a persona descriptor.
///
/// Recovered locally by the profile loader: the file is skipped and loading
/// continues with the remaining descriptors.
#[derive(Debug, Error)]
pub enum FileAccessError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but could not be parsed as a structured record.
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// A persona's history log exists but could not be read.
///
/// Recovered locally by the history sampler, which degrades to an empty
/// window. A log that simply does not exist is a normal state and does not
/// produce this error.
#[derive(Debug, Error)]
#[error("Chat history for '{persona}' unavailable at {}: {message}", .path.display())]
pub struct HistoryUnavailable {
    pub persona: String,
    pub path: PathBuf,
    pub message: String,
}

/// Failure talking to the generation backend.
///
/// Recovered by the orchestrator, which returns the original text.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure, including timeouts.
    #[error("Backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("Backend returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The backend answered but the body could not be decoded.
    #[error("Malformed backend response: {message}")]
    Malformed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::MissingSection {
            section: "llm".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required config section: llm");
    }

    #[test]
    fn test_file_access_error_includes_path() {
        let err = FileAccessError::Parse {
            path: PathBuf::from("/personas/Aria.json"),
            message: "expected an object".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("/personas/Aria.json"));
        assert!(rendered.contains("expected an object"));
    }

    #[test]
    fn test_history_unavailable_display() {
        let err = HistoryUnavailable {
            persona: "Aria".to_string(),
            path: PathBuf::from("/history/Aria_history.log"),
            message: "permission denied".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("Aria"));
        assert!(rendered.contains("permission denied"));
    }
}

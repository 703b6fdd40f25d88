//! Bounded tail sampling of a persona's chat history log.
//!
//! Recent lines of a persona's prior output are the most relevant voice
//! exemplars, so bounding is a tail window: the last `scan_limit` lines in
//! original order, oldest of the window first. Absence of history is a
//! normal state, not an error.

use std::path::PathBuf;

use crate::config::ChatHistoryConfig;
use crate::errors::HistoryUnavailable;

/// Placeholder token substituted with the persona name in the log filename
/// pattern.
pub const PERSONA_PLACEHOLDER: &str = "{persona}";

/// A bounded, read-only window over a persona's history log,
/// most-recent-last.
pub type HistoryWindow = Vec<String>;

/// Samples the trailing window of a persona's history log.
#[derive(Debug, Clone)]
pub struct HistorySampler {
    config: ChatHistoryConfig,
}

impl HistorySampler {
    /// Create a sampler over the given history settings.
    pub fn new(config: ChatHistoryConfig) -> Self {
        Self { config }
    }

    /// The log path for `persona_name`.
    pub fn log_path(&self, persona_name: &str) -> PathBuf {
        let filename = self
            .config
            .filename_pattern
            .replace(PERSONA_PLACEHOLDER, persona_name);
        self.config.path.join(filename)
    }

    /// Return the last `scan_limit` lines of the persona's log, in original
    /// order.
    ///
    /// A missing log yields an empty window. A log that exists but cannot
    /// be read is logged and also degrades to an empty window; no error
    /// propagates.
    pub fn sample(&self, persona_name: &str) -> HistoryWindow {
        match self.read_window(persona_name) {
            Ok(window) => window,
            Err(e) => {
                log::warn!("{e}");
                Vec::new()
            }
        }
    }

    fn read_window(&self, persona_name: &str) -> Result<HistoryWindow, HistoryUnavailable> {
        let path = self.log_path(persona_name);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| HistoryUnavailable {
            persona: persona_name.to_string(),
            path: path.clone(),
            message: e.to_string(),
        })?;

        let lines: Vec<&str> = content.lines().collect();
        let start = lines.len().saturating_sub(self.config.scan_limit);
        Ok(lines[start..].iter().map(|line| line.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampler(dir: &std::path::Path, limit: usize) -> HistorySampler {
        HistorySampler::new(ChatHistoryConfig {
            path: dir.to_path_buf(),
            filename_pattern: "{persona}_history.log".to_string(),
            scan_limit: limit,
        })
    }

    fn write_log(dir: &std::path::Path, persona: &str, lines: usize) {
        let content: String = (1..=lines).map(|i| format!("line {i}\n")).collect();
        std::fs::write(dir.join(format!("{persona}_history.log")), content).unwrap();
    }

    #[test]
    fn test_sample_returns_tail_window_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "Aria", 50);

        let window = sampler(dir.path(), 5).sample("Aria");
        assert_eq!(
            window,
            vec!["line 46", "line 47", "line 48", "line 49", "line 50"]
        );
    }

    #[test]
    fn test_sample_shorter_log_returns_all_lines() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "Aria", 3);

        let window = sampler(dir.path(), 10).sample("Aria");
        assert_eq!(window, vec!["line 1", "line 2", "line 3"]);
    }

    #[test]
    fn test_sample_limit_zero_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "Aria", 3);

        assert!(sampler(dir.path(), 0).sample("Aria").is_empty());
    }

    #[test]
    fn test_sample_missing_log_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(sampler(dir.path(), 5).sample("Nobody").is_empty());
    }

    #[test]
    fn test_log_path_substitutes_persona_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = sampler(dir.path(), 5).log_path("Aria");
        assert_eq!(path, dir.path().join("Aria_history.log"));
    }

    #[test]
    fn test_sample_exact_limit_matches_log_length() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "Aria", 5);

        let window = sampler(dir.path(), 5).sample("Aria");
        assert_eq!(window.len(), 5);
        assert_eq!(window[0], "line 1");
        assert_eq!(window[4], "line 5");
    }
}

//! Maps a persona name to the set of descriptor files that feed its profile.

use std::path::PathBuf;

use crate::config::PersonaResolutionConfig;

/// Resolves persona names to existing descriptor file paths using the
/// configured search patterns.
#[derive(Debug, Clone)]
pub struct PersonaFileResolver {
    config: PersonaResolutionConfig,
}

impl PersonaFileResolver {
    /// Create a resolver over the given resolution settings.
    pub fn new(config: PersonaResolutionConfig) -> Self {
        Self { config }
    }

    /// Resolve all descriptor files for `persona_name`.
    ///
    /// For each configured pattern, the candidate
    /// `<base_path>/<persona_name>.<ext>` is built — `<ext>` being the text
    /// after the pattern's last `.` — and expanded with filesystem glob
    /// semantics, so wildcards in the persona name or extension are honored.
    /// Matches are appended in pattern order, then match order. A pattern
    /// with no matches contributes nothing; that is not an error. A path
    /// matched by more than one pattern appears once per match.
    pub fn resolve(&self, persona_name: &str) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for pattern in &self.config.file_patterns {
            let extension = pattern.rsplit('.').next().unwrap_or(pattern.as_str());
            let candidate = self
                .config
                .base_path
                .join(format!("{persona_name}.{extension}"));
            let candidate = candidate.to_string_lossy();

            match glob::glob(&candidate) {
                Ok(matches) => {
                    for entry in matches {
                        match entry {
                            Ok(path) => files.push(path),
                            Err(e) => {
                                log::warn!("Skipping unreadable glob match for '{candidate}': {e}")
                            }
                        }
                    }
                }
                Err(e) => log::warn!("Invalid descriptor pattern '{candidate}': {e}"),
            }
        }

        log::debug!(
            "Resolved {} descriptor file(s) for persona '{}'",
            files.len(),
            persona_name
        );
        files
    }
}

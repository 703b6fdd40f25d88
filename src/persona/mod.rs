//! Persona descriptor resolution and profile loading.
//!
//! A persona is a named identity — free-text description plus structured
//! fields — assembled fresh for each rewrite request from descriptor files
//! on disk. The resolver maps a persona name to candidate files, each file
//! becomes a [`DescriptorSource`], and the loader folds their contributions
//! into a single [`PersonaProfile`].

pub mod loader;
pub mod resolver;
pub mod source;

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};

// Re-exports
pub use loader::load_profile;
pub use resolver::PersonaFileResolver;
pub use source::{Contribution, DescriptorSource};

/// A persona's merged profile for one rewrite request.
///
/// Built fresh per invocation and never persisted. `source_paths` lists
/// exactly the files whose content made it into `description` or
/// `structured_fields`, in discovery order, so every piece of profile
/// content is traceable to the file it came from.
#[derive(Debug, Clone, Serialize)]
pub struct PersonaProfile {
    /// The persona name the profile was requested for. Always populated,
    /// even when no descriptor file could be loaded.
    pub name: String,
    /// Files actually merged, in discovery order.
    pub source_paths: Vec<PathBuf>,
    /// Accumulated free-text description, newline-terminated per source file.
    pub description: String,
    /// Top-level fields merged from structured descriptors; on key
    /// collision the last file wins.
    pub structured_fields: Map<String, Value>,
}

impl PersonaProfile {
    /// An empty profile carrying only the persona name.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_paths: Vec::new(),
            description: String::new(),
            structured_fields: Map::new(),
        }
    }
}

//! Folds descriptor contributions into a [`PersonaProfile`].

use std::path::PathBuf;

use crate::persona::source::{Contribution, DescriptorSource};
use crate::persona::PersonaProfile;

/// Load a persona profile from the resolved descriptor files.
///
/// Files are merged in resolver order: structured fields overwrite earlier
/// values on key collision (last file wins), and text content is appended to
/// the description with a trailing newline per file. A file that fails to
/// read or parse is logged and skipped — one bad descriptor never aborts
/// profile construction. The returned profile always carries the persona
/// name, even when every file failed.
pub fn load_profile(persona_name: &str, files: &[PathBuf]) -> PersonaProfile {
    let mut profile = PersonaProfile::empty(persona_name);

    let contributions = files
        .iter()
        .map(|path| DescriptorSource::classify(path.clone()))
        .map(|source| (source.path().to_path_buf(), source.load()));

    for (path, result) in contributions {
        match result {
            Ok(Contribution::Fields(fields)) => {
                for (key, value) in fields {
                    profile.structured_fields.insert(key, value);
                }
                profile.source_paths.push(path);
            }
            Ok(Contribution::Text(text)) => {
                profile.description.push_str(&text);
                profile.description.push('\n');
                profile.source_paths.push(path);
            }
            Err(e) => {
                log::warn!("Skipping persona file: {e}");
            }
        }
    }

    profile
}

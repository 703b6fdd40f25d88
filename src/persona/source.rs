//! Descriptor source variants and their typed contributions.
//!
//! Every resolved descriptor file is classified by extension into either a
//! structured source (merges top-level fields) or a text source (appends
//! free text). Loading yields a per-file `Result` so that one bad file
//! never aborts profile construction.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::errors::FileAccessError;

/// Extensions treated as structured records.
const STRUCTURED_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// A single persona descriptor file, classified by format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorSource {
    /// A structured record whose top-level keys merge into the profile.
    Structured(PathBuf),
    /// Free text appended to the profile description.
    Text(PathBuf),
}

/// What a descriptor source contributes to a profile.
#[derive(Debug, Clone, PartialEq)]
pub enum Contribution {
    /// A patch of top-level fields from a structured record.
    Fields(Map<String, Value>),
    /// Raw text content.
    Text(String),
}

impl DescriptorSource {
    /// Classify a file by its extension.
    pub fn classify(path: PathBuf) -> Self {
        let structured = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                STRUCTURED_EXTENSIONS
                    .iter()
                    .any(|s| ext.eq_ignore_ascii_case(s))
            })
            .unwrap_or(false);
        if structured {
            Self::Structured(path)
        } else {
            Self::Text(path)
        }
    }

    /// The file backing this source.
    pub fn path(&self) -> &Path {
        match self {
            Self::Structured(path) | Self::Text(path) => path,
        }
    }

    /// Load this source's contribution.
    pub fn load(&self) -> Result<Contribution, FileAccessError> {
        let content =
            std::fs::read_to_string(self.path()).map_err(|source| FileAccessError::Read {
                path: self.path().to_path_buf(),
                source,
            })?;

        match self {
            Self::Text(_) => Ok(Contribution::Text(content)),
            Self::Structured(path) => {
                let value = parse_structured(path, &content)?;
                match value {
                    Value::Object(map) => Ok(Contribution::Fields(map)),
                    other => Err(FileAccessError::Parse {
                        path: path.clone(),
                        message: format!(
                            "expected a mapping at the top level, found {}",
                            type_name(&other)
                        ),
                    }),
                }
            }
        }
    }
}

/// Parse a structured descriptor into a JSON value, by extension.
///
/// YAML documents are bridged into `serde_json::Value` so the merge logic
/// is format-agnostic.
fn parse_structured(path: &Path, content: &str) -> Result<Value, FileAccessError> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(content).map_err(|e| FileAccessError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    } else {
        serde_json::from_str(content).map_err(|e| FileAccessError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_extension() {
        assert!(matches!(
            DescriptorSource::classify(PathBuf::from("Aria.json")),
            DescriptorSource::Structured(_)
        ));
        assert!(matches!(
            DescriptorSource::classify(PathBuf::from("Aria.yaml")),
            DescriptorSource::Structured(_)
        ));
        assert!(matches!(
            DescriptorSource::classify(PathBuf::from("Aria.YML")),
            DescriptorSource::Structured(_)
        ));
        assert!(matches!(
            DescriptorSource::classify(PathBuf::from("Aria.txt")),
            DescriptorSource::Text(_)
        ));
        assert!(matches!(
            DescriptorSource::classify(PathBuf::from("Aria")),
            DescriptorSource::Text(_)
        ));
    }

    #[test]
    fn test_load_json_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Aria.json");
        std::fs::write(&path, r#"{"tone_default": "wry"}"#).unwrap();

        let contribution = DescriptorSource::classify(path).load().unwrap();
        match contribution {
            Contribution::Fields(map) => {
                assert_eq!(map.get("tone_default").unwrap(), "wry");
            }
            other => panic!("expected fields, got {other:?}"),
        }
    }

    #[test]
    fn test_load_yaml_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Aria.yaml");
        std::fs::write(&path, "tone_default: wry\nregister: playful\n").unwrap();

        let contribution = DescriptorSource::classify(path).load().unwrap();
        match contribution {
            Contribution::Fields(map) => {
                assert_eq!(map.get("tone_default").unwrap(), "wry");
                assert_eq!(map.get("register").unwrap(), "playful");
            }
            other => panic!("expected fields, got {other:?}"),
        }
    }

    #[test]
    fn test_load_text_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Aria.txt");
        std::fs::write(&path, "Loves puns.").unwrap();

        let contribution = DescriptorSource::classify(path).load().unwrap();
        assert_eq!(contribution, Contribution::Text("Loves puns.".to_string()));
    }

    #[test]
    fn test_load_non_mapping_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Aria.json");
        std::fs::write(&path, r#"["not", "a", "mapping"]"#).unwrap();

        let err = DescriptorSource::classify(path).load().unwrap_err();
        assert!(matches!(err, FileAccessError::Parse { .. }));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_load_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Aria.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = DescriptorSource::classify(path).load().unwrap_err();
        assert!(matches!(err, FileAccessError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = DescriptorSource::classify(PathBuf::from("/nonexistent/Aria.txt"))
            .load()
            .unwrap_err();
        assert!(matches!(err, FileAccessError::Read { .. }));
    }
}

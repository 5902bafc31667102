//! Bundle-side snippet records.

use serde::{Deserialize, Serialize};

/// One snippet record as stored in a bundle entry file.
///
/// The `keyword` is the bare trigger with the collection's shared
/// prefix/suffix removed; the decoration lives in `info.plist` instead.
/// The `uid` is an uppercase UUIDv4, regenerated on every export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetEntry {
    /// Expansion text.
    pub snippet: String,
    /// Unique identifier, uppercase hexadecimal UUID.
    pub uid: String,
    /// Display label shown in the snippet manager.
    pub name: String,
    /// Bare trigger keyword, without prefix/suffix.
    pub keyword: String,
}

/// The wrapper object serialized to one JSON file per entry.
///
/// Entry files nest the record under an `alfredsnippet` key. A JSON
/// file without that key is not an entry and is skipped on import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetFile {
    /// The wrapped snippet record, absent for non-entry JSON files.
    #[serde(default)]
    pub alfredsnippet: Option<SnippetEntry>,
}

impl SnippetFile {
    /// Wraps an entry for serialization.
    #[must_use]
    pub const fn new(entry: SnippetEntry) -> Self {
        Self {
            alfredsnippet: Some(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_file_roundtrip() {
        let file = SnippetFile::new(SnippetEntry {
            snippet: "Kind regards,\nAda".to_string(),
            uid: "0A1B2C3D-0000-4000-8000-000000000000".to_string(),
            name: "Signature".to_string(),
            keyword: "sig".to_string(),
        });

        let json = serde_json::to_string_pretty(&file).unwrap();
        assert!(json.contains("\"alfredsnippet\""));
        assert!(json.contains("\"keyword\": \"sig\""));

        let parsed: SnippetFile = serde_json::from_str(&json).unwrap();
        let entry = parsed.alfredsnippet.unwrap();
        assert_eq!(entry.name, "Signature");
        assert_eq!(entry.snippet, "Kind regards,\nAda");
    }

    #[test]
    fn test_json_without_wrapper_key_parses_to_none() {
        let parsed: SnippetFile = serde_json::from_str(r#"{"other": 1}"#).unwrap();
        assert!(parsed.alfredsnippet.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{
            "alfredsnippet": {
                "snippet": "text",
                "uid": "ABC",
                "name": "n",
                "keyword": "k",
                "dontautoexpand": true
            }
        }"#;
        let parsed: SnippetFile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.alfredsnippet.unwrap().keyword, "k");
    }
}

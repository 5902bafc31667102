//! Property-list metadata codec.
//!
//! The bundle's `info.plist` records the keyword prefix/suffix shared
//! by every snippet in the collection. The wire keys are the ones the
//! snippet manager itself writes.

use crate::models::KeywordAffixes;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Filename of the metadata file inside a bundle.
pub const METADATA_FILE: &str = "info.plist";

/// Serialized shape of the metadata file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SnippetInfo {
    #[serde(rename = "snippetkeywordprefix", default)]
    prefix: String,
    #[serde(rename = "snippetkeywordsuffix", default)]
    suffix: String,
}

/// Reads the affix pair from the metadata file in `dir`.
///
/// A missing file is not an error: bundles without metadata simply have
/// no shared decoration, so empty affixes are returned. An unreadable
/// file is logged and degrades to empty affixes as well.
#[must_use]
pub fn read_affixes(dir: &Path) -> KeywordAffixes {
    let path = dir.join(METADATA_FILE);
    if !path.is_file() {
        return KeywordAffixes::default();
    }
    match plist::from_file::<_, SnippetInfo>(&path) {
        Ok(info) => KeywordAffixes::new(info.prefix, info.suffix),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable metadata file, assuming empty affixes");
            KeywordAffixes::default()
        },
    }
}

/// Writes the affix pair as an XML property list in `dir`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_affixes(dir: &Path, affixes: &KeywordAffixes) -> Result<()> {
    let info = SnippetInfo {
        prefix: affixes.prefix.clone(),
        suffix: affixes.suffix.clone(),
    };
    plist::to_file_xml(dir.join(METADATA_FILE), &info).map_err(|e| Error::OperationFailed {
        operation: "write_metadata".to_string(),
        cause: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_roundtrips() {
        let dir = TempDir::new().unwrap();
        let affixes = KeywordAffixes::new("::", ";");
        write_affixes(dir.path(), &affixes).unwrap();

        let read = read_affixes(dir.path());
        assert_eq!(read, affixes);
    }

    #[test]
    fn test_missing_file_yields_empty_affixes() {
        let dir = TempDir::new().unwrap();
        assert!(read_affixes(dir.path()).is_empty());
    }

    #[test]
    fn test_unreadable_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(METADATA_FILE), b"not a plist").unwrap();
        assert!(read_affixes(dir.path()).is_empty());
    }

    #[test]
    fn test_wire_keys_match_snippet_manager() {
        let dir = TempDir::new().unwrap();
        write_affixes(dir.path(), &KeywordAffixes::new("pre", "post")).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(METADATA_FILE)).unwrap();
        assert!(raw.contains("snippetkeywordprefix"));
        assert!(raw.contains("snippetkeywordsuffix"));
    }
}

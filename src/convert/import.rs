//! Bundle → document pipeline.

use crate::bundle::{BUNDLE_EXTENSION, archive, metadata};
use crate::models::{Match, SnippetDocument, SnippetFile};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Outcome of an import run.
///
/// Per-file failures do not abort the pipeline; they accumulate here
/// and the CLI layer decides how to render them.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Entries successfully projected into matches.
    pub imported: usize,
    /// JSON files without the entry wrapper key, skipped silently.
    pub skipped: usize,
    /// Per-file failures (malformed JSON, unreadable files).
    pub errors: Vec<String>,
}

impl ImportReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            imported: 0,
            skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Returns whether any per-file errors occurred.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Returns the document path an import of `bundle` produces: the same
/// stem with a `.yml` extension.
#[must_use]
pub fn default_output_path(bundle: &Path) -> PathBuf {
    bundle.with_extension("yml")
}

/// Converts a bundle into an in-memory document.
///
/// Unpacks into a scratch directory (removed on every exit path), reads
/// the affixes from the metadata file, and projects each entry file
/// into a [`Match`] with `trigger = prefix + keyword + suffix`. Entry
/// files are visited in filename order so the resulting document is
/// stable across runs.
///
/// # Errors
///
/// Returns an error if `bundle` is not an existing `.alfredsnippets`
/// file or the archive cannot be unpacked. Malformed entry files are
/// reported, not fatal.
pub fn import_bundle(bundle: &Path) -> Result<(SnippetDocument, ImportReport)> {
    super::ensure_input_file(bundle, &[BUNDLE_EXTENSION], "snippet bundle")?;

    let scratch = TempDir::new().map_err(|e| Error::OperationFailed {
        operation: "create_scratch_dir".to_string(),
        cause: e.to_string(),
    })?;
    archive::unpack(bundle, scratch.path())?;
    let affixes = metadata::read_affixes(scratch.path());

    let mut entry_paths: Vec<PathBuf> = Vec::new();
    let dir = std::fs::read_dir(scratch.path()).map_err(|e| Error::OperationFailed {
        operation: "read_scratch_dir".to_string(),
        cause: e.to_string(),
    })?;
    for entry in dir {
        let entry = entry.map_err(|e| Error::OperationFailed {
            operation: "read_scratch_dir".to_string(),
            cause: e.to_string(),
        })?;
        let path = entry.path();
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json && path.is_file() {
            entry_paths.push(path);
        }
    }
    // Filesystem iteration order is unspecified; sort for stable output.
    entry_paths.sort();

    let mut report = ImportReport::new();
    let mut matches = Vec::with_capacity(entry_paths.len());
    for path in &entry_paths {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<entry>")
            .to_string();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                report.errors.push(format!("{filename}: {e}"));
                continue;
            },
        };
        let file: SnippetFile = match serde_json::from_str(&text) {
            Ok(file) => file,
            Err(e) => {
                report.errors.push(format!("{filename}: {e}"));
                continue;
            },
        };
        let Some(entry) = file.alfredsnippet else {
            tracing::debug!(file = %filename, "no snippet wrapper key, skipping");
            report.skipped += 1;
            continue;
        };
        matches.push(Match {
            trigger: affixes.apply(entry.keyword.trim()),
            replace: entry.snippet.trim().to_string(),
            label: Some(entry.name),
        });
        report.imported += 1;
    }

    tracing::info!(
        imported = report.imported,
        skipped = report.skipped,
        errors = report.errors.len(),
        "imported bundle"
    );
    Ok((SnippetDocument { matches }, report))
}

/// Converts a bundle and writes the document to `output`.
///
/// Refuses to overwrite: an existing `output` is a precondition failure
/// raised before any work, and the file is left untouched.
///
/// # Errors
///
/// Returns an error if `output` already exists, the bundle cannot be
/// read, or the document cannot be written.
pub fn import_to_file(bundle: &Path, output: &Path) -> Result<ImportReport> {
    if output.exists() {
        return Err(Error::OutputExists {
            path: output.display().to_string(),
        });
    }
    let (document, report) = import_bundle(bundle)?;
    let yaml = serde_yaml_ng::to_string(&document).map_err(|e| Error::OperationFailed {
        operation: "serialize_document".to_string(),
        cause: e.to_string(),
    })?;
    std::fs::write(output, yaml).map_err(|e| Error::OperationFailed {
        operation: "write_document".to_string(),
        cause: e.to_string(),
    })?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_swaps_extension() {
        assert_eq!(
            default_output_path(Path::new("work/mail.alfredsnippets")),
            Path::new("work/mail.yml")
        );
    }

    #[test]
    fn test_rejects_wrong_extension() {
        let err = import_bundle(Path::new("snippets.zip")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}

//! Document → bundle pipeline.

use crate::bundle::{BUNDLE_EXTENSION, archive, metadata};
use crate::models::{KeywordAffixes, Match, SnippetEntry, SnippetFile};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use uuid::Uuid;

/// Filename of the optional collection icon inside a bundle.
pub const ICON_FILE: &str = "icon.png";

/// Longest slice of the replacement text used for a derived name.
const DERIVED_NAME_CHARS: usize = 15;

/// Options for an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// PNG image to embed as the collection icon.
    pub icon: Option<PathBuf>,
}

impl ExportOptions {
    /// Sets the icon image path.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Outcome of an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    /// Matches written as entry files.
    pub exported: usize,
    /// Document entries that failed to parse and were skipped.
    pub skipped: usize,
    /// Per-entry failures and icon copy failures.
    pub errors: Vec<String>,
    /// The affixes recorded in the bundle metadata.
    pub affixes: KeywordAffixes,
    /// Path of the written archive.
    pub output_path: Option<String>,
}

impl ExportReport {
    /// Returns whether any per-entry errors occurred.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Returns the bundle path an export of `document` produces: the same
/// stem with the bundle extension.
#[must_use]
pub fn default_output_path(document: &Path) -> PathBuf {
    document.with_extension(BUNDLE_EXTENSION)
}

/// Converts a document into a bundle archive at `output`.
///
/// Derives the affix pair from the trigger set, strips it per entry,
/// writes one entry file per match plus the metadata file into a
/// scratch directory (removed on every exit path), optionally copies
/// the icon, and packs the directory into the archive.
///
/// # Errors
///
/// Returns an error if `document` is not an existing `.yml`/`.yaml`
/// file, the top-level `matches` key is absent, the icon path does not
/// end in `.png`, or the archive cannot be packed. Unparseable entries
/// and icon copy failures are reported, not fatal.
pub fn export_document(
    document: &Path,
    output: &Path,
    options: &ExportOptions,
) -> Result<ExportReport> {
    super::ensure_input_file(document, super::DOCUMENT_EXTENSIONS, "snippet document")?;
    if let Some(icon) = &options.icon {
        ensure_icon_extension(icon)?;
    }

    let text = std::fs::read_to_string(document).map_err(|e| Error::OperationFailed {
        operation: "read_document".to_string(),
        cause: e.to_string(),
    })?;
    let (matches, entry_errors) = parse_matches(&text)?;

    let triggers: Vec<&str> = matches.iter().map(|m| m.trigger.as_str()).collect();
    let affixes = KeywordAffixes::derive(&triggers);

    let scratch = TempDir::new().map_err(|e| Error::OperationFailed {
        operation: "create_scratch_dir".to_string(),
        cause: e.to_string(),
    })?;
    metadata::write_affixes(scratch.path(), &affixes)?;

    let mut report = ExportReport {
        skipped: entry_errors.len(),
        errors: entry_errors,
        affixes: affixes.clone(),
        ..ExportReport::default()
    };

    for m in &matches {
        let entry = bundle_entry(m, &affixes);
        let filename = entry_filename(&entry.name, &entry.uid);
        let json = match serde_json::to_string_pretty(&SnippetFile::new(entry)) {
            Ok(json) => json,
            Err(e) => {
                report.errors.push(format!("{filename}: {e}"));
                continue;
            },
        };
        if let Err(e) = std::fs::write(scratch.path().join(&filename), json) {
            report.errors.push(format!("{filename}: {e}"));
            continue;
        }
        report.exported += 1;
    }

    if let Some(icon) = &options.icon {
        if let Err(e) = std::fs::copy(icon, scratch.path().join(ICON_FILE)) {
            report
                .errors
                .push(format!("could not copy icon '{}': {e}", icon.display()));
        }
    }

    archive::pack(scratch.path(), output)?;
    report.output_path = Some(output.display().to_string());

    tracing::info!(
        exported = report.exported,
        skipped = report.skipped,
        errors = report.errors.len(),
        prefix = %report.affixes.prefix,
        suffix = %report.affixes.suffix,
        "exported document"
    );
    Ok(report)
}

/// Parses the document text into matches.
///
/// A missing or non-sequence `matches` key is fatal. Individual entries
/// that fail to parse (missing `trigger` or `replace`) are collected as
/// error strings; the remaining entries proceed, and affix derivation
/// runs over their triggers only.
fn parse_matches(text: &str) -> Result<(Vec<Match>, Vec<String>)> {
    let value: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(text).map_err(|e| Error::OperationFailed {
            operation: "parse_document".to_string(),
            cause: e.to_string(),
        })?;
    let Some(items) = value.get("matches") else {
        return Err(Error::InvalidInput(
            "document has no top-level 'matches' key".to_string(),
        ));
    };
    let Some(items) = items.as_sequence() else {
        return Err(Error::InvalidInput(
            "'matches' must be a sequence".to_string(),
        ));
    };

    let mut matches = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match serde_yaml_ng::from_value::<Match>(item.clone()) {
            Ok(m) => matches.push(m),
            Err(e) => errors.push(format!("entry {}: {e}", index + 1)),
        }
    }
    Ok((matches, errors))
}

/// Projects a match into a bundle entry with a fresh identifier.
fn bundle_entry(m: &Match, affixes: &KeywordAffixes) -> SnippetEntry {
    SnippetEntry {
        snippet: m.replace.clone(),
        uid: new_uid(),
        name: display_name(m),
        keyword: affixes.strip(&m.trigger).to_string(),
    }
}

/// Generates a fresh uppercase UUIDv4 identifier.
fn new_uid() -> String {
    Uuid::new_v4().to_string().to_uppercase()
}

/// Derives the display name for an entry.
///
/// Uses the label when present and non-empty. Otherwise takes the first
/// 15 characters of the replacement text, maps spaces and newlines to
/// underscores, drops carriage returns, trims `,` and `.` from both
/// ends, and appends an ellipsis to mark the truncation.
fn display_name(m: &Match) -> String {
    if let Some(label) = m.label.as_deref() {
        if !label.is_empty() {
            return label.to_string();
        }
    }
    let collapsed: String = m
        .replace
        .chars()
        .take(DERIVED_NAME_CHARS)
        .filter_map(|c| match c {
            '\r' => None,
            ' ' | '\n' => Some('_'),
            other => Some(other),
        })
        .collect();
    let trimmed = collapsed.trim_matches(|c| c == ',' || c == '.');
    format!("{trimmed}…")
}

/// Builds the entry filename from the display name and identifier.
fn entry_filename(name: &str, uid: &str) -> String {
    format!("{name} [{uid}].json")
}

/// Checks the icon path carries a `.png` extension (case-insensitive).
fn ensure_icon_extension(icon: &Path) -> Result<()> {
    let ok = icon
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "icon file must have a .png extension: {}",
            icon.display()
        )))
    }
}

//! Import/export conversion pipelines.
//!
//! Two independent, stateless pipelines:
//!
//! - [`import`] — bundle → document: unpack, read metadata, project
//!   each entry into a match with the affixes folded into the trigger.
//! - [`export`] — document → bundle: derive the affixes from the
//!   trigger set, strip them per entry, write one file per snippet plus
//!   the metadata file, pack.
//!
//! Each pipeline is a single call that owns a scratch directory for its
//! lifetime and returns a report of per-item outcomes; fatal conditions
//! surface as [`crate::Error`]. The library never prints — rendering a
//! report is the CLI's job.

pub mod export;
pub mod import;

use crate::{Error, Result};
use std::path::Path;

/// Extensions accepted for the document side.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Checks that `path` is an existing file with one of the allowed
/// extensions (compared case-insensitively).
pub(crate) fn ensure_input_file(path: &Path, allowed: &[&str], what: &str) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    if !ext.as_deref().is_some_and(|e| allowed.contains(&e)) {
        return Err(Error::InvalidInput(format!(
            "'{}' is not a .{} {what}",
            path.display(),
            allowed[0],
        )));
    }
    if !path.is_file() {
        return Err(Error::InvalidInput(format!(
            "no such file: {}",
            path.display()
        )));
    }
    Ok(())
}

//! # Snipport
//!
//! Converts text-expansion snippet collections between Alfred snippet
//! bundles (`.alfredsnippets`) and Espanso YAML documents (`.yml`).
//!
//! A bundle is a zip archive holding one JSON file per snippet plus an
//! `info.plist` that records the keyword prefix/suffix shared by every
//! snippet in the collection. An Espanso document stores the same data
//! as a single `matches` sequence, with the prefix/suffix folded into
//! each trigger. Converting between the two is a field projection plus
//! affix bookkeeping; both directions run as one-shot, stateless
//! pipelines.
//!
//! ## Example
//!
//! ```rust,ignore
//! use snipport::convert::import;
//!
//! let output = import::default_output_path(bundle);
//! let report = import::import_to_file(bundle, &output)?;
//! println!("imported {} snippets", report.imported);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod bundle;
pub mod convert;
pub mod models;
pub mod observability;

// Re-exports for convenience
pub use convert::export::{ExportOptions, ExportReport};
pub use convert::import::ImportReport;
pub use models::{KeywordAffixes, Match, SnippetDocument, SnippetEntry, SnippetFile};

/// Error type for snipport operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Wrong file extension, missing `matches` key, bad icon path |
/// | `OutputExists` | Import would overwrite an existing document |
/// | `OperationFailed` | I/O errors, archive pack/unpack failures, serialization failures |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - The source path does not exist or carries the wrong extension
    /// - The document has no top-level `matches` key
    /// - An icon path does not end in `.png`
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The output file already exists.
    ///
    /// Import refuses to overwrite an existing document; the check runs
    /// before any work so the existing file is never touched.
    #[error("output file already exists: {path}")]
    OutputExists {
        /// The path that would have been overwritten.
        path: String,
    },

    /// An operation failed.
    ///
    /// Raised when:
    /// - The bundle archive cannot be unpacked or packed
    /// - Filesystem I/O errors occur
    /// - Metadata or document serialization fails
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for snipport operations.
pub type Result<T> = std::result::Result<T, Error>;

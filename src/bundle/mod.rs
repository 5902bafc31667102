//! Bundle container adapters.
//!
//! A bundle is a flat zip archive with the `.alfredsnippets` extension:
//! one JSON file per snippet, an `info.plist` with the shared keyword
//! prefix/suffix, and optionally an `icon.png`. The submodules wrap the
//! container concerns:
//!
//! - [`archive`] — pack/unpack the zip container
//! - [`metadata`] — read/write the property-list metadata file

pub mod archive;
pub mod metadata;

/// Canonical file extension of a snippet bundle (without the dot).
pub const BUNDLE_EXTENSION: &str = "alfredsnippets";

//! Data model for the two snippet representations.
//!
//! | Type | Side | Serialized as |
//! |------|------|---------------|
//! | [`SnippetEntry`] | bundle | one JSON file per snippet, `alfredsnippet` wrapper |
//! | [`Match`] | document | one element of the `matches` sequence |
//! | [`KeywordAffixes`] | metadata | `info.plist` prefix/suffix keys |

mod affixes;
mod document;
mod snippet;

pub use affixes::{KeywordAffixes, longest_common_prefix, longest_common_suffix};
pub use document::{Match, SnippetDocument};
pub use snippet::{SnippetEntry, SnippetFile};

//! Document-side snippet records.

use serde::{Deserialize, Serialize};

/// One snippet as it appears in an Espanso document.
///
/// The `trigger` carries the full typed string including any shared
/// prefix/suffix decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Full trigger string, prefix and suffix included.
    pub trigger: String,
    /// Expansion text.
    pub replace: String,
    /// Display name; omitted from output when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A whole Espanso document: an ordered sequence of matches under the
/// top-level `matches` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetDocument {
    /// The snippet sequence, in document order.
    pub matches: Vec<Match>,
}

//! Shared keyword prefix/suffix handling.
//!
//! Alfred stores the decoration once per collection and keeps keywords
//! bare; Espanso folds it into every trigger. This module carries the
//! pair across a conversion and derives it back from a trigger set.

/// The keyword prefix/suffix shared by every snippet in a collection.
///
/// Applied uniformly: `trigger == prefix + keyword + suffix` for each
/// entry converted under the same affix pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordAffixes {
    /// Leading decoration on every trigger.
    pub prefix: String,
    /// Trailing decoration on every trigger.
    pub suffix: String,
}

impl KeywordAffixes {
    /// Creates an affix pair.
    #[must_use]
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Returns whether both affixes are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// Derives the affix pair from a set of triggers.
    ///
    /// Computes the longest common leading and trailing substrings over
    /// the whole set. Fewer than two triggers yield empty affixes: with
    /// a single trigger the common prefix and suffix would each be the
    /// entire string, leaving an empty keyword, so the whole trigger is
    /// kept as the keyword instead.
    #[must_use]
    pub fn derive(triggers: &[&str]) -> Self {
        if triggers.len() < 2 {
            return Self::default();
        }
        Self {
            prefix: longest_common_prefix(triggers),
            suffix: longest_common_suffix(triggers),
        }
    }

    /// Builds a full trigger from a bare keyword.
    #[must_use]
    pub fn apply(&self, keyword: &str) -> String {
        format!("{}{keyword}{}", self.prefix, self.suffix)
    }

    /// Strips the affixes from a trigger, yielding the bare keyword.
    ///
    /// Each affix is removed only where it genuinely occurs: the prefix
    /// when the trigger starts with it, the suffix when the remainder
    /// ends with it.
    #[must_use]
    pub fn strip<'a>(&self, trigger: &'a str) -> &'a str {
        let rest = trigger.strip_prefix(self.prefix.as_str()).unwrap_or(trigger);
        rest.strip_suffix(self.suffix.as_str()).unwrap_or(rest)
    }
}

/// Returns the longest common leading substring of the set.
///
/// Operates on `char` boundaries; a multi-byte character is never split.
#[must_use]
pub fn longest_common_prefix(strings: &[&str]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };
    let mut len = first.len();
    for s in rest {
        len = len.min(common_prefix_len(first, s));
        if len == 0 {
            break;
        }
    }
    first[..len].to_string()
}

/// Returns the longest common trailing substring of the set.
#[must_use]
pub fn longest_common_suffix(strings: &[&str]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };
    let mut len = first.len();
    for s in rest {
        len = len.min(common_suffix_len(first, s));
        if len == 0 {
            break;
        }
    }
    first[first.len() - len..].to_string()
}

/// Byte length of the common leading run of `a` and `b`.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .take_while(|((_, ca), cb)| ca == cb)
        .last()
        .map_or(0, |((i, ca), _)| i + ca.len_utf8())
}

/// Byte length of the common trailing run of `a` and `b`.
fn common_suffix_len(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(ca, cb)| ca == cb)
        .map(|(ca, _)| ca.len_utf8())
        .sum()
}

//! Property-based tests for affix derivation.
//!
//! Uses proptest to verify invariants across random trigger sets:
//! - Derived affixes occur in every trigger of the set
//! - Stripping then re-applying reconstructs non-degenerate triggers
//! - Decorating distinct keywords never loses the decoration

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use snipport::KeywordAffixes;
use snipport::models::{longest_common_prefix, longest_common_suffix};

proptest! {
    /// Property: the derived prefix leads and the derived suffix trails
    /// every trigger in the set.
    #[test]
    fn prop_derived_affixes_occur_in_every_trigger(
        triggers in prop::collection::vec("[a-z:;/]{0,12}", 2..6)
    ) {
        let refs: Vec<&str> = triggers.iter().map(String::as_str).collect();
        let affixes = KeywordAffixes::derive(&refs);
        for t in &triggers {
            prop_assert!(t.starts_with(&affixes.prefix));
            prop_assert!(t.ends_with(&affixes.suffix));
        }
    }

    /// Property: when the affixes do not overlap inside a trigger,
    /// stripping and re-applying reconstructs it exactly.
    #[test]
    fn prop_strip_then_apply_reconstructs_trigger(
        triggers in prop::collection::vec("[a-z]{1,10}", 2..6)
    ) {
        let refs: Vec<&str> = triggers.iter().map(String::as_str).collect();
        let affixes = KeywordAffixes::derive(&refs);
        for t in &triggers {
            if affixes.prefix.len() + affixes.suffix.len() <= t.len() {
                prop_assert_eq!(affixes.apply(affixes.strip(t)), t.as_str());
            }
        }
    }

    /// Property: decorating distinct keywords and deriving recovers a
    /// prefix/suffix at least as long as the decoration.
    #[test]
    fn prop_derive_recovers_applied_decoration(
        prefix in "[:;]{0,3}",
        suffix in "[:;]{0,3}",
        keywords in prop::collection::hash_set("[a-z]{1,8}", 2..5)
    ) {
        let triggers: Vec<String> = keywords
            .iter()
            .map(|k| format!("{prefix}{k}{suffix}"))
            .collect();
        let refs: Vec<&str> = triggers.iter().map(String::as_str).collect();
        let affixes = KeywordAffixes::derive(&refs);
        prop_assert!(affixes.prefix.starts_with(&prefix));
        prop_assert!(affixes.suffix.ends_with(&suffix));
    }

    /// Property: fewer than two triggers always derive empty affixes.
    #[test]
    fn prop_single_trigger_derives_empty(trigger in "[a-z:;/]{0,16}") {
        let affixes = KeywordAffixes::derive(&[trigger.as_str()]);
        prop_assert!(affixes.is_empty());
        prop_assert_eq!(affixes.strip(&trigger), trigger.as_str());
    }

    /// Property: the common prefix/suffix of a set containing the empty
    /// string is empty.
    #[test]
    fn prop_empty_member_forces_empty_affixes(other in "[a-z]{0,10}") {
        prop_assert_eq!(longest_common_prefix(&["", other.as_str()]), "");
        prop_assert_eq!(longest_common_suffix(&[other.as_str(), ""]), "");
    }
}

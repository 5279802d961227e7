//! Regex alternation optimizer
//!
//! Collapses a set of strings into a compact regular-expression alternation
//! by recursively factoring out shared prefixes. The result matches exactly
//! the input set and nothing else (when anchored by the surrounding pattern).
//!
//! ## Example
//!
//! ```text
//! Input:   {"cat", "car", "cow"}
//! Naive:   (?:cat|car|cow)
//! Output:  c(?:a(?:r|t)|ow)
//! ```
//!
//! ## Design
//!
//! At each level the (sorted, deduplicated) strings are bucketed by first
//! character; each bucket recurses on the stripped suffixes and contributes
//! one alternative. An empty string in the set marks everything built so far
//! as optional, rendered as a trailing `?` on the group. Grouping parentheses
//! are only emitted when there is something to disambiguate: a single
//! non-optional alternative stays unwrapped.
//!
//! Output is deterministic: the strings are sorted at every recursion level,
//! so the generated grammar files diff cleanly across runs.

use std::collections::{BTreeMap, BTreeSet};

/// Build a regex fragment matching exactly the given strings.
///
/// Duplicates and iteration order are irrelevant. The empty set produces an
/// empty fragment, which callers must treat as "no content produced" rather
/// than as a standalone pattern.
pub fn optimize_alternations<'a, I>(strs: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let deduped: BTreeSet<&str> = strs.into_iter().collect();
    let sorted: Vec<&str> = deduped.into_iter().collect();
    optimize_sorted(&sorted)
}

/// Recursive worker. Expects its input sorted and deduplicated; bucket
/// suffixes inherit both properties, so only the public entry point sorts.
fn optimize_sorted(strs: &[&str]) -> String {
    let mut optional = false;
    let mut buckets: BTreeMap<char, Vec<&str>> = BTreeMap::new();

    for s in strs {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => buckets.entry(first).or_default().push(chars.as_str()),
            None => optional = true,
        }
    }

    if buckets.is_empty() {
        return String::new();
    }

    let mut alternatives: Vec<String> = buckets
        .iter()
        .map(|(first, suffixes)| {
            // Escape the factored-out character so metacharacters in the
            // input cannot widen the matched language.
            let mut alternative = regex::escape(&first.to_string());
            alternative.push_str(&optimize_sorted(suffixes));
            alternative
        })
        .collect();

    if !optional && alternatives.len() == 1 {
        return alternatives.swap_remove(0);
    }

    let joined = alternatives.join("|");
    if optional {
        // Grouping is mandatory here: a bare `?` would only apply to the
        // last character of the alternative, not the whole of it.
        format!("(?:{})?", joined)
    } else {
        format!("(?:{})", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(optimize_alternations(empty), "");
    }

    #[test]
    fn test_singleton_is_unwrapped() {
        assert_eq!(optimize_alternations(["x"]), "x");
    }

    #[test]
    fn test_lone_empty_string() {
        // Nothing to alternate over; the fragment stays empty.
        assert_eq!(optimize_alternations([""]), "");
    }

    #[test]
    fn test_disjoint_strings_are_grouped() {
        assert_eq!(optimize_alternations(["new", "old"]), "(?:new|old)");
    }

    #[test]
    fn test_shared_prefix_is_factored_recursively() {
        assert_eq!(
            optimize_alternations(["cat", "car", "cow"]),
            "c(?:a(?:r|t)|ow)"
        );
    }

    #[test]
    fn test_empty_string_forces_grouped_optional() {
        assert_eq!(optimize_alternations(["a", ""]), "(?:a)?");
    }

    #[test]
    fn test_prefix_of_longer_member() {
        assert_eq!(optimize_alternations(["foo", "foobar"]), "foo(?:bar)?");
    }

    #[test]
    fn test_deep_factoring_with_nested_optional() {
        assert_eq!(
            optimize_alternations(["read", "readLine", "realm"]),
            "rea(?:d(?:Line)?|lm)"
        );
    }

    #[test]
    fn test_duplicates_and_order_are_ignored() {
        assert_eq!(
            optimize_alternations(["b", "a", "b"]),
            optimize_alternations(["a", "b"])
        );
        assert_eq!(optimize_alternations(["b", "a", "b"]), "(?:a|b)");
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        assert_eq!(optimize_alternations(["a.b", "a+b"]), r"a(?:\+b|\.b)");
    }

    #[test]
    fn test_fragment_matches_only_the_inputs() {
        let fragment = optimize_alternations(["cat", "car", "cow"]);
        let re = regex::Regex::new(&format!("^(?:{})$", fragment)).unwrap();
        for word in ["cat", "car", "cow"] {
            assert!(re.is_match(word), "{} should match", word);
        }
        for word in ["c", "ca", "cab", "cows", ""] {
            assert!(!re.is_match(word), "{} should not match", word);
        }
    }
}

//! Rendering result sets for display.

use std::cmp::Ordering;

use crate::ops::LanguageSet;

/// Glyph standing in for the empty string.
const EPSILON: &str = "ε";
/// Glyph standing in for the empty set.
const EMPTY_SET: &str = "∅";

/// Order strings by character length first, then lexically.
fn shortlex(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}

/// Render a result set as `{s1, s2, …}`.
///
/// Elements sort ascending by (length, lexical order); the empty string
/// renders as `ε` and the empty set as `∅`. The whole set is rendered —
/// truncating long results is left to the caller.
///
/// # Examples
/// ```
/// use lang_algebra::render_set;
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<String> = ["ab", "b", ""].iter().map(|s| (*s).to_owned()).collect();
/// assert_eq!(render_set(&set), "{ε, b, ab}");
/// assert_eq!(render_set(&BTreeSet::new()), "∅");
/// ```
#[must_use]
pub fn render_set(set: &LanguageSet) -> String {
    if set.is_empty() {
        return EMPTY_SET.to_owned();
    }
    let mut items: Vec<&str> = set.iter().map(String::as_str).collect();
    items.sort_by(|a, b| shortlex(a, b));
    let rendered: Vec<&str> = items
        .into_iter()
        .map(|s| if s.is_empty() { EPSILON } else { s })
        .collect();
    format!("{{{}}}", rendered.join(", "))
}

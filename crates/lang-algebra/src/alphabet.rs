//! Alphabet declarations and string validation.
//!
//! Symbol declarations are whitespace-delimited; symbols may span multiple
//! characters, and validation matches longer symbols first so overlapping
//! symbols such as `a` and `ab` segment unambiguously.

use std::collections::BTreeSet;

/// The finite set of symbols strings may be built from.
///
/// An empty alphabet is permissive: every string validates, and the bounded
/// universe used by complement degrades to the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: BTreeSet<String>,
    /// Symbols ordered longest first for greedy segmentation.
    ordered: Vec<String>,
}

impl Alphabet {
    /// Parse a whitespace-delimited symbol declaration.
    ///
    /// Empty fragments are dropped and duplicates collapse. A blank
    /// declaration produces the empty alphabet.
    ///
    /// # Examples
    /// ```
    /// use lang_algebra::Alphabet;
    /// let sigma = Alphabet::parse("a b ab a");
    /// assert_eq!(sigma.len(), 3);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let symbols: BTreeSet<String> = raw.split_whitespace().map(str::to_owned).collect();
        let mut ordered: Vec<String> = symbols.iter().cloned().collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Self { symbols, ordered }
    }

    /// True when the declaration contained no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Iterate the symbols in lexical order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Whether `s` decomposes entirely into alphabet symbols.
    ///
    /// The empty string always validates, and an empty alphabet accepts
    /// everything.
    ///
    /// # Examples
    /// ```
    /// use lang_algebra::Alphabet;
    /// let sigma = Alphabet::parse("a ab");
    /// assert!(sigma.matches("aab"));
    /// assert!(!sigma.matches("ba"));
    /// ```
    #[must_use]
    pub fn matches(&self, s: &str) -> bool {
        self.first_mismatch(s).is_none()
    }

    /// Greedily segment `s`, returning the unmatched tail on failure.
    ///
    /// Each step strips the longest symbol prefix; there is no backtracking,
    /// so a string that only segments under a shorter-prefix split is
    /// rejected. `None` means the whole string segmented cleanly.
    #[must_use]
    pub fn first_mismatch<'a>(&self, s: &'a str) -> Option<&'a str> {
        if self.symbols.is_empty() {
            return None;
        }
        let mut rest = s;
        'scan: while !rest.is_empty() {
            for symbol in &self.ordered {
                if let Some(next) = rest.strip_prefix(symbol.as_str()) {
                    rest = next;
                    continue 'scan;
                }
            }
            return Some(rest);
        }
        None
    }
}

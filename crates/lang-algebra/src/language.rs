//! Named language definitions and the evaluation registry.

use std::collections::BTreeMap;

use crate::alphabet::Alphabet;
use crate::errors::EngineError;
use crate::ops::{self, LanguageSet};

/// Definition literals denoting the empty string.
const EPSILON_LITERALS: [&str; 2] = ["ε", "lambda"];

/// Immutable name → language mapping used for one evaluation.
///
/// Callers rebuild the registry from scratch before every evaluation; a
/// failed build returns an error without leaving a partial mapping behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRegistry {
    languages: BTreeMap<String, LanguageSet>,
}

impl LanguageRegistry {
    /// Build the registry from `(name, definition)` pairs.
    ///
    /// Definitions are whitespace-delimited strings validated against the
    /// alphabet. A definition whose trimmed whole text is `ε` or `lambda`
    /// denotes the singleton `{ε}`; a blank definition denotes the empty
    /// set — these are distinct values.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidAlphabetSymbol`] for the first
    /// candidate string that does not segment into alphabet symbols; the
    /// whole batch fails.
    ///
    /// # Examples
    /// ```
    /// use lang_algebra::{Alphabet, LanguageRegistry};
    /// let sigma = Alphabet::parse("a b");
    /// let registry = LanguageRegistry::build([("L1", "a ab"), ("L2", "ε")], &sigma)?;
    /// assert!(registry.get("L2").is_some_and(|l| l.contains("")));
    /// # Ok::<(), lang_algebra::EngineError>(())
    /// ```
    pub fn build<'a, I>(definitions: I, alphabet: &Alphabet) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut languages = BTreeMap::new();
        for (name, raw) in definitions {
            let language = build_language(name, raw, alphabet)?;
            languages.insert(name.to_owned(), language);
        }
        log::debug!("registry built with {} language(s)", languages.len());
        Ok(Self { languages })
    }

    /// Look up a language by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LanguageSet> {
        self.languages.get(name)
    }

    /// Whether `name` is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.languages.contains_key(name)
    }

    /// Number of defined languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// True when no languages are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Validate one raw definition into a language set.
fn build_language(name: &str, raw: &str, alphabet: &Alphabet) -> Result<LanguageSet, EngineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(LanguageSet::new());
    }
    if EPSILON_LITERALS.contains(&trimmed) {
        return Ok(ops::epsilon());
    }
    let mut language = LanguageSet::new();
    for candidate in trimmed.split_whitespace() {
        if !alphabet.matches(candidate) {
            return Err(EngineError::InvalidAlphabetSymbol {
                language: name.to_owned(),
                offending: candidate.to_owned(),
            });
        }
        language.insert(candidate.to_owned());
    }
    Ok(language)
}

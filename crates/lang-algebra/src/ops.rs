//! Pure set operations over finite languages.
//!
//! Every function here is total: the unbounded operations (complement and
//! the closures) are taken relative to an explicit bound supplied by the
//! caller, so no computation in this module can diverge.

use std::collections::BTreeSet;

use crate::alphabet::Alphabet;
use crate::limits::ClosureLimit;

/// A finite language: a set of strings with deterministic iteration order.
pub type LanguageSet = BTreeSet<String>;

/// The language containing only the empty string, `{ε}`.
#[must_use]
pub fn epsilon() -> LanguageSet {
    std::iter::once(String::new()).collect()
}

/// `A ∪ B`.
#[must_use]
pub fn union(a: &LanguageSet, b: &LanguageSet) -> LanguageSet {
    a.union(b).cloned().collect()
}

/// `A ∩ B`.
#[must_use]
pub fn intersect(a: &LanguageSet, b: &LanguageSet) -> LanguageSet {
    a.intersection(b).cloned().collect()
}

/// `A \ B`.
#[must_use]
pub fn difference(a: &LanguageSet, b: &LanguageSet) -> LanguageSet {
    a.difference(b).cloned().collect()
}

/// `(A \ B) ∪ (B \ A)`.
#[must_use]
pub fn symmetric_difference(a: &LanguageSet, b: &LanguageSet) -> LanguageSet {
    a.symmetric_difference(b).cloned().collect()
}

/// `{ ab : a ∈ A, b ∈ B }`.
///
/// The empty set annihilates (`A • ∅ = ∅`) while `{ε}` acts as identity.
#[must_use]
pub fn concatenate(a: &LanguageSet, b: &LanguageSet) -> LanguageSet {
    let mut out = LanguageSet::new();
    for left in a {
        for right in b {
            out.insert(format!("{left}{right}"));
        }
    }
    out
}

/// Every concatenation of at most `max_len` alphabet symbols, ε included.
///
/// This is the bounded universe `Σ^{≤max_len} ∪ {ε}` that stands in for the
/// infinite `Σ*` when taking a complement. An empty alphabet yields the
/// empty set rather than `{ε}`: with no symbols there is no universe to
/// complement against.
#[must_use]
pub fn universe(alphabet: &Alphabet, max_len: usize) -> LanguageSet {
    if alphabet.is_empty() {
        return LanguageSet::new();
    }
    let symbols: LanguageSet = alphabet.symbols().map(str::to_owned).collect();
    let mut result = epsilon();
    let mut power = epsilon();
    for _ in 0..max_len {
        power = concatenate(&power, &symbols);
        result.extend(power.iter().cloned());
    }
    result
}

/// Bounded-universe complement: `(Σ^{≤max_len} ∪ {ε}) \ A`.
#[must_use]
pub fn complement(a: &LanguageSet, alphabet: &Alphabet, max_len: usize) -> LanguageSet {
    difference(&universe(alphabet, max_len), a)
}

/// `{ε} ∪ A ∪ A² ∪ … ∪ A^limit`.
#[must_use]
pub fn kleene_star(a: &LanguageSet, limit: ClosureLimit) -> LanguageSet {
    let mut result = epsilon();
    accumulate_powers(&mut result, a, limit.get());
    result
}

/// `A ∪ A² ∪ … ∪ A^limit`; the empty set when `limit` is zero.
///
/// ε only appears in the result when `A` itself contains it.
#[must_use]
pub fn positive_closure(a: &LanguageSet, limit: ClosureLimit) -> LanguageSet {
    let mut result = LanguageSet::new();
    accumulate_powers(&mut result, a, limit.get());
    result
}

/// Union successive powers `A¹ … A^limit` into `result`.
fn accumulate_powers(result: &mut LanguageSet, a: &LanguageSet, limit: u32) {
    let mut power = epsilon();
    for _ in 0..limit {
        power = concatenate(&power, a);
        result.extend(power.iter().cloned());
    }
}

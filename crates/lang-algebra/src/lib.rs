//! An expression engine for the algebra of finite languages.
//!
//! Formulas combine named languages — finite sets of strings over a
//! user-defined alphabet — with the regular-language operators: union `U`,
//! intersection `∩`, difference `-`, symmetric difference `Δ`,
//! concatenation `•`, and the postfix complement `ᶜ`, Kleene star `*` and
//! positive closure `+`.
//!
//! The pipeline is: declare an [`Alphabet`], build a [`LanguageRegistry`]
//! from raw definitions, then hand a formula to [`evaluate_formula`].
//! Complement is taken relative to the bounded universe `Σ^{≤4}` and the
//! closure operators union at most [`ClosureLimit::MAX`] powers, so every
//! evaluation is finite. Each evaluation is pure: the registry is built
//! fresh per call and a failure never leaves partial state behind.
//!
//! ```
//! use lang_algebra::{Alphabet, ClosureLimit, LanguageRegistry, evaluate_formula, render_set};
//!
//! let sigma = Alphabet::parse("a b");
//! let registry = LanguageRegistry::build([("L1", "a"), ("L2", "a b")], &sigma)?;
//! let result = evaluate_formula("(L1 U L2) • L1", &registry, &sigma, ClosureLimit::DEFAULT)?;
//! assert_eq!(render_set(&result), "{aa, ba}");
//! # Ok::<(), lang_algebra::EngineError>(())
//! ```

mod alphabet;
mod display;
mod errors;
mod formula;
mod language;
mod limits;
pub mod ops;

pub use alphabet::Alphabet;
pub use display::render_set;
pub use errors::{EngineError, ParenFault};
pub use formula::{Arity, RpnItem, SetOp, Token, evaluate_formula, evaluate_rpn, parse, tokenize};
pub use language::LanguageRegistry;
pub use limits::{ClosureLimit, UNIVERSE_LIMIT};
pub use ops::LanguageSet;

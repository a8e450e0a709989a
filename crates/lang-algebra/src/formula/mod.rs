//! Formula tokenization, parsing and evaluation.

mod evaluator;
mod lexer;
mod parser;

pub use evaluator::evaluate_rpn;
pub use lexer::{Token, tokenize};
pub use parser::{Arity, RpnItem, SetOp, parse};

use crate::alphabet::Alphabet;
use crate::errors::EngineError;
use crate::language::LanguageRegistry;
use crate::limits::ClosureLimit;
use crate::ops::LanguageSet;

/// Evaluate a formula against a registry in one pass.
///
/// Tokenizes, converts to postfix order and executes. A blank formula is
/// the defined shortcut for the empty set, not an error.
///
/// # Errors
/// Propagates any [`EngineError`] raised by the tokenizer, parser or
/// evaluator; the inputs are left untouched either way.
///
/// # Examples
/// ```
/// use lang_algebra::{Alphabet, ClosureLimit, LanguageRegistry, evaluate_formula};
///
/// let sigma = Alphabet::parse("a b");
/// let registry = LanguageRegistry::build([("L1", "a ab"), ("L2", "b")], &sigma)?;
/// let result = evaluate_formula("L1 • L2", &registry, &sigma, ClosureLimit::DEFAULT)?;
/// assert!(result.contains("ab") && result.contains("abb"));
/// # Ok::<(), lang_algebra::EngineError>(())
/// ```
pub fn evaluate_formula(
    formula: &str,
    registry: &LanguageRegistry,
    alphabet: &Alphabet,
    limit: ClosureLimit,
) -> Result<LanguageSet, EngineError> {
    let tokens = tokenize(formula)?;
    let rpn = parse(&tokens)?;
    evaluate_rpn(&rpn, registry, alphabet, limit)
}

//! Error types shared by the expression-engine modules.

use std::fmt;
use thiserror::Error;

use crate::formula::SetOp;

/// Which way a formula's parentheses failed to balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenFault {
    /// A `)` appeared with no matching `(` still open.
    ExtraClose,
    /// A `(` was never closed before the formula ended.
    UnclosedOpen,
}

impl ParenFault {
    /// Stable fragment used in error messages.
    ///
    /// # Examples
    /// ```
    /// use lang_algebra::ParenFault;
    /// assert_eq!(ParenFault::ExtraClose.as_str(), "extra ')'");
    /// assert_eq!(ParenFault::UnclosedOpen.as_str(), "unclosed '('");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExtraClose => "extra ')'",
            Self::UnclosedOpen => "unclosed '('",
        }
    }
}

impl fmt::Display for ParenFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced while building languages or evaluating formulas.
///
/// Every variant is recoverable and scoped to one evaluation: a failure
/// leaves previously built alphabets and registries untouched, and the next
/// evaluation starts clean.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A language definition contains text that cannot be segmented into
    /// alphabet symbols.
    #[error("language {language}: `{offending}` is not formed from alphabet symbols")]
    InvalidAlphabetSymbol {
        /// Name of the language whose definition failed validation.
        language: String,
        /// The candidate string that did not segment.
        offending: String,
    },
    /// A formula referenced a language name absent from the registry.
    #[error("language {0} has not been defined")]
    UndefinedLanguage(String),
    /// Parentheses in the formula did not balance.
    #[error("unbalanced parentheses: {0}")]
    UnbalancedParentheses(ParenFault),
    /// An operator found too few operands on the value stack.
    #[error("operator `{0}` is missing an operand")]
    MissingOperand(SetOp),
    /// Evaluation finished with other than exactly one value remaining.
    #[error("formula did not reduce to a single language")]
    IncompleteFormula,
    /// The formula contains a character outside the token vocabulary.
    #[error("unrecognised character `{0}` in formula")]
    MalformedToken(char),
    /// The closure limit input was not a non-negative integer.
    #[error("closure limit must be a non-negative integer, got `{0}`")]
    InvalidClosureLimit(String),
}

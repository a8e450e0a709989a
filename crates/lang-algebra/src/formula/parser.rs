//! Operator table and shunting-yard conversion to postfix order.

use std::fmt;

use crate::errors::{EngineError, ParenFault};

use super::lexer::Token;

/// Operand count an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Postfix, one operand (`ᶜ`, `*`, `+`).
    Unary,
    /// Infix, two operands.
    Binary,
}

/// A set-algebra operator.
///
/// All operators are left-associative. Precedence, highest first: the
/// postfix trio `ᶜ * +`, then concatenation `•`, intersection `∩`, and the
/// additive group `U - Δ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    /// `U`: all strings in either operand.
    Union,
    /// `∩`: strings in both operands.
    Intersection,
    /// `-`: strings in the left operand only.
    Difference,
    /// `Δ`: strings in exactly one operand.
    SymmetricDifference,
    /// `•`: pairwise string concatenation.
    Concatenation,
    /// `ᶜ` (postfix): bounded-universe complement.
    Complement,
    /// `*` (postfix): bounded Kleene star.
    KleeneStar,
    /// `+` (postfix): bounded positive closure.
    PositiveClosure,
}

impl SetOp {
    /// Map a formula character to its operator.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::Union),
            '∩' => Some(Self::Intersection),
            '-' => Some(Self::Difference),
            'Δ' => Some(Self::SymmetricDifference),
            '•' => Some(Self::Concatenation),
            'ᶜ' => Some(Self::Complement),
            '*' => Some(Self::KleeneStar),
            '+' => Some(Self::PositiveClosure),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Union => 'U',
            Self::Intersection => '∩',
            Self::Difference => '-',
            Self::SymmetricDifference => 'Δ',
            Self::Concatenation => '•',
            Self::Complement => 'ᶜ',
            Self::KleeneStar => '*',
            Self::PositiveClosure => '+',
        }
    }

    /// Binding strength; larger binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Complement | Self::KleeneStar | Self::PositiveClosure => 4,
            Self::Concatenation => 3,
            Self::Intersection => 2,
            Self::Union | Self::Difference | Self::SymmetricDifference => 1,
        }
    }

    /// How many operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Complement | Self::KleeneStar | Self::PositiveClosure => Arity::Unary,
            Self::Union
            | Self::Intersection
            | Self::Difference
            | Self::SymmetricDifference
            | Self::Concatenation => Arity::Binary,
        }
    }
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One element of a parsed formula in postfix order.
///
/// Language references stay unresolved names so the same parsed formula can
/// be evaluated against different registries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpnItem {
    /// A language reference awaiting resolution.
    Language(String),
    /// An operator to apply.
    Op(SetOp),
}

/// What the shunting-yard operator stack may hold.
enum StackEntry {
    Op(SetOp),
    OpenParen,
}

/// Convert a token stream into postfix order.
///
/// The classic shunting-yard loop. Popping while the stack top's precedence
/// is `>=` the incoming operator's encodes left-associativity, and postfix
/// unary operators travel the same path as binary ones — arity only matters
/// at evaluation time. An empty token stream produces an empty sequence,
/// which evaluates to the empty set.
///
/// # Errors
/// Returns [`EngineError::UnbalancedParentheses`] when a `)` has no open
/// partner or a `(` is never closed.
pub fn parse(tokens: &[Token]) -> Result<Vec<RpnItem>, EngineError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token {
            Token::Language(name) => output.push(RpnItem::Language(name.clone())),
            Token::Op(op) => {
                while let Some(&StackEntry::Op(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(RpnItem::Op(top));
                    stack.pop();
                }
                stack.push(StackEntry::Op(*op));
            }
            Token::OpenParen => stack.push(StackEntry::OpenParen),
            Token::CloseParen => loop {
                match stack.pop() {
                    Some(StackEntry::Op(top)) => output.push(RpnItem::Op(top)),
                    Some(StackEntry::OpenParen) => break,
                    None => {
                        return Err(EngineError::UnbalancedParentheses(ParenFault::ExtraClose));
                    }
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Op(op) => output.push(RpnItem::Op(op)),
            StackEntry::OpenParen => {
                return Err(EngineError::UnbalancedParentheses(ParenFault::UnclosedOpen));
            }
        }
    }

    Ok(output)
}

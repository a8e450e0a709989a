//! Postfix evaluation against a language registry.

use crate::alphabet::Alphabet;
use crate::errors::EngineError;
use crate::language::LanguageRegistry;
use crate::limits::{ClosureLimit, UNIVERSE_LIMIT};
use crate::ops::{self, LanguageSet};

use super::parser::{Arity, RpnItem, SetOp};

/// Execute a postfix sequence, resolving language references against the
/// registry as they are pushed.
///
/// An empty sequence is the defined shortcut for the empty set.
///
/// # Errors
/// Returns [`EngineError::UndefinedLanguage`] for unknown references,
/// [`EngineError::MissingOperand`] when an operator underflows the value
/// stack, and [`EngineError::IncompleteFormula`] when the walk leaves other
/// than exactly one value behind.
pub fn evaluate_rpn(
    rpn: &[RpnItem],
    registry: &LanguageRegistry,
    alphabet: &Alphabet,
    limit: ClosureLimit,
) -> Result<LanguageSet, EngineError> {
    if rpn.is_empty() {
        return Ok(LanguageSet::new());
    }

    let mut values: Vec<LanguageSet> = Vec::new();
    for item in rpn {
        match item {
            RpnItem::Language(name) => {
                let language = registry
                    .get(name)
                    .ok_or_else(|| EngineError::UndefinedLanguage(name.clone()))?;
                values.push(language.clone());
            }
            RpnItem::Op(op) => {
                let result = match op.arity() {
                    Arity::Unary => {
                        let operand = pop_operand(&mut values, *op)?;
                        apply_unary(*op, &operand, alphabet, limit)
                    }
                    Arity::Binary => {
                        let right = pop_operand(&mut values, *op)?;
                        let left = pop_operand(&mut values, *op)?;
                        apply_binary(*op, &left, &right)
                    }
                };
                values.push(result);
            }
        }
    }

    let result = values.pop().ok_or(EngineError::IncompleteFormula)?;
    if !values.is_empty() {
        return Err(EngineError::IncompleteFormula);
    }
    log::debug!("formula evaluated to {} string(s)", result.len());
    Ok(result)
}

fn pop_operand(values: &mut Vec<LanguageSet>, op: SetOp) -> Result<LanguageSet, EngineError> {
    values.pop().ok_or(EngineError::MissingOperand(op))
}

fn apply_unary(op: SetOp, operand: &LanguageSet, alphabet: &Alphabet, limit: ClosureLimit) -> LanguageSet {
    match op {
        SetOp::Complement => ops::complement(operand, alphabet, UNIVERSE_LIMIT),
        SetOp::KleeneStar => ops::kleene_star(operand, limit),
        SetOp::PositiveClosure => ops::positive_closure(operand, limit),
        _ => unreachable!("`{op}` is not a postfix operator"),
    }
}

fn apply_binary(op: SetOp, left: &LanguageSet, right: &LanguageSet) -> LanguageSet {
    match op {
        SetOp::Union => ops::union(left, right),
        SetOp::Intersection => ops::intersect(left, right),
        SetOp::Difference => ops::difference(left, right),
        SetOp::SymmetricDifference => ops::symmetric_difference(left, right),
        SetOp::Concatenation => ops::concatenate(left, right),
        _ => unreachable!("`{op}` is not an infix operator"),
    }
}

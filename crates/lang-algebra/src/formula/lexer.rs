//! Formula lexer converting raw text into language, operator and
//! parenthesis tokens.

use crate::errors::EngineError;

use super::parser::SetOp;

/// One lexical unit of a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A reference to a named language such as `L1`.
    Language(String),
    /// A unary or binary set operator.
    Op(SetOp),
    /// `(`.
    OpenParen,
    /// `)`.
    CloseParen,
}

/// Split a formula into tokens, discarding whitespace.
///
/// Language references are `L` followed by one or more digits; every other
/// non-whitespace character must be an operator or parenthesis.
///
/// # Errors
/// Returns [`EngineError::MalformedToken`] for any character outside the
/// formula vocabulary, including a lone `L` with no digits. Unknown input
/// is surfaced rather than silently dropped.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, EngineError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        match c {
            'L' => {
                let mut name = String::from('L');
                while let Some(digit) = chars.peek().copied() {
                    if digit.is_ascii_digit() {
                        name.push(digit);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if name.len() == 1 {
                    return Err(EngineError::MalformedToken('L'));
                }
                tokens.push(Token::Language(name));
            }
            '(' => tokens.push(Token::OpenParen),
            ')' => tokens.push(Token::CloseParen),
            other => match SetOp::from_symbol(other) {
                Some(op) => tokens.push(Token::Op(op)),
                None => return Err(EngineError::MalformedToken(other)),
            },
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn tokenizes_references_operators_and_parens() {
        let tokens = tokenize("(L1 U L12) • L2ᶜ");
        assert_eq!(
            tokens,
            Ok(vec![
                Token::OpenParen,
                Token::Language("L1".to_owned()),
                Token::Op(SetOp::Union),
                Token::Language("L12".to_owned()),
                Token::CloseParen,
                Token::Op(SetOp::Concatenation),
                Token::Language("L2".to_owned()),
                Token::Op(SetOp::Complement),
            ])
        );
    }

    #[rstest]
    #[case('U', SetOp::Union)]
    #[case('∩', SetOp::Intersection)]
    #[case('-', SetOp::Difference)]
    #[case('Δ', SetOp::SymmetricDifference)]
    #[case('•', SetOp::Concatenation)]
    #[case('ᶜ', SetOp::Complement)]
    #[case('*', SetOp::KleeneStar)]
    #[case('+', SetOp::PositiveClosure)]
    fn recognises_every_operator_symbol(#[case] symbol: char, #[case] expected: SetOp) {
        assert_eq!(tokenize(&symbol.to_string()), Ok(vec![Token::Op(expected)]));
    }

    #[test]
    fn whitespace_separates_but_never_joins() {
        let tokens = tokenize("  L1   L2  ");
        assert_eq!(
            tokens,
            Ok(vec![
                Token::Language("L1".to_owned()),
                Token::Language("L2".to_owned()),
            ])
        );
    }

    #[test]
    fn empty_formula_yields_no_tokens() {
        assert_eq!(tokenize(""), Ok(Vec::new()));
        assert_eq!(tokenize("   "), Ok(Vec::new()));
    }

    #[test]
    fn unknown_characters_are_surfaced_not_dropped() {
        assert_eq!(tokenize("L1 ⊕ L2"), Err(EngineError::MalformedToken('⊕')));
    }

    #[test]
    fn bare_l_without_digits_is_malformed() {
        assert_eq!(tokenize("L U L1"), Err(EngineError::MalformedToken('L')));
    }
}

//! Behavioural coverage for the full formula pipeline.

use std::collections::BTreeSet;

use rstest::rstest;

use lang_algebra::{
    Alphabet, ClosureLimit, EngineError, LanguageRegistry, ParenFault, evaluate_formula, ops,
    render_set,
};

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn registry(definitions: &[(&str, &str)], alphabet: &Alphabet) -> LanguageRegistry {
    match LanguageRegistry::build(definitions.iter().copied(), alphabet) {
        Ok(registry) => registry,
        Err(err) => panic!("test registry should build: {err}"),
    }
}

fn eval(formula: &str, definitions: &[(&str, &str)], alphabet_raw: &str) -> Result<BTreeSet<String>, EngineError> {
    let sigma = Alphabet::parse(alphabet_raw);
    let registry = registry(definitions, &sigma);
    evaluate_formula(formula, &registry, &sigma, ClosureLimit::new(2))
}

#[test]
fn intersection_binds_tighter_than_union() {
    // L1 U (L2 ∩ L3), not (L1 U L2) ∩ L3.
    let result = eval(
        "L1 U L2 ∩ L3",
        &[("L1", "a"), ("L2", "b"), ("L3", "ab b")],
        "a b",
    );
    assert_eq!(result, Ok(set(&["a", "b"])));
}

#[test]
fn difference_is_left_associative() {
    // (L1 - L2) - L3; the right-associative reading would keep `b`.
    let result = eval(
        "L1 - L2 - L3",
        &[("L1", "a b ab"), ("L2", "a"), ("L3", "b")],
        "a b",
    );
    assert_eq!(result, Ok(set(&["ab"])));
}

#[test]
fn complement_binds_tighter_than_concatenation() {
    let sigma = Alphabet::parse("a b");
    let registry = registry(&[("L1", "a"), ("L2", "b")], &sigma);
    let result = evaluate_formula("L1ᶜ • L2", &registry, &sigma, ClosureLimit::DEFAULT);
    let expected = ops::concatenate(
        &ops::complement(&set(&["a"]), &sigma, lang_algebra::UNIVERSE_LIMIT),
        &set(&["b"]),
    );
    assert_eq!(result, Ok(expected));
}

#[test]
fn concatenation_scenario_from_two_languages() {
    let result = eval("L1 • L2", &[("L1", "a ab"), ("L2", "b")], "a b");
    assert_eq!(result, Ok(set(&["ab", "abb"])));
}

#[test]
fn closure_scenarios_respect_the_limit() {
    let definitions = [("L1", "a")];
    assert_eq!(eval("L1*", &definitions, "a b"), Ok(set(&["", "a", "aa"])));
    assert_eq!(eval("L1+", &definitions, "a b"), Ok(set(&["a", "aa"])));
}

#[test]
fn epsilon_language_over_an_empty_alphabet() {
    let result = eval("L1", &[("L1", "ε")], "");
    assert_eq!(result, Ok(set(&[""])));
}

#[test]
fn extra_closing_paren_is_reported() {
    let result = eval("L1 U )", &[("L1", "a")], "a");
    assert_eq!(
        result,
        Err(EngineError::UnbalancedParentheses(ParenFault::ExtraClose))
    );
}

#[test]
fn unclosed_opening_paren_is_reported() {
    let result = eval("( L1 U L1", &[("L1", "a")], "a");
    assert_eq!(
        result,
        Err(EngineError::UnbalancedParentheses(ParenFault::UnclosedOpen))
    );
}

#[test]
fn adjacent_operands_without_an_operator_fail() {
    let result = eval("L1 L2", &[("L1", "a"), ("L2", "b")], "a b");
    assert_eq!(result, Err(EngineError::IncompleteFormula));
}

#[test]
fn undefined_language_is_reported_by_name() {
    let result = eval("L1 U L9", &[("L1", "a")], "a");
    assert_eq!(result, Err(EngineError::UndefinedLanguage("L9".to_owned())));
}

#[test]
fn unknown_characters_fail_tokenization() {
    let result = eval("L1 ⊕ L1", &[("L1", "a")], "a");
    assert_eq!(result, Err(EngineError::MalformedToken('⊕')));
}

#[test]
fn blank_formula_is_the_empty_set() {
    assert_eq!(eval("", &[("L1", "a")], "a"), Ok(BTreeSet::new()));
    assert_eq!(eval("   ", &[], "a"), Ok(BTreeSet::new()));
}

#[test]
fn invalid_definition_fails_before_evaluation() {
    let sigma = Alphabet::parse("a b");
    let result = LanguageRegistry::build([("L1", "a"), ("L2", "cb")], &sigma);
    assert_eq!(
        result,
        Err(EngineError::InvalidAlphabetSymbol {
            language: "L2".to_owned(),
            offending: "cb".to_owned(),
        })
    );
}

#[rstest]
#[case("L1 U L1", &["a", "ab"])]
#[case("L1 ∩ L1", &["a", "ab"])]
#[case("(L1 Δ L1) U L1", &["a", "ab"])]
fn identities_hold_through_the_pipeline(#[case] formula: &str, #[case] expected: &[&str]) {
    let result = eval(formula, &[("L1", "a ab")], "a b");
    assert_eq!(result, Ok(set(expected)));
}

#[test]
fn rendered_results_use_shortlex_order_and_glyphs() {
    let result = eval("L1*", &[("L1", "b a")], "a b");
    let rendered = match result {
        Ok(result) => render_set(&result),
        Err(err) => panic!("closure should evaluate: {err}"),
    };
    assert_eq!(rendered, "{ε, a, b, aa, ab, ba, bb}");
}

#[test]
fn reparsing_is_not_needed_to_switch_registries() {
    // The same parsed formula evaluates against two different registries.
    let sigma = Alphabet::parse("a b");
    let tokens = match lang_algebra::tokenize("L1 U L2") {
        Ok(tokens) => tokens,
        Err(err) => panic!("formula should tokenize: {err}"),
    };
    let rpn = match lang_algebra::parse(&tokens) {
        Ok(rpn) => rpn,
        Err(err) => panic!("formula should parse: {err}"),
    };
    let first = registry(&[("L1", "a"), ("L2", "b")], &sigma);
    let second = registry(&[("L1", "ab"), ("L2", "b")], &sigma);
    assert_eq!(
        lang_algebra::evaluate_rpn(&rpn, &first, &sigma, ClosureLimit::DEFAULT),
        Ok(set(&["a", "b"]))
    );
    assert_eq!(
        lang_algebra::evaluate_rpn(&rpn, &second, &sigma, ClosureLimit::DEFAULT),
        Ok(set(&["ab", "b"]))
    );
}

//! Public API scenarios: parsing, printing and realization through the crate facade

use logica::logic::ast::Formula;
use logica::logic::{FormulaError, Token};
use logica::{
    build_dictionary_from_text, formula_to_string, parse_formula, realize_natural_language,
    Dictionary,
};
use rstest::rstest;

fn rain() -> Dictionary {
    [("A", "está chovendo"), ("B", "levarei guarda-chuva")]
        .into_iter()
        .collect()
}

#[test]
fn test_ascii_implication_round_trip() {
    let formula = parse_formula("p -> q").unwrap();
    assert_eq!(
        formula,
        Formula::implies(Formula::atom("P"), Formula::atom("Q"))
    );
    insta::assert_snapshot!(formula_to_string(&formula), @"P → Q");
}

#[test]
fn test_negated_conjunction_prints_with_parens() {
    let formula = Formula::not(Formula::and(Formula::atom("A"), Formula::atom("B")));
    insta::assert_snapshot!(formula_to_string(&formula), @"¬(A ∧ B)");
}

#[test]
fn test_conditional_realization() {
    let formula = Formula::implies(Formula::atom("A"), Formula::atom("B"));
    insta::assert_snapshot!(
        realize_natural_language(&formula, &rain()),
        @"Se está chovendo, então levarei guarda-chuva"
    );
}

#[test]
fn test_exclusive_or_realization() {
    let formula = Formula::xor(Formula::atom("A"), Formula::atom("B"));
    insta::assert_snapshot!(
        realize_natural_language(&formula, &rain()),
        @"está chovendo ou levarei guarda-chuva (mas não ambos)"
    );
}

#[test]
fn test_dictionary_from_conditional_sentence() {
    let dict = build_dictionary_from_text("Se está chovendo, então levarei guarda-chuva.");
    assert_eq!(dict, rain());
}

#[test]
fn test_realization_of_a_larger_formula() {
    let formula = parse_formula("(A ∧ ¬B) → C ∨ A").unwrap();
    let mut dict = rain();
    dict.insert("C", "a rua está molhada");
    insta::assert_snapshot!(
        realize_natural_language(&formula, &dict),
        @"Se (está chovendo e Não é verdade que levarei guarda-chuva), então (a rua está molhada ou está chovendo)"
    );
}

#[rstest]
#[case("A ∨ B ∧ C", "A ∨ B ∧ C")]
#[case("(A ∨ B) ∧ C", "(A ∨ B) ∧ C")]
#[case("((A))", "A")]
#[case("a & b | c", "A ∧ B ∨ C")]
#[case("A <=> B implies C", "A ↔ B → C")]
#[case("A → (B → C)", "A → (B → C)")]
#[case("(A → B) → C", "A → B → C")]
#[case("~!A", "¬(¬A)")]
#[case("¬(A)", "¬A")]
#[case("A ^ B", "A ∧ B")]
fn test_canonical_form(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(formula_to_string(&parse_formula(source).unwrap()), expected);
}

#[rstest]
#[case("", FormulaError::UnexpectedEnd)]
#[case("A ∧", FormulaError::UnexpectedEnd)]
#[case("¬", FormulaError::UnexpectedEnd)]
#[case("(A ∨ B", FormulaError::UnclosedParen { index: 4 })]
#[case("((A)", FormulaError::UnclosedParen { index: 4 })]
#[case("→ A", FormulaError::UnexpectedToken { token: Token::Imp, index: 0 })]
#[case("A ∧ )", FormulaError::UnexpectedToken { token: Token::RParen, index: 2 })]
#[case("()", FormulaError::UnexpectedToken { token: Token::RParen, index: 1 })]
#[case("A B", FormulaError::TrailingTokens { index: 1 })]
#[case("(A) (B)", FormulaError::TrailingTokens { index: 3 })]
#[case("A = B", FormulaError::InvalidSymbol { symbol: '=', offset: 2 })]
#[case("A ∧ é", FormulaError::InvalidSymbol { symbol: 'é', offset: 4 })]
fn test_parse_errors(#[case] source: &str, #[case] expected: FormulaError) {
    assert_eq!(parse_formula(source), Err(expected));
}

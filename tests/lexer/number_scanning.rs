use formula_syntax::lexer::{TokenKind, tokenize};
use pretty_assertions::assert_eq;

fn lexemes(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input)
        .into_iter()
        .map(|token| (token.kind, token.lexeme))
        .collect()
}

fn single_number(input: &str) {
    assert_eq!(
        lexemes(input),
        vec![(TokenKind::Number, input.to_string())],
        "expected `{input}` to scan as one number"
    );
}

#[test]
fn mantissa_forms_scan_as_single_numbers() {
    for input in ["0", "42", "3.25", "5.", ".5", "007", "10.000"] {
        single_number(input);
    }
}

#[test]
fn exponent_forms_scan_as_single_numbers() {
    for input in ["2e5", "2E5", "1.5e+10", "3e-2", ".5e3", "5.e1"] {
        single_number(input);
    }
}

#[test]
fn exponent_without_digits_is_left_behind() {
    assert_eq!(
        lexemes("2e"),
        vec![
            (TokenKind::Number, "2".to_string()),
            (TokenKind::Unrecognized, "e".to_string()),
        ]
    );
    assert_eq!(
        lexemes("2e+"),
        vec![
            (TokenKind::Number, "2".to_string()),
            (TokenKind::Unrecognized, "e".to_string()),
            (
                TokenKind::Operator(formula_syntax::lexer::OperatorKind::Plus),
                "+".to_string()
            ),
        ]
    );
}

#[test]
fn exponent_letter_followed_by_digits_elsewhere_is_a_variable() {
    assert_eq!(
        lexemes(".e5"),
        vec![
            (TokenKind::Unrecognized, ".".to_string()),
            (TokenKind::Variable, "e5".to_string()),
        ]
    );
}

#[test]
fn second_decimal_point_starts_a_new_number() {
    assert_eq!(
        lexemes("1.2.3"),
        vec![
            (TokenKind::Number, "1.2".to_string()),
            (TokenKind::Number, ".3".to_string()),
        ]
    );
}

#[test]
fn number_stops_before_trailing_letters() {
    assert_eq!(
        lexemes("2e5x"),
        vec![
            (TokenKind::Number, "2e5".to_string()),
            (TokenKind::Unrecognized, "x".to_string()),
        ]
    );
}

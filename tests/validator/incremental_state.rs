use formula_syntax::lexer::tokenize;
use formula_syntax::validator::{SyntaxRule, TokenClass, Validator};

#[test]
fn observe_reports_classes_and_tracks_parenthesis_counts() {
    let tokens = tokenize("(x1 + 2)");
    let mut validator = Validator::new();

    let classes: Vec<TokenClass> = tokens
        .iter()
        .map(|token| validator.observe(token).expect("token should be accepted"))
        .collect();

    assert_eq!(
        classes,
        vec![
            TokenClass::OpenParen,
            TokenClass::Variable,
            TokenClass::Operator,
            TokenClass::Number,
            TokenClass::CloseParen,
        ]
    );
    assert_eq!(validator.seen(), 5);
    assert_eq!(validator.paren_counts(), (1, 1));
    assert!(validator.finish().is_ok());
}

#[test]
fn finish_without_tokens_reports_one_token_rule() {
    let error = Validator::new()
        .finish()
        .expect_err("empty sequence should be rejected");
    assert_eq!(error.rule(), Some(SyntaxRule::OneToken));
    assert_eq!(error.index(), None);
    assert_eq!(error.found(), None);
}

#[test]
fn rejected_token_is_not_counted() {
    let tokens = tokenize("1 +");
    let mut validator = Validator::new();
    validator.observe(&tokens[0]).expect("operand is accepted");
    validator.observe(&tokens[1]).expect("operator is accepted");
    assert_eq!(validator.seen(), 2);

    let extra = tokenize("*");
    let error = validator
        .observe(&extra[0])
        .expect_err("operator after operator should be rejected");
    assert_eq!(error.rule(), Some(SyntaxRule::ParenthesisOperatorFollowing));
    assert_eq!(error.index(), Some(2));
    assert_eq!(validator.seen(), 2);
}

#[test]
fn token_class_predicates_group_operands() {
    assert!(TokenClass::Number.is_operand());
    assert!(TokenClass::Variable.is_operand());
    assert!(!TokenClass::Operator.is_operand());
    assert!(TokenClass::OpenParen.opens_operand());
    assert!(!TokenClass::CloseParen.opens_operand());
    assert!(TokenClass::CloseParen.closes_operand());
    assert!(!TokenClass::Invalid.is_valid());
}

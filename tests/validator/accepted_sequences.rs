use formula_syntax::lexer::tokenize;
use formula_syntax::validator::validate;

fn assert_accepted(input: &str) {
    if let Err(error) = validate(&tokenize(input)) {
        panic!("expected `{input}` to be accepted, got: {error}");
    }
}

#[test]
fn single_operands_are_accepted() {
    for input in ["1", "0.5", ".5", "5.", "2e5", "x1", "AB12", "(x1)", "((7))"] {
        assert_accepted(input);
    }
}

#[test]
fn nested_parentheses_are_accepted() {
    assert_accepted("(((9 - 3)))");
    assert_accepted("((1 + 2) * (3 - x4)) / y5");
}

#[test]
fn all_operators_chain_between_operands() {
    assert_accepted("1+2*3/4-5");
    assert_accepted("a1 * (b2 + 3.5e2) / .5");
}

#[test]
fn whitespace_is_insignificant_between_tokens() {
    assert_accepted("  x1\t+\n( 2 )  ");
}

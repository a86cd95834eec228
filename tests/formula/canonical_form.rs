use formula_syntax::Formula;
use formula_syntax::formula::canonical::{canonical_number, canonical_variable};
use pretty_assertions::assert_eq;

fn canonical(input: &str) -> String {
    Formula::new(input)
        .unwrap_or_else(|error| panic!("`{input}` should be valid: {error}"))
        .into_canonical_string()
}

#[test]
fn variables_are_uppercased_and_numbers_normalized() {
    assert_eq!(canonical("x1 + 5.0000"), "X1+5");
    assert_eq!(canonical("x1 + Y1"), "X1+Y1");
    assert_eq!(canonical("aBc12 * 3"), "ABC12*3");
}

#[test]
fn numbers_use_shortest_round_trip_rendering() {
    assert_eq!(canonical("2e5"), "200000");
    assert_eq!(canonical(".5"), "0.5");
    assert_eq!(canonical("5."), "5");
    assert_eq!(canonical("1.50"), "1.5");
    assert_eq!(canonical("3E-2"), "0.03");
    assert_eq!(canonical("007"), "7");
    assert_eq!(canonical("0.1 + 0.2"), "0.1+0.2");
    assert_eq!(canonical("1e-7"), "0.0000001");
    assert_eq!(canonical("1e21"), format!("1{}", "0".repeat(21)));
}

#[test]
fn structural_tokens_are_copied_without_whitespace() {
    assert_eq!(canonical(" ( a1 ) "), "(A1)");
    assert_eq!(canonical("( ( 1 + 2 ) / x3 ) - 4"), "((1+2)/X3)-4");
}

#[test]
fn canonical_string_is_not_seeded_from_raw_input() {
    let formula = Formula::new("x1 + 5.0000").expect("valid formula");
    assert!(!formula.canonical_string().contains("x1"));
    assert!(!formula.canonical_string().contains(' '));
    assert_eq!(formula.to_string(), "X1+5");
}

#[test]
fn canonical_string_is_idempotent() {
    for input in [
        "x1 + 5.0000",
        "(((9 - 3)))",
        "a1 * (b2 + 3.5e2) / .5",
        "1e-7 - 2E+3",
        "0.30000000000000004 * z9",
    ] {
        let first = canonical(input);
        let second = canonical(&first);
        assert_eq!(first, second, "input: {input:?}");
    }
}

#[test]
fn canonical_helpers_render_single_lexemes() {
    assert_eq!(canonical_number("2.50"), Some("2.5".to_string()));
    assert_eq!(canonical_number("1e999"), None);
    assert_eq!(canonical_number("abc"), None);
    assert_eq!(canonical_variable("ab1"), "AB1");
}

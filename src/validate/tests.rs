#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── validate ──────────────────────────────────────────────────

#[test]
fn test_valid_input() {
    let (amount, category) = validate("12.50", "Food").unwrap();
    assert_eq!(amount, dec!(12.50));
    assert_eq!(category, "Food");
}

#[test]
fn test_category_is_trimmed() {
    let (_, category) = validate("3", "  Coffee Shops \t").unwrap();
    assert_eq!(category, "Coffee Shops");
}

#[test]
fn test_category_case_preserved() {
    let (_, category) = validate("3", "fOOd").unwrap();
    assert_eq!(category, "fOOd");
}

#[test]
fn test_amount_whitespace_tolerated() {
    let (amount, _) = validate("  7.25 ", "Food").unwrap();
    assert_eq!(amount, dec!(7.25));
}

#[test]
fn test_integer_amount() {
    let (amount, _) = validate("20", "Transport").unwrap();
    assert_eq!(amount, dec!(20));
}

#[test]
fn test_smallest_positive_amount() {
    let (amount, _) = validate("0.01", "Misc").unwrap();
    assert_eq!(amount, dec!(0.01));
}

#[test]
fn test_zero_amount_rejected() {
    for text in ["0", "0.00", "-0"] {
        assert!(
            matches!(validate(text, "Food"), Err(ExpenseError::InvalidAmount(_))),
            "expected InvalidAmount for {text:?}"
        );
    }
}

#[test]
fn test_negative_amount_rejected() {
    assert_eq!(
        validate("-5", "Food"),
        Err(ExpenseError::InvalidAmount("-5".into()))
    );
}

#[test]
fn test_unparseable_amount_rejected() {
    for text in ["", "   ", "abc", "12abc", "1,000", "$5", "NaN", "inf"] {
        assert!(
            matches!(validate(text, "Food"), Err(ExpenseError::InvalidAmount(_))),
            "expected InvalidAmount for {text:?}"
        );
    }
}

#[test]
fn test_amount_at_digit_limit_accepted() {
    for (text, expected) in [
        ("999999999999999", dec!(999999999999999)),
        ("1234567890.12345", dec!(1234567890.12345)),
        ("0.123456789012345", dec!(0.123456789012345)),
        ("12.5000000000000000", dec!(12.5)),
    ] {
        assert_eq!(validate(text, "Food").unwrap().0, expected);
    }
}

#[test]
fn test_amount_past_digit_limit_rejected() {
    for text in [
        "1234567890.123456789",
        "1234567890123456",
        "12345678901234567.89",
        "79228162514264337593543950335",
    ] {
        assert_eq!(
            validate(text, "Food"),
            Err(ExpenseError::InvalidAmount(text.into())),
            "expected InvalidAmount for {text:?}"
        );
    }
}

#[test]
fn test_blank_category_rejected() {
    for text in ["", " ", "\t\n"] {
        assert_eq!(validate("5", text), Err(ExpenseError::MissingCategory));
    }
}

#[test]
fn test_amount_checked_before_category() {
    assert!(matches!(
        validate("nope", ""),
        Err(ExpenseError::InvalidAmount(_))
    ));
}

// ── normalize_note ────────────────────────────────────────────

#[test]
fn test_note_trimmed() {
    assert_eq!(normalize_note("  with friends "), Some("with friends".into()));
}

#[test]
fn test_blank_note_is_absent() {
    assert_eq!(normalize_note(""), None);
    assert_eq!(normalize_note("   "), None);
}

// ── ExpenseForm ───────────────────────────────────────────────

#[test]
fn test_form_validate() {
    let form = ExpenseForm::new("7.25", " Food ", "  ");
    let valid = form.validate().unwrap();
    assert_eq!(valid.amount, dec!(7.25));
    assert_eq!(valid.category, "Food");
    assert_eq!(valid.note, None);
}

#[test]
fn test_form_clear() {
    let mut form = ExpenseForm::new("1", "a", "b");
    form.clear();
    assert_eq!(form, ExpenseForm::default());
}

#[test]
fn test_validation_errors_flagged() {
    assert!(ExpenseError::MissingCategory.is_validation());
    assert!(ExpenseError::InvalidAmount("x".into()).is_validation());
    assert!(!ExpenseError::StorageIo("x".into()).is_validation());
}

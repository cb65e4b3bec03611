#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── Expense ───────────────────────────────────────────────────

fn make_expense() -> Expense {
    Expense {
        id: 7,
        amount: dec!(12.50),
        category: "Food".into(),
        note: Some("lunch".into()),
        date: "2024-03-10".into(),
    }
}

#[test]
fn test_edited_keeps_date() {
    let expense = make_expense();
    let edited = expense.edited(dec!(99.99), "Travel".into(), None);
    assert_eq!(edited.date, "2024-03-10");
    assert_eq!(edited.amount, dec!(99.99));
    assert_eq!(edited.category, "Travel");
    assert_eq!(edited.note, None);
}

#[test]
fn test_note_or_empty() {
    let mut expense = make_expense();
    assert_eq!(expense.note_or_empty(), "lunch");
    expense.note = None;
    assert_eq!(expense.note_or_empty(), "");
}

// ── Window ────────────────────────────────────────────────────

#[test]
fn test_window_parse() {
    assert_eq!(Window::parse("all"), Some(Window::All));
    assert_eq!(Window::parse("WEEK"), Some(Window::Week));
    assert_eq!(Window::parse(" month "), Some(Window::Month));
    assert_eq!(Window::parse("This Month"), Some(Window::Month));
    assert_eq!(Window::parse("year"), None);
}

#[test]
fn test_window_display_roundtrips_through_parse() {
    for w in Window::all() {
        assert_eq!(Window::parse(&w.to_string()), Some(*w));
    }
}

#[test]
fn test_window_next_cycles() {
    assert_eq!(Window::All.next(), Window::Week);
    assert_eq!(Window::Week.next(), Window::Month);
    assert_eq!(Window::Month.next(), Window::All);
}

#[test]
fn test_window_default_is_all() {
    assert_eq!(Window::default(), Window::All);
}

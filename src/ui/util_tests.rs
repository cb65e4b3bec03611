#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(12.5)), "$12.50");
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_thousands() {
    assert_eq!(format_amount(dec!(1234.5)), "$1,234.50");
    assert_eq!(format_amount(dec!(1234567.891)), "$1,234,567.89");
    assert_eq!(format_amount(dec!(100)), "$100.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-39.75)), "-$39.75");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Food", 10), "Food");
    assert_eq!(truncate("Food", 4), "Food");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Transportation", 6), "Trans…");
}

#[test]
fn test_truncate_edges() {
    assert_eq!(truncate("", 0), "");
    assert_eq!(truncate("abc", 0), "");
    assert_eq!(truncate("abc", 1), "…");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

// ── cursor helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..10 {
        scroll_down(&mut index, &mut scroll, 3, 5);
    }
    assert_eq!((index, scroll), (2, 0));
}

#[test]
fn test_scroll_down_pages() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..4 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!((index, scroll), (4, 2));
}

#[test]
fn test_scroll_up_follows_cursor() {
    let (mut index, mut scroll) = (4, 4);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (3, 3));
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_clamp_cursor_after_shrink() {
    let (mut index, mut scroll) = (7, 5);
    clamp_cursor(&mut index, &mut scroll, 3);
    assert_eq!((index, scroll), (2, 2));

    let (mut index, mut scroll) = (7, 5);
    clamp_cursor(&mut index, &mut scroll, 0);
    assert_eq!((index, scroll), (0, 0));
}

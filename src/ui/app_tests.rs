#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::app::*;
use crate::controller::{Controller, EditState};
use crate::db::{Database, ExpenseStore};
use crate::models::{NewExpense, Window};

fn app_with(records: &[(&str, &str, &str)]) -> App {
    let mut db = Database::open_in_memory().unwrap();
    for (amount, category, date) in records {
        db.create(&NewExpense::new(
            amount.parse().unwrap(),
            category.to_string(),
            None,
            date.to_string(),
        ))
        .unwrap();
    }
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    App::new(Controller::new(db, today).unwrap())
}

fn type_text(app: &mut App, text: &str) {
    app.focused_value_mut().push_str(text);
}

#[test]
fn test_add_through_form() {
    let mut app = app_with(&[]);
    app.start_add();
    assert_eq!(app.input_mode, InputMode::Editing);

    type_text(&mut app, "12.50");
    app.focused = app.focused.next();
    type_text(&mut app, "Food");
    app.submit_form();

    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.status_is_error);
    let records = &app.controller.state().records;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].amount, dec!(12.50));
    assert_eq!(records[0].date, "2024-03-15");
}

#[test]
fn test_invalid_form_shows_error_and_stays_open() {
    let mut app = app_with(&[]);
    app.start_add();
    type_text(&mut app, "abc");
    app.submit_form();

    assert_eq!(app.input_mode, InputMode::Editing);
    assert!(app.status_is_error);
    assert!(app.status_message.contains("Invalid amount"));
    assert!(app.controller.state().records.is_empty());
}

#[test]
fn test_edit_selected_row() {
    let mut app = app_with(&[("5", "Food", "2024-03-01"), ("9", "Fuel", "2024-03-02")]);
    // Newest first: cursor 0 is Fuel
    app.start_edit();
    let fuel_id = app.controller.state().records[0].id;
    assert_eq!(app.controller.state().edit, EditState::Editing(fuel_id));
    assert_eq!(app.controller.state().form.category, "Fuel");

    app.leave_form();
    assert_eq!(app.controller.state().edit, EditState::Idle);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_delete_needs_confirmation() {
    let mut app = app_with(&[("5", "Food", "2024-03-01")]);
    app.request_delete();
    assert_eq!(app.input_mode, InputMode::Confirm);

    app.confirm_delete(false);
    assert_eq!(app.controller.state().records.len(), 1);

    app.request_delete();
    app.confirm_delete(true);
    assert!(app.controller.state().records.is_empty());
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_window_switch_resets_cursor() {
    let mut app = app_with(&[
        ("1", "A", "2024-02-01"),
        ("2", "B", "2024-03-14"),
        ("3", "C", "2024-03-01"),
    ]);
    app.move_down();
    app.move_down();
    assert_eq!(app.list_index, 2);

    app.set_window(Window::Week);
    assert_eq!(app.list_index, 0);
    assert_eq!(app.summary().records.len(), 1);
    assert_eq!(app.status_message, "This Week: 1 expense");
}

#[test]
fn test_cursor_clamped_after_delete() {
    let mut app = app_with(&[("1", "A", "2024-03-01"), ("2", "B", "2024-03-02")]);
    app.move_down();
    app.request_delete();
    app.confirm_delete(true);
    assert_eq!(app.list_index, 0);
    assert!(app.selected().is_some());
}

#[test]
fn test_form_field_cycle() {
    assert_eq!(FormField::Amount.next(), FormField::Category);
    assert_eq!(FormField::Note.next(), FormField::Amount);
    assert_eq!(FormField::Amount.prev(), FormField::Note);
    assert_eq!(FormField::all().len(), 3);
}

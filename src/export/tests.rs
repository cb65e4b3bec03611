#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn sample() -> Vec<Expense> {
    vec![
        Expense {
            id: 2,
            amount: dec!(7.25),
            category: "Food".into(),
            note: Some("tacos, extra salsa".into()),
            date: "2024-03-11".into(),
        },
        Expense {
            id: 1,
            amount: dec!(20),
            category: "Transport".into(),
            note: None,
            date: "2024-03-10".into(),
        },
    ]
}

#[test]
fn test_write_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let count = write_csv(&path, &sample()).unwrap();
    assert_eq!(count, 2);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "id,date,category,amount,note");
    assert_eq!(lines[1], "2,2024-03-11,Food,7.25,\"tacos, extra salsa\"");
    assert_eq!(lines[2], "1,2024-03-10,Transport,20.00,");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_write_csv_empty_has_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    assert_eq!(write_csv(&path, &[]).unwrap(), 0);
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim_end(), "id,date,category,amount,note");
}

#[test]
fn test_write_csv_bad_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");
    assert!(matches!(
        write_csv(&path, &sample()),
        Err(ExpenseError::Export(_))
    ));
}

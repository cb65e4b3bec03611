pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    amount   REAL NOT NULL,
    category TEXT NOT NULL,
    note     TEXT,
    date     TEXT NOT NULL
);
"#;

pub(crate) const DROP_EXPENSES: &str = "DROP TABLE IF EXISTS expenses;";

/// Stored in `PRAGMA user_version`.
pub(crate) const CURRENT_VERSION: i32 = 1;

/// Columns every readable `expenses` table must have. Installs from before
/// the `date` column was added fail this check.
pub(crate) const REQUIRED_COLUMNS: &[&str] = &["id", "amount", "category", "note", "date"];

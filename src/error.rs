use rusqlite::ErrorCode;
use thiserror::Error;

/// Errors surfaced by the validator, the record store and the controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExpenseError {
    /// Amount text did not parse, or parsed to zero or less.
    #[error("Invalid amount: '{0}' (enter a number greater than zero)")]
    InvalidAmount(String),

    #[error("Category is required")]
    MissingCategory,

    /// The store could not be reached at all (cannot open, busy, locked).
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage I/O error: {0}")]
    StorageIo(String),

    /// The on-disk table does not match the expected schema. Fixing this
    /// requires dropping and recreating the table (`spendlog reset --yes`).
    #[error("Schema mismatch: {0} (run `spendlog reset --yes` to recreate the expenses table; this deletes all records)")]
    SchemaMismatch(String),

    #[error("No expense with id {0}")]
    UnknownRecord(i64),

    #[error("Export error: {0}")]
    Export(String),

    /// A running total left the range a `Decimal` can hold.
    #[error("Total overflow in '{0}' (stored amounts are too large to sum)")]
    TotalOverflow(String),
}

impl ExpenseError {
    /// Validation failures are reported before any store call is made.
    pub(crate) fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::MissingCategory)
    }
}

impl From<rusqlite::Error> for ExpenseError {
    fn from(e: rusqlite::Error) -> Self {
        match e.sqlite_error_code() {
            Some(
                ErrorCode::CannotOpen
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::NotADatabase
                | ErrorCode::PermissionDenied,
            ) => Self::StorageUnavailable(e.to_string()),
            _ => Self::StorageIo(e.to_string()),
        }
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(e: csv::Error) -> Self {
        Self::Export(e.to_string())
    }
}

pub(crate) type Result<T> = std::result::Result<T, ExpenseError>;

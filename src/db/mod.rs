mod schema;

use log::{debug, error, info};
use rusqlite::{params, Connection};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ExpenseError, Result};
use crate::models::{Expense, NewExpense};

/// Row storage the controller depends on.
///
/// Calls are issued one at a time; a `list_all` made after a mutation
/// returns reflects that mutation.
pub(crate) trait ExpenseStore {
    /// Insert a record and return its newly assigned id.
    fn create(&mut self, expense: &NewExpense) -> Result<i64>;

    /// Every record, most recently created first.
    fn list_all(&self) -> Result<Vec<Expense>>;

    /// Overwrite the fields of `id`. Unknown ids are not reported.
    fn update(&mut self, id: i64, expense: &NewExpense) -> Result<()>;

    fn delete(&mut self, id: i64) -> Result<()>;
}

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let db = Self {
            conn: connect(path)?,
        };
        db.check_schema()?;
        info!(
            "Opened expense store at {} ({} records)",
            path.display(),
            db.count()?
        );
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.check_schema()?;
        Ok(db)
    }

    /// Drop and recreate the `expenses` table, deleting every record.
    ///
    /// Skips the schema check so it can repair a store that `open` rejects.
    pub(crate) fn reset(path: &Path) -> Result<Self> {
        let db = Self {
            conn: connect(path)?,
        };
        db.recreate()?;
        info!("Recreated expenses table at {}", path.display());
        Ok(db)
    }

    fn recreate(&self) -> Result<()> {
        self.conn.execute_batch(schema::DROP_EXPENSES)?;
        self.create_schema()
    }

    fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(schema::SCHEMA_V1)?;
        self.conn
            .pragma_update(None, "user_version", schema::CURRENT_VERSION)?;
        Ok(())
    }

    fn check_schema(&self) -> Result<()> {
        let has_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='expenses')",
            [],
            |row| row.get(0),
        )?;

        if !has_table {
            self.create_schema()?;
            info!("Created expenses table (schema v{})", schema::CURRENT_VERSION);
            return Ok(());
        }

        let version: i32 = self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?;
        if version > schema::CURRENT_VERSION {
            error!(
                "Schema version {version} is newer than supported version {}",
                schema::CURRENT_VERSION
            );
            return Err(ExpenseError::SchemaMismatch(format!(
                "database schema version {version} is newer than supported version {}",
                schema::CURRENT_VERSION
            )));
        }

        let columns = self.table_columns()?;
        let missing: Vec<&str> = schema::REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|required| !columns.iter().any(|c| c == required))
            .collect();
        if !missing.is_empty() {
            error!("Expenses table is missing column(s): {}", missing.join(", "));
            return Err(ExpenseError::SchemaMismatch(format!(
                "expenses table is missing column(s): {}",
                missing.join(", ")
            )));
        }

        // Complete tables from unversioned installs are adopted as-is.
        if version < schema::CURRENT_VERSION {
            self.conn
                .pragma_update(None, "user_version", schema::CURRENT_VERSION)?;
            debug!("Stamped schema version {version} -> {}", schema::CURRENT_VERSION);
        }

        Ok(())
    }

    fn table_columns(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM pragma_table_info('expenses')")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        Ok(rows.collect::<std::result::Result<Vec<String>, _>>()?)
    }

    pub(crate) fn count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?)
    }
}

impl ExpenseStore for Database {
    fn create(&mut self, expense: &NewExpense) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO expenses (amount, category, note, date) VALUES (?1, ?2, ?3, ?4)",
            params![
                to_real(expense.amount)?,
                expense.category,
                expense.note,
                expense.date,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("Created expense {id}");
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, CAST(amount AS TEXT), category, note, date
             FROM expenses ORDER BY id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            let amount_str: String = row.get(1)?;
            let amount = parse_stored_amount(&amount_str).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    1,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;
            Ok(Expense {
                id: row.get(0)?,
                amount,
                category: row.get(2)?,
                note: row.get(3)?,
                date: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    fn update(&mut self, id: i64, expense: &NewExpense) -> Result<()> {
        self.conn.execute(
            "UPDATE expenses SET amount = ?1, category = ?2, note = ?3, date = ?4 WHERE id = ?5",
            params![
                to_real(expense.amount)?,
                expense.category,
                expense.note,
                expense.date,
                id,
            ],
        )?;
        debug!("Updated expense {id}");
        Ok(())
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        debug!("Deleted expense {id}");
        Ok(())
    }
}

fn connect(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path).map_err(|e| {
        ExpenseError::StorageUnavailable(format!("{}: {e}", path.display()))
    })?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

fn to_real(amount: Decimal) -> Result<f64> {
    amount
        .to_f64()
        .ok_or_else(|| ExpenseError::InvalidAmount(amount.to_string()))
}

/// SQLite renders large REAL values in exponent form ("1.0e+20").
fn parse_stored_amount(s: &str) -> std::result::Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s))
}

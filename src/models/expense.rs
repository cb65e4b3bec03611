use rust_decimal::Decimal;

/// A persisted expense row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: i64,
    pub amount: Decimal,
    pub category: String,
    pub note: Option<String>,
    /// Format: "YYYY-MM-DD", local calendar day.
    pub date: String,
}

/// Field values for a create or an update. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: Decimal,
    pub category: String,
    pub note: Option<String>,
    pub date: String,
}

impl NewExpense {
    pub fn new(amount: Decimal, category: String, note: Option<String>, date: String) -> Self {
        Self {
            amount,
            category,
            note,
            date,
        }
    }
}

impl Expense {
    /// Carry the new amount/category/note over this record, keeping its date.
    pub fn edited(&self, amount: Decimal, category: String, note: Option<String>) -> NewExpense {
        NewExpense::new(amount, category, note, self.date.clone())
    }

    pub fn note_or_empty(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}

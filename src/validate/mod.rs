use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ExpenseError, Result};

/// Amounts are stored in a REAL column, which holds 15 significant digits
/// exactly.
const MAX_SIGNIFICANT_DIGITS: usize = 15;

/// Raw form input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExpenseForm {
    pub(crate) amount: String,
    pub(crate) category: String,
    pub(crate) note: String,
}

/// Form input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidExpense {
    pub(crate) amount: Decimal,
    pub(crate) category: String,
    pub(crate) note: Option<String>,
}

impl ExpenseForm {
    pub(crate) fn new(amount: &str, category: &str, note: &str) -> Self {
        Self {
            amount: amount.to_string(),
            category: category.to_string(),
            note: note.to_string(),
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn validate(&self) -> Result<ValidExpense> {
        let (amount, category) = validate(&self.amount, &self.category)?;
        Ok(ValidExpense {
            amount,
            category,
            note: normalize_note(&self.note),
        })
    }
}

/// Parse the amount and category fields.
///
/// Amount must be a plain decimal number greater than zero with at most
/// `MAX_SIGNIFICANT_DIGITS` significant digits. Category is
/// trimmed and must not be empty; its casing is kept as typed.
pub(crate) fn validate(amount_text: &str, category_text: &str) -> Result<(Decimal, String)> {
    let amount = parse_amount(amount_text)?;
    let category = category_text.trim();
    if category.is_empty() {
        return Err(ExpenseError::MissingCategory);
    }
    Ok((amount, category.to_string()))
}

fn parse_amount(amount_text: &str) -> Result<Decimal> {
    let trimmed = amount_text.trim();
    let amount = Decimal::from_str(trimmed)
        .map_err(|_| ExpenseError::InvalidAmount(trimmed.to_string()))?;
    if amount <= Decimal::ZERO || significant_digits(amount) > MAX_SIGNIFICANT_DIGITS {
        return Err(ExpenseError::InvalidAmount(trimmed.to_string()));
    }
    Ok(amount)
}

/// Digits in the mantissa once trailing fractional zeros are dropped,
/// so "12.50" counts 3 and "1000" counts 4.
fn significant_digits(amount: Decimal) -> usize {
    amount.normalize().mantissa().unsigned_abs().to_string().len()
}

/// Trimmed note, or `None` when nothing but whitespace was entered.
pub(crate) fn normalize_note(note: &str) -> Option<String> {
    let trimmed = note.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests;

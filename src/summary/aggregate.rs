use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::error::{ExpenseError, Result};
use crate::models::Expense;

/// Bucket for records whose category is blank.
pub(crate) const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Totals {
    pub(crate) total: Decimal,
    /// Subtotals in order of each category's first appearance.
    pub(crate) by_category: Vec<(String, Decimal)>,
}

/// Sum amounts overall and per category. Category keys are compared
/// exactly as stored, so "Food" and "food" are separate buckets.
///
/// Fails with `TotalOverflow` instead of panicking when a sum leaves the
/// `Decimal` range.
pub(crate) fn aggregate<'a, I>(records: I) -> Result<Totals>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals = Totals::default();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for expense in records {
        totals.total = checked_sum(totals.total, expense.amount, "Total")?;

        let key = if expense.category.trim().is_empty() {
            UNCATEGORIZED
        } else {
            expense.category.as_str()
        };
        match index.get(key) {
            Some(&i) => {
                let bucket = &mut totals.by_category[i].1;
                *bucket = checked_sum(*bucket, expense.amount, key)?;
            }
            None => {
                index.insert(key, totals.by_category.len());
                totals.by_category.push((key.to_string(), expense.amount));
            }
        }
    }

    Ok(totals)
}

fn checked_sum(acc: Decimal, amount: Decimal, label: &str) -> Result<Decimal> {
    acc.checked_add(amount)
        .ok_or_else(|| ExpenseError::TotalOverflow(label.to_string()))
}

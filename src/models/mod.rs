mod expense;
mod window;

pub use expense::{Expense, NewExpense};
pub use window::Window;

#[cfg(test)]
mod tests;

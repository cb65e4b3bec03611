mod aggregate;
mod classify;

pub(crate) use aggregate::{aggregate, Totals};
pub(crate) use classify::in_window;

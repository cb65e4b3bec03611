use chrono::NaiveDate;
use log::{debug, warn};

use crate::db::ExpenseStore;
use crate::error::{ExpenseError, Result};
use crate::models::{Expense, NewExpense, Window};
use crate::summary::{aggregate, in_window, Totals};
use crate::validate::ExpenseForm;

/// The records of one window together with their totals.
///
/// Totals are kept separate from the records so the list still renders
/// when the amounts cannot be summed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowSummary {
    pub(crate) records: Vec<Expense>,
    pub(crate) totals: Result<Totals>,
}

/// Filter `all` down to `window` as seen from `today` and total the result.
/// Input order is kept.
pub(crate) fn summarize(all: &[Expense], window: Window, today: NaiveDate) -> WindowSummary {
    let records: Vec<Expense> = all
        .iter()
        .filter(|e| in_window(&e.date, window, today))
        .cloned()
        .collect();
    let totals = aggregate(&records);
    WindowSummary { records, totals }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum EditState {
    #[default]
    Idle,
    Editing(i64),
}

impl EditState {
    pub(crate) fn editing_id(&self) -> Option<i64> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(*id),
        }
    }

    /// Deleting the record being edited ends the edit; any other delete
    /// leaves the state alone.
    pub(crate) fn after_delete(self, deleted: i64) -> Self {
        match self {
            Self::Editing(id) if id == deleted => Self::Idle,
            other => other,
        }
    }
}

/// Requests coming in from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Create from the form when idle, otherwise save the edited record.
    Submit,
    Select(i64),
    CancelEdit,
    Delete(i64),
    SetWindow(Window),
    Refresh,
}

/// What a successful action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Created(i64),
    Updated(i64),
    Deleted(i64),
    Selected(i64),
    Cancelled,
    WindowChanged(Window),
    Refreshed,
}

/// Everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ViewState {
    /// Full record list, newest first, as last read from the store.
    pub(crate) records: Vec<Expense>,
    pub(crate) window: Window,
    pub(crate) edit: EditState,
    pub(crate) form: ExpenseForm,
    /// Reference day for window membership and for new records' dates.
    pub(crate) today: NaiveDate,
}

impl ViewState {
    /// Summary of the active window.
    pub(crate) fn summary(&self) -> WindowSummary {
        self.summary_for(self.window)
    }

    pub(crate) fn summary_for(&self, window: Window) -> WindowSummary {
        summarize(&self.records, window, self.today)
    }

    pub(crate) fn record(&self, id: i64) -> Option<&Expense> {
        self.records.iter().find(|e| e.id == id)
    }
}

/// Owns the store handle and the view state. A failed action leaves the
/// state untouched, except that a completed delete always ends an edit of
/// the deleted record.
pub(crate) struct Controller<S: ExpenseStore> {
    store: S,
    state: ViewState,
}

impl<S: ExpenseStore> Controller<S> {
    pub(crate) fn new(store: S, today: NaiveDate) -> Result<Self> {
        let records = store.list_all()?;
        Ok(Self {
            store,
            state: ViewState {
                records,
                window: Window::All,
                edit: EditState::Idle,
                form: ExpenseForm::default(),
                today,
            },
        })
    }

    pub(crate) fn state(&self) -> &ViewState {
        &self.state
    }

    pub(crate) fn form_mut(&mut self) -> &mut ExpenseForm {
        &mut self.state.form
    }

    pub(crate) fn set_today(&mut self, today: NaiveDate) {
        self.state.today = today;
    }

    pub(crate) fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        let result = self.apply(action);
        if let Err(e) = &result {
            if e.is_validation() {
                debug!("{action:?} rejected: {e}");
            } else {
                warn!("{action:?} failed: {e}");
            }
        }
        result
    }

    fn apply(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::Submit => self.submit(),
            Action::Select(id) => self.select(id),
            Action::CancelEdit => {
                self.state.edit = EditState::Idle;
                self.state.form.clear();
                Ok(Outcome::Cancelled)
            }
            Action::Delete(id) => self.delete(id),
            Action::SetWindow(window) => {
                self.state.window = window;
                Ok(Outcome::WindowChanged(window))
            }
            Action::Refresh => {
                self.state.records = self.store.list_all()?;
                Ok(Outcome::Refreshed)
            }
        }
    }

    fn submit(&mut self) -> Result<Outcome> {
        let valid = self.state.form.validate()?;

        let outcome = match self.state.edit {
            EditState::Idle => {
                let expense = NewExpense::new(
                    valid.amount,
                    valid.category,
                    valid.note,
                    self.state.today.format("%Y-%m-%d").to_string(),
                );
                Outcome::Created(self.store.create(&expense)?)
            }
            EditState::Editing(id) => {
                let original = self
                    .state
                    .record(id)
                    .ok_or(ExpenseError::UnknownRecord(id))?;
                let edited = original.edited(valid.amount, valid.category, valid.note);
                self.store.update(id, &edited)?;
                Outcome::Updated(id)
            }
        };

        self.state.records = self.store.list_all()?;
        self.state.edit = EditState::Idle;
        self.state.form.clear();
        Ok(outcome)
    }

    fn select(&mut self, id: i64) -> Result<Outcome> {
        let record = self.state.record(id).ok_or(ExpenseError::UnknownRecord(id))?;
        let form = ExpenseForm::new(
            &record.amount.to_string(),
            &record.category,
            record.note_or_empty(),
        );
        self.state.form = form;
        self.state.edit = EditState::Editing(id);
        Ok(Outcome::Selected(id))
    }

    fn delete(&mut self, id: i64) -> Result<Outcome> {
        self.store.delete(id)?;
        // The row is gone even if the re-read below fails.
        let before = self.state.edit;
        self.state.edit = before.after_delete(id);
        if self.state.edit != before {
            self.state.form.clear();
        }
        self.state.records = self.store.list_all()?;
        Ok(Outcome::Deleted(id))
    }
}

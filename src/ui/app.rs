use crate::controller::{Action, Controller, EditState, Outcome, WindowSummary};
use crate::db::Database;
use crate::models::{Expense, Window};
use crate::ui::util::{clamp_cursor, scroll_down, scroll_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Editing => write!(f, "FORM"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Amount,
    Category,
    Note,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Amount, Self::Category, Self::Note]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Note => "Note",
        }
    }

    pub(crate) fn next(&self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Category => Self::Note,
            Self::Note => Self::Amount,
        }
    }

    pub(crate) fn prev(&self) -> Self {
        match self {
            Self::Amount => Self::Note,
            Self::Category => Self::Amount,
            Self::Note => Self::Category,
        }
    }
}

/// Terminal session state layered over the controller. Only cursor,
/// focus and messages live here; records and the edit state belong to
/// the controller.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) controller: Controller<Database>,
    pub(crate) input_mode: InputMode,
    pub(crate) focused: FormField,
    pub(crate) status_message: String,
    pub(crate) status_is_error: bool,
    pub(crate) pending_delete: Option<i64>,
    pub(crate) list_index: usize,
    pub(crate) list_scroll: usize,
    // Updated each render frame
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(controller: Controller<Database>) -> Self {
        Self {
            running: true,
            controller,
            input_mode: InputMode::Normal,
            focused: FormField::Amount,
            status_message: String::new(),
            status_is_error: false,
            pending_delete: None,
            list_index: 0,
            list_scroll: 0,
            visible_rows: 20,
        }
    }

    pub(crate) fn summary(&self) -> WindowSummary {
        self.controller.state().summary()
    }

    /// Record under the cursor in the active window.
    pub(crate) fn selected(&self) -> Option<Expense> {
        self.summary().records.get(self.list_index).cloned()
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.controller.state().edit != EditState::Idle
    }

    pub(crate) fn focused_value_mut(&mut self) -> &mut String {
        let form = self.controller.form_mut();
        match self.focused {
            FormField::Amount => &mut form.amount,
            FormField::Category => &mut form.category,
            FormField::Note => &mut form.note,
        }
    }

    /// Run an action and report its result on the status line.
    /// Returns whether it succeeded.
    pub(crate) fn apply(&mut self, action: Action) -> bool {
        match self.controller.dispatch(action) {
            Ok(outcome) => {
                let msg = self.describe(outcome);
                self.set_status(msg);
                let len = self.summary().records.len();
                clamp_cursor(&mut self.list_index, &mut self.list_scroll, len);
                true
            }
            Err(e) => {
                self.set_error(e.to_string());
                false
            }
        }
    }

    fn describe(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Created(id) => format!("Added expense #{id}"),
            Outcome::Updated(id) => format!("Saved expense #{id}"),
            Outcome::Deleted(id) => format!("Deleted expense #{id}"),
            Outcome::Selected(id) => format!("Editing expense #{id} (Enter to save, Esc to cancel)"),
            Outcome::Cancelled => "Edit cancelled".into(),
            Outcome::WindowChanged(window) => {
                let count = self.summary().records.len();
                format!("{window}: {count} expense{}", if count == 1 { "" } else { "s" })
            }
            Outcome::Refreshed => "Reloaded".into(),
        }
    }

    pub(crate) fn start_add(&mut self) {
        if self.is_editing() {
            self.apply(Action::CancelEdit);
        }
        self.focused = FormField::Amount;
        self.input_mode = InputMode::Editing;
        self.set_status("New expense (Tab next field, Enter to add, Esc to cancel)");
    }

    pub(crate) fn start_edit(&mut self) {
        if let Some(expense) = self.selected() {
            if self.apply(Action::Select(expense.id)) {
                self.focused = FormField::Amount;
                self.input_mode = InputMode::Editing;
            }
        }
    }

    pub(crate) fn submit_form(&mut self) {
        if self.apply(Action::Submit) {
            self.input_mode = InputMode::Normal;
            self.focused = FormField::Amount;
        }
    }

    pub(crate) fn leave_form(&mut self) {
        self.apply(Action::CancelEdit);
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn request_delete(&mut self) {
        if let Some(expense) = self.selected() {
            self.pending_delete = Some(expense.id);
            self.input_mode = InputMode::Confirm;
            self.set_status(format!(
                "Delete #{} {} {}? (y/n)",
                expense.id, expense.category, expense.amount
            ));
        }
    }

    pub(crate) fn confirm_delete(&mut self, confirmed: bool) {
        self.input_mode = InputMode::Normal;
        match self.pending_delete.take() {
            Some(id) if confirmed => {
                self.apply(Action::Delete(id));
            }
            _ => self.set_status("Cancelled"),
        }
    }

    pub(crate) fn set_window(&mut self, window: Window) {
        self.list_index = 0;
        self.list_scroll = 0;
        self.apply(Action::SetWindow(window));
    }

    pub(crate) fn move_down(&mut self) {
        let len = self.summary().records.len();
        scroll_down(&mut self.list_index, &mut self.list_scroll, len, self.visible_rows);
    }

    pub(crate) fn move_up(&mut self) {
        scroll_up(&mut self.list_index, &mut self.list_scroll);
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_is_error = false;
    }

    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_is_error = true;
    }
}

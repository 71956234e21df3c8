use chrono::NaiveDate;

use crate::session::{DraftField, Session, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "FORM"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) session: Session,
    clock: fn() -> NaiveDate,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Transactions
    pub(crate) form_field: usize,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(session: Session) -> Self {
        Self {
            running: true,
            session,
            clock: local_today,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            form_field: 0,
            transaction_index: 0,
            transaction_scroll: 0,

            visible_rows: 20,
        }
    }

    /// Read dates from `clock` instead of the local calendar.
    pub(crate) fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// The current date, read fresh on every call.
    pub(crate) fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Replace the session with the result of `f` applied to it.
    pub(crate) fn update(&mut self, f: impl FnOnce(Session) -> Session) {
        let placeholder = Session::new(Vec::new(), NaiveDate::MIN);
        let current = std::mem::replace(&mut self.session, placeholder);
        self.session = f(current);
    }

    pub(crate) fn view(&self) -> View {
        self.session.view
    }

    pub(crate) fn switch_view(&mut self, view: View) {
        self.update(|s| s.with_view(view));
        if view != View::Transactions && self.input_mode == InputMode::Editing {
            self.input_mode = InputMode::Normal;
        }
    }

    pub(crate) fn focused_field(&self) -> DraftField {
        DraftField::all()
            .get(self.form_field)
            .copied()
            .unwrap_or(DraftField::Description)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{debug, error, info};

use crate::session::{DraftField, Session, View};
use crate::ui::app::{App, InputMode};
use crate::ui::commands;
use crate::ui::form;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(session: Session) -> Result<()> {
    let mut app = App::new(session);

    enable_raw_mode().context("Failed to enable raw terminal mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!(view = %app.view(), "Starting TUI");

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Table area: tab, status and command bars, the entry form, borders and header
            let content_height = f.area().height.saturating_sub(13) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(key, app);
            }
        }
    }
    info!(transactions = app.session.transactions.len(), "Leaving TUI");
    Ok(())
}

/// Route one key press. Errors from commands land in the status bar rather
/// than ending the session.
pub(crate) fn handle_key(key: KeyEvent, app: &mut App) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
        app.running = false;
        return;
    }
    if app.show_help {
        app.show_help = false;
        return;
    }

    let result = match app.input_mode {
        InputMode::Normal => {
            handle_normal_input(key, app);
            Ok(())
        }
        InputMode::Command => handle_command_input(key, app),
        InputMode::Editing => {
            handle_editing_input(key, app);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{e:#}");
        app.set_status(format!("Error: {e:#}"));
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('1') => app.switch_view(View::Dashboard),
        KeyCode::Char('2') => app.switch_view(View::Transactions),
        KeyCode::Char('3') => app.switch_view(View::Reports),
        KeyCode::Char('4') => app.switch_view(View::Insights),
        KeyCode::Tab => cycle_view(app, 1),
        KeyCode::BackTab => cycle_view(app, -1),
        KeyCode::Char('a') => {
            app.switch_view(View::Transactions);
            app.input_mode = InputMode::Editing;
            app.form_field = 0;
            app.status_message.clear();
        }
        KeyCode::Char('j') | KeyCode::Down if app.view() == View::Transactions => {
            let len = app.session.transactions.len();
            scroll_down(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                len,
                app.visible_rows,
            );
        }
        KeyCode::Char('k') | KeyCode::Up if app.view() == View::Transactions => {
            scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
        }
        KeyCode::Char('g') if app.view() == View::Transactions => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll);
        }
        KeyCode::Char('G') if app.view() == View::Transactions => {
            let len = app.session.transactions.len();
            scroll_to_bottom(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                len,
                app.visible_rows,
            );
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn cycle_view(app: &mut App, delta: i32) {
    let views = View::all();
    let idx = views.iter().position(|v| *v == app.view()).unwrap_or(0);
    let next = (idx as i64 + delta as i64).rem_euclid(views.len() as i64) as usize;
    app.switch_view(views[next]);
}

fn handle_command_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: KeyEvent, app: &mut App) {
    let field = app.focused_field();
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.status_message.clear();
        }
        KeyCode::Tab | KeyCode::Down => app.form_field = form::step_field(app.form_field, 1),
        KeyCode::BackTab | KeyCode::Up => app.form_field = form::step_field(app.form_field, -1),
        KeyCode::Enter => submit_form(app),
        KeyCode::Backspace if field.is_text() => {
            let mut value = app.session.draft.get(field);
            value.pop();
            app.update(|s| s.with_draft_field(field, &value));
        }
        KeyCode::Char(c) if field.is_text() => {
            let mut value = app.session.draft.get(field);
            value.push(c);
            app.update(|s| s.with_draft_field(field, &value));
        }
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Char(' ') => {
            cycle_choice(app, field, 1);
        }
        KeyCode::Char('-') | KeyCode::Left => cycle_choice(app, field, -1),
        _ => {}
    }
}

fn cycle_choice(app: &mut App, field: DraftField, delta: i32) {
    match field {
        DraftField::Category => app.update(|s| s.with_draft_category_step(delta)),
        DraftField::Kind => {
            let next = app.session.draft.kind.toggled();
            app.update(|s| s.with_draft_field(DraftField::Kind, next.as_str()));
        }
        _ => {}
    }
}

fn submit_form(app: &mut App) {
    if let Some(reason) = form::rejection(&app.session.draft) {
        debug!(%reason, "Form rejected draft");
        app.set_status(reason);
        return;
    }

    let today = app.today();
    let description = app.session.draft.description.clone();
    app.update(|s| s.submit_draft(today));
    app.form_field = 0;
    app.set_status(format!("Added transaction: {description}"));
}

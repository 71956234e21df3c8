use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::panel;
use crate::models::TransactionKind;
use crate::session::{DraftField, Session};
use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::{signed_money, truncate};

const LABEL_WIDTH: usize = 13;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DraftField::all().len() as u16 + 2), // Entry form
            Constraint::Min(4),                                     // Table
        ])
        .split(area);

    render_form(f, chunks[0], app);
    render_table(f, chunks[1], app);
}

/// Display text for one draft field. Choice fields show the choice by name.
fn field_value(session: &Session, field: DraftField) -> String {
    let draft = &session.draft;
    match field {
        DraftField::Category => session
            .category(draft.category_id)
            .map(|c| format!("{} {}", c.icon, c.name))
            .unwrap_or_default(),
        DraftField::Kind => match draft.kind {
            TransactionKind::Expense => "Expense".to_string(),
            TransactionKind::Income => "Income".to_string(),
        },
        _ => draft.get(field),
    }
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;
    let focused = app.focused_field();

    let lines: Vec<Line> = DraftField::all()
        .iter()
        .map(|&field| {
            let is_focused = editing && field == focused;
            let label_style = if is_focused {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::dim_style()
            };
            let value = field_value(&app.session, field);
            let value = if is_focused && !field.is_text() {
                format!("◀ {value} ▶")
            } else {
                value
            };
            let value_style = if is_focused {
                theme::selected_style()
            } else {
                theme::normal_style()
            };

            Line::from(vec![
                Span::styled(format!(" {:<LABEL_WIDTH$}", format!("{field}:")), label_style),
                Span::styled(value, value_style),
            ])
        })
        .collect();

    let title = if editing {
        "Add New Transaction (Enter to add, Esc to leave)"
    } else {
        "Add New Transaction (press a)"
    };
    f.render_widget(Paragraph::new(lines).block(panel(title)), area);

    if editing && focused.is_text() {
        let row = DraftField::all()
            .iter()
            .position(|&field| field == focused)
            .unwrap_or(0) as u16;
        let col = (1 + LABEL_WIDTH + app.session.draft.get(focused).chars().count()) as u16;
        f.set_cursor_position((area.x + 1 + col, area.y + 1 + row));
    }
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    if session.transactions.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to fill in the form, or use :add",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(panel("All Transactions (0)"));
        f.render_widget(msg, area);
        return;
    }

    let header_cells = ["Date", "Description", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let browsing = app.input_mode != InputMode::Editing;

    let rows: Vec<Row> = session
        .transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let category = session
                .category(txn.category_id)
                .map(|c| format!("{} {}", c.icon, c.name))
                .unwrap_or_default();

            let amount_style = if txn.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };

            let style = if browsing && i == app.transaction_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format!("  {}", txn.date)),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(category),
                Cell::from(Span::styled(signed_money(txn), amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(&format!(
            "All Transactions ({})",
            session.transactions.len()
        )));

    f.render_widget(table, area);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use super::panel;
use crate::aggregate::Summary;
use crate::models::Amount;
use crate::session::RECENT_COUNT;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_money, progress_bar, signed_money, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.session.summary();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(6),    // Budget status + recent
        ])
        .split(area);

    render_summary_cards(f, chunks[0], &summary);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_budget_status(f, lower[0], &summary);
    render_recent(f, lower[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, summary: &Summary) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let balance = summary.balance();

    render_card(f, cards[0], "Total Income", summary.total_income, theme::GREEN);
    render_card(f, cards[1], "Total Expenses", summary.total_expenses, theme::RED);
    render_card(
        f,
        cards[2],
        "Balance",
        balance,
        theme::health_color(balance >= Decimal::ZERO),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, amount: Amount, color: Color) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_money(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(panel(title));

    f.render_widget(text, area);
}

fn render_budget_status(f: &mut Frame, area: Rect, summary: &Summary) {
    // Room left for the bar once the name and amounts are laid out
    let bar_width = (area.width as usize).saturating_sub(50).clamp(5, 30);

    let items: Vec<ListItem> = summary
        .categories
        .iter()
        .map(|c| {
            let color = theme::health_color(c.remaining >= Decimal::ZERO);
            let ratio = c.usage_ratio().unwrap_or(0.0);
            let label = format!("{} {}", c.category.icon, truncate(&c.category.name, 14));

            ListItem::new(Line::from(vec![
                Span::styled(format!("{label:<17}"), theme::normal_style()),
                Span::styled(
                    format!(
                        "{} / {} ",
                        format_money(c.spent),
                        format_money(Amount::new(c.budget()))
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(progress_bar(ratio, bar_width), Style::default().fg(color)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(panel("Budget Status")), area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    if session.transactions.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press 2 then a to add one",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(panel("Recent Transactions"));
        f.render_widget(msg, area);
        return;
    }

    let desc_width = (area.width as usize).saturating_sub(20).max(8);

    let items: Vec<ListItem> = session
        .recent(RECENT_COUNT)
        .map(|txn| {
            let icon = session
                .category(txn.category_id)
                .map(|c| c.icon.as_str())
                .unwrap_or(" ");
            let amount_style = if txn.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{icon} {:<desc_width$}", truncate(&txn.description, desc_width)),
                    theme::normal_style(),
                ),
                Span::styled(signed_money(txn), amount_style),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(panel("Recent Transactions")), area);
}

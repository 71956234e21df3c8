use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::panel;
use crate::aggregate::{self, Summary, TREND_MONTHS};
use crate::models::Amount;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{budget_detail, format_money, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.session.summary();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    render_breakdown(f, charts[0], &summary);
    render_trend(f, charts[1], app);
    render_details(f, chunks[1], &summary);
}

fn render_breakdown(f: &mut Frame, area: Rect, summary: &Summary) {
    let slices = aggregate::spending_breakdown(summary);
    if slices.iter().all(|s| s.value.is_zero()) {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No expenses recorded yet", theme::dim_style())),
        ])
        .centered()
        .block(panel("Expenses by Category"));
        f.render_widget(msg, area);
        return;
    }

    let count = slices.len().max(1) as u16;
    let bar_width = (area.width.saturating_sub(2) / count)
        .saturating_sub(1)
        .clamp(3, 14);

    let bars: Vec<Bar> = slices
        .iter()
        .map(|slice| {
            let color = theme::category_color(&slice.color);
            Bar::default()
                .value(slice.value.to_u64().unwrap_or(0))
                .label(Line::from(truncate(&slice.name, bar_width as usize)))
                .text_value(format!("{:.0}%", slice.share * 100.0))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Expenses by Category"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_trend(f: &mut Frame, area: Rect, app: &App) {
    let points = aggregate::monthly_trend(
        &app.session.categories,
        &app.session.transactions,
        app.today(),
        TREND_MONTHS,
    );

    // NaN months have no plottable value and leave a gap in the line
    let expense: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| Some((i as f64, p.expense.value()?.to_f64()?)))
        .collect();
    let budget: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| Some((i as f64, p.budget.to_f64()?)))
        .collect();

    let y_max = expense
        .iter()
        .chain(budget.iter())
        .map(|&(_, y)| y)
        .fold(0.0_f64, f64::max)
        * 1.1;
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };

    let datasets = vec![
        Dataset::default()
            .name("expense")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::RED))
            .data(&expense),
        Dataset::default()
            .name("budget")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::BLUE))
            .data(&budget),
    ];

    let x_labels: Vec<Span> = points
        .iter()
        .map(|p| Span::styled(p.label.clone(), theme::dim_style()))
        .collect();
    let y_labels = vec![
        Span::styled("0", theme::dim_style()),
        Span::styled(format!("{:.0}", y_max / 2.0), theme::dim_style()),
        Span::styled(format!("{y_max:.0}"), theme::dim_style()),
    ];

    let chart = Chart::new(datasets)
        .block(panel("Monthly Expense Trend"))
        .x_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds([0.0, points.len().saturating_sub(1).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn render_details(f: &mut Frame, area: Rect, summary: &Summary) {
    let bar_width = (area.width as usize).saturating_sub(4).min(40);

    let mut lines: Vec<Line> = Vec::new();
    for c in &summary.categories {
        let color = theme::health_color(c.remaining >= Decimal::ZERO);
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} {:<16}", c.category.icon, c.category.name),
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "{} / {}",
                    format_money(c.spent),
                    format_money(Amount::new(c.budget()))
                ),
                Style::default().fg(color),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                progress_bar(c.usage_ratio().unwrap_or(0.0), bar_width),
                Style::default().fg(color),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", budget_detail(c)),
            theme::dim_style(),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(panel("Category Details")), area);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::panel;
use crate::aggregate::Summary;
use crate::insights::{
    self, RecommendationKind, NO_INSIGHTS_MESSAGE, SAVINGS_POTENTIAL_NOTE, SAVINGS_TIPS,
};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_money;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.session.summary();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),  // Analysis
            Constraint::Min(6),     // Recommendations
            Constraint::Length(10), // Savings potential
        ])
        .split(area);

    render_analysis(f, chunks[0], &summary);
    render_recommendations(f, chunks[1], &summary);
    render_savings(f, chunks[2], &summary);
}

fn render_analysis(f: &mut Frame, area: Rect, summary: &Summary) {
    let found = insights::generate(summary);

    let lines: Vec<Line> = if found.is_empty() {
        vec![Line::from(Span::styled(NO_INSIGHTS_MESSAGE, theme::dim_style()))]
    } else {
        found
            .iter()
            .map(|insight| {
                let color = theme::insight_color(insight.kind);
                Line::from(vec![
                    Span::styled(
                        format!(" ⚠ {:<8}", insight.kind.as_str()),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(insight.message.as_str(), Style::default().fg(color)),
                ])
            })
            .collect()
    };

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Budget Analysis"));
    f.render_widget(para, area);
}

fn render_recommendations(f: &mut Frame, area: Rect, summary: &Summary) {
    let recs = insights::recommendations(summary);

    let mut lines: Vec<Line> = Vec::new();
    for rec in &recs {
        let color = match rec.kind {
            RecommendationKind::Overspent => theme::RED,
            RecommendationKind::NearLimit => theme::YELLOW,
            RecommendationKind::Underused => theme::BLUE,
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {}", rec.icon, rec.name),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", rec.message),
            theme::normal_style(),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            " Every category is on track.",
            theme::dim_style(),
        )));
    }

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Spending Recommendations"));
    f.render_widget(para, area);
}

fn render_savings(f: &mut Frame, area: Rect, summary: &Summary) {
    let potential = insights::savings_potential(summary.total_income);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" You could save an extra ", theme::normal_style()),
            Span::styled(
                format_money(potential),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" per month", theme::normal_style()),
        ]),
        Line::from(Span::styled(
            format!(" {SAVINGS_POTENTIAL_NOTE}"),
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Tips to increase savings:",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(
        SAVINGS_TIPS
            .iter()
            .map(|tip| Line::from(Span::styled(format!("  • {tip}"), theme::normal_style()))),
    );

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Savings Potential"));
    f.render_widget(para, area);
}

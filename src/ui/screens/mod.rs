pub(crate) mod dashboard;
pub(crate) mod insights;
pub(crate) mod reports;
pub(crate) mod transactions;

use ratatui::{
    style::Style,
    text::Span,
    widgets::{Block, Borders},
};

use super::theme;

/// Bordered block with the dim bold title every view uses.
pub(crate) fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

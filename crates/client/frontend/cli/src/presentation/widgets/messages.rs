//! Message log panel.

use client_frontend_core::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

/// Render log entries, oldest at the top. `recent` is newest first.
pub fn render(frame: &mut Frame, area: Rect, recent: &[MessageEntry], theme: &RatatuiTheme) {
    let lines: Vec<Line> = recent
        .iter()
        .rev()
        .map(|entry| Line::from(Span::styled(entry.text.clone(), theme.message(entry.level))))
        .collect();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(paragraph, area);
}

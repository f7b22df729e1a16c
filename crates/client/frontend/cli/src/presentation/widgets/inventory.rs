//! Inventory modal.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use runtime::HudView;

pub fn render(frame: &mut Frame, area: Rect, hud: &HudView) {
    let mut lines: Vec<Line> = hud
        .inventory
        .iter()
        .map(|stack| {
            Line::from(vec![
                Span::styled(format!("{:>3} x ", stack.quantity), Style::default().fg(Color::Gray)),
                Span::styled(stack.name.clone(), Style::default().fg(Color::White)),
            ])
        })
        .collect();

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Your pack is empty.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc/i close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Inventory ")),
        area,
    );
}

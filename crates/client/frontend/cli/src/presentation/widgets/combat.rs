//! Turn-based combat overlay.
//!
//! Drawn over the bottom of the map while a session is running: the turn
//! queue with the current combatant highlighted, and the latest log lines.

use client_frontend_core::MessageEntry;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use runtime::FrameSnapshot;

use crate::presentation::{theme::RatatuiTheme, ui::combatant_name};

pub fn render(
    frame: &mut Frame,
    map_area: Rect,
    snapshot: &FrameSnapshot,
    recent: &[MessageEntry],
    theme: &RatatuiTheme,
) {
    let height = (recent.len() as u16 + 4).min(map_area.height);
    let area = Rect {
        y: map_area.y + map_area.height - height,
        height,
        ..map_area
    };

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightRed))
        .title("Combat");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [queue_area, log_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    let mut queue = vec![Span::styled("Turn order: ", Style::default().fg(Color::White))];
    for (index, id) in snapshot.hud.queue.iter().enumerate() {
        if index > 0 {
            queue.push(Span::raw(" > "));
        }
        let mut style = Style::default().fg(if id.is_player() {
            Color::Yellow
        } else {
            Color::LightRed
        });
        if snapshot.hud.current == Some(*id) {
            style = theme.emphasize_current(style.add_modifier(Modifier::BOLD));
        }
        queue.push(Span::styled(combatant_name(snapshot, *id), style));
    }
    frame.render_widget(Paragraph::new(Line::from(queue)), queue_area);

    let lines: Vec<Line> = recent
        .iter()
        .rev()
        .map(|entry| Line::from(Span::styled(entry.text.clone(), theme.message(entry.level))))
        .collect();
    frame.render_widget(Paragraph::new(lines), log_area);
}

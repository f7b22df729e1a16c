//! Header widget displaying the combat mode and session state.

use client_frontend_core::UiStateConsumer;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use runtime::{GameStatus, HudView};

/// Render the header panel.
///
/// Shows the active combat mode, whether a turn-based session is running and
/// whose turn it is.
pub fn render(frame: &mut Frame, area: Rect, hud: &HudView, ui: &UiStateConsumer) {
    let mut spans = vec![
        Span::raw("Mode: "),
        Span::styled(
            hud.mode.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if hud.in_session {
        let turn = if hud.player_turn {
            Span::styled("your turn", Style::default().fg(Color::LightGreen))
        } else {
            Span::styled("enemy turn", Style::default().fg(Color::LightRed))
        };
        spans.push(Span::raw(" | Combat: "));
        spans.push(turn);
        spans.push(Span::raw(format!(" ({} engaged)", hud.queue.len())));
    } else {
        spans.push(Span::styled(
            " | Exploring",
            Style::default().fg(Color::DarkGray),
        ));
    }

    if hud.status == GameStatus::Defeated || ui.defeated() {
        spans.push(Span::styled(
            " [DEFEATED]",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Dungeon"));

    frame.render_widget(paragraph, area);
}

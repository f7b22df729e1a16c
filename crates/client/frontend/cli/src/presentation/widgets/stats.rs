//! Player stats widget displaying health and purse.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use runtime::HudView;

use crate::presentation::theme::RatatuiTheme;

const BAR_WIDTH: usize = 12;

/// Render the player stats panel.
pub fn render(frame: &mut Frame, area: Rect, hud: &HudView, theme: &RatatuiTheme) {
    let label = Style::default().fg(Color::White);
    let health_style = theme.health(hud.health);

    let filled = (hud.health.ratio() * BAR_WIDTH as f32).round() as usize;
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled.min(BAR_WIDTH)),
        " ".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
    );

    let lines = vec![
        Line::from(vec![
            Span::styled("Health: ", label),
            Span::styled(
                format!("{}/{}", hud.health.current, hud.health.maximum),
                health_style,
            ),
        ]),
        Line::from(Span::styled(bar, health_style)),
        Line::from(vec![
            Span::styled("Coins: ", label),
            Span::styled(hud.coins.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Potions: ", label),
            Span::styled(hud.potions.to_string(), Style::default().fg(Color::LightRed)),
        ]),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Player"));

    frame.render_widget(paragraph, area);
}

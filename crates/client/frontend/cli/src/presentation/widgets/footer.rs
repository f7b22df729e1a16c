//! Key hints for the current mode.

use client_frontend_core::UiStateConsumer;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::RatatuiTheme;
use crate::state::{AppMode, AppState};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app_state: &AppState,
    ui: &UiStateConsumer,
    theme: &RatatuiTheme,
) {
    let hint = |keys: &'static str, label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            theme.dim()
        };
        [Span::styled(keys, style), Span::raw(format!(" {label}  "))]
    };

    let spans: Vec<Span> = match app_state.mode {
        AppMode::Inventory => [hint("Esc/i", "close", true), hint("q", "quit", true)]
            .into_iter()
            .flatten()
            .collect(),
        AppMode::Normal if ui.defeated() => hint("q", "quit", true).into_iter().collect(),
        AppMode::Normal => [
            hint("hjkl/wasd", "move", true),
            hint("Space", "attack", ui.action_enabled()),
            hint("e", "end combat", ui.overlay_visible()),
            hint("p", "potion", true),
            hint("i", "inventory", true),
            hint("q", "quit", true),
        ]
        .into_iter()
        .flatten()
        .collect(),
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

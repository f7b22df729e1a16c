//! Main render entry point composing all widgets into the terminal UI.
use anyhow::Result;
use game_core::{EntityId, TileMap};
use ratatui::layout::{Constraint, Layout, Rect};
use runtime::FrameSnapshot;

use client_frontend_core::{EventConsumer, UiStateConsumer};

use crate::{
    config::UiConfig,
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::{AppMode, AppState},
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub snapshot: &'a FrameSnapshot,
    pub map: &'a TileMap,
    pub ui: &'a UiStateConsumer,
    pub app_state: &'a AppState,
    pub ui_config: &'a UiConfig,
    /// Log lines shown inside the combat overlay.
    pub overlay_lines: usize,
}

/// Screen regions of the standard game view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub map: Rect,
    pub stats: Rect,
    pub messages: Rect,
    pub footer: Rect,
}

/// Map cells visible inside the bordered map panel for a terminal of `area`.
pub fn map_viewport(area: Rect, config: &UiConfig) -> (u16, u16) {
    let map = layout(area, config).map;
    (map.width.saturating_sub(2), map.height.saturating_sub(2))
}

pub fn layout(area: Rect, config: &UiConfig) -> Areas {
    let rows = Layout::vertical([
        Constraint::Length(3),                           // Header
        Constraint::Min(0),                              // Map + stats
        Constraint::Length(config.message_panel_height), // Messages
        Constraint::Length(1),                           // Footer
    ])
    .split(area);
    let middle =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(config.stats_panel_width)])
            .split(rows[1]);

    Areas {
        header: rows[0],
        map: middle[0],
        stats: middle[1],
        messages: rows[2],
        footer: rows[3],
    }
}

/// Render the terminal UI.
///
/// The game view is always drawn; the combat overlay and the inventory modal
/// go on top of it.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| {
        let areas = layout(frame.area(), ctx.ui_config);
        let hud = &ctx.snapshot.hud;

        widgets::header::render(frame, areas.header, hud, ctx.ui);
        widgets::map::render(frame, areas.map, ctx.snapshot, ctx.map, &theme);
        widgets::stats::render(frame, areas.stats, hud, &theme);

        let recent: Vec<_> = ctx
            .ui
            .message_log()
            .recent(areas.messages.height.saturating_sub(2) as usize)
            .cloned()
            .collect();
        widgets::messages::render(frame, areas.messages, &recent, &theme);
        widgets::footer::render(frame, areas.footer, ctx.app_state, ctx.ui, &theme);

        if ctx.ui.overlay_visible() {
            let recent: Vec<_> = ctx
                .ui
                .message_log()
                .recent(ctx.overlay_lines)
                .cloned()
                .collect();
            widgets::combat::render(frame, areas.map, ctx.snapshot, &recent, &theme);
        }

        if ctx.app_state.mode == AppMode::Inventory {
            let area = centered_rect(50, 60, frame.area());
            widgets::inventory::render(frame, area, hud);
        }
    })?;

    Ok(())
}

/// Display name for a queue entry.
pub fn combatant_name(snapshot: &FrameSnapshot, id: EntityId) -> String {
    if id.is_player() {
        return "you".to_owned();
    }
    snapshot
        .enemies
        .iter()
        .find(|enemy| enemy.id == id)
        .map_or_else(|| format!("enemy {id}"), |enemy| enemy.name.clone())
}

/// Create a centered rectangle for modal overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_reserves_panels() {
        let config = UiConfig::default();
        let areas = layout(Rect::new(0, 0, 100, 40), &config);
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.footer.height, 1);
        assert_eq!(areas.messages.height, config.message_panel_height);
        assert_eq!(areas.stats.width, config.stats_panel_width);
        assert_eq!(areas.map.width, 100 - config.stats_panel_width);
        assert_eq!(areas.map.height, 40 - 4 - config.message_panel_height);
        assert_eq!(
            map_viewport(Rect::new(0, 0, 100, 40), &config),
            (areas.map.width - 2, areas.map.height - 2)
        );
    }

    #[test]
    fn queue_names_fall_back_to_ids() {
        let snapshot = FrameSnapshot::default();
        assert_eq!(combatant_name(&snapshot, EntityId::PLAYER), "you");
        assert_eq!(combatant_name(&snapshot, EntityId(4)), "enemy #4");
    }
}

//! Map widget: terrain grid with enemies and the player drawn on top.

use client_frontend_core::MapView;
use game_core::TileMap;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use runtime::{CombatantView, FrameSnapshot};

use crate::presentation::theme::RatatuiTheme;

/// Render the visible map window.
///
/// Entities are drawn back to front in the same order the runtime renders
/// them: terrain, enemies, then the player.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: &FrameSnapshot,
    map: &TileMap,
    theme: &RatatuiTheme,
) {
    let block = Block::default().borders(Borders::ALL).title("Map");
    let inner = block.inner(area);
    let view = MapView::from_map(map, &snapshot.camera);

    let lines: Vec<Line> = view
        .rows
        .iter()
        .take(inner.height as usize)
        .map(|row| {
            Line::from(
                row.iter()
                    .take(inner.width as usize)
                    .map(|terrain| {
                        let (glyph, style) = theme.terrain(*terrain);
                        Span::styled(glyph.to_string(), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);

    let current = snapshot.hud.current;
    for enemy in &snapshot.enemies {
        let (glyph, style) = theme.enemy(enemy, current == Some(enemy.id));
        put_glyph(frame, inner, &view, enemy, glyph, style);
    }
    if let Some(player) = &snapshot.player {
        let (glyph, style) = theme.player(player, current == Some(player.id));
        put_glyph(frame, inner, &view, player, glyph, style);
    }
}

fn put_glyph(
    frame: &mut Frame,
    inner: Rect,
    view: &MapView,
    combatant: &CombatantView,
    glyph: char,
    style: ratatui::style::Style,
) {
    let Some(cell) = view.cell_of(combatant.position) else {
        return;
    };
    if cell.col >= inner.width as usize || cell.row >= inner.height as usize {
        return;
    }

    let x = inner.x + cell.col as u16;
    let y = inner.y + cell.row as u16;
    if let Some(buffer_cell) = frame.buffer_mut().cell_mut((x, y)) {
        buffer_cell.set_char(glyph).set_style(style);
    }
}

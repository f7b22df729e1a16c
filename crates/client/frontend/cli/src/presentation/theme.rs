//! Glyphs and colours for the terminal UI.
//!
//! The terminal has no sprites, so every entity is one styled character.
use client_frontend_core::MessageLevel;
use game_core::{ResourceMeter, TerrainKind};
use ratatui::style::{Color, Modifier, Style};
use runtime::CombatantView;

/// Ratatui styling rules shared by the widgets.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn terrain(&self, terrain: Option<TerrainKind>) -> (char, Style) {
        match terrain {
            Some(TerrainKind::Floor) => ('.', Style::default().fg(Color::DarkGray)),
            Some(TerrainKind::Wall) => ('#', Style::default().fg(Color::Gray)),
            Some(TerrainKind::Water) => ('~', Style::default().fg(Color::Blue)),
            None => (' ', Style::default()),
        }
    }

    pub fn player(&self, view: &CombatantView, is_current: bool) -> (char, Style) {
        let mut style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        if !view.health.is_depleted() && view.health.ratio() < 0.25 {
            style = style.fg(Color::LightRed);
        }
        if is_current {
            style = self.emphasize_current(style);
        }
        ('@', style)
    }

    pub fn enemy(&self, view: &CombatantView, is_current: bool) -> (char, Style) {
        let glyph = match view.name.as_str() {
            "slime" => 's',
            "skeleton" => 'k',
            "bat" => 'b',
            "dragon" => 'D',
            other => other.chars().next().unwrap_or('?'),
        };
        let colour = if view.is_boss {
            Color::Magenta
        } else {
            Color::LightRed
        };
        let mut style = Style::default().fg(colour);
        // Two-step flicker from the four-frame walk cycle.
        if view.frame % 2 == 1 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if is_current {
            style = self.emphasize_current(style);
        }
        (glyph, style)
    }

    pub fn emphasize_current(&self, style: Style) -> Style {
        style.add_modifier(Modifier::REVERSED)
    }

    pub fn health(&self, meter: ResourceMeter) -> Style {
        let ratio = meter.ratio();
        let colour = if ratio > 0.6 {
            Color::Green
        } else if ratio > 0.25 {
            Color::Yellow
        } else {
            Color::Red
        };
        Style::default().fg(colour)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EntityId, Position};

    fn view(name: &str, is_boss: bool) -> CombatantView {
        CombatantView {
            id: EntityId(1),
            name: name.to_owned(),
            position: Position::ORIGIN,
            health: ResourceMeter::new(10, 10),
            frame: 0,
            is_boss,
        }
    }

    #[test]
    fn archetypes_have_distinct_glyphs() {
        let theme = RatatuiTheme;
        let glyphs: Vec<char> = ["slime", "skeleton", "bat", "dragon"]
            .iter()
            .map(|name| theme.enemy(&view(name, false), false).0)
            .collect();
        assert_eq!(glyphs, vec!['s', 'k', 'b', 'D']);
        assert_eq!(theme.enemy(&view("mimic", false), false).0, 'm');
    }

    #[test]
    fn current_combatant_is_reversed() {
        let theme = RatatuiTheme;
        let (_, style) = theme.enemy(&view("bat", false), true);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}

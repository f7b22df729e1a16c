//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Vector;

use crate::state::AppMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    Move(Direction),
    Attack,
    EndCombat,
    UsePotion,
    ToggleInventory,
    CloseModal,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: AppMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }
        if mode == AppMode::Inventory {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('i' | 'I') => KeyAction::CloseModal,
                KeyCode::Char('q' | 'Q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Enter => KeyAction::Attack,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'h' | 'a' => KeyAction::Move(Direction::Left),
            'j' | 's' => KeyAction::Move(Direction::Down),
            'k' | 'w' => KeyAction::Move(Direction::Up),
            'l' | 'd' => KeyAction::Move(Direction::Right),
            ' ' | 'f' => KeyAction::Attack,
            'e' => KeyAction::EndCombat,
            'p' => KeyAction::UsePotion,
            'i' => KeyAction::ToggleInventory,
            _ => KeyAction::None,
        }
    }
}

/// Turns discrete key presses into a held movement vector.
///
/// Each axis remembers its last press and lets go once `hold` passes without
/// a repeat, so alternating two keys gives diagonal movement.
#[derive(Clone, Debug)]
pub struct MovementHold {
    hold: Duration,
    horizontal: Option<(f32, Instant)>,
    vertical: Option<(f32, Instant)>,
}

impl MovementHold {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            horizontal: None,
            vertical: None,
        }
    }

    pub fn press(&mut self, direction: Direction, now: Instant) {
        match direction {
            Direction::Left => self.horizontal = Some((-1.0, now)),
            Direction::Right => self.horizontal = Some((1.0, now)),
            Direction::Up => self.vertical = Some((-1.0, now)),
            Direction::Down => self.vertical = Some((1.0, now)),
        }
    }

    /// Raw movement input at `now`; the game loop normalizes it.
    pub fn current(&self, now: Instant) -> Vector {
        let axis = |held: Option<(f32, Instant)>| {
            held.filter(|(_, at)| now.saturating_duration_since(*at) <= self.hold)
                .map_or(0.0, |(value, _)| value)
        };
        Vector::new(axis(self.horizontal), axis(self.vertical))
    }

    pub fn clear(&mut self) {
        self.horizontal = None;
        self.vertical = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn maps_movement_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('h')), AppMode::Normal),
            KeyAction::Move(Direction::Left)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('W')), AppMode::Normal),
            KeyAction::Move(Direction::Up)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), AppMode::Normal),
            KeyAction::Move(Direction::Down)
        );
    }

    #[test]
    fn maps_combat_controls() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' ')), AppMode::Normal),
            KeyAction::Attack
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('e')), AppMode::Normal),
            KeyAction::EndCombat
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('p')), AppMode::Normal),
            KeyAction::UsePotion
        );
    }

    #[test]
    fn inventory_swallows_gameplay_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('w')), AppMode::Inventory),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), AppMode::Inventory),
            KeyAction::CloseModal
        );
        assert_eq!(
            handler.handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                AppMode::Inventory
            ),
            KeyAction::Quit
        );
    }

    #[test]
    fn movement_expires_without_repeats() {
        let start = Instant::now();
        let mut hold = MovementHold::new(Duration::from_millis(150));
        hold.press(Direction::Right, start);
        hold.press(Direction::Up, start + Duration::from_millis(100));

        assert_eq!(
            hold.current(start + Duration::from_millis(120)),
            Vector::new(1.0, -1.0)
        );
        assert_eq!(
            hold.current(start + Duration::from_millis(200)),
            Vector::new(0.0, -1.0)
        );
        assert_eq!(hold.current(start + Duration::from_secs(1)), Vector::ZERO);
    }

    #[test]
    fn opposite_key_replaces_axis() {
        let now = Instant::now();
        let mut hold = MovementHold::new(Duration::from_millis(150));
        hold.press(Direction::Left, now);
        hold.press(Direction::Right, now);
        assert_eq!(hold.current(now), Vector::new(1.0, 0.0));
        hold.clear();
        assert_eq!(hold.current(now), Vector::ZERO);
    }
}

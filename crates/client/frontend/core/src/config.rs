//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (terminal, GUI, etc.).

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub input: InputConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, input: InputConfig) -> Self {
        Self { messages, input }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `CLI_MESSAGE_LINES` - Log lines shown in the combat overlay (default: 8)
    /// - `CLI_MOVE_HOLD_MS` - How long a movement key counts as held (default: 150)
    /// - `CLI_REDRAW_MS` - Redraw period (default: 33)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(lines) = read_env::<usize>("CLI_MESSAGE_LINES") {
            config.messages.visible_lines = lines.max(1);
        }
        if let Some(ms) = read_env::<u64>("CLI_MOVE_HOLD_MS") {
            config.input.movement_hold = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("CLI_REDRAW_MS") {
            config.input.redraw_interval = Duration::from_millis(ms.max(1));
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub visible_lines: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            visible_lines: 8,
        }
    }
}

/// Keyboard handling knobs.
///
/// Terminals report key presses, not key releases, so a movement key counts
/// as held until `movement_hold` passes without a repeat.
#[derive(Clone, Debug)]
pub struct InputConfig {
    pub movement_hold: Duration,
    pub redraw_interval: Duration,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            movement_hold: Duration::from_millis(150),
            redraw_interval: Duration::from_millis(33),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

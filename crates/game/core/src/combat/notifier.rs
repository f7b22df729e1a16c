//! UI notification channel used by the arbiter.

/// Sink for player-facing combat feedback.
///
/// The arbiter never touches UI state directly. It reports through this trait,
/// and each frontend decides how to present it.
pub trait CombatNotifier {
    /// Appends a line to the combat log.
    fn append_log(&mut self, text: &str);

    /// Enables or disables the player's action control (the attack button).
    fn set_player_action_enabled(&mut self, enabled: bool);

    /// Shows or hides the turn-based session overlay.
    fn show_session_overlay(&mut self, visible: bool);
}

/// Notifier that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl CombatNotifier for NullNotifier {
    fn append_log(&mut self, _text: &str) {}
    fn set_player_action_enabled(&mut self, _enabled: bool) {}
    fn show_session_overlay(&mut self, _visible: bool) {}
}

/// One recorded notifier call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Log(String),
    PlayerActionEnabled(bool),
    SessionOverlay(bool),
}

/// Notifier that records calls in order; used by headless drivers and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    pub calls: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            Notification::Log(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_log(&self, needle: &str) -> bool {
        self.logs().any(|line| line.contains(needle))
    }

    /// Most recent action-control state, if it was ever set.
    pub fn player_action_enabled(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            Notification::PlayerActionEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }

    /// Most recent overlay visibility, if it was ever set.
    pub fn overlay_visible(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            Notification::SessionOverlay(visible) => Some(*visible),
            _ => None,
        })
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.calls)
    }
}

impl CombatNotifier for RecordingNotifier {
    fn append_log(&mut self, text: &str) {
        self.calls.push(Notification::Log(text.to_owned()));
    }

    fn set_player_action_enabled(&mut self, enabled: bool) {
        self.calls.push(Notification::PlayerActionEnabled(enabled));
    }

    fn show_session_overlay(&mut self, visible: bool) {
        self.calls.push(Notification::SessionOverlay(visible));
    }
}

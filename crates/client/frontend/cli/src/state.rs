//! Application state for mode management.

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    /// Normal gameplay.
    #[default]
    Normal,
    /// Inventory modal over the game view.
    Inventory,
}

impl AppMode {
    pub fn is_overlay(self) -> bool {
        matches!(self, AppMode::Inventory)
    }
}

/// Mutable application state tracking the current mode.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_inventory(&mut self) {
        self.mode = match self.mode {
            AppMode::Normal => AppMode::Inventory,
            AppMode::Inventory => AppMode::Normal,
        };
    }

    pub fn exit_to_normal(&mut self) {
        self.mode = AppMode::Normal;
    }
}

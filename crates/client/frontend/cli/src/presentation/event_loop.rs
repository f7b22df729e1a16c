//! Pumps runtime events, user input, and rendering for the CLI client.
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyEvent, KeyEventKind};
use game_core::{MapOracle, TileMap, Vector};
use ratatui::layout::Rect;
use runtime::{Event, FrameSnapshot, RuntimeError, RuntimeHandle};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;
use tokio::time::{self, Duration, MissedTickBehavior};

use client_frontend_core::{EventConsumer, FrontendConfig, UiStateConsumer};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction, MovementHold};
use crate::presentation::{
    terminal::Tui,
    ui::{self, RenderContext},
};
use crate::state::AppState;

pub struct EventLoop {
    handle: RuntimeHandle,
    map: Arc<TileMap>,
    input: InputHandler,
    movement: MovementHold,
    sent_movement: Vector,
    consumer: UiStateConsumer,
    app_state: AppState,
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    dirty: bool,
}

impl EventLoop {
    pub fn new(
        handle: RuntimeHandle,
        consumer: UiStateConsumer,
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            map: handle.map(),
            handle,
            input: InputHandler::new(),
            movement: MovementHold::new(frontend_config.input.movement_hold),
            sent_movement: Vector::ZERO,
            consumer,
            app_state: AppState::new(),
            frontend_config,
            cli_config,
            dirty: true,
        }
    }

    /// Run until the player quits or the runtime goes away.
    ///
    /// Returns the consumer so the caller can inspect the final log.
    pub async fn run(
        mut self,
        terminal: &mut Tui,
        mut ui_rx: broadcast::Receiver<Event>,
        mut game_rx: broadcast::Receiver<Event>,
    ) -> Result<UiStateConsumer> {
        let mut frames = self.handle.frames();
        let mut redraw = time::interval(self.frontend_config.input.redraw_interval);
        redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.sync_viewport(terminal).await?;
        self.render(terminal, &frames)?;

        loop {
            tokio::select! {
                result = ui_rx.recv() => {
                    if self.handle_runtime_channel(result, &mut ui_rx) {
                        break;
                    }
                }
                result = game_rx.recv() => {
                    if self.handle_runtime_channel(result, &mut game_rx) {
                        break;
                    }
                }
                changed = frames.changed() => {
                    if changed.is_err() {
                        tracing::warn!("Frame stream closed");
                        break;
                    }
                    self.dirty = true;
                }
                _ = redraw.tick() => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                    self.sync_movement().await?;
                    if self.dirty {
                        self.render(terminal, &frames)?;
                    }
                }
            }
        }

        Ok(self.consumer)
    }

    /// Returns true once the channel has closed.
    fn handle_runtime_channel(
        &mut self,
        result: std::result::Result<Event, RecvError>,
        rx: &mut broadcast::Receiver<Event>,
    ) -> bool {
        match result {
            Ok(event) => {
                let mut impact = self.consumer.on_event(&event);
                while let Ok(event) = rx.try_recv() {
                    impact = impact.combine(self.consumer.on_event(&event));
                }
                self.dirty |= impact.requires_redraw;
                false
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                true
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                false
            }
        }
    }

    /// Drain pending terminal input. Returns true when the player quits.
    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key_press(key).await? {
                        return Ok(true);
                    }
                }
                TermEvent::Resize(_, _) => {
                    self.sync_viewport(terminal).await?;
                    self.dirty = true;
                }
                _ => {}
            }
        }
        Ok(false)
    }

    async fn handle_key_press(&mut self, key: KeyEvent) -> Result<bool> {
        let action = self.input.handle_key(key, self.app_state.mode);
        tracing::trace!(?action, "key press");

        let result = match action {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text("Quitting...");
                return Ok(true);
            }
            KeyAction::Move(direction) => {
                self.movement.press(direction, Instant::now());
                return Ok(false);
            }
            KeyAction::Attack => {
                if !self.consumer.action_enabled() {
                    return Ok(false);
                }
                self.handle.attack().await.map(drop)
            }
            KeyAction::EndCombat => self.handle.end_combat().await.map(drop),
            KeyAction::UsePotion => self.handle.use_potion().await.map(drop),
            KeyAction::ToggleInventory => {
                self.app_state.toggle_inventory();
                self.movement.clear();
                self.dirty = true;
                return Ok(false);
            }
            KeyAction::CloseModal => {
                self.app_state.exit_to_normal();
                self.dirty = true;
                return Ok(false);
            }
            KeyAction::None => return Ok(false),
        };

        match result {
            Ok(()) => Ok(false),
            // Rejections already reached the log through the notifier.
            Err(RuntimeError::Combat(error)) => {
                tracing::debug!(%error, "command rejected");
                Ok(false)
            }
            Err(error) => Err(error.into()),
        }
    }

    async fn sync_movement(&mut self) -> Result<()> {
        let movement = self.movement.current(Instant::now());
        if movement != self.sent_movement {
            self.handle.set_movement(movement).await?;
            self.sent_movement = movement;
        }
        Ok(())
    }

    /// Size the camera so one terminal cell shows one map tile.
    async fn sync_viewport(&mut self, terminal: &mut Tui) -> Result<()> {
        let size = terminal.size()?;
        let (cols, rows) = ui::map_viewport(
            Rect::new(0, 0, size.width, size.height),
            &self.cli_config.ui,
        );
        let tile = self.map.tile_size();
        self.handle
            .set_viewport(f32::from(cols.max(1)) * tile, f32::from(rows.max(1)) * tile)
            .await?;
        Ok(())
    }

    fn render(&mut self, terminal: &mut Tui, frames: &watch::Receiver<FrameSnapshot>) -> Result<()> {
        let snapshot = frames.borrow().clone();
        let ctx = RenderContext {
            snapshot: &snapshot,
            map: &self.map,
            ui: &self.consumer,
            app_state: &self.app_state,
            ui_config: &self.cli_config.ui,
            overlay_lines: self.frontend_config.messages.visible_lines,
        };
        ui::render(terminal, &ctx)?;
        self.dirty = false;
        Ok(())
    }
}

//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! sending player input, stepping the simulation, or streaming events from
//! specific topics.
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use game_core::combat::AttackOutcome;
use game_core::{SessionId, TileMap, Vector};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::game_loop::FrameOutcome;
use crate::render::{FrameSnapshot, HudView};
use crate::workers::Command;

/// Read-only view of the live game, as answered by [`RuntimeHandle::query_state`].
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub hud: HudView,
    pub session: Option<SessionId>,
    pub frame: FrameSnapshot,
}

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    frames: watch::Receiver<FrameSnapshot>,
    map: Arc<TileMap>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        frames: watch::Receiver<FrameSnapshot>,
        map: Arc<TileMap>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            frames,
            map,
        }
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(build(reply_tx)).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Replace the held movement input; applied every frame until changed.
    pub async fn set_movement(&self, movement: Vector) -> Result<()> {
        self.send(Command::SetMovement { movement }).await
    }

    /// Resize the camera viewport, in world units.
    pub async fn set_viewport(&self, width: f32, height: f32) -> Result<()> {
        self.send(Command::SetViewport { width, height }).await
    }

    /// Press the attack control.
    pub async fn attack(&self) -> Result<AttackOutcome> {
        Ok(self.request(|reply| Command::Attack { reply }).await??)
    }

    /// Press the end-combat control. Returns true if a session was ended.
    pub async fn end_combat(&self) -> Result<bool> {
        self.request(|reply| Command::EndCombat { reply }).await
    }

    /// Drink a potion. Returns the health restored.
    pub async fn use_potion(&self) -> Result<u32> {
        Ok(self.request(|reply| Command::UsePotion { reply }).await??)
    }

    /// Advance the simulation by one frame of `elapsed` time.
    ///
    /// Used when the runtime runs without a frame interval (headless drivers
    /// and tests); harmless alongside the interval otherwise.
    pub async fn step(&self, elapsed: Duration) -> Result<FrameOutcome> {
        self.request(|reply| Command::Step { elapsed, reply }).await
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameSnapshot> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Ask the simulation worker to stop after the commands already queued.
    pub async fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown).await
    }

    /// Latest rendered frame, updated after every simulated frame.
    pub fn frames(&self) -> watch::Receiver<FrameSnapshot> {
        self.frames.clone()
    }

    /// The dungeon layout. Static for the lifetime of the runtime.
    pub fn map(&self) -> Arc<TileMap> {
        Arc::clone(&self.map)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Ui` - Combat log lines, action control and overlay state
    /// - `Topic::Game` - Session lifecycle and defeats
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut ui_rx = handle.subscribe(Topic::Ui);
    /// while let Ok(event) = ui_rx.recv().await {
    ///     // Append to the message log
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}

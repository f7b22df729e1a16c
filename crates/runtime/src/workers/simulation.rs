//! Simulation worker that owns the authoritative [`GameLoop`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), advances
//! frames on a fixed interval, publishes events to the EventBus and the
//! latest [`FrameSnapshot`] on a watch channel.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use game_core::combat::AttackOutcome;
use game_core::{CombatError, CombatNotifier, SessionId, Vector};

use crate::api::GameSnapshot;
use crate::events::{BusNotifier, Event, EventBus, GameEvent};
use crate::game_loop::{FrameOutcome, GameLoop};
use crate::render::{FrameSnapshot, GameStatus, SnapshotRenderer};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Replace the held movement input.
    SetMovement { movement: Vector },
    /// Resize the camera viewport.
    SetViewport { width: f32, height: f32 },
    /// Attack control pressed.
    Attack {
        reply: oneshot::Sender<Result<AttackOutcome, CombatError>>,
    },
    /// End-combat control pressed.
    EndCombat { reply: oneshot::Sender<bool> },
    /// Potion control pressed.
    UsePotion {
        reply: oneshot::Sender<Result<u32, CombatError>>,
    },
    /// Advance one frame by an explicit amount of time.
    Step {
        elapsed: Duration,
        reply: oneshot::Sender<FrameOutcome>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameSnapshot> },
    /// Stop the worker loop.
    Shutdown,
}

/// Background task that processes gameplay commands and frame ticks.
pub struct SimulationWorker {
    game: GameLoop,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    notifier: BusNotifier,
    renderer: SnapshotRenderer,
    frames: watch::Sender<FrameSnapshot>,
    frame_interval: Option<Duration>,
}

impl SimulationWorker {
    pub fn new(
        game: GameLoop,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        frames: watch::Sender<FrameSnapshot>,
        frame_interval: Option<Duration>,
    ) -> Self {
        info!(
            enemies = game.entities().enemies.len(),
            mode = %game.arbiter().mode(),
            "SimulationWorker initialized"
        );

        Self {
            game,
            command_rx,
            notifier: BusNotifier::new(event_bus.clone()),
            event_bus,
            renderer: SnapshotRenderer::new(),
            frames,
            frame_interval,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        self.notifier.append_log("Welcome to the dungeon!");
        self.render();

        let mut interval = self.frame_interval.map(|period| {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(Command::Shutdown) | None => break,
                    Some(cmd) => self.handle_command(cmd),
                },
                now = next_tick(&mut interval) => {
                    let elapsed = now.duration_since(last_frame);
                    last_frame = now;
                    self.advance(elapsed);
                }
            }
        }
        debug!("SimulationWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SetMovement { movement } => self.game.set_movement(movement),
            Command::SetViewport { width, height } => {
                self.game.set_viewport(width, height);
                self.render();
            }
            Command::Attack { reply } => {
                let result = self.with_transitions(|game, notifier| game.attack(notifier));
                if reply.send(result).is_err() {
                    debug!("Attack reply channel closed (caller dropped)");
                }
            }
            Command::EndCombat { reply } => {
                let ended = self.with_transitions(|game, notifier| game.end_combat(notifier));
                if reply.send(ended).is_err() {
                    debug!("EndCombat reply channel closed (caller dropped)");
                }
            }
            Command::UsePotion { reply } => {
                let result = self.with_transitions(|game, notifier| game.use_potion(notifier));
                if reply.send(result).is_err() {
                    debug!("UsePotion reply channel closed (caller dropped)");
                }
            }
            Command::Step { elapsed, reply } => {
                let outcome = self.advance(elapsed);
                if reply.send(outcome).is_err() {
                    debug!("Step reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                let snapshot = GameSnapshot {
                    hud: self.game.hud(),
                    session: self.game.arbiter().session_id(),
                    frame: self.renderer.snapshot().clone(),
                };
                if reply.send(snapshot).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => {}
        }
    }

    /// Simulates and renders one frame.
    fn advance(&mut self, elapsed: Duration) -> FrameOutcome {
        let outcome = self.with_transitions(|game, notifier| game.update(elapsed, notifier));
        for defeated in &outcome.defeated {
            self.event_bus
                .publish(Event::Game(GameEvent::EnemyDefeated {
                    enemy: defeated.id,
                    archetype: defeated.archetype.clone(),
                    coins: defeated.coins,
                }));
        }
        self.render();
        outcome
    }

    fn render(&mut self) {
        self.game.render(&mut self.renderer);
        self.frames.send_replace(self.renderer.snapshot().clone());
    }

    /// Runs `f` against the game loop and publishes the session and status
    /// changes it caused.
    fn with_transitions<T>(
        &mut self,
        f: impl FnOnce(&mut GameLoop, &mut BusNotifier) -> T,
    ) -> T {
        let session_before = self.game.arbiter().session_id();
        let status_before = self.game.status();

        let result = f(&mut self.game, &mut self.notifier);

        let session_after = self.game.arbiter().session_id();
        if session_before != session_after {
            if let Some(session) = session_before {
                self.publish_session_ended(session);
            }
            if let Some(session) = session_after {
                self.event_bus.publish(Event::Game(GameEvent::SessionStarted {
                    session,
                    combatants: self.game.arbiter().queue().to_vec(),
                }));
            }
        }
        if status_before == GameStatus::Playing && self.game.status() == GameStatus::Defeated {
            self.event_bus.publish(Event::Game(GameEvent::PlayerDefeated));
        }
        result
    }

    fn publish_session_ended(&self, session: SessionId) {
        self.event_bus
            .publish(Event::Game(GameEvent::SessionEnded { session }));
    }
}

async fn next_tick(interval: &mut Option<Interval>) -> Instant {
    match interval {
        Some(interval) => interval.tick().await,
        None => std::future::pending().await,
    }
}

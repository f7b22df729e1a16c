//! Turn arbitration between real-time and turn-based combat.
//!
//! The arbiter owns at most one [`CombatSession`]. Everything that changes the
//! session goes through here; combatant data is read and written through the
//! [`EntitiesState`] passed into each call, never cached.
//!
//! Pacing delays (enemy action delay, between-turn gap) are modelled as a
//! single [`PendingStep`] tagged with the session id that scheduled it. The
//! host advances time with [`CombatArbiter::tick`]; a step whose session id no
//! longer matches the live session is discarded instead of fired.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::config::CombatConfig;
use crate::state::{Combatant, EntitiesState, EntityId};

use super::damage::{AttackOutcome, drink_potion, strike};
use super::{
    CombatError, CombatMode, CombatNotifier, CombatSession, PacedStep, PendingStep, SessionId,
    SessionState, TurnQueue,
};

/// What the player chose to do on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    /// Strike the first living enemy in the queue.
    Attack,
    /// Drink a potion restoring up to `heal` health.
    UsePotion { heal: u32 },
    /// Pass the turn.
    Wait,
}

/// Result of a successful [`CombatArbiter::player_act`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerActOutcome {
    pub attack: Option<AttackOutcome>,
    pub healed: Option<u32>,
    /// True when the action ended the session.
    pub session_ended: bool,
}

#[derive(Clone, Debug)]
pub struct CombatArbiter {
    config: CombatConfig,
    session: Option<CombatSession>,
    pending: Option<PendingStep>,
    next_session: u64,
}

impl CombatArbiter {
    pub fn new(config: CombatConfig) -> Self {
        Self {
            config,
            session: None,
            pending: None,
            next_session: 1,
        }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn mode(&self) -> CombatMode {
        self.config.mode
    }

    pub fn state(&self) -> SessionState {
        if self.session.is_some() {
            SessionState::Active
        } else {
            SessionState::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// True while free movement is suspended by a turn-based session.
    pub fn locks_movement(&self) -> bool {
        self.is_active() && self.config.mode.allows_sessions()
    }

    pub fn session(&self) -> Option<&CombatSession> {
        self.session.as_ref()
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|session| session.id)
    }

    pub fn current_combatant(&self) -> Option<EntityId> {
        self.session.as_ref().and_then(CombatSession::current)
    }

    /// True only between the player's turn announcement and their action.
    pub fn is_player_turn(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.player_turn_open)
    }

    /// Engaged combatants in turn order; empty when no session is active.
    pub fn queue(&self) -> &[EntityId] {
        match &self.session {
            Some(session) => session.queue.entries(),
            None => &[],
        }
    }

    pub fn pending_step(&self) -> Option<&PendingStep> {
        self.pending.as_ref()
    }

    /// Starts a session with `initiator` first, followed by `candidates`.
    ///
    /// Candidates that are dead, duplicated, or equal to the initiator are
    /// skipped. On success the first turn is announced immediately.
    pub fn request_session(
        &mut self,
        candidates: &[EntityId],
        initiator: EntityId,
        entities: &mut EntitiesState,
        notifier: &mut dyn CombatNotifier,
    ) -> Result<SessionId, CombatError> {
        if !self.config.mode.allows_sessions() {
            trace!(target: "combat", "session request ignored in real-time mode");
            return Err(CombatError::RealTimeMode);
        }
        if let Some(session) = &self.session {
            trace!(target: "combat", session = %session.id, "session request ignored, already active");
            return Err(CombatError::SessionActive {
                session: session.id,
            });
        }
        if !entities.is_alive(initiator) {
            return Err(CombatError::InitiatorUnavailable { initiator });
        }

        let mut entries = vec![initiator];
        for &candidate in candidates {
            if !entries.contains(&candidate) && entities.is_alive(candidate) {
                entries.push(candidate);
            }
        }
        let queue = TurnQueue::new(entries);
        if !queue.is_contested() {
            return Err(CombatError::NoCandidates);
        }

        let id = SessionId(self.next_session);
        self.next_session += 1;
        info!(
            target: "combat",
            session = %id,
            combatants = queue.len(),
            mode = %self.config.mode,
            "combat session started"
        );
        self.session = Some(CombatSession::new(id, queue));

        notifier.show_session_overlay(true);
        notifier.set_player_action_enabled(false);
        notifier.append_log("Combat started.");

        self.schedule(PacedStep::AnnounceTurn, Duration::ZERO);
        self.run_due(entities, notifier);
        Ok(id)
    }

    /// Closes the current turn and moves to the next living combatant.
    ///
    /// Dead combatants are dropped first. The session ends if the player is
    /// gone or no enemy remains. Otherwise the next turn is announced after
    /// the configured turn gap.
    pub fn advance_turn(&mut self, entities: &mut EntitiesState, notifier: &mut dyn CombatNotifier) {
        if self.session.is_none() {
            trace!(target: "combat", "advance_turn without a session");
            return;
        }
        self.advance(entities, notifier);
        self.run_due(entities, notifier);
    }

    /// Resolves the player's action on their turn, then advances.
    pub fn player_act(
        &mut self,
        action: PlayerAction,
        entities: &mut EntitiesState,
        notifier: &mut dyn CombatNotifier,
    ) -> Result<PlayerActOutcome, CombatError> {
        let Some(session) = self.session.as_mut() else {
            notifier.append_log("Not your turn.");
            return Err(CombatError::NoSession);
        };
        if !session.player_turn_open {
            notifier.append_log("Not your turn.");
            return Err(CombatError::NotPlayersTurn {
                current: session.current(),
            });
        }

        let mut outcome = PlayerActOutcome::default();
        match action {
            PlayerAction::Attack => {
                let target = session
                    .queue
                    .entries()
                    .iter()
                    .copied()
                    .find(|&id| !id.is_player() && entities.is_alive(id));
                let Some(hit) = target.and_then(|id| strike(entities, EntityId::PLAYER, id)) else {
                    notifier.append_log("No enemy to attack.");
                    return Err(CombatError::NoTarget);
                };
                let name = entities
                    .get(hit.target)
                    .map_or("enemy", Combatant::display_name);
                notifier.append_log(&format!("You dealt {} damage to the {name}.", hit.damage));
                if hit.defeated {
                    session.queue.remove(hit.target);
                }
                outcome.attack = Some(hit);
            }
            PlayerAction::UsePotion { heal } => {
                let Some(healed) = drink_potion(&mut entities.player, heal) else {
                    notifier.append_log("You have no potions left.");
                    return Err(CombatError::ItemUnavailable {
                        item: crate::state::inventory::keys::POTION,
                    });
                };
                notifier.append_log(&format!("You drink a potion and recover {healed} health."));
                outcome.healed = Some(healed);
            }
            PlayerAction::Wait => notifier.append_log("You hold your ground."),
        }

        let id = session.id;
        debug!(target: "combat", session = %id, ?action, "player acted");
        self.advance(entities, notifier);
        self.run_due(entities, notifier);
        outcome.session_ended = self.session_id() != Some(id);
        Ok(outcome)
    }

    /// Ends the session from any state and cancels pending pacing.
    ///
    /// Returns false (and notifies nothing) when no session was active.
    pub fn end_session(&mut self, notifier: &mut dyn CombatNotifier) -> bool {
        self.pending = None;
        let Some(session) = self.session.take() else {
            return false;
        };
        info!(
            target: "combat",
            session = %session.id,
            turns = session.turns_taken,
            "combat session ended"
        );
        notifier.show_session_overlay(false);
        notifier.set_player_action_enabled(true);
        notifier.append_log("Combat ended.");
        true
    }

    /// Advances pacing timers by `elapsed` and fires whatever became due.
    ///
    /// Also skips a current combatant that died outside its own action
    /// (e.g. killed during the turn gap) without waiting for it to act.
    pub fn tick(
        &mut self,
        elapsed: Duration,
        entities: &mut EntitiesState,
        notifier: &mut dyn CombatNotifier,
    ) {
        if let Some(pending) = self.pending.as_mut() {
            pending.remaining = pending.remaining.saturating_sub(elapsed);
        }
        self.run_due(entities, notifier);

        let Some(session) = &self.session else {
            return;
        };
        if self.pending.is_none()
            && let Some(current) = session.current()
            && !entities.is_alive(current)
        {
            debug!(target: "combat", session = %session.id, %current, "skipping dead combatant");
            self.advance(entities, notifier);
            self.run_due(entities, notifier);
        }
    }

    fn schedule(&mut self, step: PacedStep, delay: Duration) {
        let Some(session) = &self.session else {
            return;
        };
        self.pending = Some(PendingStep {
            session: session.id,
            remaining: delay,
            step,
        });
    }

    /// Fires due steps until one is still waiting or none is left.
    fn run_due(&mut self, entities: &mut EntitiesState, notifier: &mut dyn CombatNotifier) {
        loop {
            let Some(pending) = self.pending else {
                break;
            };
            if !pending.remaining.is_zero() {
                break;
            }
            self.pending = None;
            if self.session_id() != Some(pending.session) {
                debug!(target: "combat", session = %pending.session, "dropping stale paced step");
                continue;
            }
            match pending.step {
                PacedStep::AnnounceTurn => self.announce_turn(entities, notifier),
                PacedStep::EnemyAction(enemy) => self.enemy_action(enemy, entities, notifier),
            }
        }
    }

    fn advance(&mut self, entities: &mut EntitiesState, notifier: &mut dyn CombatNotifier) {
        self.pending = None;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.player_turn_open {
            session.player_turn_open = false;
            notifier.set_player_action_enabled(false);
        }

        let next = session.queue.rotate(|id| entities.is_alive(id));
        if next.is_none() || !session.queue.is_contested() {
            self.end_session(notifier);
            return;
        }
        self.schedule(PacedStep::AnnounceTurn, self.config.turn_gap());
    }

    fn announce_turn(&mut self, entities: &mut EntitiesState, notifier: &mut dyn CombatNotifier) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let current = session.queue.settle(|id| entities.is_alive(id));
        let Some(current) = current.filter(|_| session.queue.is_contested()) else {
            self.end_session(notifier);
            return;
        };
        session.turns_taken += 1;

        if current.is_player() {
            session.player_turn_open = true;
            notifier.set_player_action_enabled(true);
            notifier.append_log("Your turn.");
            return;
        }

        let name = entities
            .get(current)
            .map_or("enemy", Combatant::display_name);
        notifier.append_log(&format!("The {name}'s turn."));
        self.schedule(
            PacedStep::EnemyAction(current),
            self.config.enemy_action_delay(),
        );
    }

    fn enemy_action(
        &mut self,
        enemy: EntityId,
        entities: &mut EntitiesState,
        notifier: &mut dyn CombatNotifier,
    ) {
        if self.current_combatant() != Some(enemy) {
            debug!(target: "combat", %enemy, "enemy action no longer current");
            return;
        }
        if let Some(hit) = strike(entities, enemy, EntityId::PLAYER) {
            let name = entities.get(enemy).map_or("enemy", Combatant::display_name);
            notifier.append_log(&format!("The {name} hits you for {} damage.", hit.damage));
            if hit.defeated {
                notifier.append_log("You died. Restart to try again.");
                info!(target: "combat", %enemy, "player defeated");
            }
        }
        self.advance(entities, notifier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{Notification, NullNotifier, RecordingNotifier};
    use crate::config::GameConfig;
    use crate::state::Position;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn immediate(mode: CombatMode) -> CombatArbiter {
        let config = GameConfig::default().with_combat_mode(mode);
        CombatArbiter::new(config.combat.immediate())
    }

    fn paced(mode: CombatMode) -> CombatArbiter {
        let config = GameConfig::default().with_combat_mode(mode);
        CombatArbiter::new(config.combat)
    }

    fn world(archetypes: &[&str]) -> (EntitiesState, Vec<EntityId>) {
        let config = GameConfig::default();
        let mut entities = EntitiesState::with_player(Position::ORIGIN, &config.player);
        let ids = archetypes
            .iter()
            .enumerate()
            .map(|(i, name)| {
                entities.spawn_enemy(
                    Position::new(20.0 + i as f32, 0.0),
                    name,
                    config.archetypes.get_or_fallback(name),
                )
            })
            .collect();
        (entities, ids)
    }

    #[test]
    fn real_time_mode_never_starts_a_session() {
        let mut arbiter = immediate(CombatMode::RealTime);
        let (mut entities, enemies) = world(&["slime"]);
        let mut notifier = RecordingNotifier::new();

        let result = arbiter.request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier);
        assert_eq!(result, Err(CombatError::RealTimeMode));
        assert_eq!(arbiter.state(), SessionState::Inactive);
        assert!(notifier.calls.is_empty());
    }

    #[test]
    fn second_request_is_a_no_op() {
        let mut arbiter = paced(CombatMode::Hybrid);
        let (mut entities, enemies) = world(&["slime", "bat"]);
        let mut notifier = NullNotifier;

        let id = arbiter
            .request_session(&enemies[..1], EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();
        let queue_before = arbiter.queue().to_vec();

        let second = arbiter.request_session(&enemies[1..], EntityId::PLAYER, &mut entities, &mut notifier);
        assert_eq!(second, Err(CombatError::SessionActive { session: id }));
        assert_eq!(arbiter.queue(), queue_before.as_slice());
    }

    #[test]
    fn session_starts_on_players_turn() {
        let mut arbiter = paced(CombatMode::Hybrid);
        let (mut entities, enemies) = world(&["slime"]);
        let mut notifier = RecordingNotifier::new();

        arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();
        assert!(arbiter.is_active());
        assert!(arbiter.locks_movement());
        assert_eq!(arbiter.queue(), &[EntityId::PLAYER, enemies[0]]);
        assert_eq!(arbiter.current_combatant(), Some(EntityId::PLAYER));
        assert!(arbiter.is_player_turn());
        assert_eq!(notifier.overlay_visible(), Some(true));
        assert_eq!(notifier.player_action_enabled(), Some(true));
        assert!(notifier.has_log("Combat started."));
    }

    #[test]
    fn acting_out_of_turn_changes_nothing() {
        let mut arbiter = paced(CombatMode::Hybrid);
        let (mut entities, enemies) = world(&["slime"]);
        let mut notifier = RecordingNotifier::new();
        arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();
        arbiter
            .player_act(PlayerAction::Wait, &mut entities, &mut notifier)
            .unwrap();
        // Now waiting on the turn gap before the slime's turn.
        assert!(!arbiter.is_player_turn());

        let slime_health = entities.get(enemies[0]).unwrap().health;
        let queue = arbiter.queue().to_vec();
        let result = arbiter.player_act(PlayerAction::Attack, &mut entities, &mut notifier);

        assert!(matches!(result, Err(CombatError::NotPlayersTurn { .. })));
        assert!(notifier.has_log("Not your turn."));
        assert_eq!(entities.get(enemies[0]).unwrap().health, slime_health);
        assert_eq!(arbiter.queue(), queue.as_slice());
    }

    #[test]
    fn player_act_without_session_is_rejected() {
        let mut arbiter = paced(CombatMode::Hybrid);
        let (mut entities, _) = world(&["slime"]);
        let mut notifier = RecordingNotifier::new();
        let result = arbiter.player_act(PlayerAction::Attack, &mut entities, &mut notifier);
        assert_eq!(result, Err(CombatError::NoSession));
        assert!(notifier.has_log("Not your turn."));
    }

    #[test]
    fn lethal_attack_ends_session_within_one_advance() {
        let mut arbiter = paced(CombatMode::Hybrid);
        let (mut entities, enemies) = world(&["slime"]);
        entities.get_mut(enemies[0]).unwrap().health.current = 5;
        let mut notifier = RecordingNotifier::new();
        arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();

        let outcome = arbiter
            .player_act(PlayerAction::Attack, &mut entities, &mut notifier)
            .unwrap();

        assert!(outcome.attack.unwrap().defeated);
        assert!(outcome.session_ended);
        assert_eq!(arbiter.state(), SessionState::Inactive);
        assert!(arbiter.queue().is_empty());
        assert_eq!(notifier.overlay_visible(), Some(false));
        assert!(notifier.has_log("Combat ended."));
    }

    #[test]
    fn defeated_target_leaves_the_queue() {
        let mut arbiter = immediate(CombatMode::Hybrid);
        let (mut entities, enemies) = world(&["bat", "skeleton"]);
        entities.get_mut(enemies[0]).unwrap().health.current = 1;
        let mut notifier = NullNotifier;
        arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();

        arbiter
            .player_act(PlayerAction::Attack, &mut entities, &mut notifier)
            .unwrap();

        assert!(arbiter.is_active());
        assert!(!arbiter.queue().contains(&enemies[0]));
        // The skeleton acted immediately and it is the player's turn again.
        assert!(arbiter.is_player_turn());
        assert_eq!(entities.player.health.current, 100 - 8);
    }

    #[test]
    fn enemy_turn_waits_for_its_delay() {
        let mut arbiter = paced(CombatMode::Hybrid);
        let (mut entities, enemies) = world(&["slime"]);
        let mut notifier = RecordingNotifier::new();
        arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();
        arbiter
            .player_act(PlayerAction::Wait, &mut entities, &mut notifier)
            .unwrap();

        arbiter.tick(Duration::from_millis(150), &mut entities, &mut notifier);
        assert_eq!(arbiter.current_combatant(), Some(enemies[0]));
        assert!(notifier.has_log("The slime's turn."));

        arbiter.tick(Duration::from_millis(699), &mut entities, &mut notifier);
        assert_eq!(entities.player.health.current, 100);

        arbiter.tick(Duration::from_millis(1), &mut entities, &mut notifier);
        assert_eq!(entities.player.health.current, 94);
        assert!(notifier.has_log("The slime hits you for 6 damage."));

        arbiter.tick(Duration::from_millis(150), &mut entities, &mut notifier);
        assert!(arbiter.is_player_turn());
    }

    #[test]
    fn end_session_is_idempotent() {
        let mut arbiter = paced(CombatMode::TurnBased);
        let (mut entities, enemies) = world(&["slime"]);
        let mut notifier = RecordingNotifier::new();
        arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();

        assert!(arbiter.end_session(&mut notifier));
        assert_eq!(arbiter.state(), SessionState::Inactive);
        let calls = notifier.calls.len();

        assert!(!arbiter.end_session(&mut notifier));
        assert_eq!(arbiter.state(), SessionState::Inactive);
        assert_eq!(notifier.calls.len(), calls);
    }

    #[test]
    fn stale_enemy_action_never_fires_after_end() {
        let mut arbiter = paced(CombatMode::Hybrid);
        let (mut entities, enemies) = world(&["skeleton"]);
        let mut notifier = RecordingNotifier::new();
        let first = arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();
        arbiter
            .player_act(PlayerAction::Wait, &mut entities, &mut notifier)
            .unwrap();
        arbiter.tick(Duration::from_millis(150), &mut entities, &mut notifier);
        assert!(matches!(
            arbiter.pending_step(),
            Some(PendingStep { step: PacedStep::EnemyAction(_), .. })
        ));

        arbiter.end_session(&mut notifier);
        let second = arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();
        assert_ne!(first, second);

        arbiter.tick(Duration::from_secs(5), &mut entities, &mut notifier);
        assert_eq!(entities.player.health.current, 100);
        assert!(arbiter.is_player_turn());
        assert_eq!(arbiter.session_id(), Some(second));
    }

    #[test]
    fn enemy_killed_during_gap_is_skipped() {
        let mut arbiter = paced(CombatMode::Hybrid);
        let (mut entities, enemies) = world(&["slime", "bat"]);
        let mut notifier = RecordingNotifier::new();
        arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();
        arbiter
            .player_act(PlayerAction::Wait, &mut entities, &mut notifier)
            .unwrap();
        entities.get_mut(enemies[0]).unwrap().health.drain(u32::MAX);

        arbiter.tick(Duration::from_millis(150), &mut entities, &mut notifier);
        assert_eq!(arbiter.current_combatant(), Some(enemies[1]));
        assert!(!arbiter.queue().contains(&enemies[0]));
    }

    #[test]
    fn player_death_ends_session() {
        let mut arbiter = immediate(CombatMode::TurnBased);
        let (mut entities, enemies) = world(&["dragon"]);
        entities.player.health.current = 30;
        let mut notifier = RecordingNotifier::new();
        arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();

        let outcome = arbiter
            .player_act(PlayerAction::Attack, &mut entities, &mut notifier)
            .unwrap();

        assert!(outcome.session_ended);
        assert_eq!(entities.player.health.current, 0);
        assert!(notifier.has_log("You died."));
        assert!(!arbiter.is_active());
    }

    #[test]
    fn potion_consumes_the_turn() {
        let mut arbiter = paced(CombatMode::Hybrid);
        let (mut entities, enemies) = world(&["slime"]);
        entities.player.health.current = 50;
        let mut notifier = RecordingNotifier::new();
        arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();

        let outcome = arbiter
            .player_act(PlayerAction::UsePotion { heal: 30 }, &mut entities, &mut notifier)
            .unwrap();
        assert_eq!(outcome.healed, Some(30));
        assert_eq!(entities.player.health.current, 80);
        assert!(!arbiter.is_player_turn());
    }

    #[test]
    fn all_enemies_dead_ends_on_next_advance() {
        let mut arbiter = paced(CombatMode::Hybrid);
        let (mut entities, enemies) = world(&["slime", "slime", "bat"]);
        let mut notifier = NullNotifier;
        arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();
        for id in &enemies {
            entities.get_mut(*id).unwrap().health.drain(u32::MAX);
        }

        arbiter.advance_turn(&mut entities, &mut notifier);
        assert_eq!(arbiter.state(), SessionState::Inactive);
    }

    #[test]
    fn control_is_disabled_outside_players_turn() {
        let mut arbiter = paced(CombatMode::Hybrid);
        let (mut entities, enemies) = world(&["slime"]);
        let mut notifier = RecordingNotifier::new();
        arbiter
            .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
            .unwrap();
        notifier.drain();

        arbiter
            .player_act(PlayerAction::Wait, &mut entities, &mut notifier)
            .unwrap();
        assert_eq!(
            notifier.calls.first(),
            Some(&Notification::Log("You hold your ground.".into()))
        );
        assert_eq!(notifier.player_action_enabled(), Some(false));
    }

    /// Randomized sequences of kills and advances keep the queue consistent:
    /// the cursor is on a living combatant while active, and the session ends
    /// as soon as no enemy is left.
    #[test]
    fn advance_turn_keeps_queue_consistent() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let mut arbiter = paced(CombatMode::TurnBased);
            let count = rng.gen_range(1..=5);
            let names: Vec<&str> = (0..count).map(|_| "skeleton").collect();
            let (mut entities, enemies) = world(&names);
            let mut notifier = NullNotifier;
            arbiter
                .request_session(&enemies, EntityId::PLAYER, &mut entities, &mut notifier)
                .unwrap();

            for _ in 0..20 {
                if rng.gen_bool(0.4) {
                    let victim = enemies[rng.gen_range(0..enemies.len())];
                    if let Some(enemy) = entities.get_mut(victim) {
                        enemy.health.drain(u32::MAX);
                    }
                }
                let queue_before = arbiter.queue().len();
                arbiter.advance_turn(&mut entities, &mut notifier);

                let living_enemies = enemies.iter().filter(|id| entities.is_alive(**id)).count();
                if living_enemies == 0 {
                    assert!(!arbiter.is_active());
                    break;
                }
                assert!(arbiter.is_active());
                assert!(arbiter.queue().len() <= queue_before);
                let current = arbiter.current_combatant().unwrap();
                assert!(entities.is_alive(current));
                assert!(arbiter.queue().iter().all(|id| entities.is_alive(*id)));
            }
        }
    }
}

//! Per-frame orchestration of movement, proximity checks and combat.
//!
//! [`GameLoop`] is synchronous and owns no clock. The simulation worker feeds
//! it elapsed time; tests drive it directly with fixed steps.

use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use game_core::combat::{AttackOutcome, drink_potion, strike};
use game_core::movement::{chase, roam, steer_player};
use game_core::state::inventory::keys;
use game_core::{
    CombatArbiter, CombatError, CombatMode, CombatNotifier, EntitiesState, EntityId, GameConfig,
    PlayerAction, SessionId, TileMap, Vector,
};

use crate::render::{Camera, FrameRenderer, GameStatus, HudView};

/// Enemy removed from the registry during a frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefeatedEnemy {
    pub id: EntityId,
    pub archetype: String,
    pub coins: u32,
}

/// What happened during one [`GameLoop::update`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutcome {
    /// Clamped step actually simulated, in seconds.
    pub dt: f32,
    /// Enemies that closed within escalation range this frame.
    pub triggered: Vec<EntityId>,
    /// Session started by this frame's proximity checks.
    pub session_started: Option<SessionId>,
    pub defeated: Vec<DefeatedEnemy>,
}

pub struct GameLoop {
    config: GameConfig,
    map: TileMap,
    entities: EntitiesState,
    arbiter: CombatArbiter,
    camera: Camera,
    movement: Vector,
    status: GameStatus,
    rng: StdRng,
}

impl GameLoop {
    /// Coins dropped by a defeated enemy, inclusive.
    pub const COIN_DROP: (u32, u32) = (1, 4);

    pub fn new(config: GameConfig, map: TileMap, entities: EntitiesState, rng: StdRng) -> Self {
        let arbiter = CombatArbiter::new(config.combat);
        let mut camera = Camera::default();
        camera.follow(entities.player.position, map.pixel_size());
        Self {
            config,
            map,
            entities,
            arbiter,
            camera,
            movement: Vector::ZERO,
            status: GameStatus::Playing,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn entities(&self) -> &EntitiesState {
        &self.entities
    }

    /// Mutable registry access for scripted setups and tests.
    pub fn entities_mut(&mut self) -> &mut EntitiesState {
        &mut self.entities
    }

    pub fn arbiter(&self) -> &CombatArbiter {
        &self.arbiter
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Raw movement input held until replaced; normalized when applied.
    pub fn set_movement(&mut self, movement: Vector) {
        self.movement = movement;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.camera.width = width.max(0.0);
        self.camera.height = height.max(0.0);
        self.camera
            .follow(self.entities.player.position, self.map.pixel_size());
    }

    /// Runs one full frame: simulation followed by rendering.
    pub fn frame(
        &mut self,
        elapsed: Duration,
        renderer: &mut dyn FrameRenderer,
        notifier: &mut dyn CombatNotifier,
    ) -> FrameOutcome {
        let outcome = self.update(elapsed, notifier);
        self.render(renderer);
        outcome
    }

    /// Advances the simulation by `elapsed`, clamped to the maximum step.
    pub fn update(&mut self, elapsed: Duration, notifier: &mut dyn CombatNotifier) -> FrameOutcome {
        let dt = elapsed
            .as_secs_f32()
            .min(self.config.frame.max_step)
            .max(0.0);
        let mut outcome = FrameOutcome {
            dt,
            ..FrameOutcome::default()
        };

        let playing = self.status == GameStatus::Playing;
        let locked = self.arbiter.locks_movement();
        if playing && !locked {
            steer_player(&mut self.entities.player, self.movement, dt, &self.map);
        }
        self.entities.player.animation.advance(dt);

        if playing {
            outcome.triggered = self.update_enemies(dt, locked);
        }

        if !outcome.triggered.is_empty() && !self.arbiter.is_active() {
            match self.arbiter.request_session(
                &outcome.triggered,
                EntityId::PLAYER,
                &mut self.entities,
                notifier,
            ) {
                Ok(session) => outcome.session_started = Some(session),
                Err(error) => debug!(target: "game_loop", %error, "session request was a no-op"),
            }
        }

        self.arbiter
            .tick(Duration::from_secs_f32(dt), &mut self.entities, notifier);
        outcome.defeated = self.reap(notifier);
        self.refresh_status();
        outcome
    }

    /// Each living enemy checks its distance to the player and either asks
    /// for a session, chases, or idles. Returns the enemies that escalated.
    fn update_enemies(&mut self, dt: f32, locked: bool) -> Vec<EntityId> {
        let player_position = self.entities.player.position;
        let mode = self.arbiter.mode();
        let trigger_radius = self.config.combat.trigger_radius;
        let roam_chance = self.config.frame.idle_roam_chance.clamp(0.0, 1.0);
        let roam_distance = self.config.frame.idle_roam_distance.abs();

        let mut triggered = Vec::new();
        for enemy in self.entities.enemies.iter_mut().filter(|e| e.is_alive()) {
            enemy.animation.advance(dt);
            let Some(detection_radius) = enemy.as_enemy().map(|data| data.detection_radius)
            else {
                continue;
            };
            let distance = enemy.position.distance(player_position);

            if distance < detection_radius {
                let escalates = match mode {
                    CombatMode::RealTime => false,
                    CombatMode::TurnBased => true,
                    CombatMode::Hybrid => distance < trigger_radius,
                };
                if escalates {
                    triggered.push(enemy.id);
                    continue;
                }
                if !locked {
                    chase(enemy, player_position, dt, &self.map);
                }
            } else if self.rng.gen_bool(roam_chance) {
                let offset = Vector::new(
                    self.rng.gen_range(-roam_distance..=roam_distance),
                    self.rng.gen_range(-roam_distance..=roam_distance),
                );
                roam(enemy, offset, &self.map);
            }
        }
        triggered
    }

    /// Removes dead enemies and pays out their coins.
    fn reap(&mut self, notifier: &mut dyn CombatNotifier) -> Vec<DefeatedEnemy> {
        let dead = self.entities.remove_dead_enemies();
        let mut defeated = Vec::with_capacity(dead.len());
        for enemy in dead {
            let (low, high) = Self::COIN_DROP;
            let coins = self.rng.gen_range(low..=high);
            if let Some(player) = self.entities.player.as_player_mut() {
                player.inventory.add(keys::COIN, coins);
            }
            notifier.append_log("Enemy defeated.");
            info!(
                target: "game_loop",
                enemy = %enemy.id,
                archetype = enemy.display_name(),
                coins,
                "enemy defeated"
            );
            defeated.push(DefeatedEnemy {
                id: enemy.id,
                archetype: enemy.display_name().to_owned(),
                coins,
            });
        }
        defeated
    }

    fn refresh_status(&mut self) {
        if self.status == GameStatus::Playing && !self.entities.player.is_alive() {
            info!(target: "game_loop", "player defeated");
            self.status = GameStatus::Defeated;
        }
    }

    /// Draws the frame back to front: map, enemies, player, HUD.
    pub fn render(&mut self, renderer: &mut dyn FrameRenderer) {
        self.camera
            .follow(self.entities.player.position, self.map.pixel_size());
        renderer.draw_map(&self.map, &self.camera);
        for enemy in &self.entities.enemies {
            renderer.draw_enemy(enemy, &self.camera);
        }
        renderer.draw_player(&self.entities.player, &self.camera);
        renderer.draw_hud(&self.hud());
    }

    pub fn hud(&self) -> HudView {
        let player = &self.entities.player;
        let inventory = player
            .as_player()
            .map(|data| data.inventory.clone())
            .unwrap_or_default();
        HudView {
            health: player.health,
            coins: inventory.coins(),
            potions: inventory.quantity(keys::POTION),
            inventory: inventory.items,
            mode: self.arbiter.mode(),
            status: self.status,
            in_session: self.arbiter.is_active(),
            player_turn: self.arbiter.is_player_turn(),
            current: self.arbiter.current_combatant(),
            queue: self.arbiter.queue().to_vec(),
        }
    }

    /// The attack control.
    ///
    /// During a turn-based session this is the player's turn action. Otherwise
    /// it hits the nearest enemy within the player's reach.
    pub fn attack(&mut self, notifier: &mut dyn CombatNotifier) -> Result<AttackOutcome, CombatError> {
        self.ensure_alive(notifier)?;
        if self.arbiter.locks_movement() {
            let outcome =
                self.arbiter
                    .player_act(PlayerAction::Attack, &mut self.entities, notifier)?;
            self.refresh_status();
            return outcome.attack.ok_or(CombatError::NoTarget);
        }

        let reach = self.entities.player.attack_range;
        let Some(hit) = self
            .entities
            .nearest_enemy_within(reach)
            .and_then(|target| strike(&mut self.entities, EntityId::PLAYER, target))
        else {
            notifier.append_log("No enemy close enough to attack.");
            return Err(CombatError::NoTarget);
        };
        let name = self
            .entities
            .get(hit.target)
            .map_or("enemy", |enemy| enemy.display_name());
        notifier.append_log(&format!("You dealt {} damage to the {name}.", hit.damage));
        trace!(target: "game_loop", target = %hit.target, damage = hit.damage, "real-time attack");
        Ok(hit)
    }

    /// The end-combat control. Returns true if a session was ended.
    pub fn end_combat(&mut self, notifier: &mut dyn CombatNotifier) -> bool {
        self.arbiter.end_session(notifier)
    }

    /// Drinks a potion. Inside a session this spends the player's turn.
    pub fn use_potion(&mut self, notifier: &mut dyn CombatNotifier) -> Result<u32, CombatError> {
        self.ensure_alive(notifier)?;
        let heal = self.config.player.potion_heal;
        if self.arbiter.locks_movement() {
            let outcome = self.arbiter.player_act(
                PlayerAction::UsePotion { heal },
                &mut self.entities,
                notifier,
            )?;
            self.refresh_status();
            return outcome.healed.ok_or(CombatError::ItemUnavailable {
                item: keys::POTION,
            });
        }

        let Some(healed) = drink_potion(&mut self.entities.player, heal) else {
            notifier.append_log("You have no potions left.");
            return Err(CombatError::ItemUnavailable { item: keys::POTION });
        };
        notifier.append_log(&format!("You drink a potion and recover {healed} health."));
        Ok(healed)
    }

    fn ensure_alive(&self, notifier: &mut dyn CombatNotifier) -> Result<(), CombatError> {
        if self.status == GameStatus::Defeated {
            notifier.append_log("You are dead.");
            return Err(CombatError::PlayerDefeated);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{MapDimensions, MapOracle, NullNotifier, Position, RecordingNotifier};
    use rand::SeedableRng;

    fn arena_loop(mode: CombatMode) -> GameLoop {
        let config = GameConfig::default().with_combat_mode(mode);
        let map = TileMap::open_arena(MapDimensions::new(20, 20), config.map.tile_size);
        let entities = EntitiesState::with_player(map.to_pixel_center(5, 5), &config.player);
        GameLoop::new(config, map, entities, StdRng::seed_from_u64(9))
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut game = arena_loop(CombatMode::RealTime);
        let outcome = game.update(Duration::from_millis(500), &mut NullNotifier);
        assert_eq!(outcome.dt, 0.05);
    }

    #[test]
    fn player_moves_at_configured_speed() {
        let mut game = arena_loop(CombatMode::RealTime);
        let start = game.entities().player.position;
        game.set_movement(Vector::new(1.0, 0.0));
        game.update(Duration::from_millis(50), &mut NullNotifier);
        let moved = game.entities().player.position.x - start.x;
        assert!((moved - 6.0).abs() < 1e-3);
    }

    #[test]
    fn real_time_attack_needs_reach() {
        let mut game = arena_loop(CombatMode::RealTime);
        let mut notifier = RecordingNotifier::new();
        let slime_stats = *game.config().archetypes.get_or_fallback("slime");
        let player = game.entities().player.position;
        game.entities_mut()
            .spawn_enemy(Position::new(player.x + 100.0, player.y), "slime", &slime_stats);

        assert_eq!(game.attack(&mut notifier), Err(CombatError::NoTarget));
        assert!(notifier.has_log("No enemy close enough to attack."));

        let near = game
            .entities_mut()
            .spawn_enemy(Position::new(player.x + 20.0, player.y), "slime", &slime_stats);
        let hit = game.attack(&mut notifier).unwrap();
        assert_eq!(hit.target, near);
        assert_eq!(hit.damage, 12);
    }

    #[test]
    fn dead_enemies_pay_coins() {
        let mut game = arena_loop(CombatMode::RealTime);
        let mut notifier = RecordingNotifier::new();
        let bat_stats = *game.config().archetypes.get_or_fallback("bat");
        let player = game.entities().player.position;
        let bat = game
            .entities_mut()
            .spawn_enemy(Position::new(player.x + 10.0, player.y), "bat", &bat_stats);
        game.attack(&mut notifier).unwrap();
        game.attack(&mut notifier).unwrap();

        let outcome = game.update(Duration::from_millis(16), &mut notifier);
        assert_eq!(outcome.defeated.len(), 1);
        assert_eq!(outcome.defeated[0].id, bat);
        let coins = game.hud().coins;
        assert!((1..=4).contains(&coins));
        assert_eq!(coins, outcome.defeated[0].coins);
        assert!(notifier.has_log("Enemy defeated."));
    }

    #[test]
    fn potion_outside_combat_heals() {
        let mut game = arena_loop(CombatMode::Hybrid);
        let mut notifier = RecordingNotifier::new();
        game.entities_mut().player.health.current = 40;
        assert_eq!(game.use_potion(&mut notifier), Ok(30));
        assert_eq!(game.hud().potions, 1);
        assert_eq!(game.hud().health.current, 70);
    }
}

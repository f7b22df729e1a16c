use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use game_content::{MapGenerator, Spawner};
use game_core::{CombatMode, GameConfig, MapOracle, NullNotifier, Vector};
use runtime::{GameLoop, GameStatus};

const FRAME: Duration = Duration::from_millis(16);

fn generated(mode: CombatMode, seed: u64) -> GameLoop {
    let mut config = GameConfig::default().with_combat_mode(mode);
    config.combat = config.combat.immediate();

    let mut rng = StdRng::seed_from_u64(seed);
    let map = MapGenerator::new(config.map).generate(&mut rng);
    let entities = Spawner::new(&config).populate(&map, &mut rng);
    GameLoop::new(config, map, entities, StdRng::seed_from_u64(seed + 1))
}

/// Runs `frames` frames, pressing attack whenever it is the player's turn.
fn play(game: &mut GameLoop, frames: usize, mut check: impl FnMut(&GameLoop)) {
    let mut notifier = NullNotifier;
    for frame in 0..frames {
        // Wander so the player meets more than the first room.
        let heading = if (frame / 60) % 2 == 0 { 1.0 } else { -1.0 };
        game.set_movement(Vector::new(heading, 0.5 * heading));
        game.update(FRAME, &mut notifier);
        if game.arbiter().is_player_turn() {
            let _ = game.attack(&mut notifier);
        }
        check(game);
    }
}

#[test]
fn generated_world_keeps_everyone_on_floor() {
    for seed in [1, 2, 3] {
        let mut game = generated(CombatMode::Hybrid, seed);
        assert!(!game.entities().enemies.is_empty());

        play(&mut game, 400, |game| {
            let map = game.map();
            assert!(map.is_walkable_at(game.entities().player.position));
            for enemy in &game.entities().enemies {
                assert!(
                    map.is_walkable_at(enemy.position),
                    "seed {seed}: {} left the floor",
                    enemy.display_name()
                );
            }
        });
    }
}

#[test]
fn generated_world_sessions_always_name_a_living_combatant() {
    for mode in [CombatMode::Hybrid, CombatMode::TurnBased] {
        let mut game = generated(mode, 11);

        play(&mut game, 400, |game| {
            if game.status() == GameStatus::Defeated || !game.arbiter().is_active() {
                return;
            }
            let current = game
                .arbiter()
                .current_combatant()
                .expect("active session has a current combatant");
            assert!(game.entities().is_alive(current), "{mode}: {current} is dead");
            assert!(game.arbiter().queue().contains(&current));
        });
    }
}

#[test]
fn real_time_generated_world_never_locks_movement() {
    let mut game = generated(CombatMode::RealTime, 5);
    play(&mut game, 300, |game| {
        assert!(!game.arbiter().is_active());
        assert!(!game.arbiter().locks_movement());
    });
}

//! Real-time movement rules.
//!
//! All functions take the map through [`MapOracle`] and mutate only the
//! combatant they are given.

use crate::env::MapOracle;
use crate::state::{Combatant, Position, Vector};

/// Moves `combatant` by `velocity * dt` with axis-separated collision.
///
/// The full step is tried first. If the destination cell is blocked, the
/// horizontal and vertical components are tried on their own so the
/// combatant slides along walls instead of sticking to them.
pub fn move_by(combatant: &mut Combatant, velocity: Vector, dt: f32, map: &impl MapOracle) {
    let step = velocity * dt;
    let target = combatant.position + step;
    if map.is_walkable_at(target) {
        combatant.position = target;
        return;
    }

    let slide_x = Position::new(combatant.position.x + step.x, combatant.position.y);
    if map.is_walkable_at(slide_x) {
        combatant.position = slide_x;
    }
    let slide_y = Position::new(combatant.position.x, combatant.position.y + step.y);
    if map.is_walkable_at(slide_y) {
        combatant.position = slide_y;
    }
}

/// Applies a raw movement input (keyboard or stick) to the player.
///
/// Input is normalized so diagonals are not faster; inputs with negligible
/// magnitude are ignored. Returns true if the player moved.
pub fn steer_player(player: &mut Combatant, input: Vector, dt: f32, map: &impl MapOracle) -> bool {
    let Some(direction) = input.normalized() else {
        return false;
    };
    let before = player.position;
    move_by(player, direction * player.speed, dt, map);
    if let Some(data) = player.as_player_mut() {
        data.facing = direction;
    }
    player.position != before
}

/// Steps `enemy` straight toward `target` at its own speed.
pub fn chase(enemy: &mut Combatant, target: Position, dt: f32, map: &impl MapOracle) {
    if let Some(direction) = (target - enemy.position).normalized() {
        move_by(enemy, direction * enemy.speed, dt, map);
    }
}

/// Nudges an idle enemy by `offset` if the destination is walkable.
pub fn roam(enemy: &mut Combatant, offset: Vector, map: &impl MapOracle) {
    let target = enemy.position + offset;
    if map.is_walkable_at(target) {
        enemy.position = target;
    }
}

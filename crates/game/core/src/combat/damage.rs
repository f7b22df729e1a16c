//! Health changes between combatants in the registry.

use crate::state::inventory::keys;
use crate::state::{Combatant, EntitiesState, EntityId};

/// Result of one resolved strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: EntityId,
    pub target: EntityId,
    /// Health actually removed (less than the attack damage on an overkill).
    pub damage: u32,
    pub remaining: u32,
    pub defeated: bool,
}

/// Applies `attacker`'s attack damage to `target`, flooring health at zero.
///
/// Returns `None` when either combatant is missing or already dead.
pub fn strike(
    entities: &mut EntitiesState,
    attacker: EntityId,
    target: EntityId,
) -> Option<AttackOutcome> {
    let damage = entities
        .get(attacker)
        .filter(|combatant| combatant.is_alive())?
        .attack_damage;
    let victim = entities
        .get_mut(target)
        .filter(|combatant| combatant.is_alive())?;

    let dealt = victim.health.drain(damage);
    Some(AttackOutcome {
        attacker,
        target,
        damage: dealt,
        remaining: victim.health.current,
        defeated: !victim.is_alive(),
    })
}

/// Consumes one potion and restores up to `heal` health.
///
/// Returns the health actually restored, or `None` if `player` is dead, is
/// not a player, or carries no potion.
pub fn drink_potion(player: &mut Combatant, heal: u32) -> Option<u32> {
    if !player.is_alive() {
        return None;
    }
    let data = player.as_player_mut()?;
    if !data.inventory.take_one(keys::POTION) {
        return None;
    }
    Some(player.health.restore(heal))
}

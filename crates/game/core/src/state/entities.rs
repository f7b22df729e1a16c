use super::{Combatant, EntityId, Position};
use crate::config::{ArchetypeStats, PlayerConfig};

/// Registry owning every combatant in the dungeon.
///
/// The combat session only stores [`EntityId`]s; every read or health change
/// goes through this registry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: Combatant,
    pub enemies: Vec<Combatant>,
    /// Sequential id allocator. Never reused; 0 is reserved for the player.
    next_id: u32,
}

impl EntitiesState {
    pub fn new(player: Combatant) -> Self {
        Self {
            player,
            enemies: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a registry with a player built from `config` at `position`.
    pub fn with_player(position: Position, config: &PlayerConfig) -> Self {
        Self::new(Combatant::player(EntityId::PLAYER, position, config))
    }

    /// Spawns an enemy and returns its freshly allocated id.
    pub fn spawn_enemy(
        &mut self,
        position: Position,
        archetype: &str,
        stats: &ArchetypeStats,
    ) -> EntityId {
        let id = self.allocate_id();
        self.enemies
            .push(Combatant::enemy(id, position, archetype, stats));
        id
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Returns a combatant by id (player or enemy).
    pub fn get(&self, id: EntityId) -> Option<&Combatant> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Combatant> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    /// True when `id` names a combatant that still has health.
    ///
    /// Unknown ids (already removed from the registry) count as dead.
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(Combatant::is_alive)
    }

    /// Removes enemies whose health reached zero and returns them.
    pub fn remove_dead_enemies(&mut self) -> Vec<Combatant> {
        let (dead, alive): (Vec<_>, Vec<_>) = std::mem::take(&mut self.enemies)
            .into_iter()
            .partition(|enemy| !enemy.is_alive());
        self.enemies = alive;
        dead
    }

    /// Nearest living enemy within `range` of the player.
    pub fn nearest_enemy_within(&self, range: f32) -> Option<EntityId> {
        self.enemies
            .iter()
            .filter(|enemy| enemy.is_alive())
            .map(|enemy| (enemy.id, enemy.distance_to(&self.player)))
            .filter(|(_, distance)| *distance < range)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn registry() -> EntitiesState {
        let config = GameConfig::default();
        EntitiesState::with_player(Position::ORIGIN, &config.player)
    }

    #[test]
    fn ids_are_sequential_and_skip_player() {
        let config = GameConfig::default();
        let slime = config.archetypes.get_or_fallback("slime");
        let mut entities = registry();
        let a = entities.spawn_enemy(Position::new(10.0, 0.0), "slime", slime);
        let b = entities.spawn_enemy(Position::new(20.0, 0.0), "slime", slime);
        assert_eq!(a, EntityId(1));
        assert_eq!(b, EntityId(2));
        assert!(entities.get(EntityId::PLAYER).unwrap().is_player());
    }

    #[test]
    fn removed_enemies_count_as_dead() {
        let config = GameConfig::default();
        let slime = config.archetypes.get_or_fallback("slime");
        let mut entities = registry();
        let id = entities.spawn_enemy(Position::new(10.0, 0.0), "slime", slime);
        entities.get_mut(id).unwrap().health.drain(100);

        let dead = entities.remove_dead_enemies();
        assert_eq!(dead.len(), 1);
        assert!(!entities.is_alive(id));
        assert!(entities.get(id).is_none());
    }

    #[test]
    fn nearest_enemy_respects_range() {
        let config = GameConfig::default();
        let bat = config.archetypes.get_or_fallback("bat");
        let mut entities = registry();
        let far = entities.spawn_enemy(Position::new(30.0, 0.0), "bat", bat);
        let near = entities.spawn_enemy(Position::new(0.0, 20.0), "bat", bat);
        assert_eq!(entities.nearest_enemy_within(36.0), Some(near));
        entities.get_mut(near).unwrap().health.drain(100);
        assert_eq!(entities.nearest_enemy_within(36.0), Some(far));
        assert_eq!(entities.nearest_enemy_within(10.0), None);
    }
}

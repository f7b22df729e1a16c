//! Combatant data shared by the player and enemies.
//!
//! Both kinds carry the same combat-relevant fields (position, health,
//! damage, speed); kind-specific data lives in [`CombatantKind`].

use super::{AnimationTimer, EntityId, InventoryState, Position, ResourceMeter, Vector};
use crate::config::{ArchetypeStats, PlayerConfig};

/// A participant in movement and combat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: EntityId,
    pub position: Position,
    pub health: ResourceMeter,
    pub attack_damage: u32,
    /// Reach of a real-time melee swing, in world units.
    pub attack_range: f32,
    /// Movement speed in world units per second.
    pub speed: f32,
    pub animation: AnimationTimer,
    pub kind: CombatantKind,
}

/// Kind-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantKind {
    Player(PlayerData),
    Enemy(EnemyData),
}

#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerData {
    pub inventory: InventoryState,
    pub facing: Vector,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyData {
    pub archetype: String,
    /// Distance within which the enemy notices and chases the player.
    pub detection_radius: f32,
    pub is_boss: bool,
}

impl Combatant {
    /// Melee reach shared by every combatant in the prototype.
    pub const DEFAULT_ATTACK_RANGE: f32 = 36.0;

    pub fn player(id: EntityId, position: Position, config: &PlayerConfig) -> Self {
        Self {
            id,
            position,
            health: ResourceMeter::full(config.max_health),
            attack_damage: config.attack_damage,
            attack_range: config.attack_range,
            speed: config.speed,
            animation: AnimationTimer::new(AnimationTimer::PLAYER_FRAME_SECS),
            kind: CombatantKind::Player(PlayerData {
                inventory: InventoryState::starter(),
                facing: Vector::new(0.0, 1.0),
            }),
        }
    }

    pub fn enemy(
        id: EntityId,
        position: Position,
        archetype: impl Into<String>,
        stats: &ArchetypeStats,
    ) -> Self {
        Self {
            id,
            position,
            health: ResourceMeter::full(stats.health),
            attack_damage: stats.damage,
            attack_range: Self::DEFAULT_ATTACK_RANGE,
            speed: stats.speed,
            animation: AnimationTimer::new(AnimationTimer::ENEMY_FRAME_SECS),
            kind: CombatantKind::Enemy(EnemyData {
                archetype: archetype.into(),
                detection_radius: stats.detection_radius,
                is_boss: stats.boss,
            }),
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, CombatantKind::Player(_))
    }

    pub fn as_player(&self) -> Option<&PlayerData> {
        match &self.kind {
            CombatantKind::Player(data) => Some(data),
            CombatantKind::Enemy(_) => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerData> {
        match &mut self.kind {
            CombatantKind::Player(data) => Some(data),
            CombatantKind::Enemy(_) => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&EnemyData> {
        match &self.kind {
            CombatantKind::Enemy(data) => Some(data),
            CombatantKind::Player(_) => None,
        }
    }

    /// Human-readable name used in log lines.
    pub fn display_name(&self) -> &str {
        match &self.kind {
            CombatantKind::Player(_) => "you",
            CombatantKind::Enemy(enemy) => &enemy.archetype,
        }
    }

    pub fn distance_to(&self, other: &Combatant) -> f32 {
        self.position.distance(other.position)
    }

    /// Builder-style override for tests and scripted scenarios.
    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = ResourceMeter::full(health);
        self
    }

    #[must_use]
    pub fn with_attack_damage(mut self, damage: u32) -> Self {
        self.attack_damage = damage;
        self
    }
}

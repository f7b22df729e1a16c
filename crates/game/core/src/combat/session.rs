use std::time::Duration;

use crate::state::EntityId;

/// Identifier of one combat session.
///
/// Allocated sequentially by the arbiter and never reused, so a paced step
/// tagged with an old id can always be told apart from the live session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a turn-based session is running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SessionState {
    #[default]
    Inactive,
    Active,
}

/// Ordered list of engaged combatants with a cursor on the current one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnQueue {
    entries: Vec<EntityId>,
    index: usize,
}

impl TurnQueue {
    pub fn new(entries: Vec<EntityId>) -> Self {
        Self { entries, index: 0 }
    }

    pub fn entries(&self) -> &[EntityId] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains(&id)
    }

    pub fn current(&self) -> Option<EntityId> {
        self.entries.get(self.index).copied()
    }

    /// True while the player and at least one other combatant remain.
    pub fn is_contested(&self) -> bool {
        self.contains(EntityId::PLAYER) && self.entries.iter().any(|id| !id.is_player())
    }

    /// Moves the cursor past the current combatant to the next living one.
    ///
    /// Dead entries are dropped in the same pass. Returns the newly current
    /// combatant, or `None` when nobody in the queue is alive.
    pub fn rotate(&mut self, is_alive: impl Fn(EntityId) -> bool) -> Option<EntityId> {
        if self.entries.is_empty() {
            return None;
        }
        let start = (self.index + 1) % self.entries.len();
        self.select_from(start, is_alive)
    }

    /// Like [`rotate`](Self::rotate) but keeps the current combatant if alive.
    pub fn settle(&mut self, is_alive: impl Fn(EntityId) -> bool) -> Option<EntityId> {
        if self.entries.is_empty() {
            return None;
        }
        let start = self.index % self.entries.len();
        self.select_from(start, is_alive)
    }

    /// Removes `id`, keeping the cursor on the same combatant where possible.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let Some(position) = self.entries.iter().position(|entry| *entry == id) else {
            return false;
        };
        self.entries.remove(position);
        if position < self.index {
            self.index -= 1;
        }
        if self.index >= self.entries.len() {
            self.index = 0;
        }
        true
    }

    fn select_from(&mut self, start: usize, is_alive: impl Fn(EntityId) -> bool) -> Option<EntityId> {
        let len = self.entries.len();
        let chosen = (0..len)
            .map(|offset| self.entries[(start + offset) % len])
            .find(|&id| is_alive(id));

        self.entries.retain(|&id| is_alive(id));
        self.index = chosen
            .and_then(|id| self.entries.iter().position(|entry| *entry == id))
            .unwrap_or(0);
        chosen
    }
}

/// One live turn-based session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatSession {
    pub id: SessionId,
    pub queue: TurnQueue,
    /// Set only between "your turn" and the player's action.
    pub player_turn_open: bool,
    /// Number of turns announced so far.
    pub turns_taken: u32,
}

impl CombatSession {
    pub fn new(id: SessionId, queue: TurnQueue) -> Self {
        Self {
            id,
            queue,
            player_turn_open: false,
            turns_taken: 0,
        }
    }

    pub fn current(&self) -> Option<EntityId> {
        self.queue.current()
    }
}

/// Work the arbiter has deferred to keep combat readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PacedStep {
    /// Announce whoever the queue cursor points at.
    AnnounceTurn,
    /// Let this enemy take its automatic action.
    EnemyAction(EntityId),
}

/// A deferred step, tagged with the session that scheduled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingStep {
    pub session: SessionId,
    pub remaining: Duration,
    pub step: PacedStep,
}

//! Utilities for reacting to runtime events inside UI layers.
use runtime::{Event, GameEvent, UiEvent};

use crate::message::{MessageEntry, MessageLevel, MessageLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}

/// Tracks the UI-facing state the notifier drives: the combat log, whether
/// the attack control is usable, and whether the session overlay is shown.
#[derive(Clone, Debug)]
pub struct UiStateConsumer {
    log: MessageLog,
    action_enabled: bool,
    overlay_visible: bool,
    defeated: bool,
}

impl UiStateConsumer {
    pub fn new(capacity: usize) -> Self {
        Self {
            log: MessageLog::new(capacity),
            action_enabled: true,
            overlay_visible: false,
            defeated: false,
        }
    }

    pub fn action_enabled(&self) -> bool {
        self.action_enabled
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn defeated(&self) -> bool {
        self.defeated
    }
}

impl EventConsumer for UiStateConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Ui(UiEvent::Log(text)) => {
                self.log.push_text(text.clone());
                EventImpact::redraw()
            }
            Event::Ui(UiEvent::PlayerActionEnabled(enabled)) => {
                self.action_enabled = *enabled;
                EventImpact::redraw()
            }
            Event::Ui(UiEvent::SessionOverlay(visible)) => {
                self.overlay_visible = *visible;
                EventImpact::redraw()
            }
            Event::Game(GameEvent::EnemyDefeated { coins, .. }) => {
                let noun = if *coins == 1 { "coin" } else { "coins" };
                self.log.push_text(format!("You pick up {coins} {noun}."));
                EventImpact::redraw()
            }
            Event::Game(GameEvent::PlayerDefeated) => {
                self.defeated = true;
                self.action_enabled = false;
                self.log.push(MessageEntry::new(
                    "Press q to quit.",
                    None,
                    MessageLevel::Error,
                ));
                EventImpact::redraw()
            }
            Event::Game(GameEvent::SessionStarted { .. } | GameEvent::SessionEnded { .. }) => {
                EventImpact::none()
            }
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EntityId, SessionId};

    #[test]
    fn notifier_events_update_controls() {
        let mut consumer = UiStateConsumer::new(8);
        let impact = consumer
            .on_event(&Event::Ui(UiEvent::SessionOverlay(true)))
            .combine(consumer.on_event(&Event::Ui(UiEvent::PlayerActionEnabled(false))));
        assert!(impact.requires_redraw);
        assert!(consumer.overlay_visible());
        assert!(!consumer.action_enabled());

        consumer.on_event(&Event::Ui(UiEvent::Log("Combat ended.".into())));
        assert_eq!(
            consumer.message_log().recent(1).next().unwrap().text,
            "Combat ended."
        );
    }

    #[test]
    fn session_lifecycle_alone_needs_no_redraw() {
        let mut consumer = UiStateConsumer::new(8);
        let impact = consumer.on_event(&Event::Game(GameEvent::SessionStarted {
            session: SessionId(1),
            combatants: vec![EntityId::PLAYER, EntityId(1)],
        }));
        assert_eq!(impact, EventImpact::none());
        assert!(consumer.message_log().is_empty());
    }

    #[test]
    fn coin_pickups_are_logged() {
        let mut consumer = UiStateConsumer::new(8);
        consumer.on_event(&Event::Game(GameEvent::EnemyDefeated {
            enemy: EntityId(3),
            archetype: "bat".into(),
            coins: 1,
        }));
        assert_eq!(
            consumer.take_message_log().iter().next().unwrap().text,
            "You pick up 1 coin."
        );
    }

    #[test]
    fn defeat_disables_the_attack_control() {
        let mut consumer = UiStateConsumer::new(8);
        consumer.on_event(&Event::Game(GameEvent::PlayerDefeated));
        assert!(consumer.defeated());
        assert!(!consumer.action_enabled());
        assert_eq!(
            consumer.message_log().iter().last().unwrap().level,
            MessageLevel::Error
        );
    }
}

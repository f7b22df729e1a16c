//! Combat arbitration.
//!
//! # Architecture
//!
//! - **Mode**: [`CombatMode`] decides whether turn-based sessions may start.
//! - **Session**: [`CombatSession`] holds the [`TurnQueue`] of engaged ids.
//! - **Arbiter**: [`CombatArbiter`] owns the session lifecycle and paces turns.
//! - **Notifier**: [`CombatNotifier`] carries player-facing feedback out.
//!
//! Health changes go through [`damage`], which only touches the registry.

mod arbiter;
pub mod damage;
mod error;
mod mode;
mod notifier;
mod session;

pub use arbiter::{CombatArbiter, PlayerAction, PlayerActOutcome};
pub use damage::{AttackOutcome, drink_potion, strike};
pub use error::CombatError;
pub use mode::CombatMode;
pub use notifier::{CombatNotifier, Notification, NullNotifier, RecordingNotifier};
pub use session::{CombatSession, PacedStep, PendingStep, SessionId, SessionState, TurnQueue};

//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. [`crate::combat::CombatError`]) are defined in
//! their respective modules alongside the operations they validate. None of
//! them are fatal: the core reports why an operation was a no-op and leaves
//! the state untouched.

/// Severity level of an error, used for categorization and logging.
///
/// - **Recoverable**: the operation may succeed later (e.g. it is not your turn yet)
/// - **Validation**: the request does not make sense in the current configuration
/// - **Internal**: unexpected state inconsistency that indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str;
}

/// How combat is arbitrated between real-time and turn-based play.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CombatMode {
    /// Every actor acts continuously each frame; sessions never start.
    RealTime,
    /// Engaged actors act strictly in queue order.
    TurnBased,
    /// Real-time until an enemy closes within the trigger radius.
    #[default]
    Hybrid,
}

impl CombatMode {
    /// Whether a turn-based session may ever start in this mode.
    pub const fn allows_sessions(self) -> bool {
        !matches!(self, CombatMode::RealTime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_snake_case_names() {
        assert_eq!(CombatMode::from_str("real_time").unwrap(), CombatMode::RealTime);
        assert_eq!(CombatMode::from_str("turn_based").unwrap(), CombatMode::TurnBased);
        assert_eq!(CombatMode::from_str("hybrid").unwrap(), CombatMode::Hybrid);
        assert!(CombatMode::from_str("arcade").is_err());
    }

    #[test]
    fn displays_snake_case_names() {
        assert_eq!(CombatMode::TurnBased.to_string(), "turn_based");
    }

    #[test]
    fn only_real_time_forbids_sessions() {
        assert!(!CombatMode::RealTime.allows_sessions());
        assert!(CombatMode::TurnBased.allows_sessions());
        assert!(CombatMode::Hybrid.allows_sessions());
    }
}

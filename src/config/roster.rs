use super::traits::ConfigSection;
use crate::error::LineupError;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One roster slot and the positions allowed to fill it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRule {
    pub name: String,
    /// Empty means any position (utility slot).
    #[serde(default)]
    pub eligible: Vec<String>,
}

impl SlotRule {
    pub fn new(name: &str, eligible: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            eligible: eligible.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn accepts(&self, player: &Player) -> bool {
        self.eligible.is_empty() || self.eligible.iter().any(|e| player.plays(e))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub slots: Vec<SlotRule>,
    pub min_salary: Option<u32>,
    pub min_expected_points: Option<f64>,
    /// Player ids or names left out of every pool (injuries, late scratches).
    pub excluded: Vec<String>,
}

impl RosterConfig {
    /// Eight-slot classic basketball roster.
    pub fn classic() -> Self {
        Self {
            slots: vec![
                SlotRule::new("pg", &["PG"]),
                SlotRule::new("sg", &["SG"]),
                SlotRule::new("sf", &["SF"]),
                SlotRule::new("pf", &["PF"]),
                SlotRule::new("c", &["C"]),
                SlotRule::new("g", &["PG", "SG", "G"]),
                SlotRule::new("f", &["SF", "PF", "F"]),
                SlotRule::new("util", &[]),
            ],
            min_salary: None,
            min_expected_points: None,
            excluded: Vec::new(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl ConfigSection for RosterConfig {
    fn section_name() -> &'static str {
        "roster"
    }

    fn validate(&self) -> Result<(), LineupError> {
        if self.slots.is_empty() {
            return Err(LineupError::Configuration(
                "Roster must declare at least one slot".to_string()
            ));
        }
        let mut names = HashSet::new();
        for slot in &self.slots {
            if !names.insert(slot.name.as_str()) {
                return Err(LineupError::Configuration(format!(
                    "Roster slot '{}' is declared more than once",
                    slot.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_roster_has_eight_slots() {
        let roster = RosterConfig::classic();
        assert_eq!(roster.slots.len(), 8);
        assert!(roster.validate().is_ok());
    }

    #[test]
    fn test_slot_eligibility() {
        let guard = SlotRule::new("g", &["PG", "SG", "G"]);
        let util = SlotRule::new("util", &[]);
        let swingman = Player::new("8", "Swing", &["sg", "SF"], 5200, 24.0);

        assert!(guard.accepts(&swingman));
        assert!(util.accepts(&swingman));
        assert!(!SlotRule::new("c", &["C"]).accepts(&swingman));
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let mut roster = RosterConfig::classic();
        roster.slots.push(SlotRule::new("pg", &["PG"]));
        assert!(roster.validate().is_err());
    }
}

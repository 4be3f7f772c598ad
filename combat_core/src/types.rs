//! Core enums shared by every combat component

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Combatant class, selecting the on-hit proc behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Paladin,
}

impl CharacterClass {
    /// Get all character classes
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Warrior,
            CharacterClass::Mage,
            CharacterClass::Rogue,
            CharacterClass::Paladin,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "warrior",
            CharacterClass::Mage => "mage",
            CharacterClass::Rogue => "rogue",
            CharacterClass::Paladin => "paladin",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownClass(s.to_string()))
    }
}

/// Elemental affinity of a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Wind,
    Neutral,
}

impl Element {
    /// Get all elements
    pub fn all() -> &'static [Element] {
        &[
            Element::Fire,
            Element::Water,
            Element::Earth,
            Element::Wind,
            Element::Neutral,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Earth => "earth",
            Element::Wind => "wind",
            Element::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::all()
            .iter()
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownElement(s.to_string()))
    }
}

/// Kind of status effect. A combatant holds at most one effect per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEffectKind {
    Stun,
    /// Damage over time
    #[serde(rename = "dot")]
    DamageOverTime,
    HealOverTime,
    AttackBuff,
    DefenseBuff,
    DefenseDebuff,
    MultiHit,
}

impl StatusEffectKind {
    pub fn all() -> &'static [StatusEffectKind] {
        &[
            StatusEffectKind::Stun,
            StatusEffectKind::DamageOverTime,
            StatusEffectKind::HealOverTime,
            StatusEffectKind::AttackBuff,
            StatusEffectKind::DefenseBuff,
            StatusEffectKind::DefenseDebuff,
            StatusEffectKind::MultiHit,
        ]
    }

    /// The stat this kind modifies and the sign of its delta, if any
    pub fn stat_delta(&self) -> Option<(StatKind, i32)> {
        match self {
            StatusEffectKind::AttackBuff => Some((StatKind::Attack, 1)),
            StatusEffectKind::DefenseBuff => Some((StatKind::Defense, 1)),
            StatusEffectKind::DefenseDebuff => Some((StatKind::Defense, -1)),
            _ => None,
        }
    }

    /// When durations of this kind count down
    pub fn tick_policy(&self) -> TickPolicy {
        match self {
            StatusEffectKind::Stun => TickPolicy::BearerTurn,
            _ => TickPolicy::EveryTurn,
        }
    }
}

/// When an effect's remaining duration is decremented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPolicy {
    /// End of every turn, whoever acted
    EveryTurn,
    /// Only at the end of the bearer's own turn
    BearerTurn,
}

/// The three modifiable combat stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatKind::Attack => f.write_str("attack"),
            StatKind::Defense => f.write_str("defense"),
            StatKind::Speed => f.write_str("speed"),
        }
    }
}

/// Kind of action recorded in a combat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Attack,
    /// The actor was stunned and lost the action
    Stunned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_str() {
        assert_eq!("warrior".parse::<CharacterClass>().unwrap(), CharacterClass::Warrior);
        assert_eq!(" Paladin ".parse::<CharacterClass>().unwrap(), CharacterClass::Paladin);
        assert!(matches!(
            "bard".parse::<CharacterClass>(),
            Err(ValidationError::UnknownClass(v)) if v == "bard"
        ));
    }

    #[test]
    fn test_element_from_str() {
        for element in Element::all() {
            assert_eq!(element.as_str().parse::<Element>().unwrap(), *element);
        }
        assert!(matches!(
            "lightning".parse::<Element>(),
            Err(ValidationError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_effect_kind_serialization() {
        let json = serde_json::to_string(&StatusEffectKind::DamageOverTime).unwrap();
        assert_eq!(json, "\"dot\"");
        let json = serde_json::to_string(&StatusEffectKind::DefenseDebuff).unwrap();
        assert_eq!(json, "\"defense_debuff\"");
    }

    #[test]
    fn test_stun_ticks_on_bearer_turn_only() {
        assert_eq!(StatusEffectKind::Stun.tick_policy(), TickPolicy::BearerTurn);
        assert_eq!(StatusEffectKind::DefenseDebuff.tick_policy(), TickPolicy::EveryTurn);
    }
}

//! Tunable combat constants

use super::{ConfigError, ProcTable};
use crate::element::{relation, Affinity};
use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Every number the combat rules read. Defaults reproduce the standard ruleset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    #[serde(default)]
    pub hit: HitConstants,
    #[serde(default)]
    pub multi_hit: MultiHitConstants,
    #[serde(default)]
    pub turns: TurnConstants,
    #[serde(default)]
    pub elements: ElementalConstants,
    #[serde(default)]
    pub procs: ProcTable,
}

impl CombatConstants {
    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_chance("hit.miss_chance", self.hit.miss_chance)?;
        check_chance("hit.crit_chance", self.hit.crit_chance)?;
        check_chance("multi_hit.chance", self.multi_hit.chance)?;
        check_non_negative("hit.crit_multiplier", self.hit.crit_multiplier)?;
        check_non_negative("hit.attack_factor", self.hit.attack_factor)?;
        check_non_negative("hit.defense_factor", self.hit.defense_factor)?;
        check_non_negative("multi_hit.damage_scale", self.multi_hit.damage_scale)?;
        check_non_negative("elements.advantage", self.elements.advantage)?;
        check_non_negative("elements.disadvantage", self.elements.disadvantage)?;

        if self.hit.min_damage == 0 {
            return Err(ConfigError::ValidationError(
                "hit.min_damage must be at least 1".to_string(),
            ));
        }
        if self.turns.max_turns == 0 {
            return Err(ConfigError::ValidationError(
                "turns.max_turns must be at least 1".to_string(),
            ));
        }
        if self.turns.speed_jitter < 0 {
            return Err(ConfigError::ValidationError(format!(
                "turns.speed_jitter must not be negative, got {}",
                self.turns.speed_jitter
            )));
        }

        self.procs.validate()
    }
}

fn check_chance(name: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ValidationError(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

fn check_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Single-hit resolution constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitConstants {
    #[serde(default = "default_miss_chance")]
    pub miss_chance: f64,
    #[serde(default = "default_crit_chance")]
    pub crit_chance: f64,
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    /// Raw damage = attack * attack_factor - defense * defense_factor
    #[serde(default = "default_attack_factor")]
    pub attack_factor: f64,
    #[serde(default = "default_defense_factor")]
    pub defense_factor: f64,
    /// Floor applied to every hit that is not a miss
    #[serde(default = "default_min_damage")]
    pub min_damage: u32,
}

impl Default for HitConstants {
    fn default() -> Self {
        HitConstants {
            miss_chance: default_miss_chance(),
            crit_chance: default_crit_chance(),
            crit_multiplier: default_crit_multiplier(),
            attack_factor: default_attack_factor(),
            defense_factor: default_defense_factor(),
            min_damage: default_min_damage(),
        }
    }
}

fn default_miss_chance() -> f64 {
    0.05
}
fn default_crit_chance() -> f64 {
    0.15
}
fn default_crit_multiplier() -> f64 {
    2.0
}
fn default_attack_factor() -> f64 {
    1.0
}
fn default_defense_factor() -> f64 {
    0.5
}
fn default_min_damage() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiHitConstants {
    /// Effective speed must exceed this to roll for a second hit
    pub speed_threshold: i32,
    pub chance: f64,
    /// Scale applied to the second hit before the minimum-damage floor
    pub damage_scale: f64,
}

impl Default for MultiHitConstants {
    fn default() -> Self {
        MultiHitConstants {
            speed_threshold: 15,
            chance: 0.30,
            damage_scale: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnConstants {
    /// Combat ends in a draw once this many turns have run
    pub max_turns: u32,
    /// Turn-order jitter is drawn from -speed_jitter..=speed_jitter
    pub speed_jitter: i32,
}

impl Default for TurnConstants {
    fn default() -> Self {
        TurnConstants {
            max_turns: 50,
            speed_jitter: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementalConstants {
    pub advantage: f64,
    pub disadvantage: f64,
}

impl Default for ElementalConstants {
    fn default() -> Self {
        ElementalConstants {
            advantage: 1.5,
            disadvantage: 0.8,
        }
    }
}

impl ElementalConstants {
    /// Multiplier for `attacker` hitting `defender`
    pub fn multiplier(&self, attacker: Element, defender: Element) -> f64 {
        match relation(attacker, defender) {
            Affinity::Advantage => self.advantage,
            Affinity::Disadvantage => self.disadvantage,
            Affinity::Even => 1.0,
        }
    }
}

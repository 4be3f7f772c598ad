//! Status effect system - turn-based buffs, debuffs, DoTs and control

pub mod engine;

pub use engine::{
    apply, is_stunned, process_turn_start, tick_and_expire, Application, TurnStartResult,
};

use crate::types::{StatKind, StatusEffectKind};
use serde::{Deserialize, Serialize};

/// An active status effect on a combatant
///
/// Immutable once created apart from the remaining-turn counter, which only
/// the effect engine decrements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    #[serde(rename = "effect_type")]
    pub kind: StatusEffectKind,
    /// Damage per turn for DoT, healing per turn for HoT, stat delta for buffs
    #[serde(rename = "value")]
    pub magnitude: i32,
    #[serde(rename = "duration")]
    pub remaining_turns: u32,
    #[serde(rename = "source_character_id")]
    pub source_id: String,
}

impl StatusEffect {
    pub fn new(
        kind: StatusEffectKind,
        magnitude: i32,
        duration: u32,
        source_id: impl Into<String>,
    ) -> Self {
        StatusEffect {
            kind,
            magnitude,
            remaining_turns: duration,
            source_id: source_id.into(),
        }
    }

    pub fn stun(duration: u32, source_id: impl Into<String>) -> Self {
        Self::new(StatusEffectKind::Stun, 0, duration, source_id)
    }

    pub fn damage_over_time(per_turn: i32, duration: u32, source_id: impl Into<String>) -> Self {
        Self::new(StatusEffectKind::DamageOverTime, per_turn, duration, source_id)
    }

    pub fn heal_over_time(per_turn: i32, duration: u32, source_id: impl Into<String>) -> Self {
        Self::new(StatusEffectKind::HealOverTime, per_turn, duration, source_id)
    }

    pub fn attack_buff(bonus: i32, duration: u32, source_id: impl Into<String>) -> Self {
        Self::new(StatusEffectKind::AttackBuff, bonus, duration, source_id)
    }

    pub fn defense_buff(bonus: i32, duration: u32, source_id: impl Into<String>) -> Self {
        Self::new(StatusEffectKind::DefenseBuff, bonus, duration, source_id)
    }

    pub fn defense_debuff(reduction: i32, duration: u32, source_id: impl Into<String>) -> Self {
        Self::new(StatusEffectKind::DefenseDebuff, reduction, duration, source_id)
    }

    pub fn multi_hit(duration: u32, source_id: impl Into<String>) -> Self {
        Self::new(StatusEffectKind::MultiHit, 0, duration, source_id)
    }

    /// Check if the effect is still active
    pub fn is_active(&self) -> bool {
        self.remaining_turns > 0
    }

    /// Decrement the remaining duration. Returns true if still active.
    pub(crate) fn tick(&mut self) -> bool {
        self.remaining_turns = self.remaining_turns.saturating_sub(1);
        self.is_active()
    }

    /// Signed delta this effect contributes to its stat, if it modifies one
    pub fn stat_delta(&self) -> Option<(StatKind, i32)> {
        self.kind
            .stat_delta()
            .map(|(stat, sign)| (stat, sign.saturating_mul(self.magnitude)))
    }
}

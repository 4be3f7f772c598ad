//! Damage calculation - turning two combatants and a roll stream into hits
//!
//! Formula per hit:
//! - raw = attack * attack_factor - defense * defense_factor
//! - raw *= elemental multiplier
//! - raw *= crit_multiplier on a crit
//! - second hit only: raw *= damage_scale
//! - damage = max(min_damage, floor(raw))
//!
//! Rolls are drawn in a fixed order: miss, crit, then (if eligible) the
//! multi-hit chance and the second hit's crit.

use super::{AttackResult, SubHit};
use crate::combatant::Combatant;
use crate::config::CombatConstants;
use crate::types::StatusEffectKind;
use rand::Rng;

/// Raw damage before crit, scaling and flooring
pub fn base_damage(attacker: &Combatant, defender: &Combatant, constants: &CombatConstants) -> f64 {
    let attack = f64::from(attacker.effective_attack()) * constants.hit.attack_factor;
    let defense = f64::from(defender.effective_defense()) * constants.hit.defense_factor;
    let elemental = constants
        .elements
        .multiplier(attacker.element, defender.element);
    (attack - defense) * elemental
}

/// Floor a raw value to whole damage, never below the minimum
pub fn finalize_damage(raw: f64, min_damage: u32) -> u32 {
    let floored = raw.floor();
    if floored <= f64::from(min_damage) {
        return min_damage;
    }
    if floored >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    floored as u32
}

/// Whether the attacker may roll for a second hit
pub fn multi_hit_eligible(attacker: &Combatant, constants: &CombatConstants) -> bool {
    attacker.effective_speed() > constants.multi_hit.speed_threshold
        || attacker.has_status_effect(StatusEffectKind::MultiHit)
}

/// Resolve one attack action
///
/// A miss ends resolution immediately and draws no further rolls.
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &Combatant,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> AttackResult {
    // Step 1: Miss check
    if rng.gen::<f64>() < constants.hit.miss_chance {
        return AttackResult::miss();
    }

    let base = base_damage(attacker, defender, constants);
    let mut result = AttackResult {
        hits: Vec::with_capacity(2),
        is_miss: false,
    };

    // Step 2: First hit
    result.hits.push(roll_hit(base, 1.0, constants, rng));

    // Step 3: Optional second hit at reduced scale
    if multi_hit_eligible(attacker, constants) && rng.gen::<f64>() < constants.multi_hit.chance {
        result
            .hits
            .push(roll_hit(base, constants.multi_hit.damage_scale, constants, rng));
    }

    result
}

fn roll_hit(base: f64, scale: f64, constants: &CombatConstants, rng: &mut impl Rng) -> SubHit {
    let is_crit = rng.gen::<f64>() < constants.hit.crit_chance;
    let mut raw = base;
    if is_crit {
        raw *= constants.hit.crit_multiplier;
    }
    raw *= scale;

    SubHit {
        raw,
        damage: finalize_damage(raw, constants.hit.min_damage),
        is_crit,
    }
}

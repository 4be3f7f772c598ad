//! Status effect lifecycle: apply, start-of-turn processing, tick and expiry

use super::StatusEffect;
use crate::combatant::Combatant;
use crate::types::{StatusEffectKind, TickPolicy};

/// Outcome of applying an effect to a combatant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Application {
    /// No effect of this kind was active
    Inserted(StatusEffect),
    /// The new effect outlasted the existing one and took its slot
    Replaced {
        previous: StatusEffect,
        applied: StatusEffect,
    },
    /// The existing effect lasts at least as long; it stays unchanged
    Kept(StatusEffect),
}

impl Application {
    /// The effect occupying the slot after application
    pub fn effect(&self) -> &StatusEffect {
        match self {
            Application::Inserted(effect) => effect,
            Application::Replaced { applied, .. } => applied,
            Application::Kept(existing) => existing,
        }
    }

    /// The effect that was newly placed, if any
    pub fn newly_applied(&self) -> Option<&StatusEffect> {
        match self {
            Application::Inserted(effect) => Some(effect),
            Application::Replaced { applied, .. } => Some(applied),
            Application::Kept(_) => None,
        }
    }
}

/// Apply an effect, respecting the one-slot-per-kind rule
///
/// A new instance of a kind already present replaces the existing one only if
/// its duration is strictly longer.
pub fn apply(target: &mut Combatant, effect: StatusEffect) -> Application {
    let existing = target
        .status_effects()
        .iter()
        .position(|e| e.kind == effect.kind);

    let application = match existing {
        Some(index) => {
            let current = &target.status_effects()[index];
            if effect.remaining_turns > current.remaining_turns {
                let previous = std::mem::replace(
                    &mut target.status_effects_mut()[index],
                    effect.clone(),
                );
                Application::Replaced {
                    previous,
                    applied: effect,
                }
            } else {
                return Application::Kept(current.clone());
            }
        }
        None => {
            target.status_effects_mut().push(effect.clone());
            Application::Inserted(effect)
        }
    };

    if let Some((stat, delta)) = application.effect().stat_delta() {
        target.stat_mut(stat).set_modifier(application.effect().kind, delta);
    }

    tracing::trace!(
        target_id = %target.id,
        kind = ?application.effect().kind,
        duration = application.effect().remaining_turns,
        "status effect applied"
    );

    application
}

/// HP changes from start-of-turn effects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnStartResult {
    /// HP actually lost to damage-over-time
    pub damage: u32,
    /// HP actually restored by heal-over-time
    pub healing: u32,
}

impl TurnStartResult {
    /// Net HP change (negative = damage)
    pub fn hp_delta(&self) -> i64 {
        i64::from(self.healing) - i64::from(self.damage)
    }
}

/// Apply DoT and HoT effects at the start of the bearer's turn
///
/// HP never drops below 0 and never exceeds max HP. Effects are processed in
/// application order.
pub fn process_turn_start(combatant: &mut Combatant) -> TurnStartResult {
    let mut result = TurnStartResult::default();

    let ticks: Vec<(StatusEffectKind, u32)> = combatant
        .status_effects()
        .iter()
        .filter(|e| {
            matches!(
                e.kind,
                StatusEffectKind::DamageOverTime | StatusEffectKind::HealOverTime
            )
        })
        .map(|e| (e.kind, e.magnitude.max(0) as u32))
        .collect();

    for (kind, amount) in ticks {
        match kind {
            StatusEffectKind::DamageOverTime => result.damage += combatant.take_damage(amount),
            StatusEffectKind::HealOverTime => result.healing += combatant.heal(amount),
            _ => {}
        }
    }

    result
}

/// True iff an active stun is present
pub fn is_stunned(combatant: &Combatant) -> bool {
    combatant
        .status_effect(StatusEffectKind::Stun)
        .is_some_and(|e| e.is_active())
}

/// Decrement durations and remove expired effects
///
/// Run once per combatant at the end of every turn. `bearer_turn` is true when
/// this combatant was the actor; effects with [`TickPolicy::BearerTurn`] only
/// count down then. Returns the effects that expired.
pub fn tick_and_expire(combatant: &mut Combatant, bearer_turn: bool) -> Vec<StatusEffect> {
    for effect in combatant.status_effects_mut().iter_mut() {
        let ticks = match effect.kind.tick_policy() {
            TickPolicy::EveryTurn => true,
            TickPolicy::BearerTurn => bearer_turn,
        };
        if ticks {
            effect.tick();
        }
    }

    let (expired, remaining): (Vec<StatusEffect>, Vec<StatusEffect>) = combatant
        .status_effects_mut()
        .drain(..)
        .partition(|e| !e.is_active());
    *combatant.status_effects_mut() = remaining;

    for effect in &expired {
        if let Some((stat, _)) = effect.stat_delta() {
            combatant.stat_mut(stat).remove_modifier(effect.kind);
        }
        tracing::trace!(target_id = %combatant.id, kind = ?effect.kind, "status effect expired");
    }

    expired
}

//! Stat - a base value plus status-effect modifiers

use crate::types::StatusEffectKind;
use serde::{Deserialize, Serialize};

/// A delta contributed by one active status effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    pub source: StatusEffectKind,
    pub delta: i32,
}

/// A combat stat with at most one modifier per effect kind
///
/// Final value is calculated as `max(0, base + Σ delta)` on every read, so
/// removing a modifier restores the exact pre-effect value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub base: i32,
    modifiers: Vec<StatModifier>,
}

impl Stat {
    /// Create a new Stat with the given base
    pub fn with_base(base: i32) -> Self {
        Stat {
            base,
            modifiers: Vec::new(),
        }
    }

    /// Effective value, never negative
    pub fn compute(&self) -> i32 {
        let total = self
            .modifiers
            .iter()
            .fold(self.base, |acc, m| acc.saturating_add(m.delta));
        total.max(0)
    }

    /// Sum of all modifier deltas
    pub fn total_delta(&self) -> i32 {
        self.modifiers.iter().map(|m| m.delta).sum()
    }

    pub fn modifiers(&self) -> &[StatModifier] {
        &self.modifiers
    }

    /// Insert or replace the modifier for `source`
    pub(crate) fn set_modifier(&mut self, source: StatusEffectKind, delta: i32) {
        match self.modifiers.iter_mut().find(|m| m.source == source) {
            Some(existing) => existing.delta = delta,
            None => self.modifiers.push(StatModifier { source, delta }),
        }
    }

    /// Remove the modifier for `source`, if present
    pub(crate) fn remove_modifier(&mut self, source: StatusEffectKind) -> Option<StatModifier> {
        let index = self.modifiers.iter().position(|m| m.source == source)?;
        Some(self.modifiers.remove(index))
    }

    /// Drop every modifier
    pub(crate) fn reset_to_base(&mut self) {
        self.modifiers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_basic() {
        let stat = Stat::with_base(12);
        assert_eq!(stat.compute(), 12);
    }

    #[test]
    fn test_compute_with_modifiers() {
        let mut stat = Stat::with_base(10);
        stat.set_modifier(StatusEffectKind::DefenseBuff, 4);
        stat.set_modifier(StatusEffectKind::DefenseDebuff, -2);
        assert_eq!(stat.compute(), 12);
        assert_eq!(stat.total_delta(), 2);
    }

    #[test]
    fn test_replace_modifier_same_source() {
        let mut stat = Stat::with_base(10);
        stat.set_modifier(StatusEffectKind::AttackBuff, 2);
        stat.set_modifier(StatusEffectKind::AttackBuff, 5);
        assert_eq!(stat.modifiers().len(), 1);
        assert_eq!(stat.compute(), 15);
    }

    #[test]
    fn test_remove_restores_base() {
        let mut stat = Stat::with_base(10);
        stat.set_modifier(StatusEffectKind::DefenseDebuff, -3);
        assert_eq!(stat.compute(), 7);

        let removed = stat.remove_modifier(StatusEffectKind::DefenseDebuff);
        assert_eq!(removed.map(|m| m.delta), Some(-3));
        assert_eq!(stat.compute(), 10);
        assert!(stat.remove_modifier(StatusEffectKind::DefenseDebuff).is_none());
    }

    #[test]
    fn test_compute_clamps_at_zero() {
        let mut stat = Stat::with_base(1);
        stat.set_modifier(StatusEffectKind::DefenseDebuff, -5);
        assert_eq!(stat.compute(), 0);
    }

    #[test]
    fn test_reset_to_base() {
        let mut stat = Stat::with_base(8);
        stat.set_modifier(StatusEffectKind::AttackBuff, 2);
        stat.reset_to_base();
        assert_eq!(stat.compute(), 8);
        assert!(stat.modifiers().is_empty());
    }
}

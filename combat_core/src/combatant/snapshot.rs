//! CombatantSnapshot - public state captured for replay

use super::Combatant;
use crate::effect::StatusEffect;
use crate::types::{CharacterClass, Element, StatusEffectKind};
use serde::{Deserialize, Serialize};

/// Deep copy of a combatant's visible state at one point of a combat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub id: String,
    pub name: String,
    #[serde(rename = "character_class")]
    pub class: CharacterClass,
    pub level: u32,
    pub max_hp: u32,
    pub current_hp: u32,
    /// Effective values, modifiers included
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub element: Element,
    pub status_effects: Vec<StatusEffect>,
    pub is_alive: bool,
}

impl From<&Combatant> for CombatantSnapshot {
    fn from(c: &Combatant) -> Self {
        CombatantSnapshot {
            id: c.id.clone(),
            name: c.name.clone(),
            class: c.class,
            level: c.level,
            max_hp: c.max_hp,
            current_hp: c.current_hp(),
            attack: c.effective_attack(),
            defense: c.effective_defense(),
            speed: c.effective_speed(),
            element: c.element,
            status_effects: c.status_effects().to_vec(),
            is_alive: c.is_alive(),
        }
    }
}

impl CombatantSnapshot {
    pub fn has_status_effect(&self, kind: StatusEffectKind) -> bool {
        self.status_effects.iter().any(|e| e.kind == kind)
    }

    /// HP as a percentage of max, for display
    pub fn hp_percent(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        (self.current_hp as f64 / self.max_hp as f64 * 100.0).clamp(0.0, 100.0)
    }
}

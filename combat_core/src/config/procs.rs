//! Class proc table - the on-hit status effect each class can trigger

use super::ConfigError;
use crate::effect::StatusEffect;
use crate::types::{CharacterClass, StatusEffectKind};
use serde::{Deserialize, Serialize};

/// Who receives a proc's effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcTarget {
    Defender,
    #[serde(rename = "self")]
    Attacker,
}

/// One row of the proc table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProc {
    /// Chance per landed attack (0.0 to 1.0)
    pub chance: f64,
    pub effect: StatusEffectKind,
    #[serde(default)]
    pub magnitude: i32,
    pub duration: u32,
    pub target: ProcTarget,
}

impl ClassProc {
    /// Build the effect instance this proc applies
    pub fn effect_from(&self, source_id: &str) -> StatusEffect {
        StatusEffect::new(self.effect, self.magnitude, self.duration, source_id)
    }
}

/// Proc configuration for every class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcTable {
    #[serde(default = "default_warrior")]
    pub warrior: ClassProc,
    #[serde(default = "default_mage")]
    pub mage: ClassProc,
    #[serde(default = "default_rogue")]
    pub rogue: ClassProc,
    #[serde(default = "default_paladin")]
    pub paladin: ClassProc,
}

impl Default for ProcTable {
    fn default() -> Self {
        ProcTable {
            warrior: default_warrior(),
            mage: default_mage(),
            rogue: default_rogue(),
            paladin: default_paladin(),
        }
    }
}

impl ProcTable {
    pub fn for_class(&self, class: CharacterClass) -> &ClassProc {
        match class {
            CharacterClass::Warrior => &self.warrior,
            CharacterClass::Mage => &self.mage,
            CharacterClass::Rogue => &self.rogue,
            CharacterClass::Paladin => &self.paladin,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for class in CharacterClass::all() {
            let entry = self.for_class(*class);
            if !(0.0..=1.0).contains(&entry.chance) {
                return Err(ConfigError::ValidationError(format!(
                    "procs.{}.chance must be within [0, 1], got {}",
                    class, entry.chance
                )));
            }
            if entry.duration == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "procs.{}.duration must be at least 1",
                    class
                )));
            }
        }
        Ok(())
    }
}

fn default_warrior() -> ClassProc {
    ClassProc {
        chance: 0.20,
        effect: StatusEffectKind::DefenseDebuff,
        magnitude: 2,
        duration: 2,
        target: ProcTarget::Defender,
    }
}

fn default_mage() -> ClassProc {
    ClassProc {
        chance: 0.40,
        effect: StatusEffectKind::DamageOverTime,
        magnitude: 3,
        duration: 3,
        target: ProcTarget::Defender,
    }
}

fn default_rogue() -> ClassProc {
    ClassProc {
        chance: 0.30,
        effect: StatusEffectKind::Stun,
        magnitude: 0,
        duration: 1,
        target: ProcTarget::Defender,
    }
}

fn default_paladin() -> ClassProc {
    ClassProc {
        chance: 0.20,
        effect: StatusEffectKind::AttackBuff,
        magnitude: 2,
        duration: 2,
        target: ProcTarget::Attacker,
    }
}

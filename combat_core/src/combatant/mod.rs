//! Combatant - one side of a fight, owned by the simulation for its duration

mod input;
mod snapshot;
mod stat;

pub use input::CombatantInput;
pub use snapshot::CombatantSnapshot;
pub use stat::{Stat, StatModifier};

use crate::effect::StatusEffect;
use crate::types::{CharacterClass, Element, StatKind, StatusEffectKind};
use serde::{Deserialize, Serialize};

/// Complete combat state for one combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    // === Identity ===
    pub id: String,
    pub name: String,
    pub class: CharacterClass,
    pub element: Element,
    pub level: u32,

    // === Resources ===
    pub max_hp: u32,
    current_hp: u32,

    // === Stats ===
    pub attack: Stat,
    pub defense: Stat,
    pub speed: Stat,

    // === Active Effects ===
    /// One slot per effect kind, in application order
    #[serde(default)]
    status_effects: Vec<StatusEffect>,
}

impl Combatant {
    /// Create a combatant at full HP with no effects
    ///
    /// Callers holding untrusted data go through [`CombatantInput`] instead,
    /// which validates before constructing.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        class: CharacterClass,
        element: Element,
        max_hp: u32,
        attack: i32,
        defense: i32,
        speed: i32,
    ) -> Self {
        Combatant {
            id: id.into(),
            name: name.into(),
            class,
            element,
            level: 1,
            max_hp,
            current_hp: max_hp,
            attack: Stat::with_base(attack),
            defense: Stat::with_base(defense),
            speed: Stat::with_base(speed),
            status_effects: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn effective_attack(&self) -> i32 {
        self.attack.compute()
    }

    pub fn effective_defense(&self) -> i32 {
        self.defense.compute()
    }

    pub fn effective_speed(&self) -> i32 {
        self.speed.compute()
    }

    pub fn stat(&self, kind: StatKind) -> &Stat {
        match kind {
            StatKind::Attack => &self.attack,
            StatKind::Defense => &self.defense,
            StatKind::Speed => &self.speed,
        }
    }

    pub(crate) fn stat_mut(&mut self, kind: StatKind) -> &mut Stat {
        match kind {
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::Speed => &mut self.speed,
        }
    }

    /// Apply damage and return the HP actually lost. HP never drops below 0.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    /// Apply healing and return the HP actually restored. Overheal is discarded.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_hp - self.current_hp);
        self.current_hp += restored;
        restored
    }

    // === Status Effects ===

    pub fn status_effects(&self) -> &[StatusEffect] {
        &self.status_effects
    }

    pub fn has_status_effect(&self, kind: StatusEffectKind) -> bool {
        self.status_effects.iter().any(|e| e.kind == kind)
    }

    pub fn status_effect(&self, kind: StatusEffectKind) -> Option<&StatusEffect> {
        self.status_effects.iter().find(|e| e.kind == kind)
    }

    pub(crate) fn status_effects_mut(&mut self) -> &mut Vec<StatusEffect> {
        &mut self.status_effects
    }

    /// Restore full HP and drop every effect and modifier
    pub fn reset_for_combat(&mut self) {
        self.current_hp = self.max_hp;
        self.status_effects.clear();
        self.attack.reset_to_base();
        self.defense.reset_to_base();
        self.speed.reset_to_base();
    }

    /// Capture the public state for a combat log
    pub fn snapshot(&self) -> CombatantSnapshot {
        CombatantSnapshot::from(self)
    }
}

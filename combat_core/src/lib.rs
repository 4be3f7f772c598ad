//! combat_core - Deterministic turn-based combat resolution
//!
//! This library provides:
//! - Combatant: Stat block, HP and active status effects for one side
//! - Elemental modifier: Damage multiplier for an attacker/defender element pair
//! - Status effect engine: Apply, tick and expire stuns, DoTs, buffs and debuffs
//! - Damage calculator: Miss, crit and multi-hit resolution of one attack
//! - Simulator: Seeded turn loop producing a replayable CombatLog
//! - Batch runs: Many seeds in parallel, summarized

pub mod batch;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod effect;
pub mod element;
pub mod error;
pub mod prelude;
pub mod types;

#[cfg(test)]
mod test_support;

// Re-export core types for convenience
pub use batch::{simulate_batch, BatchSummary};
pub use combat::{
    simulate_request, CombatAction, CombatLog, CombatRequest, CombatTurn, Simulator, Termination,
};
pub use combatant::{Combatant, CombatantInput, CombatantSnapshot, Stat};
pub use config::{load_constants, parse_constants, CombatConstants, ConfigError};
pub use damage::{resolve_attack, AttackResult};
pub use effect::{Application, StatusEffect};
pub use error::{CombatError, ValidationError};
pub use types::{ActionType, CharacterClass, Element, StatKind, StatusEffectKind};

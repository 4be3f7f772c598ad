//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::{Combatant, CombatantInput, CombatantSnapshot};
pub use crate::types::{ActionType, CharacterClass, Element, StatKind, StatusEffectKind};

// Effects
pub use crate::effect::StatusEffect;

// Combat
pub use crate::combat::{simulate_request, CombatLog, CombatRequest, Simulator};
pub use crate::batch::{simulate_batch, BatchSummary};

// Config
pub use crate::config::{load_constants, CombatConstants};

// Errors
pub use crate::error::{CombatError, ValidationError};

//! Damage system - resolving a single attack into one or two hits

mod calculation;
mod result;

pub use calculation::{base_damage, finalize_damage, multi_hit_eligible, resolve_attack};
pub use result::{AttackResult, SubHit};

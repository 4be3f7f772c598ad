//! Combat simulation - turn loop, combat log and request handling

mod log;
mod request;
mod simulator;

pub use log::{CombatAction, CombatLog, CombatTurn, Termination};
pub use request::{simulate_request, CombatRequest};
pub use simulator::{combat_id_for_seed, Simulator};

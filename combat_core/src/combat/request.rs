//! CombatRequest - validated entry point for callers holding raw stat blocks

use super::log::CombatLog;
use super::simulator::Simulator;
use crate::combatant::{Combatant, CombatantInput};
use crate::config::{parse_toml, CombatConstants};
use crate::error::{CombatError, ValidationError};
use serde::{Deserialize, Serialize};

/// Body of a simulate call: two raw combatants and an optional seed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatRequest {
    #[serde(default)]
    pub player: CombatantInput,
    #[serde(default)]
    pub opponent: CombatantInput,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl CombatRequest {
    pub fn new(player: CombatantInput, opponent: CombatantInput) -> Self {
        CombatRequest {
            player,
            opponent,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, CombatError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml(content: &str) -> Result<Self, CombatError> {
        Ok(parse_toml(content)?)
    }

    /// Validate both sides and build fresh combatants
    pub fn validate(&self) -> Result<(Combatant, Combatant), ValidationError> {
        let player = Combatant::try_from(&self.player)?;
        let opponent = Combatant::try_from(&self.opponent)?;

        if player.id == opponent.id {
            return Err(ValidationError::DuplicateId(player.id));
        }

        Ok((player, opponent))
    }
}

/// Validate a request and run it under the given constants
///
/// Nothing is simulated unless both the constants and the request pass
/// validation.
pub fn simulate_request(
    request: &CombatRequest,
    constants: &CombatConstants,
) -> Result<CombatLog, CombatError> {
    constants.validate()?;
    let (player, opponent) = request.validate().map_err(|err| {
        tracing::debug!(error = %err, "combat request rejected");
        err
    })?;

    let simulator = Simulator::with_constants(constants.clone());
    Ok(simulator.run(&player, &opponent, request.seed))
}

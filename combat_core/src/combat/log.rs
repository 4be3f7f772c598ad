//! CombatLog - the replayable record of one simulation

use crate::combatant::CombatantSnapshot;
use crate::effect::StatusEffect;
use crate::types::ActionType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One resolved action within a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatAction {
    pub actor_id: String,
    pub target_id: String,
    pub action_type: ActionType,
    pub damage_dealt: u32,
    pub healing_done: u32,
    pub is_crit: bool,
    pub is_miss: bool,
    pub is_stun: bool,
    pub multi_hit_count: u32,
    /// Effects newly placed by this action (on either combatant)
    pub status_effects_applied: Vec<StatusEffect>,
}

impl CombatAction {
    pub fn attack(actor_id: &str, target_id: &str) -> Self {
        CombatAction {
            actor_id: actor_id.to_string(),
            target_id: target_id.to_string(),
            action_type: ActionType::Attack,
            damage_dealt: 0,
            healing_done: 0,
            is_crit: false,
            is_miss: false,
            is_stun: false,
            multi_hit_count: 1,
            status_effects_applied: Vec::new(),
        }
    }

    /// No-op action for an actor that lost its turn to a stun
    pub fn stunned(actor_id: &str, target_id: &str) -> Self {
        CombatAction {
            action_type: ActionType::Stunned,
            is_stun: true,
            ..Self::attack(actor_id, target_id)
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.is_stun {
            return format!("{} is stunned", self.actor_id);
        }
        if self.is_miss {
            return format!("{} misses {}", self.actor_id, self.target_id);
        }

        let mut line = format!(
            "{} hits {} for {}",
            self.actor_id, self.target_id, self.damage_dealt
        );
        if self.multi_hit_count > 1 {
            line.push_str(&format!(" ({} hits)", self.multi_hit_count));
        }
        if self.is_crit {
            line.push_str(" CRIT");
        }
        for effect in &self.status_effects_applied {
            line.push_str(&format!(
                ", applies {:?} {} for {}t",
                effect.kind, effect.magnitude, effect.remaining_turns
            ));
        }
        line
    }
}

/// One turn of combat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatTurn {
    pub turn_number: u32,
    pub actor_id: String,
    pub actions: Vec<CombatAction>,
    /// Net HP change on the actor from DoT/HoT before acting
    pub start_of_turn_hp_delta: i64,
    pub actor_status_before: CombatantSnapshot,
    pub actor_status_after: CombatantSnapshot,
    pub target_status_before: CombatantSnapshot,
    pub target_status_after: CombatantSnapshot,
}

impl CombatTurn {
    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.start_of_turn_hp_delta < 0 {
            parts.push(format!(
                "{} takes {} from effects",
                self.actor_id, -self.start_of_turn_hp_delta
            ));
        } else if self.start_of_turn_hp_delta > 0 {
            parts.push(format!(
                "{} recovers {} from effects",
                self.actor_id, self.start_of_turn_hp_delta
            ));
        }

        parts.extend(self.actions.iter().map(CombatAction::summary));

        if parts.is_empty() {
            parts.push(format!("{} cannot act", self.actor_id));
        }

        format!(
            "Turn {:>2}: {} [{} {}/{} | {} {}/{}]",
            self.turn_number,
            parts.join("; "),
            self.actor_status_after.id,
            self.actor_status_after.current_hp,
            self.actor_status_after.max_hp,
            self.target_status_after.id,
            self.target_status_after.current_hp,
            self.target_status_after.max_hp,
        )
    }
}

/// Why a combat stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Exactly one combatant reached 0 HP
    Knockout,
    /// Both combatants reached 0 HP on the same turn
    MutualKnockout,
    /// The turn cap was reached with both alive
    TurnLimit,
}

/// Complete log of a combat session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLog {
    pub combat_id: Uuid,
    /// Seed that reproduces this log
    pub seed: u64,
    /// Final state of each side
    pub player: CombatantSnapshot,
    pub opponent: CombatantSnapshot,
    pub turns: Vec<CombatTurn>,
    pub winner_id: Option<String>,
    pub total_turns: u32,
    pub termination: Termination,
}

impl CombatLog {
    pub fn is_draw(&self) -> bool {
        self.winner_id.is_none()
    }

    /// Id of the combatant that acted on turn 1
    pub fn first_actor_id(&self) -> Option<&str> {
        self.turns.first().map(|t| t.actor_id.as_str())
    }

    /// All actions in turn order
    pub fn actions(&self) -> impl Iterator<Item = &CombatAction> {
        self.turns.iter().flat_map(|t| t.actions.iter())
    }

    /// Total damage dealt by a combatant's actions
    pub fn damage_dealt_by(&self, actor_id: &str) -> u64 {
        self.actions()
            .filter(|a| a.actor_id == actor_id)
            .map(|a| u64::from(a.damage_dealt))
            .sum()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable per-turn lines followed by the result
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(self.turns.len() + 2);
        lines.push(format!(
            "Combat {} (seed {}): {} vs {}",
            self.combat_id, self.seed, self.player.name, self.opponent.name
        ));
        lines.extend(self.turns.iter().map(CombatTurn::summary));

        let result = match (&self.winner_id, self.termination) {
            (Some(winner), _) => format!("Winner: {} after {} turns", winner, self.total_turns),
            (None, Termination::MutualKnockout) => {
                format!("Draw: both fell on turn {}", self.total_turns)
            }
            (None, _) => format!("Draw: turn limit reached after {} turns", self.total_turns),
        };
        lines.push(result);
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stunned_action() {
        let action = CombatAction::stunned("a", "b");
        assert!(action.is_stun);
        assert_eq!(action.action_type, ActionType::Stunned);
        assert_eq!(action.damage_dealt, 0);
        assert_eq!(action.summary(), "a is stunned");
    }

    #[test]
    fn test_attack_summary() {
        let mut action = CombatAction::attack("a", "b");
        action.damage_dealt = 24;
        action.multi_hit_count = 2;
        action.is_crit = true;
        action
            .status_effects_applied
            .push(StatusEffect::defense_debuff(2, 2, "a"));

        let summary = action.summary();
        assert!(summary.contains("a hits b for 24"));
        assert!(summary.contains("2 hits"));
        assert!(summary.contains("CRIT"));
        assert!(summary.contains("DefenseDebuff"));
    }

    #[test]
    fn test_action_json_fields() {
        let action = CombatAction::attack("p", "o");
        let json = serde_json::to_value(&action).unwrap();
        for field in [
            "actor_id",
            "target_id",
            "action_type",
            "damage_dealt",
            "healing_done",
            "is_crit",
            "is_miss",
            "is_stun",
            "multi_hit_count",
            "status_effects_applied",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(json["action_type"], "attack");
    }
}

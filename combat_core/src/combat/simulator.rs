//! Simulator - drives two combatants through the turn loop
//!
//! Phases of one run:
//! 1. Copy both combatants and reset them to full HP with no effects
//! 2. Roll turn order once (effective speed plus jitter, ties to the player)
//! 3. Alternate turns: start-of-turn effects, act, tick both sides, log
//! 4. Stop on a knockout or at the turn cap
//!
//! The run itself never fails; inputs are validated before they get here.

use super::log::{CombatAction, CombatLog, CombatTurn, Termination};
use crate::combatant::Combatant;
use crate::config::{CombatConstants, ProcTarget};
use crate::damage::resolve_attack;
use crate::effect;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

const PLAYER: usize = 0;
const OPPONENT: usize = 1;

/// Runs complete combats under one set of constants
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    constants: CombatConstants,
}

impl Simulator {
    /// Simulator with the standard ruleset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants(constants: CombatConstants) -> Self {
        Simulator { constants }
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    /// Simulate a combat to completion
    ///
    /// The same seed and inputs always produce the same log. Without a seed
    /// one is drawn and recorded in [`CombatLog::seed`].
    pub fn run(&self, player: &Combatant, opponent: &Combatant, seed: Option<u64>) -> CombatLog {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run_with_rng(player, opponent, seed, &mut rng)
    }

    /// Simulate with a provided roll stream (for deterministic testing)
    ///
    /// `seed` is only recorded in the log and used to derive its id.
    pub fn run_with_rng(
        &self,
        player: &Combatant,
        opponent: &Combatant,
        seed: u64,
        rng: &mut impl Rng,
    ) -> CombatLog {
        let combat_id = combat_id_for_seed(seed);
        tracing::debug!(
            %combat_id,
            seed,
            player = %player.id,
            opponent = %opponent.id,
            "combat starting"
        );

        let mut battle = Battle::new(&self.constants, player, opponent, rng);
        let termination = battle.run();
        let log = battle.into_log(combat_id, seed, termination);

        match termination {
            Termination::TurnLimit => tracing::warn!(
                %combat_id,
                turns = log.total_turns,
                "combat hit the turn limit"
            ),
            _ => tracing::info!(
                %combat_id,
                turns = log.total_turns,
                winner = log.winner_id.as_deref().unwrap_or("none"),
                "combat finished"
            ),
        }

        log
    }
}

/// Reproducible combat id drawn from a side stream of the combat seed
///
/// Stream 1 never feeds combat rolls, so deriving the id leaves the roll
/// sequence untouched.
pub fn combat_id_for_seed(seed: u64) -> Uuid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(1);
    let bytes: [u8; 16] = rng.gen();
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Mutable state of one run
struct Battle<'a, R: Rng> {
    constants: &'a CombatConstants,
    combatants: [Combatant; 2],
    rng: &'a mut R,
    turns: Vec<CombatTurn>,
}

impl<'a, R: Rng> Battle<'a, R> {
    fn new(
        constants: &'a CombatConstants,
        player: &Combatant,
        opponent: &Combatant,
        rng: &'a mut R,
    ) -> Self {
        let mut combatants = [player.clone(), opponent.clone()];
        for combatant in combatants.iter_mut() {
            combatant.reset_for_combat();
        }

        Battle {
            constants,
            combatants,
            rng,
            turns: Vec::new(),
        }
    }

    fn run(&mut self) -> Termination {
        let order = self.roll_turn_order();
        let max_turns = self.constants.turns.max_turns;

        let mut turn_number = 0u32;
        loop {
            turn_number += 1;
            let actor = order[((turn_number - 1) % 2) as usize];
            self.play_turn(turn_number, actor, 1 - actor);

            if let Some(termination) = self.check_termination(turn_number, max_turns) {
                return termination;
            }
        }
    }

    /// Player jitter is drawn before opponent jitter
    fn roll_turn_order(&mut self) -> [usize; 2] {
        let jitter = self.constants.turns.speed_jitter.max(0);
        let player_speed = self.combatants[PLAYER]
            .effective_speed()
            .saturating_add(self.rng.gen_range(-jitter..=jitter));
        let opponent_speed = self.combatants[OPPONENT]
            .effective_speed()
            .saturating_add(self.rng.gen_range(-jitter..=jitter));

        let order = if player_speed >= opponent_speed {
            [PLAYER, OPPONENT]
        } else {
            [OPPONENT, PLAYER]
        };

        tracing::debug!(
            player_speed,
            opponent_speed,
            first = %self.combatants[order[0]].id,
            "turn order decided"
        );
        order
    }

    fn play_turn(&mut self, turn_number: u32, actor: usize, target: usize) {
        let actor_status_before = self.combatants[actor].snapshot();
        let target_status_before = self.combatants[target].snapshot();

        let start = effect::process_turn_start(&mut self.combatants[actor]);

        let mut actions = Vec::with_capacity(1);
        if !self.combatants[actor].is_alive() {
            tracing::debug!(
                turn = turn_number,
                actor = %self.combatants[actor].id,
                damage = start.damage,
                "actor fell to damage over time"
            );
        } else if effect::is_stunned(&self.combatants[actor]) {
            tracing::debug!(
                turn = turn_number,
                actor = %self.combatants[actor].id,
                "actor stunned"
            );
            actions.push(CombatAction::stunned(
                &self.combatants[actor].id,
                &self.combatants[target].id,
            ));
        } else {
            actions.push(self.attack(turn_number, actor));
        }

        effect::tick_and_expire(&mut self.combatants[actor], true);
        effect::tick_and_expire(&mut self.combatants[target], false);

        self.turns.push(CombatTurn {
            turn_number,
            actor_id: self.combatants[actor].id.clone(),
            actions,
            start_of_turn_hp_delta: start.hp_delta(),
            actor_status_before,
            actor_status_after: self.combatants[actor].snapshot(),
            target_status_before,
            target_status_after: self.combatants[target].snapshot(),
        });
    }

    /// Resolve one attack, apply its damage and roll the attacker's class proc
    fn attack(&mut self, turn_number: u32, actor: usize) -> CombatAction {
        let (attacker, defender) = pair_mut(&mut self.combatants, actor);
        let mut action = CombatAction::attack(&attacker.id, &defender.id);

        let result = resolve_attack(attacker, defender, self.constants, &mut *self.rng);
        if result.is_miss {
            action.is_miss = true;
            tracing::debug!(turn = turn_number, actor = %attacker.id, "attack missed");
            return action;
        }

        action.damage_dealt = result.total_damage();
        action.is_crit = result.is_crit();
        action.multi_hit_count = result.multi_hit_count();
        defender.take_damage(action.damage_dealt);

        tracing::debug!(
            turn = turn_number,
            actor = %attacker.id,
            target = %defender.id,
            damage = action.damage_dealt,
            crit = action.is_crit,
            hits = action.multi_hit_count,
            target_hp = defender.current_hp(),
            "attack landed"
        );

        let class_proc = self.constants.procs.for_class(attacker.class);
        if self.rng.gen::<f64>() < class_proc.chance {
            let applied = class_proc.effect_from(&attacker.id);
            let recipient = match class_proc.target {
                ProcTarget::Defender => defender,
                ProcTarget::Attacker => attacker,
            };
            let application = effect::apply(recipient, applied);
            if let Some(effect) = application.newly_applied() {
                tracing::debug!(
                    turn = turn_number,
                    source = %effect.source_id,
                    target = ?class_proc.target,
                    kind = ?effect.kind,
                    duration = effect.remaining_turns,
                    "class proc triggered"
                );
                action.status_effects_applied.push(effect.clone());
            }
        }

        action
    }

    fn check_termination(&self, turn_number: u32, max_turns: u32) -> Option<Termination> {
        let player_alive = self.combatants[PLAYER].is_alive();
        let opponent_alive = self.combatants[OPPONENT].is_alive();

        match (player_alive, opponent_alive) {
            (true, true) if turn_number >= max_turns => Some(Termination::TurnLimit),
            (true, true) => None,
            (false, false) => Some(Termination::MutualKnockout),
            _ => Some(Termination::Knockout),
        }
    }

    fn into_log(self, combat_id: Uuid, seed: u64, termination: Termination) -> CombatLog {
        let [player, opponent] = &self.combatants;

        let winner_id = match (player.is_alive(), opponent.is_alive()) {
            (true, false) => Some(player.id.clone()),
            (false, true) => Some(opponent.id.clone()),
            _ => None,
        };

        CombatLog {
            combat_id,
            seed,
            player: player.snapshot(),
            opponent: opponent.snapshot(),
            total_turns: self.turns.len() as u32,
            turns: self.turns,
            winner_id,
            termination,
        }
    }
}

/// Split the pair into (actor, other)
fn pair_mut(combatants: &mut [Combatant; 2], actor: usize) -> (&mut Combatant, &mut Combatant) {
    let [player, opponent] = combatants;
    if actor == PLAYER {
        (player, opponent)
    } else {
        (opponent, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedRng;
    use crate::types::{ActionType, CharacterClass, Element, StatusEffectKind};

    const NO: f64 = 0.99;
    const YES: f64 = 0.0;

    fn warrior() -> Combatant {
        Combatant::new(
            "warrior",
            "Warrior",
            CharacterClass::Warrior,
            Element::Fire,
            100,
            20,
            15,
            10,
        )
    }

    fn rogue() -> Combatant {
        Combatant::new("rogue", "Rogue", CharacterClass::Rogue, Element::Neutral, 50, 15, 8, 12)
    }

    #[test]
    fn test_same_seed_same_log() {
        let sim = Simulator::new();
        let a = sim.run(&warrior(), &rogue(), Some(12345));
        let b = sim.run(&warrior(), &rogue(), Some(12345));

        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
        assert_eq!(a.seed, 12345);
    }

    #[test]
    fn test_combat_id_follows_seed() {
        assert_eq!(combat_id_for_seed(7), combat_id_for_seed(7));
        assert_ne!(combat_id_for_seed(7), combat_id_for_seed(8));
        assert_eq!(combat_id_for_seed(7).get_version_num(), 4);
    }

    #[test]
    fn test_unseeded_run_reports_its_seed() {
        let sim = Simulator::new();
        let first = sim.run(&warrior(), &rogue(), None);
        let replay = sim.run(&warrior(), &rogue(), Some(first.seed));
        assert_eq!(first, replay);
    }

    #[test]
    fn test_speed_tie_goes_to_player() {
        let sim = Simulator::new();
        let player = Combatant::new(
            "p",
            "P",
            CharacterClass::Warrior,
            Element::Neutral,
            100,
            20,
            10,
            10,
        );
        let opponent = Combatant::new(
            "o",
            "O",
            CharacterClass::Warrior,
            Element::Neutral,
            100,
            20,
            10,
            10,
        );

        // Both jitter draws land on the same value
        let mut rng = ScriptedRng::new(&[]);
        let log = sim.run_with_rng(&player, &opponent, 0, &mut rng);
        assert_eq!(log.first_actor_id(), Some("p"));
        assert_eq!(log.turns[1].actor_id, "o");
    }

    #[test]
    fn test_turns_alternate() {
        let log = Simulator::new().run(&warrior(), &rogue(), Some(99));
        let first = log.turns[0].actor_id.clone();
        for turn in &log.turns {
            if turn.turn_number % 2 == 1 {
                assert_eq!(turn.actor_id, first);
            } else {
                assert_ne!(turn.actor_id, first);
            }
        }
    }

    #[test]
    fn test_stun_skips_exactly_one_action() {
        let sim = Simulator::new();
        let player = rogue();
        let opponent = Combatant::new(
            "w",
            "W",
            CharacterClass::Warrior,
            Element::Neutral,
            100,
            10,
            10,
            10,
        );

        // Turn 1 (rogue): miss no, crit no, stun proc yes
        let mut rng = ScriptedRng::new(&[NO, NO, YES]);
        let log = sim.run_with_rng(&player, &opponent, 0, &mut rng);

        let stun_turn = &log.turns[0];
        assert_eq!(stun_turn.actor_id, "rogue");
        assert_eq!(stun_turn.actions[0].status_effects_applied.len(), 1);
        assert_eq!(
            stun_turn.actions[0].status_effects_applied[0].kind,
            StatusEffectKind::Stun
        );
        assert!(stun_turn.target_status_after.has_status_effect(StatusEffectKind::Stun));

        let skipped = &log.turns[1];
        assert_eq!(skipped.actor_id, "w");
        assert_eq!(skipped.actions.len(), 1);
        assert_eq!(skipped.actions[0].action_type, ActionType::Stunned);
        assert!(skipped.actions[0].is_stun);
        assert_eq!(skipped.actions[0].damage_dealt, 0);
        assert!(!skipped.actor_status_after.has_status_effect(StatusEffectKind::Stun));

        // Next own turn acts normally
        let recovered = &log.turns[3];
        assert_eq!(recovered.actor_id, "w");
        assert_eq!(recovered.actions[0].action_type, ActionType::Attack);
    }

    #[test]
    fn test_dot_death_skips_action() {
        let mut constants = CombatConstants::default();
        constants.procs.mage.duration = 10;
        let sim = Simulator::with_constants(constants);

        let mage = Combatant::new(
            "mage",
            "Mage",
            CharacterClass::Mage,
            Element::Neutral,
            100,
            1,
            0,
            10,
        );
        let wall = Combatant::new(
            "wall",
            "Wall",
            CharacterClass::Paladin,
            Element::Neutral,
            7,
            5,
            100,
            5,
        );

        // Turn 1 (mage): miss no, crit no, DoT proc yes; everything after rolls no
        let mut rng = ScriptedRng::new(&[NO, NO, YES]);
        let log = sim.run_with_rng(&mage, &wall, 0, &mut rng);

        // 7 -> 6 (hit) -> 3 (DoT) -> 2 (hit) -> 0 (DoT)
        assert_eq!(log.turns[1].start_of_turn_hp_delta, -3);
        assert_eq!(log.turns[1].actions.len(), 1);

        let last = log.turns.last().unwrap();
        assert_eq!(last.turn_number, 4);
        assert_eq!(last.actor_id, "wall");
        assert!(last.actions.is_empty());
        assert_eq!(last.start_of_turn_hp_delta, -2);
        assert_eq!(log.winner_id.as_deref(), Some("mage"));
        assert_eq!(log.termination, Termination::Knockout);
        assert_eq!(log.opponent.current_hp, 0);
    }

    #[test]
    fn test_turn_limit_is_a_draw() {
        let mut constants = CombatConstants::default();
        constants.turns.max_turns = 6;
        let sim = Simulator::with_constants(constants);

        let a = Combatant::new(
            "a",
            "A",
            CharacterClass::Warrior,
            Element::Neutral,
            1000,
            0,
            100,
            10,
        );
        let b = Combatant::new("b", "B", CharacterClass::Mage, Element::Neutral, 1000, 0, 100, 10);
        let log = sim.run(&a, &b, Some(3));

        assert_eq!(log.total_turns, 6);
        assert_eq!(log.turns.len(), 6);
        assert!(log.is_draw());
        assert_eq!(log.termination, Termination::TurnLimit);
        assert!(log.player.is_alive && log.opponent.is_alive);
    }

    #[test]
    fn test_all_misses_reach_turn_limit() {
        let mut rng = ScriptedRng::new(&[]).with_fallback(YES);
        let log = Simulator::new().run_with_rng(&warrior(), &rogue(), 0, &mut rng);

        assert_eq!(log.total_turns, 50);
        assert_eq!(log.termination, Termination::TurnLimit);
        assert!(log.actions().all(|a| a.is_miss && a.damage_dealt == 0));
        assert_eq!(log.player.current_hp, 100);
        assert_eq!(log.opponent.current_hp, 50);
    }

    #[test]
    fn test_negative_jitter_is_treated_as_zero() {
        let mut constants = CombatConstants::default();
        constants.turns.speed_jitter = -3;
        let sim = Simulator::with_constants(constants);

        for seed in 0..20u64 {
            let log = sim.run(&warrior(), &rogue(), Some(seed));
            // Rogue is faster with no jitter in play
            assert_eq!(log.first_actor_id(), Some("rogue"));
            assert!(log.total_turns <= 50);
        }
    }

    #[test]
    fn test_working_copies_start_fresh() {
        let mut player = warrior();
        player.take_damage(60);
        effect::apply(&mut player, effect::StatusEffect::stun(3, "x"));

        let log = Simulator::new().run(&player, &rogue(), Some(1));
        let first = &log.turns[0];
        let player_before = if first.actor_id == "warrior" {
            &first.actor_status_before
        } else {
            &first.target_status_before
        };
        assert_eq!(player_before.current_hp, 100);
        assert!(player_before.status_effects.is_empty());

        // Caller's value is untouched
        assert_eq!(player.current_hp(), 40);
    }

    #[test]
    fn test_winner_is_the_survivor() {
        let log = Simulator::new().run(&warrior(), &rogue(), Some(12345));
        match log.winner_id.as_deref() {
            Some("warrior") => {
                assert!(log.player.current_hp > 0);
                assert_eq!(log.opponent.current_hp, 0);
            }
            Some("rogue") => {
                assert!(log.opponent.current_hp > 0);
                assert_eq!(log.player.current_hp, 0);
            }
            Some(other) => panic!("unexpected winner {}", other),
            None => assert_eq!(log.total_turns, 50),
        }
    }
}

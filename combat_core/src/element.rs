//! Elemental advantage - damage multiplier between two elements
//!
//! Cycle of advantage (1.5x):
//! - fire -> earth
//! - water -> fire
//! - earth -> water
//! - wind -> water
//!
//! Each advantage pair reversed is a disadvantage (0.8x), and fire and wind are
//! mutually weak. Neutral on either side, or an element against itself, is even
//! (1.0x).

use crate::config::ElementalConstants;
use crate::types::Element;

pub const ADVANTAGE_MULTIPLIER: f64 = 1.5;
pub const DISADVANTAGE_MULTIPLIER: f64 = 0.8;

/// How an attacking element fares against a defending one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affinity {
    Advantage,
    Disadvantage,
    Even,
}

const ADVANTAGES: [(Element, Element); 4] = [
    (Element::Fire, Element::Earth),
    (Element::Water, Element::Fire),
    (Element::Earth, Element::Water),
    (Element::Wind, Element::Water),
];

/// Classify the matchup of `attacker` against `defender`
pub fn relation(attacker: Element, defender: Element) -> Affinity {
    if attacker == Element::Neutral || defender == Element::Neutral || attacker == defender {
        return Affinity::Even;
    }

    if ADVANTAGES.contains(&(attacker, defender)) {
        return Affinity::Advantage;
    }

    // Reversed advantage pairs, plus fire <-> wind
    if ADVANTAGES.contains(&(defender, attacker))
        || matches!(
            (attacker, defender),
            (Element::Fire, Element::Wind) | (Element::Wind, Element::Fire)
        )
    {
        return Affinity::Disadvantage;
    }

    Affinity::Even
}

/// Damage multiplier for the standard ruleset
pub fn modifier(attacker: Element, defender: Element) -> f64 {
    match relation(attacker, defender) {
        Affinity::Advantage => ADVANTAGE_MULTIPLIER,
        Affinity::Disadvantage => DISADVANTAGE_MULTIPLIER,
        Affinity::Even => 1.0,
    }
}

/// Damage multiplier using configured advantage/disadvantage values
pub fn modifier_with(constants: &ElementalConstants, attacker: Element, defender: Element) -> f64 {
    constants.multiplier(attacker, defender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advantage_pairs() {
        assert!((modifier(Element::Fire, Element::Earth) - 1.5).abs() < f64::EPSILON);
        assert!((modifier(Element::Water, Element::Fire) - 1.5).abs() < f64::EPSILON);
        assert!((modifier(Element::Earth, Element::Water) - 1.5).abs() < f64::EPSILON);
        assert!((modifier(Element::Wind, Element::Water) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_disadvantage_pairs() {
        assert!((modifier(Element::Earth, Element::Fire) - 0.8).abs() < f64::EPSILON);
        assert!((modifier(Element::Fire, Element::Water) - 0.8).abs() < f64::EPSILON);
        assert!((modifier(Element::Water, Element::Earth) - 0.8).abs() < f64::EPSILON);
        assert!((modifier(Element::Water, Element::Wind) - 0.8).abs() < f64::EPSILON);
        // Fire and wind
        assert!((modifier(Element::Fire, Element::Wind) - 0.8).abs() < f64::EPSILON);
        assert!((modifier(Element::Wind, Element::Fire) - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_neutral_and_mirror_are_even() {
        for element in Element::all() {
            assert!((modifier(Element::Neutral, *element) - 1.0).abs() < f64::EPSILON);
            assert!((modifier(*element, Element::Neutral) - 1.0).abs() < f64::EPSILON);
            assert!((modifier(*element, *element) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_unrelated_pairs_are_even() {
        assert_eq!(relation(Element::Earth, Element::Wind), Affinity::Even);
        assert_eq!(relation(Element::Wind, Element::Earth), Affinity::Even);
    }

    #[test]
    fn test_configured_modifier_matches_default() {
        let constants = ElementalConstants::default();
        for a in Element::all() {
            for d in Element::all() {
                let configured = modifier_with(&constants, *a, *d);
                assert!((configured - modifier(*a, *d)).abs() < f64::EPSILON);
            }
        }
    }
}

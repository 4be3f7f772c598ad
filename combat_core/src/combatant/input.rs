//! CombatantInput - untrusted stat block from the character-build side
//!
//! Every field is optional at the parsing level so that a missing stat is
//! reported as a validation error rather than an opaque parse failure.

use super::Combatant;
use crate::error::ValidationError;
use crate::types::{CharacterClass, Element, StatKind};
use serde::{Deserialize, Serialize};

/// Raw combatant definition as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatantInput {
    #[serde(default, alias = "character_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "character_class")]
    pub class: Option<String>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub max_hp: Option<i64>,
    #[serde(default)]
    pub attack: Option<i64>,
    #[serde(default)]
    pub defense: Option<i64>,
    #[serde(default)]
    pub speed: Option<i64>,
    #[serde(default)]
    pub element: Option<String>,
}

impl CombatantInput {
    /// Validate and build a combatant at full HP
    pub fn validate(&self) -> Result<Combatant, ValidationError> {
        let id = required(&self.id, "id")?.trim().to_string();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        let name = self.name.clone().unwrap_or_else(|| id.clone());

        let class: CharacterClass = required(&self.class, "class")?.parse()?;
        let element: Element = required(&self.element, "element")?.parse()?;

        let max_hp = *required(&self.max_hp, "max_hp")?;
        if max_hp <= 0 {
            return Err(ValidationError::NonPositiveMaxHp { id, value: max_hp });
        }
        let max_hp = u32::try_from(max_hp).map_err(|_| ValidationError::OutOfRange {
            id: id.clone(),
            field: "max_hp",
            value: max_hp,
        })?;

        let attack = stat_value(&id, StatKind::Attack, self.attack)?;
        let defense = stat_value(&id, StatKind::Defense, self.defense)?;
        let speed = stat_value(&id, StatKind::Speed, self.speed)?;

        let level = match self.level {
            None => 1,
            Some(level) if level < 1 => {
                return Err(ValidationError::OutOfRange {
                    id,
                    field: "level",
                    value: level,
                })
            }
            Some(level) => u32::try_from(level).map_err(|_| ValidationError::OutOfRange {
                id: id.clone(),
                field: "level",
                value: level,
            })?,
        };

        Ok(
            Combatant::new(id, name, class, element, max_hp, attack, defense, speed)
                .with_level(level),
        )
    }
}

impl TryFrom<&CombatantInput> for Combatant {
    type Error = ValidationError;

    fn try_from(input: &CombatantInput) -> Result<Self, Self::Error> {
        input.validate()
    }
}

impl TryFrom<CombatantInput> for Combatant {
    type Error = ValidationError;

    fn try_from(input: CombatantInput) -> Result<Self, Self::Error> {
        input.validate()
    }
}

impl From<&Combatant> for CombatantInput {
    fn from(c: &Combatant) -> Self {
        CombatantInput {
            id: Some(c.id.clone()),
            name: Some(c.name.clone()),
            class: Some(c.class.to_string()),
            level: Some(i64::from(c.level)),
            max_hp: Some(i64::from(c.max_hp)),
            attack: Some(i64::from(c.attack.base)),
            defense: Some(i64::from(c.defense.base)),
            speed: Some(i64::from(c.speed.base)),
            element: Some(c.element.to_string()),
        }
    }
}

fn required<'a, T>(value: &'a Option<T>, field: &'static str) -> Result<&'a T, ValidationError> {
    value.as_ref().ok_or(ValidationError::MissingField(field))
}

fn stat_value(id: &str, stat: StatKind, value: Option<i64>) -> Result<i32, ValidationError> {
    let field = match stat {
        StatKind::Attack => "attack",
        StatKind::Defense => "defense",
        StatKind::Speed => "speed",
    };
    let value = value.ok_or(ValidationError::MissingField(field))?;
    if value < 0 {
        return Err(ValidationError::NegativeStat {
            id: id.to_string(),
            stat,
            value,
        });
    }
    i32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        id: id.to_string(),
        field,
        value,
    })
}

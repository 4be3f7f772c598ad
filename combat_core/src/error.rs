//! Error types for the request boundary

use crate::config::ConfigError;
use crate::types::StatKind;
use thiserror::Error;

/// Rejected combatant input. Raised before any simulation state exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Unknown character class: {0}")]
    UnknownClass(String),
    #[error("Unknown element: {0}")]
    UnknownElement(String),
    #[error("Combatant id must not be empty")]
    EmptyId,
    #[error("Combatant {id}: max_hp must be positive, got {value}")]
    NonPositiveMaxHp { id: String, value: i64 },
    #[error("Combatant {id}: {stat} must not be negative, got {value}")]
    NegativeStat { id: String, stat: StatKind, value: i64 },
    #[error("Combatant {id}: {field} out of range: {value}")]
    OutOfRange { id: String, field: &'static str, value: i64 },
    #[error("Player and opponent share the id {0}")]
    DuplicateId(String),
}

/// Top-level error for running a combat request
#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to parse request JSON: {0}")]
    Json(#[from] serde_json::Error),
}

//! AttackResult - outcome of one attack action

use serde::{Deserialize, Serialize};

/// One hit within an attack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubHit {
    /// Damage before the minimum-damage floor (crit and scaling applied)
    pub raw: f64,
    /// Final damage, never below the configured minimum
    pub damage: u32,
    pub is_crit: bool,
}

/// Result of resolving an attack against a defender
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackResult {
    /// Empty when the attack missed
    pub hits: Vec<SubHit>,
    pub is_miss: bool,
}

impl AttackResult {
    pub fn miss() -> Self {
        AttackResult {
            hits: Vec::new(),
            is_miss: true,
        }
    }

    /// Total damage across all hits, capped at `u32::MAX`
    pub fn total_damage(&self) -> u32 {
        self.hits
            .iter()
            .fold(0u32, |total, h| total.saturating_add(h.damage))
    }

    /// Whether any hit was critical
    pub fn is_crit(&self) -> bool {
        self.hits.iter().any(|h| h.is_crit)
    }

    /// Number of hits landed (1 or 2); a miss reports 1
    pub fn multi_hit_count(&self) -> u32 {
        (self.hits.len() as u32).max(1)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.is_miss {
            return "Miss".to_string();
        }

        let parts: Vec<String> = self
            .hits
            .iter()
            .map(|h| {
                if h.is_crit {
                    format!("{} (crit)", h.damage)
                } else {
                    h.damage.to_string()
                }
            })
            .collect();
        parts.join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_result() {
        let result = AttackResult::miss();
        assert_eq!(result.total_damage(), 0);
        assert_eq!(result.multi_hit_count(), 1);
        assert!(!result.is_crit());
        assert_eq!(result.summary(), "Miss");
    }

    #[test]
    fn test_two_hit_totals() {
        let result = AttackResult {
            hits: vec![
                SubHit { raw: 16.5, damage: 16, is_crit: false },
                SubHit { raw: 16.5, damage: 16, is_crit: true },
            ],
            is_miss: false,
        };
        assert_eq!(result.total_damage(), 32);
        assert_eq!(result.multi_hit_count(), 2);
        assert!(result.is_crit());
        assert_eq!(result.summary(), "16 + 16 (crit)");
    }

    #[test]
    fn test_total_damage_saturates() {
        let hit = SubHit {
            raw: 5.0e9,
            damage: u32::MAX,
            is_crit: true,
        };
        let result = AttackResult {
            hits: vec![hit, hit],
            is_miss: false,
        };
        assert_eq!(result.total_damage(), u32::MAX);
    }
}

//! Scripted RNG for forcing roll outcomes in unit tests

use rand::RngCore;
use std::collections::VecDeque;

/// Returns queued `f64` rolls in order, then `fallback` forever.
///
/// `rng.gen::<f64>()` keeps the top 53 bits of `next_u64`, so each queued
/// value is encoded back into those bits. `next_u32` always returns 0, which
/// makes every `gen_range` draw its lowest value.
pub struct ScriptedRng {
    rolls: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRng {
    pub fn new(rolls: &[f64]) -> Self {
        ScriptedRng {
            rolls: rolls.iter().copied().collect(),
            fallback: 0.99,
        }
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        let roll = self.rolls.pop_front().unwrap_or(self.fallback);
        ((roll * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

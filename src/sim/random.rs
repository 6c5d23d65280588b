//! Random sources for procedural generation
//!
//! Every draw the simulation makes goes through [`RandomSource`], so a run is
//! fully determined by its source. Real runs use a seeded [`Pcg32`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Sequential uniform random generator
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn uniform(&mut self) -> f32;

    /// Uniform value in `[min, max)`
    fn range(&mut self, (min, max): (f32, f32)) -> f32 {
        min + self.uniform() * (max - min)
    }
}

impl RandomSource for Pcg32 {
    fn uniform(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Create the default seeded generator
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Lets tests pin down exactly which branch the spawner takes.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = seeded(12345);
        let mut b = seeded(12345);
        let xs: Vec<f32> = (0..16).map(|_| a.uniform()).collect();
        let ys: Vec<f32> = (0..16).map(|_| b.uniform()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_uniform_in_unit_interval() {
        let mut rng = seeded(999);
        for _ in 0..1000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = seeded(7);
        for _ in 0..1000 {
            let v = rng.range((150.0, 350.0));
            assert!((150.0..=350.0).contains(&v));
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRandom::new([0.1, 0.9]);
        assert_eq!(rng.uniform(), 0.1);
        assert_eq!(rng.uniform(), 0.9);
        assert_eq!(rng.uniform(), 0.1);
        assert_eq!(rng.draws(), 3);
        assert!((rng.range((0.0, 10.0)) - 9.0).abs() < 1e-5);
    }
}

//! Per-color energy pools.
//!
//! Energy regenerates with wall-clock time and is debited exactly (no
//! rounding) when an action executes. Values stay within `[0, max]`.

use serde::Serialize;

use crate::errors::GameError;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EnergyPool {
    white: f64,
    black: f64,
}

impl EnergyPool {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, color: Color) -> f64 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    fn slot(&mut self, color: Color) -> &mut f64 {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// `energy = min(max, energy + rate * dt)` for both colors.
    pub fn regenerate(&mut self, rate_per_sec: f64, max: f64, elapsed_secs: f64) {
        let gain = rate_per_sec * elapsed_secs.max(0.0);
        for color in Color::ALL {
            let slot = self.slot(color);
            *slot = (*slot + gain).clamp(0.0, max);
        }
    }

    pub fn debit(&mut self, color: Color, cost: f64) -> Result<(), GameError> {
        let available = self.get(color);
        if available < cost {
            return Err(GameError::InsufficientEnergy {
                color,
                cost,
                available,
            });
        }
        *self.slot(color) = (available - cost).max(0.0);
        Ok(())
    }

    /// Test and fixture hook; clamps into `[0, max]`.
    pub fn set(&mut self, color: Color, value: f64, max: f64) {
        *self.slot(color) = value.clamp(0.0, max);
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    #[test]
    fn regeneration_is_proportional_and_capped() {
        let mut pool = EnergyPool::new();
        pool.regenerate(0.5, 5.0, 2.0);
        assert_eq!(pool.get(Color::White), 1.0);
        assert_eq!(pool.get(Color::Black), 1.0);

        pool.regenerate(0.5, 5.0, 60.0);
        assert_eq!(pool.get(Color::White), 5.0);
    }

    #[test]
    fn debit_is_exact_and_guarded() {
        let mut pool = EnergyPool::new();
        pool.regenerate(0.5, 5.0, 5.0);
        pool.debit(Color::White, 1.0).expect("affordable");
        assert_eq!(pool.get(Color::White), 1.5);
        assert_eq!(pool.get(Color::Black), 2.5);

        let err = pool.debit(Color::White, 2.0).expect_err("too expensive");
        assert!(matches!(err, GameError::InsufficientEnergy { .. }));
        assert_eq!(pool.get(Color::White), 1.5);
    }

    #[test]
    fn negative_elapsed_time_does_not_drain() {
        let mut pool = EnergyPool::new();
        pool.set(Color::Black, 3.0, 5.0);
        pool.regenerate(0.5, 5.0, -10.0);
        assert_eq!(pool.get(Color::Black), 3.0);
    }

    #[test]
    fn random_regen_and_debit_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = EnergyPool::new();
        for _ in 0..10_000 {
            if rng.random_bool(0.6) {
                pool.regenerate(0.5, 5.0, rng.random_range(0.0..0.5));
            } else {
                let color = if rng.random_bool(0.5) { Color::White } else { Color::Black };
                let _ = pool.debit(color, rng.random_range(0.0..4.0));
            }
            for color in Color::ALL {
                let value = pool.get(color);
                assert!((0.0..=5.0).contains(&value), "energy {value} escaped bounds");
            }
        }
    }
}

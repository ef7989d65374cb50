//! Score and tuning state
//!
//! Owned by a single `CircleField`; every step mutates it in place.

use serde::{Deserialize, Serialize};

use crate::consts::BASE_POPULATION;
use crate::settings::FieldConfig;

/// Score counter plus the parameters that scale with it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Visible score, never negative
    pub click_counter: u32,
    /// Spawn bounds, shrink rate and hit policy
    pub config: FieldConfig,
}

impl GameState {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            click_counter: 0,
            config,
        }
    }

    /// Maximum store size at which a spawn is still allowed: `5 + coeff * score`
    pub fn population_cap(&self) -> usize {
        let extra = self.config.circle_coeff.saturating_mul(self.click_counter);
        BASE_POPULATION.saturating_add(extra) as usize
    }

    /// Spawn interval range (ms), shrinking as the score grows
    pub fn creation_interval_bounds(&self) -> (f32, f32) {
        let speedup = 1.0 + 0.1 * self.click_counter as f32;
        (
            self.config.min_creation_interval_ms / speedup,
            self.config.max_creation_interval_ms / speedup,
        )
    }

    /// Radius lost over `delta_ms`
    #[inline]
    pub fn shrink_amount(&self, delta_ms: f32) -> f32 {
        self.config.decrement * delta_ms / 1000.0
    }

    pub fn reward(&mut self, points: u32) {
        self.click_counter = self.click_counter.saturating_add(points);
    }

    /// Subtract points, clamping at zero
    pub fn penalize(&mut self, points: u32) {
        self.click_counter = self.click_counter.saturating_sub(points);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_cap_grows_with_score() {
        let mut state = GameState::default();
        assert_eq!(state.population_cap(), 5);

        state.click_counter = 10;
        assert_eq!(state.population_cap(), 15);

        state.config.circle_coeff = 3;
        assert_eq!(state.population_cap(), 35);
    }

    #[test]
    fn test_creation_interval_shrinks_with_score() {
        let mut state = GameState::default();
        assert_eq!(state.creation_interval_bounds(), (500.0, 2000.0));

        state.click_counter = 10;
        let (lo, hi) = state.creation_interval_bounds();
        assert!((lo - 250.0).abs() < 1e-3);
        assert!((hi - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_shrink_amount() {
        let state = GameState::default();
        assert!((state.shrink_amount(33.0) - 0.165).abs() < 1e-6);
        assert!((state.shrink_amount(1000.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_penalty_clamps_at_zero() {
        let mut state = GameState::default();
        state.penalize(1);
        assert_eq!(state.click_counter, 0);

        state.reward(2);
        state.penalize(5);
        assert_eq!(state.click_counter, 0);

        state.reward(3);
        state.penalize(1);
        assert_eq!(state.click_counter, 2);
    }
}

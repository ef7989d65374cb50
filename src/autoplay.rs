//! Demo mode: a simple automatic player
//!
//! Goes for the most urgent circle (smallest radius) after a randomized
//! reaction delay and sometimes fumbles the click.

use glam::Vec2;

use crate::host::HostEvent;
use crate::sim::{CircleField, PcgSource, RandomSource};

#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: PcgSource,
    /// Mean delay between clicks (ms)
    pub reaction_ms: f32,
    /// Probability of clicking beside the target
    pub miss_chance: f32,
    cooldown_ms: f32,
}

impl AutoPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: PcgSource::new(seed),
            reaction_ms: 450.0,
            miss_chance: 0.15,
            cooldown_ms: 0.0,
        }
    }

    /// Advance by `frame_ms` and maybe produce a click
    pub fn decide<R: RandomSource>(
        &mut self,
        field: &CircleField<R>,
        frame_ms: f32,
    ) -> Option<HostEvent> {
        self.cooldown_ms -= frame_ms;
        if self.cooldown_ms > 0.0 {
            return None;
        }

        let target = field
            .circles()
            .iter()
            .min_by(|a, b| {
                a.radius
                    .partial_cmp(&b.radius)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })?;

        self.cooldown_ms = self.reaction_ms * self.rng.uniform(0.5, 1.5);

        let aim = if self.rng.uniform(0.0, 1.0) < self.miss_chance {
            // Overshoot to the side of the target
            target.center + Vec2::new(target.radius * 1.5, 0.0)
        } else {
            target.center
        };

        Some(HostEvent::Click { x: aim.x, y: aim.y })
    }
}

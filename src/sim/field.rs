//! The circle field: spawn, decay and hit-test steps
//!
//! Three entry points, each invoked by the host on its own schedule:
//! - `on_tick(dt)`: shrink every circle, expire the dead ones (penalty)
//! - `on_spawn_check(w, h)`: maybe add a circle, always pick the next interval
//! - `on_click(x, y)`: hit test, remove hit circles, adjust score
//!
//! The host serializes these calls, so no step ever sees another mid-update.

use glam::Vec2;

use super::circle::Circle;
use super::label::FloatingLabel;
use super::rng::{PcgSource, RandomSource};
use super::state::GameState;
use crate::settings::{FieldConfig, HitPolicy};

/// Why a spawn check did not add a circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSkip {
    /// Store already holds `population_cap()` circles
    PopulationCap,
    /// Window cannot fit a circle of `max_radius`
    WindowTooSmall,
}

/// Result of a spawn check
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnOutcome {
    /// The circle added to the store, if any
    pub circle: Option<Circle>,
    pub skip: Option<SpawnSkip>,
    /// Delay before the next spawn check (ms), drawn every time
    pub next_interval_ms: f32,
}

/// Result of a decay tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Circles removed because their radius reached zero
    pub expired: usize,
    /// Points lost to unclicked expiries (before clamping)
    pub penalty: u32,
    /// Always true: the decay timer never cancels itself
    pub keep_running: bool,
}

/// Result of a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Circles removed by this click
    pub hits: usize,
    /// Requested score change (+hits, -1 for a penalized miss, 0 otherwise)
    pub delta: i32,
}

/// Owns the circle store, the score and the RNG
#[derive(Debug, Clone)]
pub struct CircleField<R: RandomSource = PcgSource> {
    /// Active circles in spawn order
    circles: Vec<Circle>,
    state: GameState,
    label: Option<FloatingLabel>,
    rng: R,
}

impl CircleField<PcgSource> {
    /// Field with an entropy-seeded generator
    pub fn new(config: FieldConfig) -> Self {
        Self::with_rng(config, PcgSource::from_entropy())
    }

    /// Field with a fixed seed (reproducible sessions)
    pub fn seeded(config: FieldConfig, seed: u64) -> Self {
        Self::with_rng(config, PcgSource::new(seed))
    }
}

impl<R: RandomSource> CircleField<R> {
    pub fn with_rng(config: FieldConfig, rng: R) -> Self {
        Self {
            circles: Vec::new(),
            state: GameState::new(config),
            label: None,
            rng,
        }
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn score(&self) -> u32 {
        self.state.click_counter
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &FieldConfig {
        &self.state.config
    }

    /// Live floating label, if one is still fading
    pub fn label(&self) -> Option<&FloatingLabel> {
        self.label.as_ref()
    }

    pub fn hud_text(&self) -> String {
        format!("Score: {}", self.state.click_counter)
    }

    /// Maybe add a circle, then draw the delay before the next check
    pub fn on_spawn_check(&mut self, window_width: f32, window_height: f32) -> SpawnOutcome {
        let cfg = &self.state.config;
        let span = 2.0 * cfg.max_radius;

        let (circle, skip) = if self.circles.len() >= self.state.population_cap() {
            (None, Some(SpawnSkip::PopulationCap))
        } else if !(window_width >= span && window_height >= span) {
            log::debug!(
                "Window {}x{} too small for radius {}, skipping spawn",
                window_width,
                window_height,
                cfg.max_radius
            );
            (None, Some(SpawnSkip::WindowTooSmall))
        } else {
            let radius = self.rng.uniform(cfg.min_radius, cfg.max_radius);
            let x = self.rng.uniform(radius, window_width - radius);
            let y = self.rng.uniform(radius, window_height - radius);
            let circle = Circle::new(Vec2::new(x, y), radius);
            self.circles.push(circle);
            log::debug!(
                "Spawned circle r={:.1} at ({:.1}, {:.1}), {} active",
                radius,
                x,
                y,
                self.circles.len()
            );
            (Some(circle), None)
        };

        let (lo, hi) = self.state.creation_interval_bounds();
        let next_interval_ms = self.rng.uniform(lo, hi);

        SpawnOutcome {
            circle,
            skip,
            next_interval_ms,
        }
    }

    /// Shrink every circle by `decrement * dt`, expire the ones at zero
    pub fn on_tick(&mut self, delta_time_ms: f32) -> TickOutcome {
        let amount = self.state.shrink_amount(delta_time_ms);

        let mut expired = 0;
        let mut penalty = 0;
        for circle in &mut self.circles {
            if circle.shrink(amount) {
                expired += 1;
                if !circle.clicked {
                    penalty += 1;
                }
            }
        }

        if expired > 0 {
            self.circles.retain(|c| !c.is_expired());
            self.state.penalize(penalty);
            log::debug!(
                "{} circle(s) expired, -{} (score {})",
                expired,
                penalty,
                self.state.click_counter
            );
        }

        if self
            .label
            .as_mut()
            .is_some_and(|label| !label.advance(delta_time_ms))
        {
            self.label = None;
        }

        TickOutcome {
            expired,
            penalty,
            keep_running: true,
        }
    }

    /// Hit test the click point against every circle
    pub fn on_click(&mut self, x: f32, y: f32) -> ClickOutcome {
        let point = Vec2::new(x, y);

        let hits = match self.state.config.hit_policy {
            HitPolicy::SingleHit => {
                match self.circles.iter_mut().find(|c| c.contains_point(point)) {
                    Some(circle) => {
                        circle.clicked = true;
                        1
                    }
                    None => 0,
                }
            }
            HitPolicy::MultiHit => {
                let mut hits = 0;
                for circle in &mut self.circles {
                    if circle.contains_point(point) {
                        circle.clicked = true;
                        hits += 1;
                    }
                }
                hits
            }
        };

        if hits > 0 {
            self.circles.retain(|c| !c.clicked);
        }

        let delta = match (self.state.config.hit_policy, hits) {
            (HitPolicy::MultiHit, 0) => -1,
            (_, n) => n as i32,
        };

        if delta > 0 {
            self.state.reward(delta as u32);
        } else if delta < 0 {
            self.state.penalize(delta.unsigned_abs());
        }

        if delta != 0 {
            self.label = Some(FloatingLabel::new(
                delta,
                point,
                self.state.config.label_lifetime_ms,
            ));
        }

        log::debug!(
            "Click ({:.0}, {:.0}): {} hit(s), delta {:+}, score {}",
            x,
            y,
            hits,
            delta,
            self.state.click_counter
        );

        ClickOutcome { hits, delta }
    }
}

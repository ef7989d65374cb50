//! Floating "+N" / "-1" score label
//!
//! Spawned at the click point, rises and fades linearly to nothing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::LABEL_RISE_SPEED;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingLabel {
    /// Score delta this label announces
    pub delta: i32,
    /// Click point (window pixels)
    pub origin: Vec2,
    pub age_ms: f32,
    pub lifetime_ms: f32,
}

impl FloatingLabel {
    pub fn new(delta: i32, origin: Vec2, lifetime_ms: f32) -> Self {
        Self {
            delta,
            origin,
            age_ms: 0.0,
            lifetime_ms,
        }
    }

    /// "+2", "-1"
    pub fn text(&self) -> String {
        format!("{:+}", self.delta)
    }

    /// 1.0 when spawned, 0.0 at end of life
    pub fn opacity(&self) -> f32 {
        (1.0 - self.age_ms / self.lifetime_ms).clamp(0.0, 1.0)
    }

    /// Current draw position; screen y grows downward so rising subtracts
    pub fn position(&self) -> Vec2 {
        let age_ms = self.age_ms.min(self.lifetime_ms);
        self.origin - Vec2::new(0.0, LABEL_RISE_SPEED * age_ms / 1000.0)
    }

    /// Age the label, returning false once it has faded out
    pub fn advance(&mut self, delta_ms: f32) -> bool {
        self.age_ms += delta_ms;
        !self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.age_ms >= self.lifetime_ms
    }
}

//! Circle Whack - click the circles before they shrink away
//!
//! Core modules:
//! - `sim`: Host-independent simulation (circle store, spawn, decay, hit test)
//! - `host`: Headless event loop adapter driving the simulation
//! - `autoplay`: Automatic player for demo sessions
//! - `settings`: Field configuration with JSON loading

pub mod autoplay;
pub mod host;
pub mod settings;
pub mod sim;

pub use autoplay::AutoPlayer;
pub use host::{FrameReport, HeadlessHost, HostEvent};
pub use settings::{ConfigError, FieldConfig, HitPolicy};
pub use sim::CircleField;

/// Game configuration constants
pub mod consts {
    /// Animation tick cadence (milliseconds)
    pub const TICK_MS: f32 = 33.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Initial window dimensions (pixels)
    pub const INITIAL_WIDTH: f32 = 1000.0;
    pub const INITIAL_HEIGHT: f32 = 1000.0;

    /// Spawn radius bounds (pixels)
    pub const MIN_RADIUS: f32 = 20.0;
    pub const MAX_RADIUS: f32 = 80.0;

    /// Spawn interval bounds (milliseconds), before score scaling
    pub const MIN_CREATION_INTERVAL_MS: f32 = 500.0;
    pub const MAX_CREATION_INTERVAL_MS: f32 = 2000.0;

    /// Extra circles allowed on the field per point of score
    pub const CIRCLE_COEFF: u32 = 1;
    /// Circles allowed on the field at zero score
    pub const BASE_POPULATION: u32 = 5;

    /// Shrink rate (radius units per second)
    pub const DECREMENT: f32 = 5.0;

    /// Floating score label lifetime (milliseconds)
    pub const LABEL_LIFETIME_MS: f32 = 2000.0;
    /// Floating score label rise speed (pixels per second)
    pub const LABEL_RISE_SPEED: f32 = 30.0;
}

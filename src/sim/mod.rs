//! Simulation module
//!
//! All gameplay logic lives here. This module must stay host-independent:
//! - Time only arrives through `on_tick` deltas
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (store order = spawn order)
//! - No rendering, windowing or timer dependencies

pub mod circle;
pub mod field;
pub mod label;
pub mod rng;
pub mod state;

pub use circle::Circle;
pub use field::{CircleField, ClickOutcome, SpawnOutcome, SpawnSkip, TickOutcome};
pub use label::FloatingLabel;
pub use rng::{PcgSource, RandomSource};
pub use state::GameState;

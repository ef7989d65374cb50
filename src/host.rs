//! Headless host adapter
//!
//! Plays the role of the GUI event loop: owns the window size, a
//! fixed-cadence animation timer and a one-shot spawn timer that is re-armed
//! with a fresh interval every time it fires. Pointer presses and resizes
//! arrive as queued `HostEvent`s.

use glam::Vec2;

use crate::consts::MAX_SUBSTEPS;
use crate::sim::{CircleField, ClickOutcome, PcgSource, RandomSource};

/// Input delivered by the windowing system between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer press at window pixel coordinates
    Click { x: f32, y: f32 },
    /// Window resized
    Resize { width: f32, height: f32 },
}

/// What happened during one `pump`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Decay ticks fired
    pub ticks: u32,
    /// Spawn checks fired
    pub spawn_checks: u32,
    /// Circles added
    pub spawned: u32,
    /// Circles lost to decay
    pub expired: usize,
    /// Outcomes of the clicks processed this frame, in order
    pub clicks: Vec<ClickOutcome>,
}

pub struct HeadlessHost<R: RandomSource = PcgSource> {
    field: CircleField<R>,
    window: Vec2,
    tick_ms: f32,
    accumulator_ms: f32,
    /// Time until the spawn timer fires; starts expired
    spawn_remaining_ms: f32,
    elapsed_ms: f64,
    needs_repaint: bool,
}

impl<R: RandomSource> HeadlessHost<R> {
    pub fn new(field: CircleField<R>) -> Self {
        let config = field.config();
        let window = Vec2::new(config.initial_width, config.initial_height);
        let tick_ms = config.tick_interval_ms;
        log::info!(
            "Host window {}x{}, tick every {}ms",
            window.x,
            window.y,
            tick_ms
        );
        Self {
            field,
            window,
            tick_ms,
            accumulator_ms: 0.0,
            spawn_remaining_ms: 0.0,
            elapsed_ms: 0.0,
            needs_repaint: true,
        }
    }

    pub fn field(&self) -> &CircleField<R> {
        &self.field
    }

    pub fn window_size(&self) -> Vec2 {
        self.window
    }

    /// Simulated wall-clock time since start
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Milliseconds until the spawn timer fires next
    pub fn spawn_remaining_ms(&self) -> f32 {
        self.spawn_remaining_ms
    }

    /// Consume the repaint request, if any
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    /// Deliver queued events, then advance the timers by `frame_ms`
    pub fn pump(&mut self, frame_ms: f32, events: &[HostEvent]) -> FrameReport {
        let mut report = FrameReport::default();

        for event in events {
            match *event {
                HostEvent::Click { x, y } => {
                    report.clicks.push(self.field.on_click(x, y));
                }
                HostEvent::Resize { width, height } => {
                    log::info!("Window resized to {}x{}", width, height);
                    self.window = Vec2::new(width, height);
                }
            }
            self.needs_repaint = true;
        }

        // Clamp long frames so a stall can't queue unbounded ticks
        let frame_ms = frame_ms.clamp(0.0, self.tick_ms * MAX_SUBSTEPS as f32);
        self.accumulator_ms += frame_ms;
        self.elapsed_ms += frame_ms as f64;

        let mut substeps = 0;
        while self.accumulator_ms >= self.tick_ms && substeps < MAX_SUBSTEPS {
            let tick = self.field.on_tick(self.tick_ms);
            report.ticks += 1;
            report.expired += tick.expired;
            self.accumulator_ms -= self.tick_ms;
            substeps += 1;

            self.spawn_remaining_ms -= self.tick_ms;
            if self.spawn_remaining_ms <= 0.0 {
                let spawn = self.field.on_spawn_check(self.window.x, self.window.y);
                report.spawn_checks += 1;
                if spawn.circle.is_some() {
                    report.spawned += 1;
                }
                // One-shot timer: re-arm from now
                self.spawn_remaining_ms = spawn.next_interval_ms;
            }

            self.needs_repaint = true;
        }

        report
    }
}

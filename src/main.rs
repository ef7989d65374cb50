//! Circle Whack entry point
//!
//! Runs a headless demo session: the host adapter drives the field and the
//! automatic player does the clicking.
//!
//! Environment:
//! - `CIRCLE_WHACK_CONFIG`: path to a JSON field config
//! - `CIRCLE_WHACK_POLICY`: `single` or `multi`, overrides the config
//! - `CIRCLE_WHACK_SEED`: u64 seed for a reproducible session
//! - `CIRCLE_WHACK_SECONDS`: session length (default 60)

use std::path::PathBuf;

use circle_whack::{AutoPlayer, CircleField, FieldConfig, HeadlessHost, HitPolicy};

/// Simulated frame time (~60 fps)
const FRAME_MS: f32 = 16.0;
/// Progress log cadence
const REPORT_EVERY_MS: f64 = 5000.0;

fn main() {
    env_logger::init();
    log::info!("Circle Whack (headless) starting...");

    let config_path = std::env::var_os("CIRCLE_WHACK_CONFIG").map(PathBuf::from);
    let mut config = FieldConfig::load_or_default(config_path.as_deref());

    if let Ok(name) = std::env::var("CIRCLE_WHACK_POLICY") {
        match HitPolicy::from_str(&name) {
            Some(policy) => config.hit_policy = policy,
            None => log::warn!("Unknown hit policy {:?}, keeping {}", name, config.hit_policy.as_str()),
        }
    }

    let seed = std::env::var("CIRCLE_WHACK_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    let seconds = std::env::var("CIRCLE_WHACK_SECONDS")
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|s| *s > 0.0)
        .unwrap_or(60.0);

    log::info!(
        "Session: seed {}, {}s, {} hit policy",
        seed,
        seconds,
        config.hit_policy.as_str()
    );

    let mut host = HeadlessHost::new(CircleField::seeded(config, seed));
    let mut player = AutoPlayer::new(seed.wrapping_add(1));

    let mut clicks = 0u32;
    let mut hits = 0usize;
    let mut expired = 0usize;
    let mut next_report = REPORT_EVERY_MS;

    while host.elapsed_ms() < seconds * 1000.0 {
        let events: Vec<_> = player.decide(host.field(), FRAME_MS).into_iter().collect();
        let report = host.pump(FRAME_MS, &events);

        clicks += report.clicks.len() as u32;
        hits += report.clicks.iter().map(|c| c.hits).sum::<usize>();
        expired += report.expired;

        if host.elapsed_ms() >= next_report {
            let field = host.field();
            log::info!(
                "t={:.0}s {} | {} active{}",
                host.elapsed_ms() / 1000.0,
                field.hud_text(),
                field.circles().len(),
                field
                    .label()
                    .map(|l| format!(" | label {} ({:.0}%)", l.text(), l.opacity() * 100.0))
                    .unwrap_or_default()
            );
            next_report += REPORT_EVERY_MS;
        }
    }

    let field = host.field();
    log::info!("Session over");
    println!(
        "{} after {:.0}s: {} clicks, {} circles popped, {} expired",
        field.hud_text(),
        seconds,
        clicks,
        hits,
        expired
    );
}

//! Headless driver: runs a configured orbit layout for a number of frames and
//! logs layout scores.
//!
//! Usage: `goldorbit [config.json]`. Set `RUST_LOG=debug` for per-burst events.

use goldorbit::prelude::*;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Orbit time advances one unit per 60 Hz tick.
const ORBIT_TICKS_PER_MS: f64 = 60.0 / 1000.0;

/// Log a score line every this many frames.
const REPORT_EVERY: u64 = 30;

/// What a headless run did.
#[derive(Debug, Clone, PartialEq)]
struct RunSummary {
    rendered: u64,
    skipped: u64,
    bursts: u32,
    /// Simulated milliseconds fed to the clock.
    elapsed_ms: f64,
    average_score: f64,
    last_metrics: Option<FibonacciMetrics>,
}

/// Simulated wall time of `frame`, rounded to whole microseconds.
fn frame_instant(start: Instant, frame: u32, frame_ms: f64) -> Instant {
    start + Duration::from_micros((frame as f64 * frame_ms * 1000.0).round() as u64)
}

fn run(config: &EngineConfig) -> goldorbit::Result<RunSummary> {
    let [width, height] = config.container;
    let options = config.orbit.options();
    let particle_options = config.particles.to_options()?;
    let center = DVec2::new(width / 2.0, height / 2.0);

    let mut clock = Clock::new();
    let mut gate = FrameGate::sixty_fps();
    let start = Instant::now();
    let mut last_accepted: Option<Instant> = None;

    let mut sparks = generate_particles(center, config.particles.count, &particle_options)?;
    let mut bursts = 1u32;
    let mut score_total = 0u64;
    let mut last_metrics = None;

    for frame in 0..config.frames {
        let now = frame_instant(start, frame, config.frame_ms);
        if !gate.ready(now) {
            continue;
        }

        // The first frame has no predecessor and counts as one nominal frame.
        let gap_ms = last_accepted
            .map(|last| now.duration_since(last).as_secs_f64() * 1000.0)
            .unwrap_or(config.frame_ms);
        last_accepted = Some(now);

        let (elapsed_ms, delta_ms) = clock.advance(gap_ms);
        let positions = calculate_orbits(
            config.element_count,
            elapsed_ms * ORBIT_TICKS_PER_MS,
            width,
            height,
            &options,
        )?;

        sparks = update_particles(&sparks, delta_ms);
        if sparks.is_empty() && config.particles.count > 0 {
            sparks = generate_particles(center, config.particles.count, &particle_options)?;
            bursts += 1;
        }

        let metrics = calculate_metrics(&positions, gap_ms);
        score_total += metrics.overall_score as u64;
        last_metrics = Some(metrics);

        if clock.frame() % REPORT_EVERY == 0 {
            tracing::info!(
                frame = clock.frame(),
                distribution = metrics.distribution_quality,
                harmony = metrics.visual_harmony,
                smoothness = metrics.animation_smoothness,
                overall = metrics.overall_score,
                particles = sparks.len(),
                "layout scores"
            );
        }
    }

    let rendered = clock.frame();
    let average_score = if rendered > 0 {
        score_total as f64 / rendered as f64
    } else {
        0.0
    };
    let summary = RunSummary {
        rendered,
        skipped: config.frames as u64 - rendered,
        bursts,
        elapsed_ms: clock.elapsed(),
        average_score,
        last_metrics,
    };
    tracing::info!(
        rendered = summary.rendered,
        skipped = summary.skipped,
        bursts = summary.bursts,
        elapsed_ms = summary.elapsed_ms,
        average_score = summary.average_score,
        "run complete"
    );
    Ok(summary)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match EngineConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(%path, "{}", e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    tracing::info!(
        elements = config.element_count,
        width = config.container[0],
        height = config.container[1],
        frames = config.frames,
        "starting headless run"
    );

    if let Err(e) = run(&config) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

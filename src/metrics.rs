//! Layout quality scores for instrumentation.
//!
//! Scores are derived from a finished batch of [`OrbitalPosition`]s and the
//! frame time it took to produce them. They never feed back into placement.

use crate::constants::{INV_PHI, TARGET_FRAME_MS};
use crate::orbit::OrbitalPosition;
use serde::{Deserialize, Serialize};

/// Quality scores, each an integer in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FibonacciMetrics {
    /// How evenly the angles are spread around the circle.
    pub distribution_quality: u32,
    /// How uniform the perspective scales are.
    pub visual_harmony: u32,
    /// How close the frame time is to the 60 fps budget.
    pub animation_smoothness: u32,
    /// Weighted blend of the three, clamped to 100.
    pub overall_score: u32,
}

/// Population variance; 0 for an empty set.
fn variance(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let n = values.clone().count();
    if n == 0 {
        return 0.0;
    }
    let mean = values.clone().sum::<f64>() / n as f64;
    values.map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64
}

fn to_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

/// Score the angular spacing. Angles are sorted before measuring gaps, and
/// the last gap wraps around from the largest angle to the smallest.
fn distribution_quality(positions: &[OrbitalPosition]) -> f64 {
    let n = positions.len();
    if n <= 1 {
        return 100.0;
    }

    let mut angles: Vec<f64> = positions.iter().map(|p| p.angle).collect();
    angles.sort_by(f64::total_cmp);

    let expected = 360.0 / n as f64;
    let wrap_gap = angles[0] + 360.0 - angles[n - 1];
    let deviations = angles
        .windows(2)
        .map(|w| w[1] - w[0])
        .chain(std::iter::once(wrap_gap))
        .map(|gap| gap - expected);

    (100.0 - variance(deviations)).max(0.0)
}

fn visual_harmony(positions: &[OrbitalPosition]) -> f64 {
    (100.0 - variance(positions.iter().map(|p| p.scale)) * 1000.0).max(0.0)
}

fn animation_smoothness(frame_time_ms: f64) -> f64 {
    (100.0 - (frame_time_ms - TARGET_FRAME_MS).abs() * 5.0).max(0.0)
}

/// Score a batch of positions rendered in `frame_time_ms`.
///
/// Never fails; an empty or single-element batch counts as perfectly
/// distributed and harmonious.
pub fn calculate_metrics(positions: &[OrbitalPosition], frame_time_ms: f64) -> FibonacciMetrics {
    let distribution = distribution_quality(positions);
    let harmony = visual_harmony(positions);
    let smoothness = animation_smoothness(frame_time_ms);

    // Rounded once, from the raw components.
    let weighted = distribution * INV_PHI + harmony * 0.3 + smoothness * 0.1;

    FibonacciMetrics {
        distribution_quality: to_score(distribution),
        visual_harmony: to_score(harmony),
        animation_smoothness: to_score(smoothness),
        overall_score: to_score(weighted),
    }
}

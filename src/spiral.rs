//! Golden-angle spiral seeds.
//!
//! Consecutive indices are rotated by the golden angle (≈137.508°), which never
//! lines up with itself, so points spread out like florets on a sunflower
//! head. The radius follows the Fibonacci sequence, normalized against 21,
//! and plateaus once the sequence runs out.

use crate::constants::{FIBONACCI_SEQUENCE, GOLDEN_ANGLE_DEG, SPIRAL_NORMALIZER_INDEX};
use crate::error::{OrbitError, Result};
use serde::{Deserialize, Serialize};

/// Angular seed for one spiral point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpiralPoint {
    /// Angle in degrees, in `[0, 360)`.
    pub angle: f64,
    /// Normalized radius (1.0 at index 7).
    pub radius: f64,
}

impl SpiralPoint {
    /// Angle in radians.
    #[inline]
    pub fn radians(&self) -> f64 {
        self.angle.to_radians()
    }
}

/// Spiral seed for `index`.
///
/// `total_elements` does not change the result but must be at least 1.
pub fn fibonacci_spiral(index: usize, total_elements: usize) -> Result<SpiralPoint> {
    if total_elements == 0 {
        return Err(OrbitError::invalid("total_elements", "must be at least 1"));
    }

    let angle = (index as f64 * GOLDEN_ANGLE_DEG).rem_euclid(360.0);

    let last = FIBONACCI_SEQUENCE.len() - 1;
    let fib_index = index.min(last);
    let normalizer = FIBONACCI_SEQUENCE[SPIRAL_NORMALIZER_INDEX.min(last)] as f64;
    let radius = FIBONACCI_SEQUENCE[fib_index] as f64 / normalizer;

    Ok(SpiralPoint { angle, radius })
}

/// Spiral seeds for every index in `0..total_elements`.
pub fn spiral_points(total_elements: usize) -> Result<Vec<SpiralPoint>> {
    (0..total_elements)
        .map(|i| fibonacci_spiral(i, total_elements))
        .collect()
}

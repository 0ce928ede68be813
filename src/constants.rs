//! Shared numeric constants.
//!
//! The golden ratio appears throughout the engine: its inverse scales radius
//! growth, particle friction, and the distribution weight in the metrics.

/// The golden ratio, φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Inverse of the golden ratio, 1/φ = φ - 1.
pub const INV_PHI: f64 = 0.618_033_988_749_895;

/// The golden angle in degrees (360° / φ², rounded the way the layouts use it).
pub const GOLDEN_ANGLE_DEG: f64 = 137.508;

/// First sixteen Fibonacci numbers, used for sizes, colors and spiral radii.
pub const FIBONACCI_SEQUENCE: [u32; 16] = [
    1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987,
];

/// Index of the entry spiral radii are normalized against (value 21).
pub const SPIRAL_NORMALIZER_INDEX: usize = 7;

/// Frame budget at 60 fps, in milliseconds.
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Lower bound for the scale falloff distance, keeps zero-sized containers finite.
pub const MIN_MAX_DISTANCE: f64 = 1e-6;

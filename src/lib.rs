//! # goldorbit - Golden-ratio orbital distribution engine
//!
//! Pure layout math for 2D animations: elements orbiting a center on
//! golden-ratio ellipses, golden-angle spiral seeds, Fibonacci particle bursts,
//! and quality scores for a finished layout.
//!
//! Nothing here owns a render loop. Call the functions once per frame with the
//! current time and container size, then draw the result however you like.
//!
//! ## Quick Start
//!
//! ```ignore
//! use goldorbit::prelude::*;
//!
//! let options = OrbitPreset::Cosmic.options();
//! let mut clock = Clock::new();
//! let mut sparks = generate_particles(DVec2::new(400.0, 300.0), 55, &ParticleOptions::default())?;
//!
//! loop {
//!     let (elapsed, delta) = clock.tick();
//!     let planets = calculate_orbits(5, elapsed * 60.0, 800.0, 600.0, &options)?;
//!     sparks = update_particles(&sparks, delta * 1000.0);
//!     let score = calculate_metrics(&planets, delta * 1000.0);
//!     // draw planets and sparks
//! }
//! ```
//!
//! ## Building Blocks
//!
//! | Function | Output |
//! |----------|--------|
//! | [`calculate_orbit`] | [`OrbitalPosition`] for one element |
//! | [`calculate_orbits`] | positions for a whole batch |
//! | [`fibonacci_spiral`] | [`SpiralPoint`] golden-angle seed |
//! | [`generate_particles`] | a burst of [`FibonacciParticle`]s |
//! | [`update_particles`] | the burst one tick later |
//! | [`calculate_metrics`] | [`FibonacciMetrics`] for a batch |
//!
//! Presets ([`OrbitPreset`]) and themes ([`Element`]) are enums mapping to
//! ready-made [`OrbitOptions`].
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (rejected arguments at `warn`, batch
//! generation at `debug`/`trace`) and never installs a subscriber itself.

pub mod config;
pub mod constants;
mod error;
pub mod metrics;
pub mod orbit;
pub mod palette;
pub mod particles;
pub mod presets;
pub mod spiral;
pub mod time;

pub use bytemuck;
pub use config::{EngineConfig, OrbitConfig, ParticleConfig};
pub use error::{OrbitError, Result};
pub use glam::{DVec2, Vec3};
pub use metrics::{calculate_metrics, FibonacciMetrics};
pub use orbit::{calculate_orbit, calculate_orbits, OrbitInstance, OrbitOptions, OrbitalPosition};
pub use particles::{
    generate_particles, step_particles, update_particles, FibonacciParticle, ParticleOptions,
};
pub use presets::{Element, OrbitPreset};
pub use spiral::{fibonacci_spiral, spiral_points, SpiralPoint};
pub use time::{Clock, FrameGate};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use goldorbit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::metrics::{calculate_metrics, FibonacciMetrics};
    pub use crate::orbit::{calculate_orbit, calculate_orbits, OrbitInstance, OrbitOptions, OrbitalPosition};
    pub use crate::particles::{generate_particles, update_particles, FibonacciParticle, ParticleOptions};
    pub use crate::presets::{Element, OrbitPreset};
    pub use crate::spiral::{fibonacci_spiral, SpiralPoint};
    pub use crate::time::{Clock, FrameGate};
    pub use crate::{DVec2, OrbitError, Vec3};
}

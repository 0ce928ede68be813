//! Fibonacci particle bursts.
//!
//! A burst is a batch of particles that all start at one point and fly out
//! along golden-angle directions. Sizes and colors cycle through the
//! Fibonacci sequence so neighbouring particles rarely look alike.
//!
//! There is no pool: the caller owns the `Vec` and replaces it every tick.
//!
//! ```ignore
//! let mut sparks = generate_particles(DVec2::new(400.0, 300.0), 55, &ParticleOptions::default())?;
//!
//! // In your frame loop:
//! sparks = update_particles(&sparks, clock.delta());
//! ```

use crate::constants::{FIBONACCI_SEQUENCE, INV_PHI};
use crate::error::{OrbitError, Result};
use crate::palette::default_palette;
use crate::spiral::fibonacci_spiral;
use glam::{DVec2, Vec3};

/// Particle count used when the caller has no preference.
pub const DEFAULT_PARTICLE_COUNT: usize = 55;

/// Friction applied per unit of delta time.
const FRICTION_PER_TICK: f64 = INV_PHI * 0.001;

/// One particle of a burst.
#[derive(Clone, Debug, PartialEq)]
pub struct FibonacciParticle {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Remaining lifespan, in delta-time units.
    pub life: f64,
    /// Lifespan at creation.
    pub max_life: f64,
    pub size: f64,
    pub color: Vec3,
    /// Launch angle in degrees.
    pub angle: f64,
}

impl FibonacciParticle {
    /// Whether the particle still has life left.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// How far through its life the particle is (0.0 at birth, 1.0 at death).
    pub fn age_fraction(&self) -> f64 {
        if self.max_life <= 0.0 {
            return 1.0;
        }
        (1.0 - self.life / self.max_life).clamp(0.0, 1.0)
    }

    /// Advance by `delta_time`: integrate position, burn life, apply friction.
    ///
    /// The friction factor is `1 - dt * 0.001 / φ` and is not clamped, so a
    /// delta above roughly 1618 reverses the velocity.
    pub fn step(&mut self, delta_time: f64) {
        self.position += self.velocity * delta_time;
        self.life -= delta_time;
        self.velocity *= 1.0 - delta_time * FRICTION_PER_TICK;
    }
}

/// Settings for [`generate_particles`].
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleOptions {
    /// Base launch speed, scaled up by the spiral radius.
    pub initial_velocity: f64,
    /// Starting life for every particle.
    pub lifespan: f64,
    /// Smallest and largest particle size.
    pub size_range: [f64; 2],
    /// Colors to pick from. Must not be empty.
    pub colors: Vec<Vec3>,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            initial_velocity: 2.0,
            lifespan: 1000.0,
            size_range: [2.0, 8.0],
            colors: default_palette(),
        }
    }
}

/// Spawn `count` particles at `center`.
///
/// # Errors
///
/// [`OrbitError::InvalidArgument`] when `options.colors` is empty.
pub fn generate_particles(
    center: DVec2,
    count: usize,
    options: &ParticleOptions,
) -> Result<Vec<FibonacciParticle>> {
    if options.colors.is_empty() {
        return Err(OrbitError::invalid("colors", "palette must not be empty"));
    }

    let [min_size, max_size] = options.size_range;
    let size_normalizer = FIBONACCI_SEQUENCE[7] as f64;

    let particles = (0..count)
        .map(|i| {
            let spiral = fibonacci_spiral(i, count)?;
            let speed = options.initial_velocity * (1.0 + spiral.radius * 0.5);
            let (sin, cos) = spiral.radians().sin_cos();

            let size_factor = FIBONACCI_SEQUENCE[i % 8] as f64 / size_normalizer;
            let color_slot =
                FIBONACCI_SEQUENCE[i % FIBONACCI_SEQUENCE.len()] as usize % options.colors.len();

            Ok(FibonacciParticle {
                position: center,
                velocity: DVec2::new(cos, sin) * speed,
                life: options.lifespan,
                max_life: options.lifespan,
                size: min_size + (max_size - min_size) * size_factor,
                color: options.colors[color_slot],
                angle: spiral.angle,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count, x = center.x, y = center.y, "spawned particle burst");
    Ok(particles)
}

/// Advance every particle and drop the ones whose life ran out.
///
/// Returns a new list; the input is left untouched. A `delta_time` of 0 is a
/// no-op. Negative deltas are not checked.
pub fn update_particles(particles: &[FibonacciParticle], delta_time: f64) -> Vec<FibonacciParticle> {
    let mut next = particles.to_vec();
    step_particles(&mut next, delta_time);
    next
}

/// In-place variant of [`update_particles`].
pub fn step_particles(particles: &mut Vec<FibonacciParticle>, delta_time: f64) {
    let before = particles.len();
    particles.retain_mut(|p| {
        p.step(delta_time);
        p.is_alive()
    });

    let culled = before - particles.len();
    if culled > 0 {
        tracing::trace!(culled, remaining = particles.len(), "culled expired particles");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count_and_start_state() {
        let opts = ParticleOptions::default();
        let particles = generate_particles(DVec2::ZERO, 10, &opts).unwrap();

        assert_eq!(particles.len(), 10);
        for p in &particles {
            assert_eq!(p.position, DVec2::ZERO);
            assert_eq!(p.life, 1000.0);
            assert_eq!(p.max_life, 1000.0);
        }
    }

    #[test]
    fn test_single_particle_velocity() {
        let opts = ParticleOptions {
            initial_velocity: 2.0,
            ..Default::default()
        };
        let particles = generate_particles(DVec2::new(100.0, 100.0), 1, &opts).unwrap();
        let p = &particles[0];

        assert_eq!(p.position, DVec2::new(100.0, 100.0));
        assert!((p.velocity.x - 2.0 * (1.0 + 0.5 / 21.0)).abs() < 1e-9);
        assert!(p.velocity.y.abs() < 1e-12);
        assert_eq!(p.angle, 0.0);
    }

    #[test]
    fn test_sizes_follow_fibonacci() {
        let particles = generate_particles(DVec2::ZERO, 9, &ParticleOptions::default()).unwrap();
        // Factor 1/21 for index 0, 21/21 for index 7, wraps at 8.
        assert!((particles[0].size - (2.0 + 6.0 / 21.0)).abs() < 1e-9);
        assert!((particles[7].size - 8.0).abs() < 1e-9);
        assert_eq!(particles[8].size, particles[0].size);
    }

    #[test]
    fn test_colors_follow_fibonacci() {
        let palette = default_palette();
        let particles = generate_particles(DVec2::ZERO, 6, &ParticleOptions::default()).unwrap();
        // Fibonacci 1, 1, 2, 3, 5, 8 modulo 4.
        let expected = [1, 1, 2, 3, 1, 0];
        for (p, slot) in particles.iter().zip(expected) {
            assert_eq!(p.color, palette[slot]);
        }
    }

    #[test]
    fn test_empty_palette_rejected() {
        let opts = ParticleOptions {
            colors: Vec::new(),
            ..Default::default()
        };
        assert!(generate_particles(DVec2::ZERO, 3, &opts).is_err());
    }

    #[test]
    fn test_zero_count_is_empty() {
        let particles = generate_particles(DVec2::ZERO, 0, &ParticleOptions::default()).unwrap();
        assert!(particles.is_empty());
    }

    #[test]
    fn test_update_integrates_and_decays() {
        let particles = generate_particles(DVec2::ZERO, 1, &ParticleOptions::default()).unwrap();
        let v0 = particles[0].velocity;

        let next = update_particles(&particles, 16.0);
        let p = &next[0];

        assert_eq!(p.position, v0 * 16.0);
        assert_eq!(p.life, 1000.0 - 16.0);
        assert!((p.velocity - v0 * (1.0 - 16.0 * INV_PHI * 0.001)).length() < 1e-12);
        // Input untouched.
        assert_eq!(particles[0].life, 1000.0);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let particles = generate_particles(DVec2::new(5.0, 5.0), 4, &ParticleOptions::default()).unwrap();
        assert_eq!(update_particles(&particles, 0.0), particles);
    }

    #[test]
    fn test_expired_particles_removed() {
        let opts = ParticleOptions {
            lifespan: 10.0,
            ..Default::default()
        };
        let particles = generate_particles(DVec2::ZERO, 5, &opts).unwrap();

        assert_eq!(update_particles(&particles, 9.0).len(), 5);
        // Exactly zero life counts as dead.
        assert!(update_particles(&particles, 10.0).is_empty());
    }

    #[test]
    fn test_age_fraction() {
        let mut p = generate_particles(DVec2::ZERO, 1, &ParticleOptions::default()).unwrap()[0].clone();
        assert_eq!(p.age_fraction(), 0.0);
        p.step(250.0);
        assert!((p.age_fraction() - 0.25).abs() < 1e-12);
    }
}

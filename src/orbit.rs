//! Elliptical orbit placement.
//!
//! Each element gets a uniform angular slot around the container center and
//! advances along it with time. The radius grows slightly with the element
//! index (scaled by 1/φ), and an eccentricity term pulls the circle into an
//! ellipse with two lobes per revolution.
//!
//! ```ignore
//! use goldorbit::prelude::*;
//!
//! let options = OrbitPreset::Cosmic.options();
//! for i in 0..planets.len() {
//!     let p = calculate_orbit(i, planets.len(), clock.elapsed(), 800.0, 600.0, &options)?;
//!     draw(p.x, p.y, p.scale, p.opacity);
//! }
//! ```
//!
//! Calls are pure: the same inputs always give the same [`OrbitalPosition`],
//! so batches can be computed in any order or in parallel.

use crate::constants::{INV_PHI, MIN_MAX_DISTANCE};
use crate::error::{OrbitError, Result};
use bytemuck::{Pod, Zeroable};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Tuning knobs for [`calculate_orbit`].
///
/// Use [`OrbitPreset`](crate::OrbitPreset) for the named bundles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitOptions {
    /// Degrees advanced per unit of time.
    pub speed: f64,
    /// Multiplier on the base radius (a quarter of the smaller container side).
    pub radius_multiplier: f64,
    /// Offset of the orbit center from the container center, in pixels.
    pub center_offset: DVec2,
    /// Strength of the elliptical modulation. 0 is a circle.
    pub eccentricity: f64,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            speed: 1.0,
            radius_multiplier: 1.0,
            center_offset: DVec2::ZERO,
            eccentricity: 0.1,
        }
    }
}

impl OrbitOptions {
    /// Set the angular speed.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the radius multiplier.
    pub fn with_radius_multiplier(mut self, multiplier: f64) -> Self {
        self.radius_multiplier = multiplier;
        self
    }

    /// Move the orbit center away from the container center.
    pub fn with_center_offset(mut self, offset: DVec2) -> Self {
        self.center_offset = offset;
        self
    }

    /// Set the eccentricity.
    pub fn with_eccentricity(mut self, eccentricity: f64) -> Self {
        self.eccentricity = eccentricity;
        self
    }
}

/// Placement and visual hints for one element at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalPosition {
    /// Horizontal pixel coordinate, from the container's left edge.
    pub x: f64,
    /// Vertical pixel coordinate, from the container's top edge.
    pub y: f64,
    /// Current angle in degrees, always in `[0, 360)`.
    pub angle: f64,
    /// Effective radius after the elliptical modulation.
    pub radius: f64,
    /// Perspective scale in `[0.6, 1.0]`; larger when closer to the center.
    pub scale: f64,
    /// Depth shading in `[0.7, 1.0]`, derived from the angle.
    pub opacity: f64,
}

impl OrbitalPosition {
    /// Position as a vector.
    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Narrow to the GPU instance layout.
    pub fn to_instance(&self) -> OrbitInstance {
        OrbitInstance {
            position: [self.x as f32, self.y as f32],
            scale: self.scale as f32,
            opacity: self.opacity as f32,
        }
    }
}

/// Per-instance data for rendering a batch of orbiting sprites.
///
/// Laid out for direct upload: `bytemuck::cast_slice(&instances)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct OrbitInstance {
    /// Pixel position.
    pub position: [f32; 2],
    /// Sprite scale multiplier.
    pub scale: f32,
    /// Sprite alpha.
    pub opacity: f32,
}

/// Wrap an angle in degrees into `[0, 360)`.
///
/// `rem_euclid` can round up to exactly 360 for tiny negative inputs, which is
/// folded back to 0.
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn check_container(width: f64, height: f64) -> Result<()> {
    if !width.is_finite() || width < 0.0 {
        return Err(OrbitError::invalid(
            "container_width",
            format!("must be finite and non-negative, got {}", width),
        ));
    }
    if !height.is_finite() || height < 0.0 {
        return Err(OrbitError::invalid(
            "container_height",
            format!("must be finite and non-negative, got {}", height),
        ));
    }
    Ok(())
}

fn check_options(options: &OrbitOptions) -> Result<()> {
    let fields = [
        ("speed", options.speed),
        ("radius_multiplier", options.radius_multiplier),
        ("eccentricity", options.eccentricity),
        ("center_offset.x", options.center_offset.x),
        ("center_offset.y", options.center_offset.y),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(OrbitError::invalid(name, format!("must be finite, got {}", value)));
        }
    }
    Ok(())
}

/// Compute where element `element_index` of `total_elements` sits at `time`.
///
/// `element_index >= total_elements` is not rejected; the formulas still apply
/// and keeping indices in range is the caller's job.
///
/// # Errors
///
/// [`OrbitError::InvalidArgument`] when `total_elements` is 0, `time` or an
/// option field is not finite, `time * speed` overflows, or a container
/// dimension is negative or not finite. A zero-sized container is accepted and
/// yields positions at the center.
pub fn calculate_orbit(
    element_index: usize,
    total_elements: usize,
    time: f64,
    container_width: f64,
    container_height: f64,
    options: &OrbitOptions,
) -> Result<OrbitalPosition> {
    if total_elements == 0 {
        return Err(OrbitError::invalid("total_elements", "must be at least 1"));
    }
    if !time.is_finite() {
        return Err(OrbitError::invalid("time", format!("must be finite, got {}", time)));
    }
    check_options(options)?;
    check_container(container_width, container_height)?;

    let advance = time * options.speed;
    if !advance.is_finite() {
        return Err(OrbitError::invalid(
            "time",
            format!("time * speed overflows: {} * {}", time, options.speed),
        ));
    }

    let center = DVec2::new(container_width / 2.0, container_height / 2.0) + options.center_offset;

    let index = element_index as f64;
    let base_angle = (index * 360.0) / total_elements as f64;
    let angle = wrap_degrees(base_angle + advance);
    let radians = angle.to_radians();

    let base_radius = container_width.min(container_height) * 0.25 * options.radius_multiplier;
    let fibonacci_radius = base_radius * (1.0 + index * INV_PHI * 0.3);
    let radius = fibonacci_radius * (1.0 + options.eccentricity * (2.0 * radians).cos());

    let (sin, cos) = radians.sin_cos();
    let position = center + DVec2::new(cos, sin) * radius;

    let distance = position.distance(center);
    let max_distance = (container_width.max(container_height) * 0.4).max(MIN_MAX_DISTANCE);
    let scale = 0.6 + 0.4 * (1.0 - (distance / max_distance).min(1.0));
    let opacity = 0.7 + 0.3 * sin.abs();

    Ok(OrbitalPosition {
        x: position.x,
        y: position.y,
        angle,
        radius,
        scale: scale.clamp(0.6, 1.0),
        opacity: opacity.clamp(0.7, 1.0),
    })
}

/// Compute the positions of all `total_elements` siblings, in index order.
pub fn calculate_orbits(
    total_elements: usize,
    time: f64,
    container_width: f64,
    container_height: f64,
    options: &OrbitOptions,
) -> Result<Vec<OrbitalPosition>> {
    let positions = (0..total_elements)
        .map(|i| {
            calculate_orbit(
                i,
                total_elements,
                time,
                container_width,
                container_height,
                options,
            )
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::trace!(count = positions.len(), time, "computed orbit batch");
    Ok(positions)
}

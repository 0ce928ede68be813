//! Named orbit presets and the element themes built on them.
//!
//! | Preset | speed | radius | eccentricity |
//! |--------|-------|--------|--------------|
//! | [`OrbitPreset::Default`] | 1.0 | 1.0 | 0.1 |
//! | [`OrbitPreset::Fast`] | 2.0 | 0.8 | 0.2 |
//! | [`OrbitPreset::Slow`] | 0.5 | 1.2 | 0.05 |
//! | [`OrbitPreset::Cosmic`] | 0.7 | 1.5 | 0.3 |

use crate::error::OrbitError;
use crate::orbit::OrbitOptions;
use glam::{DVec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named bundle of [`OrbitOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitPreset {
    /// Steady one-degree-per-tick orbit.
    #[default]
    Default,
    /// Quick, tighter and more elliptical.
    Fast,
    /// Lazy, wide and nearly circular.
    Slow,
    /// Wide sweeping ellipses.
    Cosmic,
}

impl OrbitPreset {
    /// Every preset, in declaration order.
    pub const ALL: [OrbitPreset; 4] = [
        OrbitPreset::Default,
        OrbitPreset::Fast,
        OrbitPreset::Slow,
        OrbitPreset::Cosmic,
    ];

    /// Lowercase name used in configs.
    pub fn name(&self) -> &'static str {
        match self {
            OrbitPreset::Default => "default",
            OrbitPreset::Fast => "fast",
            OrbitPreset::Slow => "slow",
            OrbitPreset::Cosmic => "cosmic",
        }
    }

    /// The options this preset stands for. The center offset is always zero.
    pub fn options(&self) -> OrbitOptions {
        let (speed, radius_multiplier, eccentricity) = match self {
            OrbitPreset::Default => (1.0, 1.0, 0.1),
            OrbitPreset::Fast => (2.0, 0.8, 0.2),
            OrbitPreset::Slow => (0.5, 1.2, 0.05),
            OrbitPreset::Cosmic => (0.7, 1.5, 0.3),
        };
        OrbitOptions {
            speed,
            radius_multiplier,
            center_offset: DVec2::ZERO,
            eccentricity,
        }
    }
}

impl fmt::Display for OrbitPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrbitPreset {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OrbitPreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OrbitError::UnknownPreset(s.to_string()))
    }
}

/// The four classical elements used to theme orbiting widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Air];

    /// Signature color (RGB, 0.0-1.0).
    pub fn color(&self) -> Vec3 {
        match self {
            Element::Fire => Vec3::new(1.0, 0.42, 0.21),   // Ember
            Element::Water => Vec3::new(0.31, 0.80, 0.77), // Aqua
            Element::Earth => Vec3::new(0.55, 0.71, 0.31), // Moss
            Element::Air => Vec3::new(0.65, 0.55, 0.98),   // Violet
        }
    }

    /// Orbit preset matching the element's temperament.
    pub fn preset(&self) -> OrbitPreset {
        match self {
            Element::Fire => OrbitPreset::Fast,
            Element::Water => OrbitPreset::Slow,
            Element::Earth => OrbitPreset::Default,
            Element::Air => OrbitPreset::Cosmic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_preset_values() {
        let fast = OrbitPreset::Fast.options();
        assert_eq!(fast.speed, 2.0);
        assert_eq!(fast.radius_multiplier, 0.8);
        assert_eq!(fast.eccentricity, 0.2);

        let cosmic = OrbitPreset::Cosmic.options();
        assert_eq!(cosmic.speed, 0.7);
        assert_eq!(cosmic.radius_multiplier, 1.5);
        assert_eq!(cosmic.eccentricity, 0.3);
    }

    #[test]
    fn test_default_preset_is_default_options() {
        assert_eq!(OrbitPreset::default().options(), OrbitOptions::default());
    }

    #[test]
    fn test_parse_names() {
        for preset in OrbitPreset::ALL {
            assert_eq!(preset.name().parse::<OrbitPreset>().unwrap(), preset);
            assert_eq!(preset.to_string(), preset.name());
        }
        assert_eq!(" SLOW ".parse::<OrbitPreset>().unwrap(), OrbitPreset::Slow);
        assert!(matches!(
            "warp".parse::<OrbitPreset>(),
            Err(OrbitError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&OrbitPreset::Cosmic).unwrap();
        assert_eq!(json, "\"cosmic\"");
        let element: Element = serde_json::from_str("\"water\"").unwrap();
        assert_eq!(element, Element::Water);
    }

    #[test]
    fn test_elements_have_distinct_presets() {
        let presets: HashSet<_> = Element::ALL.iter().map(|e| e.preset()).collect();
        assert_eq!(presets.len(), Element::ALL.len());
    }
}

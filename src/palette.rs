//! Particle color palettes.
//!
//! Colors are plain RGB [`Vec3`] values in the 0.0-1.0 range. Palettes are
//! usually written as hex strings in configs and parsed once up front.
//!
//! ```ignore
//! let colors = parse_palette(&["#FFD700", "#4ECDC4"])?;
//! ```

use crate::error::{OrbitError, Result};
use glam::Vec3;

/// Default burst palette as hex strings.
pub const DEFAULT_PALETTE_HEX: [&str; 4] = [
    "#FFD700", // Gold
    "#FF6B35", // Ember
    "#4ECDC4", // Aqua
    "#A78BFA", // Violet
];

/// Default burst palette as RGB colors.
pub fn default_palette() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 0.843_137_3, 0.0),
        Vec3::new(1.0, 0.419_607_85, 0.207_843_14),
        Vec3::new(0.305_882_36, 0.803_921_6, 0.768_627_46),
        Vec3::new(0.654_902, 0.545_098_06, 0.980_392_16),
    ]
}

/// Parse `#RRGGBB` or `#RGB` (the leading `#` is optional).
pub fn parse_hex_color(hex: &str) -> Result<Vec3> {
    let digits = hex.trim().trim_start_matches('#');
    let hex_digits = digits.chars().all(|c| c.is_ascii_hexdigit());
    let channel = |s: &str| u8::from_str_radix(s, 16).map(|v| v as f32 / 255.0);

    let rgb = match digits.len() {
        6 if hex_digits => (
            channel(&digits[0..2]),
            channel(&digits[2..4]),
            channel(&digits[4..6]),
        ),
        3 if hex_digits => {
            let double = |i: usize| digits[i..i + 1].repeat(2);
            (
                channel(double(0).as_str()),
                channel(double(1).as_str()),
                channel(double(2).as_str()),
            )
        }
        _ => return Err(OrbitError::InvalidColor(hex.to_string())),
    };

    match rgb {
        (Ok(r), Ok(g), Ok(b)) => Ok(Vec3::new(r, g, b)),
        _ => Err(OrbitError::InvalidColor(hex.to_string())),
    }
}

/// Parse a list of hex colors, failing on the first bad entry.
pub fn parse_palette<S: AsRef<str>>(colors: &[S]) -> Result<Vec<Vec3>> {
    colors.iter().map(|c| parse_hex_color(c.as_ref())).collect()
}

/// Format a color back to `#RRGGBB`.
pub fn to_hex(color: Vec3) -> String {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    format!("#{:02X}{:02X}{:02X}", c.x as u8, c.y as u8, c.z as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digits() {
        let c = parse_hex_color("#FF8000").unwrap();
        assert_eq!(c.x, 1.0);
        assert!((c.y - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.z, 0.0);
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(parse_hex_color("#fff").unwrap(), Vec3::ONE);
        assert_eq!(parse_hex_color("000").unwrap(), Vec3::ZERO);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(parse_hex_color("#GG0000"), Err(OrbitError::InvalidColor(_))));
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("").is_err());
        assert!(parse_hex_color("#ééé").is_err());
        assert!(parse_hex_color("#+F0000").is_err());
    }

    #[test]
    fn test_default_palette_matches_hex() {
        let parsed = parse_palette(&DEFAULT_PALETTE_HEX).unwrap();
        for (a, b) in parsed.iter().zip(default_palette()) {
            assert!((*a - b).abs().max_element() < 1e-5);
        }
    }

    #[test]
    fn test_hex_roundtrip() {
        for hex in DEFAULT_PALETTE_HEX {
            assert_eq!(to_hex(parse_hex_color(hex).unwrap()), hex);
        }
    }
}

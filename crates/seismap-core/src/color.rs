//! Marker color values parsed from host-supplied strings.

use serde::{Deserialize, Serialize};

/// An opaque RGB color carried by event entries.
///
/// Hosts hand colors over as strings (`"Red"`, `"#008000"`); they are parsed
/// once at entity creation and stored in this resolved form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS-style color string: `#rgb`, `#rrggbb`, or a named color.
    ///
    /// Only the names seismic hosts actually pass are covered; anything else
    /// is `None` and callers decide the fallback.
    pub fn parse(s: &str) -> Option<Rgb> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return match hex.len() {
                3 => {
                    let mut digits = hex.chars().map(|c| c.to_digit(16));
                    let r = digits.next()?? as u8;
                    let g = digits.next()?? as u8;
                    let b = digits.next()?? as u8;
                    Some(Rgb::new(r * 17, g * 17, b * 17))
                }
                6 => {
                    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                    Some(Rgb::new(r, g, b))
                }
                _ => None,
            };
        }

        // CSS named colors
        let named = match s.to_ascii_lowercase().as_str() {
            "black" => Rgb::new(0, 0, 0),
            "white" => Rgb::new(255, 255, 255),
            "red" => Rgb::new(255, 0, 0),
            "green" => Rgb::new(0, 128, 0),
            "lime" => Rgb::new(0, 255, 0),
            "blue" => Rgb::new(0, 0, 255),
            "yellow" => Rgb::new(255, 255, 0),
            "orange" => Rgb::new(255, 165, 0),
            "purple" => Rgb::new(128, 0, 128),
            "magenta" => Rgb::new(255, 0, 255),
            "cyan" => Rgb::new(0, 255, 255),
            "brown" => Rgb::new(165, 42, 42),
            "pink" => Rgb::new(255, 192, 203),
            "gray" | "grey" => Rgb::new(128, 128, 128),
            _ => return None,
        };

        Some(named)
    }

    /// Parse a color string, falling back to black when it is unrecognized.
    pub fn parse_or_black(s: &str) -> Rgb {
        match Rgb::parse(s) {
            Some(color) => color,
            None => {
                tracing::warn!(color = s, "unrecognized color string, using black");
                Rgb::BLACK
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Rgb::parse("Red"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::parse("blue"), Some(Rgb::new(0, 0, 255)));
        assert_eq!(Rgb::parse("GREEN"), Some(Rgb::new(0, 128, 0)));
        assert_eq!(Rgb::parse("grey"), Rgb::parse("gray"));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse("#008000"), Some(Rgb::new(0, 128, 0)));
        assert_eq!(Rgb::parse("#3D8EC9"), Some(Rgb::new(0x3d, 0x8e, 0xc9)));
        assert_eq!(Rgb::parse("#fff"), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgb::parse("not a color"), None);
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("#gggggg"), None);
    }

    #[test]
    fn test_parse_or_black_fallback() {
        assert_eq!(Rgb::parse_or_black("bogus"), Rgb::BLACK);
        assert_eq!(Rgb::parse_or_black("Red"), Rgb::new(255, 0, 0));
    }
}

//! Stroke colors for layout edges.
//!
//! [`Color`] accepts any CSS color string (`#741B1B`, `rgb(116 27 27)`,
//! `goldenrod`) and is written out as a lowercase hex string, `#rrggbb` when
//! opaque and `#rrggbbaa` otherwise.

use std::{fmt, str::FromStr};

use color::{AlphaColor, Srgb, parse_color};
use serde::{Serialize, Serializer};

/// An sRGB color with opacity.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color(AlphaColor<Srgb>);

impl Color {
    /// Parses a CSS color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use kinfolk_core::color::Color;
    ///
    /// assert_eq!(Color::parse("#741B1B").unwrap().to_string(), "#741b1b");
    /// assert!(Color::parse("not-a-color").is_err());
    /// ```
    pub fn parse(css: &str) -> Result<Self, String> {
        let color = parse_color(css).map_err(|err| format!("invalid color `{css}`: {err}"))?;
        Ok(Self(color.to_alpha_color::<Srgb>()))
    }

    /// Returns the same color at `opacity`, clamped to `0.0..=1.0`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self(self.0.with_alpha(opacity.clamp(0.0, 1.0)))
    }

    pub fn opacity(self) -> f32 {
        self.0.components[3]
    }

    /// Hex notation, with an alpha byte only when not fully opaque.
    pub fn to_hex(self) -> String {
        let rgba = self.0.to_rgba8();
        if rgba.a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_functional_colors() {
        assert_eq!(Color::parse("red").unwrap().to_hex(), "#ff0000");
        assert_eq!(Color::parse("rgb(116, 27, 27)").unwrap().to_hex(), "#741b1b");
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn test_opacity_adds_alpha_byte() {
        let gold = Color::parse("#B08D3E").unwrap();
        assert_eq!(gold.opacity(), 1.0);

        let faded = gold.with_opacity(0.6);
        assert!((faded.opacity() - 0.6).abs() < 0.001);
        assert_eq!(faded.to_hex(), "#b08d3e99");

        assert_eq!(gold.with_opacity(7.0).opacity(), 1.0);
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let color = Color::parse("#741B1B").unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#741b1b\"");
    }
}

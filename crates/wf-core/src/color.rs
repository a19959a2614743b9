use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color carried by every placement.
///
/// Serializes as the `#rrggbb` string form used by color pickers, so scene
/// exports stay readable and configs can write `color1 = "#aa00ff"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ColorParseError(String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: expected #rrggbb", self.0)
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `#rrggbb` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
        Ok(Self::new(channel(0), channel(2), channel(4)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_hash() {
        assert_eq!("#aa00ff".parse::<Color>().unwrap(), Color::new(170, 0, 255));
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!("00ffaa".parse::<Color>().unwrap(), Color::new(0, 255, 170));
    }

    #[test]
    fn test_parse_uppercase() {
        assert_eq!("#AA00FF".parse::<Color>().unwrap(), Color::new(170, 0, 255));
    }

    #[test]
    fn test_parse_rejects_short_and_garbage() {
        assert!("#aaa".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
        assert!("#aa00ff00".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Color::new(170, 0, 255).to_string(), "#aa00ff");
    }

    #[test]
    fn test_serde_string_roundtrip() {
        let c = Color::new(170, 0, 255);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#aa00ff\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn test_serde_rejects_bad_string() {
        assert!(serde_json::from_str::<Color>("\"#nothex\"").is_err());
    }
}

//! Cell colour labels and the routing role each one plays.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A classification label attached to every extracted cell.
///
/// The cell extractor reports colours by their exact lowercase name; anything
/// else is kept verbatim in [`Color::Other`] and treated as default terrain.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    /// Route origin.
    Red,
    /// Route destination.
    Green,
    /// Impassable wall.
    Black,
    /// Free passage, always weight 1.
    White,
    LightGray,
    DarkGray,
    Other(String),
}

impl Color {
    /// The lowercase name used by the cell extractor and in config keys.
    pub fn name(&self) -> &str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Black => "black",
            Self::White => "white",
            Self::LightGray => "lightgray",
            Self::DarkGray => "darkgray",
            Self::Other(s) => s,
        }
    }

    /// Parse a colour name. Never fails: unknown names become [`Color::Other`].
    ///
    /// Names are matched exactly; `"Red"` or `" red"` is not a start cell.
    pub fn parse(s: &str) -> Self {
        match s {
            "red" => Self::Red,
            "green" => Self::Green,
            "black" => Self::Black,
            "white" => Self::White,
            "lightgray" => Self::LightGray,
            "darkgray" => Self::DarkGray,
            other => Self::Other(other.to_string()),
        }
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Red)
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, Self::Green)
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        matches!(self, Self::Black)
    }

    /// White, light gray and dark gray: terrain whose cost depends on the
    /// configured weights.
    #[inline]
    pub fn is_light_obstacle(&self) -> bool {
        matches!(self, Self::White | Self::LightGray | Self::DarkGray)
    }

    /// The key this colour's weight override is stored under, e.g.
    /// `"lightgray_weight"`.
    pub fn config_key(&self) -> String {
        format!("{}_weight", self.name())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_and_unknown() {
        assert_eq!(Color::parse("red"), Color::Red);
        assert_eq!(Color::parse("lightgray"), Color::LightGray);
        assert_eq!(Color::parse(" LightGray "), Color::Other(" LightGray ".to_string()));
        assert_eq!(Color::parse("Red"), Color::Other("Red".to_string()));
        assert_eq!(Color::parse("darkgray"), Color::DarkGray);
        assert_eq!(Color::parse("blue"), Color::Other("blue".to_string()));
    }

    #[test]
    fn roles() {
        assert!(Color::Red.is_start());
        assert!(Color::Green.is_end());
        assert!(Color::Black.is_wall());
        assert!(Color::White.is_light_obstacle());
        assert!(Color::DarkGray.is_light_obstacle());
        assert!(!Color::Red.is_light_obstacle());
        assert!(!Color::Other("blue".into()).is_wall());
    }

    #[test]
    fn config_keys() {
        assert_eq!(Color::LightGray.config_key(), "lightgray_weight");
        assert_eq!(Color::Other("blue".into()).config_key(), "blue_weight");
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Color::DarkGray.to_string(), "darkgray");
        assert_eq!("green".parse::<Color>().unwrap(), Color::Green);
    }

    #[test]
    fn serializes_as_name() {
        assert_eq!(serde_json::to_string(&Color::LightGray).unwrap(), r#""lightgray""#);
        let c: Color = serde_json::from_str(r#""Purple""#).unwrap();
        assert_eq!(c, Color::Other("Purple".to_string()));
        assert_eq!(serde_json::to_string(&c).unwrap(), r#""Purple""#);
    }
}

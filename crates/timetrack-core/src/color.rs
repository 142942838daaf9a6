//! CSS colors for strokes, text and the canvas background.
//!
//! [`Color`] wraps [`color::DynamicColor`] so configuration strings and
//! palette RGB triples share one type.

use std::{fmt, str::FromStr};

use color::DynamicColor;
use thiserror::Error;

/// A configured string that is not a CSS color.
#[derive(Debug, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct ParseColorError {
    input: String,
    reason: String,
}

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string such as `"#ff0000"`, `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetrack_core::color::Color;
    ///
    /// assert!(Color::new("#ff0000").is_ok());
    /// assert!(Color::new("bluish").is_err());
    /// ```
    pub fn new(input: &str) -> Result<Self, ParseColorError> {
        input.parse()
    }

    /// Creates an opaque color from 8-bit components.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetrack_core::color::Color;
    ///
    /// let teal = Color::from_rgb8(0, 128, 128);
    /// assert_eq!(teal, Color::new("rgb(0, 128, 128)").unwrap());
    /// ```
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(&format!("rgb({red}, {green}, {blue})"))
            .expect("rgb() with 8-bit components is a valid CSS color")
    }

    /// Opacity between 0.0 and 1.0.
    pub fn opacity(&self) -> f32 {
        self.color.components[3]
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        DynamicColor::from_str(input.trim())
            .map(|color| Self { color })
            .map_err(|err| ParseColorError {
                input: input.to_string(),
                reason: err.to_string(),
            })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

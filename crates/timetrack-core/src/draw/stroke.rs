//! Line strokes: color, width, dash pattern and end caps.
//!
//! ```
//! use timetrack_core::draw::{StrokeDefinition, StrokeCap};
//! use timetrack_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let mut lifespan = StrokeDefinition::solid(Color::new("teal").unwrap(), 3.0);
//! lifespan.set_cap(StrokeCap::Round);
//!
//! let line = svg_element::Line::new().set("x1", 0).set("x2", 100);
//! let line = timetrack_core::apply_stroke!(line, &lifespan);
//! ```

use crate::color::Color;

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// Main axis, `5,5`.
    Dashed,
    /// Guides from the axis down to a lifespan, `2,2`.
    Dotted,
}

impl StrokeStyle {
    /// The `stroke-dasharray` value, `None` for solid lines.
    pub fn dasharray(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
            Self::Dotted => Some("2,2"),
        }
    }
}

/// End caps, mapped to `stroke-linecap`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
}

impl StrokeCap {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
}

impl StrokeDefinition {
    fn with_style(color: Color, width: f32, style: StrokeStyle) -> Self {
        Self {
            color,
            width,
            style,
            cap: StrokeCap::default(),
        }
    }

    pub fn solid(color: Color, width: f32) -> Self {
        Self::with_style(color, width, StrokeStyle::Solid)
    }

    pub fn dashed(color: Color, width: f32) -> Self {
        Self::with_style(color, width, StrokeStyle::Dashed)
    }

    pub fn dotted(color: Color, width: f32) -> Self {
        Self::with_style(color, width, StrokeStyle::Dotted)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    /// Returns a copy of this stroke drawn in another color.
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Sets the stroke attributes of `$stroke` on an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        let elem = $element
            .set("stroke", stroke.color().to_string())
            .set("stroke-opacity", stroke.color().opacity())
            .set("stroke-width", stroke.width())
            .set("stroke-linecap", stroke.cap().to_svg_value());

        match stroke.style().dasharray() {
            Some(dasharray) => elem.set("stroke-dasharray", dasharray),
            None => elem,
        }
    }};
}

//! SVG drawing primitives for timeline elements.
//!
//! Every visual element implements [`Drawable`], which renders the element
//! at a position into a [`LayeredOutput`]. The timeline renderer collects
//! the outputs of all elements and emits them layer by layer.

mod layer;
mod line;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use line::Line;
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
pub use text::{FontWeight, Text, TextDefinition};

use crate::geometry::Point;

/// An element that can be rendered to layered SVG output.
pub trait Drawable {
    /// Render the element with its origin placed at `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}

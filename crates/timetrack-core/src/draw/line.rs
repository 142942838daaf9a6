//! Straight line segments: the axis, year ticks, guides and lifespans.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

/// A straight segment starting at the render position.
///
/// The segment's end is stored relative to its start, so the same line can
/// be drawn anywhere on the canvas.
///
/// # Examples
///
/// ```
/// # use timetrack_core::draw::{Drawable, Line, RenderLayer, StrokeDefinition};
/// # use timetrack_core::geometry::Point;
/// let stroke = StrokeDefinition::default();
/// let tick = Line::vertical(&stroke, RenderLayer::Axis, 10.0);
///
/// let output = tick.render_to_layers(Point::new(50.0, 95.0));
/// assert!(!output.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Line<'a> {
    stroke: &'a StrokeDefinition,
    layer: RenderLayer,
    delta: Point,
}

impl<'a> Line<'a> {
    /// Creates a segment from the render position to `position + delta`.
    pub fn new(stroke: &'a StrokeDefinition, layer: RenderLayer, delta: Point) -> Self {
        Self {
            stroke,
            layer,
            delta,
        }
    }

    /// Creates a horizontal segment of the given length.
    pub fn horizontal(stroke: &'a StrokeDefinition, layer: RenderLayer, length: f32) -> Self {
        Self::new(stroke, layer, Point::new(length, 0.0))
    }

    /// Creates a vertical segment of the given length, growing downward.
    pub fn vertical(stroke: &'a StrokeDefinition, layer: RenderLayer, length: f32) -> Self {
        Self::new(stroke, layer, Point::new(0.0, length))
    }

    /// Returns the layer this segment renders to.
    pub fn layer(&self) -> RenderLayer {
        self.layer
    }
}

impl Drawable for Line<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let end = position + self.delta;
        let line = svg_element::Line::new()
            .set("x1", position.x())
            .set("y1", position.y())
            .set("x2", end.x())
            .set("y2", end.y());
        let line = apply_stroke!(line, self.stroke);

        let mut output = LayeredOutput::new();
        output.add_to_layer(self.layer, Box::new(line));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(line: &Line<'_>, position: Point) -> String {
        line.render_to_layers(position)
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_horizontal_line_endpoints() {
        let stroke = StrokeDefinition::default();
        let line = Line::horizontal(&stroke, RenderLayer::Lifespan, 450.0);
        let svg = render(&line, Point::new(100.0, 110.0));

        assert!(svg.contains("x1=\"100\""));
        assert!(svg.contains("x2=\"550\""));
        assert!(svg.contains("y1=\"110\""));
        assert!(svg.contains("y2=\"110\""));
        assert!(svg.contains("data-layer=\"lifespan\""));
    }

    #[test]
    fn test_vertical_line_grows_downward() {
        let stroke = StrokeDefinition::default();
        let line = Line::vertical(&stroke, RenderLayer::Guide, 20.0);
        let svg = render(&line, Point::new(60.0, 95.0));

        assert!(svg.contains("y2=\"115\""));
        assert_eq!(line.layer(), RenderLayer::Guide);
    }
}

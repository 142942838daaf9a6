//! Text labels: person names and year markers.
//!
//! A label is an SVG `<text>` anchored at its top-left corner. Hover text
//! goes into a nested `<title>`.

use svg::{Node as _, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Font and fill shared by a family of labels.
///
/// Without a color the SVG default fill (black) applies.
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    weight: FontWeight,
    color: Option<Color>,
}

impl TextDefinition {
    pub fn new(font_family: &str, font_size: u16) -> Self {
        Self {
            font_family: font_family.to_string(),
            font_size,
            weight: FontWeight::Normal,
            color: None,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self::new("Arial", 12)
    }
}

/// A renderable label combining content with a [`TextDefinition`].
///
/// # Examples
///
/// ```
/// # use timetrack_core::draw::{Drawable, Text, TextDefinition};
/// # use timetrack_core::geometry::Point;
/// let style = TextDefinition::default();
/// let label = Text::new(&style, "Ada Lovelace").with_tooltip("Born: 10/12/1815");
///
/// let output = label.render_to_layers(Point::new(60.0, 90.0));
/// assert!(!output.is_empty());
/// assert_eq!(label.content(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
    tooltip: Option<&'a str>,
}

impl<'a> Text<'a> {
    /// Creates a new label with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
            tooltip: None,
        }
    }

    /// Attaches hover text to the label.
    pub fn with_tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Returns the text content of this label.
    pub fn content(&self) -> &str {
        self.content
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("dominant-baseline", "hanging")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("font-weight", self.definition.weight().to_svg_value());

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.opacity());
        }

        if let Some(tooltip) = self.tooltip {
            let mut title = svg_element::Element::new("title");
            title.append(SvgText::new(tooltip));
            rendered_text = rendered_text.add(title);
        }

        rendered_text = rendered_text.add(SvgText::new(self.content));

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &Text<'_>) -> String {
        text.render_to_layers(Point::new(10.0, 20.0))
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_text_definition_default() {
        let definition = TextDefinition::default();
        assert_eq!(definition.font_family(), "Arial");
        assert_eq!(definition.font_size(), 12);
        assert_eq!(definition.weight(), FontWeight::Normal);
        assert!(definition.color().is_none());
    }

    #[test]
    fn test_text_renders_content_and_style() {
        let definition = TextDefinition::new("Georgia", 14).with_weight(FontWeight::Bold);

        let svg = render(&Text::new(&definition, "Hypatia"));

        assert!(svg.contains("Hypatia"));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains("font-family=\"Georgia\""));
        assert!(svg.contains("data-layer=\"text\""));
        assert!(!svg.contains("<title>"));
    }

    #[test]
    fn test_text_tooltip_is_escaped_title() {
        let definition = TextDefinition::default();
        let svg = render(&Text::new(&definition, "Tom & Jerry").with_tooltip("a < b"));

        assert!(svg.contains("<title>"));
        assert!(svg.contains("a &lt; b"));
        assert!(svg.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_text_color_sets_fill() {
        let definition = TextDefinition::default().with_color(Color::new("navy").unwrap());

        let svg = render(&Text::new(&definition, "x"));
        assert!(svg.contains("fill=\"navy\""));
    }
}

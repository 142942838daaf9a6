//! SVG rendering of timeline layouts.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use timetrack_core::{
    color::Color,
    draw::{
        Drawable, FontWeight, LayeredOutput, Line, RenderLayer, StrokeCap, StrokeDefinition, Text,
        TextDefinition,
    },
    geometry::{Point, Size},
};

use crate::{
    config::StyleConfig,
    export::{self, Exporter},
    layout::{Placement, TimelineLayout},
};

const AXIS_WIDTH: f32 = 2.0;
const LIFESPAN_WIDTH: f32 = 3.0;
const GUIDE_WIDTH: f32 = 1.0;
const TICK_WIDTH: f32 = 1.0;
/// Half the height of a year tick.
const TICK_HALF_HEIGHT: f32 = 5.0;
/// Year labels sit this far above the axis.
const YEAR_LABEL_RISE: f32 = 30.0;
/// Year labels are this many points smaller than name labels.
const YEAR_FONT_SHRINK: u16 = 2;
/// Horizontal shift that roughly centers a year label on its tick.
const YEAR_LABEL_SHIFT: f32 = 15.0;
/// Lifespans sit this far above their row.
const LIFESPAN_LIFT: f32 = 10.0;
/// Name labels sit this far above their row.
const LABEL_LIFT: f32 = 30.0;
const LABEL_INDENT: f32 = 5.0;

/// Horizontal window of the canvas to export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    offset: f32,
    width: f32,
}

impl Viewport {
    pub fn new(offset: f32, width: f32) -> Self {
        Self { offset, width }
    }
}

/// Builder for [`Svg`] renderers.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
    viewport: Option<Viewport>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Crops the output to `viewport`.
    pub fn with_viewport(mut self, viewport: Option<Viewport>) -> Self {
        self.viewport = viewport;
        self
    }

    /// Resolves the style into drawing definitions.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] when a configured color is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        let background = style.background_color().map_err(export::Error::Render)?;
        let axis_color = style.axis_color().map_err(export::Error::Render)?;

        let mut lifespan_stroke = StrokeDefinition::solid(Color::default(), LIFESPAN_WIDTH);
        lifespan_stroke.set_cap(StrokeCap::Round);

        let name_text = TextDefinition::new(style.font_family(), style.font_size())
            .with_weight(FontWeight::Bold);
        let year_font_size = style.font_size().saturating_sub(YEAR_FONT_SHRINK).max(1);
        let year_text =
            TextDefinition::new(style.font_family(), year_font_size).with_color(axis_color);

        Ok(Svg {
            background,
            axis_stroke: StrokeDefinition::dashed(axis_color, AXIS_WIDTH),
            tick_stroke: StrokeDefinition::solid(axis_color, TICK_WIDTH),
            guide_stroke: StrokeDefinition::dotted(Color::default(), GUIDE_WIDTH),
            lifespan_stroke,
            year_text,
            name_text,
            viewport: self.viewport,
        })
    }
}

/// Renders a [`TimelineLayout`] as an SVG document.
#[derive(Debug, Clone)]
pub struct Svg {
    background: Option<Color>,
    axis_stroke: StrokeDefinition,
    tick_stroke: StrokeDefinition,
    guide_stroke: StrokeDefinition,
    lifespan_stroke: StrokeDefinition,
    year_text: TextDefinition,
    name_text: TextDefinition,
    viewport: Option<Viewport>,
}

impl Svg {
    /// Renders the complete layout to an SVG document.
    pub fn render_timeline(&self, layout: &TimelineLayout<'_>) -> Document {
        let canvas = layout.canvas_size();
        let (view_x, view_width) = match self.viewport {
            Some(viewport) => (viewport.offset, viewport.width),
            None => (0.0, canvas.width()),
        };
        debug!(view_x, view_width, height = canvas.height(); "SVG dimensions");

        let mut output = LayeredOutput::new();
        output.merge(self.render_background(canvas));
        output.merge(self.render_axis(layout));
        for placement in layout.placements() {
            output.merge(self.render_placement(placement, layout.axis_y()));
        }

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("{} 0 {} {}", view_x, view_width, canvas.height()),
            )
            .set("width", view_width)
            .set("height", canvas.height());

        for node in output.render() {
            doc = doc.add(node);
        }
        doc
    }

    fn render_background(&self, canvas: Size) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if let Some(color) = self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", canvas.width())
                .set("height", canvas.height())
                .set("fill", &color);
            output.add_to_layer(RenderLayer::Background, Box::new(rect));
        }
        output
    }

    fn render_axis(&self, layout: &TimelineLayout<'_>) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let Some(scale) = layout.scale() else {
            return output;
        };

        let axis_y = layout.axis_y();
        let start = scale.x(scale.year_min());
        let axis = Line::horizontal(
            &self.axis_stroke,
            RenderLayer::Axis,
            scale.x(scale.year_max()) - start,
        );
        output.merge(axis.render_to_layers(Point::new(start, axis_y)));

        let tick = Line::vertical(&self.tick_stroke, RenderLayer::Axis, 2.0 * TICK_HALF_HEIGHT);
        let label_y = axis_y - YEAR_LABEL_RISE;
        for year_tick in layout.ticks() {
            output.merge(
                tick.render_to_layers(Point::new(year_tick.x(), axis_y - TICK_HALF_HEIGHT)),
            );

            let year = year_tick.year().to_string();
            let label = Text::new(&self.year_text, &year);
            output.merge(
                label.render_to_layers(Point::new(year_tick.x() - YEAR_LABEL_SHIFT, label_y)),
            );
        }

        output
    }

    fn render_placement(&self, placement: &Placement<'_>, axis_y: f32) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let record = placement.record();
        let lifespan_y = placement.row() - LIFESPAN_LIFT;
        let guide_top = axis_y - TICK_HALF_HEIGHT;
        let has_span = (placement.x_end() - placement.x_birth()).abs() > f32::EPSILON;

        if !record.is_living() || has_span {
            let stroke = self.lifespan_stroke.with_color(placement.color());
            let lifespan = Line::horizontal(
                &stroke,
                RenderLayer::Lifespan,
                placement.x_end() - placement.x_birth(),
            );
            output.merge(lifespan.render_to_layers(Point::new(placement.x_birth(), lifespan_y)));
        }

        let guide = Line::vertical(&self.guide_stroke, RenderLayer::Guide, lifespan_y - guide_top);
        output.merge(guide.render_to_layers(Point::new(placement.x_birth(), guide_top)));
        if !record.is_living() {
            output.merge(guide.render_to_layers(Point::new(placement.x_end(), guide_top)));
        }

        let tooltip = record.tooltip();
        let label = Text::new(&self.name_text, record.name()).with_tooltip(&tooltip);
        output.merge(label.render_to_layers(Point::new(
            placement.x_birth() + LABEL_INDENT,
            placement.row() - LABEL_LIFT,
        )));

        output
    }

    /// Writes an SVG document to the specified file.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Io`] if the file cannot be created or written.
    pub fn write_document(&self, doc: &Document, path: &Path) -> Result<(), export::Error> {
        info!(path:? = path; "Creating SVG file");
        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(path:? = path, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(path:? = path, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl Exporter for Svg {
    fn export_timeline(
        &self,
        layout: &TimelineLayout<'_>,
        out: &mut dyn Write,
    ) -> Result<(), export::Error> {
        let doc = self.render_timeline(layout);
        debug!("SVG document rendered");
        write!(out, "{doc}")?;
        Ok(())
    }
}

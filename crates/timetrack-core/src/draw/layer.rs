//! Z-ordering of SVG nodes.
//!
//! Drawables tag each node with a [`RenderLayer`]. Guides never hide
//! lifespans and labels stay on top no matter in which order records are
//! drawn.
//!
//! ```
//! # use timetrack_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Line, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("1900")));
//! output.add_to_layer(RenderLayer::Axis, Box::new(Line::new()));
//!
//! assert_eq!(output.render().len(), 2);
//! ```

use log::trace;
use svg::{Node as _, node::element as svg_element};

pub type SvgNode = Box<dyn svg::Node>;

/// Drawing layers, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    Background,
    /// Main axis and year ticks.
    Axis,
    /// Dotted lines from the axis down to a lifespan.
    Guide,
    Lifespan,
    /// Names and year labels.
    Text,
}

impl RenderLayer {
    /// Value of the `data-layer` attribute on the layer's group.
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Axis => "axis",
            Self::Guide => "guide",
            Self::Lifespan => "lifespan",
            Self::Text => "text",
        }
    }
}

/// SVG nodes tagged with their layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Moves all nodes of `other` into this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Groups the nodes into one `<g data-layer="...">` per non-empty layer.
    ///
    /// Groups come out bottom layer first. Within a layer nodes keep their
    /// insertion order.
    pub fn render(mut self) -> Vec<SvgNode> {
        trace!(items = self.items.len(); "Rendering layered output");

        // sort_by_key is stable
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut groups: Vec<(RenderLayer, svg_element::Group)> = Vec::new();
        for (layer, node) in self.items {
            match groups.last_mut() {
                Some((current, group)) if *current == layer => group.append(node),
                _ => {
                    let mut group = svg_element::Group::new().set("data-layer", layer.name());
                    group.append(node);
                    groups.push((layer, group));
                }
            }
        }

        groups
            .into_iter()
            .map(|(_, group)| Box::new(group) as SvgNode)
            .collect()
    }
}

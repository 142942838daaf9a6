//! Configuration types for timeline layout, styling and storage.
//!
//! All types implement [`serde::Deserialize`] and fill missing keys from
//! their defaults, so a configuration file only needs the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`LayoutConfig`] - Scale, row placement and color seed.
//! - [`StyleConfig`] - Colors and fonts of the rendered SVG.
//! - [`StorageConfig`] - Location of the persisted record file.
//! - [`RenderConfig`] - Optional SVG file refreshed after every change.
//!
//! # Example
//!
//! ```
//! # use timetrack::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().pixels_per_year(), 10.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use timetrack_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    storage: StorageConfig,

    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given layout and style sections
    /// and default storage and render sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self {
            layout,
            style,
            ..Self::default()
        }
    }

    /// Replaces the storage section.
    pub fn with_storage(mut self, storage: StorageConfig) -> Self {
        self.storage = storage;
        self
    }

    /// Replaces the render section.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the storage configuration.
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Timeline scale and row placement settings.
///
/// | Key | Default |
/// |-----|---------|
/// | `pixels_per_year` | `10.0` |
/// | `origin_x` | `50.0` |
/// | `axis_y` | `100.0` |
/// | `base_row_y` | `120.0` |
/// | `row_spacing` | `25.0` |
/// | `year_padding` | `5` |
/// | `tick_interval` | `10` |
/// | `seed` | none |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pixels_per_year: f32,
    origin_x: f32,
    axis_y: f32,
    base_row_y: f32,
    row_spacing: f32,
    year_padding: i32,
    tick_interval: i32,
    seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pixels_per_year: 10.0,
            origin_x: 50.0,
            axis_y: 100.0,
            base_row_y: 120.0,
            row_spacing: 25.0,
            year_padding: 5,
            tick_interval: 10,
            seed: None,
        }
    }
}

impl LayoutConfig {
    /// Horizontal pixels per calendar year.
    pub fn pixels_per_year(&self) -> f32 {
        self.pixels_per_year
    }

    /// X coordinate of the first visible year.
    pub fn origin_x(&self) -> f32 {
        self.origin_x
    }

    /// Y coordinate of the main axis.
    pub fn axis_y(&self) -> f32 {
        self.axis_y
    }

    /// Y coordinate of the first row.
    pub fn base_row_y(&self) -> f32 {
        self.base_row_y
    }

    /// Minimum vertical distance between two rows.
    pub fn row_spacing(&self) -> f32 {
        self.row_spacing
    }

    /// Years added on both ends of the visible range.
    pub fn year_padding(&self) -> i32 {
        self.year_padding
    }

    /// Years between two axis ticks.
    pub fn tick_interval(&self) -> i32 {
        self.tick_interval
    }

    /// Seed for the color palette; `None` picks fresh colors every time.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn with_pixels_per_year(mut self, pixels_per_year: f32) -> Self {
        self.pixels_per_year = pixels_per_year;
        self
    }

    pub fn with_origin_x(mut self, origin_x: f32) -> Self {
        self.origin_x = origin_x;
        self
    }

    pub fn with_row_spacing(mut self, row_spacing: f32) -> Self {
        self.row_spacing = row_spacing;
        self
    }

    pub fn with_year_padding(mut self, year_padding: i32) -> Self {
        self.year_padding = year_padding;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Visual styling of the rendered SVG.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    axis_color: String,
    font_family: String,
    font_size: u16,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            axis_color: "black".to_string(),
            font_family: "Arial".to_string(),
            font_size: 12,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed axis [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn axis_color(&self) -> Result<Color, String> {
        Color::new(&self.axis_color).map_err(|err| format!("Invalid axis color in config: {err}"))
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

/// Where records are persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("timetrack.json"),
        }
    }
}

impl StorageConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Path of the JSON record file.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

/// Automatic SVG output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    output: Option<PathBuf>,
}

impl RenderConfig {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    /// SVG file re-rendered after each change to the records, if any.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

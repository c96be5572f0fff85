//! Configuration types for Kinfolk layout and styling.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file. Every field is optional in the
//! source; missing values fall back to the defaults documented below.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Node dimensions, gaps, direction and the visible generation cap.
//! - [`StyleConfig`] - Stroke colors, widths and dash patterns for edges.
//!
//! # Example
//!
//! ```
//! # use kinfolk::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().node_width(), 140.0);
//! assert!(config.style().blood_color().is_ok());
//! ```

use serde::Deserialize;

use kinfolk_core::color::Color;

use crate::layout::LayoutDirection;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Geometry and disclosure settings for the tree layout.
///
/// | Field               | Default          |
/// |---------------------|------------------|
/// | `direction`         | `top-to-bottom`  |
/// | `node_width`        | 140              |
/// | `node_height`       | 190              |
/// | `spouse_gap`        | 40               |
/// | `sibling_gap`       | 100              |
/// | `rank_separation`   | 300              |
/// | `forest_gap`        | 300              |
/// | `max_visible_level` | 5                |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    direction: LayoutDirection,
    node_width: f32,
    node_height: f32,
    spouse_gap: f32,
    sibling_gap: f32,
    rank_separation: f32,
    forest_gap: f32,
    max_visible_level: Option<u32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::TopToBottom,
            node_width: 140.0,
            node_height: 190.0,
            spouse_gap: 40.0,
            sibling_gap: 100.0,
            rank_separation: 300.0,
            forest_gap: 300.0,
            max_visible_level: Some(5),
        }
    }
}

impl LayoutConfig {
    /// Returns a copy with a different [`LayoutDirection`].
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Returns a copy with a different generation cap. `None` shows everyone.
    pub fn with_max_visible_level(mut self, max_visible_level: Option<u32>) -> Self {
        self.max_visible_level = max_visible_level;
        self
    }

    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    pub fn node_height(&self) -> f32 {
        self.node_height
    }

    pub fn spouse_gap(&self) -> f32 {
        self.spouse_gap
    }

    pub fn sibling_gap(&self) -> f32 {
        self.sibling_gap
    }

    pub fn rank_separation(&self) -> f32 {
        self.rank_separation
    }

    pub fn forest_gap(&self) -> f32 {
        self.forest_gap
    }

    pub fn max_visible_level(&self) -> Option<u32> {
        self.max_visible_level
    }
}

/// Visual styling for rendered edges.
///
/// Spouse edges default to a thin dashed gold line at 60% opacity, blood and
/// adoption edges to a thick solid dark red line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    blood_color: String,
    spouse_color: String,
    blood_width: f32,
    spouse_width: f32,
    spouse_opacity: f32,
    spouse_dash: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            blood_color: "#741B1B".to_string(),
            spouse_color: "#B08D3E".to_string(),
            blood_width: 4.0,
            spouse_width: 2.0,
            spouse_opacity: 0.6,
            spouse_dash: "6 4".to_string(),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed stroke [`Color`] of parent-child edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn blood_color(&self) -> Result<Color, String> {
        Color::parse(&self.blood_color).map_err(|err| format!("Invalid blood color in config: {err}"))
    }

    /// Returns the parsed stroke [`Color`] of spouse edges, with the
    /// configured opacity applied as alpha.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn spouse_color(&self) -> Result<Color, String> {
        Color::parse(&self.spouse_color)
            .map(|color| color.with_opacity(self.spouse_opacity))
            .map_err(|err| format!("Invalid spouse color in config: {err}"))
    }

    pub fn blood_width(&self) -> f32 {
        self.blood_width
    }

    pub fn spouse_width(&self) -> f32 {
        self.spouse_width
    }

    pub fn spouse_dash(&self) -> &str {
        &self.spouse_dash
    }
}

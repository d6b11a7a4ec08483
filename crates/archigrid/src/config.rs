//! Configuration types for Archigrid layouts.
//!
//! This module provides configuration structures that control element
//! sizing and the spacing of the layout grid. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources, and
//! every field falls back to its default when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and spacing settings.
//! - [`LayoutConfig`] - Default element size, grid unit and margin.
//! - [`SpacingConfig`] - Gaps and paddings between grid cells and around containers.
//!
//! # Example
//!
//! ```
//! # use archigrid::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [layout]
//!     grid_size = 10
//!
//!     [spacing]
//!     column_gap = 120
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.layout().grid_size(), 10);
//! assert_eq!(config.layout().element_width(), 120.0);
//! assert_eq!(config.spacing().column_gap(), 120.0);
//! ```

use serde::Deserialize;

/// Top-level configuration combining layout and spacing settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Spacing configuration section.
    #[serde(default)]
    spacing: SpacingConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and spacing configurations.
    pub fn new(layout: LayoutConfig, spacing: SpacingConfig) -> Self {
        Self { layout, spacing }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the spacing configuration.
    pub fn spacing(&self) -> &SpacingConfig {
        &self.spacing
    }
}

/// Element sizing and grid settings.
///
/// The element size is used for objects that do not declare a positive size
/// of their own, and as the minimum width of every grid column.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    element_width: f32,
    element_height: f32,
    grid_size: u32,
    margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            element_width: 120.0,
            element_height: 55.0,
            grid_size: 12,
            margin: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Sets the default element size.
    pub fn with_element_size(mut self, width: f32, height: f32) -> Self {
        self.element_width = width;
        self.element_height = height;
        self
    }

    /// Sets the grid unit every result is snapped to.
    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets the diagram margin preference.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn element_width(&self) -> f32 {
        self.element_width
    }

    pub fn element_height(&self) -> f32 {
        self.element_height
    }

    /// Returns the grid unit.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Returns the margin preference. The grid margin used for layout is
    /// derived from it and never smaller than
    /// [`SpacingConfig::min_grid_margin`].
    pub fn margin(&self) -> f32 {
        self.margin
    }
}

/// Gaps and paddings of the layout grid.
///
/// Values are given in diagram units and snapped to the grid unit before a
/// layout run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpacingConfig {
    /// Vertical padding between stacked groups of one cell.
    cell_padding: f32,
    /// Horizontal gap between members of a sibling group.
    sibling_gap: f32,
    /// Horizontal step between consecutive staircase groups.
    diagonal_offset: f32,
    column_gap: f32,
    /// Gap between sub-rows of the same layer.
    row_gap: f32,
    /// Gap between rows of different layers.
    layer_gap: f32,
    min_grid_margin: f32,
    container_padding_top: f32,
    container_padding_side: f32,
    container_padding_bottom: f32,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            cell_padding: 40.0,
            sibling_gap: 30.0,
            diagonal_offset: 80.0,
            column_gap: 100.0,
            row_gap: 40.0,
            layer_gap: 80.0,
            min_grid_margin: 40.0,
            container_padding_top: 36.0,
            container_padding_side: 12.0,
            container_padding_bottom: 12.0,
        }
    }
}

impl SpacingConfig {
    /// Sets the horizontal step between staircase groups.
    pub fn with_diagonal_offset(mut self, diagonal_offset: f32) -> Self {
        self.diagonal_offset = diagonal_offset;
        self
    }

    /// Sets the column gap.
    pub fn with_column_gap(mut self, column_gap: f32) -> Self {
        self.column_gap = column_gap;
        self
    }

    pub fn cell_padding(&self) -> f32 {
        self.cell_padding
    }

    pub fn sibling_gap(&self) -> f32 {
        self.sibling_gap
    }

    pub fn diagonal_offset(&self) -> f32 {
        self.diagonal_offset
    }

    pub fn column_gap(&self) -> f32 {
        self.column_gap
    }

    pub fn row_gap(&self) -> f32 {
        self.row_gap
    }

    pub fn layer_gap(&self) -> f32 {
        self.layer_gap
    }

    pub fn min_grid_margin(&self) -> f32 {
        self.min_grid_margin
    }

    pub fn container_padding_top(&self) -> f32 {
        self.container_padding_top
    }

    pub fn container_padding_side(&self) -> f32 {
        self.container_padding_side
    }

    pub fn container_padding_bottom(&self) -> f32 {
        self.container_padding_bottom
    }
}

//! Spacing values resolved from configuration for one layout run.

use archigrid_core::geometry::{Insets, Size};

use crate::config::AppConfig;

/// Grid-snapped spacing constants.
#[derive(Debug, Clone, Copy)]
pub struct Metrics {
    pub element_size: Size,
    pub grid_size: u32,
    pub grid_margin: f32,
    pub cell_padding: f32,
    pub sibling_gap: f32,
    pub diagonal_offset: f32,
    pub column_gap: f32,
    pub row_gap: f32,
    pub layer_gap: f32,
    pub container_padding: Insets,
}

impl Metrics {
    /// Resolves `config` against its own grid unit.
    ///
    /// The grid unit is at least 1. Every spacing value is rounded to the
    /// nearest grid multiple, and the margin is scaled from the margin
    /// preference but never drops below the minimum grid margin.
    pub fn from_config(config: &AppConfig) -> Self {
        let layout = config.layout();
        let spacing = config.spacing();

        let grid_size = layout.grid_size().max(1);
        let snap = |value: f32| snap_value(value, grid_size);

        let side = snap(spacing.container_padding_side());

        Self {
            element_size: Size::new(layout.element_width(), layout.element_height()),
            grid_size,
            grid_margin: snap(spacing.min_grid_margin().max(layout.margin() * 8.0)),
            cell_padding: snap(spacing.cell_padding()),
            sibling_gap: snap(spacing.sibling_gap()),
            diagonal_offset: snap(spacing.diagonal_offset()),
            column_gap: snap(spacing.column_gap()),
            row_gap: snap(spacing.row_gap()),
            layer_gap: snap(spacing.layer_gap()),
            container_padding: Insets::new(
                snap(spacing.container_padding_top()),
                side,
                snap(spacing.container_padding_bottom()),
                side,
            ),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

fn snap_value(value: f32, unit: u32) -> f32 {
    let unit = unit as f32;
    (value / unit).round() * unit
}

//! Archigrid - Matrix layout for ArchiMate diagrams.
//!
//! Places every element of a diagram in a fixed grid of ArchiMate layers
//! (rows) and aspects (columns), orders elements inside each cell by their
//! relationships, and wraps containers around their children.

pub mod config;

mod error;
mod layout;
mod structure;

pub use archigrid_core::{geometry, identifier, semantic};

pub use error::ArchigridError;
pub use layout::{CellAddress, Column, Layer, Layout, RoutingHint, Row, classify};

use log::{debug, info, trace, warn};

use config::AppConfig;
use layout::Metrics;
use structure::DiagramGraph;

/// Builder for parsing diagrams and computing their layout.
///
/// # Examples
///
/// ```rust
/// use archigrid::{LayoutBuilder, config::AppConfig, semantic::{Diagram, DiagramObject, ElementType}};
///
/// let diagram = Diagram::new()
///     .with_object(DiagramObject::element("customer", ElementType::BusinessActor))
///     .with_object(DiagramObject::element("order", ElementType::BusinessProcess));
///
/// let builder = LayoutBuilder::new(AppConfig::default());
/// let layout = builder.compute(&diagram)
///     .expect("Failed to compute layout");
///
/// assert_eq!(layout.element_count(), 2);
/// ```
#[derive(Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Element sizing and grid spacing settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML document into a semantic diagram.
    ///
    /// # Arguments
    ///
    /// * `source` - Diagram with `[[objects]]` and `[[relationships]]` tables
    ///
    /// # Errors
    ///
    /// Returns [`ArchigridError::Parse`] with the offending span if the
    /// document is not valid TOML or does not describe a diagram.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use archigrid::LayoutBuilder;
    ///
    /// let source = r#"
    /// [[objects]]
    /// id = "crm"
    /// type = "ApplicationComponent"
    /// "#;
    /// let diagram = LayoutBuilder::default().parse(source)
    ///     .expect("Failed to parse diagram");
    ///
    /// assert_eq!(diagram.objects().len(), 1);
    /// ```
    pub fn parse(&self, source: &str) -> Result<semantic::Diagram, ArchigridError> {
        info!("Parsing diagram");

        let diagram: semantic::Diagram = toml::from_str(source)
            .map_err(|err| ArchigridError::new_parse_error(err, source))?;

        debug!(
            objects = diagram.objects().len(),
            relationships = diagram.relationships().len();
            "Diagram parsed successfully"
        );
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Compute the layout of a semantic diagram.
    ///
    /// # Errors
    ///
    /// Returns [`ArchigridError::DuplicateObject`] if two objects share an
    /// identifier. The layout passes themselves never fail.
    pub fn compute(&self, diagram: &semantic::Diagram) -> Result<Layout, ArchigridError> {
        let metrics = Metrics::from_config(&self.config);

        info!("Building diagram graph");
        let graph = DiagramGraph::from_diagram(diagram, metrics.element_size)?;

        let layout = layout::compute(&graph, metrics);
        if layout.is_empty() {
            warn!("No elements to layout");
        } else {
            info!(containers = layout.len() - layout.element_count(); "Positioned {} elements", layout.element_count());
        }

        Ok(layout)
    }
}

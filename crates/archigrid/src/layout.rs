//! ArchiMate matrix layout.
//!
//! Elements are assigned to a fixed grid of ten rows (layers, split into
//! external and internal sub-rows) and three columns (passive structure,
//! behavior, active structure), then positioned by a fixed sequence of
//! passes sharing one [`LayoutSession`](session::LayoutSession).
//!
//! # Pipeline
//!
//! ```text
//! DiagramGraph
//!     ↓ classify    element type → cell
//!     ↓ sort        relationship targets above sources
//!     ↓ group       siblings side by side
//!     ↓ dimensions  column widths, row heights
//!     ↓ place       centered stacks per cell
//!     ↓ align       follow partners across columns
//!     ↓ staircase   diagonal offsets for same-type groups
//!     ↓ align       again, against the staircase
//!     ↓ refine      width, centering and height stretches
//!     ↓ snap        grid unit
//!     ↓ wrap        container bounding boxes
//! Layout
//! ```

mod align;
mod classify;
mod dimensions;
mod group;
mod matrix;
mod metrics;
mod place;
mod refine;
mod session;
mod snap;
mod sort;
mod staircase;
mod wrap;

use indexmap::IndexMap;
use log::debug;

use archigrid_core::{
    geometry::Rect,
    identifier::Id,
    semantic::RelationshipKind,
};

use crate::structure::DiagramGraph;

pub use classify::classify;
pub use matrix::{CellAddress, Column, Layer, Row};
pub use metrics::Metrics;

use session::LayoutSession;

/// A relationship between two laid-out objects, for connection routers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingHint {
    source: Id,
    target: Id,
    kind: RelationshipKind,
}

impl RoutingHint {
    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    /// Returns how strongly a router should favor this connection.
    pub fn priority(&self) -> u8 {
        self.kind.routing_priority()
    }
}

/// The result of a layout run.
///
/// Holds one rectangle per classified element, in placement order,
/// followed by one per container that has at least one resolved child.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    rects: IndexMap<Id, Rect>,
    element_count: usize,
    hints: Vec<RoutingHint>,
}

impl Layout {
    /// Returns the rectangle of an element or container.
    pub fn get(&self, id: Id) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Id, Rect)> + '_ {
        self.rects.iter().map(|(&id, &rect)| (id, rect))
    }

    /// Returns the number of positioned objects, containers included.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Returns the number of positioned leaf elements.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn routing_hints(&self) -> &[RoutingHint] {
        &self.hints
    }
}

/// Runs every layout pass over `graph`.
pub(crate) fn compute(graph: &DiagramGraph, metrics: Metrics) -> Layout {
    let mut session = LayoutSession::new(graph, metrics);

    classify::classify_elements(&mut session);
    sort::sort_cells(&mut session);
    group::group_siblings(&mut session);
    dimensions::compute_dimensions(&mut session);
    place::place_elements(&mut session);
    align::align_rows(&mut session);
    staircase::resolve_staircases(&mut session);
    align::align_rows(&mut session);
    refine::stretch_to_sibling_groups(&mut session);
    refine::center_over_connected(&mut session);
    refine::stretch_height(&mut session);
    snap::snap_results(&mut session);

    let element_count = session.results.len();
    let mut rects: IndexMap<Id, Rect> = session
        .results
        .iter()
        .map(|(&idx, &rect)| (graph.element(idx).id(), rect))
        .collect();
    wrap::wrap_containers(graph, &mut rects, metrics.container_padding);

    let hints: Vec<RoutingHint> = graph
        .relationships()
        .iter()
        .filter(|rel| rects.contains_key(&rel.source()) && rects.contains_key(&rel.target()))
        .map(|rel| RoutingHint {
            source: rel.source(),
            target: rel.target(),
            kind: rel.kind(),
        })
        .collect();

    debug!(
        elements = element_count,
        objects = rects.len(),
        hints = hints.len();
        "Layout computed"
    );

    Layout {
        rects,
        element_count,
        hints,
    }
}

#[cfg(test)]
mod tests {
    use archigrid_core::semantic::{Diagram, DiagramObject, ElementType, Relationship};

    use super::*;
    use session::test_support::{element, graph_of};

    fn layout_of(diagram: &Diagram) -> Layout {
        compute(&graph_of(diagram), Metrics::default())
    }

    #[test]
    fn test_empty_diagram() {
        let layout = layout_of(&Diagram::new());
        assert!(layout.is_empty());
        assert_eq!(layout.element_count(), 0);
        assert!(layout.routing_hints().is_empty());
    }

    #[test]
    fn test_elements_then_containers() {
        let diagram = Diagram::new().with_object(
            DiagramObject::container("platform")
                .with_child(element("node", ElementType::Node))
                .with_child(element("db", ElementType::SystemSoftware)),
        );
        let layout = layout_of(&diagram);

        assert_eq!(layout.len(), 3);
        assert_eq!(layout.element_count(), 2);
        let ids: Vec<String> = layout.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, ["node", "db", "platform"]);
    }

    #[test]
    fn test_results_are_snapped() {
        let diagram = Diagram::new()
            .with_object(element("goal", ElementType::Goal))
            .with_object(element("service", ElementType::BusinessService).with_size(130.0, 50.0));
        let layout = layout_of(&diagram);

        for (_, rect) in layout.iter() {
            assert_eq!(rect, rect.snap_to_grid(12));
        }
    }

    #[test]
    fn test_routing_hints_cover_laid_out_objects_only() {
        let diagram = Diagram::new()
            .with_object(
                DiagramObject::container("suite")
                    .with_child(element("crm", ElementType::ApplicationComponent)),
            )
            .with_object(element("service", ElementType::ApplicationService))
            .with_relationship(Relationship::new(
                "crm",
                "service",
                RelationshipKind::Realization,
            ))
            .with_relationship(Relationship::new(
                "suite",
                "service",
                RelationshipKind::Association,
            ));
        let layout = layout_of(&diagram);

        let hints = layout.routing_hints();
        assert_eq!(hints.len(), 2);
        assert_eq!(hints[0].priority(), 10);
        assert_eq!(hints[1].source(), "suite");
        assert_eq!(hints[1].priority(), 1);
    }
}

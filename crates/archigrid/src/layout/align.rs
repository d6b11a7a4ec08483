//! Vertical alignment with relationship partners across columns.
//!
//! Each row has an anchor column, the one holding the most elements. Cells
//! with fewer elements would otherwise be centered in the row; instead their
//! elements move to the average vertical center of their partners in columns
//! closer to the anchor. Columns are visited outward from the anchor so a far
//! column can follow a nearer one that was just aligned.

use log::{debug, trace};
use petgraph::graph::NodeIndex;

use archigrid_core::geometry::Rect;

use super::{
    matrix::{COLUMN_COUNT, CellAddress, Column, Row},
    session::LayoutSession,
};

/// Aligns every row. Elements fixed by the staircase pass are left alone.
pub fn align_rows(session: &mut LayoutSession) {
    let mut moved = 0;

    for row in Row::ALL {
        let (anchor, max_count) = session.anchor_column(row);

        for distance in 1..COLUMN_COUNT {
            for direction in [-1, 1] {
                let Some(column) = anchor.offset(direction * distance as isize) else {
                    continue;
                };

                let updates = aligned_positions(session, row, column, anchor, distance, max_count);
                moved += updates.len();
                session.results.extend(updates);
            }
        }
    }

    debug!(moved = moved; "Cross-column alignment done");
}

fn aligned_positions(
    session: &LayoutSession,
    row: Row,
    column: Column,
    anchor: Column,
    distance: usize,
    max_count: usize,
) -> Vec<(NodeIndex, Rect)> {
    let members = &session.cell(CellAddress::new(row, column)).members;
    if members.is_empty() || members.len() >= max_count {
        return Vec::new();
    }

    let mut updates = Vec::new();
    for &member in members {
        if session.staircase.contains(&member) {
            continue;
        }
        let Some(rect) = session.rect(member) else {
            continue;
        };

        let centers: Vec<f32> = session
            .graph
            .partners(member)
            .into_iter()
            .filter(|partner| {
                session.cell_of.get(partner).is_some_and(|address| {
                    address.row() == row
                        && address.column() != column
                        && address.column().distance(anchor) < distance
                })
            })
            .filter_map(|partner| session.rect(partner))
            .map(Rect::center_y)
            .collect();

        if centers.is_empty() {
            continue;
        }

        let average = centers.iter().sum::<f32>() / centers.len() as f32;
        let y = (average - rect.height() as f32 / 2.0).round() as i32;
        trace!(id:% = session.graph.element(member).id(), y = y; "Aligned to partners");
        updates.push((member, rect.with_y(y)));
    }

    updates
}

#[cfg(test)]
mod tests {
    use archigrid_core::semantic::{Diagram, ElementType, Relationship, RelationshipKind};
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::layout::{
        classify::classify_elements,
        dimensions::compute_dimensions,
        group::group_siblings,
        metrics::Metrics,
        place::place_elements,
        session::test_support::{element, graph_of, node},
        sort::sort_cells,
    };
    use crate::structure::DiagramGraph;

    fn aligned(graph: &DiagramGraph) -> LayoutSession<'_> {
        let mut session = LayoutSession::new(graph, Metrics::default());
        classify_elements(&mut session);
        sort_cells(&mut session);
        group_siblings(&mut session);
        compute_dimensions(&mut session);
        place_elements(&mut session);
        align_rows(&mut session);
        session
    }

    fn center_y(session: &LayoutSession, graph: &DiagramGraph, id: &str) -> f32 {
        session.rect(node(graph, id)).unwrap().center_y()
    }

    #[test]
    fn test_single_partner_alignment() {
        // Two business objects in the passive column, one process in behavior
        let diagram = Diagram::new()
            .with_object(element("order", ElementType::BusinessObject))
            .with_object(element("invoice", ElementType::BusinessObject))
            .with_object(element("billing", ElementType::BusinessProcess))
            .with_relationship(Relationship::new(
                "billing",
                "invoice",
                RelationshipKind::Access,
            ));
        let graph = graph_of(&diagram);
        let session = aligned(&graph);

        assert_approx_eq!(
            f32,
            center_y(&session, &graph, "billing"),
            center_y(&session, &graph, "invoice")
        );
    }

    #[test]
    fn test_outer_columns_follow_average_of_anchor_partners() {
        let diagram = Diagram::new()
            .with_object(element("f1", ElementType::ApplicationFunction))
            .with_object(element("f2", ElementType::ApplicationFunction))
            .with_object(element("f3", ElementType::ApplicationFunction))
            .with_object(element("data", ElementType::DataObject))
            .with_object(element("component", ElementType::ApplicationComponent))
            .with_relationship(Relationship::new("f1", "data", RelationshipKind::Access))
            .with_relationship(Relationship::new("f3", "data", RelationshipKind::Access))
            .with_relationship(Relationship::new(
                "component",
                "f3",
                RelationshipKind::Assignment,
            ));
        let graph = graph_of(&diagram);
        let session = aligned(&graph);

        let expected = (center_y(&session, &graph, "f1") + center_y(&session, &graph, "f3")) / 2.0;
        assert_approx_eq!(f32, center_y(&session, &graph, "data"), expected);
        assert_approx_eq!(
            f32,
            center_y(&session, &graph, "component"),
            center_y(&session, &graph, "f3")
        );
    }

    #[test]
    fn test_far_column_follows_realigned_near_column() {
        // Anchor is passive; behavior aligns first, active follows behavior.
        let diagram = Diagram::new()
            .with_object(element("o1", ElementType::BusinessObject))
            .with_object(element("o2", ElementType::BusinessObject))
            .with_object(element("o3", ElementType::BusinessObject))
            .with_object(element("process", ElementType::BusinessProcess))
            .with_object(element("actor", ElementType::BusinessActor))
            .with_relationship(Relationship::new("process", "o3", RelationshipKind::Access))
            .with_relationship(Relationship::new(
                "actor",
                "process",
                RelationshipKind::Assignment,
            ));
        let graph = graph_of(&diagram);
        let session = aligned(&graph);

        let o3 = center_y(&session, &graph, "o3");
        assert_approx_eq!(f32, center_y(&session, &graph, "process"), o3);
        assert_approx_eq!(f32, center_y(&session, &graph, "actor"), o3);
    }

    #[test]
    fn test_unconnected_elements_keep_their_place() {
        let diagram = Diagram::new()
            .with_object(element("o1", ElementType::BusinessObject))
            .with_object(element("o2", ElementType::BusinessObject))
            .with_object(element("process", ElementType::BusinessProcess));
        let graph = graph_of(&diagram);
        let session = aligned(&graph);

        // Centered in the 146 tall row starting at 84
        assert_eq!(session.rect(node(&graph, "process")).unwrap().y(), 130);
    }

    #[test]
    fn test_staircase_elements_are_skipped() {
        let diagram = Diagram::new()
            .with_object(element("o1", ElementType::BusinessObject))
            .with_object(element("o2", ElementType::BusinessObject))
            .with_object(element("process", ElementType::BusinessProcess))
            .with_relationship(Relationship::new("process", "o1", RelationshipKind::Access));
        let graph = graph_of(&diagram);
        let mut session = LayoutSession::new(&graph, Metrics::default());
        classify_elements(&mut session);
        sort_cells(&mut session);
        group_siblings(&mut session);
        compute_dimensions(&mut session);
        place_elements(&mut session);

        let process = node(&graph, "process");
        let before = session.rect(process);
        session.staircase.insert(process);
        align_rows(&mut session);

        assert_eq!(session.rect(process), before);
    }
}

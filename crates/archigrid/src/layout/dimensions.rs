//! Cell, column and row dimensions.
//!
//! Within a cell, groups stack vertically and members of a group sit side by
//! side. Columns take the widest cell, rows the tallest. Cells holding
//! several groups of the same element type reserve room for the staircase
//! offset applied later.

use std::collections::HashMap;

use log::debug;

use archigrid_core::semantic::ElementType;

use super::{
    matrix::{COLUMN_COUNT, CellAddress, ROW_COUNT, Row},
    session::LayoutSession,
};

/// Computes column widths and origins, then row heights and origins.
pub fn compute_dimensions(session: &mut LayoutSession) {
    let metrics = session.metrics;
    let mut column_width = [0.0f32; COLUMN_COUNT];
    let mut row_height = [0.0f32; ROW_COUNT];

    for address in CellAddress::all() {
        let groups = &session.cell(address).groups;
        if groups.is_empty() {
            continue;
        }

        let mut type_counts: HashMap<ElementType, usize> = HashMap::new();
        for group in groups {
            *type_counts.entry(session.group_type(group)).or_default() += 1;
        }

        let mut cell_width = 0.0f32;
        let mut cell_height = 0.0f32;
        for (i, group) in groups.iter().enumerate() {
            let size = session.group_size(group);
            let same_type = type_counts[&session.group_type(group)];
            let effective_width = size.width() + (same_type - 1) as f32 * metrics.diagonal_offset;

            cell_width = cell_width.max(effective_width);
            cell_height += size.height();
            if i > 0 {
                cell_height += metrics.cell_padding;
            }
        }

        let (row, column) = (address.row().index(), address.column().index());
        column_width[column] = column_width[column].max(cell_width);
        row_height[row] = row_height[row].max(cell_height);
    }

    for width in &mut column_width {
        *width = width.max(metrics.element_size.width());
    }

    let mut column_x = [0.0f32; COLUMN_COUNT];
    column_x[0] = metrics.grid_margin;
    for c in 1..COLUMN_COUNT {
        column_x[c] = column_x[c - 1] + column_width[c - 1] + metrics.column_gap;
    }

    let mut row_y = [0.0f32; ROW_COUNT];
    // Last non-empty row seen so far, walking down from the top.
    let mut above: Option<Row> = None;
    for row in Row::ALL {
        let r = row.index();
        row_y[r] = match above {
            // Empty rows collapse onto the bottom edge of the row above.
            Some(prev) if row_height[r] == 0.0 => row_y[prev.index()] + row_height[prev.index()],
            Some(prev) => {
                let gap = if prev.layer() == row.layer() {
                    metrics.row_gap
                } else {
                    metrics.layer_gap
                };
                row_y[prev.index()] + row_height[prev.index()] + gap
            }
            None => metrics.grid_margin,
        };
        if row_height[r] > 0.0 {
            above = Some(row);
        }
    }

    debug!(
        column_widths:? = column_width,
        total_height = row_y[ROW_COUNT - 1] + row_height[ROW_COUNT - 1];
        "Grid dimensions computed"
    );

    session.column_width = column_width;
    session.column_x = column_x;
    session.row_height = row_height;
    session.row_y = row_y;
}

#[cfg(test)]
mod tests {
    use archigrid_core::semantic::{Diagram, DiagramObject, ElementType};
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::layout::{
        classify::classify_elements,
        group::group_siblings,
        matrix::Column,
        metrics::Metrics,
        session::test_support::{element, graph_of},
        sort::sort_cells,
    };
    use crate::structure::DiagramGraph;

    fn session_for(graph: &DiagramGraph) -> LayoutSession<'_> {
        let mut session = LayoutSession::new(graph, Metrics::default());
        classify_elements(&mut session);
        sort_cells(&mut session);
        group_siblings(&mut session);
        compute_dimensions(&mut session);
        session
    }

    #[test]
    fn test_empty_grid_uses_minimums() {
        let graph = graph_of(&Diagram::new());
        let session = session_for(&graph);

        for c in 0..COLUMN_COUNT {
            assert_approx_eq!(f32, session.column_width[c], 120.0);
        }
        assert_approx_eq!(f32, session.column_x[0], 84.0);
        assert_approx_eq!(f32, session.column_x[1], 84.0 + 120.0 + 96.0);
        assert_approx_eq!(f32, session.column_x[2], 84.0 + 2.0 * (120.0 + 96.0));
        assert!(session.row_y.iter().all(|&y| y == 84.0));
    }

    #[test]
    fn test_stacked_groups_and_staircase_slack() {
        let diagram = Diagram::new()
            .with_object(element("s1", ElementType::ApplicationService))
            .with_object(element("s2", ElementType::ApplicationService))
            .with_object(element("s3", ElementType::ApplicationService));
        let graph = graph_of(&diagram);
        let session = session_for(&graph);

        let behavior = Column::Behavior.index();
        // 120 + 2 * 84 of staircase slack
        assert_approx_eq!(f32, session.column_width[behavior], 288.0);
        // 3 * 55 + 2 * 36
        let row = Row::ApplicationExternal.index();
        assert_approx_eq!(f32, session.row_height[row], 237.0);
    }

    #[test]
    fn test_side_by_side_siblings_widen_the_column() {
        let diagram = Diagram::new().with_object(
            DiagramObject::container("group")
                .with_child(element("a", ElementType::BusinessActor))
                .with_child(element("b", ElementType::BusinessActor)),
        );
        let graph = graph_of(&diagram);
        let session = session_for(&graph);

        let active = Column::Active.index();
        assert_approx_eq!(f32, session.column_width[active], 276.0);
        assert_approx_eq!(f32, session.row_height[Row::BusinessInternal.index()], 55.0);
    }

    #[test]
    fn test_row_gaps_between_and_within_layers() {
        let diagram = Diagram::new()
            .with_object(element("goal", ElementType::Goal))
            .with_object(element("service", ElementType::BusinessService))
            .with_object(element("process", ElementType::BusinessProcess))
            .with_object(element("node", ElementType::Node));
        let graph = graph_of(&diagram);
        let session = session_for(&graph);

        let y = |row: Row| session.row_y[row.index()];
        assert_approx_eq!(f32, y(Row::Motivation), 84.0);
        // Strategy is empty and collapses onto the bottom of Motivation
        assert_approx_eq!(f32, y(Row::Strategy), 84.0 + 55.0);
        // Different layer: layer gap
        assert_approx_eq!(f32, y(Row::BusinessExternal), 84.0 + 55.0 + 84.0);
        // Same layer: row gap
        assert_approx_eq!(f32, y(Row::BusinessInternal), 223.0 + 55.0 + 36.0);
        // Application rows are empty
        assert_approx_eq!(f32, y(Row::ApplicationExternal), 314.0 + 55.0);
        assert_approx_eq!(f32, y(Row::TechnologyInternal), 314.0 + 55.0 + 84.0);
    }
}

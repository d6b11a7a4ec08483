//! Mutable state of one layout run.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use petgraph::graph::NodeIndex;

use archigrid_core::{
    geometry::{Rect, Size},
    semantic::ElementType,
};

use super::{
    matrix::{COLUMN_COUNT, CellAddress, Column, ROW_COUNT, Row},
    metrics::Metrics,
};
use crate::structure::DiagramGraph;

/// Elements of one cell placed side by side because they share a container.
#[derive(Debug, Clone, PartialEq)]
pub struct SiblingGroup {
    members: Vec<NodeIndex>,
}

impl SiblingGroup {
    pub fn new(first: NodeIndex) -> Self {
        Self {
            members: vec![first],
        }
    }

    pub fn push(&mut self, member: NodeIndex) {
        self.members.push(member);
    }

    pub fn members(&self) -> &[NodeIndex] {
        &self.members
    }

    /// Returns the first member. Groups are never empty.
    pub fn first(&self) -> NodeIndex {
        self.members[0]
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }
}

/// One cell of the matrix.
#[derive(Debug, Default)]
pub struct GridCell {
    /// Members in placement order (sorted after the sort pass).
    pub members: Vec<NodeIndex>,
    pub groups: Vec<SiblingGroup>,
}

/// All state shared by the layout passes.
///
/// A session borrows the diagram graph, owns everything it computes and is
/// consumed when the final [`Layout`](super::Layout) is produced.
#[derive(Debug)]
pub struct LayoutSession<'g> {
    pub graph: &'g DiagramGraph,
    pub metrics: Metrics,
    pub cells: [[GridCell; COLUMN_COUNT]; ROW_COUNT],
    pub cell_of: HashMap<NodeIndex, CellAddress>,
    pub column_x: [f32; COLUMN_COUNT],
    pub column_width: [f32; COLUMN_COUNT],
    pub row_y: [f32; ROW_COUNT],
    pub row_height: [f32; ROW_COUNT],
    /// Element rectangles in first-placement order.
    pub results: IndexMap<NodeIndex, Rect>,
    /// Elements whose position was fixed by the staircase pass.
    pub staircase: HashSet<NodeIndex>,
}

impl<'g> LayoutSession<'g> {
    pub fn new(graph: &'g DiagramGraph, metrics: Metrics) -> Self {
        Self {
            graph,
            metrics,
            cells: Default::default(),
            cell_of: HashMap::new(),
            column_x: [0.0; COLUMN_COUNT],
            column_width: [0.0; COLUMN_COUNT],
            row_y: [0.0; ROW_COUNT],
            row_height: [0.0; ROW_COUNT],
            results: IndexMap::new(),
            staircase: HashSet::new(),
        }
    }

    pub fn cell(&self, address: CellAddress) -> &GridCell {
        &self.cells[address.row().index()][address.column().index()]
    }

    pub fn cell_mut(&mut self, address: CellAddress) -> &mut GridCell {
        &mut self.cells[address.row().index()][address.column().index()]
    }

    pub fn element_type(&self, idx: NodeIndex) -> ElementType {
        self.graph.element(idx).element_type()
    }

    pub fn size(&self, idx: NodeIndex) -> Size {
        self.graph.element(idx).size()
    }

    pub fn rect(&self, idx: NodeIndex) -> Option<Rect> {
        self.results.get(&idx).copied()
    }

    /// Returns the size of a group laid out side by side.
    pub fn group_size(&self, group: &SiblingGroup) -> Size {
        group.members().iter().fold(Size::default(), |size, &member| {
            size.merge_horizontal(self.size(member), self.metrics.sibling_gap)
        })
    }

    /// Returns the element type that identifies a group: its first member's.
    pub fn group_type(&self, group: &SiblingGroup) -> ElementType {
        self.element_type(group.first())
    }

    /// Returns the column holding the most elements of `row`, with that
    /// count. Ties go to the leftmost column.
    pub fn anchor_column(&self, row: Row) -> (Column, usize) {
        let mut anchor = (Column::Passive, 0);
        for column in Column::ALL {
            let count = self.cell(CellAddress::new(row, column)).members.len();
            if count > anchor.1 {
                anchor = (column, count);
            }
        }
        anchor
    }

    /// Returns the horizontal center of a column.
    pub fn column_center(&self, column: Column) -> f32 {
        self.column_x[column.index()] + self.column_width[column.index()] / 2.0
    }
}

//! Diagonal staircase for same-type groups sharing a cell.
//!
//! Groups of the same element type stacked in one cell would line up in a
//! single column and hide the relationships running between them. This pass
//! shifts them horizontally by a fixed step, top left to bottom right,
//! centered on the column.
//!
//! A singleton connected to two or more members of such a cluster acts as
//! an umbrella for it: it is taken out of the staircase and stretched across
//! its full width instead.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, trace};
use petgraph::graph::NodeIndex;

use archigrid_core::{geometry::Rect, semantic::ElementType};

use super::{
    matrix::{COLUMN_COUNT, CellAddress, Column, Row},
    session::{LayoutSession, SiblingGroup},
};

/// Applies the staircase to every cell, then widens singletons elsewhere in
/// a staircased column that link to two or more staircase elements.
pub fn resolve_staircases(session: &mut LayoutSession) {
    session.staircase.clear();
    let mut staircase_widths = [0.0f32; COLUMN_COUNT];

    for row in Row::ALL {
        // Only the anchor column enforces vertical spacing; the other
        // columns get their Y from alignment.
        let (anchor, _) = session.anchor_column(row);

        for column in Column::ALL {
            let groups = &session.cell(CellAddress::new(row, column)).groups;
            if groups.len() <= 1 {
                continue;
            }

            let clusters = clusters_by_type(session, groups);
            let center_x = session.column_center(column);

            for cluster in clusters.into_values() {
                if cluster.len() <= 1 {
                    continue;
                }
                if let Some(width) = stagger_cluster(session, cluster, center_x, column == anchor) {
                    let widest = &mut staircase_widths[column.index()];
                    *widest = widest.max(width);
                }
            }
        }
    }

    stretch_linked_singletons(session, &staircase_widths);

    debug!(
        staircase_elements = session.staircase.len(),
        widths:? = staircase_widths;
        "Staircase resolved"
    );
}

/// Splits a cell's groups by element type, in first-encounter order.
fn clusters_by_type(
    session: &LayoutSession,
    groups: &[SiblingGroup],
) -> IndexMap<ElementType, Vec<SiblingGroup>> {
    let mut clusters: IndexMap<ElementType, Vec<SiblingGroup>> = IndexMap::new();
    for group in groups {
        clusters
            .entry(session.group_type(group))
            .or_default()
            .push(group.clone());
    }
    clusters
}

/// Staggers one cluster and returns the width of the resulting staircase,
/// or `None` if fewer than two groups take part.
fn stagger_cluster(
    session: &mut LayoutSession,
    mut cluster: Vec<SiblingGroup>,
    center_x: f32,
    enforce_spacing: bool,
) -> Option<f32> {
    cluster.sort_by_key(|group| session.rect(group.first()).map_or(0, Rect::y));

    let graph = session.graph;
    let members: HashSet<NodeIndex> = cluster
        .iter()
        .flat_map(|group| group.members().iter().copied())
        .collect();

    let (spanning, active): (Vec<_>, Vec<_>) = cluster.into_iter().partition(|group| {
        group.is_singleton()
            && graph
                .partners(group.first())
                .into_iter()
                .filter(|partner| members.contains(partner))
                .collect::<HashSet<_>>()
                .len()
                >= 2
    });

    if active.len() <= 1 {
        return None;
    }

    if enforce_spacing {
        enforce_min_spacing(session, &active);
    }

    let metrics = session.metrics;
    let widths: Vec<f32> = active
        .iter()
        .map(|group| session.group_size(group).width())
        .collect();

    let n = active.len();
    let offset = |i: usize| (i as f32 - (n - 1) as f32 / 2.0) * metrics.diagonal_offset;

    let (min_start, max_end) = widths.iter().enumerate().fold(
        (f32::INFINITY, f32::NEG_INFINITY),
        |(lo, hi), (i, width)| {
            (
                lo.min(offset(i) - width / 2.0),
                hi.max(offset(i) + width / 2.0),
            )
        },
    );
    let width = max_end - min_start;
    let left = center_x - width / 2.0;

    for (i, group) in active.iter().enumerate() {
        let mut x = left + (offset(i) - widths[i] / 2.0 - min_start);
        for &member in group.members() {
            if let Some(rect) = session.rect(member) {
                session
                    .results
                    .insert(member, rect.with_x(x.round() as i32));
            }
            x += session.size(member).width() + metrics.sibling_gap;
            session.staircase.insert(member);
        }
    }

    for group in &spanning {
        let member = group.first();
        if let Some(rect) = session.rect(member) {
            trace!(id:% = graph.element(member).id(), width = width; "Spanning element stretched");
            session.results.insert(
                member,
                rect.with_horizontal(left.round() as i32, width.round() as i32),
            );
            session.staircase.insert(member);
        }
    }

    Some(width)
}

/// Pushes each group down until it sits at least one group height plus the
/// cell padding below the previous one.
fn enforce_min_spacing(session: &mut LayoutSession, groups: &[SiblingGroup]) {
    for pair in groups.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        let (Some(prev_rect), Some(cur_rect)) =
            (session.rect(prev.first()), session.rect(cur.first()))
        else {
            continue;
        };

        let min_gap = session.group_size(prev).height() + session.metrics.cell_padding;
        if ((cur_rect.y() - prev_rect.y()) as f32) >= min_gap {
            continue;
        }

        let shift = (prev_rect.y() as f32 + min_gap).round() as i32 - cur_rect.y();
        for &member in cur.members() {
            if let Some(rect) = session.rect(member) {
                session.results.insert(member, rect.with_y(rect.y() + shift));
            }
        }
    }
}

fn stretch_linked_singletons(session: &mut LayoutSession, widths: &[f32; COLUMN_COUNT]) {
    let graph = session.graph;

    for column in Column::ALL {
        let width = widths[column.index()];
        if width <= 0.0 {
            continue;
        }
        let center_x = session.column_center(column);
        let x = (center_x - width / 2.0).round() as i32;

        let mut updates = Vec::new();
        for row in Row::ALL {
            for group in &session.cell(CellAddress::new(row, column)).groups {
                let member = group.first();
                if !group.is_singleton() || session.staircase.contains(&member) {
                    continue;
                }

                let links = graph
                    .partners(member)
                    .iter()
                    .filter(|partner| session.staircase.contains(partner))
                    .count();
                if links < 2 {
                    continue;
                }

                if let Some(rect) = session.rect(member) {
                    updates.push((member, rect.with_horizontal(x, width.round() as i32)));
                }
            }
        }
        session.results.extend(updates);
    }
}

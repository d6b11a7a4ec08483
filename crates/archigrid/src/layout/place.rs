//! First-pass placement of every element.

use log::debug;

use archigrid_core::geometry::Rect;

use super::{matrix::CellAddress, session::LayoutSession};

/// Places each cell's groups as a vertically centered stack and each group
/// as a horizontally centered row.
pub fn place_elements(session: &mut LayoutSession) {
    let metrics = session.metrics;
    let mut placements = Vec::with_capacity(session.cell_of.len());

    for address in CellAddress::all() {
        let groups = &session.cell(address).groups;
        if groups.is_empty() {
            continue;
        }

        let (r, c) = (address.row().index(), address.column().index());
        let sizes: Vec<_> = groups.iter().map(|g| session.group_size(g)).collect();
        let total_height = sizes.iter().map(|s| s.height()).sum::<f32>()
            + (sizes.len() - 1) as f32 * metrics.cell_padding;

        let mut y = session.row_y[r] + (session.row_height[r] - total_height) / 2.0;
        for (group, size) in groups.iter().zip(&sizes) {
            let mut x = session.column_x[c] + (session.column_width[c] - size.width()) / 2.0;
            for &member in group.members() {
                let member_size = session.size(member);
                let member_y = y + (size.height() - member_size.height()) / 2.0;
                placements.push((
                    member,
                    Rect::from_f32(x, member_y, member_size.width(), member_size.height()),
                ));
                x += member_size.width() + metrics.sibling_gap;
            }
            y += size.height() + metrics.cell_padding;
        }
    }

    session.results.extend(placements);
    debug!(placed = session.results.len(); "Elements placed");
}

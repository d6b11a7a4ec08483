//! Grid snapping of the final element rectangles.

use log::debug;

use super::session::LayoutSession;

/// Rounds every element rectangle to the grid unit.
pub fn snap_results(session: &mut LayoutSession) {
    let unit = session.metrics.grid_size;
    for rect in session.results.values_mut() {
        *rect = rect.snap_to_grid(unit);
    }
    debug!(unit = unit; "Results snapped to grid");
}

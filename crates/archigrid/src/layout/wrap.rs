//! Container rectangles derived from their children.

use indexmap::IndexMap;
use log::{debug, trace};

use archigrid_core::{
    geometry::{Insets, Rect},
    identifier::Id,
};

use crate::structure::DiagramGraph;

/// Gives every container the bounding box of its resolved children grown by
/// `padding`.
///
/// Scopes are visited innermost first, so a nested container is already
/// resolved when its parent is wrapped. Containers without any resolved
/// child get no rectangle. Returns the number of wrapped containers.
pub fn wrap_containers(
    graph: &DiagramGraph,
    rects: &mut IndexMap<Id, Rect>,
    padding: Insets,
) -> usize {
    let mut wrapped = 0;

    for scope in graph.scopes() {
        let bounds = scope
            .children()
            .filter_map(|child| rects.get(&child).copied())
            .reduce(Rect::union);

        let Some(bounds) = bounds else {
            trace!(container:% = scope.container(); "Container has no resolved child");
            continue;
        };

        rects.insert(scope.container(), bounds.expand(padding));
        wrapped += 1;
    }

    debug!(wrapped = wrapped; "Containers wrapped");
    wrapped
}

#[cfg(test)]
mod tests {
    use archigrid_core::semantic::{Diagram, DiagramObject, ElementType};

    use super::*;
    use crate::layout::session::test_support::{element, graph_of};

    fn padding() -> Insets {
        Insets::new(36.0, 12.0, 12.0, 12.0)
    }

    #[test]
    fn test_container_wraps_children_with_padding() {
        let diagram = Diagram::new().with_object(
            DiagramObject::container("group")
                .with_child(element("a", ElementType::Node))
                .with_child(element("b", ElementType::Device)),
        );
        let graph = graph_of(&diagram);
        let mut rects = IndexMap::new();
        rects.insert(Id::new("a"), Rect::new(100, 100, 120, 60));
        rects.insert(Id::new("b"), Rect::new(256, 120, 120, 60));

        assert_eq!(wrap_containers(&graph, &mut rects, padding()), 1);
        assert_eq!(rects[&Id::new("group")], Rect::new(88, 64, 300, 128));
    }

    #[test]
    fn test_nested_containers_wrap_innermost_first() {
        let diagram = Diagram::new().with_object(
            DiagramObject::container("outer").with_child(
                DiagramObject::container("inner").with_child(element("a", ElementType::Node)),
            ),
        );
        let graph = graph_of(&diagram);
        let mut rects = IndexMap::new();
        rects.insert(Id::new("a"), Rect::new(100, 100, 120, 60));

        wrap_containers(&graph, &mut rects, padding());

        let inner = rects[&Id::new("inner")];
        let outer = rects[&Id::new("outer")];
        assert_eq!(inner, Rect::new(88, 64, 144, 108));
        assert!(outer.contains(inner));
        assert_eq!(outer, Rect::new(76, 28, 168, 156));
    }

    #[test]
    fn test_container_without_resolved_children_is_skipped() {
        let diagram = Diagram::new().with_object(
            DiagramObject::container("group").with_child(element("a", ElementType::Node)),
        );
        let graph = graph_of(&diagram);
        let mut rects = IndexMap::new();

        assert_eq!(wrap_containers(&graph, &mut rects, padding()), 0);
        assert!(rects.is_empty());
    }
}

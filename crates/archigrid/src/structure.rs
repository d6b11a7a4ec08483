//! Graph view of a diagram tree.
//!
//! [`DiagramGraph`] flattens a [`Diagram`] into what the layout passes need:
//! - leaf elements as nodes of a directed graph, in tree pre-order
//! - relationships between leaf elements as edges
//! - the immediate container of every leaf element
//! - containment scopes for every container, innermost first
//!
//! Containers never become graph nodes. Relationships touching a container
//! are kept for routing hints only.

use std::collections::{HashMap, HashSet};

use log::{debug, trace, warn};
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
};

use archigrid_core::{
    geometry::Size,
    identifier::Id,
    semantic::{Diagram, DiagramObject, ElementType, Relationship, RelationshipKind},
};

use crate::error::ArchigridError;

/// A leaf element taking part in the grid layout.
#[derive(Debug, Clone, Copy)]
pub struct ElementNode {
    id: Id,
    element_type: ElementType,
    size: Size,
}

impl ElementNode {
    pub fn id(&self) -> Id {
        self.id
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Returns the intrinsic size, with defaults already substituted.
    pub fn size(&self) -> Size {
        self.size
    }
}

/// A container and its direct children.
#[derive(Debug)]
pub struct ContainmentScope {
    container: Id,
    children: Vec<Id>,
}

impl ContainmentScope {
    pub fn container(&self) -> Id {
        self.container
    }

    /// Returns the direct children in document order.
    pub fn children(&self) -> impl Iterator<Item = Id> {
        self.children.iter().copied()
    }
}

/// The diagram flattened into a relationship graph plus containment data.
#[derive(Debug)]
pub struct DiagramGraph {
    graph: DiGraph<ElementNode, RelationshipKind>,
    parents: HashMap<NodeIndex, Id>,
    scopes: Vec<ContainmentScope>,
    relationships: Vec<Relationship>,
}

impl DiagramGraph {
    /// Builds the graph for `diagram`.
    ///
    /// Objects without a positive size use `element_size`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchigridError::DuplicateObject`] if two objects anywhere in
    /// the tree share an identifier.
    pub fn from_diagram(diagram: &Diagram, element_size: Size) -> Result<Self, ArchigridError> {
        let mut builder = GraphBuilder {
            graph: DiGraph::new(),
            node_ids: HashMap::new(),
            known: HashSet::new(),
            parents: HashMap::new(),
            scopes: Vec::new(),
            element_size,
        };

        for object in diagram.objects() {
            builder.visit(object, None)?;
        }

        let mut relationships = Vec::with_capacity(diagram.relationships().len());
        for relationship in diagram.relationships() {
            let (source, target) = (relationship.source(), relationship.target());
            if !builder.known.contains(&source) || !builder.known.contains(&target) {
                warn!(
                    source:% = source,
                    target:% = target;
                    "Skipping relationship to an unknown object"
                );
                continue;
            }

            match (builder.node_ids.get(&source), builder.node_ids.get(&target)) {
                (Some(&source_idx), Some(&target_idx)) => {
                    builder
                        .graph
                        .add_edge(source_idx, target_idx, relationship.kind());
                }
                _ => {
                    trace!(
                        source:% = source,
                        target:% = target;
                        "Relationship touches a non-element object, kept for routing only"
                    );
                }
            }
            relationships.push(relationship.clone());
        }

        debug!(
            elements = builder.graph.node_count(),
            edges = builder.graph.edge_count(),
            containers = builder.scopes.len();
            "Diagram graph built"
        );

        Ok(Self {
            graph: builder.graph,
            parents: builder.parents,
            scopes: builder.scopes,
            relationships,
        })
    }

    /// Returns the number of leaf elements.
    pub fn element_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns all element indices in tree pre-order.
    pub fn element_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    pub fn element(&self, idx: NodeIndex) -> &ElementNode {
        &self.graph[idx]
    }

    /// Returns the immediate container of an element, if any.
    pub fn parent(&self, idx: NodeIndex) -> Option<Id> {
        self.parents.get(&idx).copied()
    }

    /// Returns the targets of the element's outgoing relationships in the
    /// order the relationships were declared. Parallel relationships repeat
    /// the target.
    pub fn outgoing(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut targets: Vec<_> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        // petgraph walks adjacency lists newest first
        targets.reverse();
        targets
    }

    /// Returns the sources of the element's incoming relationships in
    /// declaration order.
    pub fn incoming(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut sources: Vec<_> = self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .collect();
        sources.reverse();
        sources
    }

    /// Returns every relationship partner of the element, outgoing first then
    /// incoming, one entry per relationship. Self-loops are left out.
    pub fn partners(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.outgoing(idx)
            .into_iter()
            .chain(self.incoming(idx))
            .filter(|&partner| partner != idx)
            .collect()
    }

    /// Returns the containment scopes, innermost first.
    pub fn scopes(&self) -> &[ContainmentScope] {
        &self.scopes
    }

    /// Returns the relationships whose ends both name diagram objects.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }
}

// =============================================================================
// Tree walk
// =============================================================================

struct GraphBuilder {
    graph: DiGraph<ElementNode, RelationshipKind>,
    node_ids: HashMap<Id, NodeIndex>,
    known: HashSet<Id>,
    parents: HashMap<NodeIndex, Id>,
    scopes: Vec<ContainmentScope>,
    element_size: Size,
}

impl GraphBuilder {
    fn visit(&mut self, object: &DiagramObject, parent: Option<Id>) -> Result<(), ArchigridError> {
        let id = object.id();
        if !self.known.insert(id) {
            return Err(ArchigridError::DuplicateObject(id));
        }

        if object.is_container() {
            for child in object.children() {
                self.visit(child, Some(id))?;
            }
            // Pushed after the children so nested scopes come first.
            self.scopes.push(ContainmentScope {
                container: id,
                children: object.children().iter().map(DiagramObject::id).collect(),
            });
            return Ok(());
        }

        let Some(element_type) = object.element_type() else {
            trace!(id:% = id; "Ignoring untyped leaf object");
            return Ok(());
        };

        let idx = self.graph.add_node(ElementNode {
            id,
            element_type,
            size: object.size_or(self.element_size),
        });
        self.node_ids.insert(id, idx);
        if let Some(parent) = parent {
            self.parents.insert(idx, parent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_size() -> Size {
        Size::new(120.0, 55.0)
    }

    fn ids(graph: &DiagramGraph, indices: Vec<NodeIndex>) -> Vec<String> {
        indices
            .into_iter()
            .map(|idx| graph.element(idx).id().to_string())
            .collect()
    }

    #[test]
    fn test_leaves_become_elements_in_pre_order() {
        let diagram = Diagram::new()
            .with_object(DiagramObject::element("a", ElementType::BusinessActor))
            .with_object(
                DiagramObject::container("group")
                    .with_child(DiagramObject::element("b", ElementType::BusinessRole))
                    .with_child(DiagramObject::container("note")),
            )
            .with_object(DiagramObject::element("c", ElementType::Goal));

        let graph = DiagramGraph::from_diagram(&diagram, default_size()).unwrap();

        let order = ids(&graph, graph.element_indices().collect());
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(graph.element_count(), 3);
    }

    #[test]
    fn test_parents_and_scopes() {
        let diagram = Diagram::new().with_object(
            DiagramObject::container("outer")
                .with_child(
                    DiagramObject::container("inner")
                        .with_child(DiagramObject::element("x", ElementType::Node)),
                )
                .with_child(DiagramObject::element("y", ElementType::Device)),
        );

        let graph = DiagramGraph::from_diagram(&diagram, default_size()).unwrap();
        let x = graph.element_indices().next().unwrap();
        assert_eq!(graph.parent(x), Some(Id::new("inner")));

        let scopes: Vec<_> = graph.scopes().iter().map(|s| s.container()).collect();
        assert_eq!(scopes, vec![Id::new("inner"), Id::new("outer")]);

        let outer_children: Vec<_> = graph.scopes()[1].children().collect();
        assert_eq!(outer_children, vec![Id::new("inner"), Id::new("y")]);
    }

    #[test]
    fn test_typed_object_with_children_is_not_an_element() {
        let diagram = Diagram::new().with_object(
            DiagramObject::element("server", ElementType::Node)
                .with_child(DiagramObject::element("os", ElementType::SystemSoftware)),
        );

        let graph = DiagramGraph::from_diagram(&diagram, default_size()).unwrap();
        assert_eq!(graph.element_count(), 1);
        assert_eq!(graph.scopes()[0].container(), "server");
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let diagram = Diagram::new()
            .with_object(DiagramObject::element("dup", ElementType::Goal))
            .with_object(
                DiagramObject::container("group")
                    .with_child(DiagramObject::element("dup", ElementType::Value)),
            );

        let err = DiagramGraph::from_diagram(&diagram, default_size()).unwrap_err();
        assert!(matches!(err, ArchigridError::DuplicateObject(id) if id == "dup"));
    }

    #[test]
    fn test_relationship_filtering() {
        let diagram = Diagram::new()
            .with_object(
                DiagramObject::container("group")
                    .with_child(DiagramObject::element("a", ElementType::BusinessProcess)),
            )
            .with_object(DiagramObject::element("b", ElementType::BusinessFunction))
            .with_relationship(Relationship::new("a", "b", RelationshipKind::Composition))
            .with_relationship(Relationship::new("b", "group", RelationshipKind::Serving))
            .with_relationship(Relationship::new("a", "ghost", RelationshipKind::Flow));

        let graph = DiagramGraph::from_diagram(&diagram, default_size()).unwrap();

        assert_eq!(graph.relationships().len(), 2);
        let a = graph.element_indices().next().unwrap();
        assert_eq!(ids(&graph, graph.outgoing(a)), vec!["b"]);
    }

    #[test]
    fn test_neighbors_follow_declaration_order() {
        let diagram = Diagram::new()
            .with_object(DiagramObject::element("hub", ElementType::ApplicationComponent))
            .with_object(DiagramObject::element("one", ElementType::ApplicationService))
            .with_object(DiagramObject::element("two", ElementType::ApplicationService))
            .with_object(DiagramObject::element("three", ElementType::ApplicationService))
            .with_relationship(Relationship::new("hub", "one", RelationshipKind::Realization))
            .with_relationship(Relationship::new("hub", "two", RelationshipKind::Realization))
            .with_relationship(Relationship::new("three", "hub", RelationshipKind::Serving))
            .with_relationship(Relationship::new("hub", "hub", RelationshipKind::Flow));

        let graph = DiagramGraph::from_diagram(&diagram, default_size()).unwrap();
        let hub = graph.element_indices().next().unwrap();

        assert_eq!(ids(&graph, graph.outgoing(hub)), vec!["one", "two", "hub"]);
        assert_eq!(ids(&graph, graph.incoming(hub)), vec!["three", "hub"]);
        assert_eq!(ids(&graph, graph.partners(hub)), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_sizes_fall_back_to_default() {
        let diagram = Diagram::new()
            .with_object(DiagramObject::element("sized", ElementType::Goal).with_size(200.0, 80.0))
            .with_object(DiagramObject::element("plain", ElementType::Goal));

        let graph = DiagramGraph::from_diagram(&diagram, default_size()).unwrap();
        let sizes: Vec<_> = graph
            .element_indices()
            .map(|idx| graph.element(idx).size())
            .collect();
        assert_eq!(sizes, vec![Size::new(200.0, 80.0), default_size()]);
    }
}

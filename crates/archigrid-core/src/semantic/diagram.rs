//! The diagram tree handed to the layout engine.

use serde::{Deserialize, Serialize};

use crate::{
    geometry::Size,
    identifier::Id,
    semantic::{ElementType, Relationship},
};

/// A node of the diagram tree.
///
/// An object with children is a container. A childless object with an
/// element type is a leaf element. A childless object without a type (an
/// empty group or a note) takes no part in layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramObject {
    id: Id,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    element_type: Option<ElementType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<DiagramObject>,
}

impl DiagramObject {
    /// Creates a leaf element of the given type.
    pub fn element(id: impl Into<Id>, element_type: ElementType) -> Self {
        Self {
            id: id.into(),
            element_type: Some(element_type),
            width: None,
            height: None,
            children: Vec::new(),
        }
    }

    /// Creates an untyped object, typically used as a container.
    pub fn container(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            element_type: None,
            width: None,
            height: None,
            children: Vec::new(),
        }
    }

    /// Sets the intrinsic size of the object.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Appends a child, turning this object into a container.
    pub fn with_child(mut self, child: DiagramObject) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn element_type(&self) -> Option<ElementType> {
        self.element_type
    }

    pub fn children(&self) -> &[DiagramObject] {
        &self.children
    }

    /// Returns true if the object has at least one child.
    pub fn is_container(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the intrinsic size, substituting `fallback` per dimension when
    /// a value is missing or not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use archigrid_core::{geometry::Size, semantic::{DiagramObject, ElementType}};
    /// let fallback = Size::new(120.0, 55.0);
    /// let sized = DiagramObject::element("a", ElementType::Goal).with_size(200.0, -1.0);
    ///
    /// assert_eq!(sized.size_or(fallback), Size::new(200.0, 55.0));
    /// ```
    pub fn size_or(&self, fallback: Size) -> Size {
        let pick = |value: Option<f32>, default: f32| match value {
            Some(v) if v > 0.0 => v,
            _ => default,
        };
        Size::new(
            pick(self.width, fallback.width()),
            pick(self.height, fallback.height()),
        )
    }
}

/// A complete diagram: the object tree and the relationships between objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    #[serde(default)]
    objects: Vec<DiagramObject>,
    #[serde(default)]
    relationships: Vec<Relationship>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level object.
    pub fn with_object(mut self, object: DiagramObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Appends a relationship.
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Returns the top-level objects.
    pub fn objects(&self) -> &[DiagramObject] {
        &self.objects
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }
}

//! TOML rendering of a computed layout.

use serde::Serialize;

use archigrid::{ArchigridError, Layout, identifier::Id, semantic::RelationshipKind};

#[derive(Debug, Serialize)]
struct LayoutDocument {
    objects: Vec<ObjectRecord>,
    connections: Vec<ConnectionRecord>,
}

#[derive(Debug, Serialize)]
struct ObjectRecord {
    id: Id,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Serialize)]
struct ConnectionRecord {
    source: Id,
    target: Id,
    kind: RelationshipKind,
    priority: u8,
}

/// Renders `layout` as a TOML document with one `[[objects]]` table per
/// rectangle and one `[[connections]]` table per routing hint.
pub fn render_layout(layout: &Layout) -> Result<String, ArchigridError> {
    let document = LayoutDocument {
        objects: layout
            .iter()
            .map(|(id, rect)| ObjectRecord {
                id,
                x: rect.x(),
                y: rect.y(),
                width: rect.width(),
                height: rect.height(),
            })
            .collect(),
        connections: layout
            .routing_hints()
            .iter()
            .map(|hint| ConnectionRecord {
                source: hint.source(),
                target: hint.target(),
                kind: hint.kind(),
                priority: hint.priority(),
            })
            .collect(),
    };

    Ok(toml::to_string(&document)?)
}

//! Example: Computing a layout from the semantic model
//!
//! This example demonstrates how to build a diagram programmatically with
//! the semantic model types, without parsing a TOML document.

use archigrid::{
    LayoutBuilder,
    config::AppConfig,
    semantic::{Diagram, DiagramObject, ElementType, Relationship, RelationshipKind},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building diagram from semantic model...\n");

    // A small order-handling landscape across three layers
    let diagram = Diagram::new()
        .with_object(DiagramObject::element("customer", ElementType::BusinessActor))
        .with_object(DiagramObject::element("order_handling", ElementType::BusinessProcess))
        .with_object(DiagramObject::element("order", ElementType::BusinessObject))
        .with_object(
            DiagramObject::container("shop")
                .with_child(DiagramObject::element("web_shop", ElementType::ApplicationComponent))
                .with_child(DiagramObject::element("payment", ElementType::ApplicationComponent)),
        )
        .with_object(DiagramObject::element("ordering", ElementType::ApplicationService))
        .with_object(DiagramObject::element("server", ElementType::Node))
        .with_relationship(Relationship::new(
            "customer",
            "order_handling",
            RelationshipKind::Assignment,
        ))
        .with_relationship(Relationship::new(
            "order_handling",
            "order",
            RelationshipKind::Access,
        ))
        .with_relationship(Relationship::new(
            "ordering",
            "order_handling",
            RelationshipKind::Serving,
        ))
        .with_relationship(Relationship::new(
            "web_shop",
            "ordering",
            RelationshipKind::Realization,
        ))
        .with_relationship(Relationship::new(
            "server",
            "web_shop",
            RelationshipKind::Realization,
        ));

    let builder = LayoutBuilder::new(AppConfig::default());
    let layout = builder.compute(&diagram)?;

    println!(
        "Positioned {} elements and {} containers:",
        layout.element_count(),
        layout.len() - layout.element_count()
    );
    for (id, rect) in layout.iter() {
        println!(
            "  {id:<16} x={:>4} y={:>4} w={:>4} h={:>4}",
            rect.x(),
            rect.y(),
            rect.width(),
            rect.height()
        );
    }

    println!("\nConnections by routing priority:");
    let mut hints = layout.routing_hints().to_vec();
    hints.sort_by_key(|hint| std::cmp::Reverse(hint.priority()));
    for hint in hints {
        println!(
            "  {:>2} {} -> {} ({})",
            hint.priority(),
            hint.source(),
            hint.target(),
            hint.kind()
        );
    }

    Ok(())
}

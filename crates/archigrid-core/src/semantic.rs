//! Semantic diagram model types.
//!
//! This module contains the input side of a layout run: the typed ArchiMate
//! elements, the relationships between them and the diagram tree that nests
//! elements inside containers.
//!
//! # Pipeline Position
//!
//! ```text
//! Host model / TOML document
//!     ↓ deserialize or builder API
//! Semantic Model (these types) - typed objects, containers, relationships
//!     ↓ structure
//! Diagram Graph (elements, parent links, container scopes)
//!     ↓ layout
//! Layout (one rectangle per object)
//! ```
//!
//! # Organization
//!
//! - [`element`] - [`ElementType`] catalog and its [`Facet`] tags
//! - [`relationship`] - [`Relationship`] and [`RelationshipKind`]
//! - [`diagram`] - [`Diagram`] and [`DiagramObject`] tree

pub mod diagram;
pub mod element;
pub mod relationship;

pub use diagram::*;
pub use element::*;
pub use relationship::*;

//! Archigrid Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Archigrid layout
//! engine and its front ends. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Semantic**: The ArchiMate element catalog and diagram tree ([`semantic`] module)

pub mod geometry;
pub mod identifier;
pub mod semantic;

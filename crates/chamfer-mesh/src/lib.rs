//! Editable mesh model for chamfer.
//!
//! This crate provides:
//! - [`Mesh`] - vertex positions with per-vertex selection flags
//! - [`VertexGroups`] - named weight channels with per-vertex memberships
//! - [`GroupWeight`] - one vertex's weight in one group

mod groups;
mod mesh;

pub use groups::{GroupWeight, VertexGroup, VertexGroups};
pub use mesh::Mesh;

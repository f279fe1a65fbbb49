//! Editing operations over chamfer documents.
//!
//! This crate ties the document crates together behind an explicit
//! [`EditContext`] and provides the editing operations:
//! - [`copy_coordinates`] / [`paste_coordinates`] - coordinate clipboard
//!   across meshes, curves, and armatures with local/global conversion
//! - [`select_by_axis`] - axis-windowed selection predicates
//! - [`set_vertex_weight`] - pin a group weight and renormalize the rest
//! - [`prune_empty_groups`] - drop vertex groups no vertex uses
//!
//! Operations validate their context up front and return an [`EditError`]
//! without touching the document when validation fails. Successful
//! operations return typed outcomes whose `Display` gives a user-facing
//! summary.
//!
//! # Usage
//!
//! ```
//! use chamfer_edit::{copy_coordinates, paste_coordinates, EditContext, EditMode, Object, ObjectData};
//! use chamfer_mesh::Mesh;
//! use glam::Vec3;
//!
//! let mut ctx = EditContext::new();
//! ctx.add_object(Object::new(
//!     "tri",
//!     ObjectData::Mesh(Mesh::from_positions(vec![Vec3::ZERO, Vec3::X, Vec3::Y])),
//! ));
//! ctx.mode = EditMode::EditMesh;
//!
//! let mesh = ctx.objects[0].as_mesh_mut().unwrap();
//! mesh.set_selected(1, true);
//! mesh.set_selected(2, true);
//!
//! let copied = copy_coordinates(&mut ctx).unwrap();
//! assert_eq!(copied.source_count, 2);
//! let pasted = paste_coordinates(&mut ctx).unwrap();
//! assert_eq!(pasted.count, 2);
//! ```

mod axis_select;
mod context;
mod coords;
mod error;
mod weights;

pub use axis_select::{select_by_axis, AxisSelect, AxisSelectOutcome};
pub use context::{Clipboard, EditContext, EditMode, Object, ObjectData};
pub use coords::{
    copy_coordinates, paste_coordinates, selected_element_count, set_frame, CopiedCoordinates,
    PastedCoordinates,
};
pub use error::{EditError, ElementKind};
pub use weights::{prune_empty_groups, set_vertex_weight, PrunedGroups, WeightsApplied};

pub use chamfer_core::{centroid, Axes, Frame, Sign, Transform};

//! Error types for editing operations.
//!
//! Every failure here is a local validation failure: the operation aborts
//! and the document is left unchanged.

use thiserror::Error;

/// The kind of element an operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Vertices,
    ControlPoints,
    Bones,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Vertices => write!(f, "vertices"),
            ElementKind::ControlPoints => write!(f, "control points"),
            ElementKind::Bones => write!(f, "bones"),
        }
    }
}

/// Errors that can occur during editing operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("no active object")]
    NoActiveObject,

    #[error("the current object type or mode is not supported")]
    UnsupportedContext,

    #[error("no {0} selected")]
    NothingSelected(ElementKind),

    #[error("no copied coordinate to paste")]
    ClipboardEmpty,

    #[error("this operation only works in an edit mode")]
    RequiresEditMode,

    #[error("no objects selected")]
    NoObjectsSelected,

    #[error("enable at least one axis")]
    NoAxesEnabled,

    #[error("the active object is not a mesh")]
    ActiveNotMesh,

    #[error("the mesh has no active vertex group")]
    NoActiveGroup,
}

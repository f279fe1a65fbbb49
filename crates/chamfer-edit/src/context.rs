//! The editing context: objects, modes, and scene-scoped tool state.
//!
//! Operations never reach for globals; everything they read or mutate is
//! passed in through [`EditContext`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec3;

use chamfer_core::{Frame, Transform};
use chamfer_curve::Curve;
use chamfer_mesh::Mesh;
use chamfer_rig::{Armature, Pose};

/// The interaction mode the context is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditMode {
    /// Whole objects, no element editing.
    #[default]
    Object,
    /// Editing mesh vertices.
    EditMesh,
    /// Editing curve control points.
    EditCurve,
    /// Editing armature bones.
    EditArmature,
    /// Posing armature bones.
    Pose,
}

impl EditMode {
    /// Returns true for the element-editing modes (mesh, curve, armature).
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            EditMode::EditMesh | EditMode::EditCurve | EditMode::EditArmature
        )
    }
}

/// The element data of an object.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectData {
    Mesh(Mesh),
    Curve(Curve),
    Armature { armature: Armature, pose: Pose },
}

impl ObjectData {
    /// Short name of the variant, for reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ObjectData::Mesh(_) => "mesh",
            ObjectData::Curve(_) => "curve",
            ObjectData::Armature { .. } => "armature",
        }
    }
}

/// An object in the scene: element data plus placement and selection.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Object {
    /// Object name.
    pub name: String,
    /// Object-to-world placement.
    pub transform: Transform,
    /// Object-level selection flag.
    pub selected: bool,
    /// Element data.
    pub data: ObjectData,
}

impl Object {
    /// Creates a deselected object with an identity transform.
    pub fn new(name: impl Into<String>, data: ObjectData) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            selected: false,
            data,
        }
    }

    /// Returns the mesh data, if this is a mesh object.
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    /// Returns the mesh data mutably, if this is a mesh object.
    pub fn as_mesh_mut(&mut self) -> Option<&mut Mesh> {
        match &mut self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}

/// The coordinate clipboard: one vector plus the frame it was captured in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Clipboard {
    /// Stored coordinate (world space when `frame` is global).
    pub position: Vec3,
    /// Frame the coordinate was captured in.
    pub frame: Frame,
}

/// Scene state the editing operations run against.
///
/// Holds the objects, the active object, the interaction mode, and the
/// scene-scoped tool state (coordinate frame, clipboard). Lives for the
/// duration of an editing session.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditContext {
    /// Objects in the scene.
    pub objects: Vec<Object>,
    /// Index of the active object, if any.
    pub active: Option<usize>,
    /// Current interaction mode.
    pub mode: EditMode,
    /// Frame used when capturing coordinates.
    pub frame: Frame,
    /// Copied coordinate, if any.
    pub clipboard: Option<Clipboard>,
}

impl EditContext {
    /// Creates an empty context in object mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object and makes it active. Returns its index.
    pub fn add_object(&mut self, object: Object) -> usize {
        let index = self.objects.len();
        self.objects.push(object);
        self.active = Some(index);
        index
    }

    /// Returns the active object, if any.
    pub fn active_object(&self) -> Option<&Object> {
        self.objects.get(self.active?)
    }

    /// Returns the active object mutably, if any.
    pub fn active_object_mut(&mut self) -> Option<&mut Object> {
        let index = self.active?;
        self.objects.get_mut(index)
    }

    /// Returns the indices of selected objects, in scene order.
    pub fn selected_objects(&self) -> Vec<usize> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(i, obj)| obj.selected.then_some(i))
            .collect()
    }

    /// Returns the indices of objects participating in the current mode:
    /// every selected object plus the active one, in scene order.
    ///
    /// Type mismatches are left in so operations can report what they
    /// skipped.
    pub fn objects_in_mode(&self) -> Vec<usize> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(i, obj)| (obj.selected || self.active == Some(i)).then_some(i))
            .collect()
    }
}

//! Coordinate copy and paste across element types.
//!
//! Copy reads one selected element's coordinate (or the centroid of a
//! multi-selection) from the active object and stores it in the scene
//! clipboard together with the frame it was captured in. Paste broadcasts
//! the stored coordinate to every selected element of the active object,
//! undoing the world transform when the clipboard is in the global frame.

use glam::Vec3;

use chamfer_core::{centroid, Frame};
use chamfer_curve::Spline;

use crate::context::{Clipboard, EditContext, EditMode, ObjectData};
use crate::error::{EditError, ElementKind};

/// Result of a copy: what was stored, and from how many elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopiedCoordinates {
    /// The stored coordinate (world space when `frame` is global).
    pub position: Vec3,
    /// Frame the coordinate was captured in.
    pub frame: Frame,
    /// Number of selected elements that contributed.
    pub source_count: usize,
}

impl std::fmt::Display for CopiedCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = self.position;
        write!(
            f,
            "copied coordinates ({:.2}, {:.2}, {:.2}) ({})",
            p.x, p.y, p.z, self.frame
        )
    }
}

/// Result of a paste: what was written, where, and to how many elements.
#[derive(Debug, Clone, PartialEq)]
pub struct PastedCoordinates {
    /// The clipboard coordinate that was pasted.
    pub position: Vec3,
    /// Frame the clipboard was captured in.
    pub frame: Frame,
    /// Number of elements written.
    pub count: usize,
    /// Kind of element written.
    pub kind: ElementKind,
}

impl std::fmt::Display for PastedCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = self.position;
        write!(
            f,
            "pasted ({:.2}, {:.2}, {:.2}) to {} {} ({})",
            p.x, p.y, p.z, self.count, self.kind, self.frame
        )
    }
}

/// Sets the frame used by subsequent copies.
pub fn set_frame(ctx: &mut EditContext, frame: Frame) {
    ctx.frame = frame;
}

/// Returns how many elements a copy or paste would act on right now.
///
/// Zero when there is no active object or the type/mode combination is
/// unsupported.
pub fn selected_element_count(ctx: &EditContext) -> usize {
    let Some(obj) = ctx.active_object() else {
        return 0;
    };
    match (&obj.data, ctx.mode) {
        (ObjectData::Mesh(mesh), EditMode::EditMesh) => mesh.selected_count(),
        (ObjectData::Curve(curve), EditMode::EditCurve) => curve.selected_count(),
        (ObjectData::Armature { armature, .. }, EditMode::EditArmature) => {
            armature.selected_count()
        }
        (ObjectData::Armature { pose, .. }, EditMode::Pose) => pose.selected_count(),
        _ => 0,
    }
}

/// Copies the selection's coordinate into the scene clipboard.
///
/// Meshes and curves use the single selected element's coordinate, or the
/// centroid of a multi-selection. Armatures use the last selected bone's
/// head: the edit-bone head in edit mode, the posed head in pose mode.
/// In the global frame the coordinate is transformed by the object's world
/// transform before storing.
pub fn copy_coordinates(ctx: &mut EditContext) -> Result<CopiedCoordinates, EditError> {
    let frame = ctx.frame;
    let obj = ctx.active_object().ok_or(EditError::NoActiveObject)?;

    let (coord, source_count) = match (&obj.data, ctx.mode) {
        (ObjectData::Mesh(mesh), EditMode::EditMesh) => {
            let positions: Vec<Vec3> = mesh.selected_positions().collect();
            let coord = centroid(&positions)
                .ok_or(EditError::NothingSelected(ElementKind::Vertices))?;
            (coord, positions.len())
        }
        (ObjectData::Curve(curve), EditMode::EditCurve) => {
            let positions = curve.selected_positions();
            let coord = centroid(&positions)
                .ok_or(EditError::NothingSelected(ElementKind::ControlPoints))?;
            (coord, positions.len())
        }
        (ObjectData::Armature { armature, .. }, EditMode::EditArmature) => {
            let bone = armature
                .last_selected()
                .ok_or(EditError::NothingSelected(ElementKind::Bones))?;
            (bone.head, armature.selected_count())
        }
        (ObjectData::Armature { pose, .. }, EditMode::Pose) => {
            let bone = pose
                .last_selected()
                .ok_or(EditError::NothingSelected(ElementKind::Bones))?;
            (bone.head, pose.selected_count())
        }
        _ => return Err(EditError::UnsupportedContext),
    };

    let position = match frame {
        Frame::Local => coord,
        Frame::Global => obj.transform.point_to_world(coord),
    };
    ctx.clipboard = Some(Clipboard { position, frame });

    Ok(CopiedCoordinates {
        position,
        frame,
        source_count,
    })
}

/// Pastes the clipboard coordinate onto every selected element of the
/// active object.
///
/// The coordinate is broadcast identically; the written field depends on
/// the element type: vertex position, control-point position, edit-bone
/// head, or pose-bone local offset. A global-frame clipboard is taken
/// through the inverse of the object's world transform first.
pub fn paste_coordinates(ctx: &mut EditContext) -> Result<PastedCoordinates, EditError> {
    let clip = ctx.clipboard.ok_or(EditError::ClipboardEmpty)?;
    let mode = ctx.mode;
    let obj = ctx.active_object_mut().ok_or(EditError::NoActiveObject)?;

    let target = match clip.frame {
        Frame::Local => clip.position,
        Frame::Global => obj.transform.point_to_local(clip.position),
    };

    let (count, kind) = match (&mut obj.data, mode) {
        (ObjectData::Mesh(mesh), EditMode::EditMesh) => {
            let indices = mesh.selected_indices();
            if indices.is_empty() {
                return Err(EditError::NothingSelected(ElementKind::Vertices));
            }
            for index in &indices {
                mesh.positions[*index] = target;
            }
            (indices.len(), ElementKind::Vertices)
        }
        (ObjectData::Curve(curve), EditMode::EditCurve) => {
            let mut count = 0;
            for spline in &mut curve.splines {
                match spline {
                    Spline::Bezier(points) => {
                        for point in points.iter_mut().filter(|p| p.selected) {
                            point.position = target;
                            count += 1;
                        }
                    }
                    Spline::Nurbs(points) => {
                        for point in points.iter_mut().filter(|p| p.selected) {
                            point.position = target;
                            count += 1;
                        }
                    }
                }
            }
            if count == 0 {
                return Err(EditError::NothingSelected(ElementKind::ControlPoints));
            }
            (count, ElementKind::ControlPoints)
        }
        (ObjectData::Armature { armature, .. }, EditMode::EditArmature) => {
            let mut count = 0;
            for bone in armature.bones.iter_mut().filter(|b| b.selected) {
                bone.head = target;
                count += 1;
            }
            if count == 0 {
                return Err(EditError::NothingSelected(ElementKind::Bones));
            }
            (count, ElementKind::Bones)
        }
        (ObjectData::Armature { pose, .. }, EditMode::Pose) => {
            let mut count = 0;
            for bone in pose.bones.iter_mut().filter(|b| b.selected) {
                bone.location = target;
                count += 1;
            }
            if count == 0 {
                return Err(EditError::NothingSelected(ElementKind::Bones));
            }
            (count, ElementKind::Bones)
        }
        _ => return Err(EditError::UnsupportedContext),
    };

    Ok(PastedCoordinates {
        position: clip.position,
        frame: clip.frame,
        count,
        kind,
    })
}

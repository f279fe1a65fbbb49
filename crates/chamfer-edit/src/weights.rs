//! Vertex-group weight tools.
//!
//! `set_vertex_weight` pins the active group's weight on the selected
//! vertices and redistributes the remaining mass over each vertex's other
//! groups. `prune_empty_groups` drops groups no vertex has a positive
//! weight in, across every selected mesh object.

use crate::context::{EditContext, EditMode, ObjectData};
use crate::error::{EditError, ElementKind};

/// Result of a weight assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightsApplied {
    /// Number of vertices written.
    pub vertices: usize,
    /// The (clamped) weight that was assigned.
    pub weight: f32,
    /// Name of the target group.
    pub group: String,
}

impl std::fmt::Display for WeightsApplied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "set weight {:.2} on {} vertices in \"{}\"",
            self.weight, self.vertices, self.group
        )
    }
}

/// Result of an empty-group prune.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrunedGroups {
    /// Removed (object name, group name) pairs, in scene order.
    pub removed: Vec<(String, String)>,
}

impl std::fmt::Display for PrunedGroups {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.removed.is_empty() {
            return write!(f, "no empty vertex groups found");
        }
        write!(f, "removed empty vertex groups:")?;
        for (object, group) in &self.removed {
            write!(f, "\n- {object}: {group}")?;
        }
        Ok(())
    }
}

/// Sets the active group's weight on every selected vertex of the active
/// mesh and renormalizes the vertex's other group weights.
///
/// `weight` is clamped to `[0, 1]`. Per vertex, with `t` the prior total
/// of the other groups' weights: if `1 - weight > 0` and `t > 0` the other
/// weights are rescaled by `(1 - weight) / t`, otherwise they are zeroed.
pub fn set_vertex_weight(ctx: &mut EditContext, weight: f32) -> Result<WeightsApplied, EditError> {
    let mode = ctx.mode;
    let obj = ctx.active_object_mut().ok_or(EditError::NoActiveObject)?;
    let ObjectData::Mesh(mesh) = &mut obj.data else {
        return Err(EditError::ActiveNotMesh);
    };
    let target = mesh.groups.active().ok_or(EditError::NoActiveGroup)?;
    if mode != EditMode::EditMesh {
        return Err(EditError::RequiresEditMode);
    }
    let selected = mesh.selected_indices();
    if selected.is_empty() {
        return Err(EditError::NothingSelected(ElementKind::Vertices));
    }

    let weight = weight.clamp(0.0, 1.0);
    for &vertex in &selected {
        mesh.groups.set_and_renormalize(vertex, target, weight);
    }

    Ok(WeightsApplied {
        vertices: selected.len(),
        weight,
        group: mesh.groups.name(target).unwrap_or("").to_owned(),
    })
}

/// Removes empty vertex groups from every selected mesh object.
///
/// A group is empty iff no vertex has a positive weight in it. Non-mesh
/// objects are skipped. Returns the removed (object, group) pairs.
pub fn prune_empty_groups(ctx: &mut EditContext) -> Result<PrunedGroups, EditError> {
    let indices = ctx.selected_objects();
    if indices.is_empty() {
        return Err(EditError::NoObjectsSelected);
    }

    let mut outcome = PrunedGroups::default();
    for index in indices {
        let obj = &mut ctx.objects[index];
        let ObjectData::Mesh(mesh) = &mut obj.data else {
            continue;
        };
        for group in mesh.groups.prune_empty() {
            outcome.removed.push((obj.name.clone(), group));
        }
    }
    Ok(outcome)
}

//! Editable mesh data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec3;

use crate::VertexGroups;

/// An editable mesh: vertex positions, per-vertex selection flags, and
/// vertex-group weights.
///
/// `positions` and `selected` are parallel arrays; [`VertexGroups`] keeps
/// its own per-vertex membership table of the same length.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh {
    /// Vertex positions in object space.
    pub positions: Vec<Vec3>,
    /// Per-vertex selection flags.
    pub selected: Vec<bool>,
    /// Named weight channels.
    pub groups: VertexGroups,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from vertex positions, nothing selected.
    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        let count = positions.len();
        Self {
            positions,
            selected: vec![false; count],
            groups: VertexGroups::with_vertex_count(count),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if a vertex is selected.
    pub fn is_selected(&self, vertex: usize) -> bool {
        self.selected.get(vertex).copied().unwrap_or(false)
    }

    /// Sets the selection flag of a vertex.
    pub fn set_selected(&mut self, vertex: usize, selected: bool) {
        if let Some(flag) = self.selected.get_mut(vertex) {
            *flag = selected;
        }
    }

    /// Selects every vertex.
    pub fn select_all(&mut self) {
        self.selected.fill(true);
    }

    /// Deselects every vertex.
    pub fn deselect_all(&mut self) {
        self.selected.fill(false);
    }

    /// Returns the indices of selected vertices, in storage order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &sel)| sel.then_some(i))
            .collect()
    }

    /// Returns the number of selected vertices.
    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&sel| sel).count()
    }

    /// Iterates over the positions of selected vertices.
    pub fn selected_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions
            .iter()
            .zip(&self.selected)
            .filter_map(|(&pos, &sel)| sel.then_some(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_quad() -> Mesh {
        Mesh::from_positions(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn from_positions_starts_deselected() {
        let mesh = make_quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.selected_count(), 0);
        assert_eq!(mesh.groups.vertex_count(), 4);
    }

    #[test]
    fn selection_flags() {
        let mut mesh = make_quad();
        mesh.set_selected(1, true);
        mesh.set_selected(3, true);

        assert!(mesh.is_selected(1));
        assert!(!mesh.is_selected(0));
        assert_eq!(mesh.selected_indices(), vec![1, 3]);

        mesh.select_all();
        assert_eq!(mesh.selected_count(), 4);
        mesh.deselect_all();
        assert_eq!(mesh.selected_count(), 0);
    }

    #[test]
    fn out_of_range_vertex_is_ignored() {
        let mut mesh = make_quad();
        mesh.set_selected(99, true);
        assert!(!mesh.is_selected(99));
        assert_eq!(mesh.selected_count(), 0);
    }

    #[test]
    fn selected_positions_follow_flags() {
        let mut mesh = make_quad();
        mesh.set_selected(0, true);
        mesh.set_selected(2, true);

        let positions: Vec<Vec3> = mesh.selected_positions().collect();
        assert_eq!(positions, vec![Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)]);
    }
}

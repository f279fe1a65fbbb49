//! Vertex groups: named per-vertex weight channels used for skinning and
//! deformation.
//!
//! Each vertex holds a list of memberships, one per group it belongs to,
//! each with a weight in `[0, 1]`. Groups are addressed by index; removing
//! groups renumbers the survivors and remaps memberships to match.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named weight channel.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexGroup {
    /// Group name (e.g. "upper_arm.L").
    pub name: String,
}

/// One vertex's weight in one group.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupWeight {
    /// Index into the group list.
    pub group: usize,
    /// Weight in `[0, 1]`.
    pub weight: f32,
}

/// The vertex groups of a mesh, with per-vertex memberships.
///
/// The membership table is parallel to the mesh's vertex array. A vertex
/// not listed in a group has no weight there, which is distinct from a
/// stored weight of zero.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexGroups {
    groups: Vec<VertexGroup>,
    active: Option<usize>,
    memberships: Vec<Vec<GroupWeight>>,
}

impl VertexGroups {
    /// Creates an empty group table for a mesh with `vertex_count` vertices.
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            groups: Vec::new(),
            active: None,
            memberships: vec![Vec::new(); vertex_count],
        }
    }

    /// Returns the number of vertices the membership table covers.
    pub fn vertex_count(&self) -> usize {
        self.memberships.len()
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Adds a group and makes it active. Returns its index.
    pub fn add_group(&mut self, name: impl Into<String>) -> usize {
        let index = self.groups.len();
        self.groups.push(VertexGroup { name: name.into() });
        self.active = Some(index);
        index
    }

    /// Returns the name of a group.
    pub fn name(&self, group: usize) -> Option<&str> {
        self.groups.get(group).map(|g| g.name.as_str())
    }

    /// Returns the index of the group with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    /// Returns the active group index, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Sets the active group. Out-of-range indices clear it.
    pub fn set_active(&mut self, group: Option<usize>) {
        self.active = group.filter(|&g| g < self.groups.len());
    }

    /// Returns a vertex's memberships.
    pub fn memberships(&self, vertex: usize) -> &[GroupWeight] {
        self.memberships.get(vertex).map_or(&[], |m| m.as_slice())
    }

    /// Returns a vertex's weight in a group, or `None` if the vertex is
    /// not a member.
    pub fn weight(&self, vertex: usize, group: usize) -> Option<f32> {
        self.memberships
            .get(vertex)?
            .iter()
            .find(|entry| entry.group == group)
            .map(|entry| entry.weight)
    }

    /// Sets a vertex's weight in a group, adding the membership if absent.
    ///
    /// Out-of-range vertex or group indices are ignored.
    pub fn set_weight(&mut self, vertex: usize, group: usize, weight: f32) {
        if group >= self.groups.len() {
            return;
        }
        let Some(entries) = self.memberships.get_mut(vertex) else {
            return;
        };
        match entries.iter_mut().find(|entry| entry.group == group) {
            Some(entry) => entry.weight = weight,
            None => entries.push(GroupWeight { group, weight }),
        }
    }

    /// Sets a vertex's weight in `target` to `weight` and redistributes the
    /// remaining mass over the vertex's other groups.
    ///
    /// With `t` the sum of the other groups' weights before the change:
    /// if `1 - weight > 0` and `t > 0`, every other weight is rescaled by
    /// `(1 - weight) / t` (clamped to `[0, 1]`); otherwise the other
    /// weights are zeroed. Afterwards the vertex's weights sum to 1
    /// whenever redistribution was possible.
    pub fn set_and_renormalize(&mut self, vertex: usize, target: usize, weight: f32) {
        if target >= self.groups.len() {
            return;
        }
        let other_total: f32 = self
            .memberships(vertex)
            .iter()
            .filter(|entry| entry.group != target)
            .map(|entry| entry.weight)
            .sum();

        self.set_weight(vertex, target, weight);

        let remainder = 1.0 - weight;
        let Some(entries) = self.memberships.get_mut(vertex) else {
            return;
        };
        if remainder > 0.0 && other_total > 0.0 {
            let scale = remainder / other_total;
            for entry in entries.iter_mut().filter(|entry| entry.group != target) {
                entry.weight = (entry.weight * scale).clamp(0.0, 1.0);
            }
        } else {
            for entry in entries.iter_mut().filter(|entry| entry.group != target) {
                entry.weight = 0.0;
            }
        }
    }

    /// Returns true if no vertex has a positive weight in the group.
    pub fn is_group_empty(&self, group: usize) -> bool {
        !self.memberships.iter().any(|entries| {
            entries
                .iter()
                .any(|entry| entry.group == group && entry.weight > 0.0)
        })
    }

    /// Removes every empty group and returns the removed names.
    ///
    /// Surviving groups are renumbered; memberships are remapped so they
    /// keep pointing at the same groups. The active group is cleared if it
    /// was removed.
    pub fn prune_empty(&mut self) -> Vec<String> {
        let keep: Vec<bool> = (0..self.groups.len())
            .map(|group| !self.is_group_empty(group))
            .collect();
        if keep.iter().all(|&k| k) {
            return Vec::new();
        }

        // Old index -> new index for surviving groups.
        let mut remap = vec![None; self.groups.len()];
        let mut next = 0;
        for (old, &kept) in keep.iter().enumerate() {
            if kept {
                remap[old] = Some(next);
                next += 1;
            }
        }

        let mut removed = Vec::new();
        let mut old_index = 0;
        self.groups.retain(|group| {
            let kept = keep[old_index];
            if !kept {
                removed.push(group.name.clone());
            }
            old_index += 1;
            kept
        });

        for entries in &mut self.memberships {
            entries.retain_mut(|entry| match remap[entry.group] {
                Some(new) => {
                    entry.group = new;
                    true
                }
                None => false,
            });
        }

        self.active = self.active.and_then(|group| remap[group]);
        removed
    }
}

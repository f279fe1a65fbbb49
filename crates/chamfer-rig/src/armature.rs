//! Armature bones and poses.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec3;

/// A bone as seen in armature editing: a head/tail segment.
///
/// `selected` marks the whole bone; `head_selected` and `tail_selected`
/// track the endpoints separately so tools can act on one end of a bone.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditBone {
    /// Bone name.
    pub name: String,
    /// Head position in armature space.
    pub head: Vec3,
    /// Tail position in armature space.
    pub tail: Vec3,
    /// Whole-bone selection flag.
    pub selected: bool,
    /// Head endpoint selection flag.
    pub head_selected: bool,
    /// Tail endpoint selection flag.
    pub tail_selected: bool,
}

impl EditBone {
    /// Creates a deselected bone.
    pub fn new(name: impl Into<String>, head: Vec3, tail: Vec3) -> Self {
        Self {
            name: name.into(),
            head,
            tail,
            selected: false,
            head_selected: false,
            tail_selected: false,
        }
    }
}

/// An editable armature: a list of edit bones.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Armature {
    pub bones: Vec<EditBone>,
}

impl Armature {
    /// Creates an empty armature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of selected bones.
    pub fn selected_count(&self) -> usize {
        self.bones.iter().filter(|b| b.selected).count()
    }

    /// Returns the last selected bone in storage order, if any.
    pub fn last_selected(&self) -> Option<&EditBone> {
        self.bones.iter().rfind(|b| b.selected)
    }
}

/// A bone as seen in pose mode.
///
/// `head` is the posed head position in armature space; `location` is the
/// bone's local offset from its rest position, which is what pose-mode
/// editing writes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoseBone {
    /// Bone name.
    pub name: String,
    /// Posed head position in armature space.
    pub head: Vec3,
    /// Local offset from the rest position.
    pub location: Vec3,
    /// Selection flag.
    pub selected: bool,
}

impl PoseBone {
    /// Creates a deselected pose bone at its rest position.
    pub fn new(name: impl Into<String>, head: Vec3) -> Self {
        Self {
            name: name.into(),
            head,
            location: Vec3::ZERO,
            selected: false,
        }
    }
}

/// The posed state of an armature.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    pub bones: Vec<PoseBone>,
}

impl Pose {
    /// Creates an empty pose.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rest pose for the given armature.
    pub fn rest_of(armature: &Armature) -> Self {
        Self {
            bones: armature
                .bones
                .iter()
                .map(|bone| PoseBone::new(bone.name.clone(), bone.head))
                .collect(),
        }
    }

    /// Returns the number of selected pose bones.
    pub fn selected_count(&self) -> usize {
        self.bones.iter().filter(|b| b.selected).count()
    }

    /// Returns the last selected pose bone in storage order, if any.
    pub fn last_selected(&self) -> Option<&PoseBone> {
        self.bones.iter().rfind(|b| b.selected)
    }
}

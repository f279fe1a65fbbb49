//! Editable armature model for chamfer.
//!
//! This crate provides:
//! - [`Armature`] - a list of edit bones
//! - [`EditBone`] - head/tail segment with whole-bone and per-endpoint selection
//! - [`Pose`] - the posed state of an armature's bones
//! - [`PoseBone`] - posed head plus the bone's local offset

mod armature;

pub use armature::{Armature, EditBone, Pose, PoseBone};

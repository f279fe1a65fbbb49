//! Object placement in the scene.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::{Mat4, Quat, Vec3};

/// Translation, rotation, and scale of an object relative to the world.
///
/// Composed in the usual scale-then-rotate-then-translate order when
/// converted to a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Position in world space.
    pub translation: Vec3,
    /// Rotation.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform (no translation, rotation, or scaling).
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Creates a transform from a translation only.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Creates a transform from translation, rotation, and scale.
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Returns the object-to-world matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Transforms a point from object space to world space.
    pub fn point_to_world(&self, point: Vec3) -> Vec3 {
        self.matrix().transform_point3(point)
    }

    /// Transforms a point from world space to object space.
    ///
    /// Inverse of [`Transform::point_to_world`]. Degenerate (zero) scale
    /// produces a non-invertible matrix and garbage results, as with any
    /// matrix inverse; editing tools never produce such transforms.
    pub fn point_to_local(&self, point: Vec3) -> Vec3 {
        self.matrix().inverse().transform_point3(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "{a:?} != {b:?}");
    }

    #[test]
    fn identity_is_noop() {
        let p = Vec3::new(1.0, -2.0, 3.0);
        assert_close(Transform::IDENTITY.point_to_world(p), p);
        assert_close(Transform::IDENTITY.point_to_local(p), p);
    }

    #[test]
    fn translation_moves_points() {
        let t = Transform::from_translation(Vec3::new(10.0, 0.0, 0.0));
        assert_close(t.point_to_world(Vec3::ZERO), Vec3::new(10.0, 0.0, 0.0));
        assert_close(t.point_to_local(Vec3::new(10.0, 0.0, 0.0)), Vec3::ZERO);
    }

    #[test]
    fn world_then_local_roundtrips() {
        let t = Transform::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_z(FRAC_PI_2),
            Vec3::new(2.0, 2.0, 2.0),
        );
        let p = Vec3::new(-4.0, 0.5, 7.0);
        assert_close(t.point_to_local(t.point_to_world(p)), p);
    }

    #[test]
    fn rotation_applies_before_translation() {
        let t = Transform::new(
            Vec3::new(5.0, 0.0, 0.0),
            Quat::from_rotation_z(FRAC_PI_2),
            Vec3::ONE,
        );
        // +X rotates onto +Y, then translates.
        assert_close(t.point_to_world(Vec3::X), Vec3::new(5.0, 1.0, 0.0));
    }
}

//! Axis-windowed selection across element types.
//!
//! For every element of every object participating in the current edit
//! mode, the selection flag is overwritten with the result of a half-space
//! test: selected iff every flagged axis of the element's coordinate
//! passes the sign test, in the chosen frame.

use chamfer_core::{Axes, Frame, Sign, Transform};
use chamfer_curve::{Curve, Spline};
use chamfer_mesh::Mesh;
use chamfer_rig::Armature;

use crate::context::{EditContext, EditMode, ObjectData};
use crate::error::EditError;

/// Parameters for axis-windowed selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisSelect {
    /// Axes the test considers.
    pub axes: Axes,
    /// Half-space applied on each considered axis.
    pub sign: Sign,
    /// Frame the coordinates are tested in.
    pub frame: Frame,
}

/// Result of an axis selection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisSelectOutcome {
    /// Number of objects whose selection was updated.
    pub objects: usize,
    /// Names of participating objects whose type did not match the mode.
    pub skipped: Vec<String>,
}

impl std::fmt::Display for AxisSelectOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "updated selection on {} object(s)", self.objects)
    }
}

/// Applies the axis-window predicate to every object in the current edit
/// mode.
///
/// Flags are overwritten both ways: elements passing the predicate are
/// selected, elements failing it are deselected. Bones are selected if
/// either endpoint passes, with the endpoint flags recording which.
pub fn select_by_axis(
    ctx: &mut EditContext,
    params: &AxisSelect,
) -> Result<AxisSelectOutcome, EditError> {
    if !ctx.mode.is_edit() {
        return Err(EditError::RequiresEditMode);
    }
    let indices = ctx.objects_in_mode();
    if indices.is_empty() {
        return Err(EditError::NoObjectsSelected);
    }
    if !params.axes.any() {
        return Err(EditError::NoAxesEnabled);
    }

    let mode = ctx.mode;
    let mut outcome = AxisSelectOutcome::default();
    for index in indices {
        let obj = &mut ctx.objects[index];
        match (&mut obj.data, mode) {
            (ObjectData::Mesh(mesh), EditMode::EditMesh) => {
                select_mesh_vertices(mesh, &obj.transform, params);
            }
            (ObjectData::Curve(curve), EditMode::EditCurve) => {
                select_curve_points(curve, &obj.transform, params);
            }
            (ObjectData::Armature { armature, .. }, EditMode::EditArmature) => {
                select_armature_bones(armature, &obj.transform, params);
            }
            _ => {
                outcome.skipped.push(obj.name.clone());
                continue;
            }
        }
        outcome.objects += 1;
    }
    Ok(outcome)
}

fn test_point(position: glam::Vec3, transform: &Transform, params: &AxisSelect) -> bool {
    let coord = match params.frame {
        Frame::Local => position,
        Frame::Global => transform.point_to_world(position),
    };
    params.axes.admits(params.sign, coord)
}

fn select_mesh_vertices(mesh: &mut Mesh, transform: &Transform, params: &AxisSelect) {
    for (position, selected) in mesh.positions.iter().zip(mesh.selected.iter_mut()) {
        *selected = test_point(*position, transform, params);
    }
}

fn select_curve_points(curve: &mut Curve, transform: &Transform, params: &AxisSelect) {
    for spline in &mut curve.splines {
        match spline {
            Spline::Bezier(points) => {
                for point in points {
                    point.selected = test_point(point.position, transform, params);
                }
            }
            Spline::Nurbs(points) => {
                for point in points {
                    point.selected = test_point(point.position, transform, params);
                }
            }
        }
    }
}

fn select_armature_bones(armature: &mut Armature, transform: &Transform, params: &AxisSelect) {
    for bone in &mut armature.bones {
        let head = test_point(bone.head, transform, params);
        let tail = test_point(bone.tail, transform, params);
        bone.selected = head || tail;
        bone.head_selected = head;
        bone.tail_selected = tail;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Object;
    use chamfer_curve::{BezierPoint, NurbsPoint};
    use chamfer_rig::{EditBone, Pose};
    use glam::Vec3;

    fn mesh_context(positions: Vec<Vec3>) -> EditContext {
        let mut ctx = EditContext::new();
        ctx.add_object(Object::new(
            "mesh",
            ObjectData::Mesh(Mesh::from_positions(positions)),
        ));
        ctx.mode = EditMode::EditMesh;
        ctx
    }

    fn all_axes(sign: Sign, frame: Frame) -> AxisSelect {
        AxisSelect {
            axes: Axes::ALL,
            sign,
            frame,
        }
    }

    #[test]
    fn positive_all_axes_selects_nonnegative_vertices() {
        let mut ctx = mesh_context(vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(-1.0, 2.0, 3.0),
            Vec3::new(1.0, -0.1, 3.0),
        ]);

        select_by_axis(&mut ctx, &all_axes(Sign::Positive, Frame::Local)).unwrap();

        let mesh = ctx.objects[0].as_mesh().unwrap();
        assert_eq!(mesh.selected, vec![true, true, false, false]);
    }

    #[test]
    fn predicate_overwrites_previous_selection() {
        let mut ctx = mesh_context(vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::X]);
        ctx.objects[0].as_mesh_mut().unwrap().select_all();

        select_by_axis(
            &mut ctx,
            &AxisSelect {
                axes: Axes::new(true, false, false),
                sign: Sign::Positive,
                frame: Frame::Local,
            },
        )
        .unwrap();

        let mesh = ctx.objects[0].as_mesh().unwrap();
        assert_eq!(mesh.selected, vec![false, true]);
    }

    #[test]
    fn global_frame_tests_world_coordinates() {
        let mut ctx = mesh_context(vec![Vec3::new(-1.0, 0.0, 0.0)]);
        ctx.objects[0].transform =
            chamfer_core::Transform::from_translation(Vec3::new(5.0, 0.0, 0.0));

        // Locally negative, globally at x = 4.
        select_by_axis(
            &mut ctx,
            &AxisSelect {
                axes: Axes::new(true, false, false),
                sign: Sign::Positive,
                frame: Frame::Global,
            },
        )
        .unwrap();
        assert!(ctx.objects[0].as_mesh().unwrap().selected[0]);

        select_by_axis(
            &mut ctx,
            &AxisSelect {
                axes: Axes::new(true, false, false),
                sign: Sign::Positive,
                frame: Frame::Local,
            },
        )
        .unwrap();
        assert!(!ctx.objects[0].as_mesh().unwrap().selected[0]);
    }

    #[test]
    fn curve_points_of_both_kinds_are_tested() {
        let mut bezier = vec![
            BezierPoint::new(Vec3::new(1.0, 0.0, 0.0)),
            BezierPoint::new(Vec3::new(-1.0, 0.0, 0.0)),
        ];
        bezier[1].selected = true;
        let nurbs = vec![
            NurbsPoint::new(Vec3::new(0.0, 2.0, 0.0)),
            NurbsPoint::new(Vec3::new(0.0, -2.0, 0.0)),
        ];

        let mut ctx = EditContext::new();
        ctx.add_object(Object::new(
            "curve",
            ObjectData::Curve(Curve {
                splines: vec![Spline::Bezier(bezier), Spline::Nurbs(nurbs)],
            }),
        ));
        ctx.mode = EditMode::EditCurve;

        select_by_axis(&mut ctx, &all_axes(Sign::Positive, Frame::Local)).unwrap();

        match &ctx.objects[0].data {
            ObjectData::Curve(curve) => {
                let Spline::Bezier(bezier) = &curve.splines[0] else {
                    unreachable!()
                };
                let Spline::Nurbs(nurbs) = &curve.splines[1] else {
                    unreachable!()
                };
                assert!(bezier[0].selected);
                assert!(!bezier[1].selected);
                assert!(nurbs[0].selected);
                assert!(!nurbs[1].selected);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn bones_select_if_either_endpoint_passes() {
        let mut armature = Armature::new();
        // Head passes, tail fails.
        armature
            .bones
            .push(EditBone::new("half", Vec3::Y, Vec3::new(0.0, -1.0, 0.0)));
        // Both fail.
        armature.bones.push(EditBone::new(
            "out",
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, -2.0, 0.0),
        ));
        // Both pass.
        armature
            .bones
            .push(EditBone::new("in", Vec3::ZERO, Vec3::Y));
        let pose = Pose::rest_of(&armature);

        let mut ctx = EditContext::new();
        ctx.add_object(Object::new("rig", ObjectData::Armature { armature, pose }));
        ctx.mode = EditMode::EditArmature;

        select_by_axis(&mut ctx, &all_axes(Sign::Positive, Frame::Local)).unwrap();

        match &ctx.objects[0].data {
            ObjectData::Armature { armature, .. } => {
                let bones = &armature.bones;
                assert!(bones[0].selected && bones[0].head_selected && !bones[0].tail_selected);
                assert!(!bones[1].selected && !bones[1].head_selected && !bones[1].tail_selected);
                assert!(bones[2].selected && bones[2].head_selected && bones[2].tail_selected);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn applies_to_every_object_in_mode() {
        let mut ctx = EditContext::new();
        ctx.add_object(Object::new(
            "a",
            ObjectData::Mesh(Mesh::from_positions(vec![Vec3::X])),
        ));
        ctx.add_object(Object::new(
            "b",
            ObjectData::Mesh(Mesh::from_positions(vec![Vec3::new(-1.0, 0.0, 0.0)])),
        ));
        ctx.objects[0].selected = true;
        ctx.objects[1].selected = true;
        ctx.mode = EditMode::EditMesh;

        let outcome =
            select_by_axis(&mut ctx, &all_axes(Sign::Positive, Frame::Local)).unwrap();
        assert_eq!(outcome.objects, 2);
        assert!(ctx.objects[0].as_mesh().unwrap().selected[0]);
        assert!(!ctx.objects[1].as_mesh().unwrap().selected[0]);
    }

    #[test]
    fn mismatched_object_types_are_skipped() {
        let mut ctx = EditContext::new();
        ctx.add_object(Object::new(
            "mesh",
            ObjectData::Mesh(Mesh::from_positions(vec![Vec3::X])),
        ));
        ctx.add_object(Object::new("curve", ObjectData::Curve(Curve::new())));
        ctx.objects[0].selected = true;
        ctx.objects[1].selected = true;
        ctx.mode = EditMode::EditMesh;

        let outcome =
            select_by_axis(&mut ctx, &all_axes(Sign::Positive, Frame::Local)).unwrap();
        assert_eq!(outcome.objects, 1);
        assert_eq!(outcome.skipped, vec!["curve".to_string()]);
    }

    #[test]
    fn validation_order() {
        // Wrong mode first.
        let mut ctx = EditContext::new();
        ctx.mode = EditMode::Object;
        let params = AxisSelect::default();
        assert_eq!(
            select_by_axis(&mut ctx, &params),
            Err(EditError::RequiresEditMode)
        );

        // Then missing objects.
        ctx.mode = EditMode::EditMesh;
        assert_eq!(
            select_by_axis(&mut ctx, &params),
            Err(EditError::NoObjectsSelected)
        );

        // Then empty axis set.
        ctx.add_object(Object::new(
            "mesh",
            ObjectData::Mesh(Mesh::from_positions(vec![Vec3::X])),
        ));
        let no_axes = AxisSelect {
            axes: Axes::new(false, false, false),
            ..AxisSelect::default()
        };
        assert_eq!(
            select_by_axis(&mut ctx, &no_axes),
            Err(EditError::NoAxesEnabled)
        );
    }

    #[test]
    fn negative_direction_selects_nonpositive() {
        let mut ctx = mesh_context(vec![
            Vec3::new(-1.0, -2.0, 0.0),
            Vec3::new(1.0, -2.0, 0.0),
        ]);

        select_by_axis(&mut ctx, &all_axes(Sign::Negative, Frame::Local)).unwrap();

        let mesh = ctx.objects[0].as_mesh().unwrap();
        assert_eq!(mesh.selected, vec![true, false]);
    }
}

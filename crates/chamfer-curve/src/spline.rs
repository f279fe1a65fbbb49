//! Spline and control-point types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec3;

/// A Bezier control point.
///
/// Editing operations address the control point itself; the handles travel
/// with the point only when an operation says so.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BezierPoint {
    /// Control-point position in object space.
    pub position: Vec3,
    /// Left handle position.
    pub handle_left: Vec3,
    /// Right handle position.
    pub handle_right: Vec3,
    /// Control-point selection flag.
    pub selected: bool,
}

impl BezierPoint {
    /// Creates a deselected control point with both handles on the point.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            handle_left: position,
            handle_right: position,
            selected: false,
        }
    }
}

/// A NURBS (or poly) spline point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NurbsPoint {
    /// Point position in object space.
    pub position: Vec3,
    /// Rational weight.
    pub weight: f32,
    /// Selection flag.
    pub selected: bool,
}

impl NurbsPoint {
    /// Creates a deselected point with weight 1.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            weight: 1.0,
            selected: false,
        }
    }
}

/// One spline of a curve.
///
/// Bezier splines carry [`BezierPoint`]s, everything else (NURBS, poly)
/// carries [`NurbsPoint`]s. Editing operations treat both kinds of control
/// point identically.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Spline {
    Bezier(Vec<BezierPoint>),
    Nurbs(Vec<NurbsPoint>),
}

impl Spline {
    /// Returns the number of control points.
    pub fn len(&self) -> usize {
        match self {
            Spline::Bezier(points) => points.len(),
            Spline::Nurbs(points) => points.len(),
        }
    }

    /// Returns true if the spline has no control points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An editable curve: a list of splines.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Curve {
    pub splines: Vec<Spline>,
}

impl Curve {
    /// Creates an empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the positions of selected control points across all splines,
    /// in storage order.
    pub fn selected_positions(&self) -> Vec<Vec3> {
        let mut positions = Vec::new();
        for spline in &self.splines {
            match spline {
                Spline::Bezier(points) => {
                    positions.extend(points.iter().filter(|p| p.selected).map(|p| p.position));
                }
                Spline::Nurbs(points) => {
                    positions.extend(points.iter().filter(|p| p.selected).map(|p| p.position));
                }
            }
        }
        positions
    }

    /// Returns the number of selected control points.
    pub fn selected_count(&self) -> usize {
        self.selected_positions().len()
    }
}

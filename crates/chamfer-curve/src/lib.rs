//! Editable curve model for chamfer.
//!
//! This crate provides:
//! - [`Curve`] - a collection of splines
//! - [`Spline`] - tagged variant over Bezier and NURBS point runs
//! - [`BezierPoint`], [`NurbsPoint`] - control points with selection flags

mod spline;

pub use spline::{BezierPoint, Curve, NurbsPoint, Spline};

//! Planar route geometry (shoelace area + closure check).
//!
//! Purpose
//! - Turn an ordered vertex list into the enclosed area of the route polygon.
//! - Decide whether a route is closed (first vertex equals last vertex) before
//!   it is allowed to become a `Driver`.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; equality is exact (no epsilon), which
//!   is what the closure check relies on.
//! - Orientation is ignored: the area is the absolute value of the shoelace sum.
//! - Degenerate inputs (fewer than three distinct vertices) yield zero or a
//!   near-zero area, never an error.
//!
//! Code cross-refs: `driver::Driver::from_route`, `parse::parse_route_line`

mod area;

pub use area::{compute_area, is_closed, shoelace_sum};

/// A route vertex.
pub type Point = nalgebra::Vector2<f64>;

/// Shorthand for building a `Point` from raw coordinates.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

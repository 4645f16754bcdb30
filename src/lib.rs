// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Constrained triangulation of planar straight-line graphs (PSLGs).
//!
//! Feed the [`Triangulator`] with non-crossing polygon boundaries and it
//! produces a triangulation of their convex hull which keeps every input edge
//! intact. Hull-filling "pockets" next to a single polygon, and holes nested
//! inside other polygons, are cut away again.
//!
//! ```rust
//! # use pslg_triangulate::Triangulator;
//! # use pslg_triangulate::data::{Boundary, Point};
//! let mut tri = Triangulator::new();
//! let square = Boundary::closed(vec![
//!   Point::new([0., 0.]),
//!   Point::new([4., 0.]),
//!   Point::new([4., 4.]),
//!   Point::new([0., 4.]),
//! ]);
//! tri.add_polygon("room", &square);
//! tri.compute_intermediate_area();
//! assert_eq!(tri.triangle_count(), 2);
//! assert_eq!(tri.area(), 16.);
//! ```
use std::cmp::Ordering;

pub mod algorithms;
mod config;
pub mod data;
mod orientation;
mod triangulator;
mod utils;

pub use config::Settings;
pub use orientation::Orientation;
pub use triangulator::Triangulator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Both endpoints of an edge are the same vertex.
  DegenerateEdge,
  DuplicateEdge,
  /// The edge crosses, touches or overlaps an existing edge.
  CrossingEdge,
  /// A vertex lies in the interior of an edge.
  VertexOnEdge,
  NonFiniteCoordinate,
  ClockWiseViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::DegenerateEdge => write!(f, "Degenerate edge"),
      Error::DuplicateEdge => write!(f, "Duplicate edge"),
      Error::CrossingEdge => write!(f, "Edge crosses an existing edge"),
      Error::VertexOnEdge => write!(f, "Vertex lies on an existing edge"),
      Error::NonFiniteCoordinate => write!(f, "Coordinate is NaN or infinite"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
    }
  }
}

impl std::error::Error for Error {}

/// Lexicographic `(x, y)` comparison of two coordinate pairs, the sweep order
/// used throughout the crate.
pub(crate) fn cmp_xy(a: &[f64; 2], b: &[f64; 2]) -> Ordering {
  a[0].total_cmp(&b[0]).then_with(|| a[1].total_cmp(&b[1]))
}

#[cfg(test)]
pub mod testing;

mod edge;
mod line_segment;
pub(crate) mod point;
pub mod polygon;
mod triangle;
mod vertex;

use crate::utils::arena_id;

pub use edge::*;
pub use line_segment::*;
pub use triangle::*;
pub use vertex::*;

#[doc(inline)]
pub use crate::data::polygon::Boundary;
pub use point::Point;

arena_id!(
  /// Handle of a [`Vertex`], numbered in creation order.
  VertexId,
  /// Handle of an [`Edge`].
  EdgeId,
  /// Handle of a [`Triangle`].
  TriangleId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}

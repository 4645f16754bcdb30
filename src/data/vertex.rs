use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::{Point, VertexId};

/// A vertex of the planar straight-line graph.
///
/// Vertices are identified by coordinate equality: adding the same
/// coordinates twice yields the same vertex. Every polygon that runs through
/// a vertex is recorded in [`Vertex::belongs_to`].
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
  pub(crate) id: VertexId,
  pub(crate) point: Point,
  pub(crate) belongs_to: BTreeSet<String>,
}

impl Vertex {
  pub(crate) fn new(id: VertexId, point: Point) -> Vertex {
    Vertex {
      id,
      point: point.normalized(),
      belongs_to: BTreeSet::new(),
    }
  }

  pub fn id(&self) -> VertexId {
    self.id
  }

  pub fn point(&self) -> &Point {
    &self.point
  }

  pub fn x(&self) -> f64 {
    self.point.x_coord()
  }

  pub fn y(&self) -> f64 {
    self.point.y_coord()
  }

  pub(crate) fn array(&self) -> &[f64; 2] {
    &self.point.array
  }

  /// Names of the polygons this vertex is part of.
  pub fn belongs_to(&self) -> impl Iterator<Item = &str> + '_ {
    self.belongs_to.iter().map(String::as_str)
  }

  pub fn belongs_to_polygon(&self, name: &str) -> bool {
    self.belongs_to.contains(name)
  }

  /// True if both vertices are part of at least one common polygon.
  pub fn shares_polygon(&self, other: &Vertex) -> bool {
    self
      .belongs_to
      .iter()
      .any(|name| other.belongs_to.contains(name))
  }

  /// x-order: lexicographic `(x, y)`.
  pub fn cmp_xy(&self, other: &Vertex) -> Ordering {
    self.point.cmp_xy(&other.point)
  }

  /// y-order: lexicographic `(y, x)`.
  pub fn cmp_inverted(&self, other: &Vertex) -> Ordering {
    self.point.cmp_yx(&other.point)
  }
}

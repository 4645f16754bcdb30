use std::cmp::Ordering;

use super::{EdgeId, LineSegment, Point, TriangleId, Vertex, VertexId};
use crate::Orientation;

///////////////////////////////////////////////////////////////////////////////
// Edge

/// An edge of the planar straight-line graph.
///
/// The endpoints are stored in x-order (`v1` before `v2`). Synthetic edges
/// are hull edges, sweep connectors and triangulation diagonals; they never
/// carry a polygon name. Input edges may or may not have one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
  pub(crate) v1: VertexId,
  pub(crate) v2: VertexId,
  pub(crate) polygon: Option<String>,
  pub(crate) synthetic: bool,
  pub(crate) weight: u32,
  pub(crate) neighbours: [Option<TriangleId>; 2],
}

impl Edge {
  /// Input edge.
  pub(crate) fn new(a: &Vertex, b: &Vertex, polygon: Option<String>) -> Edge {
    let (v1, v2) = check_order(a, b);
    Edge {
      v1,
      v2,
      polygon,
      synthetic: false,
      weight: 1,
      neighbours: [None, None],
    }
  }

  pub(crate) fn synthetic(a: &Vertex, b: &Vertex) -> Edge {
    Edge {
      synthetic: true,
      ..Edge::new(a, b, None)
    }
  }

  /// Left endpoint.
  pub fn v1(&self) -> VertexId {
    self.v1
  }

  /// Right endpoint.
  pub fn v2(&self) -> VertexId {
    self.v2
  }

  pub fn polygon(&self) -> Option<&str> {
    self.polygon.as_deref()
  }

  pub fn is_synthetic(&self) -> bool {
    self.synthetic
  }

  pub fn weight(&self) -> u32 {
    self.weight
  }

  pub fn has_endpoint(&self, v: VertexId) -> bool {
    self.v1 == v || self.v2 == v
  }

  /// The endpoint opposite to `v`.
  pub fn other(&self, v: VertexId) -> VertexId {
    debug_assert!(self.has_endpoint(v));
    if self.v1 == v {
      self.v2
    } else {
      self.v1
    }
  }

  pub fn shared_endpoint(&self, other: &Edge) -> Option<VertexId> {
    if other.has_endpoint(self.v1) {
      Some(self.v1)
    } else if other.has_endpoint(self.v2) {
      Some(self.v2)
    } else {
      None
    }
  }

  pub fn neighbours(&self) -> impl Iterator<Item = TriangleId> + '_ {
    self.neighbours.iter().flatten().copied()
  }

  pub fn neighbour_count(&self) -> usize {
    self.neighbours.iter().flatten().count()
  }

  // Returns false if both slots are taken.
  pub(crate) fn add_neighbour(&mut self, triangle: TriangleId) -> bool {
    if self.neighbours.contains(&Some(triangle)) {
      return true;
    }
    match self.neighbours.iter_mut().find(|slot| slot.is_none()) {
      Some(slot) => {
        *slot = Some(triangle);
        true
      }
      None => false,
    }
  }

  pub(crate) fn remove_neighbour(&mut self, triangle: TriangleId) {
    for slot in self.neighbours.iter_mut() {
      if *slot == Some(triangle) {
        *slot = None;
      }
    }
  }
}

fn check_order(a: &Vertex, b: &Vertex) -> (VertexId, VertexId) {
  if a.cmp_xy(b).is_le() {
    (a.id, b.id)
  } else {
    (b.id, a.id)
  }
}

///////////////////////////////////////////////////////////////////////////////
// EdgeView

/// An edge together with its endpoint records.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
  pub id: EdgeId,
  pub edge: &'a Edge,
  pub min: &'a Vertex,
  pub max: &'a Vertex,
}

impl<'a> EdgeView<'a> {
  pub fn segment(&self) -> LineSegment {
    LineSegment {
      min: *self.min.point(),
      max: *self.max.point(),
    }
  }

  pub fn is_vertical(&self) -> bool {
    self.min.x() == self.max.x()
  }

  /// True if `pt` lies strictly between the endpoints.
  pub fn contains_interior(&self, pt: &Point) -> bool {
    self.segment().contains_interior(pt)
  }

  /// Position of `pt` relative to the supporting line: `Less` if below,
  /// `Greater` if above. Vertical edges count their left side as above.
  pub fn cmp_point(&self, pt: &[f64; 2]) -> Ordering {
    Orientation::new(self.min.array(), self.max.array(), pt)
      .ccw_ordering()
      .reverse()
  }

  /// Compare two edges meeting at the vertex `at`: `Less` means `self` lies
  /// below `other` right next to `at`.
  ///
  /// Edges leaving `at` towards the right span the directions (-90°, 90°],
  /// edges arriving from the left span (90°, 270°]; within each range the
  /// turn from one edge to the other decides, with opposite signs for the two
  /// ranges. An arriving edge is ordered before a leaving one.
  pub fn cmp_at(&self, other: &EdgeView<'_>, at: VertexId) -> Ordering {
    if self.id == other.id {
      return Ordering::Equal;
    }
    let self_starts = self.edge.v1 == at;
    let other_starts = other.edge.v1 == at;
    match (self_starts, other_starts) {
      (true, true) => {
        let w = self.min.array();
        Orientation::new(w, self.max.array(), other.max.array()).ccw_ordering()
      }
      (false, false) => {
        let w = self.max.array();
        Orientation::new(w, self.min.array(), other.min.array())
          .ccw_ordering()
          .reverse()
      }
      (false, true) => Ordering::Less,
      (true, false) => Ordering::Greater,
    }
  }

  /// The y coordinate of the edge on the vertical line through `x`. Vertical
  /// edges report `y_hint` clamped to their extent.
  pub fn y_at(&self, x: f64, y_hint: f64) -> f64 {
    let [x1, y1] = *self.min.array();
    let [x2, y2] = *self.max.array();
    if x1 == x2 {
      return y_hint.clamp(y1, y2);
    }
    if x <= x1 {
      return y1;
    }
    if x >= x2 {
      return y2;
    }
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
  }
}

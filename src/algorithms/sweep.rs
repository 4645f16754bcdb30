use std::cmp::Ordering;
use std::collections::HashMap;

use crate::data::{EdgeId, VertexId};
use crate::Triangulator;

/// Something that can sit on the sweep line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepKey {
  Vertex(VertexId),
  Edge(EdgeId),
}

/// Vertical order of vertices and edges on the sweep line through a vertex.
///
/// Vertices are compared with edges through the exact orientation test.
/// Edges touching the sweep vertex are compared with each other by their
/// direction from it and with other edges through the sweep vertex itself.
/// Remaining edge pairs fall back on their y-intercept.
#[derive(Debug, Clone, Copy)]
pub struct SweepLine<'a> {
  tri: &'a Triangulator,
  at: VertexId,
}

impl<'a> SweepLine<'a> {
  pub fn new(tri: &'a Triangulator, at: VertexId) -> SweepLine<'a> {
    SweepLine { tri, at }
  }

  pub fn position(&self) -> VertexId {
    self.at
  }

  pub fn cmp(&self, a: SweepKey, b: SweepKey) -> Ordering {
    match (a, b) {
      (SweepKey::Vertex(u), SweepKey::Vertex(v)) => {
        self.tri.vertices[u].cmp_inverted(&self.tri.vertices[v])
      }
      (SweepKey::Vertex(v), SweepKey::Edge(e)) => self.cmp_vertex_edge(v, e),
      (SweepKey::Edge(e), SweepKey::Vertex(v)) => self.cmp_vertex_edge(v, e).reverse(),
      (SweepKey::Edge(e), SweepKey::Edge(f)) => self.cmp_edges(e, f),
    }
  }

  fn cmp_vertex_edge(&self, v: VertexId, e: EdgeId) -> Ordering {
    let view = self.tri.edge_view(e);
    view.cmp_point(self.tri.vertices[v].array())
  }

  fn cmp_edges(&self, e: EdgeId, f: EdgeId) -> Ordering {
    if e == f {
      return Ordering::Equal;
    }
    let ev = self.tri.edge_view(e);
    let fv = self.tri.edge_view(f);
    match (ev.edge.has_endpoint(self.at), fv.edge.has_endpoint(self.at)) {
      (true, true) => ev.cmp_at(&fv, self.at),
      (true, false) => self.cmp_vertex_edge(self.at, f),
      (false, true) => self.cmp_vertex_edge(self.at, e).reverse(),
      (false, false) => {
        let sweep = &self.tri.vertices[self.at];
        let (x, y) = (sweep.x(), sweep.y());
        ev.y_at(x, y)
          .total_cmp(&fv.y_at(x, y))
          .then_with(|| match ev.edge.shared_endpoint(fv.edge) {
            Some(w) => ev.cmp_at(&fv, w),
            None => e.cmp(&f),
          })
      }
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Status

/// Edges crossing the sweep line, bottom to top, with the vertices waiting
/// in the gaps between them.
#[derive(Debug, Default)]
pub(crate) struct Status {
  active: Vec<EdgeId>,
  // Vertex waiting in the gap directly below an edge.
  hanging: HashMap<EdgeId, VertexId>,
  // Vertex waiting above every edge.
  top: Option<VertexId>,
}

impl Status {
  pub(crate) fn new() -> Status {
    Status::default()
  }

  pub(crate) fn len(&self) -> usize {
    self.active.len()
  }

  pub(crate) fn edges(&self) -> &[EdgeId] {
    &self.active
  }

  /// Remove an edge, returning the vertex that was waiting below it.
  pub(crate) fn remove(&mut self, e: EdgeId) -> Option<VertexId> {
    if let Some(idx) = self.active.iter().position(|&cand| cand == e) {
      self.active.remove(idx);
    }
    self.hanging.remove(&e)
  }

  pub(crate) fn insert(&mut self, line: &SweepLine<'_>, e: EdgeId) {
    let idx = self
      .active
      .partition_point(|&other| line.cmp(SweepKey::Edge(other), SweepKey::Edge(e)).is_lt());
    self.active.insert(idx, e);
  }

  /// The lowest edge above the sweep vertex.
  pub(crate) fn edge_above(&self, line: &SweepLine<'_>) -> Option<EdgeId> {
    let v = SweepKey::Vertex(line.position());
    let idx = self
      .active
      .partition_point(|&e| line.cmp(SweepKey::Edge(e), v).is_lt());
    self.active.get(idx).copied()
  }

  /// Take the vertex waiting in the gap below `above`, or above everything.
  pub(crate) fn take_hanging(&mut self, above: Option<EdgeId>) -> Option<VertexId> {
    match above {
      Some(e) => self.hanging.remove(&e),
      None => self.top.take(),
    }
  }

  pub(crate) fn set_hanging(&mut self, above: Option<EdgeId>, v: VertexId) {
    match above {
      Some(e) => {
        self.hanging.insert(e, v);
      }
      None => self.top = Some(v),
    }
  }
}

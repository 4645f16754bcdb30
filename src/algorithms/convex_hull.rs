use log::debug;

use crate::data::VertexId;
use crate::{Orientation, Triangulator};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

impl Triangulator {
  /// $O(n)$ Convex hull over the x-ordered vertex index.
  ///
  /// Returns the hull vertices in counter-clockwise order, starting at the
  /// leftmost vertex. Hull edges missing from the graph are added as
  /// synthetic edges; those whose endpoints share a polygon are remembered as
  /// pocket candidates.
  ///
  /// # Properties
  /// * Colinear points on the boundary stay on the hull, so no hull edge runs
  ///   through a vertex.
  /// * Fewer than two vertices yield an empty hull.
  /// * If every vertex is colinear, the middle vertices appear twice, once
  ///   per chain.
  pub fn compute_convex_hull(&mut self) -> Vec<VertexId> {
    let order: Vec<VertexId> = self.index.values().copied().collect();
    if order.len() < 2 {
      return Vec::new();
    }
    let mut lower = self.hull_chain(order.iter().copied());
    let mut upper = self.hull_chain(order.iter().rev().copied());

    for pair in lower.windows(2).chain(upper.windows(2)) {
      self.add_hull_edge(pair[0], pair[1]);
    }

    // Both chains end where the other begins.
    lower.pop();
    upper.pop();
    lower.append(&mut upper);
    debug!(
      "convex hull: {} vertices, {} pocket candidates",
      lower.len(),
      self.pocket_edges.len()
    );
    lower
  }

  // Counter-clockwise chain over `pts`, popping only on strict clockwise
  // turns.
  fn hull_chain(&self, pts: impl Iterator<Item = VertexId>) -> Vec<VertexId> {
    let epsilon = self.settings.epsilon;
    let mut chain: Vec<VertexId> = Vec::new();
    for p in pts {
      while let &[.., a, b] = &chain[..] {
        let turn = Orientation::with_epsilon(
          self.vertices[a].array(),
          self.vertices[b].array(),
          self.vertices[p].array(),
          epsilon,
        );
        if !turn.is_cw() {
          break;
        }
        chain.pop();
      }
      chain.push(p);
    }
    chain
  }

  fn add_hull_edge(&mut self, a: VertexId, b: VertexId) {
    if self.find_edge(a, b).is_some() {
      return;
    }
    let e = self.insert_synthetic_edge(a, b);
    if self.vertices[a].shares_polygon(&self.vertices[b]) {
      self.pocket_edges.push(e);
    }
  }
}

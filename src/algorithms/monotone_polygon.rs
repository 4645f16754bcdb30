// https://en.wikipedia.org/wiki/Monotone_polygon
use std::cmp::Ordering;

use log::{debug, error, trace};

use crate::data::{EdgeId, VertexId};
use crate::{Orientation, Triangulator};

/// Which boundary chain of an x-monotone polygon a vertex sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
  Upper,
  Lower,
}

// Upper and lower boundary of a monotone region. Both run left to right and
// share their first and last vertex.
type Region = (Vec<VertexId>, Vec<VertexId>);

impl Triangulator {
  /// Triangulate the strips between every pair of adjacent chains. Returns
  /// the number of triangles created.
  pub fn triangulate_chain_set(&mut self) -> usize {
    let paths: Vec<Vec<VertexId>> = self
      .chains
      .iter()
      .map(|chain| self.chain_vertices(chain))
      .collect();
    let mut regions = 0;
    let mut triangles = 0;
    for pair in paths.windows(2) {
      for (upper, lower) in self.chain_regions(&pair[0], &pair[1]) {
        regions += 1;
        triangles += self.triangulate_monotone_polygon(&upper, &lower);
      }
    }
    debug!("{} monotone regions, {} triangles", regions, triangles);
    triangles
  }

  fn chain_vertices(&self, chain: &[EdgeId]) -> Vec<VertexId> {
    let Some(&first) = chain.first() else {
      return Vec::new();
    };
    let mut path = vec![self.edges[first].v1];
    path.extend(chain.iter().map(|&e| self.edges[e].v2));
    path
  }

  // Walk two chains in lockstep. Stretches where they use the same edges
  // enclose nothing; everywhere else they bound a monotone region that
  // closes at the next vertex both chains pass through.
  fn chain_regions(&self, upper: &[VertexId], lower: &[VertexId]) -> Vec<Region> {
    let mut regions = Vec::new();
    if upper.len() < 2 || upper.first() != lower.first() || upper.last() != lower.last() {
      error!("chains do not share their end points: {:?} {:?}", upper, lower);
      return regions;
    }
    let (mut i, mut j) = (0, 0);
    while i + 1 < upper.len() {
      if upper[i + 1] == lower[j + 1] {
        i += 1;
        j += 1;
        continue;
      }
      let mut top = vec![upper[i]];
      let mut bottom = vec![lower[j]];
      i += 1;
      j += 1;
      top.push(upper[i]);
      bottom.push(lower[j]);
      while upper[i] != lower[j] {
        if self.vertices[upper[i]].cmp_xy(&self.vertices[lower[j]]) == Ordering::Less {
          i += 1;
          top.push(upper[i]);
        } else {
          j += 1;
          bottom.push(lower[j]);
        }
      }
      trace!("region {:?} / {:?}", top, bottom);
      regions.push((top, bottom));
    }
    regions
  }

  /// Triangulate the x-monotone polygon bounded by `upper` and `lower`, both
  /// listed left to right from the same first vertex to the same last
  /// vertex. Returns the number of triangles created.
  ///
  /// # Properties
  /// * A region with `n` distinct vertices yields `n - 2` triangles unless
  ///   some of them are colinear.
  /// * Every boundary edge of the region ends up on a triangle.
  pub fn triangulate_monotone_polygon(&mut self, upper: &[VertexId], lower: &[VertexId]) -> usize {
    let (Some(&start), Some(&end)) = (upper.first(), upper.last()) else {
      return 0;
    };
    debug_assert_eq!(lower.first(), Some(&start));
    debug_assert_eq!(lower.last(), Some(&end));
    if upper.len() < 2 || lower.len() < 2 || upper.len() + lower.len() < 5 {
      return 0;
    }

    let mut pending: Vec<(VertexId, Side)> = upper[1..upper.len() - 1]
      .iter()
      .map(|&v| (v, Side::Upper))
      .chain(lower[1..lower.len() - 1].iter().map(|&v| (v, Side::Lower)))
      .collect();
    pending.sort_by(|a, b| self.vertices[a.0].cmp_xy(&self.vertices[b.0]));

    let mut created = 0;
    let mut stack: Vec<(VertexId, Side)> = vec![(start, pending[0].1), pending[0]];
    for &(v, side) in &pending[1..] {
      let (_, top_side) = *stack.last().expect("stack holds at least two vertices");
      if side != top_side {
        // Everything on the stack is visible from the opposite chain.
        for pair in stack.windows(2) {
          created += self.fan_triangle(pair[0].0, pair[1].0, v);
        }
        let top = *stack.last().expect("stack holds at least two vertices");
        stack.clear();
        stack.push(top);
        stack.push((v, side));
      } else {
        let mut last = stack.pop().expect("stack holds at least two vertices");
        while let Some(&(prev, _)) = stack.last() {
          if !self.is_convex(prev, last.0, v, side) {
            break;
          }
          created += self.fan_triangle(prev, last.0, v);
          last = stack.pop().expect("stack is not empty");
        }
        stack.push(last);
        stack.push((v, side));
      }
    }
    for pair in stack.windows(2) {
      created += self.fan_triangle(pair[0].0, pair[1].0, end);
    }
    created
  }

  // Whether `mid` bulges outwards on its chain, so that `prev` and `next`
  // can be joined inside the polygon.
  fn is_convex(&self, prev: VertexId, mid: VertexId, next: VertexId, side: Side) -> bool {
    let turn = Orientation::with_epsilon(
      self.vertices[prev].array(),
      self.vertices[mid].array(),
      self.vertices[next].array(),
      self.settings.epsilon,
    );
    match side {
      Side::Upper => turn.is_cw(),
      Side::Lower => turn.is_ccw(),
    }
  }

  fn fan_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) -> usize {
    usize::from(self.add_triangle(a, b, c).is_some())
  }
}

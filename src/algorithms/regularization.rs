use log::{debug, trace};

use super::sweep::{Status, SweepLine};
use crate::data::{EdgeId, VertexId};
use crate::Triangulator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
  LeftToRight,
  RightToLeft,
}

impl Triangulator {
  /// Add synthetic edges until every vertex except the leftmost and the
  /// rightmost one has at least one edge on either side. Returns the number
  /// of edges added.
  pub fn regularize(&mut self) -> usize {
    self.sweep_left_right() + self.sweep_right_left()
  }

  /// Give every vertex but the rightmost an edge leaving it to the right.
  pub fn sweep_left_right(&mut self) -> usize {
    self.regularization_sweep(Direction::LeftToRight)
  }

  /// Give every vertex but the leftmost an edge arriving from the left.
  pub fn sweep_right_left(&mut self) -> usize {
    self.regularization_sweep(Direction::RightToLeft)
  }

  // Vertices without an edge ahead wait in the gap of the status they sit in.
  // The next vertex to show up in that gap, or the vertex closing it, is
  // visible from the waiting one and gets connected to it.
  fn regularization_sweep(&mut self, direction: Direction) -> usize {
    let mut order: Vec<VertexId> = self.index.values().copied().collect();
    if direction == Direction::RightToLeft {
      order.reverse();
    }
    let mut status = Status::new();
    let mut added = 0;

    for v in order {
      let (behind, ahead): (Vec<EdgeId>, Vec<EdgeId>) = match direction {
        Direction::LeftToRight => (self.edges_in[v.0].clone(), self.edges_out[v.0].clone()),
        Direction::RightToLeft => (self.edges_out[v.0].clone(), self.edges_in[v.0].clone()),
      };

      for e in behind {
        if let Some(h) = status.remove(e) {
          self.connect(h, v, &mut added);
        }
      }

      let above = status.edge_above(&SweepLine::new(self, v));
      if let Some(h) = status.take_hanging(above) {
        self.connect(h, v, &mut added);
      }

      if ahead.is_empty() {
        status.set_hanging(above, v);
      } else {
        let line = SweepLine::new(self, v);
        for e in ahead {
          status.insert(&line, e);
        }
      }
      trace!("sweep {:?} at {:?}: {:?}", direction, v, status.edges());
    }
    debug_assert_eq!(status.len(), 0);
    debug!("regularization {:?}: {} edges added", direction, added);
    added
  }

  fn connect(&mut self, h: VertexId, v: VertexId, added: &mut usize) {
    if self.find_edge(h, v).is_none() {
      self.insert_synthetic_edge(h, v);
      *added += 1;
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::data::{Boundary, Point};
  use crate::testing::*;
  use crate::Triangulator;

  use claims::assert_ok;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn is_regular(tri: &Triangulator) -> bool {
    let order: Vec<_> = tri.vertices().map(|v| v.id()).collect();
    if order.len() < 3 {
      return true;
    }
    order[1..order.len() - 1]
      .iter()
      .all(|&v| !tri.edges_in(v).is_empty() && !tri.edges_out(v).is_empty())
  }

  #[test]
  fn split_and_merge_vertices() {
    // Dart pointing right: the notch vertex has no edge leaving it to the
    // right until it is connected to the tip.
    let mut tri = Triangulator::new();
    let arrow = Boundary::closed(vec![
      Point::new([0., 0.]),
      Point::new([6., 3.]),
      Point::new([0., 6.]),
      Point::new([2., 3.]),
    ]);
    assert_eq!(tri.add_polygon("arrow", &arrow), 4);
    tri.compute_convex_hull();
    assert!(!is_regular(&tri));
    let added = tri.regularize();
    assert_eq!(added, 1);
    assert!(is_regular(&tri));
    let notch = tri.find_vertex([2., 3.]).unwrap();
    let tip = tri.find_vertex([6., 3.]).unwrap();
    let connector = tri.find_edge(notch, tip).unwrap();
    assert!(tri.edge(connector).unwrap().is_synthetic());
  }

  #[test]
  fn isolated_vertices() {
    let mut tri = Triangulator::new();
    for pt in [[0., 0.], [4., 4.], [4., 0.], [2., 1.], [2., 3.], [3., 2.]] {
      assert_ok!(tri.add_vertex(pt, None));
    }
    tri.compute_convex_hull();
    tri.regularize();
    assert!(is_regular(&tri));
  }

  #[test]
  fn vertical_edges() {
    let mut tri = Triangulator::new();
    assert_ok!(tri.add_edge([1., 0.], [1., 5.], Some("wall")));
    assert_ok!(tri.add_edge([3., 1.], [3., 4.], Some("wall")));
    assert_ok!(tri.add_vertex([2., 2.], None));
    assert_ok!(tri.add_vertex([0., 2.], None));
    assert_ok!(tri.add_vertex([4., 2.], None));
    tri.compute_convex_hull();
    tri.regularize();
    assert!(is_regular(&tri));
  }

  #[proptest]
  fn point_sets_become_regular(#[strategy(grid_points(3..40))] pts: Vec<[f64; 2]>) {
    let mut tri = Triangulator::new();
    for pt in &pts {
      prop_assert!(tri.add_vertex(*pt, None).is_ok());
    }
    tri.compute_convex_hull();
    tri.regularize();
    prop_assert!(is_regular(&tri));
  }

  #[proptest]
  fn polygons_become_regular(#[strategy(star_polygon(3..25))] boundary: Boundary) {
    let mut tri = Triangulator::new();
    tri.add_polygon("star", &boundary);
    prop_assert_eq!(tri.error_count(), 0);
    tri.compute_convex_hull();
    tri.regularize();
    prop_assert!(is_regular(&tri));
  }
}

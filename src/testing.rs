// This module contains strategies for:
//  * point sets on a small integer grid
//  * star-shaped polygons
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Boundary, Point};
use crate::Orientation;

use core::ops::Range;
use proptest::collection::vec;
use proptest::prelude::*;
use std::f64::consts::TAU;

// Grid coordinates keep every orientation test exact and every area a
// multiple of one half, so areas can be compared with `==`.
const GRID: Range<i32> = -50..50;

/// Point sets on an integer grid. Repeated points are likely and collapse
/// into one vertex on insertion.
pub fn grid_points(len: Range<usize>) -> impl Strategy<Value = Vec<[f64; 2]>> {
  vec((GRID, GRID), len).prop_map(|pts| {
    pts
      .into_iter()
      .map(|(x, y)| [f64::from(x), f64::from(y)])
      .collect()
  })
}

/// Simple polygons that are star-shaped around the origin.
///
/// Vertex `i` of `n` sits at an angle in `[i, i + 0.45) * TAU / n`, so
/// consecutive angles are less than half a turn apart and the boundary never
/// crosses itself.
pub fn star_polygon(len: Range<usize>) -> impl Strategy<Value = Boundary> {
  len
    .prop_flat_map(|n| vec((0.0..0.45f64, 1.0..100.0f64), n))
    .prop_map(|spokes| {
      let step = TAU / spokes.len() as f64;
      spokes
        .iter()
        .enumerate()
        .map(|(i, &(jitter, radius))| {
          let angle = (i as f64 + jitter) * step;
          Point::new([radius * angle.cos(), radius * angle.sin()])
        })
        .collect()
    })
}

pub fn all_colinear(pts: &[[f64; 2]]) -> bool {
  let Some(first) = pts.first() else {
    return true;
  };
  let Some(second) = pts.iter().find(|pt| *pt != first) else {
    return true;
  };
  pts
    .iter()
    .all(|pt| Orientation::new(first, second, pt).is_colinear())
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_strategy::proptest;

  #[test]
  fn colinear_detection() {
    assert!(all_colinear(&[]));
    assert!(all_colinear(&[[1., 1.], [1., 1.]]));
    assert!(all_colinear(&[[0., 0.], [1., 1.], [5., 5.]]));
    assert!(!all_colinear(&[[0., 0.], [1., 1.], [5., 4.]]));
  }

  #[proptest]
  fn star_polygons_are_ccw(#[strategy(star_polygon(3..20))] boundary: Boundary) {
    prop_assert!(boundary.signed_area_2x() > 0.0);
  }
}

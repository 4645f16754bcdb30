use std::ops::RangeInclusive;

use super::Point;
use crate::orientation::continues_straight;
use crate::Orientation;

/// How two segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentIntersection {
  /// Same endpoints.
  Duplicate,
  /// The interiors cross in a single point.
  Crossing,
  /// An endpoint of one segment lies in the interior of the other.
  Touching,
  /// The segments are colinear and share more than a point.
  Overlap,
}

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Undirected segment between two points, stored with `min <= max` in
/// lexicographic `(x, y)` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
  pub min: Point,
  pub max: Point,
}

impl LineSegment {
  pub fn new(a: Point, b: Point) -> LineSegment {
    if a.cmp_xy(&b).is_le() {
      LineSegment { min: a, max: b }
    } else {
      LineSegment { min: b, max: a }
    }
  }

  pub fn is_degenerate(&self) -> bool {
    self.min == self.max
  }

  /// True if `pt` lies on the segment strictly between its endpoints.
  pub fn contains_interior(&self, pt: &Point) -> bool {
    Point::orientation(&self.min, &self.max, pt).is_colinear()
      && self.min.cmp_xy(pt).is_lt()
      && pt.cmp_xy(&self.max).is_lt()
  }

  /// Classify how two segments meet. `None` means they are disjoint or merely
  /// abut at a common endpoint.
  ///
  /// ```rust
  /// # use pslg_triangulate::data::{LineSegment, SegmentIntersection};
  /// let a = LineSegment::from((0., 0.)..=(2., 2.));
  /// let b = LineSegment::from((0., 2.)..=(2., 0.));
  /// let c = LineSegment::from((2., 2.)..=(3., 0.));
  /// assert_eq!(a.intersect(&b), Some(SegmentIntersection::Crossing));
  /// assert_eq!(a.intersect(&c), None);
  /// ```
  pub fn intersect(&self, other: &LineSegment) -> Option<SegmentIntersection> {
    let (p1, p2) = (&self.min.array, &self.max.array);
    let (q1, q2) = (&other.min.array, &other.max.array);
    if p1 == q1 && p2 == q2 {
      return Some(SegmentIntersection::Duplicate);
    }

    // Shared endpoint `w`, far ends `p` and `q`.
    let shared = if p1 == q1 {
      Some((p1, p2, q2))
    } else if p1 == q2 {
      Some((p1, p2, q1))
    } else if p2 == q1 {
      Some((p2, p1, q2))
    } else if p2 == q2 {
      Some((p2, p1, q1))
    } else {
      None
    };
    if let Some((w, p, q)) = shared {
      return if Orientation::new(w, p, q).is_colinear() && !continues_straight(p, w, q) {
        Some(SegmentIntersection::Overlap)
      } else {
        None
      };
    }

    let o1 = Orientation::new(p1, p2, q1);
    let o2 = Orientation::new(p1, p2, q2);
    let o3 = Orientation::new(q1, q2, p1);
    let o4 = Orientation::new(q1, q2, p2);

    let touching = self.contains_interior(&other.min)
      || self.contains_interior(&other.max)
      || other.contains_interior(&self.min)
      || other.contains_interior(&self.max);

    if o1.is_colinear() && o2.is_colinear() {
      return if touching {
        Some(SegmentIntersection::Overlap)
      } else {
        None
      };
    }

    if o1.reverse() == o2 && !o1.is_colinear() && o3.reverse() == o4 && !o3.is_colinear() {
      return Some(SegmentIntersection::Crossing);
    }

    if touching {
      Some(SegmentIntersection::Touching)
    } else {
      None
    }
  }
}

impl From<RangeInclusive<Point>> for LineSegment {
  fn from(range: RangeInclusive<Point>) -> LineSegment {
    let (start, end) = range.into_inner();
    LineSegment::new(start, end)
  }
}

impl From<RangeInclusive<(f64, f64)>> for LineSegment {
  fn from(range: RangeInclusive<(f64, f64)>) -> LineSegment {
    let (start, end) = range.into_inner();
    LineSegment::new(start.into(), end.into())
  }
}

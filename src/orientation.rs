use std::cmp::Ordering;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign is computed exactly with the adaptive predicates of
  /// `geometry_predicates`, so the answer is never corrupted by rounding.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use pslg_triangulate::Orientation;
  /// let p1 = [0., 0.];
  /// let p2 = [0., 1.]; // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &[0., 2.]).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &[-1., 2.]).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &[1., 2.]).is_cw());
  /// ```
  pub fn new(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2]) -> Orientation {
    Orientation::from_determinant(geometry_predicates::predicates::orient2d(*p1, *p2, *p3), 0.0)
  }

  /// Like [`Orientation::new`] but triples whose cross product is within
  /// `epsilon` of zero count as colinear.
  ///
  /// A colinear triple is "no turn" whether `p3` continues in the direction
  /// of `p1 -> p2` or doubles back over it.
  pub fn with_epsilon(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2], epsilon: f64) -> Orientation {
    Orientation::from_determinant(
      geometry_predicates::predicates::orient2d(*p1, *p2, *p3),
      epsilon,
    )
  }

  fn from_determinant(det: f64, epsilon: f64) -> Orientation {
    if det > epsilon {
      CounterClockWise
    } else if det < -epsilon {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }

  /// Map a turn onto an ordering: counter-clockwise is `Less`.
  pub fn ccw_ordering(self) -> Ordering {
    match self {
      CounterClockWise => Ordering::Less,
      ClockWise => Ordering::Greater,
      CoLinear => Ordering::Equal,
    }
  }
}

/// Whether the walk `p1 -> p2 -> p3` keeps heading forward, i.e. the scalar
/// product of `p1 - p2` and `p3 - p2` is negative. For a colinear triple this
/// separates going straight on from folding back over `p1 -> p2`.
pub fn continues_straight(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2]) -> bool {
  let dot = (p1[0] - p2[0]) * (p3[0] - p2[0]) + (p1[1] - p2[1]) * (p3[1] - p2[1]);
  dot < 0.0
}

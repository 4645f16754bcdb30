use super::{LineSegment, Point};

/// Polygonal boundary handed to [`Triangulator::add_polygon`].
///
/// A closed boundary has an implicit edge from the last point back to the
/// first one.
///
/// [`Triangulator::add_polygon`]: crate::Triangulator::add_polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
  pub points: Vec<Point>,
  pub closed: bool,
}

impl Boundary {
  pub fn closed(points: Vec<Point>) -> Boundary {
    Boundary {
      points,
      closed: true,
    }
  }

  pub fn open(points: Vec<Point>) -> Boundary {
    Boundary {
      points,
      closed: false,
    }
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// Boundary segments in traversal order.
  pub fn iter_segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
    let n = self.points.len();
    let count = match (self.closed, n) {
      (_, 0) | (_, 1) => 0,
      (true, 2) => 1,
      (true, _) => n,
      (false, _) => n - 1,
    };
    (0..count).map(move |i| LineSegment::new(self.points[i], self.points[(i + 1) % n]))
  }

  /// Twice the signed area enclosed by the boundary (shoelace formula).
  /// Positive for counter-clockwise boundaries. Open boundaries are closed
  /// implicitly.
  pub fn signed_area_2x(&self) -> f64 {
    let n = self.points.len();
    (0..n)
      .map(|i| {
        let p = &self.points[i];
        let q = &self.points[(i + 1) % n];
        p.x_coord() * q.y_coord() - q.x_coord() * p.y_coord()
      })
      .sum()
  }
}

impl FromIterator<Point> for Boundary {
  fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Boundary {
    Boundary::closed(iter.into_iter().collect())
  }
}

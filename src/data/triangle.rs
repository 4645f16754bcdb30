use super::{EdgeId, Point, PointLocation, VertexId};
use crate::{Error, Orientation};
use claims::debug_assert_ok;
use num_traits::*;

/// A triangle of the output mesh.
///
/// `vertices` are counter-clockwise and `edges[i]` joins `vertices[i]` to
/// `vertices[(i + 1) % 3]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
  pub(crate) vertices: [VertexId; 3],
  pub(crate) edges: [EdgeId; 3],
}

impl Triangle {
  pub fn vertices(&self) -> [VertexId; 3] {
    self.vertices
  }

  pub fn edges(&self) -> [EdgeId; 3] {
    self.edges
  }

  pub fn has_vertex(&self, v: VertexId) -> bool {
    self.vertices.contains(&v)
  }

  pub fn has_edge(&self, e: EdgeId) -> bool {
    self.edges.contains(&e)
  }
}

/// Borrowed coordinates of a triangle.
#[derive(Debug, Clone, Copy)]
pub struct TriangleView<'a>([&'a Point; 3]);

impl<'a> TriangleView<'a> {
  // O(1)
  pub fn new(pts: [&'a Point; 3]) -> TriangleView<'a> {
    let triangle = TriangleView(pts);
    debug_assert_ok!(triangle.validate());
    triangle
  }

  pub fn new_unchecked(pts: [&'a Point; 3]) -> TriangleView<'a> {
    TriangleView(pts)
  }

  pub fn points(&self) -> [&'a Point; 3] {
    self.0
  }

  // O(1)
  pub fn validate(&self) -> Result<(), Error> {
    if self.orientation() != Orientation::CounterClockWise {
      Err(Error::ClockWiseViolation)
    } else {
      Ok(())
    }
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    a.orientation(b, c)
  }

  // O(1)
  pub fn locate(&self, pt: &Point) -> PointLocation {
    use Orientation::*;
    debug_assert_ok!(self.validate());
    let [a, b, c] = self.0;
    let ab = a.orientation(b, pt);
    let bc = b.orientation(c, pt);
    let ca = c.orientation(a, pt);
    if ab == ClockWise || bc == ClockWise || ca == ClockWise {
      PointLocation::Outside
    } else if ab == CoLinear || bc == CoLinear || ca == CoLinear {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  pub fn centroid(&self) -> Point {
    let [a, b, c] = self.0;
    Point::new([
      (a.x_coord() + b.x_coord() + c.x_coord()) / 3.0,
      (a.y_coord() + b.y_coord() + c.y_coord()) / 3.0,
    ])
  }

  /// Signed area in `F`. Use `f64` for speed or an exact type such as
  /// `num_rational::BigRational` to sum areas without rounding.
  pub fn signed_area<F>(&self) -> F
  where
    F: NumOps<F, F> + FromPrimitive + Clone,
  {
    self.signed_area_2x::<F>() / F::from_usize(2).unwrap()
  }

  pub fn signed_area_2x<F>(&self) -> F
  where
    F: NumOps<F, F> + FromPrimitive + Clone,
  {
    let coord = |v: f64| F::from_f64(v).unwrap_or_else(|| panic!("coordinate {} is not finite", v));
    let [a, b, c] = self.0;
    let ax = coord(a.x_coord());
    let ay = coord(a.y_coord());
    let bx = coord(b.x_coord());
    let by = coord(b.y_coord());
    let cx = coord(c.x_coord());
    let cy = coord(c.y_coord());
    ax.clone() * by.clone() - bx.clone() * ay.clone() + bx * cy.clone() - cx.clone() * by + cx * ay
      - ax * cy
    // x1*y2 - x2*y1 +
    // x2*y3 - x3*y2 +
    // x3*y1 - x1*y3
  }
}

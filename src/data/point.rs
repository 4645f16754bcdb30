use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Index;

use crate::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  /// Point with both coordinates rounded to `digits` decimal digits.
  /// Coordinates too large to carry that many digits are already rounded and
  /// come back unchanged.
  ///
  /// ```rust
  /// # use pslg_triangulate::data::Point;
  /// let p = Point::rounded([0.12345, 9.87654], 2);
  /// assert_eq!(p, Point::new([0.12, 9.88]));
  /// ```
  pub fn rounded(array: [f64; 2], digits: u32) -> Point {
    let scale = 10f64.powi(digits as i32);
    Point {
      array: array_init(|i| {
        let scaled = array[i] * scale;
        if scaled.is_finite() {
          scaled.round() / scale
        } else {
          array[i]
        }
      }),
    }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }

  /// Lexicographic `(x, y)` order.
  pub fn cmp_xy(&self, other: &Point) -> Ordering {
    crate::cmp_xy(&self.array, &other.array)
  }

  /// Lexicographic `(y, x)` order.
  pub fn cmp_yx(&self, other: &Point) -> Ordering {
    self.array[1]
      .total_cmp(&other.array[1])
      .then_with(|| self.array[0].total_cmp(&other.array[0]))
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  // Collapse -0.0 into 0.0 so that total orders agree with `==`.
  pub(crate) fn normalized(self) -> Point {
    Point {
      array: array_init(|i| self.array[i] + 0.0),
    }
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point { array }
  }
}

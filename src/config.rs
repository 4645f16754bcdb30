/// Knobs of a [`Triangulator`](crate::Triangulator).
///
/// ```rust
/// # use pslg_triangulate::{Settings, Triangulator};
/// let settings = Settings::default().with_snap_digits(3).with_remove_holes(false);
/// let tri = Triangulator::with_settings(settings);
/// assert_eq!(tri.settings().snap_digits, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
  /// Cross products within this distance of zero are treated as colinear by
  /// the hull and the monotone triangulation.
  pub epsilon: f64,
  /// Round incoming coordinates to this many decimal digits so that nearly
  /// identical points collapse into one vertex.
  pub snap_digits: Option<u32>,
  pub remove_pockets: bool,
  pub remove_holes: bool,
}

impl Default for Settings {
  fn default() -> Settings {
    Settings {
      epsilon: 1e-14,
      snap_digits: None,
      remove_pockets: true,
      remove_holes: true,
    }
  }
}

impl Settings {
  #[must_use]
  pub fn with_epsilon(mut self, epsilon: f64) -> Settings {
    self.epsilon = epsilon;
    self
  }

  #[must_use]
  pub fn with_snap_digits(mut self, digits: u32) -> Settings {
    self.snap_digits = Some(digits);
    self
  }

  #[must_use]
  pub fn with_remove_pockets(mut self, remove: bool) -> Settings {
    self.remove_pockets = remove;
    self
  }

  #[must_use]
  pub fn with_remove_holes(mut self, remove: bool) -> Settings {
    self.remove_holes = remove;
    self
  }
}

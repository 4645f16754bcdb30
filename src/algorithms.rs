//! Stages of the triangulation pipeline.
//!
//! Each stage is an inherent method on [`Triangulator`](crate::Triangulator)
//! and can be run on its own:
//!
//! 1. [`compute_convex_hull`](crate::Triangulator::compute_convex_hull)
//! 2. [`regularize`](crate::Triangulator::regularize)
//! 3. [`construct_chain_set`](crate::Triangulator::construct_chain_set)
//! 4. [`triangulate_chain_set`](crate::Triangulator::triangulate_chain_set)
//! 5. [`remove_pocket_triangles`](crate::Triangulator::remove_pocket_triangles)
//!    and [`remove_hole_triangles`](crate::Triangulator::remove_hole_triangles)
mod chains;
mod convex_hull;
mod monotone_polygon;
mod pockets;
mod regularization;
mod sweep;

pub use monotone_polygon::Side;
pub use sweep::{SweepKey, SweepLine};

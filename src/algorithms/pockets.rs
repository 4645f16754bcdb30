use std::collections::{BTreeSet, HashSet, VecDeque};

use log::{debug, trace};

use crate::data::{LineSegment, Point, TriangleId};
use crate::{Orientation, Triangulator};

impl Triangulator {
  /// Remove the triangles that fill the convex hull outside a polygon.
  ///
  /// Starting from every pocket candidate, triangles are flooded across
  /// synthetic edges. If the flood only ever runs into the edges of a single
  /// polygon, it sits in a dent of that polygon and is removed. Floods that
  /// meet two or more polygons, or none, are kept.
  ///
  /// Returns the number of triangles removed.
  pub fn remove_pocket_triangles(&mut self) -> usize {
    let candidates = std::mem::take(&mut self.pocket_edges);
    let mut removed = 0;
    for &e in &candidates {
      let Some(start) = self.edges.get(e).and_then(|edge| edge.neighbours().next()) else {
        continue;
      };
      let (region, names) = self.flood(start);
      trace!("pocket flood from {:?}: {} triangles, {:?}", e, region.len(), names);
      if names.len() == 1 {
        removed += region.len();
        for t in region {
          self.remove_triangle(t);
        }
      }
    }
    self.pocket_edges = candidates;
    self.pocket_edges.retain(|&e| self.edges.contains(e));
    debug!("removed {} pocket triangles", removed);
    removed
  }

  /// Remove regions nested inside an even, non-zero number of closed
  /// polygons. A polygon drawn inside another one cuts a hole into it; a
  /// polygon inside that hole is solid again.
  ///
  /// Nesting is decided against each polygon's boundary as it was added, so
  /// polygons sharing an edge are counted correctly even though the graph
  /// holds that edge only once.
  ///
  /// Returns the number of triangles removed.
  pub fn remove_hole_triangles(&mut self) -> usize {
    if self.outlines.len() < 2 {
      return 0;
    }

    let mut seen: HashSet<TriangleId> = HashSet::new();
    let mut holes: Vec<TriangleId> = Vec::new();
    for start in self.triangles.ids() {
      if seen.contains(&start) {
        continue;
      }
      let (region, _) = self.flood(start);
      seen.extend(region.iter().copied());
      let probe = self.view(&self.triangles[start]).centroid();
      let depth = self
        .outlines
        .values()
        .filter(|segments| crossings(segments, &probe) % 2 == 1)
        .count();
      trace!("region at {:?}: {} triangles, depth {}", probe, region.len(), depth);
      if depth >= 2 && depth % 2 == 0 {
        holes.extend(region);
      }
    }

    let removed = holes.len();
    for t in holes {
      self.remove_triangle(t);
    }
    debug!("removed {} hole triangles", removed);
    removed
  }

  // Triangles reachable from `start` without crossing an input edge, and the
  // names of the polygons whose edges bound them.
  fn flood(&self, start: TriangleId) -> (Vec<TriangleId>, BTreeSet<&str>) {
    let mut region = Vec::new();
    let mut names = BTreeSet::new();
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(t) = queue.pop_front() {
      region.push(t);
      for e in self.triangles[t].edges {
        let edge = &self.edges[e];
        if !edge.is_synthetic() {
          names.extend(edge.polygon());
          continue;
        }
        for next in edge.neighbours() {
          if visited.insert(next) {
            queue.push_back(next);
          }
        }
      }
    }
    (region, names)
  }
}

// Number of segments crossed by the ray running from `probe` towards +x.
// Each segment counts for the half-open y-range [low, high) so that a ray
// through a shared vertex is counted once.
fn crossings(segments: &[LineSegment], probe: &Point) -> usize {
  segments
    .iter()
    .filter(|segment| {
      let (a, b) = (&segment.min, &segment.max);
      let (low, high) = if a.y_coord() <= b.y_coord() { (a, b) } else { (b, a) };
      low.y_coord() <= probe.y_coord()
        && probe.y_coord() < high.y_coord()
        && Orientation::new(&low.array, &high.array, &probe.array).is_ccw()
    })
    .count()
}

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use log::{debug, error, trace, warn};
use num_traits::{FromPrimitive, NumOps, Zero};
use ordered_float::OrderedFloat;

use crate::data::{
  Boundary, Edge, EdgeId, EdgeView, LineSegment, Point, SegmentIntersection, Triangle, TriangleId,
  TriangleView, Vertex, VertexId,
};
use crate::utils::Arena;
use crate::{Error, Orientation, Settings};

type VertexKey = (OrderedFloat<f64>, OrderedFloat<f64>);

fn vertex_key(pt: &Point) -> VertexKey {
  (OrderedFloat(pt.x_coord()), OrderedFloat(pt.y_coord()))
}

// Endpoint lookup is keyed on the unordered pair of vertex handles.
pub(crate) fn edge_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
  if a < b {
    (a, b)
  } else {
    (b, a)
  }
}

/// Constrained triangulation of a planar straight-line graph.
///
/// Boundaries are fed in with [`add_edge`](Triangulator::add_edge) or
/// [`add_polygon`](Triangulator::add_polygon) and
/// [`compute_intermediate_area`](Triangulator::compute_intermediate_area)
/// triangulates the convex hull of all vertices, keeping every input edge.
///
/// Rejected input is not fatal: the offending edge is dropped, a warning is
/// logged and [`error_count`](Triangulator::error_count) goes up.
#[derive(Debug, Clone, Default)]
pub struct Triangulator {
  pub(crate) settings: Settings,
  pub(crate) index: BTreeMap<VertexKey, VertexId>,
  pub(crate) vertices: Arena<VertexId, Vertex>,
  pub(crate) edges: Arena<EdgeId, Edge>,
  pub(crate) triangles: Arena<TriangleId, Triangle>,
  // Per vertex, sorted top to bottom.
  pub(crate) edges_in: Vec<Vec<EdgeId>>,
  pub(crate) edges_out: Vec<Vec<EdgeId>>,
  pub(crate) lookup: HashMap<(VertexId, VertexId), EdgeId>,
  pub(crate) chains: Vec<Vec<EdgeId>>,
  pub(crate) pocket_edges: Vec<EdgeId>,
  // Every segment of each closed polygon as drawn, shared or rejected ones
  // included. Hole detection casts its rays against these.
  pub(crate) outlines: BTreeMap<String, Vec<LineSegment>>,
  pub(crate) error_count: usize,
  // Set once synthetic edges or triangles exist.
  pub(crate) derived: bool,
}

impl Triangulator {
  pub fn new() -> Triangulator {
    Triangulator::default()
  }

  pub fn with_settings(settings: Settings) -> Triangulator {
    Triangulator {
      settings,
      ..Triangulator::default()
    }
  }

  pub fn settings(&self) -> &Settings {
    &self.settings
  }

  /// Forget every vertex, edge and triangle. Handles start counting from zero
  /// again; the settings are kept.
  pub fn reset(&mut self) {
    *self = Triangulator::with_settings(self.settings);
  }

  ///////////////////////////////////////////////////////////////////////////
  // Ingestion

  /// Add an isolated vertex, or tag an existing one with `polygon`.
  ///
  /// # Errors
  /// * [`Error::NonFiniteCoordinate`] for NaN or infinite coordinates.
  /// * [`Error::VertexOnEdge`] if a new vertex would sit in the interior of an
  ///   existing edge.
  pub fn add_vertex(&mut self, point: impl Into<Point>, polygon: Option<&str>) -> Result<VertexId, Error> {
    let point = self.ingest_point(point.into())?;
    self.clear_derived();
    if let Some(&id) = self.index.get(&vertex_key(&point)) {
      self.tag_vertex(id, polygon);
      return Ok(id);
    }
    let host = self
      .edges
      .ids()
      .find(|&id| self.edge_view(id).contains_interior(&point));
    if let Some(id) = host {
      return Err(self.reject(Error::VertexOnEdge, format_args!("{:?} lies on {:?}", point, id)));
    }
    Ok(self.insert_vertex(point, polygon))
  }

  /// Add an edge between two points, creating the endpoints as needed.
  ///
  /// # Errors
  /// * [`Error::DegenerateEdge`] if the endpoints coincide. The vertex is kept
  ///   and the error is not counted.
  /// * [`Error::DuplicateEdge`] if the edge already exists.
  /// * [`Error::CrossingEdge`] if it crosses, touches or overlaps an existing
  ///   edge.
  /// * [`Error::VertexOnEdge`] if it runs through an existing vertex.
  /// * [`Error::NonFiniteCoordinate`] for NaN or infinite coordinates.
  pub fn add_edge(
    &mut self,
    p1: impl Into<Point>,
    p2: impl Into<Point>,
    polygon: Option<&str>,
  ) -> Result<EdgeId, Error> {
    let p1 = self.ingest_point(p1.into())?;
    let p2 = self.ingest_point(p2.into())?;
    if p1 == p2 {
      self.add_vertex(p1, polygon)?;
      return Err(Error::DegenerateEdge);
    }
    self.clear_derived();

    let segment = LineSegment::new(p1, p2);
    let conflict = self.edges.ids().find_map(|id| {
      let kind = self.edge_view(id).segment().intersect(&segment)?;
      Some((id, kind))
    });
    match conflict {
      None => {}
      Some((id, SegmentIntersection::Duplicate)) => {
        return Err(self.reject(Error::DuplicateEdge, format_args!("{:?} repeats {:?}", segment, id)));
      }
      Some((id, kind)) => {
        return Err(self.reject(
          Error::CrossingEdge,
          format_args!("{:?} {:?} with {:?}", segment, kind, id),
        ));
      }
    }
    let range = vertex_key(&segment.min)..=vertex_key(&segment.max);
    let covered = self
      .index
      .range(range)
      .map(|(_, &id)| id)
      .find(|&id| segment.contains_interior(self.vertices[id].point()));
    if let Some(id) = covered {
      return Err(self.reject(Error::VertexOnEdge, format_args!("{:?} runs through {:?}", segment, id)));
    }

    let a = self.insert_vertex(p1, polygon);
    let b = self.insert_vertex(p2, polygon);
    let edge = Edge::new(&self.vertices[a], &self.vertices[b], polygon.map(str::to_string));
    Ok(self.insert_edge(edge))
  }

  pub fn add_segment(&mut self, segment: &LineSegment, polygon: Option<&str>) -> Result<EdgeId, Error> {
    self.add_edge(segment.min, segment.max, polygon)
  }

  /// Add every segment of `boundary` under the polygon `name` and return the
  /// number of edges that were accepted. Rejected segments are skipped.
  ///
  /// Closed boundaries with at least three points take part in hole
  /// detection.
  pub fn add_polygon(&mut self, name: &str, boundary: &Boundary) -> usize {
    if boundary.len() == 1 {
      let _ = self.add_vertex(boundary.points[0], Some(name));
      return 0;
    }
    let accepted = boundary
      .iter_segments()
      .filter(|segment| self.add_segment(segment, Some(name)).is_ok())
      .count();
    if boundary.closed && boundary.len() >= 3 {
      self.record_outline(name, boundary);
    }
    debug!(
      "polygon {:?}: {} of {} edges accepted",
      name,
      accepted,
      boundary.iter_segments().count()
    );
    accepted
  }

  fn record_outline(&mut self, name: &str, boundary: &Boundary) {
    let segments: Vec<LineSegment> = boundary
      .iter_segments()
      .map(|segment| LineSegment::new(self.snap(segment.min), self.snap(segment.max)))
      .filter(|segment| {
        !segment.is_degenerate() && segment.min.is_finite() && segment.max.is_finite()
      })
      .collect();
    let outline = self.outlines.entry(name.to_string()).or_default();
    for segment in segments {
      if !outline.contains(&segment) {
        outline.push(segment);
      }
    }
  }

  fn snap(&self, point: Point) -> Point {
    match self.settings.snap_digits {
      Some(digits) => Point::rounded(point.array, digits).normalized(),
      None => point.normalized(),
    }
  }

  fn ingest_point(&mut self, point: Point) -> Result<Point, Error> {
    let snapped = self.snap(point);
    if !snapped.is_finite() {
      return Err(self.reject(Error::NonFiniteCoordinate, format_args!("{:?}", point)));
    }
    Ok(snapped)
  }

  fn reject(&mut self, err: Error, context: std::fmt::Arguments<'_>) -> Error {
    self.error_count += 1;
    warn!("rejected input: {}: {}", err, context);
    err
  }

  fn tag_vertex(&mut self, id: VertexId, polygon: Option<&str>) {
    if let Some(name) = polygon {
      self.vertices[id].belongs_to.insert(name.to_string());
    }
  }

  // No validation: callers have checked the point against the graph.
  fn insert_vertex(&mut self, point: Point, polygon: Option<&str>) -> VertexId {
    let key = vertex_key(&point);
    let id = match self.index.get(&key) {
      Some(&id) => id,
      None => {
        let id = self.vertices.push(Vertex::new(VertexId(self.vertices.capacity()), point));
        debug_assert_eq!(self.vertices[id].id, id);
        self.index.insert(key, id);
        self.edges_in.push(Vec::new());
        self.edges_out.push(Vec::new());
        id
      }
    };
    self.tag_vertex(id, polygon);
    id
  }

  ///////////////////////////////////////////////////////////////////////////
  // Edge and triangle bookkeeping

  pub(crate) fn insert_edge(&mut self, edge: Edge) -> EdgeId {
    let (v1, v2) = (edge.v1, edge.v2);
    if edge.is_synthetic() {
      self.derived = true;
    }
    let id = self.edges.push(edge);
    self.lookup.insert(edge_key(v1, v2), id);
    let pos = self.angular_position(&self.edges_out[v1.0], id, v1);
    self.edges_out[v1.0].insert(pos, id);
    let pos = self.angular_position(&self.edges_in[v2.0], id, v2);
    self.edges_in[v2.0].insert(pos, id);
    id
  }

  // Callers make sure the edge is not there yet.
  pub(crate) fn insert_synthetic_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
    debug_assert!(self.find_edge(a, b).is_none());
    let edge = Edge::synthetic(&self.vertices[a], &self.vertices[b]);
    self.insert_edge(edge)
  }

  // Index in a top-to-bottom list at which `edge` belongs.
  fn angular_position(&self, list: &[EdgeId], edge: EdgeId, at: VertexId) -> usize {
    let new = self.edge_view(edge);
    list.partition_point(|&other| self.edge_view(other).cmp_at(&new, at) == Ordering::Greater)
  }

  pub(crate) fn synthetic_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
    match self.find_edge(a, b) {
      Some(id) => id,
      None => self.insert_synthetic_edge(a, b),
    }
  }

  pub(crate) fn delete_edge(&mut self, id: EdgeId) {
    if let Some(edge) = self.edges.remove(id) {
      self.lookup.remove(&edge_key(edge.v1, edge.v2));
      self.edges_out[edge.v1.0].retain(|&e| e != id);
      self.edges_in[edge.v2.0].retain(|&e| e != id);
    }
  }

  /// Add the triangle `a b c`, reordering it counter-clockwise. Missing edges
  /// are created as synthetic edges. Colinear triples are skipped.
  pub(crate) fn add_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) -> Option<TriangleId> {
    let mut vertices = [a, b, c];
    match Orientation::new(
      self.vertices[a].array(),
      self.vertices[b].array(),
      self.vertices[c].array(),
    ) {
      Orientation::CounterClockWise => {}
      Orientation::ClockWise => vertices.swap(1, 2),
      Orientation::CoLinear => {
        trace!("skipping flat triangle {:?}", vertices);
        return None;
      }
    }
    let edges = [
      self.synthetic_edge(vertices[0], vertices[1]),
      self.synthetic_edge(vertices[1], vertices[2]),
      self.synthetic_edge(vertices[2], vertices[0]),
    ];
    let id = self.triangles.push(Triangle { vertices, edges });
    self.derived = true;
    for e in edges {
      if !self.edges[e].add_neighbour(id) {
        error!("{:?} already has two neighbouring triangles, dropping {:?}", e, id);
        debug_assert!(false, "third triangle on {:?}", e);
      }
    }
    Some(id)
  }

  /// Remove a triangle. Synthetic edges left without neighbours go with it.
  pub(crate) fn remove_triangle(&mut self, id: TriangleId) {
    let Some(triangle) = self.triangles.remove(id) else {
      return;
    };
    for e in triangle.edges {
      let Some(edge) = self.edges.get_mut(e) else {
        continue;
      };
      edge.remove_neighbour(id);
      if edge.is_synthetic() && edge.neighbour_count() == 0 {
        self.delete_edge(e);
      }
    }
  }

  /// Drop everything computed from the input: synthetic edges, triangles,
  /// chains and pocket candidates. Edge weights go back to one.
  pub(crate) fn clear_derived(&mut self) {
    if !self.derived {
      return;
    }
    let synthetic: Vec<EdgeId> = self
      .edges
      .iter()
      .filter(|(_, edge)| edge.is_synthetic())
      .map(|(id, _)| id)
      .collect();
    for id in synthetic {
      self.delete_edge(id);
    }
    for (_, edge) in self.edges.iter_mut() {
      edge.weight = 1;
      edge.neighbours = [None, None];
    }
    self.triangles.clear();
    self.chains.clear();
    self.pocket_edges.clear();
    self.derived = false;
  }

  ///////////////////////////////////////////////////////////////////////////
  // Pipeline

  /// Triangulate the convex hull of the input and cut away pockets and holes
  /// as configured. Any earlier result is discarded first.
  pub fn compute_intermediate_area(&mut self) {
    self.clear_derived();
    if self.vertices.len() < 3 {
      debug!("{} vertices, nothing to triangulate", self.vertices.len());
      return;
    }
    self.compute_convex_hull();
    self.constrained_triangulation();
    if self.settings.remove_pockets {
      self.remove_pocket_triangles();
    }
    if self.settings.remove_holes {
      self.remove_hole_triangles();
    }
    debug!(
      "triangulation done: {} vertices, {} edges, {} triangles",
      self.vertices.len(),
      self.edges.len(),
      self.triangles.len()
    );
  }

  /// Regularize the graph, split it into monotone strips and triangulate
  /// them. Expects the convex hull edges to be present.
  pub fn constrained_triangulation(&mut self) {
    self.regularize();
    self.construct_chain_set();
    self.triangulate_chain_set();
  }

  ///////////////////////////////////////////////////////////////////////////
  // Queries

  /// Vertices in x-order.
  pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
    self.index.values().map(move |&id| &self.vertices[id])
  }

  pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
    self.edges.iter()
  }

  pub fn triangles(&self) -> impl Iterator<Item = (TriangleId, &Triangle)> + '_ {
    self.triangles.iter()
  }

  pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
    self.vertices.get(id)
  }

  pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
    self.edges.get(id)
  }

  pub fn triangle(&self, id: TriangleId) -> Option<&Triangle> {
    self.triangles.get(id)
  }

  /// Edge between two vertices, in either direction.
  pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
    self.lookup.get(&edge_key(a, b)).copied()
  }

  /// Vertex at exactly these coordinates.
  pub fn find_vertex(&self, point: impl Into<Point>) -> Option<VertexId> {
    let point: Point = point.into();
    self.index.get(&vertex_key(&point.normalized())).copied()
  }

  /// Edges leaving `v` towards the right, topmost first.
  pub fn edges_out(&self, v: VertexId) -> &[EdgeId] {
    &self.edges_out[v.0]
  }

  /// Edges arriving at `v` from the left, topmost first.
  pub fn edges_in(&self, v: VertexId) -> &[EdgeId] {
    &self.edges_in[v.0]
  }

  /// Monotone chains from the last run, top to bottom.
  pub fn chains(&self) -> &[Vec<EdgeId>] {
    &self.chains
  }

  /// Synthetic hull edges that may close off a pocket.
  pub fn pocket_edges(&self) -> &[EdgeId] {
    &self.pocket_edges
  }

  /// # Panics
  /// Panics if `id` is not a live edge.
  pub fn edge_view(&self, id: EdgeId) -> EdgeView<'_> {
    let edge = &self.edges[id];
    EdgeView {
      id,
      edge,
      min: &self.vertices[edge.v1],
      max: &self.vertices[edge.v2],
    }
  }

  pub fn view(&self, triangle: &Triangle) -> TriangleView<'_> {
    let [a, b, c] = triangle.vertices;
    TriangleView::new([
      self.vertices[a].point(),
      self.vertices[b].point(),
      self.vertices[c].point(),
    ])
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  /// Number of rejected inputs since the last [`reset`](Triangulator::reset).
  pub fn error_count(&self) -> usize {
    self.error_count
  }

  /// Total area covered by triangles.
  pub fn area(&self) -> f64 {
    self.area_as::<f64>()
  }

  /// Total area covered by triangles, summed in `F`.
  ///
  /// ```rust
  /// # use pslg_triangulate::Triangulator;
  /// # use pslg_triangulate::data::{Boundary, Point};
  /// use num_rational::BigRational;
  /// let mut tri = Triangulator::new();
  /// let triangle: Boundary = [[0.1, 0.1], [0.7, 0.2], [0.3, 0.9]]
  ///   .into_iter()
  ///   .map(Point::new)
  ///   .collect();
  /// tri.add_polygon("t", &triangle);
  /// tri.compute_intermediate_area();
  /// let exact: BigRational = tri.area_as();
  /// let (_, triangle) = tri.triangles().next().unwrap();
  /// assert_eq!(exact, tri.view(triangle).signed_area::<BigRational>());
  /// ```
  pub fn area_as<F>(&self) -> F
  where
    F: NumOps<F, F> + FromPrimitive + Clone + Zero,
  {
    self
      .triangles
      .iter()
      .fold(F::zero(), |acc, (_, t)| acc + self.view(t).signed_area::<F>())
  }
}

mod triangulation {
  use pslg_triangulate::data::*;
  use pslg_triangulate::*;

  use claims::{assert_err_eq, assert_ok, assert_some};
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn boundary(pts: &[[f64; 2]]) -> Boundary {
    pts.iter().copied().map(Point::new).collect()
  }

  fn has_triangle(tri: &Triangulator, corners: [[f64; 2]; 3]) -> bool {
    let ids: Vec<VertexId> = corners.iter().filter_map(|&pt| tri.find_vertex(pt)).collect();
    ids.len() == 3 && tri.triangles().any(|(_, t)| ids.iter().all(|&v| t.has_vertex(v)))
  }

  // Closure, adjacency and winding.
  fn check_mesh(tri: &Triangulator) {
    for (id, edge) in tri.edges() {
      assert!(edge.neighbour_count() <= 2, "{:?}", id);
      // Colinear input leaves the hull edges without triangles.
      if edge.is_synthetic() && tri.triangle_count() > 0 {
        assert!(edge.neighbour_count() >= 1, "dangling {:?}", id);
      }
      for t in edge.neighbours() {
        assert!(assert_some!(tri.triangle(t)).has_edge(id));
      }
    }
    for (id, t) in tri.triangles() {
      assert_ok!(tri.view(t).validate(), "{:?}", id);
      let [a, b, c] = t.vertices();
      let [ab, bc, ca] = t.edges();
      assert_eq!(tri.find_edge(a, b), Some(ab));
      assert_eq!(tri.find_edge(b, c), Some(bc));
      assert_eq!(tri.find_edge(c, a), Some(ca));
    }
  }

  #[test]
  fn single_triangle() {
    let mut tri = Triangulator::new();
    let corners = [[0., 0.], [4., 1.], [1., 3.]];
    assert_eq!(tri.add_polygon("t", &boundary(&corners)), 3);
    tri.compute_intermediate_area();
    assert_eq!(tri.triangle_count(), 1);
    assert_eq!(tri.edge_count(), 3);
    assert!(has_triangle(&tri, corners));
    assert_eq!(tri.remove_pocket_triangles(), 0);
    check_mesh(&tri);
  }

  #[test]
  fn square_with_triangular_hole() {
    let mut tri = Triangulator::new();
    let hole = [[3., 3.], [7., 3.], [5., 7.]];
    tri.add_polygon("outer", &boundary(&[[0., 0.], [10., 0.], [10., 10.], [0., 10.]]));
    tri.add_polygon("hole", &boundary(&hole));
    tri.compute_intermediate_area();
    check_mesh(&tri);

    assert!(!has_triangle(&tri, hole));
    assert_eq!(tri.area(), 92.);
    let rim: Vec<LineSegment> = boundary(&hole).iter_segments().collect();
    for (id, _) in tri.edges() {
      let segment = tri.edge_view(id).segment();
      for side in &rim {
        assert_ne!(segment.intersect(side), Some(SegmentIntersection::Crossing));
      }
    }
    for side in &rim {
      let a = assert_some!(tri.find_vertex(side.min));
      let b = assert_some!(tri.find_vertex(side.max));
      let e = assert_some!(tri.find_edge(a, b));
      assert_eq!(tri.edge(e).unwrap().polygon(), Some("hole"));
    }
  }

  #[test]
  fn two_distant_triangles() {
    let mut tri = Triangulator::new();
    let left = [[0., 0.], [2., 0.], [1., 2.]];
    let right = [[10., 0.], [12., 0.], [11., 2.]];
    tri.add_polygon("left", &boundary(&left));
    tri.add_polygon("right", &boundary(&right));
    tri.compute_intermediate_area();
    check_mesh(&tri);
    assert!(has_triangle(&tri, left));
    assert!(has_triangle(&tri, right));
    // Two bridge triangles fill the gap.
    assert_eq!(tri.triangle_count(), 4);
    assert_eq!(tri.area(), 22.);
  }

  #[test]
  fn dart_loses_its_pocket() {
    let dart = boundary(&[[0., 0.], [6., 3.], [0., 6.], [2., 3.]]);
    let mut tri = Triangulator::new();
    tri.add_polygon("dart", &dart);
    tri.compute_intermediate_area();
    check_mesh(&tri);
    assert_eq!(tri.area(), 12.);
    assert_eq!(tri.area() * 2., dart.signed_area_2x().abs());

    let mut kept = Triangulator::with_settings(Settings::default().with_remove_pockets(false));
    kept.add_polygon("dart", &dart);
    kept.compute_intermediate_area();
    assert_eq!(kept.area(), 18.);
  }

  #[test]
  fn ingestion_is_idempotent() {
    let mut tri = Triangulator::new();
    let room = boundary(&[[0., 0.], [4., 0.], [4., 4.], [0., 4.]]);
    assert_eq!(tri.add_polygon("room", &room), 4);
    assert_eq!(tri.add_polygon("room", &room), 0);
    assert_eq!(tri.edge_count(), 4);
    assert_eq!(tri.vertex_count(), 4);
    assert_eq!(tri.error_count(), 4);
    assert_err_eq!(tri.add_edge([0., 4.], [0., 0.], None), Error::DuplicateEdge);
    assert_eq!(tri.error_count(), 5);
  }

  #[test]
  fn unnamed_input_edges_are_kept() {
    let mut tri = Triangulator::new();
    assert_ok!(tri.add_edge([0., 0.], [4., 4.], None));
    for pt in [[4., 0.], [0., 4.]] {
      assert_ok!(tri.add_vertex(pt, None));
    }
    tri.compute_intermediate_area();
    tri.compute_intermediate_area();
    assert_eq!(tri.triangle_count(), 2);
    let a = assert_some!(tri.find_vertex([0., 0.]));
    let b = assert_some!(tri.find_vertex([4., 4.]));
    let diagonal = assert_some!(tri.find_edge(a, b));
    assert!(!tri.edge(diagonal).unwrap().is_synthetic());
    check_mesh(&tri);
  }

  #[test]
  fn rerun_and_reset() {
    let mut tri = Triangulator::new();
    tri.add_polygon("a", &boundary(&[[0., 0.], [5., 1.], [3., 4.]]));
    tri.add_polygon("b", &boundary(&[[6., 0.], [9., 2.], [7., 5.]]));
    tri.compute_intermediate_area();
    let first: Vec<[VertexId; 3]> = tri.triangles().map(|(_, t)| t.vertices()).collect();
    let area = tri.area();
    tri.compute_intermediate_area();
    let second: Vec<[VertexId; 3]> = tri.triangles().map(|(_, t)| t.vertices()).collect();
    assert_eq!(first, second);
    assert_eq!(tri.area(), area);

    tri.reset();
    assert_eq!(tri.vertex_count(), 0);
    assert_eq!(tri.edge_count(), 0);
    assert_eq!(tri.triangle_count(), 0);
    tri.compute_intermediate_area();
    assert_eq!(tri.triangle_count(), 0);
  }

  #[test]
  fn pipeline_stages_by_hand() {
    let mut tri = Triangulator::new();
    tri.add_polygon("room", &boundary(&[[0., 0.], [4., 0.], [4., 4.], [2., 1.], [0., 4.]]));
    let hull = tri.compute_convex_hull();
    assert_eq!(hull.len(), 4);
    tri.regularize();
    assert!(tri.construct_chain_set() >= 2);
    assert_eq!(tri.triangulate_chain_set(), 4);
    assert_eq!(tri.remove_pocket_triangles(), 1);
    assert_eq!(tri.remove_hole_triangles(), 0);
    assert_eq!(tri.area(), 10.);
  }

  // Twice the hull area of integer points by gift wrapping.
  fn hull_area_2x(pts: &[(i32, i32)]) -> i64 {
    let mut pts: Vec<(i64, i64)> = pts.iter().map(|&(x, y)| (i64::from(x), i64::from(y))).collect();
    pts.sort_unstable();
    pts.dedup();
    if pts.len() < 3 {
      return 0;
    }
    let cross = |o: (i64, i64), a: (i64, i64), b: (i64, i64)| {
      (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
    };
    let dist = |a: (i64, i64), b: (i64, i64)| (a.0 - b.0).abs() + (a.1 - b.1).abs();
    let start = pts[0];
    let mut hull = vec![start];
    let mut current = start;
    loop {
      let mut next = pts[1];
      for &cand in &pts {
        let turn = cross(current, next, cand);
        if next == current || turn < 0 || (turn == 0 && dist(current, cand) > dist(current, next)) {
          next = cand;
        }
      }
      if next == start {
        break;
      }
      hull.push(next);
      current = next;
    }
    (0..hull.len())
      .map(|i| {
        let (p, q) = (hull[i], hull[(i + 1) % hull.len()]);
        p.0 * q.1 - q.0 * p.1
      })
      .sum()
  }

  #[proptest]
  fn point_sets_fill_their_hull(
    #[strategy(proptest::collection::vec((-50i32..50, -50i32..50), 3..60))] pts: Vec<(i32, i32)>,
  ) {
    let mut tri = Triangulator::new();
    for &(x, y) in &pts {
      prop_assert!(tri.add_vertex([f64::from(x), f64::from(y)], None).is_ok());
    }
    tri.compute_intermediate_area();
    check_mesh(&tri);
    let area_2x = hull_area_2x(&pts);
    prop_assert_eq!(tri.area() * 2., area_2x as f64);
    if area_2x > 0 {
      // Euler: V - E + (T + 1) = 2
      prop_assert_eq!(tri.triangle_count() + tri.vertex_count(), tri.edge_count() + 1);
    } else {
      prop_assert_eq!(tri.triangle_count(), 0);
    }
  }

  #[proptest]
  fn constrained_graphs_fill_their_hull(
    #[strategy(proptest::collection::vec(
      ((-20i32..20, -20i32..20), (-20i32..20, -20i32..20), 0usize..4),
      1..30
    ))]
    segments: Vec<((i32, i32), (i32, i32), usize)>,
  ) {
    // The last slot leaves the segment unnamed.
    const NAMES: [&str; 3] = ["north", "south", "east"];
    let settings = Settings::default()
      .with_remove_pockets(false)
      .with_remove_holes(false);
    let mut tri = Triangulator::with_settings(settings);
    for &((x1, y1), (x2, y2), name) in &segments {
      let p1 = [f64::from(x1), f64::from(y1)];
      let p2 = [f64::from(x2), f64::from(y2)];
      let _ = tri.add_edge(p1, p2, NAMES.get(name).copied());
    }
    tri.compute_intermediate_area();
    check_mesh(&tri);

    let pts: Vec<(i32, i32)> = tri
      .vertices()
      .map(|v| (v.point().x_coord() as i32, v.point().y_coord() as i32))
      .collect();
    let area_2x = hull_area_2x(&pts);
    prop_assert_eq!(tri.area() * 2., area_2x as f64);
    if area_2x > 0 {
      prop_assert_eq!(tri.triangle_count() + tri.vertex_count(), tri.edge_count() + 1);
      for (id, edge) in tri.edges() {
        prop_assert!(edge.neighbour_count() >= 1, "{:?} has no triangle", id);
      }
    } else {
      prop_assert_eq!(tri.triangle_count(), 0);
    }
  }

  #[test]
  fn rooms_sharing_walls_keep_their_floor() {
    let mut tri = Triangulator::new();
    tri.add_polygon("hall", &boundary(&[[0., 0.], [6., 0.], [6., 2.], [3., 2.], [0., 2.]]));
    tri.add_polygon("west", &boundary(&[[0., 2.], [3., 2.], [3., 5.], [0., 5.]]));
    tri.add_polygon("east", &boundary(&[[3., 2.], [6., 2.], [6., 5.], [3., 5.]]));
    // Each shared wall is held by the first room that claimed it.
    assert_eq!(tri.error_count(), 3);
    tri.compute_intermediate_area();
    check_mesh(&tri);
    assert_eq!(tri.area(), 30.);
  }

  #[proptest]
  fn star_polygons_are_triangulated_exactly(
    #[strategy(3usize..40)] n: usize,
    #[strategy(proptest::collection::vec((0.0..0.45f64, 1.0..100.0f64), #n))] spokes: Vec<(f64, f64)>,
  ) {
    let step = std::f64::consts::TAU / n as f64;
    let star: Boundary = spokes
      .iter()
      .enumerate()
      .map(|(i, &(jitter, radius))| {
        let angle = (i as f64 + jitter) * step;
        Point::new([radius * angle.cos(), radius * angle.sin()])
      })
      .collect();
    let mut tri = Triangulator::new();
    prop_assert_eq!(tri.add_polygon("star", &star), n);
    tri.compute_intermediate_area();
    check_mesh(&tri);
    prop_assert_eq!(tri.triangle_count(), n - 2);
    let expected = star.signed_area_2x() / 2.;
    prop_assert!((tri.area() - expected).abs() <= 1e-9 * expected);
    for segment in star.iter_segments() {
      let a = tri.find_vertex(segment.min).unwrap();
      let b = tri.find_vertex(segment.max).unwrap();
      let e = tri.find_edge(a, b).unwrap();
      prop_assert_eq!(tri.edge(e).unwrap().neighbour_count(), 1);
    }
  }
}

use super::*;
use crate::walk::sample_direction;
use nalgebra::{dmatrix, dvector, DMatrix};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_point<R: Rng>(dim: usize, half_width: f64, rng: &mut R) -> Point {
    Point::from_fn(dim, |_, _| rng.gen_range(-half_width..half_width))
}

#[test]
fn ball_membership_matches_squared_distance() {
    let mut rng = StdRng::seed_from_u64(7);
    let ball = Ball::new(dvector![0.5, -1.0, 2.0], 2.25).unwrap();
    for _ in 0..500 {
        let p = random_point(3, 3.0, &mut rng);
        let d2 = (&p - ball.center()).norm_squared();
        assert_eq!(ball.is_in(&p), d2 <= 2.25);
    }
    assert!((ball.radius() - 1.5).abs() < 1e-12);
}

#[test]
fn ball_rejects_negative_radius() {
    assert!(matches!(
        Ball::new(dvector![0.0, 0.0], -1.0),
        Err(BodyError::InvalidParam { .. })
    ));
    assert!(Ball::new(dvector![0.0, 0.0], 0.0).is_ok());
}

#[test]
fn zero_dimensional_bodies_rejected() {
    // Walks cannot draw a direction or an axis in R^0.
    assert!(matches!(
        Ball::new(Point::zeros(0), 1.0),
        Err(BodyError::InvalidParam { .. })
    ));
    assert!(Ball::centered(0, 1.0).is_err());
    assert!(matches!(
        Ellipsoid::new(Point::zeros(0), DMatrix::zeros(0, 0)),
        Err(BodyError::InvalidParam { .. })
    ));
    assert!(Ellipsoid::from_semi_axes(Point::zeros(0), &[]).is_err());
    assert!(HPolytope::new(DMatrix::zeros(1, 0), dvector![1.0]).is_err());
}

#[test]
fn ball_chord_endpoints_lie_on_sphere() {
    let mut rng = StdRng::seed_from_u64(11);
    let c = dvector![1.0, 2.0, -0.5, 0.0];
    let ball = Ball::new(c.clone(), 4.0).unwrap();
    for _ in 0..200 {
        let r = &c + random_point(4, 0.9, &mut rng);
        let v = sample_direction(4, &mut rng) * rng.gen_range(0.5..3.0);
        let chord = ball.line_intersect(&r, &v);
        assert!(chord.entry <= 0.0 && chord.exit >= 0.0);
        for q in [chord.entry_point(&r, &v), chord.exit_point(&r, &v)] {
            assert!(((&q - &c).norm_squared() - 4.0).abs() < 1e-9);
        }
    }
}

#[test]
fn ball_coordinate_chord_matches_axis_ray() {
    let ball = Ball::new(dvector![0.0, 0.0, 0.0], 1.0).unwrap();
    let r = dvector![0.2, -0.3, 0.1];
    let mut cache = CoordCache::new(0);
    for axis in 0..3 {
        let mut e = Point::zeros(3);
        e[axis] = 1.0;
        let ray = ball.line_intersect(&r, &e);
        let coord = ball.line_intersect_coord(&r, axis, &mut cache, true);
        assert!((ray.entry - coord.entry).abs() < 1e-12);
        assert!((ray.exit - coord.exit).abs() < 1e-12);
    }
}

#[test]
fn hpoly_cube_chords_and_membership() {
    let cube = special::hypercube(3, 1.0).unwrap();
    assert_eq!(cube.dimension(), 3);
    assert_eq!(cube.num_of_hyperplanes(), 6);
    assert!(cube.is_in(&dvector![0.9, -0.9, 0.0]));
    assert!(!cube.is_in(&dvector![1.1, 0.0, 0.0]));

    let chord = cube.line_intersect(&dvector![0.5, 0.0, 0.0], &dvector![1.0, 0.0, 0.0]);
    assert!((chord.entry + 1.5).abs() < 1e-12);
    assert!((chord.exit - 0.5).abs() < 1e-12);

    // Diagonal direction: the first facet hit decides each end.
    let chord = cube.line_intersect(&dvector![0.0, 0.0, 0.0], &dvector![1.0, 2.0, 0.0]);
    assert!((chord.entry + 0.5).abs() < 1e-12);
    assert!((chord.exit - 0.5).abs() < 1e-12);
}

#[test]
fn hpoly_unbounded_direction_gives_infinite_chord() {
    // Half-plane x <= 1 in R^2.
    let half = HPolytope::new(dmatrix![1.0, 0.0], dvector![1.0]).unwrap();
    let chord = half.line_intersect(&dvector![0.0, 0.0], &dvector![0.0, 1.0]);
    assert_eq!(chord.entry, f64::NEG_INFINITY);
    assert_eq!(chord.exit, f64::INFINITY);
}

#[test]
fn hpoly_shape_mismatch_rejected() {
    let err = HPolytope::new(DMatrix::zeros(3, 2), dvector![1.0, 1.0]).unwrap_err();
    assert_eq!(err, BodyError::DimensionMismatch { expected: 3, got: 2 });
}

#[test]
fn hpoly_ray_cache_tracks_walk_moves() {
    let mut rng = StdRng::seed_from_u64(3);
    let poly = special::cross_polytope(4, 1.0).unwrap();
    let mut cache = RayCache::new(poly.num_of_hyperplanes());
    let mut r = Point::zeros(4);
    let mut last_step = 0.0;
    for _ in 0..100 {
        let v = sample_direction(4, &mut rng);
        let cached = poly.line_intersect_cached(&r, &v, &mut cache, last_step);
        let fresh = poly.line_intersect(&r, &v);
        assert!((cached.entry - fresh.entry).abs() < 1e-9);
        assert!((cached.exit - fresh.exit).abs() < 1e-9);
        last_step = cached.lerp(rng.gen::<f64>());
        r += &v * last_step;
    }
    assert!(cache.is_primed());
    cache.reset();
    assert!(!cache.is_primed());
}

#[test]
fn hpoly_coord_cache_tracks_axis_moves() {
    let mut rng = StdRng::seed_from_u64(5);
    let poly = special::simplex(3).unwrap();
    let mut cache = CoordCache::new(poly.num_of_hyperplanes());
    let mut r = dvector![0.1, 0.2, 0.3];
    for k in 0..200 {
        let axis = rng.gen_range(0..3);
        let cached = poly.line_intersect_coord(&r, axis, &mut cache, k == 0);
        let fresh = poly.query_dual(&r, axis);
        assert!((cached.entry - fresh.entry).abs() < 1e-9);
        assert!((cached.exit - fresh.exit).abs() < 1e-9);
        r[axis] += cached.lerp(rng.gen::<f64>());
        assert!(poly.is_in(&r));
    }
}

#[test]
fn hpoly_coord_init_rebuilds_after_jump() {
    let poly = special::unit_cube(2).unwrap();
    let mut cache = CoordCache::new(poly.num_of_hyperplanes());
    poly.line_intersect_coord(&dvector![0.5, 0.5], 0, &mut cache, true);
    // Jump in both coordinates: only a rebuild gives the right chord.
    let r = dvector![0.25, 0.75];
    let chord = poly.line_intersect_coord(&r, 1, &mut cache, true);
    assert!((chord.entry + 0.75).abs() < 1e-12);
    assert!((chord.exit - 0.25).abs() < 1e-12);
}

#[test]
fn ellipsoid_chords_and_membership() {
    let e = Ellipsoid::from_semi_axes(dvector![1.0, 0.0], &[2.0, 0.5]).unwrap();
    assert_eq!(e.num_of_hyperplanes(), 0);
    assert!(e.is_in(&dvector![2.9, 0.0]));
    assert!(!e.is_in(&dvector![1.0, 0.6]));
    let chord = e.line_intersect(&dvector![1.0, 0.0], &dvector![1.0, 0.0]);
    assert!((chord.entry + 2.0).abs() < 1e-12);
    assert!((chord.exit - 2.0).abs() < 1e-12);
    let coord = e.query_dual(&dvector![1.0, 0.0], 1);
    assert!((coord.entry + 0.5).abs() < 1e-12);
    assert!((coord.exit - 0.5).abs() < 1e-12);
}

#[test]
fn ellipsoid_general_shape_endpoints_on_boundary() {
    let mut rng = StdRng::seed_from_u64(19);
    let q = dmatrix![2.0, 0.5, 0.0; 0.5, 1.0, 0.2; 0.0, 0.2, 3.0];
    let c = dvector![0.0, 1.0, -1.0];
    let e = Ellipsoid::new(c.clone(), q.clone()).unwrap();
    for _ in 0..100 {
        let r = &c + random_point(3, 0.2, &mut rng);
        let v = sample_direction(3, &mut rng);
        let chord = e.line_intersect(&r, &v);
        for p in [chord.entry_point(&r, &v), chord.exit_point(&r, &v)] {
            let pc = &p - &c;
            assert!((pc.dot(&(&q * &pc)) - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn ellipsoid_rejects_indefinite_shape() {
    let res = Ellipsoid::new(dvector![0.0, 0.0], dmatrix![1.0, 0.0; 0.0, -1.0]);
    assert!(matches!(res, Err(BodyError::InvalidParam { .. })));
    let res = Ellipsoid::new(dvector![0.0, 0.0], dmatrix![1.0, 0.3; 0.0, 1.0]);
    assert!(matches!(res, Err(BodyError::InvalidParam { .. })));
}

#[test]
fn vpoly_and_zonotope_report_no_facets() {
    let tri = special::simplex_vertices(2).unwrap();
    assert_eq!(tri.dimension(), 2);
    assert_eq!(tri.num_of_hyperplanes(), 0);
    let z = special::cube_zonotope(3).unwrap();
    assert_eq!(z.dimension(), 3);
    assert_eq!(z.num_of_hyperplanes(), 0);
}

#[test]
fn vpoly_chord_through_triangle() {
    let tri = special::simplex_vertices(2).unwrap();
    let r = dvector![0.25, 0.25];
    let chord = tri.line_intersect(&r, &dvector![1.0, 0.0]);
    assert!((chord.entry + 0.25).abs() < 1e-7);
    assert!((chord.exit - 0.5).abs() < 1e-7);
    let coord = tri.query_dual(&r, 1);
    assert!((coord.entry + 0.25).abs() < 1e-7);
    assert!((coord.exit - 0.5).abs() < 1e-7);
}

#[test]
fn zonotope_chord_in_cube() {
    let z = special::cube_zonotope(2).unwrap();
    let chord = z.line_intersect(&dvector![0.5, 0.25], &dvector![0.0, 1.0]);
    assert!((chord.entry + 0.25).abs() < 1e-7);
    assert!((chord.exit - 0.75).abs() < 1e-7);
    assert!(z.is_in(&dvector![0.5, 0.5]));
    assert!(!z.is_in(&dvector![1.5, 0.5]));
}

#[test]
fn boxed_bodies_share_one_list() {
    let bodies: Vec<Box<dyn Body>> = vec![
        Box::new(Ball::centered(2, 1.0).unwrap()),
        Box::new(special::hypercube(2, 1.0).unwrap()),
        Box::new(Ellipsoid::from_semi_axes(Point::zeros(2), &[1.0, 2.0]).unwrap()),
    ];
    let origin = Point::zeros(2);
    for b in &bodies {
        assert_eq!(b.dimension(), 2);
        assert!(b.is_in(&origin));
        let chord = b.line_intersect(&origin, &dvector![1.0, 0.0]);
        assert!((chord.exit - 1.0).abs() < 1e-12);
    }
}

#[test]
fn chord_helpers() {
    let c = Chord::new(2.0, -1.0);
    assert_eq!(c, Chord { entry: -1.0, exit: 2.0 });
    assert!((c.len() - 3.0).abs() < 1e-15);
    assert_eq!(c.lerp(0.0), -1.0);
    assert!(Chord::degenerate().is_degenerate());
    let i = c.intersect(&Chord::new(0.0, 5.0));
    assert_eq!(i, Chord { entry: 0.0, exit: 2.0 });
}

//! Test support library
//! Fixtures and checks shared by the integration tests.
#![allow(dead_code)]

use brushcsg::{Polyhedron, float_types::Real};
use nalgebra::{Point3, Vector3};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn cuboid(mins: [Real; 3], maxs: [Real; 3]) -> Polyhedron<()> {
    Polyhedron::cuboid(
        Point3::new(mins[0], mins[1], mins[2]),
        Point3::new(maxs[0], maxs[1], maxs[2]),
        None,
    )
    .expect("valid box")
}

pub fn unit_cube() -> Polyhedron<()> {
    cuboid([0.0, 0.0, 0.0], [1.0, 1.0, 1.0])
}

/// Corner tetrahedron with volume 1/6.
pub fn tetrahedron() -> Polyhedron<()> {
    let positions = [
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let faces = vec![vec![0, 2, 1], vec![0, 1, 3], vec![0, 3, 2], vec![1, 2, 3]];
    Polyhedron::from_indexed_faces(&positions, &faces, None).expect("valid tetrahedron")
}

/// Regular octahedron `|x| + |y| + |z| <= radius` moved to `center`.
pub fn octahedron(center: Point3<Real>, radius: Real) -> Polyhedron<()> {
    let positions = [
        center + Vector3::new(radius, 0.0, 0.0),
        center + Vector3::new(-radius, 0.0, 0.0),
        center + Vector3::new(0.0, radius, 0.0),
        center + Vector3::new(0.0, -radius, 0.0),
        center + Vector3::new(0.0, 0.0, radius),
        center + Vector3::new(0.0, 0.0, -radius),
    ];
    // one triangle per octant, counter-clockwise from outside
    let faces = vec![
        vec![0, 2, 4],
        vec![2, 1, 4],
        vec![1, 3, 4],
        vec![3, 0, 4],
        vec![2, 0, 5],
        vec![1, 2, 5],
        vec![3, 1, 5],
        vec![0, 3, 5],
    ];
    Polyhedron::from_indexed_faces(&positions, &faces, None).expect("valid octahedron")
}

pub fn total_volume<S: Clone + Send + Sync + std::fmt::Debug>(fragments: &[Polyhedron<S>]) -> Real {
    fragments.iter().map(Polyhedron::volume).sum()
}

/// Closed, convex, Euler characteristic 2, positive volume.
pub fn assert_valid<S: Clone + Send + Sync + std::fmt::Debug>(polyhedron: &Polyhedron<S>) {
    assert!(polyhedron.is_closed(), "not closed: {polyhedron:?}");
    assert!(polyhedron.is_convex(), "not convex: {polyhedron:?}");
    let euler = polyhedron.vertex_count() as i64 - polyhedron.edge_count() as i64
        + polyhedron.face_count() as i64;
    assert_eq!(euler, 2, "bad euler characteristic: {polyhedron:?}");
    assert!(polyhedron.volume() > 0.0);
}

/// Volume shared by the interiors of two convex polyhedra.
pub fn overlap_volume<S: Clone + Send + Sync + std::fmt::Debug>(
    a: &Polyhedron<S>,
    b: &Polyhedron<S>,
) -> Real {
    a.intersection(b).map_or(0.0, |shared| shared.volume())
}

/// No two fragments share interior volume.
pub fn assert_pairwise_disjoint<S: Clone + Send + Sync + std::fmt::Debug>(
    fragments: &[Polyhedron<S>],
) {
    for (i, a) in fragments.iter().enumerate() {
        for b in &fragments[i + 1..] {
            let shared = overlap_volume(a, b);
            assert!(shared < 1e-9, "fragments overlap by {shared}");
        }
    }
}

mod support;

use approx::assert_relative_eq;
use brushcsg::{FaceId, FaceLoop, Polyhedron, PolyhedronError, float_types::Real};
use nalgebra::{Point3, Vector3};
use support::*;

fn cube_positions() -> Vec<Point3<Real>> {
    (0..8)
        .map(|i| {
            Point3::new(
                (i & 1) as Real,
                ((i >> 1) & 1) as Real,
                ((i >> 2) & 1) as Real,
            )
        })
        .collect()
}

fn cube_faces() -> Vec<Vec<usize>> {
    vec![
        vec![0, 4, 6, 2],
        vec![1, 3, 7, 5],
        vec![0, 1, 5, 4],
        vec![2, 6, 7, 3],
        vec![0, 2, 3, 1],
        vec![4, 5, 7, 6],
    ]
}

#[test]
fn cube_topology() {
    let cube = unit_cube();
    assert_eq!(cube.vertex_count(), 8);
    assert_eq!(cube.edge_count(), 12);
    assert_eq!(cube.half_edge_count(), 24);
    assert_eq!(cube.face_count(), 6);
    assert_valid(&cube);
    assert_relative_eq!(cube.volume(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(cube.centroid(), Point3::new(0.5, 0.5, 0.5), epsilon = 1e-12);

    for edge in cube.edges() {
        let (a, b) = cube.edge_vertices(edge);
        assert_relative_eq!((cube.position(b) - cube.position(a)).norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn face_cycle_visits_every_face_once() {
    let cube = unit_cube();
    let faces: Vec<FaceId> = cube.faces().collect();
    assert_eq!(faces.len(), 6);
    assert_eq!(faces[0], cube.first_face());

    let mut face = cube.first_face();
    for expected in faces.iter().cycle().skip(1).take(6) {
        face = cube.next_face(face);
        assert_eq!(face, *expected);
    }
    assert_eq!(face, cube.first_face());
}

#[test]
fn half_edges_are_consistent() {
    let cube = unit_cube();
    for face in cube.faces() {
        for h in cube.face_half_edges(face) {
            let half_edge = cube.half_edge(h);
            assert_eq!(half_edge.face, face);
            assert_eq!(cube.half_edge(half_edge.next).previous, h);
            assert_eq!(cube.half_edge(half_edge.twin).twin, h);
            assert_eq!(cube.half_edge(half_edge.twin).origin, cube.destination(h));
            assert_eq!(cube.half_edge(half_edge.twin).edge, half_edge.edge);
        }
        assert_eq!(cube.face_vertices(face).count(), 4);
    }
}

#[test]
fn face_planes_point_outwards() {
    let cube = unit_cube();
    let center = cube.centroid();
    for face in cube.faces() {
        let plane = cube.face_plane(face);
        assert!(plane.signed_distance(&center) < 0.0);
        for p in cube.face_positions(face) {
            assert_relative_eq!(plane.signed_distance(&p), 0.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn tetrahedron_volume() {
    let tetra = tetrahedron();
    assert_valid(&tetra);
    assert_eq!(tetra.edge_count(), 6);
    assert_relative_eq!(tetra.volume(), 1.0 / 6.0, epsilon = 1e-12);
    assert_relative_eq!(tetra.centroid(), Point3::new(0.25, 0.25, 0.25), epsilon = 1e-12);
}

#[test]
fn octahedron_volume() {
    let octahedron = octahedron(Point3::new(2.0, -1.0, 3.0), 1.5);
    assert_valid(&octahedron);
    assert_relative_eq!(octahedron.volume(), 4.0 / 3.0 * 1.5 * 1.5 * 1.5, epsilon = 1e-9);
}

#[test]
fn unused_vertices_are_dropped() {
    let mut positions = cube_positions();
    positions.insert(3, Point3::new(9.0, 9.0, 9.0));
    let faces: Vec<FaceLoop<()>> = cube_faces()
        .into_iter()
        .map(|face| {
            let shifted = face.into_iter().map(|i| if i >= 3 { i + 1 } else { i }).collect();
            FaceLoop::new(shifted, None)
        })
        .collect();

    let cube = Polyhedron::from_face_loops(positions, faces).unwrap();
    assert_eq!(cube.vertex_count(), 8);
    assert!(cube.positions().all(|p| p.x <= 1.0));
    assert_relative_eq!(cube.volume(), 1.0, epsilon = 1e-12);
}

#[test]
fn round_trips_through_face_loops() {
    let cube = cuboid([-1.0, 0.0, 2.0], [3.0, 1.0, 4.0]);
    let (positions, loops) = cube.to_face_loops();
    let rebuilt = Polyhedron::from_face_loops(positions, loops).unwrap();
    assert_eq!(rebuilt.face_count(), cube.face_count());
    assert_relative_eq!(rebuilt.volume(), cube.volume(), epsilon = 1e-12);
}

#[test]
fn construction_errors() {
    let positions = cube_positions();

    let mut open = cube_faces();
    open.pop();
    assert!(matches!(
        Polyhedron::<()>::from_indexed_faces(&positions, &open, None),
        Err(PolyhedronError::OpenEdge { .. })
    ));

    assert_eq!(
        Polyhedron::<()>::from_indexed_faces(&positions, &cube_faces()[..3], None).unwrap_err(),
        PolyhedronError::TooFewFaces(3)
    );

    let mut short = cube_faces();
    short[2] = vec![0, 1];
    assert_eq!(
        Polyhedron::<()>::from_indexed_faces(&positions, &short, None).unwrap_err(),
        PolyhedronError::TooFewFaceVertices { face: 2, count: 2 }
    );

    let mut out_of_range = cube_faces();
    out_of_range[0][1] = 8;
    assert_eq!(
        Polyhedron::<()>::from_indexed_faces(&positions, &out_of_range, None).unwrap_err(),
        PolyhedronError::VertexOutOfRange {
            face: 0,
            index: 8,
            count: 8
        }
    );

    let mut repeated = cube_faces();
    repeated[1] = vec![1, 3, 3, 7, 5];
    assert_eq!(
        Polyhedron::<()>::from_indexed_faces(&positions, &repeated, None).unwrap_err(),
        PolyhedronError::RepeatedVertex { face: 1, index: 3 }
    );

    let mut duplicated = cube_faces();
    duplicated.push(duplicated[0].clone());
    assert!(matches!(
        Polyhedron::<()>::from_indexed_faces(&positions, &duplicated, None),
        Err(PolyhedronError::NonManifoldEdge { .. })
    ));

    let mut invalid = positions.clone();
    invalid[5].y = Real::NAN;
    assert!(matches!(
        Polyhedron::<()>::from_indexed_faces(&invalid, &cube_faces(), None),
        Err(PolyhedronError::InvalidCoordinate(_))
    ));
}

#[test]
fn bounding_box_and_translate() {
    let cube = unit_cube().translate(Vector3::new(2.0, -3.0, 0.5));
    let aabb = cube.bounding_box();
    assert_relative_eq!(aabb.mins, Point3::new(2.0, -3.0, 0.5), epsilon = 1e-12);
    assert_relative_eq!(aabb.maxs, Point3::new(3.0, -2.0, 1.5), epsilon = 1e-12);
    assert_relative_eq!(cube.volume(), 1.0, epsilon = 1e-12);
}

#[test]
fn contains_point() {
    let cube = unit_cube();
    assert!(cube.contains_point(&Point3::new(0.5, 0.5, 0.5)));
    assert!(cube.contains_point(&Point3::new(1.0, 0.5, 0.0)));
    assert!(!cube.contains_point(&Point3::new(1.5, 0.5, 0.5)));
}

#[test]
fn face_metadata() {
    let mut cube: Polyhedron<String> = Polyhedron::cube(2.0, Some("stone".to_string())).unwrap();
    let first = cube.first_face();
    assert_eq!(cube.face_metadata(first).map(String::as_str), Some("stone"));

    if let Some(texture) = cube.face_metadata_mut(first) {
        texture.push_str("_wet");
    }
    cube.set_face_metadata(cube.next_face(first), None);

    assert_eq!(cube.face_metadata(first).map(String::as_str), Some("stone_wet"));
    assert_eq!(cube.face_metadata(cube.next_face(first)), None);
}

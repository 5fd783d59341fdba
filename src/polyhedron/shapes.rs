//! Primitive constructors.

use crate::errors::{PolyhedronError, PolyhedronResult};
use crate::float_types::{Real, tolerance};
use crate::plane::Plane;
use crate::polyhedron::{ClipResult, Polyhedron};
use nalgebra::Point3;
use std::fmt::Debug;
use tracing::trace;

// Vertex `i` of a box sits at mins or maxs along x, y, z according to bits 0, 1, 2 of `i`.
// Faces in the order -X, +X, -Y, +Y, -Z, +Z, each wound counter-clockwise from outside.
const BOX_FACES: [[usize; 4]; 6] = [
    [0, 4, 6, 2],
    [1, 3, 7, 5],
    [0, 1, 5, 4],
    [2, 6, 7, 3],
    [0, 2, 3, 1],
    [4, 5, 7, 6],
];

impl<S: Clone + Send + Sync + Debug> Polyhedron<S> {
    /// Axis-aligned box spanning `mins` to `maxs`.
    ///
    /// ## Errors
    /// [`PolyhedronError::DegenerateBounds`] when any extent is not larger than
    /// the tolerance.
    pub fn cuboid(
        mins: Point3<Real>,
        maxs: Point3<Real>,
        metadata: Option<S>,
    ) -> PolyhedronResult<Self> {
        let extent = maxs - mins;
        if extent.iter().any(|&e| !(e > tolerance())) {
            return Err(PolyhedronError::DegenerateBounds { mins, maxs });
        }

        let positions: Vec<Point3<Real>> = (0..8)
            .map(|i| {
                Point3::new(
                    if i & 1 == 0 { mins.x } else { maxs.x },
                    if i & 2 == 0 { mins.y } else { maxs.y },
                    if i & 4 == 0 { mins.z } else { maxs.z },
                )
            })
            .collect();
        let faces: Vec<Vec<usize>> = BOX_FACES.iter().map(|f| f.to_vec()).collect();
        Self::from_indexed_faces(&positions, &faces, metadata)
    }

    /// Cube with edge length `size` and one corner at the origin.
    pub fn cube(size: Real, metadata: Option<S>) -> PolyhedronResult<Self> {
        Self::cuboid(Point3::origin(), Point3::new(size, size, size), metadata)
    }

    /// Intersection of half-spaces, each given by the plane bounding it from
    /// the front and the metadata for the face it contributes.
    ///
    /// Starts from the cube `[-world_size, world_size]³`, so the half-spaces
    /// are expected to bound a solid well inside it. This is how a brush is
    /// rebuilt from its face planes.
    ///
    /// ## Errors
    /// [`PolyhedronError::EmptyIntersection`] when the half-spaces leave no volume.
    pub fn from_half_spaces(
        half_spaces: &[(Plane, Option<S>)],
        world_size: Real,
    ) -> PolyhedronResult<Self> {
        let mut polyhedron = Self::cuboid(
            Point3::new(-world_size, -world_size, -world_size),
            Point3::new(world_size, world_size, world_size),
            None,
        )?;

        for (plane, metadata) in half_spaces {
            match polyhedron.clip_with_cap(plane, metadata.clone()) {
                ClipResult::Empty => return Err(PolyhedronError::EmptyIntersection),
                ClipResult::Unchanged => {
                    // a half-space can coincide with a face an earlier one produced
                    let existing = polyhedron.faces().find(|&face| {
                        approx::relative_eq!(
                            polyhedron.face_plane(face),
                            *plane,
                            epsilon = tolerance()
                        )
                    });
                    if let (Some(face), Some(metadata)) = (existing, metadata) {
                        polyhedron.set_face_metadata(face, Some(metadata.clone()));
                    }
                },
                ClipResult::Clipped { .. } => {},
            }
        }

        trace!(
            half_spaces = half_spaces.len(),
            faces = polyhedron.face_count(),
            "built polyhedron from half-spaces"
        );
        Ok(polyhedron)
    }
}

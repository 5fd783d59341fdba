//! Clipping a polyhedron against a half-space.

use crate::float_types::{Real, tolerance};
use crate::plane::{BACK, COPLANAR, FRONT, Plane, SPANNING};
use crate::polyhedron::{FaceId, FaceLoop, Polyhedron, newell_normal};
use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;
use tracing::{trace, warn};

/// Outcome of [`Polyhedron::clip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipResult {
    /// Nothing lay in front of the plane, the polyhedron is untouched.
    Unchanged,
    /// Nothing with volume lay behind the plane. The polyhedron is left
    /// untouched and is meant to be discarded by the caller.
    Empty,
    /// The polyhedron was cut, `cap` is the face added on the plane.
    Clipped { cap: FaceId },
}

impl ClipResult {
    pub const fn is_empty(&self) -> bool {
        matches!(self, ClipResult::Empty)
    }

    pub const fn is_unchanged(&self) -> bool {
        matches!(self, ClipResult::Unchanged)
    }
}

impl<S: Clone + Send + Sync + Debug> Polyhedron<S> {
    /// Intersect with the half-space behind `plane`, in place.
    pub fn clip(&mut self, plane: &Plane) -> ClipResult {
        self.clip_with_cap(plane, None)
    }

    /// Like [`clip`](Self::clip), tagging the new cap face with `cap_metadata`.
    pub fn clip_with_cap(&mut self, plane: &Plane, cap_metadata: Option<S>) -> ClipResult {
        let epsilon = tolerance();
        let types: Vec<i8> = self
            .vertices
            .iter()
            .map(|v| plane.orient_point_with(&v.position, epsilon))
            .collect();
        let polyhedron_type = types.iter().fold(COPLANAR, |acc, &t| acc | t);

        if polyhedron_type & FRONT == 0 {
            return ClipResult::Unchanged;
        }
        if polyhedron_type & BACK == 0 {
            return ClipResult::Empty;
        }

        let mut positions: Vec<Point3<Real>> = self.positions().collect();
        // one intersection vertex per crossing edge, shared by both faces of the edge
        let mut edge_cache: HashMap<(usize, usize), usize> = HashMap::new();
        let mut loops: Vec<FaceLoop<S>> = Vec::with_capacity(self.face_count() + 1);

        for face in self.faces() {
            let ring: Vec<usize> = self.face_vertices(face).map(|v| v.0).collect();
            let mut kept = Vec::with_capacity(ring.len() + 1);

            for i in 0..ring.len() {
                let j = (i + 1) % ring.len();
                let (idx_i, idx_j) = (ring[i], ring[j]);

                if types[idx_i] != FRONT {
                    kept.push(idx_i);
                }
                if (types[idx_i] | types[idx_j]) == SPANNING {
                    let key = (idx_i.min(idx_j), idx_i.max(idx_j));
                    let intersection = *edge_cache.entry(key).or_insert_with(|| {
                        let a = positions[key.0];
                        let b = positions[key.1];
                        let t = -plane.signed_distance(&a) / plane.normal.dot(&(b - a));
                        positions.push(a + (b - a) * t);
                        positions.len() - 1
                    });
                    kept.push(intersection);
                }
            }

            // loops lying wholly on the plane are covered by the cap, tiny faces
            // behind it still close the boundary and stay
            let on_plane = kept
                .iter()
                .all(|&i| i >= types.len() || types[i] == COPLANAR);
            if kept.len() >= 3 && !on_plane {
                loops.push(FaceLoop::new(kept, self.faces[face.0].metadata.clone()));
            }
        }

        let mut cap: Vec<usize> = types
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t == COPLANAR)
            .map(|(i, _)| i)
            .collect();
        cap.extend(edge_cache.values().copied());
        order_around_normal(plane, &positions, &mut cap);

        if cap.len() < 3 || is_degenerate_loop(&positions, &cap, epsilon) {
            trace!(cap = cap.len(), "clip cap collapsed, nothing with volume behind the plane");
            return ClipResult::Empty;
        }
        loops.push(FaceLoop::new(cap, cap_metadata));
        let cap_face = FaceId(loops.len() - 1);

        match Self::from_face_loops(positions, loops) {
            Ok(clipped) if clipped.volume() > epsilon * epsilon => {
                trace!(
                    faces = clipped.face_count(),
                    vertices = clipped.vertex_count(),
                    "clipped"
                );
                *self = clipped;
                ClipResult::Clipped { cap: cap_face }
            },
            Ok(_) => {
                trace!("clip left a zero volume sliver");
                ClipResult::Empty
            },
            Err(err) => {
                warn!(%err, "clipping produced an invalid boundary, treating the result as empty");
                ClipResult::Empty
            },
        }
    }

    /// Intersection of this polyhedron with the convex `other`, or `None`
    /// when their interiors do not overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let mut result = self.clone();
        for face in other.faces() {
            if result.clip(&other.face_plane(face)).is_empty() {
                return None;
            }
        }
        Some(result)
    }
}

fn is_degenerate_loop(positions: &[Point3<Real>], indices: &[usize], epsilon: Real) -> bool {
    let points: Vec<Point3<Real>> = indices.iter().map(|&i| positions[i]).collect();
    newell_normal(&points).norm() <= epsilon * epsilon
}

/// Sort points lying on `plane` counter-clockwise around its normal.
fn order_around_normal(plane: &Plane, positions: &[Point3<Real>], indices: &mut Vec<usize>) {
    if indices.is_empty() {
        return;
    }
    let center = indices
        .iter()
        .fold(Vector3::zeros(), |acc, &i| acc + positions[i].coords)
        / indices.len() as Real;
    let (u, v) = plane.basis();

    let mut keyed: Vec<(Real, usize)> = indices
        .iter()
        .map(|&i| {
            let d = positions[i].coords - center;
            (d.dot(&v).atan2(d.dot(&u)), i)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    indices.clear();
    indices.extend(keyed.into_iter().map(|(_, i)| i));
}

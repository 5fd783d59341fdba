//! Plane extraction and the canonical order planes are clipped in.

use crate::float_types::{ANGLE_EPSILON, Real};
use crate::plane::Plane;
use crate::polyhedron::{PolyhedronCallback, Polyhedron};
use std::fmt::Debug;

/// Supporting planes of every face, one per face in face cycle order.
///
/// `callback` is asked exactly once per face. The result is a snapshot: it
/// does not follow later changes to `polyhedron`.
pub fn planes<S, C>(polyhedron: &Polyhedron<S>, callback: &C) -> Vec<Plane>
where
    S: Clone + Send + Sync + Debug,
    C: PolyhedronCallback<S> + ?Sized,
{
    debug_assert!(polyhedron.face_count() > 0, "polyhedron without faces");

    let first = polyhedron.first_face();
    let mut result = Vec::with_capacity(polyhedron.face_count());
    let mut face = first;
    loop {
        result.push(callback.plane(polyhedron, face));
        face = polyhedron.next_face(face);
        if face == first {
            break;
        }
    }
    result
}

/// Priority class of a plane in [`sort_planes`], lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PlaneBucket {
    /// Normal along ±X
    X,
    Y,
    Z,
    /// No X component, a diagonal in the YZ plane
    YZ,
    XZ,
    XY,
    Other,
}

impl PlaneBucket {
    pub const COUNT: usize = 7;

    pub fn of(plane: &Plane) -> Self {
        let n = plane.normal;
        let zero = |c: Real| c.abs() < ANGLE_EPSILON;
        let unit = |c: Real| (c.abs() - 1.0).abs() < ANGLE_EPSILON;

        if unit(n.x) {
            PlaneBucket::X
        } else if unit(n.y) {
            PlaneBucket::Y
        } else if unit(n.z) {
            PlaneBucket::Z
        } else if zero(n.x) {
            PlaneBucket::YZ
        } else if zero(n.y) {
            PlaneBucket::XZ
        } else if zero(n.z) {
            PlaneBucket::XY
        } else {
            PlaneBucket::Other
        }
    }
}

/// Reorder planes so axis-aligned ones come first, then planes parallel to one
/// axis, then everything else. Planes in the same [`PlaneBucket`] keep their
/// relative order.
pub fn sort_planes(planes: Vec<Plane>) -> Vec<Plane> {
    let count = planes.len();
    let mut buckets: [Vec<Plane>; PlaneBucket::COUNT] = Default::default();
    for plane in planes {
        buckets[PlaneBucket::of(&plane) as usize].push(plane);
    }

    let sorted: Vec<Plane> = buckets.into_iter().flatten().collect();
    debug_assert_eq!(sorted.len(), count, "sorting must not drop or duplicate planes");
    sorted
}

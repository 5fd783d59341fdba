//! Policy hooks the geometry kernel calls back into.

use crate::plane::Plane;
use crate::polyhedron::{FaceId, Polyhedron};
use std::fmt::Debug;

/// Supplies the supporting plane of a face.
///
/// Brushes in a map file carry their own face planes (three plane points per
/// face). Deriving planes through this trait keeps subtraction numerically
/// consistent with however the caller computes them, without the kernel
/// knowing about that representation.
///
/// Implementations must be deterministic and free of side effects: the same
/// face has to yield the same plane for the duration of one subtraction.
/// Any `Fn(&Polyhedron<S>, FaceId) -> Plane` closure is a callback.
pub trait PolyhedronCallback<S: Clone + Send + Sync + Debug> {
    fn plane(&self, polyhedron: &Polyhedron<S>, face: FaceId) -> Plane;
}

/// Uses the plane computed from the face's own vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultCallback;

impl<S: Clone + Send + Sync + Debug> PolyhedronCallback<S> for DefaultCallback {
    fn plane(&self, polyhedron: &Polyhedron<S>, face: FaceId) -> Plane {
        polyhedron.face_plane(face)
    }
}

impl<S, F> PolyhedronCallback<S> for F
where
    S: Clone + Send + Sync + Debug,
    F: Fn(&Polyhedron<S>, FaceId) -> Plane,
{
    fn plane(&self, polyhedron: &Polyhedron<S>, face: FaceId) -> Plane {
        self(polyhedron, face)
    }
}

//! Boolean subtraction of convex polyhedra.
//!
//! The outside of a convex subtrahend is the union of the front half-spaces of
//! its face planes. The minuend is cut by one plane at a time: whatever lies in
//! front of the current plane is outside the subtrahend and becomes a result
//! fragment, whatever lies behind it is carried on to the next plane. Pieces
//! still left after the last plane are inside the subtrahend and are dropped.
//!
//! A fragment emitted at plane `i` lies behind planes `0..i` and in front of
//! plane `i`, so no two fragments overlap.

use crate::float_types::Real;
use crate::plane::{BACK, Plane};
use crate::polyhedron::{DefaultCallback, Polyhedron, PolyhedronCallback};
use nalgebra::Point3;
use std::fmt::Debug;
use tracing::{debug, instrument, trace};

pub mod merge;
pub mod planes;

pub use merge::merge_fragments;
pub use planes::{PlaneBucket, planes, sort_planes};

impl<S: Clone + Send + Sync + Debug> Polyhedron<S> {
    /// `self` minus `subtrahend`, as disjoint convex fragments. Face planes of
    /// the subtrahend come from [`DefaultCallback`].
    pub fn subtract(&self, subtrahend: &Polyhedron<S>) -> Vec<Polyhedron<S>> {
        self.subtract_with(subtrahend, &DefaultCallback)
    }

    /// `self` minus `subtrahend`, with the subtrahend's face planes supplied
    /// by `callback`.
    ///
    /// Neither operand is modified. The fragments are pairwise interior
    /// disjoint and their union is the part of `self` outside `subtrahend`;
    /// an empty list means `self` was swallowed completely. Faces created by
    /// the cuts carry no metadata, all other faces keep the metadata of the
    /// minuend face they came from.
    #[instrument(
        level = "debug",
        skip_all,
        fields(minuend_faces = self.face_count(), subtrahend_faces = subtrahend.face_count())
    )]
    pub fn subtract_with<C>(&self, subtrahend: &Polyhedron<S>, callback: &C) -> Vec<Polyhedron<S>>
    where
        C: PolyhedronCallback<S> + ?Sized,
    {
        let planes = sort_planes(planes(subtrahend, callback));

        let positions: Vec<Point3<Real>> = self.positions().collect();
        if planes
            .iter()
            .any(|plane| plane.classify_points(&positions) & BACK == 0)
        {
            debug!("minuend lies in front of a subtrahend plane, returned as is");
            return vec![self.clone()];
        }

        let mut results = Vec::new();
        subtract_r(vec![self.clone()], &planes, 0, &mut results);

        debug!(
            planes = planes.len(),
            fragments = results.len(),
            "subtraction finished"
        );
        merge_fragments(results)
    }
}

/// One level of the decomposition: split `fragments` by `planes[index]`,
/// emit the front parts and recurse on the back parts.
fn subtract_r<S: Clone + Send + Sync + Debug>(
    fragments: Vec<Polyhedron<S>>,
    planes: &[Plane],
    index: usize,
    results: &mut Vec<Polyhedron<S>>,
) {
    if index == planes.len() || fragments.is_empty() {
        trace!(inside = fragments.len(), "discarding fragments inside the subtrahend");
        return;
    }

    let plane = &planes[index];
    let inverted = plane.flipped();
    let emitted = results.len();
    let mut inside = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        let mut outside = fragment.clone();
        if !outside.clip(&inverted).is_empty() {
            results.push(outside);
        }

        let mut behind = fragment;
        if !behind.clip(plane).is_empty() {
            inside.push(behind);
        }
    }

    trace!(
        index,
        emitted = results.len() - emitted,
        remaining = inside.len(),
        "subtraction level"
    );
    subtract_r(inside, planes, index + 1, results);
}

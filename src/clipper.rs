//! Geometry of the clip tool: a plane picked from two or three points, and
//! brushes cut along it.

use crate::float_types::{Real, tolerance};
use crate::plane::Plane;
use crate::polyhedron::Polyhedron;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;

/// Which part of a clipped brush is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClipSide {
    /// The part in front of the clip plane
    #[default]
    Front,
    /// The part behind the clip plane
    Back,
    /// Both parts, as two brushes
    Both,
}

impl ClipSide {
    /// Cycle Front -> Back -> Both -> Front.
    pub const fn next(self) -> Self {
        match self {
            ClipSide::Front => ClipSide::Back,
            ClipSide::Back => ClipSide::Both,
            ClipSide::Both => ClipSide::Front,
        }
    }
}

/// Clip plane through the picked `points`.
///
/// Three points define the plane on their own, with the normal following the
/// right-hand rule. Two points define a line, the plane contains that line and
/// `view_direction`. Returns `None` for any other number of points, and for
/// points that do not span a plane.
pub fn clip_plane_from_points(
    points: &[Point3<Real>],
    view_direction: &Vector3<Real>,
) -> Option<Plane> {
    match points {
        [p1, p2, p3] => Plane::from_points(p1, p2, p3),
        [p1, p2] => {
            let normal = (p2 - p1).cross(view_direction);
            if normal.norm() <= tolerance() {
                return None;
            }
            Some(Plane::from_point_normal(p1, normal))
        },
        _ => None,
    }
}

impl<S: Clone + Send + Sync + Debug> Polyhedron<S> {
    /// The parts of `self` in front of and behind `plane`, `None` where a
    /// part has no volume.
    pub fn split(&self, plane: &Plane) -> (Option<Self>, Option<Self>) {
        let mut front = self.clone();
        let front = (!front.clip(&plane.flipped()).is_empty()).then_some(front);

        let mut back = self.clone();
        let back = (!back.clip(plane).is_empty()).then_some(back);

        (front, back)
    }
}

/// The brushes left after clipping `polyhedron` by `plane` and keeping `side`.
pub fn clip_by_side<S: Clone + Send + Sync + Debug>(
    polyhedron: &Polyhedron<S>,
    plane: &Plane,
    side: ClipSide,
) -> Vec<Polyhedron<S>> {
    let (front, back) = polyhedron.split(plane);
    match side {
        ClipSide::Front => front.into_iter().collect(),
        ClipSide::Back => back.into_iter().collect(),
        ClipSide::Both => front.into_iter().chain(back).collect(),
    }
}

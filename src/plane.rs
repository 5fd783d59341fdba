//! Oriented planes and the half-spaces they bound.
//!
//! A [`Plane`] stores a unit normal and an offset `w` so that every point `p`
//! on the plane satisfies `normal · p = w`. The normal points to the *front*
//! side; the half-space a polyhedron keeps when it is clipped is the *back*
//! side (`normal · p < w`).

use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};

// Point classification constants, combinable as a bitmask
pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// An oriented plane, `normal · p = w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal vector of the plane
    pub normal: Vector3<Real>,
    /// Distance from origin along normal
    pub w: Real,
}

impl Plane {
    /// Create a plane from a (not necessarily unit) normal and the offset
    /// matching that normal. Both are rescaled so the stored normal has unit length.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        let len = normal.norm();
        debug_assert!(len > 0.0, "plane normal must not be zero");
        Plane {
            normal: normal / len,
            w: w / len,
        }
    }

    /// Create a plane through `point` facing `normal`.
    pub fn from_point_normal(point: &Point3<Real>, normal: Vector3<Real>) -> Self {
        debug_assert!(normal.norm() > 0.0, "plane normal must not be zero");
        let normal = normal.normalize();
        Plane {
            normal,
            w: normal.dot(&point.coords),
        }
    }

    /// Create a plane from three points.
    /// The normal direction follows the right-hand rule: (p2-p1) × (p3-p1).
    /// Returns `None` when the points are (nearly) collinear.
    pub fn from_points(p1: &Point3<Real>, p2: &Point3<Real>, p3: &Point3<Real>) -> Option<Self> {
        let normal = (p2 - p1).cross(&(p3 - p1));
        if normal.norm_squared() < Real::EPSILON * Real::EPSILON {
            return None;
        }
        Some(Self::from_point_normal(p1, normal))
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    pub const fn offset(&self) -> Real {
        self.w
    }

    /// Flip the plane (reverse normal and distance)
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Return the complementary half-space; `self` is left untouched.
    pub fn flipped(&self) -> Self {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance of `point` from the plane, positive in front.
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Classify a point as [`FRONT`], [`BACK`] or [`COPLANAR`] using the
    /// crate-wide [`tolerance`].
    #[inline]
    pub fn orient_point(&self, point: &Point3<Real>) -> i8 {
        self.orient_point_with(point, tolerance())
    }

    /// Classify a point with an explicit tolerance.
    pub fn orient_point_with(&self, point: &Point3<Real>, epsilon: Real) -> i8 {
        let distance = self.signed_distance(point);
        if distance > epsilon {
            FRONT
        } else if distance < -epsilon {
            BACK
        } else {
            COPLANAR
        }
    }

    /// Classify a set of points, returning the OR of their individual classes.
    pub fn classify_points<'a, I>(&self, points: I) -> i8
    where
        I: IntoIterator<Item = &'a Point3<Real>>,
    {
        let epsilon = tolerance();
        points
            .into_iter()
            .fold(COPLANAR, |acc, p| acc | self.orient_point_with(p, epsilon))
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project_point(&self, point: &Point3<Real>) -> Point3<Real> {
        point - self.normal * self.signed_distance(point)
    }

    /// Two unit vectors `(u, v)` spanning the plane with `u × v = normal`.
    pub fn basis(&self) -> (Vector3<Real>, Vector3<Real>) {
        let n = self.normal;
        // cross with the axis the normal is least aligned with
        let helper = if n.x.abs() < n.y.abs() && n.x.abs() < n.z.abs() {
            Vector3::x()
        } else if n.y.abs() < n.z.abs() {
            Vector3::y()
        } else {
            Vector3::z()
        };
        let u = helper.cross(&n).normalize();
        let v = n.cross(&u);
        (u, v)
    }
}

impl approx::AbsDiffEq for Plane {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        <Real as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.normal, &other.normal, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.w, &other.w, epsilon)
    }
}

impl approx::RelativeEq for Plane {
    fn default_max_relative() -> Self::Epsilon {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(&self.normal, &other.normal, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.w, &other.w, epsilon, max_relative)
    }
}

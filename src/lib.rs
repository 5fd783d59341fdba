//! Boolean subtraction of convex brushes for id Tech style map editors,
//! built on a half-edge [polyhedron](polyhedron) representation.
//!
//! Subtracting one convex brush from another yields a list of disjoint convex
//! fragments covering the part of the minuend outside the subtrahend. Brushes
//! are clipped against half-spaces, the [clipper] slices them along a plane
//! picked from two or three points, and [carve] subtracts one brush from many.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to carve many brushes at once

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod carve;
pub mod clipper;
pub mod errors;
pub mod float_types;
pub mod plane;
pub mod polyhedron;
pub mod subtract;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use carve::carve;
pub use clipper::{ClipSide, clip_by_side, clip_plane_from_points};
pub use errors::{PolyhedronError, PolyhedronResult};
pub use plane::Plane;
pub use polyhedron::{
    ClipResult, DefaultCallback, FaceId, FaceLoop, Polyhedron, PolyhedronCallback,
};
pub use subtract::{merge_fragments, planes, sort_planes};

//! Construction errors

use crate::float_types::Real;
use nalgebra::Point3;

/// All the possible problems we might encounter while assembling a polyhedron
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolyhedronError {
    /// (InvalidCoordinate) A vertex position has a NaN or infinite component
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point3<Real>),
    /// (TooFewFaceVertices) A face loop has fewer than 3 vertices
    #[error("(TooFewFaceVertices) Face {face} has {count} vertices, at least 3 are required")]
    TooFewFaceVertices { face: usize, count: usize },
    /// (RepeatedVertex) Two consecutive vertices of a face loop are the same
    #[error("(RepeatedVertex) Face {face} repeats vertex {index} consecutively")]
    RepeatedVertex { face: usize, index: usize },
    /// (VertexOutOfRange) A face loop references a vertex that does not exist
    #[error("(VertexOutOfRange) Face {face} references vertex {index}, but only {count} vertices exist")]
    VertexOutOfRange {
        face: usize,
        index: usize,
        count: usize,
    },
    /// (TooFewFaces) A closed solid needs at least four faces
    #[error("(TooFewFaces) A closed polyhedron needs at least 4 faces, got {0}")]
    TooFewFaces(usize),
    /// (NonManifoldEdge) The same directed edge is used by two faces
    #[error("(NonManifoldEdge) The edge {from} -> {to} is used by more than one face")]
    NonManifoldEdge { from: usize, to: usize },
    /// (OpenEdge) A directed edge has no matching reverse edge
    #[error("(OpenEdge) The edge {from} -> {to} has no opposite edge, the surface is not closed")]
    OpenEdge { from: usize, to: usize },
    /// (DegenerateBounds) A box has a non-positive extent along some axis
    #[error("(DegenerateBounds) The box from {mins} to {maxs} has no volume")]
    DegenerateBounds {
        mins: Point3<Real>,
        maxs: Point3<Real>,
    },
    /// (EmptyIntersection) The given half-spaces do not bound a solid
    #[error("(EmptyIntersection) The half-spaces do not enclose any volume")]
    EmptyIntersection,
}

/// Result type alias for polyhedron construction.
pub type PolyhedronResult<T> = Result<T, PolyhedronError>;

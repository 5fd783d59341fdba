//! `Polyhedron` struct: a convex solid stored as an index-based half-edge
//! boundary representation.
//!
//! Every face is bounded by a loop of half-edges wound counter-clockwise when
//! seen from outside, every half-edge has a twin running the other way along
//! the same edge, and the faces themselves are linked into a circular
//! face cycle (`next` / `previous`) that plane extraction walks.

use crate::errors::{PolyhedronError, PolyhedronResult};
use crate::float_types::{Real, parry3d::bounding_volume::Aabb, tolerance};
use crate::plane::{FRONT, Plane};
use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};
use std::{fmt::Debug, sync::OnceLock};

pub mod callback;
pub mod clip;
pub mod shapes;

pub use callback::{DefaultCallback, PolyhedronCallback};
pub use clip::ClipResult;

/// Index of a vertex inside one polyhedron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Index of a half-edge inside one polyhedron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub usize);

/// Index of an edge inside one polyhedron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// Index of a face inside one polyhedron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<Real>,
    /// One half-edge starting at this vertex
    pub leaving: HalfEdgeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfEdge {
    /// Vertex the half-edge starts at
    pub origin: VertexId,
    /// Half-edge running the opposite way along the same edge
    pub twin: HalfEdgeId,
    /// Next half-edge around `face`
    pub next: HalfEdgeId,
    /// Previous half-edge around `face`
    pub previous: HalfEdgeId,
    pub face: FaceId,
    pub edge: EdgeId,
}

/// An undirected edge, owning the two half-edges that run along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub first: HalfEdgeId,
    pub second: HalfEdgeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Face<S> {
    /// First half-edge of the boundary loop
    pub boundary: HalfEdgeId,
    /// Next face in the face cycle
    pub next: FaceId,
    /// Previous face in the face cycle
    pub previous: FaceId,
    /// Caller data carried along by clipping (texture, brush face attributes, ...)
    pub metadata: Option<S>,
}

/// A face given as a loop of vertex indices, counter-clockwise seen from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLoop<S> {
    pub indices: Vec<usize>,
    pub metadata: Option<S>,
}

impl<S> FaceLoop<S> {
    pub const fn new(indices: Vec<usize>, metadata: Option<S>) -> Self {
        FaceLoop { indices, metadata }
    }
}

#[derive(Debug, Clone)]
pub struct Polyhedron<S: Clone + Send + Sync + Debug> {
    vertices: Vec<Vertex>,
    half_edges: Vec<HalfEdge>,
    edges: Vec<Edge>,
    faces: Vec<Face<S>>,

    /// Lazily calculated AABB that spans `vertices`.
    bounding_box: OnceLock<Aabb>,
}

impl<S: Clone + Send + Sync + Debug> Polyhedron<S> {
    /// Build a polyhedron from vertex positions and face loops.
    ///
    /// Faces keep the order of `loops`, which also becomes the order of the face
    /// cycle. Vertices no face refers to are dropped; the remaining ones keep
    /// their relative order.
    ///
    /// ## Errors
    /// Non-finite coordinates, faces with fewer than 3 vertices or repeated
    /// consecutive vertices, out of range indices, fewer than 4 faces, and
    /// surfaces that are not closed 2-manifolds.
    pub fn from_face_loops(
        positions: Vec<Point3<Real>>,
        loops: Vec<FaceLoop<S>>,
    ) -> PolyhedronResult<Self> {
        if let Some(bad) = positions
            .iter()
            .find(|p| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(PolyhedronError::InvalidCoordinate(*bad));
        }
        if loops.len() < 4 {
            return Err(PolyhedronError::TooFewFaces(loops.len()));
        }

        let mut used = vec![false; positions.len()];
        for (face, face_loop) in loops.iter().enumerate() {
            let count = face_loop.indices.len();
            if count < 3 {
                return Err(PolyhedronError::TooFewFaceVertices { face, count });
            }
            for (i, &index) in face_loop.indices.iter().enumerate() {
                if index >= positions.len() {
                    return Err(PolyhedronError::VertexOutOfRange {
                        face,
                        index,
                        count: positions.len(),
                    });
                }
                if face_loop.indices[(i + 1) % count] == index {
                    return Err(PolyhedronError::RepeatedVertex { face, index });
                }
                used[index] = true;
            }
        }

        // compact the vertex list, `original` maps back for error reporting
        let mut remap = vec![usize::MAX; positions.len()];
        let mut original = Vec::with_capacity(positions.len());
        let mut kept_positions = Vec::with_capacity(positions.len());
        for (index, position) in positions.into_iter().enumerate() {
            if used[index] {
                remap[index] = kept_positions.len();
                original.push(index);
                kept_positions.push(position);
            }
        }

        let face_count = loops.len();
        let half_edge_count = loops.iter().map(|l| l.indices.len()).sum();
        let mut half_edges: Vec<HalfEdge> = Vec::with_capacity(half_edge_count);
        let mut faces = Vec::with_capacity(face_count);
        let mut directed: HashMap<(usize, usize), HalfEdgeId> =
            HashMap::with_capacity(half_edge_count);

        for (face, face_loop) in loops.into_iter().enumerate() {
            let first = half_edges.len();
            let n = face_loop.indices.len();
            for i in 0..n {
                let from = remap[face_loop.indices[i]];
                let to = remap[face_loop.indices[(i + 1) % n]];
                let id = HalfEdgeId(first + i);
                if directed.insert((from, to), id).is_some() {
                    return Err(PolyhedronError::NonManifoldEdge {
                        from: original[from],
                        to: original[to],
                    });
                }
                half_edges.push(HalfEdge {
                    origin: VertexId(from),
                    // twin and edge are patched below once every face is known
                    twin: id,
                    next: HalfEdgeId(first + (i + 1) % n),
                    previous: HalfEdgeId(first + (i + n - 1) % n),
                    face: FaceId(face),
                    edge: EdgeId(usize::MAX),
                });
            }
            faces.push(Face {
                boundary: HalfEdgeId(first),
                next: FaceId((face + 1) % face_count),
                previous: FaceId((face + face_count - 1) % face_count),
                metadata: face_loop.metadata,
            });
        }

        let mut edges = Vec::with_capacity(half_edge_count / 2);
        for h in 0..half_edges.len() {
            let from = half_edges[h].origin.0;
            let to = half_edges[half_edges[h].next.0].origin.0;
            let Some(&twin) = directed.get(&(to, from)) else {
                return Err(PolyhedronError::OpenEdge {
                    from: original[from],
                    to: original[to],
                });
            };
            half_edges[h].twin = twin;
            if h < twin.0 {
                let edge = EdgeId(edges.len());
                edges.push(Edge {
                    first: HalfEdgeId(h),
                    second: twin,
                });
                half_edges[h].edge = edge;
                half_edges[twin.0].edge = edge;
            }
        }

        let mut leaving: Vec<Option<HalfEdgeId>> = vec![None; kept_positions.len()];
        for (h, half_edge) in half_edges.iter().enumerate() {
            leaving[half_edge.origin.0].get_or_insert(HalfEdgeId(h));
        }
        let vertices = kept_positions
            .into_iter()
            .zip(leaving)
            // every kept vertex starts at least one half-edge
            .map(|(position, leaving)| Vertex {
                position,
                leaving: leaving.unwrap_or(HalfEdgeId(0)),
            })
            .collect();

        Ok(Polyhedron {
            vertices,
            half_edges,
            edges,
            faces,
            bounding_box: OnceLock::new(),
        })
    }

    /// Build a polyhedron from positions and index lists, every face sharing `metadata`.
    pub fn from_indexed_faces(
        positions: &[Point3<Real>],
        faces: &[Vec<usize>],
        metadata: Option<S>,
    ) -> PolyhedronResult<Self> {
        let loops = faces
            .iter()
            .map(|indices| FaceLoop::new(indices.clone(), metadata.clone()))
            .collect();
        Self::from_face_loops(positions.to_vec(), loops)
    }

    /// Positions and face loops (in face cycle order) describing this polyhedron.
    pub fn to_face_loops(&self) -> (Vec<Point3<Real>>, Vec<FaceLoop<S>>) {
        let loops = self
            .faces()
            .map(|face| {
                FaceLoop::new(
                    self.face_vertices(face).map(|v| v.0).collect(),
                    self.faces[face.0].metadata.clone(),
                )
            })
            .collect();
        (self.positions().collect(), loops)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    pub fn half_edge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub fn face(&self, id: FaceId) -> &Face<S> {
        &self.faces[id.0]
    }

    pub fn position(&self, id: VertexId) -> Point3<Real> {
        self.vertices[id.0].position
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3<Real>> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    /// Vertex a half-edge points to.
    pub fn destination(&self, id: HalfEdgeId) -> VertexId {
        self.half_edges[self.half_edges[id.0].next.0].origin
    }

    /// Face the face cycle starts at.
    pub const fn first_face(&self) -> FaceId {
        FaceId(0)
    }

    pub fn next_face(&self, id: FaceId) -> FaceId {
        self.faces[id.0].next
    }

    /// Walks the face cycle once, starting at [`first_face`](Self::first_face).
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        let first = self.first_face();
        std::iter::successors(Some(first), move |&face| {
            let next = self.faces[face.0].next;
            (next != first).then_some(next)
        })
    }

    /// Half-edges bounding `face`, in winding order.
    pub fn face_half_edges(&self, face: FaceId) -> impl Iterator<Item = HalfEdgeId> + '_ {
        let first = self.faces[face.0].boundary;
        std::iter::successors(Some(first), move |&h| {
            let next = self.half_edges[h.0].next;
            (next != first).then_some(next)
        })
    }

    pub fn face_vertices(&self, face: FaceId) -> impl Iterator<Item = VertexId> + '_ {
        self.face_half_edges(face)
            .map(move |h| self.half_edges[h.0].origin)
    }

    pub fn face_positions(&self, face: FaceId) -> Vec<Point3<Real>> {
        self.face_vertices(face).map(|v| self.position(v)).collect()
    }

    pub fn face_metadata(&self, face: FaceId) -> Option<&S> {
        self.faces[face.0].metadata.as_ref()
    }

    pub fn face_metadata_mut(&mut self, face: FaceId) -> Option<&mut S> {
        self.faces[face.0].metadata.as_mut()
    }

    pub fn set_face_metadata(&mut self, face: FaceId, metadata: Option<S>) {
        self.faces[face.0].metadata = metadata;
    }

    /// Supporting plane of a face: Newell normal through the face centroid.
    pub fn face_plane(&self, face: FaceId) -> Plane {
        let points = self.face_positions(face);
        let normal = newell_normal(&points);
        let center = points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords)
            / points.len() as Real;
        Plane::from_point_normal(&Point3::from(center), normal)
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    /// The two vertices an edge connects.
    pub fn edge_vertices(&self, id: EdgeId) -> (VertexId, VertexId) {
        let first = self.edges[id.0].first;
        (self.half_edges[first.0].origin, self.destination(first))
    }

    /// Enclosed volume, from the divergence theorem over fan triangulated faces.
    pub fn volume(&self) -> Real {
        self.faces()
            .map(|face| {
                let points = self.face_positions(face);
                (1..points.len() - 1)
                    .map(|i| {
                        points[0]
                            .coords
                            .dot(&points[i].coords.cross(&points[i + 1].coords))
                    })
                    .sum::<Real>()
            })
            .sum::<Real>()
            / 6.0
    }

    /// Center of mass assuming uniform density.
    pub fn centroid(&self) -> Point3<Real> {
        let mut weighted = Vector3::zeros();
        let mut total = 0.0;
        for face in self.faces() {
            let points = self.face_positions(face);
            for i in 1..points.len() - 1 {
                let (a, b, c) = (points[0].coords, points[i].coords, points[i + 1].coords);
                let volume = a.dot(&b.cross(&c)) / 6.0;
                weighted += (a + b + c) * (volume / 4.0);
                total += volume;
            }
        }
        Point3::from(weighted / total)
    }

    /// Returns an [`Aabb`] containing every vertex.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let first = self.vertices[0].position;
            let (mins, maxs) = self
                .positions()
                .fold((first, first), |(mins, maxs), p| (mins.inf(&p), maxs.sup(&p)));
            Aabb::new(mins, maxs)
        })
    }

    /// Reset cached AABB.
    pub fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }

    /// `true` when `point` is inside or on the boundary.
    pub fn contains_point(&self, point: &Point3<Real>) -> bool {
        self.faces()
            .all(|face| self.face_plane(face).orient_point(point) != FRONT)
    }

    /// `true` when no vertex lies in front of any face plane.
    pub fn is_convex(&self) -> bool {
        let epsilon = tolerance();
        self.faces().all(|face| {
            let plane = self.face_plane(face);
            self.vertices
                .iter()
                .all(|v| plane.orient_point_with(&v.position, epsilon) != FRONT)
        })
    }

    /// `true` when every half-edge is paired with a twin running the other way.
    pub fn is_closed(&self) -> bool {
        self.half_edges.iter().enumerate().all(|(h, half_edge)| {
            let twin = &self.half_edges[half_edge.twin.0];
            half_edge.twin.0 != h
                && twin.twin.0 == h
                && twin.origin == self.destination(HalfEdgeId(h))
        })
    }

    /// Returns a copy moved by `offset`.
    pub fn translate(&self, offset: Vector3<Real>) -> Self {
        let mut moved = self.clone();
        for vertex in &mut moved.vertices {
            vertex.position += offset;
        }
        moved.invalidate_bounding_box();
        moved
    }
}

/// Newell's method: un-normalized normal of a planar loop, length twice its area.
pub(crate) fn newell_normal(points: &[Point3<Real>]) -> Vector3<Real> {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .fold(Vector3::zeros(), |acc, (curr, next)| {
            acc + curr.coords.cross(&next.coords)
        })
}

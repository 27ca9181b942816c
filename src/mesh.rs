// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Doubly-connected edge list for one simple polygon and its subdivisions.
//
// All links are u32 indices into Vec arenas owned by the mesh.
//
// Design:
//   - INVALID: u32::MAX  (null link)
//   - Half-edges are allocated in pairs: edges[i] and edges[i^1] are twins.
//     sym(e) = e ^ 1.
//   - faces[0] is the unbounded outer face, faces[1] the polygon itself.
//   - Polygon edge i (point i -> point i+1) is half-edge 2i on the polygon
//     face. Its twin 2i+1 runs the other way around the outer face.
//   - Splitting a face keeps the old face record for one side and appends a
//     new face for the other. Vertices are never added or removed.

use crate::error::{Result, TessError};
use crate::geom::{orient, sub, Point};

mod classify;
mod iter;

pub use classify::VertexType;
pub use iter::{EdgeCycle, VertexEdges};

pub const INVALID: u32 = u32::MAX;

/// Index into Mesh::verts
pub type VertIdx = u32;
/// Index into Mesh::faces
pub type FaceIdx = u32;
/// Index into Mesh::edges
pub type EdgeIdx = u32;

/// The unbounded face. Never split, never triangulated.
pub const OUTER_FACE: FaceIdx = 0;
/// The face bounded by the input polygon.
pub const INNER_FACE: FaceIdx = 1;

/// The twin of a half-edge (always the other half of the pair).
#[inline(always)]
pub fn sym(e: EdgeIdx) -> EdgeIdx {
    e ^ 1
}

/// Side of a monotone face a vertex belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Chain {
    #[default]
    None,
    Left,
    Right,
}

/// Which endpoint of a new diagonal adopts it as its incident edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeAssign {
    None,
    /// The origin of the first half-edge takes the new half-edge.
    Origin,
    /// The origin of the second half-edge takes the new twin.
    Destination,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FaceType {
    Triangle,
    Quad,
    Other,
}

#[derive(Clone, Debug)]
pub struct Vertex {
    pub coords: Point,
    pub chain: Chain,
    /// A half-edge leaving this vertex.
    pub an_edge: EdgeIdx,
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            coords: [0.0; 2],
            chain: Chain::None,
            an_edge: INVALID,
        }
    }
}

/// The twin of a half-edge is not stored: it is `sym(e)`.
#[derive(Clone, Debug)]
pub struct HalfEdge {
    pub org: VertIdx,
    pub lface: FaceIdx,
    pub lnext: EdgeIdx,
    pub lprev: EdgeIdx,
}

impl Default for HalfEdge {
    fn default() -> Self {
        Self {
            org: INVALID,
            lface: INVALID,
            lnext: INVALID,
            lprev: INVALID,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Face {
    /// A half-edge of the face's boundary cycle.
    pub an_edge: EdgeIdx,
}

impl Default for Face {
    fn default() -> Self {
        Self { an_edge: INVALID }
    }
}

#[derive(Clone, Debug)]
pub struct Mesh {
    pub verts: Vec<Vertex>,
    pub edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
    /// Run the linear-time split checks as well as the O(1) ones.
    strict: bool,
}

impl Mesh {
    pub fn new() -> Self {
        Mesh {
            verts: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            strict: cfg!(debug_assertions),
        }
    }

    /// Build the mesh of a polygon given in counter-clockwise order.
    pub fn from_ccw(points: &[Point]) -> Self {
        let mut mesh = Mesh::new();
        mesh.reset_from_ccw(points);
        mesh
    }

    /// Rebuild in place, keeping the arenas' capacity.
    pub fn reset_from_ccw(&mut self, points: &[Point]) {
        debug_assert!(points.len() >= 3, "a polygon needs at least 3 points");
        debug_assert_eq!(
            crate::geom::polygon_order(points),
            crate::geom::Order::CounterClockWise,
            "polygon must be counter-clockwise"
        );

        self.verts.clear();
        self.edges.clear();
        self.faces.clear();

        let n = points.len() as u32;
        self.verts.extend(points.iter().enumerate().map(|(i, &p)| Vertex {
            coords: p,
            chain: Chain::None,
            an_edge: 2 * i as EdgeIdx,
        }));
        for i in 0..n {
            let next = (i + 1) % n;
            let prev = (i + n - 1) % n;
            self.edges.push(HalfEdge {
                org: i,
                lface: INNER_FACE,
                lnext: 2 * next,
                lprev: 2 * prev,
            });
            // Runs point i+1 -> point i; the outer cycle walks the polygon backwards.
            self.edges.push(HalfEdge {
                org: next,
                lface: OUTER_FACE,
                lnext: 2 * prev + 1,
                lprev: 2 * next + 1,
            });
        }
        self.faces.push(Face { an_edge: 1 });
        self.faces.push(Face { an_edge: 0 });
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Indices of all bounded faces.
    pub fn bounded_faces(&self) -> impl Iterator<Item = FaceIdx> {
        1..self.faces.len() as FaceIdx
    }

    // ──────────────────────────── Navigation helpers ────────────────────────────

    #[inline]
    pub fn org(&self, e: EdgeIdx) -> VertIdx {
        self.edges[e as usize].org
    }

    #[inline]
    pub fn dst(&self, e: EdgeIdx) -> VertIdx {
        self.edges[sym(e) as usize].org
    }

    #[inline]
    pub fn lnext(&self, e: EdgeIdx) -> EdgeIdx {
        self.edges[e as usize].lnext
    }

    #[inline]
    pub fn lprev(&self, e: EdgeIdx) -> EdgeIdx {
        self.edges[e as usize].lprev
    }

    #[inline]
    pub fn lface(&self, e: EdgeIdx) -> FaceIdx {
        self.edges[e as usize].lface
    }

    #[inline]
    pub fn coords(&self, v: VertIdx) -> Point {
        self.verts[v as usize].coords
    }

    #[inline]
    pub fn an_edge(&self, v: VertIdx) -> EdgeIdx {
        self.verts[v as usize].an_edge
    }

    #[inline]
    pub fn chain(&self, v: VertIdx) -> Chain {
        self.verts[v as usize].chain
    }

    #[inline]
    pub fn face_edge(&self, f: FaceIdx) -> EdgeIdx {
        self.faces[f as usize].an_edge
    }

    #[inline]
    pub fn org_coords(&self, e: EdgeIdx) -> Point {
        self.coords(self.org(e))
    }

    #[inline]
    pub fn dst_coords(&self, e: EdgeIdx) -> Point {
        self.coords(self.dst(e))
    }

    /// Vector from origin to destination.
    #[inline]
    pub fn direction(&self, e: EdgeIdx) -> Point {
        sub(self.dst_coords(e), self.org_coords(e))
    }

    // ──────────────────────────────── Traversal ─────────────────────────────────

    /// The boundary cycle of face `f`.
    pub fn face_edges(&self, f: FaceIdx) -> EdgeCycle<'_> {
        EdgeCycle::full(self, self.face_edge(f))
    }

    /// The cycle through `e`, starting at `e`.
    pub fn loop_edges(&self, e: EdgeIdx) -> EdgeCycle<'_> {
        EdgeCycle::full(self, e)
    }

    /// Half-edges from `from` following lnext, stopping before `to`.
    pub fn chain_edges(&self, from: EdgeIdx, to: EdgeIdx) -> EdgeCycle<'_> {
        EdgeCycle::until(self, from, to)
    }

    /// All half-edges leaving `v`, starting with its incident edge.
    pub fn vertex_edges(&self, v: VertIdx) -> VertexEdges<'_> {
        VertexEdges::new(self, v)
    }

    pub fn count_face_edges(&self, f: FaceIdx) -> usize {
        self.face_edges(f).count()
    }

    pub fn count_loop_edges(&self, e: EdgeIdx) -> usize {
        self.loop_edges(e).count()
    }

    /// Triangle, quad or larger, walking at most four edges.
    pub fn face_type(&self, f: FaceIdx) -> FaceType {
        let e0 = self.face_edge(f);
        let e2 = self.lnext(self.lnext(e0));
        let e3 = self.lnext(e2);
        if e3 == e0 {
            FaceType::Triangle
        } else if self.lnext(e3) == e0 {
            FaceType::Quad
        } else {
            FaceType::Other
        }
    }

    // ──────────────────────── Private allocation helpers ─────────────────────

    /// Allocate a twin pair with the given origins and no links.
    fn make_edge_pair(&mut self, org: VertIdx, dst: VertIdx) -> EdgeIdx {
        let e = self.edges.len() as EdgeIdx;
        self.edges.push(HalfEdge {
            org,
            ..HalfEdge::default()
        });
        self.edges.push(HalfEdge {
            org: dst,
            ..HalfEdge::default()
        });
        e
    }

    /// Append a face bounded by the cycle through `e_orig`.
    fn make_face(&mut self, e_orig: EdgeIdx) -> FaceIdx {
        let f_new = self.faces.len() as FaceIdx;
        self.faces.push(Face { an_edge: e_orig });

        // Set all edges in the face loop to point to f_new
        let mut e = e_orig;
        loop {
            self.edges[e as usize].lface = f_new;
            e = self.edges[e as usize].lnext;
            if e == e_orig {
                break;
            }
        }
        f_new
    }

    // ──────────────────────────── Face splitting ────────────────────────────────

    /// Check that a diagonal from org(a) to org(b) can split their face.
    /// Returns the face's edge count in strict mode, 0 otherwise.
    pub fn can_split_face(&self, a: EdgeIdx, b: EdgeIdx) -> Result<usize> {
        if a == b {
            return Err(TessError::SameEdge { edge: a });
        }
        let face = self.lface(a);
        if self.lface(b) != face {
            return Err(TessError::NotOnSameFace { a, b });
        }
        if face == OUTER_FACE {
            return Err(TessError::SplitOuterFace);
        }
        if self.org(a) == self.dst(b) || self.dst(a) == self.org(b) {
            return Err(TessError::AlreadyConnected { a, b });
        }
        if !self.strict {
            return Ok(0);
        }

        let edges = self.count_face_edges(face);
        if edges < 4 {
            return Err(TessError::FaceTooSmall { face, edges });
        }
        if !self.loop_edges(a).any(|e| e == b) {
            return Err(TessError::NotOnSameCycle { a, b });
        }
        Ok(edges)
    }

    /// Insert the diagonal org(a) -> org(b), splitting the face of `a` and `b`.
    ///
    /// The returned half-edge leaves org(a) and keeps the old face together
    /// with `b`; its twin leaves org(b) and bounds a new face together with
    /// `a`. `assign` optionally makes one endpoint adopt the new half-edge
    /// leaving it as its incident edge.
    pub fn split_face(&mut self, a: EdgeIdx, b: EdgeIdx, assign: EdgeAssign) -> Result<EdgeIdx> {
        let before = self.can_split_face(a, b)?;
        let e_new = self.split_face_unchecked(a, b, assign);
        if self.strict {
            let first = self.count_loop_edges(e_new);
            let second = self.count_loop_edges(sym(e_new));
            if first + second != before + 2 {
                return Err(TessError::EdgeCountMismatch {
                    before,
                    first,
                    second,
                });
            }
        }
        Ok(e_new)
    }

    fn split_face_unchecked(&mut self, a: EdgeIdx, b: EdgeIdx, assign: EdgeAssign) -> EdgeIdx {
        let face = self.lface(a);
        let a_prev = self.lprev(a);
        let b_prev = self.lprev(b);
        let (org_a, org_b) = (self.org(a), self.org(b));

        let e_new = self.make_edge_pair(org_a, org_b);
        let e_sym = sym(e_new);
        {
            let e = &mut self.edges[e_new as usize];
            e.lface = face;
            e.lprev = a_prev;
            e.lnext = b;
        }
        {
            let e = &mut self.edges[e_sym as usize];
            e.lprev = b_prev;
            e.lnext = a;
        }
        self.edges[a_prev as usize].lnext = e_new;
        self.edges[b_prev as usize].lnext = e_sym;
        self.edges[b as usize].lprev = e_new;
        self.edges[a as usize].lprev = e_sym;

        self.faces[face as usize].an_edge = e_new;
        self.make_face(e_sym);

        match assign {
            EdgeAssign::Origin => self.verts[org_a as usize].an_edge = e_new,
            EdgeAssign::Destination => self.verts[org_b as usize].an_edge = e_sym,
            EdgeAssign::None => {}
        }
        e_new
    }

    /// Split the face of `e` with a diagonal to `v`, using the first
    /// half-edge around `v` that shares a face with `e`.
    pub fn split_face_to_vertex(
        &mut self,
        e: EdgeIdx,
        v: VertIdx,
        assign: EdgeAssign,
    ) -> Result<EdgeIdx> {
        let b = self
            .vertex_edges(v)
            .find(|&b| self.can_split_face(e, b).is_ok())
            .ok_or(TessError::NoConnectableEdge { edge: e, vertex: v })?;
        self.split_face(e, b, assign)
    }

    /// Split a quad into two triangles. The diagonal is chosen so that both
    /// triangles stay counter-clockwise, so a non-convex quad splits at its
    /// reflex corner.
    pub fn split_quad(&mut self, f: FaceIdx) -> Result<EdgeIdx> {
        let a = self.face_edge(f);
        let b = self.lnext(a);
        let c = self.lnext(b);
        let d = self.lnext(c);
        let (pa, pb, pc, pd) = (
            self.org_coords(a),
            self.org_coords(b),
            self.org_coords(c),
            self.org_coords(d),
        );
        if orient(pa, pb, pc) > 0.0 && orient(pc, pd, pa) > 0.0 {
            self.split_face(a, c, EdgeAssign::None)
        } else {
            self.split_face(b, d, EdgeAssign::None)
        }
    }

    // ───────────────────────────────── Output ───────────────────────────────────

    /// True once every bounded face is a triangle.
    pub fn is_fully_triangulated(&self) -> bool {
        self.faces.len() > 1 && self.bounded_faces().all(|f| self.face_type(f) == FaceType::Triangle)
    }

    /// Copy vertex positions and write one index triple per bounded face.
    pub fn extract_triangles(&self, vertices: &mut Vec<Point>, indices: &mut Vec<u32>) -> Result<()> {
        vertices.clear();
        indices.clear();
        vertices.extend(self.verts.iter().map(|v| v.coords));
        indices.reserve(3 * self.faces.len().saturating_sub(1));

        for f in self.bounded_faces() {
            let e0 = self.face_edge(f);
            let e1 = self.lnext(e0);
            let e2 = self.lnext(e1);
            if self.lnext(e2) != e0 {
                return Err(TessError::NonTriangularFace {
                    face: f,
                    edges: self.count_face_edges(f),
                });
            }
            indices.extend([self.org(e0), self.org(e1), self.org(e2)]);
        }
        Ok(())
    }

    /// Verify the structural invariants of the edge list.
    pub fn check_mesh(&self) -> Result<()> {
        let corrupt = |edge: EdgeIdx, reason: &'static str| TessError::CorruptMesh { edge, reason };
        let n_edges = self.edges.len() as EdgeIdx;

        for e in 0..n_edges {
            let he = &self.edges[e as usize];
            if he.lnext >= n_edges || he.lprev >= n_edges {
                return Err(corrupt(e, "dangling cycle link"));
            }
            if he.org as usize >= self.verts.len() || he.lface as usize >= self.faces.len() {
                return Err(corrupt(e, "dangling origin or face"));
            }
            if self.lprev(he.lnext) != e || self.lnext(he.lprev) != e {
                return Err(corrupt(e, "lnext and lprev are not inverse"));
            }
            if self.lface(he.lnext) != he.lface {
                return Err(corrupt(e, "face changes along a cycle"));
            }
            if self.org(he.lnext) != self.dst(e) {
                return Err(corrupt(e, "cycle is not head to tail"));
            }
            if self.dst(e) == he.org {
                return Err(corrupt(e, "half-edge is a loop"));
            }
        }
        for (f, face) in self.faces.iter().enumerate() {
            if face.an_edge >= n_edges || self.lface(face.an_edge) != f as FaceIdx {
                return Err(corrupt(face.an_edge, "face anchor is not on its face"));
            }
        }
        for (v, vert) in self.verts.iter().enumerate() {
            if vert.an_edge >= n_edges || self.org(vert.an_edge) != v as VertIdx {
                return Err(corrupt(vert.an_edge, "vertex anchor does not leave its vertex"));
            }
        }
        Ok(())
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

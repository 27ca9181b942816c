// Copyright 2025 Lars Brubaker
// Cycle and rotation iterators over the half-edge mesh.
//
// Both iterators are capped at the number of half-edges in the mesh, so a
// corrupted cycle ends the walk instead of spinning forever.

use super::{sym, EdgeIdx, Mesh, VertIdx};

/// Walks `lnext` links.
pub struct EdgeCycle<'a> {
    mesh: &'a Mesh,
    current: EdgeIdx,
    stop: EdgeIdx,
    /// Whether `stop` is tested before the first half-edge is yielded.
    check_first: bool,
    remaining: usize,
}

impl<'a> EdgeCycle<'a> {
    /// The whole cycle through `start`.
    pub(super) fn full(mesh: &'a Mesh, start: EdgeIdx) -> Self {
        EdgeCycle {
            mesh,
            current: start,
            stop: start,
            check_first: false,
            remaining: mesh.edges.len(),
        }
    }

    /// From `from` up to, but not including, `to`.
    pub(super) fn until(mesh: &'a Mesh, from: EdgeIdx, to: EdgeIdx) -> Self {
        EdgeCycle {
            mesh,
            current: from,
            stop: to,
            check_first: true,
            remaining: mesh.edges.len(),
        }
    }
}

impl Iterator for EdgeCycle<'_> {
    type Item = EdgeIdx;

    fn next(&mut self) -> Option<EdgeIdx> {
        if self.remaining == 0 || (self.check_first && self.current == self.stop) {
            return None;
        }
        self.check_first = true;
        self.remaining -= 1;
        let e = self.current;
        self.current = self.mesh.lnext(e);
        Some(e)
    }
}

/// Rotates around a vertex through `sym(lprev(e))`.
pub struct VertexEdges<'a> {
    mesh: &'a Mesh,
    start: EdgeIdx,
    current: EdgeIdx,
    remaining: usize,
}

impl<'a> VertexEdges<'a> {
    pub(super) fn new(mesh: &'a Mesh, v: VertIdx) -> Self {
        let start = mesh.an_edge(v);
        VertexEdges {
            mesh,
            start,
            current: start,
            remaining: mesh.edges.len(),
        }
    }
}

impl Iterator for VertexEdges<'_> {
    type Item = EdgeIdx;

    fn next(&mut self) -> Option<EdgeIdx> {
        if self.remaining == 0 {
            return None;
        }
        let e = self.current;
        let next = sym(self.mesh.lprev(e));
        self.remaining = if next == self.start { 0 } else { self.remaining - 1 };
        self.current = next;
        Some(e)
    }
}

// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Triangulation of a y-monotone face with the classic two-chain stack sweep.
//
// Vertices are visited top to bottom. The stack holds a reflex chain of
// vertices still waiting for diagonals. Every diagonal is inserted with the
// incident edges of its endpoints pointed at the part of the face that is
// still untriangulated, because later splits start from those edges.

use crate::error::{Result, TessError};
use crate::geom::{signed_angle, sub, sweep_cmp, RIGHT};
use crate::mesh::{Chain, EdgeAssign, FaceIdx, Mesh, VertIdx};
use std::cmp::Ordering;

/// Reusable state for [`MonotoneTriangulator::run`].
pub struct MonotoneTriangulator {
    sorted: Vec<VertIdx>,
    scratch: Vec<VertIdx>,
    stack: Vec<VertIdx>,
    pending: Vec<VertIdx>,
}

impl MonotoneTriangulator {
    pub fn new() -> Self {
        MonotoneTriangulator {
            sorted: Vec::new(),
            scratch: Vec::new(),
            stack: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Triangulate monotone face `face`. The incident edge of each of its
    /// vertices must lie on the face. Returns the number of diagonals.
    pub fn run(&mut self, mesh: &mut Mesh, face: FaceIdx) -> Result<usize> {
        mesh.label_chains(face);
        mesh.sort_sweep_monotone(face, &mut self.sorted, &mut self.scratch);
        let n = self.sorted.len();
        if n < 4 {
            return Ok(0);
        }

        self.stack.clear();
        self.pending.clear();
        self.stack.push(self.sorted[0]);
        self.stack.push(self.sorted[1]);
        let mut diagonals = 0;

        for i in 2..n - 1 {
            let u = self.sorted[i];
            let top = *self.stack.last().ok_or(TessError::NonMonotoneFace { face })?;

            if mesh.chain(u) != mesh.chain(top) {
                // Opposite chain: u sees the whole stack. The bottom entry is
                // already joined to u's chain, so it gets no diagonal.
                while self.stack.len() > 1 {
                    self.pending.extend(self.stack.pop());
                }
                // Top down, so u's incident edge stays on the remaining face.
                while let Some(w) = self.pending.pop() {
                    let assign = edge_assign(mesh, w, u);
                    let (a, b) = (mesh.an_edge(w), mesh.an_edge(u));
                    mesh.split_face(a, b, assign)?;
                    diagonals += 1;
                }
                self.stack.clear();
                self.stack.push(self.sorted[i - 1]);
                self.stack.push(u);
            } else {
                let mut last = top;
                self.stack.pop();
                while let Some(&p) = self.stack.last() {
                    if !is_visible(mesh, u, p, last) {
                        break;
                    }
                    let assign = edge_assign(mesh, u, p);
                    let (a, b) = (mesh.an_edge(u), mesh.an_edge(p));
                    mesh.split_face(a, b, assign)?;
                    diagonals += 1;
                    last = p;
                    self.stack.pop();
                }
                self.stack.push(last);
                self.stack.push(u);
            }
        }

        // The bottom vertex fans to everything left on the stack except its
        // two ends, which are its neighbors.
        let bottom = self.sorted[n - 1];
        self.stack.pop();
        while self.stack.len() > 1 {
            self.pending.extend(self.stack.pop());
        }
        while let Some(w) = self.pending.pop() {
            let up = signed_angle(RIGHT, mesh.direction(mesh.an_edge(w))) > 0.0;
            let assign = if up {
                EdgeAssign::Origin
            } else {
                EdgeAssign::Destination
            };
            let (a, b) = (mesh.an_edge(w), mesh.an_edge(bottom));
            mesh.split_face(a, b, assign)?;
            diagonals += 1;
        }

        log::trace!(
            "monotone face {}: {} vertices, {} diagonals",
            face,
            n,
            diagonals
        );
        Ok(diagonals)
    }
}

impl Default for MonotoneTriangulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the diagonal from `u` to `p` stays inside the face, where `last`
/// is the stack vertex between them on u's chain.
fn is_visible(mesh: &Mesh, u: VertIdx, p: VertIdx, last: VertIdx) -> bool {
    let origin = mesh.coords(u);
    let alpha = signed_angle(sub(mesh.coords(last), origin), sub(mesh.coords(p), origin));
    match mesh.chain(u) {
        Chain::Left => alpha <= 0.0,
        _ => alpha >= 0.0,
    }
}

/// Pick the endpoint of the diagonal `origin -> dest` that lies below the
/// cut, so that its incident edge moves onto the untriangulated part.
fn edge_assign(mesh: &Mesh, origin: VertIdx, dest: VertIdx) -> EdgeAssign {
    let origin_first = sweep_cmp(mesh.coords(origin), mesh.coords(dest)) == Ordering::Less;
    match (mesh.chain(origin), mesh.chain(dest)) {
        (Chain::Left, Chain::Left) => {
            if origin_first {
                EdgeAssign::Origin
            } else {
                EdgeAssign::Destination
            }
        }
        (a, b) if a == b => {
            if origin_first {
                EdgeAssign::Destination
            } else {
                EdgeAssign::Origin
            }
        }
        (Chain::Left, _) => EdgeAssign::Destination,
        _ => EdgeAssign::Origin,
    }
}

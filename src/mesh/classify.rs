// Copyright 2025 Lars Brubaker
// Sweep-order classification and chain utilities for mesh faces.

use std::cmp::Ordering;

use super::{Chain, EdgeIdx, FaceIdx, Mesh, VertIdx};
use crate::geom::{order_from_sum, signed_angle, sweep_cmp, sweep_leq, winding_term, Order, Real};

/// Role of a polygon corner for a top-to-bottom sweep.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexType {
    /// Both neighbors come later, interior angle below 180°.
    Start,
    /// Both neighbors come earlier, interior angle below 180°.
    Stop,
    /// Both neighbors come later, reflex.
    Split,
    /// Both neighbors come earlier, reflex.
    Merge,
    Regular,
}

impl Mesh {
    /// Classify the corner of lface(e) at org(e).
    pub fn classify_corner(&self, e: EdgeIdx) -> VertexType {
        let prev = self.lprev(e);
        let turn = signed_angle(self.direction(prev), self.direction(e));

        let p = self.org_coords(prev);
        let v = self.org_coords(e);
        let n = self.dst_coords(e);
        match (sweep_cmp(p, v), sweep_cmp(v, n)) {
            (Ordering::Less, Ordering::Greater) => {
                if turn > 0.0 {
                    VertexType::Stop
                } else {
                    VertexType::Merge
                }
            }
            (Ordering::Greater, Ordering::Less) => {
                if turn > 0.0 {
                    VertexType::Start
                } else {
                    VertexType::Split
                }
            }
            _ => VertexType::Regular,
        }
    }

    /// Classify `v` on the face of its incident edge.
    #[inline]
    pub fn classify_vertex(&self, v: VertIdx) -> VertexType {
        self.classify_corner(self.an_edge(v))
    }

    /// A face is y-monotone when none of its corners splits or merges.
    pub fn is_monotone(&self, f: FaceIdx) -> bool {
        self.face_edges(f).all(|e| {
            !matches!(self.classify_corner(e), VertexType::Split | VertexType::Merge)
        })
    }

    pub fn face_order(&self, f: FaceIdx) -> Order {
        let sum: Real = self
            .face_edges(f)
            .map(|e| winding_term(self.org_coords(e), self.dst_coords(e)))
            .sum();
        order_from_sum(sum)
    }

    /// Half-edges leaving the first and the last vertex of the face in sweep order.
    pub fn top_and_bottom(&self, f: FaceIdx) -> (EdgeIdx, EdgeIdx) {
        let start = self.face_edge(f);
        let (mut top, mut bottom) = (start, start);
        for e in self.face_edges(f) {
            let p = self.org_coords(e);
            if sweep_cmp(self.org_coords(top), p) == Ordering::Greater {
                top = e;
            } else if sweep_cmp(p, self.org_coords(bottom)) == Ordering::Greater {
                bottom = e;
            }
        }
        (top, bottom)
    }

    /// Label the vertices of a monotone face: top to bottom along lnext is the
    /// left chain, bottom to top the right chain.
    pub fn label_chains(&mut self, f: FaceIdx) {
        let (top, bottom) = self.top_and_bottom(f);
        self.label_chain(top, bottom, Chain::Left);
        self.label_chain(bottom, top, Chain::Right);
    }

    fn label_chain(&mut self, from: EdgeIdx, to: EdgeIdx, chain: Chain) {
        let mut e = from;
        while e != to {
            let v = self.org(e);
            self.verts[v as usize].chain = chain;
            e = self.lnext(e);
        }
    }

    /// Vertices of a monotone face in sweep order, by merging its two chains.
    /// `right` is scratch space for the right chain.
    pub fn sort_sweep_monotone(&self, f: FaceIdx, out: &mut Vec<VertIdx>, right: &mut Vec<VertIdx>) {
        out.clear();
        right.clear();
        let (top, bottom) = self.top_and_bottom(f);

        // The right chain runs bottom to top; popping yields it top down.
        right.extend(self.chain_edges(bottom, top).map(|e| self.org(e)));
        let mut left = self.chain_edges(top, bottom).map(|e| self.org(e)).peekable();

        loop {
            let take_left = match (left.peek(), right.last()) {
                (Some(&l), Some(&r)) => {
                    sweep_cmp(self.coords(l), self.coords(r)) == Ordering::Less
                }
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            if take_left {
                out.extend(left.next());
            } else {
                out.extend(right.pop());
            }
        }
    }

    /// Point every vertex of the face at the half-edge leaving it on that face.
    pub fn ensure_incident_edges_on_face(&mut self, f: FaceIdx) {
        let start = self.face_edge(f);
        let mut e = start;
        loop {
            let v = self.org(e);
            self.verts[v as usize].an_edge = e;
            e = self.lnext(e);
            if e == start {
                break;
            }
        }
    }

    pub fn is_sweep_sorted(&self, vertices: &[VertIdx]) -> bool {
        vertices
            .windows(2)
            .all(|w| sweep_leq(self.coords(w[0]), self.coords(w[1])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::INNER_FACE;

    /// Triangle with a notch cut from its base; vertex 2 is the notch tip.
    fn notched() -> Mesh {
        Mesh::from_ccw(&[
            [0.0, 0.0],
            [1.0, 0.0],
            [1.5, 1.0],
            [2.0, 0.0],
            [3.0, 0.0],
            [1.5, 3.0],
        ])
    }

    #[test]
    fn classify_notched_triangle() {
        let mesh = notched();
        let types: Vec<VertexType> = (0..6).map(|v| mesh.classify_vertex(v)).collect();
        assert_eq!(
            types,
            vec![
                VertexType::Regular,
                VertexType::Stop,
                VertexType::Split,
                VertexType::Regular,
                VertexType::Stop,
                VertexType::Start,
            ]
        );
        assert!(!mesh.is_monotone(INNER_FACE));
    }

    #[test]
    fn classify_merge_vertex() {
        // The same shape upside down: the notch tip becomes a merge vertex.
        let pts = [
            [0.0, 0.0],
            [1.5, -3.0],
            [3.0, 0.0],
            [2.0, 0.0],
            [1.5, -1.0],
            [1.0, 0.0],
        ];
        let mesh = Mesh::from_ccw(&pts);
        assert_eq!(mesh.classify_vertex(4), VertexType::Merge);
        assert_eq!(mesh.classify_vertex(1), VertexType::Stop);
        assert_eq!(mesh.classify_vertex(0), VertexType::Start);
    }

    #[test]
    fn square_is_monotone_with_tie_break() {
        let mesh = Mesh::from_ccw(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(mesh.classify_vertex(3), VertexType::Start);
        assert_eq!(mesh.classify_vertex(2), VertexType::Regular);
        assert_eq!(mesh.classify_vertex(0), VertexType::Regular);
        assert_eq!(mesh.classify_vertex(1), VertexType::Stop);
        assert!(mesh.is_monotone(INNER_FACE));
        assert_eq!(mesh.face_order(INNER_FACE), Order::CounterClockWise);
    }

    #[test]
    fn chains_and_merge_sort() {
        let mut mesh = Mesh::from_ccw(&[
            [0.0, 4.0],
            [-1.0, 3.0],
            [-0.5, 1.0],
            [0.0, 0.0],
            [1.0, 0.5],
            [1.2, 2.0],
            [0.5, 3.5],
        ]);
        let (top, bottom) = mesh.top_and_bottom(INNER_FACE);
        assert_eq!(mesh.org(top), 0);
        assert_eq!(mesh.org(bottom), 3);

        mesh.label_chains(INNER_FACE);
        let chains: Vec<Chain> = (0..7).map(|v| mesh.chain(v)).collect();
        use Chain::{Left, Right};
        assert_eq!(chains, vec![Left, Left, Left, Right, Right, Right, Right]);

        let mut sorted = Vec::new();
        let mut scratch = Vec::new();
        mesh.sort_sweep_monotone(INNER_FACE, &mut sorted, &mut scratch);
        assert_eq!(sorted, vec![0, 6, 1, 5, 2, 4, 3]);
        assert!(mesh.is_sweep_sorted(&sorted));
    }

    #[test]
    fn incident_edges_follow_face() {
        let mut mesh = notched();
        let e = mesh
            .split_face_to_vertex(4, 5, crate::mesh::EdgeAssign::None)
            .unwrap();
        let f = mesh.lface(crate::mesh::sym(e));
        mesh.ensure_incident_edges_on_face(f);
        for e in mesh.face_edges(f) {
            assert_eq!(mesh.an_edge(mesh.org(e)), e);
        }
    }
}

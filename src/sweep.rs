// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Monotone decomposition by a top-to-bottom sweep (Lee and Preparata).
//
// The face's vertices are visited in sweep order. The status holds the
// edges that have the face's interior on their right, each with a helper
// vertex. Split vertices and the helpers left behind by merge vertices are
// resolved with diagonals, after which every face is y-monotone.
//
// Diagonals are inserted without reassigning incident edges, so each
// vertex keeps its original polygon edge for the whole sweep.

use crate::dict::{Dict, NodeIdx};
use crate::error::{Result, TessError};
use crate::geom::{signed_angle, sweep_cmp, sweep_x, Real, RIGHT};
use crate::mesh::{EdgeAssign, EdgeIdx, FaceIdx, Mesh, VertIdx, VertexType};

/// Reusable state for [`MonotoneDecomposer::run`].
pub struct MonotoneDecomposer {
    status: Dict,
    types: Vec<VertexType>,
    events: Vec<VertIdx>,
    diagonals: usize,
}

impl MonotoneDecomposer {
    pub fn new() -> Self {
        MonotoneDecomposer {
            status: Dict::new(),
            types: Vec::new(),
            events: Vec::new(),
            diagonals: 0,
        }
    }

    /// Split face `face` into y-monotone faces. Returns the number of
    /// diagonals inserted.
    pub fn run(&mut self, mesh: &mut Mesh, face: FaceIdx) -> Result<usize> {
        self.status.clear();
        self.events.clear();
        self.types.clear();
        self.diagonals = 0;

        mesh.ensure_incident_edges_on_face(face);
        self.types.resize(mesh.vertex_count(), VertexType::Regular);
        for e in mesh.face_edges(face) {
            let v = mesh.org(e);
            self.types[v as usize] = mesh.classify_corner(e);
            self.events.push(v);
        }
        self.events
            .sort_by(|&a, &b| sweep_cmp(mesh.coords(a), mesh.coords(b)));

        for i in 0..self.events.len() {
            let v = self.events[i];
            self.handle_vertex(mesh, v)?;
        }

        log::debug!(
            "monotone decomposition of face {}: {} vertices, {} diagonals",
            face,
            self.events.len(),
            self.diagonals
        );
        Ok(self.diagonals)
    }

    fn handle_vertex(&mut self, mesh: &mut Mesh, v: VertIdx) -> Result<()> {
        let kind = self.types[v as usize];
        log::trace!("sweep vertex {} {:?} at {:?}", v, kind, mesh.coords(v));

        match kind {
            VertexType::Start => {
                self.insert_edge(mesh, v);
            }
            VertexType::Stop => {
                self.diagonal_to_previous_helper(mesh, v)?;
            }
            VertexType::Split => {
                let left = self.find_left(mesh, v)?;
                let helper = self.status.helper(left);
                self.connect(mesh, v, helper)?;
                self.status.set_helper(left, v);
                self.insert_edge(mesh, v);
            }
            VertexType::Merge => {
                self.diagonal_to_previous_helper(mesh, v)?;
                self.diagonal_to_left_helper(mesh, v)?;
            }
            VertexType::Regular => {
                // Outgoing edge heading down (or right): the interior is on its right.
                if signed_angle(RIGHT, mesh.direction(mesh.an_edge(v))) <= 0.0 {
                    self.diagonal_to_previous_helper(mesh, v)?;
                    self.insert_edge(mesh, v);
                } else {
                    self.diagonal_to_left_helper(mesh, v)?;
                }
            }
        }
        Ok(())
    }

    /// Add the edge leaving `v` to the status with `v` as its helper.
    fn insert_edge(&mut self, mesh: &Mesh, v: VertIdx) {
        let e = mesh.an_edge(v);
        let sweep_y = mesh.coords(v)[1];
        let key = |edge: EdgeIdx| {
            let (o, d) = (mesh.org_coords(edge), mesh.dst_coords(edge));
            sweep_x(o, d, sweep_y).unwrap_or(o[0].min(d[0]))
        };
        self.status.insert(e, v, &|a, b| key(a) <= key(b));
    }

    /// Connect `v` to the helper of the edge ending at `v` if that helper is
    /// a merge vertex, then retire the edge.
    fn diagonal_to_previous_helper(&mut self, mesh: &mut Mesh, v: VertIdx) -> Result<()> {
        let e_prev = mesh.lprev(mesh.an_edge(v));
        let node = self
            .status
            .find(e_prev)
            .ok_or(TessError::MissingStatusEdge { edge: e_prev })?;
        let helper = self.status.helper(node);
        if self.types[helper as usize] == VertexType::Merge {
            self.connect(mesh, v, helper)?;
        }
        self.status.delete(node);
        Ok(())
    }

    /// Connect `v` to the helper of the edge directly left of it if that
    /// helper is a merge vertex, then make `v` the new helper.
    fn diagonal_to_left_helper(&mut self, mesh: &mut Mesh, v: VertIdx) -> Result<()> {
        let left = self.find_left(mesh, v)?;
        let helper = self.status.helper(left);
        if self.types[helper as usize] == VertexType::Merge {
            self.connect(mesh, v, helper)?;
        }
        self.status.set_helper(left, v);
        Ok(())
    }

    /// The active edge crossing the sweep line closest to the left of `v`.
    fn find_left(&self, mesh: &Mesh, v: VertIdx) -> Result<NodeIdx> {
        let p = mesh.coords(v);
        // Status order can go stale around edges lying on the sweep line, so
        // keep the closest crossing instead of stopping at the first one.
        let mut best: Option<(NodeIdx, Real)> = None;
        for node in self.status.iter_rev() {
            let e = self.status.key(node);
            if mesh.dst(e) == v {
                continue;
            }
            let Some(x) = sweep_x(mesh.org_coords(e), mesh.dst_coords(e), p[1]) else {
                continue;
            };
            if p[0] > x && best.map_or(true, |(_, best_x)| x > best_x) {
                best = Some((node, x));
            }
        }
        best.map(|(node, _)| node)
            .ok_or(TessError::LeftEdgeNotFound { vertex: v })
    }

    fn connect(&mut self, mesh: &mut Mesh, v: VertIdx, helper: VertIdx) -> Result<()> {
        let e = mesh.an_edge(v);
        let diagonal = mesh.split_face_to_vertex(e, helper, EdgeAssign::None)?;
        self.diagonals += 1;
        log::trace!("diagonal {} -> {} (half-edge {})", v, helper, diagonal);
        Ok(())
    }
}

impl Default for MonotoneDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

// Copyright 2025 Lars Brubaker
// Output generation for the Triangulator.

use super::Triangulator;
use crate::error::Result;
use crate::geom::{orient, Point, Real};
use crate::mesh::Mesh;

/// Triangles over a shared vertex list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    pub vertices: Vec<Point>,
    /// Three indices per triangle, counter-clockwise.
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Corner positions of each triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Sum of the signed triangle areas.
    pub fn area(&self) -> Real {
        self.triangles().map(|[a, b, c]| 0.5 * orient(a, b, c)).sum()
    }

    /// Vertices as interleaved x, y pairs.
    pub fn flat_vertices(&self) -> Vec<Real> {
        self.vertices.iter().flat_map(|p| [p[0], p[1]]).collect()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}

impl Triangulator {
    /// Copy the triangles out of `mesh`, restoring the caller's vertex order.
    pub(crate) fn write_output(&mut self, mesh: &Mesh) -> Result<()> {
        mesh.extract_triangles(&mut self.output.vertices, &mut self.output.indices)?;
        if self.reversed {
            self.output.vertices.reverse();
            let last = self.output.vertices.len() as u32 - 1;
            for i in self.output.indices.iter_mut() {
                *i = last - *i;
            }
        }
        Ok(())
    }
}

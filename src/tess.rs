// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Polygon triangulation pipeline: preprocessing, monotone decomposition,
// per-face dispatch and monotone triangulation.
//
// A `Triangulator` owns every scratch buffer the pipeline needs, so repeated
// calls reuse their allocations.

mod output;
pub mod preprocess;

pub use output::TriangleMesh;

use crate::error::{Result, TessError};
use crate::geom::{polygon_order, Order, Point, Real};
use crate::mesh::{FaceIdx, FaceType, Mesh, OUTER_FACE};
use crate::monotone::MonotoneTriangulator;
use crate::sweep::MonotoneDecomposer;

use preprocess::{find_self_intersection, remove_duplicates_and_collinear, validate_points};

// ─────────────────────────────── Public types ──────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TessOption {
    /// Run the expensive mesh consistency checks.
    StrictChecks,
    /// Reject input whose edges cross.
    RejectSelfIntersections,
    /// Drop duplicate and nearly collinear points before meshing.
    RemoveDegenerateVertices,
}

/// Default tolerance for duplicate and collinear point removal.
pub const DEFAULT_EPSILON: Real = 1e-2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TessOptions {
    pub strict_checks: bool,
    pub reject_self_intersections: bool,
    pub remove_degenerate_vertices: bool,
    pub epsilon: Real,
}

impl Default for TessOptions {
    fn default() -> Self {
        TessOptions {
            strict_checks: cfg!(debug_assertions),
            reject_self_intersections: true,
            remove_degenerate_vertices: true,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Counters describing the last triangulation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TessStats {
    pub input_points: usize,
    pub removed_points: usize,
    pub decomposition_diagonals: usize,
    /// Faces that were triangles after decomposition.
    pub triangle_faces: usize,
    /// Faces split by the quad fast path.
    pub quad_faces: usize,
    /// Faces handed to the monotone triangulator.
    pub monotone_faces: usize,
    pub monotone_diagonals: usize,
}

// ─────────────────────────── Triangulator ──────────────────────────────────────

pub struct Triangulator {
    options: TessOptions,
    mesh: Mesh,
    decomposer: MonotoneDecomposer,
    monotone: MonotoneTriangulator,
    /// Preprocessed input, counter-clockwise.
    points: Vec<Point>,
    pending: Vec<FaceIdx>,
    /// The caller's points were clockwise.
    reversed: bool,
    output: TriangleMesh,
    stats: TessStats,
}

impl Triangulator {
    pub fn new() -> Self {
        Self::with_options(TessOptions::default())
    }

    pub fn with_options(options: TessOptions) -> Self {
        Triangulator {
            options,
            mesh: Mesh::new(),
            decomposer: MonotoneDecomposer::new(),
            monotone: MonotoneTriangulator::new(),
            points: Vec::new(),
            pending: Vec::new(),
            reversed: false,
            output: TriangleMesh::default(),
            stats: TessStats::default(),
        }
    }

    pub fn set_option(&mut self, option: TessOption, value: bool) {
        match option {
            TessOption::StrictChecks => self.options.strict_checks = value,
            TessOption::RejectSelfIntersections => self.options.reject_self_intersections = value,
            TessOption::RemoveDegenerateVertices => self.options.remove_degenerate_vertices = value,
        }
    }

    pub fn set_epsilon(&mut self, epsilon: Real) {
        self.options.epsilon = epsilon;
    }

    pub fn options(&self) -> &TessOptions {
        &self.options
    }

    /// Triangulate a simple polygon given in either winding.
    ///
    /// On success the returned mesh holds the preprocessed points in the
    /// caller's order and three indices per counter-clockwise triangle.
    /// On failure the previous output is cleared.
    pub fn triangulate(&mut self, points: &[Point]) -> Result<&TriangleMesh> {
        self.output.clear();
        self.stats = TessStats::default();
        if let Err(err) = self.prepare(points).and_then(|()| self.run()) {
            log::debug!("triangulation of {} points failed: {}", points.len(), err);
            self.output.clear();
            return Err(err);
        }
        log::debug!(
            "triangulated {} points ({} removed) into {} triangles",
            self.stats.input_points,
            self.stats.removed_points,
            self.output.triangle_count()
        );
        Ok(&self.output)
    }

    /// Triangulate every bounded face of `mesh` in place.
    ///
    /// Faces that are not y-monotone are decomposed first. Triangles are kept,
    /// quads are split directly and everything else goes through the
    /// monotone sweep.
    pub fn triangulate_mesh(&mut self, mesh: &mut Mesh) -> Result<TessStats> {
        if mesh.face_count() < 2 {
            return Err(TessError::EmptyMesh);
        }
        let strict = self.options.strict_checks;
        let mut stats = TessStats::default();

        // New faces made by a decomposition are already monotone.
        let original_faces = mesh.face_count() as FaceIdx;
        for f in OUTER_FACE + 1..original_faces {
            if !mesh.is_monotone(f) {
                stats.decomposition_diagonals += self.decomposer.run(mesh, f)?;
            }
        }
        if strict {
            if let Some(face) = mesh.bounded_faces().find(|&f| !mesh.is_monotone(f)) {
                return Err(TessError::NonMonotoneFace { face });
            }
        }

        self.pending.clear();
        let monotone_faces = mesh.face_count() as FaceIdx;
        for f in OUTER_FACE + 1..monotone_faces {
            match mesh.face_type(f) {
                FaceType::Triangle => stats.triangle_faces += 1,
                FaceType::Quad => {
                    mesh.split_quad(f)?;
                    stats.quad_faces += 1;
                }
                FaceType::Other => self.pending.push(f),
            }
        }

        for i in 0..self.pending.len() {
            let f = self.pending[i];
            if strict && mesh.face_order(f) != Order::CounterClockWise {
                return Err(TessError::NonCounterClockwiseFace { face: f });
            }
            mesh.ensure_incident_edges_on_face(f);
            stats.monotone_diagonals += self.monotone.run(mesh, f)?;
            stats.monotone_faces += 1;
        }

        if strict {
            if let Some(face) = mesh
                .bounded_faces()
                .find(|&f| mesh.face_type(f) != FaceType::Triangle)
            {
                return Err(TessError::NonTriangularFace {
                    face,
                    edges: mesh.count_face_edges(face),
                });
            }
            mesh.check_mesh()?;
        }

        log::debug!(
            "mesh triangulated: {} decomposition diagonals, {} triangles kept, {} quads split, {} monotone faces",
            stats.decomposition_diagonals,
            stats.triangle_faces,
            stats.quad_faces,
            stats.monotone_faces
        );
        Ok(stats)
    }

    pub fn output(&self) -> &TriangleMesh {
        &self.output
    }

    pub fn vertices(&self) -> &[Point] {
        &self.output.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.output.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.output.triangle_count()
    }

    pub fn stats(&self) -> &TessStats {
        &self.stats
    }

    /// The mesh left by the last call.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn into_output(self) -> TriangleMesh {
        self.output
    }

    // ──────────────────────────── Pipeline stages ───────────────────────────────

    /// Validate and clean the input into `self.points`, counter-clockwise.
    fn prepare(&mut self, points: &[Point]) -> Result<()> {
        if points.len() < 3 {
            return Err(TessError::TooFewPoints { count: points.len() });
        }
        validate_points(points)?;
        if self.options.reject_self_intersections {
            if let Some((first, second)) = find_self_intersection(points) {
                return Err(TessError::SelfIntersection { first, second });
            }
        }

        self.points.clear();
        self.points.extend_from_slice(points);
        self.stats.input_points = points.len();
        if self.options.remove_degenerate_vertices {
            self.stats.removed_points =
                remove_duplicates_and_collinear(&mut self.points, self.options.epsilon);
        }

        self.reversed = false;
        match polygon_order(&self.points) {
            Order::None => return Err(TessError::DegeneratePolygon),
            Order::ClockWise => {
                self.points.reverse();
                self.reversed = true;
            }
            Order::CounterClockWise => {}
        }
        Ok(())
    }

    fn run(&mut self) -> Result<()> {
        let mut mesh = std::mem::take(&mut self.mesh);
        mesh.reset_from_ccw(&self.points);
        mesh.set_strict(self.options.strict_checks);

        let result = self.triangulate_mesh(&mut mesh).and_then(|stats| {
            self.stats = TessStats {
                input_points: self.stats.input_points,
                removed_points: self.stats.removed_points,
                ..stats
            };
            self.write_output(&mesh)
        });
        self.mesh = mesh;
        result
    }
}

impl Default for Triangulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Triangulate one polygon with default options.
pub fn triangulate_polygon(points: &[Point]) -> Result<TriangleMesh> {
    let mut triangulator = Triangulator::new();
    triangulator.triangulate(points)?;
    Ok(triangulator.into_output())
}

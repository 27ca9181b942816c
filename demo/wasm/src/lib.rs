// Copyright 2025 Lars Brubaker
// WASM bindings for monotess

use monotess::{Point, TessOption, Triangulator};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// A reusable triangulator for mask outlines.
#[wasm_bindgen]
pub struct MaskTriangulatorJs {
    inner: Triangulator,
    last_error: Option<String>,
}

#[wasm_bindgen]
impl MaskTriangulatorJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MaskTriangulatorJs {
        MaskTriangulatorJs {
            inner: Triangulator::new(),
            last_error: None,
        }
    }

    /// Set an option (0 = StrictChecks, 1 = RejectSelfIntersections,
    /// 2 = RemoveDegenerateVertices).
    pub fn set_option(&mut self, option: u32, value: bool) {
        let opt = match option {
            0 => TessOption::StrictChecks,
            1 => TessOption::RejectSelfIntersections,
            2 => TessOption::RemoveDegenerateVertices,
            _ => return,
        };
        self.inner.set_option(opt, value);
    }

    pub fn set_epsilon(&mut self, epsilon: f32) {
        self.inner.set_epsilon(epsilon);
    }

    /// Triangulate a closed outline given as flat [x0,y0, x1,y1, ...].
    /// Returns true on success; see `last_error` otherwise.
    pub fn triangulate(&mut self, vertices: &[f32]) -> bool {
        let points = to_points(vertices);
        match self.inner.triangulate(&points) {
            Ok(_) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                false
            }
        }
    }

    pub fn triangle_count(&self) -> u32 {
        self.inner.triangle_count() as u32
    }

    pub fn vertex_count(&self) -> u32 {
        self.inner.vertices().len() as u32
    }

    /// Flat vertex positions [x0,y0, x1,y1, ...].
    pub fn get_vertices(&self) -> Vec<f32> {
        self.inner.output().flat_vertices()
    }

    /// Flat triangle index triples [i0,i1,i2, ...].
    pub fn get_indices(&self) -> Vec<u32> {
        self.inner.indices().to_vec()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.clone()
    }
}

impl Default for MaskTriangulatorJs {
    fn default() -> Self {
        Self::new()
    }
}

/// Pair up a flat coordinate array; a trailing odd value is ignored.
fn to_points(vertices: &[f32]) -> Vec<Point> {
    vertices.chunks_exact(2).map(|c| [c[0], c[1]]).collect()
}

/// Convenience: triangulate one outline and return the flat vertex array
/// (use triangulate_mask_indices for the indices). Empty on failure.
#[wasm_bindgen]
pub fn triangulate_mask(vertices: &[f32]) -> Vec<f32> {
    let mut t = MaskTriangulatorJs::new();
    if !t.triangulate(vertices) {
        return Vec::new();
    }
    t.get_vertices()
}

/// Convenience: same as triangulate_mask but returns the index array.
#[wasm_bindgen]
pub fn triangulate_mask_indices(vertices: &[f32]) -> Vec<u32> {
    let mut t = MaskTriangulatorJs::new();
    if !t.triangulate(vertices) {
        return Vec::new();
    }
    t.get_indices()
}

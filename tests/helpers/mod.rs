// Copyright 2025 Lars Brubaker
// Shared test utilities for monotess tests.

#![allow(dead_code)]

use std::f32::consts::PI;

use monotess::geom::{orient, signed_area};
use monotess::{Mesh, Point, TriangleMesh};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator so every run sees the same polygons.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Polygon area from its outline, positive for CCW.
pub fn polygon_area(points: &[Point]) -> f32 {
    signed_area(points)
}

/// Signed area of a triangle given 3 vertices.
pub fn triangle_area(a: Point, b: Point, c: Point) -> f32 {
    0.5 * orient(a, b, c)
}

/// Total signed area of the triangles of every bounded face of `mesh`.
pub fn mesh_triangle_area(mesh: &Mesh) -> f32 {
    let mut verts = Vec::new();
    let mut indices = Vec::new();
    mesh.extract_triangles(&mut verts, &mut indices)
        .expect("mesh is not fully triangulated");
    indices
        .chunks(3)
        .map(|t| triangle_area(verts[t[0] as usize], verts[t[1] as usize], verts[t[2] as usize]))
        .sum()
}

/// Check that every index is in range and every triangle is CCW and non-degenerate.
pub fn validate_output(out: &TriangleMesh) {
    assert_eq!(out.indices.len() % 3, 0, "index count is not a multiple of 3");
    let n = out.vertices.len() as u32;
    for tri in out.indices.chunks(3) {
        for &i in tri {
            assert!(i < n, "index {} out of range ({} vertices)", i, n);
        }
        assert!(
            tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2],
            "triangle {:?} repeats a vertex",
            tri
        );
    }
    for [a, b, c] in out.triangles() {
        assert!(
            triangle_area(a, b, c) > 0.0,
            "triangle {:?} {:?} {:?} is not CCW",
            a,
            b,
            c
        );
    }
}

/// Star-shaped CCW polygon inside the unit square: sorted random angles
/// around the center, each at a random fraction of the distance to the
/// square's border. `noise` in 0..1 is how far inward points may move.
pub fn star_polygon(rng: &mut StdRng, num_points: usize, noise: f32) -> Vec<Point> {
    let mut angles: Vec<f32> = (0..num_points).map(|_| rng.gen::<f32>()).collect();
    angles.sort_by(|a, b| a.total_cmp(b));

    let center = [0.5, 0.5];
    let half = 0.5;
    let lerp_min = (1.0 - noise).clamp(0.0, 1.0);
    angles
        .iter()
        .map(|t| {
            let a = t * 2.0 * PI;
            // Up, rotated counter-clockwise.
            let dir = [-a.sin(), a.cos()];
            let max_scale = (half / dir[0].abs()).min(half / dir[1].abs());
            let scale = max_scale * (lerp_min + (1.0 - lerp_min) * rng.gen::<f32>());
            [center[0] + dir[0] * scale, center[1] + dir[1] * scale]
        })
        .collect()
}

/// Shift uniform samples toward some parts of the interval, to make
/// monotone polygons with pronounced funnels.
fn wiggle(value: f32, freq: f32, amplitude: f32, offset: f32) -> f32 {
    (amplitude / PI) * (2.0 * PI * freq * (value + offset / freq)).sin() * (PI * value).sin() + value
}

/// CCW polygon monotone in y inside the unit square: a top and a bottom
/// vertex joined by a left chain and a right chain.
pub fn monotone_polygon(rng: &mut StdRng, num_points: usize, freq: f32, amplitude: f32) -> Vec<Point> {
    let left_count = (num_points - 2) / 2;
    let right_count = num_points - 2 - left_count;

    let chain_ys = |count: usize, rng: &mut StdRng| {
        let offset = rng.gen::<f32>();
        let mut ys: Vec<f32> = (0..count)
            .map(|_| {
                let t = wiggle(rng.gen::<f32>(), freq, amplitude, offset);
                // Stay off the top and bottom rows.
                0.01 + (0.99 - 0.01) * t
            })
            .collect();
        ys.sort_by(|a, b| a.total_cmp(b));
        ys
    };
    let mut y_left = chain_ys(left_count, rng);
    let y_right = chain_ys(right_count, rng);
    y_left.reverse();

    let mut points = Vec::with_capacity(num_points);
    points.push([0.5, 1.0]);
    let mut x = rng.gen::<f32>();
    for y in y_left {
        x = (x + rng.gen::<f32>() * 0.1).fract();
        points.push([0.49 * x, y]);
    }
    points.push([0.5, 0.0]);
    for y in y_right {
        x = (x + rng.gen::<f32>() * 0.1).fract();
        points.push([0.51 + 0.49 * x, y]);
    }
    points
}

/// Same polygon with its winding reversed.
pub fn reversed(points: &[Point]) -> Vec<Point> {
    points.iter().rev().copied().collect()
}

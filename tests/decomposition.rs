// Copyright 2025 Lars Brubaker
// Monotone decomposition on generated and axis-aligned polygons.

mod helpers;

use monotess::mesh::INNER_FACE;
use monotess::{Mesh, MonotoneDecomposer, Point, VertexType};

fn decompose(points: &[Point]) -> (Mesh, usize) {
    let mut mesh = Mesh::from_ccw(points);
    mesh.set_strict(true);
    let diagonals = MonotoneDecomposer::new()
        .run(&mut mesh, INNER_FACE)
        .unwrap_or_else(|e| panic!("decomposition failed: {}", e));
    mesh.check_mesh().unwrap();
    (mesh, diagonals)
}

fn assert_all_monotone(mesh: &Mesh) {
    for f in mesh.bounded_faces() {
        assert!(mesh.is_monotone(f), "face {} is not monotone", f);
    }
}

#[test]
fn split_and_merge_counts_match_diagonals() {
    let mut rng = helpers::rng(0);
    for case in 0..24 {
        let n = 12 + case;
        let pts = helpers::star_polygon(&mut rng, n, 0.9);
        let mesh = Mesh::from_ccw(&pts);
        let reflex_turns = (0..n as u32)
            .filter(|&v| {
                matches!(
                    mesh.classify_vertex(v),
                    VertexType::Split | VertexType::Merge
                )
            })
            .count();

        let (mesh, diagonals) = decompose(&pts);
        assert_all_monotone(&mesh);
        // Every split and merge vertex is fixed by at least one diagonal,
        // and one diagonal can fix at most two of them.
        assert!(diagonals * 2 >= reflex_turns, "case {}", case);
        assert!(diagonals <= reflex_turns, "case {}", case);
        assert_eq!(mesh.face_count(), 2 + diagonals);
        // Each diagonal adds two half-edges to the bounded faces.
        let total: usize = mesh.bounded_faces().map(|f| mesh.count_face_edges(f)).sum();
        assert_eq!(total, n + 2 * diagonals);
    }
}

#[test]
fn monotone_polygon_needs_nothing() {
    let mut rng = helpers::rng(3);
    for _ in 0..8 {
        let pts = helpers::monotone_polygon(&mut rng, 20, 2.0, 0.5);
        let (mesh, diagonals) = decompose(&pts);
        assert_eq!(diagonals, 0);
        assert_eq!(mesh.face_count(), 2);
    }
}

#[test]
fn square_is_already_monotone() {
    let (mesh, diagonals) = decompose(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    assert_eq!(diagonals, 0);
    assert_all_monotone(&mesh);
}

#[test]
fn rectangle_row_of_teeth() {
    // A comb with three teeth pointing up: two merge vertices between them.
    let pts = [
        [0.0, 0.0],
        [5.0, 0.0],
        [5.0, 2.0],
        [4.0, 2.0],
        [4.0, 1.0],
        [3.0, 1.0],
        [3.0, 2.0],
        [2.0, 2.0],
        [2.0, 1.0],
        [1.0, 1.0],
        [1.0, 2.0],
        [0.0, 2.0],
    ];
    let (mesh, diagonals) = decompose(&pts);
    assert_eq!(diagonals, 2);
    assert_all_monotone(&mesh);
}

#[test]
fn hanging_teeth() {
    // Same comb upside down: the gaps open downward and create split vertices.
    let pts = [
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [2.0, 1.0],
        [2.0, 0.0],
        [3.0, 0.0],
        [3.0, 1.0],
        [4.0, 1.0],
        [4.0, 0.0],
        [5.0, 0.0],
        [5.0, 2.0],
        [0.0, 2.0],
    ];
    let (mesh, diagonals) = decompose(&pts);
    assert_eq!(diagonals, 2);
    assert_all_monotone(&mesh);
}

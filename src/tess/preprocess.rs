// Copyright 2025 Lars Brubaker
// Input checks and cleanup applied before a polygon is loaded into the mesh.

use crate::error::{Result, TessError};
use crate::geom::{angle, segments_intersect, sub, Point, Real};

/// Reject NaN and infinite coordinates.
pub fn validate_points(points: &[Point]) -> Result<()> {
    match points
        .iter()
        .position(|p| !(p[0].is_finite() && p[1].is_finite()))
    {
        Some(index) => Err(TessError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}

/// First pair of non-adjacent edges that intersect, as edge indices
/// (edge i runs from point i to point i + 1). Quadratic.
pub fn find_self_intersection(points: &[Point]) -> Option<(usize, usize)> {
    let n = points.len();
    if n < 4 {
        return None;
    }
    for i in 0..n - 1 {
        for j in i + 2..n {
            // The closing edge touches edge 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_intersect(points[i], points[i + 1], points[j], points[(j + 1) % n]) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Repeatedly drop the first point that nearly duplicates its successor or
/// barely turns, until nothing changes or only a triangle is left.
/// Returns the number of points removed.
pub fn remove_duplicates_and_collinear(points: &mut Vec<Point>, epsilon: Real) -> usize {
    let mut removed = 0;
    while points.len() > 3 {
        let n = points.len();
        let found = (0..n).find(|&i| {
            let pt = points[i];
            let next = points[(i + 1) % n];
            if (pt[0] - next[0]).abs() < epsilon && (pt[1] - next[1]).abs() < epsilon {
                return true;
            }
            let prev = points[(i + n - 1) % n];
            angle(sub(pt, prev), sub(next, pt)) < epsilon
        });
        match found {
            Some(i) => {
                points.remove(i);
                removed += 1;
            }
            None => break,
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bowtie_intersects() {
        let bowtie = [[0.0, 0.0], [1.0, 1.0], [1.0, 0.0], [0.0, 1.0]];
        assert_eq!(find_self_intersection(&bowtie), Some((0, 2)));
        let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        assert_eq!(find_self_intersection(&square), None);
        assert_eq!(find_self_intersection(&bowtie[..3]), None);
    }

    #[test]
    fn non_finite_rejected() {
        let pts = [[0.0, 0.0], [1.0, f32::NAN], [1.0, 1.0]];
        assert_eq!(validate_points(&pts), Err(TessError::NonFiniteCoordinate { index: 1 }));
        assert_eq!(validate_points(&[[0.0, 0.0], [1.0, 0.0]]), Ok(()));
    }

    #[test]
    fn removes_duplicate() {
        let mut pts = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 0.0], [1.0, 1.0]];
        assert_eq!(remove_duplicates_and_collinear(&mut pts, 1e-2), 1);
        assert_eq!(pts, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
    }

    #[test]
    fn removes_collinear() {
        let mut pts = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 0.4], [1.0, 1.0]];
        assert_eq!(remove_duplicates_and_collinear(&mut pts, 1e-2), 1);
        assert_eq!(pts, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
    }

    #[test]
    fn keeps_clean_polygon() {
        let mut pts = vec![[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 2.0], [0.0, 1.0]];
        assert_eq!(remove_duplicates_and_collinear(&mut pts, 1e-2), 0);
        assert_eq!(pts.len(), 5);
    }

    #[test]
    fn collapses_runs_of_collinear_points() {
        let mut pts = vec![
            [0.0, 0.0],
            [1.0, 0.0],
            [2.0, 0.0],
            [3.0, 0.0],
            [3.0, 3.0],
            [0.0, 3.0],
            [0.0, 1.5],
        ];
        assert_eq!(remove_duplicates_and_collinear(&mut pts, 1e-2), 3);
        assert_eq!(pts, vec![[0.0, 0.0], [3.0, 0.0], [3.0, 3.0], [0.0, 3.0]]);
    }
}

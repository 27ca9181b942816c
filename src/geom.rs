// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Planar geometry on polygon points.
//
// The sweep line moves from top to bottom: a point comes first when it is
// higher (larger y), ties go to the point on the left (smaller x). All
// predicates compare coordinates exactly; there is no epsilon anywhere in
// this file.

use std::cmp::Ordering;

pub type Real = f32;

/// A polygon point, `[x, y]`.
pub type Point = [Real; 2];

/// Unit vector along +x. Used as the reference direction for turn tests.
pub const RIGHT: Point = [1.0, 0.0];

/// Winding of a closed point sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Zero signed area.
    None,
    ClockWise,
    CounterClockWise,
}

#[inline]
pub fn sub(a: Point, b: Point) -> Point {
    [a[0] - b[0], a[1] - b[1]]
}

#[inline]
pub fn dot(a: Point, b: Point) -> Real {
    a[0] * b[0] + a[1] * b[1]
}

/// z component of the 3D cross product of `a` and `b`.
#[inline]
pub fn cross(a: Point, b: Point) -> Real {
    a[0] * b[1] - a[1] * b[0]
}

/// Twice the signed area of triangle (a, b, c). Positive when CCW.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> Real {
    cross(sub(b, a), sub(c, a))
}

/// Sweep comparison: descending y, then ascending x.
#[inline]
pub fn sweep_cmp(u: Point, v: Point) -> Ordering {
    if u[1] == v[1] {
        u[0].partial_cmp(&v[0]).unwrap_or(Ordering::Equal)
    } else {
        v[1].partial_cmp(&u[1]).unwrap_or(Ordering::Equal)
    }
}

/// Returns true if u is reached by the sweep no later than v.
#[inline]
pub fn sweep_leq(u: Point, v: Point) -> bool {
    sweep_cmp(u, v) != Ordering::Greater
}

/// Signed angle in radians, in (-π, π], to turn `from` onto `to`.
/// Positive for a counter-clockwise turn. Zero if either vector is zero.
#[inline]
pub fn signed_angle(from: Point, to: Point) -> Real {
    cross(from, to).atan2(dot(from, to))
}

/// Unsigned angle in radians between two directions.
#[inline]
pub fn angle(from: Point, to: Point) -> Real {
    signed_angle(from, to).abs()
}

/// One edge's contribution to the winding sum.
#[inline]
pub fn winding_term(p1: Point, p2: Point) -> Real {
    (p2[0] - p1[0]) * (p2[1] + p1[1])
}

/// Winding of a closed point sequence, from the sum of
/// `(x2 - x1) * (y2 + y1)` over its edges.
pub fn polygon_order(points: &[Point]) -> Order {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        sum += winding_term(points[i], points[(i + 1) % n]);
    }
    order_from_sum(sum)
}

/// Maps a winding sum to an [`Order`]: positive sums are clockwise.
#[inline]
pub fn order_from_sum(sum: Real) -> Order {
    if sum == 0.0 {
        Order::None
    } else if sum > 0.0 {
        Order::ClockWise
    } else {
        Order::CounterClockWise
    }
}

/// Shoelace area, positive for CCW input.
pub fn signed_area(points: &[Point]) -> Real {
    let n = points.len();
    let mut area = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        area += p[0] * q[1] - q[0] * p[1];
    }
    area * 0.5
}

/// Proper or touching intersection of segments p1p2 and p3p4.
/// Parallel segments never intersect, even when they overlap.
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let denom = (p4[1] - p3[1]) * (p2[0] - p1[0]) - (p4[0] - p3[0]) * (p2[1] - p1[1]);
    if denom == 0.0 {
        return false;
    }
    let ua = ((p4[0] - p3[0]) * (p1[1] - p3[1]) - (p4[1] - p3[1]) * (p1[0] - p3[0])) / denom;
    let ub = ((p2[0] - p1[0]) * (p1[1] - p3[1]) - (p2[1] - p1[1]) * (p1[0] - p3[0])) / denom;
    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// x where segment org-dst crosses the horizontal line at `sweep_y`.
/// None if the segment does not reach the line, or lies on it.
#[inline]
pub fn sweep_x(org: Point, dst: Point, sweep_y: Real) -> Option<Real> {
    let r = (org[1] - sweep_y) / (org[1] - dst[1]);
    if !(0.0..=1.0).contains(&r) {
        return None;
    }
    Some(org[0] + (dst[0] - org[0]) * r)
}

// Copyright 2025 Lars Brubaker
//! Error types for polygon triangulation.
//!
//! Every failure is either bad input from the caller ([`ErrorKind::InvalidInput`])
//! or a mesh operation whose preconditions do not hold
//! ([`ErrorKind::InvalidOperation`]). The second kind points at a bug or at
//! numerically hostile input that slipped past preprocessing.

use thiserror::Error;

use crate::mesh::{EdgeIdx, FaceIdx, VertIdx};

/// Result type alias using [`TessError`].
pub type Result<T> = std::result::Result<T, TessError>;

/// Coarse classification of a [`TessError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InvalidOperation,
}

/// Errors raised while preparing, decomposing or triangulating a polygon.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TessError {
    /// Fewer than three points were given.
    #[error("polygon needs at least 3 points, got {count}")]
    TooFewPoints {
        /// Number of points received.
        count: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        index: usize,
    },

    /// Two non-adjacent polygon edges cross.
    #[error("polygon edges {first} and {second} intersect")]
    SelfIntersection {
        /// Index of the first edge (edge i runs from point i to point i + 1).
        first: usize,
        /// Index of the second edge.
        second: usize,
    },

    /// The polygon encloses no area.
    #[error("polygon has zero area")]
    DegeneratePolygon,

    /// The unbounded face is never split.
    #[error("cannot split the outer face")]
    SplitOuterFace,

    #[error("cannot split a face along half-edge {edge} and itself")]
    SameEdge { edge: EdgeIdx },

    #[error("half-edges {a} and {b} do not bound the same face")]
    NotOnSameFace { a: EdgeIdx, b: EdgeIdx },

    /// The two origins are already joined by a polygon edge.
    #[error("half-edges {a} and {b} are already connected")]
    AlreadyConnected { a: EdgeIdx, b: EdgeIdx },

    #[error("face {face} has {edges} edges, at least 4 are needed to split it")]
    FaceTooSmall { face: FaceIdx, edges: usize },

    #[error("half-edge {b} is not reachable from half-edge {a}")]
    NotOnSameCycle { a: EdgeIdx, b: EdgeIdx },

    /// A split lost or gained edges.
    #[error("split produced faces of {first} and {second} edges from {before}")]
    EdgeCountMismatch {
        before: usize,
        first: usize,
        second: usize,
    },

    /// No half-edge around the vertex shares a face with the given half-edge.
    #[error("vertex {vertex} has no half-edge on the face of half-edge {edge}")]
    NoConnectableEdge { edge: EdgeIdx, vertex: VertIdx },

    /// The sweep found no active edge left of a vertex that needs one.
    #[error("no active edge left of vertex {vertex}")]
    LeftEdgeNotFound { vertex: VertIdx },

    /// A half-edge expected in the sweep status is absent.
    #[error("half-edge {edge} is not in the sweep status")]
    MissingStatusEdge { edge: EdgeIdx },

    #[error("face {face} is not y-monotone")]
    NonMonotoneFace { face: FaceIdx },

    #[error("face {face} is not counter-clockwise")]
    NonCounterClockwiseFace { face: FaceIdx },

    #[error("face {face} has {edges} edges, expected a triangle")]
    NonTriangularFace { face: FaceIdx, edges: usize },

    /// The mesh holds no polygon face.
    #[error("mesh has no polygon face")]
    EmptyMesh,

    /// Structural inconsistency found by [`crate::mesh::Mesh::check_mesh`].
    #[error("corrupt mesh at half-edge {edge}: {reason}")]
    CorruptMesh { edge: EdgeIdx, reason: &'static str },
}

impl TessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TessError::TooFewPoints { .. }
            | TessError::NonFiniteCoordinate { .. }
            | TessError::SelfIntersection { .. }
            | TessError::DegeneratePolygon => ErrorKind::InvalidInput,
            _ => ErrorKind::InvalidOperation,
        }
    }

    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_classified() {
        assert!(TessError::TooFewPoints { count: 2 }.is_invalid_input());
        assert!(TessError::SelfIntersection { first: 0, second: 2 }.is_invalid_input());
        assert_eq!(TessError::SplitOuterFace.kind(), ErrorKind::InvalidOperation);
        assert_eq!(
            TessError::LeftEdgeNotFound { vertex: 3 }.kind(),
            ErrorKind::InvalidOperation
        );
    }

    #[test]
    fn messages_name_the_elements() {
        let msg = TessError::SelfIntersection { first: 0, second: 2 }.to_string();
        assert_eq!(msg, "polygon edges 0 and 2 intersect");
        let msg = TessError::NonTriangularFace { face: 4, edges: 5 }.to_string();
        assert!(msg.contains("face 4"), "{}", msg);
    }
}

// monotess: simple polygon triangulation by monotone decomposition
// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)

pub mod dict;
pub mod error;
pub mod geom;
pub mod mesh;
pub mod monotone;
pub mod sweep;
pub mod tess;

pub use error::{ErrorKind, Result, TessError};
pub use geom::{Order, Point, Real};
pub use mesh::{Mesh, VertexType};
pub use monotone::MonotoneTriangulator;
pub use sweep::MonotoneDecomposer;
pub use tess::{
    triangulate_polygon, TessOption, TessOptions, TessStats, TriangleMesh, Triangulator,
};

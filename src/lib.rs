//! # objmesh
//!
//! Wavefront OBJ mesh ingestion and geometry preparation for rendering.
//!
//! The [`obj`] module parses a subset of the OBJ text format into a
//! [`mesh::Mesh`]: vertices are welded into a deduplicated, GPU-ready
//! vertex buffer and quad faces are triangulated on the fly. The mesh
//! can then derive per-vertex normals and tangents, compute its bounding
//! box, and expose contiguous attribute buffers for upload.

pub mod math;
pub mod mesh;
pub mod obj;
pub mod transform;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

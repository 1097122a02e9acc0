//! Error types for mesh geometry operations.

/// Errors that can occur during mesh geometry operations.
#[derive(Debug)]
pub enum MeshError {
    /// The mesh has no vertices, so the operation has nothing to work on.
    EmptyMesh,
    /// A vertex accumulated a zero-length normal: it belongs to no
    /// non-degenerate triangle.
    DegenerateVertex {
        /// Index of the offending vertex.
        vertex: usize,
    },
    /// Tangent computation requires per-vertex texture coordinates.
    MissingUvs,
    /// A whole-buffer setter received data of the wrong length.
    LengthMismatch {
        /// Expected length (the vertex count).
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// An index buffer references a vertex past the end of the vertex array.
    IndexOutOfRange {
        /// The offending index value.
        index: u32,
        /// Number of vertices in the mesh.
        count: usize,
    },
    /// An index buffer length is not a multiple of 3.
    PartialTriangle {
        /// Length of the offending index buffer.
        len: usize,
    },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMesh => write!(f, "mesh has no vertices"),
            Self::DegenerateVertex { vertex } => {
                write!(f, "vertex {vertex} has a zero accumulated normal")
            }
            Self::MissingUvs => write!(f, "mesh has no texture coordinates"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer length {actual} does not match vertex count {expected}")
            }
            Self::IndexOutOfRange { index, count } => {
                write!(f, "index {index} out of range for {count} vertices")
            }
            Self::PartialTriangle { len } => {
                write!(f, "index buffer length {len} is not a multiple of 3")
            }
        }
    }
}

impl std::error::Error for MeshError {}

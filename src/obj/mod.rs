//! Wavefront OBJ loader.
//!
//! Loads a line-oriented subset of the OBJ text format into a single-part
//! [`Mesh`]:
//!
//! - `v x y z` — vertex position
//! - `vt u v` — texture coordinate
//! - `vn x y z` — vertex normal
//! - `f` — triangle or quad face, index groups `v`, `v/t`, `v//n` or `v/t/n`
//! - `usemtl` and every other directive are ignored
//!
//! Indices are 1-based in the file; negative (relative) indices are not
//! supported. Loading runs three passes: parse ([`parser`]), weld raw
//! `(position, normal, uv)` triples into unique vertices ([`weld`]), and
//! triangulate quads ([`triangulate`]). Structural problems are detected
//! before any mesh is built, so a failed load never leaves partial state.
//!
//! # Example
//!
//! ```ignore
//! let mut mesh = objmesh::obj::load_obj_file("assets/bunny.obj")?;
//! if !mesh.has_normals() {
//!     mesh.compute_normals()?;
//! }
//! ```

mod error;
mod parser;
#[cfg(test)]
mod tests;
mod triangulate;
mod weld;

pub use error::ObjError;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::mesh::Mesh;

/// Load an OBJ mesh from a reader.
///
/// The entire input is parsed and validated before the mesh is assembled.
/// The result always has exactly one part; multi-part (multi-material)
/// meshes are out of scope and material directives are ignored.
pub fn load_obj(reader: impl BufRead) -> Result<Mesh, ObjError> {
    let raw = parser::parse_obj(reader)?;
    let welded = weld::weld_vertices(&raw);
    let indices = triangulate::triangulate(&welded.indices, &raw.quad_faces, &welded.vertices);

    log::debug!(
        "loaded OBJ mesh: {} faces, {} unique vertices ({} occurrences), normals={}, uvs={}",
        raw.quad_faces.len(),
        welded.vertices.len(),
        welded.indices.len(),
        !welded.normals.is_empty(),
        !welded.uvs.is_empty(),
    );

    Ok(Mesh::from_welded(
        welded.vertices,
        welded.normals,
        welded.uvs,
        indices,
    ))
}

/// Load an OBJ mesh from a file path.
///
/// The file is read to completion and closed before any mesh state is
/// produced. A missing or unreadable file surfaces as [`ObjError::Io`].
pub fn load_obj_file(path: impl AsRef<Path>) -> Result<Mesh, ObjError> {
    let file = File::open(path)?;
    load_obj(BufReader::new(file))
}

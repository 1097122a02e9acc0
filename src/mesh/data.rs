//! The [`Mesh`] aggregate: deduplicated vertex buffers and triangle indices.

use std::path::Path;

use crate::math::{Color, Vec2, Vec3};
use crate::obj::ObjError;
use crate::transform::Transform;

use super::error::MeshError;

/// A CPU-side triangular mesh.
///
/// Attribute buffers are parallel arrays: `normals`, `tangents`, `colors`
/// and `uvs` are either empty or exactly as long as `vertices`. Indices are
/// grouped into parts; each part is a flat triangle list whose length is a
/// multiple of 3 and whose entries all reference `vertices`. Loading from an
/// OBJ file produces exactly one part.
///
/// All attribute buffers are contiguous and exposed both as typed slices and
/// as byte views (via [`bytemuck`]) for zero-copy GPU upload. Byte views
/// borrow the mesh, so they cannot outlive a structural mutation.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    tangents: Vec<Vec3>,
    colors: Vec<Color>,
    uvs: Vec<Vec2>,
    parts: Vec<Vec<u32>>,
    transform: Transform,
}

impl Mesh {
    /// Create an empty mesh with an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from prepared buffers, validating the invariants.
    ///
    /// `normals` and `uvs` must be empty or exactly as long as `vertices`.
    /// `indices` becomes the single part and must be a triangle list with
    /// every entry in range.
    pub fn from_buffers(
        vertices: Vec<Vec3>,
        normals: Vec<Vec3>,
        uvs: Vec<Vec2>,
        indices: Vec<u32>,
    ) -> Result<Self, MeshError> {
        if !normals.is_empty() && normals.len() != vertices.len() {
            return Err(MeshError::LengthMismatch {
                expected: vertices.len(),
                actual: normals.len(),
            });
        }
        if !uvs.is_empty() && uvs.len() != vertices.len() {
            return Err(MeshError::LengthMismatch {
                expected: vertices.len(),
                actual: uvs.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle { len: indices.len() });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(MeshError::IndexOutOfRange {
                index,
                count: vertices.len(),
            });
        }
        Ok(Self {
            vertices,
            normals,
            uvs,
            parts: vec![indices],
            ..Self::default()
        })
    }

    /// Load an OBJ file into this mesh, replacing its current geometry.
    ///
    /// The transform is preserved. On failure the mesh is left untouched:
    /// the file is parsed and welded into a complete replacement before any
    /// state is committed.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), ObjError> {
        let mut loaded = crate::obj::load_obj_file(path)?;
        loaded.transform = self.transform;
        *self = loaded;
        Ok(())
    }

    /// Clear all buffers, returning the mesh to its empty state.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.tangents.clear();
        self.colors.clear();
        self.uvs.clear();
        self.parts.clear();
    }

    // -- Counts --

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of index-buffer parts.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Number of triangles in a part.
    ///
    /// # Panics
    ///
    /// Panics if `part` is out of range.
    pub fn face_count(&self, part: usize) -> usize {
        self.parts[part].len() / 3
    }

    /// Vertex index of corner `i` (0, 1 or 2) of a face within a part.
    ///
    /// # Panics
    ///
    /// Panics if any argument is out of range.
    pub fn vertex_index_in_face(&self, face: usize, i: usize, part: usize) -> u32 {
        assert!(i < 3, "a triangle has corners 0..3, got {i}");
        self.parts[part][face * 3 + i]
    }

    // -- Presence predicates --

    /// True if every vertex has a normal.
    pub fn has_normals(&self) -> bool {
        !self.vertices.is_empty() && self.normals.len() == self.vertices.len()
    }

    /// True if every vertex has a tangent.
    pub fn has_tangents(&self) -> bool {
        !self.vertices.is_empty() && self.tangents.len() == self.vertices.len()
    }

    /// True if every vertex has a color.
    pub fn has_colors(&self) -> bool {
        !self.vertices.is_empty() && self.colors.len() == self.vertices.len()
    }

    /// True if every vertex has a texture coordinate.
    pub fn has_uvs(&self) -> bool {
        !self.vertices.is_empty() && self.uvs.len() == self.vertices.len()
    }

    // -- Per-index accessors --

    /// Position of vertex `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range. The same applies to all per-index
    /// accessors below.
    pub fn vertex(&self, i: usize) -> Vec3 {
        self.vertices[i]
    }

    /// Set the position of vertex `i`.
    pub fn set_vertex(&mut self, i: usize, vertex: Vec3) {
        self.vertices[i] = vertex;
    }

    /// Normal of vertex `i`.
    pub fn normal(&self, i: usize) -> Vec3 {
        self.normals[i]
    }

    /// Set the normal of vertex `i`.
    pub fn set_normal(&mut self, i: usize, normal: Vec3) {
        self.normals[i] = normal;
    }

    /// Tangent of vertex `i`.
    pub fn tangent(&self, i: usize) -> Vec3 {
        self.tangents[i]
    }

    /// Color of vertex `i`.
    pub fn color(&self, i: usize) -> Color {
        self.colors[i]
    }

    /// Set the color of vertex `i`.
    pub fn set_color(&mut self, i: usize, color: Color) {
        self.colors[i] = color;
    }

    /// Texture coordinate of vertex `i`.
    pub fn uv(&self, i: usize) -> Vec2 {
        self.uvs[i]
    }

    /// Set the texture coordinate of vertex `i`.
    pub fn set_uv(&mut self, i: usize, uv: Vec2) {
        self.uvs[i] = uv;
    }

    // -- Whole-buffer setters --

    /// Replace the per-vertex colors.
    ///
    /// The buffer must be exactly `vertex_count()` long; colors are written
    /// by collaborators that have no other way to allocate the buffer.
    pub fn set_colors(&mut self, colors: Vec<Color>) -> Result<(), MeshError> {
        if colors.len() != self.vertices.len() {
            return Err(MeshError::LengthMismatch {
                expected: self.vertices.len(),
                actual: colors.len(),
            });
        }
        self.colors = colors;
        Ok(())
    }

    /// Replace the per-vertex normals.
    pub fn set_normals(&mut self, normals: Vec<Vec3>) -> Result<(), MeshError> {
        if normals.len() != self.vertices.len() {
            return Err(MeshError::LengthMismatch {
                expected: self.vertices.len(),
                actual: normals.len(),
            });
        }
        self.normals = normals;
        Ok(())
    }

    /// Replace the per-vertex texture coordinates.
    pub fn set_uvs(&mut self, uvs: Vec<Vec2>) -> Result<(), MeshError> {
        if uvs.len() != self.vertices.len() {
            return Err(MeshError::LengthMismatch {
                expected: self.vertices.len(),
                actual: uvs.len(),
            });
        }
        self.uvs = uvs;
        Ok(())
    }

    // -- Slice views --

    /// All vertex positions.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// All normals (empty if none are present).
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// All tangents (empty until computed).
    pub fn tangents(&self) -> &[Vec3] {
        &self.tangents
    }

    /// All colors (empty if none are present).
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// All texture coordinates (empty if none are present).
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// The triangle index buffer of a part.
    ///
    /// # Panics
    ///
    /// Panics if `part` is out of range.
    pub fn indices(&self, part: usize) -> &[u32] {
        &self.parts[part]
    }

    // -- Byte views for GPU upload --

    /// Vertex positions as bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Normals as bytes.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Tangents as bytes.
    pub fn tangent_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tangents)
    }

    /// Colors as bytes.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Texture coordinates as bytes.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// A part's index buffer as bytes.
    ///
    /// # Panics
    ///
    /// Panics if `part` is out of range.
    pub fn index_bytes(&self, part: usize) -> &[u8] {
        bytemuck::cast_slice(&self.parts[part])
    }

    // -- Transform --

    /// The mesh transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the mesh transform.
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Replace the mesh transform.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    // -- Internal --

    /// Loader-internal constructor. The OBJ pipeline upholds the
    /// parallel-array and index invariants before reaching this point.
    pub(crate) fn from_welded(
        vertices: Vec<Vec3>,
        normals: Vec<Vec3>,
        uvs: Vec<Vec2>,
        indices: Vec<u32>,
    ) -> Self {
        debug_assert!(normals.is_empty() || normals.len() == vertices.len());
        debug_assert!(uvs.is_empty() || uvs.len() == vertices.len());
        debug_assert_eq!(indices.len() % 3, 0);
        Self {
            vertices,
            normals,
            uvs,
            parts: vec![indices],
            ..Self::default()
        }
    }

    /// Direct access for geometry passes in this crate.
    pub(crate) fn buffers_mut(&mut self) -> BuffersMut<'_> {
        BuffersMut {
            vertices: &mut self.vertices,
            normals: &mut self.normals,
            tangents: &mut self.tangents,
            uvs: &self.uvs,
            parts: &self.parts,
        }
    }
}

/// Split borrows over mesh buffers, used by the geometry passes.
pub(crate) struct BuffersMut<'a> {
    pub vertices: &'a mut Vec<Vec3>,
    pub normals: &'a mut Vec<Vec3>,
    pub tangents: &'a mut Vec<Vec3>,
    pub uvs: &'a Vec<Vec2>,
    pub parts: &'a Vec<Vec<u32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> Mesh {
        Mesh::from_buffers(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            Vec::new(),
            Vec::new(),
            vec![0, 1, 2],
        )
        .unwrap()
    }

    #[test]
    fn empty_mesh() {
        let mesh = Mesh::new();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.part_count(), 0);
        assert!(!mesh.has_normals());
        assert!(!mesh.has_uvs());
    }

    #[test]
    fn from_buffers_validates_indices() {
        let result = Mesh::from_buffers(
            vec![Vec3::zeros(); 2],
            Vec::new(),
            Vec::new(),
            vec![0, 1, 2],
        );
        assert!(matches!(
            result,
            Err(MeshError::IndexOutOfRange { index: 2, count: 2 })
        ));
    }

    #[test]
    fn from_buffers_rejects_partial_triangle() {
        let result = Mesh::from_buffers(
            vec![Vec3::zeros(); 3],
            Vec::new(),
            Vec::new(),
            vec![0, 1],
        );
        assert!(matches!(result, Err(MeshError::PartialTriangle { len: 2 })));
    }

    #[test]
    fn from_buffers_rejects_short_normals() {
        let result = Mesh::from_buffers(
            vec![Vec3::zeros(); 3],
            vec![Vec3::zeros(); 2],
            Vec::new(),
            vec![0, 1, 2],
        );
        assert!(matches!(result, Err(MeshError::LengthMismatch { .. })));
    }

    #[test]
    fn counts_and_face_lookup() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.part_count(), 1);
        assert_eq!(mesh.face_count(0), 1);
        assert_eq!(mesh.vertex_index_in_face(0, 0, 0), 0);
        assert_eq!(mesh.vertex_index_in_face(0, 2, 0), 2);
    }

    #[test]
    fn set_colors_checks_length() {
        let mut mesh = triangle_mesh();
        assert!(mesh.set_colors(vec![Color::zeros(); 2]).is_err());
        assert!(mesh.set_colors(vec![Color::zeros(); 3]).is_ok());
        assert!(mesh.has_colors());
    }

    #[test]
    fn byte_views_match_buffer_sizes() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.vertex_bytes().len(), 3 * 12);
        assert_eq!(mesh.index_bytes(0).len(), 3 * 4);
        assert!(mesh.normal_bytes().is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut mesh = triangle_mesh();
        mesh.clear();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.part_count(), 0);
    }

    #[test]
    fn per_index_setters() {
        let mut mesh = triangle_mesh();
        mesh.set_vertex(1, Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(mesh.vertex(1), Vec3::new(5.0, 5.0, 5.0));
        mesh.set_uvs(vec![Vec2::zeros(); 3]).unwrap();
        mesh.set_uv(0, Vec2::new(0.25, 0.75));
        assert_eq!(mesh.uv(0), Vec2::new(0.25, 0.75));
    }
}

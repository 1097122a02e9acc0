//! Geometry derivation passes: normals, tangents, bounds, scaling.

use crate::math::{Vec2, Vec3};

use super::data::Mesh;
use super::error::MeshError;

impl Mesh {
    /// Compute smooth per-vertex normals from the triangle geometry.
    ///
    /// Replaces any existing normals. Each triangle's unit face normal is
    /// accumulated into its three vertices, then every per-vertex sum is
    /// normalized. Zero-area triangles contribute nothing; a vertex whose
    /// accumulated normal is zero (it belongs to no non-degenerate triangle)
    /// is reported as [`MeshError::DegenerateVertex`] and the mesh normals
    /// are left unchanged.
    pub fn compute_normals(&mut self) -> Result<(), MeshError> {
        if self.vertex_count() == 0 {
            return Err(MeshError::EmptyMesh);
        }

        let buffers = self.buffers_mut();
        let mut accumulated = vec![Vec3::zeros(); buffers.vertices.len()];

        for part in buffers.parts {
            for triangle in part.chunks_exact(3) {
                let (v1, v2, v3) = (
                    triangle[0] as usize,
                    triangle[1] as usize,
                    triangle[2] as usize,
                );
                let p = buffers.vertices[v1];
                let q = buffers.vertices[v2];
                let r = buffers.vertices[v3];

                // Zero-area triangles have no orientation to contribute.
                if let Some(normal) = (q - p).cross(&(r - p)).try_normalize(0.0) {
                    accumulated[v1] += normal;
                    accumulated[v2] += normal;
                    accumulated[v3] += normal;
                }
            }
        }

        let mut normals = Vec::with_capacity(accumulated.len());
        for (vertex, sum) in accumulated.into_iter().enumerate() {
            let normal = sum
                .try_normalize(0.0)
                .ok_or(MeshError::DegenerateVertex { vertex })?;
            normals.push(normal);
        }

        *buffers.normals = normals;
        Ok(())
    }

    /// Compute per-vertex tangents from positions and texture coordinates.
    ///
    /// Replaces any existing tangents. Triangles with a degenerate UV
    /// mapping are skipped; their vertices keep a zero tangent unless
    /// another triangle covers them. When several triangles share a vertex,
    /// the last one processed wins: contributions are assigned, not
    /// averaged.
    pub fn compute_tangents(&mut self) -> Result<(), MeshError> {
        if self.vertex_count() == 0 {
            return Err(MeshError::EmptyMesh);
        }
        if !self.has_uvs() {
            return Err(MeshError::MissingUvs);
        }

        let buffers = self.buffers_mut();
        let mut tangents = vec![Vec3::zeros(); buffers.vertices.len()];

        for part in buffers.parts {
            for triangle in part.chunks_exact(3) {
                let (v1, v2, v3) = (
                    triangle[0] as usize,
                    triangle[1] as usize,
                    triangle[2] as usize,
                );
                let p = buffers.vertices[v1];
                let q = buffers.vertices[v2];
                let r = buffers.vertices[v3];
                let uv_p = buffers.uvs[v1];
                let uv_q = buffers.uvs[v2];
                let uv_r = buffers.uvs[v3];

                let edge1 = q - p;
                let edge2 = r - p;
                let edge1_uv: Vec2 = uv_q - uv_p;
                let edge2_uv: Vec2 = uv_r - uv_p;

                let cp = edge1_uv.y * edge2_uv.x - edge1_uv.x * edge2_uv.y;
                if cp == 0.0 {
                    continue;
                }

                let tangent = (edge1 * -edge2_uv.y + edge2 * edge1_uv.y) / cp;
                if let Some(tangent) = tangent.try_normalize(0.0) {
                    tangents[v1] = tangent;
                    tangents[v2] = tangent;
                    tangents[v3] = tangent;
                }
            }
        }

        *buffers.tangents = tangents;
        Ok(())
    }

    /// Compute the axis-aligned bounding box of the vertex positions.
    ///
    /// Returns `(min, max)`. An empty mesh has no bounds and yields
    /// [`MeshError::EmptyMesh`].
    pub fn bounding_box(&self) -> Result<(Vec3, Vec3), MeshError> {
        let vertices = self.vertices();
        let first = *vertices.first().ok_or(MeshError::EmptyMesh)?;

        let mut min = first;
        let mut max = first;
        for v in &vertices[1..] {
            if v.x < min.x {
                min.x = v.x;
            } else if v.x > max.x {
                max.x = v.x;
            }
            if v.y < min.y {
                min.y = v.y;
            } else if v.y > max.y {
                max.y = v.y;
            }
            if v.z < min.z {
                min.z = v.z;
            } else if v.z > max.z {
                max.z = v.z;
            }
        }
        Ok((min, max))
    }

    /// Scale every vertex position in place by a uniform factor.
    ///
    /// Normals, tangents and texture coordinates are untouched; uniform
    /// scaling preserves their directions.
    pub fn scale_vertices(&mut self, factor: f32) {
        for vertex in self.buffers_mut().vertices.iter_mut() {
            *vertex *= factor;
        }
    }
}

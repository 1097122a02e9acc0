//! Vertex welding: collapse raw `(position, normal, uv)` index triples into
//! a deduplicated vertex set.

use std::collections::HashMap;

use crate::math::{Vec2, Vec3};

use super::parser::RawObj;

/// Key identifying one unique final vertex during welding.
///
/// Components reference the *raw* parsed arrays. A missing normal or UV
/// component defaults to 0, which is only sound because the parser
/// guarantees that either every occurrence carries the component or none
/// does.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
struct VertexKey {
    position: u32,
    normal: u32,
    uv: u32,
}

/// Deduplicated geometry plus the per-occurrence index buffer.
///
/// `indices` has one entry per raw face-vertex occurrence, in file order,
/// and is not yet triangulated.
pub(crate) struct WeldedGeometry {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

/// Weld raw occurrences into unique vertices.
///
/// Two occurrences map to the same final vertex iff their position, normal
/// and UV indices all match. Final vertices are numbered in first-occurrence
/// order, so identical input yields identical output.
pub(crate) fn weld_vertices(raw: &RawObj) -> WeldedGeometry {
    let occurrence_count = raw.position_indices.len();
    let mut welded = WeldedGeometry {
        vertices: Vec::new(),
        normals: Vec::new(),
        uvs: Vec::new(),
        indices: Vec::with_capacity(occurrence_count),
    };
    let mut merged: HashMap<VertexKey, u32> = HashMap::new();

    for i in 0..occurrence_count {
        let key = VertexKey {
            position: raw.position_indices[i],
            normal: raw.normal_indices.get(i).copied().unwrap_or(0),
            uv: raw.uv_indices.get(i).copied().unwrap_or(0),
        };

        let index = *merged.entry(key).or_insert_with(|| {
            let next = welded.vertices.len() as u32;
            welded.vertices.push(raw.positions[key.position as usize]);
            if !raw.normal_indices.is_empty() {
                welded.normals.push(raw.normals[key.normal as usize]);
            }
            if !raw.uv_indices.is_empty() {
                welded.uvs.push(raw.uvs[key.uv as usize]);
            }
            next
        });
        welded.indices.push(index);
    }

    welded
}

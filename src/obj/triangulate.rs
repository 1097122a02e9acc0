//! Quad-to-triangle conversion of the welded index buffer.

use crate::math::Vec3;

/// Convert the welded per-occurrence index buffer into a triangle list.
///
/// `quad_faces` tells how many entries (3 or 4) each face contributed to
/// `indices`. Triangles pass through unchanged. A quad is split along one
/// of its diagonals: the signs of the dot products between the `v1→v3`
/// diagonal and the two edges leaving `v1` decide which diagonal is more
/// likely to lie inside a non-planar or non-convex quad.
pub(crate) fn triangulate(indices: &[u32], quad_faces: &[bool], vertices: &[Vec3]) -> Vec<u32> {
    let mut triangles = Vec::with_capacity(indices.len() + quad_faces.len());
    let mut cursor = 0;

    for &is_quad in quad_faces {
        let i1 = indices[cursor];
        let i2 = indices[cursor + 1];
        let i3 = indices[cursor + 2];

        if !is_quad {
            triangles.extend_from_slice(&[i1, i2, i3]);
            cursor += 3;
            continue;
        }

        let i4 = indices[cursor + 3];
        let v1 = vertices[i1 as usize];
        let v2 = vertices[i2 as usize];
        let v3 = vertices[i3 as usize];
        let v4 = vertices[i4 as usize];

        let v13 = v3 - v1;
        let v12 = v2 - v1;
        let v14 = v4 - v1;
        let a1 = v13.dot(&v12);
        let a2 = v13.dot(&v14);

        if (a1 >= 0.0 && a2 <= 0.0) || (a1 <= 0.0 && a2 >= 0.0) {
            // Split along the v1-v3 diagonal.
            triangles.extend_from_slice(&[i1, i2, i3, i1, i3, i4]);
        } else {
            // Split along the v2-v4 diagonal.
            triangles.extend_from_slice(&[i1, i2, i4, i2, i3, i4]);
        }
        cursor += 4;
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangles_pass_through() {
        let vertices = vec![Vec3::zeros(), Vec3::x(), Vec3::y()];
        let out = triangulate(&[0, 1, 2], &[false], &vertices);
        assert_eq!(out, vec![0, 1, 2]);
    }

    #[test]
    fn planar_convex_quad_splits_into_two_triangles() {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let out = triangulate(&[0, 1, 2, 3], &[true], &vertices);
        assert_eq!(out.len(), 6);

        // Every corner is covered.
        for corner in 0..4u32 {
            assert!(out.contains(&corner), "corner {corner} missing");
        }
        // Two triangles sharing exactly one diagonal: the four corners
        // appear six times in total, with the diagonal corners twice each.
        let mut counts = [0; 4];
        for &i in &out {
            counts[i as usize] += 1;
        }
        let twice = counts.iter().filter(|&&c| c == 2).count();
        let once = counts.iter().filter(|&&c| c == 1).count();
        assert_eq!((twice, once), (2, 2));
    }

    #[test]
    fn unit_quad_split_is_deterministic() {
        // For the unit square, v13·v12 = 1 and v13·v14 = 1: same sign, so
        // the split runs along the v2-v4 diagonal.
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let out = triangulate(&[0, 1, 2, 3], &[true], &vertices);
        assert_eq!(out, vec![0, 1, 3, 1, 2, 3]);
    }

    #[test]
    fn opposite_sign_quad_splits_along_first_diagonal() {
        // v2 sits behind v1 along the v1-v3 diagonal direction, so
        // v13·v12 < 0 while v13·v14 > 0.
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.5, -0.2, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.5, 0.0),
        ];
        let out = triangulate(&[0, 1, 2, 3], &[true], &vertices);
        assert_eq!(out, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn mixed_faces_walk_in_lockstep() {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ];
        // One triangle followed by one quad: 3 + 4 entries in, 3 + 6 out.
        let out = triangulate(&[0, 1, 4, 0, 1, 2, 3], &[false, true], &vertices);
        assert_eq!(out.len(), 9);
        assert_eq!(&out[..3], &[0, 1, 4]);
    }
}

//! Line-oriented OBJ directive parser.
//!
//! Produces the raw attribute arrays and per-face index arrays exactly as
//! they appear in the file (0-based after conversion). Welding and
//! triangulation happen in later passes.

use std::io::BufRead;

use crate::math::{Vec2, Vec3};

use super::error::ObjError;

/// Raw data collected from an OBJ file, before welding.
///
/// The three index arrays run parallel per face-vertex occurrence:
/// `normal_indices` and `uv_indices` are either empty or exactly as long as
/// `position_indices`. `quad_faces` holds one flag per face directive.
#[derive(Debug)]
pub(crate) struct RawObj {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub position_indices: Vec<u32>,
    pub normal_indices: Vec<u32>,
    pub uv_indices: Vec<u32>,
    pub quad_faces: Vec<bool>,
}

/// One face-vertex index group (`v`, `v/t`, `v//n` or `v/t/n`), 0-based.
struct IndexGroup {
    position: u32,
    uv: Option<u32>,
    normal: Option<u32>,
}

/// Parse OBJ directives from a reader.
///
/// Recognizes `v`, `vt`, `vn` and `f`; `usemtl` and every other directive
/// are ignored. Structural problems (no faces, inconsistent attribute
/// indices, out-of-range indices) are detected here, before any mesh state
/// exists.
pub(crate) fn parse_obj(reader: impl BufRead) -> Result<RawObj, ObjError> {
    let mut raw = RawObj {
        positions: Vec::new(),
        normals: Vec::new(),
        uvs: Vec::new(),
        position_indices: Vec::new(),
        normal_indices: Vec::new(),
        uv_indices: Vec::new(),
        quad_faces: Vec::new(),
    };

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let number = number + 1;
        let mut tokens = line.split_whitespace();
        let Some(directive) = tokens.next() else {
            continue;
        };

        match directive.to_ascii_lowercase().as_str() {
            "v" => {
                let [x, y, z] = parse_floats(tokens, number)?;
                raw.positions.push(Vec3::new(x, y, z));
            }
            "vt" => {
                let [u, v] = parse_floats(tokens, number)?;
                raw.uvs.push(Vec2::new(u, v));
            }
            "vn" => {
                let [x, y, z] = parse_floats(tokens, number)?;
                raw.normals.push(Vec3::new(x, y, z));
            }
            "f" => parse_face(tokens, number, &mut raw)?,
            // Material assignment is out of scope; other directives
            // (o, g, s, mtllib, comments) carry nothing we consume.
            _ => {}
        }
    }

    if raw.position_indices.is_empty() {
        return Err(ObjError::NoFaces);
    }
    check_attribute_parity(&raw)?;
    check_index_bounds(&raw)?;

    Ok(raw)
}

/// Parse exactly `N` whitespace-separated floats.
fn parse_floats<'a, const N: usize>(
    mut tokens: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<[f32; N], ObjError> {
    let mut values = [0.0f32; N];
    for value in &mut values {
        let token = tokens.next().ok_or_else(|| ObjError::Malformed {
            line,
            message: format!("expected {N} coordinates"),
        })?;
        *value = token.parse().map_err(|_| ObjError::Malformed {
            line,
            message: format!("invalid coordinate '{token}'"),
        })?;
    }
    Ok(values)
}

/// Parse a face directive: 3 or 4 index groups sharing one layout.
fn parse_face<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line: usize,
    raw: &mut RawObj,
) -> Result<(), ObjError> {
    let mut groups = Vec::with_capacity(4);
    for token in tokens {
        groups.push(parse_index_group(token, line)?);
    }

    let is_quad = match groups.len() {
        3 => false,
        4 => true,
        n => {
            return Err(ObjError::Malformed {
                line,
                message: format!("face has {n} vertices, expected 3 or 4"),
            })
        }
    };

    // All groups of one face must agree on which attributes they carry.
    let has_uv = groups[0].uv.is_some();
    let has_normal = groups[0].normal.is_some();
    for group in &groups {
        if group.uv.is_some() != has_uv || group.normal.is_some() != has_normal {
            return Err(ObjError::Malformed {
                line,
                message: "face mixes index layouts".to_string(),
            });
        }
    }

    for group in &groups {
        raw.position_indices.push(group.position);
        if let Some(uv) = group.uv {
            raw.uv_indices.push(uv);
        }
        if let Some(normal) = group.normal {
            raw.normal_indices.push(normal);
        }
    }
    raw.quad_faces.push(is_quad);
    Ok(())
}

/// Parse one `v[/t][/n]` group, converting 1-based indices to 0-based.
fn parse_index_group(token: &str, line: usize) -> Result<IndexGroup, ObjError> {
    let mut fields = token.split('/');

    let position = parse_index(fields.next().unwrap_or(""), line)?;
    let uv = match fields.next() {
        Some("") | None => None,
        Some(field) => Some(parse_index(field, line)?),
    };
    let normal = match fields.next() {
        Some("") | None => None,
        Some(field) => Some(parse_index(field, line)?),
    };
    if fields.next().is_some() {
        return Err(ObjError::Malformed {
            line,
            message: format!("too many '/' separators in '{token}'"),
        });
    }

    Ok(IndexGroup {
        position,
        uv,
        normal,
    })
}

/// Parse a single 1-based index. Zero and negative (relative) indices are
/// rejected.
fn parse_index(field: &str, line: usize) -> Result<u32, ObjError> {
    let value: u32 = field.parse().map_err(|_| ObjError::Malformed {
        line,
        message: format!("invalid index '{field}'"),
    })?;
    if value == 0 {
        return Err(ObjError::Malformed {
            line,
            message: "indices are 1-based, got 0".to_string(),
        });
    }
    Ok(value - 1)
}

/// Normal/UV index arrays must be empty or cover every face vertex.
fn check_attribute_parity(raw: &RawObj) -> Result<(), ObjError> {
    let expected = raw.position_indices.len();
    if !raw.normal_indices.is_empty() && raw.normal_indices.len() != expected {
        return Err(ObjError::AttributeIndexMismatch {
            attribute: "normal",
            expected,
            actual: raw.normal_indices.len(),
        });
    }
    if !raw.uv_indices.is_empty() && raw.uv_indices.len() != expected {
        return Err(ObjError::AttributeIndexMismatch {
            attribute: "uv",
            expected,
            actual: raw.uv_indices.len(),
        });
    }
    Ok(())
}

/// Every stored index must land inside its attribute array.
fn check_index_bounds(raw: &RawObj) -> Result<(), ObjError> {
    let overrun = |indices: &[u32], count: usize| {
        indices.iter().copied().find(|&i| i as usize >= count)
    };
    if let Some(index) = overrun(&raw.position_indices, raw.positions.len()) {
        return Err(ObjError::IndexOutOfRange {
            attribute: "position",
            index,
            count: raw.positions.len(),
        });
    }
    if let Some(index) = overrun(&raw.normal_indices, raw.normals.len()) {
        return Err(ObjError::IndexOutOfRange {
            attribute: "normal",
            index,
            count: raw.normals.len(),
        });
    }
    if let Some(index) = overrun(&raw.uv_indices, raw.uvs.len()) {
        return Err(ObjError::IndexOutOfRange {
            attribute: "uv",
            index,
            count: raw.uvs.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> Result<RawObj, ObjError> {
        parse_obj(Cursor::new(input))
    }

    #[test]
    fn plain_vertex_faces() {
        let raw = parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             f 1 2 3\n",
        )
        .unwrap();
        assert_eq!(raw.positions.len(), 3);
        assert_eq!(raw.position_indices, vec![0, 1, 2]);
        assert!(raw.normal_indices.is_empty());
        assert!(raw.uv_indices.is_empty());
        assert_eq!(raw.quad_faces, vec![false]);
    }

    #[test]
    fn vertex_uv_layout() {
        let raw = parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vt 0 0\nvt 1 0\nvt 0 1\n\
             f 1/1 2/2 3/3\n",
        )
        .unwrap();
        assert_eq!(raw.uv_indices, vec![0, 1, 2]);
        assert!(raw.normal_indices.is_empty());
    }

    #[test]
    fn vertex_normal_layout() {
        let raw = parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vn 0 0 1\n\
             f 1//1 2//1 3//1\n",
        )
        .unwrap();
        assert_eq!(raw.normal_indices, vec![0, 0, 0]);
        assert!(raw.uv_indices.is_empty());
    }

    #[test]
    fn full_layout_quad() {
        let raw = parse(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
             vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\n\
             vn 0 0 1\n\
             f 1/1/1 2/2/1 3/3/1 4/4/1\n",
        )
        .unwrap();
        assert_eq!(raw.position_indices, vec![0, 1, 2, 3]);
        assert_eq!(raw.uv_indices, vec![0, 1, 2, 3]);
        assert_eq!(raw.normal_indices, vec![0, 0, 0, 0]);
        assert_eq!(raw.quad_faces, vec![true]);
    }

    #[test]
    fn directives_are_case_insensitive_and_unknown_lines_ignored() {
        let raw = parse(
            "# comment\n\
             mtllib scene.mtl\n\
             usemtl shiny\n\
             o thing\n\
             V 0 0 0\nV 1 0 0\nV 0 1 0\n\
             F 1 2 3\n",
        )
        .unwrap();
        assert_eq!(raw.positions.len(), 3);
        assert_eq!(raw.quad_faces.len(), 1);
    }

    #[test]
    fn no_faces_is_an_error() {
        let err = parse("vn 0 0 1\nvt 0 0\n").unwrap_err();
        assert!(matches!(err, ObjError::NoFaces));
    }

    #[test]
    fn zero_index_rejected() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n").unwrap_err();
        assert!(matches!(err, ObjError::Malformed { line: 4, .. }));
    }

    #[test]
    fn negative_index_rejected() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -1 -2 -3\n").unwrap_err();
        assert!(matches!(err, ObjError::Malformed { .. }));
    }

    #[test]
    fn five_vertex_face_rejected() {
        let err = parse("v 0 0 0\nf 1 1 1 1 1\n").unwrap_err();
        assert!(matches!(err, ObjError::Malformed { line: 2, .. }));
    }

    #[test]
    fn mixed_layout_within_face_rejected() {
        let err = parse("v 0 0 0\nvt 0 0\nf 1/1 1 1\n").unwrap_err();
        assert!(matches!(err, ObjError::Malformed { .. }));
    }

    #[test]
    fn mixed_normal_presence_across_faces_rejected() {
        let err = parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vn 0 0 1\n\
             f 1//1 2//1 3//1\n\
             f 1 2 3\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ObjError::AttributeIndexMismatch {
                attribute: "normal",
                expected: 6,
                actual: 3,
            }
        ));
    }

    #[test]
    fn out_of_range_position_index_rejected() {
        let err = parse("v 0 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(
            err,
            ObjError::IndexOutOfRange {
                attribute: "position",
                index: 1,
                count: 1,
            }
        ));
    }

    #[test]
    fn malformed_coordinate_rejected() {
        let err = parse("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, ObjError::Malformed { line: 1, .. }));
    }

    #[test]
    fn short_vertex_line_rejected() {
        let err = parse("v 1 2\n").unwrap_err();
        assert!(matches!(err, ObjError::Malformed { line: 1, .. }));
    }
}

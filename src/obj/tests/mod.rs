//! End-to-end loader tests over embedded OBJ sources.

use std::io::Cursor;

use crate::mesh::Mesh;
use crate::obj::{load_obj, ObjError};


/// A unit cube built from 6 quad faces with per-face normals.
const CUBE_OBJ: &str = "\
# unit cube
v -1 -1 -1
v 1 -1 -1
v 1 1 -1
v -1 1 -1
v -1 -1 1
v 1 -1 1
v 1 1 1
v -1 1 1
vn 0 0 1
vn 0 0 -1
vn 1 0 0
vn -1 0 0
vn 0 1 0
vn 0 -1 0
usemtl cube_material
f 5//1 6//1 7//1 8//1
f 2//2 1//2 4//2 3//2
f 6//3 2//3 3//3 7//3
f 1//4 5//4 8//4 4//4
f 8//5 7//5 3//5 4//5
f 1//6 2//6 6//6 5//6
";

/// Two triangles sharing an edge, full `v/t/n` layout.
const SHARED_EDGE_OBJ: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
f 1/1/1 3/3/1 4/4/1
";

/// Parse an embedded OBJ source.
fn load(source: &str) -> Result<Mesh, ObjError> {
    load_obj(Cursor::new(source))
}

use crate::math::{Vec2, Vec3};
use std::path::PathBuf;

/// A contiguous run of triangles sharing one texture.
#[derive(Clone, Debug)]
pub struct DrawCall {
    pub triangle_start: usize,
    pub triangle_count: usize,
    pub texture_path: Option<PathBuf>,
}

/// A loaded, deduplicated triangle mesh with per-material draw spans.
///
/// `triangles` holds flat triples of indices into `vertices`/`texcoords`/
/// `normals`, which are kept parallel and addressed by the same unique
/// vertex index (the OBJ (pos, tex, norm) triple is the dedup key).
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub vertices: Vec<Vec3>,
    pub texcoords: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub triangles: Vec<u32>,
    pub draw_calls: Vec<DrawCall>,
}

impl Model {
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn triangle_vertex_indices(&self, triangle_index: usize) -> [usize; 3] {
        let base = triangle_index * 3;
        [
            self.triangles[base] as usize,
            self.triangles[base + 1] as usize,
            self.triangles[base + 2] as usize,
        ]
    }
}

use crate::math::{Matrix4x4, Vec3};

/// Projects object-space vertices through `mvp` into screen space.
///
/// The perspective divide is unguarded: a vertex behind the camera (`w <= 0`)
/// still produces a result, and relies on the backface cull and on-screen
/// test downstream to discard the triangle rather than on clipping here.
/// The returned `z` is NDC depth in `[0, 1]` for points between the near and
/// far planes, used directly as the rasterizer's depth-test value.
pub fn project_vertices(vertices: &[Vec3], mvp: &Matrix4x4, width: u32, height: u32) -> Vec<Vec3> {
    vertices
        .iter()
        .map(|&v| project_vertex(v, mvp, width, height))
        .collect()
}

pub fn project_vertex(v: Vec3, mvp: &Matrix4x4, width: u32, height: u32) -> Vec3 {
    let clip = mvp.mul_vec4(v);
    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    let ndc_z = clip.z / clip.w;
    Vec3::new(
        (ndc_x + 1.0) / 2.0 * width as f32,
        (ndc_y - 1.0) / -2.0 * height as f32,
        ndc_z,
    )
}

/// True if at least one of the three screen-space vertices lies within the
/// framebuffer bounds. This is the full visibility test: there is no
/// near-plane clipping, so a triangle with all vertices off-screen but an
/// edge crossing the viewport is dropped.
pub fn any_vertex_on_screen(screen: &[Vec3; 3], width: u32, height: u32) -> bool {
    screen.iter().any(|p| {
        p.x >= 0.0 && p.x < width as f32 && p.y >= 0.0 && p.y < height as f32
    })
}

/// Backface cull in screen space: positive signed area means the triangle
/// winds clockwise as seen on screen and should be drawn.
pub fn is_front_facing(screen: &[Vec3; 3]) -> bool {
    let a = screen[0] - screen[1];
    let b = screen[0] - screen[2];
    (a.x * b.y - a.y * b.x) > 0.0
}

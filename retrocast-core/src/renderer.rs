use crate::math::{Vec2, Vec3};
use crate::texture::Texture;

/// Owns the color and depth buffers plus the per-scanline scratch used while
/// rasterizing a triangle. A single `Renderer` is created once and reused
/// across frames; nothing about rasterization lives in global state.
pub struct Renderer {
    width: u32,
    height: u32,
    color: Vec<u8>,
    depth: Vec<f32>,

    scan_min_x: Vec<i32>,
    scan_max_x: Vec<i32>,
    scan_min_depth: Vec<f32>,
    scan_max_depth: Vec<f32>,
    scan_min_uv: Vec<Vec2>,
    scan_max_uv: Vec<Vec2>,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Renderer {
        let pixel_count = width as usize * height as usize;
        let row_count = height as usize;
        Renderer {
            width,
            height,
            color: vec![0u8; pixel_count * 3],
            depth: vec![f32::INFINITY; pixel_count],
            scan_min_x: vec![0; row_count],
            scan_max_x: vec![0; row_count],
            scan_min_depth: vec![0.0; row_count],
            scan_max_depth: vec![0.0; row_count],
            scan_min_uv: vec![Vec2::ZERO; row_count],
            scan_max_uv: vec![Vec2::ZERO; row_count],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets the color buffer to black and the depth buffer to infinity.
    pub fn clear(&mut self) {
        self.color.iter_mut().for_each(|b| *b = 0);
        self.depth.iter_mut().for_each(|d| *d = f32::INFINITY);
    }

    /// The current color buffer, one RGB triple per pixel, row-major.
    pub fn present(&self) -> &[u8] {
        &self.color
    }

    /// Rasterizes one triangle already in screen space (x, y in pixels, z
    /// in NDC depth), textured by nearest-neighbour sampling with UV wrap.
    ///
    /// Triangles are drawn independently of visibility or winding; callers
    /// are expected to have already run the on-screen test and backface
    /// cull before calling this.
    pub fn draw_triangle(&mut self, screen: [Vec3; 3], uv: [Vec2; 3], texture: &Texture) {
        let height = self.height as i32;
        let width = self.width as i32;

        let y_min = screen.iter().map(|p| p.y).fold(f32::INFINITY, f32::min).floor() as i32;
        let y_max = screen.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max).ceil() as i32;
        let y_min = y_min.clamp(0, height - 1);
        let y_max = y_max.clamp(0, height - 1);
        if y_min > y_max {
            return;
        }

        for y in y_min..=y_max {
            let row = y as usize;
            self.scan_min_x[row] = width;
            self.scan_max_x[row] = -1;
        }

        self.trace_edge(screen[0], screen[1], uv[0], uv[1], y_min, y_max);
        self.trace_edge(screen[1], screen[2], uv[1], uv[2], y_min, y_max);
        self.trace_edge(screen[2], screen[0], uv[2], uv[0], y_min, y_max);

        for y in y_min..=y_max {
            let row = y as usize;
            let min_x = self.scan_min_x[row].max(0);
            let max_x = self.scan_max_x[row].min(width - 1);
            if min_x > max_x {
                continue;
            }
            let span = self.scan_max_x[row] - self.scan_min_x[row];
            for x in min_x..=max_x {
                let t = if span != 0 {
                    (x - self.scan_min_x[row]) as f32 / span as f32
                } else {
                    0.0
                };
                let depth = self.scan_min_depth[row] + (self.scan_max_depth[row] - self.scan_min_depth[row]) * t;
                let pixel_offset = row * self.width as usize + x as usize;
                if depth >= self.depth[pixel_offset] {
                    continue;
                }
                let sample_uv = Vec2::lerp(self.scan_min_uv[row], self.scan_max_uv[row], t);
                let texel = texture.sample_nearest(sample_uv);
                self.depth[pixel_offset] = depth;
                let color_offset = pixel_offset * 3;
                self.color[color_offset] = texel[0];
                self.color[color_offset + 1] = texel[1];
                self.color[color_offset + 2] = texel[2];
            }
        }
    }

    /// Walks one triangle edge with an integer DDA, updating the per-row
    /// min/max x, depth, and UV scratch for every scanline the edge crosses.
    fn trace_edge(&mut self, a: Vec3, b: Vec3, a_uv: Vec2, b_uv: Vec2, y_min: i32, y_max: i32) {
        let x1 = a.x as i32;
        let y1 = a.y as i32;
        let x2 = b.x as i32;
        let y2 = b.y as i32;

        let delta_x = x2 - x1;
        let delta_y = y2 - y1;
        let delta_x_abs_2 = (2 * delta_x).abs();
        let delta_y_abs_2 = (2 * delta_y).abs();

        let x_step = delta_x.signum();
        let y_step = delta_y.signum();

        let edge_len_sq = {
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            dx * dx + dy * dy
        };

        let mut x = x1;
        let mut y = y1;
        let mut error = 0i32;

        loop {
            let mut y_end = y;
            while error >= delta_x.abs() && y_end != y2 {
                y_end += y_step;
                error -= delta_x_abs_2;
            }
            error += delta_y_abs_2;

            if y_end != y {
                y += y_step;
            }

            loop {
                if y >= y_min && y <= y_max {
                    let row = y as usize;
                    let dx = x as f32 - a.x;
                    let dy = y as f32 - a.y;
                    let dist_sq = dx * dx + dy * dy;
                    let t = if edge_len_sq > 0.0 { (dist_sq / edge_len_sq).sqrt() } else { 0.0 };
                    let depth = a.z + (b.z - a.z) * t;
                    let uv = Vec2::lerp(a_uv, b_uv, t);

                    if x < self.scan_min_x[row] {
                        self.scan_min_x[row] = x;
                        self.scan_min_depth[row] = depth;
                        self.scan_min_uv[row] = uv;
                    }
                    if x > self.scan_max_x[row] {
                        self.scan_max_x[row] = x;
                        self.scan_max_depth[row] = depth;
                        self.scan_max_uv[row] = uv;
                    }
                }
                if y == y_end {
                    break;
                }
                y += y_step;
            }

            if x == x2 {
                break;
            }
            x += x_step;
        }
    }
}

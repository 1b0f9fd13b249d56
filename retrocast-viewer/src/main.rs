//! Host shell: owns the window, the message pump, and frame pacing. All
//! rasterization lives in `retrocast-core`; this binary only drives it.

use clap::Parser;
use minifb::{Key, Window, WindowOptions};
use retrocast_core::assets::{load_model, TextureCache};
use retrocast_core::math::{Quaternion, Vec3};
use retrocast_core::model::Model;
use retrocast_core::projection::{any_vertex_on_screen, is_front_facing, project_vertices};
use retrocast_core::scene::{build_mvp, Camera, TARGET_FRAMES_PER_SECOND};
use retrocast_core::Renderer;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const FRAME_WIDTH: usize = 640;
const FRAME_HEIGHT: usize = 480;

#[derive(Parser)]
#[command(about = "Spins a loaded OBJ model in a window")]
struct Args {
    /// Path to the .obj file to load.
    model: PathBuf,

    /// Radians per second of spin about the vertical axis.
    #[arg(long, default_value_t = 0.6)]
    spin_rate: f32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let model = match load_model(&args.model) {
        Ok(model) => model,
        Err(err) => {
            log::error!("failed to load {}: {err}", args.model.display());
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded {} ({} vertices, {} triangles, {} draw calls)",
        args.model.display(),
        model.vertices.len(),
        model.triangle_count(),
        model.draw_calls.len()
    );

    let mut textures = TextureCache::new();
    for draw_call in &model.draw_calls {
        if let Some(texture_path) = &draw_call.texture_path {
            if let Err(err) = textures.get_or_load(texture_path) {
                log::error!("failed to load texture {}: {err}", texture_path.display());
                std::process::exit(1);
            }
        }
    }

    let mut window = Window::new(
        "retrocast-viewer",
        FRAME_WIDTH,
        FRAME_HEIGHT,
        WindowOptions::default(),
    )
    .unwrap_or_else(|err| {
        log::error!("failed to open window: {err}");
        std::process::exit(1);
    });

    let mut renderer = Renderer::new(FRAME_WIDTH as u32, FRAME_HEIGHT as u32);
    let camera = Camera::new(Vec3::new(0.0, 2.0, -5.0), Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0));

    let frame_duration = Duration::from_secs_f32(1.0 / TARGET_FRAMES_PER_SECOND);
    let start_time = Instant::now();
    let mut last_frame_time = start_time;
    let mut present_buffer = vec![0u32; FRAME_WIDTH * FRAME_HEIGHT];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let now = Instant::now();
        // Advances by exactly one frame duration per satisfied tick, even if
        // the caller fell more than one frame behind; it does not try to
        // catch up.
        if now.duration_since(last_frame_time) >= frame_duration {
            last_frame_time += frame_duration;

            let elapsed = now.duration_since(start_time).as_secs_f32();
            let rotation = Quaternion::angle_axis(Vec3::new(0.0, 1.0, 0.0), elapsed * args.spin_rate);
            render_frame(&mut renderer, &model, &textures, rotation, &camera);

            copy_to_minifb_buffer(renderer.present(), &mut present_buffer);
            if let Err(err) = window.update_with_buffer(&present_buffer, FRAME_WIDTH, FRAME_HEIGHT) {
                log::error!("failed to present frame: {err}");
                break;
            }
        } else {
            window.update();
        }
    }
}

fn render_frame(
    renderer: &mut Renderer,
    model: &Model,
    textures: &TextureCache,
    rotation: Quaternion,
    camera: &Camera,
) {
    renderer.clear();

    let mvp = build_mvp(Vec3::ZERO, rotation, camera, renderer.width(), renderer.height());
    let screen_vertices = project_vertices(&model.vertices, &mvp, renderer.width(), renderer.height());

    for draw_call in &model.draw_calls {
        let texture = match draw_call.texture_path.as_deref().and_then(|p| textures.get(p)) {
            Some(texture) => texture,
            None => continue,
        };

        for triangle_index in draw_call.triangle_start..draw_call.triangle_start + draw_call.triangle_count {
            let [i0, i1, i2] = model.triangle_vertex_indices(triangle_index);
            let screen = [screen_vertices[i0], screen_vertices[i1], screen_vertices[i2]];

            if !any_vertex_on_screen(&screen, renderer.width(), renderer.height()) {
                continue;
            }
            if !is_front_facing(&screen) {
                continue;
            }

            let uv = [model.texcoords[i0], model.texcoords[i1], model.texcoords[i2]];
            renderer.draw_triangle(screen, uv, texture);
        }
    }
}

/// Converts the renderer's packed B,G,R bytes (the BMP-native channel
/// order, preserved verbatim since texel loading) into minifb's
/// `0x00RRGGBB` pixel format.
fn copy_to_minifb_buffer(bgr: &[u8], out: &mut [u32]) {
    for (pixel, chunk) in out.iter_mut().zip(bgr.chunks_exact(3)) {
        *pixel = u32::from_be_bytes([0, chunk[2], chunk[1], chunk[0]]);
    }
}

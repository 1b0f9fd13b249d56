use retrocast_core::math::{Vec2, Vec3};
use retrocast_core::texture::Texture;
use retrocast_core::Renderer;

fn solid_texture(rgb: [u8; 3]) -> Texture {
    Texture::new(1, 1, rgb.to_vec())
}

fn pixel(renderer: &Renderer, x: u32, y: u32) -> [u8; 3] {
    let offset = (y as usize * renderer.width() as usize + x as usize) * 3;
    let buffer = renderer.present();
    [buffer[offset], buffer[offset + 1], buffer[offset + 2]]
}

#[test]
fn single_triangle_paints_its_interior_and_leaves_the_rest_black() {
    let mut renderer = Renderer::new(64, 64);
    let texture = solid_texture([255, 255, 255]);

    let screen = [
        Vec3::new(10.0, 10.0, 0.5),
        Vec3::new(50.0, 10.0, 0.5),
        Vec3::new(30.0, 50.0, 0.5),
    ];
    let uv = [Vec2::ZERO, Vec2::ZERO, Vec2::ZERO];

    renderer.draw_triangle(screen, uv, &texture);

    assert_eq!(pixel(&renderer, 30, 20), [255, 255, 255]);
    assert_eq!(pixel(&renderer, 1, 1), [0, 0, 0]);
    assert_eq!(pixel(&renderer, 62, 62), [0, 0, 0]);
}

#[test]
fn nearer_triangle_drawn_second_occludes_farther_one_drawn_first() {
    let mut renderer = Renderer::new(32, 32);
    let far = solid_texture([0, 0, 255]);
    let near = solid_texture([255, 0, 0]);

    let quad_uv = [Vec2::ZERO, Vec2::ZERO, Vec2::ZERO];

    renderer.draw_triangle(
        [Vec3::new(0.0, 0.0, 0.9), Vec3::new(31.0, 0.0, 0.9), Vec3::new(0.0, 31.0, 0.9)],
        quad_uv,
        &far,
    );
    renderer.draw_triangle(
        [Vec3::new(0.0, 0.0, 0.1), Vec3::new(31.0, 0.0, 0.1), Vec3::new(0.0, 31.0, 0.1)],
        quad_uv,
        &near,
    );

    assert_eq!(pixel(&renderer, 5, 5), [255, 0, 0]);
}

#[test]
fn farther_triangle_drawn_second_does_not_overwrite_nearer_one() {
    let mut renderer = Renderer::new(32, 32);
    let far = solid_texture([0, 0, 255]);
    let near = solid_texture([255, 0, 0]);
    let quad_uv = [Vec2::ZERO, Vec2::ZERO, Vec2::ZERO];

    renderer.draw_triangle(
        [Vec3::new(0.0, 0.0, 0.1), Vec3::new(31.0, 0.0, 0.1), Vec3::new(0.0, 31.0, 0.1)],
        quad_uv,
        &near,
    );
    renderer.draw_triangle(
        [Vec3::new(0.0, 0.0, 0.9), Vec3::new(31.0, 0.0, 0.9), Vec3::new(0.0, 31.0, 0.9)],
        quad_uv,
        &far,
    );

    assert_eq!(pixel(&renderer, 5, 5), [255, 0, 0]);
}

#[test]
fn checkerboard_wraps_rather_than_clamps_outside_unit_range() {
    // 2x2 checkerboard: (0,0) and (1,1) white, (1,0) and (0,1) black.
    #[rustfmt::skip]
    let pixels = vec![
        255, 255, 255,   0, 0, 0,
        0, 0, 0,   255, 255, 255,
    ];
    let texture = Texture::new(2, 2, pixels);

    // uv (0.25, 0.25) samples the top-left white texel directly, and
    // (1.25, 1.25) should wrap to the same texel.
    assert_eq!(texture.sample_nearest(Vec2::new(0.25, 0.25)), texture.sample_nearest(Vec2::new(1.25, 1.25)));
    assert_eq!(texture.sample_nearest(Vec2::new(-0.75, -0.75)), texture.sample_nearest(Vec2::new(0.25, 0.25)));
}

#[test]
fn backface_triangle_is_not_rasterized_by_the_caller() {
    use retrocast_core::projection::is_front_facing;

    let front_facing = [Vec3::new(0.0, 0.0, 0.5), Vec3::new(10.0, 0.0, 0.5), Vec3::new(0.0, 10.0, 0.5)];
    let reversed = [front_facing[0], front_facing[2], front_facing[1]];

    assert!(is_front_facing(&front_facing));
    assert!(!is_front_facing(&reversed));
}

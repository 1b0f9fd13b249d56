use crate::math::{Matrix4x4, Quaternion, Vec3};

/// Vertical field of view, matching the original demo scene.
pub const FOV_Y_RADIANS: f32 = 60.0 * std::f32::consts::PI / 180.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;
pub const TARGET_FRAMES_PER_SECOND: f32 = 60.0;

/// A camera defined by position and an explicit forward/up/right basis.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,
}

impl Camera {
    pub fn new(position: Vec3, forward: Vec3, up: Vec3) -> Camera {
        let forward = forward.normalised();
        let right = forward.cross(up).normalised();
        let up = right.cross(forward).normalised();
        Camera { position, forward, up, right }
    }

    pub fn view_matrix(&self) -> Matrix4x4 {
        Matrix4x4::camera(self.position, self.forward, self.up, self.right)
    }
}

/// Builds the model-view-projection matrix for one draw: the model's
/// position/rotation transform, composed with the camera's view, composed
/// with a perspective projection sized to `width`/`height`.
pub fn build_mvp(
    model_position: Vec3,
    model_rotation: Quaternion,
    camera: &Camera,
    width: u32,
    height: u32,
) -> Matrix4x4 {
    let model = Matrix4x4::transform(model_position, model_rotation);
    let view = camera.view_matrix();
    let projection = Matrix4x4::perspective(FOV_Y_RADIANS, width as f32 / height as f32, NEAR_PLANE, FAR_PLANE);
    projection.multiply(&view).multiply(&model)
}

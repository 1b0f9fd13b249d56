mod matrix;
mod quaternion;
mod vec2;
mod vec3;
mod vec4;

pub use matrix::Matrix4x4;
pub use quaternion::Quaternion;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

use super::vec3::Vec3;
use std::ops;

/// Stores (x, y, z, w) with w the scalar part; identity is (0, 0, 0, 1).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    pub fn angle_axis(axis: Vec3, angle: f32) -> Quaternion {
        let half_theta = angle * 0.5;
        let sin_half_theta = half_theta.sin();
        Quaternion {
            x: axis.x * sin_half_theta,
            y: axis.y * sin_half_theta,
            z: axis.z * sin_half_theta,
            w: half_theta.cos(),
        }
    }

    /// Builds an orientation from Euler angles (pitch about x, yaw about y,
    /// roll about z), applied roll then pitch then yaw.
    pub fn from_euler(euler: Vec3) -> Quaternion {
        let pitch = Quaternion::angle_axis(Vec3::new(1.0, 0.0, 0.0), euler.x);
        let yaw = Quaternion::angle_axis(Vec3::new(0.0, 1.0, 0.0), euler.y);
        let roll = Quaternion::angle_axis(Vec3::new(0.0, 0.0, 1.0), euler.z);
        yaw * (pitch * roll)
    }

    /// Standard Hamilton product; composes angular displacements right to left.
    pub fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl ops::Mul for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::mul(self, rhs)
    }
}

use super::quaternion::Quaternion;
use super::vec3::Vec3;
use super::vec4::Vec4;

/// A 4x4 matrix of 32-bit floats in column-major layout.
///
/// `m[r][c]` denotes row `r`, column `c`. Multiplication `a.multiply(b)`
/// uses the convention that column vectors are post-multiplied: `a * b * v`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4x4 {
    data: [f32; 16],
}

impl Matrix4x4 {
    pub const IDENTITY: Matrix4x4 = Matrix4x4 {
        data: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub const ZERO: Matrix4x4 = Matrix4x4 { data: [0.0; 16] };

    fn index(row: usize, col: usize) -> usize {
        col * 4 + row
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[Self::index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[Self::index(row, col)] = value;
    }

    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }

    /// Builds a perspective projection. NDC z lands in [0, 1] for points in
    /// [near, far]; y is inverted so increasing NDC y maps to decreasing
    /// screen row, and the camera's forward basis is along +z.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Matrix4x4 {
        let mut m = Matrix4x4::ZERO;
        let tan_half_fov_y = (fov_y * 0.5).tan();
        m.set(0, 0, 1.0 / (tan_half_fov_y * aspect));
        m.set(1, 1, -1.0 / tan_half_fov_y);
        m.set(2, 2, far / (far - near));
        m.set(3, 2, 1.0);
        m.set(2, 3, (near * far) / (near - far));
        m
    }

    pub fn translation(t: Vec3) -> Matrix4x4 {
        let mut m = Matrix4x4::IDENTITY;
        m.set(0, 3, t.x);
        m.set(1, 3, t.y);
        m.set(2, 3, t.z);
        m
    }

    /// Builds the 3x3 rotation from a quaternion, column by column.
    pub fn rotation(q: Quaternion) -> Matrix4x4 {
        let mut m = Matrix4x4::IDENTITY;

        m.set(0, 0, q.w * q.w + q.x * q.x - q.y * q.y - q.z * q.z);
        m.set(1, 0, 2.0 * q.w * q.z + 2.0 * q.x * q.y);
        m.set(2, 0, -2.0 * q.w * q.y + 2.0 * q.x * q.z);
        m.set(3, 0, 0.0);

        m.set(0, 1, -2.0 * q.w * q.z + 2.0 * q.x * q.y);
        m.set(1, 1, q.w * q.w - q.x * q.x + q.y * q.y - q.z * q.z);
        m.set(2, 1, 2.0 * q.w * q.x + 2.0 * q.y * q.z);
        m.set(3, 1, 0.0);

        m.set(0, 2, 2.0 * q.w * q.y + 2.0 * q.x * q.z);
        m.set(1, 2, -2.0 * q.w * q.x + 2.0 * q.y * q.z);
        m.set(2, 2, q.w * q.w - q.x * q.x - q.y * q.y + q.z * q.z);
        m.set(3, 2, 0.0);

        m.set(0, 3, 0.0);
        m.set(1, 3, 0.0);
        m.set(2, 3, 0.0);
        m.set(3, 3, 1.0);

        m
    }

    /// Rotation first, then translation to `position`.
    pub fn transform(position: Vec3, rotation: Quaternion) -> Matrix4x4 {
        let mut m = Matrix4x4::rotation(rotation);
        m.set(0, 3, position.x);
        m.set(1, 3, position.y);
        m.set(2, 3, position.z);
        m
    }

    /// Builds a view matrix from an explicit camera basis: the basis vectors
    /// become rows of the 3x3 part, and the translation column holds each
    /// basis vector dotted with `-position`.
    pub fn camera(position: Vec3, forward: Vec3, up: Vec3, right: Vec3) -> Matrix4x4 {
        let neg_position = -position;
        let mut m = Matrix4x4::IDENTITY;

        m.set(0, 0, right.x);
        m.set(0, 1, right.y);
        m.set(0, 2, right.z);
        m.set(0, 3, right.dot(neg_position));

        m.set(1, 0, up.x);
        m.set(1, 1, up.y);
        m.set(1, 2, up.z);
        m.set(1, 3, up.dot(neg_position));

        m.set(2, 0, forward.x);
        m.set(2, 1, forward.y);
        m.set(2, 2, forward.z);
        m.set(2, 3, forward.dot(neg_position));

        m.set(3, 0, 0.0);
        m.set(3, 1, 0.0);
        m.set(3, 2, 0.0);
        m.set(3, 3, 1.0);

        m
    }

    /// Builds a camera basis by looking from `position` toward `target`,
    /// preserving `up` as closely as possible.
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Matrix4x4 {
        let forward = (target - position).normalised();
        let up_on_forward = forward * up.dot(forward);
        let view_up = (up - up_on_forward).normalised();
        let view_right = forward.cross(view_up);
        Matrix4x4::camera(position, forward, view_up, view_right)
    }

    /// Standard 4x4 matrix product `self * other`.
    pub fn multiply(&self, other: &Matrix4x4) -> Matrix4x4 {
        let mut result = Matrix4x4::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.get(row, k) * other.get(k, col);
                }
                result.set(row, col, sum);
            }
        }
        result
    }

    /// Treats `v` as `(x, y, z, 1)` and returns the full `(x', y', z', w')`.
    pub fn mul_vec4(&self, v: Vec3) -> Vec4 {
        Vec4::new(
            v.x * self.get(0, 0) + v.y * self.get(0, 1) + v.z * self.get(0, 2) + self.get(0, 3),
            v.x * self.get(1, 0) + v.y * self.get(1, 1) + v.z * self.get(1, 2) + self.get(1, 3),
            v.x * self.get(2, 0) + v.y * self.get(2, 1) + v.z * self.get(2, 2) + self.get(2, 3),
            v.x * self.get(3, 0) + v.y * self.get(3, 1) + v.z * self.get(3, 2) + self.get(3, 3),
        )
    }
}

impl std::ops::Mul for Matrix4x4 {
    type Output = Matrix4x4;
    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        self.multiply(&rhs)
    }
}

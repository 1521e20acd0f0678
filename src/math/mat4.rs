/// Column-major 4x4 matrix, `data[column][row]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub data: [[f64; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f64; 4]; 4]) -> Self {
        Self { data }
    }

    pub fn identity() -> Self {
        Self {
            data: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn zero() -> Self {
        Self { data: [[0.0; 4]; 4] }
    }

    /// Planar translation; z is left untouched.
    pub fn from_translation(x: f64, y: f64) -> Self {
        let mut result = Self::identity();
        result.data[3][0] = x;
        result.data[3][1] = y;
        result
    }

    /// Scale in the x/y plane.
    pub fn from_scale(x: f64, y: f64) -> Self {
        let mut result = Self::identity();
        result.data[0][0] = x;
        result.data[1][1] = y;
        result
    }

    /// Maps a point on the z = 0 plane, dividing through by w when it is not zero.
    pub fn transform_point(&self, point: [f64; 2]) -> [f64; 2] {
        let x = self.data[0][0] * point[0] + self.data[1][0] * point[1] + self.data[3][0];
        let y = self.data[0][1] * point[0] + self.data[1][1] * point[1] + self.data[3][1];
        let w = self.data[0][3] * point[0] + self.data[1][3] * point[1] + self.data[3][3];

        if w != 0.0 { [x / w, y / w] } else { [x, y] }
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut result = Self::zero();

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.data[i][j] += self.data[k][j] * other.data[i][k];
                }
            }
        }

        result
    }
}

/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::math::mlaf;
use std::ops::Mul;

/// Vector math helper
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector3d {
    pub v: [f64; 3],
}

impl Vector3d {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { v: [x, y, z] }
    }
}

impl PartialEq<Self> for Vector3d {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        const TOLERANCE: f64 = 0.0001f64;
        let dx = (self.v[0] - other.v[0]).abs();
        let dy = (self.v[1] - other.v[1]).abs();
        let dz = (self.v[2] - other.v[2]).abs();
        dx < TOLERANCE && dy < TOLERANCE && dz < TOLERANCE
    }
}

impl Mul<f64> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Vector3d::new(self.v[0] * rhs, self.v[1] * rhs, self.v[2] * rhs)
    }
}

/// Row major 3x3 matrix
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix3d {
    pub v: [[f64; 3]; 3],
}

impl Matrix3d {
    #[inline]
    pub fn mul_vector(&self, other: Vector3d) -> Vector3d {
        let x = mlaf(
            mlaf(self.v[0][0] * other.v[0], self.v[0][1], other.v[1]),
            self.v[0][2],
            other.v[2],
        );
        let y = mlaf(
            mlaf(self.v[1][0] * other.v[0], self.v[1][1], other.v[1]),
            self.v[1][2],
            other.v[2],
        );
        let z = mlaf(
            mlaf(self.v[2][0] * other.v[0], self.v[2][1], other.v[1]),
            self.v[2][2],
            other.v[2],
        );
        Vector3d::new(x, y, z)
    }
}

/// Gamma decoded sRGB to CIE XYZ, D65, scaled so that white has Y = 100
pub const SRGB_TO_XYZ_D65: Matrix3d = Matrix3d {
    v: [
        [41.24, 35.76, 18.05],
        [21.26, 71.52, 7.22],
        [1.93, 11.92, 95.05],
    ],
};

/// CIE XYZ, D65, white Y = 1 to linear sRGB
pub const XYZ_D65_TO_SRGB: Matrix3d = Matrix3d {
    v: [
        [3.2406, -1.5372, -0.4986],
        [-0.9689, 1.8758, 0.0415],
        [0.0557, -0.2040, 1.0570],
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrices_are_near_inverse() {
        let basis = [
            Vector3d::new(1., 0., 0.),
            Vector3d::new(0., 1., 0.),
            Vector3d::new(0., 0., 1.),
        ];
        for (j, column) in basis.into_iter().enumerate() {
            let xyz = SRGB_TO_XYZ_D65.mul_vector(column) * 0.01;
            let back = XYZ_D65_TO_SRGB.mul_vector(xyz);
            for i in 0..3 {
                let expected = if i == j { 1. } else { 0. };
                assert!(
                    (back.v[i] - expected).abs() < 2e-3,
                    "[{i}][{j}] = {}",
                    back.v[i]
                );
            }
        }
    }

    #[test]
    fn white_maps_to_d65() {
        let white = SRGB_TO_XYZ_D65.mul_vector(Vector3d::new(1., 1., 1.));
        assert!((white.v[0] - 95.05).abs() < 0.01);
        assert!((white.v[1] - 100.).abs() < 0.01);
        assert!((white.v[2] - 108.9).abs() < 0.01);
    }
}

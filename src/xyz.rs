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
use crate::Color;
use crate::gamma::{srgb_from_linear, srgb_to_linear};
use crate::matrix::{SRGB_TO_XYZ_D65, Vector3d, XYZ_D65_TO_SRGB};

/// CIE XYZ tristimulus values relative to D65, scaled so that the white
/// point has `Y = 100`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialOrd)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub alpha: f64,
}

impl PartialEq<Self> for Xyz {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        const TOLERANCE: f64 = 0.0001f64;
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        let dz = (self.z - other.z).abs();
        dx < TOLERANCE && dy < TOLERANCE && dz < TOLERANCE && self.alpha == other.alpha
    }
}

impl Xyz {
    /// D65 reference white
    pub const D65: Xyz = Xyz::new(95.047, 100.0, 108.883, 1.);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, alpha: f64) -> Self {
        Self { x, y, z, alpha }
    }

    #[inline]
    pub const fn to_vector(self) -> Vector3d {
        Vector3d::new(self.x, self.y, self.z)
    }

    /// Linearizes the sRGB channels and applies the sRGB → XYZ matrix
    pub fn from_color(color: Color) -> Xyz {
        let (r, g, b, a) = color.to_rgba();
        let linear = Vector3d::new(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
        let xyz = SRGB_TO_XYZ_D65.mul_vector(linear);
        Xyz::new(xyz.v[0], xyz.v[1], xyz.v[2], a)
    }

    /// Back to gamma encoded sRGB; out of gamut channels are clamped
    pub fn to_color(&self) -> Color {
        let linear = XYZ_D65_TO_SRGB.mul_vector(self.to_vector() * 0.01);
        Color::from_rgba(
            srgb_from_linear(linear.v[0]),
            srgb_from_linear(linear.v[1]),
            srgb_from_linear(linear.v[2]),
            self.alpha,
        )
    }
}

impl From<Color> for Xyz {
    #[inline]
    fn from(value: Color) -> Self {
        Xyz::from_color(value)
    }
}

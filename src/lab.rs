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
use crate::math::cube;
use crate::{Color, Xyz};
use pxfm::{f_atan2, f_cbrt};
use std::ops::Sub;

/// Represents CIE L\*a\*b\* relative to the D65 white point
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Lab {
    /// The L\* value (lightness) of the colour in 0–100 range.
    pub l: f64,
    /// The a\* value, green (negative) to red (positive).
    ///
    /// Practically within -128–127 for colours coming from sRGB.
    pub a: f64,
    /// The b\* value, blue (negative) to yellow (positive).
    ///
    /// Practically within -128–127 for colours coming from sRGB.
    pub b: f64,
    pub alpha: f64,
}

const LAB_CUTOFF_FORWARD: f64 = (6f64 / 29f64) * (6f64 / 29f64) * (6f64 / 29f64);
const LAB_SLOPE_FORWARD: f64 = (29f64 / 6f64) * (29f64 / 6f64) / 3f64;
const LAB_CUTOFF_INVERSE: f64 = 0.008856;
const LAB_SLOPE_INVERSE: f64 = 7.787;
const LAB_OFFSET: f64 = 4f64 / 29f64;

#[inline]
fn lab_forward(t: f64) -> f64 {
    if t > LAB_CUTOFF_FORWARD {
        f_cbrt(t)
    } else {
        LAB_SLOPE_FORWARD * t + LAB_OFFSET
    }
}

#[inline]
fn lab_inverse(t: f64) -> f64 {
    let t3 = cube(t);
    if t3 > LAB_CUTOFF_INVERSE {
        t3
    } else {
        (t - LAB_OFFSET) / LAB_SLOPE_INVERSE
    }
}

impl Lab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64, alpha: f64) -> Lab {
        Lab { l, a, b, alpha }
    }

    /// Converts CIE [Xyz] into CIE L\*a\*b\* using the D65 white point
    pub fn from_xyz(xyz: Xyz) -> Lab {
        let fx = lab_forward(xyz.x / Xyz::D65.x);
        let fy = lab_forward(xyz.y / Xyz::D65.y);
        let fz = lab_forward(xyz.z / Xyz::D65.z);
        Lab::new(
            116. * fy - 16.,
            500. * (fx - fy),
            200. * (fy - fz),
            xyz.alpha,
        )
    }

    /// Converts CIE L\*a\*b\* into CIE [Xyz] using the D65 white point
    pub fn to_xyz(&self) -> Xyz {
        let fy = (self.l + 16.) / 116.;
        let fx = self.a / 500. + fy;
        let fz = fy - self.b / 200.;
        Xyz::new(
            lab_inverse(fx) * Xyz::D65.x,
            lab_inverse(fy) * Xyz::D65.y,
            lab_inverse(fz) * Xyz::D65.z,
            self.alpha,
        )
    }

    #[inline]
    pub fn from_color(color: Color) -> Lab {
        Lab::from_xyz(Xyz::from_color(color))
    }

    /// Converts into gamma encoded sRGB, out of gamut channels are clamped
    #[inline]
    pub fn to_color(&self) -> Color {
        self.to_xyz().to_color()
    }

    /// C\*ab
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// h_ab in degrees within 0–360
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        if self.a == 0. && self.b == 0. {
            return 0.;
        }
        let h = f_atan2(self.b, self.a).to_degrees();
        if h < 0. { h + 360. } else { h }
    }

    #[inline]
    pub fn euclidean_distance(&self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl From<Color> for Lab {
    #[inline]
    fn from(value: Color) -> Self {
        Lab::from_color(value)
    }
}

impl Sub<Lab> for Lab {
    type Output = Lab;

    #[inline]
    fn sub(self, rhs: Lab) -> Lab {
        Lab::new(self.l - rhs.l, self.a - rhs.a, self.b - rhs.b, self.alpha)
    }
}

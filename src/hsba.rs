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
use crate::math::unit_clamp;

/// Hue, saturation, brightness and alpha.
///
/// Hue is normalized: `h` in `[0, 1)` stands for `h * 360` degrees.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Hsba {
    pub h: f64,
    pub s: f64,
    pub b: f64,
    pub a: f64,
}

impl Hsba {
    #[inline]
    pub const fn new(h: f64, s: f64, b: f64, a: f64) -> Hsba {
        Hsba { h, s, b, a }
    }

    /// Hue in degrees
    #[inline]
    pub const fn degrees(&self) -> f64 {
        self.h * 360.
    }

    /// Decomposes an sRGB color.
    ///
    /// Achromatic colors have no defined hue, they report `h = 0, s = 0`.
    pub fn from_color(color: Color) -> Hsba {
        let (r, g, b, a) = color.to_rgba();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        if delta <= 0. {
            return Hsba::new(0., 0., max, a);
        }

        let s = delta / max;
        let sector = if max == r {
            (g - b) / delta
        } else if max == g {
            (b - r) / delta + 2.
        } else {
            (r - g) / delta + 4.
        };
        let mut h = sector / 6.;
        if h < 0. {
            h += 1.;
        }
        if h >= 1. {
            h -= 1.;
        }
        Hsba::new(h, s, max, a)
    }

    /// Six sector HSB reconstruction.
    ///
    /// Hue wraps around, saturation and brightness are clamped to `[0, 1]`,
    /// so brightening past white saturates instead of overflowing.
    pub fn to_color(&self) -> Color {
        let mut h = if self.h.is_finite() {
            self.h.rem_euclid(1.)
        } else {
            0.
        };
        if h >= 1. {
            h = 0.;
        }
        let s = unit_clamp(self.s);
        let v = unit_clamp(self.b);

        if s == 0. {
            return Color::from_rgba(v, v, v, self.a);
        }

        let h6 = h * 6.;
        let sector = h6.floor();
        let f = h6 - sector;
        let p = v * (1. - s);
        let q = v * (1. - s * f);
        let t = v * (1. - s * (1. - f));

        let (r, g, b) = match sector as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Color::from_rgba(r, g, b, self.a)
    }
}

impl From<Color> for Hsba {
    #[inline]
    fn from(value: Color) -> Self {
        Hsba::from_color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::assert_color_near;

    #[test]
    fn primaries() {
        let red = Hsba::from_color(Color::from_rgba(1., 0., 0., 1.));
        assert_eq!(red, Hsba::new(0., 1., 1., 1.));
        let green = Hsba::from_color(Color::from_rgba(0., 1., 0., 1.));
        assert!((green.degrees() - 120.).abs() < 1e-9);
        let blue = Hsba::from_color(Color::from_rgba(0., 0., 1., 1.));
        assert!((blue.degrees() - 240.).abs() < 1e-9);
        let magenta = Hsba::from_color(Color::from_rgba(1., 0., 1., 1.));
        assert!((magenta.degrees() - 300.).abs() < 1e-9);
    }

    #[test]
    fn black_is_achromatic() {
        let black = Hsba::from_color(Color::BLACK);
        assert_eq!(black, Hsba::new(0., 0., 0., 1.));
    }

    #[test]
    fn hue_wraps() {
        let a = Hsba::new(1.0, 1., 1., 1.).to_color();
        let b = Hsba::new(0.0, 1., 1., 1.).to_color();
        assert_color_near(a, b, 1e-12);
        let c = Hsba::new(-0.25, 1., 1., 1.).to_color();
        let d = Hsba::new(0.75, 1., 1., 1.).to_color();
        assert_color_near(c, d, 1e-12);
    }

    #[test]
    fn overflowing_brightness_is_clamped() {
        let color = Hsba::new(0.5, 0.5, 1.7, 1.).to_color();
        assert_color_near(color, Hsba::new(0.5, 0.5, 1., 1.).to_color(), 1e-12);
        let gray = Hsba::new(0.5, -0.3, 0.4, 1.).to_color();
        assert_color_near(gray, Color::gray(0.4, 1.), 1e-12);
    }

    #[test]
    fn sectors() {
        let orange = Hsba::new(30. / 360., 1., 1., 1.).to_color();
        assert_color_near(orange, Color::from_rgba(1., 0.5, 0., 1.), 1e-9);
        let teal = Hsba::new(180. / 360., 1., 0.5, 1.).to_color();
        assert_color_near(teal, Color::from_rgba(0., 0.5, 0.5, 1.), 1e-9);
    }
}

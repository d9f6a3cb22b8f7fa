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

/// Subtractive cyan, magenta, yellow and key (black) components in `[0, 1]`
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Cmyk {
        Cmyk { c, m, y, k }
    }

    /// Decomposes an sRGB color, alpha is dropped.
    ///
    /// Pure black has no chromatic part and always yields `(0, 0, 0, 1)`.
    pub fn from_color(color: Color) -> Cmyk {
        let (r, g, b, _) = color.to_rgba();
        let c = 1. - r;
        let m = 1. - g;
        let y = 1. - b;

        let k = c.min(m).min(y).min(1.);
        if k == 1. {
            return Cmyk::new(0., 0., 0., 1.);
        }

        let scale = 1. / (1. - k);
        Cmyk::new((c - k) * scale, (m - k) * scale, (y - k) * scale, k)
    }

    /// Opaque sRGB color
    pub fn to_color(&self) -> Color {
        let k = self.k;
        let ink = |x: f64| x * (1. - k) + k;
        Color::from_rgba(1. - ink(self.c), 1. - ink(self.m), 1. - ink(self.y), 1.)
    }
}

impl From<Color> for Cmyk {
    #[inline]
    fn from(value: Color) -> Self {
        Cmyk::from_color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::assert_color_near;

    #[test]
    fn white_and_black() {
        assert_eq!(Cmyk::from_color(Color::WHITE), Cmyk::new(0., 0., 0., 0.));
        assert_eq!(Cmyk::from_color(Color::BLACK), Cmyk::new(0., 0., 0., 1.));
    }

    #[test]
    fn black_ignores_alpha() {
        let cmyk = Cmyk::from_color(Color::from_rgba(0., 0., 0., 0.3));
        assert_eq!(cmyk, Cmyk::new(0., 0., 0., 1.));
        assert_eq!(cmyk.to_color(), Color::BLACK);
    }

    #[test]
    fn primaries() {
        let red = Cmyk::from_color(Color::from_rgba(1., 0., 0., 1.));
        assert_eq!(red, Cmyk::new(0., 1., 1., 0.));
        let dark_teal = Cmyk::from_color(Color::from_rgba(0., 0.5, 0.5, 1.));
        assert!((dark_teal.c - 1.).abs() < 1e-12);
        assert!(dark_teal.m.abs() < 1e-12);
        assert!(dark_teal.y.abs() < 1e-12);
        assert!((dark_teal.k - 0.5).abs() < 1e-12);
    }

    #[test]
    fn to_color_is_opaque() {
        let color = Cmyk::new(0.2, 0.4, 0.6, 0.1).to_color();
        assert_color_near(color, Color::from_rgba(0.72, 0.54, 0.36, 1.), 1e-12);
    }
}

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
use crate::{Cmyk, Hsba, Lab, Rgb, Xyz};

/// Color stored as gamma encoded sRGB with straight alpha.
///
/// Every channel lives in `[0, 1]`; constructors clamp out of range input
/// and map NaN to zero. Other representations ([Hsba], [Lab], [Xyz], [Cmyk])
/// are computed on demand and never cached, so a `Color` is a plain
/// immutable value. Operations that "modify" a color return a new one.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

#[inline]
const fn unit(v: f64) -> f64 {
    if v.is_nan() {
        0.
    } else if v < 0. {
        0.
    } else if v > 1. {
        1.
    } else {
        v
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::from_rgba(0., 0., 0., 1.);
    pub const WHITE: Color = Color::from_rgba(1., 1., 1., 1.);
    pub const CLEAR: Color = Color::from_rgba(0., 0., 0., 0.);

    /// Creates a color from sRGB components in `[0, 1]`.
    ///
    /// Callers are expected to pass normalized values; anything outside the
    /// unit range is clamped rather than rejected.
    #[inline]
    pub const fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Opaque color from 8-bit channels
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::from_rgba(r as f64 / 255., g as f64 / 255., b as f64 / 255., 1.)
    }

    /// Achromatic color with the same value on every channel
    #[inline]
    pub const fn gray(white: f64, alpha: f64) -> Color {
        Color::from_rgba(white, white, white, alpha)
    }

    #[inline]
    pub fn from_hsba(h: f64, s: f64, b: f64, a: f64) -> Color {
        Hsba::new(h, s, b, a).to_color()
    }

    #[inline]
    pub fn from_lab(l: f64, a: f64, b: f64, alpha: f64) -> Color {
        Lab::new(l, a, b, alpha).to_color()
    }

    #[inline]
    pub fn from_cmyk(c: f64, m: f64, y: f64, k: f64) -> Color {
        Cmyk::new(c, m, y, k).to_color()
    }

    /// Returns the same color with a replaced alpha channel
    #[inline]
    pub const fn with_alpha(self, alpha: f64) -> Color {
        Color::from_rgba(self.r, self.g, self.b, alpha)
    }

    #[inline]
    pub const fn to_rgba(&self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.a)
    }

    #[inline]
    pub const fn rgb(&self) -> Rgb<f64> {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Quantized 8-bit channels, alpha dropped
    #[inline]
    pub fn to_rgb8(&self) -> Rgb<u8> {
        (self.rgb() * 255.).round().cast::<u8>()
    }

    #[inline]
    pub fn to_hsba(&self) -> Hsba {
        Hsba::from_color(*self)
    }

    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from_color(*self)
    }

    #[inline]
    pub fn to_lab(&self) -> Lab {
        Lab::from_color(*self)
    }

    #[inline]
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::from_color(*self)
    }

    #[inline]
    pub const fn red(&self) -> f64 {
        self.r
    }

    #[inline]
    pub const fn green(&self) -> f64 {
        self.g
    }

    #[inline]
    pub const fn blue(&self) -> f64 {
        self.b
    }

    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn hue(&self) -> f64 {
        self.to_hsba().h
    }

    #[inline]
    pub fn saturation(&self) -> f64 {
        self.to_hsba().s
    }

    #[inline]
    pub fn brightness(&self) -> f64 {
        self.to_hsba().b
    }

    /// CIE L\*
    #[inline]
    pub fn lightness(&self) -> f64 {
        self.to_lab().l
    }

    /// CIE a\*
    #[inline]
    pub fn lab_a(&self) -> f64 {
        self.to_lab().a
    }

    /// CIE b\*
    #[inline]
    pub fn lab_b(&self) -> f64 {
        self.to_lab().b
    }

    #[inline]
    pub fn cyan(&self) -> f64 {
        self.to_cmyk().c
    }

    #[inline]
    pub fn magenta(&self) -> f64 {
        self.to_cmyk().m
    }

    #[inline]
    pub fn yellow(&self) -> f64 {
        self.to_cmyk().y
    }

    #[inline]
    pub fn key_black(&self) -> f64 {
        self.to_cmyk().k
    }
}

impl From<Hsba> for Color {
    #[inline]
    fn from(value: Hsba) -> Self {
        value.to_color()
    }
}

impl From<Lab> for Color {
    #[inline]
    fn from(value: Lab) -> Self {
        value.to_color()
    }
}

impl From<Xyz> for Color {
    #[inline]
    fn from(value: Xyz) -> Self {
        value.to_color()
    }
}

impl From<Cmyk> for Color {
    #[inline]
    fn from(value: Cmyk) -> Self {
        value.to_color()
    }
}

impl From<Rgb<u8>> for Color {
    #[inline]
    fn from(value: Rgb<u8>) -> Self {
        Color::from_rgb8(value.r, value.g, value.b)
    }
}

#[cfg(test)]
pub(crate) fn assert_color_near(color: Color, expected: Color, tolerance: f64) {
    let (r0, g0, b0, a0) = color.to_rgba();
    let (r1, g1, b1, a1) = expected.to_rgba();
    assert!(
        (r0 - r1).abs() < tolerance
            && (g0 - g1).abs() < tolerance
            && (b0 - b1).abs() < tolerance
            && (a0 - a1).abs() < tolerance,
        "{color:?} is not within {tolerance} of {expected:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn constructors_clamp() {
        let color = Color::from_rgba(1.5, -0.5, f64::NAN, 2.);
        assert_eq!(color.to_rgba(), (1., 0., 0., 1.));
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn rgb8_quantization() {
        let color = Color::from_rgb8(28, 160, 170);
        assert_eq!(color.to_rgb8(), Rgb::new(28, 160, 170));
        assert_eq!(Color::from(Rgb::new(1u8, 2, 3)).to_rgb8(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn accessors_project_views() {
        let color = Color::from_rgba(0.2, 0.4, 0.6, 0.5);
        assert_eq!(color.red(), 0.2);
        assert_eq!(color.green(), 0.4);
        assert_eq!(color.blue(), 0.6);
        assert_eq!(color.alpha(), 0.5);
        let hsba = color.to_hsba();
        assert_eq!(color.hue(), hsba.h);
        assert_eq!(color.saturation(), hsba.s);
        assert_eq!(color.brightness(), hsba.b);
        let lab = color.to_lab();
        assert_eq!(color.lightness(), lab.l);
        assert_eq!(color.lab_a(), lab.a);
        assert_eq!(color.lab_b(), lab.b);
        let cmyk = color.to_cmyk();
        assert_eq!(color.cyan(), cmyk.c);
        assert_eq!(color.magenta(), cmyk.m);
        assert_eq!(color.yellow(), cmyk.y);
        assert_eq!(color.key_black(), cmyk.k);
    }

    #[test]
    fn round_trip_hsba() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..2000 {
            let color = Color::from_rgba(
                rng.random_range(0.0..=1.0),
                rng.random_range(0.0..=1.0),
                rng.random_range(0.0..=1.0),
                rng.random_range(0.0..=1.0),
            );
            let rolled_back = Color::from(color.to_hsba());
            assert_color_near(rolled_back, color, 1e-3);
        }
    }

    #[test]
    fn round_trip_hsba_achromatic() {
        for i in 0..=20 {
            let v = i as f64 / 20.;
            let color = Color::gray(v, 1.);
            let hsba = color.to_hsba();
            assert_eq!(hsba.h, 0.);
            assert_eq!(hsba.s, 0.);
            assert_color_near(Color::from(hsba), color, 1e-9);
        }
    }

    #[test]
    fn round_trip_lab() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let color = Color::from_rgba(
                rng.random_range(0.1..=0.9),
                rng.random_range(0.1..=0.9),
                rng.random_range(0.1..=0.9),
                rng.random_range(0.0..=1.0),
            );
            let rolled_back = Color::from(color.to_lab());
            assert_color_near(rolled_back, color, 1e-2);
        }
    }

    #[test]
    fn round_trip_cmyk() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let color = Color::from_rgba(
                rng.random_range(0.0..=1.0),
                rng.random_range(0.0..=1.0),
                rng.random_range(0.0..=1.0),
                1.,
            );
            let rolled_back = Color::from(color.to_cmyk());
            assert_color_near(rolled_back, color, 1e-3);
        }
    }
}

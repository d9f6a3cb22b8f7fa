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
use crate::err::ChromaError;
use crate::{Color, Hsba};

/// Four color palettes derived from a base color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Analogous = 0,
    Monochromatic = 1,
    Triad = 2,
    Complementary = 3,
}

impl TryFrom<u8> for ColorScheme {
    type Error = ChromaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ColorScheme::Analogous),
            1 => Ok(ColorScheme::Monochromatic),
            2 => Ok(ColorScheme::Triad),
            3 => Ok(ColorScheme::Complementary),
            _ => Err(ChromaError::InvalidColorScheme(value)),
        }
    }
}

/// Adds `delta` degrees to `base`.
///
/// Sums above 360 wrap once, negative sums are reflected: `-20` becomes `20`,
/// not `340`. Scheme offsets are tuned against the reflection, keep it.
#[inline]
pub fn add_degree(delta: f64, base: f64) -> f64 {
    let sum = base + delta;
    if sum > 360. {
        sum - 360.
    } else if sum < 0. {
        -sum
    } else {
        sum
    }
}

#[inline]
fn rotated(hsba: Hsba, degrees: f64) -> f64 {
    add_degree(degrees, hsba.degrees()) / 360.
}

fn analogous(hsba: Hsba) -> [Color; 4] {
    let Hsba { s, b, a, .. } = hsba;
    [
        Color::from_hsba(rotated(hsba, 30.), s - 0.05, b - 0.1, a),
        Color::from_hsba(rotated(hsba, 15.), s - 0.05, b - 0.05, a),
        Color::from_hsba(rotated(hsba, -15.), s - 0.05, b - 0.05, a),
        Color::from_hsba(rotated(hsba, -30.), s - 0.05, b - 0.1, a),
    ]
}

fn monochromatic(hsba: Hsba) -> [Color; 4] {
    let Hsba { h, s, b, a } = hsba;
    [
        Color::from_hsba(h, s / 2., b / 3., a),
        Color::from_hsba(h, s, b / 2., a),
        Color::from_hsba(h, s / 3., 2. * b / 3., a),
        Color::from_hsba(h, s, 4. * b / 5., a),
    ]
}

fn triad(hsba: Hsba) -> [Color; 4] {
    let Hsba { s, b, a, .. } = hsba;
    [
        Color::from_hsba(rotated(hsba, 120.), 2. * s / 3., b - 0.05, a),
        Color::from_hsba(rotated(hsba, 120.), s, b, a),
        Color::from_hsba(rotated(hsba, 240.), s, b, a),
        Color::from_hsba(rotated(hsba, 240.), 2. * s / 3., b - 0.05, a),
    ]
}

fn complementary(hsba: Hsba) -> [Color; 4] {
    let Hsba { h, s, b, a } = hsba;
    [
        Color::from_hsba(h, s, 4. * b / 5., a),
        Color::from_hsba(h, 5. * s / 7., b, a),
        Color::from_hsba(rotated(hsba, 180.), s, b, a),
        Color::from_hsba(rotated(hsba, 180.), 5. * s / 7., b, a),
    ]
}

impl Color {
    /// Scales HSB brightness by `1 + percentage`.
    ///
    /// Brightness past 1 is clamped when the color is rebuilt, so large
    /// percentages converge to the fully bright color of the same hue and
    /// saturation instead of to white.
    #[inline]
    pub fn lighten(&self, percentage: f64) -> Color {
        self.scaled_brightness(1. + percentage)
    }

    /// Scales HSB brightness by `1 - percentage`
    #[inline]
    pub fn darken(&self, percentage: f64) -> Color {
        self.scaled_brightness(1. - percentage)
    }

    fn scaled_brightness(&self, factor: f64) -> Color {
        let hsba = self.to_hsba();
        Color::from_hsba(hsba.h, hsba.s, hsba.b * factor, hsba.a)
    }

    /// Pure black or pure white, whichever reads better on top of this color
    pub fn black_or_white_contrast(&self) -> Color {
        let (r, g, b, _) = self.to_rgba();
        let luma = 0.299 * r + 0.587 * g + 0.114 * b;
        if 1. - luma < 0.5 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// Hue rotated by 180 degrees; saturation, brightness and alpha are kept
    pub fn complementary(&self) -> Color {
        let hsba = self.to_hsba();
        Color::from_hsba(rotated(hsba, 180.), hsba.s, hsba.b, hsba.a)
    }

    /// Exactly four colors built from fixed hue, saturation and brightness
    /// offsets of this color
    pub fn color_scheme(&self, scheme: ColorScheme) -> [Color; 4] {
        let hsba = self.to_hsba();
        match scheme {
            ColorScheme::Analogous => analogous(hsba),
            ColorScheme::Monochromatic => monochromatic(hsba),
            ColorScheme::Triad => triad(hsba),
            ColorScheme::Complementary => complementary(hsba),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::assert_color_near;

    #[test]
    fn add_degree_reflects_negative_sums() {
        assert_eq!(add_degree(-30., 10.), 20.);
        assert_eq!(add_degree(30., 350.), 20.);
        assert_eq!(add_degree(10., 350.), 360.);
        assert_eq!(add_degree(-15., 15.), 0.);
        assert_eq!(add_degree(120., 100.), 220.);
    }

    #[test]
    fn contrast() {
        assert_eq!(Color::WHITE.black_or_white_contrast(), Color::BLACK);
        assert_eq!(Color::BLACK.black_or_white_contrast(), Color::WHITE);
        assert_eq!(
            Color::from_rgb8(255, 255, 0).black_or_white_contrast(),
            Color::BLACK
        );
        assert_eq!(
            Color::from_rgb8(13, 79, 139).black_or_white_contrast(),
            Color::WHITE
        );
    }

    #[test]
    fn double_complement_returns() {
        for degrees in [30., 75., 120., 200., 250., 330.] {
            let color = Color::from_hsba(degrees / 360., 0.7, 0.8, 0.9);
            let twice = color.complementary().complementary();
            assert_color_near(twice, color, 1e-6);
        }
    }

    #[test]
    fn complementary_of_red_is_cyan() {
        let cyan = Color::from_rgba(1., 0., 0., 1.).complementary();
        assert_color_near(cyan, Color::from_rgba(0., 1., 1., 1.), 1e-9);
    }

    #[test]
    fn lighten_and_darken() {
        let color = Color::from_hsba(0.6, 0.5, 0.5, 1.);
        assert!((color.lighten(0.2).brightness() - 0.6).abs() < 1e-9);
        assert!((color.darken(0.2).brightness() - 0.4).abs() < 1e-9);
        let saturated = color.lighten(5.);
        assert!((saturated.brightness() - 1.).abs() < 1e-9);
        assert!((saturated.saturation() - 0.5).abs() < 1e-9);
        assert_eq!(color.darken(1.), Color::BLACK);
    }

    #[test]
    fn monochromatic_keeps_hue() {
        let base = Color::from_hsba(0.3, 0.6, 0.9, 1.);
        let scheme = base.color_scheme(ColorScheme::Monochromatic);
        assert_eq!(scheme.len(), 4);
        for color in scheme {
            assert!((color.hue() - base.hue()).abs() < 1e-9, "{color:?}");
        }
        let hsba = scheme[0].to_hsba();
        assert!((hsba.s - 0.3).abs() < 1e-9);
        assert!((hsba.b - 0.3).abs() < 1e-9);
    }

    #[test]
    fn analogous_offsets() {
        let base = Color::from_hsba(100. / 360., 0.5, 0.8, 1.);
        let scheme = base.color_scheme(ColorScheme::Analogous);
        let degrees = scheme.map(|c| c.to_hsba().degrees());
        let expected = [130., 115., 85., 70.];
        for (d, e) in degrees.iter().zip(expected.iter()) {
            assert!((d - e).abs() < 1e-6, "{d} vs {e}");
        }
        let first = scheme[0].to_hsba();
        assert!((first.s - 0.45).abs() < 1e-9);
        assert!((first.b - 0.7).abs() < 1e-9);
    }

    #[test]
    fn analogous_reflects_near_zero() {
        let base = Color::from_hsba(10. / 360., 0.5, 0.8, 1.);
        let scheme = base.color_scheme(ColorScheme::Analogous);
        assert!((scheme[3].to_hsba().degrees() - 20.).abs() < 1e-6);
        assert!((scheme[2].to_hsba().degrees() - 5.).abs() < 1e-6);
    }

    #[test]
    fn triad_and_complementary() {
        let base = Color::from_hsba(60. / 360., 0.9, 0.9, 1.);
        let triad = base.color_scheme(ColorScheme::Triad);
        assert!((triad[1].to_hsba().degrees() - 180.).abs() < 1e-6);
        assert!((triad[2].to_hsba().degrees() - 300.).abs() < 1e-6);
        assert!((triad[0].to_hsba().s - 0.6).abs() < 1e-9);
        assert!((triad[0].to_hsba().b - 0.85).abs() < 1e-9);

        let complementary = base.color_scheme(ColorScheme::Complementary);
        assert!((complementary[0].to_hsba().b - 0.72).abs() < 1e-9);
        assert!((complementary[1].to_hsba().s - 0.9 * 5. / 7.).abs() < 1e-9);
        assert!((complementary[2].to_hsba().degrees() - 240.).abs() < 1e-6);
    }

    #[test]
    fn scheme_from_u8() {
        assert_eq!(ColorScheme::try_from(2), Ok(ColorScheme::Triad));
        assert_eq!(
            ColorScheme::try_from(9),
            Err(ChromaError::InvalidColorScheme(9))
        );
    }
}

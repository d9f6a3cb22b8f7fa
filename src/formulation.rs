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
use crate::{Cmyk, Color, Hsba, Lab};

/// Representation a set of four components is expressed in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormulation {
    /// red, green, blue, alpha
    Rgba = 0,
    /// hue, saturation, brightness, alpha
    Hsba = 1,
    /// L\*, a\*, b\*, alpha
    Lab = 2,
    /// cyan, magenta, yellow, key
    Cmyk = 3,
}

impl TryFrom<u8> for ColorFormulation {
    type Error = ChromaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ColorFormulation::Rgba),
            1 => Ok(ColorFormulation::Hsba),
            2 => Ok(ColorFormulation::Lab),
            3 => Ok(ColorFormulation::Cmyk),
            _ => Err(ChromaError::InvalidColorFormulation(value)),
        }
    }
}

impl Color {
    pub fn components(&self, formulation: ColorFormulation) -> [f64; 4] {
        match formulation {
            ColorFormulation::Rgba => {
                let (r, g, b, a) = self.to_rgba();
                [r, g, b, a]
            }
            ColorFormulation::Hsba => {
                let Hsba { h, s, b, a } = self.to_hsba();
                [h, s, b, a]
            }
            ColorFormulation::Lab => {
                let Lab { l, a, b, alpha } = self.to_lab();
                [l, a, b, alpha]
            }
            ColorFormulation::Cmyk => {
                let Cmyk { c, m, y, k } = self.to_cmyk();
                [c, m, y, k]
            }
        }
    }

    pub fn from_components(formulation: ColorFormulation, components: [f64; 4]) -> Color {
        let [c0, c1, c2, c3] = components;
        match formulation {
            ColorFormulation::Rgba => Color::from_rgba(c0, c1, c2, c3),
            ColorFormulation::Hsba => Color::from_hsba(c0, c1, c2, c3),
            ColorFormulation::Lab => Color::from_lab(c0, c1, c2, c3),
            ColorFormulation::Cmyk => Color::from_cmyk(c0, c1, c2, c3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::assert_color_near;

    #[test]
    fn components_round_trip() {
        let color = Color::from_rgba(0.25, 0.5, 0.75, 1.);
        for formulation in [
            ColorFormulation::Rgba,
            ColorFormulation::Hsba,
            ColorFormulation::Lab,
            ColorFormulation::Cmyk,
        ] {
            let components = color.components(formulation);
            let rolled_back = Color::from_components(formulation, components);
            assert_color_near(rolled_back, color, 1e-2);
        }
    }

    #[test]
    fn components_order() {
        let color = Color::from_rgba(1., 0., 0., 0.5);
        assert_eq!(color.components(ColorFormulation::Rgba), [1., 0., 0., 0.5]);
        assert_eq!(color.components(ColorFormulation::Hsba), [0., 1., 1., 0.5]);
        assert_eq!(color.components(ColorFormulation::Cmyk), [0., 1., 1., 0.]);
    }

    #[test]
    fn formulation_from_u8() {
        assert_eq!(ColorFormulation::try_from(3), Ok(ColorFormulation::Cmyk));
        assert!(ColorFormulation::try_from(4).is_err());
    }
}

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
use crate::{Color, Lab};
use pxfm::{f_atan2, f_cos, f_exp, f_sin};

/// Color difference formula
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorDistance {
    /// Euclidean distance in L\*a\*b\*
    Cie76 = 0,
    /// CIE94 with graphic arts weights
    Cie94 = 1,
    /// CIEDE2000
    Cie2000 = 2,
}

impl TryFrom<u8> for ColorDistance {
    type Error = ChromaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ColorDistance::Cie76),
            1 => Ok(ColorDistance::Cie94),
            2 => Ok(ColorDistance::Cie2000),
            _ => Err(ChromaError::InvalidColorDistance(value)),
        }
    }
}

const POW25_7: f64 = 6103515625.; // 25^7

#[inline]
fn hue_prime(b: f64, a: f64) -> f64 {
    if a == 0. && b == 0. {
        return 0.;
    }
    let h = f_atan2(b, a).to_degrees();
    if h < 0. { h + 360. } else { h }
}

#[inline]
fn cos_deg(v: f64) -> f64 {
    f_cos(v.to_radians())
}

#[inline]
fn sin_deg(v: f64) -> f64 {
    f_sin(v.to_radians())
}

impl Lab {
    #[inline]
    pub fn cie76(&self, other: Lab) -> f64 {
        self.euclidean_distance(other)
    }

    /// CIE94, graphic arts application weights (kL = 1, K1 = 0.045, K2 = 0.015).
    /// `self` is the reference color, the formula is not symmetric.
    pub fn cie94(&self, other: Lab) -> f64 {
        const K1: f64 = 0.045;
        const K2: f64 = 0.015;

        let c1 = self.chroma();
        let c2 = other.chroma();
        let d = *self - other;
        let dc = c1 - c2;
        let dh2 = (d.a * d.a + d.b * d.b - dc * dc).max(0.);

        let sc = 1. + K1 * c1;
        let sh = 1. + K2 * c1;

        let l = d.l;
        let c = dc / sc;
        (l * l + c * c + dh2 / (sh * sh)).sqrt()
    }

    /// CIEDE2000 with unit weighting factors
    pub fn ciede2000(&self, other: Lab) -> f64 {
        let (l1, a1, b1) = (self.l, self.a, self.b);
        let (l2, a2, b2) = (other.l, other.a, other.b);

        let c_bar = (a1.hypot(b1) + a2.hypot(b2)) * 0.5;
        let c_bar7 = c_bar.powi(7);
        let g = 0.5 * (1. - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

        let a1p = (1. + g) * a1;
        let a2p = (1. + g) * a2;
        let c1p = a1p.hypot(b1);
        let c2p = a2p.hypot(b2);
        let h1p = hue_prime(b1, a1p);
        let h2p = hue_prime(b2, a2p);

        let dlp = l2 - l1;
        let dcp = c2p - c1p;
        let chroma_product = c1p * c2p;

        let dhp = if chroma_product == 0. {
            0.
        } else {
            let d = h2p - h1p;
            if d > 180. {
                d - 360.
            } else if d < -180. {
                d + 360.
            } else {
                d
            }
        };
        let d_big_hp = 2. * chroma_product.sqrt() * sin_deg(dhp * 0.5);

        let l_bar_p = (l1 + l2) * 0.5;
        let c_bar_p = (c1p + c2p) * 0.5;
        let h_bar_p = if chroma_product == 0. {
            h1p + h2p
        } else if (h1p - h2p).abs() <= 180. {
            (h1p + h2p) * 0.5
        } else if h1p + h2p < 360. {
            (h1p + h2p + 360.) * 0.5
        } else {
            (h1p + h2p - 360.) * 0.5
        };

        let t = 1. - 0.17 * cos_deg(h_bar_p - 30.)
            + 0.24 * cos_deg(2. * h_bar_p)
            + 0.32 * cos_deg(3. * h_bar_p + 6.)
            - 0.20 * cos_deg(4. * h_bar_p - 63.);

        let hue_offset = (h_bar_p - 275.) / 25.;
        let d_theta = 30. * f_exp(-(hue_offset * hue_offset));
        let c_bar_p7 = c_bar_p.powi(7);
        let rc = 2. * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();
        let l50 = (l_bar_p - 50.) * (l_bar_p - 50.);
        let sl = 1. + 0.015 * l50 / (20. + l50).sqrt();
        let sc = 1. + 0.045 * c_bar_p;
        let sh = 1. + 0.015 * c_bar_p * t;
        let rt = -sin_deg(2. * d_theta) * rc;

        let l = dlp / sl;
        let c = dcp / sc;
        let h = d_big_hp / sh;
        (l * l + c * c + h * h + rt * c * h).max(0.).sqrt()
    }

    pub fn distance(&self, other: Lab, formula: ColorDistance) -> f64 {
        match formula {
            ColorDistance::Cie76 => self.cie76(other),
            ColorDistance::Cie94 => self.cie94(other),
            ColorDistance::Cie2000 => self.ciede2000(other),
        }
    }
}

impl Color {
    /// Perceptual difference between two colors, alpha is ignored
    #[inline]
    pub fn distance(&self, other: Color, formula: ColorDistance) -> f64 {
        self.to_lab().distance(other.to_lab(), formula)
    }
}

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
use crate::err::ChromaError;
use std::cmp::Ordering;

/// Ordering criteria for lists of colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorComparison {
    /// Darkest first, by CIE L\*
    Darkness = 0,
    /// Lightest first, by CIE L\*
    Lightness = 1,
    /// Least saturated first
    Desaturated = 2,
    /// Most saturated first
    Saturated = 3,
    /// Strongest red channel first
    Red = 4,
    /// Strongest green channel first
    Green = 5,
    /// Strongest blue channel first
    Blue = 6,
}

impl TryFrom<u8> for ColorComparison {
    type Error = ChromaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ColorComparison::Darkness),
            1 => Ok(ColorComparison::Lightness),
            2 => Ok(ColorComparison::Desaturated),
            3 => Ok(ColorComparison::Saturated),
            4 => Ok(ColorComparison::Red),
            5 => Ok(ColorComparison::Green),
            6 => Ok(ColorComparison::Blue),
            _ => Err(ChromaError::InvalidColorComparison(value)),
        }
    }
}

impl Color {
    /// Orders `self` before `other` when it comes first under `comparison`
    pub fn compare(&self, other: &Color, comparison: ColorComparison) -> Ordering {
        match comparison {
            ColorComparison::Darkness => self.lightness().total_cmp(&other.lightness()),
            ColorComparison::Lightness => other.lightness().total_cmp(&self.lightness()),
            ColorComparison::Desaturated => self.saturation().total_cmp(&other.saturation()),
            ColorComparison::Saturated => other.saturation().total_cmp(&self.saturation()),
            ColorComparison::Red => other.red().total_cmp(&self.red()),
            ColorComparison::Green => other.green().total_cmp(&self.green()),
            ColorComparison::Blue => other.blue().total_cmp(&self.blue()),
        }
    }
}

/// Stable in-place sort
pub fn sort_colors(colors: &mut [Color], comparison: ColorComparison) {
    colors.sort_by(|a, b| a.compare(b, comparison));
}

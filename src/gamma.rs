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
use pxfm::f_pow;

pub(crate) const SRGB_DECODE_THRESHOLD: f64 = 0.04045;
pub(crate) const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

#[inline]
/// Linear transfer function for sRGB
pub(crate) fn srgb_to_linear(gamma: f64) -> f64 {
    if gamma > SRGB_DECODE_THRESHOLD {
        f_pow((gamma + 0.055) / 1.055, 2.4)
    } else {
        gamma / 12.92
    }
}

#[inline]
/// Gamma transfer function for sRGB
///
/// Negative input stays on the linear segment, so out of gamut values
/// remain negative and are clamped later by [crate::Color] constructors.
pub(crate) fn srgb_from_linear(linear: f64) -> f64 {
    if linear > SRGB_ENCODE_THRESHOLD {
        1.055 * f_pow(linear, 1.0 / 2.4) - 0.055
    } else {
        linear * 12.92
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_curve_round_trip() {
        for i in 0..=255 {
            let v = i as f64 / 255.;
            let rolled = srgb_from_linear(srgb_to_linear(v));
            assert!((v - rolled).abs() < 1e-6, "value {v}, rolled {rolled}");
        }
    }

    #[test]
    fn linear_segment() {
        assert_eq!(srgb_to_linear(0.), 0.);
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-12);
        assert!((srgb_from_linear(0.003) - 0.003 * 12.92).abs() < 1e-12);
        assert!(srgb_from_linear(-0.01) < 0.);
    }

    #[test]
    fn mid_gray() {
        let linear = srgb_to_linear(0.5);
        assert!((linear - 0.214041).abs() < 1e-5);
    }
}

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
#![no_main]

use chromakit::{Color, ColorComparison, ColorDistance, ColorScheme, sort_colors};
use libfuzzer_sys::fuzz_target;

fn in_unit(color: Color) -> bool {
    let (r, g, b, a) = color.to_rgba();
    [r, g, b, a].iter().all(|v| (0. ..=1.).contains(v))
}

fuzz_target!(|data: [u64; 4]| {
    let [v0, v1, v2, v3] = data.map(f64::from_bits);

    let colors = [
        Color::from_rgba(v0, v1, v2, v3),
        Color::from_hsba(v0, v1, v2, v3),
        Color::from_lab(v0, v1, v2, v3),
        Color::from_cmyk(v0, v1, v2, v3),
    ];
    for color in colors {
        assert!(in_unit(color));
        assert!(in_unit(color.complementary()));
        assert!(in_unit(color.lighten(v0)));
        assert!(in_unit(color.darken(v1)));
        for scheme in [
            ColorScheme::Analogous,
            ColorScheme::Monochromatic,
            ColorScheme::Triad,
            ColorScheme::Complementary,
        ] {
            assert!(color.color_scheme(scheme).into_iter().all(in_unit));
        }
        let cmyk = color.to_cmyk();
        assert!(cmyk.k >= 0. && cmyk.k <= 1.);
        _ = color.distance(colors[0], ColorDistance::Cie2000);
    }
    let mut sorted = colors;
    sort_colors(&mut sorted, ColorComparison::Darkness);
});

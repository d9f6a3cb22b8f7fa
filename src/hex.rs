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
use crate::{Color, Rgb};
use std::str::FromStr;

/// How float channels are brought to 8 bits when formatting
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HexQuantization {
    /// Nearest 8-bit value
    #[default]
    Round,
    /// Drops the fractional part, `0.999` becomes `fe`
    Truncate,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// Declares how `#RRGGBB` strings are produced
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HexOptions {
    pub quantization: HexQuantization,
    pub case: HexCase,
}

const MAX_HEX_DIGITS: usize = 6;

/// Scans like a platform number scanner would: leading whitespace is
/// skipped, then `#` and `0x` prefixes, then at most six hex digits up to
/// the first non hex character. Returns the value and the digits consumed.
fn scan_hex(hex: &str) -> (u32, usize) {
    let s = hex.trim_start();
    let s = s.strip_prefix('#').unwrap_or(s);
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    let mut value = 0u32;
    let mut digits = 0usize;
    for c in s.chars().take(MAX_HEX_DIGITS) {
        match c.to_digit(16) {
            Some(d) => {
                value = (value << 4) | d;
                digits += 1;
            }
            None => break,
        }
    }
    (value, digits)
}

impl Color {
    /// Parses `#RRGGBB`, `RRGGBB` and partial input leniently.
    ///
    /// Never fails: digits are read until the first non hex character and
    /// input without any digit yields opaque black. Short input is taken as
    /// a number, so `"fff"` is `0x000fff` rather than CSS shorthand.
    pub fn from_hex(hex: &str) -> Color {
        let (value, digits) = scan_hex(hex);
        if digits == 0 {
            log::debug!("No hex digits in '{hex}', falling back to black");
            return Color::BLACK;
        }
        Color::from(Rgb::<u8>::from_u32(value))
    }

    /// Formats as lowercase `#rrggbb` with rounded channels, alpha is dropped
    #[inline]
    pub fn to_hex_string(&self) -> String {
        self.to_hex_string_with(HexOptions::default())
    }

    pub fn to_hex_string_with(&self, options: HexOptions) -> String {
        let scaled = self.rgb() * 255.;
        let rgb = match options.quantization {
            HexQuantization::Round => scaled.round(),
            HexQuantization::Truncate => scaled.trunc(),
        }
        .cast::<u8>()
        .to_u32();
        match options.case {
            HexCase::Lower => format!("#{rgb:06x}"),
            HexCase::Upper => format!("#{rgb:06X}"),
        }
    }
}

impl FromStr for Color {
    type Err = ChromaError;

    /// Strict counterpart of [Color::from_hex]: exactly six hex digits with an
    /// optional leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != MAX_HEX_DIGITS || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChromaError::InvalidHex(s.to_string()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ChromaError::InvalidHex(s.to_string()))?;
        Ok(Color::from(Rgb::<u8>::from_u32(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_round_trip() {
        assert_eq!(Color::from_hex("#FF0000").to_hex_string(), "#ff0000");
        assert_eq!(Color::from_hex("FF0000"), Color::from_rgba(1., 0., 0., 1.));
    }

    #[test]
    fn empty_is_black() {
        assert_eq!(Color::from_hex(""), Color::BLACK);
        assert_eq!(Color::from_hex("#"), Color::BLACK);
        assert_eq!(Color::from_hex("zz"), Color::BLACK);
        assert_eq!(Color::from_hex("").to_rgba(), (0., 0., 0., 1.));
    }

    #[test]
    fn stops_at_garbage() {
        assert_eq!(Color::from_hex("#12g456"), Color::from_rgb8(0, 0, 0x12));
        assert_eq!(Color::from_hex("fff"), Color::from_rgb8(0, 0x0f, 0xff));
    }

    #[test]
    fn scanner_prefixes() {
        assert_eq!(Color::from_hex("  #1ca0aa"), Color::from_rgb8(28, 160, 170));
        assert_eq!(Color::from_hex("0x1CA0AA"), Color::from_rgb8(28, 160, 170));
    }

    #[test]
    fn only_six_digits_are_read() {
        assert_eq!(Color::from_hex("#FF000080"), Color::from_rgba(1., 0., 0., 1.));
    }

    #[test]
    fn alpha_is_dropped() {
        let color = Color::from_rgba(0., 0.5, 1., 0.2);
        assert_eq!(color.to_hex_string(), "#0080ff");
        assert_eq!(Color::from_hex(&color.to_hex_string()).alpha(), 1.);
    }

    #[test]
    fn options() {
        let color = Color::from_rgba(0.999, 0.5, 0.1, 1.);
        let legacy = HexOptions {
            quantization: HexQuantization::Truncate,
            case: HexCase::Upper,
        };
        assert_eq!(color.to_hex_string(), "#ff801a");
        assert_eq!(color.to_hex_string_with(legacy), "#FE7F19");
    }

    #[test]
    fn strict_parse() {
        assert_eq!("#1ca0aa".parse::<Color>(), Ok(Color::from_rgb8(28, 160, 170)));
        assert_eq!("1CA0AA".parse::<Color>(), Ok(Color::from_rgb8(28, 160, 170)));
        assert_eq!(
            "#fff".parse::<Color>(),
            Err(ChromaError::InvalidHex("#fff".to_string()))
        );
        assert!("#12g456".parse::<Color>().is_err());
        assert!("+12345".parse::<Color>().is_err());
    }
}

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
#![deny(unreachable_pub)]
//! Color model conversions between sRGB, HSB, CIE L\*a\*b\*, XYZ and CMYK,
//! derived palettes, contrast, perceptual distance and a named palette.
//!
//! ```
//! use chromakit::{Color, ColorScheme};
//!
//! let teal = Color::from_hex("#1ca0aa");
//! let scheme = teal.color_scheme(ColorScheme::Triad);
//! assert_eq!(scheme.len(), 4);
//! assert_eq!(teal.to_hex_string(), "#1ca0aa");
//! ```
mod cmyk;
mod color;
mod compare;
mod distance;
mod err;
mod formulation;
mod gamma;
mod hex;
mod hsba;
mod lab;
mod math;
mod matrix;
pub mod palette;
mod registry;
mod rgb;
mod scheme;
mod value;
mod xyz;

pub use cmyk::Cmyk;
pub use color::Color;
pub use compare::{ColorComparison, sort_colors};
pub use distance::ColorDistance;
pub use err::ChromaError;
pub use formulation::ColorFormulation;
pub use hex::{HexCase, HexOptions, HexQuantization};
pub use hsba::Hsba;
pub use lab::Lab;
pub use matrix::{Matrix3d, SRGB_TO_XYZ_D65, Vector3d, XYZ_D65_TO_SRGB};
pub use registry::{Factory, QualifiedName, Registry};
pub use rgb::Rgb;
pub use scheme::{ColorScheme, add_degree};
pub use value::{DATE_FORMAT, DATE_TIME_FORMAT, Value, ValueKind};
pub use xyz::Xyz;

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
use std::error::Error;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq)]
pub enum ChromaError {
    InvalidHex(String),
    InvalidColorScheme(u8),
    InvalidColorFormulation(u8),
    InvalidColorDistance(u8),
    InvalidColorComparison(u8),
    UnknownValueTag(char),
    InvalidValue(&'static str),
    FactoryNotFound(String),
}

impl Display for ChromaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChromaError::InvalidHex(s) => f.write_fmt(format_args!("Invalid hex color '{s}'")),
            ChromaError::InvalidColorScheme(v) => {
                f.write_fmt(format_args!("Invalid color scheme {v}"))
            }
            ChromaError::InvalidColorFormulation(v) => {
                f.write_fmt(format_args!("Invalid color formulation {v}"))
            }
            ChromaError::InvalidColorDistance(v) => {
                f.write_fmt(format_args!("Invalid color distance {v}"))
            }
            ChromaError::InvalidColorComparison(v) => {
                f.write_fmt(format_args!("Invalid color comparison {v}"))
            }
            ChromaError::UnknownValueTag(c) => f.write_fmt(format_args!("Unknown value tag '{c}'")),
            ChromaError::InvalidValue(kind) => {
                f.write_fmt(format_args!("Data can't be decoded as {kind}"))
            }
            ChromaError::FactoryNotFound(name) => f.write_fmt(format_args!(
                "No factory registered for '{name}', check the name and namespace"
            )),
        }
    }
}

impl Error for ChromaError {}

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
use chrono::{NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Kind of a [Value], each with a single character tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Data,
    Bool,
    Number,
    String,
    Color,
    Date,
    Image,
}

impl ValueKind {
    pub const fn tag(self) -> char {
        match self {
            ValueKind::Data => 'a',
            ValueKind::Bool => 'b',
            ValueKind::Number => 'n',
            ValueKind::String => 's',
            ValueKind::Color => 'c',
            ValueKind::Date => 'd',
            ValueKind::Image => 'i',
        }
    }
}

impl TryFrom<char> for ValueKind {
    type Error = ChromaError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'a' => Ok(ValueKind::Data),
            'b' => Ok(ValueKind::Bool),
            'n' => Ok(ValueKind::Number),
            's' => Ok(ValueKind::String),
            'c' => Ok(ValueKind::Color),
            'd' => Ok(ValueKind::Date),
            'i' => Ok(ValueKind::Image),
            _ => Err(ChromaError::UnknownValueTag(value)),
        }
    }
}

/// Closed set of values that can be carried around as bytes.
///
/// `Image` holds already encoded image bytes (PNG, JPEG), decoding them is
/// left to the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Data(Vec<u8>),
    Bool(bool),
    Number(f64),
    String(String),
    Color(Color),
    Date(NaiveDateTime),
    Image(Vec<u8>),
}

fn parse_date(text: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return date.and_hms_opt(0, 0, 0);
    }
    NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT).ok()
}

impl Value {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Data(_) => ValueKind::Data,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Color(_) => ValueKind::Color,
            Value::Date(_) => ValueKind::Date,
            Value::Image(_) => ValueKind::Image,
        }
    }

    /// Byte form of the value; colors become `#rrggbb`, dates
    /// `yyyy-mm-dd hh:mm:ss`, numbers their shortest decimal text.
    pub fn to_data(&self) -> Vec<u8> {
        match self {
            Value::Data(data) | Value::Image(data) => data.clone(),
            Value::Bool(v) => v.to_string().into_bytes(),
            Value::Number(v) => v.to_string().into_bytes(),
            Value::String(v) => v.as_bytes().to_vec(),
            Value::Color(v) => v.to_hex_string().into_bytes(),
            Value::Date(v) => v.format(DATE_TIME_FORMAT).to_string().into_bytes(),
        }
    }

    /// Reads back what [Value::to_data] produced for `kind`.
    ///
    /// Text that is not UTF-8 decodes as an empty string and colors follow
    /// the lenient hex rules, so only booleans, numbers and dates can fail.
    pub fn from_data(kind: ValueKind, data: &[u8]) -> Result<Value, ChromaError> {
        match kind {
            ValueKind::Data => Ok(Value::Data(data.to_vec())),
            ValueKind::Image => Ok(Value::Image(data.to_vec())),
            ValueKind::String => Ok(Value::String(decode_text(data))),
            ValueKind::Color => Ok(Value::Color(Color::from_hex(&decode_text(data)))),
            ValueKind::Bool => {
                let text = decode_text(data);
                match text.trim().to_ascii_lowercase().as_str() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    _ => Err(ChromaError::InvalidValue("bool")),
                }
            }
            ValueKind::Number => decode_text(data)
                .trim()
                .parse::<f64>()
                .map(Value::Number)
                .map_err(|_| ChromaError::InvalidValue("number")),
            ValueKind::Date => parse_date(decode_text(data).trim())
                .map(Value::Date)
                .ok_or(ChromaError::InvalidValue("date")),
        }
    }

    /// Tag character followed by [Value::to_data]
    pub fn encode_tagged(&self) -> Vec<u8> {
        let data = self.to_data();
        let mut encoded = Vec::with_capacity(data.len() + 1);
        encoded.push(self.kind().tag() as u8);
        encoded.extend_from_slice(&data);
        encoded
    }

    pub fn decode_tagged(encoded: &[u8]) -> Result<Value, ChromaError> {
        let (&tag, data) = encoded
            .split_first()
            .ok_or(ChromaError::InvalidValue("tagged value"))?;
        let kind = ValueKind::try_from(tag as char)?;
        Value::from_data(kind, data)
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(color) => Some(*color),
            _ => None,
        }
    }
}

fn decode_text(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(e) => {
            log::debug!("Value bytes are not UTF-8 ({e}), decoding as empty text");
            String::new()
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Color(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date_time(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn encodes_as_text() {
        assert_eq!(Value::from(true).to_data(), b"true");
        assert_eq!(Value::from(3.0).to_data(), b"3");
        assert_eq!(Value::from(2.5).to_data(), b"2.5");
        assert_eq!(Value::from("hi").to_data(), b"hi");
        assert_eq!(Value::from(Color::from_rgb8(28, 160, 170)).to_data(), b"#1ca0aa");
        assert_eq!(
            Value::from(date_time(2016, 12, 1, 9, 30, 5)).to_data(),
            b"2016-12-01 09:30:05"
        );
        assert_eq!(Value::Image(vec![1, 2, 3]).to_data(), vec![1, 2, 3]);
    }

    #[test]
    fn decodes_each_kind() {
        assert_eq!(
            Value::from_data(ValueKind::Bool, b" TRUE\n"),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            Value::from_data(ValueKind::Number, b"-1.25"),
            Ok(Value::Number(-1.25))
        );
        assert_eq!(
            Value::from_data(ValueKind::Color, b"#ff0000"),
            Ok(Value::Color(Color::from_rgba(1., 0., 0., 1.)))
        );
        assert_eq!(
            Value::from_data(ValueKind::Color, b"nope"),
            Ok(Value::Color(Color::BLACK))
        );
        assert_eq!(
            Value::from_data(ValueKind::Data, &[0, 255]),
            Ok(Value::Data(vec![0, 255]))
        );
    }

    #[test]
    fn dates_accept_both_formats() {
        assert_eq!(
            Value::from_data(ValueKind::Date, b"2016-12-01"),
            Ok(Value::Date(date_time(2016, 12, 1, 0, 0, 0)))
        );
        assert_eq!(
            Value::from_data(ValueKind::Date, b"2016-12-01 23:59:58"),
            Ok(Value::Date(date_time(2016, 12, 1, 23, 59, 58)))
        );
        assert_eq!(
            Value::from_data(ValueKind::Date, b"01/12/2016"),
            Err(ChromaError::InvalidValue("date"))
        );
    }

    #[test]
    fn invalid_text() {
        assert_eq!(
            Value::from_data(ValueKind::String, &[0xff, 0xfe]),
            Ok(Value::String(String::new()))
        );
        assert_eq!(
            Value::from_data(ValueKind::Bool, b"yes"),
            Err(ChromaError::InvalidValue("bool"))
        );
        assert!(Value::from_data(ValueKind::Number, b"12abc").is_err());
    }

    #[test]
    fn tagged() {
        let value = Value::from(date_time(2020, 2, 29, 12, 0, 0));
        let encoded = value.encode_tagged();
        assert_eq!(encoded[0], b'd');
        assert_eq!(Value::decode_tagged(&encoded), Ok(value));
        assert_eq!(
            Value::decode_tagged(b"x123"),
            Err(ChromaError::UnknownValueTag('x'))
        );
        assert!(Value::decode_tagged(&[]).is_err());
    }

    #[test]
    fn tags_round_trip() {
        for kind in [
            ValueKind::Data,
            ValueKind::Bool,
            ValueKind::Number,
            ValueKind::String,
            ValueKind::Color,
            ValueKind::Date,
            ValueKind::Image,
        ] {
            assert_eq!(ValueKind::try_from(kind.tag()), Ok(kind));
        }
        assert_eq!(Value::from(Color::WHITE).as_color(), Some(Color::WHITE));
        assert_eq!(Value::from(1.0).as_color(), None);
    }
}

/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use num_traits::{AsPrimitive, Float};
use std::ops::Mul;

#[repr(C)]
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Default)]
/// Represents any RGB values
pub struct Rgb<T> {
    /// Red component
    pub r: T,
    /// Green component
    pub g: T,
    /// Blue component
    pub b: T,
}

impl<T> Rgb<T> {
    pub const fn new(r: T, g: T, b: T) -> Rgb<T> {
        Rgb { r, g, b }
    }
}

impl<T> Mul<T> for Rgb<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Rgb<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Rgb::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl<T> Rgb<T> {
    pub fn cast<V>(self) -> Rgb<V>
    where
        T: AsPrimitive<V>,
        V: Copy + 'static,
    {
        Rgb::new(self.r.as_(), self.g.as_(), self.b.as_())
    }
}

impl<T> Rgb<T>
where
    T: Float + 'static,
{
    pub fn round(self) -> Rgb<T> {
        Rgb::new(self.r.round(), self.g.round(), self.b.round())
    }

    pub fn trunc(self) -> Rgb<T> {
        Rgb::new(self.r.trunc(), self.g.trunc(), self.b.trunc())
    }
}

impl Rgb<u8> {
    /// Packs channels into `0xRRGGBB`
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_u32(v: u32) -> Rgb<u8> {
        Rgb::new(
            ((v & 0xFF0000) >> 16) as u8,
            ((v & 0x00FF00) >> 8) as u8,
            (v & 0x0000FF) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack() {
        let rgb = Rgb::<u8>::from_u32(0x1CA0AA);
        assert_eq!(rgb, Rgb::new(28, 160, 170));
        assert_eq!(rgb.to_u32(), 0x1CA0AA);
    }

    #[test]
    fn quantize() {
        let rgb = Rgb::new(0.5f64, 0.999, 0.0) * 255.;
        assert_eq!(rgb.round().cast::<u8>(), Rgb::new(128, 255, 0));
        assert_eq!(rgb.trunc().cast::<u8>(), Rgb::new(127, 254, 0));
    }
}

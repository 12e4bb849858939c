//! BT.601 studio swing conversion between 8 bit RGB and YUV
//!
//! The forward direction uses the well known integer approximation, the inverse direction uses
//! 32 bit floats. Results are bit compatible with Android camera pipelines, including the
//! truncation of the `>> 8` (an arithmetic shift) and half up rounding of the inverse.

use super::{Rgb, Yuv};

pub(crate) const Y_COEFFS: [i32; 3] = [66, 129, 25];
pub(crate) const U_COEFFS: [i32; 3] = [-38, -74, 112];
pub(crate) const V_COEFFS: [i32; 3] = [112, -94, -18];

pub(crate) const Y_SCALE: f32 = 1.164;
pub(crate) const V_TO_R: f32 = 1.596;
pub(crate) const V_TO_G: f32 = 0.813;
pub(crate) const U_TO_G: f32 = 0.391;
pub(crate) const U_TO_B: f32 = 2.018;

/// Clamp to the range of a u8
#[inline(always)]
pub fn clamp8(x: i32) -> u8 {
    x.clamp(0, 255) as u8
}

#[inline(always)]
fn dot(coeffs: [i32; 3], r: i32, g: i32, b: i32) -> i32 {
    // Arithmetic shift, rounds towards negative infinity
    (coeffs[0] * r + coeffs[1] * g + coeffs[2] * b + 128) >> 8
}

/// Convert a single RGB triplet to YUV
#[inline(always)]
pub fn rgb_to_yuv(r: u8, g: u8, b: u8) -> Yuv {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));

    Yuv {
        y: clamp8(dot(Y_COEFFS, r, g, b) + 16),
        u: clamp8(dot(U_COEFFS, r, g, b) + 128),
        v: clamp8(dot(V_COEFFS, r, g, b) + 128),
    }
}

/// Round half towards positive infinity
#[inline(always)]
fn round(x: f32) -> i32 {
    (x + 0.5).floor() as i32
}

/// Convert a single YUV triplet to RGB, luma below 16 is treated as 16
#[inline(always)]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> Rgb {
    let y = y.max(16);

    let y = (i32::from(y) - 16) as f32;
    let u = (i32::from(u) - 128) as f32;
    let v = (i32::from(v) - 128) as f32;

    let y = Y_SCALE * y;

    Rgb {
        r: clamp8(round(y + V_TO_R * v)),
        g: clamp8(round(y - V_TO_G * v - U_TO_G * u)),
        b: clamp8(round(y + U_TO_B * u)),
    }
}

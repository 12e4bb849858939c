pub(crate) mod argb;
pub(crate) mod bt601;

pub use argb::{Argb, pack_argb};
pub use bt601::{clamp8, rgb_to_yuv, yuv_to_rgb};

/// One luma and chroma sample triplet, 8 bits per sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Yuv {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

/// Red, green and blue channels, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Options applied when converting YUV back to packed pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Replace every decoded channel with `250 - channel` before packing.
    ///
    /// Enabled by default, camera previews are shown through a display path expecting this
    /// negative image. Channels brighter than 250 turn negative and borrow from the next higher
    /// channel of the packed pixel.
    pub invert_colors: bool,
}

impl DecodeOptions {
    /// Plain BT.601 decode without the inversion stage
    pub const fn plain() -> Self {
        Self {
            invert_colors: false,
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            invert_colors: true,
        }
    }
}

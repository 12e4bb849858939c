//! Conversion of camera frames between packed ARGB pixels and the I420 / NV21 YUV layouts
//!
//! All color math is BT.601 studio swing using the fixed point formulas common in camera
//! pipelines, the results are bit compatible with those pipelines. Every conversion is a pure
//! function over caller supplied buffers and checks all sizes before writing anything.

pub use adapters::{
    AdapterError, BlurFilter, FrameDescriptor, FrameEncoder, NoRotation, PixelSource, Rotate,
    StridedFrame, assemble_image_from_planar, bitmap_to_i420, blur, extract_pixels,
};
pub use color::{Argb, DecodeOptions, Rgb, Yuv, clamp8, pack_argb, rgb_to_yuv, yuv_to_rgb};
#[cfg(feature = "multi-thread")]
pub use multi_thread::{decode_multi_thread, encode_multi_thread};
pub use pixel_format::{BoundsCheckError, PixelFormat};
pub use planes::{AnySlice, infer, infer_i420, infer_nv21};
pub use repack::{repack, repack_i420_to_nv21};
pub use yuv_image::{ImageError, YuvImage};

pub mod adapters;
mod color;
mod formats;
#[cfg(feature = "multi-thread")]
mod multi_thread;
mod pixel_format;
mod plane_decs;
mod planes;
mod repack;
mod yuv_image;

use yuv_image::check_dimensions;

/// Everything that can go wrong when converting frames
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("width or height must not be zero")]
    InvalidDimensions,

    #[error("width and height must be even for 4:2:0 sub sampling, got {width}x{height}")]
    OddDimensions { width: usize, height: usize },

    #[error("pixel buffer must hold exactly {expected} pixels, but got {got}")]
    InvalidPixelBufferSize { expected: usize, got: usize },

    #[error("YUV buffer must hold exactly {expected} bytes, but got {got}")]
    InvalidBufferSize { expected: usize, got: usize },

    #[error("expected an image in {expected:?} format, but got {got:?}")]
    FormatMismatch {
        expected: PixelFormat,
        got: PixelFormat,
    },

    #[error("source and destination have different dimensions")]
    SizeMismatch,

    #[error(transparent)]
    BoundsCheck(#[from] BoundsCheckError),
}

impl From<ImageError> for ConvertError {
    fn from(value: ImageError) -> Self {
        match value {
            ImageError::InvalidDimensions => ConvertError::InvalidDimensions,
            ImageError::OddDimensions { width, height } => {
                ConvertError::OddDimensions { width, height }
            }
            ImageError::BoundsCheck(err) => ConvertError::BoundsCheck(err),
        }
    }
}

/// Verify that a packed pixel buffer holds exactly one value per pixel
fn verify_pixels(pixels: usize, width: usize, height: usize) -> Result<(), ConvertError> {
    let expected = width * height;

    if pixels != expected {
        return Err(ConvertError::InvalidPixelBufferSize {
            expected,
            got: pixels,
        });
    }

    Ok(())
}

/// Verify that a YUV buffer exactly fits a packed frame of the given format
fn verify_yuv_buffer(
    format: PixelFormat,
    len: usize,
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    check_dimensions(width, height)?;

    let expected = format.buffer_size(width, height);

    if len != expected {
        return Err(ConvertError::InvalidBufferSize { expected, got: len });
    }

    Ok(())
}

/// Encode packed ARGB pixels into `dst`, which decides the output format and strides.
///
/// Alpha is dropped. Chroma of every 2x2 block is taken from its top left pixel.
pub fn encode<S>(src: &[u32], dst: &mut YuvImage<S>) -> Result<(), ConvertError>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let (format, width, height) = (dst.format(), dst.width(), dst.height());

    check_dimensions(width, height)?;
    verify_pixels(src.len(), width, height)?;

    log::trace!("encode {width}x{height} ARGB into {format:?}");

    formats::encode_planes(src, width, height, format, dst.planes_mut()?)
}

/// Decode `src` into packed ARGB pixels with an opaque alpha channel
pub fn decode<S>(
    src: &YuvImage<S>,
    dst: &mut [u32],
    options: DecodeOptions,
) -> Result<(), ConvertError>
where
    S: AsRef<[u8]>,
{
    let (format, width, height) = (src.format(), src.width(), src.height());

    check_dimensions(width, height)?;
    verify_pixels(dst.len(), width, height)?;

    log::trace!("decode {width}x{height} {format:?} into ARGB, {options:?}");

    formats::decode_planes(src.planes()?, format, width, height, dst, &options)
}

fn encode_packed(
    format: PixelFormat,
    dst: &mut [u8],
    src: &[u32],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    verify_yuv_buffer(format, dst.len(), width, height)?;

    let mut dst = YuvImage::from_buffer(format, dst, None, width, height)?;

    encode(src, &mut dst)
}

fn decode_packed(
    format: PixelFormat,
    dst: &mut [u32],
    src: &[u8],
    width: usize,
    height: usize,
    options: DecodeOptions,
) -> Result<(), ConvertError> {
    verify_yuv_buffer(format, src.len(), width, height)?;

    let src = YuvImage::from_buffer(format, src, None, width, height)?;

    decode(&src, dst, options)
}

/// Encode `width * height` ARGB pixels into an I420 buffer of exactly `width * height * 3 / 2` bytes
pub fn encode_i420(
    dst: &mut [u8],
    src: &[u32],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    encode_packed(PixelFormat::I420, dst, src, width, height)
}

/// Encode `width * height` ARGB pixels into an NV21 buffer of exactly `width * height * 3 / 2` bytes
pub fn encode_nv21(
    dst: &mut [u8],
    src: &[u32],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    encode_packed(PixelFormat::NV21, dst, src, width, height)
}

/// Decode a packed I420 buffer into `width * height` ARGB pixels
pub fn decode_i420(
    dst: &mut [u32],
    src: &[u8],
    width: usize,
    height: usize,
    options: DecodeOptions,
) -> Result<(), ConvertError> {
    decode_packed(PixelFormat::I420, dst, src, width, height, options)
}

/// Decode a packed NV21 buffer into `width * height` ARGB pixels
pub fn decode_nv21(
    dst: &mut [u32],
    src: &[u8],
    width: usize,
    height: usize,
    options: DecodeOptions,
) -> Result<(), ConvertError> {
    decode_packed(PixelFormat::NV21, dst, src, width, height, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u32 = 0xff_ff_ff_ff;
    const RED: u32 = 0xff_ff_00_00;

    #[test]
    fn white_2x2_to_i420() {
        let mut i420 = [0u8; 6];

        encode_i420(&mut i420, &[WHITE; 4], 2, 2).unwrap();

        assert_eq!(i420, [235, 235, 235, 235, 128, 128]);
    }

    #[test]
    fn red_4x4_chroma_sampling() {
        let mut i420 = [0u8; 24];

        encode_i420(&mut i420, &[RED; 16], 4, 4).unwrap();

        let expected = rgb_to_yuv(255, 0, 0);

        assert_eq!(i420[..16], [expected.y; 16]);
        assert_eq!(i420[16..20], [expected.u; 4]);
        assert_eq!(i420[20..], [expected.v; 4]);
        assert_eq!(expected, Yuv { y: 82, u: 90, v: 240 });
    }

    #[test]
    fn chroma_is_sampled_from_top_left() {
        // Three of the four blocks have a red top left pixel
        #[rustfmt::skip]
        let pixels = [
            RED, WHITE, RED, WHITE,
            WHITE, WHITE, WHITE, WHITE,
            RED, WHITE, WHITE, WHITE,
            WHITE, WHITE, WHITE, WHITE,
        ];

        let mut i420 = [0u8; 24];
        encode_i420(&mut i420, &pixels, 4, 4).unwrap();

        assert_eq!(i420[16..20], [90, 90, 90, 128]);
        assert_eq!(i420[20..], [240, 240, 240, 128]);

        let mut nv21 = [0u8; 24];
        encode_nv21(&mut nv21, &pixels, 4, 4).unwrap();

        assert_eq!(nv21[..16], i420[..16]);
        assert_eq!(nv21[16..], [240, 90, 240, 90, 240, 90, 128, 128]);
    }

    #[test]
    fn alpha_is_ignored() {
        let mut opaque = [0u8; 6];
        let mut transparent = [0u8; 6];

        encode_i420(&mut opaque, &[0xff_12_34_56; 4], 2, 2).unwrap();
        encode_i420(&mut transparent, &[0x00_12_34_56; 4], 2, 2).unwrap();

        assert_eq!(opaque, transparent);
    }

    #[test]
    fn decode_black_is_inverted() {
        let mut pixels = [0u32; 4];

        decode_i420(&mut pixels, &[16, 16, 16, 16, 128, 128], 2, 2, DecodeOptions::default())
            .unwrap();

        assert_eq!(pixels, [0xff_fa_fa_fa; 4]);
    }

    #[test]
    fn decode_plain() {
        let mut pixels = [0u32; 4];

        decode_i420(&mut pixels, &[16, 235, 16, 235, 128, 128], 2, 2, DecodeOptions::plain())
            .unwrap();

        assert_eq!(pixels, [0xff_00_00_00, WHITE, 0xff_00_00_00, WHITE]);
    }

    #[test]
    fn decode_reads_chroma_at_half_resolution() {
        let (width, height) = (4, 4);

        let mut i420 = vec![128u8; PixelFormat::I420.buffer_size(width, height)];
        i420[..16].fill(82);
        // U and V of the bottom right block
        i420[16 + 3] = 90;
        i420[20 + 3] = 240;

        let mut pixels = [0u32; 16];
        decode_i420(&mut pixels, &i420, width, height, DecodeOptions::plain()).unwrap();

        let gray = pack_argb(yuv_to_rgb(82, 128, 128), false);
        let red = pack_argb(yuv_to_rgb(82, 90, 240), false);

        #[rustfmt::skip]
        let expected = [
            gray, gray, gray, gray,
            gray, gray, gray, gray,
            gray, gray, red, red,
            gray, gray, red, red,
        ];

        assert_eq!(pixels, expected);
    }

    #[test]
    fn nv21_decodes_like_i420() {
        let (width, height) = (8, 6);

        let pixels: Vec<u32> = (0..width * height)
            .map(|i| u32::from_rgba((i * 5) as u8, (i * 11) as u8, (255 - i * 3) as u8, 0xff))
            .collect();

        let mut i420 = vec![0u8; PixelFormat::I420.buffer_size(width, height)];
        let mut nv21 = vec![0u8; PixelFormat::NV21.buffer_size(width, height)];

        encode_i420(&mut i420, &pixels, width, height).unwrap();
        encode_nv21(&mut nv21, &pixels, width, height).unwrap();

        let mut from_i420 = vec![0u32; width * height];
        let mut from_nv21 = vec![0u32; width * height];

        decode_i420(&mut from_i420, &i420, width, height, DecodeOptions::default()).unwrap();
        decode_nv21(&mut from_nv21, &nv21, width, height, DecodeOptions::default()).unwrap();

        assert_eq!(from_i420, from_nv21);
    }

    #[test]
    fn odd_dimensions_fail_before_writing() {
        let mut i420 = vec![0xaau8; 64];

        assert!(matches!(
            encode_i420(&mut i420, &[WHITE; 6], 3, 2),
            Err(ConvertError::OddDimensions {
                width: 3,
                height: 2
            })
        ));

        assert!(matches!(
            encode_nv21(&mut i420, &[WHITE; 6], 2, 3),
            Err(ConvertError::OddDimensions {
                width: 2,
                height: 3
            })
        ));

        assert!(i420.iter().all(|&b| b == 0xaa));
    }

    #[test]
    fn zero_dimensions() {
        assert!(matches!(
            encode_i420(&mut [], &[], 0, 2),
            Err(ConvertError::InvalidDimensions)
        ));
    }

    #[test]
    fn buffer_sizes_must_be_exact() {
        let mut i420 = [0u8; 7];

        assert!(matches!(
            encode_i420(&mut i420, &[WHITE; 4], 2, 2),
            Err(ConvertError::InvalidBufferSize {
                expected: 6,
                got: 7
            })
        ));

        let mut i420 = [0u8; 6];

        assert!(matches!(
            encode_i420(&mut i420, &[WHITE; 3], 2, 2),
            Err(ConvertError::InvalidPixelBufferSize {
                expected: 4,
                got: 3
            })
        ));

        let mut pixels = [0u32; 5];

        assert!(matches!(
            decode_i420(&mut pixels, &i420, 2, 2, DecodeOptions::default()),
            Err(ConvertError::InvalidPixelBufferSize {
                expected: 4,
                got: 5
            })
        ));
    }

    #[test]
    fn encode_into_strided_image() {
        let mut image = YuvImage::from_buffer(
            PixelFormat::I420,
            vec![0xaau8; 4 * 2 + 2 + 2],
            Some(vec![4, 2, 2]),
            2,
            2,
        )
        .unwrap();

        encode(&[WHITE; 4], &mut image).unwrap();

        assert_eq!(
            image.buffer(),
            &[235, 235, 0xaa, 0xaa, 235, 235, 0xaa, 0xaa, 128, 0xaa, 128, 0xaa]
        );
    }
}

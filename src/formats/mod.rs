mod argb;
mod i420;
mod nv21;
mod visit_2x2;

pub(crate) use argb::*;
pub(crate) use i420::*;
pub(crate) use nv21::*;

use crate::planes::plane_array;
use crate::{ConvertError, DecodeOptions, PixelFormat};

/// Encode `src` into the given planes of a `format` image.
///
/// Sizes and strides must have been checked by the caller.
pub(crate) fn encode_planes(
    src: &[u32],
    width: usize,
    height: usize,
    format: PixelFormat,
    planes: Vec<(&mut [u8], usize)>,
) -> Result<(), ConvertError> {
    let argb_to_i420 = ArgbToI420::new(ArgbReader::new(src, width));

    match format {
        PixelFormat::I420 => {
            I420Writer::write(width, height, plane_array(planes)?, argb_to_i420);
        }
        PixelFormat::NV21 => {
            NV21Writer::write(width, height, plane_array(planes)?, argb_to_i420);
        }
    }

    Ok(())
}

/// Decode the given planes of a `format` image into `dst`.
///
/// Sizes and strides must have been checked by the caller.
pub(crate) fn decode_planes(
    planes: Vec<(&[u8], usize)>,
    format: PixelFormat,
    width: usize,
    height: usize,
    dst: &mut [u32],
    options: &DecodeOptions,
) -> Result<(), ConvertError> {
    match format {
        PixelFormat::I420 => ArgbWriter::write(
            dst,
            width,
            height,
            I420ToArgb::new(options, I420Reader::new(plane_array(planes)?)),
        ),
        PixelFormat::NV21 => ArgbWriter::write(
            dst,
            width,
            height,
            I420ToArgb::new(options, NV21Reader::new(plane_array(planes)?)),
        ),
    }

    Ok(())
}

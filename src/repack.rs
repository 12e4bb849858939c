//! Reordering of I420 chroma planes into the interleaved NV21 layout
//!
//! Camera HALs hand out I420 frames whose rows are padded to an alignment, image codecs on the
//! other side usually want NV21 with the same row stride. Both directions honor the strides of
//! every plane.

use crate::planes::plane_array;
use crate::yuv_image::check_dimensions;
use crate::{ConvertError, PixelFormat, YuvImage};

/// Repack an I420 image into an NV21 image of the same dimensions.
///
/// The luma plane is copied verbatim including row padding when both images share the luma
/// stride. Per chroma row as many V,U pairs are interleaved as the narrowest of the U stride,
/// the V stride and half the VU stride allows, so chroma row padding is carried over as well.
pub fn repack<S, D>(src: &YuvImage<S>, dst: &mut YuvImage<D>) -> Result<(), ConvertError>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    if src.format() != PixelFormat::I420 {
        return Err(ConvertError::FormatMismatch {
            expected: PixelFormat::I420,
            got: src.format(),
        });
    }

    if dst.format() != PixelFormat::NV21 {
        return Err(ConvertError::FormatMismatch {
            expected: PixelFormat::NV21,
            got: dst.format(),
        });
    }

    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(ConvertError::SizeMismatch);
    }

    let (width, height) = (src.width(), src.height());
    check_dimensions(width, height)?;

    log::trace!("repack I420 {width}x{height} {:?} into NV21 {:?}", src.strides(), dst.strides());

    let [(y, y_stride), (u, u_stride), (v, v_stride)] = plane_array(src.planes()?)?;
    let [(dst_y, dst_y_stride), (dst_vu, dst_vu_stride)] = plane_array(dst.planes_mut()?)?;

    copy_luma(y, y_stride, dst_y, dst_y_stride, width);
    interleave_vu(u, u_stride, v, v_stride, dst_vu, dst_vu_stride);

    Ok(())
}

fn copy_luma(src: &[u8], src_stride: usize, dst: &mut [u8], dst_stride: usize, width: usize) {
    if src_stride == dst_stride {
        dst.copy_from_slice(src);
        return;
    }

    for (src_row, dst_row) in src.chunks_exact(src_stride).zip(dst.chunks_exact_mut(dst_stride)) {
        dst_row[..width].copy_from_slice(&src_row[..width]);
    }
}

fn interleave_vu(
    u: &[u8],
    u_stride: usize,
    v: &[u8],
    v_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
) {
    let pairs = u_stride.min(v_stride).min(dst_stride / 2);

    let rows = dst
        .chunks_exact_mut(dst_stride)
        .zip(u.chunks_exact(u_stride))
        .zip(v.chunks_exact(v_stride));

    for ((dst_row, u_row), v_row) in rows {
        let dst_pairs = dst_row[..pairs * 2].chunks_exact_mut(2);

        for (pair, (&u, &v)) in dst_pairs.zip(u_row.iter().zip(v_row)) {
            pair[0] = v;
            pair[1] = u;
        }
    }
}

/// Repack a single buffer holding an I420 frame into a buffer holding an NV21 frame.
///
/// `src` contains the Y, U and V planes back to back using the given strides. Both planes of
/// `dst` use `y_stride` as row stride, which is what image codecs expect when handed an NV21
/// frame together with a single row stride.
pub fn repack_i420_to_nv21(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    y_stride: usize,
    u_stride: usize,
    v_stride: usize,
) -> Result<(), ConvertError> {
    let src = YuvImage::from_buffer(
        PixelFormat::I420,
        src,
        Some(vec![y_stride, u_stride, v_stride]),
        width,
        height,
    )?;

    let mut dst = YuvImage::from_buffer(
        PixelFormat::NV21,
        dst,
        Some(vec![y_stride, y_stride]),
        width,
        height,
    )?;

    repack(&src, &mut dst)
}

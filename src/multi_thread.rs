use crate::formats::{decode_planes, encode_planes};
use crate::plane_decs::PlaneDesc;
use crate::yuv_image::check_dimensions;
use crate::{
    AnySlice, ConvertError, DecodeOptions, YuvImage, decode, encode, verify_pixels,
};
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};
use rayon::slice::{ParallelSlice, ParallelSliceMut};

/// Rows per band when splitting `height` rows over `threads`, always a multiple of 2 so no
/// 2x2 block and no chroma row is split
fn band_rows(height: usize, threads: usize) -> usize {
    height.div_ceil(threads).next_multiple_of(2)
}

/// Split every plane into bands of `band_rows` luma rows
fn split_planes<S: AnySlice>(
    planes: Vec<(S, usize)>,
    plane_desc: &[PlaneDesc],
    height: usize,
    band_rows: usize,
) -> Vec<Vec<(S, usize)>> {
    let mut bands: Vec<Vec<(S, usize)>> = (0..height.div_ceil(band_rows))
        .map(|_| Vec::with_capacity(planes.len()))
        .collect();

    for (desc, (mut slice, stride)) in plane_desc.iter().zip(planes) {
        let chunk = stride * desc.rows(band_rows);

        for band in &mut bands {
            let at = chunk.min(slice.slice_len());
            let (head, tail) = slice.slice_split_at(at);

            band.push((head, stride));
            slice = tail;
        }
    }

    bands
}

/// Same as [`encode`], converting bands of rows in parallel
#[inline(never)]
pub fn encode_multi_thread<S>(src: &[u32], dst: &mut YuvImage<S>) -> Result<(), ConvertError>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let (format, width, height) = (dst.format(), dst.width(), dst.height());

    check_dimensions(width, height)?;
    verify_pixels(src.len(), width, height)?;

    let threads = num_cpus::get();

    if threads == 1 {
        return encode(src, dst);
    }

    let band_rows = band_rows(height, threads);
    let bands = split_planes(dst.planes_mut()?, format.plane_desc(), height, band_rows);

    log::debug!(
        "encode {width}x{height} ARGB into {format:?} using {} bands",
        bands.len()
    );

    bands
        .into_par_iter()
        .zip(src.par_chunks(band_rows * width))
        .try_for_each(|(planes, src)| {
            encode_planes(src, width, src.len() / width, format, planes)
        })
}

/// Same as [`decode`], converting bands of rows in parallel
#[inline(never)]
pub fn decode_multi_thread<S>(
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

    let threads = num_cpus::get();

    if threads == 1 {
        return decode(src, dst, options);
    }

    let band_rows = band_rows(height, threads);
    let bands = split_planes(src.planes()?, format.plane_desc(), height, band_rows);

    log::debug!(
        "decode {width}x{height} {format:?} into ARGB using {} bands",
        bands.len()
    );

    bands
        .into_par_iter()
        .zip(dst.par_chunks_mut(band_rows * width))
        .try_for_each(|(planes, dst)| {
            decode_planes(planes, format, width, dst.len() / width, dst, &options)
        })
}

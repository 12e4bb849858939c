//! Glue between the conversion kernels and external image collaborators
//!
//! Bitmaps, image codecs, rotation and blur filters live outside of this crate. They are
//! injected as capabilities so the kernels stay independent of any toolkit, and errors raised
//! by them are handed back to the caller as they are.

use crate::yuv_image::check_dimensions;
use crate::{ConvertError, PixelFormat, encode_i420, repack_i420_to_nv21};
use std::convert::Infallible;
use std::error::Error;

#[cfg(feature = "image")]
mod image_backend;

#[cfg(feature = "image")]
pub use image_backend::{GaussianBlur, JpegFrameEncoder, JpegRotator};

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An external bitmap holding packed `0xAARRGGBB` pixels
pub trait PixelSource {
    type Error: Error + Send + Sync + 'static;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Copy the top left `width` x `height` region into `dst`, row by row without padding
    fn read_pixels(&self, dst: &mut [u32], width: usize, height: usize)
    -> Result<(), Self::Error>;

    /// Dispose of the bitmap once its pixels have been extracted
    fn release(self)
    where
        Self: Sized,
    {
    }
}

/// Format tag and layout handed to a [`FrameEncoder`] together with the frame bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDescriptor {
    pub format: PixelFormat,
    pub width: usize,
    pub height: usize,
    /// Row stride of the luma and the chroma plane
    pub strides: [usize; 2],
}

/// An external image codec, e.g. a JPEG compressor
pub trait FrameEncoder {
    type Output;
    type Error: Error + Send + Sync + 'static;

    fn encode_nv21(
        &mut self,
        frame: &[u8],
        descriptor: &FrameDescriptor,
    ) -> Result<Self::Output, Self::Error>;
}

/// An external 2D transform rotating `T` clockwise
pub trait Rotate<T> {
    type Error: Error + Send + Sync + 'static;

    fn rotate(&mut self, image: T, degrees: u32) -> Result<T, Self::Error>;
}

/// Rotator that leaves every image as it is
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRotation;

impl<T> Rotate<T> for NoRotation {
    type Error = Infallible;

    fn rotate(&mut self, image: T, _degrees: u32) -> Result<T, Self::Error> {
        Ok(image)
    }
}

/// An external blur filter, usually running on a GPU
pub trait BlurFilter {
    type Error: Error + Send + Sync + 'static;

    fn blur(
        &mut self,
        src: &[u32],
        dst: &mut [u32],
        width: usize,
        height: usize,
        radius: f32,
    ) -> Result<(), Self::Error>;
}

/// Largest radius blur filters are required to support
pub const MAX_BLUR_RADIUS: f32 = 25.0;

/// Everything that can go wrong at the boundary to external collaborators
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(
        "cannot read {width}x{height} pixels from a {source_width}x{source_height} image"
    )]
    RegionOutOfBounds {
        width: usize,
        height: usize,
        source_width: usize,
        source_height: usize,
    },

    #[error("blur radius must be greater than 0 and at most 25, got {0}")]
    InvalidBlurRadius(f32),

    /// Error raised by a collaborator, use `downcast` to get the original error back
    #[error(transparent)]
    External(BoxError),
}

impl AdapterError {
    fn external<E: Error + Send + Sync + 'static>(err: E) -> Self {
        AdapterError::External(Box::new(err))
    }
}

/// I420 frame with padded rows as delivered by camera hardware
#[derive(Debug, Clone, Copy)]
pub struct StridedFrame<'a> {
    /// Y, U and V planes back to back
    pub buffer: &'a [u8],
    pub width: usize,
    pub height: usize,
    pub y_stride: usize,
    pub u_stride: usize,
    pub v_stride: usize,
    /// Clockwise rotation in degrees to apply to the encoded image
    pub rotation: u32,
}

/// Read `width * height` pixels out of `source` and release it afterwards
pub fn extract_pixels<P: PixelSource>(
    source: P,
    width: usize,
    height: usize,
) -> Result<Vec<u32>, AdapterError> {
    if width > source.width() || height > source.height() {
        return Err(AdapterError::RegionOutOfBounds {
            width,
            height,
            source_width: source.width(),
            source_height: source.height(),
        });
    }

    let mut pixels = vec![0u32; width * height];

    source
        .read_pixels(&mut pixels, width, height)
        .map_err(AdapterError::external)?;

    source.release();

    Ok(pixels)
}

/// Extract `width * height` pixels from `source` and encode them as a packed I420 frame
pub fn bitmap_to_i420<P: PixelSource>(
    source: P,
    width: usize,
    height: usize,
) -> Result<Vec<u8>, AdapterError> {
    // Fail before touching the bitmap
    check_dimensions(width, height).map_err(ConvertError::from)?;

    let pixels = extract_pixels(source, width, height)?;

    let mut i420 = vec![0u8; PixelFormat::I420.buffer_size(width, height)];
    encode_i420(&mut i420, &pixels, width, height)?;

    log::debug!("encoded {width}x{height} bitmap into I420");

    Ok(i420)
}

/// Turn a strided I420 camera frame into an encoded image.
///
/// The frame is repacked into NV21 using the luma stride for both planes, handed to `encoder`
/// and the result is rotated by `rotator` if the frame carries a rotation.
pub fn assemble_image_from_planar<E, R>(
    frame: &StridedFrame<'_>,
    encoder: &mut E,
    rotator: &mut R,
) -> Result<E::Output, AdapterError>
where
    E: FrameEncoder,
    R: Rotate<E::Output>,
{
    let nv21_size = PixelFormat::NV21
        .strided_buffer_size(frame.height, &[frame.y_stride, frame.y_stride])
        .map_err(ConvertError::from)?;

    let mut nv21 = vec![0u8; nv21_size];

    repack_i420_to_nv21(
        frame.buffer,
        &mut nv21,
        frame.width,
        frame.height,
        frame.y_stride,
        frame.u_stride,
        frame.v_stride,
    )?;

    let descriptor = FrameDescriptor {
        format: PixelFormat::NV21,
        width: frame.width,
        height: frame.height,
        strides: [frame.y_stride, frame.y_stride],
    };

    log::debug!("encoding {descriptor:?}, rotation {}", frame.rotation);

    let encoded = encoder
        .encode_nv21(&nv21, &descriptor)
        .map_err(AdapterError::external)?;

    if frame.rotation % 360 == 0 {
        return Ok(encoded);
    }

    rotator
        .rotate(encoded, frame.rotation % 360)
        .map_err(AdapterError::external)
}

/// Blur the whole of `source` with `filter`, `source` is released afterwards
pub fn blur<P, F>(source: P, filter: &mut F, radius: f32) -> Result<Vec<u32>, AdapterError>
where
    P: PixelSource,
    F: BlurFilter,
{
    if !(radius > 0.0 && radius <= MAX_BLUR_RADIUS) {
        return Err(AdapterError::InvalidBlurRadius(radius));
    }

    let (width, height) = (source.width(), source.height());

    let pixels = extract_pixels(source, width, height)?;
    let mut blurred = vec![0u32; width * height];

    filter
        .blur(&pixels, &mut blurred, width, height, radius)
        .map_err(AdapterError::external)?;

    log::debug!("blurred {width}x{height} bitmap with radius {radius}");

    Ok(blurred)
}

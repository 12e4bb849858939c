use crate::{BoundsCheckError, PixelFormat, infer};

/// A YUV frame inside a single buffer with per plane strides
#[derive(Debug, Clone)]
pub struct YuvImage<S> {
    format: PixelFormat,
    buffer: S,
    strides: Vec<usize>,
    width: usize,
    height: usize,
}

/// Everything that can go wrong when constructing a [`YuvImage`]
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("width or height must not be zero")]
    InvalidDimensions,

    #[error("width and height must be even for 4:2:0 sub sampling, got {width}x{height}")]
    OddDimensions { width: usize, height: usize },

    #[error(transparent)]
    BoundsCheck(#[from] BoundsCheckError),
}

impl YuvImage<Vec<u8>> {
    /// Allocate a zeroed, packed image
    pub fn blank(format: PixelFormat, width: usize, height: usize) -> Self {
        Self {
            format,
            buffer: vec![0u8; format.buffer_size(width, height)],
            strides: format.packed_strides(width),
            width,
            height,
        }
    }
}

impl<S: AsRef<[u8]>> YuvImage<S> {
    /// Wrap `buffer` containing all planes back to back.
    ///
    /// Without `strides` the planes are expected to be packed.
    pub fn from_buffer(
        format: PixelFormat,
        buffer: S,
        strides: Option<Vec<usize>>,
        width: usize,
        height: usize,
    ) -> Result<Self, ImageError> {
        check_dimensions(width, height)?;

        let strides = strides.unwrap_or_else(|| format.packed_strides(width));

        let this = Self {
            format,
            buffer,
            strides,
            width,
            height,
        };

        let planes = this.planes()?;
        format.bounds_check(&planes, width, height)?;

        Ok(this)
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn buffer(&self) -> &S {
        &self.buffer
    }

    pub fn into_buffer(self) -> S {
        self.buffer
    }

    /// Returns every plane with its associated stride
    pub fn planes(&self) -> Result<Vec<(&[u8], usize)>, BoundsCheckError> {
        let planes = infer(
            self.format,
            self.buffer.as_ref(),
            self.width,
            self.height,
            Some(&self.strides),
        )?;

        Ok(planes.into_iter().zip(self.strides.iter().copied()).collect())
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> YuvImage<S> {
    /// Returns every plane with its associated stride
    pub fn planes_mut(&mut self) -> Result<Vec<(&mut [u8], usize)>, BoundsCheckError> {
        let planes = infer(
            self.format,
            self.buffer.as_mut(),
            self.width,
            self.height,
            Some(&self.strides),
        )?;

        Ok(planes.into_iter().zip(self.strides.iter().copied()).collect())
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidDimensions);
    }

    if width % 2 != 0 || height % 2 != 0 {
        return Err(ImageError::OddDimensions { width, height });
    }

    Ok(())
}

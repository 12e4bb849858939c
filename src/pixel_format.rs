use crate::plane_decs::*;

/// Supported YUV pixel formats
///
/// Packed ARGB pixels are always passed as `u32` slices and are not described by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
    /// Y, U and V planes, 4:2:0 sub sampling, 8 bits per sample
    I420,

    /// Y and interleaved VU planes, 4:2:0 sub sampling, 8 bits per sample
    NV21,
}

impl PixelFormat {
    /// Calculate the required buffer size given the [`PixelFormat`] self and image dimensions (in pixel width, height).
    ///
    /// For even dimensions this is always `width * height * 3 / 2`.
    pub fn buffer_size(self, width: usize, height: usize) -> usize {
        self.plane_desc()
            .iter()
            .map(|plane| plane.packed_stride(width) * plane.rows(height))
            .sum()
    }

    /// Calculate the strides of an image in a packed buffer
    pub fn packed_strides(self, width: usize) -> Vec<usize> {
        self.plane_desc()
            .iter()
            .map(|desc| desc.packed_stride(width))
            .collect()
    }

    /// Number of planes a buffer of this format is split into
    pub fn num_planes(self) -> usize {
        self.plane_desc().len()
    }

    /// Calculate the buffer size required to hold all planes with the given strides
    pub fn strided_buffer_size(
        self,
        height: usize,
        strides: &[usize],
    ) -> Result<usize, BoundsCheckError> {
        if self.num_planes() != strides.len() {
            return Err(BoundsCheckError::InvalidNumberOfStrides {
                expected: self.num_planes(),
                got: strides.len(),
            });
        }

        let mut size = 0usize;

        for (plane, (desc, &stride)) in self.plane_desc().iter().zip(strides).enumerate() {
            size = desc
                .plane_size(stride, height)
                .and_then(|plane_size| size.checked_add(plane_size))
                .ok_or(BoundsCheckError::SizeOverflow { plane })?;
        }

        Ok(size)
    }

    /// Check if the given planes+strides are valid for dimensions
    pub fn bounds_check(
        self,
        planes: &[(&[u8], usize)],
        width: usize,
        height: usize,
    ) -> Result<(), BoundsCheckError> {
        let desc = self.plane_desc();

        if self.num_planes() != planes.len() {
            return Err(BoundsCheckError::InvalidNumberOfStrides {
                expected: self.num_planes(),
                got: planes.len(),
            });
        }

        for (i, (plane, (slice, stride))) in desc.iter().zip(planes).enumerate() {
            // Ensure stride is not smaller than the width would allow
            let min_stride = plane.packed_stride(width);

            if min_stride > *stride {
                return Err(BoundsCheckError::InvalidStride {
                    plane: i,
                    minimum: min_stride,
                    got: *stride,
                });
            }

            // Ensure slice is large enough
            let min_len = plane.plane_size(*stride, height).unwrap_or(usize::MAX);

            if min_len > slice.len() {
                return Err(BoundsCheckError::InvalidPlaneSize {
                    plane: i,
                    minimum: min_len,
                    got: slice.len(),
                });
            }
        }

        Ok(())
    }

    pub(crate) fn plane_desc(&self) -> &'static [PlaneDesc] {
        match self {
            PixelFormat::I420 => &I420_PLANES,
            PixelFormat::NV21 => &NV21_PLANES,
        }
    }

    pub fn variants() -> impl IntoIterator<Item = Self> {
        [PixelFormat::I420, PixelFormat::NV21]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BoundsCheckError {
    #[error("got invalid number of strides, expected {expected} but got {got}")]
    InvalidNumberOfStrides { expected: usize, got: usize },

    #[error("invalid stride at plane {plane}, expected it to be at least {minimum}, but got {got}")]
    InvalidStride {
        plane: usize,
        minimum: usize,
        got: usize,
    },

    #[error(
        "invalid plane size at plane {plane}, expected it to be at least {minimum}, but got {got}"
    )]
    InvalidPlaneSize {
        plane: usize,
        minimum: usize,
        got: usize,
    },

    #[error("size of plane {plane} does not fit into a usize")]
    SizeOverflow { plane: usize },
}

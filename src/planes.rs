use crate::plane_decs::{I420_PLANES, NV21_PLANES, PlaneDesc};
use crate::{BoundsCheckError, PixelFormat};
use std::mem::MaybeUninit;

/// Split `buf` into the planes of an image in the given format using the given dimensions and strides
///
/// Returns a [`BoundsCheckError`] if `buf` is too small for the given dimensions and strides.
pub fn infer<S: AnySlice>(
    format: PixelFormat,
    buf: S,
    width: usize,
    height: usize,
    strides: Option<&[usize]>,
) -> Result<Vec<S>, BoundsCheckError> {
    Ok(match format {
        PixelFormat::I420 => infer_i420(buf, width, height, strides)?.into(),
        PixelFormat::NV21 => infer_nv21(buf, width, height, strides)?.into(),
    })
}

/// Turn the planes returned by [`infer`] back into an array of the expected length
pub(crate) fn plane_array<T, const N: usize>(planes: Vec<T>) -> Result<[T; N], BoundsCheckError> {
    let got = planes.len();

    <[T; N]>::try_from(planes)
        .map_err(|_| BoundsCheckError::InvalidNumberOfStrides { expected: N, got })
}

fn infer_impl<const N: usize, S: AnySlice>(
    plane_decs: [PlaneDesc; N],
    mut buf: S,
    width: usize,
    height: usize,
    strides: Option<&[usize]>,
) -> Result<[S; N], BoundsCheckError> {
    let strides: [usize; N] = match strides {
        Some(strides) => {
            <[usize; N]>::try_from(strides).map_err(|_| BoundsCheckError::InvalidNumberOfStrides {
                expected: N,
                got: strides.len(),
            })?
        }
        // Infer default strides for a packed buffer
        None => plane_decs.map(|desc| desc.packed_stride(width)),
    };

    let mut out: [MaybeUninit<S>; N] = [const { MaybeUninit::uninit() }; N];

    for (plane, ((desc, stride), out)) in plane_decs
        .into_iter()
        .zip(strides)
        .zip(out.iter_mut())
        .enumerate()
    {
        let split_at = desc.plane_size(stride, height).unwrap_or(usize::MAX);

        if split_at > buf.slice_len() {
            return Err(BoundsCheckError::InvalidPlaneSize {
                plane,
                minimum: split_at,
                got: buf.slice_len(),
            });
        }

        let (prev, rem) = buf.slice_split_at(split_at);

        out.write(prev);
        buf = rem;
    }

    // Safety: the loop above runs exactly N times, or returns early
    Ok(out.map(|p| unsafe { p.assume_init() }))
}

/// Infer the Y, U and V planes for a full I420 image using the given dimensions
pub fn infer_i420<S: AnySlice>(
    buf: S,
    width: usize,
    height: usize,
    strides: Option<&[usize]>,
) -> Result<[S; 3], BoundsCheckError> {
    infer_impl(I420_PLANES, buf, width, height, strides)
}

/// Infer the Y and VU planes for a full NV21 image using the given dimensions
pub fn infer_nv21<S: AnySlice>(
    buf: S,
    width: usize,
    height: usize,
    strides: Option<&[usize]>,
) -> Result<[S; 2], BoundsCheckError> {
    infer_impl(NV21_PLANES, buf, width, height, strides)
}

/// Helper trait implemented on &[T] and &mut [T]
#[diagnostic::on_unimplemented(message = "AnySlice is only implemented for &[T] and &mut [T].\n\
               When using or Vec<T> or similar try .as_slice() or .as_mut_slice()")]
pub trait AnySlice: sealed::Sealed + Sized {
    fn slice_len(&self) -> usize;
    fn slice_split_at(self, at: usize) -> (Self, Self);
}

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for &[T] {}
    impl<T> Sealed for &mut [T] {}
}

impl<T> AnySlice for &[T] {
    fn slice_len(&self) -> usize {
        self.len()
    }

    fn slice_split_at(self, at: usize) -> (Self, Self) {
        self.split_at(at)
    }
}

impl<T> AnySlice for &mut [T] {
    fn slice_len(&self) -> usize {
        self.len()
    }

    fn slice_split_at(self, at: usize) -> (Self, Self) {
        self.split_at_mut(at)
    }
}

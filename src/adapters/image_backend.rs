//! Collaborators backed by the `image` crate

use super::{BlurFilter, FrameDescriptor, FrameEncoder, PixelSource, Rotate};
use crate::{Argb, DecodeOptions, PixelFormat, YuvImage, decode};
use image::codecs::jpeg::JpegEncoder;
use image::error::{ParameterError, ParameterErrorKind};
use image::{DynamicImage, ImageError, ImageFormat, ImageResult, Rgb, RgbImage, Rgba, RgbaImage};
use std::convert::Infallible;

fn parameter_error(message: impl Into<String>) -> ImageError {
    ImageError::Parameter(ParameterError::from_kind(ParameterErrorKind::Generic(
        message.into(),
    )))
}

fn encode_jpeg(image: &RgbImage, quality: u8) -> ImageResult<Vec<u8>> {
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, quality).encode_image(image)?;
    Ok(jpeg)
}

impl PixelSource for RgbaImage {
    type Error = Infallible;

    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn read_pixels(
        &self,
        dst: &mut [u32],
        width: usize,
        _height: usize,
    ) -> Result<(), Self::Error> {
        for (row, dst) in self.rows().zip(dst.chunks_exact_mut(width)) {
            for (px, dst) in row.zip(dst) {
                let [r, g, b, a] = px.0;
                *dst = u32::from_rgba(r, g, b, a);
            }
        }

        Ok(())
    }
}

/// Compresses NV21 frames to JPEG
#[derive(Debug, Clone, Copy)]
pub struct JpegFrameEncoder {
    pub quality: u8,
}

impl Default for JpegFrameEncoder {
    fn default() -> Self {
        Self { quality: 100 }
    }
}

impl FrameEncoder for JpegFrameEncoder {
    type Output = Vec<u8>;
    type Error = ImageError;

    fn encode_nv21(
        &mut self,
        frame: &[u8],
        descriptor: &FrameDescriptor,
    ) -> Result<Vec<u8>, ImageError> {
        if descriptor.format != PixelFormat::NV21 {
            return Err(parameter_error(format!(
                "cannot compress {:?} frames",
                descriptor.format
            )));
        }

        let (width, height) = (descriptor.width, descriptor.height);

        let nv21 = YuvImage::from_buffer(
            PixelFormat::NV21,
            frame,
            Some(descriptor.strides.to_vec()),
            width,
            height,
        )
        .map_err(|e| parameter_error(e.to_string()))?;

        let mut pixels = vec![0u32; width * height];
        decode(&nv21, &mut pixels, DecodeOptions::plain())
            .map_err(|e| parameter_error(e.to_string()))?;

        let rgb = RgbImage::from_fn(width as u32, height as u32, |x, y| {
            let px = pixels[y as usize * width + x as usize];
            Rgb([px.red(), px.green(), px.blue()])
        });

        encode_jpeg(&rgb, self.quality)
    }
}

/// Rotates JPEG images by multiples of 90 degrees
#[derive(Debug, Clone, Copy)]
pub struct JpegRotator {
    pub quality: u8,
}

impl Default for JpegRotator {
    fn default() -> Self {
        Self { quality: 100 }
    }
}

impl Rotate<Vec<u8>> for JpegRotator {
    type Error = ImageError;

    fn rotate(&mut self, jpeg: Vec<u8>, degrees: u32) -> Result<Vec<u8>, ImageError> {
        let rotate: fn(&DynamicImage) -> DynamicImage = match degrees % 360 {
            0 => return Ok(jpeg),
            90 => DynamicImage::rotate90,
            180 => DynamicImage::rotate180,
            270 => DynamicImage::rotate270,
            _ => {
                return Err(parameter_error(format!(
                    "rotation must be a multiple of 90 degrees, got {degrees}"
                )));
            }
        };

        let image = image::load_from_memory_with_format(&jpeg, ImageFormat::Jpeg)?;

        encode_jpeg(&rotate(&image).to_rgb8(), self.quality)
    }
}

/// Gaussian blur using the radius as sigma
#[derive(Debug, Default, Clone, Copy)]
pub struct GaussianBlur;

impl BlurFilter for GaussianBlur {
    type Error = Infallible;

    fn blur(
        &mut self,
        src: &[u32],
        dst: &mut [u32],
        width: usize,
        height: usize,
        radius: f32,
    ) -> Result<(), Infallible> {
        let image = RgbaImage::from_fn(width as u32, height as u32, |x, y| {
            let px = src[y as usize * width + x as usize];
            Rgba([px.red(), px.green(), px.blue(), px.alpha()])
        });

        let blurred = image::imageops::blur(&image, radius);

        for (dst, px) in dst.iter_mut().zip(blurred.pixels()) {
            let [r, g, b, a] = px.0;
            *dst = u32::from_rgba(r, g, b, a);
        }

        Ok(())
    }
}

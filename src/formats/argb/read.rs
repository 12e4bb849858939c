use super::{ArgbBlock, ArgbSrc};

/// Reads 2x2 blocks out of a packed pixel buffer without padding
pub(crate) struct ArgbReader<'a> {
    pixels: &'a [u32],
    width: usize,
}

impl<'a> ArgbReader<'a> {
    pub(crate) fn new(pixels: &'a [u32], width: usize) -> Self {
        Self { pixels, width }
    }
}

impl ArgbSrc for ArgbReader<'_> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> ArgbBlock {
        let px00_offset = y * self.width + x;
        let px10_offset = px00_offset + self.width;

        ArgbBlock {
            px00: self.pixels[px00_offset],
            px01: self.pixels[px00_offset + 1],
            px10: self.pixels[px10_offset],
            px11: self.pixels[px10_offset + 1],
        }
    }
}

use crate::formats::{I420Block, I420Src};

/// Reads 4:2:0 blocks from a Y plane and an interleaved plane of V,U pairs
pub(crate) struct NV21Reader<'a> {
    y: &'a [u8],
    vu: &'a [u8],

    y_stride: usize,
    vu_stride: usize,
}

impl<'a> NV21Reader<'a> {
    pub(crate) fn new(planes: [(&'a [u8], usize); 2]) -> Self {
        let [(y, y_stride), (vu, vu_stride)] = planes;

        Self {
            y,
            vu,
            y_stride,
            vu_stride,
        }
    }
}

impl I420Src for NV21Reader<'_> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> I420Block {
        let y00_offset = y * self.y_stride + x;
        let y10_offset = y00_offset + self.y_stride;

        // x is always even, so it is the offset of the pair
        let vu_offset = (y / 2) * self.vu_stride + x;

        I420Block {
            y00: self.y[y00_offset],
            y01: self.y[y00_offset + 1],
            y10: self.y[y10_offset],
            y11: self.y[y10_offset + 1],
            v: self.vu[vu_offset],
            u: self.vu[vu_offset + 1],
        }
    }
}

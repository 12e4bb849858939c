use crate::formats::visit_2x2::{Image2x2Visitor, visit};
use crate::formats::{I420Block, I420Src};

pub(crate) struct NV21Writer<'a, S: I420Src> {
    y: &'a mut [u8],
    vu: &'a mut [u8],

    y_stride: usize,
    vu_stride: usize,

    i420_src: S,
}

impl<'a, S: I420Src> NV21Writer<'a, S> {
    pub(crate) fn write(
        dst_width: usize,
        dst_height: usize,
        dst_planes: [(&'a mut [u8], usize); 2],
        i420_src: S,
    ) {
        let [(y, y_stride), (vu, vu_stride)] = dst_planes;

        visit(
            dst_width,
            dst_height,
            Self {
                y,
                vu,
                y_stride,
                vu_stride,
                i420_src,
            },
        );
    }
}

impl<S: I420Src> Image2x2Visitor for NV21Writer<'_, S> {
    #[inline(always)]
    fn visit(&mut self, x: usize, y: usize) {
        let I420Block {
            y00,
            y01,
            y10,
            y11,
            u,
            v,
        } = self.i420_src.read(x, y);

        let y00_offset = y * self.y_stride + x;
        let y10_offset = y00_offset + self.y_stride;

        let vu_offset = (y / 2) * self.vu_stride + x;

        self.y[y00_offset..y00_offset + 2].copy_from_slice(&[y00, y01]);
        self.y[y10_offset..y10_offset + 2].copy_from_slice(&[y10, y11]);

        // V first, consumers expecting NV21 rely on this order
        self.vu[vu_offset..vu_offset + 2].copy_from_slice(&[v, u]);
    }
}

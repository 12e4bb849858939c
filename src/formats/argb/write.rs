use super::{ArgbBlock, ArgbSrc};
use crate::formats::visit_2x2::{Image2x2Visitor, visit};

pub(crate) struct ArgbWriter<'a, S: ArgbSrc> {
    dst: &'a mut [u32],
    dst_width: usize,

    argb_src: S,
}

impl<'a, S: ArgbSrc> ArgbWriter<'a, S> {
    pub(crate) fn write(dst: &'a mut [u32], dst_width: usize, dst_height: usize, argb_src: S) {
        visit(
            dst_width,
            dst_height,
            Self {
                dst,
                dst_width,
                argb_src,
            },
        );
    }
}

impl<S: ArgbSrc> Image2x2Visitor for ArgbWriter<'_, S> {
    #[inline(always)]
    fn visit(&mut self, x: usize, y: usize) {
        let ArgbBlock {
            px00,
            px01,
            px10,
            px11,
        } = self.argb_src.read(x, y);

        let offset0 = y * self.dst_width + x;
        let offset1 = offset0 + self.dst_width;

        self.dst[offset0..offset0 + 2].copy_from_slice(&[px00, px01]);
        self.dst[offset1..offset1 + 2].copy_from_slice(&[px10, px11]);
    }
}

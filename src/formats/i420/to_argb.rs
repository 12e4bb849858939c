use super::{I420Block, I420Src};
use crate::color::{DecodeOptions, pack_argb, yuv_to_rgb};
use crate::formats::argb::{ArgbBlock, ArgbSrc};

pub(crate) struct I420ToArgb<S> {
    i420_src: S,
    invert: bool,
}

impl<S: I420Src> I420ToArgb<S> {
    pub(crate) fn new(options: &DecodeOptions, i420_src: S) -> Self {
        Self {
            i420_src,
            invert: options.invert_colors,
        }
    }
}

impl<S: I420Src> ArgbSrc for I420ToArgb<S> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> ArgbBlock {
        let I420Block {
            y00,
            y01,
            y10,
            y11,
            u,
            v,
        } = self.i420_src.read(x, y);

        let px = |y: u8| pack_argb(yuv_to_rgb(y, u, v), self.invert);

        ArgbBlock {
            px00: px(y00),
            px01: px(y01),
            px10: px(y10),
            px11: px(y11),
        }
    }
}

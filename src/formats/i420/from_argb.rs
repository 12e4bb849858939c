use super::{I420Block, I420Src};
use crate::color::{Argb, rgb_to_yuv};
use crate::formats::argb::{ArgbBlock, ArgbSrc};

/// Converts packed pixels to 4:2:0 blocks.
///
/// Chroma is not averaged, it is taken from the top left pixel of every block.
pub(crate) struct ArgbToI420<S> {
    argb_src: S,
}

impl<S: ArgbSrc> ArgbToI420<S> {
    pub(crate) fn new(argb_src: S) -> Self {
        Self { argb_src }
    }
}

impl<S: ArgbSrc> I420Src for ArgbToI420<S> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> I420Block {
        let ArgbBlock {
            px00,
            px01,
            px10,
            px11,
        } = self.argb_src.read(x, y);

        let luma = |px: u32| rgb_to_yuv(px.red(), px.green(), px.blue()).y;

        let yuv00 = rgb_to_yuv(px00.red(), px00.green(), px00.blue());

        I420Block {
            y00: yuv00.y,
            y01: luma(px01),
            y10: luma(px10),
            y11: luma(px11),
            u: yuv00.u,
            v: yuv00.v,
        }
    }
}

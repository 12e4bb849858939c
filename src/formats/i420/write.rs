use super::{I420Block, I420Src};
use crate::formats::visit_2x2::{Image2x2Visitor, visit};

pub(crate) struct I420Writer<'a, S: I420Src> {
    y: &'a mut [u8],
    u: &'a mut [u8],
    v: &'a mut [u8],

    y_stride: usize,
    u_stride: usize,
    v_stride: usize,

    i420_src: S,
}

impl<'a, S: I420Src> I420Writer<'a, S> {
    pub(crate) fn write(
        dst_width: usize,
        dst_height: usize,
        dst_planes: [(&'a mut [u8], usize); 3],
        i420_src: S,
    ) {
        let [(y, y_stride), (u, u_stride), (v, v_stride)] = dst_planes;

        visit(
            dst_width,
            dst_height,
            Self {
                y,
                u,
                v,
                y_stride,
                u_stride,
                v_stride,
                i420_src,
            },
        );
    }
}

impl<S: I420Src> Image2x2Visitor for I420Writer<'_, S> {
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

        let offset0 = y * self.y_stride + x;
        let offset1 = offset0 + self.y_stride;

        self.y[offset0..offset0 + 2].copy_from_slice(&[y00, y01]);
        self.y[offset1..offset1 + 2].copy_from_slice(&[y10, y11]);

        let hx = x / 2;
        let hy = y / 2;

        self.u[hy * self.u_stride + hx] = u;
        self.v[hy * self.v_stride + hx] = v;
    }
}

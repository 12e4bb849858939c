use super::{I420Block, I420Src};

pub(crate) struct I420Reader<'a> {
    y: &'a [u8],
    u: &'a [u8],
    v: &'a [u8],

    y_stride: usize,
    u_stride: usize,
    v_stride: usize,
}

impl<'a> I420Reader<'a> {
    pub(crate) fn new(planes: [(&'a [u8], usize); 3]) -> Self {
        let [(y, y_stride), (u, u_stride), (v, v_stride)] = planes;

        Self {
            y,
            u,
            v,
            y_stride,
            u_stride,
            v_stride,
        }
    }
}

impl I420Src for I420Reader<'_> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> I420Block {
        let y00_offset = y * self.y_stride + x;
        let y10_offset = y00_offset + self.y_stride;

        let (hx, hy) = (x / 2, y / 2);

        I420Block {
            y00: self.y[y00_offset],
            y01: self.y[y00_offset + 1],
            y10: self.y[y10_offset],
            y11: self.y[y10_offset + 1],
            u: self.u[hy * self.u_stride + hx],
            v: self.v[hy * self.v_stride + hx],
        }
    }
}

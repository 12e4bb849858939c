mod from_argb;
mod read;
mod to_argb;
mod write;

pub(crate) use from_argb::ArgbToI420;
pub(crate) use read::I420Reader;
pub(crate) use to_argb::I420ToArgb;
pub(crate) use write::I420Writer;

/// Luma of a 2x2 block and the single chroma pair shared by it
pub(crate) struct I420Block {
    pub(crate) y00: u8,
    pub(crate) y01: u8,
    pub(crate) y10: u8,
    pub(crate) y11: u8,

    pub(crate) u: u8,
    pub(crate) v: u8,
}

pub(crate) trait I420Src {
    fn read(&mut self, x: usize, y: usize) -> I420Block;
}

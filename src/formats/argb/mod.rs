mod read;
mod write;

pub(crate) use read::ArgbReader;
pub(crate) use write::ArgbWriter;

/// Four packed `0xAARRGGBB` pixels of a 2x2 block
pub(crate) struct ArgbBlock {
    pub(crate) px00: u32,
    pub(crate) px01: u32,
    pub(crate) px10: u32,
    pub(crate) px11: u32,
}

pub(crate) trait ArgbSrc {
    fn read(&mut self, x: usize, y: usize) -> ArgbBlock;
}

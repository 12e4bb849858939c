mod read;
mod write;

pub(crate) use read::NV21Reader;
pub(crate) use write::NV21Writer;

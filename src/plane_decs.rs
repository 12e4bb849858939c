/// Description for a Plane which can be used to implement bounds checks, stride calculation and buffer sizes.
///
/// Not used for the implementation of the format read or write, only utility functions.
#[derive(Clone, Copy)]
pub(crate) struct PlaneDesc {
    pub(crate) width_op: Op,
    pub(crate) height_op: Op,
}

impl PlaneDesc {
    pub(crate) fn packed_stride(&self, width: usize) -> usize {
        self.width_op.op(width)
    }

    pub(crate) fn rows(&self, height: usize) -> usize {
        self.height_op.op(height)
    }

    /// Bytes a plane with the given stride occupies, `None` if that does not fit into a usize
    pub(crate) fn plane_size(&self, stride: usize, height: usize) -> Option<usize> {
        stride.checked_mul(self.rows(height))
    }
}

/// Plane's number of bytes in relation to width / height
#[derive(Clone, Copy)]
pub(crate) enum Op {
    Div(usize),
    Identity,
}

impl Op {
    pub(crate) fn op(self, lhs: usize) -> usize {
        match self {
            Op::Div(rhs) => lhs / rhs,
            Op::Identity => lhs,
        }
    }
}

pub(crate) const I420_PLANES: [PlaneDesc; 3] = [
    PlaneDesc {
        width_op: Op::Identity,
        height_op: Op::Identity,
    },
    PlaneDesc {
        width_op: Op::Div(2),
        height_op: Op::Div(2),
    },
    PlaneDesc {
        width_op: Op::Div(2),
        height_op: Op::Div(2),
    },
];

/// The chroma plane holds one V,U byte pair per 2x2 block, so a row is as wide as the luma row
pub(crate) const NV21_PLANES: [PlaneDesc; 2] = [
    PlaneDesc {
        width_op: Op::Identity,
        height_op: Op::Identity,
    },
    PlaneDesc {
        width_op: Op::Identity,
        height_op: Op::Div(2),
    },
];

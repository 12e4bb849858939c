pub(crate) trait Image2x2Visitor {
    fn visit(&mut self, x: usize, y: usize);
}

/// Visit every 2x2 block of an image, row pair by row pair
#[inline(never)]
pub(crate) fn visit<R>(width: usize, height: usize, mut visitor: R)
where
    R: Image2x2Visitor,
{
    debug_assert_eq!(width % 2, 0);
    debug_assert_eq!(height % 2, 0);

    // Process 2 rows of pixels for iteration of this loop
    for y in (0..height).step_by(2) {
        for x in (0..width).step_by(2) {
            visitor.visit(x, y);
        }
    }
}

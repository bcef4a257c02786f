//! Panel geometry and pixel addressing for the dual-screen handheld.
//!
//! Both panels are mounted rotated, so the framebuffer is column-major: the
//! fast axis runs along the panel height, and each column is stored from the
//! bottom edge upwards.

/// Height shared by both panels, in pixels.
pub const HEIGHT: usize = 240;
/// Top panel width in pixels.
pub const TOP_WIDTH: usize = 400;
/// Bottom panel width in pixels.
pub const BOTTOM_WIDTH: usize = 320;
/// Bytes per pixel (B, G, R).
pub const BYTES_PER_PIXEL: usize = 3;
/// Bytes in one framebuffer column.
pub const COLUMN_BYTES: usize = HEIGHT * BYTES_PER_PIXEL;
/// Total byte size of the top framebuffer.
pub const TOP_BUFFER_SIZE: usize = TOP_WIDTH * COLUMN_BYTES;
/// Total byte size of the bottom framebuffer.
pub const BOTTOM_BUFFER_SIZE: usize = BOTTOM_WIDTH * COLUMN_BYTES;

/// Returns the byte offset of pixel `(x, y)` in a panel `width` pixels wide.
///
/// Returns `None` when the pixel lies outside the panel.
#[inline]
pub const fn pixel_offset(width: usize, x: usize, y: usize) -> Option<usize> {
    if x >= width || y >= HEIGHT {
        return None;
    }

    Some(x * COLUMN_BYTES + (HEIGHT - 1 - y) * BYTES_PER_PIXEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_stored_at_the_bottom_of_the_first_column() {
        assert_eq!(pixel_offset(TOP_WIDTH, 0, 0), Some((HEIGHT - 1) * 3));
        assert_eq!(pixel_offset(TOP_WIDTH, 0, HEIGHT - 1), Some(0));
    }

    #[test]
    fn next_column_starts_one_column_stride_later() {
        assert_eq!(
            pixel_offset(BOTTOM_WIDTH, 1, HEIGHT - 1),
            Some(COLUMN_BYTES)
        );
        assert_eq!(
            pixel_offset(TOP_WIDTH, TOP_WIDTH - 1, 0),
            Some(TOP_BUFFER_SIZE - BYTES_PER_PIXEL)
        );
    }

    #[test]
    fn out_of_panel_pixels_have_no_offset() {
        assert_eq!(pixel_offset(BOTTOM_WIDTH, BOTTOM_WIDTH, 0), None);
        assert_eq!(pixel_offset(TOP_WIDTH, 0, HEIGHT), None);
    }
}

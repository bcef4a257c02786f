//! Borrowed 24-bit framebuffer for one panel.

use crate::{
    Color,
    geometry::{BYTES_PER_PIXEL, COLUMN_BYTES, HEIGHT, pixel_offset},
};

/// BGR framebuffer over panel memory.
///
/// Pixels are stored column-major, bottom-to-top; see [`crate::geometry`].
#[derive(Debug)]
pub struct FrameBuffer<'a> {
    bytes: &'a mut [u8],
    width: usize,
}

impl<'a> FrameBuffer<'a> {
    /// Wraps panel memory for a panel `width` pixels wide.
    ///
    /// Returns `None` when `bytes` does not hold exactly `width` columns.
    pub fn new(bytes: &'a mut [u8], width: usize) -> Option<Self> {
        if width == 0 || bytes.len() != width * COLUMN_BYTES {
            return None;
        }

        Some(Self { bytes, width })
    }

    /// Panel width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Panel height in pixels.
    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// Returns the underlying framebuffer bytes.
    pub fn bytes(&self) -> &[u8] {
        self.bytes
    }

    /// Fills every pixel. Transparent clears to black.
    pub fn clear(&mut self, color: Color) {
        let bgr = color.to_bgr();
        for pixel in self.bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&bgr);
        }
    }

    /// Sets a pixel colour.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> bool {
        let Some(offset) = pixel_offset(self.width, x, y) else {
            return false;
        };

        self.bytes[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color.to_bgr());
        true
    }

    /// Reads a pixel colour.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        let offset = pixel_offset(self.width, x, y)?;
        Some(Color::from_bgr([
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
        ]))
    }
}

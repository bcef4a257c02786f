//! `embedded-graphics` drawing support, behind the `embedded-graphics` feature.

use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::{Rgb888, RgbColor},
};

use crate::{Color, FrameBuffer, geometry};

impl From<Rgb888> for Color {
    fn from(color: Rgb888) -> Self {
        Color::rgb(color.r(), color.g(), color.b())
    }
}

impl DrawTarget for FrameBuffer<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }

            let x = point.x as usize;
            let y = point.y as usize;
            let _ = self.set_pixel(x, y, color.into());
        }

        Ok(())
    }
}

impl OriginDimensions for FrameBuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, geometry::HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_core::{geometry::Point, primitives::Rectangle};

    use super::*;
    use crate::geometry::{BOTTOM_BUFFER_SIZE, BOTTOM_WIDTH};

    #[test]
    fn draw_target_writes_through_set_pixel() {
        let mut mem = vec![0u8; BOTTOM_BUFFER_SIZE];
        let mut fb = FrameBuffer::new(&mut mem, BOTTOM_WIDTH).unwrap();

        fb.draw_iter([
            Pixel(Point::new(3, 4), Rgb888::new(0x10, 0x20, 0x30)),
            Pixel(Point::new(-1, 4), Rgb888::WHITE),
            Pixel(Point::new(3, 1000), Rgb888::WHITE),
        ])
        .unwrap();

        assert_eq!(fb.pixel(3, 4), Some(Color::rgb(0x10, 0x20, 0x30)));
        assert_eq!(fb.bytes().iter().filter(|&&b| b != 0).count(), 3);
        assert_eq!(fb.size(), Size::new(320, 240));
    }

    #[test]
    fn fill_solid_covers_the_rectangle() {
        let mut mem = vec![0u8; BOTTOM_BUFFER_SIZE];
        let mut fb = FrameBuffer::new(&mut mem, BOTTOM_WIDTH).unwrap();

        fb.fill_solid(&Rectangle::new(Point::new(1, 1), Size::new(2, 2)), Rgb888::RED)
            .unwrap();

        assert_eq!(fb.pixel(2, 2), Some(Color::RED));
        assert_eq!(fb.pixel(3, 2), Some(Color::BLACK));
    }
}

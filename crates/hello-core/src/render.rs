//! Text and rectangle blitting onto the two panels.

use core::fmt::{self, Write};

use ctr_framebuffer::{Color, FrameBuffer};
use heapless::String;

use crate::font::GlyphFont;

/// Standard background colour.
pub const STD_COLOR_BG: Color = Color::BLACK;
/// Standard text colour.
pub const STD_COLOR_FONT: Color = Color::WHITE;
/// Capacity of the buffer used by formatted line drawing.
pub const LINE_BUFFER_BYTES: usize = 512;

/// Which panel to draw on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScreenId {
    #[default]
    Top,
    Bottom,
}

impl ScreenId {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Both panels of the device.
#[derive(Debug)]
pub struct Screens<'a> {
    top: FrameBuffer<'a>,
    bottom: FrameBuffer<'a>,
}

impl<'a> Screens<'a> {
    pub fn new(top: FrameBuffer<'a>, bottom: FrameBuffer<'a>) -> Self {
        Self { top, bottom }
    }

    pub fn get(&self, id: ScreenId) -> &FrameBuffer<'a> {
        match id {
            ScreenId::Top => &self.top,
            ScreenId::Bottom => &self.bottom,
        }
    }

    pub fn get_mut(&mut self, id: ScreenId) -> &mut FrameBuffer<'a> {
        match id {
            ScreenId::Top => &mut self.top,
            ScreenId::Bottom => &mut self.bottom,
        }
    }

    /// Clears the selected panels to the standard background.
    pub fn clear(&mut self, clear_top: bool, clear_bottom: bool) {
        if clear_top {
            clear_screen(&mut self.top, STD_COLOR_BG);
        }
        if clear_bottom {
            clear_screen(&mut self.bottom, STD_COLOR_BG);
        }
    }

    /// Formats `args` and draws the result in the standard colours.
    ///
    /// Output longer than [`LINE_BUFFER_BYTES`] is cut at the last whole
    /// character that fits.
    pub fn draw_line_fmt(
        &mut self,
        font: &GlyphFont,
        x: usize,
        y: usize,
        id: ScreenId,
        args: fmt::Arguments<'_>,
    ) {
        let line = format_line(args);
        draw_text(
            self.get_mut(id),
            font,
            &line,
            x,
            y,
            STD_COLOR_FONT,
            STD_COLOR_BG,
        );
    }
}

/// `fmt::Write` adapter that appends to a bounded string and silently drops
/// whatever does not fit, never splitting a character.
pub struct Truncating<'a, const N: usize> {
    out: &'a mut String<N>,
    full: bool,
}

impl<'a, const N: usize> Truncating<'a, N> {
    pub fn new(out: &'a mut String<N>) -> Self {
        Self { out, full: false }
    }
}

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.full {
            return Ok(());
        }
        for ch in s.chars() {
            if self.out.push(ch).is_err() {
                self.full = true;
                break;
            }
        }
        Ok(())
    }
}

/// Formats into a bounded line buffer, truncating overlong output.
pub fn format_line(args: fmt::Arguments<'_>) -> String<LINE_BUFFER_BYTES> {
    let mut line = String::new();
    let mut writer = Truncating::new(&mut line);
    // Truncating never reports an error; a failing Display impl just ends the line.
    let _ = writer.write_fmt(args);
    line
}

/// Fills a whole panel. Transparent clears to black.
pub fn clear_screen(frame: &mut FrameBuffer<'_>, color: Color) {
    frame.clear(color);
}

/// Draws one glyph with its top-left corner at `(x, y)`.
///
/// Clear bits are painted with `bg` unless it is [`Color::TRANSPARENT`].
pub fn draw_glyph(
    frame: &mut FrameBuffer<'_>,
    font: &GlyphFont,
    code: u8,
    x: usize,
    y: usize,
    fg: Color,
    bg: Color,
) {
    let width = font.width();

    for (row, bits) in font.glyph(code).iter().enumerate() {
        let py = y.saturating_add(row);
        for col in 0..width {
            let px = x.saturating_add(col);
            if bits & (0x80 >> col) != 0 {
                let _ = frame.set_pixel(px, py, fg);
            } else if !bg.is_transparent() {
                let _ = frame.set_pixel(px, py, bg);
            }
        }
    }
}

/// Draws `text` one byte per glyph, advancing by the fixed glyph width.
pub fn draw_text(
    frame: &mut FrameBuffer<'_>,
    font: &GlyphFont,
    text: &str,
    x: usize,
    y: usize,
    fg: Color,
    bg: Color,
) {
    let advance = font.width();
    for (i, code) in text.bytes().enumerate() {
        let px = x.saturating_add(i.saturating_mul(advance));
        draw_glyph(frame, font, code, px, y, fg, bg);
    }
}

/// Fills an axis-aligned rectangle.
pub fn draw_rect(
    frame: &mut FrameBuffer<'_>,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    color: Color,
) {
    for py in y..y.saturating_add(height) {
        for px in x..x.saturating_add(width) {
            let _ = frame.set_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use ctr_framebuffer::geometry::{BOTTOM_BUFFER_SIZE, BOTTOM_WIDTH, TOP_BUFFER_SIZE, TOP_WIDTH};

    use super::*;

    const BUNDLED: &[u8] = include_bytes!("../../../assets/font.pbm");

    fn font() -> GlyphFont {
        GlyphFont::from_pbm(BUNDLED).unwrap()
    }

    /// 4px-wide, 1-row font where every glyph is `1010`.
    fn striped_font() -> GlyphFont {
        let mut pbm = b"P4\n4 256\n".to_vec();
        pbm.extend(vec![0b1010_0000u8; 256]);
        GlyphFont::from_pbm(&pbm).unwrap()
    }

    #[test]
    fn glyph_bits_map_msb_first_to_increasing_x() {
        let mut mem = vec![0u8; BOTTOM_BUFFER_SIZE];
        let mut fb = FrameBuffer::new(&mut mem, BOTTOM_WIDTH).unwrap();
        let font = font();

        draw_glyph(&mut fb, &font, b'H', 20, 30, Color::WHITE, Color::BLUE);

        // Row 0 of 'H' is 0b0100_0100.
        assert_eq!(fb.pixel(20, 30), Some(Color::BLUE));
        assert_eq!(fb.pixel(21, 30), Some(Color::WHITE));
        assert_eq!(fb.pixel(25, 30), Some(Color::WHITE));
        assert_eq!(fb.pixel(27, 30), Some(Color::BLUE));
        // Row 3 is the crossbar.
        assert_eq!(fb.pixel(23, 33), Some(Color::WHITE));
        // Outside the 8x8 cell is untouched.
        assert_eq!(fb.pixel(28, 30), Some(Color::BLACK));
        assert_eq!(fb.pixel(20, 38), Some(Color::BLACK));
    }

    #[test]
    fn transparent_background_preserves_existing_pixels() {
        let mut mem = vec![0u8; BOTTOM_BUFFER_SIZE];
        let mut fb = FrameBuffer::new(&mut mem, BOTTOM_WIDTH).unwrap();
        fb.clear(Color::GREEN);

        draw_glyph(&mut fb, &striped_font(), b'x', 0, 0, Color::RED, Color::TRANSPARENT);

        assert_eq!(fb.pixel(0, 0), Some(Color::RED));
        assert_eq!(fb.pixel(1, 0), Some(Color::GREEN));
        assert_eq!(fb.pixel(2, 0), Some(Color::RED));
        assert_eq!(fb.pixel(3, 0), Some(Color::GREEN));
    }

    #[test]
    fn only_glyph_width_bits_are_drawn() {
        let mut mem = vec![0u8; BOTTOM_BUFFER_SIZE];
        let mut fb = FrameBuffer::new(&mut mem, BOTTOM_WIDTH).unwrap();
        fb.clear(Color::GREEN);

        draw_glyph(&mut fb, &striped_font(), 0, 0, 0, Color::RED, Color::BLUE);

        assert_eq!(fb.pixel(3, 0), Some(Color::BLUE));
        assert_eq!(fb.pixel(4, 0), Some(Color::GREEN));
    }

    #[test]
    fn text_advances_by_glyph_width() {
        let mut mem = vec![0u8; BOTTOM_BUFFER_SIZE];
        let mut fb = FrameBuffer::new(&mut mem, BOTTOM_WIDTH).unwrap();

        draw_text(&mut fb, &striped_font(), "abc", 10, 5, Color::WHITE, Color::TRANSPARENT);

        for glyph in 0..3 {
            let x = 10 + glyph * 4;
            assert_eq!(fb.pixel(x, 5), Some(Color::WHITE));
            assert_eq!(fb.pixel(x + 1, 5), Some(Color::BLACK));
            assert_eq!(fb.pixel(x + 2, 5), Some(Color::WHITE));
        }
        assert_eq!(fb.pixel(22, 5), Some(Color::BLACK));
    }

    #[test]
    fn glyphs_past_the_panel_edge_are_clipped() {
        let mut mem = vec![0u8; BOTTOM_BUFFER_SIZE];
        let mut fb = FrameBuffer::new(&mut mem, BOTTOM_WIDTH).unwrap();

        draw_text(&mut fb, &font(), "HH", BOTTOM_WIDTH - 4, 236, Color::WHITE, Color::BLUE);
        draw_text(&mut fb, &font(), "H", usize::MAX, usize::MAX, Color::WHITE, Color::BLUE);

        assert_eq!(fb.pixel(BOTTOM_WIDTH - 3, 236), Some(Color::WHITE));
        assert_eq!(fb.pixel(BOTTOM_WIDTH - 4, 239), Some(Color::BLUE));
    }

    #[test]
    fn rect_fills_exactly_its_area() {
        let mut mem = vec![0u8; TOP_BUFFER_SIZE];
        let mut fb = FrameBuffer::new(&mut mem, TOP_WIDTH).unwrap();

        draw_rect(&mut fb, 5, 6, 3, 2, Color::RED);

        let painted = fb
            .bytes()
            .chunks_exact(3)
            .filter(|p| *p == Color::RED.to_bgr())
            .count();
        assert_eq!(painted, 6);
        assert_eq!(fb.pixel(5, 6), Some(Color::RED));
        assert_eq!(fb.pixel(7, 7), Some(Color::RED));
        assert_eq!(fb.pixel(8, 7), Some(Color::BLACK));
        assert_eq!(fb.pixel(7, 8), Some(Color::BLACK));
    }

    #[test]
    fn clear_selects_panels_independently() {
        let mut top_mem = vec![0xAAu8; TOP_BUFFER_SIZE];
        let mut bottom_mem = vec![0xAAu8; BOTTOM_BUFFER_SIZE];
        let mut screens = Screens::new(
            FrameBuffer::new(&mut top_mem, TOP_WIDTH).unwrap(),
            FrameBuffer::new(&mut bottom_mem, BOTTOM_WIDTH).unwrap(),
        );

        screens.clear(false, true);

        assert!(screens.get(ScreenId::Top).bytes().iter().all(|&b| b == 0xAA));
        assert!(screens.get(ScreenId::Bottom).bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn formatted_line_is_drawn_in_standard_colours() {
        let mut top_mem = vec![0x11u8; TOP_BUFFER_SIZE];
        let mut bottom_mem = vec![0u8; BOTTOM_BUFFER_SIZE];
        let mut screens = Screens::new(
            FrameBuffer::new(&mut top_mem, TOP_WIDTH).unwrap(),
            FrameBuffer::new(&mut bottom_mem, BOTTOM_WIDTH).unwrap(),
        );
        let font = font();

        screens.draw_line_fmt(&font, 0, 0, ScreenId::Top, format_args!("{}", 'H'));

        let top = screens.get(ScreenId::Top);
        assert_eq!(top.pixel(0, 0), Some(STD_COLOR_BG));
        assert_eq!(top.pixel(1, 0), Some(STD_COLOR_FONT));
        assert_eq!(top.pixel(8, 0), Some(Color::from_bgr([0x11; 3])));
        assert!(screens.get(ScreenId::Bottom).bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn formatted_line_truncates_at_buffer_capacity() {
        let long = "x".repeat(LINE_BUFFER_BYTES + 40);
        let line = format_line(format_args!("{long}{}", 7));
        assert_eq!(line.len(), LINE_BUFFER_BYTES);

        // A multi-byte char that would straddle the limit is dropped whole.
        let almost = "y".repeat(LINE_BUFFER_BYTES - 1);
        let line = format_line(format_args!("{almost}é"));
        assert_eq!(line.len(), LINE_BUFFER_BYTES - 1);

        assert_eq!(format_line(format_args!("x={} y={}", 10, 15)).as_str(), "x=10 y=15");
    }

    #[test]
    fn truncating_writer_appends_to_existing_content() {
        let mut out = String::<8>::new();
        out.push_str("ab").unwrap();

        write!(Truncating::new(&mut out), "{}-{}", 123, "xyz").unwrap();
        assert_eq!(out.as_str(), "ab123-xy");

        // Once full, later writes are dropped even if they would fit.
        let mut out = String::<4>::new();
        let mut writer = Truncating::new(&mut out);
        write!(writer, "abc").unwrap();
        write!(writer, "éz").unwrap();
        write!(writer, "d").unwrap();
        assert_eq!(out.as_str(), "abc");
    }

    #[test]
    fn screen_toggle_round_trips() {
        assert_eq!(ScreenId::Top.toggled(), ScreenId::Bottom);
        assert_eq!(ScreenId::Bottom.toggled().toggled(), ScreenId::Bottom);
    }
}

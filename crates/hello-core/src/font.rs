//! Monochrome bitmap font decoded from a P4 (binary PBM) sheet.
//!
//! Two sheet layouts are accepted:
//! - narrow: `width <= 8`, 256 glyphs stacked in a single column, one byte
//!   per glyph row;
//! - wide: a 16x16 grid of glyphs, each `width / 16` by `height / 16` pixels.

use core::fmt;

use log::debug;

/// Widest glyph the table can hold.
pub const FONT_MAX_WIDTH: usize = 8;
/// Tallest glyph the table can hold.
pub const FONT_MAX_HEIGHT: usize = 10;
/// Glyphs per font, one per byte value.
pub const GLYPH_COUNT: usize = 256;

const MAGIC: &[u8] = b"P4\n";
const HEADER_WINDOW: usize = 512;
const MIN_ASSET_BYTES: usize = 7;
const GRID_CELLS: u32 = 16;
const TABLE_BYTES: usize = GLYPH_COUNT * FONT_MAX_HEIGHT;

/// Reasons a font sheet is rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// Fewer bytes than the smallest possible header.
    TooShort,
    /// Sheet does not start with `P4\n`.
    BadMagic,
    /// A header field runs past the scanned header window.
    HeaderOverrun,
    /// Digits expected but not found.
    MissingDimension,
    /// Width and height are not separated by one space and terminated by `\n`.
    MissingSeparator,
    /// Dimensions fit neither layout.
    InvalidDimensions { width: u32, height: u32 },
    /// Pixel data length disagrees with the declared dimensions.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => f.write_str("font sheet too short"),
            Self::BadMagic => f.write_str("font sheet is not a P4 bitmap"),
            Self::HeaderOverrun => f.write_str("font header overruns scan window"),
            Self::MissingDimension => f.write_str("font header missing dimension"),
            Self::MissingSeparator => f.write_str("font header malformed separator"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "unsupported font sheet size {width}x{height}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "font pixel data is {actual} bytes, expected {expected}")
            }
        }
    }
}

/// Parsed P4 header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct SheetHeader {
    width: u32,
    height: u32,
    data_offset: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SheetLayout {
    Narrow,
    Wide,
}

/// Fixed-size bitmap font. Each glyph row is one byte, MSB = leftmost pixel.
#[derive(Clone, Eq, PartialEq)]
pub struct GlyphFont {
    width: u8,
    height: u8,
    rows: [u8; TABLE_BYTES],
}

impl fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphFont")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl GlyphFont {
    /// Decodes a font from a P4 sheet.
    ///
    /// Nothing is returned unless the whole sheet validates, so a caller
    /// holding an older font keeps it untouched on failure.
    pub fn from_pbm(pbm: &[u8]) -> Result<Self, FormatError> {
        let header = parse_header(pbm)?;
        let layout = validate(&header, pbm.len())?;
        let pixels = &pbm[header.data_offset..];

        let font = match layout {
            SheetLayout::Narrow => Self::from_narrow_sheet(&header, pixels),
            SheetLayout::Wide => Self::from_wide_sheet(&header, pixels),
        };

        debug!(
            "font: decoded {:?} sheet {}x{} -> glyph {}x{}",
            layout, header.width, header.height, font.width, font.height
        );
        Ok(font)
    }

    fn from_narrow_sheet(header: &SheetHeader, pixels: &[u8]) -> Self {
        let mut rows = [0u8; TABLE_BYTES];
        rows[..pixels.len()].copy_from_slice(pixels);

        Self {
            width: header.width as u8,
            height: (header.height / GLYPH_COUNT as u32) as u8,
            rows,
        }
    }

    fn from_wide_sheet(header: &SheetHeader, pixels: &[u8]) -> Self {
        let glyph_w = (header.width / GRID_CELLS) as usize;
        let glyph_h = (header.height / GRID_CELLS) as usize;
        let row_bytes = header.width as usize / 8;
        let mask = 0xFFu8 << (8 - glyph_w);
        let mut rows = [0u8; TABLE_BYTES];

        for (sheet_row, line) in pixels.chunks_exact(row_bytes).enumerate() {
            let cell_y = sheet_row / glyph_h;
            let glyph_row = sheet_row % glyph_h;

            for cell_x in 0..GRID_CELLS as usize {
                let bit = cell_x * glyph_w;
                let byte = bit / 8;
                let shift = bit % 8;
                let hi = line[byte] as u16;
                let lo = line.get(byte + 1).copied().unwrap_or(0) as u16;
                let bits = ((((hi << 8) | lo) << shift) >> 8) as u8 & mask;

                let code = cell_y * GRID_CELLS as usize + cell_x;
                rows[code * glyph_h + glyph_row] = bits;
            }
        }

        Self {
            width: glyph_w as u8,
            height: glyph_h as u8,
            rows,
        }
    }

    /// Glyph width in pixels.
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Glyph height in pixels.
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Vertical distance between successive text lines.
    pub fn line_height(&self) -> usize {
        (self.height as usize + 2).min(FONT_MAX_HEIGHT)
    }

    /// Number of glyphs in the table.
    pub fn glyph_count(&self) -> usize {
        GLYPH_COUNT
    }

    /// Row masks for `code`, top row first.
    pub fn glyph(&self, code: u8) -> &[u8] {
        let height = self.height as usize;
        let start = code as usize * height;
        &self.rows[start..start + height]
    }
}

fn parse_header(pbm: &[u8]) -> Result<SheetHeader, FormatError> {
    let window = &pbm[..pbm.len().min(HEADER_WINDOW)];
    if window.len() < MIN_ASSET_BYTES {
        return Err(FormatError::TooShort);
    }
    if !window.starts_with(MAGIC) {
        return Err(FormatError::BadMagic);
    }

    let mut cursor = MAGIC.len();
    while window.get(cursor) == Some(&b'#') {
        let line_end = window[cursor..]
            .iter()
            .position(|&b| b == b'\n')
            .ok_or(FormatError::HeaderOverrun)?;
        cursor += line_end + 1;
    }

    let width = parse_decimal(window, &mut cursor)?;
    expect_byte(window, &mut cursor, b' ')?;
    let height = parse_decimal(window, &mut cursor)?;
    expect_byte(window, &mut cursor, b'\n')?;

    Ok(SheetHeader {
        width,
        height,
        data_offset: cursor,
    })
}

fn parse_decimal(window: &[u8], cursor: &mut usize) -> Result<u32, FormatError> {
    let start = *cursor;
    let mut value = 0u32;

    while let Some(&byte) = window.get(*cursor) {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add((byte - b'0') as u32);
        *cursor += 1;
    }

    if *cursor >= window.len() {
        return Err(FormatError::HeaderOverrun);
    }
    if *cursor == start {
        return Err(FormatError::MissingDimension);
    }
    Ok(value)
}

/// Consumes `expected` and requires at least one byte to follow it in the window.
fn expect_byte(window: &[u8], cursor: &mut usize, expected: u8) -> Result<(), FormatError> {
    if window.get(*cursor) != Some(&expected) {
        return Err(FormatError::MissingSeparator);
    }
    *cursor += 1;

    if *cursor >= window.len() {
        return Err(FormatError::HeaderOverrun);
    }
    Ok(())
}

fn validate(header: &SheetHeader, total_len: usize) -> Result<SheetLayout, FormatError> {
    let SheetHeader {
        width,
        height,
        data_offset,
    } = *header;
    let invalid = FormatError::InvalidDimensions { width, height };
    let max_w = FONT_MAX_WIDTH as u32;
    let max_h = FONT_MAX_HEIGHT as u32;
    let actual = total_len - data_offset;

    let (layout, expected) = if width <= max_w {
        let glyphs = GLYPH_COUNT as u32;
        if width == 0 || height == 0 || height % glyphs != 0 || height / glyphs > max_h {
            return Err(invalid);
        }
        (SheetLayout::Narrow, height as usize)
    } else {
        if width % GRID_CELLS != 0
            || height % GRID_CELLS != 0
            || width / GRID_CELLS > max_w
            || height == 0
            || height / GRID_CELLS > max_h
        {
            return Err(invalid);
        }
        (SheetLayout::Wide, (width * height / 8) as usize)
    };

    if actual != expected {
        return Err(FormatError::LengthMismatch { expected, actual });
    }
    Ok(layout)
}

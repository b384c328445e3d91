//! Font rasterizer
//!
//! A [`FontManager`] binds one font to one output orientation and turns
//! characters and strings into [`OutputBitmap`]s.

use crate::{FontCatalog, FontError, FontInfo, OutputBitmap, RasterOrientation};

/// Rasterizer for one font in one orientation.
///
/// Immutable: selecting another font means building another manager.
#[derive(Debug, Clone, Copy)]
pub struct FontManager {
    font: &'static FontInfo,
    raster: RasterOrientation,
}

impl FontManager {
    /// Rasterizer for font `index` of `catalog`
    pub fn new(
        catalog: FontCatalog,
        index: usize,
        raster: RasterOrientation,
    ) -> Result<Self, FontError> {
        Self::from_font(catalog.get(index)?, raster)
    }

    /// Rasterizer for a font table, after checking its invariants
    pub fn from_font(font: &'static FontInfo, raster: RasterOrientation) -> Result<Self, FontError> {
        font.validate()?;
        Ok(Self { font, raster })
    }

    /// Font name, or the missing-name placeholder
    pub fn name(&self) -> &'static str {
        self.font.label()
    }

    /// Font table in use
    pub fn font(&self) -> &'static FontInfo {
        self.font
    }

    /// Glyph height in pixels
    pub fn height(&self) -> u8 {
        self.font.height
    }

    /// Blank columns after every glyph (the font's "C" value)
    pub fn advance_gap(&self) -> u8 {
        self.font.c
    }

    /// Output orientation
    pub fn raster(&self) -> RasterOrientation {
        self.raster
    }

    /// Width of `text` in pixels: glyph width plus gap for every byte,
    /// the last one included. Unknown codes measure as a space.
    pub fn measure(&self, text: &str) -> u16 {
        text.bytes().fold(0_u16, |width, code| {
            width.saturating_add(self.advance(code))
        })
    }

    /// Rasterize one character at sub-byte offset `bit_offset % 8`.
    ///
    /// The bitmap is sized to the glyph alone, without the trailing gap.
    pub fn rasterize_char(&self, code: u8, bit_offset: u16) -> Result<OutputBitmap, FontError> {
        let code = self.font.resolve(code);
        let width = self.glyph_width(code);
        let mut bitmap = OutputBitmap::new(
            self.raster,
            u16::from(width),
            u16::from(self.font.height),
            bit_offset,
        )?;
        self.place(code, &mut bitmap)?;
        Ok(bitmap)
    }

    /// Rasterize a string at sub-byte offset `bit_offset % 8`.
    ///
    /// The bitmap is [`measure`](Self::measure) pixels wide; an empty
    /// string gives a zero-width bitmap.
    pub fn rasterize(&self, text: &str, bit_offset: u16) -> Result<OutputBitmap, FontError> {
        let mut bitmap = OutputBitmap::new(
            self.raster,
            self.measure(text),
            u16::from(self.font.height),
            bit_offset,
        )?;
        for code in text.bytes() {
            self.place(self.font.resolve(code), &mut bitmap)?;
        }
        Ok(bitmap)
    }

    fn glyph_width(&self, code: u8) -> u8 {
        self.font.glyph(code).map_or(0, |glyph| glyph.width)
    }

    fn advance(&self, code: u8) -> u16 {
        let width = self.glyph_width(self.font.resolve(code));
        u16::from(width).saturating_add(u16::from(self.font.c))
    }

    /// OR one resolved glyph into `bitmap` at its cursor, then advance the
    /// cursor by the glyph width plus gap.
    fn place(&self, code: u8, bitmap: &mut OutputBitmap) -> Result<(), FontError> {
        let rows = self.font.glyph_rows(code)?;
        let width = self.glyph_width(code);
        let row_bytes = usize::from(width).div_ceil(8);

        if row_bytes > 0 {
            match bitmap.raster() {
                RasterOrientation::RowMajor => place_row_major(rows, row_bytes, width, bitmap),
                RasterOrientation::ColumnMajor => {
                    place_column_major(rows, row_bytes, width, bitmap);
                }
            }
        }

        bitmap.advance(self.advance(code));
        Ok(())
    }
}

/// Each source byte straddles at most two destination bytes: its high bits
/// shifted right into the cursor byte, its low bits shifted left into the
/// next one. Bits past `width` in a row's last source byte are masked off.
// Safety: shift = cursor % 8 < 8, so both shifts stay inside a u8;
// 1 <= width - 8 * (row_bytes - 1) <= 8 since row_bytes = ceil(width / 8) > 0
#[allow(clippy::arithmetic_side_effects)]
fn place_row_major(rows: &[u8], row_bytes: usize, width: u8, bitmap: &mut OutputBitmap) {
    let cursor = usize::from(bitmap.cursor());
    let base = cursor / 8;
    let shift = cursor % 8;
    let last = row_bytes - 1;
    let tail = usize::from(width) - 8 * last;
    let tail_mask = u8::MAX << (8 - tail);

    for (line, row) in rows.chunks_exact(row_bytes).enumerate() {
        for (chunk, &word) in row.iter().enumerate() {
            let word = if chunk == last { word & tail_mask } else { word };
            let col = base.saturating_add(chunk);
            bitmap.or_byte(col, line, word >> shift);
            if shift != 0 {
                bitmap.or_byte(col.saturating_add(1), line, word << (8 - shift));
            }
        }
    }
}

/// Source rows become bit positions and source columns become byte
/// indices: row `line` lands on bit `(line + offset) % 8` of page
/// `(line + offset) / 8`.
// Safety: col < width <= 8 * row_bytes, so col / 8 < row_bytes
#[allow(clippy::arithmetic_side_effects)]
fn place_column_major(rows: &[u8], row_bytes: usize, width: u8, bitmap: &mut OutputBitmap) {
    let cursor = usize::from(bitmap.cursor());
    let offset = usize::from(bitmap.offset());

    for (line, row) in rows.chunks_exact(row_bytes).enumerate() {
        let y = line + offset;
        let page = y / 8;
        let bit = 1_u8 << (y % 8);

        for col in 0..usize::from(width) {
            let set = row
                .get(col / 8)
                .is_some_and(|&word| word & (0x80 >> (col % 8)) != 0);
            if set {
                bitmap.or_byte(cursor.saturating_add(col), page, bit);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::GlyphDescriptor;

    // 4 rows tall: ' ' 2 wide, '!' a 10-wide box (2 bytes per row),
    // '"' zero width, '#' a 3-wide box
    static TINY: FontInfo = FontInfo {
        name: Some("Tiny"),
        height: 4,
        c: 1,
        char_start: 32,
        char_end: 35,
        descriptors: &[
            GlyphDescriptor::new(2, 0),
            GlyphDescriptor::new(10, 4),
            GlyphDescriptor::new(0, 0),
            GlyphDescriptor::new(3, 12),
        ],
        bitmap: &[
            0x00, 0x00, 0x00, 0x00, // ' '
            0xFF, 0xC0, 0x80, 0x40, 0x80, 0x40, 0xFF, 0xC0, // '!'
            0xE0, 0xA0, 0xA0, 0xE0, // '#'
        ],
    };

    fn manager(raster: RasterOrientation) -> FontManager {
        FontManager::from_font(&TINY, raster).unwrap()
    }

    #[test]
    fn test_accessors() {
        let font = manager(RasterOrientation::ColumnMajor);
        assert_eq!(font.name(), "Tiny");
        assert_eq!(font.height(), 4);
        assert_eq!(font.advance_gap(), 1);
        assert_eq!(font.raster(), RasterOrientation::ColumnMajor);
    }

    #[test]
    fn test_new_rejects_bad_index() {
        let err = FontManager::new(FontCatalog::builtin(), 7, RasterOrientation::RowMajor)
            .unwrap_err();
        assert_eq!(err, FontError::InvalidFontIndex { index: 7, count: 3 });
    }

    #[test]
    fn test_measure() {
        let font = manager(RasterOrientation::RowMajor);
        assert_eq!(font.measure(""), 0);
        assert_eq!(font.measure(" "), 3);
        assert_eq!(font.measure("#"), 4);
        // '"' has zero width: gap only
        assert_eq!(font.measure("\""), 1);
        // 'A' is out of range and measures as ' '
        assert_eq!(font.measure("A#"), 3 + 4);
    }

    #[test]
    fn test_row_major_byte_aligned() {
        let font = manager(RasterOrientation::RowMajor);
        let bm = font.rasterize_char(b'#', 0).unwrap();
        assert_eq!(bm.width_bytes(), 1);
        assert_eq!(bm.bytes(), &[0xE0, 0xA0, 0xA0, 0xE0]);
        assert_eq!(bm.cursor(), 4);
    }

    #[test]
    fn test_row_major_straddles_bytes() {
        let font = manager(RasterOrientation::RowMajor);
        // '#' at bit 6: 3 columns spill 1 column into the next byte
        let bm = font.rasterize_char(b'#', 6).unwrap();
        assert_eq!(bm.width_bytes(), 2);
        assert_eq!(
            bm.bytes(),
            &[0x03, 0x80, 0x02, 0x80, 0x02, 0x80, 0x03, 0x80]
        );
    }

    #[test]
    fn test_row_major_wide_glyph() {
        let font = manager(RasterOrientation::RowMajor);
        let bm = font.rasterize_char(b'!', 3).unwrap();
        // 3 + 10 bits = 2 bytes per row
        assert_eq!(bm.width_bytes(), 2);
        assert_eq!(bm.row(0), Some(&[0x1F, 0xF8][..]));
        assert_eq!(bm.row(1), Some(&[0x10, 0x08][..]));
        assert_eq!(bm.row(3), Some(&[0x1F, 0xF8][..]));
    }

    #[test]
    fn test_column_major_glyph() {
        let font = manager(RasterOrientation::ColumnMajor);
        let bm = font.rasterize_char(b'#', 0).unwrap();
        assert_eq!(bm.width_bytes(), 3);
        assert_eq!(bm.height_bytes(), 1);
        // Columns of a 3x4 box: full, top+bottom, full
        assert_eq!(bm.bytes(), &[0x0F, 0x09, 0x0F]);
    }

    #[test]
    fn test_column_major_offset_crosses_page() {
        let font = manager(RasterOrientation::ColumnMajor);
        let bm = font.rasterize_char(b'#', 6).unwrap();
        assert_eq!(bm.height_bytes(), 2);
        assert_eq!(bm.row(0), Some(&[0xC0, 0x40, 0xC0][..]));
        assert_eq!(bm.row(1), Some(&[0x03, 0x02, 0x03][..]));
    }

    #[test]
    fn test_column_major_wide_glyph_stops_at_width() {
        let font = manager(RasterOrientation::ColumnMajor);
        let bm = font.rasterize_char(b'!', 0).unwrap();
        assert_eq!(bm.width_bytes(), 10);
        assert_eq!(
            bm.bytes(),
            &[0x0F, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x0F]
        );
    }

    // Same shapes as TINY's ' ' and '!' but with every padding bit set
    static PADDED: FontInfo = FontInfo {
        name: Some("Padded"),
        height: 2,
        c: 1,
        char_start: 32,
        char_end: 33,
        descriptors: &[GlyphDescriptor::new(2, 0), GlyphDescriptor::new(1, 2)],
        bitmap: &[0x3F, 0x3F, 0xFF, 0x7F],
    };

    #[test]
    fn test_row_major_masks_padding_bits() {
        let font = FontManager::from_font(&PADDED, RasterOrientation::RowMajor).unwrap();
        // '!' is 1 column wide, ' ' 2 columns of nothing
        let bm = font.rasterize("! ", 0).unwrap();
        assert_eq!(bm.width_bytes(), 1);
        assert_eq!(bm.bytes(), &[0b1000_0000, 0b0000_0000]);

        // Shifted across a byte boundary the spill byte stays clean too
        // 7 padding bits + 2 columns: the bar on bit 7, nothing in byte 1
        let bm = font.rasterize("!", 7).unwrap();
        assert_eq!(bm.width_bytes(), 2);
        assert_eq!(bm.bytes(), &[0b0000_0001, 0, 0, 0]);
    }

    #[test]
    fn test_padding_bits_ignored_in_both_orientations() {
        let rows = FontManager::from_font(&PADDED, RasterOrientation::RowMajor).unwrap();
        let cols = FontManager::from_font(&PADDED, RasterOrientation::ColumnMajor).unwrap();
        let a = rows.rasterize("!! ", 0).unwrap();
        let b = cols.rasterize("!! ", 0).unwrap();
        for x in 0..rows.measure("!! ") {
            for y in 0..2 {
                assert_eq!(a.pixel(x, y), b.pixel(x, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_string_advances_cursor() {
        let font = manager(RasterOrientation::ColumnMajor);
        let bm = font.rasterize("##", 0).unwrap();
        assert_eq!(bm.width_bytes(), 8);
        assert_eq!(bm.cursor(), 8);
        assert_eq!(bm.bytes(), &[0x0F, 0x09, 0x0F, 0x00, 0x0F, 0x09, 0x0F, 0x00]);
    }

    #[test]
    fn test_zero_width_glyph() {
        let font = manager(RasterOrientation::ColumnMajor);
        let bm = font.rasterize_char(b'"', 0).unwrap();
        assert!(bm.is_empty());
        assert_eq!(bm.cursor(), 1);
    }

    #[test]
    fn test_empty_string() {
        for raster in [RasterOrientation::RowMajor, RasterOrientation::ColumnMajor] {
            let bm = manager(raster).rasterize("", 0).unwrap();
            assert_eq!(bm.bytes().iter().filter(|&&b| b != 0).count(), 0);
            assert_eq!(bm.cursor(), u16::from(bm.offset()));
        }
        for raster in [RasterOrientation::RowMajor, RasterOrientation::ColumnMajor] {
            let bm = manager(raster).rasterize("", 5).unwrap();
            assert!(bm.is_empty());
            assert_eq!(bm.width_bytes(), 0);
        }
    }

    #[test]
    fn test_too_long_for_capacity() {
        let font = FontManager::new(
            FontCatalog::builtin(),
            1,
            RasterOrientation::ColumnMajor,
        )
        .unwrap();
        // 65 mono glyphs x 8 columns x 2 pages = 1040 bytes
        let text = "M".repeat(65);
        assert_eq!(
            font.rasterize(&text, 0).unwrap_err(),
            FontError::OutOfMemory {
                requested: 1040,
                capacity: 1024
            }
        );
    }
}

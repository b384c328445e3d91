//! Rasterizer behaviour on hand-built and compiled-in fonts.

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::arithmetic_side_effects)]

use raster_font::{
    FontCatalog, FontError, FontInfo, FontManager, GlyphDescriptor, RasterOrientation,
    MISSING_FONT_NAME,
};

// ' ' is 3 blank columns, '!' a 1-column bar with a gap above the dot
const BANG_FONT: FontInfo = FontInfo {
    name: Some("Bang"),
    height: 8,
    c: 1,
    char_start: 32,
    char_end: 33,
    descriptors: &[GlyphDescriptor::new(3, 0), GlyphDescriptor::new(1, 8)],
    bitmap: &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
        0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x80, // '!'
    ],
};

static BANG: FontInfo = BANG_FONT;
static NAMELESS: FontInfo = FontInfo {
    name: None,
    ..BANG_FONT
};
static TABLE: [&FontInfo; 2] = [&BANG, &NAMELESS];
// Generator output with garbage in the unused low bits of every row
static BANG_DIRTY_PADDING: FontInfo = FontInfo {
    bitmap: &[
        0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, // ' '
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0xFF, // '!'
    ],
    ..BANG_FONT
};

fn builtin(index: usize, raster: RasterOrientation) -> FontManager {
    FontManager::new(FontCatalog::builtin(), index, raster).unwrap()
}

#[test]
fn bang_space_column_major() {
    let font = FontManager::from_font(&BANG, RasterOrientation::ColumnMajor).unwrap();
    let bm = font.rasterize("! ", 0).unwrap();

    // (1 + 1) + (3 + 1) columns, one page
    assert_eq!(bm.width_bytes(), 6);
    assert_eq!(bm.height_bytes(), 1);
    assert_eq!(bm.bytes(), &[0b1011_1111, 0, 0, 0, 0, 0]);
}

#[test]
fn bang_row_major_at_offset() {
    let font = FontManager::from_font(&BANG, RasterOrientation::RowMajor).unwrap();
    let bm = font.rasterize("!!", 5).unwrap();

    // 5 padding bits + 4 columns: bars at bits 5 and 7 of byte 0
    assert_eq!(bm.width_bytes(), 2);
    assert_eq!(bm.row(0), Some(&[0b0000_0101, 0][..]));
    assert_eq!(bm.row(6), Some(&[0, 0][..]));
    assert_eq!(bm.row(7), Some(&[0b0000_0101, 0][..]));
}

#[test]
fn padding_bits_never_reach_the_output() {
    let rows = FontManager::from_font(&BANG_DIRTY_PADDING, RasterOrientation::RowMajor).unwrap();
    let cols =
        FontManager::from_font(&BANG_DIRTY_PADDING, RasterOrientation::ColumnMajor).unwrap();
    let clean = FontManager::from_font(&BANG, RasterOrientation::RowMajor).unwrap();

    for offset in [0u16, 3, 7] {
        assert_eq!(
            rows.rasterize("! !", offset).unwrap(),
            clean.rasterize("! !", offset).unwrap(),
            "offset {offset}"
        );
    }

    let a = rows.rasterize("! ", 0).unwrap();
    let b = cols.rasterize("! ", 0).unwrap();
    assert_eq!(b.bytes(), &[0b1011_1111, 0, 0, 0, 0, 0]);
    for x in 0..6 {
        for y in 0..8 {
            assert_eq!(a.pixel(x, y), b.pixel(x, y), "({x}, {y})");
        }
    }
}

#[test]
fn catalog_over_custom_table() {
    let catalog = FontCatalog::new(&TABLE);
    assert_eq!(catalog.count(), 2);
    assert_eq!(catalog.list().collect::<Vec<_>>(), ["Bang", MISSING_FONT_NAME]);

    let font = FontManager::new(catalog, 1, RasterOrientation::ColumnMajor).unwrap();
    assert_eq!(font.name(), MISSING_FONT_NAME);
    assert_eq!(
        FontManager::new(catalog, 2, RasterOrientation::ColumnMajor).unwrap_err(),
        FontError::InvalidFontIndex { index: 2, count: 2 }
    );
}

#[test]
fn measure_two_spaces() {
    // gap 1, space 4 wide
    let font = builtin(0, RasterOrientation::ColumnMajor);
    assert_eq!(font.advance_gap(), 1);
    assert_eq!(font.font().glyph(b' ').unwrap().width, 4);
    assert_eq!(font.measure("  "), 10);
}

#[test]
fn measure_empty_for_every_font() {
    let catalog = FontCatalog::builtin();
    for index in 0..catalog.count() {
        assert_eq!(builtin(index, RasterOrientation::RowMajor).measure(""), 0);
    }
}

#[test]
fn measure_non_ascii_counts_bytes() {
    // 'é' is two UTF-8 bytes, each outside the range, each a space
    let font = builtin(0, RasterOrientation::RowMajor);
    assert_eq!(font.measure("é"), font.measure("  "));
}

#[test]
fn row_major_glyph_matches_source_rows() {
    let font = builtin(1, RasterOrientation::RowMajor);
    let bm = font.rasterize_char(b'A', 0).unwrap();
    assert_eq!(bm.bytes(), font.font().glyph_rows(b'A').unwrap());
}

#[test]
fn orientations_agree_pixel_for_pixel() {
    let catalog = FontCatalog::builtin();
    for index in 0..catalog.count() {
        let rows = builtin(index, RasterOrientation::RowMajor);
        let cols = builtin(index, RasterOrientation::ColumnMajor);
        for code in 32u8..=126 {
            for offset in [0u16, 3] {
                let a = rows.rasterize_char(code, offset).unwrap();
                let b = cols.rasterize_char(code, offset).unwrap();
                let width = rows.font().glyph(rows.font().resolve(code)).unwrap().width;
                for x in 0..u16::from(width) {
                    for y in 0..u16::from(rows.height()) {
                        assert_eq!(
                            a.pixel(x + offset, y),
                            b.pixel(x, y + offset),
                            "font {index} code {code} at ({x}, {y})"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn wide_digit_spans_two_source_bytes() {
    let font = builtin(2, RasterOrientation::ColumnMajor);
    let one = font.font().glyph(b'1').unwrap();
    assert!(one.width > 8);

    let bm = font.rasterize_char(b'1', 0).unwrap();
    assert_eq!(bm.width_bytes(), u16::from(one.width));
    assert_eq!(bm.height_bytes(), 4);
    // Serif foot of the doubled '1' reaches the last column
    assert!((0..32).any(|y| bm.pixel(u16::from(one.width) - 1, y)));
}

#[test]
fn clock_string_fits_one_frame() {
    let font = builtin(2, RasterOrientation::ColumnMajor);
    let bm = font.rasterize("12:45", 0).unwrap();
    assert!(bm.width_bytes() <= 128);
    assert_eq!(bm.bytes().len(), usize::from(bm.width_bytes()) * 4);
}

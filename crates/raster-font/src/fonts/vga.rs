//! Fonts derived from the IBM VGA 8x16 ROM face
//!
//! - `VGA 8x16`: blank columns trimmed from every glyph (space kept 4 wide)
//! - `VGA 8x16 Mono`: the untouched 8-column cells
//! - `VGA 16x32 Digits`: the trimmed glyphs for `' '..=':'` scaled 2x,
//!   2 source bytes per row for glyphs wider than 8 pixels

use super::{FontInfo, GlyphDescriptor};

/// Proportional 16-pixel font, printable ASCII
pub static VGA_8X16: FontInfo = FontInfo {
    name: Some("VGA 8x16"),
    height: 16,
    c: 1,
    char_start: 32,
    char_end: 126,
    descriptors: &VGA_8X16_DESCRIPTORS,
    bitmap: &VGA_8X16_BITMAP,
};

/// Fixed-pitch 16-pixel font, printable ASCII
pub static VGA_8X16_MONO: FontInfo = FontInfo {
    name: Some("VGA 8x16 Mono"),
    height: 16,
    c: 0,
    char_start: 32,
    char_end: 126,
    descriptors: &VGA_8X16_MONO_DESCRIPTORS,
    bitmap: &VGA_8X16_MONO_BITMAP,
};

/// Proportional 32-pixel font: space, punctuation, digits and colon
pub static VGA_16X32_DIGITS: FontInfo = FontInfo {
    name: Some("VGA 16x32 Digits"),
    height: 32,
    c: 2,
    char_start: 32,
    char_end: 58,
    descriptors: &VGA_16X32_DIGITS_DESCRIPTORS,
    bitmap: &VGA_16X32_DIGITS_BITMAP,
};

const VGA_8X16_DESCRIPTORS: [GlyphDescriptor; 95] = [
    GlyphDescriptor::new(4, 0), // ' '
    GlyphDescriptor::new(4, 16), // '!'
    GlyphDescriptor::new(6, 32), // '"'
    GlyphDescriptor::new(7, 48), // '#'
    GlyphDescriptor::new(7, 64), // '$'
    GlyphDescriptor::new(7, 80), // '%'
    GlyphDescriptor::new(7, 96), // '&'
    GlyphDescriptor::new(3, 112), // '\''
    GlyphDescriptor::new(4, 128), // '('
    GlyphDescriptor::new(4, 144), // ')'
    GlyphDescriptor::new(8, 160), // '*'
    GlyphDescriptor::new(6, 176), // '+'
    GlyphDescriptor::new(3, 192), // ','
    GlyphDescriptor::new(7, 208), // '-'
    GlyphDescriptor::new(2, 224), // '.'
    GlyphDescriptor::new(7, 240), // '/'
    GlyphDescriptor::new(8, 256), // '0'
    GlyphDescriptor::new(6, 272), // '1'
    GlyphDescriptor::new(7, 288), // '2'
    GlyphDescriptor::new(7, 304), // '3'
    GlyphDescriptor::new(7, 320), // '4'
    GlyphDescriptor::new(7, 336), // '5'
    GlyphDescriptor::new(7, 352), // '6'
    GlyphDescriptor::new(7, 368), // '7'
    GlyphDescriptor::new(7, 384), // '8'
    GlyphDescriptor::new(7, 400), // '9'
    GlyphDescriptor::new(2, 416), // ':'
    GlyphDescriptor::new(3, 432), // ';'
    GlyphDescriptor::new(6, 448), // '<'
    GlyphDescriptor::new(6, 464), // '='
    GlyphDescriptor::new(6, 480), // '>'
    GlyphDescriptor::new(7, 496), // '?'
    GlyphDescriptor::new(7, 512), // '@'
    GlyphDescriptor::new(7, 528), // 'A'
    GlyphDescriptor::new(7, 544), // 'B'
    GlyphDescriptor::new(7, 560), // 'C'
    GlyphDescriptor::new(7, 576), // 'D'
    GlyphDescriptor::new(7, 592), // 'E'
    GlyphDescriptor::new(7, 608), // 'F'
    GlyphDescriptor::new(7, 624), // 'G'
    GlyphDescriptor::new(7, 640), // 'H'
    GlyphDescriptor::new(4, 656), // 'I'
    GlyphDescriptor::new(7, 672), // 'J'
    GlyphDescriptor::new(7, 688), // 'K'
    GlyphDescriptor::new(7, 704), // 'L'
    GlyphDescriptor::new(8, 720), // 'M'
    GlyphDescriptor::new(7, 736), // 'N'
    GlyphDescriptor::new(7, 752), // 'O'
    GlyphDescriptor::new(7, 768), // 'P'
    GlyphDescriptor::new(7, 784), // 'Q'
    GlyphDescriptor::new(7, 800), // 'R'
    GlyphDescriptor::new(7, 816), // 'S'
    GlyphDescriptor::new(8, 832), // 'T'
    GlyphDescriptor::new(7, 848), // 'U'
    GlyphDescriptor::new(8, 864), // 'V'
    GlyphDescriptor::new(8, 880), // 'W'
    GlyphDescriptor::new(8, 896), // 'X'
    GlyphDescriptor::new(8, 912), // 'Y'
    GlyphDescriptor::new(7, 928), // 'Z'
    GlyphDescriptor::new(4, 944), // '['
    GlyphDescriptor::new(7, 960), // '\\'
    GlyphDescriptor::new(4, 976), // ']'
    GlyphDescriptor::new(7, 992), // '^'
    GlyphDescriptor::new(8, 1008), // '_'
    GlyphDescriptor::new(3, 1024), // '`'
    GlyphDescriptor::new(7, 1040), // 'a'
    GlyphDescriptor::new(7, 1056), // 'b'
    GlyphDescriptor::new(7, 1072), // 'c'
    GlyphDescriptor::new(7, 1088), // 'd'
    GlyphDescriptor::new(7, 1104), // 'e'
    GlyphDescriptor::new(6, 1120), // 'f'
    GlyphDescriptor::new(7, 1136), // 'g'
    GlyphDescriptor::new(7, 1152), // 'h'
    GlyphDescriptor::new(4, 1168), // 'i'
    GlyphDescriptor::new(6, 1184), // 'j'
    GlyphDescriptor::new(7, 1200), // 'k'
    GlyphDescriptor::new(4, 1216), // 'l'
    GlyphDescriptor::new(8, 1232), // 'm'
    GlyphDescriptor::new(7, 1248), // 'n'
    GlyphDescriptor::new(7, 1264), // 'o'
    GlyphDescriptor::new(7, 1280), // 'p'
    GlyphDescriptor::new(7, 1296), // 'q'
    GlyphDescriptor::new(7, 1312), // 'r'
    GlyphDescriptor::new(7, 1328), // 's'
    GlyphDescriptor::new(7, 1344), // 't'
    GlyphDescriptor::new(7, 1360), // 'u'
    GlyphDescriptor::new(8, 1376), // 'v'
    GlyphDescriptor::new(8, 1392), // 'w'
    GlyphDescriptor::new(8, 1408), // 'x'
    GlyphDescriptor::new(7, 1424), // 'y'
    GlyphDescriptor::new(7, 1440), // 'z'
    GlyphDescriptor::new(6, 1456), // '{'
    GlyphDescriptor::new(2, 1472), // '|'
    GlyphDescriptor::new(6, 1488), // '}'
    GlyphDescriptor::new(7, 1504), // '~'
];

const VGA_8X16_BITMAP: [u8; 1520] = [
    // 32: ' '
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 33: '!'
    0x00, 0x00, 0x60, 0xF0, 0xF0, 0xF0, 0x60, 0x60,
    0x60, 0x00, 0x60, 0x60, 0x00, 0x00, 0x00, 0x00,
    // 34: '"'
    0x00, 0xCC, 0xCC, 0xCC, 0x48, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 35: '#'
    0x00, 0x00, 0x00, 0x6C, 0x6C, 0xFE, 0x6C, 0x6C,
    0x6C, 0xFE, 0x6C, 0x6C, 0x00, 0x00, 0x00, 0x00,
    // 36: '$'
    0x18, 0x18, 0x7C, 0xC6, 0xC2, 0xC0, 0x7C, 0x06,
    0x06, 0x86, 0xC6, 0x7C, 0x18, 0x18, 0x00, 0x00,
    // 37: '%'
    0x00, 0x00, 0x00, 0x00, 0xC2, 0xC6, 0x0C, 0x18,
    0x30, 0x60, 0xC6, 0x86, 0x00, 0x00, 0x00, 0x00,
    // 38: '&'
    0x00, 0x00, 0x38, 0x6C, 0x6C, 0x38, 0x76, 0xDC,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // 39: '\''
    0x00, 0x60, 0x60, 0x60, 0xC0, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 40: '('
    0x00, 0x00, 0x30, 0x60, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0x60, 0x30, 0x00, 0x00, 0x00, 0x00,
    // 41: ')'
    0x00, 0x00, 0xC0, 0x60, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x60, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 42: '*'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x3C, 0xFF,
    0x3C, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 43: '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0xFC,
    0x30, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 44: ','
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x60, 0x60, 0x60, 0xC0, 0x00, 0x00, 0x00,
    // 45: '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 46: '.'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 47: '/'
    0x00, 0x00, 0x00, 0x00, 0x02, 0x06, 0x0C, 0x18,
    0x30, 0x60, 0xC0, 0x80, 0x00, 0x00, 0x00, 0x00,
    // 48: '0'
    0x00, 0x00, 0x3C, 0x66, 0xC3, 0xC3, 0xDB, 0xDB,
    0xC3, 0xC3, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 49: '1'
    0x00, 0x00, 0x30, 0x70, 0xF0, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x30, 0xFC, 0x00, 0x00, 0x00, 0x00,
    // 50: '2'
    0x00, 0x00, 0x7C, 0xC6, 0x06, 0x0C, 0x18, 0x30,
    0x60, 0xC0, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 51: '3'
    0x00, 0x00, 0x7C, 0xC6, 0x06, 0x06, 0x3C, 0x06,
    0x06, 0x06, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 52: '4'
    0x00, 0x00, 0x0C, 0x1C, 0x3C, 0x6C, 0xCC, 0xFE,
    0x0C, 0x0C, 0x0C, 0x1E, 0x00, 0x00, 0x00, 0x00,
    // 53: '5'
    0x00, 0x00, 0xFE, 0xC0, 0xC0, 0xC0, 0xFC, 0x06,
    0x06, 0x06, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 54: '6'
    0x00, 0x00, 0x38, 0x60, 0xC0, 0xC0, 0xFC, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 55: '7'
    0x00, 0x00, 0xFE, 0xC6, 0x06, 0x06, 0x0C, 0x18,
    0x30, 0x30, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00,
    // 56: '8'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 57: '9'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7E, 0x06,
    0x06, 0x06, 0x0C, 0x78, 0x00, 0x00, 0x00, 0x00,
    // 58: ':'
    0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0x00, 0x00,
    0x00, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 59: ';'
    0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x00,
    0x00, 0x60, 0x60, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 60: '<'
    0x00, 0x00, 0x00, 0x0C, 0x18, 0x30, 0x60, 0xC0,
    0x60, 0x30, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00,
    // 61: '='
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 62: '>'
    0x00, 0x00, 0x00, 0xC0, 0x60, 0x30, 0x18, 0x0C,
    0x18, 0x30, 0x60, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 63: '?'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0x0C, 0x18, 0x18,
    0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // 64: '@'
    0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xDE, 0xDE,
    0xDE, 0xDC, 0xC0, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 65: 'A'
    0x00, 0x00, 0x10, 0x38, 0x6C, 0xC6, 0xC6, 0xFE,
    0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // 66: 'B'
    0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x66,
    0x66, 0x66, 0x66, 0xFC, 0x00, 0x00, 0x00, 0x00,
    // 67: 'C'
    0x00, 0x00, 0x3C, 0x66, 0xC2, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC2, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 68: 'D'
    0x00, 0x00, 0xF8, 0x6C, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x6C, 0xF8, 0x00, 0x00, 0x00, 0x00,
    // 69: 'E'
    0x00, 0x00, 0xFE, 0x66, 0x62, 0x68, 0x78, 0x68,
    0x60, 0x62, 0x66, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 70: 'F'
    0x00, 0x00, 0xFE, 0x66, 0x62, 0x68, 0x78, 0x68,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 71: 'G'
    0x00, 0x00, 0x3C, 0x66, 0xC2, 0xC0, 0xC0, 0xDE,
    0xC6, 0xC6, 0x66, 0x3A, 0x00, 0x00, 0x00, 0x00,
    // 72: 'H'
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xFE, 0xC6,
    0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // 73: 'I'
    0x00, 0x00, 0xF0, 0x60, 0x60, 0x60, 0x60, 0x60,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 74: 'J'
    0x00, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C,
    0xCC, 0xCC, 0xCC, 0x78, 0x00, 0x00, 0x00, 0x00,
    // 75: 'K'
    0x00, 0x00, 0xE6, 0x66, 0x66, 0x6C, 0x78, 0x78,
    0x6C, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // 76: 'L'
    0x00, 0x00, 0xF0, 0x60, 0x60, 0x60, 0x60, 0x60,
    0x60, 0x62, 0x66, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 77: 'M'
    0x00, 0x00, 0xC3, 0xE7, 0xFF, 0xFF, 0xDB, 0xC3,
    0xC3, 0xC3, 0xC3, 0xC3, 0x00, 0x00, 0x00, 0x00,
    // 78: 'N'
    0x00, 0x00, 0xC6, 0xE6, 0xF6, 0xFE, 0xDE, 0xCE,
    0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // 79: 'O'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 80: 'P'
    0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x60,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 81: 'Q'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0xD6, 0xDE, 0x7C, 0x0C, 0x0E, 0x00, 0x00,
    // 82: 'R'
    0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x6C,
    0x66, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // 83: 'S'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0x60, 0x38, 0x0C,
    0x06, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 84: 'T'
    0x00, 0x00, 0xFF, 0xDB, 0x99, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 85: 'U'
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 86: 'V'
    0x00, 0x00, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3,
    0xC3, 0x66, 0x3C, 0x18, 0x00, 0x00, 0x00, 0x00,
    // 87: 'W'
    0x00, 0x00, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xDB,
    0xDB, 0xFF, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00,
    // 88: 'X'
    0x00, 0x00, 0xC3, 0xC3, 0x66, 0x3C, 0x18, 0x18,
    0x3C, 0x66, 0xC3, 0xC3, 0x00, 0x00, 0x00, 0x00,
    // 89: 'Y'
    0x00, 0x00, 0xC3, 0xC3, 0xC3, 0x66, 0x3C, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 90: 'Z'
    0x00, 0x00, 0xFE, 0xC6, 0x86, 0x0C, 0x18, 0x30,
    0x60, 0xC2, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 91: '['
    0x00, 0x00, 0xF0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 92: '\\'
    0x00, 0x00, 0x00, 0x80, 0xC0, 0xE0, 0x70, 0x38,
    0x1C, 0x0E, 0x06, 0x02, 0x00, 0x00, 0x00, 0x00,
    // 93: ']'
    0x00, 0x00, 0xF0, 0x30, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x30, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 94: '^'
    0x10, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 95: '_'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00,
    // 96: '`'
    0xC0, 0xC0, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 97: 'a'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x0C, 0x7C,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // 98: 'b'
    0x00, 0x00, 0xE0, 0x60, 0x60, 0x78, 0x6C, 0x66,
    0x66, 0x66, 0x66, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 99: 'c'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC0,
    0xC0, 0xC0, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 100: 'd'
    0x00, 0x00, 0x1C, 0x0C, 0x0C, 0x3C, 0x6C, 0xCC,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // 101: 'e'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xFE,
    0xC0, 0xC0, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 102: 'f'
    0x00, 0x00, 0x38, 0x6C, 0x64, 0x60, 0xF0, 0x60,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 103: 'g'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC,
    0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0xCC, 0x78, 0x00,
    // 104: 'h'
    0x00, 0x00, 0xE0, 0x60, 0x60, 0x6C, 0x76, 0x66,
    0x66, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // 105: 'i'
    0x00, 0x00, 0x60, 0x60, 0x00, 0xE0, 0x60, 0x60,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 106: 'j'
    0x00, 0x00, 0x0C, 0x0C, 0x00, 0x1C, 0x0C, 0x0C,
    0x0C, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78, 0x00,
    // 107: 'k'
    0x00, 0x00, 0xE0, 0x60, 0x60, 0x66, 0x6C, 0x78,
    0x78, 0x6C, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // 108: 'l'
    0x00, 0x00, 0xE0, 0x60, 0x60, 0x60, 0x60, 0x60,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 109: 'm'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xE6, 0xFF, 0xDB,
    0xDB, 0xDB, 0xDB, 0xDB, 0x00, 0x00, 0x00, 0x00,
    // 110: 'n'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00,
    // 111: 'o'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 112: 'p'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x7C, 0x60, 0x60, 0xF0, 0x00,
    // 113: 'q'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC,
    0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0x0C, 0x1E, 0x00,
    // 114: 'r'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x76, 0x66,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 115: 's'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0x60,
    0x38, 0x0C, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 116: 't'
    0x00, 0x00, 0x10, 0x30, 0x30, 0xFC, 0x30, 0x30,
    0x30, 0x30, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00,
    // 117: 'u'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xCC, 0xCC, 0xCC,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // 118: 'v'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC3, 0xC3, 0xC3,
    0xC3, 0x66, 0x3C, 0x18, 0x00, 0x00, 0x00, 0x00,
    // 119: 'w'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC3, 0xC3, 0xC3,
    0xDB, 0xDB, 0xFF, 0x66, 0x00, 0x00, 0x00, 0x00,
    // 120: 'x'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC3, 0x66, 0x3C,
    0x18, 0x3C, 0x66, 0xC3, 0x00, 0x00, 0x00, 0x00,
    // 121: 'y'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7E, 0x06, 0x0C, 0xF8, 0x00,
    // 122: 'z'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0xCC, 0x18,
    0x30, 0x60, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 123: '{'
    0x00, 0x00, 0x1C, 0x30, 0x30, 0x30, 0xE0, 0x30,
    0x30, 0x30, 0x30, 0x1C, 0x00, 0x00, 0x00, 0x00,
    // 124: '|'
    0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 125: '}'
    0x00, 0x00, 0xE0, 0x30, 0x30, 0x30, 0x1C, 0x30,
    0x30, 0x30, 0x30, 0xE0, 0x00, 0x00, 0x00, 0x00,
    // 126: '~'
    0x00, 0x00, 0x76, 0xDC, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const VGA_8X16_MONO_DESCRIPTORS: [GlyphDescriptor; 95] = [
    GlyphDescriptor::new(8, 0), // ' '
    GlyphDescriptor::new(8, 16), // '!'
    GlyphDescriptor::new(8, 32), // '"'
    GlyphDescriptor::new(8, 48), // '#'
    GlyphDescriptor::new(8, 64), // '$'
    GlyphDescriptor::new(8, 80), // '%'
    GlyphDescriptor::new(8, 96), // '&'
    GlyphDescriptor::new(8, 112), // '\''
    GlyphDescriptor::new(8, 128), // '('
    GlyphDescriptor::new(8, 144), // ')'
    GlyphDescriptor::new(8, 160), // '*'
    GlyphDescriptor::new(8, 176), // '+'
    GlyphDescriptor::new(8, 192), // ','
    GlyphDescriptor::new(8, 208), // '-'
    GlyphDescriptor::new(8, 224), // '.'
    GlyphDescriptor::new(8, 240), // '/'
    GlyphDescriptor::new(8, 256), // '0'
    GlyphDescriptor::new(8, 272), // '1'
    GlyphDescriptor::new(8, 288), // '2'
    GlyphDescriptor::new(8, 304), // '3'
    GlyphDescriptor::new(8, 320), // '4'
    GlyphDescriptor::new(8, 336), // '5'
    GlyphDescriptor::new(8, 352), // '6'
    GlyphDescriptor::new(8, 368), // '7'
    GlyphDescriptor::new(8, 384), // '8'
    GlyphDescriptor::new(8, 400), // '9'
    GlyphDescriptor::new(8, 416), // ':'
    GlyphDescriptor::new(8, 432), // ';'
    GlyphDescriptor::new(8, 448), // '<'
    GlyphDescriptor::new(8, 464), // '='
    GlyphDescriptor::new(8, 480), // '>'
    GlyphDescriptor::new(8, 496), // '?'
    GlyphDescriptor::new(8, 512), // '@'
    GlyphDescriptor::new(8, 528), // 'A'
    GlyphDescriptor::new(8, 544), // 'B'
    GlyphDescriptor::new(8, 560), // 'C'
    GlyphDescriptor::new(8, 576), // 'D'
    GlyphDescriptor::new(8, 592), // 'E'
    GlyphDescriptor::new(8, 608), // 'F'
    GlyphDescriptor::new(8, 624), // 'G'
    GlyphDescriptor::new(8, 640), // 'H'
    GlyphDescriptor::new(8, 656), // 'I'
    GlyphDescriptor::new(8, 672), // 'J'
    GlyphDescriptor::new(8, 688), // 'K'
    GlyphDescriptor::new(8, 704), // 'L'
    GlyphDescriptor::new(8, 720), // 'M'
    GlyphDescriptor::new(8, 736), // 'N'
    GlyphDescriptor::new(8, 752), // 'O'
    GlyphDescriptor::new(8, 768), // 'P'
    GlyphDescriptor::new(8, 784), // 'Q'
    GlyphDescriptor::new(8, 800), // 'R'
    GlyphDescriptor::new(8, 816), // 'S'
    GlyphDescriptor::new(8, 832), // 'T'
    GlyphDescriptor::new(8, 848), // 'U'
    GlyphDescriptor::new(8, 864), // 'V'
    GlyphDescriptor::new(8, 880), // 'W'
    GlyphDescriptor::new(8, 896), // 'X'
    GlyphDescriptor::new(8, 912), // 'Y'
    GlyphDescriptor::new(8, 928), // 'Z'
    GlyphDescriptor::new(8, 944), // '['
    GlyphDescriptor::new(8, 960), // '\\'
    GlyphDescriptor::new(8, 976), // ']'
    GlyphDescriptor::new(8, 992), // '^'
    GlyphDescriptor::new(8, 1008), // '_'
    GlyphDescriptor::new(8, 1024), // '`'
    GlyphDescriptor::new(8, 1040), // 'a'
    GlyphDescriptor::new(8, 1056), // 'b'
    GlyphDescriptor::new(8, 1072), // 'c'
    GlyphDescriptor::new(8, 1088), // 'd'
    GlyphDescriptor::new(8, 1104), // 'e'
    GlyphDescriptor::new(8, 1120), // 'f'
    GlyphDescriptor::new(8, 1136), // 'g'
    GlyphDescriptor::new(8, 1152), // 'h'
    GlyphDescriptor::new(8, 1168), // 'i'
    GlyphDescriptor::new(8, 1184), // 'j'
    GlyphDescriptor::new(8, 1200), // 'k'
    GlyphDescriptor::new(8, 1216), // 'l'
    GlyphDescriptor::new(8, 1232), // 'm'
    GlyphDescriptor::new(8, 1248), // 'n'
    GlyphDescriptor::new(8, 1264), // 'o'
    GlyphDescriptor::new(8, 1280), // 'p'
    GlyphDescriptor::new(8, 1296), // 'q'
    GlyphDescriptor::new(8, 1312), // 'r'
    GlyphDescriptor::new(8, 1328), // 's'
    GlyphDescriptor::new(8, 1344), // 't'
    GlyphDescriptor::new(8, 1360), // 'u'
    GlyphDescriptor::new(8, 1376), // 'v'
    GlyphDescriptor::new(8, 1392), // 'w'
    GlyphDescriptor::new(8, 1408), // 'x'
    GlyphDescriptor::new(8, 1424), // 'y'
    GlyphDescriptor::new(8, 1440), // 'z'
    GlyphDescriptor::new(8, 1456), // '{'
    GlyphDescriptor::new(8, 1472), // '|'
    GlyphDescriptor::new(8, 1488), // '}'
    GlyphDescriptor::new(8, 1504), // '~'
];

const VGA_8X16_MONO_BITMAP: [u8; 1520] = [
    // 32: ' '
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 33: '!'
    0x00, 0x00, 0x18, 0x3C, 0x3C, 0x3C, 0x18, 0x18,
    0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // 34: '"'
    0x00, 0x66, 0x66, 0x66, 0x24, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 35: '#'
    0x00, 0x00, 0x00, 0x6C, 0x6C, 0xFE, 0x6C, 0x6C,
    0x6C, 0xFE, 0x6C, 0x6C, 0x00, 0x00, 0x00, 0x00,
    // 36: '$'
    0x18, 0x18, 0x7C, 0xC6, 0xC2, 0xC0, 0x7C, 0x06,
    0x06, 0x86, 0xC6, 0x7C, 0x18, 0x18, 0x00, 0x00,
    // 37: '%'
    0x00, 0x00, 0x00, 0x00, 0xC2, 0xC6, 0x0C, 0x18,
    0x30, 0x60, 0xC6, 0x86, 0x00, 0x00, 0x00, 0x00,
    // 38: '&'
    0x00, 0x00, 0x38, 0x6C, 0x6C, 0x38, 0x76, 0xDC,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // 39: '\''
    0x00, 0x30, 0x30, 0x30, 0x60, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 40: '('
    0x00, 0x00, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00,
    // 41: ')'
    0x00, 0x00, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x0C,
    0x0C, 0x0C, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00,
    // 42: '*'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x3C, 0xFF,
    0x3C, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 43: '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x7E,
    0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 44: ','
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x18, 0x18, 0x18, 0x30, 0x00, 0x00, 0x00,
    // 45: '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 46: '.'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // 47: '/'
    0x00, 0x00, 0x00, 0x00, 0x02, 0x06, 0x0C, 0x18,
    0x30, 0x60, 0xC0, 0x80, 0x00, 0x00, 0x00, 0x00,
    // 48: '0'
    0x00, 0x00, 0x3C, 0x66, 0xC3, 0xC3, 0xDB, 0xDB,
    0xC3, 0xC3, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 49: '1'
    0x00, 0x00, 0x18, 0x38, 0x78, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, 0x00, 0x00,
    // 50: '2'
    0x00, 0x00, 0x7C, 0xC6, 0x06, 0x0C, 0x18, 0x30,
    0x60, 0xC0, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 51: '3'
    0x00, 0x00, 0x7C, 0xC6, 0x06, 0x06, 0x3C, 0x06,
    0x06, 0x06, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 52: '4'
    0x00, 0x00, 0x0C, 0x1C, 0x3C, 0x6C, 0xCC, 0xFE,
    0x0C, 0x0C, 0x0C, 0x1E, 0x00, 0x00, 0x00, 0x00,
    // 53: '5'
    0x00, 0x00, 0xFE, 0xC0, 0xC0, 0xC0, 0xFC, 0x06,
    0x06, 0x06, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 54: '6'
    0x00, 0x00, 0x38, 0x60, 0xC0, 0xC0, 0xFC, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 55: '7'
    0x00, 0x00, 0xFE, 0xC6, 0x06, 0x06, 0x0C, 0x18,
    0x30, 0x30, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00,
    // 56: '8'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 57: '9'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7E, 0x06,
    0x06, 0x06, 0x0C, 0x78, 0x00, 0x00, 0x00, 0x00,
    // 58: ':'
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
    0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 59: ';'
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
    0x00, 0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00,
    // 60: '<'
    0x00, 0x00, 0x00, 0x06, 0x0C, 0x18, 0x30, 0x60,
    0x30, 0x18, 0x0C, 0x06, 0x00, 0x00, 0x00, 0x00,
    // 61: '='
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 62: '>'
    0x00, 0x00, 0x00, 0x60, 0x30, 0x18, 0x0C, 0x06,
    0x0C, 0x18, 0x30, 0x60, 0x00, 0x00, 0x00, 0x00,
    // 63: '?'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0x0C, 0x18, 0x18,
    0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // 64: '@'
    0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xDE, 0xDE,
    0xDE, 0xDC, 0xC0, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 65: 'A'
    0x00, 0x00, 0x10, 0x38, 0x6C, 0xC6, 0xC6, 0xFE,
    0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // 66: 'B'
    0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x66,
    0x66, 0x66, 0x66, 0xFC, 0x00, 0x00, 0x00, 0x00,
    // 67: 'C'
    0x00, 0x00, 0x3C, 0x66, 0xC2, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC2, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 68: 'D'
    0x00, 0x00, 0xF8, 0x6C, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x6C, 0xF8, 0x00, 0x00, 0x00, 0x00,
    // 69: 'E'
    0x00, 0x00, 0xFE, 0x66, 0x62, 0x68, 0x78, 0x68,
    0x60, 0x62, 0x66, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 70: 'F'
    0x00, 0x00, 0xFE, 0x66, 0x62, 0x68, 0x78, 0x68,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 71: 'G'
    0x00, 0x00, 0x3C, 0x66, 0xC2, 0xC0, 0xC0, 0xDE,
    0xC6, 0xC6, 0x66, 0x3A, 0x00, 0x00, 0x00, 0x00,
    // 72: 'H'
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xFE, 0xC6,
    0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // 73: 'I'
    0x00, 0x00, 0x3C, 0x18, 0x18, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 74: 'J'
    0x00, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C,
    0xCC, 0xCC, 0xCC, 0x78, 0x00, 0x00, 0x00, 0x00,
    // 75: 'K'
    0x00, 0x00, 0xE6, 0x66, 0x66, 0x6C, 0x78, 0x78,
    0x6C, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // 76: 'L'
    0x00, 0x00, 0xF0, 0x60, 0x60, 0x60, 0x60, 0x60,
    0x60, 0x62, 0x66, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 77: 'M'
    0x00, 0x00, 0xC3, 0xE7, 0xFF, 0xFF, 0xDB, 0xC3,
    0xC3, 0xC3, 0xC3, 0xC3, 0x00, 0x00, 0x00, 0x00,
    // 78: 'N'
    0x00, 0x00, 0xC6, 0xE6, 0xF6, 0xFE, 0xDE, 0xCE,
    0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // 79: 'O'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 80: 'P'
    0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x60,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 81: 'Q'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0xD6, 0xDE, 0x7C, 0x0C, 0x0E, 0x00, 0x00,
    // 82: 'R'
    0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x6C,
    0x66, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // 83: 'S'
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0x60, 0x38, 0x0C,
    0x06, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 84: 'T'
    0x00, 0x00, 0xFF, 0xDB, 0x99, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 85: 'U'
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 86: 'V'
    0x00, 0x00, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3,
    0xC3, 0x66, 0x3C, 0x18, 0x00, 0x00, 0x00, 0x00,
    // 87: 'W'
    0x00, 0x00, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xDB,
    0xDB, 0xFF, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00,
    // 88: 'X'
    0x00, 0x00, 0xC3, 0xC3, 0x66, 0x3C, 0x18, 0x18,
    0x3C, 0x66, 0xC3, 0xC3, 0x00, 0x00, 0x00, 0x00,
    // 89: 'Y'
    0x00, 0x00, 0xC3, 0xC3, 0xC3, 0x66, 0x3C, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 90: 'Z'
    0x00, 0x00, 0xFE, 0xC6, 0x86, 0x0C, 0x18, 0x30,
    0x60, 0xC2, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 91: '['
    0x00, 0x00, 0x3C, 0x30, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x30, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 92: '\\'
    0x00, 0x00, 0x00, 0x80, 0xC0, 0xE0, 0x70, 0x38,
    0x1C, 0x0E, 0x06, 0x02, 0x00, 0x00, 0x00, 0x00,
    // 93: ']'
    0x00, 0x00, 0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C,
    0x0C, 0x0C, 0x0C, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 94: '^'
    0x10, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 95: '_'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00,
    // 96: '`'
    0x30, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 97: 'a'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x0C, 0x7C,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // 98: 'b'
    0x00, 0x00, 0xE0, 0x60, 0x60, 0x78, 0x6C, 0x66,
    0x66, 0x66, 0x66, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 99: 'c'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC0,
    0xC0, 0xC0, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 100: 'd'
    0x00, 0x00, 0x1C, 0x0C, 0x0C, 0x3C, 0x6C, 0xCC,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // 101: 'e'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xFE,
    0xC0, 0xC0, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 102: 'f'
    0x00, 0x00, 0x38, 0x6C, 0x64, 0x60, 0xF0, 0x60,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 103: 'g'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC,
    0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0xCC, 0x78, 0x00,
    // 104: 'h'
    0x00, 0x00, 0xE0, 0x60, 0x60, 0x6C, 0x76, 0x66,
    0x66, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // 105: 'i'
    0x00, 0x00, 0x18, 0x18, 0x00, 0x38, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 106: 'j'
    0x00, 0x00, 0x06, 0x06, 0x00, 0x0E, 0x06, 0x06,
    0x06, 0x06, 0x06, 0x06, 0x66, 0x66, 0x3C, 0x00,
    // 107: 'k'
    0x00, 0x00, 0xE0, 0x60, 0x60, 0x66, 0x6C, 0x78,
    0x78, 0x6C, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // 108: 'l'
    0x00, 0x00, 0x38, 0x18, 0x18, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // 109: 'm'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xE6, 0xFF, 0xDB,
    0xDB, 0xDB, 0xDB, 0xDB, 0x00, 0x00, 0x00, 0x00,
    // 110: 'n'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00,
    // 111: 'o'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 112: 'p'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x7C, 0x60, 0x60, 0xF0, 0x00,
    // 113: 'q'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC,
    0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0x0C, 0x1E, 0x00,
    // 114: 'r'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x76, 0x66,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // 115: 's'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0x60,
    0x38, 0x0C, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 116: 't'
    0x00, 0x00, 0x10, 0x30, 0x30, 0xFC, 0x30, 0x30,
    0x30, 0x30, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00,
    // 117: 'u'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xCC, 0xCC, 0xCC,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // 118: 'v'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC3, 0xC3, 0xC3,
    0xC3, 0x66, 0x3C, 0x18, 0x00, 0x00, 0x00, 0x00,
    // 119: 'w'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC3, 0xC3, 0xC3,
    0xDB, 0xDB, 0xFF, 0x66, 0x00, 0x00, 0x00, 0x00,
    // 120: 'x'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC3, 0x66, 0x3C,
    0x18, 0x3C, 0x66, 0xC3, 0x00, 0x00, 0x00, 0x00,
    // 121: 'y'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7E, 0x06, 0x0C, 0xF8, 0x00,
    // 122: 'z'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0xCC, 0x18,
    0x30, 0x60, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 123: '{'
    0x00, 0x00, 0x0E, 0x18, 0x18, 0x18, 0x70, 0x18,
    0x18, 0x18, 0x18, 0x0E, 0x00, 0x00, 0x00, 0x00,
    // 124: '|'
    0x00, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18,
    0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // 125: '}'
    0x00, 0x00, 0x70, 0x18, 0x18, 0x18, 0x0E, 0x18,
    0x18, 0x18, 0x18, 0x70, 0x00, 0x00, 0x00, 0x00,
    // 126: '~'
    0x00, 0x00, 0x76, 0xDC, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const VGA_16X32_DIGITS_DESCRIPTORS: [GlyphDescriptor; 27] = [
    GlyphDescriptor::new(8, 0), // ' '
    GlyphDescriptor::new(8, 32), // '!'
    GlyphDescriptor::new(12, 64), // '"'
    GlyphDescriptor::new(14, 128), // '#'
    GlyphDescriptor::new(14, 192), // '$'
    GlyphDescriptor::new(14, 256), // '%'
    GlyphDescriptor::new(14, 320), // '&'
    GlyphDescriptor::new(6, 384), // '\''
    GlyphDescriptor::new(8, 416), // '('
    GlyphDescriptor::new(8, 448), // ')'
    GlyphDescriptor::new(16, 480), // '*'
    GlyphDescriptor::new(12, 544), // '+'
    GlyphDescriptor::new(6, 608), // ','
    GlyphDescriptor::new(14, 640), // '-'
    GlyphDescriptor::new(4, 704), // '.'
    GlyphDescriptor::new(14, 736), // '/'
    GlyphDescriptor::new(16, 800), // '0'
    GlyphDescriptor::new(12, 864), // '1'
    GlyphDescriptor::new(14, 928), // '2'
    GlyphDescriptor::new(14, 992), // '3'
    GlyphDescriptor::new(14, 1056), // '4'
    GlyphDescriptor::new(14, 1120), // '5'
    GlyphDescriptor::new(14, 1184), // '6'
    GlyphDescriptor::new(14, 1248), // '7'
    GlyphDescriptor::new(14, 1312), // '8'
    GlyphDescriptor::new(14, 1376), // '9'
    GlyphDescriptor::new(4, 1440), // ':'
];

const VGA_16X32_DIGITS_BITMAP: [u8; 1472] = [
    // 32: ' '
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 33: '!'
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x3C, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x3C, 0x3C, 0x3C, 0x3C,
    0x3C, 0x3C, 0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 34: '"'
    0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0,
    0x30, 0xC0, 0x30, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 35: '#'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3C, 0xF0, 0x3C, 0xF0,
    0x3C, 0xF0, 0x3C, 0xF0, 0xFF, 0xFC, 0xFF, 0xFC, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0,
    0x3C, 0xF0, 0x3C, 0xF0, 0xFF, 0xFC, 0xFF, 0xFC, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 36: '$'
    0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x3F, 0xF0, 0x3F, 0xF0, 0xF0, 0x3C, 0xF0, 0x3C,
    0xF0, 0x0C, 0xF0, 0x0C, 0xF0, 0x00, 0xF0, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x3C, 0x00, 0x3C,
    0x00, 0x3C, 0x00, 0x3C, 0xC0, 0x3C, 0xC0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0x3F, 0xF0, 0x3F, 0xF0,
    0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 37: '%'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0x0C, 0xF0, 0x0C, 0xF0, 0x3C, 0xF0, 0x3C, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xC0, 0x03, 0xC0,
    0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xF0, 0x3C, 0xF0, 0x3C, 0xC0, 0x3C, 0xC0, 0x3C,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 38: '&'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xC0, 0x0F, 0xC0, 0x3C, 0xF0, 0x3C, 0xF0,
    0x3C, 0xF0, 0x3C, 0xF0, 0x0F, 0xC0, 0x0F, 0xC0, 0x3F, 0x3C, 0x3F, 0x3C, 0xF3, 0xF0, 0xF3, 0xF0,
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x3F, 0x3C, 0x3F, 0x3C,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 39: '\''
    0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 40: '('
    0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x3C, 0x3C, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0,
    0xF0, 0xF0, 0xF0, 0xF0, 0x3C, 0x3C, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 41: ')'
    0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0x3C, 0x3C, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F,
    0x0F, 0x0F, 0x0F, 0x0F, 0x3C, 0x3C, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 42: '*'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x0F, 0xF0, 0x0F, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF,
    0x0F, 0xF0, 0x0F, 0xF0, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 43: '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0xFF, 0xF0, 0xFF, 0xF0,
    0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 44: ','
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 45: '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFC, 0xFF, 0xFC,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 46: '.'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 47: '/'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x0C, 0x00, 0x0C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xC0, 0x03, 0xC0,
    0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 48: '0'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xF0, 0x0F, 0xF0, 0x3C, 0x3C, 0x3C, 0x3C,
    0xF0, 0x0F, 0xF0, 0x0F, 0xF0, 0x0F, 0xF0, 0x0F, 0xF3, 0xCF, 0xF3, 0xCF, 0xF3, 0xCF, 0xF3, 0xCF,
    0xF0, 0x0F, 0xF0, 0x0F, 0xF0, 0x0F, 0xF0, 0x0F, 0x3C, 0x3C, 0x3C, 0x3C, 0x0F, 0xF0, 0x0F, 0xF0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 49: '1'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x3F, 0x00, 0x3F, 0x00,
    0xFF, 0x00, 0xFF, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00,
    0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0xFF, 0xF0, 0xFF, 0xF0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 50: '2'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0xF0, 0x3C, 0xF0, 0x3C,
    0x00, 0x3C, 0x00, 0x3C, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x3C, 0xF0, 0x3C, 0xFF, 0xFC, 0xFF, 0xFC,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 51: '3'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0xF0, 0x3C, 0xF0, 0x3C,
    0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x0F, 0xF0, 0x0F, 0xF0, 0x00, 0x3C, 0x00, 0x3C,
    0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0x3F, 0xF0, 0x3F, 0xF0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 52: '4'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xF0, 0x03, 0xF0,
    0x0F, 0xF0, 0x0F, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xFC, 0xFF, 0xFC,
    0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xFC, 0x03, 0xFC,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 53: '5'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFC, 0xFF, 0xFC, 0xF0, 0x00, 0xF0, 0x00,
    0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0x3C, 0x00, 0x3C,
    0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0x3F, 0xF0, 0x3F, 0xF0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 54: '6'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xC0, 0x0F, 0xC0, 0x3C, 0x00, 0x3C, 0x00,
    0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xFF, 0xF0, 0xFF, 0xF0, 0xF0, 0x3C, 0xF0, 0x3C,
    0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0x3F, 0xF0, 0x3F, 0xF0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 55: '7'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFC, 0xFF, 0xFC, 0xF0, 0x3C, 0xF0, 0x3C,
    0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xC0, 0x03, 0xC0,
    0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 56: '8'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0xF0, 0x3C, 0xF0, 0x3C,
    0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0x3F, 0xF0, 0x3F, 0xF0, 0xF0, 0x3C, 0xF0, 0x3C,
    0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0x3F, 0xF0, 0x3F, 0xF0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 57: '9'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0xF0, 0x3C, 0xF0, 0x3C,
    0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0x3F, 0xFC, 0x3F, 0xFC, 0x00, 0x3C, 0x00, 0x3C,
    0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xF0, 0x00, 0xF0, 0x3F, 0xC0, 0x3F, 0xC0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 58: ':'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

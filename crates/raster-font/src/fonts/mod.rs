//! Compiled-in font catalog
//!
//! Fonts are immutable `'static` tables in the format produced by
//! dot-factory style generators: one [`GlyphDescriptor`] per character code
//! plus a shared blob of glyph rows. Each glyph row is `ceil(width / 8)`
//! bytes, most significant bit leftmost, with unused trailing bits zero.

mod vga;

pub use vga::{VGA_16X32_DIGITS, VGA_8X16, VGA_8X16_MONO};

use crate::{FontError, MISSING_FONT_NAME};

/// Width and blob position of one glyph.
///
/// Offsets are explicit per glyph, never derived from the layout: the row
/// byte count varies with width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphDescriptor {
    /// Glyph width in pixels, not counting the advance gap
    pub width: u8,
    /// Byte offset of the glyph's first row in the font bitmap
    pub offset: u16,
}

impl GlyphDescriptor {
    /// Create a glyph descriptor
    pub const fn new(width: u8, offset: u16) -> Self {
        Self { width, offset }
    }

    /// Source bytes per scan row
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }
}

/// Static description of one font.
///
/// Every glyph shares `height`; widths vary per glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontInfo {
    /// Display label, if the font carries one
    pub name: Option<&'static str>,
    /// Scan lines per glyph
    pub height: u8,
    /// "C" value: blank columns inserted after every glyph
    pub c: u8,
    /// First character code covered
    pub char_start: u8,
    /// Last character code covered (inclusive)
    pub char_end: u8,
    /// One descriptor per code in `char_start..=char_end`
    pub descriptors: &'static [GlyphDescriptor],
    /// Packed glyph rows
    pub bitmap: &'static [u8],
}

impl FontInfo {
    /// Font name, or the missing-name placeholder
    pub fn label(&self) -> &'static str {
        self.name.unwrap_or(MISSING_FONT_NAME)
    }

    /// True when `code` has its own glyph
    pub fn contains(&self, code: u8) -> bool {
        (self.char_start..=self.char_end).contains(&code)
    }

    /// Map a character code to the code actually drawn: codes outside the
    /// font's range become a space.
    pub fn resolve(&self, code: u8) -> u8 {
        if self.contains(code) {
            code
        } else {
            b' '
        }
    }

    /// Descriptor for `code`, without substitution
    pub fn glyph(&self, code: u8) -> Option<GlyphDescriptor> {
        let index = code.checked_sub(self.char_start)?;
        if !self.contains(code) {
            return None;
        }
        self.descriptors.get(usize::from(index)).copied()
    }

    /// Packed rows of `code`'s glyph, bounds-checked against the blob
    pub fn glyph_rows(&self, code: u8) -> Result<&'static [u8], FontError> {
        let glyph = self.glyph(code).ok_or(FontError::GlyphOutOfBounds { code })?;
        let start = usize::from(glyph.offset);
        let len = glyph
            .row_bytes()
            .checked_mul(usize::from(self.height))
            .ok_or(FontError::GlyphOutOfBounds { code })?;
        start
            .checked_add(len)
            .and_then(|end| self.bitmap.get(start..end))
            .ok_or(FontError::GlyphOutOfBounds { code })
    }

    /// Check the table invariants the rasterizer relies on: one descriptor
    /// per code, every glyph inside the blob, and a space glyph in range.
    pub fn validate(&self) -> Result<(), FontError> {
        let expected = usize::from(self.char_end)
            .checked_sub(usize::from(self.char_start))
            .map_or(0, |span| span.saturating_add(1));
        if expected == 0 || self.descriptors.len() != expected {
            return Err(FontError::DescriptorCount {
                expected,
                actual: self.descriptors.len(),
            });
        }
        if !self.contains(b' ') {
            return Err(FontError::MissingSpaceGlyph);
        }
        for code in self.char_start..=self.char_end {
            self.glyph_rows(code)?;
        }
        Ok(())
    }
}

static BUILTIN_FONTS: [&FontInfo; 3] = [&VGA_8X16, &VGA_8X16_MONO, &VGA_16X32_DIGITS];

/// Read-only, index-addressed registry of fonts.
#[derive(Debug, Clone, Copy)]
pub struct FontCatalog {
    fonts: &'static [&'static FontInfo],
}

impl FontCatalog {
    /// Catalog over a caller-supplied table
    pub const fn new(fonts: &'static [&'static FontInfo]) -> Self {
        Self { fonts }
    }

    /// The compiled-in fonts:
    ///
    /// | index | name | height | C |
    /// |---|---|---|---|
    /// | 0 | VGA 8x16 | 16 | 1 |
    /// | 1 | VGA 8x16 Mono | 16 | 0 |
    /// | 2 | VGA 16x32 Digits | 32 | 2 |
    pub fn builtin() -> Self {
        Self::new(&BUILTIN_FONTS)
    }

    /// Number of fonts
    pub fn count(&self) -> usize {
        self.fonts.len()
    }

    /// Font names in catalog order, with a placeholder for unnamed fonts
    pub fn list(&self) -> impl Iterator<Item = &'static str> {
        let fonts = self.fonts;
        fonts.iter().map(|font| font.label())
    }

    /// Font at `index`
    pub fn get(&self, index: usize) -> Result<&'static FontInfo, FontError> {
        self.fonts
            .get(index)
            .copied()
            .ok_or(FontError::InvalidFontIndex {
                index,
                count: self.fonts.len(),
            })
    }

    /// Index of the first font called `name`
    pub fn find(&self, name: &str) -> Option<usize> {
        self.fonts.iter().position(|font| font.name == Some(name))
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

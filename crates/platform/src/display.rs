//! Display abstraction layer

use raster_font::FontError;

/// Drawing colour on a monochrome panel.
///
/// Applied per segment bit: only bits that are set in the written pattern
/// are affected; clear bits leave the frame buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Not drawing
    Transparent,
    /// Pixel off
    Black,
    /// Pixel on (white, blue or yellow depending on the panel)
    White,
    /// Toggle pixel (XOR)
    Invert,
}

impl Color {
    /// Apply this colour to `current` for every bit set in `bits`.
    #[inline]
    pub fn apply(self, current: u8, bits: u8) -> u8 {
        match self {
            Self::White => current | bits,
            Self::Black => current & !bits,
            Self::Invert => current ^ bits,
            Self::Transparent => current,
        }
    }
}

/// Display capability set.
///
/// One implementation exists today (`oled::Oled` over an SSD1306), but the
/// trait carries no assumption about the panel behind it. Drawing calls
/// return `&mut Self` so they chain with `?`:
///
/// ```no_run
/// # use platform::{Color, Display, DisplayError};
/// # fn f<D: Display>(d: &mut D) -> Result<(), DisplayError> {
/// d.clear(false)?
///     .draw_rectangle(0, 0, 20, 10, Color::White)?
///     .refresh(false)?;
/// # Ok(())
/// # }
/// ```
pub trait Display {
    /// Panel width in pixels
    fn width(&self) -> u8;

    /// Panel height in pixels
    fn height(&self) -> u8;

    /// Clear the display buffer (fill with black).
    ///
    /// With `limit`, only the area sent by the last refresh is cleared.
    fn clear(&mut self, limit: bool) -> Result<&mut Self, DisplayError>;

    /// Send the display buffer to the panel.
    ///
    /// Only the dirty region is sent unless `force` is set.
    fn refresh(&mut self, force: bool) -> Result<&mut Self, DisplayError>;

    /// Set normal or inverted display
    fn invert(&mut self, invert: bool) -> Result<&mut Self, DisplayError>;

    /// Draw one pixel
    fn draw_pixel(&mut self, x: u8, y: u8, color: Color) -> Result<&mut Self, DisplayError>;

    /// Draw a horizontal line of width `w` starting at (`x`, `y`)
    fn draw_hline(&mut self, x: u8, y: u8, w: u8, color: Color)
        -> Result<&mut Self, DisplayError>;

    /// Draw a vertical line of height `h` starting at (`x`, `y`)
    fn draw_vline(&mut self, x: u8, y: u8, h: u8, color: Color)
        -> Result<&mut Self, DisplayError>;

    /// Draw a line between two points
    fn draw_line(
        &mut self,
        x: u8,
        y: u8,
        xx: u8,
        yy: u8,
        color: Color,
    ) -> Result<&mut Self, DisplayError>;

    /// Draw a rectangle outline
    fn draw_rectangle(
        &mut self,
        x: u8,
        y: u8,
        w: u8,
        h: u8,
        color: Color,
    ) -> Result<&mut Self, DisplayError>;

    /// Draw a filled rectangle
    fn fill_rectangle(
        &mut self,
        x: u8,
        y: u8,
        w: u8,
        h: u8,
        color: Color,
    ) -> Result<&mut Self, DisplayError>;

    /// Draw a circle outline centred on (`x`, `y`)
    fn draw_circle(&mut self, x: u8, y: u8, r: u8, color: Color)
        -> Result<&mut Self, DisplayError>;

    /// Draw a filled circle centred on (`x`, `y`)
    fn fill_circle(&mut self, x: u8, y: u8, r: u8, color: Color)
        -> Result<&mut Self, DisplayError>;

    /// Select the catalog font used by the text calls
    fn select_font(&mut self, index: u8) -> Result<&mut Self, DisplayError>;

    /// Draw one character with its top-left corner at (`x`, `y`).
    ///
    /// Returns the character's advance in pixels (0 when no font is
    /// selected).
    fn draw_char(
        &mut self,
        x: u8,
        y: u8,
        c: u8,
        foreground: Color,
        background: Color,
    ) -> Result<u16, DisplayError>;

    /// Draw a string with its top-left corner at (`x`, `y`).
    ///
    /// Returns the string width in pixels, off-panel pixels included.
    fn draw_string(
        &mut self,
        x: u8,
        y: u8,
        text: &str,
        foreground: Color,
        background: Color,
    ) -> Result<u16, DisplayError>;

    /// Measure the width of `text` in the selected font (0 with no font)
    fn measure_string(&self, text: &str) -> u16;

    /// Height of the selected font (0 with no font)
    fn font_height(&self) -> u8;

    /// "C" value of the selected font: the gap after every glyph
    fn font_c(&self) -> u8;
}

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus communication error
    Communication,
    /// `init` called on a panel that is already running
    AlreadyInitialized,
    /// Caller supplied a buffer that does not match the panel
    InvalidBuffer,
    /// Bitmap layout cannot be composited into display pages
    UnsupportedRaster,
    /// Font selection or rasterization failed
    Font(FontError),
}

impl From<FontError> for DisplayError {
    fn from(err: FontError) -> Self {
        Self::Font(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DisplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Font(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Communication => write!(f, "Display communication error"),
            Self::AlreadyInitialized => write!(f, "Display already initialized"),
            Self::InvalidBuffer => write!(f, "Invalid buffer size"),
            Self::UnsupportedRaster => write!(f, "Bitmap raster is not page organized"),
            Self::Font(err) => write!(f, "Font error: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_apply() {
        assert_eq!(Color::White.apply(0b1010_0000, 0b0000_1111), 0b1010_1111);
        assert_eq!(Color::Black.apply(0b1111_1111, 0b0000_1111), 0b1111_0000);
        assert_eq!(Color::Invert.apply(0b1010_1010, 0b1111_0000), 0b0101_1010);
        assert_eq!(Color::Transparent.apply(0b1010_1010, 0xFF), 0b1010_1010);
    }

    #[test]
    fn test_color_leaves_unselected_bits() {
        // Bits outside the pattern are never touched, whatever the colour
        for color in [Color::White, Color::Black, Color::Invert] {
            assert_eq!(color.apply(0b0101_0101, 0), 0b0101_0101);
        }
    }

    #[test]
    fn test_display_error_format() {
        use std::string::ToString;
        assert_eq!(
            DisplayError::Communication.to_string(),
            "Display communication error"
        );
        assert_eq!(
            DisplayError::InvalidBuffer.to_string(),
            "Invalid buffer size"
        );
        let font = DisplayError::from(FontError::InvalidFontIndex { index: 9, count: 3 });
        assert_eq!(
            font.to_string(),
            "Font error: font index 9 out of range (3 fonts)"
        );
    }
}

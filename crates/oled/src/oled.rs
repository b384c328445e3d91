//! [`Display`] over an SSD1306 page buffer
//!
//! Shapes go straight to the driver's primitives. Text is rasterized
//! column-major, so every bitmap byte is already a panel segment and
//! compositing is a plain per-byte copy into the right page and column.

use platform::config::PAGE_HEIGHT;
use platform::{Color, Display, DisplayError, Interface};
use raster_font::{FontCatalog, FontManager, OutputBitmap, RasterOrientation};
use ssd1306::Ssd1306;

/// Text and shape drawing on an SSD1306 panel.
pub struct Oled<I> {
    driver: Ssd1306<I>,
    catalog: FontCatalog,
    font: Option<FontManager>,
}

impl<I: Interface> Oled<I> {
    /// Wrap a driver, with the compiled-in fonts and no font selected
    pub fn new(driver: Ssd1306<I>) -> Self {
        Self::with_catalog(driver, FontCatalog::builtin())
    }

    /// Wrap a driver with a caller-supplied font catalog
    pub fn with_catalog(driver: Ssd1306<I>, catalog: FontCatalog) -> Self {
        Self {
            driver,
            catalog,
            font: None,
        }
    }

    /// Initialize the panel (see [`Ssd1306::init`])
    pub fn init(&mut self) -> Result<&mut Self, DisplayError> {
        self.driver.init()?;
        Ok(self)
    }

    /// Underlying driver
    pub fn driver(&self) -> &Ssd1306<I> {
        &self.driver
    }

    /// Mutable underlying driver
    pub fn driver_mut(&mut self) -> &mut Ssd1306<I> {
        &mut self.driver
    }

    /// Give the driver back
    pub fn release(self) -> Ssd1306<I> {
        self.driver
    }

    /// Fonts available to [`select_font`](Display::select_font)
    pub fn catalog(&self) -> FontCatalog {
        self.catalog
    }

    /// Selected font, if any
    pub fn font(&self) -> Option<&FontManager> {
        self.font.as_ref()
    }

    /// Write a column-major bitmap into the page buffer with its top-left
    /// corner at (`x`, `y`).
    ///
    /// The bitmap must have been rasterized with a bit offset of `y`, so
    /// its first storage row lines up with page `y / 8`. Bytes falling off
    /// the panel are dropped.
    pub fn composite(
        &mut self,
        bitmap: &OutputBitmap,
        x: u8,
        y: u8,
        color: Color,
    ) -> Result<(), DisplayError> {
        if bitmap.raster() != RasterOrientation::ColumnMajor {
            return Err(DisplayError::UnsupportedRaster);
        }

        let top = y / PAGE_HEIGHT;
        #[cfg(feature = "defmt")]
        let mut dropped = 0_u16;
        for p in 0..bitmap.height_bytes() {
            let Some(row) = bitmap.row(p) else { break };
            let page = u8::try_from(p).ok().and_then(|p| top.checked_add(p));
            for (col, &bits) in row.iter().enumerate() {
                let column = u8::try_from(col).ok().and_then(|c| x.checked_add(c));
                #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
                let drawn = match (page, column) {
                    (Some(page), Some(column)) => self.driver.segment(page, column, bits, color, 1),
                    _ => false,
                };
                #[cfg(feature = "defmt")]
                if !drawn {
                    dropped = dropped.saturating_add(1);
                }
            }
        }

        #[cfg(feature = "defmt")]
        if dropped > 0 {
            defmt::trace!("composite at ({}, {}): {} bytes off panel", x, y, dropped);
        }
        Ok(())
    }

    fn fill_background(&mut self, x: u8, y: u8, width: u16, height: u8, color: Color) {
        if color != Color::Transparent {
            let width = u8::try_from(width).unwrap_or(u8::MAX);
            self.driver.r#box(x, y, color, width, height);
        }
    }

    /// Plot with signed coordinates, dropping anything off the panel
    fn plot(&mut self, x: i16, y: i16, color: Color) {
        if let (Ok(x), Ok(y)) = (u8::try_from(x), u8::try_from(y)) {
            self.driver.pixel(x, y, color);
        }
    }

    /// Vertical span of `h` pixels from `top`, clipped at the top edge
    // Safety: inputs derive from u8 coordinates, so every sum fits i16
    #[allow(clippy::arithmetic_side_effects)]
    fn span(&mut self, x: i16, top: i16, h: i16, color: Color) {
        let bottom = top + h - 1;
        let top = top.max(0);
        if bottom < top {
            return;
        }
        let (Ok(x), Ok(top)) = (u8::try_from(x), u8::try_from(top)) else {
            return;
        };
        let h = u8::try_from(bottom - i16::from(top) + 1).unwrap_or(u8::MAX);
        self.driver.vertical(x, top, color, h);
    }
}

/// Visit the first-octant points (`x >= y >= 0`) of a midpoint circle of
/// radius `r`, starting at (`r`, 0).
// Safety: x, y and err stay within +-4 * 255
#[allow(clippy::arithmetic_side_effects)]
fn midpoint(r: u8, mut visit: impl FnMut(i16, i16)) {
    let (mut x, mut y) = (i16::from(r), 0_i16);
    let mut err = 1 - x;
    visit(x, y);
    loop {
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
        if x < y {
            break;
        }
        visit(x, y);
    }
}

impl<I: Interface> Display for Oled<I> {
    fn width(&self) -> u8 {
        self.driver.width()
    }

    fn height(&self) -> u8 {
        self.driver.height()
    }

    fn clear(&mut self, limit: bool) -> Result<&mut Self, DisplayError> {
        self.driver.clear(limit);
        Ok(self)
    }

    fn refresh(&mut self, force: bool) -> Result<&mut Self, DisplayError> {
        self.driver.refresh(force)?;
        Ok(self)
    }

    fn invert(&mut self, invert: bool) -> Result<&mut Self, DisplayError> {
        self.driver.invert_display(invert)?;
        Ok(self)
    }

    fn draw_pixel(&mut self, x: u8, y: u8, color: Color) -> Result<&mut Self, DisplayError> {
        self.driver.pixel(x, y, color);
        Ok(self)
    }

    fn draw_hline(
        &mut self,
        x: u8,
        y: u8,
        w: u8,
        color: Color,
    ) -> Result<&mut Self, DisplayError> {
        self.driver.horizontal(x, y, color, w);
        Ok(self)
    }

    fn draw_vline(
        &mut self,
        x: u8,
        y: u8,
        h: u8,
        color: Color,
    ) -> Result<&mut Self, DisplayError> {
        self.driver.vertical(x, y, color, h);
        Ok(self)
    }

    fn draw_line(
        &mut self,
        x: u8,
        y: u8,
        xx: u8,
        yy: u8,
        color: Color,
    ) -> Result<&mut Self, DisplayError> {
        self.driver.line(x, y, xx, yy, color);
        Ok(self)
    }

    /// Outline of a `w` x `h` box; every edge pixel is drawn exactly once.
    fn draw_rectangle(
        &mut self,
        x: u8,
        y: u8,
        w: u8,
        h: u8,
        color: Color,
    ) -> Result<&mut Self, DisplayError> {
        if w == 0 || h == 0 {
            return Ok(self);
        }
        let right = x.checked_add(w.saturating_sub(1));
        let bottom = y.checked_add(h.saturating_sub(1));

        self.driver.horizontal(x, y, color, w);
        if let Some(bottom) = bottom.filter(|_| h > 1) {
            self.driver.horizontal(x, bottom, color, w);
        }
        if h > 2 {
            let inner = h.saturating_sub(2);
            if let Some(top) = y.checked_add(1) {
                self.driver.vertical(x, top, color, inner);
                if let Some(right) = right.filter(|_| w > 1) {
                    self.driver.vertical(right, top, color, inner);
                }
            }
        }
        Ok(self)
    }

    fn fill_rectangle(
        &mut self,
        x: u8,
        y: u8,
        w: u8,
        h: u8,
        color: Color,
    ) -> Result<&mut Self, DisplayError> {
        self.driver.r#box(x, y, color, w, h);
        Ok(self)
    }

    /// Midpoint circle; points on the diagonals and axes are plotted once,
    /// so `Invert` leaves a clean outline.
    // Safety: centre and radius are u8, so every sum fits i16
    #[allow(clippy::arithmetic_side_effects)]
    fn draw_circle(&mut self, x: u8, y: u8, r: u8, color: Color) -> Result<&mut Self, DisplayError> {
        if r == 0 {
            return Ok(self);
        }
        let (cx, cy) = (i16::from(x), i16::from(y));
        midpoint(r, |px, py| {
            if py == 0 {
                self.plot(cx + px, cy, color);
                self.plot(cx - px, cy, color);
                self.plot(cx, cy + px, color);
                self.plot(cx, cy - px, color);
                return;
            }
            self.plot(cx + px, cy + py, color);
            self.plot(cx - px, cy + py, color);
            self.plot(cx + px, cy - py, color);
            self.plot(cx - px, cy - py, color);
            if px != py {
                self.plot(cx + py, cy + px, color);
                self.plot(cx - py, cy + px, color);
                self.plot(cx + py, cy - px, color);
                self.plot(cx - py, cy - px, color);
            }
        });
        Ok(self)
    }

    /// Filled disc drawn as one vertical span per column, so `Invert`
    /// toggles every pixel exactly once.
    // Safety: centre, radius and half-heights are u8, so every sum fits i16
    #[allow(clippy::arithmetic_side_effects)]
    fn fill_circle(&mut self, x: u8, y: u8, r: u8, color: Color) -> Result<&mut Self, DisplayError> {
        if r == 0 {
            return Ok(self);
        }

        // Half-height of the disc at each horizontal distance from the centre
        let mut half = [0_u8; 256];
        midpoint(r, |px, py| {
            for (dx, dy) in [(px, py), (py, px)] {
                if let (Ok(dx), Ok(dy)) = (usize::try_from(dx), u8::try_from(dy)) {
                    if let Some(h) = half.get_mut(dx) {
                        *h = (*h).max(dy);
                    }
                }
            }
        });

        let (cx, cy) = (i16::from(x), i16::from(y));
        for dx in 0..=i16::from(r) {
            let h = half
                .get(usize::from(dx.unsigned_abs()))
                .map_or(0, |&h| i16::from(h));
            self.span(cx + dx, cy - h, 2 * h + 1, color);
            if dx > 0 {
                self.span(cx - dx, cy - h, 2 * h + 1, color);
            }
        }
        Ok(self)
    }

    fn select_font(&mut self, index: u8) -> Result<&mut Self, DisplayError> {
        match FontManager::new(self.catalog, usize::from(index), RasterOrientation::ColumnMajor) {
            Ok(font) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("font {} selected: {}", index, font.name());
                self.font = Some(font);
                Ok(self)
            }
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("font {} not selected: {}", index, err);
                Err(err.into())
            }
        }
    }

    fn draw_char(
        &mut self,
        x: u8,
        y: u8,
        c: u8,
        foreground: Color,
        background: Color,
    ) -> Result<u16, DisplayError> {
        let Some(font) = self.font else {
            return Ok(0);
        };
        let bitmap = font.rasterize_char(c, u16::from(y))?;
        // Column-major cursors start at 0, so this is width plus gap
        let advance = bitmap.cursor();

        self.fill_background(x, y, advance, font.height(), background);
        self.composite(&bitmap, x, y, foreground)?;
        Ok(advance)
    }

    /// Glyphs are rasterized one at a time, so strings longer than the
    /// panel never need a bitmap wider than one glyph.
    fn draw_string(
        &mut self,
        x: u8,
        y: u8,
        text: &str,
        foreground: Color,
        background: Color,
    ) -> Result<u16, DisplayError> {
        let Some(font) = self.font else {
            return Ok(0);
        };
        let width = font.measure(text);
        self.fill_background(x, y, width, font.height(), background);

        let mut cursor = u16::from(x);
        for code in text.bytes() {
            let Some(column) = u8::try_from(cursor).ok().filter(|&c| c < self.width()) else {
                break;
            };
            let bitmap = font.rasterize_char(code, u16::from(y))?;
            self.composite(&bitmap, column, y, foreground)?;
            cursor = cursor.saturating_add(bitmap.cursor());
        }
        Ok(width)
    }

    fn measure_string(&self, text: &str) -> u16 {
        self.font.map_or(0, |font| font.measure(text))
    }

    fn font_height(&self) -> u8 {
        self.font.map_or(0, |font| font.height())
    }

    fn font_c(&self) -> u8 {
        self.font.map_or(0, |font| font.advance_gap())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use platform::mocks::MockInterface;
    use ssd1306::PanelType;

    fn oled() -> Oled<MockInterface> {
        Oled::new(Ssd1306::new(MockInterface::new(), PanelType::Ssd1306_128x64))
    }

    fn lit(oled: &Oled<MockInterface>) -> u32 {
        oled.driver()
            .buffer()
            .iter()
            .flatten()
            .map(|b| b.count_ones())
            .sum()
    }

    #[test]
    fn test_midpoint_octant() {
        let mut points = Vec::new();
        midpoint(2, |x, y| points.push((x, y)));
        assert_eq!(points, [(2, 0), (2, 1)]);
    }

    #[test]
    fn test_circle_radius_one_is_a_plus() {
        let mut d = oled();
        d.draw_circle(10, 10, 1, Color::White).unwrap();
        assert_eq!(lit(&d), 4);
        assert_eq!(d.driver().page(1).unwrap()[10], 0b0000_1010);
        assert_eq!(d.driver().page(1).unwrap()[9], 0b0000_0100);
        assert_eq!(d.driver().page(1).unwrap()[11], 0b0000_0100);
    }

    #[test]
    fn test_circle_invert_draws_each_pixel_once() {
        for r in 1..20 {
            let mut white = oled();
            white.draw_circle(40, 30, r, Color::White).unwrap();
            let mut invert = oled();
            invert.draw_circle(40, 30, r, Color::Invert).unwrap();
            assert_eq!(white.driver().buffer(), invert.driver().buffer(), "r = {r}");
        }
    }

    #[test]
    fn test_fill_circle_disc_sizes() {
        let mut d = oled();
        d.fill_circle(20, 20, 1, Color::White).unwrap();
        assert_eq!(lit(&d), 5);

        let mut d = oled();
        d.fill_circle(20, 20, 2, Color::White).unwrap();
        assert_eq!(lit(&d), 21);
    }

    #[test]
    fn test_fill_circle_clipped_at_origin() {
        let mut d = oled();
        d.fill_circle(0, 0, 3, Color::White).unwrap();
        // Only the bottom-right quadrant, axes included, stays on panel
        assert!(d.driver().page(0).unwrap()[0] & 0b1111 == 0b1111);
        assert_eq!(d.driver().page(0).unwrap()[4], 0);
    }

    #[test]
    fn test_rectangle_outline() {
        let mut d = oled();
        d.draw_rectangle(2, 1, 4, 5, Color::Invert).unwrap();
        let page = d.driver().page(0).unwrap();
        // rows 1..=5: edges full height, middle columns top and bottom only
        assert_eq!(page[2], 0b0011_1110);
        assert_eq!(page[3], 0b0010_0010);
        assert_eq!(page[4], 0b0010_0010);
        assert_eq!(page[5], 0b0011_1110);
        assert_eq!(page[6], 0);
    }

    #[test]
    fn test_thin_rectangles() {
        let mut d = oled();
        d.draw_rectangle(0, 0, 1, 1, Color::Invert).unwrap();
        assert_eq!(d.driver().page(0).unwrap()[0], 1);

        let mut d = oled();
        d.draw_rectangle(0, 0, 3, 2, Color::Invert).unwrap();
        assert_eq!(&d.driver().page(0).unwrap()[..4], &[0b11, 0b11, 0b11, 0]);
    }

    #[test]
    fn test_rectangle_clipped_at_panel_edge() {
        let mut d = oled();
        d.draw_rectangle(124, 60, 10, 10, Color::White).unwrap();
        let page = d.driver().page(7).unwrap();
        // Left edge rows 60..=63, top edge row 60 only
        assert_eq!(page[124], 0xF0);
        assert_eq!(&page[125..], &[0x10, 0x10, 0x10]);
        assert_eq!(lit(&d), 7);

        // Far corner past u8 range: only the on-panel part is drawn
        let mut d = oled();
        d.draw_rectangle(250, 250, 255, 255, Color::White).unwrap();
        assert_eq!(lit(&d), 0);
        d.draw_rectangle(120, 0, 255, 255, Color::White).unwrap();
        assert_eq!(d.driver().page(0).unwrap()[120], 0xFF);
        assert_eq!(d.driver().page(0).unwrap()[127], 0x01);
    }

    #[test]
    fn test_composite_rejects_row_major() {
        let font =
            FontManager::new(FontCatalog::builtin(), 0, RasterOrientation::RowMajor).unwrap();
        let bitmap = font.rasterize("A", 0).unwrap();
        let mut d = oled();
        assert_eq!(
            d.composite(&bitmap, 0, 0, Color::White),
            Err(DisplayError::UnsupportedRaster)
        );
    }

    #[test]
    fn test_composite_places_pages() {
        let font =
            FontManager::new(FontCatalog::builtin(), 0, RasterOrientation::ColumnMajor).unwrap();
        let bitmap = font.rasterize("A", 21).unwrap();
        let mut d = oled();
        d.composite(&bitmap, 7, 21, Color::White).unwrap();

        for p in 0..bitmap.height_bytes() {
            let row = bitmap.row(p).unwrap();
            let page = d.driver().page(2 + p as u8).unwrap();
            assert_eq!(&page[7..7 + row.len()], row);
        }
    }

    #[test]
    fn test_composite_drops_bytes_off_panel() {
        let font =
            FontManager::new(FontCatalog::builtin(), 0, RasterOrientation::ColumnMajor).unwrap();
        let bitmap = font.rasterize("AA", 60).unwrap();
        let mut d = oled();
        d.composite(&bitmap, 124, 60, Color::White).unwrap();

        // Only page 7, columns 124..=127 of the first storage row land
        let row = bitmap.row(0).unwrap();
        assert_eq!(&d.driver().page(7).unwrap()[124..], &row[..4]);
        for p in 0..7 {
            assert!(d.driver().page(p).unwrap().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_text_without_font() {
        let mut d = oled();
        assert_eq!(d.draw_string(0, 0, "hi", Color::White, Color::Black).unwrap(), 0);
        assert_eq!(d.draw_char(0, 0, b'h', Color::White, Color::Black).unwrap(), 0);
        assert_eq!(d.measure_string("hi"), 0);
        assert_eq!(d.font_height(), 0);
        assert_eq!(d.font_c(), 0);
        assert_eq!(lit(&d), 0);
    }

    #[test]
    fn test_select_font_out_of_range_keeps_previous() {
        let mut d = oled();
        d.select_font(0).unwrap();
        let err = d.select_font(99).map(|_| ()).unwrap_err();
        assert_eq!(
            err,
            DisplayError::Font(raster_font::FontError::InvalidFontIndex { index: 99, count: 3 })
        );
        assert_eq!(d.font_height(), 16);
        assert_eq!(d.font_c(), 1);
    }
}

//! SSD1306 page-buffer driver
//!
//! Keeps a full copy of the panel's GDDRAM in RAM and sends only what
//! changed. Memory is organized as the controller organizes it: up to 8
//! pages of 128 columns, each byte a vertical strip of 8 pixels with the
//! least significant bit on top.
//!
//! ```text
//!           column 0   column 1        column 127
//! page 0  [ b0..b7 ] [ b0..b7 ] ...  [ b0..b7 ]   rows 0..7
//! page 1  [ b0..b7 ] [ b0..b7 ] ...  [ b0..b7 ]   rows 8..15
//!   ...
//! ```

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use platform::config::{PAGE_HEIGHT, SSD1306_COLUMNS};
use platform::{Color, DisplayError, Interface};

use crate::command::{
    Command, INIT_SEQUENCE_128X32, INIT_SEQUENCE_128X64, POWERDOWN_SEQUENCE,
};
use crate::DirtyWindow;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Columns per page.
pub const COLUMNS: usize = SSD1306_COLUMNS as usize;

/// Pages on the tallest supported panel.
pub const MAX_PAGES: usize = 8;

/// Frame buffer size for a 128x64 panel.
pub const BUFFER_SIZE: usize = COLUMNS * MAX_PAGES;

// ---------------------------------------------------------------------------
// Panel type
// ---------------------------------------------------------------------------

/// Supported panel geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum PanelType {
    /// 128x64, 8 pages of memory
    Ssd1306_128x64,
    /// 128x32, 4 pages of memory
    Ssd1306_128x32,
}

impl PanelType {
    /// Pages of GDDRAM in use
    pub const fn pages(self) -> u8 {
        match self {
            Self::Ssd1306_128x64 => 8,
            Self::Ssd1306_128x32 => 4,
        }
    }

    /// Panel height in pixels
    pub const fn height(self) -> u8 {
        match self {
            Self::Ssd1306_128x64 => 64,
            Self::Ssd1306_128x32 => 32,
        }
    }

    /// Command stream configuring this geometry
    pub fn init_sequence(self) -> &'static [u8] {
        match self {
            Self::Ssd1306_128x64 => &INIT_SEQUENCE_128X64,
            Self::Ssd1306_128x32 => &INIT_SEQUENCE_128X32,
        }
    }
}

// ---------------------------------------------------------------------------
// Driver struct
// ---------------------------------------------------------------------------

/// SSD1306 driver over any [`Interface`].
///
/// Drawing calls only touch the RAM buffer and grow the dirty window;
/// [`refresh`](Self::refresh) pushes the window to the panel.
pub struct Ssd1306<I> {
    interface: I,
    panel: PanelType,
    buffer: [[u8; COLUMNS]; MAX_PAGES],
    dirty: DirtyWindow,
    previous: DirtyWindow,
    initialized: bool,
}

#[allow(clippy::large_stack_arrays)]
impl<I: Interface> Ssd1306<I> {
    /// Create a driver; nothing is sent until [`init`](Self::init).
    pub fn new(interface: I, panel: PanelType) -> Self {
        Self {
            interface,
            panel,
            buffer: [[0; COLUMNS]; MAX_PAGES],
            dirty: DirtyWindow::default(),
            previous: DirtyWindow::default(),
            initialized: false,
        }
    }

    // -----------------------------------------------------------------------
    // Wire helpers
    // -----------------------------------------------------------------------

    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), DisplayError> {
        self.interface
            .commands(cmds)
            .map_err(|_| DisplayError::Communication)
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Power the panel down, configure it, blank it and switch it on.
    ///
    /// Fails with [`DisplayError::AlreadyInitialized`] on a running panel.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        if self.initialized {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1306 init called twice");
            return Err(DisplayError::AlreadyInitialized);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 init: {} pages", self.panel.pages());

        self.powerdown()?;
        self.send_commands(self.panel.init_sequence())?;
        self.clear(false);
        self.refresh(true)?;
        self.send_commands(&[Command::DisplayOn.into()])?;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 init complete");
        Ok(())
    }

    /// Switch the panel and its charge pump off and blank the buffer.
    pub fn powerdown(&mut self) -> Result<(), DisplayError> {
        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 powerdown");

        self.send_commands(&POWERDOWN_SEQUENCE)?;
        self.buffer = [[0; COLUMNS]; MAX_PAGES];
        self.initialized = false;
        Ok(())
    }

    /// True between a successful `init` and the next `powerdown`
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Wire interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Mutable wire interface
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Give the interface back
    pub fn release(self) -> I {
        self.interface
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Panel geometry
    pub fn panel(&self) -> PanelType {
        self.panel
    }

    /// Panel width in pixels
    pub fn width(&self) -> u8 {
        SSD1306_COLUMNS
    }

    /// Panel height in pixels
    pub fn height(&self) -> u8 {
        self.panel.height()
    }

    /// Pages in use
    pub fn pages(&self) -> u8 {
        self.panel.pages()
    }

    // -----------------------------------------------------------------------
    // Buffer access
    // -----------------------------------------------------------------------

    /// The pages in use, top to bottom
    pub fn buffer(&self) -> &[[u8; COLUMNS]] {
        self.buffer
            .get(..usize::from(self.pages()))
            .unwrap_or(&[])
    }

    /// One page of the buffer
    pub fn page(&self, page: u8) -> Option<&[u8; COLUMNS]> {
        self.buffer().get(usize::from(page))
    }

    /// Area touched since the last refresh
    pub fn dirty_window(&self) -> DirtyWindow {
        self.dirty
    }

    /// Area sent by the last refresh
    pub fn previous_window(&self) -> DirtyWindow {
        self.previous
    }

    /// Overwrite the buffer, page by page, with `data`.
    ///
    /// Shorter data leaves the rest of the buffer as is; data longer than
    /// the panel's pages is rejected.
    pub fn update_buffer(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        let pages = usize::from(self.pages());
        if data.len() > pages.saturating_mul(COLUMNS) {
            return Err(DisplayError::InvalidBuffer);
        }
        for (page, chunk) in self.buffer.iter_mut().zip(data.chunks(COLUMNS)) {
            if let Some(dst) = page.get_mut(..chunk.len()) {
                dst.copy_from_slice(chunk);
            }
        }
        self.dirty = DirtyWindow::full(self.pages(), SSD1306_COLUMNS);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Clear / refresh
    // -----------------------------------------------------------------------

    /// Blank the buffer.
    ///
    /// With `limit`, only the window sent by the last refresh is blanked.
    pub fn clear(&mut self, limit: bool) {
        if !limit {
            self.buffer = [[0; COLUMNS]; MAX_PAGES];
            self.dirty = DirtyWindow::full(self.pages(), SSD1306_COLUMNS);
            return;
        }
        if !self.previous.is_dirty() {
            return;
        }

        let (top, bottom) = self.previous.pages();
        let (left, right) = self.previous.columns();
        for page in top..=bottom {
            if let Some(cols) = self
                .buffer
                .get_mut(usize::from(page))
                .and_then(|p| p.get_mut(usize::from(left)..=usize::from(right)))
            {
                cols.fill(0);
            }
        }
        let previous = self.previous;
        self.dirty.merge(&previous);
    }

    /// Send the dirty window (everything when `force`) to the panel.
    ///
    /// Nothing is sent when nothing changed and `force` is not set.
    pub fn refresh(&mut self, force: bool) -> Result<(), DisplayError> {
        let window = if force {
            DirtyWindow::full(self.pages(), SSD1306_COLUMNS)
        } else if self.dirty.is_dirty() {
            self.dirty
        } else {
            return Ok(());
        };

        let (page_start, page_end) = window.pages();
        let page_end = page_end.min(self.pages().saturating_sub(1));
        let (col_start, col_end) = window.columns();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "SSD1306 refresh pages {}..={} columns {}..={}",
            page_start,
            page_end,
            col_start,
            col_end
        );

        self.send_commands(&[
            Command::ColumnAddr.into(),
            col_start,
            col_end,
            Command::PageAddr.into(),
            page_start,
            page_end,
        ])?;

        for page in page_start..=page_end {
            let row = self.buffer.get(usize::from(page)).and_then(|p| {
                p.get(usize::from(col_start)..=usize::from(col_end))
            });
            if let Some(row) = row {
                self.interface
                    .data(row)
                    .map_err(|_| DisplayError::Communication)?;
            }
        }

        self.previous = window;
        self.dirty.clear();
        Ok(())
    }

    /// Set normal or inverted display (in the panel, not the buffer)
    pub fn invert_display(&mut self, invert: bool) -> Result<(), DisplayError> {
        let cmd = if invert {
            Command::InvertDisplay
        } else {
            Command::NormalDisplay
        };
        self.send_commands(&[cmd.into()])
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Apply `color` to the set bits of `bits` in `count` consecutive
    /// columns of `page`, starting at `column`.
    ///
    /// Columns past the right edge are clipped. Returns `false` when
    /// nothing can be drawn (`count == 0`, page or column off-panel).
    pub fn segment(&mut self, page: u8, column: u8, bits: u8, color: Color, count: u8) -> bool {
        if count == 0 || page >= self.pages() || column >= SSD1306_COLUMNS {
            return false;
        }
        if color == Color::Transparent {
            return true;
        }

        let start = usize::from(column);
        let end = start.saturating_add(usize::from(count)).min(COLUMNS);
        let Some(cols) = self
            .buffer
            .get_mut(usize::from(page))
            .and_then(|p| p.get_mut(start..end))
        else {
            return false;
        };
        for byte in cols.iter_mut() {
            *byte = color.apply(*byte, bits);
        }

        // Safety: end <= COLUMNS = 128, end > start
        #[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
        let last = (end - 1) as u8;
        self.dirty.touch(page, column, last);
        true
    }

    /// Apply `color` to one pixel
    // Safety: y % 8 < 8
    #[allow(clippy::arithmetic_side_effects)]
    pub fn pixel(&mut self, x: u8, y: u8, color: Color) -> bool {
        if y >= self.height() {
            return false;
        }
        self.segment(y / PAGE_HEIGHT, x, 1 << (y % PAGE_HEIGHT), color, 1)
    }

    /// Fill a `w` x `h` box with its top-left corner at (`x`, `y`),
    /// clipped to the panel.
    // Safety: x < 128 and y < height are checked first, every clipped span
    // then fits u8 and h >= 1
    #[allow(clippy::arithmetic_side_effects)]
    pub fn r#box(&mut self, x: u8, y: u8, color: Color, w: u8, h: u8) -> bool {
        if w == 0 || h == 0 || x >= SSD1306_COLUMNS || y >= self.height() {
            return false;
        }
        let w = w.min(SSD1306_COLUMNS - x);
        let h = h.min(self.height() - y);

        let bottom = y + (h - 1);
        let page_start = y / PAGE_HEIGHT;
        let page_end = bottom / PAGE_HEIGHT;

        let seg = y % PAGE_HEIGHT;
        let first = low_bits((PAGE_HEIGHT - seg).min(h)) << seg;
        if page_start == page_end {
            return self.segment(page_start, x, first, color, w);
        }

        self.segment(page_start, x, first, color, w);
        for page in page_start + 1..page_end {
            self.segment(page, x, 0xFF, color, w);
        }
        self.segment(page_end, x, low_bits(bottom % PAGE_HEIGHT + 1), color, w)
    }

    /// Horizontal line `w` pixels wide
    pub fn horizontal(&mut self, x: u8, y: u8, color: Color, w: u8) -> bool {
        self.r#box(x, y, color, w, 1)
    }

    /// Vertical line `h` pixels tall
    pub fn vertical(&mut self, x: u8, y: u8, color: Color, h: u8) -> bool {
        self.r#box(x, y, color, 1, h)
    }

    /// Bresenham line from (`x0`, `y0`) to (`x1`, `y1`), both ends included.
    // Safety: all arithmetic is on i16 widened from u8 coordinates
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: Color) {
        let (mut x, mut y) = (i16::from(x0), i16::from(y0));
        let (x1, y1) = (i16::from(x1), i16::from(y1));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            // x, y stay between the two u8 endpoints
            self.pixel(x as u8, y as u8, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Mask with the `n` lowest bits set, `n` in 1..=8
#[allow(clippy::arithmetic_side_effects)]
fn low_bits(n: u8) -> u8 {
    u8::MAX >> PAGE_HEIGHT.saturating_sub(n)
}

// ---------------------------------------------------------------------------
// embedded-graphics
// ---------------------------------------------------------------------------

#[allow(clippy::large_stack_arrays)]
impl<I: Interface> DrawTarget for Ssd1306<I> {
    type Color = BinaryColor;
    type Error = DisplayError;

    /// `BinaryColor::On` lights a pixel, `Off` clears it. Off-panel pixels
    /// are ignored.
    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u8::try_from(point.x), u8::try_from(point.y)) else {
                continue;
            };
            self.pixel(x, y, color.into_color());
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let (Ok(x), Ok(y), Ok(w), Ok(h)) = (
            u8::try_from(area.top_left.x),
            u8::try_from(area.top_left.y),
            u8::try_from(area.size.width),
            u8::try_from(area.size.height),
        ) else {
            return Ok(());
        };
        self.r#box(x, y, color.into_color(), w, h);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        self.buffer = [[fill; COLUMNS]; MAX_PAGES];
        self.dirty = DirtyWindow::full(self.pages(), SSD1306_COLUMNS);
        Ok(())
    }
}

impl<I: Interface> OriginDimensions for Ssd1306<I> {
    fn size(&self) -> Size {
        Size::new(u32::from(SSD1306_COLUMNS), u32::from(self.height()))
    }
}

/// Map embedded-graphics colours onto segment colours.
trait IntoColor {
    fn into_color(self) -> Color;
}

impl IntoColor for BinaryColor {
    fn into_color(self) -> Color {
        match self {
            BinaryColor::On => Color::White,
            BinaryColor::Off => Color::Black,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

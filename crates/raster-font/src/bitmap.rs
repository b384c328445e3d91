//! Byte-packed output bitmap

use crate::FontError;

/// Largest bitmap storage in bytes: one full 128x64 frame.
pub const BITMAP_CAPACITY: usize = 1024;

/// Output byte-packing convention, fixed per rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RasterOrientation {
    /// Left to right, top to bottom: each storage row is one scan line,
    /// 8 columns per byte, most significant bit leftmost.
    RowMajor,
    /// Top to bottom, left to right: each storage row is one 8-pixel page,
    /// one byte per column, least significant bit on top.
    ColumnMajor,
}

/// Rasterized text, owned by the caller.
///
/// Exactly one axis is byte-packed (8 pixels per byte) and the other is
/// pixel-addressed (one byte index per pixel). The sub-byte `offset` pads
/// the packed axis so the first pixel lands on bit `offset` of its byte.
///
/// | | RowMajor | ColumnMajor |
/// |---|---|---|
/// | packed axis | columns | rows |
/// | `width_bytes` | `ceil((bit_width + offset) / 8)` | `bit_width` |
/// | `height_bytes` | `bit_height` | `ceil((bit_height + offset) / 8)` |
/// | initial cursor | `offset` | `0` |
///
/// A bitmap with no pixel columns (an empty string, a zero-width glyph) has
/// `width_bytes == 0` and empty storage whatever the offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBitmap {
    raster: RasterOrientation,
    bit_width: u16,
    bit_height: u16,
    offset: u8,
    width_bytes: u16,
    height_bytes: u16,
    cursor: u16,
    bytes: heapless::Vec<u8, BITMAP_CAPACITY>,
}

impl OutputBitmap {
    /// Allocate a zeroed bitmap for `bit_width` x `bit_height` pixels placed
    /// at `bit_offset` (only `bit_offset % 8` matters).
    ///
    /// The stored `bit_width` (RowMajor) or `bit_height` (ColumnMajor)
    /// includes the offset padding.
    pub fn new(
        raster: RasterOrientation,
        bit_width: u16,
        bit_height: u16,
        bit_offset: u16,
    ) -> Result<Self, FontError> {
        // Safety: bit_offset % 8 < 8 always fits u8
        #[allow(clippy::cast_possible_truncation)]
        let offset = (bit_offset % 8) as u8;

        let (bit_width, bit_height, width_bytes, height_bytes, cursor) = match raster {
            RasterOrientation::RowMajor => {
                let padded = bit_width.saturating_add(u16::from(offset));
                // Offset padding alone is not content: no pixels, no storage
                let width_bytes = if bit_width == 0 { 0 } else { padded.div_ceil(8) };
                (padded, bit_height, width_bytes, bit_height, u16::from(offset))
            }
            RasterOrientation::ColumnMajor => {
                let bit_height = bit_height.saturating_add(u16::from(offset));
                (bit_width, bit_height, bit_width, bit_height.div_ceil(8), 0)
            }
        };

        let requested = usize::from(width_bytes).saturating_mul(usize::from(height_bytes));
        let oom = FontError::OutOfMemory {
            requested,
            capacity: BITMAP_CAPACITY,
        };
        if requested > BITMAP_CAPACITY {
            #[cfg(feature = "defmt")]
            defmt::warn!("bitmap {}x{} bytes exceeds capacity", width_bytes, height_bytes);
            return Err(oom);
        }

        let mut bytes = heapless::Vec::new();
        bytes.resize(requested, 0).map_err(|_| oom)?;

        Ok(Self {
            raster,
            bit_width,
            bit_height,
            offset,
            width_bytes,
            height_bytes,
            cursor,
            bytes,
        })
    }

    /// Output orientation
    pub fn raster(&self) -> RasterOrientation {
        self.raster
    }

    /// Width in pixels (RowMajor: including offset padding)
    pub fn bit_width(&self) -> u16 {
        self.bit_width
    }

    /// Height in pixels (ColumnMajor: including offset padding)
    pub fn bit_height(&self) -> u16 {
        self.bit_height
    }

    /// Sub-byte offset, 0..=7
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Bytes per storage row
    pub fn width_bytes(&self) -> u16 {
        self.width_bytes
    }

    /// Number of storage rows (scan lines or pages)
    pub fn height_bytes(&self) -> u16 {
        self.height_bytes
    }

    /// Next glyph position along the major axis, in pixels
    pub fn cursor(&self) -> u16 {
        self.cursor
    }

    /// Raw storage, row after row
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// True when there is nothing to composite
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// One storage row: a scan line (RowMajor) or a page (ColumnMajor)
    pub fn row(&self, index: u16) -> Option<&[u8]> {
        let width = usize::from(self.width_bytes);
        let start = usize::from(index).checked_mul(width)?;
        self.bytes.get(start..start.checked_add(width)?)
    }

    /// Storage byte at (`col`, `row`) in byte coordinates
    pub fn get(&self, col: u16, row: u16) -> Option<u8> {
        if col >= self.width_bytes {
            return None;
        }
        self.row(row)?.get(usize::from(col)).copied()
    }

    /// Test one pixel in storage coordinates (offset padding included).
    ///
    /// Out-of-range coordinates read as unset.
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        let (col, row, mask) = match self.raster {
            RasterOrientation::RowMajor => (x / 8, y, 0x80_u8 >> (x % 8)),
            RasterOrientation::ColumnMajor => (x, y / 8, 0x01_u8 << (y % 8)),
        };
        self.get(col, row).is_some_and(|byte| byte & mask != 0)
    }

    /// OR `bits` into the byte at (`col`, `row`).
    ///
    /// Writes past the end of a storage row are dropped: they only ever
    /// carry the zero padding bits of a glyph's last source byte.
    pub(crate) fn or_byte(&mut self, col: usize, row: usize, bits: u8) {
        let width = usize::from(self.width_bytes);
        if col >= width {
            return;
        }
        let index = row.checked_mul(width).and_then(|start| start.checked_add(col));
        if let Some(byte) = index.and_then(|i| self.bytes.get_mut(i)) {
            *byte |= bits;
        }
    }

    /// Move the cursor past a placed glyph
    pub(crate) fn advance(&mut self, pixels: u16) {
        self.cursor = self.cursor.saturating_add(pixels);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_sizing() {
        let bm = OutputBitmap::new(RasterOrientation::RowMajor, 12, 16, 0).unwrap();
        assert_eq!(bm.width_bytes(), 2);
        assert_eq!(bm.height_bytes(), 16);
        assert_eq!(bm.cursor(), 0);
        assert_eq!(bm.bytes().len(), 32);
        assert!(bm.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_row_major_offset_padding() {
        // 5 pixels at offset 13: 5 padding bits, 10 bits, 2 bytes
        let bm = OutputBitmap::new(RasterOrientation::RowMajor, 5, 8, 13).unwrap();
        assert_eq!(bm.offset(), 5);
        assert_eq!(bm.bit_width(), 10);
        assert_eq!(bm.width_bytes(), 2);
        assert_eq!(bm.cursor(), 5);
    }

    #[test]
    fn test_column_major_sizing() {
        let bm = OutputBitmap::new(RasterOrientation::ColumnMajor, 20, 16, 0).unwrap();
        assert_eq!(bm.width_bytes(), 20);
        assert_eq!(bm.height_bytes(), 2);
        assert_eq!(bm.cursor(), 0);

        let shifted = OutputBitmap::new(RasterOrientation::ColumnMajor, 20, 16, 1).unwrap();
        assert_eq!(shifted.bit_height(), 17);
        assert_eq!(shifted.height_bytes(), 3);
        assert_eq!(shifted.cursor(), 0);
    }

    #[test]
    fn test_zero_width_is_empty() {
        let bm = OutputBitmap::new(RasterOrientation::ColumnMajor, 0, 16, 7).unwrap();
        assert!(bm.is_empty());
        assert_eq!(bm.row(0), Some(&[][..]));
        assert_eq!(bm.get(0, 0), None);
    }

    #[test]
    fn test_row_major_zero_width_ignores_offset() {
        let bm = OutputBitmap::new(RasterOrientation::RowMajor, 0, 16, 7).unwrap();
        assert!(bm.is_empty());
        assert_eq!(bm.width_bytes(), 0);
        assert_eq!(bm.height_bytes(), 16);
        assert_eq!(bm.cursor(), 7);
        assert!(!bm.pixel(7, 0));
    }

    #[test]
    fn test_out_of_memory() {
        let err = OutputBitmap::new(RasterOrientation::ColumnMajor, 129, 64, 0).unwrap_err();
        assert_eq!(
            err,
            FontError::OutOfMemory {
                requested: 1032,
                capacity: BITMAP_CAPACITY
            }
        );
        // A full frame fits exactly
        assert!(OutputBitmap::new(RasterOrientation::ColumnMajor, 128, 64, 0).is_ok());
    }

    #[test]
    fn test_or_byte_and_pixel() {
        let mut bm = OutputBitmap::new(RasterOrientation::ColumnMajor, 4, 8, 0).unwrap();
        bm.or_byte(2, 0, 0b0000_0100);
        bm.or_byte(2, 0, 0b0000_0001);
        assert_eq!(bm.get(2, 0), Some(0b0000_0101));
        assert!(bm.pixel(2, 2));
        assert!(bm.pixel(2, 0));
        assert!(!bm.pixel(2, 1));

        // Past the row: dropped, no wrap into the next row
        bm.or_byte(4, 0, 0xFF);
        assert_eq!(bm.bytes(), &[0, 0, 0b0000_0101, 0]);
    }

    #[test]
    fn test_row_major_pixel_msb_first() {
        let mut bm = OutputBitmap::new(RasterOrientation::RowMajor, 16, 2, 0).unwrap();
        bm.or_byte(1, 1, 0b0100_0000);
        assert!(bm.pixel(9, 1));
        assert!(!bm.pixel(8, 1));
        assert_eq!(bm.row(1), Some(&[0x00, 0x40][..]));
    }
}

//! Raster-Font: bitmap font rasterizer
//!
//! Turns strings into byte-packed bitmaps ready to be written into a
//! monochrome frame buffer. Glyphs are stored the way font generators emit
//! them (row-major, most significant bit first, one or more bytes per scan
//! row); the rasterizer transposes them into one of two layouts:
//!
//! - [`RasterOrientation::RowMajor`] - horizontal bit strips, 8 columns per
//!   byte, matching the glyph storage itself
//! - [`RasterOrientation::ColumnMajor`] - vertical 8-pixel pages, one byte
//!   per column, matching the SSD1306 GDDRAM layout
//!
//! Both layouts accept a sub-byte bit offset, so text can be placed at any
//! pixel position without the caller shifting bytes around.
//!
//! # Features
//!
//! - **no_std compatible** - storage is a fixed-capacity `heapless::Vec`
//! - **Compiled-in fonts** - see [`FontCatalog::builtin`]
//! - **No panics** - every blob read is bounds-checked
//!
//! # Example
//!
//! ```
//! use raster_font::{FontCatalog, FontManager, RasterOrientation};
//!
//! let catalog = FontCatalog::builtin();
//! let font = FontManager::new(catalog, 0, RasterOrientation::ColumnMajor).unwrap();
//!
//! // Text placed at y = 3: the glyph rows start at bit 3 of the first page
//! let bitmap = font.rasterize("Hi", 3).unwrap();
//! assert_eq!(bitmap.width_bytes(), font.measure("Hi"));
//! assert_eq!(bitmap.height_bytes(), 3); // 16 rows + 3 offset bits
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod bitmap;
mod error;
pub mod fonts;
mod manager;

pub use bitmap::{OutputBitmap, RasterOrientation, BITMAP_CAPACITY};
pub use error::FontError;
pub use fonts::{FontCatalog, FontInfo, GlyphDescriptor};
pub use manager::FontManager;

/// Label reported for a catalog font that carries no name.
pub const MISSING_FONT_NAME: &str = "** Font Name Missing **";

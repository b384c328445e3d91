//! OLED text and graphics
//!
//! [`Oled`] is the [`platform::Display`] implementation for SSD1306 panels:
//! it pairs the page-buffered [`ssd1306::Ssd1306`] driver with a
//! column-major [`raster_font::FontManager`], so rasterized text drops
//! straight into display pages.
//!
//! # Example
//!
//! ```
//! use oled::Oled;
//! use platform::mocks::MockInterface;
//! use platform::{Color, Display};
//! use ssd1306::{PanelType, Ssd1306};
//!
//! let driver = Ssd1306::new(MockInterface::new(), PanelType::Ssd1306_128x64);
//! let mut display = Oled::new(driver);
//!
//! display.select_font(0).unwrap();
//! let width = display
//!     .draw_string(0, 3, "12:45", Color::White, Color::Black)
//!     .unwrap();
//! assert_eq!(width, display.measure_string("12:45"));
//! display.refresh(false).unwrap();
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod oled;

pub use oled::Oled;

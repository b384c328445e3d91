//! SSD1306 OLED panel driver
//!
//! Page-buffered driver for 128x64 and 128x32 SSD1306 panels. Drawing
//! happens in RAM; [`Ssd1306::refresh`] sends only the rectangle touched
//! since the previous refresh.
//!
//! # Layers
//!
//! - [`Ssd1306`] - frame buffer, drawing primitives, dirty window
//! - [`I2cInterface`] / [`SpiInterface`] - [`platform::Interface`] over
//!   blocking embedded-hal 1.0 buses
//! - [`command`] - controller command codes and init sequences
//!
//! # Example
//!
//! ```no_run
//! # use embedded_hal::i2c::I2c;
//! use platform::Color;
//! use ssd1306::{I2cInterface, PanelType, Ssd1306};
//!
//! # fn run<B: I2c>(bus: B) -> Result<(), platform::DisplayError> {
//! let mut oled = Ssd1306::new(I2cInterface::new(bus), PanelType::Ssd1306_128x64);
//! oled.init()?;
//! oled.r#box(10, 10, Color::White, 20, 12);
//! oled.refresh(false)?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod command;
mod dirty;
mod driver;
mod interface;

pub use dirty::DirtyWindow;
pub use driver::{PanelType, Ssd1306, BUFFER_SIZE, COLUMNS, MAX_PAGES};
pub use interface::{I2cInterface, InterfaceError, SpiInterface};

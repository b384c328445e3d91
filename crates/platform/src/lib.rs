//! Hardware Abstraction Layer (HAL) for SSD1306 OLED panels
//!
//! This crate provides the trait-based seams between the drawing code and
//! the hardware, so the driver and text layers can be developed and tested
//! without a physical panel attached.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (demo / firmware)
//!         ↓
//! Display capability (oled crate: Oled implements Display)
//!         ↓
//! Panel driver (ssd1306 crate: page buffer + dirty window)
//!         ↓
//! Wire protocol (this crate: Interface; I2C/SPI adapters in ssd1306)
//!         ↓
//! embedded-hal 1.0 bus implementations
//! ```
//!
//! # Abstraction Levels
//!
//! - [`Display`] - High-level drawing capability set (pixels, shapes, text)
//! - [`Interface`] - "send command bytes" / "send data bytes" to the controller
//! - [`Color`] - Monochrome drawing modes (on, off, invert, transparent)
//!
//! # Features
//!
//! - `std`: Enable standard library support (mocks, `std::error::Error`)
//! - `defmt`: Enable defmt logging derives
//!
//! # Example
//!
//! ```no_run
//! use platform::{Color, Display, DisplayError};
//!
//! fn banner<D: Display>(display: &mut D) -> Result<(), DisplayError> {
//!     display
//!         .select_font(0)?
//!         .clear(false)?
//!         .draw_string(0, 0, "Hello", Color::White, Color::Black)?;
//!     display.refresh(true)?;
//!     Ok(())
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
#![allow(clippy::doc_markdown)] // register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod display;
pub mod interface;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main high-level traits
pub use display::{Color, Display, DisplayError};
pub use interface::Interface;

//! I2C and SPI wire adapters
//!
//! Both implement [`platform::Interface`] over blocking embedded-hal 1.0
//! traits. Bus sequencing (start/stop, chip select) belongs to the HAL.

use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

use platform::config::{
    DEFAULT_I2C_ADDRESS, I2C_CONTROL_COMMAND, I2C_CONTROL_DATA, I2C_MAX_CHUNK,
};
use platform::Interface;

/// Wire adapter errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceError {
    /// I2C or SPI transfer failed
    Bus,
    /// Data/Command pin could not be driven
    Gpio,
}

impl core::fmt::Display for InterfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus => write!(f, "Bus transfer error"),
            Self::Gpio => write!(f, "GPIO error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterfaceError {}

// ---------------------------------------------------------------------------
// I2C
// ---------------------------------------------------------------------------

/// SSD1306 over I2C.
///
/// Every transfer is one I2C write: a control byte (`0x00` commands,
/// `0x40` data) followed by at most [`I2C_MAX_CHUNK`] payload bytes.
/// Longer payloads are split across several writes.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cInterface<I2C> {
    /// Adapter at the default address (`0x3C`)
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Adapter at a specific 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_prefixed(&mut self, control: u8, payload: &[u8]) -> Result<(), InterfaceError> {
        let mut frame = [0_u8; I2C_MAX_CHUNK + 1];
        for chunk in payload.chunks(I2C_MAX_CHUNK) {
            // Safety: chunk.len() <= I2C_MAX_CHUNK, so len <= frame.len()
            #[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
            let framed = {
                let len = chunk.len() + 1;
                frame[0] = control;
                frame[1..len].copy_from_slice(chunk);
                &frame[..len]
            };
            self.i2c
                .write(self.address, framed)
                .map_err(|_| InterfaceError::Bus)?;
        }
        Ok(())
    }
}

impl<I2C: I2c> Interface for I2cInterface<I2C> {
    type Error = InterfaceError;

    fn commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
        self.write_prefixed(I2C_CONTROL_COMMAND, cmds)
    }

    fn data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.write_prefixed(I2C_CONTROL_DATA, data)
    }
}

// ---------------------------------------------------------------------------
// SPI
// ---------------------------------------------------------------------------

/// SSD1306 over 4-wire SPI.
///
/// The Data/Command pin is driven low for commands and high for data;
/// chip select is managed by the [`SpiDevice`].
pub struct SpiInterface<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI: SpiDevice, DC: OutputPin> SpiInterface<SPI, DC> {
    /// Create the adapter
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Give the bus and pin back
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI: SpiDevice, DC: OutputPin> Interface for SpiInterface<SPI, DC> {
    type Error = InterfaceError;

    /// Assert DC low (command mode) and send the bytes.
    fn commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
        if cmds.is_empty() {
            return Ok(());
        }
        self.dc.set_low().map_err(|_| InterfaceError::Gpio)?;
        self.spi.write(cmds).map_err(|_| InterfaceError::Bus)
    }

    /// Assert DC high (data mode) and send the bytes.
    fn data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(|_| InterfaceError::Gpio)?;
        self.spi.write(data).map_err(|_| InterfaceError::Bus)
    }
}

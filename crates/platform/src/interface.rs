//! Wire-protocol abstraction layer
//!
//! The SSD1306 accepts two kinds of traffic on either bus: command bytes
//! (configuration, addressing) and data bytes (GDDRAM contents). The
//! [`Interface`] trait captures exactly that, so the panel driver never
//! knows whether it sits behind I2C or SPI.
//!
//! Concrete adapters over embedded-hal 1.0 buses live in the `ssd1306`
//! crate (`I2cInterface`, `SpiInterface`).

/// SSD1306-to-wire-protocol interface.
///
/// Every call is synchronous and complete when it returns; there is no
/// queueing, retry or timeout at this layer.
pub trait Interface {
    /// Bus error type
    type Error: core::fmt::Debug;

    /// Send a single command byte
    fn command(&mut self, cmd: u8) -> Result<(), Self::Error> {
        self.commands(&[cmd])
    }

    /// Send a sequence of command bytes (command plus its parameters)
    fn commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error>;

    /// Send display RAM data bytes
    fn data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: Interface + ?Sized> Interface for &mut T {
    type Error = T::Error;

    fn command(&mut self, cmd: u8) -> Result<(), Self::Error> {
        (**self).command(cmd)
    }

    fn commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
        (**self).commands(cmds)
    }

    fn data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).data(data)
    }
}

//! Panel and bus configuration constants
//!
//! Central values shared by the driver, the wire adapters and the text
//! layer. Geometry and protocol numbers should reference these constants
//! rather than hardcoding values.

/// Columns per page on every SSD1306 panel variant.
pub const SSD1306_COLUMNS: u8 = 128;

/// Pixels stacked in one page byte (a "segment").
pub const PAGE_HEIGHT: u8 = 8;

/// Default 7-bit I2C address (SA0 pin low). `0x3D` when SA0 is pulled high.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C address (SA0 pin high).
pub const ALTERNATE_I2C_ADDRESS: u8 = 0x3D;

/// Largest data payload sent in one I2C write transaction.
///
/// One full page row (128 columns) fits in a single transfer.
pub const I2C_MAX_CHUNK: usize = 128;

/// I2C control byte announcing a command stream.
pub const I2C_CONTROL_COMMAND: u8 = 0x00;

/// I2C control byte announcing a GDDRAM data stream.
pub const I2C_CONTROL_DATA: u8 = 0x40;

/// Label reported for a catalog font that carries no name.
pub const MISSING_FONT_NAME: &str = raster_font::MISSING_FONT_NAME;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_geometry() {
        // 128 columns × 8 pixels per page byte
        assert_eq!(SSD1306_COLUMNS, 128);
        assert_eq!(PAGE_HEIGHT, 8);
    }

    #[test]
    fn test_i2c_addresses_differ_only_in_sa0() {
        assert_eq!(DEFAULT_I2C_ADDRESS ^ ALTERNATE_I2C_ADDRESS, 0x01);
    }

    #[test]
    fn test_control_bytes() {
        // Co = 0, D/C# = 0 for commands; D/C# = 1 (bit 6) for data
        assert_eq!(I2C_CONTROL_COMMAND, 0x00);
        assert_eq!(I2C_CONTROL_DATA, 0x40);
    }
}

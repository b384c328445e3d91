//! SSD1306 command codes and power sequences

/// SSD1306 command codes.
///
/// Parameter bytes follow the command in the same command stream.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Memory addressing mode - 1 parameter (0x00 = horizontal).
    MemoryMode = 0x20,
    /// Column window for GDDRAM writes - 2 parameters (start, end).
    ColumnAddr = 0x21,
    /// Page window for GDDRAM writes - 2 parameters (start, end).
    PageAddr = 0x22,
    /// Display start line 0 (OR the line number into the low 6 bits).
    SetStartLine = 0x40,
    /// Contrast - 1 parameter.
    SetContrast = 0x81,
    /// Charge pump - 1 parameter (0x14 enable, 0x10 disable).
    ChargePump = 0x8D,
    /// Segment remap: column 127 mapped to SEG0.
    SegRemap = 0xA1,
    /// Display follows GDDRAM contents.
    DisplayAllOnResume = 0xA4,
    /// Lit pixel for a set bit.
    NormalDisplay = 0xA6,
    /// Lit pixel for a clear bit.
    InvertDisplay = 0xA7,
    /// Multiplex ratio - 1 parameter (rows - 1).
    SetMultiplex = 0xA8,
    /// Panel off (sleep).
    DisplayOff = 0xAE,
    /// Panel on.
    DisplayOn = 0xAF,
    /// COM output scan from COM[N-1] to COM0.
    ComScanDec = 0xC8,
    /// Vertical display offset - 1 parameter.
    SetDisplayOffset = 0xD3,
    /// Clock divide ratio / oscillator frequency - 1 parameter.
    SetDisplayClockDiv = 0xD5,
    /// Pre-charge period - 1 parameter.
    SetPrecharge = 0xD9,
    /// COM pins hardware configuration - 1 parameter.
    SetComPins = 0xDA,
    /// VCOMH deselect level - 1 parameter.
    SetVcomDetect = 0xDB,
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> Self {
        cmd as u8
    }
}

/// Panel off, charge pump off.
pub const POWERDOWN_SEQUENCE: [u8; 3] = [
    Command::DisplayOff as u8,
    Command::ChargePump as u8,
    0x10,
];

/// Configuration for 128x64 panels (display left off).
pub const INIT_SEQUENCE_128X64: [u8; 24] = [
    Command::DisplayOff as u8,
    Command::SetDisplayClockDiv as u8,
    0x80,
    Command::SetMultiplex as u8,
    0x3F,
    Command::SetDisplayOffset as u8,
    0x00,
    Command::SetStartLine as u8,
    Command::ChargePump as u8,
    0x14,
    Command::MemoryMode as u8,
    0x00,
    Command::SegRemap as u8,
    Command::ComScanDec as u8,
    Command::SetComPins as u8,
    0x12,
    Command::SetContrast as u8,
    0xCF,
    Command::SetPrecharge as u8,
    0xF1,
    Command::SetVcomDetect as u8,
    0x40,
    Command::DisplayAllOnResume as u8,
    Command::NormalDisplay as u8,
];

/// Configuration for 128x32 panels (display left off).
pub const INIT_SEQUENCE_128X32: [u8; 24] = [
    Command::DisplayOff as u8,
    Command::SetDisplayClockDiv as u8,
    0x80,
    Command::SetMultiplex as u8,
    0x1F,
    Command::SetDisplayOffset as u8,
    0x00,
    Command::SetStartLine as u8,
    Command::ChargePump as u8,
    0x14,
    Command::MemoryMode as u8,
    0x00,
    Command::SegRemap as u8,
    Command::ComScanDec as u8,
    Command::SetComPins as u8,
    0x02,
    Command::SetContrast as u8,
    0x8F,
    Command::SetPrecharge as u8,
    0xF1,
    Command::SetVcomDetect as u8,
    0x40,
    Command::DisplayAllOnResume as u8,
    Command::NormalDisplay as u8,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_codes() {
        assert_eq!(u8::from(Command::ColumnAddr), 0x21);
        assert_eq!(u8::from(Command::PageAddr), 0x22);
        assert_eq!(u8::from(Command::DisplayOn), 0xAF);
        assert_eq!(u8::from(Command::InvertDisplay), 0xA7);
        assert_eq!(u8::from(Command::NormalDisplay), 0xA6);
    }

    #[test]
    fn test_init_sequences_differ_only_in_geometry() {
        let diffs: Vec<usize> = INIT_SEQUENCE_128X64
            .iter()
            .zip(INIT_SEQUENCE_128X32.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();
        // multiplex ratio, COM pins, contrast
        assert_eq!(diffs, [4, 15, 17]);
    }

    #[test]
    fn test_sequences_leave_display_off() {
        for seq in [&INIT_SEQUENCE_128X64[..], &INIT_SEQUENCE_128X32[..], &POWERDOWN_SEQUENCE[..]] {
            assert_eq!(seq.first(), Some(&(Command::DisplayOff as u8)));
            assert!(!seq.contains(&(Command::DisplayOn as u8)));
        }
    }
}

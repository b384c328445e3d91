//! Driver integration tests - verify what reaches the wire.
//!
//! The driver runs over `platform::mocks::MockInterface`, which records
//! every command and data transfer, and once over a mocked I2C bus to check
//! the complete byte stream of a refresh.
//!
//! Run with: cargo test -p ssd1306 --test integration_driver
#![allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]

use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use platform::mocks::{MockInterface, Transfer};
use platform::{Color, DisplayError};
use ssd1306::command::{INIT_SEQUENCE_128X32, INIT_SEQUENCE_128X64, POWERDOWN_SEQUENCE};
use ssd1306::{I2cInterface, PanelType, Ssd1306};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn running(panel: PanelType) -> Ssd1306<MockInterface> {
    let mut drv = Ssd1306::new(MockInterface::new(), panel);
    drv.init().unwrap();
    drv.interface_mut().clear();
    drv
}

fn window(cols: (u8, u8), pages: (u8, u8)) -> Transfer {
    Transfer::Command(vec![0x21, cols.0, cols.1, 0x22, pages.0, pages.1])
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_init_transcript_128x64() {
    let mut drv = Ssd1306::new(MockInterface::new(), PanelType::Ssd1306_128x64);
    assert!(!drv.is_initialized());
    drv.init().unwrap();
    assert!(drv.is_initialized());

    let mut expected = vec![
        Transfer::Command(POWERDOWN_SEQUENCE.to_vec()),
        Transfer::Command(INIT_SEQUENCE_128X64.to_vec()),
        window((0, 127), (0, 7)),
    ];
    expected.extend((0..8).map(|_| Transfer::Data(vec![0; 128])));
    expected.push(Transfer::Command(vec![0xAF]));

    assert_eq!(drv.interface().transfers(), expected.as_slice());
}

#[test]
fn test_init_128x32_sends_four_pages() {
    let mut drv = Ssd1306::new(MockInterface::new(), PanelType::Ssd1306_128x32);
    drv.init().unwrap();

    let commands = drv.interface().commands();
    assert_eq!(commands[1], &INIT_SEQUENCE_128X32[..]);
    assert_eq!(commands[2], &[0x21, 0, 127, 0x22, 0, 3][..]);
    assert_eq!(drv.interface().data_bytes().len(), 4 * 128);
}

#[test]
fn test_second_init_rejected() {
    let mut drv = running(PanelType::Ssd1306_128x64);
    assert_eq!(drv.init(), Err(DisplayError::AlreadyInitialized));
    assert!(drv.interface().transfers().is_empty());

    drv.powerdown().unwrap();
    assert!(!drv.is_initialized());
    drv.init().unwrap();
    assert!(drv.is_initialized());
}

#[test]
fn test_init_bus_failure_leaves_panel_uninitialized() {
    let mut drv = Ssd1306::new(MockInterface::failing_after(1), PanelType::Ssd1306_128x64);
    assert_eq!(drv.init(), Err(DisplayError::Communication));
    assert!(!drv.is_initialized());
}

#[test]
fn test_powerdown_blanks_buffer() {
    let mut drv = running(PanelType::Ssd1306_128x64);
    drv.r#box(0, 0, Color::White, 128, 64);
    drv.powerdown().unwrap();
    assert!(drv.buffer().iter().flatten().all(|&b| b == 0));
    assert_eq!(drv.interface().commands(), vec![&POWERDOWN_SEQUENCE[..]]);
}

// ---------------------------------------------------------------------------
// Refresh
// ---------------------------------------------------------------------------

#[test]
fn test_clean_refresh_sends_nothing() {
    let mut drv = running(PanelType::Ssd1306_128x64);
    drv.refresh(false).unwrap();
    assert!(drv.interface().transfers().is_empty());

    // Transparent drawing touches nothing either
    drv.r#box(0, 0, Color::Transparent, 10, 10);
    drv.refresh(false).unwrap();
    assert!(drv.interface().transfers().is_empty());
}

#[test]
fn test_refresh_sends_dirty_window_only() {
    let mut drv = running(PanelType::Ssd1306_128x64);
    drv.segment(2, 10, 0xFF, Color::White, 3);
    drv.segment(4, 20, 0x01, Color::White, 1);
    drv.refresh(false).unwrap();

    let transfers = drv.interface().transfers();
    assert_eq!(transfers[0], window((10, 20), (2, 4)));
    assert_eq!(transfers.len(), 4);

    let mut page2 = vec![0; 11];
    page2[..3].fill(0xFF);
    let mut page4 = vec![0; 11];
    page4[10] = 0x01;
    assert_eq!(transfers[1], Transfer::Data(page2));
    assert_eq!(transfers[2], Transfer::Data(vec![0; 11]));
    assert_eq!(transfers[3], Transfer::Data(page4));

    // Window consumed
    assert!(!drv.dirty_window().is_dirty());
    assert_eq!(drv.previous_window().columns(), (10, 20));
}

#[test]
fn test_forced_refresh_sends_everything() {
    let mut drv = running(PanelType::Ssd1306_128x32);
    drv.refresh(true).unwrap();
    assert_eq!(drv.interface().transfers()[0], window((0, 127), (0, 3)));
    assert_eq!(drv.interface().data_bytes(), vec![0; 512]);
}

#[test]
fn test_limited_clear_erases_last_drawing() {
    let mut drv = running(PanelType::Ssd1306_128x64);
    drv.r#box(30, 8, Color::White, 5, 8);
    drv.refresh(false).unwrap();
    drv.interface_mut().clear();

    drv.clear(true);
    drv.refresh(false).unwrap();
    assert_eq!(drv.interface().transfers()[0], window((30, 34), (1, 1)));
    assert_eq!(drv.interface().data_bytes(), vec![0; 5]);
}

#[test]
fn test_refresh_bus_failure_keeps_window() {
    let mut drv = Ssd1306::new(MockInterface::failing_after(0), PanelType::Ssd1306_128x64);
    drv.pixel(0, 0, Color::White);
    assert_eq!(drv.refresh(false), Err(DisplayError::Communication));
    assert!(drv.dirty_window().is_dirty());
}

#[test]
fn test_update_buffer_marks_everything_dirty() {
    let mut drv = running(PanelType::Ssd1306_128x32);
    drv.update_buffer(&[0xAA; 512]).unwrap();
    drv.refresh(false).unwrap();
    assert_eq!(drv.interface().data_bytes(), vec![0xAA; 512]);
}

#[test]
fn test_invert_display() {
    let mut drv = running(PanelType::Ssd1306_128x64);
    drv.invert_display(true).unwrap();
    drv.invert_display(false).unwrap();
    assert_eq!(drv.interface().commands(), vec![&[0xA7][..], &[0xA6][..]]);
}

// ---------------------------------------------------------------------------
// Full I2C wire stream
// ---------------------------------------------------------------------------

#[test]
fn test_i2c_refresh_byte_stream() {
    let mut i2c = I2cMock::new(&[
        I2cTransaction::write(0x3C, vec![0x00, 0x21, 5, 6, 0x22, 0, 0]),
        I2cTransaction::write(0x3C, vec![0x40, 0b0000_0110, 0b0000_0110]),
    ]);

    let mut drv = Ssd1306::new(I2cInterface::new(i2c.clone()), PanelType::Ssd1306_128x64);
    drv.r#box(5, 1, Color::White, 2, 2);
    drv.refresh(false).unwrap();

    i2c.done();
}

//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306 OLED
//! controller. Every command byte and every command parameter is sent as a
//! command transfer (D/C low on SPI, control byte `0x00` on I2C); only pixel
//! data goes out as a data transfer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306::{command, DisplayInterface, SpiInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = SpiInterface::new(MockSpi, MockPin, MockPin);
//! // Contrast takes its parameter as a second command byte
//! let _ = interface.send_command(command::SET_CONTRAST);
//! let _ = interface.send_command(0x7F);
//!
//! let _ = interface.send_command(command::DISPLAY_ON);
//! ```

// Fundamental commands

/// Set contrast control (0x81)
///
/// Followed by one parameter byte, 0x00..=0xFF. Reset value is 0x7F.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume to RAM content display (0xA4)
///
/// Output follows RAM content.
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Entire display on (0xA5)
///
/// Output ignores RAM content and lights every pixel.
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Normal display (0xA6)
///
/// RAM bit 1 lights the pixel.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display (0xA7)
///
/// RAM bit 0 lights the pixel.
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling commands

/// Continuous right horizontal scroll setup (0x26)
///
/// Parameters: dummy 0x00, start page, frame interval, end page, 0x00, 0xFF.
pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;

/// Continuous left horizontal scroll setup (0x27)
///
/// Same parameters as [`RIGHT_HORIZONTAL_SCROLL`].
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;

/// Continuous vertical and right horizontal scroll setup (0x29)
///
/// Parameters: dummy 0x00, start page, frame interval, end page, vertical offset.
pub const VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;

/// Continuous vertical and left horizontal scroll setup (0x2A)
///
/// Same parameters as [`VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL`].
pub const VERTICAL_AND_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;

/// Deactivate scroll (0x2E)
///
/// RAM must be rewritten after deactivating a running scroll.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Activate scroll (0x2F)
///
/// Starts the scroll configured by the last scroll setup command.
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Set vertical scroll area (0xA3)
///
/// Parameters: number of fixed top rows, number of rows in the scroll area.
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;

// Addressing setting commands

/// Set lower column start address for page addressing mode (0x00..=0x0F)
pub const SET_LOWER_COLUMN: u8 = 0x00;

/// Set higher column start address for page addressing mode (0x10..=0x17)
pub const SET_HIGHER_COLUMN: u8 = 0x10;

/// Set memory addressing mode (0x20)
///
/// Followed by one parameter: 0x00 horizontal, 0x01 vertical, 0x02 page.
pub const MEMORY_ADDR_MODE: u8 = 0x20;

/// Set column address range (0x21)
///
/// Horizontal/vertical addressing modes only. Parameters: start, end.
pub const SET_COLUMN_ADDR: u8 = 0x21;

/// Set page address range (0x22)
///
/// Horizontal/vertical addressing modes only. Parameters: start, end.
pub const SET_PAGE_ADDR: u8 = 0x22;

/// Set page start address for page addressing mode (0xB0..=0xB7)
pub const SET_PAGE_START: u8 = 0xB0;

// Hardware configuration commands

/// Set display start line (0x40..=0x7F)
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap, column 0 mapped to SEG0 (0xA0)
///
/// OR with 0x01 to map column 127 to SEG0.
pub const SET_SEGMENT_REMAP: u8 = 0xA0;

/// Set multiplex ratio (0xA8)
///
/// Followed by one parameter: rows - 1.
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan direction, normal (0xC0)
pub const COM_SCAN_DIR_INC: u8 = 0xC0;

/// COM output scan direction, remapped (0xC8)
pub const COM_SCAN_DIR_DEC: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Followed by one parameter: vertical shift by COM, 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Followed by one parameter: 0x02 sequential (32-row panels), 0x12
/// alternative (64-row panels).
pub const SET_COM_PINS: u8 = 0xDA;

/// Charge pump setting (0x8D)
///
/// Followed by one parameter: 0x14 enable, 0x10 disable.
pub const CHARGE_PUMP: u8 = 0x8D;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency (0xD5)
pub const SET_DISPLAY_CLOCK_DIV_RATIO: u8 = 0xD5;

/// Set pre-charge period (0xD9)
pub const SET_PRECHARGE_PERIOD: u8 = 0xD9;

/// Set V_COMH deselect level (0xDB)
pub const SET_VCOM_DESELECT: u8 = 0xDB;

/// No operation (0xE3)
pub const NOP: u8 = 0xE3;

//! SSD1306 OLED Display Driver
//!
//! A driver for SSD1306 monochrome OLED controllers, covering panels up to
//! 128x64 pixels.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation required
//! - `embedded-hal` v1.0 support, SPI and I2C interfaces
//! - Packed page-major framebuffer in caller-provided storage
//! - Lines, rectangles, circles, arcs, polylines and bitmaps
//! - Bitmap font text with overflow reporting
//! - Scrolling, contrast, inversion and power control
//! - `embedded-graphics` integration (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1306::{Builder, Color, Dimensions, Display, FrameBuffer, SpiInterface};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = SpiInterface::new(spi, dc, rst);
//! let dims = Dimensions::default();
//! let config = match Builder::new().dimensions(dims).contrast(0xCF).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut framebuffer = match FrameBuffer::new(dims, [0u8; 1024]) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.reset(&mut delay);
//! let _ = display.init(&mut framebuffer);
//!
//! framebuffer.rectangle(0, 0, 127, 63, Color::White);
//! framebuffer.circle(64, 32, 20, Color::White);
//! let _ = display.flush(&framebuffer);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Pixel color
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Font contract and fixed-size glyph tables
pub mod font;
/// Packed monochrome framebuffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Shape rasterization into the framebuffer
pub mod raster;
/// Text rendering at the framebuffer cursor
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{
    AddressingMode, Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, ScrollInterval,
};
pub use display::{Display, DisplayState};
pub use error::{BufferError, BuilderError, Error};
pub use font::{Font, Glyph, MonoFont};
pub use framebuffer::FrameBuffer;
pub use interface::{
    DEFAULT_I2C_ADDRESS, DisplayInterface, I2cInterface, InterfaceError, SpiInterface,
};
pub use raster::{ARC_STEP_DEGREES, Vertex};
pub use text::WriteOutcome;

#[cfg(feature = "graphics")]
pub use graphics::GraphicDisplay;

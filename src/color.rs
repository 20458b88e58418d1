//! Color type for monochrome OLED panels
//!
//! The SSD1306 stores one bit per pixel. A set bit lights the pixel (shown as
//! [`Color::White`], whatever the physical emitter color is), a clear bit
//! leaves it dark ([`Color::Black`]).
//!
//! ## Example
//!
//! ```
//! use ssd1306::Color;
//!
//! assert_eq!(Color::Black.fill_byte(), 0x00);
//! assert_eq!(Color::White.fill_byte(), 0xFF);
//! assert_eq!(!Color::White, Color::Black);
//! ```

/// Pixel color of a monochrome panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Pixel off (bit cleared)
    #[default]
    Black,
    /// Pixel on (bit set)
    White,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::Black,
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::White,
        }
    }
}

impl Color {
    /// Byte value that paints eight vertically stacked pixels in this color
    ///
    /// ```
    /// use ssd1306::Color;
    ///
    /// assert_eq!(Color::Black.fill_byte(), 0x00);
    /// assert_eq!(Color::White.fill_byte(), 0xFF);
    /// ```
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Black => 0x00,
            Self::White => 0xFF,
        }
    }

    /// Whether this color sets the pixel bit
    pub fn is_on(self) -> bool {
        self == Self::White
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::White } else { Self::Black }
    }
}

impl core::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

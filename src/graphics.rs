//! Graphics support via embedded-graphics
//!
//! [`FrameBuffer`] implements [`DrawTarget`] and [`OriginDimensions`], so any
//! embedded-graphics drawable can be rendered into it alongside the native
//! shape and text routines. [`GraphicDisplay`] bundles a [`Display`] with its
//! framebuffer for the common case of one panel and one buffer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ssd1306::{Builder, Color, Dimensions, Display, FrameBuffer, GraphicDisplay, SpiInterface};
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
//! let interface = SpiInterface::new(MockSpi, MockPin, MockPin);
//! let dims = Dimensions::default();
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let framebuffer = match FrameBuffer::new(dims, [0u8; 1024]) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//! let mut display = match GraphicDisplay::new(Display::new(interface, config), framebuffer) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.init();
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 16))
//!     .into_styled(PrimitiveStyle::with_fill(Color::White))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(48, 20), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::White, 1))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, OLED!",
//!     Point::new(2, 10),
//!     MonoTextStyle::new(&FONT_6X10, Color::Black),
//! )
//! .draw(&mut display);
//!
//! let _ = display.flush();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
    primitives::Rectangle,
};

use crate::color::Color;
use crate::display::Display;
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

impl<B> DrawTarget for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        if let Some(bottom_right) = area.bottom_right() {
            self.filled_rectangle(
                area.top_left.x,
                area.top_left.y,
                bottom_right.x,
                bottom_right.y,
                color,
            );
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl<B> OriginDimensions for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

/// Display driver paired with its framebuffer
///
/// Draw through the [`DrawTarget`] implementation or
/// [`framebuffer_mut`](Self::framebuffer_mut), then call
/// [`flush`](Self::flush) to send the frame to the panel.
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Framebuffer storage, `AsRef<[u8]> + AsMut<[u8]>`
pub struct GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// The underlying display driver
    display: Display<I>,
    /// Off-screen pixels
    framebuffer: FrameBuffer<B>,
}

type GraphicsResult<I> = core::result::Result<(), Error<I>>;
type GraphicsNewResult<I, T> = core::result::Result<T, Error<I>>;

impl<I, B> GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Pair a driver with a framebuffer
    ///
    /// # Errors
    ///
    /// Returns `Error::SizeMismatch` if the framebuffer was created for other
    /// dimensions than the driver's configuration.
    pub fn new(display: Display<I>, framebuffer: FrameBuffer<B>) -> GraphicsNewResult<I, Self> {
        if framebuffer.dimensions() != *display.dimensions() {
            return Err(Error::SizeMismatch {
                expected: display.dimensions().buffer_size(),
                provided: framebuffer.as_bytes().len(),
            });
        }
        Ok(Self {
            display,
            framebuffer,
        })
    }

    /// Initialize the controller and blank the panel
    pub fn init(&mut self) -> GraphicsResult<I> {
        self.display.init(&mut self.framebuffer)
    }

    /// Send the framebuffer to the panel
    pub fn flush(&mut self) -> GraphicsResult<I> {
        self.display.flush(&self.framebuffer)
    }

    /// Access the framebuffer
    pub fn framebuffer(&self) -> &FrameBuffer<B> {
        &self.framebuffer
    }

    /// Access the framebuffer mutably, for the native drawing and text API
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer<B> {
        &mut self.framebuffer
    }

    /// Access the underlying Display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably
    ///
    /// Use this for contrast, power, inversion and scroll commands.
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Split back into driver and framebuffer
    pub fn release(self) -> (Display<I>, FrameBuffer<B>) {
        (self.display, self.framebuffer)
    }
}

impl<I, B> DrawTarget for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer.draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer.fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer.clear(color)
    }
}

impl<I, B> OriginDimensions for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        self.framebuffer.size()
    }
}

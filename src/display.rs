//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{
    ACTIVATE_SCROLL, CHARGE_PUMP, DEACTIVATE_SCROLL, DISPLAY_ALL_ON_RESUME, DISPLAY_OFF,
    DISPLAY_ON, INVERT_DISPLAY, LEFT_HORIZONTAL_SCROLL, MEMORY_ADDR_MODE, NORMAL_DISPLAY,
    RIGHT_HORIZONTAL_SCROLL, SET_COLUMN_ADDR, SET_COM_PINS, SET_CONTRAST,
    SET_DISPLAY_CLOCK_DIV_RATIO, SET_DISPLAY_OFFSET, SET_HIGHER_COLUMN, SET_LOWER_COLUMN,
    SET_MULTIPLEX_RATIO, SET_PAGE_ADDR, SET_PAGE_START, SET_PRECHARGE_PERIOD, SET_START_LINE,
    SET_VCOM_DESELECT, SET_VERTICAL_SCROLL_AREA, VERTICAL_AND_LEFT_HORIZONTAL_SCROLL,
    VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL,
};
use crate::config::{AddressingMode, Config, Dimensions, MAX_COLUMNS};
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Reset line hold and settle time
const RESET_DELAY_MS: u32 = 10;

/// Lifecycle of the controller as seen by the driver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// `init` has not completed since creation or the last reset
    #[default]
    Uninitialized,
    /// Initialized, panel output switched off
    Off,
    /// Initialized, panel showing GDDRAM contents
    On,
}

/// Direction of a continuous scroll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scroll {
    Right,
    Left,
    DiagonalRight,
    DiagonalLeft,
}

/// Core display driver for SSD1306
///
/// This struct owns the bus interface and issues controller commands. Pixel
/// data lives in a [`FrameBuffer`] owned by the caller and is handed in for
/// [`init`](Self::init) and [`flush`](Self::flush). For embedded-graphics
/// support, use `GraphicDisplay` (requires `graphics` feature).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Controller lifecycle
    state: DisplayState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic happens until [`init`](Self::init).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: DisplayState::Uninitialized,
        }
    }

    /// Pulse the hardware reset line
    ///
    /// Holds reset for 10 ms and waits another 10 ms after release. The
    /// controller forgets its configuration, so [`init`](Self::init) must run
    /// again before flushing.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.state = DisplayState::Uninitialized;
        self.interface.set_reset(true).map_err(Error::Interface)?;
        delay.delay_ms(RESET_DELAY_MS);
        self.interface.set_reset(false).map_err(Error::Interface)?;
        delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }

    /// Configure the controller, clear `framebuffer` and show it
    ///
    /// On success the display is on and the panel is blank. If any transfer
    /// fails the sequence stops at that command and the display stays
    /// [`DisplayState::Uninitialized`].
    pub fn init<B>(&mut self, framebuffer: &mut FrameBuffer<B>) -> DisplayResult<I>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        self.state = DisplayState::Uninitialized;
        self.check_framebuffer(framebuffer)?;

        let result = self.send_init_sequence().and_then(|()| {
            framebuffer.fill(Color::Black);
            framebuffer.set_cursor(0, 0);
            self.write_pages(framebuffer)
        });
        if let Err(err) = result {
            log::warn!("ssd1306: initialization aborted: {}", err);
            return Err(err);
        }

        self.state = DisplayState::On;
        log::debug!(
            "ssd1306: initialized {}x{}",
            self.config.dimensions.width(),
            self.config.dimensions.height()
        );
        Ok(())
    }

    fn send_init_sequence(&mut self) -> DisplayResult<I> {
        let config = &self.config;
        let multiplex = (config.dimensions.height() - 1) as u8;
        let display_mode = if config.inverse {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        };
        let sequence = [
            DISPLAY_OFF,
            SET_DISPLAY_CLOCK_DIV_RATIO,
            config.clock_divide,
            SET_MULTIPLEX_RATIO,
            multiplex,
            SET_DISPLAY_OFFSET,
            0x00,
            SET_START_LINE,
            CHARGE_PUMP,
            config.charge_pump,
            MEMORY_ADDR_MODE,
            config.addressing_mode as u8,
            config.segment_remap(),
            config.com_scan_direction(),
            SET_COM_PINS,
            config.com_pins,
            SET_CONTRAST,
            config.contrast,
            SET_PRECHARGE_PERIOD,
            config.precharge,
            SET_VCOM_DESELECT,
            config.vcom_deselect,
            DISPLAY_ALL_ON_RESUME,
            display_mode,
            DISPLAY_ON,
        ];
        self.send_commands(&sequence)
    }

    /// Transfer the whole framebuffer to the controller
    ///
    /// Pages are written in ascending order, each preceded by its addressing
    /// commands. The first failed transfer aborts the remaining pages.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before a successful [`init`](Self::init)
    /// and `Error::SizeMismatch` if `framebuffer` was built for other
    /// dimensions.
    pub fn flush<B>(&mut self, framebuffer: &FrameBuffer<B>) -> DisplayResult<I>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        if self.state == DisplayState::Uninitialized {
            return Err(Error::NotInitialized);
        }
        self.check_framebuffer(framebuffer)?;
        self.write_pages(framebuffer).inspect_err(|err| {
            log::warn!("ssd1306: flush aborted: {}", err);
        })
    }

    fn check_framebuffer<B>(&self, framebuffer: &FrameBuffer<B>) -> DisplayResult<I>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        if framebuffer.dimensions() != self.config.dimensions {
            return Err(Error::SizeMismatch {
                expected: self.config.dimensions.buffer_size(),
                provided: framebuffer.as_bytes().len(),
            });
        }
        Ok(())
    }

    fn write_pages<B>(&mut self, framebuffer: &FrameBuffer<B>) -> DisplayResult<I>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        let width = usize::from(self.config.dimensions.width());
        // columns past the controller's last one would wrap into the next page
        let visible = width.min(
            usize::from(MAX_COLUMNS).saturating_sub(usize::from(self.config.x_offset)),
        );
        for (page, bytes) in framebuffer.as_bytes().chunks(width).enumerate() {
            let page = page as u8;
            self.set_page_address(page)?;
            self.send_data(&bytes[..visible])?;
            log::trace!("ssd1306: flushed page {}", page);
        }
        Ok(())
    }

    /// Point the controller's RAM pointer at column `x_offset` of `page`
    fn set_page_address(&mut self, page: u8) -> DisplayResult<I> {
        let offset = self.config.x_offset;
        match self.config.addressing_mode {
            AddressingMode::Page => self.send_commands(&[
                SET_PAGE_START | page,
                SET_LOWER_COLUMN | (offset & 0x0F),
                SET_HIGHER_COLUMN | ((offset >> 4) & 0x07),
            ]),
            AddressingMode::Horizontal | AddressingMode::Vertical => {
                let last = (u16::from(offset) + self.config.dimensions.width() - 1)
                    .min(MAX_COLUMNS - 1) as u8;
                self.send_commands(&[SET_COLUMN_ADDR, offset, last, SET_PAGE_ADDR, page, page])
            }
        }
    }

    /// Set panel contrast, higher is brighter
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.send_commands(&[SET_CONTRAST, contrast])
    }

    /// Switch the panel output on or off
    ///
    /// Display RAM is retained while off, so switching back on shows the
    /// previous contents.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before a successful [`init`](Self::init).
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        if self.state == DisplayState::Uninitialized {
            return Err(Error::NotInitialized);
        }
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })?;
        self.state = if on {
            DisplayState::On
        } else {
            DisplayState::Off
        };
        log::debug!("ssd1306: display {:?}", self.state);
        Ok(())
    }

    /// Invert every pixel on the panel without touching RAM
    pub fn invert_display(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Scroll pages `start_page..=end_page` continuously to the right
    pub fn scroll_right(&mut self, start_page: u8, end_page: u8) -> DisplayResult<I> {
        self.start_scroll(Scroll::Right, start_page, end_page)
    }

    /// Scroll pages `start_page..=end_page` continuously to the left
    pub fn scroll_left(&mut self, start_page: u8, end_page: u8) -> DisplayResult<I> {
        self.start_scroll(Scroll::Left, start_page, end_page)
    }

    /// Scroll right while moving the whole panel up one row per step
    pub fn scroll_diagonal_right(&mut self, start_page: u8, end_page: u8) -> DisplayResult<I> {
        self.start_scroll(Scroll::DiagonalRight, start_page, end_page)
    }

    /// Scroll left while moving the whole panel up one row per step
    pub fn scroll_diagonal_left(&mut self, start_page: u8, end_page: u8) -> DisplayResult<I> {
        self.start_scroll(Scroll::DiagonalLeft, start_page, end_page)
    }

    /// Stop any running scroll
    ///
    /// RAM has to be rewritten afterwards, the controller does not restore
    /// the scrolled area.
    pub fn stop_scroll(&mut self) -> DisplayResult<I> {
        self.send_command(DEACTIVATE_SCROLL)
    }

    /// Scroll setup must happen while scrolling is deactivated
    fn start_scroll(&mut self, scroll: Scroll, start: u8, end: u8) -> DisplayResult<I> {
        if start > end || u16::from(end) >= self.config.dimensions.pages() {
            return Err(Error::InvalidPageRange { start, end });
        }
        let interval = self.config.scroll_interval as u8;

        match scroll {
            Scroll::Right | Scroll::Left => {
                let opcode = if scroll == Scroll::Right {
                    RIGHT_HORIZONTAL_SCROLL
                } else {
                    LEFT_HORIZONTAL_SCROLL
                };
                self.send_commands(&[
                    DEACTIVATE_SCROLL,
                    opcode,
                    0x00,
                    start,
                    interval,
                    end,
                    0x00,
                    0xFF,
                    ACTIVATE_SCROLL,
                ])
            }
            Scroll::DiagonalRight | Scroll::DiagonalLeft => {
                let opcode = if scroll == Scroll::DiagonalRight {
                    VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL
                } else {
                    VERTICAL_AND_LEFT_HORIZONTAL_SCROLL
                };
                self.send_commands(&[
                    DEACTIVATE_SCROLL,
                    SET_VERTICAL_SCROLL_AREA,
                    0x00,
                    self.config.dimensions.height() as u8,
                    opcode,
                    0x00,
                    start,
                    interval,
                    end,
                    0x01,
                    ACTIVATE_SCROLL,
                ])
            }
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send command bytes one at a time, stopping at the first failure
    fn send_commands(&mut self, cmds: &[u8]) -> DisplayResult<I> {
        cmds.iter().try_for_each(|cmd| self.send_command(*cmd))
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Current lifecycle state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Whether the panel output is on
    pub fn is_display_on(&self) -> bool {
        self.state == DisplayState::On
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the bus interface
    pub fn release(self) -> I {
        self.interface
    }
}

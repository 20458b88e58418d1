//! Packed monochrome framebuffer
//!
//! The SSD1306 addresses its RAM in pages: each byte covers eight vertically
//! stacked pixels of one column, least significant bit on top. The
//! [`FrameBuffer`] mirrors that layout exactly, so a page can be flushed
//! with a single data transfer.
//!
//! ```text
//!            x=0      x=1      x=2
//! page 0   [byte 0] [byte 1] [byte 2] ...   rows 0..=7  (bit 0 = row 0)
//! page 1   [byte W] [W + 1 ] [W + 2 ] ...   rows 8..=15
//! ```
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Color, Dimensions, FrameBuffer};
//!
//! let mut fb = match FrameBuffer::new(Dimensions::default(), [0u8; 1024]) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//! fb.set_pixel(10, 10, Color::White);
//! assert_eq!(fb.as_bytes()[128 + 10], 0b0000_0100);
//! assert_eq!(fb.pixel(10, 10), Some(Color::White));
//! ```

use crate::color::Color;
use crate::config::Dimensions;
use crate::error::BufferError;

type BufferResult<T> = core::result::Result<T, BufferError>;

/// Page containing row `y`
pub fn page_of(y: u32) -> u32 {
    y >> 3
}

/// Bit mask selecting row `y` within its page byte
pub fn bit_mask(y: u32) -> u8 {
    1 << (y & 7)
}

/// Buffer location of pixel `(x, y)` on a panel `width` pixels wide
///
/// Returns `(byte_index, bit_mask)`. The caller is responsible for bounds
/// checking.
///
/// ```
/// use ssd1306::framebuffer::pixel_address;
///
/// assert_eq!(pixel_address(10, 10, 128), (138, 0x04));
/// assert_eq!(pixel_address(127, 63, 128), (1023, 0x80));
/// ```
pub fn pixel_address(x: u32, y: u32, width: u32) -> (usize, u8) {
    let index = (page_of(y) * width + x) as usize;
    (index, bit_mask(y))
}

/// Off-screen pixel store with a text cursor
///
/// The backing storage `B` is provided by the caller (a static array, a
/// `&mut [u8]`, or a `Vec<u8>` with the `alloc` feature) and must be exactly
/// [`Dimensions::buffer_size`] bytes long. It is never reallocated.
#[derive(Debug)]
pub struct FrameBuffer<B> {
    dimensions: Dimensions,
    buffer: B,
    cursor_x: u16,
    cursor_y: u16,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `buffer` as a framebuffer and clear it to black
    ///
    /// # Errors
    ///
    /// Returns `BufferError::SizeMismatch` if the storage length differs from
    /// `dimensions.buffer_size()`.
    pub fn new(dimensions: Dimensions, mut buffer: B) -> BufferResult<Self> {
        let expected = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided != expected {
            return Err(BufferError::SizeMismatch { expected, provided });
        }
        buffer.as_mut().fill(Color::Black.fill_byte());
        Ok(Self {
            dimensions,
            buffer,
            cursor_x: 0,
            cursor_y: 0,
        })
    }

    /// Panel dimensions this buffer was created for
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.dimensions.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.dimensions.height()
    }

    /// Translate signed coordinates into a buffer location, `None` when off-panel
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let width = u32::from(self.dimensions.width());
        if x >= width || y >= u32::from(self.dimensions.height()) {
            return None;
        }
        Some(pixel_address(x, y, width))
    }

    /// Set a single pixel
    ///
    /// Coordinates outside the panel are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some((index, bit)) = self.locate(x, y) else {
            return;
        };
        let byte = &mut self.buffer.as_mut()[index];
        if color.is_on() {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    /// Read a single pixel, `None` outside the panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (index, bit) = self.locate(x, y)?;
        Some(Color::from(self.buffer.as_ref()[index] & bit != 0))
    }

    /// Paint the whole buffer in one color
    pub fn fill(&mut self, color: Color) {
        self.buffer.as_mut().fill(color.fill_byte());
    }

    /// Replace the whole buffer with raw page-major bytes
    ///
    /// # Errors
    ///
    /// Returns `BufferError::SizeMismatch` if `bytes` is not exactly the
    /// buffer size. The buffer is left unchanged in that case.
    pub fn load_raw(&mut self, bytes: &[u8]) -> BufferResult<()> {
        let target = self.buffer.as_mut();
        if bytes.len() != target.len() {
            return Err(BufferError::SizeMismatch {
                expected: target.len(),
                provided: bytes.len(),
            });
        }
        target.copy_from_slice(bytes);
        Ok(())
    }

    /// Move the text cursor
    ///
    /// Values are stored as given; glyph placement checks them when drawing.
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Current text cursor as `(x, y)`
    pub fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    /// Raw buffer contents
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Bytes of one page, `None` past the last page
    pub fn page(&self, page: u16) -> Option<&[u8]> {
        if page >= self.dimensions.pages() {
            return None;
        }
        let width = self.dimensions.width() as usize;
        let start = page as usize * width;
        self.buffer.as_ref().get(start..start + width)
    }

    /// Give back the backing storage
    pub fn release(self) -> B {
        self.buffer
    }
}

#[cfg(feature = "alloc")]
impl FrameBuffer<alloc::vec::Vec<u8>> {
    /// Allocate a zeroed framebuffer for `dimensions`
    pub fn alloc(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            buffer: alloc::vec![Color::Black.fill_byte(); dimensions.buffer_size()],
            cursor_x: 0,
            cursor_y: 0,
        }
    }
}

//! Font contract for text rendering
//!
//! A [`Font`] maps characters to [`Glyph`] bitmaps. Glyph data uses the same
//! layout as [`FrameBuffer::bitmap`](crate::FrameBuffer::bitmap): row-major,
//! most significant bit first, each row padded to a whole byte.
//!
//! [`MonoFont`] adapts a plain fixed-size glyph table covering a contiguous
//! character range, which is how most embedded font tables are stored.
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Font, MonoFont};
//!
//! // Two 3x3 glyphs starting at '+'
//! const DATA: [u8; 6] = [
//!     0b0100_0000, 0b1110_0000, 0b0100_0000, // '+'
//!     0b0000_0000, 0b1110_0000, 0b0000_0000, // ','
//! ];
//! let font = MonoFont::new(3, 3, '+', &DATA);
//!
//! let plus = font.glyph('+').map(|glyph| glyph.data);
//! assert_eq!(plus, Some(&DATA[..3]));
//! assert!(font.glyph('A').is_none());
//! ```

/// Bitmap of one character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph<'a> {
    /// Width in pixels, also the cursor advance
    pub width: u8,
    /// Height in pixels
    pub height: u8,
    /// Row-major, MSB-first bitmap, rows padded to whole bytes
    pub data: &'a [u8],
}

/// Character to glyph lookup
pub trait Font {
    /// Glyph for `ch`, `None` for unsupported characters
    fn glyph(&self, ch: char) -> Option<Glyph<'_>>;
}

impl<F: Font + ?Sized> Font for &F {
    fn glyph(&self, ch: char) -> Option<Glyph<'_>> {
        (**self).glyph(ch)
    }
}

/// Fixed-size glyph table for a contiguous character range
#[derive(Clone, Copy, Debug)]
pub struct MonoFont<'a> {
    width: u8,
    height: u8,
    first: char,
    data: &'a [u8],
}

impl<'a> MonoFont<'a> {
    /// Create a font whose glyph for `first` starts at `data[0]`
    ///
    /// Each glyph occupies `height * ceil(width / 8)` bytes. The character
    /// range ends with the last complete glyph in `data`.
    pub const fn new(width: u8, height: u8, first: char, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            first,
            data,
        }
    }

    /// Glyph width in pixels
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Glyph height in pixels
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Bytes used by one glyph
    pub fn glyph_size(&self) -> usize {
        usize::from(self.height) * usize::from(self.width).div_ceil(8)
    }
}

impl Font for MonoFont<'_> {
    fn glyph(&self, ch: char) -> Option<Glyph<'_>> {
        let index = (ch as u32).checked_sub(self.first as u32)? as usize;
        let size = self.glyph_size();
        let start = index.checked_mul(size)?;
        let data = self.data.get(start..start.checked_add(size)?)?;
        Some(Glyph {
            width: self.width,
            height: self.height,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGITS: [u8; 20] = [
        // '0': 5 rows of 9 pixels, 2 bytes per row
        0xFF, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, //
        // '1'
        0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xFF, 0x80,
    ];

    #[test]
    fn test_glyph_size_rounds_rows_up() {
        let font = MonoFont::new(9, 5, '0', &DIGITS);
        assert_eq!(font.glyph_size(), 10);
        assert_eq!(font.width(), 9);
        assert_eq!(font.height(), 5);
    }

    #[test]
    fn test_glyph_lookup_range() {
        let font = MonoFont::new(9, 5, '0', &DIGITS);
        assert_eq!(font.glyph('0').map(|g| g.data), Some(&DIGITS[..10]));
        assert_eq!(font.glyph('1').map(|g| g.data), Some(&DIGITS[10..]));
        assert!(font.glyph('2').is_none());
        assert!(font.glyph('/').is_none());
        assert!(font.glyph('\u{1F600}').is_none());
    }

    #[test]
    fn test_font_by_reference() {
        let font = MonoFont::new(9, 5, '0', &DIGITS);
        let by_ref = &font;
        assert_eq!(by_ref.glyph('1').map(|g| g.width), Some(9));
    }
}

//! Text rendering
//!
//! Characters are drawn at the framebuffer's cursor through the bitmap blit,
//! then the cursor advances by the glyph width. A glyph that would cross the
//! right (or bottom) edge of the panel is rejected whole: nothing is drawn,
//! the cursor stays put, and the character is handed back to the caller.
//! There is no automatic line wrapping.

use crate::color::Color;
use crate::font::Font;
use crate::framebuffer::FrameBuffer;

/// Result of writing text to the framebuffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum WriteOutcome {
    /// Every character was placed
    Written,
    /// This character did not fit and was not drawn
    Rejected(char),
}

impl WriteOutcome {
    /// Whether all characters were placed
    pub fn is_written(self) -> bool {
        self == Self::Written
    }
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw one character at the cursor
    ///
    /// Characters the font has no glyph for draw nothing and count as
    /// written.
    pub fn write_char<F: Font + ?Sized>(&mut self, ch: char, font: &F, color: Color) -> WriteOutcome {
        let Some(glyph) = font.glyph(ch) else {
            return WriteOutcome::Written;
        };

        let (x, y) = self.cursor();
        let right = u32::from(x) + u32::from(glyph.width);
        let bottom = u32::from(y) + u32::from(glyph.height);
        if right > u32::from(self.width()) || bottom > u32::from(self.height()) {
            return WriteOutcome::Rejected(ch);
        }

        self.bitmap(
            i32::from(x),
            i32::from(y),
            glyph.data,
            u16::from(glyph.width),
            u16::from(glyph.height),
            color,
        );
        self.set_cursor(x + u16::from(glyph.width), y);
        WriteOutcome::Written
    }

    /// Draw a string at the cursor
    ///
    /// Stops at the first character that does not fit and returns it.
    pub fn write_str<F: Font + ?Sized>(&mut self, text: &str, font: &F, color: Color) -> WriteOutcome {
        for ch in text.chars() {
            if let WriteOutcome::Rejected(rejected) = self.write_char(ch, font, color) {
                return WriteOutcome::Rejected(rejected);
            }
        }
        WriteOutcome::Written
    }
}

//! Shape rasterization
//!
//! Stateless drawing algorithms on top of [`FrameBuffer::set_pixel`]. None of
//! them perform I/O and none of them fail: pixels that land outside the panel
//! are dropped individually, so a partially off-screen shape renders its
//! visible part only.
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Color, Dimensions, FrameBuffer, Vertex};
//!
//! let mut fb = match FrameBuffer::new(Dimensions::default(), [0u8; 1024]) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//! fb.rectangle(10, 10, 20, 20, Color::White);
//! fb.filled_circle(64, 32, 8, Color::White);
//! fb.arc(100, 32, 12, 0, 180, Color::White);
//! fb.polyline(
//!     &[Vertex::new(0, 63), Vertex::new(8, 50), Vertex::new(16, 63)],
//!     Color::White,
//! );
//! assert_eq!(fb.pixel(10, 10), Some(Color::White));
//! ```

use crate::color::Color;
use crate::framebuffer::FrameBuffer;

/// Default angular step of [`FrameBuffer::arc`], in degrees
pub const ARC_STEP_DEGREES: u16 = 10;

/// Fixed-point scale of [`SINE_Q14`] (1.0 == 16384)
const Q14_ONE: i32 = 1 << 14;

/// sin(d) for d in 0..=90 degrees, Q14
const SINE_Q14: [i32; 91] = [
    0, 286, 572, 857, 1143, 1428, 1713, 1997, 2280, 2563, //
    2845, 3126, 3406, 3686, 3964, 4240, 4516, 4790, 5063, 5334, //
    5604, 5872, 6138, 6402, 6664, 6924, 7182, 7438, 7692, 7943, //
    8192, 8438, 8682, 8923, 9162, 9397, 9630, 9860, 10087, 10311, //
    10531, 10749, 10963, 11174, 11381, 11585, 11786, 11982, 12176, 12365, //
    12551, 12733, 12911, 13085, 13255, 13421, 13583, 13741, 13894, 14044, //
    14189, 14330, 14466, 14598, 14726, 14849, 14968, 15082, 15191, 15296, //
    15396, 15491, 15582, 15668, 15749, 15826, 15897, 15964, 16026, 16083, //
    16135, 16182, 16225, 16262, 16294, 16322, 16344, 16362, 16374, 16382, //
    16384,
];

/// Polyline vertex
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertex {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Vertex {
    /// Create a vertex
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// sin(degrees) in Q14, any angle
fn sin_q14(degrees: u32) -> i32 {
    let d = (degrees % 360) as usize;
    match d {
        0..=90 => SINE_Q14[d],
        91..=180 => SINE_Q14[180 - d],
        181..=270 => -SINE_Q14[d - 180],
        _ => -SINE_Q14[360 - d],
    }
}

/// cos(degrees) in Q14, any angle
fn cos_q14(degrees: u32) -> i32 {
    sin_q14(degrees + 90)
}

/// `radius * q14` rounded half away from zero
fn scale_q14(radius: i32, q14: i32) -> i32 {
    let product = radius * q14;
    let half = Q14_ONE / 2;
    if product >= 0 {
        (product + half) >> 14
    } else {
        -((-product + half) >> 14)
    }
}

/// Inclusive range of steps `0..=len` along an axis starting at `start` and
/// moving by `sign` that land inside `0..limit`
fn visible_steps(start: i64, sign: i64, len: i64, limit: i64) -> Option<(i64, i64)> {
    let (lo, hi) = if sign > 0 {
        (-start, limit - 1 - start)
    } else {
        (start - (limit - 1), start)
    };
    let (lo, hi) = (lo.max(0), hi.min(len));
    (lo <= hi).then_some((lo, hi))
}

/// Minor-axis offset of Bresenham step `step` for a line spanning `major`
/// by `minor` pixels (`major >= minor`, `major > 0`)
///
/// Closed form of the error-term walk: `ceil((ceil(major / 2) - major +
/// step * minor) / major)`. `step * minor` reaches 2^64 for lines spanning
/// the whole `i32` range, so the arithmetic runs in `i128`.
fn minor_offset(major: i64, minor: i64, step: i64) -> i64 {
    let major_wide = i128::from(major);
    let half = (major_wide + 1) / 2;
    let n = half - major_wide + i128::from(step) * i128::from(minor);
    let q = n.div_euclid(major_wide) + i128::from(n.rem_euclid(major_wide) != 0);
    // 0 <= q <= minor
    i64::try_from(q).unwrap_or(minor)
}

/// Whether the square of half-side `radius` around `(cx, cy)` touches a
/// `width` x `height` panel
fn square_visible(cx: i32, cy: i32, radius: u16, width: u16, height: u16) -> bool {
    let r = i64::from(radius);
    let (cx, cy) = (i64::from(cx), i64::from(cy));
    cx + r >= 0 && cx - r < i64::from(width) && cy + r >= 0 && cy - r < i64::from(height)
}

/// Point on the circle of `radius` around `(cx, cy)` at `degrees`
///
/// Angles grow clockwise on screen since y points down.
fn arc_point(cx: i32, cy: i32, radius: u16, degrees: u32) -> (i32, i32) {
    let r = i32::from(radius);
    (
        cx + scale_q14(r, cos_q14(degrees)),
        cy + scale_q14(r, sin_q14(degrees)),
    )
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Horizontal run from `x0` to `x1` inclusive, clipped to the panel
    fn horizontal_run(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        if y < 0 || y >= i32::from(self.height()) {
            return;
        }
        let start = x0.min(x1).max(0);
        let end = x0.max(x1).min(i32::from(self.width()) - 1);
        for x in start..=end {
            self.set_pixel(x, y, color);
        }
    }

    /// Vertical run from `y0` to `y1` inclusive, clipped to the panel
    fn vertical_run(&mut self, x: i32, y0: i32, y1: i32, color: Color) {
        if x < 0 || x >= i32::from(self.width()) {
            return;
        }
        let start = y0.min(y1).max(0);
        let end = y0.max(y1).min(i32::from(self.height()) - 1);
        for y in start..=end {
            self.set_pixel(x, y, color);
        }
    }

    /// Draw a line with Bresenham's algorithm
    ///
    /// Endpoints may be given in any order and may lie anywhere in the `i32`
    /// plane. Straight horizontal and vertical lines are drawn as runs; other
    /// lines only visit the steps whose major coordinate is on the panel.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if y0 == y1 {
            self.horizontal_run(x0, x1, y0, color);
            return;
        }
        if x0 == x1 {
            self.vertical_run(x0, y0, y1, color);
            return;
        }

        let width = i64::from(self.width());
        let height = i64::from(self.height());
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        if x0.max(x1) < 0 || x0.min(x1) >= width || y0.max(y1) < 0 || y0.min(y1) >= height {
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        if dx >= dy {
            if let Some((first, last)) = visible_steps(x0, sx, dx, width) {
                for step in first..=last {
                    let y = y0 + sy * minor_offset(dx, dy, step);
                    self.plot(x0 + sx * step, y, color);
                }
            }
        } else if let Some((first, last)) = visible_steps(y0, sy, dy, height) {
            for step in first..=last {
                let x = x0 + sx * minor_offset(dy, dx, step);
                self.plot(x, y0 + sy * step, color);
            }
        }
    }

    /// `set_pixel` for wide coordinates, dropping anything outside `i32`
    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    /// Draw a rectangle outline between two opposite corners
    pub fn rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));

        self.line(left, top, right, top, color);
        self.line(right, top, right, bottom, color);
        self.line(right, bottom, left, bottom, color);
        self.line(left, bottom, left, top, color);
    }

    /// Draw a filled rectangle between two opposite corners
    pub fn filled_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let top = y0.min(y1).max(0);
        let bottom = y0.max(y1).min(i32::from(self.height()) - 1);
        for y in top..=bottom {
            self.horizontal_run(x0, x1, y, color);
        }
    }

    /// Draw a circle outline with the midpoint algorithm
    ///
    /// `radius == 0` draws the center pixel only.
    pub fn circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) {
        // past this check every `cx ± r`, `cy ± r` fits in i32
        if !square_visible(cx, cy, radius, self.width(), self.height()) {
            return;
        }
        let r = i32::from(radius);
        let mut x = -r;
        let mut y = 0;
        let mut err = 2 - 2 * r;

        loop {
            self.set_pixel(cx - x, cy + y, color);
            self.set_pixel(cx + x, cy + y, color);
            self.set_pixel(cx + x, cy - y, color);
            self.set_pixel(cx - x, cy - y, color);

            let mut e2 = err;
            if e2 <= y {
                y += 1;
                err += y * 2 + 1;
                if -x == y && e2 <= x {
                    e2 = 0;
                }
            }
            if e2 > x {
                x += 1;
                err += x * 2 + 1;
            }
            if x > 0 {
                break;
            }
        }
    }

    /// Draw a filled circle
    ///
    /// Uses the same recurrence as [`circle`](Self::circle) and fills each
    /// row once, at its widest extent.
    pub fn filled_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) {
        if !square_visible(cx, cy, radius, self.width(), self.height()) {
            return;
        }
        let r = i32::from(radius);
        let mut x = -r;
        let mut y = 0;
        let mut err = 2 - 2 * r;
        let mut last_row = None;

        loop {
            if last_row != Some(y) {
                self.horizontal_run(cx + x, cx - x, cy + y, color);
                if y != 0 {
                    self.horizontal_run(cx + x, cx - x, cy - y, color);
                }
                last_row = Some(y);
            }

            let mut e2 = err;
            if e2 <= y {
                y += 1;
                err += y * 2 + 1;
                if -x == y && e2 <= x {
                    e2 = 0;
                }
            }
            if e2 > x {
                x += 1;
                err += x * 2 + 1;
            }
            if x > 0 {
                break;
            }
        }
    }

    /// Walk an arc and return its first and last points
    ///
    /// Returns `None` without drawing when the arc's circle misses the panel.
    fn arc_path(
        &mut self,
        center: (i32, i32),
        radius: u16,
        start_angle: u16,
        sweep: u16,
        step: u16,
        color: Color,
    ) -> Option<((i32, i32), (i32, i32))> {
        let (cx, cy) = center;
        if !square_visible(cx, cy, radius, self.width(), self.height()) {
            return None;
        }
        let step = u32::from(step.max(1));
        let end = u32::from(start_angle) + u32::from(sweep);
        let mut angle = u32::from(start_angle);

        let first = arc_point(cx, cy, radius, angle);
        self.set_pixel(first.0, first.1, color);

        let mut previous = first;
        while angle < end {
            angle = (angle + step).min(end);
            let next = arc_point(cx, cy, radius, angle);
            self.line(previous.0, previous.1, next.0, next.1, color);
            previous = next;
        }
        Some((first, previous))
    }

    /// Draw an arc of `sweep` degrees starting at `start_angle`
    ///
    /// 0 degrees points right and angles grow clockwise. Points are sampled
    /// every [`ARC_STEP_DEGREES`] and joined with lines. Sweeps beyond 360
    /// keep stepping around the circle.
    pub fn arc(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u16,
        start_angle: u16,
        sweep: u16,
        color: Color,
    ) {
        self.arc_path((cx, cy), radius, start_angle, sweep, ARC_STEP_DEGREES, color);
    }

    /// Draw an arc sampled every `step` degrees
    ///
    /// A `step` of 0 is treated as 1.
    #[allow(clippy::too_many_arguments)]
    pub fn arc_with_step(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u16,
        start_angle: u16,
        sweep: u16,
        step: u16,
        color: Color,
    ) {
        self.arc_path((cx, cy), radius, start_angle, sweep, step, color);
    }

    /// Draw an arc plus the radius lines to both of its ends (a pie outline)
    pub fn arc_with_radius_line(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u16,
        start_angle: u16,
        sweep: u16,
        color: Color,
    ) {
        if let Some((first, last)) =
            self.arc_path((cx, cy), radius, start_angle, sweep, ARC_STEP_DEGREES, color)
        {
            self.line(cx, cy, first.0, first.1, color);
            self.line(cx, cy, last.0, last.1, color);
        }
    }

    /// Draw lines between consecutive vertices
    ///
    /// Fewer than two vertices draws nothing.
    pub fn polyline(&mut self, vertices: &[Vertex], color: Color) {
        for pair in vertices.windows(2) {
            self.line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, color);
        }
    }

    /// Blit a 1-bit bitmap with its top-left corner at `(x, y)`
    ///
    /// `bitmap` is row-major, most significant bit first, each row padded to
    /// a whole byte. Set bits are drawn in `color`; clear bits leave the
    /// buffer untouched. Bytes missing from a short bitmap count as clear.
    pub fn bitmap(&mut self, x: i32, y: i32, bitmap: &[u8], width: u16, height: u16, color: Color) {
        if width == 0 {
            return;
        }
        let row_bytes = usize::from(width).div_ceil(8);
        let stored_rows = bitmap.len().div_ceil(row_bytes);
        let (x, y) = (i64::from(x), i64::from(y));

        // only the columns and rows that land on the panel
        let cols = visible_span(x, width, self.width());
        let rows = visible_span(y, height, self.height());
        let (Some((first_col, last_col)), Some((first_row, last_row))) = (cols, rows) else {
            return;
        };

        for row in first_row..=last_row {
            if usize::from(row) >= stored_rows {
                break;
            }
            let row_start = usize::from(row) * row_bytes;
            for col in first_col..=last_col {
                let byte = bitmap
                    .get(row_start + usize::from(col) / 8)
                    .copied()
                    .unwrap_or(0);
                if byte & (0x80 >> (col % 8)) != 0 {
                    self.plot(x + i64::from(col), y + i64::from(row), color);
                }
            }
        }
    }
}

/// Offsets `0..len` from `origin` that fall inside `0..limit`
fn visible_span(origin: i64, len: u16, limit: u16) -> Option<(u16, u16)> {
    let first = (-origin).max(0);
    let last = (i64::from(limit) - 1 - origin).min(i64::from(len) - 1);
    if first > last {
        return None;
    }
    Some((u16::try_from(first).ok()?, u16::try_from(last).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use alloc::vec::Vec;

    fn test_buffer() -> FrameBuffer<[u8; 1024]> {
        FrameBuffer::new(Dimensions::default(), [0u8; 1024]).unwrap()
    }

    fn lit_pixels(fb: &FrameBuffer<[u8; 1024]>) -> Vec<(i32, i32)> {
        let mut lit = Vec::new();
        for y in 0..64 {
            for x in 0..128 {
                if fb.pixel(x, y) == Some(Color::White) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_trig_table_quadrants() {
        assert_eq!(sin_q14(0), 0);
        assert_eq!(sin_q14(90), Q14_ONE);
        assert_eq!(sin_q14(180), 0);
        assert_eq!(sin_q14(270), -Q14_ONE);
        assert_eq!(sin_q14(360), 0);
        assert_eq!(cos_q14(0), Q14_ONE);
        assert_eq!(cos_q14(180), -Q14_ONE);
        assert_eq!(sin_q14(30), 8192);
        assert_eq!(sin_q14(210), -8192);
    }

    #[test]
    fn test_zero_length_line_sets_one_pixel() {
        let mut fb = test_buffer();
        fb.line(17, 23, 17, 23, Color::White);
        assert_eq!(lit_pixels(&fb), alloc::vec![(17, 23)]);
    }

    #[test]
    fn test_line_matches_bresenham_reference() {
        let mut fb = test_buffer();
        fb.line(0, 0, 4, 2, Color::White);
        assert_eq!(
            lit_pixels(&fb),
            alloc::vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
        );
    }

    #[test]
    fn test_line_reversed_endpoints() {
        let mut forward = test_buffer();
        forward.line(5, 40, 60, 40, Color::White);
        let mut reversed = test_buffer();
        reversed.line(60, 40, 5, 40, Color::White);
        assert_eq!(forward.as_bytes(), reversed.as_bytes());

        let mut diagonal = test_buffer();
        diagonal.line(30, 30, 10, 10, Color::White);
        let lit = lit_pixels(&diagonal);
        assert_eq!(lit.len(), 21);
        assert!(lit.iter().all(|(x, y)| x == y));

        let mut steep = test_buffer();
        steep.line(3, 50, 1, 2, Color::White);
        let lit = lit_pixels(&steep);
        assert_eq!(lit.len(), 49);
        assert!(lit.contains(&(3, 50)));
        assert!(lit.contains(&(1, 2)));
    }

    #[test]
    fn test_line_clipped_off_screen() {
        let mut fb = test_buffer();
        fb.line(-10, 5, 200, 5, Color::White);
        let lit = lit_pixels(&fb);
        assert_eq!(lit.len(), 128);
        assert!(lit.iter().all(|(_, y)| *y == 5));
    }

    #[test]
    fn test_black_line_clears() {
        let mut fb = test_buffer();
        fb.fill(Color::White);
        fb.line(0, 0, 0, 63, Color::Black);
        assert_eq!(fb.pixel(0, 10), Some(Color::Black));
        assert_eq!(fb.pixel(1, 10), Some(Color::White));
    }

    #[test]
    fn test_rectangle_corner_order_is_irrelevant() {
        let mut a = test_buffer();
        a.rectangle(10, 10, 20, 20, Color::White);
        let mut b = test_buffer();
        b.rectangle(20, 20, 10, 10, Color::White);
        let mut c = test_buffer();
        c.rectangle(20, 10, 10, 20, Color::White);
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert_eq!(a.as_bytes(), c.as_bytes());
        assert_eq!(lit_pixels(&a).len(), 40);
        assert_eq!(a.pixel(15, 15), Some(Color::Black));
    }

    #[test]
    fn test_filled_rectangle_covers_area() {
        let mut fb = test_buffer();
        fb.filled_rectangle(12, 9, 3, 4, Color::White);
        let lit = lit_pixels(&fb);
        assert_eq!(lit.len(), 10 * 6);
        assert!(lit.iter().all(|(x, y)| (3..=12).contains(x) && (4..=9).contains(y)));
    }

    #[test]
    fn test_zero_radius_circle_sets_center() {
        let mut fb = test_buffer();
        fb.circle(64, 32, 0, Color::White);
        assert_eq!(lit_pixels(&fb), alloc::vec![(64, 32)]);
    }

    #[test]
    fn test_circle_is_symmetric_and_reaches_extremes() {
        let (cx, cy, r) = (64, 32, 20);
        let mut fb = test_buffer();
        fb.circle(cx, cy, r as u16, Color::White);
        let lit = lit_pixels(&fb);

        for (x, y) in [(cx + r, cy), (cx - r, cy), (cx, cy + r), (cx, cy - r)] {
            assert!(lit.contains(&(x, y)));
        }
        for &(x, y) in &lit {
            let (dx, dy) = (x - cx, y - cy);
            assert!(lit.contains(&(cx - dx, cy + dy)));
            assert!(lit.contains(&(cx + dx, cy - dy)));
            assert!(lit.contains(&(cx + dy, cy + dx)));
        }
        assert_eq!(fb.pixel(cx, cy), Some(Color::Black));
    }

    #[test]
    fn test_circle_ring_has_no_gaps() {
        let (cx, cy) = (64, 32);
        let mut fb = test_buffer();
        fb.circle(cx, cy, 15, Color::White);
        let lit = lit_pixels(&fb);
        for &(x, y) in &lit {
            let neighbours = lit
                .iter()
                .filter(|(nx, ny)| (nx - x).abs() <= 1 && (ny - y).abs() <= 1 && (*nx, *ny) != (x, y))
                .count();
            assert!(neighbours >= 2, "isolated run end at ({x}, {y})");
        }
    }

    #[test]
    fn test_circle_partially_off_screen() {
        let mut fb = test_buffer();
        fb.circle(0, 0, 10, Color::White);
        assert_eq!(fb.pixel(10, 0), Some(Color::White));
        assert_eq!(fb.pixel(0, 10), Some(Color::White));
    }

    #[test]
    fn test_filled_circle_covers_outline() {
        let mut outline = test_buffer();
        outline.circle(40, 30, 12, Color::White);
        let mut filled = test_buffer();
        filled.filled_circle(40, 30, 12, Color::White);

        for (x, y) in lit_pixels(&outline) {
            assert_eq!(filled.pixel(x, y), Some(Color::White));
        }
        assert_eq!(filled.pixel(40, 30), Some(Color::White));
        assert_eq!(filled.pixel(40 + 13, 30), Some(Color::Black));

        let mut dot = test_buffer();
        dot.filled_circle(5, 5, 0, Color::White);
        assert_eq!(lit_pixels(&dot), alloc::vec![(5, 5)]);
    }

    #[test]
    fn test_quarter_arc_stays_in_quadrant() {
        let (cx, cy) = (64, 32);
        let mut fb = test_buffer();
        fb.arc(cx, cy, 20, 0, 90, Color::White);
        let lit = lit_pixels(&fb);
        assert!(lit.contains(&(cx + 20, cy)));
        assert!(lit.contains(&(cx, cy + 20)));
        assert!(lit.iter().all(|(x, y)| *x >= cx && *y >= cy));
    }

    #[test]
    fn test_full_arc_hits_cardinal_points() {
        let (cx, cy) = (64, 32);
        let mut fb = test_buffer();
        fb.arc(cx, cy, 20, 0, 360, Color::White);
        for (x, y) in [(cx + 20, cy), (cx, cy + 20), (cx - 20, cy), (cx, cy - 20)] {
            assert_eq!(fb.pixel(x, y), Some(Color::White));
        }
    }

    #[test]
    fn test_arc_sweep_past_full_turn_keeps_stepping() {
        let mut full = test_buffer();
        full.arc(64, 32, 20, 0, 360, Color::White);
        let mut wrapped = test_buffer();
        wrapped.arc(64, 32, 20, 0, 450, Color::White);
        assert_eq!(full.as_bytes(), wrapped.as_bytes());
    }

    #[test]
    fn test_zero_sweep_arc_plots_start_point() {
        let mut fb = test_buffer();
        fb.arc(64, 32, 10, 90, 0, Color::White);
        assert_eq!(lit_pixels(&fb), alloc::vec![(64, 42)]);
    }

    #[test]
    fn test_arc_with_radius_line_draws_both_radii() {
        let (cx, cy) = (64, 32);
        let mut fb = test_buffer();
        fb.arc_with_radius_line(cx, cy, 20, 0, 90, Color::White);
        assert_eq!(fb.pixel(cx, cy), Some(Color::White));
        assert_eq!(fb.pixel(cx + 10, cy), Some(Color::White));
        assert_eq!(fb.pixel(cx, cy + 10), Some(Color::White));
    }

    #[test]
    fn test_arc_with_step_uses_custom_resolution() {
        let mut coarse = test_buffer();
        coarse.arc_with_step(64, 32, 20, 0, 90, 90, Color::White);
        let mut line = test_buffer();
        line.line(84, 32, 64, 52, Color::White);
        assert_eq!(coarse.as_bytes(), line.as_bytes());
    }

    #[test]
    fn test_polyline() {
        let mut fb = test_buffer();
        fb.polyline(&[Vertex::new(0, 0)], Color::White);
        fb.polyline(&[], Color::White);
        assert!(lit_pixels(&fb).is_empty());

        fb.polyline(
            &[Vertex::new(0, 0), Vertex::new(10, 0), Vertex::from((10, 10))],
            Color::White,
        );
        let mut expected = test_buffer();
        expected.line(0, 0, 10, 0, Color::White);
        expected.line(10, 0, 10, 10, Color::White);
        assert_eq!(fb.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn test_bitmap_is_transparent_blit() {
        let mut fb = test_buffer();
        fb.fill(Color::White);
        // 10x2: row 0 = 1000000001, row 1 = 0100000000
        let bitmap = [0b1000_0000, 0b0100_0000, 0b0100_0000, 0b0000_0000];
        fb.bitmap(4, 6, &bitmap, 10, 2, Color::Black);

        assert_eq!(fb.pixel(4, 6), Some(Color::Black));
        assert_eq!(fb.pixel(13, 6), Some(Color::Black));
        assert_eq!(fb.pixel(5, 7), Some(Color::Black));
        assert_eq!(fb.pixel(5, 6), Some(Color::White));
        assert_eq!(fb.pixel(4, 7), Some(Color::White));
        let cleared = fb.as_bytes().iter().map(|b| b.count_zeros()).sum::<u32>();
        assert_eq!(cleared, 3);
    }

    #[test]
    fn test_bitmap_short_source_reads_as_clear() {
        let mut fb = test_buffer();
        fb.bitmap(0, 0, &[0xFF], 8, 4, Color::White);
        assert_eq!(lit_pixels(&fb).len(), 8);
    }

    #[test]
    fn test_line_spanning_full_i32_range() {
        let mut fb = test_buffer();
        fb.line(i32::MIN, 0, i32::MAX, 1, Color::White);
        for x in 0..128 {
            assert_eq!(fb.pixel(x, 0), Some(Color::Black));
            assert_eq!(fb.pixel(x, 1), Some(Color::White));
        }
        assert_eq!(lit_pixels(&fb).len(), 128);

        let mut steep = test_buffer();
        steep.line(5, i32::MIN, 6, i32::MAX, Color::White);
        let expected: Vec<(i32, i32)> = (0..64).map(|y| (6, y)).collect();
        assert_eq!(lit_pixels(&steep), expected);
    }

    #[test]
    fn test_long_diagonal_only_lights_visible_part() {
        let mut fb = test_buffer();
        fb.line(-1000, -1000, 1000, 1000, Color::White);
        let expected: Vec<(i32, i32)> = (0..64).map(|i| (i, i)).collect();
        assert_eq!(lit_pixels(&fb), expected);
    }

    #[test]
    fn test_shapes_at_extreme_coordinates_draw_nothing() {
        let mut fb = test_buffer();
        fb.circle(i32::MAX, 0, 1, Color::White);
        fb.circle(i32::MIN, i32::MAX, u16::MAX, Color::White);
        fb.filled_circle(i32::MIN, i32::MIN, u16::MAX, Color::White);
        fb.filled_circle(i32::MAX - 10, 0, 20, Color::White);
        fb.arc(i32::MAX, i32::MAX, 10, 0, 360, Color::White);
        fb.arc_with_radius_line(i32::MIN, 0, u16::MAX, 45, 90, Color::White);
        fb.bitmap(i32::MAX, 0, &[0xFF], 8, 1, Color::White);
        fb.bitmap(i32::MIN, i32::MIN, &[0xFF], 8, 1, Color::White);
        fb.bitmap(0, i32::MAX, &[0xFF], 8, 1, Color::White);
        assert!(lit_pixels(&fb).is_empty());
    }

    #[test]
    fn test_bitmap_clipped_at_left_edge() {
        let mut fb = test_buffer();
        fb.bitmap(-4, 0, &[0xFF], 8, 1, Color::White);
        assert_eq!(lit_pixels(&fb), alloc::vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }
}

//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Maximum segment outputs (columns) driven by the SSD1306
pub const MAX_COLUMNS: u16 = 128;

/// Maximum COM outputs (rows) driven by the SSD1306
pub const MAX_ROWS: u16 = 64;

/// Height of one page in pixels
pub const PAGE_HEIGHT: u16 = 8;

/// Display dimensions
///
/// Only obtainable through [`Dimensions::new`] or [`Dimensions::DEFAULT`], so
/// a value always describes a panel the controller can drive.
///
/// ```compile_fail
/// use ssd1306::Dimensions;
///
/// let dims = Dimensions { width: 128, height: 60 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (segment outputs)
    width: u16,
    /// Height in pixels (COM outputs)
    height: u16,
}

impl Dimensions {
    /// The common 128x64 panel
    pub const DEFAULT: Self = Self {
        width: 128,
        height: 64,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is 0 or greater than [`MAX_COLUMNS`]
    /// - height is 0, greater than [`MAX_ROWS`], or not a multiple of 8
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || height % PAGE_HEIGHT != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / PAGE_HEIGHT
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.height as usize / 8
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// GDDRAM addressing mode selected during initialization
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AddressingMode {
    /// Column pointer wraps to the next page at the end of a row
    Horizontal = 0x00,
    /// Page pointer wraps to the next column at the end of a column
    Vertical = 0x01,
    /// Column pointer wraps within the current page
    #[default]
    Page = 0x02,
}

/// Frame interval between scroll steps
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ScrollInterval {
    /// 2 frames
    Frames2 = 0x07,
    /// 3 frames
    Frames3 = 0x04,
    /// 4 frames
    Frames4 = 0x05,
    /// 5 frames
    #[default]
    Frames5 = 0x00,
    /// 25 frames
    Frames25 = 0x06,
    /// 64 frames
    Frames64 = 0x01,
    /// 128 frames
    Frames128 = 0x02,
    /// 256 frames
    Frames256 = 0x03,
}

/// Display configuration
///
/// This struct holds the panel parameters sent during initialization and
/// used when flushing. Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Column offset of the visible area in controller RAM
    pub x_offset: u8,
    /// Memory addressing mode
    pub addressing_mode: AddressingMode,
    /// Mirror columns (segment remap off)
    pub mirror_horizontal: bool,
    /// Mirror rows (COM scan direction normal)
    pub mirror_vertical: bool,
    /// Start in inverse display mode
    pub inverse: bool,
    /// Initial contrast
    pub contrast: u8,
    /// Display clock divide ratio / oscillator frequency
    pub clock_divide: u8,
    /// Pre-charge period
    pub precharge: u8,
    /// V_COMH deselect level
    pub vcom_deselect: u8,
    /// Charge pump setting
    pub charge_pump: u8,
    /// COM pins hardware configuration
    pub com_pins: u8,
    /// Frame interval used by the scroll commands
    pub scroll_interval: ScrollInterval,
}

impl Config {
    /// Segment remap command byte for the configured orientation
    pub fn segment_remap(&self) -> u8 {
        if self.mirror_horizontal {
            crate::command::SET_SEGMENT_REMAP
        } else {
            crate::command::SET_SEGMENT_REMAP | 0x01
        }
    }

    /// COM scan direction command byte for the configured orientation
    pub fn com_scan_direction(&self) -> u8 {
        if self.mirror_vertical {
            crate::command::COM_SCAN_DIR_INC
        } else {
            crate::command::COM_SCAN_DIR_DEC
        }
    }
}

/// COM pins configuration matching the panel geometry
///
/// Wide short panels (128x32, 96x16) route COM lines sequentially, everything
/// else (128x64, 64x48, 64x32, 72x40) uses the alternative layout.
fn default_com_pins(dimensions: Dimensions) -> u8 {
    if dimensions.height <= 32 && dimensions.width >= 96 {
        0x02
    } else {
        0x12
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306::{AddressingMode, Builder, Dimensions};
///
/// let dims = match Dimensions::new(128, 32) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .addressing_mode(AddressingMode::Horizontal)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.com_pins, 0x02);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    x_offset: u8,
    addressing_mode: AddressingMode,
    mirror_horizontal: bool,
    mirror_vertical: bool,
    inverse: bool,
    contrast: u8,
    clock_divide: u8,
    precharge: u8,
    vcom_deselect: u8,
    charge_pump: u8,
    /// Explicit COM pins value, derived from the height when unset
    com_pins: Option<u8>,
    scroll_interval: ScrollInterval,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            x_offset: 0,
            addressing_mode: AddressingMode::Page,
            mirror_horizontal: false,
            mirror_vertical: false,
            inverse: false,
            // Mid-scale contrast (controller reset value)
            contrast: 0x7F,
            // Max oscillator frequency, divide ratio 1
            clock_divide: 0xF0,
            // Phase 1 and phase 2 of two DCLKs each
            precharge: 0x22,
            // ~0.77 x Vcc
            vcom_deselect: 0x20,
            // Internal charge pump on
            charge_pump: 0x14,
            com_pins: None,
            scroll_interval: ScrollInterval::Frames5,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the column offset of the visible area
    ///
    /// Panels wired to a wider RAM window (e.g. 132-column variants) need 2.
    /// The offset plus the panel width must stay within [`MAX_COLUMNS`].
    pub fn x_offset(mut self, offset: u8) -> Self {
        self.x_offset = offset;
        self
    }

    /// Set the memory addressing mode
    pub fn addressing_mode(mut self, mode: AddressingMode) -> Self {
        self.addressing_mode = mode;
        self
    }

    /// Mirror the image horizontally
    pub fn mirror_horizontal(mut self, value: bool) -> Self {
        self.mirror_horizontal = value;
        self
    }

    /// Mirror the image vertically
    pub fn mirror_vertical(mut self, value: bool) -> Self {
        self.mirror_vertical = value;
        self
    }

    /// Start in inverse display mode
    pub fn inverse(mut self, value: bool) -> Self {
        self.inverse = value;
        self
    }

    /// Set the initial contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the clock divide ratio / oscillator frequency byte
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set the pre-charge period byte
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set the V_COMH deselect level byte
    pub fn vcom_deselect(mut self, value: u8) -> Self {
        self.vcom_deselect = value;
        self
    }

    /// Set the charge pump byte (0x14 internal, 0x10 external VCC)
    pub fn charge_pump(mut self, value: u8) -> Self {
        self.charge_pump = value;
        self
    }

    /// Override the COM pins hardware configuration byte
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = Some(value);
        self
    }

    /// Set the frame interval used by scroll commands
    pub fn scroll_interval(mut self, value: ScrollInterval) -> Self {
        self.scroll_interval = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set and
    /// `BuilderError::InvalidOffset` if the column offset pushes the visible
    /// area past the controller's last column.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        if u16::from(self.x_offset) + dimensions.width > MAX_COLUMNS {
            return Err(BuilderError::InvalidOffset {
                offset: self.x_offset,
                width: dimensions.width,
            });
        }
        Ok(Config {
            dimensions,
            x_offset: self.x_offset,
            addressing_mode: self.addressing_mode,
            mirror_horizontal: self.mirror_horizontal,
            mirror_vertical: self.mirror_vertical,
            inverse: self.inverse,
            contrast: self.contrast,
            clock_divide: self.clock_divide,
            precharge: self.precharge,
            vcom_deselect: self.vcom_deselect,
            charge_pump: self.charge_pump,
            com_pins: self
                .com_pins
                .unwrap_or_else(|| default_com_pins(dimensions)),
            scroll_interval: self.scroll_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_reject_height_not_multiple_of_eight() {
        assert!(matches!(
            Dimensions::new(128, 60),
            Err(BuilderError::InvalidDimensions {
                width: 128,
                height: 60
            })
        ));
    }

    #[test]
    fn test_dimensions_reject_out_of_range() {
        assert!(Dimensions::new(0, 64).is_err());
        assert!(Dimensions::new(129, 64).is_err());
        assert!(Dimensions::new(128, 0).is_err());
        assert!(Dimensions::new(128, 72).is_err());
    }

    #[test]
    fn test_dimensions_buffer_size_and_pages() {
        let dims = Dimensions::new(128, 64).unwrap();
        assert_eq!(dims.buffer_size(), 1024);
        assert_eq!(dims.pages(), 8);
        assert_eq!(Dimensions::default(), dims);
    }

    #[test]
    fn test_builder_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_builder_derives_com_pins_from_geometry() {
        let tall = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .build()
            .unwrap();
        assert_eq!(tall.com_pins, 0x12);

        let short = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .build()
            .unwrap();
        assert_eq!(short.com_pins, 0x02);

        let strip = Builder::new()
            .dimensions(Dimensions::new(128, 16).unwrap())
            .build()
            .unwrap();
        assert_eq!(strip.com_pins, 0x02);

        let small = Builder::new()
            .dimensions(Dimensions::new(64, 32).unwrap())
            .build()
            .unwrap();
        assert_eq!(small.com_pins, 0x12);

        let forced = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .com_pins(0x22)
            .build()
            .unwrap();
        assert_eq!(forced.com_pins, 0x22);
    }

    #[test]
    fn test_dimensions_accessors() {
        let dims = Dimensions::new(96, 16).unwrap();
        assert_eq!(dims.width(), 96);
        assert_eq!(dims.height(), 16);
        assert_eq!(dims.pages(), 2);
    }

    #[test]
    fn test_builder_rejects_offset_past_last_column() {
        let result = Builder::new()
            .dimensions(Dimensions::default())
            .x_offset(4)
            .build();
        assert_eq!(
            result,
            Err(BuilderError::InvalidOffset {
                offset: 4,
                width: 128
            })
        );

        let narrow = Builder::new()
            .dimensions(Dimensions::new(64, 48).unwrap())
            .x_offset(64)
            .build()
            .unwrap();
        assert_eq!(narrow.x_offset, 64);

        assert!(
            Builder::new()
                .dimensions(Dimensions::new(64, 48).unwrap())
                .x_offset(65)
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_orientation_bytes() {
        let config = Builder::new()
            .dimensions(Dimensions::default())
            .build()
            .unwrap();
        assert_eq!(config.segment_remap(), 0xA1);
        assert_eq!(config.com_scan_direction(), 0xC8);

        let mirrored = Builder::new()
            .dimensions(Dimensions::default())
            .mirror_horizontal(true)
            .mirror_vertical(true)
            .build()
            .unwrap();
        assert_eq!(mirrored.segment_remap(), 0xA0);
        assert_eq!(mirrored.com_scan_direction(), 0xC0);
    }
}

//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! framebuffer storage ([`BufferError`]) and controller operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`BufferError`] - Framebuffer storage of the wrong size
//! - [`Error`] - Runtime errors while talking to the controller
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus and pin errors
//!
//! Pixels outside the panel are not an error: drawing operations drop them
//! one by one, so every shape call is total.
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Height must be a whole number of pages
//! let result = Dimensions::new(128, 60);
//! assert!(result.is_err());
//! ```

use crate::config::{MAX_COLUMNS, MAX_ROWS};
use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (bus or GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// The controller has not completed [`init`](crate::Display::init)
    NotInitialized,
    /// Framebuffer does not match the configured panel
    SizeMismatch {
        /// Size in bytes required by the configured dimensions
        expected: usize,
        /// Size in bytes of the framebuffer passed in
        provided: usize,
    },
    /// Scroll page range is empty or exceeds the panel
    InvalidPageRange {
        /// First page of the range
        start: u8,
        /// Last page of the range
        end: u8,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::SizeMismatch { expected, provided } => {
                write!(
                    f,
                    "Framebuffer size mismatch: expected {expected} bytes, provided {provided}"
                )
            }
            Self::InvalidPageRange { start, end } => {
                write!(f, "Invalid page range: {start}..={end}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors raised by framebuffer storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Source or backing storage length differs from `width * height / 8`
    SizeMismatch {
        /// Required size in bytes
        expected: usize,
        /// Provided size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SizeMismatch { expected, provided } => write!(
                f,
                "Buffer size mismatch: expected {expected} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for BufferError {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
    /// Column offset plus width exceeds the controller's columns
    InvalidOffset {
        /// Offset requested
        offset: u8,
        /// Panel width
        width: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS}, height must be multiple of 8)"
            ),
            Self::InvalidOffset { offset, width } => write!(
                f,
                "Column offset {offset} with width {width} exceeds {MAX_COLUMNS} columns"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

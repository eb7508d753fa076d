//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! pixel buffer construction ([`BufferError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`BufferError`] - Buffer storage of the wrong size
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Bus faults are never retried by the driver. During initialization they are
//! fatal: the controller cannot be read back, so its state is unknown and the
//! display moves to [`State::Faulted`].
//!
//! ## Example
//!
//! ```
//! use st7789_lcd::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(400, 135); // Wider than the controller grid
//! assert!(result.is_err());
//! ```

use crate::display::State;
use crate::interface::DisplayInterface;

/// Number of addressable columns in the controller grid
///
/// The init sequence selects row/column exchange, so the 240x320 native
/// grid is addressed as 320 columns by 240 rows.
pub const MAX_COLUMNS: u16 = 320;

/// Number of addressable rows in the controller grid
pub const MAX_ROWS: u16 = 240;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO/PWM)
    ///
    /// A bus fault. The transfer may have been partially sent, so the
    /// controller state is unknown.
    Interface(I::Error),
    /// Address window outside the panel, or with start after end
    ///
    /// Rejected before any bus traffic.
    InvalidWindow {
        /// First column
        x0: u16,
        /// First row
        y0: u16,
        /// Last column (inclusive)
        x1: u16,
        /// Last row (inclusive)
        y1: u16,
    },
    /// Pixel data does not match the declared window
    PixelCount {
        /// Bytes the window requires (pixels * 2)
        expected: usize,
        /// Bytes provided
        provided: usize,
    },
    /// Operation called in the wrong initialization state
    InvalidState {
        /// State the operation requires
        expected: State,
        /// State the display is in
        actual: State,
    },
    /// Pixel buffer of the wrong size
    Buffer(BufferError),
    /// Panel geometry outside the controller grid
    ///
    /// Rejected when the display is created, before any bus traffic.
    Config(BuilderError),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InvalidWindow { x0, y0, x1, y1 } => {
                write!(f, "Invalid window: ({x0}, {y0})..=({x1}, {y1})")
            }
            Self::PixelCount { expected, provided } => {
                write!(
                    f,
                    "Pixel data mismatch: window needs {expected} bytes, provided {provided}"
                )
            }
            Self::InvalidState { expected, actual } => {
                write!(f, "Invalid state: expected {expected:?}, display is {actual:?}")
            }
            Self::Buffer(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<BufferError> for Error<I> {
    fn from(e: BufferError) -> Self {
        Self::Buffer(e)
    }
}

impl<I: DisplayInterface> From<BuilderError> for Error<I> {
    fn from(e: BuilderError) -> Self {
        Self::Config(e)
    }
}

/// Buffer storage has the wrong size
///
/// A pixel buffer must be exactly `width * height * 2` bytes. Also returned
/// when a raw insert would run past the end of the buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BufferError {
    /// Required size in bytes
    pub required: usize,
    /// Provided size in bytes
    pub provided: usize,
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Buffer size mismatch: required {} bytes, provided {}",
            self.required, self.provided
        )
    }
}

impl core::error::Error for BufferError {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
    /// Panel plus offsets does not fit the controller grid
    OffsetOutOfBounds {
        /// Column offset requested
        offset_left: u16,
        /// Row offset requested
        offset_top: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS})"
            ),
            Self::OffsetOutOfBounds {
                offset_left,
                offset_top,
            } => write!(
                f,
                "Offsets ({offset_left}, {offset_top}) push the panel outside the {MAX_COLUMNS}x{MAX_ROWS} grid"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

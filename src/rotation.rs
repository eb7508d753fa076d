//! Coordinate rotation utilities
//!
//! This module maps logical drawing coordinates to pixel indices in the
//! row-major RGB565 buffer when software rotation is configured.
//!
//! The buffer always has the panel's physical layout (`width` pixels per
//! row). For quarter turns the logical drawing surface is `height` wide and
//! `width` tall.
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: Native orientation
//! - **Rotate90**: 90° clockwise, logical origin at the physical top-right
//! - **Rotate180**: 180° rotation, origin at bottom-right
//! - **Rotate270**: 270° clockwise, logical origin at the physical bottom-left
//!
//! ## Example
//!
//! ```
//! use st7789_lcd::{rotation::apply_rotation, Rotation};
//!
//! // 240x135 panel: logical (1, 0) is the second pixel of the first row
//! assert_eq!(apply_rotation(1, 0, 240, 135, Rotation::Rotate0), 1);
//!
//! // Upside down, logical (0, 0) is the last pixel of the buffer
//! assert_eq!(apply_rotation(0, 0, 240, 135, Rotation::Rotate180), 240 * 135 - 1);
//! ```

use crate::config::Rotation;

/// Apply rotation transformation to get a pixel index
///
/// Converts logical (x, y) coordinates to the index of the pixel in the
/// physical buffer (multiply by 2 for the byte offset).
///
/// # Arguments
///
/// * `x` - Logical X coordinate
/// * `y` - Logical Y coordinate
/// * `width` - Physical panel width in pixels
/// * `height` - Physical panel height in pixels
/// * `rotation` - Rotation mode
///
/// Coordinates must be inside the logical surface; the caller bounds-checks.
pub fn apply_rotation(x: u32, y: u32, width: u32, height: u32, rotation: Rotation) -> usize {
    let (px, py) = match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (width - 1 - y, x),
        Rotation::Rotate180 => (width - 1 - x, height - 1 - y),
        Rotation::Rotate270 => (y, height - 1 - x),
    };
    (py * width + px) as usize
}

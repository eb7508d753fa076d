//! RGB565 colors
//!
//! Each pixel is a 16 bit value packing 5 bits of red, 6 bits of green and
//! 5 bits of blue, most significant bits first:
//!
//! | Bits  | Channel |
//! |-------|---------|
//! | 15-11 | Red     |
//! | 10-5  | Green   |
//! | 4-0   | Blue    |
//!
//! ## Example
//!
//! ```
//! use st7789_lcd::Color;
//!
//! assert_eq!(Color::rgb(0, 255, 0), Color::GREEN);
//! assert_eq!(Color::GREEN.raw(), 0x07E0);
//! assert_eq!(Color::ORANGE.raw(), 0xFD20);
//! ```

/// A packed RGB565 color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Color(pub u16);

impl Color {
    /// Black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Red
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Green
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Blue
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Cyan
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Magenta
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// Yellow
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Orange
    pub const ORANGE: Self = Self::rgb(255, 165, 0);
    /// Purple
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    /// Gray
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// Brown
    pub const BROWN: Self = Self::rgb(165, 42, 42);

    /// Pack 8-bit channels into RGB565, dropping the low bits of each
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self((((red & 0xF8) as u16) << 8) | (((green & 0xFC) as u16) << 3) | (blue >> 3) as u16)
    }

    /// The packed 16 bit value
    pub const fn raw(self) -> u16 {
        self.0
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::raw::{RawData, RawU16};
        Self(RawU16::from(color).into_inner())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Color) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawU16;
        Self::from(RawU16::new(color.0))
    }
}

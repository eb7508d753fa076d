//! ST7789 command definitions
//!
//! This module defines the command bytes used to drive the ST7789 LCD
//! controller. Commands are sent over SPI with the DC pin low, parameters
//! follow with the DC pin high.
//!
//! ## Command Structure
//!
//! Every transfer is framed on its own:
//! 1. Deassert CS
//! 2. Set DC low (command) or high (data)
//! 3. Assert CS
//! 4. Send the bytes
//! 5. Deassert CS
//!
//! The protocol is write-only from the driver's point of view; the read
//! commands of the controller are not used.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7789_lcd::{command, DisplayInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # struct Channel;
//! # impl DisplayInterface for Channel {
//! #     type Error = Infallible;
//! #     fn write_command(&mut self, _command: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn write_data(&mut self, _data: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Infallible> { Ok(()) }
//! #     fn set_backlight(&mut self, _percent: u8) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # let mut interface = Channel;
//! // Pixel format: 16 bits per pixel
//! let _ = interface.write_command(command::COLMOD);
//! let _ = interface.write_data(&[0x05]);
//! ```

// System control commands

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset (0x01)
///
/// Resets registers to their defaults. The controller ignores further commands
/// for up to 120ms afterwards.
pub const SWRESET: u8 = 0x01;

/// Sleep in (0x10)
pub const SLPIN: u8 = 0x10;

/// Sleep out (0x11)
///
/// Leaves sleep mode and starts the DC/DC converter and oscillator.
pub const SLPOUT: u8 = 0x11;

/// Normal display mode on (0x13)
pub const NORON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
///
/// IPS panels are wired inverted; this gives true colors on them.
pub const INVON: u8 = 0x21;

/// Display off (0x28)
pub const DISPOFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

// Memory commands

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Row address set (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const RASET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Starts a write into the current address window. The controller
/// auto-increments inside the window only.
pub const RAMWR: u8 = 0x2C;

/// Memory data access control (0x36)
///
/// Bit flags:
/// - 0x80 MY: row address order
/// - 0x40 MX: column address order
/// - 0x20 MV: row/column exchange
/// - 0x10 ML: vertical refresh order
/// - 0x08 RGB: BGR order
/// - 0x04 MH: horizontal refresh order
pub const MADCTL: u8 = 0x36;

/// Interface pixel format (0x3A)
///
/// 0x05 selects 16 bits per pixel (RGB565).
pub const COLMOD: u8 = 0x3A;

// Panel timing and power commands

/// Porch setting (0xB2)
///
/// Requires 5 bytes.
pub const PORCTRL: u8 = 0xB2;

/// Gate control (0xB7)
///
/// VGH / VGL selection. Requires 1 byte.
pub const GCTRL: u8 = 0xB7;

/// VCOM setting (0xBB)
pub const VCOMS: u8 = 0xBB;

/// LCM control (0xC0)
pub const LCMCTRL: u8 = 0xC0;

/// VDV and VRH command enable (0xC2)
pub const VDVVRHEN: u8 = 0xC2;

/// VRH set (0xC3)
pub const VRHS: u8 = 0xC3;

/// VDV set (0xC4)
pub const VDVS: u8 = 0xC4;

/// Frame rate control in normal mode (0xC6)
pub const FRCTRL2: u8 = 0xC6;

/// Power control 1 (0xD0)
///
/// Requires 2 bytes: [0xA4, AVDD/AVCL/VDS]
pub const PWCTRL1: u8 = 0xD0;

// Gamma commands

/// Positive voltage gamma control (0xE0)
///
/// Requires 14 bytes.
pub const PVGAMCTRL: u8 = 0xE0;

/// Negative voltage gamma control (0xE1)
///
/// Requires 14 bytes.
pub const NVGAMCTRL: u8 = 0xE1;

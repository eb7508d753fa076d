//! ST7789 IPS LCD Driver
//!
//! A framebuffer driver for the ST7789 TFT controller driving small IPS panels
//! such as the 1.14" 240x135 module, over a 4-wire SPI bus.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Telemetry text overlay (with `overlay` feature)
//! - Configurable panel dimensions and RAM offsets
//! - Whole-frame flush in a single SPI burst
//! - Horizontal mirroring and rotation support
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::pwm::SetDutyCycle;
//! use embedded_hal::spi::SpiBus;
//! use st7789_lcd::{Builder, Color, Display, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPwm;
//! # impl embedded_hal::pwm::ErrorType for MockPwm { type Error = Infallible; }
//! # impl SetDutyCycle for MockPwm {
//! #     fn max_duty_cycle(&self) -> u16 { 100 }
//! #     fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let cs = MockPin;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let bl = MockPwm;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, cs, dc, rst, bl);
//! let config = match Builder::lcd_1in14().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let frame = [0u8; 240 * 135 * 2];
//! let mut display = match Display::new(interface, config, frame) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! let _ = display.init(&mut delay);
//! let _ = display.set_backlight(100);
//! display.fill(Color::GREEN);
//! let _ = display.show();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB565 frame storage and transforms
pub mod buffer;
/// RGB565 color type
pub mod color;
/// ST7789 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Coordinate rotation utilities
pub mod rotation;
/// Controller initialization table
pub mod sequence;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

/// Telemetry text overlay (requires `overlay` feature)
#[cfg(feature = "overlay")]
pub mod overlay;

pub use buffer::{ByteOrder, PixelBuffer};
pub use color::Color;
pub use config::{Builder, Config, DEFAULT_SPI_CLOCK_HZ, Dimensions, Rotation};
pub use display::{DISPLAY_ON_SETTLE_MS, Display, SWRESET_SETTLE_MS, State, Window};
pub use error::{BufferError, BuilderError, Error, MAX_COLUMNS, MAX_ROWS};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, RESET_PULSE_US};

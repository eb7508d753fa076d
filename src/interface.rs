//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7789 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST7789 requires:
//! - SPI bus (MOSI + SCK, mode 0). The driver frames chip select itself, so
//!   it takes an [`SpiBus`] rather than an `SpiDevice`.
//! - 3 GPIO outputs:
//!   - **CS**: Chip select (active low)
//!   - **DC**: Data/Command select (low=command, high=data)
//!   - **RST**: Reset (active low)
//! - 1 PWM output for the backlight
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7789_lcd::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::pwm::SetDutyCycle;
//! # use embedded_hal::spi::SpiBus;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Infallible> { Ok(()) }
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
//! #     fn max_duty_cycle(&self) -> u16 { u16::MAX }
//! #     fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Infallible> { Ok(()) }
//! # }
//! // Create interface with SPI bus, CS, DC, RST and backlight PWM
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin, MockPwm);
//!
//! // Send command
//! let _ = interface.write_command(0x3A); // Pixel format
//!
//! // Send data
//! let _ = interface.write_data(&[0x05]);
//!
//! // Full brightness
//! let _ = interface.set_backlight(100);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Width of each reset pulse in microseconds
pub const RESET_PULSE_US: u32 = 10;

/// Trait for the command channel to the ST7789 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// Every call is blocking and returns once the transfer is complete. There
/// is no internal locking; callers sharing a channel must serialize.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a shared bus, a GPIO backlight), implement this
/// trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC low (command mode)
    /// 2. Assert CS
    /// 3. Send the command byte over SPI
    /// 4. Deassert CS
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn write_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// Same framing as [`write_command`](Self::write_command) with DC high.
    /// The whole slice goes out as one burst under a single CS assertion.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn write_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// Drives RST high, low, then high again with no bus traffic.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset pin cannot be driven.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Set backlight brightness as a duty cycle percentage (0-100)
    ///
    /// # Errors
    ///
    /// Returns an error if the PWM channel rejects the duty cycle.
    fn set_backlight(&mut self, percent: u8) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI, GPIO and PWM error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr, PwmErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
    /// Backlight PWM error
    Backlight(PwmErr),
}

impl<SpiErr: Debug, PinErr: Debug, PwmErr: Debug> core::fmt::Display
    for InterfaceError<SpiErr, PinErr, PwmErr>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::Backlight(e) => write!(f, "Backlight error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug, PwmErr: Debug> core::error::Error
    for InterfaceError<SpiErr, PinErr, PwmErr>
{
}

/// Hardware interface implementation for ST7789
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI, GPIO and PWM traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BL` - Backlight channel implementing [`SetDutyCycle`]
pub struct Interface<SPI, CS, DC, RST, BL> {
    /// SPI bus for communication
    spi: SPI,
    /// Chip select pin (active low)
    cs: CS,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Backlight PWM channel
    backlight: BL,
}

impl<SPI, CS, DC, RST, BL, PinErr> Interface<SPI, CS, DC, RST, BL>
where
    SPI: SpiBus,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BL: SetDutyCycle,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `cs` - Chip select pin (output, active low)
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `backlight` - Backlight PWM channel
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST, backlight: BL) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            backlight,
        }
    }

    /// Drive chip select: `true` asserts (low), `false` releases (high)
    pub fn set_chip_select(&mut self, selected: bool) -> Result<(), PinErr> {
        if selected {
            self.cs.set_low()
        } else {
            self.cs.set_high()
        }
    }

    /// Set DC low for command bytes
    pub fn set_command_mode(&mut self) -> Result<(), PinErr> {
        self.dc.set_low()
    }

    /// Set DC high for data bytes
    pub fn set_data_mode(&mut self) -> Result<(), PinErr> {
        self.dc.set_high()
    }

    /// Drive the reset line to the given level (`true` = high, released)
    pub fn set_reset(&mut self, high: bool) -> Result<(), PinErr> {
        if high {
            self.rst.set_high()
        } else {
            self.rst.set_low()
        }
    }

    /// Release the SPI bus and pins
    pub fn release(self) -> (SPI, CS, DC, RST, BL) {
        (self.spi, self.cs, self.dc, self.rst, self.backlight)
    }

    /// One CS-framed transfer; CS is released even when the write fails
    fn framed_write(
        &mut self,
        data_mode: bool,
        bytes: &[u8],
    ) -> InterfaceResult<(), InterfaceError<SPI::Error, PinErr, BL::Error>> {
        self.cs.set_high().map_err(InterfaceError::Pin)?;
        if data_mode {
            self.dc.set_high()
        } else {
            self.dc.set_low()
        }
        .map_err(InterfaceError::Pin)?;
        self.cs.set_low().map_err(InterfaceError::Pin)?;

        let written = self
            .spi
            .write(bytes)
            .and_then(|()| self.spi.flush())
            .map_err(InterfaceError::Spi);
        let released = self.cs.set_high().map_err(InterfaceError::Pin);
        written.and(released)
    }
}

impl<SPI, CS, DC, RST, BL, PinErr> DisplayInterface for Interface<SPI, CS, DC, RST, BL>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BL: SetDutyCycle,
    BL::Error: Debug,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr, BL::Error>;

    fn write_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.framed_write(false, &[command])
    }

    fn write_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.framed_write(true, data)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        Ok(())
    }

    fn set_backlight(&mut self, percent: u8) -> InterfaceResult<(), Self::Error> {
        self.backlight
            .set_duty_cycle_percent(percent.min(100))
            .map_err(InterfaceError::Backlight)
    }
}

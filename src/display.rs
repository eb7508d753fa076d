//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, error, trace};

use crate::buffer::{ByteOrder, PixelBuffer};
use crate::color::Color;
use crate::command::{CASET, DISPON, INVOFF, INVON, RAMWR, RASET, SLPOUT, SWRESET};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::sequence::INIT_SEQUENCE;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Wait after software reset before the controller accepts commands
pub const SWRESET_SETTLE_MS: u32 = 150;

/// Wait after display on before the first frame
pub const DISPLAY_ON_SETTLE_MS: u32 = 100;

/// Initialization state of the controller
///
/// Progresses `Uninitialized -> Resetting -> Configuring -> Ready`. A bus
/// fault during any of those steps ends in `Faulted`, which has no way out:
/// release the hardware and build a new [`Display`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Nothing sent yet
    #[default]
    Uninitialized,
    /// Hardware reset done
    Resetting,
    /// Init sequence sent
    Configuring,
    /// Display on, frames can be flushed
    Ready,
    /// A bus fault hit initialization; controller state unknown
    Faulted,
}

/// Inclusive rectangle in panel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// First column
    pub x0: u16,
    /// First row
    pub y0: u16,
    /// Last column (inclusive)
    pub x1: u16,
    /// Last row (inclusive)
    pub y1: u16,
}

impl Window {
    /// Create a new window
    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The whole panel
    pub fn full(dimensions: Dimensions) -> Self {
        Self::new(0, 0, dimensions.width - 1, dimensions.height - 1)
    }

    /// Number of pixels the window covers (0 for an inverted window)
    pub fn pixel_count(&self) -> usize {
        if self.x1 < self.x0 || self.y1 < self.y0 {
            return 0;
        }
        (self.x1 - self.x0 + 1) as usize * (self.y1 - self.y0 + 1) as usize
    }

    fn fits(&self, dimensions: Dimensions) -> bool {
        self.x0 <= self.x1
            && self.y0 <= self.y1
            && self.x1 < dimensions.width
            && self.y1 < dimensions.height
    }
}

/// Encode an address range as two big-endian 16 bit values
fn address_range(start: u16, end: u16) -> [u8; 4] {
    let [start_hi, start_lo] = start.to_be_bytes();
    let [end_hi, end_lo] = end.to_be_bytes();
    [start_hi, start_lo, end_hi, end_lo]
}

/// Core display driver for ST7789
///
/// Owns the command channel and the framebuffer. Draw into
/// [`buffer_mut`](Self::buffer_mut), then call [`show`](Self::show).
pub struct Display<I, B>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Framebuffer
    buffer: PixelBuffer<B>,
    /// Initialization state
    state: State,
    /// CASET payload for the full panel, offsets applied
    frame_columns: [u8; 4],
    /// RASET payload for the full panel, offsets applied
    frame_rows: [u8; 4],
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display instance
    ///
    /// No bus traffic happens until [`init`](Self::init) (or the three
    /// individual steps) is called.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the panel does not fit the controller grid
    /// (see [`Config::validate`]), and `Error::Buffer` unless `buffer` is
    /// exactly `config.dimensions.buffer_size()` bytes.
    pub fn new(interface: I, config: Config, buffer: B) -> Result<Self, Error<I>> {
        config.validate()?;
        let buffer = PixelBuffer::new(buffer, config.dimensions)?.with_rotation(config.rotation);
        let Dimensions { width, height } = config.dimensions;
        let frame_columns = address_range(config.offset_left, config.offset_left + width - 1);
        let frame_rows = address_range(config.offset_top, config.offset_top + height - 1);
        Ok(Self {
            interface,
            config,
            buffer,
            state: State::Uninitialized,
            frame_columns,
            frame_rows,
        })
    }

    /// Perform hardware reset, configuration and display on
    ///
    /// The backlight is left as the PWM channel was handed over; call
    /// [`set_backlight`](Self::set_backlight) to light the panel.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.reset(delay)?;
        self.configure(delay)?;
        self.finalize(delay)
    }

    /// Toggle the reset line
    ///
    /// Requires [`State::Uninitialized`].
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.expect_state(State::Uninitialized)?;
        let result = self.interface.reset(delay).map_err(Error::Interface);
        self.advance(result, State::Resetting, "reset")
    }

    /// Software reset, then the fixed init sequence
    ///
    /// Requires [`State::Resetting`]. Waits [`SWRESET_SETTLE_MS`] after the
    /// software reset before anything else is sent.
    pub fn configure<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.expect_state(State::Resetting)?;
        let result = self.send_init_sequence(delay);
        self.advance(result, State::Configuring, "configure")
    }

    /// Sleep out and display on
    ///
    /// Requires [`State::Configuring`]. Waits [`DISPLAY_ON_SETTLE_MS`]
    /// before returning.
    pub fn finalize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.expect_state(State::Configuring)?;
        let result = self.send_display_on(delay);
        self.advance(result, State::Ready, "finalize")
    }

    fn send_init_sequence<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SWRESET)?;
        delay.delay_ms(SWRESET_SETTLE_MS);

        for (command, data) in INIT_SEQUENCE {
            self.send_command(command)?;
            self.send_data(data)?;
        }

        // IPS panels are inverted natively
        let inversion = if self.config.invert { INVOFF } else { INVON };
        self.send_command(inversion)
    }

    fn send_display_on<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SLPOUT)?;
        self.send_command(DISPON)?;
        delay.delay_ms(DISPLAY_ON_SETTLE_MS);
        Ok(())
    }

    /// Record the outcome of an init step
    fn advance(&mut self, result: DisplayResult<I>, next: State, step: &str) -> DisplayResult<I> {
        match result {
            Ok(()) => {
                debug!("{step}: {:?} -> {:?}", self.state, next);
                self.state = next;
                Ok(())
            }
            Err(e) => {
                error!("{step}: bus fault, controller state unknown; hard reset required");
                self.state = State::Faulted;
                Err(e)
            }
        }
    }

    fn expect_state(&self, expected: State) -> DisplayResult<I> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }

    /// Set the address window and start a memory write
    ///
    /// `None` selects the whole panel. Offsets from the config are added
    /// before the coordinates are sent. The caller must follow with exactly
    /// `window.pixel_count()` pixels, two bytes each, high byte first.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the window is inverted or leaves the
    /// panel, before anything is sent.
    pub fn set_window(&mut self, window: Option<Window>) -> DisplayResult<I> {
        self.expect_state(State::Ready)?;
        let window = window.unwrap_or_else(|| Window::full(self.config.dimensions));
        self.check_window(window)?;
        self.send_window(window)
    }

    /// Write a block of wire-order pixels into a window
    ///
    /// # Errors
    ///
    /// Returns `Error::PixelCount` unless `pixels` holds exactly
    /// `window.pixel_count() * 2` bytes.
    pub fn write_window(&mut self, window: Window, pixels: &[u8]) -> DisplayResult<I> {
        self.expect_state(State::Ready)?;
        self.check_window(window)?;
        let expected = window.pixel_count() * 2;
        if pixels.len() != expected {
            return Err(Error::PixelCount {
                expected,
                provided: pixels.len(),
            });
        }
        self.send_window(window)?;
        self.send_data(pixels)
    }

    fn check_window(&self, window: Window) -> DisplayResult<I> {
        if window.fits(self.config.dimensions) {
            Ok(())
        } else {
            Err(Error::InvalidWindow {
                x0: window.x0,
                y0: window.y0,
                x1: window.x1,
                y1: window.y1,
            })
        }
    }

    fn send_window(&mut self, window: Window) -> DisplayResult<I> {
        let left = self.config.offset_left;
        let top = self.config.offset_top;
        trace!("window {:?} at offset ({}, {})", window, left, top);

        self.send_command(CASET)?;
        self.send_data(&address_range(window.x0 + left, window.x1 + left))?;
        self.send_command(RASET)?;
        self.send_data(&address_range(window.y0 + top, window.y1 + top))?;
        self.send_command(RAMWR)
    }

    /// Flush the framebuffer to the panel
    ///
    /// Sends the full-panel window, then the whole buffer as one burst in
    /// wire byte order. A native-order buffer is swapped for the transfer
    /// and swapped back afterwards, also when the transfer fails, so the
    /// buffer is unchanged when this returns.
    pub fn show(&mut self) -> DisplayResult<I> {
        self.expect_state(State::Ready)?;
        let columns = self.frame_columns;
        let rows = self.frame_rows;

        self.send_command(CASET)?;
        self.send_data(&columns)?;
        self.send_command(RASET)?;
        self.send_data(&rows)?;
        self.send_command(RAMWR)?;

        let convert = self.buffer.byte_order() == ByteOrder::Native;
        if convert {
            self.buffer.swap_bytes();
        }
        let sent = self
            .interface
            .write_data(self.buffer.as_bytes())
            .map_err(Error::Interface);
        if convert {
            self.buffer.swap_bytes();
        }
        trace!("frame of {} bytes sent", self.buffer.as_bytes().len());
        sent
    }

    /// Flip the framebuffer horizontally
    pub fn mirror(&mut self) {
        self.buffer.mirror_horizontal();
    }

    /// Fill the framebuffer with one color
    pub fn fill(&mut self, color: Color) {
        self.buffer.fill(color);
    }

    /// Set backlight brightness (0-100 %)
    pub fn set_backlight(&mut self, percent: u8) -> DisplayResult<I> {
        self.interface
            .set_backlight(percent)
            .map_err(Error::Interface)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.write_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.write_data(data).map_err(Error::Interface)
    }

    /// Current initialization state
    pub fn state(&self) -> State {
        self.state
    }

    /// The framebuffer
    pub fn buffer(&self) -> &PixelBuffer<B> {
        &self.buffer
    }

    /// The framebuffer, for drawing
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer<B> {
        &mut self.buffer
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Get drawing rotation
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the interface and buffer storage
    pub fn release(self) -> (I, B) {
        (self.interface, self.buffer.release())
    }
}

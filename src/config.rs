//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Default SPI clock for the panel (50 MHz)
pub const DEFAULT_SPI_CLOCK_HZ: u32 = 50_000_000;

/// Panel dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0 or height > MAX_ROWS
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels on the panel
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Calculate required buffer size in bytes (2 bytes per RGB565 pixel)
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * 2
    }
}

/// Drawing rotation relative to the panel's native orientation
///
/// Applied in software when pixels are drawn into the buffer; the
/// controller's own orientation is fixed by the init sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Display configuration
///
/// Immutable once built. Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Drawing rotation
    pub rotation: Rotation,
    /// Column of the controller grid where the panel starts
    pub offset_left: u16,
    /// Row of the controller grid where the panel starts
    pub offset_top: u16,
    /// Invert colors
    ///
    /// IPS panels need inversion on for true colors, so `false` sends
    /// INVON and `true` sends INVOFF.
    pub invert: bool,
    /// SPI clock the bus should be configured with, in Hz
    ///
    /// The driver does not configure the bus itself; board code reads this
    /// when building the SPI peripheral.
    pub spi_clock_hz: u32,
}

impl Config {
    /// Check the geometry against the controller grid
    ///
    /// [`Builder::build`] always produces a valid config; this catches one
    /// assembled by hand from the public fields.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` for a zero or oversized
    /// panel, and `BuilderError::OffsetOutOfBounds` if the offset panel does
    /// not fit inside the controller grid.
    pub fn validate(&self) -> Result<(), BuilderError> {
        let Dimensions { width, height } = self.dimensions;
        Dimensions::new(width, height)?;
        let right = u32::from(self.offset_left) + u32::from(width);
        let bottom = u32::from(self.offset_top) + u32::from(height);
        if right > u32::from(MAX_COLUMNS) || bottom > u32::from(MAX_ROWS) {
            return Err(BuilderError::OffsetOutOfBounds {
                offset_left: self.offset_left,
                offset_top: self.offset_top,
            });
        }
        Ok(())
    }

    /// Get the logical drawing dimensions based on rotation setting
    pub fn rotated_dimensions(&self) -> Dimensions {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => self.dimensions,
            Rotation::Rotate90 | Rotation::Rotate270 => Dimensions {
                width: self.dimensions.height,
                height: self.dimensions.width,
            },
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7789_lcd::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(240, 135) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .offsets(40, 53)
///     .rotation(Rotation::Rotate0)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Panel dimensions (required)
    dimensions: Option<Dimensions>,
    /// Drawing rotation
    rotation: Rotation,
    /// Column offset into the controller grid
    offset_left: u16,
    /// Row offset into the controller grid
    offset_top: u16,
    /// Color inversion flag
    invert: bool,
    /// SPI clock in Hz
    spi_clock_hz: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            offset_left: 0,
            offset_top: 0,
            invert: false,
            spi_clock_hz: DEFAULT_SPI_CLOCK_HZ,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preset for the 1.14" 240x135 IPS module
    ///
    /// The panel sits centered in the 320x240 grid at column 40, row 53.
    pub fn lcd_1in14() -> Self {
        Self {
            dimensions: Some(Dimensions {
                width: 240,
                height: 135,
            }),
            offset_left: 40,
            offset_top: 53,
            ..Self::default()
        }
    }

    /// Set panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set drawing rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the panel's column and row offsets into the controller grid
    pub fn offsets(mut self, offset_left: u16, offset_top: u16) -> Self {
        self.offset_left = offset_left;
        self.offset_top = offset_top;
        self
    }

    /// Set color inversion
    pub fn invert(mut self, value: bool) -> Self {
        self.invert = value;
        self
    }

    /// Set the SPI clock in Hz
    pub fn spi_clock_hz(mut self, value: u32) -> Self {
        self.spi_clock_hz = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// and `BuilderError::OffsetOutOfBounds` if the offset panel does not fit
    /// inside the controller grid.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let config = Config {
            dimensions,
            rotation: self.rotation,
            offset_left: self.offset_left,
            offset_top: self.offset_top,
            invert: self.invert,
            spi_clock_hz: self.spi_clock_hz,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_reject_zero() {
        assert!(Dimensions::new(0, 135).is_err());
        assert!(Dimensions::new(240, 0).is_err());
    }

    #[test]
    fn test_dimensions_reject_larger_than_grid() {
        assert_eq!(
            Dimensions::new(321, 135),
            Err(BuilderError::InvalidDimensions {
                width: 321,
                height: 135
            })
        );
        assert!(Dimensions::new(240, 241).is_err());
    }

    #[test]
    fn test_buffer_size_is_two_bytes_per_pixel() {
        let dims = Dimensions::new(240, 135).unwrap();
        assert_eq!(dims.buffer_size(), 240 * 135 * 2);
    }

    #[test]
    fn test_missing_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_preset_matches_module() {
        let config = Builder::lcd_1in14().build().unwrap();
        assert_eq!(config.dimensions, Dimensions::new(240, 135).unwrap());
        assert_eq!((config.offset_left, config.offset_top), (40, 53));
        assert!(!config.invert);
        assert_eq!(config.spi_clock_hz, DEFAULT_SPI_CLOCK_HZ);
    }

    #[test]
    fn test_offsets_outside_grid_rejected() {
        let result = Builder::new()
            .dimensions(Dimensions::new(240, 135).unwrap())
            .offsets(81, 0)
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::OffsetOutOfBounds {
                offset_left: 81,
                offset_top: 0
            })
        ));

        let result = Builder::new()
            .dimensions(Dimensions::new(240, 135).unwrap())
            .offsets(80, 105)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_catches_hand_built_config() {
        let valid = Builder::lcd_1in14().build().unwrap();
        assert_eq!(valid.validate(), Ok(()));

        let mut zero = valid.clone();
        zero.dimensions = Dimensions {
            width: 0,
            height: 135,
        };
        assert_eq!(
            zero.validate(),
            Err(BuilderError::InvalidDimensions {
                width: 0,
                height: 135
            })
        );

        let mut shifted = valid.clone();
        shifted.offset_left = 65_400;
        assert_eq!(
            shifted.validate(),
            Err(BuilderError::OffsetOutOfBounds {
                offset_left: 65_400,
                offset_top: 53
            })
        );

        let mut low = valid;
        low.offset_top = 106;
        assert!(matches!(
            low.validate(),
            Err(BuilderError::OffsetOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rotated_dimensions_swap_for_quarter_turns() {
        let config = Builder::lcd_1in14()
            .rotation(Rotation::Rotate90)
            .build()
            .unwrap();
        assert_eq!(
            config.rotated_dimensions(),
            Dimensions {
                width: 135,
                height: 240
            }
        );
    }
}

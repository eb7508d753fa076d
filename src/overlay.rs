//! Telemetry text overlay
//!
//! Lays out a position fix as three lines of text on a black background.
//! Strings are borrowed from the caller and drawn piecewise, so nothing is
//! allocated or formatted.
//!
//! | Line | Position | Color  | Text                 |
//! |------|----------|--------|----------------------|
//! | 1    | (2, 2)   | green  | `Lat: <value> <dir>` |
//! | 2    | (2, 20)  | blue   | `Lon: <value> <dir>` |
//! | 3    | (2, 38)  | yellow | `Spd: <value>`       |
//!
//! Without a fix only `Waiting for GPS...` is shown, green, on line 1.
//!
//! ## Example
//!
//! ```
//! use st7789_lcd::overlay::{render, Fix, Telemetry};
//! use st7789_lcd::{Dimensions, PixelBuffer};
//!
//! let dims = Dimensions::new(240, 135).unwrap();
//! let mut storage = [0u8; 240 * 135 * 2];
//! let mut buffer = PixelBuffer::new(&mut storage[..], dims).unwrap();
//!
//! let fix = Fix {
//!     latitude: "4807.038",
//!     lat_dir: "N",
//!     longitude: "01131.000",
//!     lon_dir: "E",
//!     speed: "022.4",
//! };
//! render(&mut buffer, &Telemetry::Fix(fix)).unwrap();
//! ```

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    text::{Baseline, Text},
};

/// Left margin of every line
pub const MARGIN_X: i32 = 2;

/// Top of each text line
pub const LINE_Y: [i32; 3] = [2, 20, 38];

/// Shown while no fix is available
pub const WAITING_TEXT: &str = "Waiting for GPS...";

/// A decoded position fix
///
/// Fields are shown as received; no parsing or unit conversion happens here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fix<'a> {
    /// Latitude, e.g. `4807.038`
    pub latitude: &'a str,
    /// `N` or `S`
    pub lat_dir: &'a str,
    /// Longitude, e.g. `01131.000`
    pub longitude: &'a str,
    /// `E` or `W`
    pub lon_dir: &'a str,
    /// Ground speed
    pub speed: &'a str,
}

/// What the overlay should show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Telemetry<'a> {
    /// A valid fix
    Fix(Fix<'a>),
    /// Receiver has no fix yet
    NoFix,
}

/// Draw the pieces of one line left to right, top-aligned at `origin`
fn draw_line<D>(
    target: &mut D,
    origin: Point,
    color: Rgb565,
    parts: &[&str],
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(&FONT_6X10, color);
    let mut position = origin;
    for part in parts {
        position = Text::with_baseline(part, position, style, Baseline::Top).draw(target)?;
    }
    Ok(())
}

/// Clear `target` to black and draw `telemetry`
pub fn render<D>(target: &mut D, telemetry: &Telemetry<'_>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(Rgb565::BLACK)?;

    match telemetry {
        Telemetry::Fix(fix) => {
            draw_line(
                target,
                Point::new(MARGIN_X, LINE_Y[0]),
                Rgb565::GREEN,
                &["Lat: ", fix.latitude, " ", fix.lat_dir],
            )?;
            draw_line(
                target,
                Point::new(MARGIN_X, LINE_Y[1]),
                Rgb565::BLUE,
                &["Lon: ", fix.longitude, " ", fix.lon_dir],
            )?;
            draw_line(
                target,
                Point::new(MARGIN_X, LINE_Y[2]),
                Rgb565::YELLOW,
                &["Spd: ", fix.speed],
            )
        }
        Telemetry::NoFix => draw_line(
            target,
            Point::new(MARGIN_X, LINE_Y[0]),
            Rgb565::GREEN,
            &[WAITING_TEXT],
        ),
    }
}

/// Fill `target` with a single color
///
/// Used to signal a degraded or shut down state without any text.
pub fn render_sentinel<D>(target: &mut D, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelBuffer;
    use crate::color::Color;
    use crate::config::Dimensions;
    use alloc::vec;
    use alloc::vec::Vec;

    const FIX: Fix<'static> = Fix {
        latitude: "4807.038",
        lat_dir: "N",
        longitude: "01131.000",
        lon_dir: "E",
        speed: "022.4",
    };

    fn panel() -> PixelBuffer<Vec<u8>> {
        let dims = Dimensions::new(240, 135).unwrap();
        PixelBuffer::new(vec![0xFFu8; dims.buffer_size()], dims).unwrap()
    }

    /// Colors present in rows `y0..y1`
    fn colors_in_rows(buffer: &PixelBuffer<Vec<u8>>, y0: u16, y1: u16) -> Vec<Color> {
        let mut found = Vec::new();
        for y in y0..y1 {
            for x in 0..240 {
                if let Some(color) = buffer.pixel(x, y) {
                    if !found.contains(&color) {
                        found.push(color);
                    }
                }
            }
        }
        found
    }

    #[test]
    fn test_fix_lines_have_their_colors() {
        let mut buffer = panel();
        render(&mut buffer, &Telemetry::Fix(FIX)).unwrap();

        let line1 = colors_in_rows(&buffer, 2, 12);
        let line2 = colors_in_rows(&buffer, 20, 30);
        let line3 = colors_in_rows(&buffer, 38, 48);
        assert!(line1.contains(&Color::GREEN) && !line1.contains(&Color::BLUE));
        assert!(line2.contains(&Color::BLUE) && !line2.contains(&Color::GREEN));
        assert!(line3.contains(&Color::YELLOW) && !line3.contains(&Color::BLUE));
    }

    #[test]
    fn test_background_is_cleared() {
        let mut buffer = panel();
        render(&mut buffer, &Telemetry::Fix(FIX)).unwrap();
        assert_eq!(buffer.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(colors_in_rows(&buffer, 50, 135), vec![Color::BLACK]);
        // margins above and left of the text stay black
        assert_eq!(colors_in_rows(&buffer, 0, 2), vec![Color::BLACK]);
        for y in 0..50 {
            assert_eq!(buffer.pixel(0, y), Some(Color::BLACK));
            assert_eq!(buffer.pixel(1, y), Some(Color::BLACK));
        }
    }

    #[test]
    fn test_values_extend_the_line() {
        let mut short = panel();
        let mut long = panel();
        let mut wide = FIX;
        wide.speed = "022.4 knots over ground";
        render(&mut short, &Telemetry::Fix(FIX)).unwrap();
        render(&mut long, &Telemetry::Fix(wide)).unwrap();

        let rightmost = |buffer: &PixelBuffer<Vec<u8>>| {
            (38..48)
                .flat_map(|y| (0..240).map(move |x| (x, y)))
                .filter(|&(x, y)| buffer.pixel(x, y) == Some(Color::YELLOW))
                .map(|(x, _)| x)
                .max()
        };
        assert!(rightmost(&long) > rightmost(&short));
    }

    #[test]
    fn test_no_fix_shows_waiting_text_only() {
        let mut buffer = panel();
        render(&mut buffer, &Telemetry::NoFix).unwrap();
        assert!(colors_in_rows(&buffer, 2, 12).contains(&Color::GREEN));
        assert_eq!(colors_in_rows(&buffer, 12, 135), vec![Color::BLACK]);
    }

    #[test]
    fn test_sentinel_fills_everything() {
        let mut buffer = panel();
        render(&mut buffer, &Telemetry::Fix(FIX)).unwrap();
        render_sentinel(&mut buffer, Rgb565::from(Color::ORANGE)).unwrap();
        assert_eq!(colors_in_rows(&buffer, 0, 135), vec![Color::ORANGE]);
    }
}

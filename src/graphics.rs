//! Graphics support via embedded-graphics
//!
//! [`PixelBuffer`] implements [`DrawTarget`] with [`Rgb565`] colors, so
//! anything from the embedded-graphics ecosystem can render into the
//! framebuffer. [`Display`] forwards to its buffer, letting you draw on the
//! display directly and then call [`Display::show`].
//!
//! Drawing honours the configured [`Rotation`](crate::Rotation); the
//! reported size is the rotated one. Pixels outside the surface are dropped.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use st7789_lcd::{Color, Dimensions, PixelBuffer};
//!
//! let dims = Dimensions::new(16, 8).unwrap();
//! let mut buffer = PixelBuffer::new([0u8; 16 * 8 * 2], dims).unwrap();
//!
//! buffer.clear(Rgb565::BLACK).unwrap();
//! Rectangle::new(Point::new(2, 2), Size::new(4, 3))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
//!     .draw(&mut buffer)
//!     .unwrap();
//!
//! assert_eq!(buffer.pixel(3, 3), Some(Color::GREEN));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::Pixel,
    primitives::{PointsIter, Rectangle},
};

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::config::Rotation;
use crate::display::Display;
use crate::interface::DisplayInterface;
use crate::rotation::apply_rotation;

impl<B> DrawTarget for PixelBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let sz = self.size();
        let dims = self.dimensions();
        let rotation = self.rotation();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as u32;
            let y = y as u32;

            if x >= sz.width || y >= sz.height {
                continue;
            }

            let index = apply_rotation(x, y, dims.width as u32, dims.height as u32, rotation);
            self.write_index(index, color.into());
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        if self.rotation() != Rotation::Rotate0 {
            return self.draw_iter(area.points().map(|p| Pixel(p, color)));
        }

        // unrotated rows are contiguous
        let width = self.dimensions().width as usize;
        let color = Color::from(color);
        for y in area.top_left.y..=bottom_right.y {
            let row = y as usize * width;
            for x in area.top_left.x..=bottom_right.x {
                self.write_index(row + x as usize, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}

impl<B> OriginDimensions for PixelBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        match self.rotation() {
            Rotation::Rotate0 | Rotation::Rotate180 => {
                Size::new(dims.width as u32, dims.height as u32)
            }
            Rotation::Rotate90 | Rotation::Rotate270 => {
                Size::new(dims.height as u32, dims.width as u32)
            }
        }
    }
}

impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.buffer_mut().draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer_mut().fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer_mut().clear(color)
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let rotated = self.config().rotated_dimensions();
        Size::new(rotated.width as u32, rotated.height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions};
    use alloc::vec;
    use alloc::vec::Vec;
    use embedded_graphics::pixelcolor::RgbColor;
    use embedded_graphics::primitives::{Primitive, PrimitiveStyle};
    use embedded_graphics::Drawable;
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = Infallible;

        fn write_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }

        fn set_backlight(&mut self, _percent: u8) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_buffer(width: u16, height: u16, rotation: Rotation) -> PixelBuffer<Vec<u8>> {
        let dims = Dimensions::new(width, height).unwrap();
        PixelBuffer::new(vec![0u8; dims.buffer_size()], dims)
            .unwrap()
            .with_rotation(rotation)
    }

    #[test]
    fn test_size_follows_rotation() {
        assert_eq!(test_buffer(240, 135, Rotation::Rotate0).size(), Size::new(240, 135));
        assert_eq!(test_buffer(240, 135, Rotation::Rotate90).size(), Size::new(135, 240));
        assert_eq!(test_buffer(240, 135, Rotation::Rotate180).size(), Size::new(240, 135));
        assert_eq!(test_buffer(240, 135, Rotation::Rotate270).size(), Size::new(135, 240));
    }

    #[test]
    fn test_draw_outside_surface_is_ignored() {
        let mut buffer = test_buffer(4, 4, Rotation::Rotate0);
        let pixels = [
            Pixel(Point::new(-1, 0), Rgb565::WHITE),
            Pixel(Point::new(0, -1), Rgb565::WHITE),
            Pixel(Point::new(4, 0), Rgb565::WHITE),
            Pixel(Point::new(0, 4), Rgb565::WHITE),
        ];
        buffer.draw_iter(pixels).unwrap();
        assert!(buffer.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_draw_pixel_native_order() {
        let mut buffer = test_buffer(4, 4, Rotation::Rotate0);
        Pixel(Point::new(1, 2), Rgb565::GREEN).draw(&mut buffer).unwrap();
        let offset = (2 * 4 + 1) * 2;
        assert_eq!(buffer.as_bytes()[offset..offset + 2], [0xE0, 0x07]);
    }

    #[test]
    fn test_draw_rotated_pixel() {
        let mut buffer = test_buffer(8, 4, Rotation::Rotate90);
        Pixel(Point::new(0, 0), Rgb565::RED).draw(&mut buffer).unwrap();
        assert_eq!(buffer.pixel(7, 0), Some(Color::RED));
    }

    #[test]
    fn test_fill_solid_is_clipped() {
        let mut buffer = test_buffer(6, 4, Rotation::Rotate0);
        Rectangle::new(Point::new(4, 2), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
            .draw(&mut buffer)
            .unwrap();
        for y in 0..4 {
            for x in 0..6 {
                let expected = if x >= 4 && y >= 2 {
                    Color::BLUE
                } else {
                    Color::BLACK
                };
                assert_eq!(buffer.pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_fill_solid_rotated_matches_pixels() {
        let mut filled = test_buffer(6, 4, Rotation::Rotate270);
        let mut drawn = test_buffer(6, 4, Rotation::Rotate270);
        let area = Rectangle::new(Point::new(1, 1), Size::new(2, 3));

        filled.fill_solid(&area, Rgb565::YELLOW).unwrap();
        drawn
            .draw_iter(area.points().map(|p| Pixel(p, Rgb565::YELLOW)))
            .unwrap();
        assert_eq!(filled.as_bytes(), drawn.as_bytes());
    }

    #[test]
    fn test_clear_fills_everything() {
        let mut buffer = test_buffer(3, 3, Rotation::Rotate0);
        buffer.clear(Rgb565::WHITE).unwrap();
        assert!(buffer.as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_display_draws_into_buffer() {
        let config = Builder::lcd_1in14().rotation(Rotation::Rotate90).build().unwrap();
        let storage = vec![0u8; config.dimensions.buffer_size()];
        let mut display = Display::new(MockInterface, config, storage).unwrap();

        assert_eq!(display.size(), Size::new(135, 240));
        Pixel(Point::new(0, 0), Rgb565::CYAN).draw(&mut display).unwrap();
        assert_eq!(display.buffer().pixel(239, 0), Some(Color::CYAN));
    }
}

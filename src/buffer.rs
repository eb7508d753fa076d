//! Pixel buffer and in-place transforms
//!
//! [`PixelBuffer`] owns the raw framebuffer memory: `width * height` RGB565
//! pixels, row-major, two bytes each. Drawing happens in [`ByteOrder::Native`]
//! (little-endian, low byte first). The controller expects the high byte
//! first, so [`Display::show`](crate::Display::show) swaps to
//! [`ByteOrder::Wire`] for the transfer and swaps back afterwards.
//!
//! All transforms work in place on the contiguous byte slice and never
//! allocate.

use crate::color::Color;
use crate::config::{Dimensions, Rotation};
use crate::error::BufferError;

/// Byte order of the pixels currently held in the buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Low byte first; the order drawing code writes
    #[default]
    Native,
    /// High byte first; the order the controller reads
    Wire,
}

impl ByteOrder {
    fn toggled(self) -> Self {
        match self {
            Self::Native => Self::Wire,
            Self::Wire => Self::Native,
        }
    }
}

/// RGB565 framebuffer
///
/// ## Type Parameters
///
/// * `B` - Storage, e.g. `[u8; N]`, `&'static mut [u8]` or `Vec<u8>`
pub struct PixelBuffer<B> {
    buffer: B,
    dimensions: Dimensions,
    rotation: Rotation,
    order: ByteOrder,
}

impl<B> PixelBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap storage as a pixel buffer
    ///
    /// The storage is taken as holding native-order pixels.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError`] unless the storage is exactly
    /// `dimensions.buffer_size()` bytes.
    pub fn new(buffer: B, dimensions: Dimensions) -> Result<Self, BufferError> {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided != required {
            return Err(BufferError { required, provided });
        }
        Ok(Self {
            buffer,
            dimensions,
            rotation: Rotation::Rotate0,
            order: ByteOrder::Native,
        })
    }

    /// Set the rotation used when drawing through embedded-graphics
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Drawing rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Current byte order of the stored pixels
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Raw bytes, mutable
    ///
    /// Writes must respect [`byte_order`](Self::byte_order).
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }

    /// Give back the storage
    pub fn release(self) -> B {
        self.buffer
    }

    /// Exchange the two bytes of every pixel
    ///
    /// Toggles between [`ByteOrder::Native`] and [`ByteOrder::Wire`]. Two
    /// calls restore the previous bytes.
    pub fn swap_bytes(&mut self) {
        for pixel in self.buffer.as_mut().chunks_exact_mut(2) {
            pixel.swap(0, 1);
        }
        self.order = self.order.toggled();
    }

    /// Flip the image horizontally
    ///
    /// Each row swaps pixel `x` with pixel `width - 1 - x` over the left half.
    /// With an odd width the centre column stays where it is.
    pub fn mirror_horizontal(&mut self) {
        let width = self.dimensions.width as usize;
        let row_bytes = width * 2;
        for row in self.buffer.as_mut().chunks_exact_mut(row_bytes) {
            for x in 0..width / 2 {
                let left = x * 2;
                let right = (width - 1 - x) * 2;
                row.swap(left, right);
                row.swap(left + 1, right + 1);
            }
        }
    }

    /// Copy raw bytes into the buffer starting at byte offset `start`
    ///
    /// Bytes are copied as given, without byte-order conversion.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError`] if the bytes would run past the end.
    pub fn insert(&mut self, start: usize, bytes: &[u8]) -> Result<(), BufferError> {
        let buffer = self.buffer.as_mut();
        let provided = buffer.len();
        let end = start.saturating_add(bytes.len());
        match buffer.get_mut(start..end) {
            Some(dest) => {
                dest.copy_from_slice(bytes);
                Ok(())
            }
            None => Err(BufferError {
                required: end,
                provided,
            }),
        }
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        let bytes = self.encode(color);
        for pixel in self.buffer.as_mut().chunks_exact_mut(2) {
            pixel.copy_from_slice(&bytes);
        }
    }

    /// Set one pixel in physical coordinates
    ///
    /// Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.write_index(index, color);
        }
    }

    /// Read one pixel in physical coordinates
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        let index = self.index(x, y)?;
        let bytes = [self.as_bytes()[index * 2], self.as_bytes()[index * 2 + 1]];
        Some(Color(match self.order {
            ByteOrder::Native => u16::from_le_bytes(bytes),
            ByteOrder::Wire => u16::from_be_bytes(bytes),
        }))
    }

    /// Store `color` at pixel index `index` (unchecked against dimensions)
    pub(crate) fn write_index(&mut self, index: usize, color: Color) {
        let bytes = self.encode(color);
        if let Some(dest) = self.buffer.as_mut().get_mut(index * 2..index * 2 + 2) {
            dest.copy_from_slice(&bytes);
        }
    }

    fn encode(&self, color: Color) -> [u8; 2] {
        match self.order {
            ByteOrder::Native => color.raw().to_le_bytes(),
            ByteOrder::Wire => color.raw().to_be_bytes(),
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return None;
        }
        Some(y as usize * self.dimensions.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn buffer(width: u16, height: u16) -> PixelBuffer<Vec<u8>> {
        let dims = Dimensions::new(width, height).unwrap();
        PixelBuffer::new(vec![0u8; dims.buffer_size()], dims).unwrap()
    }

    fn numbered(width: u16, height: u16) -> PixelBuffer<Vec<u8>> {
        let mut buf = buffer(width, height);
        for y in 0..height {
            for x in 0..width {
                buf.set_pixel(x, y, Color(y * 100 + x));
            }
        }
        buf
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let dims = Dimensions::new(4, 2).unwrap();
        let short = PixelBuffer::new(vec![0u8; 15], dims);
        assert!(matches!(
            short,
            Err(BufferError {
                required: 16,
                provided: 15
            })
        ));
        let long = PixelBuffer::new(vec![0u8; 17], dims);
        assert!(long.is_err());
    }

    #[test]
    fn test_swap_green_panel() {
        let mut buf = buffer(240, 135);
        for pixel in buf.as_bytes_mut().chunks_exact_mut(2) {
            pixel.copy_from_slice(&[0x07, 0xE0]);
        }

        buf.swap_bytes();
        assert_eq!(buf.byte_order(), ByteOrder::Wire);
        assert!(buf.as_bytes().chunks_exact(2).all(|p| p == [0xE0, 0x07]));

        buf.swap_bytes();
        assert_eq!(buf.byte_order(), ByteOrder::Native);
        assert!(buf.as_bytes().chunks_exact(2).all(|p| p == [0x07, 0xE0]));
    }

    #[test]
    fn test_swap_twice_is_identity() {
        for (w, h) in [(1, 1), (3, 1), (7, 5), (240, 135)] {
            let mut buf = buffer(w, h);
            for (i, byte) in buf.as_bytes_mut().iter_mut().enumerate() {
                *byte = (i * 31 % 251) as u8;
            }
            let before = buf.as_bytes().to_vec();
            buf.swap_bytes();
            buf.swap_bytes();
            assert_eq!(buf.as_bytes(), &before[..]);
        }
    }

    #[test]
    fn test_mirror_even_width() {
        let mut buf = numbered(4, 2);
        buf.mirror_horizontal();
        assert_eq!(buf.pixel(0, 0), Some(Color(3)));
        assert_eq!(buf.pixel(3, 0), Some(Color(0)));
        assert_eq!(buf.pixel(1, 1), Some(Color(102)));
        assert_eq!(buf.pixel(2, 1), Some(Color(101)));
    }

    #[test]
    fn test_mirror_odd_width_leaves_centre_column() {
        let mut buf = numbered(5, 3);
        buf.mirror_horizontal();
        for y in 0..3 {
            assert_eq!(buf.pixel(2, y), Some(Color(y * 100 + 2)));
            assert_eq!(buf.pixel(0, y), Some(Color(y * 100 + 4)));
        }
        buf.mirror_horizontal();
        for y in 0..3 {
            assert_eq!(buf.pixel(2, y), Some(Color(y * 100 + 2)));
        }
    }

    #[test]
    fn test_mirror_twice_is_identity() {
        for (w, h) in [(1, 1), (2, 3), (5, 4), (240, 135)] {
            let mut buf = numbered(w, h);
            let before = buf.as_bytes().to_vec();
            buf.mirror_horizontal();
            buf.mirror_horizontal();
            assert_eq!(buf.as_bytes(), &before[..]);
        }
    }

    #[test]
    fn test_mirror_keeps_rows_separate() {
        let mut buf = numbered(240, 135);
        buf.mirror_horizontal();
        for y in 0..135 {
            assert_eq!(buf.pixel(0, y), Some(Color(y * 100 + 239)));
            assert_eq!(buf.pixel(239, y), Some(Color(y * 100)));
        }
    }

    #[test]
    fn test_insert_within_bounds() {
        let mut buf = buffer(4, 1);
        buf.insert(2, &[0xAB, 0xCD, 0xEF]).unwrap();
        assert_eq!(buf.as_bytes(), &[0, 0, 0xAB, 0xCD, 0xEF, 0, 0, 0]);
    }

    #[test]
    fn test_insert_past_end_is_rejected() {
        let mut buf = buffer(4, 1);
        let result = buf.insert(6, &[1, 2, 3]);
        assert_eq!(
            result,
            Err(BufferError {
                required: 9,
                provided: 8
            })
        );
        assert!(buf.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_fill_follows_byte_order() {
        let mut buf = buffer(2, 2);
        buf.fill(Color::RED);
        assert!(buf.as_bytes().chunks_exact(2).all(|p| p == [0x00, 0xF8]));

        buf.swap_bytes();
        buf.fill(Color::BLUE);
        assert!(buf.as_bytes().chunks_exact(2).all(|p| p == [0x00, 0x1F]));
        assert_eq!(buf.pixel(1, 1), Some(Color::BLUE));
    }

    #[test]
    fn test_set_pixel_out_of_range_is_ignored() {
        let mut buf = buffer(3, 3);
        buf.set_pixel(3, 0, Color::WHITE);
        buf.set_pixel(0, 3, Color::WHITE);
        assert!(buf.as_bytes().iter().all(|b| *b == 0));
        assert_eq!(buf.pixel(3, 0), None);
    }
}

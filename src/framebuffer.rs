//! 1 bit-per-pixel mirror of the panel's pixel memory
//!
//! A full 4-bit grayscale page buffer for the 160x32 panel would take
//! 2,560 bytes; most targets don't have that to spare, so the mirror
//! stores 1 bit per pixel and the flush path expands on the fly. A
//! mirror of some kind is unavoidable: in SPI mode the host cannot read
//! the SSD1320's GDRAM back, so read-modify-write compositing has to
//! happen host-side.

use crate::color::{Color, DrawMode};

#[cfg(feature = "graphics")]
use core::convert::Infallible;
#[cfg(feature = "graphics")]
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

/// Bytes needed to back a framebuffer of the given pixel dimensions.
pub const fn buffer_len(width: usize, height: usize) -> usize {
    width * height / 8
}

/// Bit-packed, row-major pixel store over caller-owned RAM.
///
/// Each byte holds 8 horizontally adjacent pixels, MSB leftmost. The
/// storage is borrowed rather than owned so the caller decides where the
/// (possibly large) buffer lives; whatever it contains at construction
/// becomes the initial frame, which is how a preloaded splash image
/// survives until the first clear.
pub struct Framebuffer<'a> {
    buf: &'a mut [u8],
    width: u16,
    height: u16,
}

impl<'a> Framebuffer<'a> {
    /// Wrap `buf` as a `width` x `height` pixel store.
    ///
    /// `width` must be a multiple of 8 and `buf` must hold exactly
    /// `width * height / 8` bytes. The dimensions are fixed for the life
    /// of the buffer.
    pub fn new(buf: &'a mut [u8], width: u16, height: u16) -> Self {
        assert!(width % 8 == 0, "width must be a multiple of 8");
        assert!(
            buf.len() == buffer_len(width as usize, height as usize),
            "storage length must be width * height / 8"
        );
        Framebuffer { buf, width, height }
    }

    /// Width in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Plot one pixel. Out-of-range coordinates (negative included) are a
    /// no-op, never an error.
    ///
    /// Under [`DrawMode::Norm`] the pixel takes `color`; under
    /// [`DrawMode::Xor`] the pixel toggles and `color` is ignored.
    pub fn set_pixel(&mut self, x: i16, y: i16, color: Color, mode: DrawMode) {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return;
        }

        let byte = y as usize * (self.width as usize / 8) + x as usize / 8;
        let mask = 1u8 << (7 - (x as usize % 8));

        match mode {
            DrawMode::Xor => self.buf[byte] ^= mask,
            DrawMode::Norm => {
                if color == Color::On {
                    self.buf[byte] |= mask;
                } else {
                    self.buf[byte] &= !mask;
                }
            }
        }
    }

    /// Read one pixel back, or `None` out of range.
    pub fn get_pixel(&self, x: i16, y: i16) -> Option<Color> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }

        let byte = y as usize * (self.width as usize / 8) + x as usize / 8;
        let mask = 1u8 << (7 - (x as usize % 8));
        Some(if self.buf[byte] & mask != 0 {
            Color::On
        } else {
            Color::Off
        })
    }

    /// Zero every byte of the mirror. The panel is untouched.
    pub fn clear_buffer(&mut self) {
        self.buf.fill(0);
    }

    /// Overwrite the whole mirror verbatim.
    ///
    /// `bytes` must already be in the 1bpp row-major MSB-left layout and
    /// hold exactly `width * height / 8` bytes; any other length panics.
    pub fn load_raw(&mut self, bytes: &[u8]) {
        self.buf.copy_from_slice(bytes);
    }

    /// The raw mirror bytes, for inspection or bulk upload elsewhere.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf
    }

    /// Mutable access to the raw mirror bytes.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        self.buf
    }
}

#[cfg(feature = "graphics")]
impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width), u32::from(self.height))
    }
}

#[cfg(feature = "graphics")]
impl DrawTarget for Framebuffer<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (i16::try_from(point.x), i16::try_from(point.y)) {
                self.set_pixel(x, y, color.into(), DrawMode::Norm);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_set_pixel_reads_back_as_written() {
        let mut storage = [0u8; buffer_len(16, 8)];
        let mut fb = Framebuffer::new(&mut storage, 16, 8);

        for y in 0..8 {
            for x in 0..16 {
                fb.set_pixel(x, y, Color::On, DrawMode::Norm);
                assert_eq!(fb.get_pixel(x, y), Some(Color::On));
                fb.set_pixel(x, y, Color::Off, DrawMode::Norm);
                assert_eq!(fb.get_pixel(x, y), Some(Color::Off));
            }
        }
    }

    #[test]
    fn addressing_is_row_major_msb_first() {
        let mut storage = [0u8; buffer_len(16, 2)];
        let mut fb = Framebuffer::new(&mut storage, 16, 2);

        // leftmost pixel of the second byte-column in the second row
        fb.set_pixel(8, 1, Color::On, DrawMode::Norm);
        assert_eq!(fb.as_bytes(), &[0x00, 0x00, 0x80, 0x00]);

        fb.clear_buffer();
        for x in 0..8 {
            fb.set_pixel(x, 0, Color::On, DrawMode::Norm);
        }
        assert_eq!(fb.as_bytes()[0], 0xFF);
    }

    #[test]
    fn xor_is_an_involution_and_ignores_color() {
        let mut storage = [0u8; buffer_len(8, 1)];
        let mut fb = Framebuffer::new(&mut storage, 8, 1);

        fb.set_pixel(3, 0, Color::Off, DrawMode::Xor);
        assert_eq!(fb.get_pixel(3, 0), Some(Color::On));
        fb.set_pixel(3, 0, Color::On, DrawMode::Xor);
        assert_eq!(fb.get_pixel(3, 0), Some(Color::Off));
    }

    #[test]
    fn out_of_range_coordinates_are_ignored() {
        let mut storage = [0u8; buffer_len(16, 4)];
        let mut fb = Framebuffer::new(&mut storage, 16, 4);

        fb.set_pixel(-1, 0, Color::On, DrawMode::Norm);
        fb.set_pixel(0, -1, Color::On, DrawMode::Norm);
        fb.set_pixel(16, 0, Color::On, DrawMode::Norm);
        fb.set_pixel(0, 4, Color::On, DrawMode::Norm);

        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.get_pixel(16, 0), None);
        assert_eq!(fb.get_pixel(-1, 0), None);
    }

    #[test]
    fn clear_buffer_zeroes_every_byte() {
        let mut storage = [0xA5u8; buffer_len(32, 8)];
        let mut fb = Framebuffer::new(&mut storage, 32, 8);

        fb.clear_buffer();

        assert_eq!(fb.as_bytes().len(), 32);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn load_raw_overwrites_verbatim() {
        let mut storage = [0u8; buffer_len(16, 1)];
        let mut fb = Framebuffer::new(&mut storage, 16, 1);

        fb.load_raw(&[0xDE, 0xAD]);

        assert_eq!(fb.as_bytes(), &[0xDE, 0xAD]);
        assert_eq!(fb.get_pixel(0, 0), Some(Color::On));
        assert_eq!(fb.get_pixel(2, 0), Some(Color::Off));
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn draw_target_plots_binary_pixels() {
        let mut storage = [0u8; buffer_len(16, 8)];
        let mut fb = Framebuffer::new(&mut storage, 16, 8);

        embedded_graphics::primitives::Line::new(Point::new(0, 0), Point::new(7, 0))
            .into_styled(embedded_graphics::primitives::PrimitiveStyle::with_stroke(
                BinaryColor::On,
                1,
            ))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.as_bytes()[0], 0xFF);
        // far out-of-range points must not wrap into the buffer
        let _ = fb.draw_iter([Pixel(Point::new(1 << 20, 0), BinaryColor::On)]);
        assert_eq!(fb.as_bytes()[0], 0xFF);
    }
}

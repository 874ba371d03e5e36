//! Glyph blitting and the text sink
//!
//! Fonts are read-only byte resources behind the [`FontSource`]
//! capability: a 6-byte header followed by the glyph bitmap. Glyph
//! columns are stored top bit first, which is reversed relative to the
//! on-screen top-to-bottom order, so every source byte is bit-reversed
//! before plotting.

use core::fmt;

use crate::color::{Color, DrawMode};
use crate::driver::Ssd1320;

/// Bytes of header before the glyph bitmap: width, height, starting
/// character code, character count, and the row stride as two bytes
/// combined `hi * 100 + lo`.
pub const FONT_HEADER_SIZE: usize = 6;

/// Byte-addressable read-only font storage.
///
/// Keeps the renderer independent of where font tables live; flash,
/// RAM and memory-mapped storage all qualify. Reads beyond the end of
/// the resource return zero (a blank glyph column) rather than failing.
pub trait FontSource {
    /// Read the byte at `offset` from the start of the resource.
    fn read(&self, offset: usize) -> u8;
}

impl FontSource for [u8] {
    fn read(&self, offset: usize) -> u8 {
        self.get(offset).copied().unwrap_or(0)
    }
}

impl<const N: usize> FontSource for [u8; N] {
    fn read(&self, offset: usize) -> u8 {
        self.as_slice().read(offset)
    }
}

/// Parsed font header for the active font.
#[derive(Clone, Copy, Debug, Default)]
pub struct FontDescriptor {
    pub(crate) width: u8,
    pub(crate) height: u8,
    pub(crate) start_char: u8,
    pub(crate) total_char: u8,
    pub(crate) map_width: u16,
}

impl<'a, BUS, RST> Ssd1320<'a, BUS, RST> {
    /// Switch to font `font_type` from the font table.
    ///
    /// Returns `false` without changing any state when the index is
    /// outside the table; otherwise parses the font's header and makes it
    /// the active font.
    pub fn set_font_type(&mut self, font_type: usize) -> bool {
        let Some(font) = self.fonts.get(font_type) else {
            return false;
        };

        self.font = FontDescriptor {
            width: font.read(0),
            height: font.read(1),
            start_char: font.read(2),
            total_char: font.read(3),
            map_width: u16::from(font.read(4)) * 100 + u16::from(font.read(5)),
        };
        self.font_type = font_type;
        true
    }

    /// Index of the active font.
    pub fn font_type(&self) -> usize {
        self.font_type
    }

    /// Number of fonts in the table.
    pub fn total_fonts(&self) -> usize {
        self.fonts.len()
    }

    /// Glyph width of the active font, in pixels.
    pub fn font_width(&self) -> u8 {
        self.font.width
    }

    /// Glyph height of the active font, in pixels.
    pub fn font_height(&self) -> u8 {
        self.font.height
    }

    /// First character code the active font covers. Fonts don't have to
    /// start at ASCII 0.
    pub fn font_start_char(&self) -> u8 {
        self.font.start_char
    }

    /// Number of characters the active font covers.
    pub fn font_total_char(&self) -> u8 {
        self.font.total_char
    }

    /// Draw character `c` with its top-left corner at `(x, y)`.
    ///
    /// Characters the active font has no glyph for are skipped. Glyphs
    /// paint both foreground and background pixels (set bits take
    /// `color`, clear bits its complement), so characters overwrite
    /// whatever was underneath without a separate erase.
    pub fn draw_char(&mut self, x: i16, y: i16, c: u8, color: Color, mode: DrawMode) {
        let Some(&font) = self.fonts.get(self.font_type) else {
            return;
        };
        let desc = self.font;

        let first = u16::from(desc.start_char);
        if u16::from(c) < first || u16::from(c) >= first + u16::from(desc.total_char) {
            // no bitmap for this character
            return;
        }
        let glyph = usize::from(c - desc.start_char);
        let width = usize::from(desc.width);

        // a controller page is 8 pixels high; a 16 pixel font spans 2
        let rows_to_draw = (usize::from(desc.height) / 8).max(1);

        if rows_to_draw == 1 {
            // the extra column is an implicit blank spacer; 5x7-style
            // fonts carry no margin of their own
            for i in 0..=width {
                let byte = if i == width {
                    0
                } else {
                    font.read(FONT_HEADER_SIZE + glyph * width + i)
                };
                self.blit_column(x + i as i16, y, byte, color, mode);
            }
            return;
        }

        // taller fonts are a row-major grid of glyphs inside the bitmap
        let map_width = usize::from(desc.map_width);
        let chars_per_row = map_width / width;
        if chars_per_row == 0 {
            return;
        }
        let glyph_start = (glyph / chars_per_row) * map_width * rows_to_draw
            + (glyph % chars_per_row) * width;

        for row in 0..rows_to_draw {
            // byte-rows are stored bottom-to-top relative to the screen
            let y_offset = ((rows_to_draw - 1 - row) * 8) as i16;
            for i in 0..width {
                let byte = font.read(FONT_HEADER_SIZE + glyph_start + i + row * map_width);
                self.blit_column(x + i as i16, y + y_offset, byte, color, mode);
            }
        }
    }

    fn blit_column(&mut self, x: i16, y: i16, byte: u8, color: Color, mode: DrawMode) {
        let byte = byte.reverse_bits();
        for j in 0..8 {
            let pixel = if byte & (1 << j) != 0 {
                color
            } else {
                color.inverse()
            };
            self.fb.set_pixel(x, y + j, pixel, mode);
        }
    }

    /// Append one byte to the text stream at the cursor.
    ///
    /// `\n` moves the cursor to the start of the next text row, `\r` is
    /// ignored, anything else is drawn with the current color and draw
    /// mode. The cursor advances by the font width plus the spacer column
    /// and wraps once it would run past the right edge.
    pub fn write_byte(&mut self, c: u8) {
        if c == b'\n' {
            self.cursor_y += i16::from(self.font.height);
            self.cursor_x = 0;
        } else if c == b'\r' {
            // skip
        } else {
            self.draw_char(self.cursor_x, self.cursor_y, c, self.fore_color, self.draw_mode);
            self.cursor_x += i16::from(self.font.width) + 1;
            if self.cursor_x > self.fb.width() as i16 - i16::from(self.font.width) {
                self.cursor_y += i16::from(self.font.height);
                self.cursor_x = 0;
            }
        }
    }
}

impl<BUS, RST> fmt::Write for Ssd1320<'_, BUS, RST> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::buffer_len;
    use crate::interface::{DisplayError, Mode, ThreeWireBus};
    use core::convert::Infallible;
    use core::fmt::Write;

    struct NullBus;

    impl ThreeWireBus for NullBus {
        fn assert_mode(&mut self, _mode: Mode) -> Result<(), DisplayError> {
            Ok(())
        }

        fn transfer_byte(&mut self, _byte: u8) -> Result<(), DisplayError> {
            Ok(())
        }
    }

    struct NoopPin;

    impl embedded_hal::digital::ErrorType for NoopPin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::OutputPin for NoopPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    // 3x8 font covering 'A' and 'B'. Columns top bit first: 'A' is a lit
    // top-left pixel and a solid third column, 'B' is a checker column.
    const TINY: [u8; 12] = [
        3, 8, b'A', 2, 0, 0, // header
        0x80, 0x00, 0xFF, // 'A'
        0xAA, 0x55, 0x00, // 'B'
    ];

    // 8x16 font covering '0' and '1', two glyphs per bitmap row
    // (map width 16). Byte-rows are stored bottom-to-top.
    fn tall_font() -> [u8; 6 + 32] {
        let mut font = [0u8; 38];
        font[..6].copy_from_slice(&[8, 16, b'0', 2, 0, 16]);
        // glyph '1', lower byte-row: solid
        for i in 6 + 8..6 + 16 {
            font[i] = 0xFF;
        }
        // glyph '1', upper byte-row: top pixel only
        for i in 6 + 24..6 + 32 {
            font[i] = 0x80;
        }
        font
    }

    fn driver<'a>(
        storage: &'a mut [u8],
        width: u16,
        height: u16,
        fonts: &'a [&'a dyn FontSource],
    ) -> Ssd1320<'a, NullBus, NoopPin> {
        let mut oled = Ssd1320::new(NullBus, NoopPin, storage, width, height, fonts);
        assert!(oled.set_font_type(0));
        oled
    }

    #[test]
    fn set_font_type_rejects_out_of_table_indices() {
        let mut storage = [0u8; buffer_len(8, 8)];
        let fonts: [&dyn FontSource; 1] = [&TINY];
        let mut oled = driver(&mut storage, 8, 8, &fonts);

        assert_eq!(oled.font_width(), 3);
        assert!(!oled.set_font_type(1));

        // failed switch leaves the parsed header alone
        assert_eq!(oled.font_width(), 3);
        assert_eq!(oled.font_height(), 8);
        assert_eq!(oled.font_type(), 0);
        assert_eq!(oled.total_fonts(), 1);
    }

    #[test]
    fn font_header_combines_the_stride_bytes() {
        let mut storage = [0u8; buffer_len(8, 8)];
        let header: [u8; 6] = [8, 16, 0, 1, 1, 92];
        let fonts: [&dyn FontSource; 1] = [&header];
        let oled = driver(&mut storage, 8, 8, &fonts);

        assert_eq!(oled.font.map_width, 192);
        assert_eq!(oled.font_start_char(), 0);
        assert_eq!(oled.font_total_char(), 1);
    }

    #[test]
    fn draw_char_paints_foreground_and_background() {
        let mut storage = [0xFFu8; buffer_len(8, 8)];
        let fonts: [&dyn FontSource; 1] = [&TINY];
        let mut oled = driver(&mut storage, 8, 8, &fonts);

        oled.draw_char(0, 0, b'A', Color::On, DrawMode::Norm);

        // column 0: only the top pixel of the glyph is set
        assert_eq!(oled.framebuffer().get_pixel(0, 0), Some(Color::On));
        for y in 1..8 {
            assert_eq!(oled.framebuffer().get_pixel(0, y), Some(Color::Off));
        }
        // column 2 is solid, column 1 and the spacer column 3 are blank
        for y in 0..8 {
            assert_eq!(oled.framebuffer().get_pixel(2, y), Some(Color::On));
            assert_eq!(oled.framebuffer().get_pixel(1, y), Some(Color::Off));
            assert_eq!(oled.framebuffer().get_pixel(3, y), Some(Color::Off));
        }
        // pixels right of the glyph survive from the 0xFF prefill
        for y in 0..8 {
            assert_eq!(oled.framebuffer().get_pixel(4, y), Some(Color::On));
        }
    }

    #[test]
    fn draw_char_outside_the_font_range_is_a_no_op() {
        let mut storage = [0x5Au8; buffer_len(8, 8)];
        let fonts: [&dyn FontSource; 1] = [&TINY];
        let mut oled = driver(&mut storage, 8, 8, &fonts);

        oled.draw_char(0, 0, b'C', Color::On, DrawMode::Norm);
        oled.draw_char(0, 0, b'@', Color::On, DrawMode::Norm);

        assert!(oled.raw_bytes().iter().all(|&b| b == 0x5A));
    }

    #[test]
    fn draw_char_without_fonts_is_a_no_op() {
        let mut storage = [0u8; buffer_len(8, 8)];
        let mut oled = Ssd1320::new(NullBus, NoopPin, &mut storage, 8, 8, &[]);

        assert!(!oled.set_font_type(0));
        oled.draw_char(0, 0, b'A', Color::On, DrawMode::Norm);

        assert!(oled.raw_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn tall_fonts_draw_byte_rows_bottom_to_top() {
        let mut storage = [0u8; buffer_len(16, 16)];
        let font = tall_font();
        let fonts: [&dyn FontSource; 1] = [&font];
        let mut oled = driver(&mut storage, 16, 16, &fonts);

        oled.draw_char(0, 0, b'1', Color::On, DrawMode::Norm);

        for x in 0..8 {
            // upper byte-row comes from the second stored row
            assert_eq!(oled.framebuffer().get_pixel(x, 0), Some(Color::On));
            for y in 1..8 {
                assert_eq!(oled.framebuffer().get_pixel(x, y), Some(Color::Off));
            }
            // lower byte-row is the solid first stored row
            for y in 8..16 {
                assert_eq!(oled.framebuffer().get_pixel(x, y), Some(Color::On));
            }
        }
    }

    #[test]
    fn write_byte_advances_and_wraps_the_cursor() {
        let mut storage = [0u8; buffer_len(16, 16)];
        let fonts: [&dyn FontSource; 1] = [&TINY];
        let mut oled = driver(&mut storage, 16, 16, &fonts);

        oled.write_byte(b'A');
        assert_eq!((oled.cursor_x, oled.cursor_y), (4, 0));
        oled.write_byte(b'A');
        oled.write_byte(b'A');
        assert_eq!((oled.cursor_x, oled.cursor_y), (12, 0));

        // 12 + 4 runs past 16 - 3, so the next byte wraps
        oled.write_byte(b'A');
        assert_eq!((oled.cursor_x, oled.cursor_y), (0, 8));
    }

    #[test]
    fn newline_and_carriage_return_handling() {
        let mut storage = [0u8; buffer_len(16, 16)];
        let fonts: [&dyn FontSource; 1] = [&TINY];
        let mut oled = driver(&mut storage, 16, 16, &fonts);

        oled.write_byte(b'A');
        oled.write_byte(b'\r');
        assert_eq!((oled.cursor_x, oled.cursor_y), (4, 0));
        oled.write_byte(b'\n');
        assert_eq!((oled.cursor_x, oled.cursor_y), (0, 8));
    }

    #[test]
    fn fmt_write_streams_through_the_cursor() {
        let mut storage = [0u8; buffer_len(16, 16)];
        let fonts: [&dyn FontSource; 1] = [&TINY];
        let mut oled = driver(&mut storage, 16, 16, &fonts);

        write!(oled, "AB").unwrap();

        assert_eq!((oled.cursor_x, oled.cursor_y), (8, 0));
        // 'B' checker column at x = 4: stored 0xAA puts the top bit on
        assert_eq!(oled.framebuffer().get_pixel(4, 0), Some(Color::On));
        assert_eq!(oled.framebuffer().get_pixel(4, 1), Some(Color::Off));
    }
}

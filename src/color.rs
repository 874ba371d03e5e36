//! Pixel color and compositing mode types

#[cfg(feature = "graphics")]
use embedded_graphics::pixelcolor::BinaryColor;

/// Logical state of a single framebuffer pixel.
///
/// The buffer is 1 bit per pixel regardless of the controller's grayscale
/// depth; [`crate::driver::Ssd1320::flush`] expands `On` pixels to full
/// brightness and `Off` pixels to black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Color {
    /// Pixel dark
    #[default]
    Off,
    /// Pixel lit
    On,
}

impl Color {
    /// The opposite pixel state.
    ///
    /// Glyph rendering paints the complement for background bits, giving
    /// opaque characters with no separate erase step.
    pub fn inverse(self) -> Color {
        match self {
            Color::Off => Color::On,
            Color::On => Color::Off,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::Off => Color::Off,
            BinaryColor::On => Color::On,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Off => BinaryColor::Off,
            Color::On => BinaryColor::On,
        }
    }
}

/// How a drawing operation combines with the pixels already in the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Overwrite: the pixel takes the requested color.
    #[default]
    Norm,
    /// Toggle: the pixel flips regardless of the requested color. Drawing
    /// the same shape twice restores the original buffer.
    Xor,
}

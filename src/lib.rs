//! SSD1320 OLED Display Driver
//!
//! Used in the [SparkFun Flexible Grayscale OLED Breakout](https://www.sparkfun.com/products/14606),
//! a 160x32 bendable panel driven over 3-wire SPI.
//!
//! ## Architecture
//!
//! This driver separates transport framing from graphics rendering:
//! - **`interface`** frames every byte as command or data. The SSD1320's
//!   3-wire mode wants nine bits per transfer: a hand-clocked D/C# bit
//!   followed by the payload byte. The [`interface::ThreeWireBus`] trait
//!   is the injection point for that mechanism; [`interface::SoftSpi3`]
//!   is an all-GPIO implementation of it.
//! - **`framebuffer`** holds a 1 bit-per-pixel mirror of the panel in
//!   caller-supplied RAM. In SPI mode the host cannot read the SSD1320's
//!   GDRAM back, so every drawing operation lands in this mirror and only
//!   [`driver::Ssd1320::flush`] pushes it out, expanding each pixel to the
//!   controller's 4-bit grayscale format on the way.
//! - **`driver`** owns the interface, the framebuffer and the draw state,
//!   and exposes the raster, text and controller-command surface.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use core::fmt::Write;
//! use ssd1320::framebuffer::buffer_len;
//! use ssd1320::prelude::*;
//! use ssd1320::{fonts, FLEX_OLED_HEIGHT, FLEX_OLED_WIDTH};
//!
//! // 1. Wire up the transport: three push-pull GPIOs
//! let bus = SoftSpi3::new(sclk, sdin, cs);
//!
//! // 2. Framebuffer storage lives with the caller; its initial contents
//! //    become the first frame, so a splash image can be preloaded here
//! let mut frame = [0u8; buffer_len(FLEX_OLED_WIDTH as usize, FLEX_OLED_HEIGHT as usize)];
//!
//! // 3. Create and power up the driver
//! let fonts: &[&dyn FontSource] = &[&fonts::FONT_5X7];
//! let mut oled = Ssd1320::new(bus, rst, &mut frame, FLEX_OLED_WIDTH, FLEX_OLED_HEIGHT, fonts);
//! oled.begin(&mut delay)?;
//!
//! // 4. Draw into the mirror, then flush it to the panel
//! oled.rect(10, 4, 60, 24, Color::On, DrawMode::Norm);
//! oled.circle(120, 16, 12, Color::On, DrawMode::Norm);
//! oled.set_cursor(16, 12);
//! write!(oled, "hello")?;
//! oled.flush()?;
//! ```
//!
//! Drawing never touches the panel; flushing never draws. Callers that
//! need concurrent access must wrap the whole driver in their own mutex.
#![no_std]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[macro_use]
extern crate std;

mod cmd;
pub mod color;
pub mod driver;
mod flag;
pub mod fonts;
pub mod framebuffer;
mod graphics;
pub mod interface;
pub mod text;

/// Width in pixels of the SparkFun flexible grayscale panel
pub const FLEX_OLED_WIDTH: u16 = 160;

/// Height in pixels of the SparkFun flexible grayscale panel
pub const FLEX_OLED_HEIGHT: u16 = 32;

/// Useful exports
pub mod prelude {
    pub use crate::color::{Color, DrawMode};
    pub use crate::driver::{ClearScope, Ssd1320};
    pub use crate::interface::{Mode, SoftSpi3, ThreeWireBus};
    pub use crate::text::FontSource;
}

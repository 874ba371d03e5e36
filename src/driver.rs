//! Driver for the SSD1320 display controller
pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::debug;

use crate::cmd::Cmd;
use crate::color::{Color, DrawMode};
use crate::flag::Flag;
use crate::framebuffer::Framebuffer;
use crate::interface::{ThreeWireBus, ThreeWireInterface};
use crate::text::{FontDescriptor, FontSource};

/// Default power-up sequence, taken from page 11 of the panel datasheet.
/// Values are panel configuration, not driver logic; displays other than
/// the SparkFun flexible 160x32 can pass their own list to
/// [`Ssd1320::new_with_init_sequence`].
pub const DEFAULT_INIT_SEQUENCE: &[InitStep] = &[
    InitStep::Cmd(Cmd::DISPLAY_OFF),
    // clock divide ratio 0x2, oscillator frequency 0xC
    InitStep::Cmd(Cmd::SET_DISPLAY_CLOCK_DIV),
    InitStep::Cmd(0xC2),
    // multiplex ratio 31
    InitStep::Cmd(Cmd::SET_MULTIPLEX),
    InitStep::Cmd(0x1F),
    // display offset 96
    InitStep::Cmd(Cmd::SET_DISPLAY_OFFSET),
    InitStep::Cmd(0x60),
    InitStep::Cmd(Cmd::SET_START_LINE),
    InitStep::Cmd(0x00),
    InitStep::Cmd(Cmd::SET_SEG_REMAP),
    InitStep::Cmd(Cmd::COM_SCAN_INC),
    // segment pins hardware configuration
    InitStep::Cmd(Cmd::SET_COM_PINS),
    InitStep::Cmd(0x12),
    InitStep::Cmd(Cmd::SET_CONTRAST),
    InitStep::Cmd(Flag::CONTRAST_DEFAULT),
    // pre-charge period
    InitStep::Cmd(Cmd::SET_PHASE_LENGTH),
    InitStep::Cmd(0x22),
    // VCOMH deselect level
    InitStep::Cmd(Cmd::SET_VCOM_DESELECT),
    InitStep::Cmd(0x30),
    // internal IREF enable
    InitStep::Cmd(Cmd::SELECT_IREF),
    InitStep::Cmd(0x10),
    InitStep::Cmd(Cmd::MEMORY_MODE),
    InitStep::Cmd(Flag::MEMORY_MODE_HORIZONTAL),
    // disable the internal charge pump
    InitStep::Cmd(Cmd::SET_CHARGE_PUMP_1),
    InitStep::Cmd(0x01),
    InitStep::Cmd(Cmd::SET_CHARGE_PUMP_2),
    InitStep::Cmd(0x00),
    InitStep::Cmd(Cmd::RESET_ALL_ON),
    InitStep::Cmd(Cmd::RESET_INVERT),
    InitStep::Cmd(Cmd::DISPLAY_ON),
];

/// Steps a panel-specific power-up sequence can contain.
#[derive(Clone, Copy, Debug)]
pub enum InitStep {
    /// Send a bare command byte. Command arguments are command bytes too;
    /// on the 3-wire link the distinction is only ordering.
    Cmd(u8),
    /// Let the panel settle for the given number of milliseconds.
    DelayMs(u8),
}

/// What [`Ssd1320::clear`] clears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearScope {
    /// Zero the controller's GDRAM and the in-memory mirror.
    All,
    /// Zero only the controller's GDRAM; the mirror keeps its contents
    /// and the next flush restores the panel.
    DisplayOnly,
    /// Zero only the in-memory mirror. Nothing is transmitted.
    BufferOnly,
}

/// A configured SSD1320 with a framebuffer and draw state.
///
/// The driver owns the transport and the reset pin, and borrows the
/// framebuffer storage and the font table. One instance assumes one
/// caller; wrap the whole driver in a mutex if it has to be shared.
pub struct Ssd1320<'a, BUS, RST> {
    pub(crate) interface: ThreeWireInterface<BUS>,
    rst: RST,
    pub(crate) fb: Framebuffer<'a>,
    pub(crate) fonts: &'a [&'a dyn FontSource],
    pub(crate) fore_color: Color,
    pub(crate) draw_mode: DrawMode,
    pub(crate) cursor_x: i16,
    pub(crate) cursor_y: i16,
    pub(crate) font: FontDescriptor,
    pub(crate) font_type: usize,
    init_sequence: &'static [InitStep],
}

impl<'a, BUS, RST> Ssd1320<'a, BUS, RST>
where
    BUS: ThreeWireBus,
    RST: OutputPin,
{
    /// Create the driver from a transport, a reset pin, framebuffer
    /// storage and a font table.
    ///
    /// `width` must be a multiple of 8 and `buffer` must hold exactly
    /// `width * height / 8` bytes. The buffer's current contents become
    /// the first frame, so a splash image can be preloaded before
    /// construction.
    pub fn new(
        bus: BUS,
        rst: RST,
        buffer: &'a mut [u8],
        width: u16,
        height: u16,
        fonts: &'a [&'a dyn FontSource],
    ) -> Self {
        debug!("creating new Ssd1320 instance");
        Ssd1320 {
            interface: ThreeWireInterface::new(bus),
            rst,
            fb: Framebuffer::new(buffer, width, height),
            fonts,
            fore_color: Color::On,
            draw_mode: DrawMode::Norm,
            cursor_x: 0,
            cursor_y: 0,
            font: FontDescriptor::default(),
            font_type: 0,
            init_sequence: DEFAULT_INIT_SEQUENCE,
        }
    }

    /// Create with a custom power-up sequence.
    pub fn new_with_init_sequence(
        bus: BUS,
        rst: RST,
        buffer: &'a mut [u8],
        width: u16,
        height: u16,
        fonts: &'a [&'a dyn FontSource],
        init_sequence: &'static [InitStep],
    ) -> Self {
        let mut driver = Self::new(bus, rst, buffer, width, height, fonts);
        driver.init_sequence = init_sequence;
        driver
    }

    /// Release the transport and the reset pin.
    pub fn release(self) -> (BUS, RST) {
        (self.interface.release(), self.rst)
    }

    /// Reset the controller and run the power-up sequence, then put the
    /// draw state into its defaults: font 0, color on, normal
    /// compositing, cursor at the origin.
    pub fn begin(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        debug!("powering up ssd1320");
        self.hard_reset(delay)?;

        for step in self.init_sequence {
            debug!("init step: {:?}", step);
            match *step {
                InitStep::Cmd(c) => self.interface.cmd(c)?,
                InitStep::DelayMs(ms) => delay.delay_ms(u32::from(ms)),
            }
        }

        // the window commands double as homing the RAM write pointer
        self.set_column_address(0)?;
        self.set_row_address(0)?;

        self.set_font_type(0);
        self.fore_color = Color::On;
        self.draw_mode = DrawMode::Norm;
        self.set_cursor(0, 0);
        Ok(())
    }

    fn hard_reset(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(1);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_us(3);
        Ok(())
    }

    /// Send a raw command byte.
    pub fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.interface.cmd(cmd)
    }

    /// Send a raw display RAM data byte.
    pub fn data(&mut self, data: u8) -> Result<(), DisplayError> {
        self.interface.data(data)
    }

    /// Set the column window: start at `address`, end at the last column.
    /// Each RAM byte covers two pixels, so the end address is
    /// `width / 2 - 1`. Also homes the column write pointer.
    pub fn set_column_address(&mut self, address: u8) -> Result<(), DisplayError> {
        let end = (self.fb.width() / 2 - 1) as u8;
        self.interface.cmds(&[Cmd::SET_COLUMN, address, end])
    }

    /// Set the row window: start at `address`, end at the last row. Also
    /// homes the row write pointer.
    pub fn set_row_address(&mut self, address: u8) -> Result<(), DisplayError> {
        let end = (self.fb.height() - 1) as u8;
        self.interface.cmds(&[Cmd::SET_ROW, address, end])
    }

    /// Transmit the framebuffer to the controller.
    ///
    /// Homes the write pointer, then expands every 1bpp mirror byte into
    /// four data bytes of the controller's two-pixels-per-byte 4-bit
    /// grayscale format: a set bit becomes a full-scale `0xF` nibble, a
    /// clear bit a `0x0` nibble, most significant bit pair first.
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        debug!("flushing framebuffer to ssd1320");
        self.set_column_address(0)?;
        self.set_row_address(0)?;

        let Ssd1320 { interface, fb, .. } = self;
        for &byte in fb.as_bytes() {
            for shift in [6u8, 4, 2, 0] {
                let pair = (byte >> shift) & 0b11;
                let mut gray = 0u8;
                if pair & 0b10 != 0 {
                    gray |= 0xF0;
                }
                if pair & 0b01 != 0 {
                    gray |= 0x0F;
                }
                interface.data(gray)?;
            }
        }
        Ok(())
    }

    /// Clear the mirror, the panel, or both.
    ///
    /// Clearing the panel streams zero bytes through the transport
    /// without touching the mirror, so it is visible only until the next
    /// flush. [`ClearScope::BufferOnly`] transmits nothing.
    pub fn clear(&mut self, scope: ClearScope) -> Result<(), DisplayError> {
        debug!("clear: {:?}", scope);
        if scope == ClearScope::DisplayOnly || scope == ClearScope::All {
            self.set_column_address(0)?;
            self.set_row_address(0)?;
            // two pixels per data byte, so a row is width / 2 bytes
            let bytes = u32::from(self.fb.height()) * u32::from(self.fb.width() / 2);
            self.interface.data_x_times(0x00, bytes)?;
        }
        if scope == ClearScope::BufferOnly || scope == ClearScope::All {
            self.fb.clear_buffer();
        }
        Ok(())
    }

    /// Invert the panel: lit pixels go dark and dark pixels light up.
    /// Purely a controller setting; the mirror is untouched.
    pub fn invert(&mut self, inverted: bool) -> Result<(), DisplayError> {
        debug!("invert: {}", inverted);
        if inverted {
            self.command(Cmd::INVERT_DISPLAY)
        } else {
            self.command(Cmd::RESET_INVERT)
        }
    }

    /// Set the contrast level. The effect is subtle on this panel.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        debug!("set_contrast: {}", contrast);
        self.interface.cmds(&[Cmd::SET_CONTRAST, contrast])
    }

    /// Mirror the panel top-to-bottom by reversing the COM scan
    /// direction.
    pub fn flip_vertical(&mut self, flipped: bool) -> Result<(), DisplayError> {
        debug!("flip_vertical: {}", flipped);
        if flipped {
            self.command(Cmd::COM_SCAN_INC)
        } else {
            self.command(Cmd::COM_SCAN_DEC)
        }
    }

    /// Mirror the panel left-to-right by remapping the segment order.
    pub fn flip_horizontal(&mut self, flipped: bool) -> Result<(), DisplayError> {
        debug!("flip_horizontal: {}", flipped);
        if flipped {
            self.command(Cmd::SET_SEG_REMAP | Flag::SEG_REMAP_FLIP)
        } else {
            self.command(Cmd::SET_SEG_REMAP & !Flag::SEG_REMAP_FLIP)
        }
    }

    /// Scroll rows `start..=stop` to the right.
    ///
    /// Scrolling is undocumented for the SSD1320; these sequences follow
    /// the SSD1306's and behave oddly on real hardware. `stop < start` is
    /// rejected as a no-op.
    pub fn scroll_right(&mut self, start: u8, stop: u8) -> Result<(), DisplayError> {
        if stop < start {
            return Ok(());
        }
        debug!("scroll_right: {}..={}", start, stop);
        // scrolling must be off while the parameters change, or the
        // controller corrupts RAM
        self.scroll_stop()?;
        self.interface.cmds(&[
            Cmd::RIGHT_HORIZONTAL_SCROLL,
            0x00,
            start,
            Flag::SCROLL_INTERVAL_2_FRAMES,
            stop,
            0x00,
            0xFF,
            Cmd::ACTIVATE_SCROLL,
        ])
    }

    /// Scroll rows `start..=stop` to the left. `stop < start` is rejected
    /// as a no-op.
    pub fn scroll_left(&mut self, start: u8, stop: u8) -> Result<(), DisplayError> {
        if stop < start {
            return Ok(());
        }
        debug!("scroll_left: {}..={}", start, stop);
        self.scroll_stop()?;
        self.interface.cmds(&[
            Cmd::LEFT_HORIZONTAL_SCROLL,
            0x00,
            0x00,
            start,
            self.fb.height() as u8,
            stop,
            0x00,
            0xFF,
            Cmd::ACTIVATE_SCROLL,
        ])
    }

    /// Scroll rows `start..=stop` upward. Undocumented and flaky on real
    /// panels. `stop < start` is rejected as a no-op.
    pub fn scroll_up(&mut self, start: u8, stop: u8) -> Result<(), DisplayError> {
        if stop < start {
            return Ok(());
        }
        debug!("scroll_up: {}..={}", start, stop);
        self.scroll_stop()?;
        let area = (self.fb.height() * 2) as u8;
        self.interface.cmds(&[
            Cmd::SET_VERTICAL_SCROLL_AREA,
            0x00,
            area,
            Cmd::VERTICAL_RIGHT_HORIZONTAL_SCROLL,
            0x00,
            start,
            0x00,
            stop,
            Flag::SCROLL_VERTICAL_OFFSET_1,
            Cmd::ACTIVATE_SCROLL,
        ])
    }

    /// Stop any active scrolling.
    pub fn scroll_stop(&mut self) -> Result<(), DisplayError> {
        self.command(Cmd::DEACTIVATE_SCROLL)
    }
}

impl<'a, BUS, RST> Ssd1320<'a, BUS, RST> {
    /// Width of the panel in pixels.
    pub fn display_width(&self) -> u16 {
        self.fb.width()
    }

    /// Height of the panel in pixels.
    pub fn display_height(&self) -> u16 {
        self.fb.height()
    }

    /// Move the text cursor.
    pub fn set_cursor(&mut self, x: i16, y: i16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Set the foreground color used by the text stream.
    pub fn set_color(&mut self, color: Color) {
        self.fore_color = color;
    }

    /// Set the compositing mode used by the text stream.
    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.draw_mode = mode;
    }

    /// The framebuffer, for direct drawing or embedded-graphics use.
    pub fn framebuffer(&self) -> &Framebuffer<'a> {
        &self.fb
    }

    /// Mutable access to the framebuffer.
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<'a> {
        &mut self.fb
    }

    /// The raw mirror bytes.
    pub fn raw_bytes(&self) -> &[u8] {
        self.fb.as_bytes()
    }

    /// Overwrite the whole mirror with a prebuilt 1bpp image. `bytes`
    /// must hold exactly `width * height / 8` bytes.
    pub fn load_raw(&mut self, bytes: &[u8]) {
        self.fb.load_raw(bytes);
    }

    /// Plot one pixel in the mirror.
    pub fn set_pixel(&mut self, x: i16, y: i16, color: Color, mode: DrawMode) {
        self.fb.set_pixel(x, y, color, mode);
    }

    /// Draw a line. The second endpoint is not plotted; see
    /// [`Framebuffer::line`].
    pub fn line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color, mode: DrawMode) {
        self.fb.line(x0, y0, x1, y1, color, mode);
    }

    /// Draw a horizontal line of `width` pixels.
    pub fn line_h(&mut self, x: i16, y: i16, width: i16, color: Color, mode: DrawMode) {
        self.fb.line_h(x, y, width, color, mode);
    }

    /// Draw a vertical line of `height` pixels.
    pub fn line_v(&mut self, x: i16, y: i16, height: i16, color: Color, mode: DrawMode) {
        self.fb.line_v(x, y, height, color, mode);
    }

    /// Draw a rectangle outline.
    pub fn rect(&mut self, x: i16, y: i16, width: i16, height: i16, color: Color, mode: DrawMode) {
        self.fb.rect(x, y, width, height, color, mode);
    }

    /// Draw a filled rectangle.
    pub fn rect_fill(
        &mut self,
        x: i16,
        y: i16,
        width: i16,
        height: i16,
        color: Color,
        mode: DrawMode,
    ) {
        self.fb.rect_fill(x, y, width, height, color, mode);
    }

    /// Draw a circle outline.
    pub fn circle(&mut self, x0: i16, y0: i16, radius: i16, color: Color, mode: DrawMode) {
        self.fb.circle(x0, y0, radius, color, mode);
    }

    /// Draw a filled circle. Rejected as a no-op under XOR compositing;
    /// see [`Framebuffer::circle_fill`].
    pub fn circle_fill(&mut self, x0: i16, y0: i16, radius: i16, color: Color, mode: DrawMode) {
        self.fb.circle_fill(x0, y0, radius, color, mode);
    }
}

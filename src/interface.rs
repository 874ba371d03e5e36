//! 3-wire serial interface to the SSD1320
//!
//! In 3-wire SPI mode the controller takes nine bits per transfer: a D/C#
//! bit marking the byte as command or data, then the byte itself. Standard
//! byte-oriented SPI peripherals cannot produce the ninth bit, so the bit
//! is clocked by hand while the byte engine is stopped. [`ThreeWireBus`]
//! abstracts that mechanism; [`ThreeWireInterface`] builds the
//! command/data framing the driver uses on top of it.
pub use display_interface::DisplayError;

use embedded_hal::digital::OutputPin;

/// Value of the D/C# bit that precedes every byte on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// D/C# low: the byte is a command opcode or a command argument.
    Command,
    /// D/C# high: the byte is display RAM data.
    Data,
}

/// The injectable 9-bit transfer capability.
///
/// One framed transfer is always `assert_mode` followed by
/// `transfer_byte`. Implementations that drive the payload byte through a
/// hardware SPI engine must stop that engine completely before the manual
/// clock pulse in `assert_mode` and restart it for `transfer_byte`; the
/// engine cannot stay active while a single bit is hand-clocked on its
/// lines.
pub trait ThreeWireBus {
    /// Assert chip select, then drive the control line to `mode` and pulse
    /// the clock once so the controller shifts the D/C# bit in.
    fn assert_mode(&mut self, mode: Mode) -> Result<(), DisplayError>;

    /// Shift the eight payload bits, MSB first, then release chip select.
    fn transfer_byte(&mut self, byte: u8) -> Result<(), DisplayError>;
}

/// All-GPIO [`ThreeWireBus`] implementation.
///
/// Clocks every bit by hand: clock idles low, the controller samples SDIN
/// on the rising edge. Timing margins are generous (the SSD1320 accepts up
/// to 8 MHz), so no delays are inserted between edges; an implementation
/// for a core fast enough to violate the controller's setup times must add
/// its own.
pub struct SoftSpi3<SCLK, SDIN, CS> {
    sclk: SCLK,
    sdin: SDIN,
    cs: CS,
}

impl<SCLK, SDIN, CS> SoftSpi3<SCLK, SDIN, CS>
where
    SCLK: OutputPin,
    SDIN: OutputPin,
    CS: OutputPin,
{
    /// Take ownership of the three bus pins. They should already be
    /// configured as push-pull outputs with SCLK low and CS high.
    pub fn new(sclk: SCLK, sdin: SDIN, cs: CS) -> Self {
        SoftSpi3 { sclk, sdin, cs }
    }

    /// Release the pins.
    pub fn release(self) -> (SCLK, SDIN, CS) {
        (self.sclk, self.sdin, self.cs)
    }

    fn clock_bit(&mut self, bit: bool) -> Result<(), DisplayError> {
        self.sdin
            .set_state(bit.into())
            .map_err(|_| DisplayError::BusWriteError)?;
        self.sclk
            .set_high()
            .map_err(|_| DisplayError::BusWriteError)?;
        self.sclk.set_low().map_err(|_| DisplayError::BusWriteError)
    }
}

impl<SCLK, SDIN, CS> ThreeWireBus for SoftSpi3<SCLK, SDIN, CS>
where
    SCLK: OutputPin,
    SDIN: OutputPin,
    CS: OutputPin,
{
    fn assert_mode(&mut self, mode: Mode) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::CSError)?;
        self.sdin
            .set_state((mode == Mode::Data).into())
            .map_err(|_| DisplayError::DCError)?;
        self.sclk.set_high().map_err(|_| DisplayError::DCError)?;
        self.sclk.set_low().map_err(|_| DisplayError::DCError)
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        for bit in (0..8).rev() {
            self.clock_bit(byte & (1 << bit) != 0)?;
        }
        self.cs.set_high().map_err(|_| DisplayError::CSError)
    }
}

/// Command/data framing over a [`ThreeWireBus`].
pub struct ThreeWireInterface<BUS> {
    bus: BUS,
}

impl<BUS> ThreeWireInterface<BUS>
where
    BUS: ThreeWireBus,
{
    /// Wrap a bus.
    pub fn new(bus: BUS) -> Self {
        ThreeWireInterface { bus }
    }

    /// Unwrap the bus.
    pub fn release(self) -> BUS {
        self.bus
    }

    /// Send one command byte.
    pub fn cmd(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.bus.assert_mode(Mode::Command)?;
        self.bus.transfer_byte(cmd)
    }

    /// Send a command byte sequence. Arguments travel as command bytes on
    /// this controller; there is no command/argument distinction on the
    /// wire beyond ordering.
    pub fn cmds(&mut self, cmds: &[u8]) -> Result<(), DisplayError> {
        for &cmd in cmds {
            self.cmd(cmd)?;
        }
        Ok(())
    }

    /// Send one display RAM data byte.
    pub fn data(&mut self, data: u8) -> Result<(), DisplayError> {
        self.bus.assert_mode(Mode::Data)?;
        self.bus.transfer_byte(data)
    }

    /// Send the same data byte `repetitions` times.
    pub fn data_x_times(&mut self, data: u8, repetitions: u32) -> Result<(), DisplayError> {
        for _ in 0..repetitions {
            self.data(data)?;
        }
        Ok(())
    }
}

//! TM1640 driver
//!
//! Owns the bus, the 16-byte display mirror and the on/off + brightness
//! state. Every method that touches the device runs its transactions to
//! completion before returning.
//!
//! # Transactions
//!
//! | Operation | Frames on the bus |
//! |-----------|-------------------|
//! | `write_grid` | `0x44` / `0xC0+addr, data` |
//! | `write_grid_array`, `flush`, `clear` | `0x40` / `0xC0+start, data...` |
//! | `set_brightness`, `set_display_on` | `0x80 \| on \| level` |
//!
//! The driver is not reentrant. Callers sharing it between an interrupt
//! handler and a main loop must wrap it in their own mutex.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use tm1640_core::patterns::{self, ALL_ON, BLANK};
use tm1640_core::text::{render_decimal, render_hex, render_text};
use tm1640_core::{Brightness, DisplayBuffer, DisplayPolarity, DisplayState, DriverConfig};
use tm1640_hal::{PinBackend, SignalBackend};
use tm1640_protocol::{Addressing, Bus, Command, GRID_COUNT};

use crate::error::Tm1640Error;

/// TM1640 display driver
pub struct Tm1640<S, D> {
    bus: Bus<S, D>,
    buffer: DisplayBuffer,
    state: DisplayState,
    config: DriverConfig,
}

impl<CLK: OutputPin, DIO: OutputPin, D: DelayNs> Tm1640<PinBackend<CLK, DIO>, D> {
    /// Create a driver over two `embedded-hal` output pins
    ///
    /// The pins are driven with `config.line_polarity`.
    pub fn with_pins(clk: CLK, dio: DIO, delay: D, config: DriverConfig) -> Self {
        let backend = PinBackend::new(clk, dio, config.line_polarity);
        Self::new(backend, delay, config)
    }
}

impl<S: SignalBackend, D: DelayNs> Tm1640<S, D> {
    /// Create a new driver
    ///
    /// The buffer starts zeroed and the display off. Nothing is sent until
    /// [`Tm1640::init`].
    pub fn new(backend: S, delay: D, config: DriverConfig) -> Self {
        Self {
            bus: Bus::new(backend, delay, config.timing),
            buffer: DisplayBuffer::new(),
            state: DisplayState {
                enabled: false,
                brightness: config.brightness,
            },
            config,
        }
    }

    /// Initialize the device
    ///
    /// Clears the display memory and turns the display on at the configured
    /// brightness (14/16 by default).
    pub fn init(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("TM1640 init: {}", self.config);

        self.clear();
        self.state = DisplayState {
            enabled: true,
            brightness: self.config.brightness,
        };
        self.update_display_control();
    }

    /// Turn the display off and release the signal lines
    ///
    /// Consumes the driver; the buffer and state go with it. Returns the
    /// backend and delay source.
    pub fn deinit(mut self) -> (S, D) {
        #[cfg(feature = "defmt")]
        defmt::debug!("TM1640 deinit");

        self.state.enabled = false;
        self.update_display_control();
        self.bus.into_parts()
    }

    /// Set brightness and send it to the device
    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.state.brightness = brightness;
        self.update_display_control();
    }

    /// Turn the display on or off
    pub fn set_display_on(&mut self, on: bool) {
        self.state.enabled = on;
        self.update_display_control();
    }

    /// Blank every grid, in the mirror and on the device
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.write_span(0, GRID_COUNT);
    }

    /// Write one grid
    ///
    /// Ignored when `address` is 16 or above.
    pub fn write_grid(&mut self, address: u8, data: u8) {
        if !DisplayBuffer::contains(address) {
            return;
        }

        self.buffer.set(address, data);
        self.bus.send_command(Command::Data {
            addressing: Addressing::Fixed,
        });
        self.bus.write_at(address, &[data]);
    }

    /// Write consecutive grids starting at `start`
    ///
    /// Ignored when `start` is 16 or above. Bytes that would land past grid
    /// 15 are dropped.
    pub fn write_grid_array(&mut self, start: u8, data: &[u8]) {
        if !DisplayBuffer::contains(start) {
            return;
        }

        let len = self.buffer.write_slice(start, data);
        self.write_span(start, len);
    }

    /// Buffered value of a grid (0 when out of range)
    pub fn get_buffer(&self, address: u8) -> u8 {
        self.buffer.get(address)
    }

    /// Stage a grid value without sending it
    pub fn set_buffer(&mut self, address: u8, data: u8) {
        self.buffer.set(address, data);
    }

    /// Stage a change to the `mask` bits of a grid without sending it
    pub fn set_buffer_bit(&mut self, address: u8, mask: u8, set: bool) {
        self.buffer.set_bits(address, mask, set);
    }

    /// Send the whole buffer to the device in one transaction
    pub fn flush(&mut self) {
        self.write_span(0, GRID_COUNT);
    }

    /// Light every segment of every grid
    pub fn test(&mut self) {
        self.buffer.fill(ALL_ON);
        self.flush();
    }

    /// Segment pattern for a digit (see [`patterns::digit_pattern`])
    pub const fn digit_pattern(digit: u8) -> u8 {
        patterns::digit_pattern(digit)
    }

    /// Segment pattern for a hex nibble (see [`patterns::hex_pattern`])
    pub const fn hex_pattern(nibble: u8) -> u8 {
        patterns::hex_pattern(nibble)
    }

    /// Segment pattern for a character (see [`patterns::char_pattern`])
    pub const fn char_pattern(ch: char) -> u8 {
        patterns::char_pattern(ch)
    }

    // ========================================================================
    // Text helpers
    // ========================================================================

    /// Current buffer as digit-position patterns for the configured wiring
    pub fn positions(&self) -> [u8; GRID_COUNT] {
        self.config.polarity.to_positions(self.buffer.as_bytes())
    }

    /// Show text starting at digit position `start`
    ///
    /// Positions past the end of the text keep their contents. Returns the
    /// number of positions written (0 when `start` is out of range).
    pub fn display_text(&mut self, start: u8, text: &str) -> usize {
        if !DisplayBuffer::contains(start) {
            return 0;
        }

        let mut positions = self.positions();
        let written = render_text(&mut positions[start as usize..], text);
        self.commit_positions(start, written, &positions);
        written
    }

    /// Show a signed integer right-aligned in `width` positions from `start`
    pub fn display_decimal(&mut self, start: u8, width: usize, value: i32) {
        let width = DisplayBuffer::clamped_len(start, width);
        if width == 0 {
            return;
        }

        let mut positions = self.positions();
        let first = start as usize;
        render_decimal(&mut positions[first..first + width], value);
        self.commit_positions(start, width, &positions);
    }

    /// Show a hex value right-aligned in `width` positions from `start`
    pub fn display_hex(&mut self, start: u8, width: usize, value: u32) {
        let width = DisplayBuffer::clamped_len(start, width);
        if width == 0 {
            return;
        }

        let mut positions = self.positions();
        let first = start as usize;
        render_hex(&mut positions[first..first + width], value);
        self.commit_positions(start, width, &positions);
    }

    /// Blank `width` digit positions from `start`
    pub fn blank(&mut self, start: u8, width: usize) {
        let width = DisplayBuffer::clamped_len(start, width);
        if width == 0 {
            return;
        }

        let mut positions = self.positions();
        let first = start as usize;
        positions[first..first + width].fill(BLANK);
        self.commit_positions(start, width, &positions);
    }

    // ========================================================================
    // Strict mode
    // ========================================================================

    /// Like [`Tm1640::write_grid`], but rejects out-of-range addresses
    pub fn try_write_grid(&mut self, address: u8, data: u8) -> Result<(), Tm1640Error> {
        check_address(address)?;
        self.write_grid(address, data);
        Ok(())
    }

    /// Like [`Tm1640::write_grid_array`], but rejects writes that would be
    /// truncated instead of clamping them
    pub fn try_write_grid_array(&mut self, start: u8, data: &[u8]) -> Result<(), Tm1640Error> {
        check_address(start)?;

        let available = GRID_COUNT - start as usize;
        if data.len() > available {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "TM1640 write of {} bytes at grid {} rejected",
                data.len(),
                start
            );
            return Err(Tm1640Error::Truncated {
                start,
                requested: data.len(),
                available,
            });
        }

        self.write_grid_array(start, data);
        Ok(())
    }

    /// Like [`Tm1640::get_buffer`], but rejects out-of-range addresses
    pub fn try_get_buffer(&self, address: u8) -> Result<u8, Tm1640Error> {
        check_address(address)?;
        Ok(self.buffer.get(address))
    }

    /// Like [`Tm1640::set_buffer`], but rejects out-of-range addresses
    pub fn try_set_buffer(&mut self, address: u8, data: u8) -> Result<(), Tm1640Error> {
        check_address(address)?;
        self.buffer.set(address, data);
        Ok(())
    }

    /// Like [`Tm1640::set_buffer_bit`], but rejects out-of-range addresses
    pub fn try_set_buffer_bit(
        &mut self,
        address: u8,
        mask: u8,
        set: bool,
    ) -> Result<(), Tm1640Error> {
        check_address(address)?;
        self.buffer.set_bits(address, mask, set);
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current brightness
    pub fn brightness(&self) -> Brightness {
        self.state.brightness
    }

    /// Whether the display is on
    pub fn is_display_on(&self) -> bool {
        self.state.enabled
    }

    /// On/off and brightness as last sent
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// The whole display mirror
    pub fn buffer(&self) -> &[u8; GRID_COUNT] {
        self.buffer.as_bytes()
    }

    /// Driver configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// The underlying bus
    pub fn bus(&self) -> &Bus<S, D> {
        &self.bus
    }

    fn update_display_control(&mut self) {
        self.bus.send_command(self.state.command());
    }

    /// Send grids `[start, start + len)` of the mirror in auto-increment mode
    fn write_span(&mut self, start: u8, len: usize) {
        self.bus.send_command(Command::Data {
            addressing: Addressing::AutoIncrement,
        });
        self.bus.write_at(start, self.buffer.span(start, len));
    }

    /// Store rendered positions and send what changed
    fn commit_positions(&mut self, start: u8, len: usize, positions: &[u8; GRID_COUNT]) {
        if len == 0 {
            return;
        }

        let grids = self.config.polarity.to_grids(positions);
        match self.config.polarity {
            DisplayPolarity::CommonCathode => {
                let first = start as usize;
                self.write_grid_array(start, &grids[first..first + len]);
            }
            // A single digit touches up to 8 grids; send them all
            DisplayPolarity::CommonAnode => {
                self.buffer = DisplayBuffer::from(grids);
                self.flush();
            }
        }
    }
}

fn check_address(address: u8) -> Result<(), Tm1640Error> {
    if DisplayBuffer::contains(address) {
        Ok(())
    } else {
        #[cfg(feature = "defmt")]
        defmt::warn!("TM1640 grid address {} out of range", address);
        Err(Tm1640Error::AddressOutOfRange { address })
    }
}

//! HD44780 character LCD behind a PCF8574 I²C backpack.
//!
//! ## Wire format
//!
//! The expander's eight outputs map onto the LCD bus as
//!
//! ```text
//!  bit  7  6  5  4 | 3         2   1   0
//!       D7 D6 D5 D4 | backlight EN  RW  RS
//! ```
//!
//! so every byte for the controller goes out as two nibbles, each latched
//! by an EN high→low pair: four expander writes in one I²C transfer.
//! The backlight bit is always set; RW is always 0 (write-only).

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, warn};

use crate::app::ports::DisplayPort;
use crate::config::DisplayConfig;
use crate::error::{Error, Result};

const BACKLIGHT: u8 = 0x08;
const ENABLE: u8 = 0x04;
const RS_DATA: u8 = 0x01;

const CMD_CLEAR: u8 = 0x01;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of column 0 on each row.
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Power-on sequence: three 8-bit wake-ups, switch to 4-bit, 2 lines 5×8,
/// display off, clear, entry mode increment, display on with no cursor.
/// Each command is followed by the delay (ms) it needs to complete.
const INIT_SEQUENCE: [(u8, u32); 9] = [
    (0x30, 5),
    (0x30, 1),
    (0x30, 10),
    (0x20, 10),
    (0x28, 1),
    (0x08, 1),
    (CMD_CLEAR, 2),
    (0x06, 1),
    (0x0C, 0),
];

pub struct LcdI2c<I, D> {
    i2c: I,
    delay: D,
    addr: u8,
    cols: u8,
    rows: u8,
}

impl<I, D> LcdI2c<I, D>
where
    I: I2c,
    D: DelayNs,
{
    /// Wrap the bus.  Sends nothing until [`init`](Self::init).
    pub fn new(i2c: I, delay: D, config: &DisplayConfig) -> Self {
        Self {
            i2c,
            delay,
            addr: config.i2c_addr,
            cols: config.cols,
            rows: config.rows,
        }
    }

    /// Run the HD44780 power-on sequence.  Leaves the screen blank.
    pub fn init(&mut self) -> Result<()> {
        self.delay.delay_ms(50);
        for (cmd, settle_ms) in INIT_SEQUENCE {
            self.send_cmd(cmd)?;
            if settle_ms > 0 {
                self.delay.delay_ms(settle_ms);
            }
        }
        debug!(
            "lcd: {}x{} display ready at 0x{:02X}",
            self.cols, self.rows, self.addr
        );
        Ok(())
    }

    pub fn send_cmd(&mut self, cmd: u8) -> Result<()> {
        self.write_byte(cmd, 0)
    }

    pub fn send_data(&mut self, data: u8) -> Result<()> {
        self.write_byte(data, RS_DATA)
    }

    fn write_byte(&mut self, byte: u8, mode: u8) -> Result<()> {
        let high = (byte & 0xF0) | BACKLIGHT | mode;
        let low = ((byte << 4) & 0xF0) | BACKLIGHT | mode;
        let frame = [high | ENABLE, high, low | ENABLE, low];
        self.i2c.write(self.addr, &frame).map_err(Error::i2c)
    }

    fn try_clear(&mut self) -> Result<()> {
        self.send_cmd(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn try_set_cursor(&mut self, col: u8, row: u8) -> Result<()> {
        let row = usize::from(row.min(self.rows.saturating_sub(1))).min(ROW_OFFSETS.len() - 1);
        let col = col.min(self.cols.saturating_sub(1));
        self.send_cmd(CMD_SET_DDRAM | ROW_OFFSETS[row].wrapping_add(col))
    }

    fn try_print(&mut self, text: &str) -> Result<()> {
        for c in text.chars() {
            // The character ROM is ASCII-compatible below 0x80 only.
            let byte = if c.is_ascii() { c as u8 } else { b'?' };
            self.send_data(byte)?;
        }
        Ok(())
    }
}

impl<I, D> DisplayPort for LcdI2c<I, D>
where
    I: I2c,
    D: DelayNs,
{
    fn clear(&mut self) {
        if let Err(e) = self.try_clear() {
            warn!("lcd: clear failed: {}", e);
        }
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        if let Err(e) = self.try_set_cursor(col, row) {
            warn!("lcd: set_cursor({}, {}) failed: {}", col, row, e);
        }
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = self.try_print(text) {
            warn!("lcd: print failed: {}", e);
        }
    }

    fn columns(&self) -> u8 {
        self.cols
    }
}

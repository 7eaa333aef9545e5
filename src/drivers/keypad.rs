//! 4×4 matrix keypad scanner.
//!
//! ## Hardware
//!
//! Four row lines driven as push-pull outputs, four column lines read as
//! inputs with pull-downs.  A pressed key shorts its row to its column,
//! so a column reads HIGH only while its row is strobed HIGH.
//!
//! ## Scan cycle
//!
//! ```text
//!  for row in 0..4:
//!      all rows LOW, this row HIGH
//!      wait settle_us
//!      for col in 0..4:
//!          col HIGH? → wait for release → return keymap[row][col]
//!  return None
//! ```
//!
//! Simultaneous presses resolve to the lowest `(row, col)` pair.  The
//! release wait blocks the caller for as long as the key is held: one
//! physical press yields exactly one [`Key`], and contact bounce on
//! release is absorbed by the settle delay between polls.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::commands::Key;
use crate::config::{KEYPAD_COLS, KEYPAD_ROWS, KeypadConfig, Keymap};
use crate::error::{Error, Result};

pub struct KeypadScanner<R, C, D> {
    rows: [R; KEYPAD_ROWS],
    cols: [C; KEYPAD_COLS],
    keymap: Keymap,
    settle_us: u32,
    delay: D,
}

impl<R, C, D> KeypadScanner<R, C, D>
where
    R: OutputPin,
    C: InputPin,
    D: DelayNs,
{
    /// Wrap already-configured pins.  Touches no hardware.
    pub fn new(
        rows: [R; KEYPAD_ROWS],
        cols: [C; KEYPAD_COLS],
        config: &KeypadConfig,
        delay: D,
    ) -> Self {
        Self {
            rows,
            cols,
            keymap: config.keymap,
            settle_us: config.settle_us,
            delay,
        }
    }

    /// One full pass over the matrix.  Returns `Ok(None)` when no key is down.
    pub fn scan(&mut self) -> Result<Option<Key>> {
        for row in 0..KEYPAD_ROWS {
            self.release_rows()?;
            self.rows[row].set_high().map_err(Error::gpio)?;
            self.delay.delay_us(self.settle_us);

            for col in 0..KEYPAD_COLS {
                if self.cols[col].is_high().map_err(Error::gpio)? {
                    self.wait_release(col)?;
                    self.release_rows()?;
                    return Ok(self.lookup(row, col));
                }
            }
        }

        self.release_rows()?;
        Ok(None)
    }

    /// Block until `col` reads LOW again.
    fn wait_release(&mut self, col: usize) -> Result<()> {
        while self.cols[col].is_high().map_err(Error::gpio)? {
            self.delay.delay_us(self.settle_us);
        }
        Ok(())
    }

    fn release_rows(&mut self) -> Result<()> {
        for row in &mut self.rows {
            row.set_low().map_err(Error::gpio)?;
        }
        Ok(())
    }

    fn lookup(&self, row: usize, col: usize) -> Option<Key> {
        let c = self.keymap[row][col];
        let key = Key::from_char(c);
        if key.is_none() {
            warn!("keypad: keymap[{}][{}] = {:?} is not a key", row, col, c);
        }
        key
    }
}

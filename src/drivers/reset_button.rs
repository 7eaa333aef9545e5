//! Debounced hardware reset button.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up: LOW = pressed.
//!
//! ## Protocol
//!
//! The main loop polls [`ResetButton::pressed`] once per iteration.  A
//! LOW level is confirmed after the debounce delay and reported as one
//! press; the loop then runs the reset transition and calls
//! [`ResetButton::wait_release`], which blocks until the button is let
//! go and debounces the release.  Holding the button stalls the loop.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::error::{Error, Result};

pub struct ResetButton<P, D> {
    pin: P,
    delay: D,
    debounce_ms: u32,
}

impl<P, D> ResetButton<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    pub fn new(pin: P, delay: D, debounce_ms: u32) -> Self {
        Self {
            pin,
            delay,
            debounce_ms,
        }
    }

    /// `true` once per press: the line was LOW and still is after the
    /// debounce delay.
    pub fn pressed(&mut self) -> Result<bool> {
        if !self.pin.is_low().map_err(Error::gpio)? {
            return Ok(false);
        }
        self.delay.delay_ms(self.debounce_ms);
        self.pin.is_low().map_err(Error::gpio)
    }

    /// Block until the button is released, then debounce.
    pub fn wait_release(&mut self) -> Result<()> {
        while self.pin.is_low().map_err(Error::gpio)? {
            self.delay.delay_ms(1);
        }
        self.delay.delay_ms(self.debounce_ms);
        Ok(())
    }
}

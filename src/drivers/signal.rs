//! Status LED and piezo buzzer driver.
//!
//! Two plain GPIO outputs, both active HIGH.  The timed helpers
//! (`beep`, `blink`) block for the whole sequence; they pace what the
//! user sees and hears, and there is no other work to interleave.
//!
//! ## Dual-target design
//!
//! Generic over embedded-hal pins: on ESP-IDF they are `PinDriver`s, on
//! host/test they are mocks.  The commanded state is tracked in-memory.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::SignalPort;

pub struct SignalDriver<L, B, D> {
    led: L,
    buzzer: B,
    delay: D,
    /// Silence between consecutive beeps.
    beep_gap_ms: u32,
    led_on: bool,
    buzzer_on: bool,
}

impl<L, B, D> SignalDriver<L, B, D>
where
    L: OutputPin,
    B: OutputPin,
    D: DelayNs,
{
    pub fn new(led: L, buzzer: B, delay: D, beep_gap_ms: u32) -> Self {
        Self {
            led,
            buzzer,
            delay,
            beep_gap_ms,
            led_on: false,
            buzzer_on: false,
        }
    }

    pub fn is_led_on(&self) -> bool {
        self.led_on
    }

    pub fn is_buzzer_on(&self) -> bool {
        self.buzzer_on
    }

    fn set_led_hw(&mut self, on: bool) {
        if let Err(e) = self.led.set_state(on.into()) {
            warn!("signal: LED write failed: {:?}", e);
        }
        self.led_on = on;
    }

    fn set_buzzer_hw(&mut self, on: bool) {
        if let Err(e) = self.buzzer.set_state(on.into()) {
            warn!("signal: buzzer write failed: {:?}", e);
        }
        self.buzzer_on = on;
    }
}

impl<L, B, D> SignalPort for SignalDriver<L, B, D>
where
    L: OutputPin,
    B: OutputPin,
    D: DelayNs,
{
    fn led(&mut self, on: bool) {
        self.set_led_hw(on);
    }

    fn beep(&mut self, count: u8, duration_ms: u32) {
        for _ in 0..count {
            self.set_buzzer_hw(true);
            self.delay.delay_ms(duration_ms);
            self.set_buzzer_hw(false);
            self.delay.delay_ms(self.beep_gap_ms);
        }
    }

    fn blink(&mut self, count: u8, duration_ms: u32) {
        for _ in 0..count {
            self.set_led_hw(true);
            self.delay.delay_ms(duration_ms);
            self.set_led_hw(false);
            self.delay.delay_ms(duration_ms);
        }
    }

    fn quiet(&mut self) {
        self.set_led_hw(false);
        self.set_buzzer_hw(false);
    }
}

//! Feedback adapter — renders controller outcomes on the LCD, LED and
//! buzzer.
//!
//! Owns a [`DisplayPort`] and a [`SignalPort`] and turns each
//! [`Outcome`] into the screen text and signal pattern the user sees.
//! Confirmation screens that must stay visible (password changed) are
//! held here with the adapter's own delay, so the controller never
//! blocks.

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::app::events::Outcome;
use crate::app::ports::{DisplayPort, FeedbackSink, SignalPort};
use crate::config::FeedbackConfig;

pub const PROMPT_ENTER: &str = "Enter password:";
pub const PROMPT_NEW: &str = "New password:";
pub const MSG_GRANTED: &str = "Access granted";
pub const MSG_DENIED: &str = "Wrong password!";
pub const MSG_LOCKED: &str = "Locked!";
pub const MSG_RESET_HINT: &str = "Press * or reset";
pub const MSG_CHANGED: &str = "Password changed";

/// Concrete [`FeedbackSink`] over the display and signal drivers.
pub struct FeedbackDriver<Disp, Sig, D> {
    display: Disp,
    signal: Sig,
    delay: D,
    config: FeedbackConfig,
}

impl<Disp, Sig, D> FeedbackDriver<Disp, Sig, D>
where
    Disp: DisplayPort,
    Sig: SignalPort,
    D: DelayNs,
{
    pub fn new(display: Disp, signal: Sig, delay: D, config: FeedbackConfig) -> Self {
        Self {
            display,
            signal,
            delay,
            config,
        }
    }

    /// Keep the LED lit while the last attempt stands as correct.
    pub fn hold_success_indicator(&mut self) {
        self.signal.led(true);
    }

    pub fn display(&self) -> &Disp {
        &self.display
    }

    pub fn signal(&self) -> &Sig {
        &self.signal
    }

    fn show_idle_prompt(&mut self) {
        self.display.set_cursor(0, 0);
        self.print_row(PROMPT_ENTER);
        self.display.set_cursor(0, 1);
        self.print_row("");
    }

    fn show_message(&mut self, text: &str) {
        self.display.clear();
        self.display.set_cursor(0, 0);
        self.display.print(text);
    }

    /// Print `text` and blank the rest of the row.
    fn print_row(&mut self, text: &str) {
        let width = usize::from(self.display.columns());
        let mut row: heapless::String<40> = heapless::String::new();
        for c in text.chars().chain(core::iter::repeat(' ')).take(width.min(40)) {
            // Capacity equals the take() bound.
            let _ = row.push(c);
        }
        self.display.print(&row);
    }
}

impl<Disp, Sig, D> FeedbackSink for FeedbackDriver<Disp, Sig, D>
where
    Disp: DisplayPort,
    Sig: SignalPort,
    D: DelayNs,
{
    fn emit(&mut self, outcome: &Outcome) {
        // Entry echoes carry password characters; keep them out of the log.
        if !matches!(outcome, Outcome::Entry(_)) {
            debug!("feedback: {:?}", outcome);
        }
        match outcome {
            Outcome::Reset => {
                self.signal.quiet();
                self.display.clear();
                self.show_idle_prompt();
            }
            Outcome::IdlePrompt => {
                self.display.clear();
                self.show_idle_prompt();
            }
            Outcome::ChangePrompt => {
                self.show_message(PROMPT_NEW);
                self.display.set_cursor(0, 1);
            }
            Outcome::Entry(buffer) => {
                self.display.set_cursor(0, 1);
                self.print_row(buffer);
            }
            Outcome::Granted => {
                self.show_message(MSG_GRANTED);
                self.signal.led(true);
                self.signal.beep(1, self.config.success_beep_ms);
            }
            Outcome::Denied { .. } => {
                self.show_message(MSG_DENIED);
                self.signal.blink(2, self.config.failure_blink_ms);
                self.signal.beep(2, self.config.failure_beep_ms);
                self.signal.led(false);
            }
            Outcome::LockedOut => {
                self.show_message(MSG_LOCKED);
                self.display.set_cursor(0, 1);
                self.display.print(MSG_RESET_HINT);
            }
            Outcome::PasswordChanged => {
                self.show_message(MSG_CHANGED);
                self.signal.beep(1, self.config.success_beep_ms);
                self.delay.delay_ms(self.config.change_hold_ms);
            }
        }
    }
}

//! Port traits — the hexagonal boundary between the lock logic and the
//! peripherals.
//!
//! ```text
//!   LockController ──▶ FeedbackSink ──▶ FeedbackDriver ──▶ DisplayPort
//!                                                     └──▶ SignalPort
//! ```
//!
//! Output ports are infallible, like the actuators they front: a driver
//! that hits a bus or pin error logs it and carries on, so a flaky
//! display never blocks the lock.

use super::events::Outcome;

// ───────────────────────────────────────────────────────────────
// Display port (domain → character LCD)
// ───────────────────────────────────────────────────────────────

/// Text-only character display, at least 16 columns × 2 rows.
pub trait DisplayPort {
    /// Blank the whole screen and home the cursor.
    fn clear(&mut self);

    /// Move the cursor to `col` on `row` (both zero-based).
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Write `text` at the cursor.
    fn print(&mut self, text: &str);

    /// Visible characters per row.
    fn columns(&self) -> u8 {
        16
    }
}

// ───────────────────────────────────────────────────────────────
// Signal port (domain → LED + buzzer)
// ───────────────────────────────────────────────────────────────

/// Binary LED and buzzer outputs with timed helpers.
///
/// `beep` and `blink` block for the whole sequence.
pub trait SignalPort {
    /// Drive the status LED.
    fn led(&mut self, on: bool);

    /// Sound the buzzer `count` times for `duration_ms` each.
    fn beep(&mut self, count: u8, duration_ms: u32);

    /// Flash the LED `count` times, `duration_ms` on then `duration_ms` off.
    /// Leaves the LED off.
    fn blink(&mut self, count: u8, duration_ms: u32);

    /// LED and buzzer both off.
    fn quiet(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Feedback sink (domain → presentation)
// ───────────────────────────────────────────────────────────────

/// Receives every [`Outcome`] the controller produces, in order.
pub trait FeedbackSink {
    fn emit(&mut self, outcome: &Outcome);
}

/// Fan one outcome stream out to two sinks, first then second.
impl<A, B> FeedbackSink for (A, B)
where
    A: FeedbackSink,
    B: FeedbackSink,
{
    fn emit(&mut self, outcome: &Outcome) {
        self.0.emit(outcome);
        self.1.emit(outcome);
    }
}

//! Log-based feedback sink adapter.
//!
//! Implements [`FeedbackSink`] by writing one structured line per
//! controller outcome to the ESP-IDF logger (UART / USB-CDC in
//! production).  Entry echoes only report the buffer length: the
//! characters themselves never reach the console.

use log::{info, warn};

use crate::app::events::Outcome;
use crate::app::ports::FeedbackSink;
use crate::config::PASSWORD_LEN;

/// Adapter that logs every [`Outcome`] to the serial console.
#[derive(Debug, Default)]
pub struct LogFeedbackSink;

impl LogFeedbackSink {
    pub fn new() -> Self {
        Self
    }
}

impl FeedbackSink for LogFeedbackSink {
    fn emit(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Reset => info!("LOCK | session reset"),
            Outcome::IdlePrompt => info!("LOCK | awaiting password"),
            Outcome::ChangePrompt => info!("LOCK | awaiting new password"),
            Outcome::Entry(buffer) => info!("LOCK | entry {}/{}", buffer.len(), PASSWORD_LEN),
            Outcome::Granted => info!("LOCK | access granted"),
            Outcome::Denied { failures, limit } => {
                warn!("LOCK | access denied ({}/{})", failures, limit)
            }
            Outcome::LockedOut => warn!("LOCK | locked out, reset required"),
            Outcome::PasswordChanged => info!("LOCK | password changed"),
        }
    }
}

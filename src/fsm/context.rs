//! Lock state and the per-step context threaded through every handler.
//!
//! [`LockState`] is the controller's entire state.  The control loop owns
//! the single instance and lends it to each step; nothing else holds it.
//! [`StepContext`] bundles that borrow with the configuration and the
//! queue of outcomes the handlers produce, much like a blackboard.

use log::warn;
use subtle::ConstantTimeEq;

use crate::app::events::{Outcome, Outcomes};
use crate::config::{LockConfig, PASSWORD_LEN, Secret};

use super::StateId;

/// Entry sub-mode while not locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Entries are checked against the stored password.
    #[default]
    Idle,
    /// The next complete entry becomes the stored password.
    ChangePassword,
}

/// The controller's full state.
///
/// Invariants: `input_buffer` never exceeds [`PASSWORD_LEN`];
/// `mode == ChangePassword` and `locked` are never both set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockState {
    /// Exactly [`PASSWORD_LEN`] entry characters.
    pub stored_password: Secret,
    /// The in-progress entry.
    pub input_buffer: Secret,
    pub mode: Mode,
    /// Consecutive wrong attempts since the last success or reset.
    pub fail_count: u8,
    /// Set once `fail_count` reaches the limit; cleared only by a reset.
    pub locked: bool,
    /// True right after a match; keeps the success LED asserted.
    pub last_attempt_correct: bool,
}

impl LockState {
    /// Fresh power-up state with `password` stored.
    pub fn new(password: Secret) -> Self {
        Self {
            stored_password: password,
            input_buffer: Secret::new(),
            mode: Mode::Idle,
            fail_count: 0,
            locked: false,
            last_attempt_correct: false,
        }
    }

    /// Which row of the state table handles the next key.
    pub fn state_id(&self) -> StateId {
        if self.locked {
            StateId::Locked
        } else {
            match self.mode {
                Mode::Idle => StateId::Idle,
                Mode::ChangePassword => StateId::ChangePassword,
            }
        }
    }

    pub fn entry_complete(&self) -> bool {
        self.input_buffer.len() >= PASSWORD_LEN
    }

    /// Compare the entry with the stored password in constant time.
    pub fn entry_matches(&self) -> bool {
        self.input_buffer
            .as_bytes()
            .ct_eq(self.stored_password.as_bytes())
            .into()
    }

    /// Wipe the session.  The stored password survives.
    pub fn clear_session(&mut self) {
        self.input_buffer.clear();
        self.mode = Mode::Idle;
        self.fail_count = 0;
        self.locked = false;
        self.last_attempt_correct = false;
    }
}

/// Everything a state handler may touch during one step.
pub struct StepContext<'a> {
    pub lock: &'a mut LockState,
    pub config: &'a LockConfig,
    outcomes: Outcomes,
}

impl<'a> StepContext<'a> {
    pub fn new(lock: &'a mut LockState, config: &'a LockConfig) -> Self {
        Self {
            lock,
            config,
            outcomes: Outcomes::new(),
        }
    }

    /// Queue an outcome for the feedback sink.
    pub fn emit(&mut self, outcome: Outcome) {
        if let Err(dropped) = self.outcomes.push(outcome) {
            debug_assert!(false, "outcome queue overflow: {dropped:?}");
            warn!("outcome queue full, dropped {:?}", dropped);
        }
    }

    /// Outcomes queued so far, in emission order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Outcomes {
        self.outcomes
    }
}

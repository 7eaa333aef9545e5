//! Lock controller — the hexagonal core.
//!
//! [`LockController`] owns the configuration and the state table.  It
//! does **not** own the [`LockState`]: the control loop holds the single
//! instance and lends it to every step, so there is no hidden global.
//!
//! ```text
//!  KeypadScanner ─┐
//!                 ├─▶ LockCommand ─▶ ┌────────────────┐ ─▶ Outcome ─▶ FeedbackSink
//!  ResetButton ───┘                  │ LockController │
//!                                    │  FSM · policy  │
//!                        &mut LockState ◀──────────────┘
//! ```

use log::info;

use crate::config::LockConfig;
use crate::error::Result;
use crate::fsm::context::{LockState, StepContext};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};

use super::commands::{Key, LockCommand};
use super::events::{Outcome, Outcomes};
use super::ports::FeedbackSink;

/// The lock controller orchestrates the password policy.
pub struct LockController {
    fsm: Fsm,
    config: LockConfig,
}

impl LockController {
    /// Validate `config` and build the state table.
    pub fn new(config: LockConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fsm: Fsm::new(build_state_table()),
            config,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Power-up state: default password stored, every flag cleared.
    pub fn initial_state(&self) -> LockState {
        LockState::new(self.config.default_password.clone())
    }

    /// Put the peripherals into the idle presentation (signals quiet,
    /// idle prompt).  Call once after [`initial_state`](Self::initial_state).
    pub fn start(&self, lock: &LockState, sink: &mut impl FeedbackSink) {
        sink.emit(&Outcome::Reset);
        info!("LockController started in {}", self.fsm.name(lock.state_id()));
    }

    // ── Per-step orchestration ────────────────────────────────

    /// Run one step for `cmd` and hand every outcome to `sink`, in order.
    pub fn handle(&self, cmd: LockCommand, lock: &mut LockState, sink: &mut impl FeedbackSink) {
        let outcomes = self.step(cmd, lock);
        for outcome in &outcomes {
            sink.emit(outcome);
        }
    }

    /// Shorthand for `handle(LockCommand::Key(key), ..)`.
    pub fn handle_key(&self, key: Key, lock: &mut LockState, sink: &mut impl FeedbackSink) {
        self.handle(LockCommand::Key(key), lock, sink);
    }

    /// Shorthand for `handle(LockCommand::Reset, ..)`.
    pub fn reset(&self, lock: &mut LockState, sink: &mut impl FeedbackSink) {
        self.handle(LockCommand::Reset, lock, sink);
    }

    /// Run one step and return its outcomes without rendering them.
    pub fn step(&self, cmd: LockCommand, lock: &mut LockState) -> Outcomes {
        let mut ctx = StepContext::new(lock, &self.config);
        match cmd {
            LockCommand::Key(key) => self.fsm.handle_key(&mut ctx, key),
            LockCommand::Reset => self.fsm.reset(&mut ctx),
        }
        ctx.into_outcomes()
    }

    // ── Queries ───────────────────────────────────────────────

    /// Which state `lock` is in.
    pub fn state(&self, lock: &LockState) -> StateId {
        lock.state_id()
    }

    pub fn config(&self) -> &LockConfig {
        &self.config
    }
}

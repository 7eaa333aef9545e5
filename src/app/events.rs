//! Outbound controller outcomes.
//!
//! State handlers queue these during a step; the
//! [`LockController`](super::controller::LockController) hands them to a
//! [`FeedbackSink`](super::ports::FeedbackSink) in order.  The sink only
//! ever sees outcomes — never the [`LockState`](crate::fsm::context::LockState).

use crate::config::Secret;

/// What the user should be told after a controller step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Session wiped: signals quiet, idle prompt on a clean screen.
    Reset,
    /// Idle prompt again after a wrong attempt (no lockout yet).
    IdlePrompt,
    /// Change-password mode entered: ask for the new password.
    ChangePrompt,
    /// The entry buffer changed; echo it on the second row.
    Entry(Secret),
    /// Password matched.
    Granted,
    /// Password did not match.
    Denied { failures: u8, limit: u8 },
    /// Failure limit reached; only a reset is accepted from now on.
    LockedOut,
    /// A new password was stored.
    PasswordChanged,
}

/// Upper bound on outcomes produced by a single step
/// (e.g. `Entry`, `Denied`, `LockedOut`).
pub const MAX_OUTCOMES_PER_STEP: usize = 4;

/// Fixed-capacity outcome queue for one step.
pub type Outcomes = heapless::Vec<Outcome, MAX_OUTCOMES_PER_STEP>;

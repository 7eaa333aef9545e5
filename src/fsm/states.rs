//! Concrete state handler functions and table builder.
//!
//! Each state is three plain `fn` pointers — no closures, no dynamic
//! dispatch, no heap.
//!
//! ```text
//!  IDLE ──[#]──────────────────▶ CHANGE_PASSWORD
//!   ▲ │                                 │
//!   │ └─[limit-th wrong entry]─▶ LOCKED │
//!   │                                   │
//!   └────────[4th character: store]─────┘
//!
//!  Any state ──[* or reset button]──▶ IDLE (session wiped)
//! ```

use log::{debug, info, warn};

use crate::app::commands::Key;
use crate::app::events::Outcome;

use super::context::{Mode, StepContext};
use super::{StateDescriptor, StateId};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — Idle
        StateDescriptor {
            id: StateId::Idle,
            name: "Idle",
            on_enter: Some(reset_session),
            on_exit: None,
            on_key: idle_key,
        },
        // Index 1 — ChangePassword
        StateDescriptor {
            id: StateId::ChangePassword,
            name: "ChangePassword",
            on_enter: Some(change_enter),
            on_exit: None,
            on_key: change_key,
        },
        // Index 2 — Locked
        StateDescriptor {
            id: StateId::Locked,
            name: "Locked",
            on_enter: Some(locked_enter),
            on_exit: None,
            on_key: locked_key,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Reset transition (shared by `*`, the button, and change completion)
// ═══════════════════════════════════════════════════════════════════════════

/// Wipe the session and show the idle prompt.  The stored password survives.
pub fn reset_session(ctx: &mut StepContext<'_>) {
    ctx.lock.clear_session();
    ctx.emit(Outcome::Reset);
}

/// Append an entry key and echo the buffer.
/// Returns `true` once the entry holds a full password.
fn append_entry(ctx: &mut StepContext<'_>, key: Key) -> bool {
    if ctx.lock.input_buffer.push(key.as_char()).is_err() {
        return true;
    }
    let echo = ctx.lock.input_buffer.clone();
    ctx.emit(Outcome::Entry(echo));
    ctx.lock.entry_complete()
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLE state — checking entries against the stored password
// ═══════════════════════════════════════════════════════════════════════════

fn idle_key(ctx: &mut StepContext<'_>, key: Key) -> Option<StateId> {
    if key.is_change_password() {
        return Some(StateId::ChangePassword);
    }

    if !append_entry(ctx, key) {
        return None;
    }

    let matched = ctx.lock.entry_matches();
    ctx.lock.input_buffer.clear();

    if matched {
        ctx.lock.last_attempt_correct = true;
        ctx.lock.fail_count = 0;
        info!("IDLE: password accepted");
        ctx.emit(Outcome::Granted);
        return None;
    }

    let limit = ctx.config.max_failures;
    ctx.lock.last_attempt_correct = false;
    ctx.lock.fail_count = ctx.lock.fail_count.saturating_add(1);
    let failures = ctx.lock.fail_count;
    warn!("IDLE: wrong password ({}/{})", failures, limit);
    ctx.emit(Outcome::Denied { failures, limit });

    if failures >= limit {
        return Some(StateId::Locked);
    }
    ctx.emit(Outcome::IdlePrompt);
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  CHANGE_PASSWORD state — next full entry becomes the password
// ═══════════════════════════════════════════════════════════════════════════

fn change_enter(ctx: &mut StepContext<'_>) {
    ctx.lock.mode = Mode::ChangePassword;
    ctx.lock.input_buffer.clear();
    ctx.emit(Outcome::ChangePrompt);
}

fn change_key(ctx: &mut StepContext<'_>, key: Key) -> Option<StateId> {
    if key.is_change_password() {
        // Start the new password over.
        change_enter(ctx);
        return None;
    }

    if !append_entry(ctx, key) {
        return None;
    }

    ctx.lock.stored_password = ctx.lock.input_buffer.clone();
    ctx.lock.mode = Mode::Idle;
    info!("CHANGE_PASSWORD: new password stored");
    ctx.emit(Outcome::PasswordChanged);
    Some(StateId::Idle)
}

// ═══════════════════════════════════════════════════════════════════════════
//  LOCKED state — terminal until reset
// ═══════════════════════════════════════════════════════════════════════════

fn locked_enter(ctx: &mut StepContext<'_>) {
    ctx.lock.locked = true;
    ctx.lock.mode = Mode::Idle;
    ctx.lock.input_buffer.clear();
    warn!(
        "LOCKED: {} consecutive failures, waiting for reset",
        ctx.lock.fail_count
    );
    ctx.emit(Outcome::LockedOut);
}

fn locked_key(_ctx: &mut StepContext<'_>, key: Key) -> Option<StateId> {
    debug!("LOCKED: ignoring key '{}'", key);
    None
}

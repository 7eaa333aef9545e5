//! Function-pointer finite state machine engine.
//!
//! Classic embedded FSM pattern, driven by key events instead of ticks:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  StateTable                                                      │
//! │  ┌────────────────┬───────────┬──────────┬──────────────────────┐│
//! │  │ StateId        │ on_enter  │ on_exit  │ on_key               ││
//! │  ├────────────────┼───────────┼──────────┼──────────────────────┤│
//! │  │ Idle           │ fn(ctx)   │ fn(ctx)  │ fn(ctx, key)->Option ││
//! │  │ ChangePassword │ fn(ctx)   │ fn(ctx)  │ fn(ctx, key)->Option ││
//! │  │ Locked         │ fn(ctx)   │ fn(ctx)  │ fn(ctx, key)->Option ││
//! │  └────────────────┴───────────┴──────────┴──────────────────────┘│
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The current row is derived from the [`LockState`](context::LockState)
//! itself, so the engine holds no state of its own.  For each key the
//! engine calls `on_key` of the current row; if it returns `Some(next)`
//! with `next` different from the current state, the engine runs
//! `on_exit` for the current row, then `on_enter` for the next.
//!
//! The reset key `*` never reaches the table: it runs the reset
//! transition from every state.

pub mod context;
pub mod states;

use context::StepContext;
use log::info;

use crate::app::commands::Key;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all controller states.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    Idle = 0,
    ChangePassword = 1,
    Locked = 2,
}

impl StateId {
    /// Total number of states — used to size the table array.
    pub const COUNT: usize = 3;
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
pub type StateActionFn = fn(&mut StepContext<'_>);

/// Signature for the per-key handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type KeyHandlerFn = fn(&mut StepContext<'_>, Key) -> Option<StateId>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single state.
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_key: KeyHandlerFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The state machine engine: a fixed table of [`StateDescriptor`]s.
pub struct Fsm {
    /// Indexed by `StateId as usize`.
    table: [StateDescriptor; StateId::COUNT],
}

impl Fsm {
    pub fn new(table: [StateDescriptor; StateId::COUNT]) -> Self {
        debug_assert!(
            table.iter().enumerate().all(|(i, d)| d.id as usize == i),
            "state table rows out of order"
        );
        Self { table }
    }

    /// Feed one key into the current state.
    pub fn handle_key(&self, ctx: &mut StepContext<'_>, key: Key) {
        if key.is_reset() {
            info!("reset requested from keypad");
            states::reset_session(ctx);
            return;
        }

        let current = ctx.lock.state_id();
        if let Some(next) = (self.table[current as usize].on_key)(ctx, key) {
            if next != current {
                self.transition(current, next, ctx);
            }
        }
    }

    /// Hardware reset: same transition as the `*` key, from any state.
    pub fn reset(&self, ctx: &mut StepContext<'_>) {
        info!("reset requested from button");
        states::reset_session(ctx);
    }

    /// Human-readable name of a state.
    pub fn name(&self, id: StateId) -> &'static str {
        self.table[id as usize].name
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&self, from: StateId, to: StateId, ctx: &mut StepContext<'_>) {
        info!("FSM transition: {} -> {}", self.name(from), self.name(to));

        if let Some(exit) = self.table[from as usize].on_exit {
            exit(ctx);
        }
        if let Some(enter) = self.table[to as usize].on_enter {
            enter(ctx);
        }
    }
}

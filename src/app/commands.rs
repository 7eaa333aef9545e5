//! Inbound commands to the lock controller.
//!
//! The keypad scanner and the reset button produce these; the
//! [`LockController`](super::controller::LockController) consumes exactly
//! one per step.

use core::fmt;

/// A validated keypad character from `{0-9, A-D, *, #}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(char);

impl Key {
    /// Soft reset key.
    pub const RESET: Key = Key('*');
    /// Enters change-password mode.
    pub const CHANGE_PASSWORD: Key = Key('#');

    /// Returns `None` for characters outside the keypad alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        matches!(c, '0'..='9' | 'A'..='D' | '*' | '#').then_some(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_reset(self) -> bool {
        self == Self::RESET
    }

    pub fn is_change_password(self) -> bool {
        self == Self::CHANGE_PASSWORD
    }

    /// Digits and letters — the keys that go into the entry buffer.
    pub fn is_entry(self) -> bool {
        !self.is_reset() && !self.is_change_password()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Commands that drive one controller step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockCommand {
    /// A key event from the matrix scanner.
    Key(Key),
    /// The hardware reset button was pressed.
    Reset,
}

//! Fuzz target: LockController key sequences
//!
//! Maps each input byte onto a keypad key or the reset button and feeds
//! the sequence through the controller, verifying:
//! - No panics and no outcome-queue overflow
//! - The entry buffer never holds a full password between steps
//! - Lockout and change mode are never active together
//! - `locked` tracks `fail_count >= max_failures` exactly
//!
//! cargo fuzz run fuzz_key_sequence

#![no_main]

use doorlock::app::commands::{Key, LockCommand};
use doorlock::app::controller::LockController;
use doorlock::config::{LockConfig, PASSWORD_LEN};
use doorlock::fsm::context::Mode;
use libfuzzer_sys::fuzz_target;

const KEYS: &[u8; 16] = b"0123456789ABCD*#";

fuzz_target!(|data: &[u8]| {
    let Ok(ctl) = LockController::new(LockConfig::default()) else {
        return;
    };
    let mut lock = ctl.initial_state();
    let limit = ctl.config().max_failures;

    for &byte in data {
        // Low nibble picks a key; 0xF0 and above is the reset button.
        let cmd = if byte >= 0xF0 {
            LockCommand::Reset
        } else {
            match Key::from_char(char::from(KEYS[usize::from(byte & 0x0F)])) {
                Some(key) => LockCommand::Key(key),
                None => continue,
            }
        };
        ctl.step(cmd, &mut lock);

        assert!(lock.input_buffer.len() < PASSWORD_LEN);
        assert_eq!(lock.stored_password.len(), PASSWORD_LEN);
        assert!(!(lock.locked && lock.mode == Mode::ChangePassword));
        assert_eq!(lock.locked, lock.fail_count >= limit);
    }
});

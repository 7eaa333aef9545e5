//! Integration tests for the keypad → LockController → LockState pipeline.
//!
//! Drive the controller exactly as the control loop does and verify the
//! resulting state and the ordered outcome stream.

use super::mock_hw::Bench;

use doorlock::app::events::Outcome;
use doorlock::config::{LockConfig, Secret};
use doorlock::fsm::StateId;
use doorlock::fsm::context::{LockState, Mode};

fn secret(s: &str) -> Secret {
    let mut out = Secret::new();
    out.push_str(s).unwrap();
    out
}

// ── Reference walkthrough ─────────────────────────────────────

#[test]
fn full_session_walkthrough() {
    let mut bench = Bench::new();

    bench.type_keys("1234");
    assert!(bench.lock.last_attempt_correct);
    assert_eq!(bench.lock.fail_count, 0);

    bench.type_keys("9999");
    bench.type_keys("9999");
    assert!(!bench.lock.locked);
    bench.type_keys("9999");
    assert!(bench.lock.locked, "third mismatch must lock");
    assert_eq!(bench.controller.state(&bench.lock), StateId::Locked);

    bench.type_keys("*");
    assert!(!bench.lock.locked);
    assert_eq!(bench.lock.fail_count, 0);
    assert!(bench.lock.input_buffer.is_empty());

    bench.type_keys("#5555");
    assert_eq!(bench.lock.stored_password, secret("5555"));
    assert_eq!(bench.controller.state(&bench.lock), StateId::Idle);

    bench.clear_outcomes();
    bench.type_keys("5555");
    assert_eq!(bench.outcomes().last(), Some(&Outcome::Granted));
    assert!(bench.lock.last_attempt_correct);
}

// ── Verification ──────────────────────────────────────────────

#[test]
fn fourth_character_echoes_then_grants() {
    let mut bench = Bench::new();
    bench.type_keys("123");
    bench.clear_outcomes();
    bench.type_keys("4");
    assert_eq!(
        bench.outcomes(),
        &[Outcome::Entry(secret("1234")), Outcome::Granted]
    );
}

#[test]
fn mismatch_below_limit_reprompts() {
    let mut bench = Bench::new();
    bench.type_keys("123");
    bench.clear_outcomes();
    bench.type_keys("5");
    assert_eq!(
        bench.outcomes(),
        &[
            Outcome::Entry(secret("1235")),
            Outcome::Denied { failures: 1, limit: 3 },
            Outcome::IdlePrompt,
        ]
    );
    assert_eq!(bench.lock.fail_count, 1);
    assert!(bench.lock.input_buffer.is_empty());
}

#[test]
fn third_mismatch_locks_out() {
    let mut bench = Bench::new();
    bench.type_keys("00000000000");
    bench.clear_outcomes();
    bench.type_keys("0");
    assert_eq!(
        bench.outcomes(),
        &[
            Outcome::Entry(secret("0000")),
            Outcome::Denied { failures: 3, limit: 3 },
            Outcome::LockedOut,
        ]
    );
}

#[test]
fn success_clears_earlier_failures() {
    let mut bench = Bench::new();
    bench.type_keys("00000000");
    assert_eq!(bench.lock.fail_count, 2);
    bench.type_keys("1234");
    assert_eq!(bench.lock.fail_count, 0);
    bench.type_keys("0000");
    assert!(!bench.lock.locked, "counter restarted after success");
}

#[test]
fn mismatch_clears_success_flag() {
    let mut bench = Bench::new();
    bench.type_keys("1234");
    assert!(bench.lock.last_attempt_correct);
    bench.type_keys("4321");
    assert!(!bench.lock.last_attempt_correct);
}

#[test]
fn letters_are_password_characters() {
    let mut bench = Bench::new();
    bench.type_keys("#AB0D");
    bench.clear_outcomes();
    bench.type_keys("AB0D");
    assert_eq!(bench.outcomes().last(), Some(&Outcome::Granted));
}

// ── Lockout ───────────────────────────────────────────────────

#[test]
fn locked_ignores_every_key_but_star() {
    let mut bench = Bench::new();
    bench.type_keys("000000000000");
    assert!(bench.lock.locked);

    let before = bench.lock.clone();
    bench.clear_outcomes();
    bench.type_keys("1234#ABCD0#");
    assert_eq!(bench.lock, before);
    assert!(bench.outcomes().is_empty());
    assert_eq!(bench.lock.mode, Mode::Idle);
}

#[test]
fn reset_button_clears_lockout() {
    let mut bench = Bench::new();
    bench.type_keys("000000000000");
    bench.press_reset_button();
    assert_eq!(bench.controller.state(&bench.lock), StateId::Idle);
    bench.type_keys("1234");
    assert!(bench.lock.last_attempt_correct);
}

#[test]
fn configured_failure_limit() {
    let mut bench = Bench::with_config(LockConfig {
        max_failures: 5,
        ..LockConfig::default()
    });
    bench.type_keys(&"0".repeat(16));
    assert!(!bench.lock.locked);
    bench.type_keys("0000");
    assert!(bench.lock.locked);
}

// ── Change password ───────────────────────────────────────────

#[test]
fn change_completion_confirms_then_resets() {
    let mut bench = Bench::new();
    bench.type_keys("#555");
    bench.clear_outcomes();
    bench.type_keys("5");
    assert_eq!(
        bench.outcomes(),
        &[
            Outcome::Entry(secret("5555")),
            Outcome::PasswordChanged,
            Outcome::Reset,
        ]
    );
    assert_eq!(bench.lock.mode, Mode::Idle);
}

#[test]
fn old_password_rejected_after_change() {
    let mut bench = Bench::new();
    bench.type_keys("#7777");
    bench.type_keys("1234");
    assert_eq!(bench.lock.fail_count, 1);
}

#[test]
fn hash_mid_entry_switches_to_change_mode() {
    let mut bench = Bench::new();
    bench.type_keys("12#");
    assert_eq!(bench.lock.mode, Mode::ChangePassword);
    assert!(bench.lock.input_buffer.is_empty());
    bench.type_keys("9876");
    assert_eq!(bench.lock.stored_password, secret("9876"));
}

#[test]
fn hash_in_change_mode_restarts_entry() {
    let mut bench = Bench::new();
    bench.type_keys("#12#3456");
    assert_eq!(bench.lock.stored_password, secret("3456"));
}

#[test]
fn star_abandons_change_mode() {
    let mut bench = Bench::new();
    bench.type_keys("#55*");
    assert_eq!(bench.lock.mode, Mode::Idle);
    assert_eq!(bench.lock.stored_password, secret("1234"));
}

#[test]
fn password_change_resets_session_counters() {
    let mut bench = Bench::new();
    bench.type_keys("0000");
    bench.type_keys("#4444");
    // The reset after storing wipes the session counters.
    assert_eq!(bench.lock.fail_count, 0);
}

// ── Reset ─────────────────────────────────────────────────────

#[test]
fn repeated_resets_converge_to_initial_state() {
    let mut bench = Bench::new();
    bench.type_keys("1234");
    bench.type_keys("00");
    bench.type_keys("*");
    let after_first = bench.lock.clone();
    bench.type_keys("*");
    bench.press_reset_button();
    bench.press_reset_button();
    assert_eq!(bench.lock, after_first);
    assert_eq!(bench.lock, LockState::new(secret("1234")));
}

#[test]
fn reset_keeps_stored_password() {
    let mut bench = Bench::new();
    bench.type_keys("#2468");
    bench.press_reset_button();
    assert_eq!(bench.lock.stored_password, secret("2468"));
}

//! Integration tests for LockController → FeedbackDriver → display/signals.
//!
//! Assert on the rendered screen and the LED/buzzer call history rather
//! than on outcomes, i.e. on what the user actually sees and hears.

use super::mock_hw::{Bench, DisplayCall, SignalCall};

use doorlock::adapters::feedback::{
    MSG_CHANGED, MSG_DENIED, MSG_GRANTED, MSG_LOCKED, MSG_RESET_HINT, PROMPT_ENTER, PROMPT_NEW,
};

#[test]
fn boot_shows_idle_prompt_with_signals_quiet() {
    let bench = Bench::new();
    assert_eq!(bench.display().row(0), PROMPT_ENTER);
    assert_eq!(bench.display().row(1), "");
    assert_eq!(bench.signal().calls, vec![SignalCall::Quiet]);
}

#[test]
fn entry_echo_is_padded_to_full_width() {
    let mut bench = Bench::new();
    bench.type_keys("12");
    assert_eq!(bench.display().raw_row(1), format!("12{}", " ".repeat(14)));
    assert!(
        bench
            .display()
            .calls
            .contains(&DisplayCall::Print(format!("12{}", " ".repeat(14))))
    );
}

#[test]
fn correct_password_lights_led_and_beeps_once() {
    let mut bench = Bench::new();
    bench.type_keys("1234");
    assert_eq!(bench.display().row(0), MSG_GRANTED);
    assert!(bench.signal().led_on());
    assert_eq!(bench.signal().beeps(), vec![(1, 200)]);
}

#[test]
fn success_led_is_reasserted_by_the_loop() {
    let mut bench = Bench::new();
    bench.type_keys("1234");
    let before = bench.signal().calls.len();
    bench.loop_tail();
    assert_eq!(bench.signal().calls[before..], [SignalCall::Led(true)]);

    bench.press_reset_button();
    let before = bench.signal().calls.len();
    bench.loop_tail();
    assert_eq!(bench.signal().calls.len(), before);
    assert!(!bench.signal().led_on());
}

#[test]
fn wrong_password_blinks_beeps_and_reprompts() {
    let mut bench = Bench::new();
    bench.type_keys("4321");
    let calls = &bench.signal().calls;
    assert_eq!(
        calls[calls.len() - 3..],
        [
            SignalCall::Blink { count: 2, ms: 200 },
            SignalCall::Beep { count: 2, ms: 120 },
            SignalCall::Led(false),
        ]
    );
    assert!(
        bench
            .display()
            .calls
            .contains(&DisplayCall::Print(MSG_DENIED.to_string()))
    );
    // Failure text is replaced by the prompt once the sequence ends.
    assert_eq!(bench.display().row(0), PROMPT_ENTER);
    assert_eq!(bench.display().row(1), "");
}

#[test]
fn lockout_screen_names_the_way_out() {
    let mut bench = Bench::new();
    bench.type_keys("000011112222");
    assert_eq!(bench.display().row(0), MSG_LOCKED);
    assert_eq!(bench.display().row(1), MSG_RESET_HINT);

    // Keys while locked leave the screen alone.
    let calls = bench.display().calls.len();
    bench.type_keys("1234#");
    assert_eq!(bench.display().calls.len(), calls);
}

#[test]
fn star_from_lockout_restores_prompt() {
    let mut bench = Bench::new();
    bench.type_keys("000011112222*");
    assert_eq!(bench.display().row(0), PROMPT_ENTER);
    assert_eq!(bench.signal().calls.last(), Some(&SignalCall::Quiet));
}

#[test]
fn change_password_screens() {
    let mut bench = Bench::new();
    bench.type_keys("#");
    assert_eq!(bench.display().row(0), PROMPT_NEW);
    assert_eq!(bench.display().row(1), "");

    bench.type_keys("9");
    assert_eq!(bench.display().row(1), "9");

    let beeps_before = bench.signal().beeps().len();
    bench.type_keys("876");
    assert!(
        bench
            .display()
            .calls
            .contains(&DisplayCall::Print(MSG_CHANGED.to_string()))
    );
    assert_eq!(bench.signal().beeps()[beeps_before..], [(1, 200)]);
    // Back at the idle prompt.
    assert_eq!(bench.display().row(0), PROMPT_ENTER);
}

#[test]
fn every_failure_is_reported() {
    let mut bench = Bench::new();
    bench.type_keys("000011112222");
    let denied = bench
        .display()
        .calls
        .iter()
        .filter(|c| **c == DisplayCall::Print(MSG_DENIED.to_string()))
        .count();
    assert_eq!(denied, 3);
    assert_eq!(
        bench.signal().beeps().iter().filter(|b| **b == (2, 120)).count(),
        3
    );
}

//! Peripheral drivers: keypad matrix, reset button, LED + buzzer, LCD.

pub mod keypad;
pub mod lcd;
pub mod reset_button;
pub mod signal;

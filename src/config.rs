//! System configuration parameters
//!
//! All tunable parameters for the door lock.  Defaults are the wiring
//! and timings of the production board; there is no persistent override,
//! so values are compiled in and checked once at boot by
//! [`LockConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::app::commands::Key;
use crate::error::{Error, Result};
use crate::pins;

/// Length of the stored password and of every entry attempt.
pub const PASSWORD_LEN: usize = 4;

/// Number of keypad rows / columns.
pub const KEYPAD_ROWS: usize = 4;
pub const KEYPAD_COLS: usize = 4;

/// `(row, column)` → key character.
pub type Keymap = [[char; KEYPAD_COLS]; KEYPAD_ROWS];

/// Standard 4×4 membrane keypad layout.
pub const DEFAULT_KEYMAP: Keymap = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// A password or an in-progress entry: at most [`PASSWORD_LEN`] characters.
pub type Secret = heapless::String<PASSWORD_LEN>;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockConfig {
    // --- Password policy ---
    /// Password in effect after power-up.
    pub default_password: Secret,
    /// Consecutive wrong attempts that trigger the lockout.
    pub max_failures: u8,

    // --- Inputs ---
    pub keypad: KeypadConfig,
    /// Reset button GPIO (active-low, pull-up).
    pub reset_button_gpio: i32,
    /// Debounce applied before the reset and again after release (ms).
    pub reset_debounce_ms: u32,

    // --- Outputs ---
    pub feedback: FeedbackConfig,
    pub display: DisplayConfig,
    pub led_gpio: i32,
    pub buzzer_gpio: i32,
}

/// Matrix wiring, layout, and scan timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadConfig {
    /// Row drive lines in scan order.
    pub row_gpios: [i32; KEYPAD_ROWS],
    /// Column sense lines in sample order.
    pub col_gpios: [i32; KEYPAD_COLS],
    pub keymap: Keymap,
    /// Settle time after strobing a row, before sampling columns (µs).
    pub settle_us: u32,
    /// Pause after every accepted key before the next scan (ms).
    pub key_guard_ms: u32,
}

/// Pacing of LED / buzzer sequences and confirmation screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Tone length of the single "accepted" beep (ms).
    pub success_beep_ms: u32,
    /// On/off period of each failure blink (ms).
    pub failure_blink_ms: u32,
    /// Tone length of each failure beep (ms).
    pub failure_beep_ms: u32,
    /// Silence between consecutive beeps (ms).
    pub beep_gap_ms: u32,
    /// How long "password changed" stays on screen (ms).
    pub change_hold_ms: u32,
}

/// Character LCD geometry and bus address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub i2c_addr: u8,
    pub sda_gpio: i32,
    pub scl_gpio: i32,
    pub baudrate_hz: u32,
    pub cols: u8,
    pub rows: u8,
}

impl Default for LockConfig {
    fn default() -> Self {
        let mut default_password = Secret::new();
        // "1234" always fits in PASSWORD_LEN.
        let _ = default_password.push_str("1234");

        Self {
            // Password policy
            default_password,
            max_failures: 3,

            // Inputs
            keypad: KeypadConfig::default(),
            reset_button_gpio: pins::RESET_BUTTON_GPIO,
            reset_debounce_ms: 80,

            // Outputs
            feedback: FeedbackConfig::default(),
            display: DisplayConfig::default(),
            led_gpio: pins::LED_GPIO,
            buzzer_gpio: pins::BUZZER_GPIO,
        }
    }
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            row_gpios: pins::KEYPAD_ROW_GPIOS,
            col_gpios: pins::KEYPAD_COL_GPIOS,
            keymap: DEFAULT_KEYMAP,
            settle_us: 1_000,
            key_guard_ms: 200,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            success_beep_ms: 200,
            failure_blink_ms: 200,
            failure_beep_ms: 120,
            beep_gap_ms: 100,
            change_hold_ms: 800,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            i2c_addr: pins::LCD_I2C_ADDR,
            sda_gpio: pins::I2C_SDA_GPIO,
            scl_gpio: pins::I2C_SCL_GPIO,
            baudrate_hz: pins::I2C_BAUDRATE_HZ,
            cols: 16,
            rows: 2,
        }
    }
}

impl LockConfig {
    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.default_password.chars().count() != PASSWORD_LEN {
            return Err(Error::Config("default_password must be exactly 4 characters"));
        }
        if !self
            .default_password
            .chars()
            .all(|c| Key::from_char(c).is_some_and(Key::is_entry))
        {
            return Err(Error::Config("default_password may only contain 0-9 and A-D"));
        }
        if self.max_failures == 0 {
            return Err(Error::Config("max_failures must be non-zero"));
        }

        let keys = self.keypad.keymap.iter().flatten().copied();
        if !keys.clone().all(|c| Key::from_char(c).is_some()) {
            return Err(Error::Config("keymap contains a character outside 0-9, A-D, *, #"));
        }
        if !keys.clone().any(|c| c == '*') || !keys.clone().any(|c| c == '#') {
            return Err(Error::Config("keymap must contain both '*' and '#'"));
        }

        if self.display.cols < 16 || self.display.rows < 2 {
            return Err(Error::Config("display must be at least 16x2"));
        }
        Ok(())
    }
}

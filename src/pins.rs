//! GPIO / peripheral pin assignments for the door-lock board.
//!
//! Single source of truth — [`LockConfig::default`](crate::config::LockConfig)
//! takes its wiring from here, and `main` builds every pin driver from the
//! config.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// 4×4 matrix keypad
// ---------------------------------------------------------------------------

/// Row drive lines, in scan order (row 0 first).  Driven HIGH one at a time.
pub const KEYPAD_ROW_GPIOS: [i32; 4] = [4, 5, 6, 7];
/// Column sense lines, in sample order.  Internal pull-downs; HIGH = pressed.
pub const KEYPAD_COL_GPIOS: [i32; 4] = [15, 16, 17, 18];

// ---------------------------------------------------------------------------
// Signal outputs
// ---------------------------------------------------------------------------

/// Status LED (active HIGH).
pub const LED_GPIO: i32 = 11;
/// Piezo buzzer driver transistor (active HIGH).
pub const BUZZER_GPIO: i32 = 12;

// ---------------------------------------------------------------------------
// Reset push-button (active-low with pull-up)
// ---------------------------------------------------------------------------

/// Momentary button that forces the hard reset transition.
pub const RESET_BUTTON_GPIO: i32 = 0;

// ---------------------------------------------------------------------------
// I²C bus — 16×2 character LCD behind a PCF8574 backpack
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 8;
pub const I2C_SCL_GPIO: i32 = 9;
/// Standard-mode bus clock.
pub const I2C_BAUDRATE_HZ: u32 = 100_000;
/// 7-bit backpack address (0x27 for PCF8574, 0x3F for PCF8574A).
pub const LCD_I2C_ADDR: u8 = 0x27;

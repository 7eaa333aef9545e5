//! DoorLock Firmware — Main Entry Point
//!
//! Single-threaded polling loop over a hexagonal core.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  KeypadScanner   ResetButton   FeedbackDriver  LogFeedbackSink │
//! │  (Key source)    (Reset src)   (LCD+LED+buzzer) (serial log)   │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            LockController (pure logic)                 │    │
//! │  │  FSM · password policy · lockout                       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```

#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::{Ets, FreeRtos};
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Input, Output, PinDriver, Pull};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::{error, info, warn};

use doorlock::adapters::feedback::FeedbackDriver;
use doorlock::adapters::log_sink::LogFeedbackSink;
use doorlock::app::commands::LockCommand;
use doorlock::app::controller::LockController;
use doorlock::config::{KEYPAD_COLS, KEYPAD_ROWS, LockConfig};
use doorlock::drivers::keypad::KeypadScanner;
use doorlock::drivers::lcd::LcdI2c;
use doorlock::drivers::reset_button::ResetButton;
use doorlock::drivers::signal::SignalDriver;
use doorlock::error::Error;

/// Idle time between loop iterations, yields to the FreeRTOS idle task.
const LOOP_IDLE_MS: u32 = 10;

/// Log and park forever.  The task watchdog resets the chip.
fn halt(what: &str, e: impl core::fmt::Display) -> ! {
    error!("{} failed: {} — halting", what, e);
    loop {
        FreeRtos::delay_ms(1000);
    }
}

fn input_pin(gpio: i32, pull: Pull) -> Result<PinDriver<'static, AnyIOPin, Input>> {
    // SAFETY: each GPIO number comes from the validated wiring table and
    // is claimed exactly once at boot.
    let mut pin = PinDriver::input(unsafe { AnyIOPin::new(gpio) })?;
    pin.set_pull(pull)?;
    Ok(pin)
}

fn output_pin(gpio: i32) -> Result<PinDriver<'static, AnyOutputPin, Output>> {
    // SAFETY: as for `input_pin`.
    Ok(PinDriver::output(unsafe { AnyOutputPin::new(gpio) })?)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  DoorLock v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = LockConfig::default();
    let controller = match LockController::new(config) {
        Ok(c) => c,
        Err(e) => halt("config validation", e),
    };
    let config = controller.config().clone();

    // ── 3. Peripherals ────────────────────────────────────────
    let peripherals = match Peripherals::take() {
        Ok(p) => p,
        Err(e) => halt("peripheral bring-up", e),
    };

    let mut rows = heapless::Vec::<_, KEYPAD_ROWS>::new();
    for gpio in config.keypad.row_gpios {
        match output_pin(gpio) {
            Ok(pin) => {
                let _ = rows.push(pin);
            }
            Err(e) => halt("keypad rows", e),
        }
    }
    let rows = match rows.into_array() {
        Ok(r) => r,
        Err(_) => halt("keypad rows", Error::Init("pin count mismatch")),
    };
    let mut cols = heapless::Vec::<_, KEYPAD_COLS>::new();
    for gpio in config.keypad.col_gpios {
        match input_pin(gpio, Pull::Down) {
            Ok(pin) => {
                let _ = cols.push(pin);
            }
            Err(e) => halt("keypad columns", e),
        }
    }
    let cols = match cols.into_array() {
        Ok(c) => c,
        Err(_) => halt("keypad columns", Error::Init("pin count mismatch")),
    };
    let mut keypad = KeypadScanner::new(rows, cols, &config.keypad, Ets);

    let reset_pin = match input_pin(config.reset_button_gpio, Pull::Up) {
        Ok(p) => p,
        Err(e) => halt("reset button", e),
    };
    let mut reset_button = ResetButton::new(reset_pin, FreeRtos, config.reset_debounce_ms);

    let (led, buzzer) = match (output_pin(config.led_gpio), output_pin(config.buzzer_gpio)) {
        (Ok(l), Ok(b)) => (l, b),
        (Err(e), _) | (_, Err(e)) => halt("LED/buzzer", e),
    };
    let signal = SignalDriver::new(led, buzzer, FreeRtos, config.feedback.beep_gap_ms);

    let i2c_config = I2cConfig::new().baudrate(Hertz(config.display.baudrate_hz));
    // SAFETY: as for `input_pin`.
    let i2c = match I2cDriver::new(
        peripherals.i2c0,
        unsafe { AnyIOPin::new(config.display.sda_gpio) },
        unsafe { AnyIOPin::new(config.display.scl_gpio) },
        &i2c_config,
    ) {
        Ok(bus) => bus,
        Err(e) => halt("I2C bus", e),
    };
    let mut lcd = LcdI2c::new(i2c, FreeRtos, &config.display);
    if let Err(e) = lcd.init() {
        warn!("LCD init failed: {} — continuing without display", e);
    }

    // ── 4. Controller ─────────────────────────────────────────
    let mut sink = (
        FeedbackDriver::new(lcd, signal, FreeRtos, config.feedback),
        LogFeedbackSink::new(),
    );
    let mut lock = controller.initial_state();
    controller.start(&lock, &mut sink);

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        match reset_button.pressed() {
            Ok(true) => {
                controller.handle(LockCommand::Reset, &mut lock, &mut sink);
                if let Err(e) = reset_button.wait_release() {
                    warn!("reset button release: {}", e);
                }
            }
            Ok(false) => {}
            Err(e) => warn!("reset button read: {}", e),
        }

        match keypad.scan() {
            Ok(Some(key)) => {
                controller.handle_key(key, &mut lock, &mut sink);
                FreeRtos::delay_ms(config.keypad.key_guard_ms);
            }
            Ok(None) => {}
            Err(e) => warn!("keypad scan: {}", e),
        }

        if lock.last_attempt_correct {
            sink.0.hold_success_indicator();
        }

        FreeRtos::delay_ms(LOOP_IDLE_MS);
    }
}

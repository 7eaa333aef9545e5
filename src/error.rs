//! Unified error type for the door-lock firmware.
//!
//! Every fallible driver call funnels into [`Error`], keeping the main
//! loop's handling uniform.  All variants are `Copy`: the embedded-hal
//! error *kinds* are kept rather than the platform error values, so the
//! type stays the same on host and on target.
//!
//! A wrong password or a lockout is **not** an error — those are
//! controller outcomes (see [`Outcome`](crate::app::events::Outcome)).

use core::fmt;

use embedded_hal::{digital, i2c};

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A keypad, button, or signal pin could not be read or driven.
    Gpio(digital::ErrorKind),
    /// A display transfer on the I²C bus failed.
    I2c(i2c::ErrorKind),
    /// Configuration failed validation.
    Config(&'static str),
    /// Platform bring-up failed.  Fatal: the firmware halts.
    Init(&'static str),
}

impl Error {
    /// Map any embedded-hal pin error onto [`Error::Gpio`].
    pub fn gpio(e: impl digital::Error) -> Self {
        Self::Gpio(e.kind())
    }

    /// Map any embedded-hal I²C error onto [`Error::I2c`].
    pub fn i2c(e: impl i2c::Error) -> Self {
        Self::I2c(e.kind())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(kind) => write!(f, "gpio: {kind}"),
            Self::I2c(kind) => write!(f, "i2c: {kind}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

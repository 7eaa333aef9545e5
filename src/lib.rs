//! DoorLock firmware library.
//!
//! Exposes the pure-logic modules and the embedded-hal drivers for
//! integration testing.  Everything here builds on the host; only the
//! firmware binary (`src/main.rs`) needs the `espidf` feature.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod pins;

pub use error::{Error, Result};

//! Application core — pure lock logic, zero I/O.
//!
//! The [`controller`] owns the password policy and the state table; the
//! peripherals are reached only through the **port traits** in [`ports`],
//! keeping this layer fully testable without real hardware.

pub mod commands;
pub mod controller;
pub mod events;
pub mod ports;

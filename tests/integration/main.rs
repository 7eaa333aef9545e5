//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the controller against
//! mock peripherals.  All tests run on the host (x86_64) with no real
//! hardware required.

mod feedback_flow_tests;
mod lock_flow_tests;

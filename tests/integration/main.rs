//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific loop
//! against mock adapters.  All tests run on the host (x86_64) with no
//! real hardware required.

mod master_loop_tests;
mod mock_hw;
mod slave_loop_tests;

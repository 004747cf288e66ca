//! Core computation for pll-timing

pub mod driver;
pub mod format;
pub mod timing;

pub use driver::{run, Outcome};
pub use format::{echo_float, fixed3, sci3};
pub use timing::{freq_lock_t, phase_lock_t, pull_range, pull_range_hz};

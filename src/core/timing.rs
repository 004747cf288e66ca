//! Closed-form acquisition timing for a second-order PLL.
//!
//! All four estimates are the standard second-order loop approximations
//! (Gardner, "Phaselock Techniques", 3rd ed):
//!
//! ```text
//! pull_range    = 2 * sqrt(2) * pi * loop_bw * damping     (normalized)
//! pull_range_hz = pull_range * fs                          (Hz)
//! phase_lock_t  = 1.3 / (loop_bw * fs)                     (s)
//! freq_lock_t   = 32 * damping^2 / (loop_bw * fs)          (s)
//! ```
//!
//! Pure arithmetic over f64, IEEE-754 throughout: a zero loop bandwidth or
//! sampling frequency yields infinite delays, never a panic. Inputs are not
//! range-checked; the calculator trusts its caller.

use std::f64::consts::PI;

use crate::{FREQ_LOCK_SETTLING, PHASE_LOCK_SETTLING};

/// Normalized pull-in range: the frequency offset (dimensionless) within
/// which the loop can acquire lock.
pub fn pull_range(loop_bw: f64, damping: f64) -> f64 {
    2.0 * 2.0_f64.sqrt() * PI * loop_bw * damping
}

/// Pull-in range in Hz at the given sampling frequency.
pub fn pull_range_hz(loop_bw: f64, damping: f64, fs: f64) -> f64 {
    pull_range(loop_bw, damping) * fs
}

/// Estimated time to phase lock, in seconds.
pub fn phase_lock_t(loop_bw: f64, fs: f64) -> f64 {
    PHASE_LOCK_SETTLING / (loop_bw * fs)
}

/// Estimated time to frequency lock, in seconds. Grows with the square of
/// the damping factor.
pub fn freq_lock_t(loop_bw: f64, damping: f64, fs: f64) -> f64 {
    FREQ_LOCK_SETTLING * damping * damping / (loop_bw * fs)
}

// =============================================================================
// TESTS
// =============================================================================

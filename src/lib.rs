//! pll-timing: acquisition timing estimates for a second-order PLL
//!
//! CLI → LoopParams → timing formulas → terminal report

pub mod core;
pub mod types;

// =============================================================================
// SETTLING COEFFICIENTS - Standard second-order loop approximations
// =============================================================================

/// Phase-lock delay numerator: t_phase = 1.3 / (loop_bw * fs)
pub const PHASE_LOCK_SETTLING: f64 = 1.3;

/// Frequency-lock delay scale: t_freq = 32 * damping^2 / (loop_bw * fs)
pub const FREQ_LOCK_SETTLING: f64 = 32.0;

// =============================================================================
// CLI CONTRACT
// =============================================================================

/// Usage line printed on wrong argument count. Byte-exact: downstream
/// wrappers match on this line, and the zero exit code goes with it.
pub const USAGE: &str = "Invocation: calc_timing.py <Loop BW> <Damping Factor> <Sampling Freq>";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

//! Loop design parameters

use serde::{Deserialize, Serialize};

/// The three parameters that characterize a second-order loop.
///
/// None of the fields are range-checked: unphysical values flow through the
/// formulas under IEEE-754 semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoopParams {
    /// Loop bandwidth in Hz (or normalized units). Controls lock speed vs
    /// noise rejection.
    pub loop_bw: f64,
    /// Damping factor (0.707 = critically damped, typical).
    pub damping: f64,
    /// Sampling frequency in Hz.
    pub fs: f64,
}

impl LoopParams {
    /// Create parameters for the given design point.
    pub fn new(loop_bw: f64, damping: f64, fs: f64) -> Self {
        Self {
            loop_bw,
            damping,
            fs,
        }
    }
}

impl Default for LoopParams {
    fn default() -> Self {
        Self {
            loop_bw: 100.0,
            damping: 0.707,
            fs: 48000.0,
        }
    }
}

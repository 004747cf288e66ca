//! Acquisition timing report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{echo_float, fixed3, freq_lock_t, phase_lock_t, pull_range, pull_range_hz, sci3};
use crate::types::LoopParams;

/// The four derived metrics for one design point, plus the echoed inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingReport {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Echoed loop bandwidth
    pub loop_bw: f64,
    /// Echoed damping factor
    pub damping: f64,
    /// Echoed sampling frequency in Hz
    pub fs: f64,
    /// Normalized pull-in range
    pub pull_range: f64,
    /// Pull-in range in Hz
    pub pull_range_hz: f64,
    /// Phase-lock delay in seconds
    pub phase_lock_t: f64,
    /// Frequency-lock delay in seconds
    pub freq_lock_t: f64,
}

impl TimingReport {
    /// Compute all four metrics for the given parameters.
    pub fn new(params: &LoopParams) -> Self {
        Self {
            timestamp: Utc::now(),
            loop_bw: params.loop_bw,
            damping: params.damping,
            fs: params.fs,
            pull_range: pull_range(params.loop_bw, params.damping),
            pull_range_hz: pull_range_hz(params.loop_bw, params.damping, params.fs),
            phase_lock_t: phase_lock_t(params.loop_bw, params.fs),
            freq_lock_t: freq_lock_t(params.loop_bw, params.damping, params.fs),
        }
    }

    /// Render the seven report lines, byte-exact. The two echo lines carry
    /// two spaces after the colon and keep a decimal point on integral
    /// values; everything derived is %.3e except the normalized pull-in
    /// range, which is %.3f.
    pub fn to_report_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Loop bw:  {}\n", echo_float(self.loop_bw)));
        out.push_str(&format!("Damping:  {}\n", echo_float(self.damping)));
        out.push_str(&format!("Sampling freq: {} Hz\n", sci3(self.fs)));
        out.push_str(&format!("Normalized Pull In Range: {}\n", fixed3(self.pull_range)));
        out.push_str(&format!("Pull In Range: {} Hz\n", sci3(self.pull_range_hz)));
        out.push_str(&format!("Phase lock delay: {} s\n", sci3(self.phase_lock_t)));
        out.push_str(&format!("Frequency lock delay: {} s\n", sci3(self.freq_lock_t)));
        out
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Integration tests for the timing calculator
//!
//! Tests the full path: command line → driver → formulas → report lines

use pretty_assertions::assert_eq;

use pll_timing::core::driver::run;
use pll_timing::core::{freq_lock_t, phase_lock_t, pull_range, pull_range_hz};
use pll_timing::types::{LoopParams, TimingReport};
use pll_timing::USAGE;

/// The end-to-end scenario: 10 Hz bandwidth, 0.707 damping, 1 kHz sampling
#[test]
fn test_report_lines_for_reference_design() {
    let params = LoopParams::new(10.0, 0.707, 1000.0);
    let report = TimingReport::new(&params);

    assert_eq!(
        report.to_report_string(),
        "Loop bw:  10.0\n\
         Damping:  0.707\n\
         Sampling freq: 1.000e+03 Hz\n\
         Normalized Pull In Range: 62.822\n\
         Pull In Range: 6.282e+04 Hz\n\
         Phase lock delay: 1.300e-04 s\n\
         Frequency lock delay: 1.600e-03 s\n"
    );
}

/// The same scenario through the driver, as invoked from the command line
#[test]
fn test_driver_prints_the_report() {
    let outcome = run(["calc_timing", "10", "0.707", "1000"]);

    assert_eq!(outcome.exit_code, 0);
    assert_eq!(outcome.stderr, "");
    assert_eq!(
        outcome.stdout,
        TimingReport::new(&LoopParams::new(10.0, 0.707, 1000.0)).to_report_string()
    );
}

/// Two arguments instead of three: usage line verbatim, exit code 0
#[test]
fn test_wrong_argument_count_prints_usage_and_exits_zero() {
    let outcome = run(["calc_timing", "10", "0.707"]);

    assert_eq!(outcome.exit_code, 0);
    assert_eq!(outcome.stdout, format!("{}\n", USAGE));
    assert_eq!(outcome.stderr, "");
}

/// Non-numeric argument: non-zero exit, none of the result lines printed
#[test]
fn test_non_numeric_argument_exits_nonzero_without_results() {
    let outcome = run(["calc_timing", "abc", "0.707", "1000"]);

    assert_ne!(outcome.exit_code, 0);
    assert_eq!(outcome.stdout, "");
    assert!(outcome.stderr.contains("invalid loop bandwidth"));
}

/// All four formulas against direct expressions
#[test]
fn test_formulas_against_direct_expressions() {
    let (bw, d, fs) = (10.0, 0.707, 1000.0);
    let sqrt2 = 2.0_f64.sqrt();
    let pi = std::f64::consts::PI;

    let rel = |a: f64, b: f64| ((a - b) / b).abs();

    assert!(rel(pull_range(bw, d), 2.0 * sqrt2 * pi * bw * d) < 1e-9);
    assert!(rel(pull_range_hz(bw, d, fs), pull_range(bw, d) * fs) < 1e-9);
    assert!(rel(phase_lock_t(bw, fs), 1.3 / (bw * fs)) < 1e-9);
    assert!(rel(freq_lock_t(bw, d, fs), 32.0 * d * d / (bw * fs)) < 1e-9);
}

/// Doubling fs doubles the Hz pull-in range and halves both delays
#[test]
fn test_sample_rate_scaling() {
    let (bw, d, fs) = (25.0, 1.0, 8000.0);

    let base = TimingReport::new(&LoopParams::new(bw, d, fs));
    let doubled = TimingReport::new(&LoopParams::new(bw, d, 2.0 * fs));

    assert!((doubled.pull_range_hz - 2.0 * base.pull_range_hz).abs() < 1e-9);
    assert!((doubled.phase_lock_t - base.phase_lock_t / 2.0).abs() < 1e-15);
    assert!((doubled.freq_lock_t - base.freq_lock_t / 2.0).abs() < 1e-15);
    // Normalized pull-in range does not depend on fs
    assert_eq!(doubled.pull_range, base.pull_range);
}

/// Zero damping collapses the pull-in range and the frequency-lock delay
#[test]
fn test_zero_damping_collapses_range_and_freq_lock() {
    let report = TimingReport::new(&LoopParams::new(10.0, 0.0, 1000.0));

    assert_eq!(report.pull_range, 0.0);
    assert_eq!(report.pull_range_hz, 0.0);
    assert_eq!(report.freq_lock_t, 0.0);
    // Phase-lock delay does not involve damping
    assert!((report.phase_lock_t - 1.3e-4).abs() < 1e-15);
}

/// The usage line is part of the compatibility contract
#[test]
fn test_usage_line_verbatim() {
    assert_eq!(
        USAGE,
        "Invocation: calc_timing.py <Loop BW> <Damping Factor> <Sampling Freq>"
    );
}

/// JSON mode emits a parseable report that round-trips
#[test]
fn test_json_mode_round_trips() {
    let outcome = run(["calc_timing", "10", "0.707", "1000", "--json"]);
    assert_eq!(outcome.exit_code, 0);

    let back: TimingReport = serde_json::from_str(&outcome.stdout).unwrap();
    assert_eq!(back.pull_range, pull_range(10.0, 0.707));
    assert_eq!(back.freq_lock_t, freq_lock_t(10.0, 0.707, 1000.0));
}

/// Determinism: same params, same metrics
#[test]
fn test_determinism() {
    let params = LoopParams::new(10.0, 0.707, 1000.0);
    let a = TimingReport::new(&params);
    let b = TimingReport::new(&params);

    assert_eq!(a.pull_range, b.pull_range);
    assert_eq!(a.pull_range_hz, b.pull_range_hz);
    assert_eq!(a.phase_lock_t, b.phase_lock_t);
    assert_eq!(a.freq_lock_t, b.freq_lock_t);
}

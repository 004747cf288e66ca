//! CLI driver.
//!
//! Parses the command line and renders everything one invocation prints.
//! The process boundary (stdout, stderr, exit) stays in main.rs; running an
//! invocation here returns an [`Outcome`] instead, so both documented
//! failure paths are exercised by tests.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

use crate::types::{LoopParams, TimingReport};
use crate::{USAGE, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "calc_timing",
    version = VERSION,
    about = "Closed-form acquisition timing for a second-order PLL",
    long_about = "Computes the four standard acquisition estimates for a\n\
                  second-order phase-locked loop from its design point:\n\n  \
                  Normalized pull-in range   2*sqrt(2)*pi*loop_bw*damping\n  \
                  Pull-in range (Hz)         pull_range * fs\n  \
                  Phase lock delay (s)       1.3 / (loop_bw * fs)\n  \
                  Frequency lock delay (s)   32*damping^2 / (loop_bw * fs)\n\n\
                  Inputs are not range-checked; unphysical values flow\n\
                  through under IEEE-754 semantics."
)]
pub struct Args {
    /// Loop bandwidth, Hz or normalized units
    #[arg(allow_negative_numbers = true)]
    pub loop_bw: String,

    /// Damping factor (0.707 = critically damped, typical)
    #[arg(allow_negative_numbers = true)]
    pub damping: String,

    /// Sampling frequency in Hz
    #[arg(allow_negative_numbers = true)]
    pub fs: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Everything one invocation prints, plus the process exit code.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl Outcome {
    fn ok(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code: 0,
        }
    }

    fn fail(stderr: String) -> Self {
        Self {
            stdout: String::new(),
            stderr,
            exit_code: 1,
        }
    }
}

/// Drive one invocation from raw command-line tokens (program name first).
pub fn run<I, T>(argv: I) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                return Outcome::ok(err.to_string());
            }
            // Wrong argument count is not an error in this contract:
            // usage line on stdout, exit code 0.
            _ => return Outcome::ok(format!("{}\n", USAGE)),
        },
    };

    let params = match parse_params(&args) {
        Ok(params) => params,
        Err(diagnostic) => return Outcome::fail(diagnostic),
    };

    let report = TimingReport::new(&params);

    if args.json {
        Outcome::ok(format!("{}\n", serde_json::to_string_pretty(&report).unwrap()))
    } else {
        Outcome::ok(report.to_report_string())
    }
}

/// Parse the three positionals, stopping at the first non-numeric one.
fn parse_params(args: &Args) -> Result<LoopParams, String> {
    Ok(LoopParams::new(
        parse_arg("loop bandwidth", &args.loop_bw)?,
        parse_arg("damping factor", &args.damping)?,
        parse_arg("sampling frequency", &args.fs)?,
    ))
}

/// Parse one positional argument as f64, or return the diagnostic line.
pub fn parse_arg(name: &str, raw: &str) -> Result<f64, String> {
    raw.parse()
        .map_err(|err| format!("calc_timing: invalid {} {:?}: {}\n", name, raw, err))
}

// =============================================================================
// TESTS
// =============================================================================

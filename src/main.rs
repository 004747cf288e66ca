//! pll-timing CLI
//!
//! Usage:
//!   calc_timing <loop_bw> <damping> <fs>            # Seven-line report
//!   calc_timing <loop_bw> <damping> <fs> --json     # JSON output
//!
//! Argument handling lives in core::driver; this wrapper only owns the
//! process boundary.

use pll_timing::core::driver;

fn main() {
    let outcome = driver::run(std::env::args());
    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);
    std::process::exit(outcome.exit_code);
}

//! Samples ten random lines and ten random ellipses and prints their
//! coordinates and first derivatives at `t = pi/4`.
//!
//! Diagnostics go to stderr; override the filter with `RUST_LOG`
//! (e.g. `RUST_LOG=curvekit=trace`).

use std::io;

use curvekit::driver::{self, DriverParams};

fn main() -> curvekit::Result<()> {
    // Default: WARN for everything, INFO for curvekit.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curvekit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    driver::run(&DriverParams::default(), &mut rand::thread_rng(), &mut out)
}

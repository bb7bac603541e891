use std::f64::consts::FRAC_PI_4;
use std::io::Write;

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::report::{CurveReport, DEFAULT_LABEL};
use crate::sampling::{random_ellipses, random_lines, SampleRange};

/// Parameters for the sample-and-report run.
#[derive(Debug, Clone)]
pub struct DriverParams {
    /// Number of curves generated per variant.
    pub count: usize,
    /// Range every scalar field is drawn from.
    pub range: SampleRange,
    /// Parameter at which every curve is evaluated.
    pub parameter: f64,
    /// Text printed for `parameter` in the report.
    pub label: String,
}

impl Default for DriverParams {
    fn default() -> Self {
        Self {
            count: 10,
            range: SampleRange::default(),
            parameter: FRAC_PI_4,
            label: DEFAULT_LABEL.to_owned(),
        }
    }
}

/// Samples `params.count` lines and ellipses and reports each collection.
///
/// Lines are written first, then ellipses, each under its own header.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run<R, W>(params: &DriverParams, rng: &mut R, out: &mut W) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    info!(
        count = params.count,
        min = params.range.min(),
        max = params.range.max(),
        t = params.parameter,
        "generating curves"
    );

    let report = CurveReport::new(params.parameter).with_label(params.label.as_str());

    let lines = random_lines(rng, &params.range, params.count);
    report.write(out, &lines)?;

    let ellipses = random_ellipses(rng, &params.range, params.count);
    report.write(out, &ellipses)?;

    out.flush()?;
    Ok(())
}

//! Plain-text reports of curve values at a fixed parameter.
//!
//! ```text
//! Line :
//! origin point: x =  1.00, y =  2.00, z =  3.00
//! direction vector: x =  0.50, y = -1.00, z =  0.00
//! coordinates at pi/4: x =  1.39, y =  1.21, z =  3.00
//! first derivative at pi/4: x =  0.50, y = -1.00, z =  0.00
//!
//! ```

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::{AnyCurve, Curve, CurveKind};

/// Label used for the default parameter `t = pi/4`.
pub const DEFAULT_LABEL: &str = "pi/4";

/// Formats a value with two decimals and a leading space in place of a
/// plus sign, so positive and negative values line up.
#[derive(Debug, Clone, Copy)]
struct Signed(f64);

impl fmt::Display for Signed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_sign_negative() {
            write!(f, "{:.2}", self.0)
        } else {
            write!(f, " {:.2}", self.0)
        }
    }
}

/// `x = .., y = .., z = ..` triple.
#[derive(Debug, Clone, Copy)]
struct Xyz(f64, f64, f64);

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x = {}, y = {}, z = {}",
            Signed(self.0),
            Signed(self.1),
            Signed(self.2)
        )
    }
}

/// Writes the defining fields, position and derivative of curves at one
/// parameter value.
#[derive(Debug, Clone)]
pub struct CurveReport {
    t: f64,
    label: String,
}

impl CurveReport {
    /// Creates a report at parameter `t`, labelled `pi/4`.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self {
            t,
            label: DEFAULT_LABEL.to_owned(),
        }
    }

    /// Replaces the label printed for the parameter.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns the evaluation parameter.
    #[must_use]
    pub fn parameter(&self) -> f64 {
        self.t
    }

    /// Returns the parameter label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Writes the report for `curves` to `out`.
    ///
    /// A `&[Line]` or `&[Ellipse]` keeps the sequence to one variant;
    /// `&[AnyCurve]` may mix them. A header naming the variant is written
    /// before the first curve and whenever the variant changes. An empty
    /// slice writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write<W, C>(&self, out: &mut W, curves: &[C]) -> Result<()>
    where
        W: Write + ?Sized,
        C: Clone + Into<AnyCurve>,
    {
        if curves.is_empty() {
            trace!("empty curve sequence, nothing to report");
            return Ok(());
        }
        debug!(count = curves.len(), t = self.t, "writing curve report");

        let mut previous: Option<CurveKind> = None;
        for curve in curves {
            let curve: AnyCurve = curve.clone().into();
            let kind = curve.kind();
            if previous != Some(kind) {
                writeln!(out, "{kind} :")?;
                previous = Some(kind);
            }
            self.write_curve(out, &curve)?;
        }
        Ok(())
    }

    fn write_curve<W: Write + ?Sized>(&self, out: &mut W, curve: &AnyCurve) -> io::Result<()> {
        match curve {
            AnyCurve::Line(line) => {
                let o = line.origin();
                let d = line.direction();
                writeln!(out, "origin point: {}", Xyz(o.x, o.y, o.z))?;
                writeln!(out, "direction vector: {}", Xyz(d.x, d.y, d.z))?;
            }
            AnyCurve::Ellipse(ellipse) => {
                writeln!(out, "radius along the x-axis: {}", Signed(ellipse.radius_x()))?;
                writeln!(out, "radius along the y-axis: {}", Signed(ellipse.radius_y()))?;
            }
        }

        let p = curve.position(self.t);
        let d = curve.derivative(self.t);
        writeln!(out, "coordinates at {}: {}", self.label, Xyz(p.x, p.y, p.z))?;
        writeln!(out, "first derivative at {}: {}", self.label, Xyz(d.x, d.y, d.z))?;
        writeln!(out)
    }
}

impl Default for CurveReport {
    fn default() -> Self {
        Self::new(std::f64::consts::FRAC_PI_4)
    }
}

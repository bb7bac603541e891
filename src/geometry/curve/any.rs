use std::fmt;

use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain, Ellipse, Line};

/// Discriminant of an [`AnyCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Line,
    Ellipse,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => f.write_str("Line"),
            Self::Ellipse => f.write_str("Ellipse"),
        }
    }
}

/// The closed set of supported curve variants.
///
/// Used wherever curves of different kinds share one sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyCurve {
    Line(Line),
    Ellipse(Ellipse),
}

impl AnyCurve {
    /// Returns the variant tag of this curve.
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        match self {
            Self::Line(_) => CurveKind::Line,
            Self::Ellipse(_) => CurveKind::Ellipse,
        }
    }
}

impl From<Line> for AnyCurve {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Ellipse> for AnyCurve {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}

impl Curve for AnyCurve {
    fn position(&self, t: f64) -> Point3 {
        match self {
            Self::Line(c) => c.position(t),
            Self::Ellipse(c) => c.position(t),
        }
    }

    fn derivative(&self, t: f64) -> Vector3 {
        match self {
            Self::Line(c) => c.derivative(t),
            Self::Ellipse(c) => c.derivative(t),
        }
    }

    fn domain(&self) -> CurveDomain {
        match self {
            Self::Line(c) => c.domain(),
            Self::Ellipse(c) => c.domain(),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Self::Line(c) => c.is_closed(),
            Self::Ellipse(c) => c.is_closed(),
        }
    }
}

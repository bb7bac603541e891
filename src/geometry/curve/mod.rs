mod any;
mod ellipse;
mod line;

pub use any::{AnyCurve, CurveKind};
pub use ellipse::Ellipse;
pub use line::Line;

use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns whether both ends of the domain are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.t_min.is_finite() && self.t_max.is_finite()
    }
}

/// Trait for parametric curves in 3D space.
///
/// Evaluation is total: every real `t` yields a value, including
/// parameters outside [`Curve::domain`].
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn position(&self, t: f64) -> Point3;

    /// Computes the first derivative `dC/dt` at parameter `t`.
    ///
    /// Unlike a unit tangent this is not normalized.
    fn derivative(&self, t: f64) -> Vector3;

    /// Returns the natural parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}

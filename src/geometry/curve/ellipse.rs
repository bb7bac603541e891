use std::f64::consts::TAU;

use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain};

/// An axis-aligned ellipse in the XY plane, centered at the origin.
///
/// `P(t) = (radius_x * sin(t), radius_y * cos(t), 0)`
///
/// The parameter starts on the +Y axis at `t = 0` and runs clockwise
/// towards +X. Radii are stored as given; zero or negative radii are not
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    /// Creates a new ellipse from its radii along the X and Y axes.
    #[must_use]
    pub fn new(radius_x: f64, radius_y: f64) -> Self {
        Self { radius_x, radius_y }
    }

    /// Returns the radius along the x-axis.
    #[must_use]
    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    /// Returns the radius along the y-axis.
    #[must_use]
    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }
}

impl Curve for Ellipse {
    fn position(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        Point3::new(self.radius_x * sin, self.radius_y * cos, 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        let (sin, cos) = t.sin_cos();
        Vector3::new(-self.radius_x * cos, self.radius_y * sin, 0.0)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

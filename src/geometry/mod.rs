pub mod curve;

pub use curve::{AnyCurve, Curve, CurveDomain, CurveKind, Ellipse, Line};

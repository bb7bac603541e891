//! Property-based tests for curve evaluation using the `proptest` crate.

use std::f64::consts::TAU;

use proptest::prelude::*;

use curvekit::geometry::{AnyCurve, Curve, Ellipse, Line};
use curvekit::math::{Point3, Vector3};
use curvekit::report::CurveReport;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary 3D coordinate tuple in a reasonable floating-point range.
fn arb_xyz() -> impl Strategy<Value = (f64, f64, f64)> {
    (-100.0f64..100.0, -100.0f64..100.0, -100.0f64..100.0)
}

/// Arbitrary curve parameter.
fn arb_t() -> impl Strategy<Value = f64> {
    -50.0f64..50.0
}

/// Arbitrary non-zero radius, either sign.
fn arb_radius() -> impl Strategy<Value = f64> {
    prop_oneof![-10.0f64..-0.1, 0.1f64..10.0]
}

const TOL: f64 = 1e-9;
const STEP: f64 = 1e-5;

fn central_difference<C: Curve>(curve: &C, t: f64) -> Vector3 {
    (curve.position(t + STEP) - curve.position(t - STEP)) / (2.0 * STEP)
}

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn line_derivative_is_direction(
        (ox, oy, oz) in arb_xyz(),
        (dx, dy, dz) in arb_xyz(),
        t in arb_t(),
    ) {
        let line = Line::new(Point3::new(ox, oy, oz), Vector3::new(dx, dy, dz));
        prop_assert_eq!(line.derivative(t), Vector3::new(dx, dy, dz));
    }

    #[test]
    fn line_position_matches_formula(
        (ox, oy, oz) in arb_xyz(),
        (dx, dy, dz) in arb_xyz(),
        t in arb_t(),
    ) {
        let line = Line::new(Point3::new(ox, oy, oz), Vector3::new(dx, dy, dz));
        let p = line.position(t);
        prop_assert!((p.x - (ox + dx * t)).abs() < TOL);
        prop_assert!((p.y - (oy + dy * t)).abs() < TOL);
        prop_assert!((p.z - (oz + dz * t)).abs() < TOL);
    }
}

// ---------------------------------------------------------------------------
// Ellipse
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn ellipse_point_lies_on_boundary(
        rx in arb_radius(),
        ry in arb_radius(),
        t in arb_t(),
    ) {
        let p = Ellipse::new(rx, ry).position(t);
        let lhs = (p.x / rx).powi(2) + (p.y / ry).powi(2);
        prop_assert!((lhs - 1.0).abs() < 1e-6, "(x/rx)^2 + (y/ry)^2 = {}", lhs);
        prop_assert_eq!(p.z, 0.0);
    }

    #[test]
    fn ellipse_derivative_matches_finite_difference(
        rx in arb_radius(),
        ry in arb_radius(),
        t in arb_t(),
    ) {
        let e = Ellipse::new(rx, ry);
        let approx = central_difference(&e, t);
        let exact = e.derivative(t);
        prop_assert!((approx - exact).norm() < 1e-3,
            "finite difference {:?} vs derivative {:?}", approx, exact);
    }

    #[test]
    fn ellipse_is_periodic(
        rx in arb_radius(),
        ry in arb_radius(),
        t in arb_t(),
    ) {
        let e = Ellipse::new(rx, ry);
        prop_assert!((e.position(t) - e.position(t + TAU)).norm() < 1e-6);
    }

    #[test]
    fn any_curve_agrees_with_line(
        (ox, oy, oz) in arb_xyz(),
        (dx, dy, dz) in arb_xyz(),
        t in arb_t(),
    ) {
        let line = Line::new(Point3::new(ox, oy, oz), Vector3::new(dx, dy, dz));
        let any = AnyCurve::from(line);
        prop_assert_eq!(any.position(t), line.position(t));
        let approx = central_difference(&any, t);
        prop_assert!((approx - any.derivative(t)).norm() < 1e-3);
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn line_scenario() {
    let line = Line::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
    assert!((line.position(2.0) - Point3::new(2.0, 0.0, 0.0)).norm() < TOL);
    assert!((line.derivative(2.0) - Vector3::new(1.0, 0.0, 0.0)).norm() < TOL);
}

#[test]
fn ellipse_scenarios() {
    let e = Ellipse::new(2.0, 3.0);
    assert!((e.position(0.0) - Point3::new(0.0, 3.0, 0.0)).norm() < TOL);
    assert!((e.derivative(0.0) - Vector3::new(-2.0, 0.0, 0.0)).norm() < TOL);

    let unit = Ellipse::new(1.0, 1.0);
    let p = unit.position(std::f64::consts::FRAC_PI_2);
    assert!((p - Point3::new(1.0, 0.0, 0.0)).norm() < TOL);
}

#[test]
fn reporter_on_empty_sequence_writes_nothing() {
    let mut buf = Vec::new();
    let curves: Vec<AnyCurve> = Vec::new();
    assert!(CurveReport::default().write(&mut buf, &curves).is_ok());
    assert!(buf.is_empty());
}

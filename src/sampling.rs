//! Random construction of curves.
//!
//! Curves accept any float, so range checks live here rather than in the
//! curve constructors. The random source is always supplied by the caller.

use rand::Rng;
use tracing::trace;

use crate::error::{Result, SamplingError};
use crate::geometry::{Ellipse, Line};
use crate::math::{Point3, Vector3};

/// Closed interval `[min, max]` sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    min: f64,
    max: f64,
}

impl SampleRange {
    /// Creates a new sampling range.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not finite or `min >= max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(SamplingError::InvalidRange { min, max }.into());
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns whether `value` lies inside the range (bounds included).
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Draws one value uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 10.0,
        }
    }
}

/// Draws a point with every coordinate sampled from `range`.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, range: &SampleRange) -> Point3 {
    Point3::new(range.sample(rng), range.sample(rng), range.sample(rng))
}

/// Draws a vector with every component sampled from `range`.
pub fn random_vector<R: Rng + ?Sized>(rng: &mut R, range: &SampleRange) -> Vector3 {
    Vector3::new(range.sample(rng), range.sample(rng), range.sample(rng))
}

/// Draws a line with a random origin and direction.
pub fn random_line<R: Rng + ?Sized>(rng: &mut R, range: &SampleRange) -> Line {
    let origin = random_point(rng, range);
    let direction = random_vector(rng, range);
    Line::new(origin, direction)
}

/// Draws an ellipse with random radii.
pub fn random_ellipse<R: Rng + ?Sized>(rng: &mut R, range: &SampleRange) -> Ellipse {
    let radius_x = range.sample(rng);
    let radius_y = range.sample(rng);
    Ellipse::new(radius_x, radius_y)
}

/// Draws `count` random lines.
pub fn random_lines<R: Rng + ?Sized>(rng: &mut R, range: &SampleRange, count: usize) -> Vec<Line> {
    trace!(count, min = range.min, max = range.max, "sampling lines");
    (0..count).map(|_| random_line(rng, range)).collect()
}

/// Draws `count` random ellipses.
pub fn random_ellipses<R: Rng + ?Sized>(
    rng: &mut R,
    range: &SampleRange,
    count: usize,
) -> Vec<Ellipse> {
    trace!(count, min = range.min, max = range.max, "sampling ellipses");
    (0..count).map(|_| random_ellipse(rng, range)).collect()
}

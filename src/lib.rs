pub mod driver;
pub mod error;
pub mod geometry;
pub mod math;
pub mod report;
pub mod sampling;

pub use error::{CurveError, Result};

//! The multi-line, human-readable description of a vector.
use std::fmt;

use crate::*;

const DEFAULT_PRECISION: usize = 3;

/// Formats a [Vector2D] as a report like this one, for `Vector2D::new(3.0, 4.0)`:
///
/// ```text
/// Vector Data
/// v = <3, 4>
/// v = (0, 0) to (3, 4)
/// ||v|| = 5.000
/// Standard Direction:
///     53.130°
/// Quadrant-Bearing Direction:
///     5.000[N36.870°E]
/// ```
///
/// The direction lines are indented with a tab, and both read `N/A` for a vector without a direction.
#[derive(Copy, Clone, Debug)]
pub struct Report<'a> {
    vector: &'a Vector2D,
    precision: usize,
}

impl<'a> Report<'a> {
    pub(crate) fn new(vector: &'a Vector2D) -> Report<'a> {
        Report {
            vector,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Set the number of decimal places used for the magnitude and the angles.
    #[must_use = "This returns a new report rather than changing this one"]
    pub fn with_precision(self, precision: usize) -> Report<'a> {
        Report { precision, ..self }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.vector;
        let p = self.precision;
        let (x1, y1) = v.tail();
        let (x2, y2) = v.head();

        writeln!(f, "Vector Data")?;
        writeln!(f, "v = <{}, {}>", v.x(), v.y())?;
        writeln!(f, "v = ({}, {}) to ({}, {})", x1, y1, x2, y2)?;
        writeln!(f, "||v|| = {:.*}", p, v.magnitude())?;

        match v.bearing() {
            Ok(bearing) => {
                writeln!(f, "Standard Direction:\n\t{:.*}°", p, v.standard_angle())?;
                writeln!(
                    f,
                    "Quadrant-Bearing Direction:\n\t{:.*}[{:.*}]",
                    p,
                    v.magnitude(),
                    p,
                    bearing
                )
            }
            Err(_) => {
                writeln!(f, "Standard Direction:\n\tN/A")?;
                writeln!(f, "Quadrant-Bearing Direction:\n\tN/A")
            }
        }
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.report(), f)
    }
}

//! The 2-dimensional displacement vector and its derived quantities.
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::*;

/// The unit vector along +x.
pub const I: Vector2D = Vector2D::basis(1.0, 0.0, 0.0, Bearing::EAST);

/// The unit vector along +y.
pub const J: Vector2D = Vector2D::basis(0.0, 1.0, 90.0, Bearing::NORTH);

/// A displacement in the plane, together with the two points it spans.
///
/// Everything is computed at construction; there are no setters, and arithmetic returns new vectors.  The zero
/// vector has no direction: its standard angle reads as 0 and its quadrant angle as 90, but [Vector2D::bearing],
/// [Vector2D::hat] and [Vector2D::angle_between] fail with [VectorError::Degenerate].  Vectors with a NaN or infinite
/// component have no direction either, and those calls fail with [VectorError::NonFinite].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector2D {
    x: f64,
    y: f64,

    /// Tail.
    x1: f64,
    y1: f64,

    /// Head.
    x2: f64,
    y2: f64,

    magnitude: f64,

    /// Degrees in `[0, 360)`.
    standard_angle: f64,

    /// `None` if the vector is degenerate or non-finite.
    bearing: Option<Bearing>,
}

/// Standard angle of `(x, y)` in degrees, with the axes handled exactly rather than through `atan2`.
fn standard_angle_of(x: f64, y: f64) -> f64 {
    let raw = if x == 0.0 {
        if y > 0.0 {
            90.0
        } else if y < 0.0 {
            270.0
        } else {
            0.0
        }
    } else if y == 0.0 {
        if x > 0.0 {
            0.0
        } else {
            180.0
        }
    } else {
        y.atan2(x).to_degrees()
    };

    normalize_degrees(raw)
}

/// Inverse cosine in degrees.
///
/// Rounding can push the cosine of (anti)parallel vectors just past 1, so the input is clamped first.
fn acos_degrees(cos: f64) -> f64 {
    let clamped = cos.clamp(-1.0, 1.0);
    if clamped != cos {
        log::trace!("Clamping cosine {} into [-1, 1]", cos);
    }
    clamped.acos().to_degrees()
}

impl Vector2D {
    const fn basis(x: f64, y: f64, standard_angle: f64, bearing: Bearing) -> Vector2D {
        Vector2D {
            x,
            y,
            x1: 0.0,
            y1: 0.0,
            x2: x,
            y2: y,
            magnitude: 1.0,
            standard_angle,
            bearing: Some(bearing),
        }
    }

    /// The zero vector, with its tail and head at the origin.
    pub const fn zero() -> Vector2D {
        Vector2D {
            x: 0.0,
            y: 0.0,
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 0.0,
            magnitude: 0.0,
            standard_angle: 0.0,
            bearing: None,
        }
    }

    /// Build a vector from its components.  The tail is the origin.
    pub fn new(x: f64, y: f64) -> Vector2D {
        Vector2D::from_points(0.0, 0.0, x, y)
    }

    /// Build the vector from `(x1, y1)` to `(x2, y2)`.
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Vector2D {
        let x = x2 - x1;
        let y = y2 - y1;
        let magnitude = x.hypot(y);

        let (standard_angle, bearing) = if magnitude == 0.0 {
            (0.0, None)
        } else if !(x.is_finite() && y.is_finite()) {
            (f64::NAN, None)
        } else {
            let theta = standard_angle_of(x, y);
            (theta, Bearing::from_standard_angle(theta))
        };

        Vector2D {
            x,
            y,
            x1,
            y1,
            x2,
            y2,
            magnitude,
            standard_angle,
            bearing,
        }
    }

    /// Like [Vector2D::from_points], but taking the points as pairs.
    pub fn between(tail: (f64, f64), head: (f64, f64)) -> Vector2D {
        Vector2D::from_points(tail.0, tail.1, head.0, head.1)
    }

    /// Sum a list of vectors.  The result starts at the origin; an empty list sums to the zero vector.
    pub fn sum_of(vectors: &[Vector2D]) -> Vector2D {
        vectors.iter().sum()
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn components(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn tail(&self) -> (f64, f64) {
        (self.x1, self.y1)
    }

    pub fn head(&self) -> (f64, f64) {
        (self.x2, self.y2)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Does this vector have zero length, and therefore no direction?
    pub fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }

    /// Degrees counter-clockwise from +x, in `[0, 360)`.  0 for the zero vector, NaN if a component is non-finite.
    pub fn standard_angle(&self) -> f64 {
        self.standard_angle
    }

    /// The acute angle of the quadrant bearing, in `[0, 90]`.  90 for vectors without a direction.
    pub fn quadrant_angle(&self) -> f64 {
        self.bearing.map(|b| b.angle()).unwrap_or(90.0)
    }

    /// The bearing's indicators.  Both are `None` only for vectors without a direction.
    pub fn indicators(&self) -> (Option<NorthSouth>, Option<EastWest>) {
        match self.bearing {
            Some(b) => (b.north_south(), b.east_west()),
            None => (None, None),
        }
    }

    pub fn bearing(&self) -> Result<Bearing> {
        if self.is_zero() {
            return Err(VectorError::Degenerate);
        }
        self.bearing.ok_or(VectorError::NonFinite)
    }

    /// The unit vector in the same direction, with its tail at the origin.
    pub fn hat(&self) -> Result<Vector2D> {
        if let Err(e) = self.bearing() {
            log::trace!("Unit vector requested for a vector without a direction: {}", e);
            return Err(e);
        }
        Ok(*self / self.magnitude)
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The angle between two vectors in degrees, in `[0, 180]`.
    pub fn angle_between(&self, other: &Vector2D) -> Result<f64> {
        // Unit vectors keep the dot product in range for very long or very short inputs.
        let cos = self.hat()?.dot(&other.hat()?);
        Ok(acos_degrees(cos))
    }

    /// A formatter for the human-readable report; see [Report].
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}

impl Default for Vector2D {
    fn default() -> Vector2D {
        Vector2D::zero()
    }
}

impl num::Zero for Vector2D {
    fn zero() -> Vector2D {
        Vector2D::zero()
    }

    fn is_zero(&self) -> bool {
        Vector2D::is_zero(self)
    }
}

impl std::iter::Sum for Vector2D {
    fn sum<It: Iterator<Item = Vector2D>>(iter: It) -> Vector2D {
        iter.fold(Vector2D::zero(), |acc, v| acc + v)
    }
}

impl<'a> std::iter::Sum<&'a Vector2D> for Vector2D {
    fn sum<It: Iterator<Item = &'a Vector2D>>(iter: It) -> Vector2D {
        iter.copied().sum()
    }
}

// Tolerant comparisons look only at the components, not at where the vector sits.
impl AbsDiffEq for Vector2D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Vector2D, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Vector2D, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vector2D {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Vector2D, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}

//! Quadrant bearings, the navigation form of a direction.
//!
//! A bearing such as `N30°E` is an acute angle measured from the north or south axis toward east or west.  On the
//! four axes one indicator drops away and the bearing is a plain cardinal direction.
use std::fmt;

use crate::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum NorthSouth {
    #[display(fmt = "N")]
    North,
    #[display(fmt = "S")]
    South,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum EastWest {
    #[display(fmt = "E")]
    East,
    #[display(fmt = "W")]
    West,
}

/// A direction expressed as a quadrant bearing.
///
/// At least one of the indicators is always present.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bearing {
    /// Degrees from the north/south axis, in `[0, 90]`.
    angle: f64,
    north_south: Option<NorthSouth>,
    east_west: Option<EastWest>,
}

/// Bring an angle in degrees into `[0, 360)`.
///
/// Negative zero comes out as positive zero. Non-finite input comes out as NaN.
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if a >= 360.0 {
        0.0
    } else {
        a + 0.0
    }
}

impl Bearing {
    pub const NORTH: Bearing = Bearing::cardinal(0.0, Some(NorthSouth::North), None);
    pub const EAST: Bearing = Bearing::cardinal(90.0, None, Some(EastWest::East));
    pub const SOUTH: Bearing = Bearing::cardinal(0.0, Some(NorthSouth::South), None);
    pub const WEST: Bearing = Bearing::cardinal(90.0, None, Some(EastWest::West));

    const fn cardinal(
        angle: f64,
        north_south: Option<NorthSouth>,
        east_west: Option<EastWest>,
    ) -> Bearing {
        Bearing {
            angle,
            north_south,
            east_west,
        }
    }

    /// Build a bearing such as `N30°E` from its parts.
    ///
    /// An angle of 0 collapses to the north/south axis and an angle of 90 to the east/west axis, so `N0°E` is
    /// [Bearing::NORTH] and `S90°W` is [Bearing::WEST].
    pub fn new(north_south: NorthSouth, angle: f64, east_west: EastWest) -> Result<Bearing> {
        if !(0.0..=90.0).contains(&angle) {
            return Err(VectorError::InvalidBearing(angle));
        }

        if angle == 0.0 {
            return Ok(Bearing::cardinal(0.0, Some(north_south), None));
        }

        if angle == 90.0 {
            return Ok(Bearing::cardinal(90.0, None, Some(east_west)));
        }

        Ok(Bearing {
            angle,
            north_south: Some(north_south),
            east_west: Some(east_west),
        })
    }

    /// Convert a standard angle (degrees counter-clockwise from +x) to a bearing.
    ///
    /// The angle is normalized first.  Returns `None` only for non-finite input.
    pub fn from_standard_angle(standard_angle: f64) -> Option<Bearing> {
        use EastWest::*;
        use NorthSouth::*;

        let theta = normalize_degrees(standard_angle);

        // The open intervals skip the axes, which are handled below.
        let bearing = if theta > 0.0 && theta < 90.0 {
            Bearing::cardinal(90.0 - theta, Some(North), Some(East))
        } else if theta > 90.0 && theta < 180.0 {
            Bearing::cardinal(theta - 90.0, Some(North), Some(West))
        } else if theta > 180.0 && theta < 270.0 {
            Bearing::cardinal(270.0 - theta, Some(South), Some(West))
        } else if theta > 270.0 && theta < 360.0 {
            Bearing::cardinal(theta - 270.0, Some(South), Some(East))
        } else if theta == 0.0 {
            Bearing::EAST
        } else if theta == 90.0 {
            Bearing::NORTH
        } else if theta == 180.0 {
            Bearing::WEST
        } else if theta == 270.0 {
            Bearing::SOUTH
        } else {
            return None;
        };

        Some(bearing)
    }

    /// The inverse of [Bearing::from_standard_angle].
    pub fn to_standard_angle(&self) -> f64 {
        use EastWest::*;
        use NorthSouth::*;

        let theta = match (self.north_south, self.east_west) {
            (Some(North), Some(East)) => 90.0 - self.angle,
            (Some(North), Some(West)) => 90.0 + self.angle,
            (Some(South), Some(West)) => 270.0 - self.angle,
            (Some(South), Some(East)) => 270.0 + self.angle,
            (Some(North), None) => 90.0,
            (Some(South), None) => 270.0,
            (None, Some(West)) => 180.0,
            (None, Some(East)) | (None, None) => 0.0,
        };
        normalize_degrees(theta)
    }

    /// Degrees from the north/south axis, in `[0, 90]`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn north_south(&self) -> Option<NorthSouth> {
        self.north_south
    }

    pub fn east_west(&self) -> Option<EastWest> {
        self.east_west
    }

    /// Is this bearing exactly on one of the four axes?
    pub fn is_cardinal(&self) -> bool {
        self.north_south.is_none() || self.east_west.is_none()
    }
}

/// Formats as `N36.870°E`, or as the lone indicator on an axis.
///
/// The formatter's precision applies to the angle and defaults to 3.
impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        match (self.north_south, self.east_west) {
            (Some(ns), Some(ew)) => write!(f, "{}{:.*}°{}", ns, precision, self.angle, ew),
            (Some(ns), None) => write!(f, "{}", ns),
            (None, Some(ew)) => write!(f, "{}", ew),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use proptest::prelude::*;

    #[test]
    fn quadrants() {
        let ne = Bearing::from_standard_angle(60.0).unwrap();
        assert_relative_eq!(ne.angle(), 30.0);
        assert_eq!(ne.north_south(), Some(NorthSouth::North));
        assert_eq!(ne.east_west(), Some(EastWest::East));

        let nw = Bearing::from_standard_angle(120.0).unwrap();
        assert_relative_eq!(nw.angle(), 30.0);
        assert_eq!(nw.to_string(), "N30.000°W");

        let sw = Bearing::from_standard_angle(200.0).unwrap();
        assert_relative_eq!(sw.angle(), 70.0);
        assert_eq!(sw.to_string(), "S70.000°W");

        let se = Bearing::from_standard_angle(300.0).unwrap();
        assert_relative_eq!(se.angle(), 30.0);
        assert_eq!(se.to_string(), "S30.000°E");
    }

    #[test]
    fn axes() {
        assert_eq!(Bearing::from_standard_angle(0.0), Some(Bearing::EAST));
        assert_eq!(Bearing::from_standard_angle(90.0), Some(Bearing::NORTH));
        assert_eq!(Bearing::from_standard_angle(180.0), Some(Bearing::WEST));
        assert_eq!(Bearing::from_standard_angle(270.0), Some(Bearing::SOUTH));

        assert_relative_eq!(Bearing::EAST.angle(), 90.0);
        assert_relative_eq!(Bearing::NORTH.angle(), 0.0);
        assert!(Bearing::WEST.is_cardinal());
        assert_eq!(Bearing::WEST.to_string(), "W");
        assert_eq!(Bearing::SOUTH.to_string(), "S");
    }

    #[test]
    fn normalizes_before_classifying() {
        assert_eq!(Bearing::from_standard_angle(360.0), Some(Bearing::EAST));
        assert_eq!(Bearing::from_standard_angle(-90.0), Some(Bearing::SOUTH));
        assert_eq!(Bearing::from_standard_angle(810.0), Some(Bearing::NORTH));
        assert_eq!(
            Bearing::from_standard_angle(-300.0).unwrap().to_string(),
            "N30.000°E"
        );
    }

    #[test]
    fn non_finite() {
        assert_eq!(Bearing::from_standard_angle(f64::NAN), None);
        assert_eq!(Bearing::from_standard_angle(f64::INFINITY), None);
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_degrees(-0.0).to_bits(), 0.0f64.to_bits());
        assert_relative_eq!(normalize_degrees(720.5), 0.5);
        assert_relative_eq!(normalize_degrees(-45.0), 315.0);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }

    #[test]
    fn display_precision() {
        let b = Bearing::new(NorthSouth::North, 12.3456, EastWest::West).unwrap();
        assert_eq!(format!("{:.1}", b), "N12.3°W");
        assert_eq!(format!("{}", b), "N12.346°W");
    }

    #[test]
    fn new_collapses_axes() -> Result<()> {
        assert_eq!(
            Bearing::new(NorthSouth::North, 0.0, EastWest::East)?,
            Bearing::NORTH
        );
        assert_eq!(
            Bearing::new(NorthSouth::South, 90.0, EastWest::West)?,
            Bearing::WEST
        );
        assert!(matches!(
            Bearing::new(NorthSouth::South, 90.5, EastWest::West),
            Err(VectorError::InvalidBearing(_))
        ));
        assert!(Bearing::new(NorthSouth::South, -1.0, EastWest::West).is_err());
        Ok(())
    }

    #[test]
    fn axis_round_trip() {
        for theta in [0.0, 90.0, 180.0, 270.0] {
            let b = Bearing::from_standard_angle(theta).unwrap();
            assert_eq!(b.to_standard_angle(), theta);
        }
    }

    proptest! {
        #[test]
        fn standard_angle_round_trip(theta in 0.0..360.0f64) {
            let b = Bearing::from_standard_angle(theta).unwrap();
            prop_assert!((0.0..=90.0).contains(&b.angle()));
            prop_assert!(b.north_south().is_some() || b.east_west().is_some());
            prop_assert!(abs_diff_eq!(b.to_standard_angle(), theta, epsilon = 1e-9));
        }

        #[test]
        fn bearing_round_trip(
            ns in any::<NorthSouth>(),
            ew in any::<EastWest>(),
            angle in 0.001..89.999f64,
        ) {
            let b = Bearing::new(ns, angle, ew).unwrap();
            let back = Bearing::from_standard_angle(b.to_standard_angle()).unwrap();
            prop_assert_eq!(back.north_south(), Some(ns));
            prop_assert_eq!(back.east_west(), Some(ew));
            prop_assert!(abs_diff_eq!(back.angle(), angle, epsilon = 1e-9));
        }
    }
}

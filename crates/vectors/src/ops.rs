//! Arithmetic on [Vector2D].
//!
//! Every result is rebuilt through [Vector2D::new], so it starts at the origin and has freshly derived angles.
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::*;

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        self * -1.0
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        self + -rhs
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        *self = *self - rhs;
    }
}

/// The dot product.
impl Mul for Vector2D {
    type Output = f64;

    fn mul(self, rhs: Vector2D) -> f64 {
        self.dot(&rhs)
    }
}

macro_rules! scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Mul<$t> for Vector2D {
                type Output = Vector2D;

                fn mul(self, rhs: $t) -> Vector2D {
                    let s = f64::from(rhs);
                    Vector2D::new(self.x() * s, self.y() * s)
                }
            }

            impl Mul<Vector2D> for $t {
                type Output = Vector2D;

                fn mul(self, rhs: Vector2D) -> Vector2D {
                    rhs * self
                }
            }
        )*
    };
}

scalar_ops!(f64, i32);

impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x() / rhs, self.y() / rhs)
    }
}

//! Arithmetic operators for [`Angle`].
//!
//! Everything works on the raw measure; nothing is normalized along the way.

use core::ops::*;

use crate::Angle;

/// Angle + Angle → Angle
impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() + rhs.radians())
    }
}

/// Angle + radians → Angle
impl Add<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: f64) -> Self {
        Angle::from_radians(self.radians() + rhs)
    }
}

/// radians + Angle → Angle
impl Add<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        rhs + self
    }
}

/// Angle - Angle → Angle
impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() - rhs.radians())
    }
}

/// Angle - radians → Angle
impl Sub<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Angle::from_radians(self.radians() - rhs)
    }
}

/// radians - Angle → Angle
impl Sub<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self - rhs.radians())
    }
}

/// Angle * scalar → Angle
impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: f64) -> Self {
        Angle::from_radians(self.radians() * k)
    }
}

/// scalar * Angle → Angle
impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

/// Angle / scalar → Angle
///
/// # Panics
///
/// Panics when `k` is zero, the same way integer division does. Use [`Angle::checked_div`] to
/// get an [`AngleError::DivisionByZero`](crate::AngleError::DivisionByZero) instead.
impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, k: f64) -> Self {
        match self.checked_div(k) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{e}"),
        }
    }
}

impl AddAssign<f64> for Angle {
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl SubAssign<f64> for Angle {
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Angle {
    fn mul_assign(&mut self, k: f64) {
        *self = *self * k;
    }
}

/// # Panics
///
/// Panics when `k` is zero, like [`Div`].
impl DivAssign<f64> for Angle {
    fn div_assign(&mut self, k: f64) {
        *self = *self / k;
    }
}

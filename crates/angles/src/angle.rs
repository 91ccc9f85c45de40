use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::{Display, Formatter};

use approx::AbsDiffEq;

use crate::error::{AngleError, Result};
use crate::tolerance::{circular_distance, wrap_to_full_turn};

pub const FULL_TURN: Angle = Angle(TAU);
pub const HALF_TURN: Angle = Angle(PI);
pub const QUARTER_TURN: Angle = Angle(FRAC_PI_2);

/// Absolute tolerance, in radians, used whenever two angles are compared for equality.
pub const ANGLE_TOLERANCE: f64 = 1e-10;
pub const RADIANS_PER_DEGREE: f64 = PI / 180.0;
pub const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

/// A direction on the circle.
///
/// The raw radian measure is kept as given (negative or past a full turn is fine) and is only
/// reduced into `[0, 2π)` when the canonical view is asked for. Arithmetic works on the raw
/// measure.
///
/// Equality is tolerant (see [`ANGLE_TOLERANCE`]) and is taken around the circle, so `0°`,
/// `360°` and `-720°` all compare equal. Ordering compares the normalized values directly and
/// without tolerance, which means two angles can be `==` and `<` at the same time:
///
/// ```
/// use angles::Angle;
/// let a = Angle::from_radians(1.0);
/// let b = Angle::from_radians(1.0 + 1e-12);
/// assert!(a == b);
/// assert!(a < b);
/// ```
///
/// Non-finite measures are stored as they are. Their normalized value is NaN and they are never
/// equal to anything, themselves included. Use [`Angle::try_from_radians`] to reject them.
#[derive(
    Default, Debug, Copy, Clone, derive_more::Neg, derive_more::AddAssign, derive_more::SubAssign,
)]
pub struct Angle(f64);

impl Angle {
    pub fn from_radians(x: f64) -> Self {
        if !x.is_finite() {
            log::warn!("angle constructed from non-finite measure {x}");
        }
        Self(x)
    }
    pub fn from_degrees(x: f64) -> Self {
        Self::from_radians(x * RADIANS_PER_DEGREE)
    }
    pub fn from_turns(x: f64) -> Self {
        Self::from_radians(x * TAU)
    }
    pub fn try_from_radians(x: f64) -> Result<Self> {
        if x.is_finite() {
            Ok(Self(x))
        } else {
            Err(AngleError::NonFinite { value: x })
        }
    }
    pub fn try_from_degrees(x: f64) -> Result<Self> {
        Self::try_from_radians(x * RADIANS_PER_DEGREE)
    }

    /// Raw measure, not normalized.
    pub fn radians(&self) -> f64 {
        self.0
    }
    /// Canonical measure in degrees, always in `[0, 360)`.
    pub fn degrees(&self) -> f64 {
        let degrees = self.normalized_radians() * DEGREES_PER_RADIAN;
        if degrees >= 360.0 {
            0.0
        } else {
            degrees
        }
    }
    pub fn turns(&self) -> f64 {
        self.0 / TAU
    }
    pub fn normalized_radians(&self) -> f64 {
        wrap_to_full_turn(self.0)
    }
    pub fn normalized(&self) -> Self {
        Self(self.normalized_radians())
    }
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Whole degrees of the canonical value, truncated toward zero.
    ///
    /// This is the integer conversion contract: `150.7°` gives `150`, `-30°` gives `330`.
    pub fn truncated_degrees(&self) -> i64 {
        self.degrees().trunc() as i64
    }

    pub fn checked_div(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(AngleError::DivisionByZero { dividend: self });
        }
        Ok(Self::from_radians(self.0 / divisor))
    }

    /// Counter-clockwise sweep from `self` to `other`, in `[0, 2π)`.
    pub fn ccw_distance_to(&self, other: Self) -> Self {
        (other - *self).normalized()
    }
}

impl num::Zero for Angle {
    fn zero() -> Self {
        Self(0.0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl AbsDiffEq for Angle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        ANGLE_TOLERANCE
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        circular_distance(self.0, other.0) <= epsilon
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, ANGLE_TOLERANCE)
    }
}

impl PartialEq<f64> for Angle {
    fn eq(&self, other: &f64) -> bool {
        *self == Angle::from_radians(*other)
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.normalized_radians()
            .partial_cmp(&other.normalized_radians())
    }
}

impl PartialOrd<f64> for Angle {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.partial_cmp(&Angle::from_radians(*other))
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Self::from_radians(radians)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.radians()
    }
}

impl From<Angle> for i64 {
    fn from(angle: Angle) -> Self {
        angle.truncated_degrees()
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "{:.4} rad ≈ {:.1}°", self.radians(), self.degrees())
        } else {
            write!(f, "{:.6} rad", self.radians())
        }
    }
}

pub fn deg(x: f64) -> Angle {
    Angle::from_degrees(x)
}

//! Float helpers shared by everything that compares angles or arc bounds.

use std::f64::consts::TAU;

use crate::ANGLE_TOLERANCE;

/// Reduces a radian measure into `[0, 2π)`.
pub fn wrap_to_full_turn(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    // anything within tolerance of a full turn (rem_euclid can even return TAU itself) is 0
    if TAU - wrapped <= ANGLE_TOLERANCE {
        0.0
    } else {
        wrapped
    }
}

/// Shortest distance between two measures once both are placed on the circle.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (wrap_to_full_turn(a) - wrap_to_full_turn(b)).abs();
    d.min(TAU - d)
}

/// Linear (not circular) tolerant equality of two radian values.
pub fn about_eq(a: f64, b: f64) -> bool {
    approx::abs_diff_eq!(a, b, epsilon = ANGLE_TOLERANCE)
}

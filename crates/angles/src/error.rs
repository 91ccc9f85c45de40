use thiserror::Error;

use crate::Angle;

pub type Result<T> = std::result::Result<T, AngleError>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AngleError {
    #[error("cannot divide {dividend} by zero")]
    DivisionByZero { dividend: Angle },
    #[error("angle measure must be finite, got {value}")]
    NonFinite { value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages() {
        let err = AngleError::DivisionByZero {
            dividend: Angle::from_radians(1.5),
        };
        assert_eq!(err.to_string(), "cannot divide 1.500000 rad by zero");
        let err = AngleError::NonFinite { value: f64::NAN };
        assert_eq!(err.to_string(), "angle measure must be finite, got NaN");
    }
}

mod angle;
pub use angle::*;

mod ops;

pub mod error;
pub use error::{AngleError, Result};

pub mod tolerance;

#[cfg(feature = "serde")]
mod serde_;

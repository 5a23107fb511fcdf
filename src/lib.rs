pub mod error;
pub mod frame;
pub mod geometry;
pub mod math;

pub use error::{KinaxisError, Result};

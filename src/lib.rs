pub mod error;
pub mod io;
pub mod physics;
pub mod sweep;
pub mod units;
pub mod vehicle;

pub use error::{AeroError, Result};

// Flat paths for the common entry points
pub mod atmosphere {
    pub use crate::physics::atmosphere::*;
}

pub mod kinematics {
    pub use crate::physics::kinematics::*;
}

pub mod aerodynamics;
pub mod atmosphere;
pub mod kinematics;

pub use atmosphere::{atmosphere, density, Atmo, LayerKind};

pub mod aircraft;
pub mod ascent;
pub mod band;
pub mod presets;

pub use aircraft::{Aircraft, AircraftBuilder};
pub use ascent::AscentProfile;
pub use band::{AltitudeBand, SpeedMarker};

use serde::{Deserialize, Serialize};

use crate::sweep::Sweep;

/// Reference speed drawn as a vertical marker on a thrust chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedMarker {
    pub label: String,
    pub speed_kt: f64,
    pub thrust_range: (f64, f64), // lb, extent of the marker line
}

/// One altitude at which thrust curves are evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AltitudeBand {
    pub name: String,
    pub density: f64,  // slug/ft^3
    pub airspeed: Sweep, // knots
    pub marker: Option<SpeedMarker>,
}

impl AltitudeBand {
    pub fn new(name: impl Into<String>, density: f64, airspeed: Sweep) -> Self {
        Self { name: name.into(), density, airspeed, marker: None }
    }

    pub fn with_marker(mut self, label: impl Into<String>, speed_kt: f64, thrust_range: (f64, f64)) -> Self {
        self.marker = Some(SpeedMarker { label: label.into(), speed_kt, thrust_range });
        self
    }
}

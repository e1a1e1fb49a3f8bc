use serde::{Deserialize, Serialize};

use crate::physics::aerodynamics;

// ---------------------------------------------------------------------------
// Aircraft definition (fixed configuration, parabolic drag polar)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub name: String,
    pub weight: f64,                 // lb
    pub wing_area: f64,              // ft^2
    pub span: f64,                   // ft
    pub cd0: f64,                    // zero-lift drag coefficient
    pub oswald: f64,                 // span efficiency e
    pub rated_thrust: f64,           // lb, all engines, sea level
    pub usable_thrust_fraction: f64, // share of rated thrust available in flight
    pub sea_level_density: f64,      // slug/ft^3, reference for thrust lapse
}

impl Aircraft {
    pub fn aspect_ratio(&self) -> f64 {
        aerodynamics::aspect_ratio(self.span, self.wing_area)
    }

    /// Induced-drag factor k.
    pub fn k(&self) -> f64 {
        aerodynamics::induced_drag_factor(self.oswald, self.aspect_ratio())
    }

    /// Thrust required (lb) at `speed` ft/s.
    pub fn thrust_required(&self, density: f64, speed: f64) -> f64 {
        aerodynamics::thrust_required(
            density,
            speed,
            self.wing_area,
            self.cd0,
            self.k(),
            self.weight,
        )
    }

    /// Thrust available (lb) at `density`.
    pub fn thrust_available(&self, density: f64) -> f64 {
        aerodynamics::thrust_available(
            density,
            self.usable_thrust_fraction,
            self.rated_thrust,
            self.sea_level_density,
        )
    }

    /// Minimum-drag speed, ft/s.
    pub fn min_drag_speed(&self, density: f64) -> f64 {
        aerodynamics::min_drag_speed(density, self.wing_area, self.cd0, self.k(), self.weight)
    }
}

// ---------------------------------------------------------------------------
// Aircraft builder
// ---------------------------------------------------------------------------

pub struct AircraftBuilder {
    name: String,
    weight: f64,
    wing_area: f64,
    span: f64,
    cd0: f64,
    oswald: f64,
    rated_thrust: f64,
    usable_thrust_fraction: f64,
    sea_level_density: f64,
}

impl AircraftBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: 10_000.0,
            wing_area: 200.0,
            span: 36.0,
            cd0: 0.025,
            oswald: 0.8,
            rated_thrust: 3_000.0,
            usable_thrust_fraction: 1.0,
            sea_level_density: 23.77e-4,
        }
    }

    pub fn weight(mut self, v: f64) -> Self { self.weight = v; self }
    pub fn wing_area(mut self, v: f64) -> Self { self.wing_area = v; self }
    pub fn span(mut self, v: f64) -> Self { self.span = v; self }
    pub fn cd0(mut self, v: f64) -> Self { self.cd0 = v; self }
    pub fn oswald(mut self, v: f64) -> Self { self.oswald = v; self }
    pub fn rated_thrust(mut self, v: f64) -> Self { self.rated_thrust = v; self }
    pub fn usable_thrust_fraction(mut self, v: f64) -> Self { self.usable_thrust_fraction = v; self }
    pub fn sea_level_density(mut self, v: f64) -> Self { self.sea_level_density = v; self }

    pub fn build(self) -> Aircraft {
        Aircraft {
            name: self.name,
            weight: self.weight,
            wing_area: self.wing_area,
            span: self.span,
            cd0: self.cd0,
            oswald: self.oswald,
            rated_thrust: self.rated_thrust,
            usable_thrust_fraction: self.usable_thrust_fraction,
            sea_level_density: self.sea_level_density,
        }
    }
}

use crate::sweep::Sweep;

use super::aircraft::{Aircraft, AircraftBuilder};
use super::ascent::AscentProfile;
use super::band::AltitudeBand;

pub const SEA_LEVEL_DENSITY: f64 = 23.77e-4; // slug/ft^3
pub const FL100_DENSITY: f64 = 17.56e-4;
pub const FL350_DENSITY: f64 = 7.38e-4;

/// A321-class twinjet at 200 000 lb.
pub fn a321() -> Aircraft {
    AircraftBuilder::new("A321")
        .weight(200_000.0)
        .wing_area(1318.0)
        .span(117.416_666_667)
        .cd0(0.0185)
        .oswald(0.92)
        .rated_thrust(66_000.0)
        .usable_thrust_fraction(0.7)
        .sea_level_density(SEA_LEVEL_DENSITY)
        .build()
}

/// Three vertical-ascent accelerations: 51.76, 32.2 and 20 ft/s^2.
pub fn ascent_profiles() -> Vec<AscentProfile> {
    vec![
        AscentProfile::new(51.76),
        AscentProfile::new(32.2),
        AscentProfile::new(20.0),
    ]
}

/// Elapsed time from launch, s.
pub fn ascent_time() -> Sweep {
    Sweep::new(0.0, 550.0, 0.5)
}

/// Sea level, FL100 and FL350 with their take-off / cruise speed markers.
pub fn altitude_bands() -> Vec<AltitudeBand> {
    vec![
        AltitudeBand::new("Sea Level", SEA_LEVEL_DENSITY, Sweep::new(80.0, 750.0, 10.0))
            .with_marker("Takeoff Velocity", 180.0, (11_000.0, 46_500.0)),
        AltitudeBand::new("FL100", FL100_DENSITY, Sweep::new(110.0, 745.0, 10.0))
            .with_marker("Cruise Velocity", 250.0, (10_000.0, 34_130.0)),
        AltitudeBand::new("FL350", FL350_DENSITY, Sweep::new(280.0, 695.0, 10.0))
            .with_marker("Cruise Velocity", 450.0, (9_900.0, 14_200.0)),
    ]
}

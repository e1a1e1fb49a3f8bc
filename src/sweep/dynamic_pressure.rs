use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::physics::aerodynamics::dynamic_pressure;
use crate::physics::atmosphere::{atmosphere, density};
use crate::physics::kinematics::{altitude, velocity};
use crate::vehicle::AscentProfile;

use super::{sample, Series, Sweep};

/// Flight condition at the point of maximum dynamic pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxQ {
    pub index: usize,
    pub time: f64,     // s
    pub q: f64,        // lb/ft^2
    pub altitude: f64, // ft
    pub velocity: f64, // ft/s
    pub mach: f64,
}

/// q(t) for one ascent profile.
#[derive(Debug, Clone)]
pub struct DynamicPressureRun {
    pub profile: AscentProfile,
    pub series: Series,
    pub max_q: Option<MaxQ>,
}

/// Sweep elapsed time for a constant-acceleration climb and locate max-q.
///
/// Each sample evaluates altitude and velocity from the kinematics, density
/// at that altitude, and q = ½·ρ·v². The first of equal peaks is reported.
pub fn dynamic_pressure_sweep(profile: &AscentProfile, time: &Sweep) -> Result<DynamicPressureRun> {
    let a = profile.acceleration;
    debug!(profile = %profile.name, samples = time.len(), "sweeping dynamic pressure");

    let series = sample(&profile.name, time, |t| {
        dynamic_pressure(density(altitude(t, a)), velocity(t, a))
    })?;

    let max_q = series.max().map(|m| {
        let h = altitude(m.x, a);
        let v = velocity(m.x, a);
        MaxQ {
            index: m.index,
            time: m.x,
            q: m.y,
            altitude: h,
            velocity: v,
            mach: v / atmosphere(h).sound_speed,
        }
    });

    if let Some(m) = &max_q {
        info!(profile = %profile.name, q = m.q, time = m.time, altitude = m.altitude, "max-q");
    }

    Ok(DynamicPressureRun {
        profile: profile.clone(),
        series,
        max_q,
    })
}

/// Run every profile over the same time sweep. Profiles are independent.
pub fn run_profiles(profiles: &[AscentProfile], time: &Sweep) -> Result<Vec<DynamicPressureRun>> {
    profiles
        .iter()
        .map(|p| dynamic_pressure_sweep(p, time))
        .collect()
}
